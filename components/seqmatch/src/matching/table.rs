//! Prefix-length table for the longest common subsequence.

/// `(rows + 1) x (cols + 1)` table where cell `(i, j)` is the LCS length of
/// `left[..i]` and `right[..j]`. Row 0 and column 0 stay zero.
pub(crate) struct LengthTable {
    width: usize,
    cells: Vec<usize>,
}

impl LengthTable {
    /// Fills the table bottom-up.
    pub(crate) fn build<T: PartialEq>(left: &[T], right: &[T]) -> Self {
        let width = right.len() + 1;
        let mut cells = vec![0; (left.len() + 1) * width];

        for (i, l) in left.iter().enumerate() {
            let prev = i * width;
            let curr = prev + width;
            for (j, r) in right.iter().enumerate() {
                cells[curr + j + 1] = if l == r {
                    cells[prev + j] + 1
                } else {
                    cells[curr + j].max(cells[prev + j + 1])
                };
            }
        }

        Self { width, cells }
    }

    #[inline]
    pub(crate) fn get(&self, i: usize, j: usize) -> usize {
        self.cells[i * self.width + j]
    }

    /// Length of the full LCS.
    pub(crate) fn total(&self) -> usize {
        self.cells.last().copied().unwrap_or(0)
    }
}

/// LCS length using two rolling rows over the shorter input.
pub(crate) fn rolling_length<T: PartialEq>(left: &[T], right: &[T]) -> usize {
    let (outer, inner) = if left.len() >= right.len() {
        (left, right)
    } else {
        (right, left)
    };
    if inner.is_empty() {
        return 0;
    }

    let mut prev = vec![0; inner.len() + 1];
    let mut curr = vec![0; inner.len() + 1];

    for o in outer {
        for (j, i) in inner.iter().enumerate() {
            curr[j + 1] = if o == i {
                prev[j] + 1
            } else {
                curr[j].max(prev[j + 1])
            };
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[inner.len()]
}
