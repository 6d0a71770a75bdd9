/// How samples outside the grid are synthesised.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum BoundaryMode {
    /// Whole-sample reflection about the edge pixel: `d c b | a b c d | c b a`.
    ///
    /// Keeps the parity of every index, so a 2x2 CFA tile stays aligned
    /// across the border.
    Mirror,
    /// Every outside sample reads as the given value.
    Constant(f64),
}

impl BoundaryMode {
    /// Map `index` onto `0..len`, or `None` when the sample comes from the
    /// constant fill.
    #[inline]
    pub(crate) fn resolve(self, index: isize, len: usize) -> Option<usize> {
        if (0..len as isize).contains(&index) {
            return Some(index as usize);
        }
        match self {
            Self::Mirror => Some(mirror_index(index, len)),
            Self::Constant(_) => None,
        }
    }

    #[inline]
    pub(crate) fn fill(self) -> f64 {
        match self {
            Self::Constant(value) => value,
            _ => 0.0,
        }
    }
}

fn mirror_index(index: isize, len: usize) -> usize {
    if len <= 1 {
        return 0;
    }
    let period = 2 * (len as isize - 1);
    let folded = index.rem_euclid(period);
    if folded < len as isize {
        folded as usize
    } else {
        (period - folded) as usize
    }
}
