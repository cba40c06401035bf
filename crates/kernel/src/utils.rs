use crate::errors::{KernelError, Result};
use linfa::Float;
use ndarray::{Array1, ArrayBase, Data, Ix1, Zip};

/// Returns a [`KernelError::DimensionMismatch`] when `actual` differs from `expected`
pub(crate) fn check_len(what: &'static str, expected: usize, actual: usize) -> Result<()> {
    if expected == actual {
        Ok(())
    } else {
        Err(KernelError::DimensionMismatch {
            what,
            expected,
            actual,
        })
    }
}

/// Computes component-wise `((x1_i - x2_i) / ell_i)^2`
/// resulting in a 1d array of the same length as `ell`.
/// *Panics* if `x1`, `x2` and `ell` have not the same length
pub(crate) fn scaled_sq_differences<F: Float>(
    x1: &ArrayBase<impl Data<Elem = F>, Ix1>,
    x2: &ArrayBase<impl Data<Elem = F>, Ix1>,
    ell: &ArrayBase<impl Data<Elem = F>, Ix1>,
) -> Array1<F> {
    Zip::from(x1).and(x2).and(ell).map_collect(|&a, &b, &l| {
        let z = (a - b) / l;
        z * z
    })
}
