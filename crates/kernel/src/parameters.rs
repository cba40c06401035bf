use crate::errors::{KernelError, Result};
use crate::kernels::SquaredExpArd;
use linfa::{Float, ParamGuard};
use ndarray::Array1;

/// A set of validated squared exponential ARD kernel parameters.
#[derive(Clone, Debug, PartialEq)]
pub struct SquaredExpArdValidParams<F: Float> {
    /// Dimension of the input vectors
    pub(crate) input_dim: usize,
    /// Initial signal variance
    pub(crate) sigma_sq: F,
    /// Initial length-scales, all ones when not given
    pub(crate) length_scales: Option<Array1<F>>,
    /// Number of columns of the low-rank metric factor
    pub(crate) k: usize,
}

impl<F: Float> Default for SquaredExpArdValidParams<F> {
    fn default() -> SquaredExpArdValidParams<F> {
        SquaredExpArdValidParams {
            input_dim: 1,
            sigma_sq: F::cast(Self::DEFAULT_SIGMA_SQ),
            length_scales: None,
            k: Self::DEFAULT_K,
        }
    }
}

impl<F: Float> SquaredExpArdValidParams<F> {
    /// Default initial signal variance
    pub const DEFAULT_SIGMA_SQ: f64 = 1.;
    /// Default rank of the low-rank metric factor, 0 being the plain ARD kernel
    pub const DEFAULT_K: usize = 0;

    /// Get input dimension
    pub fn input_dim(&self) -> usize {
        self.input_dim
    }

    /// Get initial signal variance
    pub fn sigma_sq(&self) -> F {
        self.sigma_sq
    }

    /// Get initial length-scales if any
    pub fn length_scales(&self) -> Option<&Array1<F>> {
        self.length_scales.as_ref()
    }

    /// Get rank of the low-rank metric factor
    pub fn k(&self) -> usize {
        self.k
    }

    /// Initial hyperparameters in log-space:
    /// `[log(l_1), ..., log(l_d), log(sqrt(sigma_sq))]`
    pub fn init_h_params(&self) -> Array1<F> {
        let mut h_params = Array1::zeros(self.input_dim + 1);
        if let Some(ell) = &self.length_scales {
            h_params
                .slice_mut(ndarray::s![..self.input_dim])
                .assign(&ell.mapv(|v| v.ln()));
        }
        h_params[self.input_dim] = F::cast(0.5) * self.sigma_sq.ln();
        h_params
    }
}

#[derive(Clone, Debug)]
/// The set of parameters that can be specified to build a
/// [squared exponential ARD kernel](SquaredExpArd).
pub struct SquaredExpArdParams<F: Float>(SquaredExpArdValidParams<F>);

impl<F: Float> SquaredExpArdParams<F> {
    /// A constructor for kernel parameters given the input dimension
    pub fn new(input_dim: usize) -> SquaredExpArdParams<F> {
        Self(SquaredExpArdValidParams {
            input_dim,
            ..Default::default()
        })
    }

    /// A constructor for kernel parameters from validated parameters
    pub fn new_from_valid(params: &SquaredExpArdValidParams<F>) -> Self {
        Self(params.clone())
    }

    /// Set the initial signal variance.
    /// Should be finite and strictly positive
    pub fn sigma_sq(mut self, sigma_sq: F) -> Self {
        self.0.sigma_sq = sigma_sq;
        self
    }

    /// Set the initial length-scales, one per input dimension.
    /// Should be finite and strictly positive
    pub fn length_scales(mut self, length_scales: Array1<F>) -> Self {
        self.0.length_scales = Some(length_scales);
        self
    }

    /// Set the number of columns of the low-rank factor of the metric.
    ///
    /// Only `k = 0` (plain ARD) is available.
    pub fn k(mut self, k: usize) -> Self {
        self.0.k = k;
        self
    }

    /// Check the parameters and build the corresponding kernel
    pub fn build(self) -> Result<SquaredExpArd<F>> {
        let valid = self.check()?;
        Ok(SquaredExpArd::from_params(&valid))
    }
}

impl<F: Float> From<SquaredExpArdValidParams<F>> for SquaredExpArdParams<F> {
    fn from(valid: SquaredExpArdValidParams<F>) -> Self {
        SquaredExpArdParams(valid)
    }
}

impl<F: Float> ParamGuard for SquaredExpArdParams<F> {
    type Checked = SquaredExpArdValidParams<F>;
    type Error = KernelError;

    fn check_ref(&self) -> Result<&Self::Checked> {
        if self.0.input_dim == 0 {
            return Err(KernelError::InvalidValueError(
                "`input_dim` cannot be 0!".to_string(),
            ));
        }
        if !(self.0.sigma_sq.is_finite() && self.0.sigma_sq > F::zero()) {
            return Err(KernelError::InvalidValueError(format!(
                "`sigma_sq` should be finite and strictly positive, got {}",
                self.0.sigma_sq
            )));
        }
        if let Some(ell) = &self.0.length_scales {
            if ell.len() != self.0.input_dim {
                return Err(KernelError::DimensionMismatch {
                    what: "length_scales",
                    expected: self.0.input_dim,
                    actual: ell.len(),
                });
            }
            if ell.iter().any(|v| !(v.is_finite() && *v > F::zero())) {
                return Err(KernelError::InvalidValueError(format!(
                    "`length_scales` should be finite and strictly positive, got {ell}"
                )));
            }
        }
        if self.0.k != 0 {
            return Err(KernelError::NotImplemented(format!(
                "low-rank metric factor (k = {}), only k = 0 is available",
                self.0.k
            )));
        }
        Ok(&self.0)
    }

    fn check(self) -> Result<Self::Checked> {
        self.check_ref()?;
        Ok(self.0)
    }
}
