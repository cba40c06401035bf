//! A module for covariance functions (kernels) with log-space hyperparameters
//! to be used with a likelihood optimizer.
//!
//! The following kernel is implemented:
//! * squared exponential with automatic relevance determination (ARD).

use crate::errors::Result;
use crate::parameters::{SquaredExpArdParams, SquaredExpArdValidParams};
use crate::utils::{check_len, scaled_sq_differences};
use linfa::Float;
use log::{debug, trace};
use ndarray::{s, Array1, Array2, Array3, ArrayBase, Data, Ix1, Ix2};
#[cfg(feature = "serializable")]
use serde::{Deserialize, Serialize};
use std::fmt;

/// A trait for a covariance function whose hyperparameters are handled in log-space.
///
/// This is the contract a GP model relies on to build its covariance matrices
/// and an hyperparameters optimizer relies on to get the likelihood gradient.
pub trait Kernel<F: Float>: Clone + fmt::Display + Sync {
    /// Returns the dimension of the input vectors
    fn input_dim(&self) -> usize;

    /// Returns the number of hyperparameters
    fn h_params_size(&self) -> usize;

    /// Returns a copy of the hyperparameters in log-space
    fn h_params(&self) -> Array1<F>;

    /// Replaces all the hyperparameters given in log-space.
    ///
    /// The kernel is left untouched when `p` length is not [`Kernel::h_params_size`].
    fn set_h_params(&mut self, p: &ArrayBase<impl Data<Elem = F>, Ix1>) -> Result<()>;

    /// Computes the covariance `k(x1, x2)`
    fn value(
        &self,
        x1: &ArrayBase<impl Data<Elem = F>, Ix1>,
        x2: &ArrayBase<impl Data<Elem = F>, Ix1>,
    ) -> Result<F>;

    /// Computes the partial derivatives of `k(x1, x2)` with respect to
    /// each log-space hyperparameter, in [`Kernel::h_params`] order.
    fn grad(
        &self,
        x1: &ArrayBase<impl Data<Elem = F>, Ix1>,
        x2: &ArrayBase<impl Data<Elem = F>, Ix1>,
    ) -> Result<Array1<F>>;

    /// Computes the (n, m) covariance matrix between `xa` (n, nx) and `xb` (m, nx) points
    fn covariance_matrix(
        &self,
        xa: &ArrayBase<impl Data<Elem = F>, Ix2>,
        xb: &ArrayBase<impl Data<Elem = F>, Ix2>,
    ) -> Result<Array2<F>> {
        check_len("xa columns", self.input_dim(), xa.ncols())?;
        check_len("xb columns", self.input_dim(), xb.ncols())?;
        let mut k = Array2::zeros((xa.nrows(), xb.nrows()));
        for (mut k_i, xa_i) in k.rows_mut().into_iter().zip(xa.rows()) {
            for (k_ij, xb_j) in k_i.iter_mut().zip(xb.rows()) {
                *k_ij = self.value(&xa_i, &xb_j)?;
            }
        }
        Ok(k)
    }

    /// Computes the derivatives of the covariance matrix between `xa` (n, nx) and `xb` (m, nx)
    /// with respect to the log-space hyperparameters as a (h_params_size, n, m) array
    /// where the p-th slice is `dK/dh_params[p]`.
    fn grad_matrices(
        &self,
        xa: &ArrayBase<impl Data<Elem = F>, Ix2>,
        xb: &ArrayBase<impl Data<Elem = F>, Ix2>,
    ) -> Result<Array3<F>> {
        check_len("xa columns", self.input_dim(), xa.ncols())?;
        check_len("xb columns", self.input_dim(), xb.ncols())?;
        let mut dk = Array3::zeros((self.h_params_size(), xa.nrows(), xb.nrows()));
        for (i, xa_i) in xa.rows().into_iter().enumerate() {
            for (j, xb_j) in xb.rows().into_iter().enumerate() {
                dk.slice_mut(s![.., i, j]).assign(&self.grad(&xa_i, &xb_j)?);
            }
        }
        Ok(dk)
    }
}

/// Squared exponential covariance function with automatic relevance determination
///
/// ```text
/// k(x, y) = sf2 * exp( -1/2 * sum_i ((x_i - y_i) / l_i)^2 )
/// ```
///
/// with `l_1, ..., l_d` the characteristic length-scales and `sf2` the signal variance.
///
/// Hyperparameters are given in log-space as `[log(l_1), ..., log(l_d), log(sqrt(sf2))]`
/// which guarantees positive length-scales and variance whatever the values
/// chosen by an unconstrained optimizer.
///
/// Reference: Rasmussen & Williams, Gaussian Processes for Machine Learning, 2006, p. 106
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serializable",
    derive(Serialize, Deserialize),
    serde(into = "SquaredExpArdRepr<F>"),
    serde(try_from = "SquaredExpArdRepr<F>"),
    serde(bound(
        serialize = "F: Serialize",
        deserialize = "F: Deserialize<'de>"
    ))
)]
pub struct SquaredExpArd<F: Float> {
    input_dim: usize,
    /// Length-scales, derived from `h_params`
    ell: Array1<F>,
    /// Signal variance, derived from `h_params`
    sf2: F,
    /// Hyperparameters in log-space
    h_params: Array1<F>,
}

impl<F: Float> Default for SquaredExpArd<F> {
    fn default() -> Self {
        Self::from_params(&SquaredExpArdValidParams::default())
    }
}

impl<F: Float> SquaredExpArd<F> {
    /// Kernel with unit length-scales and unit signal variance
    /// for inputs of dimension `input_dim`.
    ///
    /// *Panics* if `input_dim` is 0, see [`SquaredExpArd::try_new`]
    pub fn new(input_dim: usize) -> Self {
        assert!(input_dim > 0, "input dimension should be at least 1");
        Self::from_params(&SquaredExpArdValidParams {
            input_dim,
            ..Default::default()
        })
    }

    /// Kernel with unit length-scales and unit signal variance
    /// for inputs of dimension `input_dim`, fails if `input_dim` is 0.
    pub fn try_new(input_dim: usize) -> Result<Self> {
        Self::params(input_dim).build()
    }

    /// Parameters to build a kernel for inputs of dimension `input_dim`
    pub fn params(input_dim: usize) -> SquaredExpArdParams<F> {
        SquaredExpArdParams::new(input_dim)
    }

    /// Kernel built from validated parameters
    pub fn from_params(params: &SquaredExpArdValidParams<F>) -> Self {
        let input_dim = params.input_dim();
        let mut kernel = SquaredExpArd {
            input_dim,
            ell: Array1::ones(input_dim),
            sf2: F::one(),
            h_params: Array1::zeros(input_dim + 1),
        };
        kernel.update(params.init_h_params());
        debug!("Kernel built: {kernel}");
        kernel
    }

    /// Length-scales `[l_1, ..., l_d]`
    pub fn length_scales(&self) -> &Array1<F> {
        &self.ell
    }

    /// Signal variance `sf2`
    pub fn signal_variance(&self) -> F {
        self.sf2
    }

    fn update(&mut self, h_params: Array1<F>) {
        let d = self.input_dim;
        self.ell = h_params.slice(s![..d]).mapv(F::exp);
        self.sf2 = F::exp(F::cast(2.) * h_params[d]);
        self.h_params = h_params;
    }

    fn check_inputs(
        &self,
        x1: &ArrayBase<impl Data<Elem = F>, Ix1>,
        x2: &ArrayBase<impl Data<Elem = F>, Ix1>,
    ) -> Result<()> {
        check_len("x1", self.input_dim, x1.len())?;
        check_len("x2", self.input_dim, x2.len())
    }
}

impl<F: Float> Kernel<F> for SquaredExpArd<F> {
    fn input_dim(&self) -> usize {
        self.input_dim
    }

    fn h_params_size(&self) -> usize {
        self.input_dim + 1
    }

    fn h_params(&self) -> Array1<F> {
        self.h_params.to_owned()
    }

    fn set_h_params(&mut self, p: &ArrayBase<impl Data<Elem = F>, Ix1>) -> Result<()> {
        check_len("h_params", self.h_params_size(), p.len())?;
        trace!("Set kernel h_params = {p}");
        self.update(p.to_owned());
        Ok(())
    }

    /// No clamping is applied to the log-space hyperparameters: in `f64` a length-scale
    /// log-value below about `-745` underflows `l_i` to `0` and the result is then `NaN`,
    /// even for `x1 == x2`. Keeping the values in a sane range is up to the optimizer.
    fn value(
        &self,
        x1: &ArrayBase<impl Data<Elem = F>, Ix1>,
        x2: &ArrayBase<impl Data<Elem = F>, Ix1>,
    ) -> Result<F> {
        self.check_inputs(x1, x2)?;
        let z = scaled_sq_differences(x1, x2, &self.ell).sum();
        Ok(self.sf2 * F::exp(F::cast(-0.5) * z))
    }

    /// ```text
    /// dk/dlog(l_i) = ((x1_i - x2_i) / l_i)^2 * k
    /// dk/dlog(sqrt(sf2)) = 2 * k
    /// ```
    fn grad(
        &self,
        x1: &ArrayBase<impl Data<Elem = F>, Ix1>,
        x2: &ArrayBase<impl Data<Elem = F>, Ix1>,
    ) -> Result<Array1<F>> {
        self.check_inputs(x1, x2)?;
        let z = scaled_sq_differences(x1, x2, &self.ell);
        let k = self.sf2 * F::exp(F::cast(-0.5) * z.sum());

        let mut grad = Array1::zeros(self.h_params_size());
        grad.slice_mut(s![..self.input_dim]).assign(&(z * k));
        grad[self.input_dim] = F::cast(2.) * k;
        Ok(grad)
    }
}

impl<F: Float> fmt::Display for SquaredExpArd<F> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "SquaredExpArd(dim={}, ell={}, sf2={})",
            self.input_dim, self.ell, self.sf2
        )
    }
}

/// Serialized form of [`SquaredExpArd`]: log-space hyperparameters are the
/// only stored values, natural-space ones are derived on loading.
#[cfg(feature = "serializable")]
#[derive(Serialize, Deserialize)]
pub struct SquaredExpArdRepr<F> {
    input_dim: usize,
    h_params: Vec<F>,
}

#[cfg(feature = "serializable")]
impl<F: Float> From<SquaredExpArd<F>> for SquaredExpArdRepr<F> {
    fn from(kernel: SquaredExpArd<F>) -> Self {
        SquaredExpArdRepr {
            input_dim: kernel.input_dim,
            h_params: kernel.h_params.to_vec(),
        }
    }
}

#[cfg(feature = "serializable")]
impl<F: Float> TryFrom<SquaredExpArdRepr<F>> for SquaredExpArd<F> {
    type Error = crate::errors::KernelError;

    fn try_from(repr: SquaredExpArdRepr<F>) -> Result<Self> {
        let mut kernel = SquaredExpArd::try_new(repr.input_dim)?;
        kernel.set_h_params(&Array1::from_vec(repr.h_params))?;
        Ok(kernel)
    }
}

#[cfg(feature = "persistent")]
impl<F: Float + Serialize + serde::de::DeserializeOwned> SquaredExpArd<F> {
    /// Save kernel hyperparameters in given file as json.
    pub fn save<P: AsRef<std::path::Path>>(&self, path: P) -> Result<()> {
        let bytes = serde_json::to_vec(self)?;
        std::fs::write(path, bytes)?;
        Ok(())
    }

    /// Load kernel from the given json file.
    pub fn load<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let data = std::fs::read(path)?;
        let kernel = serde_json::from_slice(&data)?;
        Ok(kernel)
    }
}
