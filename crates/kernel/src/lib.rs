//! This library implements the squared exponential covariance function with
//! [Automatic Relevance Determination](https://en.wikipedia.org/wiki/Automatic_relevance_determination)
//! (ARD) used by [Gaussian Process](https://en.wikipedia.org/wiki/Gaussian_process) regression models,
//! together with the strategies deciding how its hyperparameters are tuned after fitting data.
//!
//! The kernel [SquaredExpArd] holds one length-scale per input dimension and a signal variance.
//! Hyperparameters are exposed in log-space so that an unconstrained likelihood optimizer
//! can search freely while length-scales and variance stay positive. Analytic derivatives
//! with respect to these log-space hyperparameters are provided by [Kernel::grad].
//!
//! Kernel construction is parameterized by [SquaredExpArdParams]. Tuning strategies
//! implement [HyperparamsOptimizer], [NoLfOpt] being the one keeping hyperparameters unchanged.
//!
//! # Features
//!
//! ## serializable
//!
//! The `serializable` feature enables the serialization of kernels using the [`serde crate`](https://serde.rs/).
//! Only log-space hyperparameters are stored.
//!
//! ## persistent
//!
//! The `persistent` feature enables `save()` and `load()` of kernels as json files.
//!
//! # Example
//!
//! ```
//! use ardbox_kernel::{Kernel, SquaredExpArd};
//! use ndarray::array;
//!
//! let mut kernel = SquaredExpArd::<f64>::new(2);
//! kernel.set_h_params(&array![0., 2f64.ln(), 0.]).expect("3 hyperparameters");
//!
//! let k = kernel.value(&array![0., 0.], &array![1., 2.]).expect("2d inputs");
//! assert!((k - f64::exp(-1.)).abs() < 1e-12);
//!
//! let grad = kernel.grad(&array![0., 0.], &array![1., 2.]).expect("2d inputs");
//! assert_eq!(3, grad.len());
//! ```
#![warn(missing_docs)]
#![warn(rustdoc::broken_intra_doc_links)]
mod errors;
pub mod kernels;
mod parameters;
pub mod tuning;
mod utils;

pub use errors::*;
pub use kernels::{Kernel, SquaredExpArd};
pub use parameters::*;
pub use tuning::{HyperparamsOptimizer, NoLfOpt, TunableModel};
