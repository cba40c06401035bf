//! Strategies for the kernel hyperparameters tuning done by a GP model after fitting data.
//!
//! A strategy only sees the model through [`TunableModel`], so that any tuning
//! (gradient-based or derivative-free likelihood maximization) goes through the
//! [`Kernel`] contract: [`Kernel::h_params`], [`Kernel::grad`] and [`Kernel::set_h_params`].

use crate::errors::Result;
use crate::kernels::Kernel;
use linfa::Float;
use log::debug;
#[cfg(feature = "serializable")]
use serde::{Deserialize, Serialize};
use std::fmt;

/// A trait for models owning a kernel whose hyperparameters may be tuned
pub trait TunableModel<F: Float> {
    /// Kernel type used by the model
    type Kern: Kernel<F>;

    /// The model kernel
    fn kernel(&self) -> &Self::Kern;

    /// The model kernel, mutable to allow hyperparameters update
    fn kernel_mut(&mut self) -> &mut Self::Kern;
}

/// A trait for hyperparameters tuning strategies
///
/// Whatever the outcome, the model kernel is left in a valid state after `tune`
/// as hyperparameters can only be set as a whole through [`Kernel::set_h_params`].
pub trait HyperparamsOptimizer<F: Float>: Clone + Default + fmt::Display + Sync {
    /// Tune the kernel hyperparameters of the given model
    fn tune<M: TunableModel<F>>(&self, model: &mut M) -> Result<()>;
}

/// Do not optimize anything: kernel hyperparameters stay as given at construction
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "serializable",
    derive(Serialize, Deserialize),
    serde(into = "String"),
    serde(try_from = "String")
)]
pub struct NoLfOpt();

impl From<NoLfOpt> for String {
    fn from(_item: NoLfOpt) -> String {
        "NoLfOpt".to_string()
    }
}

impl TryFrom<String> for NoLfOpt {
    type Error = &'static str;
    fn try_from(s: String) -> std::result::Result<Self, Self::Error> {
        if s == "NoLfOpt" {
            Ok(Self::default())
        } else {
            Err("Bad string value for NoLfOpt, should be \'NoLfOpt\'")
        }
    }
}

impl<F: Float> HyperparamsOptimizer<F> for NoLfOpt {
    fn tune<M: TunableModel<F>>(&self, model: &mut M) -> Result<()> {
        debug!("{} => keep {}", self, model.kernel());
        Ok(())
    }
}

impl fmt::Display for NoLfOpt {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "NoLfOpt")
    }
}
