use thiserror::Error;

/// A result type for kernel computations
pub type Result<T> = std::result::Result<T, KernelError>;

/// An error when using a [`Kernel`](crate::Kernel) or building it from its parameters
#[derive(Error, Debug)]
pub enum KernelError {
    /// When a vector does not have the length expected by the kernel
    #[error("Dimension mismatch on {what}: expected {expected}, got {actual}")]
    DimensionMismatch {
        /// Name of the offending argument
        what: &'static str,
        /// Expected length
        expected: usize,
        /// Actual length
        actual: usize,
    },
    /// When error due to a bad value
    #[error("InvalidValue error: {0}")]
    InvalidValueError(String),
    /// When a documented but not yet available feature is requested
    #[error("Not implemented: {0}")]
    NotImplemented(String),
    /// When error during saving
    #[cfg(feature = "persistent")]
    #[error("Save error: {0}")]
    SaveError(#[from] serde_json::Error),
    /// When error during loading
    #[error("Load IO error")]
    LoadIoError(#[from] std::io::Error),
}
