pub mod error;
pub mod policy;
pub mod types;

#[cfg(feature = "credit")]
pub mod credit;

#[cfg(feature = "dti")]
pub mod dti;

#[cfg(feature = "risk")]
pub mod risk;

#[cfg(feature = "pricing")]
pub mod pricing;

#[cfg(feature = "pipeline")]
pub mod pipeline;

pub use error::UnderwritingError;
pub use policy::UnderwritingPolicy;
pub use types::*;

/// Standard result type for all underwriting operations
pub type UnderwritingResult<T> = Result<T, UnderwritingError>;
