//! # hatatest-core - Core Domain Types
//!
//! Foundation crate for hatatest. Provides the domain view models served by
//! the test backend, error handling, and logging setup.
//!
//! This crate has **zero internal dependencies** -- it only depends on
//! external crates (serde, chrono, thiserror, tracing).
//!
//! ## Public API
//!
//! ### Domain Types (`types`)
//! - [`Category`], [`CategoryDetail`], [`ErrorTypeInfo`] - error taxonomy
//! - [`Question`] - test questions attached to a category
//! - [`ModelCatalog`], [`ModelRef`], [`Provider`] - testable models
//! - [`TestResult`], [`Stats`], [`ModelStat`] - stored records and aggregates
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with `fatal` vs `recoverable` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use hatatest_core::prelude::*;
//! ```

pub mod error;
pub mod logging;
pub mod types;

/// Prelude for common imports used throughout all hatatest crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, instrument, trace, warn};
}

// Re-export commonly used types at crate root for convenience
pub use error::{Error, Result, ResultExt};
pub use types::{
    truncate_chars, Category, CategoryDetail, ErrorTypeInfo, ModelCatalog, ModelRef, ModelStat,
    Provider, Question, Stats, TestResult,
};
