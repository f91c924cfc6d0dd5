//! # tasbih-core - Core Domain Types
//!
//! Foundation crate for the tasbih counter. Provides domain types, the target
//! validation pipeline, the built-in dhikr catalog, error handling and logging.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, thiserror, tracing).
//!
//! ## Public API
//!
//! ### Domain Types (`types`)
//! - [`Snapshot`] - Partial capture of session fields used by undo
//! - [`FavoriteEntry`] - A saved (phrase, count, target) triple
//! - [`CustomDhikrEntry`] - A user-authored phrase name
//! - [`ThemePreference`], [`Appearance`] - Theme selection and its resolution
//! - [`SettingToggle`] - The boolean settings the user can flip
//! - [`GuardRejection`] - Expected no-op outcomes of a tap
//!
//! ### Validation (`validation`)
//! - [`validate_target()`] - Staged validation of a raw target string
//! - [`ValidationError`] - Tagged reason a target was refused
//!
//! ### Catalog (`catalog`)
//! - [`Phrase`] - A dhikr with its meaning and suggested count
//! - [`builtin_catalog()`] - The categories shipped with the app
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
//! use tasbih_core::prelude::*;
//! ```

pub mod catalog;
pub mod error;
pub mod logging;
pub mod types;
pub mod validation;

/// Prelude for common imports used throughout all tasbih crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, instrument, trace, warn};
}

// Re-export commonly used types at crate root for convenience
pub use catalog::{builtin_catalog, find_phrase, CatalogCategory, Phrase};
pub use error::{Error, Result, ResultExt};
pub use types::{
    Appearance, CustomDhikrEntry, FavoriteEntry, GuardRejection, SettingToggle, Snapshot,
    ThemePreference, MAX_COUNT,
};
pub use validation::{validate_target, ValidationError};
