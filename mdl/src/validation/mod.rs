//! Input validity for form components.
//!
//! Validity mirrors the browser's constraint validation: a field is invalid
//! when it carries a custom error, when it is required but empty, or when it
//! has a pattern its value does not fully match.
//!
//! # Example
//!
//! ```
//! use mdl::validation::{Pattern, ValidityState};
//!
//! let digits = Pattern::new("[0-9]+").unwrap();
//! assert!(ValidityState::compute("17", true, Some(&digits), None).is_valid());
//! assert!(!ValidityState::compute("value", true, Some(&digits), None).is_valid());
//! ```

mod pattern;
mod validity;

pub use pattern::{Pattern, PatternError};
pub use validity::ValidityState;
