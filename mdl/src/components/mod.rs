//! Material components.

pub mod textfield;

pub use textfield::{Textfield, TextfieldProps, TextfieldState};
