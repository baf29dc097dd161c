pub mod classes;
pub mod components;
pub mod error;
pub mod validation;

pub use error::{Error, Result};

pub mod prelude {
    pub use crate::components::textfield::{Textfield, TextfieldProps, TextfieldState};
    pub use crate::error::{Error, Result};
    pub use crate::validation::{Pattern, PatternError, ValidityState};

    pub use mdldom::{Element, query_selector, to_html, to_html_pretty};
}
