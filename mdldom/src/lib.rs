pub mod element;
pub mod render;
pub mod types;

pub use element::{find_element, query_selector, query_selector_all, Content, Element, Selector};
pub use render::{to_html, to_html_pretty};
pub use types::*;
