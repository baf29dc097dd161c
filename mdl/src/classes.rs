//! Class names from the material-design-lite stylesheet.

// Textfield block
pub const TEXTFIELD: &str = "mdl-textfield";
pub const JS_TEXTFIELD: &str = "mdl-js-textfield";
pub const TEXTFIELD_FLOATING_LABEL: &str = "mdl-textfield--floating-label";
pub const TEXTFIELD_EXPANDABLE: &str = "mdl-textfield--expandable";
pub const TEXTFIELD_INPUT: &str = "mdl-textfield__input";
pub const TEXTFIELD_LABEL: &str = "mdl-textfield__label";
pub const TEXTFIELD_ERROR: &str = "mdl-textfield__error";
pub const TEXTFIELD_EXPANDABLE_HOLDER: &str = "mdl-textfield__expandable-holder";

// Icon button used as the expandable trigger
pub const BUTTON: &str = "mdl-button";
pub const JS_BUTTON: &str = "mdl-js-button";
pub const BUTTON_ICON: &str = "mdl-button--icon";
pub const MATERIAL_ICONS: &str = "material-icons";

// State
pub const IS_INVALID: &str = "is-invalid";
pub const IS_DISABLED: &str = "is-disabled";
pub const IS_DIRTY: &str = "is-dirty";
