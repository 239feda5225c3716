// Components module

pub mod preview;
pub mod snippet_button;
pub mod style_form;
pub mod style_input;

pub use preview::{Preview, PreviewButton};
pub use snippet_button::SnippetButton;
pub use style_form::StyleForm;
pub use style_input::{FieldChange, StyleInput};
