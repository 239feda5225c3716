// DOM clipboard backend implementation

use super::{ClipboardBackend, ClipboardError};

/// Clipboard backend that copies through an off-screen `<textarea>`
#[derive(Debug, Default, Clone, Copy)]
pub struct DomClipboardBackend;

impl DomClipboardBackend {
    pub fn new() -> Self {
        Self
    }
}

// WASM implementation using web-sys
#[cfg(target_arch = "wasm32")]
mod wasm_impl {
    use super::*;
    use wasm_bindgen::{JsCast, JsValue};
    use web_sys::{HtmlDocument, HtmlTextAreaElement};

    fn dom_error(value: JsValue) -> ClipboardError {
        ClipboardError::Dom(format!("{:?}", value))
    }

    /// Temporary copy buffer attached to `<body>`; detached on drop
    struct ScopedTextArea {
        element: HtmlTextAreaElement,
    }

    impl ScopedTextArea {
        fn attach(document: &HtmlDocument, text: &str) -> Result<Self, ClipboardError> {
            let body = document.body().ok_or(ClipboardError::NoDocument)?;
            let element = document
                .create_element("textarea")
                .map_err(dom_error)?
                .dyn_into::<HtmlTextAreaElement>()
                .map_err(|_| ClipboardError::Dom("not a textarea".to_string()))?;

            element.set_value(text);
            element.set_attribute("readonly", "").map_err(dom_error)?;
            let style = element.style();
            style.set_property("position", "absolute").map_err(dom_error)?;
            style.set_property("left", "-9999px").map_err(dom_error)?;

            body.append_child(&element).map_err(dom_error)?;
            Ok(Self { element })
        }
    }

    impl Drop for ScopedTextArea {
        fn drop(&mut self) {
            self.element.remove();
        }
    }

    impl ClipboardBackend for DomClipboardBackend {
        fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
            let document = web_sys::window()
                .and_then(|window| window.document())
                .ok_or(ClipboardError::NoDocument)?
                .dyn_into::<HtmlDocument>()
                .map_err(|_| ClipboardError::NoDocument)?;

            let buffer = ScopedTextArea::attach(&document, text)?;
            buffer.element.select();

            match document.exec_command("copy") {
                Ok(true) => Ok(()),
                Ok(false) => Err(ClipboardError::CopyRejected),
                Err(e) => Err(dom_error(e)),
            }
        }
    }
}

// Stub implementation for non-WASM targets
#[cfg(not(target_arch = "wasm32"))]
impl ClipboardBackend for DomClipboardBackend {
    fn write_text(&self, _text: &str) -> Result<(), ClipboardError> {
        Err(ClipboardError::Unsupported)
    }
}
