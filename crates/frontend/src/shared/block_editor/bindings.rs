//! Raw bindings to the host page's editor adapter.
//!
//! `assets/editor.js` defines these functions on the global scope. The
//! editor's block representation stays opaque on this side: parsing
//! markdown into blocks belongs to the editor library, so blocks only
//! travel through here as `JsValue`.

use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    /// Mounts the editor into the element with the given id. Idempotent.
    #[wasm_bindgen(js_name = editorMount, catch)]
    pub fn editor_mount(host_id: &str) -> Result<(), JsValue>;

    /// Parses markdown into the editor's own block representation.
    #[wasm_bindgen(js_name = editorParseMarkdown, catch)]
    pub fn editor_parse_markdown(markdown: &str) -> Result<js_sys::Promise, JsValue>;

    /// Replaces the whole document with the given block array.
    #[wasm_bindgen(js_name = editorReplaceDocument, catch)]
    pub fn editor_replace_document(blocks: &JsValue) -> Result<js_sys::Promise, JsValue>;

    /// Text of every heading block, in document order.
    #[wasm_bindgen(js_name = editorHeadingTexts, catch)]
    pub fn editor_heading_texts() -> Result<JsValue, JsValue>;

    /// Replaces the document with an empty one.
    #[wasm_bindgen(js_name = editorClear, catch)]
    pub fn editor_clear() -> Result<js_sys::Promise, JsValue>;
}
