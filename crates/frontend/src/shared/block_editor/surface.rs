use async_trait::async_trait;
use wasm_bindgen_futures::JsFuture;

use super::bindings;

/// What the generate flow needs from the editor.
///
/// Implemented by [`BlockNoteSurface`] for the real editor and by
/// in-memory fakes in tests.
#[async_trait(?Send)]
pub trait EditorSurface {
    /// Parses markdown through the editor and replaces the document with it.
    async fn load_markdown(&self, markdown: &str) -> Result<(), String>;

    /// Replaces the document with an already structured block list.
    async fn load_blocks(&self, blocks: &[serde_json::Value]) -> Result<(), String>;

    /// Replaces the document with an empty one.
    async fn clear(&self) -> Result<(), String>;

    /// Current heading texts, in document order.
    fn heading_texts(&self) -> Vec<String>;
}

/// The editor mounted by the host page adapter.
#[derive(Default)]
pub struct BlockNoteSurface;

impl BlockNoteSurface {
    pub fn new() -> Self {
        Self
    }

    /// Mounts the editor into `host_id`. Safe to call again after re-renders.
    pub fn mount(&self, host_id: &str) {
        if let Err(e) = bindings::editor_mount(host_id) {
            log::error!("Failed to mount editor: {:?}", e);
        }
    }
}

#[async_trait(?Send)]
impl EditorSurface for BlockNoteSurface {
    async fn load_markdown(&self, markdown: &str) -> Result<(), String> {
        let parse = bindings::editor_parse_markdown(markdown).map_err(|e| format!("{:?}", e))?;
        let blocks = JsFuture::from(parse)
            .await
            .map_err(|e| format!("{:?}", e))?;
        let replace =
            bindings::editor_replace_document(&blocks).map_err(|e| format!("{:?}", e))?;
        JsFuture::from(replace).await.map_err(|e| format!("{:?}", e))?;
        Ok(())
    }

    async fn load_blocks(&self, blocks: &[serde_json::Value]) -> Result<(), String> {
        let js_blocks = serde_wasm_bindgen::to_value(blocks).map_err(|e| e.to_string())?;
        let replace =
            bindings::editor_replace_document(&js_blocks).map_err(|e| format!("{:?}", e))?;
        JsFuture::from(replace).await.map_err(|e| format!("{:?}", e))?;
        Ok(())
    }

    async fn clear(&self) -> Result<(), String> {
        let done = bindings::editor_clear().map_err(|e| format!("{:?}", e))?;
        JsFuture::from(done).await.map_err(|e| format!("{:?}", e))?;
        Ok(())
    }

    fn heading_texts(&self) -> Vec<String> {
        match bindings::editor_heading_texts() {
            Ok(value) => serde_wasm_bindgen::from_value(value).unwrap_or_default(),
            Err(e) => {
                log::error!("Failed to read editor headings: {:?}", e);
                Vec::new()
            }
        }
    }
}
