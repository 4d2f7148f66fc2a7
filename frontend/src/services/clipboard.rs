//! System clipboard access through `navigator.clipboard`.

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;

use crate::{AppError, AppResult};

#[wasm_bindgen]
extern "C" {
    /// `navigator.clipboard.writeText`; throws when the API is missing.
    #[wasm_bindgen(catch, js_namespace = ["navigator", "clipboard"], js_name = "writeText")]
    fn write_text(text: &str) -> Result<js_sys::Promise, JsValue>;
}

/// Write `text` to the system clipboard.
pub async fn copy_text(text: &str) -> AppResult<()> {
    let promise =
        write_text(text).map_err(|e| AppError::Clipboard(format!("Clipboard unavailable: {:?}", e)))?;

    JsFuture::from(promise)
        .await
        .map_err(|e| AppError::Clipboard(format!("Write rejected: {:?}", e)))?;

    Ok(())
}
