use base64::{engine::general_purpose::STANDARD, Engine as _};
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;
use web_sys::File;

/// Reads `file` into a `data:` URL for the preview pane.
pub async fn read_as_data_url(file: &File) -> Result<String, JsValue> {
    let buffer = JsFuture::from(file.array_buffer()).await?;
    let bytes = js_sys::Uint8Array::new(&buffer).to_vec();
    let mime = file.type_();
    let mime = if mime.is_empty() { "application/octet-stream".to_string() } else { mime };
    Ok(format!("data:{};base64,{}", mime, STANDARD.encode(bytes)))
}

pub fn log_error(context: &str, err: impl std::fmt::Display) {
    web_sys::console::error_1(&format!("{}: {}", context, err).into());
}

/// `window.confirm`, treating a missing window as "no".
pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|window| window.confirm_with_message(message).ok())
        .unwrap_or(false)
}
