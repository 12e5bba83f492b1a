use crate::core::{AudioError, DEFAULT_AUDIO_CANDIDATES};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

async fn fetch_bytes(url: &str) -> anyhow::Result<js_sys::ArrayBuffer> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let resp_value = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(|e| anyhow::anyhow!("fetch {}: {:?}", url, e))?;
    let resp: web::Response = resp_value
        .dyn_into()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    if !resp.ok() {
        anyhow::bail!("{} -> HTTP {}", url, resp.status());
    }
    let body = resp
        .array_buffer()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    let buf = JsFuture::from(body)
        .await
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    buf.dyn_into::<js_sys::ArrayBuffer>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))
}

/// Fetch the first bundled default audio file that exists, relative to the
/// page root. Returns its name and encoded bytes.
pub async fn fetch_default_audio() -> Result<(String, js_sys::ArrayBuffer), AudioError> {
    for name in DEFAULT_AUDIO_CANDIDATES {
        let url = format!("/{}", String::from(js_sys::encode_uri_component(name)));
        match fetch_bytes(&url).await {
            Ok(bytes) => {
                log::info!("[assets] default audio found: {}", name);
                return Ok((name.to_string(), bytes));
            }
            Err(e) => log::debug!("[assets] {} unavailable: {:?}", name, e),
        }
    }
    Err(AudioError::AssetNotFound(DEFAULT_AUDIO_CANDIDATES.join(", ")))
}

/// Read a user-selected file into memory.
pub async fn read_file(file: &web::File) -> anyhow::Result<js_sys::ArrayBuffer> {
    let buf = JsFuture::from(file.array_buffer())
        .await
        .map_err(|e| anyhow::anyhow!("read {}: {:?}", file.name(), e))?;
    buf.dyn_into::<js_sys::ArrayBuffer>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))
}
