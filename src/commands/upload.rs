//! Image Upload Command

use folio_core::upload::{parse_upload_response, upload_url, FILE_FIELD, PRESET_FIELD};
use folio_core::{FolioError, FolioResult};
use reqwest::multipart::{Form, Part};
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;

use super::service_error;

/// A rejected file read, described by its message when the browser gave one.
fn read_error(name: &str, err: &JsValue) -> FolioError {
    let reason = err.as_string().unwrap_or_else(|| format!("{:?}", err));
    FolioError::service(format!("could not read {}: {}", name, reason))
}

/// Upload `file` under an unsigned preset and return its hosted URL.
pub async fn upload_image(cloud_name: &str, preset: &str, file: web_sys::File) -> FolioResult<String> {
    let name = file.name();
    let buffer = JsFuture::from(file.array_buffer())
        .await
        .map_err(|e| read_error(&name, &e))?;
    let bytes = js_sys::Uint8Array::new(&buffer).to_vec();
    log::debug!("uploading {} ({} bytes) with preset {}", name, bytes.len(), preset);

    let form = Form::new()
        .text(PRESET_FIELD, preset.to_string())
        .part(FILE_FIELD, Part::bytes(bytes).file_name(name));

    let resp = reqwest::Client::new()
        .post(upload_url(cloud_name))
        .multipart(form)
        .send()
        .await
        .map_err(service_error)?;
    let status = resp.status().as_u16();
    let body = resp.text().await.map_err(service_error)?;

    let url = parse_upload_response(status, &body)?;
    log::info!("uploaded image to {}", url);
    Ok(url)
}
