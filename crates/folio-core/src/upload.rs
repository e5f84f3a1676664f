//! Unsigned image uploads to the media host.

use serde::Deserialize;

use crate::error::{FolioError, FolioResult};

const UPLOAD_ROOT: &str = "https://api.cloudinary.com/v1_1";

/// Multipart field carrying the image
pub const FILE_FIELD: &str = "file";
/// Multipart field naming the unsigned preset
pub const PRESET_FIELD: &str = "upload_preset";

pub fn upload_url(cloud_name: &str) -> String {
    format!("{}/{}/image/upload", UPLOAD_ROOT, cloud_name)
}

#[derive(Debug, Clone, Deserialize)]
pub struct UploadResponse {
    pub secure_url: String,
}

/// Hosted URL from an upload response. Any non-2xx status is a failure.
pub fn parse_upload_response(status: u16, body: &str) -> FolioResult<String> {
    if !(200..300).contains(&status) {
        return Err(FolioError::service(format!("Image upload failed ({})", status)));
    }
    let resp: UploadResponse =
        serde_json::from_str(body).map_err(|e| FolioError::Decode(format!("upload response: {}", e)))?;
    Ok(resp.secure_url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upload_url() {
        assert_eq!(upload_url("demo"), "https://api.cloudinary.com/v1_1/demo/image/upload");
    }

    #[test]
    fn test_parse_response() {
        let url = parse_upload_response(200, r#"{"secure_url":"https://res/x.png","width":10}"#).unwrap();
        assert_eq!(url, "https://res/x.png");
        assert!(matches!(parse_upload_response(400, "{}"), Err(FolioError::Service(_))));
        assert!(matches!(parse_upload_response(200, "{}"), Err(FolioError::Decode(_))));
    }
}
