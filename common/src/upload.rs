//! アップロードファイルのクライアント側検証

use crate::error::ValidationError;

/// 最大ファイルサイズ（16MB、この値ちょうどは許可）
pub const MAX_UPLOAD_BYTES: u64 = 16 * 1024 * 1024;

/// 許可するMIMEタイプ
pub const ALLOWED_MIME_TYPES: [&str; 7] = [
    "image/png",
    "image/jpeg",
    "image/jpg",
    "image/gif",
    "image/bmp",
    "image/tiff",
    "application/pdf",
];

/// `<input type="file">` の accept 属性値
pub const ACCEPT_ATTRIBUTE: &str = ".pdf,.png,.jpg,.jpeg,.gif,.bmp,.tiff,.tif";

/// アップロード対象ファイルのメタ情報
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadMeta {
    pub name: String,
    pub mime: String,
    pub size: u64,
}

impl UploadMeta {
    pub fn new(name: impl Into<String>, mime: impl Into<String>, size: u64) -> Self {
        Self {
            name: name.into(),
            mime: mime.into(),
            size,
        }
    }
}

pub fn is_allowed_mime(mime: &str) -> bool {
    let mime = mime.trim().to_ascii_lowercase();
    ALLOWED_MIME_TYPES.iter().any(|&allowed| allowed == mime)
}

/// 拡張子からMIMEタイプを推定（サーバー側の拡張子許可リストと同じ範囲）
pub fn mime_for_extension(ext: &str) -> Option<&'static str> {
    match ext.to_ascii_lowercase().as_str() {
        "png" => Some("image/png"),
        "jpg" | "jpeg" => Some("image/jpeg"),
        "gif" => Some("image/gif"),
        "bmp" => Some("image/bmp"),
        "tif" | "tiff" => Some("image/tiff"),
        "pdf" => Some("application/pdf"),
        _ => None,
    }
}

/// 種別 → サイズの順に検証
pub fn validate_upload(meta: &UploadMeta) -> Result<(), ValidationError> {
    if !is_allowed_mime(&meta.mime) {
        return Err(ValidationError::UnsupportedFileType(meta.mime.clone()));
    }
    if meta.size > MAX_UPLOAD_BYTES {
        return Err(ValidationError::FileTooLarge(meta.size));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allowed_types() {
        for mime in ALLOWED_MIME_TYPES {
            assert!(validate_upload(&UploadMeta::new("f", mime, 10)).is_ok(), "{}", mime);
        }
        assert!(is_allowed_mime("IMAGE/PNG"));
    }

    #[test]
    fn test_rejects_other_types() {
        for mime in ["text/plain", "image/webp", "application/zip", ""] {
            let result = validate_upload(&UploadMeta::new("f", mime, 10));
            assert!(matches!(result, Err(ValidationError::UnsupportedFileType(_))), "{}", mime);
        }
    }

    #[test]
    fn test_size_boundary() {
        let exact = UploadMeta::new("scan.pdf", "application/pdf", MAX_UPLOAD_BYTES);
        assert!(validate_upload(&exact).is_ok());

        let over = UploadMeta::new("scan.pdf", "application/pdf", MAX_UPLOAD_BYTES + 1);
        assert_eq!(
            validate_upload(&over),
            Err(ValidationError::FileTooLarge(MAX_UPLOAD_BYTES + 1))
        );
    }

    #[test]
    fn test_type_checked_before_size() {
        let meta = UploadMeta::new("big.txt", "text/plain", MAX_UPLOAD_BYTES * 2);
        assert!(matches!(validate_upload(&meta), Err(ValidationError::UnsupportedFileType(_))));
    }

    #[test]
    fn test_mime_for_extension() {
        assert_eq!(mime_for_extension("PNG"), Some("image/png"));
        assert_eq!(mime_for_extension("jpeg"), Some("image/jpeg"));
        assert_eq!(mime_for_extension("tif"), Some("image/tiff"));
        assert_eq!(mime_for_extension("pdf"), Some("application/pdf"));
        assert_eq!(mime_for_extension("docx"), None);
    }
}
