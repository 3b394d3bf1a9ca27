//! Upload gate: which file types are let through to the parser.
//!
//! The check runs before any bytes are read or session state touched, so a
//! rejected upload leaves the controller exactly where it was.

pub mod parser;

pub const PDF_MIME: &str = "application/pdf";
pub const DOCX_MIME: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

/// Accepts PDF and Office Open XML word-processing uploads only. Media-type
/// parameters (`; charset=...`) are ignored for the comparison.
pub fn is_supported_upload(content_type: &str) -> bool {
    let essence = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();
    essence == PDF_MIME || essence == DOCX_MIME
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pdf_and_docx_are_supported() {
        assert!(is_supported_upload("application/pdf"));
        assert!(is_supported_upload(DOCX_MIME));
    }

    #[test]
    fn test_media_type_parameters_are_ignored() {
        assert!(is_supported_upload("application/pdf; charset=binary"));
        assert!(is_supported_upload("Application/PDF"));
    }

    #[test]
    fn test_other_types_are_rejected() {
        assert!(!is_supported_upload("image/png"));
        assert!(!is_supported_upload("text/plain"));
        assert!(!is_supported_upload(""));
    }
}
