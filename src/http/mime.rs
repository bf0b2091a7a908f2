//! MIME type detection based on file extensions.

use std::path::Path;

const OCTET_STREAM: &str = "application/octet-stream";

/// Extensions with no table entry that still get served as UTF-8 text.
const TEXT_FALLBACK_EXTS: [&str; 3] = ["txt", "log", "md"];

/// Infers the `Content-Type` value for a file from its extension.
///
/// Pure function: the same filename always yields the same content type.
/// Files without an extension, and extensions unknown to the lookup table
/// (apart from a small set of text-like ones), are served as
/// `application/octet-stream`. Text types always carry an explicit
/// `charset=utf-8` parameter.
///
/// # Example
///
/// ```
/// # use std::path::Path;
/// # use staticd::http::mime::content_type;
/// assert_eq!(content_type(Path::new("style.css")), "text/css; charset=utf-8");
/// assert_eq!(content_type(Path::new("Makefile")), "application/octet-stream");
/// ```
pub fn content_type(path: &Path) -> String {
    let Some(ext) = path.extension().and_then(|e| e.to_str()) else {
        return OCTET_STREAM.to_string();
    };
    let ext = ext.to_ascii_lowercase();

    let Some(guessed) = mime_guess::from_ext(&ext).first() else {
        if TEXT_FALLBACK_EXTS.contains(&ext.as_str()) {
            return "text/plain; charset=utf-8".to_string();
        }
        return OCTET_STREAM.to_string();
    };

    // Text types must declare utf-8
    let content_type = guessed.to_string();
    if content_type.starts_with("text/") && !content_type.contains("charset=") {
        return format!("{content_type}; charset=utf-8");
    }

    content_type
}
