//! MIME Type Detection Utilities
//!
//! File parts are streamed from disk, so their content is never inspected
//! up front; the MIME type comes from the filename extension.

/// Guess MIME by file name or path (extension-based), if the extension is known.
pub fn guess_mime_from_extension(path: &str) -> Option<String> {
    mime_guess::from_path(path).first().map(|m| m.to_string())
}

/// Guess MIME by file name or path, falling back to `application/octet-stream`.
pub fn guess_mime_from_path(path: &str) -> String {
    guess_mime_from_extension(path).unwrap_or_else(|| "application/octet-stream".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guess_mime_from_path() {
        assert_eq!(guess_mime_from_path("song.mp3"), "audio/mpeg");
        assert_eq!(guess_mime_from_path("photo.png"), "image/png");
        assert_eq!(guess_mime_from_path("IMAGE.JPG"), "image/jpeg");
        assert_eq!(guess_mime_from_path("/data/report.pdf"), "application/pdf");
    }

    #[test]
    fn test_unknown_extension_falls_back() {
        assert_eq!(guess_mime_from_extension("file.unknownext"), None);
        assert_eq!(
            guess_mime_from_path("file.unknownext"),
            "application/octet-stream"
        );
        assert_eq!(guess_mime_from_path("noext"), "application/octet-stream");
    }
}
