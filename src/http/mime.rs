//! MIME type detection
//!
//! Maps a file's base name to a Content-type using the `mime_guess` table.
//! Unknown extensions have no type, and the response then goes out without a
//! Content-type header.

use std::path::Path;

/// Media type for the file at `path`, from its extension.
///
/// # Examples
/// ```
/// use wwwserve::http::mime::content_type_for;
/// assert_eq!(content_type_for("www/index.html"), Some("text/html"));
/// assert_eq!(content_type_for("www/notes.zzqx"), None);
/// ```
pub fn content_type_for(path: impl AsRef<Path>) -> Option<&'static str> {
    let name = path.as_ref().file_name()?;
    mime_guess::from_path(Path::new(name)).first_raw()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_common_types() {
        assert_eq!(content_type_for("/srv/www/index.html"), Some("text/html"));
        assert_eq!(content_type_for("/srv/www/base.css"), Some("text/css"));
        assert_eq!(content_type_for("/srv/www/logo.png"), Some("image/png"));
    }

    #[test]
    fn test_unknown_or_missing_extension() {
        assert_eq!(content_type_for("/srv/www/blob.zzqx"), None);
        assert_eq!(content_type_for("/srv/www/README"), None);
        assert_eq!(content_type_for("/"), None);
    }

    #[test]
    fn test_only_base_name_counts() {
        assert_eq!(content_type_for("/srv/site.css/page.html"), Some("text/html"));
    }
}
