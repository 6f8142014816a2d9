//! Command implementations.

use anyhow::Context;
use camino::Utf8Path;

use inkgauge_core::input::validate_input_size;

pub mod analyze;
pub mod info;
#[cfg(feature = "mcp")]
pub mod serve;

/// Read a file and validate its size against the configured limit.
///
/// The size is checked from metadata before the file is read into memory.
pub fn read_input_file(path: &Utf8Path, max_bytes: Option<usize>) -> anyhow::Result<String> {
    let metadata =
        std::fs::metadata(path.as_std_path()).with_context(|| format!("failed to read {path}"))?;
    let size = usize::try_from(metadata.len()).unwrap_or(usize::MAX);
    validate_input_size(size, max_bytes).with_context(|| format!("cannot analyze {path}"))?;

    std::fs::read_to_string(path.as_std_path()).with_context(|| format!("failed to read {path}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use camino::Utf8PathBuf;

    #[test]
    fn reads_file_within_limit() {
        let tmp = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(tmp.path(), "<p>hello</p>").unwrap();
        let path = Utf8PathBuf::try_from(tmp.path().to_path_buf()).unwrap();

        let content = read_input_file(&path, Some(1024)).unwrap();
        assert_eq!(content, "<p>hello</p>");
    }

    #[test]
    fn rejects_file_over_limit() {
        let tmp = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(tmp.path(), "x".repeat(64)).unwrap();
        let path = Utf8PathBuf::try_from(tmp.path().to_path_buf()).unwrap();

        let err = read_input_file(&path, Some(16)).unwrap_err();
        assert!(format!("{err:#}").contains("input too large"));
    }

    #[test]
    fn missing_file_errors() {
        let err = read_input_file(Utf8Path::new("/nonexistent/post.html"), None).unwrap_err();
        assert!(err.to_string().contains("failed to read"));
    }
}
