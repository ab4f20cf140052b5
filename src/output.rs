//! Writing the generated document to disk.

use crate::catalog::Document;
use crate::error::{GenerateError, GenerateResult};
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::debug;

/// Pretty JSON with two-space indentation; non-ASCII text is kept as is.
pub fn render_document(document: &Document) -> GenerateResult<String> {
    Ok(serde_json::to_string_pretty(document)?)
}

/// Replaces `path` with the rendered document.
///
/// The JSON goes to a temporary file next to `path` which is renamed over it
/// only once fully written, so readers never observe a partial file.
pub fn write_document(path: &Path, document: &Document) -> GenerateResult<()> {
    let json = render_document(document)?;
    let write_err = |source: std::io::Error| GenerateError::OutputWrite {
        path: path.to_path_buf(),
        source,
    };

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut tmp = NamedTempFile::new_in(dir).map_err(write_err)?;
    debug!("Writing {} bytes to {:?}", json.len(), tmp.path());
    tmp.write_all(json.as_bytes()).map_err(write_err)?;
    tmp.as_file().sync_all().map_err(write_err)?;

    // Temp files are created owner-only, the site needs to read the result.
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        tmp.as_file()
            .set_permissions(std::fs::Permissions::from_mode(0o644))
            .map_err(write_err)?;
    }

    tmp.persist(path).map_err(|e| write_err(e.error))?;
    Ok(())
}
