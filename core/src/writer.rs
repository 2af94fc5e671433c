//! # Page Writer
//!
//! Writes the rendered page atomically: the content goes to a temporary file next to the
//! destination, which is then persisted over it.

use crate::error::{AppError, AppResult};
use std::fs::{self, File, Permissions};
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// Mode given to pages that did not exist before.
#[cfg(unix)]
const NEW_PAGE_MODE: u32 = 0o644;

/// Writes `html` to `destination`, replacing any existing file.
///
/// Missing parent directories are created. An existing destination keeps its permissions,
/// a new one is created world-readable. On failure the destination is left untouched.
pub fn write_page(destination: &Path, html: &str) -> AppResult<()> {
    let fail = |e: std::io::Error| AppError::Write(destination.to_path_buf(), e);

    let parent = match destination.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    if !parent.exists() {
        fs::create_dir_all(parent).map_err(fail)?;
    }

    let mut tmp = NamedTempFile::new_in(parent).map_err(fail)?;
    tmp.write_all(html.as_bytes()).map_err(fail)?;

    let permissions = page_permissions(destination, tmp.as_file()).map_err(fail)?;
    tmp.as_file().set_permissions(permissions).map_err(fail)?;
    tmp.persist(destination).map_err(|e| fail(e.error))?;

    tracing::debug!("Wrote {} bytes to {:?}", html.len(), destination);
    Ok(())
}

/// Permissions of the existing destination, or the default page mode.
fn page_permissions(destination: &Path, tmp: &File) -> std::io::Result<Permissions> {
    if let Ok(meta) = fs::metadata(destination) {
        return Ok(meta.permissions());
    }

    #[allow(unused_mut)]
    let mut permissions = tmp.metadata()?.permissions();
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        permissions.set_mode(NEW_PAGE_MODE);
    }
    Ok(permissions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_write_creates_parent_dirs() {
        let dir = tempdir().unwrap();
        let dest = dir.path().join("templates").join("swagger.tmpl");

        write_page(&dest, "<html></html>").unwrap();
        assert_eq!(fs::read_to_string(&dest).unwrap(), "<html></html>");
    }

    #[test]
    fn test_write_overwrites_existing() {
        let dir = tempdir().unwrap();
        let dest = dir.path().join("swagger.tmpl");
        fs::write(&dest, "old content that is longer than the new one").unwrap();

        write_page(&dest, "new").unwrap();
        assert_eq!(fs::read_to_string(&dest).unwrap(), "new");
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn test_write_to_directory_fails() {
        let dir = tempdir().unwrap();
        let dest = dir.path().join("occupied");
        fs::create_dir(&dest).unwrap();

        match write_page(&dest, "page").unwrap_err() {
            AppError::Write(p, _) => assert_eq!(p, dest),
            _ => panic!("Wrong error type"),
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_overwrite_keeps_existing_mode() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempdir().unwrap();
        let dest = dir.path().join("swagger.tmpl");
        fs::write(&dest, "old").unwrap();
        fs::set_permissions(&dest, Permissions::from_mode(0o640)).unwrap();

        write_page(&dest, "new").unwrap();

        let mode = fs::metadata(&dest).unwrap().permissions().mode() & 0o777;
        assert_eq!(mode, 0o640);
    }

    #[cfg(unix)]
    #[test]
    fn test_new_page_is_world_readable() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempdir().unwrap();
        let dest = dir.path().join("swagger.tmpl");

        write_page(&dest, "page").unwrap();

        let mode = fs::metadata(&dest).unwrap().permissions().mode() & 0o777;
        assert_eq!(mode, 0o644);
    }
}
