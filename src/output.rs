use crate::error::ConvertError;
use std::fs::{self, Permissions};
use std::io::{self, Write};
use std::path::Path;
use tempfile::{Builder, NamedTempFile};

/// Replace `path` with `bytes` only once they are fully on disk. The data goes
/// to a temporary file beside the destination which is then renamed over it,
/// so a failed run never leaves a truncated destination behind.
///
/// An existing destination keeps its permissions; a new one gets the usual
/// `0o666` less umask rather than the temp file's owner-only mode.
pub fn write_replacing(path: &Path, bytes: &[u8]) -> Result<(), ConvertError> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut file = temp_file_for(path, dir).map_err(ConvertError::CreateOutput)?;
    file.write_all(bytes)
        .and_then(|_| file.flush())
        .map_err(ConvertError::WriteOutput)?;
    file.persist(path)
        .map_err(|err| ConvertError::ReplaceOutput(err.error))?;
    Ok(())
}

fn temp_file_for(path: &Path, dir: &Path) -> io::Result<NamedTempFile> {
    match fs::metadata(path) {
        Ok(existing) => {
            let file = NamedTempFile::new_in(dir)?;
            file.as_file().set_permissions(existing.permissions())?;
            Ok(file)
        }
        Err(_) => {
            let mut builder = Builder::new();
            if let Some(permissions) = fresh_permissions() {
                // umask is applied by the open call
                builder.permissions(permissions);
            }
            builder.tempfile_in(dir)
        }
    }
}

#[cfg(unix)]
fn fresh_permissions() -> Option<Permissions> {
    use std::os::unix::fs::PermissionsExt;
    Some(Permissions::from_mode(0o666))
}

#[cfg(not(unix))]
fn fresh_permissions() -> Option<Permissions> {
    None
}
