//! Persistence layer.
//!
//! Reads and writes store files (`header ‖ ciphertext`). Writes go to a
//! temporary file in the target directory, are synced, then renamed over
//! the target, so readers never observe a partially written store.

mod header;
mod lock;

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::Path;

use tempfile::NamedTempFile;
use tracing::debug;

use crate::error::{Result, StoreError};

pub use header::{Header, FORMAT_VERSION, HEADER_LEN, MAGIC};
pub use lock::{lock_path, StoreLock};

/// Atomically write a store file.
///
/// # Errors
///
/// Returns an I/O error if any step fails; the previous file, if any, is
/// left untouched in that case.
pub fn save(path: &Path, header: &Header, ciphertext: &[u8]) -> Result<()> {
    let dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(&header.to_bytes())?;
    tmp.write_all(ciphertext)?;
    tmp.as_file().sync_all()?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        tmp.as_file()
            .set_permissions(fs::Permissions::from_mode(0o600))?;
    }

    tmp.persist(path).map_err(|e| e.error)?;
    sync_dir(dir)?;

    debug!("wrote {} ({} bytes)", path.display(), ciphertext.len());
    Ok(())
}

/// Read a store file and split it into header and ciphertext.
///
/// # Errors
///
/// Returns `StoreError::StoreNotFound` (carrying the store name, i.e. the
/// file stem) if the file does not exist, or a `FormatError` if the header
/// is invalid.
pub fn load(path: &Path) -> Result<(Header, Vec<u8>)> {
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            let name = path
                .file_stem()
                .map(|stem| stem.to_string_lossy().into_owned())
                .unwrap_or_default();
            return Err(StoreError::StoreNotFound(name).into());
        }
        Err(e) => return Err(e.into()),
    };

    let (header, ciphertext) = Header::parse(&bytes)?;
    debug!("read {} ({} bytes)", path.display(), bytes.len());
    Ok((header, ciphertext.to_vec()))
}

/// Delete a store file. A missing file is not an error.
pub fn remove(path: &Path) -> Result<()> {
    match fs::remove_file(path) {
        Ok(()) => {
            debug!("removed {}", path.display());
            Ok(())
        }
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e.into()),
    }
}

#[cfg(unix)]
fn sync_dir(dir: &Path) -> Result<()> {
    fs::File::open(dir)?.sync_all()?;
    Ok(())
}

#[cfg(not(unix))]
fn sync_dir(_dir: &Path) -> Result<()> {
    Ok(())
}
