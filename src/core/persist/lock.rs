//! Cross-process lock marker.
//!
//! A `<name>.gp.lock` file created with exclusive-create semantics marks a
//! store as open. The marker holds the owning process id; a marker whose
//! process is gone is stale and is taken over.

use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, PoisonError, Weak};

use tracing::{debug, warn};

use crate::core::constants::LOCK_EXTENSION;
use crate::core::guard::Purge;
use crate::error::{Result, StoreError};

/// Held while a store is open; removes its marker when released or dropped.
///
/// The marker can also be removed through [`StoreLock::purge_handle`], so an
/// interrupt that skips destructors still cleans it up.
#[derive(Debug)]
pub struct StoreLock {
    marker: Arc<Marker>,
}

#[derive(Debug)]
struct Marker {
    path: Mutex<Option<PathBuf>>,
}

impl Marker {
    fn remove(&self) {
        let taken = self
            .path
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
        if let Some(path) = taken {
            match fs::remove_file(&path) {
                Ok(()) => debug!("released {}", path.display()),
                Err(e) if e.kind() == ErrorKind::NotFound => {}
                Err(e) => warn!("failed to remove lock {}: {}", path.display(), e),
            }
        }
    }
}

impl Purge for Marker {
    fn purge(&self) {
        self.remove();
    }
}

impl StoreLock {
    /// Create the lock marker for the store file at `store_path`.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::AlreadyOpen` if a live process owns the marker.
    pub fn acquire(name: &str, store_path: &Path) -> Result<Self> {
        let path = lock_path(store_path);
        let mut file = match create(&path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::AlreadyExists => {
                if !is_stale(&path) {
                    return Err(already_open(name, path));
                }
                warn!("taking over stale lock {}", path.display());
                remove_stale(&path)?;
                match create(&path) {
                    Ok(file) => file,
                    Err(e) if e.kind() == ErrorKind::AlreadyExists => {
                        return Err(already_open(name, path))
                    }
                    Err(e) => return Err(e.into()),
                }
            }
            Err(e) => return Err(e.into()),
        };
        writeln!(file, "{}", std::process::id())?;
        file.sync_all()?;
        debug!("acquired {}", path.display());
        Ok(Self {
            marker: Arc::new(Marker {
                path: Mutex::new(Some(path)),
            }),
        })
    }

    /// Handle the interrupt guard uses to remove the marker.
    pub fn purge_handle(&self) -> Weak<dyn Purge> {
        Arc::downgrade(&self.marker) as Weak<dyn Purge>
    }

    /// Remove the marker. Safe to call more than once.
    pub fn release(&self) {
        self.marker.remove();
    }
}

impl Drop for StoreLock {
    fn drop(&mut self) {
        self.release();
    }
}

/// Marker path for a store file (`<store>.lock`).
pub fn lock_path(store_path: &Path) -> PathBuf {
    let mut name = store_path.as_os_str().to_owned();
    name.push(".");
    name.push(LOCK_EXTENSION);
    PathBuf::from(name)
}

fn create(path: &Path) -> std::io::Result<fs::File> {
    OpenOptions::new().write(true).create_new(true).open(path)
}

fn remove_stale(path: &Path) -> Result<()> {
    match fs::remove_file(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e.into()),
    }
}

fn already_open(name: &str, path: PathBuf) -> crate::error::Error {
    StoreError::AlreadyOpen {
        name: name.to_string(),
        holder: Some(path),
    }
    .into()
}

/// A marker is stale only when it names a pid that no longer runs.
///
/// An unreadable or empty marker may belong to a process that has not
/// written its pid yet, so it counts as held.
fn is_stale(path: &Path) -> bool {
    let holder = fs::read_to_string(path).unwrap_or_default();
    match holder.trim().parse::<u32>() {
        Ok(pid) => {
            let alive = process_alive(pid);
            debug!("lock {} held by pid {} (alive: {})", path.display(), pid, alive);
            !alive
        }
        Err(_) => false,
    }
}

#[cfg(unix)]
fn process_alive(pid: u32) -> bool {
    if pid == std::process::id() {
        return true;
    }
    let Ok(pid) = libc::pid_t::try_from(pid) else {
        return false;
    };
    if pid <= 0 {
        return false;
    }
    // Signal 0 only checks that the process exists.
    let ret = unsafe { libc::kill(pid, 0) };
    ret == 0 || std::io::Error::last_os_error().raw_os_error() != Some(libc::ESRCH)
}

#[cfg(not(unix))]
fn process_alive(_pid: u32) -> bool {
    true
}
