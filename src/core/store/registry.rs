//! In-process registry of open stores.

use std::collections::HashSet;
use std::path::PathBuf;
use std::sync::{Arc, Mutex, PoisonError};

use crate::error::{Result, StoreError};

/// Set of store files currently open in this process.
///
/// Clones share the same set.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    open: Arc<Mutex<HashSet<PathBuf>>>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim `path` for the store `name`.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::AlreadyOpen` if the path is already claimed.
    pub fn lease(&self, name: &str, path: PathBuf) -> Result<Lease> {
        let mut open = self.open.lock().unwrap_or_else(PoisonError::into_inner);
        if !open.insert(path.clone()) {
            return Err(StoreError::AlreadyOpen {
                name: name.to_string(),
                holder: None,
            }
            .into());
        }
        Ok(Lease {
            registry: self.clone(),
            path: Some(path),
        })
    }

    /// Whether `path` is currently claimed.
    pub fn is_open(&self, path: &std::path::Path) -> bool {
        self.open
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .contains(path)
    }
}

/// A claim on one store path. Released on drop.
#[derive(Debug)]
pub struct Lease {
    registry: Registry,
    path: Option<PathBuf>,
}

impl Lease {
    /// Give the claim back. Safe to call more than once.
    pub fn release(&mut self) {
        if let Some(path) = self.path.take() {
            self.registry
                .open
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .remove(&path);
        }
    }
}

impl Drop for Lease {
    fn drop(&mut self) {
        self.release();
    }
}
