//! Store manager.
//!
//! A [`Store`] is an open, decrypted secret store. It is created through a
//! [`Workspace`](crate::core::workspace::Workspace) by `init`, `open` or
//! `import`, mutated in memory, and made durable by [`StoreManager::commit`].
//!
//! ```text
//! init/open/import ──► Open ──add/remove──► Modified
//!                       ▲                      │
//!                       └────── commit ────────┘
//!            destroy (from either) ──► Destroyed
//! ```
//!
//! Key material, decrypted fields and the lock handles live together in a
//! mutex-protected [`Secrets`] value shared with the interrupt guard, which
//! can wipe them from its own thread.

mod registry;

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};

use tracing::{debug, info};

use crate::core::crypto::{self, DerivedKey, Nonce};
use crate::core::fields::{self, Field, Fields};
use crate::core::guard::Purge;
use crate::core::persist::{self, Header, StoreLock};
use crate::core::plainsight;
use crate::core::validation;
use crate::error::{Result, StoreError};

pub use registry::{Lease, Registry};

/// Lifecycle state of an open store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    /// In memory and identical to what was last loaded or committed.
    Open,
    /// Has uncommitted changes.
    Modified,
    /// Deleted and wiped. Every further operation fails.
    Destroyed,
}

/// Operations on an open secret store.
///
/// The CLI talks to stores only through this trait.
pub trait StoreManager {
    /// Store name.
    fn name(&self) -> &str;

    /// Current lifecycle state.
    fn state(&self) -> State;

    /// Check whether a field exists for `service`.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::StoreDestroyed` after `destroy`.
    fn field_exists(&self, service: &str) -> Result<bool>;

    /// Get a copy of the field for `service`.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::FieldNotFound` if absent.
    fn get_field(&self, service: &str) -> Result<Field>;

    /// Service names, sorted.
    fn get_fields(&self) -> Result<Vec<String>>;

    /// Insert or overwrite a field.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::EmptyService` for an empty service name.
    fn add_field(&mut self, service: &str, username: &str, password: &str) -> Result<()>;

    /// Remove the field for `service`.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::FieldNotFound` if absent.
    fn remove_field(&mut self, service: &str) -> Result<()>;

    /// Encrypt under a fresh nonce and atomically persist.
    fn commit(&mut self) -> Result<()>;

    /// Delete the persisted file and wipe all in-memory secrets.
    fn destroy(&mut self) -> Result<()>;

    /// Encrypt the current fields and hide them in `corpus`.
    ///
    /// Leaves the store state and its file untouched.
    ///
    /// # Errors
    ///
    /// Returns `CodecError::CapacityExceeded` if the corpus is too small.
    fn export(&self, corpus: &str) -> Result<String>;
}

/// Sensitive state of an open store.
#[derive(Debug)]
pub(crate) struct Secrets {
    key: DerivedKey,
    fields: Fields,
    lock: StoreLock,
    lease: Lease,
}

impl Secrets {
    pub(crate) fn new(key: DerivedKey, fields: Fields, lock: StoreLock, lease: Lease) -> Self {
        Self {
            key,
            fields,
            lock,
            lease,
        }
    }

    fn wipe(&mut self) {
        self.key.wipe();
        self.fields.purge();
        self.lock.release();
        self.lease.release();
    }
}

impl Purge for Mutex<Secrets> {
    fn purge(&self) {
        lock(self).wipe();
    }
}

fn lock(secrets: &Mutex<Secrets>) -> MutexGuard<'_, Secrets> {
    secrets.lock().unwrap_or_else(PoisonError::into_inner)
}

/// An open secret store.
pub struct Store {
    name: String,
    path: PathBuf,
    header: Header,
    state: State,
    secrets: Arc<Mutex<Secrets>>,
}

impl Store {
    pub(crate) fn new(name: String, path: PathBuf, header: Header, secrets: Secrets) -> Self {
        Self {
            name,
            path,
            header,
            state: State::Open,
            secrets: Arc::new(Mutex::new(secrets)),
        }
    }

    /// Path of the persisted store file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Weak handle for the interrupt guard.
    pub(crate) fn purge_handle(&self) -> Weak<dyn Purge> {
        let secrets: Arc<dyn Purge> = self.secrets.clone();
        Arc::downgrade(&secrets)
    }

    fn ensure_live(&self) -> Result<()> {
        if self.state == State::Destroyed {
            return Err(StoreError::StoreDestroyed.into());
        }
        Ok(())
    }

    /// Encrypt the fields under a fresh nonce.
    ///
    /// The header bytes are authenticated together with the ciphertext.
    fn seal(&self, secrets: &Secrets) -> Result<(Header, Vec<u8>)> {
        let header = Header::new(self.header.kdf, self.header.salt, Nonce::generate());
        let plaintext = fields::encode(&self.name, &secrets.fields)?;
        let ciphertext =
            crypto::encrypt(&secrets.key, &header.nonce, &header.to_bytes(), &plaintext)?;
        Ok((header, ciphertext))
    }
}

impl StoreManager for Store {
    fn name(&self) -> &str {
        &self.name
    }

    fn state(&self) -> State {
        self.state
    }

    fn field_exists(&self, service: &str) -> Result<bool> {
        self.ensure_live()?;
        Ok(lock(&self.secrets).fields.exists(service))
    }

    fn get_field(&self, service: &str) -> Result<Field> {
        self.ensure_live()?;
        lock(&self.secrets).fields.get(service).cloned()
    }

    fn get_fields(&self) -> Result<Vec<String>> {
        self.ensure_live()?;
        Ok(lock(&self.secrets).fields.services())
    }

    fn add_field(&mut self, service: &str, username: &str, password: &str) -> Result<()> {
        self.ensure_live()?;
        validation::validate_service(service)?;

        let replaced = lock(&self.secrets).fields.add(service, username, password);
        debug!(
            "{} field '{}' in store '{}'",
            if replaced { "replaced" } else { "added" },
            service,
            self.name
        );
        self.state = State::Modified;
        Ok(())
    }

    fn remove_field(&mut self, service: &str) -> Result<()> {
        self.ensure_live()?;
        lock(&self.secrets).fields.remove(service)?;
        debug!("removed field '{}' from store '{}'", service, self.name);
        self.state = State::Modified;
        Ok(())
    }

    fn commit(&mut self) -> Result<()> {
        self.ensure_live()?;

        let (header, ciphertext) = {
            let secrets = lock(&self.secrets);
            self.seal(&secrets)?
        };
        persist::save(&self.path, &header, &ciphertext)?;

        self.header = header;
        self.state = State::Open;
        info!("committed store '{}'", self.name);
        Ok(())
    }

    fn destroy(&mut self) -> Result<()> {
        self.ensure_live()?;

        persist::remove(&self.path)?;
        lock(&self.secrets).wipe();

        self.state = State::Destroyed;
        info!("destroyed store '{}'", self.name);
        Ok(())
    }

    fn export(&self, corpus: &str) -> Result<String> {
        self.ensure_live()?;

        let (header, ciphertext) = {
            let secrets = lock(&self.secrets);
            self.seal(&secrets)?
        };
        let mut payload = header.to_bytes().to_vec();
        payload.extend_from_slice(&ciphertext);

        let encoded = plainsight::encode(corpus, &payload)?;
        debug!(
            "exported store '{}' ({} bytes embedded)",
            self.name,
            payload.len()
        );
        Ok(encoded)
    }
}

impl std::fmt::Debug for Store {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Store")
            .field("name", &self.name)
            .field("path", &self.path)
            .field("state", &self.state)
            .finish()
    }
}
