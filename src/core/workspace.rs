//! Workspace: the directory holding every store.
//!
//! Resolves store names to files, enumerates stores, and is the only way to
//! obtain a [`Store`]: by creating one (`init`), decrypting one from disk
//! (`open`) or recovering one from plainsight text (`import`).

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, PoisonError, Weak};

use tracing::{debug, info, warn};

use crate::core::config::{self, Config};
use crate::core::constants::STORE_EXTENSION;
use crate::core::crypto::{self, DerivedKey, KdfParams, MasterKey, Nonce, Salt};
use crate::core::fields::{self, Fields};
use crate::core::guard::{Guard, Purge};
use crate::core::persist::{self, Header, StoreLock, HEADER_LEN};
use crate::core::plainsight;
use crate::core::store::{Lease, Registry, Secrets, Store};
use crate::core::validation;
use crate::error::{CryptoError, Result, StoreError};

/// A workspace directory and its settings.
#[derive(Debug, Clone)]
pub struct Workspace {
    root: PathBuf,
    config: Config,
    registry: Registry,
    guard: Option<Guard>,
}

impl Workspace {
    /// Workspace at `$GHOSTPASS_HOME` or `~/.ghostpass`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NoHomeDirectory` if no location can be found,
    /// or `ConfigError::Parse` for an invalid `config.toml`.
    pub fn resolve() -> Result<Self> {
        Self::at(config::workspace_dir()?)
    }

    /// Workspace at an explicit directory, reading its `config.toml`.
    pub fn at(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        let config = Config::load(&root)?;
        Ok(Self::with_config(root, config))
    }

    /// Workspace at `root` with the given configuration.
    pub fn with_config(root: impl Into<PathBuf>, config: Config) -> Self {
        Self {
            root: root.into(),
            config,
            registry: Registry::new(),
            guard: None,
        }
    }

    /// Register every store opened from this workspace with `guard`.
    pub fn with_guard(mut self, guard: Guard) -> Self {
        self.guard = Some(guard);
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// File backing the store `name`.
    pub fn store_path(&self, name: &str) -> PathBuf {
        self.root.join(format!("{}.{}", name, STORE_EXTENSION))
    }

    /// Whether a persisted store named `name` exists.
    pub fn exists(&self, name: &str) -> bool {
        self.store_path(name).is_file()
    }

    /// Names of all persisted stores, sorted.
    ///
    /// A workspace directory that does not exist yet has no stores.
    pub fn stores(&self) -> Result<Vec<String>> {
        let entries = match fs::read_dir(&self.root) {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        let mut names = Vec::new();
        for entry in entries {
            let path = entry?.path();
            if !path.is_file() || path.extension().and_then(|e| e.to_str()) != Some(STORE_EXTENSION)
            {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                names.push(stem.to_string());
            }
        }
        names.sort();
        Ok(names)
    }

    /// Create a new, empty store.
    ///
    /// Nothing is written until the store is committed.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NameRequired` or `StoreError::InvalidName` for a
    /// bad name, `StoreError::AlreadyExists` if a store file with that name
    /// exists, `StoreError::AlreadyOpen` if it is open elsewhere, and
    /// `CryptoError::WeakInput` for an empty master key.
    pub fn init(&self, name: &str, master_key: MasterKey) -> Result<Store> {
        validation::validate_name(name)?;
        let path = self.store_path(name);
        if path.exists() {
            return Err(StoreError::AlreadyExists(name.to_string()).into());
        }

        self.ensure_root()?;
        let (lease, lock) = self.claim(name, &path)?;

        let header = Header::new(self.config.kdf, Salt::generate(), Nonce::generate());
        let key = self.derive(master_key, &header)?;

        info!("initialized store '{}'", name);
        let store = Store::new(
            name.to_string(),
            path,
            header,
            Secrets::new(key, Fields::new(), lock, lease),
        );
        self.track(&store);
        Ok(store)
    }

    /// Decrypt a persisted store.
    ///
    /// A failed open leaves the store file untouched.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::StoreNotFound` if no file exists,
    /// `StoreError::AlreadyOpen` if the store is open elsewhere, a
    /// `FormatError` for a bad header, and
    /// `CryptoError::AuthenticationFailure` for a wrong key or corrupted file.
    pub fn open(&self, name: &str, master_key: MasterKey) -> Result<Store> {
        validation::validate_name(name)?;
        let path = self.store_path(name);
        if !path.is_file() {
            return Err(StoreError::StoreNotFound(name.to_string()).into());
        }

        let (lease, lock) = self.claim(name, &path)?;

        let (header, ciphertext) = persist::load(&path)?;
        let key = self.derive(master_key, &header)?;

        let plaintext = crypto::decrypt(&key, &header.nonce, &header.to_bytes(), &ciphertext)?;
        let (stored_name, fields) = fields::decode(&plaintext)?;
        if stored_name != name {
            warn!(
                "store file '{}' carries the name '{}'",
                path.display(),
                stored_name
            );
        }

        info!("opened store '{}' ({} fields)", name, fields.len());
        let store = Store::new(
            name.to_string(),
            path,
            header,
            Secrets::new(key, fields, lock, lease),
        );
        self.track(&store);
        Ok(store)
    }

    /// Recover a store from plainsight text produced by `export`.
    ///
    /// The store keeps the name it was exported under and is not persisted
    /// until committed; committing replaces any local store of that name.
    ///
    /// # Errors
    ///
    /// Returns a `CodecError` if the text carries no valid payload, a
    /// `FormatError` for a bad embedded header,
    /// `CryptoError::AuthenticationFailure` for a wrong key, and
    /// `StoreError::AlreadyOpen` if the recovered store is open elsewhere.
    pub fn import(&self, master_key: MasterKey, encoded: &str) -> Result<Store> {
        let payload = plainsight::decode(encoded)?;
        let (header, ciphertext) = Header::parse(&payload)?;

        let key = self.derive(master_key, &header)?;

        let plaintext = crypto::decrypt(&key, &header.nonce, &payload[..HEADER_LEN], ciphertext)?;
        let (name, fields) = fields::decode(&plaintext)?;
        validation::validate_name(&name)?;
        debug!("recovered store '{}' from plainsight text", name);

        self.ensure_root()?;
        let path = self.store_path(&name);
        let (lease, lock) = self.claim(&name, &path)?;

        info!("imported store '{}' ({} fields)", name, fields.len());
        let store = Store::new(name, path, header, Secrets::new(key, fields, lock, lease));
        self.track(&store);
        Ok(store)
    }

    /// Take the in-process lease and the lock marker for `path`.
    ///
    /// The marker goes to the guard at once, so an interrupt during the key
    /// derivation that follows still removes it.
    fn claim(&self, name: &str, path: &Path) -> Result<(Lease, StoreLock)> {
        let lease = self.registry.lease(name, path.to_path_buf())?;
        let lock = StoreLock::acquire(name, path)?;
        if let Some(guard) = &self.guard {
            guard.track(lock.purge_handle());
        }
        Ok((lease, lock))
    }

    /// Derive the store key with the master key visible to the guard.
    fn derive(&self, master_key: MasterKey, header: &Header) -> Result<DerivedKey> {
        let pending = Arc::new(PendingKey::new(master_key));
        if let Some(guard) = &self.guard {
            guard.track(Arc::downgrade(&pending) as Weak<dyn Purge>);
        }
        pending.derive(&header.salt, &header.kdf)
    }

    fn track(&self, store: &Store) {
        if let Some(guard) = &self.guard {
            guard.track(store.purge_handle());
        }
    }

    fn ensure_root(&self) -> Result<()> {
        if self.root.is_dir() {
            return Ok(());
        }
        fs::create_dir_all(&self.root)?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&self.root, fs::Permissions::from_mode(0o700))?;
        }

        debug!("created workspace {}", self.root.display());
        Ok(())
    }
}

/// A master key waiting for derivation.
///
/// Derivation holds the slot for its whole run, so a purge waits for it and
/// finds the key already wiped; a purge that comes first leaves nothing to
/// derive from.
struct PendingKey(Mutex<Option<MasterKey>>);

impl PendingKey {
    fn new(master_key: MasterKey) -> Self {
        Self(Mutex::new(Some(master_key)))
    }

    fn derive(&self, salt: &Salt, kdf: &KdfParams) -> Result<DerivedKey> {
        let mut slot = self.0.lock().unwrap_or_else(PoisonError::into_inner);
        let master_key = slot.take().ok_or(CryptoError::Interrupted)?;
        crypto::derive_key(&master_key, salt, kdf)
    }
}

impl Purge for PendingKey {
    fn purge(&self) {
        self.0.lock().unwrap_or_else(PoisonError::into_inner).take();
    }
}
