//! Error types.
//!
//! Each engine component has its own error enum; [`Error`] nests them so
//! callers can match on the component that failed.

use std::path::PathBuf;

use thiserror::Error;

/// Top-level error type.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Crypto(#[from] CryptoError),

    #[error(transparent)]
    Format(#[from] FormatError),

    #[error(transparent)]
    Codec(#[from] CodecError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("prompt failed: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Store lifecycle and field errors.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("name of secret store not specified")]
    NameRequired,

    #[error("invalid store name '{name}': {reason}")]
    InvalidName { name: String, reason: String },

    #[error("secret store not found: {0}")]
    StoreNotFound(String),

    #[error("secret store already exists: {0}")]
    AlreadyExists(String),

    #[error("secret store '{name}' is already open{}", .holder.as_ref().map(|p| format!(" (lock held at {})", p.display())).unwrap_or_default())]
    AlreadyOpen {
        name: String,
        holder: Option<PathBuf>,
    },

    #[error("secret store has been destroyed")]
    StoreDestroyed,

    #[error("field not found: {service}{}", format_suggestions(.suggestions))]
    FieldNotFound {
        service: String,
        suggestions: Vec<String>,
    },

    #[error("service name cannot be empty")]
    EmptyService,
}

impl StoreError {
    /// Build a `FieldNotFound` carrying close matches from `available`.
    pub fn field_not_found(service: impl Into<String>, available: &[String]) -> Self {
        let service = service.into();
        let suggestions = suggest(&service, available);
        StoreError::FieldNotFound {
            service,
            suggestions,
        }
    }
}

/// Cryptographic failures.
///
/// Decryption reports a single [`CryptoError::AuthenticationFailure`] for a
/// wrong master key and for tampered ciphertext alike.
#[derive(Error, Debug)]
pub enum CryptoError {
    #[error("authentication failed: wrong master key or corrupted store")]
    AuthenticationFailure,

    #[error("master key cannot be empty")]
    WeakInput,

    #[error("key derivation failed: {0}")]
    Kdf(String),

    #[error("interrupted: master key was wiped before key derivation")]
    Interrupted,

    #[error("encryption failed")]
    Encryption,

    #[error("decrypted store payload is malformed: {0}")]
    CorruptPayload(String),
}

/// Persisted header errors.
#[derive(Error, Debug)]
pub enum FormatError {
    #[error("corrupt store header: {0}")]
    CorruptHeader(String),

    #[error("unsupported store format version {found} (expected {expected})")]
    UnsupportedVersion { found: u16, expected: u16 },
}

/// Plainsight codec errors.
#[derive(Error, Debug)]
pub enum CodecError {
    #[error("corpus too small: need {needed} bytes of capacity, corpus holds {available}")]
    CapacityExceeded { needed: usize, available: usize },

    #[error("no plainsight payload found in text")]
    NoPayload,

    #[error("plainsight payload failed its integrity check")]
    IntegrityMismatch,
}

/// Configuration errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("unable to determine home directory (set GHOSTPASS_HOME)")]
    NoHomeDirectory,

    #[error("invalid config {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;

fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else {
        format!(" (did you mean: {}?)", suggestions.join(", "))
    }
}

/// Pick services that share a prefix with, or sit one edit away from, `wanted`.
fn suggest(wanted: &str, available: &[String]) -> Vec<String> {
    let wanted = wanted.to_lowercase();
    let mut found: Vec<String> = available
        .iter()
        .filter(|candidate| {
            let candidate = candidate.to_lowercase();
            (!wanted.is_empty() && candidate.starts_with(&wanted))
                || (!candidate.is_empty() && wanted.starts_with(&candidate))
                || edit_distance(&candidate, &wanted) <= 2
        })
        .cloned()
        .collect();
    found.truncate(3);
    found
}

fn edit_distance(a: &str, b: &str) -> usize {
    let b: Vec<char> = b.chars().collect();
    let mut prev: Vec<usize> = (0..=b.len()).collect();
    for (i, ca) in a.chars().enumerate() {
        let mut row = vec![i + 1; b.len() + 1];
        for (j, cb) in b.iter().enumerate() {
            let cost = usize::from(ca != *cb);
            row[j + 1] = (prev[j] + cost).min(prev[j + 1] + 1).min(row[j] + 1);
        }
        prev = row;
    }
    prev[b.len()]
}
