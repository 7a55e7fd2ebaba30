//! Crypto engine.
//!
//! Argon2id key derivation and XChaCha20-Poly1305 authenticated encryption.
//! Every buffer that holds key material or plaintext is wrapped in
//! [`Zeroizing`] so it is wiped on all exit paths.

use argon2::{Algorithm, Argon2, Params, Version};
use chacha20poly1305::aead::{Aead, KeyInit, Payload};
use chacha20poly1305::{Key, XChaCha20Poly1305, XNonce};
use rand::rngs::OsRng;
use rand::RngCore;
use serde::{Deserialize, Serialize};
use zeroize::{Zeroize, Zeroizing};

use crate::core::constants::{
    DEFAULT_KDF_ITERATIONS, DEFAULT_KDF_MEMORY_KIB, DEFAULT_KDF_PARALLELISM, KEY_LEN, NONCE_LEN,
    SALT_LEN,
};
use crate::error::{CryptoError, Result};

/// User-supplied master key.
///
/// Never persisted. Consumed by [`derive_key`] and wiped when dropped.
pub struct MasterKey(Zeroizing<Vec<u8>>);

impl MasterKey {
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self(Zeroizing::new(bytes.into()))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn expose(&self) -> &[u8] {
        &self.0
    }
}

impl From<Zeroizing<String>> for MasterKey {
    fn from(mut value: Zeroizing<String>) -> Self {
        // Move the bytes out without leaving a second copy behind.
        let bytes = std::mem::take(&mut *value).into_bytes();
        Self::new(bytes)
    }
}

impl From<&str> for MasterKey {
    fn from(value: &str) -> Self {
        Self::new(value.as_bytes().to_vec())
    }
}

impl std::fmt::Debug for MasterKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("MasterKey([REDACTED])")
    }
}

/// Symmetric key produced by [`derive_key`].
pub struct DerivedKey(Zeroizing<[u8; KEY_LEN]>);

impl DerivedKey {
    fn as_key(&self) -> &Key {
        Key::from_slice(self.0.as_slice())
    }

    /// Overwrite the key bytes with zeros.
    pub fn wipe(&mut self) {
        self.0.zeroize();
    }
}

impl std::fmt::Debug for DerivedKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("DerivedKey([REDACTED])")
    }
}

/// Per-store random salt, generated once at store creation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Salt(pub [u8; SALT_LEN]);

impl Salt {
    pub fn generate() -> Self {
        let mut salt = [0u8; SALT_LEN];
        OsRng.fill_bytes(&mut salt);
        Self(salt)
    }
}

/// AEAD nonce. A fresh one is generated for every commit and export.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Nonce(pub [u8; NONCE_LEN]);

impl Nonce {
    pub fn generate() -> Self {
        let mut nonce = [0u8; NONCE_LEN];
        OsRng.fill_bytes(&mut nonce);
        Self(nonce)
    }
}

/// Argon2id cost parameters.
///
/// Stored in every file header so a store is always opened with the
/// parameters it was created with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KdfParams {
    /// Memory cost in KiB.
    pub memory_kib: u32,
    /// Number of passes.
    pub iterations: u32,
    /// Degree of parallelism (lanes).
    pub parallelism: u32,
}

impl Default for KdfParams {
    fn default() -> Self {
        Self {
            memory_kib: DEFAULT_KDF_MEMORY_KIB,
            iterations: DEFAULT_KDF_ITERATIONS,
            parallelism: DEFAULT_KDF_PARALLELISM,
        }
    }
}

impl KdfParams {
    fn to_argon2(self) -> Result<Params> {
        Params::new(
            self.memory_kib,
            self.iterations,
            self.parallelism,
            Some(KEY_LEN),
        )
        .map_err(|e| CryptoError::Kdf(e.to_string()).into())
    }
}

/// Derive the store key from a master key and salt.
///
/// # Errors
///
/// Returns `CryptoError::WeakInput` if the master key is empty, or
/// `CryptoError::Kdf` if the parameters are rejected by Argon2.
pub fn derive_key(master_key: &MasterKey, salt: &Salt, params: &KdfParams) -> Result<DerivedKey> {
    if master_key.is_empty() {
        return Err(CryptoError::WeakInput.into());
    }

    let argon = Argon2::new(Algorithm::Argon2id, Version::V0x13, params.to_argon2()?);
    let mut key = Zeroizing::new([0u8; KEY_LEN]);
    argon
        .hash_password_into(master_key.expose(), &salt.0, key.as_mut_slice())
        .map_err(|e| CryptoError::Kdf(e.to_string()))?;

    Ok(DerivedKey(key))
}

/// Encrypt `plaintext`, authenticating `aad` alongside it.
///
/// Returns the ciphertext with the 16-byte Poly1305 tag appended.
pub fn encrypt(key: &DerivedKey, nonce: &Nonce, aad: &[u8], plaintext: &[u8]) -> Result<Vec<u8>> {
    let cipher = XChaCha20Poly1305::new(key.as_key());
    cipher
        .encrypt(
            XNonce::from_slice(&nonce.0),
            Payload {
                msg: plaintext,
                aad,
            },
        )
        .map_err(|_| CryptoError::Encryption.into())
}

/// Decrypt and verify a buffer produced by [`encrypt`].
///
/// # Errors
///
/// Returns `CryptoError::AuthenticationFailure` whenever the tag does not
/// verify. Wrong keys and corrupted data are deliberately indistinguishable.
pub fn decrypt(
    key: &DerivedKey,
    nonce: &Nonce,
    aad: &[u8],
    ciphertext: &[u8],
) -> Result<Zeroizing<Vec<u8>>> {
    let cipher = XChaCha20Poly1305::new(key.as_key());
    cipher
        .decrypt(
            XNonce::from_slice(&nonce.0),
            Payload {
                msg: ciphertext,
                aad,
            },
        )
        .map(Zeroizing::new)
        .map_err(|_| CryptoError::AuthenticationFailure.into())
}

#[cfg(test)]
pub(crate) fn test_params() -> KdfParams {
    KdfParams {
        memory_kib: 8,
        iterations: 1,
        parallelism: 1,
    }
}
