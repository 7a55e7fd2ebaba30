//! Fixed-width, versioned store header.
//!
//! ```text
//! offset  size  field
//!      0     8  magic "GHSTPASS"
//!      8     2  format version (LE)
//!     10     2  reserved, zero
//!     12     4  kdf memory cost, KiB (LE)
//!     16     4  kdf iterations (LE)
//!     20     4  kdf parallelism (LE)
//!     24    32  salt
//!     56    24  nonce
//! ```

use crate::core::constants::{NONCE_LEN, SALT_LEN};
use crate::core::crypto::{KdfParams, Nonce, Salt};
use crate::error::{FormatError, Result};

pub const MAGIC: &[u8; 8] = b"GHSTPASS";
pub const FORMAT_VERSION: u16 = 1;
pub const HEADER_LEN: usize = 80;

const SALT_AT: usize = 24;
const NONCE_AT: usize = SALT_AT + SALT_LEN;

/// Header written in front of every store ciphertext.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Header {
    pub kdf: KdfParams,
    pub salt: Salt,
    pub nonce: Nonce,
}

impl Header {
    pub fn new(kdf: KdfParams, salt: Salt, nonce: Nonce) -> Self {
        Self { kdf, salt, nonce }
    }

    pub fn to_bytes(&self) -> [u8; HEADER_LEN] {
        let mut buf = [0u8; HEADER_LEN];
        buf[..8].copy_from_slice(MAGIC);
        buf[8..10].copy_from_slice(&FORMAT_VERSION.to_le_bytes());
        buf[12..16].copy_from_slice(&self.kdf.memory_kib.to_le_bytes());
        buf[16..20].copy_from_slice(&self.kdf.iterations.to_le_bytes());
        buf[20..24].copy_from_slice(&self.kdf.parallelism.to_le_bytes());
        buf[SALT_AT..NONCE_AT].copy_from_slice(&self.salt.0);
        buf[NONCE_AT..NONCE_AT + NONCE_LEN].copy_from_slice(&self.nonce.0);
        buf
    }

    /// Split `bytes` into a parsed header and the ciphertext that follows it.
    ///
    /// # Errors
    ///
    /// Returns `FormatError::CorruptHeader` if the buffer is too short or the
    /// magic is wrong, and `FormatError::UnsupportedVersion` for any other
    /// format version.
    pub fn parse(bytes: &[u8]) -> Result<(Self, &[u8])> {
        if bytes.len() < HEADER_LEN {
            return Err(FormatError::CorruptHeader(format!(
                "expected at least {} bytes, found {}",
                HEADER_LEN,
                bytes.len()
            ))
            .into());
        }
        if &bytes[..8] != MAGIC {
            return Err(FormatError::CorruptHeader("bad magic".to_string()).into());
        }

        let version = u16::from_le_bytes([bytes[8], bytes[9]]);
        if version != FORMAT_VERSION {
            return Err(FormatError::UnsupportedVersion {
                found: version,
                expected: FORMAT_VERSION,
            }
            .into());
        }

        if bytes[10..12] != [0, 0] {
            return Err(FormatError::CorruptHeader("reserved bytes set".to_string()).into());
        }

        let kdf = KdfParams {
            memory_kib: read_u32(bytes, 12),
            iterations: read_u32(bytes, 16),
            parallelism: read_u32(bytes, 20),
        };
        if kdf.iterations == 0 || kdf.parallelism == 0 {
            return Err(FormatError::CorruptHeader("invalid kdf parameters".to_string()).into());
        }

        let mut salt = [0u8; SALT_LEN];
        salt.copy_from_slice(&bytes[SALT_AT..NONCE_AT]);
        let mut nonce = [0u8; NONCE_LEN];
        nonce.copy_from_slice(&bytes[NONCE_AT..NONCE_AT + NONCE_LEN]);

        Ok((
            Self {
                kdf,
                salt: Salt(salt),
                nonce: Nonce(nonce),
            },
            &bytes[HEADER_LEN..],
        ))
    }
}

fn read_u32(bytes: &[u8], at: usize) -> u32 {
    u32::from_le_bytes([bytes[at], bytes[at + 1], bytes[at + 2], bytes[at + 3]])
}
