//! Constants used throughout ghostpass.
//!
//! Centralizes file names, sizes and defaults.

/// Environment variable overriding the workspace directory.
pub const HOME_ENV: &str = "GHOSTPASS_HOME";

/// Environment variable holding the tracing filter.
pub const LOG_ENV: &str = "GHOSTPASS_LOG";

/// Workspace directory relative to HOME (~/.ghostpass).
pub const WORKSPACE_DIR: &str = ".ghostpass";

/// Workspace configuration file name.
pub const CONFIG_FILE: &str = "config.toml";

/// Extension of persisted store files (`<name>.gp`).
pub const STORE_EXTENSION: &str = "gp";

/// Extension appended to a store file for its lock marker (`<name>.gp.lock`).
pub const LOCK_EXTENSION: &str = "lock";

/// Prefix of the default plainsight output file (`plainsight_<name>.out`).
pub const PLAINSIGHT_PREFIX: &str = "plainsight_";

/// Extension of the default plainsight output file.
pub const PLAINSIGHT_EXTENSION: &str = "out";

/// Derived key length in bytes.
pub const KEY_LEN: usize = 32;

/// Salt length in bytes.
pub const SALT_LEN: usize = 32;

/// XChaCha20-Poly1305 nonce length in bytes.
pub const NONCE_LEN: usize = 24;

/// Poly1305 tag length in bytes.
pub const TAG_LEN: usize = 16;

/// Default Argon2id memory cost (64 MiB).
pub const DEFAULT_KDF_MEMORY_KIB: u32 = 65536;

/// Default Argon2id pass count.
pub const DEFAULT_KDF_ITERATIONS: u32 = 3;

/// Default Argon2id lane count.
pub const DEFAULT_KDF_PARALLELISM: u32 = 4;

/// Default plainsight output path for a store.
pub fn default_outfile(name: &str) -> String {
    format!("{}{}.{}", PLAINSIGHT_PREFIX, name, PLAINSIGHT_EXTENSION)
}
