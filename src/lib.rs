//! Ghostpass - A privacy-first secrets manager.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── init          # Create a store
//! │   ├── add/remove    # Field mutations
//! │   ├── view/fields   # Field queries
//! │   ├── import/export # Plainsight transfer
//! │   └── completions   # Shell completions
//! └── core/             # Store engine
//!     ├── crypto        # Argon2id + XChaCha20-Poly1305
//!     ├── fields        # Field model and encoding
//!     ├── persist/      # Header, atomic writes, lock marker
//!     ├── plainsight/   # Payload embedding in carrier text
//!     ├── store/        # Store handle and lifecycle
//!     ├── workspace     # Store directory and factory
//!     ├── config        # config.toml
//!     └── guard         # Interrupt purge
//! ```
//!
//! # Example
//!
//! ```no_run
//! use ghostpass::core::crypto::MasterKey;
//! use ghostpass::core::store::StoreManager;
//! use ghostpass::core::workspace::Workspace;
//!
//! # fn main() -> ghostpass::error::Result<()> {
//! let workspace = Workspace::resolve()?;
//! let mut store = workspace.init("work", MasterKey::from("hunter2"))?;
//! store.add_field("github", "alice", "pw1")?;
//! store.commit()?;
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod core;
pub mod error;
