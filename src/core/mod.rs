//! Store engine.
//!
//! Everything that touches keys, ciphertext or store files lives here. The
//! CLI only talks to [`workspace::Workspace`] and [`store::StoreManager`].

pub mod config;
pub mod constants;
pub mod crypto;
pub mod fields;
pub mod guard;
pub mod persist;
pub mod plainsight;
pub mod store;
pub mod validation;
pub mod workspace;
