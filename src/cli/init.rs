//! Init command.
//!
//! Create a new, empty secret store and write it to the workspace.

use tracing::info;

use crate::cli::{output, prompt};
use crate::core::store::StoreManager;
use crate::core::validation;
use crate::core::workspace::Workspace;
use crate::error::{Result, StoreError};

/// Initialize a secret store.
///
/// # Errors
///
/// Returns `StoreError::AlreadyExists` if a store with that name exists.
pub fn execute(workspace: &Workspace, name: &str) -> Result<()> {
    info!("Initializing store: {}", name);

    // Fail before asking for a key.
    validation::validate_name(name)?;
    if workspace.exists(name) {
        return Err(StoreError::AlreadyExists(name.to_string()).into());
    }

    output::header(&format!("Initializing secret store {}", output::key(name)));
    let master_key = prompt::new_master_key()?;

    let mut store = workspace.init(name, master_key)?;
    store.commit()?;

    output::success(&format!("initialized {}", output::key(store.name())));
    output::kv("path:", output::path(store.path().display()));

    let kdf = workspace.config().kdf;
    output::kv(
        "kdf:",
        format!(
            "argon2id m={}KiB t={} p={}",
            kdf.memory_kib, kdf.iterations, kdf.parallelism
        ),
    );
    Ok(())
}
