//! Remove command.

use tracing::info;

use crate::cli::{output, prompt};
use crate::core::store::StoreManager;
use crate::core::validation;
use crate::core::workspace::Workspace;
use crate::error::Result;

/// Remove a field and commit the store.
pub fn execute(workspace: &Workspace, name: &str, service: Option<String>) -> Result<()> {
    info!("Removing field from store: {}", name);
    validation::validate_name(name)?;

    output::header(&format!("Removing field from {}", output::key(name)));
    let mut store = workspace.open(name, prompt::master_key()?)?;

    let service = match service {
        Some(service) => service,
        None => prompt::line("Service")?,
    };

    store.remove_field(&service)?;
    store.commit()?;

    output::success(&format!(
        "removed {} from {}",
        output::key(&service),
        output::key(name)
    ));
    Ok(())
}
