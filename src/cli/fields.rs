//! Fields command.

use tracing::info;

use crate::cli::{output, prompt};
use crate::core::store::StoreManager;
use crate::core::validation;
use crate::core::workspace::Workspace;
use crate::error::Result;

/// List the services stored in a store. Passwords are not shown.
pub fn execute(workspace: &Workspace, name: &str) -> Result<()> {
    info!("Listing fields in store: {}", name);
    validation::validate_name(name)?;

    let store = workspace.open(name, prompt::master_key()?)?;
    let services = store.get_fields()?;

    if services.is_empty() {
        output::dimmed("no fields in store");
        output::hint(&format!(
            "run: {}",
            output::cmd(&format!("ghostpass add --name {}", name))
        ));
        return Ok(());
    }

    let rows: Vec<Vec<&str>> = services.iter().map(|s| vec![s.as_str()]).collect();
    output::table(&["Service"], &rows);
    Ok(())
}
