//! View command.
//!
//! Decrypt a store and print one field, password included.

use tracing::info;

use crate::cli::{output, prompt};
use crate::core::store::StoreManager;
use crate::core::validation;
use crate::core::workspace::Workspace;
use crate::error::Result;

/// Print a single field as a table.
pub fn execute(workspace: &Workspace, name: &str, service: Option<String>) -> Result<()> {
    info!("Viewing field in store: {}", name);
    validation::validate_name(name)?;

    let store = workspace.open(name, prompt::master_key()?)?;

    let service = match service {
        Some(service) => service,
        None => prompt::line("Service")?,
    };

    let field = store.get_field(&service)?;
    output::table(
        &["Service", "Username", "Password"],
        &[vec![field.service(), field.username(), field.password()]],
    );
    Ok(())
}
