//! Add command.
//!
//! Add a field to a store. The password is always read with hidden input,
//! or from piped stdin.

use tracing::info;

use crate::cli::{output, prompt};
use crate::core::store::StoreManager;
use crate::core::validation;
use crate::core::workspace::Workspace;
use crate::error::Result;

/// Add or overwrite a field.
///
/// Missing `service` and `username` values are prompted for. Overwriting
/// an existing field asks for confirmation first.
pub fn execute(
    workspace: &Workspace,
    name: &str,
    service: Option<String>,
    username: Option<String>,
) -> Result<()> {
    info!("Adding field to store: {}", name);
    validation::validate_name(name)?;

    output::header(&format!("Adding field to {}", output::key(name)));
    let mut store = workspace.open(name, prompt::master_key()?)?;

    let service = match service {
        Some(service) => service,
        None => prompt::line("Service")?,
    };
    validation::validate_service(&service)?;

    let username = match username {
        Some(username) => username,
        None => prompt::line("Username")?,
    };
    let password = prompt::secret(&format!("Password for {}", output::key(&service)))?;

    if store.field_exists(&service)? {
        output::warn(&format!("{} already exists", output::key(&service)));
        if !prompt::confirm("Overwrite?")? {
            output::dimmed("aborted");
            return Ok(());
        }
    }

    store.add_field(&service, &username, &password)?;
    store.commit()?;

    output::success(&format!(
        "added {} to {}",
        output::key(&service),
        output::key(name)
    ));
    Ok(())
}
