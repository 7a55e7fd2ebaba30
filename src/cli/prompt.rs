//! Interactive input.
//!
//! On a terminal, prompts go through `dialoguer` with hidden input for
//! secrets. When stdin is piped, each prompt consumes one line instead, so
//! scripts and tests can drive every command.

use std::io::{self, IsTerminal};

use dialoguer::{Confirm, Input, Password};
use zeroize::Zeroizing;

use crate::core::crypto::MasterKey;
use crate::error::Result;

fn interactive() -> bool {
    io::stdin().is_terminal()
}

/// Read one line from stdin without its line ending. EOF yields "".
fn read_line() -> Result<Zeroizing<String>> {
    let mut input = Zeroizing::new(String::new());
    io::stdin().read_line(&mut input)?;
    while input.ends_with('\n') || input.ends_with('\r') {
        input.pop();
    }
    Ok(input)
}

/// Master key for an existing store.
pub fn master_key() -> Result<MasterKey> {
    let key = if interactive() {
        Zeroizing::new(
            Password::new()
                .with_prompt("Master key (will not be echoed)")
                .allow_empty_password(true)
                .interact()?,
        )
    } else {
        read_line()?
    };
    Ok(MasterKey::from(key))
}

/// Master key for a new store, entered twice on a terminal.
pub fn new_master_key() -> Result<MasterKey> {
    let key = if interactive() {
        Zeroizing::new(
            Password::new()
                .with_prompt("Master key (will not be echoed)")
                .with_confirmation("Confirm master key", "keys do not match")
                .allow_empty_password(true)
                .interact()?,
        )
    } else {
        read_line()?
    };
    Ok(MasterKey::from(key))
}

/// Hidden input for a field password.
pub fn secret(label: &str) -> Result<Zeroizing<String>> {
    if interactive() {
        Ok(Zeroizing::new(
            Password::new()
                .with_prompt(label)
                .allow_empty_password(true)
                .interact()?,
        ))
    } else {
        read_line()
    }
}

/// Visible single-line input.
pub fn line(label: &str) -> Result<String> {
    if interactive() {
        Ok(Input::<String>::new()
            .with_prompt(label)
            .allow_empty(true)
            .interact_text()?)
    } else {
        Ok(read_line()?.trim().to_string())
    }
}

/// Yes/no question, defaulting to no.
pub fn confirm(label: &str) -> Result<bool> {
    if interactive() {
        Ok(Confirm::new().with_prompt(label).default(false).interact()?)
    } else {
        let answer = read_line()?;
        Ok(matches!(
            answer.trim().to_lowercase().as_str(),
            "y" | "yes"
        ))
    }
}
