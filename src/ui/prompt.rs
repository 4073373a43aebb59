//! Interactive prompts: mode and file selection, passwords, confirmations.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use console::style;
use inquire::{Confirm, Password, PasswordDisplayMode, Select};

use crate::password;
use crate::types::ProcessorMode;

/// Prompts for an encryption password with confirmation, then shows the
/// strength estimate. A weak password only warns; the choice stands.
pub fn encryption_password() -> Result<String> {
    let entered = Password::new("Enter encryption password:")
        .with_display_mode(PasswordDisplayMode::Masked)
        .with_custom_confirmation_message("Confirm password:")
        .with_custom_confirmation_error_message("The passwords do not match.")
        .prompt()
        .context("password prompt failed")?;

    let strength = password::score(&entered);
    if strength.score <= 2 {
        println!("{} {}", style("!").yellow().bold(), style(format!("Password strength: {}", strength.label)).yellow());
        for line in &strength.feedback {
            println!("  {} {line}", style("-").dim());
        }
    }

    Ok(entered)
}

/// Prompts for a decryption password. No confirmation: the password either
/// opens the container or it doesn't.
pub fn decryption_password() -> Result<String> {
    Password::new("Enter decryption password:")
        .with_display_mode(PasswordDisplayMode::Masked)
        .without_confirmation()
        .prompt()
        .context("password prompt failed")
}

pub fn select_mode() -> Result<ProcessorMode> {
    Select::new("What would you like to do?", ProcessorMode::ALL.to_vec()).prompt().context("mode selection failed")
}

pub fn select_file(files: &[PathBuf]) -> Result<PathBuf> {
    let options: Vec<String> = files.iter().map(|p| p.display().to_string()).collect();
    let chosen = Select::new("Select a file:", options).prompt().context("file selection failed")?;
    Ok(PathBuf::from(chosen))
}

pub fn confirm_overwrite(path: &Path) -> Result<bool> {
    Confirm::new(&format!("{} already exists. Overwrite?", path.display())).with_default(false).prompt().context("confirmation failed")
}

pub fn confirm_large_file(path: &Path) -> Result<bool> {
    Confirm::new(&format!("{} is large and will be loaded fully into memory. Continue?", path.display()))
        .with_default(false)
        .prompt()
        .context("confirmation failed")
}

pub fn confirm_delete(path: &Path, label: &str) -> Result<bool> {
    Confirm::new(&format!("Delete the {label} file {}?", path.display())).with_default(false).prompt().context("confirmation failed")
}
