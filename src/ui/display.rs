//! Display utilities: banner, file table, and status messages.

use anyhow::Result;
use bytesize::ByteSize;
use comfy_table::{Cell, ContentArrangement, Table, presets};
use console::{Term, style};
use figlet_rs::FIGfont;

use crate::config::APP_NAME;
use crate::types::{FileInfo, ProcessorMode};

/// Displays discovered files in a table.
pub fn show_file_info(files: &[FileInfo]) {
    if files.is_empty() {
        println!("{}", style("No files found").yellow());
        return;
    }

    println!();
    println!("{} {}", style("✓").green(), style(format!("Found {} file(s):", files.len())).bold());

    let mut table = Table::new();
    table.load_preset(presets::UTF8_BORDERS_ONLY).set_content_arrangement(ContentArrangement::Dynamic).set_header(vec!["No", "Name", "Size", "Status"]);

    for (i, file) in files.iter().enumerate() {
        let name = file.path.file_name().map_or_else(|| file.path.to_string_lossy().into_owned(), |n| n.to_string_lossy().into_owned());
        let status = if file.is_encrypted { "encrypted" } else { "unencrypted" };

        table.add_row(vec![Cell::new(i + 1), Cell::new(name), Cell::new(ByteSize::b(file.size)), Cell::new(status)]);
    }

    println!("{table}");
    println!();
}

pub fn show_success(mode: ProcessorMode, path: &std::path::Path) {
    let action = match mode {
        ProcessorMode::Encrypt => "encrypted",
        ProcessorMode::Decrypt => "decrypted",
    };

    println!();
    println!("{} {}", style("✓").green(), style(format!("File {} successfully: {}", action, path.display())).bold());
}

pub fn show_source_deleted(path: &std::path::Path) {
    println!("{} {}", style("✓").green(), style(format!("Source file deleted: {}", path.display())).bold());
}

pub fn clear_screen() -> Result<()> {
    Term::stdout().clear_screen().map_err(|e| anyhow::anyhow!("failed to clear screen: {e}"))
}

/// Prints the application banner.
pub fn print_banner() {
    let font = FIGfont::standard().ok();
    let rendered = font.as_ref().and_then(|font| font.convert(APP_NAME));

    match rendered {
        Some(figure) => println!("{}", style(figure).green().bold()),
        None => println!("{}", style(APP_NAME).green().bold()),
    }
}
