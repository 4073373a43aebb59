//! Command-line entry points: direct subcommands and the interactive wizard.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};

use crate::config::WARNING_FILE_SIZE;
use crate::file::{discovery, operations};
use crate::processor::Processor;
use crate::secret::Password;
use crate::types::{FileInfo, Processing, ProcessorMode};
use crate::ui::progress::Bar;
use crate::ui::{display, prompt};
use crate::worker;

#[derive(Subcommand)]
pub enum Commands {
    /// Encrypt a file into a password-protected container.
    Encrypt {
        #[arg(short, long)]
        input: String,

        #[arg(short, long)]
        output: Option<String>,

        #[arg(short, long)]
        password: Option<String>,
    },

    /// Decrypt a previously encrypted container.
    Decrypt {
        #[arg(short, long)]
        input: String,

        #[arg(short, long)]
        output: Option<String>,

        #[arg(short, long)]
        password: Option<String>,
    },

    /// Guided wizard with file discovery (the default).
    Interactive,
}

#[derive(Parser)]
#[command(name = "bytelock-rs", version = "1.2.0", about = "Encrypt files with AES-256-GCM and PBKDF2-derived keys.")]
pub struct App {
    #[command(subcommand)]
    command: Option<Commands>,
}

impl App {
    pub fn init() -> Result<Self> {
        let subscriber = tracing_subscriber::fmt().with_file(true).with_line_number(true).finish();
        tracing::subscriber::set_global_default(subscriber)?;
        Ok(Self::parse())
    }

    pub async fn execute(self) -> Result<()> {
        match self.command {
            Some(Commands::Encrypt { input, output, password }) => Self::run_mode(input, output, password, Processing::Encryption).await,
            Some(Commands::Decrypt { input, output, password }) => Self::run_mode(input, output, password, Processing::Decryption).await,
            Some(Commands::Interactive) | None => Self::run_interactive().await,
        }
    }

    async fn run_mode(input: String, output: Option<String>, password: Option<String>, processing: Processing) -> Result<()> {
        let input = PathBuf::from(input);
        let output = output.map_or_else(|| operations::output_path(&input, processing.mode()), PathBuf::from);
        let password = match password {
            Some(password) => Password::from_string(password),
            None => Self::ask_password(processing)?,
        };

        Self::process(processing, &input, &output, password).await?;

        display::show_success(processing.mode(), &output);

        Ok(())
    }

    async fn run_interactive() -> Result<()> {
        display::clear_screen()?;
        display::print_banner();

        let mode = prompt::select_mode()?;
        let processing = match mode {
            ProcessorMode::Encrypt => Processing::Encryption,
            ProcessorMode::Decrypt => Processing::Decryption,
        };

        let candidates = discovery::find_eligible_files(Path::new("."), mode);
        if candidates.is_empty() {
            bail!("no eligible files found");
        }

        let infos: Vec<FileInfo> = candidates.iter().filter_map(|p| operations::file_info(p).ok().flatten()).collect();
        display::show_file_info(&infos);

        let input = prompt::select_file(&candidates)?;

        let size = std::fs::metadata(&input).with_context(|| format!("cannot stat: {}", input.display()))?.len();
        if size > WARNING_FILE_SIZE && !prompt::confirm_large_file(&input)? {
            bail!("operation canceled");
        }

        let output = operations::output_path(&input, mode);
        if output.exists() && !prompt::confirm_overwrite(&output)? {
            bail!("operation canceled");
        }

        let password = Self::ask_password(processing)?;

        Self::process(processing, &input, &output, password).await?;

        display::show_success(mode, &output);

        let label = match mode {
            ProcessorMode::Encrypt => "original",
            ProcessorMode::Decrypt => "encrypted",
        };

        if prompt::confirm_delete(&input, label)? {
            tokio::fs::remove_file(&input).await.with_context(|| format!("cannot remove: {}", input.display()))?;
            display::show_source_deleted(&input);
        }

        Ok(())
    }

    async fn process(processing: Processing, input: &Path, output: &Path, password: Password) -> Result<()> {
        let data = operations::read_file(input).await?;

        let bar = Bar::new(processing.label());
        let result = worker::run(Processor::new(password), processing, data, &bar)
            .await
            .with_context(|| format!("{processing} failed: {}", input.display()))?;
        bar.finish();

        operations::write_file(output, &result).await
    }

    fn ask_password(processing: Processing) -> Result<Password> {
        match processing {
            Processing::Encryption => Ok(Password::new(&prompt::encryption_password()?)),
            Processing::Decryption => Ok(Password::new(&prompt::decryption_password()?)),
        }
    }
}
