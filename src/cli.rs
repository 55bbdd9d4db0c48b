use crate::app::ResultPage;
use crate::clipboard::CopyCommand;
use crate::config::Config;
use crate::generator::{Settings, WEAK_PASSWORD_LENGTH, generate_password};
use anyhow::{Context, Result};
use chrono::{DateTime, Local};
use clap::{Args, Parser, Subcommand};
use dialoguer::Password;
use serde::Serialize;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::{debug, info, warn};

#[derive(Parser, Debug)]
#[command(name = "gopass", version)]
#[command(about = "Generates domain specific passwords from a master password. Nothing is stored.", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate a password without opening the terminal UI
    Generate(GenerateArgs),
}

#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// The master phrase. Remember to escape shell special characters
    #[arg(short, long, conflicts_with = "master_file")]
    pub master: Option<String>,

    /// File containing the master phrase (defaults to $GOPASS_HOME/master)
    #[arg(long)]
    pub master_file: Option<PathBuf>,

    /// The domain the password is intended for
    #[arg(short, long)]
    pub domain: String,

    /// Free text to add, e.g. an index if the previous password was compromised
    #[arg(short, long, default_value = "")]
    pub additional_info: String,

    /// Length of the password (defaults to the configured length)
    #[arg(short = 'l', long)]
    pub password_length: Option<usize>,

    /// Replace the end of the password with special characters (defaults to the configured value)
    #[arg(long, value_name = "BOOL")]
    pub special_characters: Option<bool>,

    /// Copy the password to the clipboard instead of printing it
    #[arg(short, long, conflicts_with = "json")]
    pub copy: bool,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,

    /// Append the generation parameters (never the password) to $GOPASS_HOME/domains.log
    #[arg(long)]
    pub log_info: bool,
}

#[derive(Serialize)]
struct GeneratedPassword<'a> {
    domain: &'a str,
    password: &'a str,
}

/// Picks the master phrase: `--master`, then `--master-file`, then `default_file`
/// if it exists, and finally `prompt`.
pub fn resolve_master(
    args: &GenerateArgs,
    default_file: &Path,
    prompt: impl FnOnce() -> Result<String>,
) -> Result<String> {
    if let Some(master) = &args.master {
        return Ok(master.clone());
    }
    if let Some(path) = &args.master_file {
        return read_master_file(path);
    }
    if default_file.exists() {
        debug!(path = %default_file.display(), "Using default master file");
        return read_master_file(default_file);
    }
    prompt()
}

/// Asks for the master phrase twice on the terminal without echoing it.
pub fn prompt_master() -> Result<String> {
    let master = Password::new()
        .with_prompt("Master password")
        .with_confirmation("Confirm master password", "Passwords differ")
        .interact()?;
    Ok(master)
}

/// Command line values win over the configuration. The domain is taken as typed.
pub fn settings_from_args(
    args: &GenerateArgs,
    config: &Config,
    master_phrase: String,
) -> Settings {
    Settings {
        master_phrase,
        domain: args.domain.clone(),
        additional_info: args.additional_info.clone(),
        password_length: args.password_length.unwrap_or(config.password_length),
        add_special_characters: args.special_characters.unwrap_or(config.special_characters),
    }
}

/// Runs `gopass generate` once the settings are known.
///
/// The password goes to `out` (plain, JSON, or as the copy button label with `--copy`),
/// warnings go to `err`. With `--copy` the exit code reports whether the copy worked.
pub fn handle_generate(
    args: &GenerateArgs,
    settings: &Settings,
    clipboard: &mut dyn CopyCommand,
    domains_log: &Path,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<ExitCode> {
    let password = generate_password(settings)?;
    info!(domain = %settings.domain, length = settings.password_length, "Generated password");

    if settings.is_weak() {
        warn!(length = settings.password_length, "Generated a weak password");
        writeln!(
            err,
            "Password length is below {WEAK_PASSWORD_LENGTH}. We will grant your wish, but this might be a security risk"
        )?;
    }

    if args.log_info {
        if let Some(dir) = domains_log.parent() {
            fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create directory {}", dir.display()))?;
        }
        let line = format_reminder(
            Local::now(),
            &settings.domain,
            settings.add_special_characters,
            &settings.additional_info,
        );
        append_reminder(domains_log, &line)?;
        info!(path = %domains_log.display(), "Stored reminder about the generated password");
    }

    if args.copy {
        let mut page = ResultPage::new(&settings.domain, &password)?;
        let outcome = page.copy(clipboard);
        writeln!(out, "{}", page.button_label())?;

        return Ok(if outcome.is_copied() {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        });
    }

    if args.json {
        let output = GeneratedPassword {
            domain: &settings.domain,
            password: &password,
        };
        writeln!(out, "{}", serde_json::to_string_pretty(&output)?)?;
    } else {
        writeln!(out, "Your password for {} is {}", settings.domain, password)?;
    }

    Ok(ExitCode::SUCCESS)
}

/// Reads a master phrase file, dropping surrounding line breaks.
pub fn read_master_file(path: &Path) -> Result<String> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to retrieve the master phrase from {}", path.display()))?;
    Ok(content.trim_matches(|c| c == '\r' || c == '\n').to_string())
}

pub fn format_reminder(
    timestamp: DateTime<Local>,
    domain: &str,
    special_characters: bool,
    additional_info: &str,
) -> String {
    format!(
        "Date: [{}], Domain: [{}], Special Characters: [{}], AdditionalInfo: [{}]\n",
        timestamp.to_rfc3339(),
        domain,
        special_characters,
        additional_info
    )
}

/// Appends a line to the reminder log, creating it readable by the owner only.
pub fn append_reminder(path: &Path, line: &str) -> Result<()> {
    let mut options = OpenOptions::new();
    options.create(true).append(true);

    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o600);
    }

    let mut file = options
        .open(path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;
    file.write_all(line.as_bytes())
        .with_context(|| format!("Failed to write to log file {}", path.display()))?;
    Ok(())
}
