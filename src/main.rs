use anyhow::Result;
use clap::Parser;
use gopass::app::AppState;
use gopass::cli::{
    Cli, Commands, GenerateArgs, handle_generate, prompt_master, resolve_master, settings_from_args,
};
use gopass::clipboard::SystemClipboard;
use gopass::config::Config;
use gopass::utils::paths::{get_domains_log_path, get_master_file_path};
use gopass::{logging, ui};
use std::io;
use std::process::ExitCode;

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    let config = Config::load()?;

    match cli.command {
        Some(Commands::Generate(args)) => {
            logging::init_stderr()?;
            run_generate(args, &config)
        }
        None => {
            // No command - launch TUI
            logging::init_file()?;
            let state = AppState::new(&config, Box::new(SystemClipboard::new()));
            ui::run_tui(state)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn run_generate(args: GenerateArgs, config: &Config) -> Result<ExitCode> {
    let master = resolve_master(&args, &get_master_file_path()?, prompt_master)?;
    let settings = settings_from_args(&args, config, master);

    // The process exits right after copying, so hand the clipboard over first.
    let mut clipboard = SystemClipboard::for_oneshot();
    handle_generate(
        &args,
        &settings,
        &mut clipboard,
        &get_domains_log_path()?,
        &mut io::stdout().lock(),
        &mut io::stderr().lock(),
    )
}
