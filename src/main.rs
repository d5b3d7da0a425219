//! CLI entry point for stru

use std::io::{self, IsTerminal};
use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, ValueEnum};
use stru::{Console, SnapshotConfig, ensure_ignore_entry, write_snapshot};

/// Color output mode
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum ColorMode {
    /// Auto-detect based on terminal and environment
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Determine whether to use color output based on mode and environment.
fn should_use_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            // Respect NO_COLOR environment variable (https://no-color.org/)
            if std::env::var_os("NO_COLOR").is_some() {
                return false;
            }
            if std::env::var_os("FORCE_COLOR").is_some() {
                return true;
            }
            if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
                return false;
            }
            std::io::stdout().is_terminal()
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "stru")]
#[command(
    about = "Write the current directory's tree and file contents to project_context.txt"
)]
#[command(version)]
struct Args {
    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,
}

/// File name of the running executable, so a copy inside the project is skipped.
fn current_exe_name() -> Option<String> {
    let exe = std::env::current_exe().ok()?;
    Some(exe.file_name()?.to_string_lossy().to_string())
}

/// Status lines are informational; a closed stdout must not fail the run.
fn report(result: io::Result<()>) {
    if let Err(e) = result {
        log::debug!("failed to write status line: {}", e);
    }
}

fn main() {
    let args = Args::parse();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .init();

    let mut console = Console::new(should_use_color(args.color));
    let root = Path::new(".");

    let mut config = SnapshotConfig::default();
    if let Some(name) = current_exe_name() {
        config.filter.skipped_files.insert(name);
    }

    let absolute_root = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    report(console.scanning(&absolute_root));

    let summary = match write_snapshot(root, &config) {
        Ok(summary) => summary,
        Err(e) => {
            eprintln!("stru: {}", e);
            process::exit(1);
        }
    };
    report(console.saved(config.output_file(), &summary));

    match ensure_ignore_entry(root, &config.ignore_file, config.output_file()) {
        Ok(update) => report(console.ignore_updated(
            update,
            config.output_file(),
            &config.ignore_file,
        )),
        Err(e) => report(console.warning(&e.to_string())),
    }
}
