//! Restaurantly CLI - drive the cart widget from a terminal.
//!
//! # Usage
//!
//! ```bash
//! # Interactive session with the bundled menu
//! restaurantly shell
//!
//! # Interactive session with a custom menu
//! restaurantly shell --menu menu.yaml
//!
//! # Run a script of shell commands
//! restaurantly replay order.txt
//!
//! # List the menu
//! restaurantly menu
//! ```
//!
//! # Commands
//!
//! - `shell` - Read cart commands from stdin
//! - `replay` - Run cart commands from a file
//! - `menu` - Print the menu catalog
//!
//! The cart lives only as long as the process. Logs go to stderr.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::fs::File;
use std::io::{self, BufReader, IsTerminal, Write};
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use restaurantly_storefront::config::LogFormat;
use restaurantly_storefront::{StorefrontConfig, telemetry};

mod commands;

use commands::menu::Menu;
use commands::shell::Session;

const DEFAULT_LOG_DIRECTIVES: &str = "restaurantly_cli=info,restaurantly_storefront=info";

#[derive(Parser)]
#[command(name = "restaurantly")]
#[command(author, version, about = "Restaurantly cart shell")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start an interactive cart session
    Shell {
        /// Menu catalog (YAML); defaults to the bundled menu
        #[arg(short, long)]
        menu: Option<PathBuf>,
    },
    /// Run cart commands from a file
    Replay {
        /// Script with one command per line
        file: PathBuf,

        /// Menu catalog (YAML); defaults to the bundled menu
        #[arg(short, long)]
        menu: Option<PathBuf>,
    },
    /// Print the menu catalog
    Menu {
        /// Menu catalog (YAML); defaults to the bundled menu
        #[arg(short, long)]
        menu: Option<PathBuf>,
    },
}

fn main() {
    let cli = Cli::parse();

    let config = match StorefrontConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            telemetry::init(LogFormat::Pretty, DEFAULT_LOG_DIRECTIVES);
            tracing::error!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };
    telemetry::init(config.log_format, DEFAULT_LOG_DIRECTIVES);

    if let Err(e) = run(cli, &config) {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli, config: &StorefrontConfig) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Shell { menu } => {
            let menu = load_menu(menu.as_deref())?;
            let stdin = io::stdin();
            let interactive = stdin.is_terminal();
            if interactive {
                writeln!(io::stdout(), "Restaurantly cart. Type `help` for commands.")?;
            }
            let mut session = Session::new(config, menu, io::stdout().lock());
            session.run(stdin.lock(), interactive, false)?;
        }
        Commands::Replay { file, menu } => {
            let menu = load_menu(menu.as_deref())?;
            let script = File::open(&file)
                .map_err(|e| format!("Failed to open {}: {e}", file.display()))?;
            tracing::info!(path = %file.display(), "Replaying script");
            let mut session = Session::new(config, menu, io::stdout().lock());
            session.run(BufReader::new(script), false, true)?;
            tracing::info!(
                items_left = session.manager().cart().count(),
                "Replay finished"
            );
        }
        Commands::Menu { menu } => {
            let menu = load_menu(menu.as_deref())?;
            let mut out = io::stdout().lock();
            for item in menu.items() {
                writeln!(out, "{}\t{}\t{}", item.name, item.price, item.image)?;
            }
        }
    }
    Ok(())
}

fn load_menu(path: Option<&Path>) -> Result<Menu, commands::menu::MenuError> {
    match path {
        Some(path) => {
            let menu = Menu::load(path)?;
            tracing::info!(path = %path.display(), items = menu.items().len(), "Menu loaded");
            Ok(menu)
        }
        None => Menu::builtin(),
    }
}
