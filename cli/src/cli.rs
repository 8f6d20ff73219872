// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, ffi::OsString, path::PathBuf};

use clap::{ArgMatches, Command, ValueHint, arg, builder::styling, crate_version, value_parser};
use colored::Colorize;
use evform_core::{APP_NAME, Config, ResetPolicy};
use tracing_subscriber::{EnvFilter, fmt};

use crate::cmd_edit::CmdEdit;
use crate::cmd_fields::CmdFields;
use crate::cmd_generate_completion::CmdGenerateCompletion;
use crate::cmd_repl::CmdRepl;
use crate::config::parse_config;

/// Run the evform command-line interface.
pub async fn run() -> Result<(), Box<dyn Error>> {
    let cli = match Cli::parse() {
        Ok(cli) => cli,
        Err(e) => {
            eprintln!("{} {}", "Error:".red(), e);
            std::process::exit(2);
        }
    };

    init_tracing(cli.verbose);
    if let Err(e) = cli.run().await {
        eprintln!("{} {}", "Error:".red(), e);
        std::process::exit(1);
    }
    Ok(())
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Command-line interface
#[derive(Debug)]
pub struct Cli {
    /// Path to the configuration file
    pub config: Option<PathBuf>,

    /// Overrides the configured reset policy
    pub reset_on: Option<ResetPolicy>,

    /// Log at debug level unless `RUST_LOG` says otherwise
    pub verbose: bool,

    /// The command to execute
    pub command: Commands,
}

impl Cli {
    /// Create the command-line interface
    pub fn command() -> Command {
        const STYLES: styling::Styles = styling::Styles::styled()
            .header(styling::AnsiColor::Green.on_default().bold())
            .usage(styling::AnsiColor::Green.on_default().bold())
            .literal(styling::AnsiColor::Blue.on_default().bold())
            .placeholder(styling::AnsiColor::Cyan.on_default());

        Command::new(APP_NAME)
            .about("Edit calendar event drafts with timezone-aware dates.")
            .author("Zexin Yuan <aim@yzx9.xyz>")
            .version(crate_version!())
            .styles(STYLES)
            .subcommand_required(true)
            .arg_required_else_help(true)
            .arg(
                arg!(-c --config [CONFIG] "Path to the configuration file")
                    .long_help(
                        "\
Path to the configuration file. Defaults to $XDG_CONFIG_HOME/evform/config.toml on Linux and MacOS, \
%LOCALAPPDATA%/evform/config.toml on Windows.",
                    )
                    .value_parser(value_parser!(PathBuf))
                    .value_hint(ValueHint::FilePath),
            )
            .arg(
                arg!(--"reset-on" <POLICY> "When a changed source record resets the draft")
                    .value_parser(value_parser!(ResetPolicy)),
            )
            .arg(arg!(-v --verbose "Show debug logs"))
            .subcommand(CmdFields::command())
            .subcommand(CmdEdit::command())
            .subcommand(CmdRepl::command())
            .subcommand(CmdGenerateCompletion::command())
    }

    /// Parse the command-line arguments
    pub fn parse() -> Result<Self, Box<dyn Error>> {
        let commands = Self::command();
        let matches = commands.get_matches();
        Self::from(matches)
    }

    /// Parse the specified arguments
    pub fn try_parse_from<I, T>(args: I) -> Result<Self, Box<dyn Error>>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let commands = Self::command();
        let matches = commands.try_get_matches_from(args)?;
        Self::from(matches)
    }

    /// Create a CLI instance from the `ArgMatches`
    pub fn from(matches: ArgMatches) -> Result<Self, Box<dyn Error>> {
        use Commands::*;
        let command = match matches.subcommand() {
            Some((CmdFields::NAME, matches)) => Fields(CmdFields::from(matches)),
            Some((CmdEdit::NAME, matches)) => Edit(CmdEdit::from(matches)),
            Some((CmdRepl::NAME, matches)) => Repl(CmdRepl::from(matches)),
            Some((CmdGenerateCompletion::NAME, matches)) => {
                GenerateCompletion(CmdGenerateCompletion::from(matches))
            }
            Some((name, _)) => return Err(format!("Unknown command: {name}").into()),
            None => return Err("No command given".into()),
        };

        Ok(Cli {
            config: matches.get_one("config").cloned(),
            reset_on: matches.get_one("reset-on").copied(),
            verbose: matches.get_flag("verbose"),
            command,
        })
    }

    /// Run the command
    pub async fn run(self) -> Result<(), Box<dyn Error>> {
        self.command.run(self.config, self.reset_on).await
    }
}

/// The commands available in the CLI
#[derive(Debug, Clone)]
pub enum Commands {
    /// Show the form fields
    Fields(CmdFields),

    /// Apply edits and submit
    Edit(CmdEdit),

    /// Edit interactively
    Repl(CmdRepl),

    /// Generate shell completion
    GenerateCompletion(CmdGenerateCompletion),
}

impl Commands {
    /// Run the command with the given configuration
    pub async fn run(
        self,
        config: Option<PathBuf>,
        reset_on: Option<ResetPolicy>,
    ) -> Result<(), Box<dyn Error>> {
        use Commands::*;
        match self {
            Fields(a) => a.run(&Self::load_config(config, reset_on).await?).await,
            Edit(a) => a.run(&Self::load_config(config, reset_on).await?).await,
            Repl(a) => a.run(&Self::load_config(config, reset_on).await?).await,
            GenerateCompletion(a) => a.run(),
        }
    }

    async fn load_config(
        path: Option<PathBuf>,
        reset_on: Option<ResetPolicy>,
    ) -> Result<Config, Box<dyn Error>> {
        tracing::debug!("parsing configuration...");
        let mut config = parse_config(path).await?;
        if let Some(reset_on) = reset_on {
            config.reset_on = reset_on;
        }
        Ok(config)
    }
}
