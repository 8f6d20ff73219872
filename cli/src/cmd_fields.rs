// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, path::PathBuf};

use clap::{ArgMatches, Command};
use colored::Colorize;
use evform_core::Config;

use crate::arg::CommonArgs;
use crate::field_formatter::FieldFormatter;
use crate::session::open_editor;
use crate::util::OutputFormat;

#[derive(Debug, Clone)]
pub struct CmdFields {
    pub source: Option<PathBuf>,
    pub output_format: OutputFormat,
}

impl CmdFields {
    pub const NAME: &str = "fields";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Show the form fields of an event")
            .arg(CommonArgs::source())
            .arg(CommonArgs::output_format())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            source: CommonArgs::get_source(matches),
            output_format: CommonArgs::get_output_format(matches),
        }
    }

    pub async fn run(self, config: &Config) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "listing fields...");
        let editor = open_editor(config, self.source.as_deref()).await?;
        if !editor.is_ready() {
            eprintln!("{}", "No parent collective, nothing to render".italic());
            return Ok(());
        }

        let fields = editor.fields()?;
        let formatter = FieldFormatter::new().with_output_format(self.output_format);
        print!("{}", formatter.format(&fields));
        if self.output_format == OutputFormat::Json {
            println!();
        }
        Ok(())
    }
}
