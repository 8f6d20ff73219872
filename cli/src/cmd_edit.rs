// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{cell::RefCell, error::Error, path::PathBuf, rc::Rc};

use clap::{Arg, ArgAction, ArgMatches, Command, ValueHint, arg, value_parser};
use colored::Colorize;
use evform_core::{Action, Config, Dispatcher, EventEditor, SubmitPayload};
use serde_json::Value;
use tokio::fs;

use crate::arg::CommonArgs;
use crate::session::{open_editor, write_payload};
use crate::util::{parse_assignment, parse_script};

#[derive(Debug, Clone)]
pub struct CmdEdit {
    pub source: Option<PathBuf>,
    pub assignments: Vec<(String, Value)>,
    pub script: Option<PathBuf>,
    pub out: Option<PathBuf>,
}

impl CmdEdit {
    pub const NAME: &str = "edit";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Apply field edits to an event and submit it")
            .arg(CommonArgs::source())
            .arg(
                Arg::new("set")
                    .short('s')
                    .long("set")
                    .value_name("PATH=VALUE")
                    .help("Set a field, VALUE is read as JSON when it parses")
                    .action(ArgAction::Append)
                    .value_parser(parse_assignment),
            )
            .arg(
                arg!(--script <FILE> "File of PATH=VALUE lines, applied after --set")
                    .value_parser(value_parser!(PathBuf))
                    .value_hint(ValueHint::FilePath),
            )
            .arg(
                arg!(-o --out <FILE> "Write the submitted event here instead of stdout")
                    .value_parser(value_parser!(PathBuf))
                    .value_hint(ValueHint::FilePath),
            )
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            source: CommonArgs::get_source(matches),
            assignments: matches
                .get_many::<(String, Value)>("set")
                .map(|a| a.cloned().collect())
                .unwrap_or_default(),
            script: matches.get_one("script").cloned(),
            out: matches.get_one("out").cloned(),
        }
    }

    pub async fn run(self, config: &Config) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "editing event...");
        let editor = open_editor(config, self.source.as_deref()).await?;

        let mut assignments = self.assignments;
        if let Some(script) = &self.script {
            let content = fs::read_to_string(script)
                .await
                .map_err(|e| format!("Failed to read script at {}: {}", script.display(), e))?;
            assignments.extend(parse_script(&content)?);
        }

        let payload = Self::apply(editor, assignments)?;
        write_payload(&payload, self.out.as_deref()).await
    }

    /// Runs the edits through a dispatcher, then submits.
    pub fn apply(
        editor: EventEditor,
        assignments: Vec<(String, Value)>,
    ) -> Result<SubmitPayload, Box<dyn Error>> {
        let editor = Rc::new(RefCell::new(editor));
        let submitted = Rc::new(RefCell::new(None));

        let mut dispatcher = Dispatcher::new();
        let sink = submitted.clone();
        EventEditor::register_to(editor.clone(), &mut dispatcher, move |payload| {
            *sink.borrow_mut() = Some(payload);
        });

        for (path, value) in assignments {
            let action = Action::set_field(&path, value)?;
            dispatcher
                .dispatch(&action)
                .map_err(|e| format!("Failed to set {path}: {e}"))?;
        }

        if editor.borrow().submit_button().disabled {
            let msg = format!("{} the event name is empty", "Submit disabled:".yellow());
            return Err(msg.into());
        }

        dispatcher.dispatch(&Action::Submit)?;
        let payload = submitted.borrow_mut().take();
        payload.ok_or_else(|| "Nothing was submitted".into())
    }
}
