// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{cell::RefCell, error::Error, io::Write, path::PathBuf, rc::Rc};

use clap::{ArgMatches, Command};
use colored::Colorize;
use evform_core::{Action, Config, DateField, Dispatcher, EventEditor, SubmitPayload};
use serde_json::Value;
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::arg::CommonArgs;
use crate::field_formatter::FieldFormatter;
use crate::session::{load_source, open_editor, write_payload};
use crate::util::parse_value;

const HELP: &str = "\
set PATH VALUE    set a field, VALUE is read as JSON when it parses
tz ZONE           change the timezone, keeping wall-clock times
start WALLCLOCK   set the start, e.g. 2024-01-01T12:00, empty to clear
end WALLCLOCK     set the end
tiers JSON        replace the tier list with a JSON array
fields            show the form fields
show              show the draft
reload [SOURCE]   offer the source record again
submit            submit the draft
help              show this help
quit              leave";

#[derive(Debug, Clone)]
pub struct CmdRepl {
    pub source: Option<PathBuf>,
}

impl CmdRepl {
    pub const NAME: &str = "repl";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Edit an event interactively, one command per line")
            .arg(CommonArgs::source())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            source: CommonArgs::get_source(matches),
        }
    }

    pub async fn run(self, config: &Config) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "starting repl...");
        let editor = Rc::new(RefCell::new(
            open_editor(config, self.source.as_deref()).await?,
        ));
        let submitted = Rc::new(RefCell::new(Vec::new()));

        let mut dispatcher = Dispatcher::new();
        let sink = submitted.clone();
        EventEditor::register_to(editor.clone(), &mut dispatcher, move |payload| {
            sink.borrow_mut().push(payload);
        });

        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        prompt()?;
        while let Some(line) = lines.next_line().await? {
            let command = match ReplCommand::parse_line(&line) {
                Ok(Some(command)) => command,
                Ok(None) => {
                    prompt()?;
                    continue;
                }
                Err(e) => {
                    eprintln!("{} {}", "Error:".red(), e);
                    prompt()?;
                    continue;
                }
            };

            let result = match command {
                ReplCommand::Quit => break,
                ReplCommand::Reload(path) => {
                    let path = path.or_else(|| self.source.clone());
                    match load_source(path.as_deref()).await {
                        Ok(source) => {
                            let reset = editor.borrow_mut().refresh(source);
                            println!("{}", if reset { "draft reset" } else { "draft kept" });
                            Ok(())
                        }
                        Err(e) => Err(e),
                    }
                }
                command => Self::execute(command, &editor, &mut dispatcher),
            };
            if let Err(e) = result {
                eprintln!("{} {}", "Error:".red(), e);
            }

            let payloads: Vec<SubmitPayload> = submitted.borrow_mut().drain(..).collect();
            for payload in payloads {
                write_payload(&payload, None).await?;
            }
            prompt()?;
        }
        Ok(())
    }

    fn execute(
        command: ReplCommand,
        editor: &Rc<RefCell<EventEditor>>,
        dispatcher: &mut Dispatcher,
    ) -> Result<(), Box<dyn Error>> {
        let action = match command {
            ReplCommand::Set(path, value) => Action::set_field(&path, value)?,
            ReplCommand::Timezone(zone) => editor.borrow().timezone_picker().on_change(zone),
            ReplCommand::Date(field, wall_clock) => Action::ChangeDate(field, wall_clock),
            ReplCommand::Tiers(tiers) => {
                Action::SetTiers(tiers.into_iter().map(Into::into).collect())
            }
            ReplCommand::Fields => {
                let fields = editor.borrow().fields()?;
                if fields.is_empty() {
                    println!("{}", "No parent collective, nothing to render".italic());
                } else {
                    print!("{}", FieldFormatter::new().format(&fields));
                }
                return Ok(());
            }
            ReplCommand::Show => {
                let editor = editor.borrow();
                let draft = editor.store().draft().to_document()?;
                println!("{}", serde_json::to_string_pretty(&draft)?);
                let button = editor.submit_button();
                let state = if button.disabled {
                    "disabled".yellow()
                } else {
                    "enabled".green()
                };
                println!("{} ({state})", button.label);
                return Ok(());
            }
            ReplCommand::Submit => {
                if editor.borrow().submit_button().disabled {
                    return Err("Submit is disabled, the event name is empty".into());
                }
                Action::Submit
            }
            ReplCommand::Help => {
                println!("{HELP}");
                return Ok(());
            }
            ReplCommand::Reload(_) | ReplCommand::Quit => return Ok(()),
        };
        dispatcher.dispatch(&action)?;
        Ok(())
    }
}

fn prompt() -> Result<(), Box<dyn Error>> {
    print!("{} ", ">".bold());
    std::io::stdout().flush()?;
    Ok(())
}

/// One line of REPL input.
#[derive(Debug, Clone, PartialEq)]
pub enum ReplCommand {
    Set(String, Value),
    Timezone(String),
    Date(DateField, String),
    Tiers(Vec<Value>),
    Fields,
    Show,
    Reload(Option<PathBuf>),
    Submit,
    Help,
    Quit,
}

impl ReplCommand {
    /// Parses a line, `None` for a blank line.
    pub fn parse_line(line: &str) -> Result<Option<Self>, String> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }

        let (word, rest) = line
            .split_once(char::is_whitespace)
            .map_or((line, ""), |(word, rest)| (word, rest.trim()));

        let command = match word {
            "set" => {
                let (path, value) = rest
                    .split_once(char::is_whitespace)
                    .map_or((rest, ""), |(path, value)| (path, value.trim()));
                if path.is_empty() {
                    return Err("usage: set PATH VALUE".to_string());
                }
                ReplCommand::Set(path.to_string(), parse_value(value))
            }
            "tz" if !rest.is_empty() => ReplCommand::Timezone(rest.to_string()),
            "tz" => return Err("usage: tz ZONE".to_string()),
            "start" => ReplCommand::Date(DateField::StartsAt, rest.to_string()),
            "end" => ReplCommand::Date(DateField::EndsAt, rest.to_string()),
            "tiers" => match parse_value(rest) {
                Value::Array(tiers) => ReplCommand::Tiers(tiers),
                _ => return Err("usage: tiers JSON_ARRAY".to_string()),
            },
            "fields" => ReplCommand::Fields,
            "show" => ReplCommand::Show,
            "reload" => ReplCommand::Reload((!rest.is_empty()).then(|| PathBuf::from(rest))),
            "submit" => ReplCommand::Submit,
            "help" | "?" => ReplCommand::Help,
            "quit" | "exit" | "q" => ReplCommand::Quit,
            _ => return Err(format!("unknown command '{word}', try 'help'")),
        };
        Ok(Some(command))
    }
}
