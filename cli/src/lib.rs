// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Command-line host for the evform event editor.

mod arg;
mod cli;
mod cmd_edit;
mod cmd_fields;
mod cmd_generate_completion;
mod cmd_repl;
mod config;
mod field_formatter;
mod session;
mod util;

pub use crate::cli::{Cli, Commands, run};
