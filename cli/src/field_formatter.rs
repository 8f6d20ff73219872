// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{borrow::Cow, fmt};

use colored::Colorize;
use unicode_width::UnicodeWidthStr;

use evform_core::FieldDescriptor;

use crate::util::OutputFormat;

const SEPARATOR: &str = "  ";

#[derive(Debug)]
pub struct FieldFormatter {
    columns: Vec<FieldColumn>,
    format: OutputFormat,
}

impl FieldFormatter {
    pub fn new() -> Self {
        Self {
            columns: vec![
                FieldColumn::Name,
                FieldColumn::Kind,
                FieldColumn::Label,
                FieldColumn::Value,
            ],
            format: OutputFormat::Table,
        }
    }

    pub fn with_output_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    pub fn format<'a>(&'a self, fields: &'a [FieldDescriptor]) -> Display<'a> {
        Display {
            fields,
            formatter: self,
        }
    }
}

impl Default for FieldFormatter {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug)]
pub struct Display<'a> {
    fields: &'a [FieldDescriptor],
    formatter: &'a FieldFormatter,
}

impl fmt::Display for Display<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.formatter.format {
            OutputFormat::Json => {
                let json = serde_json::to_string_pretty(self.fields).map_err(|_| fmt::Error)?;
                write!(f, "{json}")
            }
            OutputFormat::Table => self.write_table(f),
        }
    }
}

impl Display<'_> {
    fn write_table(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let columns = &self.formatter.columns;
        let header: Vec<Cow<'_, str>> = columns.iter().map(|c| c.name().into()).collect();
        let rows: Vec<Vec<Cow<'_, str>>> = self
            .fields
            .iter()
            .map(|field| columns.iter().map(|c| c.format(field)).collect())
            .collect();

        let mut widths: Vec<usize> = header.iter().map(|a| a.width()).collect();
        for row in &rows {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(cell.width());
            }
        }

        let last = columns.len().saturating_sub(1);
        for (i, cell) in header.iter().enumerate() {
            let cell = pad(cell, widths.get(i).copied().unwrap_or_default(), i == last);
            write!(f, "{}", cell.bold())?;
            write!(f, "{}", if i == last { "\n" } else { SEPARATOR })?;
        }

        for (row, field) in rows.iter().zip(self.fields) {
            for (i, (column, cell)) in columns.iter().zip(row).enumerate() {
                let cell = pad(cell, widths.get(i).copied().unwrap_or_default(), i == last);
                write!(f, "{}", column.stylize(field, cell))?;
                write!(f, "{}", if i == last { "\n" } else { SEPARATOR })?;
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldColumn {
    Name,
    Kind,
    Label,
    Value,
}

impl FieldColumn {
    fn name(self) -> &'static str {
        match self {
            FieldColumn::Name => "Field",
            FieldColumn::Kind => "Type",
            FieldColumn::Label => "Label",
            FieldColumn::Value => "Value",
        }
    }

    fn format(self, field: &FieldDescriptor) -> Cow<'_, str> {
        match self {
            FieldColumn::Name => field.name.into(),
            FieldColumn::Kind => field.kind.to_string().into(),
            FieldColumn::Label if field.validate.is_some() => format!("{} *", field.label).into(),
            FieldColumn::Label => field.label.as_str().into(),
            FieldColumn::Value => field.default_value.as_str().into(),
        }
    }

    fn stylize(self, field: &FieldDescriptor, cell: String) -> String {
        match self {
            FieldColumn::Name => cell.cyan().to_string(),
            FieldColumn::Value if field.default_value.is_empty() => cell.dimmed().to_string(),
            _ => cell,
        }
    }
}

fn pad(cell: &str, width: usize, is_last: bool) -> String {
    if is_last {
        return cell.to_string();
    }
    let fill = width.saturating_sub(cell.width());
    format!("{cell}{}", " ".repeat(fill))
}
