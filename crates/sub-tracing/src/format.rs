// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Event formatter printing one logrus line per event.
//!
//! ```text
//! error msg='Mem Fail' error='Cannot allocate memory'
//! fatal msg='Test Fatal' [src/main.rs:42 main]
//! ```
//!
//! [`FormatStyle::Short`] replaces the padded label with one letter
//! (`T D I W E F`).
//!
//! Events under the fatal target are labelled `fatal` even though tracing
//! carries them at `ERROR`. Events from other crates are printed with their
//! message and remaining fields as `key=value`.

use std::fmt::{self, Write};

use colored::{ColoredString, Colorize};
use logrus_core::{Severity, backend::tracing::severity_of};
use tracing::{
	Event, Subscriber,
	field::{Field, Visit},
};
use tracing_subscriber::{
	fmt::{
		FmtContext, FormatEvent, FormatFields,
		format::Writer,
		time::{FormatTime, SystemTime},
	},
	registry::LookupSpan,
};

use crate::config::FormatStyle;

#[derive(Debug, Clone, Copy, Default)]
pub struct LineFormat {
	style: FormatStyle,
}

impl LineFormat {
	pub fn new(style: FormatStyle) -> Self {
		Self {
			style,
		}
	}
}

impl<S, N> FormatEvent<S, N> for LineFormat
where
	S: Subscriber + for<'a> LookupSpan<'a>,
	N: for<'a> FormatFields<'a> + 'static,
{
	fn format_event(&self, _ctx: &FmtContext<'_, S, N>, mut writer: Writer<'_>, event: &Event<'_>) -> fmt::Result {
		if self.style == FormatStyle::Timeline {
			SystemTime.format_time(&mut writer)?;
			writer.write_char(' ')?;
		}

		let severity = severity_of(event.metadata());
		let label = match self.style {
			FormatStyle::Short => severity.short().to_string(),
			FormatStyle::Compact | FormatStyle::Timeline => format!("{:<5}", severity.as_str()),
		};
		if writer.has_ansi_escapes() {
			write!(writer, "{}", paint(severity, &label))?;
		} else {
			writer.write_str(&label)?;
		}

		let mut visitor = LineVisitor::default();
		event.record(&mut visitor);

		write!(writer, " {}", visitor.message)?;
		if !visitor.extra.is_empty() {
			write!(writer, "{}", visitor.extra)?;
		}
		if let Some(file) = &visitor.file {
			write!(writer, " [{file}")?;
			if let Some(line) = visitor.line {
				write!(writer, ":{line}")?;
			}
			if let Some(function) = &visitor.function {
				write!(writer, " {function}")?;
			}
			writer.write_char(']')?;
		}
		writeln!(writer)
	}
}

fn paint(severity: Severity, label: &str) -> ColoredString {
	match severity {
		Severity::Trace => label.dimmed(),
		Severity::Debug => label.blue(),
		Severity::Info => label.green(),
		Severity::Warn => label.yellow(),
		Severity::Error => label.red(),
		Severity::Fatal => label.white().on_red().bold(),
		Severity::Off => label.normal(),
	}
}

#[derive(Default)]
struct LineVisitor {
	message: String,
	extra: String,
	file: Option<String>,
	line: Option<u64>,
	function: Option<String>,
}

impl Visit for LineVisitor {
	fn record_str(&mut self, field: &Field, value: &str) {
		match field.name() {
			"message" => self.message = value.to_string(),
			"file" => self.file = Some(value.to_string()),
			"function" => self.function = Some(value.to_string()),
			name => {
				let _ = write!(self.extra, " {name}={value}");
			}
		}
	}

	fn record_u64(&mut self, field: &Field, value: u64) {
		if field.name() == "line" {
			self.line = Some(value);
		} else {
			let _ = write!(self.extra, " {}={value}", field.name());
		}
	}

	fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
		if field.name() == "message" {
			self.message = format!("{value:?}");
		} else {
			let _ = write!(self.extra, " {}={value:?}", field.name());
		}
	}
}
