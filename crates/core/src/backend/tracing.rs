// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Default backend: one `tracing` event per line.
//!
//! `tracing` has no level above `ERROR`, so fatal records go out at `ERROR`
//! under [`FATAL_TARGET`]. Subscribers that care (see
//! `logrus-sub-tracing`) use the target to print the `fatal` label and to
//! filter fatal separately from error, without altering tracing's level
//! ordering.

use ::tracing::{Level, Metadata, event};

use crate::{Location, Severity, backend::Backend, render::Line};

/// Target of every non-fatal event
pub const TARGET: &str = "logrus";

/// Target of fatal events
pub const FATAL_TARGET: &str = "logrus::fatal";

macro_rules! emit_event {
	($target:expr, $level:expr, $line:expr, $location:expr) => {
		match $location {
			Some(location) => event!(
				target: $target,
				$level,
				file = location.file,
				line = location.line,
				function = location.function,
				"{}",
				$line.as_str()
			),
			None => event!(target: $target, $level, "{}", $line.as_str()),
		}
	};
}

#[derive(Debug, Default, Clone, Copy)]
pub struct TracingBackend;

impl TracingBackend {
	pub fn new() -> Self {
		Self
	}
}

impl Backend for TracingBackend {
	fn write(&self, severity: Severity, line: &Line, location: Option<&Location<'_>>) {
		match severity {
			Severity::Trace => emit_event!(TARGET, Level::TRACE, line, location),
			Severity::Debug => emit_event!(TARGET, Level::DEBUG, line, location),
			Severity::Info => emit_event!(TARGET, Level::INFO, line, location),
			Severity::Warn => emit_event!(TARGET, Level::WARN, line, location),
			Severity::Error => emit_event!(TARGET, Level::ERROR, line, location),
			Severity::Fatal => emit_event!(FATAL_TARGET, Level::ERROR, line, location),
			Severity::Off => {}
		}
	}
}

/// Map tracing's level back onto a [`Severity`]
pub fn level_severity(level: &Level) -> Severity {
	if *level == Level::ERROR {
		Severity::Error
	} else if *level == Level::WARN {
		Severity::Warn
	} else if *level == Level::INFO {
		Severity::Info
	} else if *level == Level::DEBUG {
		Severity::Debug
	} else {
		Severity::Trace
	}
}

/// The severity an event or span callsite stands for, recognising
/// [`FATAL_TARGET`]. Callsites of other crates map by level.
pub fn severity_of(metadata: &Metadata<'_>) -> Severity {
	if metadata.target() == FATAL_TARGET {
		Severity::Fatal
	} else {
		level_severity(metadata.level())
	}
}

#[cfg(test)]
mod tests {
	use std::sync::{Arc, Mutex};

	use ::tracing::{
		Event, Subscriber,
		field::{Field, Visit},
		span::{Attributes, Id, Record},
		subscriber::with_default,
	};

	use super::*;
	use crate::render::render;

	#[derive(Debug, Clone, PartialEq)]
	struct Seen {
		severity: Severity,
		target: String,
		message: String,
		fields: Vec<(String, String)>,
	}

	#[derive(Default)]
	struct Visitor {
		message: String,
		fields: Vec<(String, String)>,
	}

	impl Visit for Visitor {
		fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
			if field.name() == "message" {
				self.message = format!("{value:?}");
			} else {
				self.fields.push((field.name().to_string(), format!("{value:?}")));
			}
		}

		fn record_str(&mut self, field: &Field, value: &str) {
			self.fields.push((field.name().to_string(), value.to_string()));
		}
	}

	#[derive(Clone, Default)]
	struct Recorder {
		seen: Arc<Mutex<Vec<Seen>>>,
	}

	impl Subscriber for Recorder {
		fn enabled(&self, _metadata: &Metadata<'_>) -> bool {
			true
		}

		fn new_span(&self, _span: &Attributes<'_>) -> Id {
			Id::from_u64(1)
		}

		fn record(&self, _span: &Id, _values: &Record<'_>) {}

		fn record_follows_from(&self, _span: &Id, _follows: &Id) {}

		fn event(&self, event: &Event<'_>) {
			let mut visitor = Visitor::default();
			event.record(&mut visitor);
			self.seen.lock().unwrap().push(Seen {
				severity: severity_of(event.metadata()),
				target: event.metadata().target().to_string(),
				message: visitor.message,
				fields: visitor.fields,
			});
		}

		fn enter(&self, _span: &Id) {}

		fn exit(&self, _span: &Id) {}
	}

	#[test]
	fn test_levels_and_targets() {
		let recorder = Recorder::default();
		let backend = TracingBackend::new();
		let line = render("hello", &());

		with_default(recorder.clone(), || {
			for severity in [Severity::Trace, Severity::Info, Severity::Error, Severity::Fatal, Severity::Off] {
				backend.write(severity, &line, None);
			}
		});

		let seen = recorder.seen.lock().unwrap();
		let severities: Vec<_> = seen.iter().map(|s| s.severity).collect();
		assert_eq!(severities, vec![Severity::Trace, Severity::Info, Severity::Error, Severity::Fatal]);
		assert_eq!(seen[2].target, TARGET);
		assert_eq!(seen[3].target, FATAL_TARGET);
		assert!(seen.iter().all(|s| s.message == "msg='hello'"));
	}

	#[test]
	fn test_location_fields_only_when_present() {
		let recorder = Recorder::default();
		let backend = TracingBackend::new();
		let line = render("located", &());
		let location = Location::new("main.rs", 7, "main");

		with_default(recorder.clone(), || {
			backend.write(Severity::Info, &line, Some(&location));
			backend.write(Severity::Info, &line, None);
		});

		let seen = recorder.seen.lock().unwrap();
		assert_eq!(
			seen[0].fields,
			vec![
				("file".to_string(), "main.rs".to_string()),
				("line".to_string(), "7".to_string()),
				("function".to_string(), "main".to_string()),
			]
		);
		assert!(seen[1].fields.is_empty());
	}
}
