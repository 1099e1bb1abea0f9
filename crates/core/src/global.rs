// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Zero-field severity calls and chain starters on the process-wide emitter.

use std::borrow::Cow;

use crate::{
	Location, Severity,
	emit::dispatch,
	entry::Entry,
	field::Field,
	render::render,
	value::IntoValue,
};

pub fn with_field<'a>(key: impl Into<Cow<'a, str>>, value: impl IntoValue<'a>) -> Entry<'a> {
	Entry::new().with_field(key, value)
}

pub fn with_fields<'a>(fields: impl IntoIterator<Item = Field<'a>>) -> Entry<'a> {
	Entry::from_fields(fields)
}

/// Start an entry with `error='<description of errnum>'`
pub fn with_error(errnum: i32) -> Entry<'static> {
	Entry::new().with_error(errnum)
}

pub fn log(severity: Severity, message: &str) {
	dispatch(severity, &render(message, &()), None);
}

pub fn log_at(severity: Severity, location: &Location<'_>, message: &str) {
	dispatch(severity, &render(message, &()), Some(location));
}

macro_rules! free_severity_functions {
	($($name:ident => $severity:ident),* $(,)?) => {
		paste::paste! {
			$(
				#[doc = concat!("Log `message` at ", stringify!($name), " severity without fields.")]
				pub fn $name(message: &str) {
					log(Severity::$severity, message)
				}

				#[doc = concat!("Like [`", stringify!($name), "`], attaching `location`.")]
				pub fn [<$name _at>](location: &Location<'_>, message: &str) {
					log_at(Severity::$severity, location, message)
				}
			)*
		}
	};
}

free_severity_functions! {
	trace => Trace,
	debug => Debug,
	info => Info,
	warn => Warn,
	error => Error,
	fatal => Fatal,
}
