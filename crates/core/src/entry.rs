// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{borrow::Cow, io};

use smallvec::SmallVec;

use crate::{
	Location, Severity,
	emit::{Emitter, dispatch},
	field::Field,
	render::{Fields, Line, render},
	value::IntoValue,
};

/// Fields kept inline before an entry spills to the heap
pub const INLINE_FIELDS: usize = 8;

/// An ordered, append-only set of fields.
///
/// `with_field` and friends never touch the receiver; they return a new
/// entry, so a stored entry can act as the common prefix of several
/// independent log calls:
///
/// ```
/// use logrus_core::Entry;
///
/// let task = Entry::new().with_field("task_id", 1);
/// let tcp = task.with_field("port", 80);
/// let unix = task.with_field("path", "xx.sock");
///
/// assert_eq!(task.len(), 1);
/// assert_eq!(tcp.render("Listen on"), "msg='Listen on' task_id='1' port='80'");
/// assert_eq!(unix.render("Listen on"), "msg='Listen on' task_id='1' path='xx.sock'");
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Entry<'a> {
	fields: SmallVec<[Field<'a>; INLINE_FIELDS]>,
}

impl<'a> Entry<'a> {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn from_fields(fields: impl IntoIterator<Item = Field<'a>>) -> Self {
		Self {
			fields: fields.into_iter().collect(),
		}
	}

	pub fn with_field(&self, key: impl Into<Cow<'a, str>>, value: impl IntoValue<'a>) -> Self {
		let mut fields = self.fields.clone();
		fields.push(Field::new(key, value));
		Self {
			fields,
		}
	}

	pub fn with_fields(&self, fields: impl IntoIterator<Item = Field<'a>>) -> Self {
		let mut result = self.fields.clone();
		result.extend(fields);
		Self {
			fields: result,
		}
	}

	/// Append `error='<description of errnum>'`.
	pub fn with_error(&self, errnum: i32) -> Self {
		self.with_fields([Field::error(errnum)])
	}

	/// Append `error='<description of err>'`.
	pub fn with_io_error(&self, err: &io::Error) -> Self {
		self.with_fields([Field::from_io_error(err)])
	}

	pub fn len(&self) -> usize {
		self.fields.len()
	}

	pub fn is_empty(&self) -> bool {
		self.fields.is_empty()
	}

	pub fn iter(&self) -> impl Iterator<Item = &Field<'a>> {
		self.fields.iter()
	}

	pub fn render(&self, message: &str) -> Line {
		render(message, self)
	}

	/// Render and hand the line to an explicit emitter instead of the
	/// process-wide one.
	pub fn log_to(&self, emitter: &Emitter, severity: Severity, location: Option<&Location<'_>>, message: &str) {
		emitter.emit(severity, &self.render(message), location);
	}

	pub fn log_located(&self, severity: Severity, location: Option<&Location<'_>>, message: &str) {
		dispatch(severity, &self.render(message), location);
	}

	severity_methods!();
}

impl Fields for Entry<'_> {
	fn render_fields(&self, line: &mut Line) {
		for field in &self.fields {
			line.push_field(&field.key, &field.value);
		}
	}
}

impl<'a> FromIterator<Field<'a>> for Entry<'a> {
	fn from_iter<T: IntoIterator<Item = Field<'a>>>(iter: T) -> Self {
		Self::from_fields(iter)
	}
}

impl<'a> Extend<Field<'a>> for Entry<'a> {
	fn extend<T: IntoIterator<Item = Field<'a>>>(&mut self, iter: T) {
		self.fields.extend(iter);
	}
}
