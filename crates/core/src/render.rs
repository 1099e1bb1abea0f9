// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Rendering of a message plus fields into a single line:
//!
//! ```text
//! msg='<message>' k1='<v1>' k2='<v2>'
//! ```
//!
//! Quotes and control characters inside keys, values and the message are
//! written verbatim. Lines are not escaped.

use std::fmt::{self, Display, Write};

use smallvec::SmallVec;

use crate::field::MSG_KEY;

/// Bytes kept inline before a line spills to the heap
pub const INLINE_CAPACITY: usize = 256;

/// A rendered log line.
///
/// Text is only ever appended through [`fmt::Write`], so the buffer is
/// always valid UTF-8. [`Line::finish`] appends a NUL terminator which
/// [`Line::as_str`] hides.
#[derive(Clone, Default)]
pub struct Line {
	buf: SmallVec<[u8; INLINE_CAPACITY]>,
	terminated: bool,
}

impl Line {
	pub fn new() -> Self {
		Self::default()
	}

	/// The rendered text, without the NUL terminator.
	pub fn as_str(&self) -> &str {
		let text = self.text_bytes();
		// SAFETY: `buf` only grows through `write_str`, which copies whole
		// `&str`s and keeps the NUL last once terminated, so stripping that
		// one byte leaves valid UTF-8.
		unsafe { std::str::from_utf8_unchecked(text) }
	}

	/// The rendered text including the NUL terminator, for C-style sinks.
	pub fn as_bytes_with_nul(&self) -> &[u8] {
		&self.buf
	}

	pub fn len(&self) -> usize {
		self.text_bytes().len()
	}

	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	/// Append the NUL terminator. Idempotent; text written afterwards
	/// lands before the terminator.
	pub fn finish(&mut self) {
		if !self.terminated {
			self.buf.push(0);
			self.terminated = true;
		}
	}

	fn text_bytes(&self) -> &[u8] {
		if self.terminated {
			&self.buf[..self.buf.len() - 1]
		} else {
			&self.buf
		}
	}

	/// Append ` key='value'`.
	pub fn push_field<V: Display + ?Sized>(&mut self, key: &str, value: &V) {
		// Writing into a SmallVec cannot fail; only a faulty Display impl can.
		let _ = write!(self, " {key}='{value}'");
	}

	fn push_message(&mut self, message: &str) {
		let _ = write!(self, "{MSG_KEY}='{message}'");
	}
}

impl Write for Line {
	fn write_str(&mut self, s: &str) -> fmt::Result {
		if self.terminated {
			self.buf.pop();
			self.buf.extend_from_slice(s.as_bytes());
			self.buf.push(0);
		} else {
			self.buf.extend_from_slice(s.as_bytes());
		}
		Ok(())
	}
}

impl fmt::Debug for Line {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		fmt::Debug::fmt(self.as_str(), f)
	}
}

impl Display for Line {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl PartialEq for Line {
	fn eq(&self, other: &Line) -> bool {
		self.as_str() == other.as_str()
	}
}

impl PartialEq<str> for Line {
	fn eq(&self, other: &str) -> bool {
		self.as_str() == other
	}
}

impl PartialEq<&str> for Line {
	fn eq(&self, other: &&str) -> bool {
		self.as_str() == *other
	}
}

/// An ordered set of fields that can write itself into a [`Line`].
///
/// Implemented by the runtime-typed [`Entry`](crate::Entry) and by the
/// statically typed [`TypedEntry`](crate::typed::TypedEntry).
pub trait Fields {
	/// Append every field as ` key='value'`, in insertion order.
	fn render_fields(&self, line: &mut Line);
}

impl<F: Fields + ?Sized> Fields for &F {
	fn render_fields(&self, line: &mut Line) {
		(**self).render_fields(line)
	}
}

/// Fields-less set, for plain `info("...")` calls
impl Fields for () {
	fn render_fields(&self, _line: &mut Line) {}
}

/// Render `message` and `fields` into a finished line.
pub fn render<F: Fields + ?Sized>(message: &str, fields: &F) -> Line {
	let mut line = Line::new();
	line.push_message(message);
	fields.render_fields(&mut line);
	line.finish();
	line
}
