// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Statically typed entries.
//!
//! A [`TypedEntry`] carries the type of every field in its own type, as a
//! nested tuple list `(((), F1), F2)`. Rendering is monomorphized per
//! field-type signature and never builds a [`Value`](crate::Value), so a
//! hot path with only scalar and borrowed fields renders without touching
//! the heap. Output is byte-identical to [`Entry`](crate::Entry).
//!
//! ```
//! use logrus_core::{Entry, typed};
//!
//! let fast = typed::with_field("ip", "127.0.0.1").with_field("port", 80u16);
//! let dynamic = Entry::new().with_field("ip", "127.0.0.1").with_field("port", 80u16);
//! assert_eq!(fast.render("New conn"), dynamic.render("New conn"));
//! ```
//!
//! Unsupported value types do not compile:
//!
//! ```compile_fail
//! logrus_core::typed::with_field("key5", 'c');
//! ```

use std::fmt::Display;

use crate::{
	Location, Severity,
	emit::{Emitter, dispatch},
	field::ERROR_KEY,
	os_error::strerror,
	render::{Fields, Line, render},
};

mod sealed {
	pub trait Sealed {}
}

/// Value types accepted by [`TypedEntry::with_field`]; the same closed set
/// as [`Value`](crate::Value).
pub trait Scalar: sealed::Sealed + Display + Clone {}

macro_rules! impl_scalar {
	($($ty:ty),* $(,)?) => {
		$(
			impl sealed::Sealed for $ty {}
			impl Scalar for $ty {}
		)*
	};
}

impl_scalar!(bool, f32, f64, i8, i16, i32, i64, u8, u16, u32, u64, String);

impl sealed::Sealed for &str {}
impl Scalar for &str {}

impl sealed::Sealed for &String {}
impl Scalar for &String {}

#[derive(Debug, Clone, PartialEq)]
pub struct TypedField<'k, V> {
	pub key: &'k str,
	pub value: V,
}

/// Type-level list of typed fields: `()` or `(tail, TypedField<V>)`
pub trait FieldList: Clone {
	const LEN: usize;

	fn render(&self, line: &mut Line);
}

impl FieldList for () {
	const LEN: usize = 0;

	#[inline]
	fn render(&self, _line: &mut Line) {}
}

impl<L: FieldList, V: Scalar> FieldList for (L, TypedField<'_, V>) {
	const LEN: usize = L::LEN + 1;

	#[inline]
	fn render(&self, line: &mut Line) {
		self.0.render(line);
		line.push_field(self.1.key, &self.1.value);
	}
}

#[derive(Debug, Clone, Default)]
pub struct TypedEntry<L = ()> {
	fields: L,
}

impl TypedEntry<()> {
	pub fn new() -> Self {
		Self {
			fields: (),
		}
	}
}

impl<L: FieldList> TypedEntry<L> {
	pub fn with_field<'k, V: Scalar>(&self, key: &'k str, value: V) -> TypedEntry<(L, TypedField<'k, V>)> {
		TypedEntry {
			fields: (
				self.fields.clone(),
				TypedField {
					key,
					value,
				},
			),
		}
	}

	pub fn with_error(&self, errnum: i32) -> TypedEntry<(L, TypedField<'static, String>)> {
		self.with_field(ERROR_KEY, strerror(errnum))
	}

	pub fn len(&self) -> usize {
		L::LEN
	}

	pub fn is_empty(&self) -> bool {
		L::LEN == 0
	}

	pub fn render(&self, message: &str) -> Line {
		render(message, self)
	}

	pub fn log_to(&self, emitter: &Emitter, severity: Severity, location: Option<&Location<'_>>, message: &str) {
		emitter.emit(severity, &self.render(message), location);
	}

	pub fn log_located(&self, severity: Severity, location: Option<&Location<'_>>, message: &str) {
		dispatch(severity, &self.render(message), location);
	}

	severity_methods!();
}

impl<L: FieldList> Fields for TypedEntry<L> {
	fn render_fields(&self, line: &mut Line) {
		self.fields.render(line);
	}
}

pub fn with_field<'k, V: Scalar>(key: &'k str, value: V) -> TypedEntry<((), TypedField<'k, V>)> {
	TypedEntry::new().with_field(key, value)
}

pub fn with_error(errnum: i32) -> TypedEntry<((), TypedField<'static, String>)> {
	TypedEntry::new().with_error(errnum)
}
