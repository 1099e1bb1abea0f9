// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::fmt::{self, Display, Formatter};

/// A field value, represented as a native Rust type.
///
/// The set of variants is closed. Anything else has to be converted by the
/// caller first; there is no catch-all variant and no runtime type check.
#[derive(Clone, Debug, PartialEq)]
pub enum Value<'a> {
	/// A boolean: true or false.
	Boolean(bool),
	/// A 4-byte floating point
	Float4(f32),
	/// An 8-byte floating point
	Float8(f64),
	/// A 1-byte signed integer
	Int1(i8),
	/// A 2-byte signed integer
	Int2(i16),
	/// A 4-byte signed integer
	Int4(i32),
	/// An 8-byte signed integer
	Int8(i64),
	/// A 1-byte unsigned integer
	Uint1(u8),
	/// A 2-byte unsigned integer
	Uint2(u16),
	/// A 4-byte unsigned integer
	Uint4(u32),
	/// An 8-byte unsigned integer
	Uint8(u64),
	/// Owned UTF-8 text
	Utf8(String),
	/// Borrowed UTF-8 text
	Str(&'a str),
}

impl<'a> Value<'a> {
	pub fn bool(v: impl Into<bool>) -> Self {
		Value::Boolean(v.into())
	}

	pub fn float4(v: impl Into<f32>) -> Self {
		Value::Float4(v.into())
	}

	pub fn float8(v: impl Into<f64>) -> Self {
		Value::Float8(v.into())
	}

	pub fn int1(v: impl Into<i8>) -> Self {
		Value::Int1(v.into())
	}

	pub fn int2(v: impl Into<i16>) -> Self {
		Value::Int2(v.into())
	}

	pub fn int4(v: impl Into<i32>) -> Self {
		Value::Int4(v.into())
	}

	pub fn int8(v: impl Into<i64>) -> Self {
		Value::Int8(v.into())
	}

	pub fn uint1(v: impl Into<u8>) -> Self {
		Value::Uint1(v.into())
	}

	pub fn uint2(v: impl Into<u16>) -> Self {
		Value::Uint2(v.into())
	}

	pub fn uint4(v: impl Into<u32>) -> Self {
		Value::Uint4(v.into())
	}

	pub fn uint8(v: impl Into<u64>) -> Self {
		Value::Uint8(v.into())
	}

	pub fn utf8(v: impl Into<String>) -> Self {
		Value::Utf8(v.into())
	}

	pub fn str(v: &'a str) -> Self {
		Value::Str(v)
	}

	/// Detach from any borrowed text.
	pub fn into_owned(self) -> Value<'static> {
		match self {
			Value::Boolean(v) => Value::Boolean(v),
			Value::Float4(v) => Value::Float4(v),
			Value::Float8(v) => Value::Float8(v),
			Value::Int1(v) => Value::Int1(v),
			Value::Int2(v) => Value::Int2(v),
			Value::Int4(v) => Value::Int4(v),
			Value::Int8(v) => Value::Int8(v),
			Value::Uint1(v) => Value::Uint1(v),
			Value::Uint2(v) => Value::Uint2(v),
			Value::Uint4(v) => Value::Uint4(v),
			Value::Uint8(v) => Value::Uint8(v),
			Value::Utf8(v) => Value::Utf8(v),
			Value::Str(v) => Value::Utf8(v.to_string()),
		}
	}
}

impl Display for Value<'_> {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		match self {
			Value::Boolean(true) => f.write_str("true"),
			Value::Boolean(false) => f.write_str("false"),
			Value::Float4(value) => Display::fmt(value, f),
			Value::Float8(value) => Display::fmt(value, f),
			Value::Int1(value) => Display::fmt(value, f),
			Value::Int2(value) => Display::fmt(value, f),
			Value::Int4(value) => Display::fmt(value, f),
			Value::Int8(value) => Display::fmt(value, f),
			Value::Uint1(value) => Display::fmt(value, f),
			Value::Uint2(value) => Display::fmt(value, f),
			Value::Uint4(value) => Display::fmt(value, f),
			Value::Uint8(value) => Display::fmt(value, f),
			Value::Utf8(value) => f.write_str(value),
			Value::Str(value) => f.write_str(value),
		}
	}
}

/// Conversion into a [`Value`].
///
/// Only implemented for the supported scalar and text types, so passing an
/// unsupported type to `with_field` is a compile error:
///
/// ```compile_fail
/// logrus_core::with_field("key5", 'c').info("Test char");
/// ```
pub trait IntoValue<'a> {
	fn into_value(self) -> Value<'a>;
}

macro_rules! impl_into_value {
	($($ty:ty => $variant:ident),* $(,)?) => {
		$(
			impl<'a> IntoValue<'a> for $ty {
				#[inline]
				fn into_value(self) -> Value<'a> {
					Value::$variant(self)
				}
			}
		)*
	};
}

impl_into_value! {
	bool => Boolean,
	f32 => Float4,
	f64 => Float8,
	i8 => Int1,
	i16 => Int2,
	i32 => Int4,
	i64 => Int8,
	u8 => Uint1,
	u16 => Uint2,
	u32 => Uint4,
	u64 => Uint8,
	String => Utf8,
}

impl<'a> IntoValue<'a> for &'a str {
	#[inline]
	fn into_value(self) -> Value<'a> {
		Value::Str(self)
	}
}

impl<'a> IntoValue<'a> for &'a String {
	#[inline]
	fn into_value(self) -> Value<'a> {
		Value::Str(self.as_str())
	}
}

impl<'a> IntoValue<'a> for Value<'a> {
	#[inline]
	fn into_value(self) -> Value<'a> {
		self
	}
}
