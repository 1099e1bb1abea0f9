// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{
	borrow::Cow,
	fmt::{self, Display, Formatter},
};

use crate::value::{IntoValue, Value};

/// Key of the implicit message field every rendered line starts with
pub const MSG_KEY: &str = "msg";

/// Key used by [`Field::error`] and `with_error`. Downstream parsers may rely on it.
pub const ERROR_KEY: &str = "error";

/// A single named value attached to a log record.
///
/// Keys are neither validated nor deduplicated.
#[derive(Clone, Debug, PartialEq)]
pub struct Field<'a> {
	pub key: Cow<'a, str>,
	pub value: Value<'a>,
}

impl<'a> Field<'a> {
	pub fn new(key: impl Into<Cow<'a, str>>, value: impl IntoValue<'a>) -> Self {
		Self {
			key: key.into(),
			value: value.into_value(),
		}
	}

	pub fn key(&self) -> &str {
		&self.key
	}

	pub fn value(&self) -> &Value<'a> {
		&self.value
	}

	pub fn into_owned(self) -> Field<'static> {
		Field {
			key: Cow::Owned(self.key.into_owned()),
			value: self.value.into_owned(),
		}
	}
}

impl Display for Field<'_> {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		write!(f, "{}='{}'", self.key, self.value)
	}
}

/// Build a [`Field`] from a `key => value` pair
#[macro_export]
macro_rules! field {
	($key:expr => $value:expr) => {
		$crate::Field::new($key, $value)
	};
}

/// Build an array of [`Field`]s, preserving argument order
#[macro_export]
macro_rules! fields {
	($($key:expr => $value:expr),* $(,)?) => {
		[$($crate::Field::new($key, $value)),*]
	};
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_display() {
		assert_eq!(Field::new("port", 80).to_string(), "port='80'");
		assert_eq!(Field::new("ip", "127.0.0.1").to_string(), "ip='127.0.0.1'");
	}

	#[test]
	fn test_owned_key() {
		let key = format!("shard_{}", 3);
		let field = Field::new(key, true);
		assert_eq!(field.key(), "shard_3");
		assert_eq!(field.value(), &Value::Boolean(true));
	}

	#[test]
	fn test_macros() {
		assert_eq!(field!("k" => 1u8), Field::new("k", 1u8));

		let fields = fields!["a" => 1, "b" => "two", "c" => 3.0];
		assert_eq!(fields.len(), 3);
		assert_eq!(fields[0].key(), "a");
		assert_eq!(fields[1].value(), &Value::Str("two"));
		assert_eq!(fields[2].value(), &Value::Float8(3.0));
	}

	#[test]
	fn test_into_owned_outlives_source() {
		let field = {
			let key = String::from("path");
			let value = String::from("xx.sock");
			Field::new(key.as_str(), value.as_str()).into_owned()
		};
		assert_eq!(field.to_string(), "path='xx.sock'");
	}
}
