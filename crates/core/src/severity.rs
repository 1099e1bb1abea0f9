// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{
	fmt::{self, Display, Formatter},
	str::FromStr,
};

use serde::{Deserialize, Serialize};

use crate::Error;

/// Log severity levels, in strictly ascending urgency.
///
/// The discriminants follow the backend's native numbering, so `Fatal`
/// occupies the slot a backend would call "critical".
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum Severity {
	Trace = 0,
	Debug = 1,
	Info = 2,
	Warn = 3,
	Error = 4,
	Fatal = 5,
	Off = 6,
}

impl Severity {
	pub const ALL: [Severity; 7] = [
		Severity::Trace,
		Severity::Debug,
		Severity::Info,
		Severity::Warn,
		Severity::Error,
		Severity::Fatal,
		Severity::Off,
	];

	pub fn as_str(&self) -> &'static str {
		match self {
			Severity::Trace => "trace",
			Severity::Debug => "debug",
			Severity::Info => "info",
			Severity::Warn => "warn",
			Severity::Error => "error",
			Severity::Fatal => "fatal",
			Severity::Off => "off",
		}
	}

	pub fn short(&self) -> &'static str {
		match self {
			Severity::Trace => "T",
			Severity::Debug => "D",
			Severity::Info => "I",
			Severity::Warn => "W",
			Severity::Error => "E",
			Severity::Fatal => "F",
			Severity::Off => "O",
		}
	}

	pub fn as_u8(&self) -> u8 {
		*self as u8
	}

	/// Whether emitting at this severity terminates the process
	pub fn is_fatal(&self) -> bool {
		matches!(self, Severity::Fatal)
	}
}

impl Display for Severity {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for Severity {
	type Err = Error;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let severity = match s.trim().to_ascii_lowercase().as_str() {
			"trace" | "t" => Severity::Trace,
			"debug" | "d" => Severity::Debug,
			"info" | "i" => Severity::Info,
			"warn" | "warning" | "w" => Severity::Warn,
			"error" | "e" => Severity::Error,
			"fatal" | "critical" | "f" => Severity::Fatal,
			"off" | "o" => Severity::Off,
			_ => return Err(Error::UnknownSeverity(s.to_string())),
		};
		Ok(severity)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_strictly_ascending() {
		for pair in Severity::ALL.windows(2) {
			assert!(pair[0] < pair[1], "{} should be below {}", pair[0], pair[1]);
			assert_eq!(pair[0].as_u8() + 1, pair[1].as_u8());
		}
	}

	#[test]
	fn test_fatal_label() {
		assert_eq!(Severity::Fatal.as_str(), "fatal");
		assert_eq!(Severity::Fatal.short(), "F");
		assert_eq!(Severity::Fatal.as_u8(), 5);
		assert!(Severity::Fatal.is_fatal());
		assert!(!Severity::Error.is_fatal());
	}

	#[test]
	fn test_parse() {
		assert_eq!("INFO".parse::<Severity>().unwrap(), Severity::Info);
		assert_eq!("warning".parse::<Severity>().unwrap(), Severity::Warn);
		assert_eq!(" critical ".parse::<Severity>().unwrap(), Severity::Fatal);
		assert_eq!("off".parse::<Severity>().unwrap(), Severity::Off);

		let err = "verbose".parse::<Severity>().unwrap_err();
		assert_eq!(err, Error::UnknownSeverity("verbose".to_string()));
	}

	#[test]
	fn test_serde_lowercase() {
		let json = serde_json::to_string(&Severity::Fatal).unwrap();
		assert_eq!(json, "\"fatal\"");

		let parsed: Severity = serde_json::from_str("\"debug\"").unwrap();
		assert_eq!(parsed, Severity::Debug);
	}
}
