// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Subscriber configuration, from serde or the process environment.

use std::{
	env,
	fmt::{self, Display, Formatter},
	str::FromStr,
};

use logrus_core::Severity;
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

pub const ENV_LEVEL: &str = "LOGRUS_LEVEL";
pub const ENV_STYLE: &str = "LOGRUS_STYLE";
pub const ENV_COLOR: &str = "LOGRUS_COLOR";
pub const ENV_TARGET: &str = "LOGRUS_TARGET";

/// Layout of a formatted line
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormatStyle {
	/// `info  msg='...'`
	#[default]
	Compact,
	/// `2025-01-01T00:00:00.000000Z info  msg='...'`
	Timeline,
	/// `I msg='...'`
	Short,
}

impl FromStr for FormatStyle {
	type Err = Error;

	fn from_str(s: &str) -> Result<Self> {
		match s.trim().to_ascii_lowercase().as_str() {
			"compact" => Ok(FormatStyle::Compact),
			"timeline" => Ok(FormatStyle::Timeline),
			"short" => Ok(FormatStyle::Short),
			_ => Err(Error::UnknownStyle(s.to_string())),
		}
	}
}

impl Display for FormatStyle {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		match self {
			FormatStyle::Compact => f.write_str("compact"),
			FormatStyle::Timeline => f.write_str("timeline"),
			FormatStyle::Short => f.write_str("short"),
		}
	}
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Target {
	Stdout,
	#[default]
	Stderr,
}

impl FromStr for Target {
	type Err = Error;

	fn from_str(s: &str) -> Result<Self> {
		match s.trim().to_ascii_lowercase().as_str() {
			"stdout" => Ok(Target::Stdout),
			"stderr" => Ok(Target::Stderr),
			_ => Err(Error::UnknownTarget(s.to_string())),
		}
	}
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
	/// Minimum severity written; `off` silences everything
	pub level: Severity,
	pub style: FormatStyle,
	pub color: bool,
	pub target: Target,
}

impl Default for Config {
	fn default() -> Self {
		Self {
			level: Severity::Info,
			style: FormatStyle::Compact,
			color: false,
			target: Target::Stderr,
		}
	}
}

impl Config {
	/// Defaults overridden by `LOGRUS_LEVEL`, `LOGRUS_STYLE`,
	/// `LOGRUS_COLOR` and `LOGRUS_TARGET` when set.
	pub fn from_env() -> Result<Self> {
		Self::from_lookup(|name| env::var(name).ok())
	}

	/// Like [`Config::from_env`], reading variables through `lookup`.
	pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
		let mut config = Self::default();

		if let Some(level) = lookup(ENV_LEVEL) {
			config.level = level.parse().map_err(|source| Error::Severity {
				variable: ENV_LEVEL,
				source,
			})?;
		}
		if let Some(style) = lookup(ENV_STYLE) {
			config.style = style.parse()?;
		}
		if let Some(color) = lookup(ENV_COLOR) {
			config.color = parse_bool(ENV_COLOR, &color)?;
		}
		if let Some(target) = lookup(ENV_TARGET) {
			config.target = target.parse()?;
		}

		Ok(config)
	}
}

fn parse_bool(variable: &'static str, value: &str) -> Result<bool> {
	match value.trim().to_ascii_lowercase().as_str() {
		"1" | "true" | "yes" | "on" => Ok(true),
		"0" | "false" | "no" | "off" => Ok(false),
		_ => Err(Error::Boolean {
			variable,
			value: value.to_string(),
		}),
	}
}
