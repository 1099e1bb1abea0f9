// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
	#[error("invalid filter directives: {0}")]
	Filter(String),

	#[error("failed to install subscriber: {0}")]
	Install(String),

	#[error("unknown format style '{0}', expected 'compact', 'timeline' or 'short'")]
	UnknownStyle(String),

	#[error("unknown target '{0}', expected 'stdout' or 'stderr'")]
	UnknownTarget(String),

	#[error("invalid {variable}: {source}")]
	Severity {
		variable: &'static str,
		#[source]
		source: logrus_core::Error,
	},

	#[error("invalid {variable}: expected a boolean, got '{value}'")]
	Boolean {
		variable: &'static str,
		value: String,
	},
}

pub type Result<T> = std::result::Result<T, Error>;
