// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Builder pattern for configuring the tracing subscriber

use std::io;

use logrus_core::Severity;
use tracing::Subscriber;
use tracing_subscriber::{
	EnvFilter, Layer,
	fmt::{self, writer::BoxMakeWriter},
	layer::SubscriberExt,
};

use crate::{
	Error, Result,
	config::{Config, FormatStyle, Target},
	filter::severity_filter,
	format::LineFormat,
};

/// Builder for the subscriber that prints logrus lines
pub struct TracingBuilder {
	level: Severity,
	style: FormatStyle,
	color: bool,
	target: Target,
	writer: Option<BoxMakeWriter>,
	directives: Option<String>,
}

impl TracingBuilder {
	/// Create a new builder with default settings
	pub fn new() -> Self {
		Self::from_config(&Config::default())
	}

	pub fn from_config(config: &Config) -> Self {
		Self {
			level: config.level,
			style: config.style,
			color: config.color,
			target: config.target,
			writer: None,
			directives: None,
		}
	}

	/// Start from [`Config::from_env`]
	pub fn from_env() -> Result<Self> {
		Ok(Self::from_config(&Config::from_env()?))
	}

	/// Minimum severity written. `Fatal` keeps fatal records only, `Off`
	/// writes nothing.
	pub fn level(mut self, level: Severity) -> Self {
		self.level = level;
		self
	}

	pub fn style(mut self, style: FormatStyle) -> Self {
		self.style = style;
		self
	}

	/// Enable or disable ANSI colored labels
	pub fn color(mut self, enabled: bool) -> Self {
		self.color = enabled;
		self
	}

	pub fn target(mut self, target: Target) -> Self {
		self.target = target;
		self
	}

	/// Write somewhere other than the configured target
	pub fn writer(mut self, writer: BoxMakeWriter) -> Self {
		self.writer = Some(writer);
		self
	}

	/// Additional `tracing_subscriber::EnvFilter` directives, e.g.
	/// `"logrus=debug,hyper=off"`, applied on top of the severity level.
	pub fn env_filter(mut self, directives: impl Into<String>) -> Self {
		self.directives = Some(directives.into());
		self
	}

	pub fn build(self) -> Result<impl Subscriber + Send + Sync + 'static> {
		let env_filter = match self.directives {
			Some(directives) => Some(EnvFilter::try_new(&directives).map_err(|e| Error::Filter(e.to_string()))?),
			None => None,
		};

		let writer = match self.writer {
			Some(writer) => writer,
			None => match self.target {
				Target::Stdout => BoxMakeWriter::new(io::stdout),
				Target::Stderr => BoxMakeWriter::new(io::stderr),
			},
		};

		let layer = fmt::layer()
			.event_format(LineFormat::new(self.style))
			.with_ansi(self.color)
			.with_writer(writer)
			.with_filter(severity_filter(self.level));

		Ok(tracing_subscriber::registry().with(env_filter).with(layer))
	}

	/// Build and install as the global default subscriber
	pub fn init(self) -> Result<()> {
		let subscriber = self.build()?;
		tracing::subscriber::set_global_default(subscriber).map_err(|e| Error::Install(e.to_string()))
	}
}

impl Default for TracingBuilder {
	fn default() -> Self {
		Self::new()
	}
}

/// Install a subscriber configured from the environment, then by
/// `configurator`.
pub fn init_with<F>(configurator: F) -> Result<()>
where
	F: FnOnce(TracingBuilder) -> TracingBuilder,
{
	configurator(TracingBuilder::from_env()?).init()
}
