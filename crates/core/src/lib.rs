// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Structured logging façade.
//!
//! Fields are accumulated on an immutable [`Entry`] and rendered, together
//! with the message, into a single line
//!
//! ```text
//! msg='Listen on' ip='127.0.0.1' port='80'
//! ```
//!
//! which is handed to a [`Backend`] (by default `tracing`). Three call
//! shapes reach the same code path:
//!
//! ```ignore
//! logrus_core::info("hello world!");
//! logrus_core::with_field("ip", "127.0.0.1").with_field("port", 80).info("Listen on");
//! logrus_core::log_info!("Listen on", "ip" => "127.0.0.1", "port" => 80);
//! ```
//!
//! `fatal` calls terminate the process with status 1 after the backend has
//! been called.

#![cfg_attr(not(debug_assertions), deny(warnings))]

macro_rules! severity_methods {
	() => {
		severity_methods! {
			trace => Trace,
			debug => Debug,
			info => Info,
			warn => Warn,
			error => Error,
			fatal => Fatal,
		}
	};

	($($name:ident => $severity:ident),* $(,)?) => {
		paste::paste! {
			pub fn log(&self, severity: $crate::Severity, message: &str) {
				self.log_located(severity, None, message)
			}

			pub fn log_at(&self, severity: $crate::Severity, location: &$crate::Location<'_>, message: &str) {
				self.log_located(severity, Some(location), message)
			}

			$(
				#[doc = concat!("Log `message` with these fields at ", stringify!($name), " severity.")]
				pub fn $name(&self, message: &str) {
					self.log_located($crate::Severity::$severity, None, message)
				}

				#[doc = concat!("Like [`Self::", stringify!($name), "`], attaching `location`.")]
				pub fn [<$name _at>](&self, location: &$crate::Location<'_>, message: &str) {
					self.log_located($crate::Severity::$severity, Some(location), message)
				}
			)*
		}
	};
}

pub mod backend;
pub mod emit;
mod entry;
mod error;
mod field;
mod global;
mod macros;
mod os_error;
pub mod render;
mod severity;
pub mod typed;
mod value;

pub use backend::{Backend, NullBackend, tracing::TracingBackend};
pub use emit::{Emitter, FATAL_EXIT_CODE, Location, emitter, init, with_backend};
pub use entry::Entry;
pub use error::{Error, Result};
pub use field::{ERROR_KEY, Field, MSG_KEY};
pub use global::{
	debug, debug_at, error, error_at, fatal, fatal_at, info, info_at, log, log_at, trace, trace_at, warn, warn_at,
	with_error, with_field, with_fields,
};
pub use os_error::strerror;
pub use render::{Fields, Line, render};
pub use severity::Severity;
pub use typed::TypedEntry;
pub use value::{IntoValue, Value};
