// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! The narrow interface to whatever actually writes log lines.

use crate::{Location, Severity, render::Line};

#[cfg(any(test, feature = "testing"))]
pub mod mock;
pub mod tracing;

/// A log sink.
///
/// Sinks, patterns, timestamps and minimum-level policy live behind this
/// trait. Implementations must tolerate concurrent calls from any thread.
pub trait Backend: Send + Sync {
	/// Write one rendered line. `location` is `None` unless the caller
	/// supplied one.
	fn write(&self, severity: Severity, line: &Line, location: Option<&Location<'_>>);

	/// Push out anything the backend has queued. Called before a fatal exit.
	fn flush(&self) {}
}

/// Discards every line
#[derive(Debug, Default, Clone, Copy)]
pub struct NullBackend;

impl Backend for NullBackend {
	fn write(&self, _severity: Severity, _line: &Line, _location: Option<&Location<'_>>) {}
}
