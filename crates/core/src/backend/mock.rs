// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Channel-backed backend for tests.

use std::sync::{
	Arc,
	atomic::{AtomicUsize, Ordering},
};

use crossbeam_channel::Sender;

use crate::{Location, Severity, backend::Backend, emit::with_backend, render::Line};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapturedLocation {
	pub file: String,
	pub line: u32,
	pub function: String,
}

/// One `Backend::write` call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Captured {
	pub severity: Severity,
	pub line: String,
	pub location: Option<CapturedLocation>,
}

pub struct MockBackend {
	sender: Sender<Captured>,
	flushes: AtomicUsize,
}

impl MockBackend {
	pub fn new(sender: Sender<Captured>) -> Self {
		Self {
			sender,
			flushes: AtomicUsize::new(0),
		}
	}

	pub fn flushes(&self) -> usize {
		self.flushes.load(Ordering::Acquire)
	}
}

impl Backend for MockBackend {
	fn write(&self, severity: Severity, line: &Line, location: Option<&Location<'_>>) {
		let _ = self.sender.send(Captured {
			severity,
			line: line.as_str().to_string(),
			location: location.map(|location| CapturedLocation {
				file: location.file.to_string(),
				line: location.line,
				function: location.function.to_string(),
			}),
		});
	}

	fn flush(&self) {
		self.flushes.fetch_add(1, Ordering::AcqRel);
	}
}

/// Run `f` with every log call on this thread captured into `sender`
pub fn with_mock_backend<R>(sender: Sender<Captured>, f: impl FnOnce() -> R) -> R {
	with_backend(Arc::new(MockBackend::new(sender)), f)
}
