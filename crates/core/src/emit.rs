// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Hands rendered lines to a [`Backend`].
//!
//! Every severity call ends up in exactly one [`Emitter::emit`], which
//! performs exactly one backend delegation. The emitter does not filter by
//! level, retry, or buffer; all of that belongs to the backend. A `fatal`
//! record terminates the process once the backend has been called.

use std::{cell::RefCell, process, sync::Arc};

use once_cell::sync::OnceCell;

use crate::{
	Error, Result, Severity,
	backend::{Backend, tracing::TracingBackend},
	render::Line,
};

/// Exit status used after a fatal record
pub const FATAL_EXIT_CODE: i32 = 1;

/// Where a record was produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Location<'a> {
	pub file: &'a str,
	pub line: u32,
	pub function: &'a str,
}

impl<'a> Location<'a> {
	pub const fn new(file: &'a str, line: u32, function: &'a str) -> Self {
		Self {
			file,
			line,
			function,
		}
	}
}

#[derive(Clone)]
pub struct Emitter {
	backend: Arc<dyn Backend>,
}

impl Emitter {
	pub fn new(backend: Arc<dyn Backend>) -> Self {
		Self {
			backend,
		}
	}

	pub fn backend(&self) -> &Arc<dyn Backend> {
		&self.backend
	}

	pub fn emit(&self, severity: Severity, line: &Line, location: Option<&Location<'_>>) {
		self.backend.write(severity, line, location);
		if severity.is_fatal() {
			self.backend.flush();
			process::exit(FATAL_EXIT_CODE);
		}
	}
}

static EMITTER: OnceCell<Emitter> = OnceCell::new();

thread_local! {
	static SCOPED: RefCell<Option<Emitter>> = const { RefCell::new(None) };
}

/// Install the process-wide backend. Must happen before the first log call
/// to take effect; a second call fails.
pub fn init(backend: Arc<dyn Backend>) -> Result<()> {
	EMITTER.set(Emitter::new(backend)).map_err(|_| Error::AlreadyInitialized)
}

/// The process-wide emitter, defaulting to [`TracingBackend`].
pub fn emitter() -> &'static Emitter {
	EMITTER.get_or_init(|| Emitter::new(Arc::new(TracingBackend::new())))
}

/// Route every log call made by `f` on this thread to `backend`.
///
/// Scopes nest; the previous routing is restored when `f` returns or
/// unwinds.
pub fn with_backend<R>(backend: Arc<dyn Backend>, f: impl FnOnce() -> R) -> R {
	struct Restore(Option<Emitter>);

	impl Drop for Restore {
		fn drop(&mut self) {
			let previous = self.0.take();
			SCOPED.with(|scoped| *scoped.borrow_mut() = previous);
		}
	}

	let previous = SCOPED.with(|scoped| scoped.replace(Some(Emitter::new(backend))));
	let _restore = Restore(previous);
	f()
}

pub(crate) fn dispatch(severity: Severity, line: &Line, location: Option<&Location<'_>>) {
	// Cloned out so a backend that logs from `write` does not hit the borrow.
	let scoped = SCOPED.with(|scoped| scoped.borrow().clone());
	match scoped {
		Some(emitter) => emitter.emit(severity, line, location),
		None => emitter().emit(severity, line, location),
	}
}

#[cfg(test)]
mod tests {
	use std::panic::{self, AssertUnwindSafe};

	use crossbeam_channel::unbounded;

	use super::*;
	use crate::{
		backend::mock::{MockBackend, with_mock_backend},
		render::render,
	};

	#[test]
	fn test_one_delegation_per_call() {
		let (sender, receiver) = unbounded();
		let backend = Arc::new(MockBackend::new(sender));
		let emitter = Emitter::new(backend.clone());

		let line = render("once", &());
		emitter.emit(Severity::Info, &line, None);
		emitter.emit(Severity::Trace, &line, None);

		assert_eq!(receiver.try_iter().count(), 2);
		assert_eq!(backend.flushes(), 0);
	}

	#[test]
	fn test_off_is_still_delegated() {
		let (sender, receiver) = unbounded();
		let emitter = Emitter::new(Arc::new(MockBackend::new(sender)));

		emitter.emit(Severity::Off, &render("quiet", &()), None);

		let record = receiver.try_recv().unwrap();
		assert_eq!(record.severity, Severity::Off);
	}

	#[test]
	fn test_scopes_nest_and_restore() {
		let (outer_tx, outer_rx) = unbounded();
		let (inner_tx, inner_rx) = unbounded();

		with_mock_backend(outer_tx, || {
			dispatch(Severity::Info, &render("outer", &()), None);
			with_mock_backend(inner_tx, || {
				dispatch(Severity::Info, &render("inner", &()), None);
			});
			dispatch(Severity::Info, &render("outer again", &()), None);
		});

		let outer: Vec<_> = outer_rx.try_iter().map(|r| r.line).collect();
		let inner: Vec<_> = inner_rx.try_iter().map(|r| r.line).collect();
		assert_eq!(outer, vec!["msg='outer'", "msg='outer again'"]);
		assert_eq!(inner, vec!["msg='inner'"]);
	}

	#[test]
	fn test_scope_restored_after_panic() {
		let (sender, receiver) = unbounded();

		let result = panic::catch_unwind(AssertUnwindSafe(|| {
			with_mock_backend(sender, || {
				panic!("boom");
			})
		}));
		assert!(result.is_err());
		assert!(SCOPED.with(|scoped| scoped.borrow().is_none()));
		assert_eq!(receiver.try_iter().count(), 0);
	}
}
