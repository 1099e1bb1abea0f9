// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! In-memory writer for asserting on formatted subscriber output.

use std::{io, sync::Arc};

use parking_lot::Mutex;
use tracing_subscriber::fmt::MakeWriter;

/// Shared buffer; clones append to the same bytes.
#[derive(Debug, Clone, Default)]
pub struct CaptureWriter {
	buf: Arc<Mutex<Vec<u8>>>,
}

impl CaptureWriter {
	pub fn new() -> Self {
		Self::default()
	}

	/// Everything written so far
	pub fn contents(&self) -> String {
		String::from_utf8_lossy(&self.buf.lock()).into_owned()
	}

	/// Written output split into lines
	pub fn lines(&self) -> Vec<String> {
		self.contents().lines().map(str::to_string).collect()
	}

	pub fn clear(&self) {
		self.buf.lock().clear();
	}
}

impl io::Write for CaptureWriter {
	fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
		self.buf.lock().extend_from_slice(buf);
		Ok(buf.len())
	}

	fn flush(&mut self) -> io::Result<()> {
		Ok(())
	}
}

impl<'a> MakeWriter<'a> for CaptureWriter {
	type Writer = CaptureWriter;

	fn make_writer(&'a self) -> Self::Writer {
		self.clone()
	}
}

#[cfg(test)]
mod tests {
	use std::io::Write;

	use super::*;

	#[test]
	fn test_clones_share_buffer() {
		let writer = CaptureWriter::new();
		let mut handle = writer.make_writer();
		handle.write_all(b"first\nsecond\n").unwrap();

		assert_eq!(writer.lines(), vec!["first", "second"]);

		writer.clear();
		assert!(writer.contents().is_empty());
	}
}
