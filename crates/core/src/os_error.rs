// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::io;

use crate::field::{ERROR_KEY, Field};

/// The platform's description of an OS error number.
#[cfg(unix)]
pub fn strerror(errnum: i32) -> String {
	use std::ffi::CStr;

	let mut buf = [0 as libc::c_char; 256];
	// SAFETY: `buf` is writable for `buf.len()` bytes and strerror_r
	// NUL-terminates on success.
	let rc = unsafe { libc::strerror_r(errnum, buf.as_mut_ptr(), buf.len()) };
	if rc != 0 {
		return describe(&io::Error::from_raw_os_error(errnum));
	}
	// SAFETY: written and terminated by strerror_r above.
	unsafe { CStr::from_ptr(buf.as_ptr()) }.to_string_lossy().into_owned()
}

#[cfg(not(unix))]
pub fn strerror(errnum: i32) -> String {
	describe(&io::Error::from_raw_os_error(errnum))
}

/// `io::Error` text without the trailing ` (os error N)`
fn describe(err: &io::Error) -> String {
	let text = err.to_string();
	match text.rfind(" (os error ") {
		Some(at) => text[..at].to_string(),
		None => text,
	}
}

impl Field<'static> {
	/// `error='<description of errnum>'`
	pub fn error(errnum: i32) -> Self {
		Field::new(ERROR_KEY, strerror(errnum))
	}

	/// `error='<description of err>'`, preferring the OS description when
	/// the error carries an OS code.
	pub fn from_io_error(err: &io::Error) -> Self {
		let text = match err.raw_os_error() {
			Some(errnum) => strerror(errnum),
			None => describe(err),
		};
		Field::new(ERROR_KEY, text)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::Value;

	#[test]
	fn test_error_key_is_fixed() {
		let field = Field::error(libc::EPERM);
		assert_eq!(field.key(), "error");
		assert_eq!(field.key(), ERROR_KEY);
	}

	#[cfg(target_os = "linux")]
	#[test]
	fn test_eperm_description() {
		let field = Field::error(libc::EPERM);
		assert_eq!(field.value(), &Value::Utf8("Operation not permitted".to_string()));
	}

	#[test]
	fn test_io_error_with_os_code() {
		let err = io::Error::from_raw_os_error(libc::ENOENT);
		assert_eq!(Field::from_io_error(&err), Field::error(libc::ENOENT));
	}

	#[test]
	fn test_io_error_without_os_code() {
		let err = io::Error::other("socket closed");
		assert_eq!(Field::from_io_error(&err).to_string(), "error='socket closed'");
	}

	#[test]
	fn test_unknown_errnum_still_describes() {
		assert!(!strerror(99_999).is_empty());
	}
}
