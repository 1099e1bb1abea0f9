// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Run a single test of the current test binary in a child process.
//!
//! Used for behaviour that ends the process, which cannot be observed from
//! inside it:
//!
//! ```ignore
//! #[test]
//! fn exits() {
//!     match run_child("exits").unwrap() {
//!         Some(run) => assert_eq!(run.code, Some(1)),
//!         None => std::process::exit(1),
//!     }
//! }
//! ```

use std::{env, io, process::Command};

/// Set in the child to the name of the test it should execute
pub const CHILD_ENV: &str = "LOGRUS_TESTING_CHILD";

/// Outcome of a child run
#[derive(Debug, Clone)]
pub struct ChildRun {
	/// Exit code, `None` if the child was killed by a signal
	pub code: Option<i32>,
	pub stdout: String,
	pub stderr: String,
}

impl ChildRun {
	pub fn success(&self) -> bool {
		self.code == Some(0)
	}
}

/// Whether this process is the child spawned for `test`
pub fn is_child(test: &str) -> bool {
	env::var(CHILD_ENV).is_ok_and(|name| name == test)
}

/// In the parent, re-run `test` (its exact libtest name) in a child copy of
/// the current binary and return the outcome. Inside that child, return
/// `None` so the caller executes the body instead.
pub fn run_child(test: &str) -> io::Result<Option<ChildRun>> {
	if is_child(test) {
		return Ok(None);
	}

	let output = Command::new(env::current_exe()?)
		.args(["--exact", test, "--nocapture", "--test-threads=1"])
		.env(CHILD_ENV, test)
		.output()?;

	Ok(Some(ChildRun {
		code: output.status.code(),
		stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
		stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
	}))
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_child_exit_code_observed() {
		match run_child("subprocess::tests::test_child_exit_code_observed").unwrap() {
			Some(run) => {
				assert_eq!(run.code, Some(3));
				assert!(run.stderr.contains("about to exit"));
				assert!(!run.success());
			}
			None => {
				eprintln!("about to exit");
				std::process::exit(3);
			}
		}
	}

	#[test]
	fn test_not_child_by_default() {
		assert!(!is_child("subprocess::tests::test_not_child_by_default"));
	}
}
