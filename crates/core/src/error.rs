// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
	#[error("logging backend already initialized")]
	AlreadyInitialized,

	#[error("unknown severity '{0}'")]
	UnknownSeverity(String),
}

pub type Result<T> = std::result::Result<T, Error>;
