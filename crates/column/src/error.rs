// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use vexec_type::{
	Error,
	error::{
		IntoDiagnostic,
		diagnostic::{
			Diagnostic,
			allocator::{buffer_too_small, limit_exceeded},
			selection::capacity_exceeded,
		},
	},
};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AllocatorError {
	#[error("unable to allocate {requested} bytes: {allocated} of {limit} bytes in use")]
	LimitExceeded {
		requested: usize,
		allocated: usize,
		limit: usize,
	},

	#[error("buffer of {capacity} bytes cannot hold {required} bytes")]
	BufferTooSmall {
		capacity: usize,
		required: u64,
	},
}

impl IntoDiagnostic for AllocatorError {
	fn into_diagnostic(self) -> Diagnostic {
		match self {
			AllocatorError::LimitExceeded {
				requested,
				allocated,
				limit,
			} => limit_exceeded(requested, allocated, limit),
			AllocatorError::BufferTooSmall {
				capacity,
				required,
			} => buffer_too_small(capacity, required),
		}
	}
}

impl From<AllocatorError> for Error {
	fn from(err: AllocatorError) -> Self {
		Error(err.into_diagnostic())
	}
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SelectionError {
	#[error("selection vector of {record_count} records needs {requested_bytes} bytes, above the 2gb ceiling")]
	CapacityExceeded {
		record_count: usize,
		requested_bytes: u64,
	},
}

impl IntoDiagnostic for SelectionError {
	fn into_diagnostic(self) -> Diagnostic {
		match self {
			SelectionError::CapacityExceeded {
				record_count,
				requested_bytes,
			} => capacity_exceeded(record_count, requested_bytes),
		}
	}
}

impl From<SelectionError> for Error {
	fn from(err: SelectionError) -> Self {
		Error(err.into_diagnostic())
	}
}
