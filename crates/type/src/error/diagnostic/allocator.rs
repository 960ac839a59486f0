// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use crate::error::diagnostic::Diagnostic;

/// Allocation would exceed the allocator limit
pub fn limit_exceeded(requested: usize, allocated: usize, limit: usize) -> Diagnostic {
	Diagnostic {
		code: "ALLOCATOR_001".to_string(),
		message: format!(
			"Unable to allocate {} bytes: {} of {} bytes already allocated",
			requested, allocated, limit
		),
		label: Some("allocation limit exceeded".to_string()),
		help: Some("Release unused buffers or raise the allocator limit".to_string()),
		notes: vec![],
		cause: None,
	}
}

/// Buffer cannot hold the requested number of entries
pub fn buffer_too_small(capacity: usize, required: u64) -> Diagnostic {
	Diagnostic {
		code: "ALLOCATOR_002".to_string(),
		message: format!("Buffer of {} bytes cannot hold {} bytes", capacity, required),
		label: Some("buffer too small".to_string()),
		help: Some("Allocate a buffer of at least four bytes per record".to_string()),
		notes: vec![],
		cause: None,
	}
}
