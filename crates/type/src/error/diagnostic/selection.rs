// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use crate::error::diagnostic::Diagnostic;

/// Selection vector would need a buffer beyond the 2 GiB ceiling
pub fn capacity_exceeded(record_count: usize, requested_bytes: u64) -> Diagnostic {
	Diagnostic {
		code: "SELECTION_001".to_string(),
		message: format!(
			"Selection vectors support allocations up to 2gb in size. You requested an allocation of {} bytes for {} records.",
			requested_bytes, record_count
		),
		label: Some("selection vector too large".to_string()),
		help: Some("Split the input into smaller batches before building the selection vector".to_string()),
		notes: vec!["Each selection entry occupies 4 bytes".to_string()],
		cause: None,
	}
}
