// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use vexec_column::BufferAllocator;

/// Panics unless every buffer handed out by `allocator` has been released.
#[track_caller]
pub fn assert_balanced(allocator: &BufferAllocator) {
	let outstanding = allocator.outstanding_buffers();
	let allocated = allocator.allocated_bytes();
	assert!(
		outstanding == 0 && allocated == 0,
		"allocator not balanced: {} buffers holding {} bytes still retained",
		outstanding,
		allocated
	);
}
