// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

#![cfg_attr(not(debug_assertions), deny(warnings))]

pub mod allocator;
pub mod error;
pub mod selection;

pub use allocator::{BufferAllocator, RecordBuffer};
pub use error::{AllocatorError, SelectionError};
pub use selection::{MAX_RECORD_COUNT, SelectionVector4, batch_index, compound, record_index};
