// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Indirection vectors giving a logical row order over physically separate
//! record batches.
//!
//! Each entry is a compound `u32`: the upper 16 bits name the batch, the
//! lower 16 bits the record inside it.

mod vector4;

pub use vector4::SelectionVector4;

/// Bytes per selection entry.
pub const ENTRY_SIZE: usize = 4;

/// Largest record count whose entries fit a buffer of at most 2 GiB.
pub const MAX_RECORD_COUNT: usize = i32::MAX as usize / ENTRY_SIZE;

pub fn compound(batch: u16, record: u16) -> u32 {
	((batch as u32) << 16) | record as u32
}

pub fn batch_index(compound: u32) -> u16 {
	(compound >> 16) as u16
}

pub fn record_index(compound: u32) -> u16 {
	(compound & 0xFFFF) as u16
}
