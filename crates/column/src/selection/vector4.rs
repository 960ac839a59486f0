// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::cmp::min;

use tracing::{instrument, trace};
use vexec_type::Result;

use crate::{
	AllocatorError, BufferAllocator, RecordBuffer, SelectionError,
	selection::{ENTRY_SIZE, MAX_RECORD_COUNT, compound},
};

/// Selection vector of compound `(batch, record)` entries consumed in
/// fixed-size windows.
///
/// Writes through [`set`](Self::set) address the whole vector. Reads through
/// [`get`](Self::get) are relative to the current window, which
/// [`next`](Self::next) advances until the vector is exhausted.
#[derive(Debug)]
pub struct SelectionVector4 {
	buffer: Option<RecordBuffer>,
	// entry offset of index 0 inside the buffer
	base: usize,
	total_count: usize,
	start: usize,
	length: usize,
}

impl SelectionVector4 {
	/// Takes ownership of one reference to `buffer`.
	pub fn new(buffer: RecordBuffer, total_count: usize, window: usize) -> Result<Self> {
		Self::check_capacity(total_count)?;

		let required = (total_count * ENTRY_SIZE) as u64;
		if (buffer.capacity() as u64) < required {
			return Err(AllocatorError::BufferTooSmall {
				capacity: buffer.capacity(),
				required,
			}
			.into());
		}

		Ok(Self {
			buffer: Some(buffer),
			base: 0,
			total_count,
			start: 0,
			length: min(window, total_count),
		})
	}

	pub fn allocate(allocator: &BufferAllocator, total_count: usize, window: usize) -> Result<Self> {
		Self::check_capacity(total_count)?;
		let buffer = allocator.buffer(total_count * ENTRY_SIZE)?;
		Self::new(buffer, total_count, window)
	}

	fn check_capacity(total_count: usize) -> Result<()> {
		if total_count > MAX_RECORD_COUNT {
			return Err(SelectionError::CapacityExceeded {
				record_count: total_count,
				requested_bytes: total_count as u64 * ENTRY_SIZE as u64,
			}
			.into());
		}
		Ok(())
	}

	pub fn total_count(&self) -> usize {
		self.total_count
	}

	/// Length of the current window.
	pub fn count(&self) -> usize {
		self.length
	}

	pub fn start(&self) -> usize {
		self.start
	}

	pub fn is_cleared(&self) -> bool {
		self.buffer.is_none()
	}

	fn buffer(&self) -> &RecordBuffer {
		match &self.buffer {
			Some(buffer) => buffer,
			None => panic!("selection vector used after clear"),
		}
	}

	/// Writes `compound` at absolute position `index`, ignoring the window.
	pub fn set(&mut self, index: usize, compound: u32) {
		let buffer = self.buffer();
		assert!(index < self.total_count, "selection index {} out of bounds for {} records", index, self.total_count);
		buffer.set_u32((self.base + index) * ENTRY_SIZE, compound);
	}

	pub fn set_record(&mut self, index: usize, batch: u16, record: u16) {
		self.set(index, compound(batch, record));
	}

	/// Reads the entry at `index` of the current window.
	pub fn get(&self, index: usize) -> u32 {
		let buffer = self.buffer();
		assert!(index < self.length, "selection index {} outside window of {} records", index, self.length);
		buffer.get_u32((self.base + self.start + index) * ENTRY_SIZE)
	}

	/// Moves the window past its current extent, keeping its length except
	/// at the tail. Returns `false` once every entry has been visited.
	pub fn next(&mut self) -> bool {
		if self.length == 0 || self.start + self.length >= self.total_count {
			self.start = self.total_count;
			self.length = 0;
			return false;
		}

		self.start += self.length;
		self.length = min(self.length, self.total_count - self.start);
		trace!(start = self.start, length = self.length, "selection window advanced");
		true
	}

	/// A new vector over exactly the current window, sharing the buffer.
	///
	/// The wrapper holds its own buffer reference and window, so advancing
	/// or clearing this vector does not affect it.
	#[instrument(name = "column::selection::wrap_current", level = "trace", skip(self), fields(start = self.start, length = self.length))]
	pub fn create_new_wrapper_current(&self) -> SelectionVector4 {
		SelectionVector4 {
			buffer: Some(self.buffer().retain()),
			base: self.base + self.start,
			total_count: self.length,
			start: 0,
			length: self.length,
		}
	}

	/// Releases this vector's buffer reference. Clearing twice is a
	/// programming error.
	pub fn clear(&mut self) {
		let Some(buffer) = self.buffer.take() else {
			panic!("selection vector cleared twice");
		};
		buffer.release();
		self.base = 0;
		self.total_count = 0;
		self.start = 0;
		self.length = 0;
	}

	/// Entries of the current window.
	pub fn iter(&self) -> impl Iterator<Item = u32> + '_ {
		(0..self.length).map(move |index| self.get(index))
	}
}
