// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{
	fmt,
	sync::{
		Arc,
		atomic::{AtomicU32, Ordering},
	},
};

use parking_lot::Mutex;
use tracing::{trace, warn};
use vexec_type::Result;

use crate::AllocatorError;

#[derive(Debug, Default)]
struct Ledger {
	allocated: usize,
	outstanding: usize,
}

#[derive(Debug)]
struct AllocatorState {
	limit: usize,
	ledger: Mutex<Ledger>,
}

/// Hands out [`RecordBuffer`]s and accounts for the bytes they hold until
/// their last reference is released.
#[derive(Debug, Clone)]
pub struct BufferAllocator {
	state: Arc<AllocatorState>,
}

impl BufferAllocator {
	pub fn new(limit: usize) -> Self {
		Self {
			state: Arc::new(AllocatorState {
				limit,
				ledger: Mutex::new(Ledger::default()),
			}),
		}
	}

	pub fn unbounded() -> Self {
		Self::new(usize::MAX)
	}

	pub fn limit(&self) -> usize {
		self.state.limit
	}

	/// Allocates a zeroed buffer of `capacity` bytes with a reference count
	/// of one. Storage is rounded up to whole `u32` words.
	pub fn buffer(&self, capacity: usize) -> Result<RecordBuffer> {
		{
			let mut ledger = self.state.ledger.lock();
			if capacity > self.state.limit - ledger.allocated {
				warn!(requested = capacity, allocated = ledger.allocated, limit = self.state.limit, "allocation refused");
				return Err(AllocatorError::LimitExceeded {
					requested: capacity,
					allocated: ledger.allocated,
					limit: self.state.limit,
				}
				.into());
			}
			ledger.allocated += capacity;
			ledger.outstanding += 1;
		}
		trace!(capacity, "buffer allocated");

		Ok(RecordBuffer {
			inner: Arc::new(BufferInner {
				words: (0..capacity.div_ceil(WORD_SIZE)).map(|_| AtomicU32::new(0)).collect(),
				capacity,
				allocator: self.state.clone(),
			}),
		})
	}

	pub fn allocated_bytes(&self) -> usize {
		self.state.ledger.lock().allocated
	}

	pub fn outstanding_buffers(&self) -> usize {
		self.state.ledger.lock().outstanding
	}
}

const WORD_SIZE: usize = 4;

struct BufferInner {
	words: Box<[AtomicU32]>,
	capacity: usize,
	allocator: Arc<AllocatorState>,
}

impl Drop for BufferInner {
	fn drop(&mut self) {
		let mut ledger = self.allocator.ledger.lock();
		ledger.allocated -= self.capacity;
		ledger.outstanding -= 1;
		trace!(capacity = self.capacity, "buffer returned to allocator");
	}
}

/// Fixed-capacity buffer of `u32` words shared by reference counting.
///
/// Every handle owns exactly one reference. [`RecordBuffer::retain`] takes a
/// further reference as a new handle; dropping or
/// [`releasing`](RecordBuffer::release) a handle gives its reference back.
/// The bytes return to the allocator with the last reference.
///
/// Words are read and written without locking; offsets are in bytes and
/// must be word aligned.
pub struct RecordBuffer {
	inner: Arc<BufferInner>,
}

impl RecordBuffer {
	pub fn retain(&self) -> RecordBuffer {
		let inner = self.inner.clone();
		trace!(ref_count = Arc::strong_count(&inner), "buffer retained");
		RecordBuffer {
			inner,
		}
	}

	pub fn release(self) {
		trace!(ref_count = self.ref_count() - 1, "buffer released");
		drop(self)
	}

	pub fn ref_count(&self) -> usize {
		Arc::strong_count(&self.inner)
	}

	pub fn capacity(&self) -> usize {
		self.inner.capacity
	}

	/// Reads the `u32` at byte `offset`.
	pub fn get_u32(&self, offset: usize) -> u32 {
		self.word(offset).load(Ordering::Relaxed)
	}

	pub fn set_u32(&self, offset: usize, value: u32) {
		self.word(offset).store(value, Ordering::Relaxed)
	}

	fn word(&self, offset: usize) -> &AtomicU32 {
		let capacity = self.inner.capacity;
		if offset.checked_add(WORD_SIZE).is_none_or(|end| end > capacity) {
			panic!("u32 access at offset {} outside buffer of {} bytes", offset, capacity);
		}
		if offset % WORD_SIZE != 0 {
			panic!("unaligned u32 access at offset {}", offset);
		}
		&self.inner.words[offset / WORD_SIZE]
	}
}

impl fmt::Debug for RecordBuffer {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("RecordBuffer")
			.field("capacity", &self.capacity())
			.field("ref_count", &self.ref_count())
			.finish()
	}
}
