// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

pub mod allocator;
pub mod function;
pub mod logging;

pub use allocator::assert_balanced;
pub use function::{aggregate_descriptor, call, nullable, required, simple_descriptor};
pub use logging::init_tracing;
