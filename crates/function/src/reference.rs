// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::fmt::{self, Display};

use vexec_type::MajorType;

/// A typed, named parameter or return value of a function implementation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ValueReference {
	major_type: MajorType,
	name: String,
}

impl ValueReference {
	pub fn new(major_type: MajorType, name: impl Into<String>) -> Self {
		let name = name.into();
		assert!(!name.trim().is_empty(), "value reference of type {} requires a name", major_type);
		Self {
			major_type,
			name,
		}
	}

	pub fn major_type(&self) -> MajorType {
		self.major_type
	}

	pub fn name(&self) -> &str {
		&self.name
	}
}

impl Display for ValueReference {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}: {}", self.name, self.major_type)
	}
}

/// Per-invocation state of a function (an accumulator, a cached pattern)
/// that persists across row evaluations of one generated unit.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WorkspaceReference {
	holder_type: String,
	name: String,
}

impl WorkspaceReference {
	pub fn new(holder_type: impl Into<String>, name: impl Into<String>) -> Self {
		let holder_type = holder_type.into();
		let name = name.into();
		assert!(!holder_type.trim().is_empty(), "workspace reference '{}' requires a holder type", name);
		assert!(!name.trim().is_empty(), "workspace reference of type {} requires a name", holder_type);
		Self {
			holder_type,
			name,
		}
	}

	pub fn holder_type(&self) -> &str {
		&self.holder_type
	}

	pub fn name(&self) -> &str {
		&self.name
	}
}
