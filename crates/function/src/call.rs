// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::fmt::{self, Display};

use vexec_type::MajorType;

/// One argument of a planned call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CallArgument {
	Typed(MajorType),
	/// A null literal; it carries no type of its own.
	Null,
}

impl CallArgument {
	pub fn major_type(&self) -> Option<MajorType> {
		match self {
			CallArgument::Typed(ty) => Some(*ty),
			CallArgument::Null => None,
		}
	}

	pub fn is_null(&self) -> bool {
		matches!(self, CallArgument::Null)
	}
}

impl From<MajorType> for CallArgument {
	fn from(ty: MajorType) -> Self {
		CallArgument::Typed(ty)
	}
}

/// A call produced by the planner: function name, the type the planner expects
/// back, and the ordered argument types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionCall {
	name: String,
	return_type: MajorType,
	arguments: Vec<CallArgument>,
}

impl FunctionCall {
	pub fn new(name: impl Into<String>, return_type: MajorType, arguments: Vec<CallArgument>) -> Self {
		Self {
			name: name.into(),
			return_type,
			arguments,
		}
	}

	pub fn name(&self) -> &str {
		&self.name
	}

	pub fn return_type(&self) -> MajorType {
		self.return_type
	}

	pub fn arguments(&self) -> &[CallArgument] {
		&self.arguments
	}

	pub fn arity(&self) -> usize {
		self.arguments.len()
	}

	pub fn argument_types(&self) -> Vec<Option<MajorType>> {
		self.arguments.iter().map(CallArgument::major_type).collect()
	}
}

impl Display for FunctionCall {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}(", self.name)?;
		for (i, arg) in self.arguments.iter().enumerate() {
			if i > 0 {
				write!(f, ", ")?;
			}
			match arg {
				CallArgument::Typed(ty) => write!(f, "{}", ty)?,
				CallArgument::Null => write!(f, "NULL")?,
			}
		}
		write!(f, ") -> {}", self.return_type)
	}
}

#[cfg(test)]
pub mod tests {
	use vexec_type::MinorType;

	use super::*;

	#[test]
	fn test_display() {
		let call = FunctionCall::new(
			"add",
			MajorType::required(MinorType::Int),
			vec![MajorType::required(MinorType::TinyInt).into(), CallArgument::Null],
		);
		assert_eq!(call.to_string(), "add(TINYINT:REQUIRED, NULL) -> INT:REQUIRED");
		assert_eq!(call.arity(), 2);
		assert_eq!(call.argument_types(), vec![Some(MajorType::required(MinorType::TinyInt)), None]);
	}
}
