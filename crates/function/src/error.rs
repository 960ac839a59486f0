// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use vexec_type::{
	Error, MajorType,
	error::{
		IntoDiagnostic,
		diagnostic::{
			Diagnostic,
			function::{missing_block, scope_mismatch, unknown_function, unresolved_function},
		},
	},
};

use crate::{FunctionScope, MethodBlock};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FunctionError {
	#[error("unresolved function {name} for the given argument types")]
	Unresolved {
		name: String,
		arguments: Vec<Option<MajorType>>,
	},

	#[error("unknown function {name}")]
	Unknown {
		name: String,
	},

	#[error("function {name} is missing required block {block}")]
	MissingBlock {
		name: String,
		block: MethodBlock,
	},

	#[error("function {name} has scope {actual}, expected {expected}")]
	ScopeMismatch {
		name: String,
		expected: FunctionScope,
		actual: FunctionScope,
	},
}

impl IntoDiagnostic for FunctionError {
	fn into_diagnostic(self) -> Diagnostic {
		match self {
			FunctionError::Unresolved {
				name,
				arguments,
			} => unresolved_function(&name, &arguments),
			FunctionError::Unknown {
				name,
			} => unknown_function(&name),
			FunctionError::MissingBlock {
				name,
				block,
			} => missing_block(&name, &block.to_string()),
			FunctionError::ScopeMismatch {
				name,
				expected,
				actual,
			} => scope_mismatch(&name, &expected.to_string(), &actual.to_string()),
		}
	}
}

impl From<FunctionError> for Error {
	fn from(err: FunctionError) -> Self {
		Error(err.into_diagnostic())
	}
}
