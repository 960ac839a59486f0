// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use indexmap::IndexMap;
use tracing::trace;
use vexec_type::{MajorType, TypePrecedence};

use crate::{
	CallArgument, CastRules, FunctionCall, FunctionScope, MethodBlock, NullHandling,
	reference::{ValueReference, WorkspaceReference},
};

/// Immutable description of one concrete function implementation.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionDescriptor {
	scope: FunctionScope,
	null_handling: NullHandling,
	binary_commutative: bool,
	name: String,
	parameters: Vec<ValueReference>,
	return_value: ValueReference,
	workspace: Vec<WorkspaceReference>,
	blocks: IndexMap<MethodBlock, String>,
	imports: Vec<String>,
}

impl FunctionDescriptor {
	pub fn builder(
		name: impl Into<String>,
		scope: FunctionScope,
		return_value: ValueReference,
	) -> FunctionDescriptorBuilder {
		FunctionDescriptorBuilder {
			descriptor: FunctionDescriptor {
				scope,
				null_handling: NullHandling::NullIfNull,
				binary_commutative: false,
				name: name.into(),
				parameters: vec![],
				return_value,
				workspace: vec![],
				blocks: IndexMap::new(),
				imports: vec![],
			},
		}
	}

	pub fn name(&self) -> &str {
		&self.name
	}

	pub fn scope(&self) -> FunctionScope {
		self.scope
	}

	pub fn null_handling(&self) -> NullHandling {
		self.null_handling
	}

	pub fn is_binary_commutative(&self) -> bool {
		self.binary_commutative
	}

	pub fn parameters(&self) -> &[ValueReference] {
		&self.parameters
	}

	pub fn return_value(&self) -> &ValueReference {
		&self.return_value
	}

	pub fn workspace(&self) -> &[WorkspaceReference] {
		&self.workspace
	}

	pub fn block(&self, block: MethodBlock) -> Option<&str> {
		self.blocks.get(&block).map(String::as_str)
	}

	pub fn imports(&self) -> &[String] {
		&self.imports
	}

	fn soft_compare(&self, a: &MajorType, b: &MajorType) -> bool {
		a.soft_equals(b, self.null_handling == NullHandling::NullIfNull)
	}

	/// Strict admissibility: the return type and every argument type must be
	/// soft-equal to the declared ones and the arity must agree. A null
	/// argument has no type and never matches here.
	pub fn matches(&self, call: &FunctionCall) -> bool {
		if !self.soft_compare(&call.return_type(), &self.return_value.major_type()) {
			trace!(
				function = %self.name,
				expected = %self.return_value.major_type(),
				actual = %call.return_type(),
				"return type mismatch"
			);
			return false;
		}

		if call.arity() != self.parameters.len() {
			trace!(
				function = %self.name,
				expected = self.parameters.len(),
				actual = call.arity(),
				"arity mismatch"
			);
			return false;
		}

		for (index, (param, arg)) in self.parameters.iter().zip(call.arguments()).enumerate() {
			let admissible = match arg {
				CallArgument::Typed(ty) => self.soft_compare(&param.major_type(), ty),
				CallArgument::Null => false,
			};
			if !admissible {
				trace!(function = %self.name, index, parameter = %param, "argument type mismatch");
				return false;
			}
		}

		true
	}

	/// Total implicit-widening cost of fitting `call` into this
	/// implementation, or `None` when it cannot be fitted at all. A total that
	/// overflows `u32` also counts as unfittable.
	pub fn cost(&self, call: &FunctionCall, precedence: &TypePrecedence, casts: &dyn CastRules) -> Option<u32> {
		if call.arity() != self.parameters.len() {
			return None;
		}

		let mut cost = 0u32;
		for (param, arg) in self.parameters.iter().zip(call.arguments()) {
			let param_type = param.major_type();
			let param_rank = precedence.rank_of(param_type.minor);

			let arg_rank = match arg {
				CallArgument::Null => Some(precedence.null_rank()),
				CallArgument::Typed(ty) => {
					if !casts.is_castable(ty.minor, param_type.minor) {
						return None;
					}
					precedence.rank_of(ty.minor)
				}
			};

			let (Some(param_rank), Some(arg_rank)) = (param_rank, arg_rank) else {
				return None;
			};

			// narrowing cast
			if param_rank < arg_rank {
				return None;
			}

			cost = cost.checked_add(param_rank - arg_rank)?;
		}

		Some(cost)
	}
}

pub struct FunctionDescriptorBuilder {
	descriptor: FunctionDescriptor,
}

impl FunctionDescriptorBuilder {
	pub fn null_handling(mut self, null_handling: NullHandling) -> Self {
		self.descriptor.null_handling = null_handling;
		self
	}

	pub fn binary_commutative(mut self, commutative: bool) -> Self {
		self.descriptor.binary_commutative = commutative;
		self
	}

	pub fn parameter(mut self, parameter: ValueReference) -> Self {
		self.descriptor.parameters.push(parameter);
		self
	}

	pub fn workspace(mut self, workspace: WorkspaceReference) -> Self {
		self.descriptor.workspace.push(workspace);
		self
	}

	pub fn block(mut self, block: MethodBlock, body: impl Into<String>) -> Self {
		self.descriptor.blocks.insert(block, body.into());
		self
	}

	pub fn import(mut self, import: impl Into<String>) -> Self {
		self.descriptor.imports.push(import.into());
		self
	}

	pub fn build(self) -> FunctionDescriptor {
		self.descriptor
	}
}
