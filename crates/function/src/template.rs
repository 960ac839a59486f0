// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Three-phase emission contract between a function implementation and the
//! code-generation backend.
//!
//! 1. [`FunctionTemplate::render_start`] declares the workspace fields of the
//!    generated unit and returns handles to them.
//! 2. [`FunctionTemplate::render_middle`] emits one-time logic that must run
//!    before per-row evaluation (no-op by default).
//! 3. [`FunctionTemplate::render_end`] emits the per-row evaluation and returns
//!    the holder of the computed value.
//!
//! Every fragment is emitted inside a fresh scope. Inputs and workspace fields
//! are first bound to locals named after the declared references, the body is
//! inserted verbatim, and the workspace locals are written back to the fields
//! afterwards. Workspace state therefore survives from row to row while
//! parameters do not.

use std::fmt::Debug;

use crate::{
	FunctionCall,
	codegen::{Block, BlockType, CodeGenerator, HoldingContainer, Variable},
	descriptor::FunctionDescriptor,
};

pub trait FunctionTemplate: Send + Sync + Debug {
	fn descriptor(&self) -> &FunctionDescriptor;

	fn render_start(&self, g: &mut dyn CodeGenerator, _inputs: &[HoldingContainer]) -> Vec<Variable> {
		declare_workspace_variables(self.descriptor(), g)
	}

	fn render_middle(&self, _g: &mut dyn CodeGenerator, _inputs: &[HoldingContainer], _workspace: &[Variable]) {}

	fn render_end(
		&self,
		g: &mut dyn CodeGenerator,
		inputs: &[HoldingContainer],
		workspace: &[Variable],
	) -> HoldingContainer;

	/// Whether the body may embed further calls that need their own
	/// isolated scopes.
	fn is_nested(&self) -> bool;

	fn name(&self) -> &str {
		self.descriptor().name()
	}

	fn matches(&self, call: &FunctionCall) -> bool {
		self.descriptor().matches(call)
	}

	/// Runs all three phases and returns the value holder.
	fn render(&self, g: &mut dyn CodeGenerator, inputs: &[HoldingContainer]) -> HoldingContainer {
		g.add_imports(self.descriptor().imports());
		let workspace = self.render_start(g, inputs);
		self.render_middle(g, inputs, &workspace);
		self.render_end(g, inputs, &workspace)
	}
}

pub fn declare_workspace_variables(descriptor: &FunctionDescriptor, g: &mut dyn CodeGenerator) -> Vec<Variable> {
	descriptor.workspace().iter().map(|reference| g.declare_class_field("work", reference.holder_type())).collect()
}

/// Emits `body` into `block` between start/end markers naming the function.
/// Blank bodies emit nothing.
pub fn generate_body(
	descriptor: &FunctionDescriptor,
	g: &mut dyn CodeGenerator,
	block: BlockType,
	body: Option<&str>,
	workspace: &[Variable],
) {
	let Some(body) = body.filter(|body| !body.trim().is_empty()) else {
		return;
	};

	let mut sub = Block::new();
	add_protected_block(descriptor, &mut sub, body, &[], workspace);

	let target = g.block(block);
	target.direct_statement(format!("// start {} for function {}", block, descriptor.name()));
	target.add(sub);
	target.direct_statement(format!("// end {} for function {}", block, descriptor.name()));
}

/// Binds inputs and workspace fields to scoped locals, inserts `body`, then
/// writes the workspace locals back to their fields.
pub fn add_protected_block(
	descriptor: &FunctionDescriptor,
	sub: &mut Block,
	body: &str,
	inputs: &[HoldingContainer],
	workspace: &[Variable],
) {
	if !inputs.is_empty() {
		assert_eq!(
			inputs.len(),
			descriptor.parameters().len(),
			"function {} rendered with {} inputs",
			descriptor.name(),
			inputs.len()
		);
		for (parameter, input) in descriptor.parameters().iter().zip(inputs) {
			sub.decl(input.holder().ty(), parameter.name(), input.holder().expr());
		}
	}

	let internal: Vec<Variable> = descriptor
		.workspace()
		.iter()
		.zip(workspace)
		.map(|(reference, field)| sub.decl(reference.holder_type(), reference.name(), field.expr()))
		.collect();

	sub.direct_statement(body);

	for (field, local) in workspace.iter().zip(&internal) {
		sub.assign(field, local);
	}
}
