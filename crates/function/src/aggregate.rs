// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use vexec_type::Result;

use crate::{
	FunctionError, FunctionScope, MethodBlock,
	codegen::{Block, BlockType, CodeGenerator, HoldingContainer, Variable},
	descriptor::FunctionDescriptor,
	template::{FunctionTemplate, add_protected_block, declare_workspace_variables, generate_body},
};

/// A grouping function. Rows are folded into the workspace by the `add`
/// body; `output` reads the accumulated state once per group and `reset`
/// clears it for the next one.
#[derive(Debug, Clone)]
pub struct AggregateFunction {
	descriptor: FunctionDescriptor,
}

impl AggregateFunction {
	const REQUIRED: [MethodBlock; 3] = [MethodBlock::Add, MethodBlock::Output, MethodBlock::Reset];

	pub fn new(descriptor: FunctionDescriptor) -> Result<Self> {
		if descriptor.scope() != FunctionScope::Aggregate {
			return Err(FunctionError::ScopeMismatch {
				name: descriptor.name().to_string(),
				expected: FunctionScope::Aggregate,
				actual: descriptor.scope(),
			}
			.into());
		}

		if let Some(block) = Self::REQUIRED.into_iter().find(|block| descriptor.block(*block).is_none()) {
			return Err(FunctionError::MissingBlock {
				name: descriptor.name().to_string(),
				block,
			}
			.into());
		}

		Ok(Self {
			descriptor,
		})
	}

	fn body(&self, block: MethodBlock) -> &str {
		self.descriptor.block(block).unwrap_or_default()
	}
}

impl FunctionTemplate for AggregateFunction {
	fn descriptor(&self) -> &FunctionDescriptor {
		&self.descriptor
	}

	fn render_start(&self, g: &mut dyn CodeGenerator, _inputs: &[HoldingContainer]) -> Vec<Variable> {
		let workspace = declare_workspace_variables(&self.descriptor, g);
		generate_body(&self.descriptor, g, BlockType::Setup, self.descriptor.block(MethodBlock::Setup), &workspace);
		workspace
	}

	fn render_middle(&self, g: &mut dyn CodeGenerator, inputs: &[HoldingContainer], workspace: &[Variable]) {
		let name = self.descriptor.name();

		let mut sub = Block::new();
		add_protected_block(&self.descriptor, &mut sub, self.body(MethodBlock::Add), inputs, workspace);

		let eval = g.block(BlockType::Eval);
		eval.direct_statement(format!("// ---- start of add portion of {} function ----", name));
		eval.add(sub);
		eval.direct_statement(format!("// ---- end of add portion of {} function ----", name));
	}

	fn render_end(
		&self,
		g: &mut dyn CodeGenerator,
		_inputs: &[HoldingContainer],
		workspace: &[Variable],
	) -> HoldingContainer {
		let return_value = self.descriptor.return_value();
		let out = g.declare(return_value.major_type());
		let holder_type = return_value.major_type().holder_type();

		let mut sub = Block::new();
		let internal = sub.decl(&holder_type, return_value.name(), format!("{}::default()", holder_type));
		add_protected_block(&self.descriptor, &mut sub, self.body(MethodBlock::Output), &[], workspace);
		sub.assign(out.holder(), &internal);
		g.block(BlockType::Eval).add(sub);

		generate_body(&self.descriptor, g, BlockType::Reset, self.descriptor.block(MethodBlock::Reset), workspace);
		generate_body(
			&self.descriptor,
			g,
			BlockType::Cleanup,
			self.descriptor.block(MethodBlock::Cleanup),
			workspace,
		);

		out
	}

	fn is_nested(&self) -> bool {
		true
	}
}
