// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use vexec_type::{DataMode, MajorType, Result};

use crate::{
	FunctionError, FunctionScope, MethodBlock, NullHandling,
	codegen::{Block, BlockType, CodeGenerator, HoldingContainer, Variable},
	descriptor::FunctionDescriptor,
	template::{FunctionTemplate, add_protected_block, declare_workspace_variables, generate_body},
};

/// A row-at-a-time function: one `eval` body per row, with optional `setup`,
/// `reset` and `cleanup` bodies.
#[derive(Debug, Clone)]
pub struct SimpleFunction {
	descriptor: FunctionDescriptor,
}

impl SimpleFunction {
	pub fn new(descriptor: FunctionDescriptor) -> Result<Self> {
		if descriptor.scope() != FunctionScope::Simple {
			return Err(FunctionError::ScopeMismatch {
				name: descriptor.name().to_string(),
				expected: FunctionScope::Simple,
				actual: descriptor.scope(),
			}
			.into());
		}

		if descriptor.block(MethodBlock::Eval).is_none() {
			return Err(FunctionError::MissingBlock {
				name: descriptor.name().to_string(),
				block: MethodBlock::Eval,
			}
			.into());
		}

		Ok(Self {
			descriptor,
		})
	}

	fn generate_eval_body(
		&self,
		g: &mut dyn CodeGenerator,
		inputs: &[HoldingContainer],
		workspace: &[Variable],
	) -> HoldingContainer {
		let name = self.descriptor.name();
		let body = self.descriptor.block(MethodBlock::Eval).unwrap_or_default();
		let return_value = self.descriptor.return_value();

		g.block(BlockType::Eval).direct_statement(format!("// ---- start of eval portion of {} function ----", name));

		// the body only runs when every nullable input is set
		let guard = match self.descriptor.null_handling() {
			NullHandling::NullIfNull => {
				let checks: Vec<String> = inputs.iter().filter_map(HoldingContainer::is_set).collect();
				(!checks.is_empty()).then(|| checks.join(" * "))
			}
			NullHandling::Internal => None,
		};

		let return_type = if guard.is_some() {
			MajorType::new(return_value.major_type().minor, DataMode::Nullable)
		} else {
			return_value.major_type()
		};

		let out = g.declare(return_type);
		let holder_type = return_type.holder_type();

		let mut sub = Block::new();
		let internal = sub.decl(&holder_type, return_value.name(), format!("{}::default()", holder_type));
		add_protected_block(&self.descriptor, &mut sub, body, inputs, workspace);
		if guard.is_some() {
			sub.assign_expr(format!("{}.is_set", internal.expr()), "1");
		}
		sub.assign(out.holder(), &internal);

		let eval = g.block(BlockType::Eval);
		match guard {
			Some(condition) => {
				let mut unset = Block::new();
				unset.assign_expr(format!("{}.is_set", out.holder().expr()), "0");
				eval.if_else(format!("{} == 0", condition), unset, Some(sub));
			}
			None => eval.add(sub),
		}
		eval.direct_statement(format!("// ---- end of eval portion of {} function ----", name));

		out
	}
}

impl FunctionTemplate for SimpleFunction {
	fn descriptor(&self) -> &FunctionDescriptor {
		&self.descriptor
	}

	fn render_start(&self, g: &mut dyn CodeGenerator, _inputs: &[HoldingContainer]) -> Vec<Variable> {
		let workspace = declare_workspace_variables(&self.descriptor, g);
		generate_body(&self.descriptor, g, BlockType::Setup, self.descriptor.block(MethodBlock::Setup), &workspace);
		workspace
	}

	fn render_end(
		&self,
		g: &mut dyn CodeGenerator,
		inputs: &[HoldingContainer],
		workspace: &[Variable],
	) -> HoldingContainer {
		let out = self.generate_eval_body(g, inputs, workspace);
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
		false
	}
}

#[cfg(test)]
pub mod tests {
	use vexec_type::MinorType;

	use super::*;
	use crate::{
		SourceGenerator,
		reference::{ValueReference, WorkspaceReference},
	};

	fn add(null_handling: NullHandling) -> SimpleFunction {
		SimpleFunction::new(
			FunctionDescriptor::builder(
				"add",
				FunctionScope::Simple,
				ValueReference::new(MajorType::required(MinorType::Int), "out"),
			)
			.null_handling(null_handling)
			.parameter(ValueReference::new(MajorType::required(MinorType::Int), "left"))
			.parameter(ValueReference::new(MajorType::required(MinorType::Int), "right"))
			.block(MethodBlock::Eval, "out.value = left.value + right.value;")
			.build(),
		)
		.unwrap()
	}

	fn input(g: &mut SourceGenerator, major_type: MajorType) -> HoldingContainer {
		g.declare(major_type)
	}

	#[test]
	fn test_missing_eval_block() {
		let descriptor = FunctionDescriptor::builder(
			"noop",
			FunctionScope::Simple,
			ValueReference::new(MajorType::required(MinorType::Int), "out"),
		)
		.build();
		let err = SimpleFunction::new(descriptor).unwrap_err();
		assert_eq!(err.code(), "FUNCTION_003");
	}

	#[test]
	fn test_scope_mismatch() {
		let descriptor = FunctionDescriptor::builder(
			"sum",
			FunctionScope::Aggregate,
			ValueReference::new(MajorType::required(MinorType::Int), "out"),
		)
		.block(MethodBlock::Eval, "out.value = 1;")
		.build();
		let err = SimpleFunction::new(descriptor).unwrap_err();
		assert_eq!(err.code(), "FUNCTION_004");
	}

	#[test]
	fn test_render_required_inputs() {
		let mut g = SourceGenerator::new("Projector");
		let left = input(&mut g, MajorType::required(MinorType::Int));
		let right = input(&mut g, MajorType::required(MinorType::Int));

		let function = add(NullHandling::NullIfNull);
		let out = function.render(&mut g, &[left, right]);
		assert_eq!(out.major_type(), MajorType::required(MinorType::Int));
		assert!(!function.is_nested());

		let expected = "\
let mut out0: IntHolder = IntHolder::default();
let mut out1: IntHolder = IntHolder::default();
// ---- start of eval portion of add function ----
let mut out2: IntHolder = IntHolder::default();
{
	let mut out: IntHolder = IntHolder::default();
	let mut left: IntHolder = out0;
	let mut right: IntHolder = out1;
	out.value = left.value + right.value;
	out2 = out;
}
// ---- end of eval portion of add function ----
";
		assert_eq!(g.get_block(BlockType::Eval).render(0), expected);
		assert!(g.get_block(BlockType::Setup).is_empty());
	}

	#[test]
	fn test_render_null_if_null_guard() {
		let mut g = SourceGenerator::new("Projector");
		let left = input(&mut g, MajorType::nullable(MinorType::Int));
		let right = input(&mut g, MajorType::nullable(MinorType::Int));

		let out = add(NullHandling::NullIfNull).render(&mut g, &[left, right]);
		assert_eq!(out.major_type(), MajorType::nullable(MinorType::Int));

		let rendered = g.get_block(BlockType::Eval).render(0);
		assert!(rendered.contains("if out0.is_set * out1.is_set == 0 {\n\tout2.is_set = 0;\n} else {\n"));
		assert!(rendered.contains("\tout.is_set = 1;\n\tout2 = out;\n}\n"));
	}

	#[test]
	fn test_render_internal_null_handling_has_no_guard() {
		let mut g = SourceGenerator::new("Projector");
		let left = input(&mut g, MajorType::nullable(MinorType::Int));
		let right = input(&mut g, MajorType::required(MinorType::Int));

		let out = add(NullHandling::Internal).render(&mut g, &[left, right]);
		assert_eq!(out.major_type(), MajorType::required(MinorType::Int));
		assert!(!g.get_block(BlockType::Eval).render(0).contains("is_set"));
	}

	#[test]
	fn test_workspace_persists_across_rows() {
		let function = SimpleFunction::new(
			FunctionDescriptor::builder(
				"regexp_matches",
				FunctionScope::Simple,
				ValueReference::new(MajorType::required(MinorType::Bit), "out"),
			)
			.parameter(ValueReference::new(MajorType::required(MinorType::VarChar), "input"))
			.workspace(WorkspaceReference::new("Regex", "pattern"))
			.block(MethodBlock::Setup, "pattern = Regex::new(\"a+\");")
			.block(MethodBlock::Eval, "out.value = pattern.is_match(input.as_str()) as i32;")
			.import("regex::Regex")
			.build(),
		)
		.unwrap();

		let mut g = SourceGenerator::new("Filter");
		let text = input(&mut g, MajorType::required(MinorType::VarChar));
		function.render(&mut g, &[text]);

		assert_eq!(g.fields().len(), 1);
		let field = g.fields()[0].expr();

		let setup = g.get_block(BlockType::Setup).render(0);
		assert!(setup.starts_with("// start SETUP for function regexp_matches\n{\n"));
		assert!(setup.contains(&format!("\tlet mut pattern: Regex = {};\n", field)));
		assert!(setup.contains(&format!("\t{} = pattern;\n", field)));
		assert!(setup.ends_with("}\n// end SETUP for function regexp_matches\n"));

		let eval = g.get_block(BlockType::Eval).render(0);
		assert!(eval.contains(&format!("\tlet mut pattern: Regex = {};\n", field)));
		assert!(eval.contains(&format!("\t{} = pattern;\n", field)));

		assert!(g.render().starts_with("use regex::Regex;\n\npub struct Filter {\n"));
	}
}
