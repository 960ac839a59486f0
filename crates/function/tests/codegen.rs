// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use vexec_function::{
	AggregateFunction, BlockType, CodeGenerator, FunctionRegistry, FunctionTemplate, MethodBlock, SimpleFunction,
	SourceGenerator, WorkspaceReference,
};
use vexec_testing::{aggregate_descriptor, call, init_tracing, nullable, required, simple_descriptor};
use vexec_type::MinorType::*;

#[test]
fn test_render_resolved_function_into_unit() {
	init_tracing();
	let mut registry = FunctionRegistry::default();
	registry.register(
		SimpleFunction::new(
			simple_descriptor("concat", &[required(VarChar), required(VarChar)], required(VarChar), "out.value = format!(\"{}{}\", in0.value, in1.value);")
				.block(MethodBlock::Setup, "buffer.clear();")
				.workspace(WorkspaceReference::new("String", "buffer"))
				.import("std::fmt::Write")
				.build(),
		)
		.unwrap(),
	);

	let function = registry
		.resolve(&call("concat", required(VarChar), &[Some(required(VarChar)), Some(required(VarBinary))]))
		.unwrap();

	let mut g = SourceGenerator::new("Projection");
	let left = g.declare(required(VarChar));
	let right = g.declare(required(VarChar));
	let out = function.render(&mut g, &[left, right]);
	assert_eq!(out.holder().ty(), "VarCharHolder");

	let unit = g.render();
	assert!(unit.starts_with("use std::fmt::Write;\n\npub struct Projection {\n\twork2: String,\n}\n"));
	assert!(unit.contains("\t\t// start SETUP for function concat\n"));
	assert!(unit.contains("\t\t// ---- start of eval portion of concat function ----\n"));
	assert!(unit.contains("\t\t\tlet mut buffer: String = self.work2;\n"));
	assert!(unit.contains("\t\t\tself.work2 = buffer;\n"));
}

#[test]
fn test_nullable_inputs_guard_evaluation() {
	init_tracing();
	let function = SimpleFunction::new(
		simple_descriptor("negate", &[required(Int)], required(Int), "out.value = -in0.value;").build(),
	)
	.unwrap();

	let mut g = SourceGenerator::new("Projection");
	let input = g.declare(nullable(Int));
	let out = function.render(&mut g, &[input]);

	assert_eq!(out.major_type(), nullable(Int));
	let eval = g.get_block(BlockType::Eval).render(0);
	assert!(eval.contains("if out0.is_set == 0 {\n\tout1.is_set = 0;\n} else {\n"));
}

#[test]
fn test_aggregate_unit_layout() {
	init_tracing();
	let function = AggregateFunction::new(
		aggregate_descriptor(
			"count",
			&[required(Int)],
			required(BigInt),
			"rows.value += 1;",
			"out.value = rows.value;",
			"rows.value = 0;",
		)
		.workspace(WorkspaceReference::new("BigIntHolder", "rows"))
		.block(MethodBlock::Cleanup, "rows.value = 0;")
		.build(),
	)
	.unwrap();
	assert!(function.is_nested());

	let mut g = SourceGenerator::new("Aggregation");
	let input = g.declare(required(Int));
	function.render(&mut g, &[input]);

	assert!(g.get_block(BlockType::Setup).is_empty());
	assert!(!g.get_block(BlockType::Reset).is_empty());
	assert!(!g.get_block(BlockType::Cleanup).is_empty());

	let unit = g.render();
	let add = unit.find("rows.value += 1;").unwrap();
	let output = unit.find("out.value = rows.value;").unwrap();
	let reset = unit.find("pub fn reset(&mut self)").unwrap();
	assert!(add < output && output < reset);
}
