// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use vexec_function::{
	CallArgument, FunctionCall, FunctionDescriptor, FunctionScope, MethodBlock, ValueReference,
	descriptor::FunctionDescriptorBuilder,
};
use vexec_type::{MajorType, MinorType};

pub fn required(minor: MinorType) -> MajorType {
	MajorType::required(minor)
}

pub fn nullable(minor: MinorType) -> MajorType {
	MajorType::nullable(minor)
}

/// A call whose arguments are typed, or null where `None`.
pub fn call(name: &str, return_type: MajorType, arguments: &[Option<MajorType>]) -> FunctionCall {
	FunctionCall::new(
		name,
		return_type,
		arguments
			.iter()
			.map(|argument| match argument {
				Some(ty) => CallArgument::Typed(*ty),
				None => CallArgument::Null,
			})
			.collect(),
	)
}

fn parameters(mut builder: FunctionDescriptorBuilder, parameters: &[MajorType]) -> FunctionDescriptorBuilder {
	for (index, ty) in parameters.iter().enumerate() {
		builder = builder.parameter(ValueReference::new(*ty, format!("in{}", index)));
	}
	builder
}

/// Simple descriptor with parameters `in0..inN`, output `out` and the given
/// eval body. Further blocks can be added before `build()`.
pub fn simple_descriptor(
	name: &str,
	parameter_types: &[MajorType],
	return_type: MajorType,
	eval: &str,
) -> FunctionDescriptorBuilder {
	let builder = FunctionDescriptor::builder(name, FunctionScope::Simple, ValueReference::new(return_type, "out"))
		.block(MethodBlock::Eval, eval);
	parameters(builder, parameter_types)
}

/// Aggregate descriptor with parameters `in0..inN` and the given add, output
/// and reset bodies.
pub fn aggregate_descriptor(
	name: &str,
	parameter_types: &[MajorType],
	return_type: MajorType,
	add: &str,
	output: &str,
	reset: &str,
) -> FunctionDescriptorBuilder {
	let builder = FunctionDescriptor::builder(name, FunctionScope::Aggregate, ValueReference::new(return_type, "out"))
		.block(MethodBlock::Add, add)
		.block(MethodBlock::Output, output)
		.block(MethodBlock::Reset, reset);
	parameters(builder, parameter_types)
}
