// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Typed function dispatch and per-row code emission.
//!
//! A [`FunctionDescriptor`] describes one concrete, type-specialised
//! implementation of a named function. The [`FunctionRegistry`] keeps every
//! descriptor registered under a name and asks a [`FunctionResolver`] to pick
//! the one a [`FunctionCall`] should execute. The chosen
//! [`FunctionTemplate`] then renders its setup, evaluation and cleanup
//! fragments into a [`CodeGenerator`].

#![cfg_attr(not(debug_assertions), deny(warnings))]

use std::fmt::{self, Display};

pub mod aggregate;
pub mod call;
pub mod cast;
pub mod codegen;
pub mod descriptor;
pub mod error;
pub mod reference;
pub mod registry;
pub mod resolver;
pub mod simple;
pub mod template;

pub use aggregate::AggregateFunction;
pub use call::{CallArgument, FunctionCall};
pub use cast::{CastRules, DefaultCastRules};
pub use codegen::{BlockType, CodeGenerator, HoldingContainer, Variable, source::SourceGenerator};
pub use descriptor::FunctionDescriptor;
pub use error::FunctionError;
pub use reference::{ValueReference, WorkspaceReference};
pub use registry::{FunctionRegistry, RegistryConfig};
pub use resolver::{
	CostFunctionResolver, DefaultFunctionResolver, FunctionResolver, OperatorFunctionResolver, ResolverKind,
};
pub use simple::SimpleFunction;
pub use template::FunctionTemplate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FunctionScope {
	// select add(a, b)
	Simple,
	// select sum(a) group by b
	Aggregate,
}

impl Display for FunctionScope {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			FunctionScope::Simple => f.write_str("SIMPLE"),
			FunctionScope::Aggregate => f.write_str("AGGREGATE"),
		}
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NullHandling {
	/// The result is null whenever any nullable input is null; the body only
	/// runs on set inputs.
	NullIfNull,
	/// The body handles null inputs itself.
	Internal,
}

/// Named source fragment of a function implementation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MethodBlock {
	Setup,
	Eval,
	Add,
	Output,
	Reset,
	Cleanup,
}

impl Display for MethodBlock {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			MethodBlock::Setup => f.write_str("setup"),
			MethodBlock::Eval => f.write_str("eval"),
			MethodBlock::Add => f.write_str("add"),
			MethodBlock::Output => f.write_str("output"),
			MethodBlock::Reset => f.write_str("reset"),
			MethodBlock::Cleanup => f.write_str("cleanup"),
		}
	}
}
