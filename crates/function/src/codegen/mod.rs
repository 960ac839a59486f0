// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! The seam between function templates and the code-generation backend.

use std::fmt::{self, Display};

use vexec_type::MajorType;

pub mod block;
pub mod source;

pub use block::{Block, Statement};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockType {
	Setup,
	Eval,
	Reset,
	Cleanup,
}

impl BlockType {
	pub const ALL: [BlockType; 4] = [BlockType::Setup, BlockType::Eval, BlockType::Reset, BlockType::Cleanup];
}

impl Display for BlockType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			BlockType::Setup => f.write_str("SETUP"),
			BlockType::Eval => f.write_str("EVAL"),
			BlockType::Reset => f.write_str("RESET"),
			BlockType::Cleanup => f.write_str("CLEANUP"),
		}
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VariableKind {
	/// Lives as long as the generated unit.
	Field,
	/// Scoped to the block that declared it.
	Local,
}

/// Handle to a variable declared in generated code.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Variable {
	name: String,
	ty: String,
	kind: VariableKind,
}

impl Variable {
	pub fn field(name: impl Into<String>, ty: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			ty: ty.into(),
			kind: VariableKind::Field,
		}
	}

	pub fn local(name: impl Into<String>, ty: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			ty: ty.into(),
			kind: VariableKind::Local,
		}
	}

	pub fn name(&self) -> &str {
		&self.name
	}

	pub fn ty(&self) -> &str {
		&self.ty
	}

	pub fn kind(&self) -> VariableKind {
		self.kind
	}

	/// The expression that reads or assigns this variable.
	pub fn expr(&self) -> String {
		match self.kind {
			VariableKind::Field => format!("self.{}", self.name),
			VariableKind::Local => self.name.clone(),
		}
	}
}

/// A computed value in generated code together with its type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HoldingContainer {
	holder: Variable,
	major_type: MajorType,
}

impl HoldingContainer {
	pub fn new(holder: Variable, major_type: MajorType) -> Self {
		Self {
			holder,
			major_type,
		}
	}

	pub fn holder(&self) -> &Variable {
		&self.holder
	}

	pub fn major_type(&self) -> MajorType {
		self.major_type
	}

	pub fn is_optional(&self) -> bool {
		self.major_type.is_nullable()
	}

	/// Expression of the holder's set flag; only nullable holders have one.
	pub fn is_set(&self) -> Option<String> {
		self.is_optional().then(|| format!("{}.is_set", self.holder.expr()))
	}
}

/// Backend that assembles one generated unit.
pub trait CodeGenerator {
	/// Declares a field of the generated unit named after `prefix`.
	fn declare_class_field(&mut self, prefix: &str, ty: &str) -> Variable;

	/// Declares a fresh holder for a value of `major_type` in the EVAL block.
	fn declare(&mut self, major_type: MajorType) -> HoldingContainer;

	fn block(&mut self, block: BlockType) -> &mut Block;

	fn add_imports(&mut self, imports: &[String]);
}
