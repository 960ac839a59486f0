// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::fmt::Write;

use indexmap::IndexSet;
use vexec_type::MajorType;

use crate::codegen::{Block, BlockType, CodeGenerator, HoldingContainer, Variable};

/// Assembles a generated unit as source text: a struct holding the
/// persistent fields plus one method per [`BlockType`].
#[derive(Debug)]
pub struct SourceGenerator {
	unit: String,
	fields: Vec<Variable>,
	blocks: [Block; 4],
	imports: IndexSet<String>,
	next_id: usize,
}

impl SourceGenerator {
	pub fn new(unit: impl Into<String>) -> Self {
		Self {
			unit: unit.into(),
			fields: vec![],
			blocks: Default::default(),
			imports: IndexSet::new(),
			next_id: 0,
		}
	}

	pub fn fields(&self) -> &[Variable] {
		&self.fields
	}

	pub fn imports(&self) -> impl Iterator<Item = &str> {
		self.imports.iter().map(String::as_str)
	}

	pub fn get_block(&self, block: BlockType) -> &Block {
		&self.blocks[Self::slot(block)]
	}

	fn slot(block: BlockType) -> usize {
		match block {
			BlockType::Setup => 0,
			BlockType::Eval => 1,
			BlockType::Reset => 2,
			BlockType::Cleanup => 3,
		}
	}

	fn next_name(&mut self, prefix: &str) -> String {
		let name = format!("{}{}", prefix, self.next_id);
		self.next_id += 1;
		name
	}

	pub fn render(&self) -> String {
		let mut out = String::new();
		for import in &self.imports {
			let _ = writeln!(out, "use {};", import);
		}
		if !self.imports.is_empty() {
			out.push('\n');
		}

		let _ = writeln!(out, "pub struct {} {{", self.unit);
		for field in &self.fields {
			let _ = writeln!(out, "\t{}: {},", field.name(), field.ty());
		}
		let _ = writeln!(out, "}}\n");

		let _ = writeln!(out, "impl {} {{", self.unit);
		for (i, block) in BlockType::ALL.iter().enumerate() {
			if i > 0 {
				out.push('\n');
			}
			let method = match block {
				BlockType::Setup => "do_setup",
				BlockType::Eval => "do_eval",
				BlockType::Reset => "reset",
				BlockType::Cleanup => "cleanup",
			};
			let _ = writeln!(out, "\tpub fn {}(&mut self) {{", method);
			out.push_str(&self.get_block(*block).render(2));
			let _ = writeln!(out, "\t}}");
		}
		let _ = writeln!(out, "}}");
		out
	}
}

impl CodeGenerator for SourceGenerator {
	fn declare_class_field(&mut self, prefix: &str, ty: &str) -> Variable {
		let name = self.next_name(prefix);
		let field = Variable::field(name, ty);
		self.fields.push(field.clone());
		field
	}

	fn declare(&mut self, major_type: MajorType) -> HoldingContainer {
		let name = self.next_name("out");
		let ty = major_type.holder_type();
		let holder = self.block(BlockType::Eval).decl(&ty, &name, format!("{}::default()", ty));
		HoldingContainer::new(holder, major_type)
	}

	fn block(&mut self, block: BlockType) -> &mut Block {
		&mut self.blocks[Self::slot(block)]
	}

	fn add_imports(&mut self, imports: &[String]) {
		self.imports.extend(imports.iter().cloned());
	}
}
