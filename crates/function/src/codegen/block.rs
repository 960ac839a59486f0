// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::fmt::Write;

use crate::codegen::Variable;

#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
	/// Source inserted verbatim.
	Direct(String),
	Declare {
		variable: Variable,
		init: String,
	},
	Assign {
		target: String,
		value: String,
	},
	Nested(Block),
	If {
		condition: String,
		then: Block,
		otherwise: Option<Block>,
	},
}

/// An ordered list of statements rendered inside one scope.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Block {
	statements: Vec<Statement>,
}

impl Block {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn statements(&self) -> &[Statement] {
		&self.statements
	}

	pub fn is_empty(&self) -> bool {
		self.statements.is_empty()
	}

	/// Declares a local bound to `init` and returns its handle.
	pub fn decl(&mut self, ty: &str, name: &str, init: impl Into<String>) -> Variable {
		let variable = Variable::local(name, ty);
		self.statements.push(Statement::Declare {
			variable: variable.clone(),
			init: init.into(),
		});
		variable
	}

	pub fn direct_statement(&mut self, source: impl Into<String>) {
		self.statements.push(Statement::Direct(source.into()));
	}

	pub fn assign(&mut self, target: &Variable, value: &Variable) {
		self.assign_expr(target.expr(), value.expr());
	}

	pub fn assign_expr(&mut self, target: impl Into<String>, value: impl Into<String>) {
		self.statements.push(Statement::Assign {
			target: target.into(),
			value: value.into(),
		});
	}

	pub fn add(&mut self, block: Block) {
		self.statements.push(Statement::Nested(block));
	}

	pub fn if_else(&mut self, condition: impl Into<String>, then: Block, otherwise: Option<Block>) {
		self.statements.push(Statement::If {
			condition: condition.into(),
			then,
			otherwise,
		});
	}

	pub fn render(&self, depth: usize) -> String {
		let mut out = String::new();
		self.render_into(&mut out, depth);
		out
	}

	fn render_into(&self, out: &mut String, depth: usize) {
		let indent = "\t".repeat(depth);
		for statement in &self.statements {
			match statement {
				Statement::Direct(source) => {
					for line in source.lines() {
						let _ = writeln!(out, "{}{}", indent, line.trim_end());
					}
				}
				Statement::Declare {
					variable,
					init,
				} => {
					let _ = writeln!(out, "{}let mut {}: {} = {};", indent, variable.name(), variable.ty(), init);
				}
				Statement::Assign {
					target,
					value,
				} => {
					let _ = writeln!(out, "{}{} = {};", indent, target, value);
				}
				Statement::Nested(block) => {
					let _ = writeln!(out, "{}{{", indent);
					block.render_into(out, depth + 1);
					let _ = writeln!(out, "{}}}", indent);
				}
				Statement::If {
					condition,
					then,
					otherwise,
				} => {
					let _ = writeln!(out, "{}if {} {{", indent, condition);
					then.render_into(out, depth + 1);
					if let Some(otherwise) = otherwise {
						let _ = writeln!(out, "{}}} else {{", indent);
						otherwise.render_into(out, depth + 1);
					}
					let _ = writeln!(out, "{}}}", indent);
				}
			}
		}
	}
}

#[cfg(test)]
pub mod tests {
	use super::*;

	#[test]
	fn test_render_nested() {
		let mut inner = Block::new();
		let local = inner.decl("IntHolder", "left", "i0");
		inner.direct_statement("out.value = left.value;\n");
		inner.assign_expr("self.work0", local.expr());

		let mut outer = Block::new();
		outer.direct_statement("// start");
		outer.add(inner);

		assert_eq!(
			outer.render(0),
			"// start\n{\n\tlet mut left: IntHolder = i0;\n\tout.value = left.value;\n\tself.work0 = left;\n}\n"
		);
	}

	#[test]
	fn test_render_if_else() {
		let mut then = Block::new();
		then.assign_expr("out.is_set", "0");
		let mut otherwise = Block::new();
		otherwise.direct_statement("compute();");

		let mut block = Block::new();
		block.if_else("a.is_set == 0", then, Some(otherwise));

		assert_eq!(block.render(1), "\tif a.is_set == 0 {\n\t\tout.is_set = 0;\n\t} else {\n\t\tcompute();\n\t}\n");
	}
}
