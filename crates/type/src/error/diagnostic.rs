// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::fmt::Write;

use serde::{Deserialize, Serialize};

pub mod allocator;
pub mod function;
pub mod precedence;
pub mod selection;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Diagnostic {
	pub code: String,
	pub message: String,
	pub label: Option<String>,
	pub help: Option<String>,
	pub notes: Vec<String>,
	pub cause: Option<Box<Diagnostic>>,
}

impl Diagnostic {
	pub fn with_cause(mut self, cause: Diagnostic) -> Self {
		self.cause = Some(Box::new(cause));
		self
	}

	pub fn render(&self) -> String {
		let mut out = String::new();
		self.render_into(&mut out, 0);
		out
	}

	fn render_into(&self, out: &mut String, depth: usize) {
		let indent = "  ".repeat(depth);
		let _ = write!(out, "{}[{}] {}", indent, self.code, self.message);
		if let Some(label) = &self.label {
			let _ = write!(out, "\n{}  label: {}", indent, label);
		}
		if let Some(help) = &self.help {
			let _ = write!(out, "\n{}  help: {}", indent, help);
		}
		for note in &self.notes {
			let _ = write!(out, "\n{}  note: {}", indent, note);
		}
		if let Some(cause) = &self.cause {
			let _ = write!(out, "\n{}  caused by:\n", indent);
			cause.render_into(out, depth + 1);
		}
	}
}

#[cfg(test)]
pub mod tests {
	use super::*;

	#[test]
	fn test_render_nested_cause() {
		let inner = Diagnostic {
			code: "INNER_001".to_string(),
			message: "inner".to_string(),
			label: None,
			help: None,
			notes: vec![],
			cause: None,
		};
		let outer = Diagnostic {
			code: "OUTER_001".to_string(),
			message: "outer".to_string(),
			label: Some("label".to_string()),
			help: Some("help".to_string()),
			notes: vec!["a note".to_string()],
			cause: None,
		}
		.with_cause(inner);

		let rendered = outer.render();
		assert!(rendered.starts_with("[OUTER_001] outer"));
		assert!(rendered.contains("  label: label"));
		assert!(rendered.contains("  help: help"));
		assert!(rendered.contains("  note: a note"));
		assert!(rendered.contains("caused by:\n  [INNER_001] inner"));
	}
}
