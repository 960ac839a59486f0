// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::fmt::{Display, Formatter};

pub mod diagnostic;

use diagnostic::Diagnostic;

/// Unified error of the workspace. Every failure is carried as a rendered
/// [`Diagnostic`].
#[derive(Debug, Clone, PartialEq)]
pub struct Error(pub Diagnostic);

impl Error {
	pub fn diagnostic(self) -> Diagnostic {
		self.0
	}

	pub fn code(&self) -> &str {
		&self.0.code
	}
}

impl Display for Error {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		f.write_str(&self.0.render())
	}
}

impl std::error::Error for Error {}

impl From<Diagnostic> for Error {
	fn from(diagnostic: Diagnostic) -> Self {
		Error(diagnostic)
	}
}

/// Conversion of a typed error into a [`Diagnostic`].
pub trait IntoDiagnostic {
	fn into_diagnostic(self) -> Diagnostic;
}

#[macro_export]
macro_rules! err {
	($diagnostic:expr) => {
		Err($crate::error::Error($diagnostic))
	};
}

#[macro_export]
macro_rules! return_error {
	($diagnostic:expr) => {
		return Err($crate::error::Error($diagnostic))
	};
}

#[cfg(test)]
pub mod tests {
	use super::*;
	use crate::error::diagnostic::function::unknown_function;

	#[test]
	fn test_error_display_renders_code_and_message() {
		let err = Error(unknown_function("frobnicate"));
		let rendered = err.to_string();
		assert!(rendered.starts_with("[FUNCTION_002]"));
		assert!(rendered.contains("frobnicate"));
	}

	#[test]
	fn test_return_error_macro() {
		fn fails() -> crate::Result<()> {
			return_error!(unknown_function("nope"));
		}
		let err = fails().unwrap_err();
		assert_eq!(err.code(), "FUNCTION_002");
	}
}
