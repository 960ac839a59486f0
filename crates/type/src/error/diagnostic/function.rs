// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use crate::{error::diagnostic::Diagnostic, value::r#type::MajorType};

/// No registered implementation accepts the call's argument types
pub fn unresolved_function(name: &str, arguments: &[Option<MajorType>]) -> Diagnostic {
	let rendered = arguments
		.iter()
		.map(|arg| match arg {
			Some(ty) => ty.to_string(),
			None => "NULL".to_string(),
		})
		.collect::<Vec<_>>()
		.join(", ");

	Diagnostic {
		code: "FUNCTION_001".to_string(),
		message: format!("Unresolved function {}({}) for the given argument types", name, rendered),
		label: Some("no matching function implementation".to_string()),
		help: Some(format!("Check the argument types passed to {} or add an explicit cast", name)),
		notes: vec![],
		cause: None,
	}
}

/// Function is not recognized or does not exist
pub fn unknown_function(name: &str) -> Diagnostic {
	Diagnostic {
		code: "FUNCTION_002".to_string(),
		message: format!("Unknown function: {}", name),
		label: Some("unknown function".to_string()),
		help: Some("Check the function name and available functions".to_string()),
		notes: vec![],
		cause: None,
	}
}

/// Function implementation is missing a block its scope requires
pub fn missing_block(name: &str, block: &str) -> Diagnostic {
	Diagnostic {
		code: "FUNCTION_003".to_string(),
		message: format!("Function {} is missing required block '{}'", name, block),
		label: Some("invalid function descriptor".to_string()),
		help: Some(format!("Provide a '{}' body when registering {}", block, name)),
		notes: vec![],
		cause: None,
	}
}

/// Function implementation registered with a scope its holder cannot render
pub fn scope_mismatch(name: &str, expected: &str, actual: &str) -> Diagnostic {
	Diagnostic {
		code: "FUNCTION_004".to_string(),
		message: format!("Function {} has scope {}, expected {}", name, actual, expected),
		label: Some("invalid function descriptor".to_string()),
		help: Some(format!("Register {} with a holder matching its {} scope", name, actual)),
		notes: vec![],
		cause: None,
	}
}
