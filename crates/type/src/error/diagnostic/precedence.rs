// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use crate::error::diagnostic::Diagnostic;

/// Null sentinel rank does not sort below every type rank
pub fn null_rank_not_lowest(null_rank: u32, type_name: &str, type_rank: u32) -> Diagnostic {
	Diagnostic {
		code: "PRECEDENCE_001".to_string(),
		message: format!(
			"Null rank {} must be lower than every type rank, but {} has rank {}",
			null_rank, type_name, type_rank
		),
		label: Some("invalid precedence table".to_string()),
		help: Some("Lower the null rank or raise the rank of the listed type".to_string()),
		notes: vec![],
		cause: None,
	}
}

/// Precedence table names a type the engine does not know
pub fn unknown_type(type_name: &str) -> Diagnostic {
	Diagnostic {
		code: "PRECEDENCE_002".to_string(),
		message: format!("Unknown type in precedence table: {}", type_name),
		label: Some("invalid precedence table".to_string()),
		help: Some("Use a canonical type name such as INT, BIGINT or VARCHAR".to_string()),
		notes: vec![],
		cause: None,
	}
}

/// Precedence table document could not be parsed
pub fn malformed(reason: String) -> Diagnostic {
	Diagnostic {
		code: "PRECEDENCE_003".to_string(),
		message: format!("Malformed precedence table: {}", reason),
		label: Some("invalid precedence table".to_string()),
		help: Some("Expected a document of the form {\"null_rank\": 0, \"ranks\": {\"INT\": 3}}".to_string()),
		notes: vec![],
		cause: None,
	}
}
