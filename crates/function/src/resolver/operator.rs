// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::sync::Arc;

use tracing::{instrument, trace};
use vexec_type::{MajorType, TypePrecedence};

use crate::{
	CallArgument, FunctionCall,
	resolver::{FunctionResolver, first_match},
	template::FunctionTemplate,
};

/// Resolver for binary operators.
///
/// Computes the common type both operands would be promoted to, then picks
/// the first matching candidate. The call itself is not rewritten.
#[derive(Debug, Clone, Default)]
pub struct OperatorFunctionResolver {
	precedence: TypePrecedence,
}

impl OperatorFunctionResolver {
	pub fn new(precedence: TypePrecedence) -> Self {
		Self {
			precedence,
		}
	}

	pub fn precedence(&self) -> &TypePrecedence {
		&self.precedence
	}

	/// The type of the higher-ranked operand of a binary call, or `None` when
	/// the call is not binary, an operand is null, or a rank is undefined.
	pub fn promoted_type(&self, call: &FunctionCall) -> Option<MajorType> {
		match call.arguments() {
			[CallArgument::Typed(left), CallArgument::Typed(right)] => self.precedence.common_type(*left, *right),
			_ => None,
		}
	}
}

impl FunctionResolver for OperatorFunctionResolver {
	#[instrument(name = "function::resolver::operator", level = "trace", skip(self, candidates, call), fields(call = %call))]
	fn best_match<'a>(
		&self,
		candidates: &'a [Arc<dyn FunctionTemplate>],
		call: &FunctionCall,
	) -> Option<&'a Arc<dyn FunctionTemplate>> {
		match self.promoted_type(call) {
			Some(promoted) => trace!(%promoted, "operands promote to common type"),
			None => trace!(arity = call.arity(), "no common operand type"),
		}
		first_match(candidates, call)
	}
}
