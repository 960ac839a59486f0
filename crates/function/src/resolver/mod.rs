// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{fmt::Debug, sync::Arc};

use vexec_type::TypePrecedence;

use crate::{FunctionCall, cast::CastRules, template::FunctionTemplate};

mod cost;
mod default;
mod operator;

pub use cost::CostFunctionResolver;
pub use default::DefaultFunctionResolver;
pub use operator::OperatorFunctionResolver;

/// Picks the implementation a call should execute from the candidates
/// registered under its name.
///
/// Candidates are given in registration order. Resolvers are deterministic
/// for the same candidates and call and never mutate either.
pub trait FunctionResolver: Send + Sync + Debug {
	fn best_match<'a>(
		&self,
		candidates: &'a [Arc<dyn FunctionTemplate>],
		call: &FunctionCall,
	) -> Option<&'a Arc<dyn FunctionTemplate>>;
}

/// Selectable resolution strategy of a registry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ResolverKind {
	/// First registered candidate whose `matches` holds.
	#[default]
	FirstMatch,
	/// First-match for binary operators, tracing the promoted common type.
	Operator,
	/// Candidate with the lowest widening cost.
	LowestCost,
}

impl ResolverKind {
	pub fn build(self, precedence: &TypePrecedence, casts: &Arc<dyn CastRules>) -> Box<dyn FunctionResolver> {
		match self {
			ResolverKind::FirstMatch => Box::new(DefaultFunctionResolver),
			ResolverKind::Operator => Box::new(OperatorFunctionResolver::new(precedence.clone())),
			ResolverKind::LowestCost => Box::new(CostFunctionResolver::new(precedence.clone(), casts.clone())),
		}
	}
}

fn first_match<'a>(
	candidates: &'a [Arc<dyn FunctionTemplate>],
	call: &FunctionCall,
) -> Option<&'a Arc<dyn FunctionTemplate>> {
	candidates.iter().find(|candidate| candidate.matches(call))
}
