// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::sync::Arc;

use tracing::{instrument, trace};
use vexec_type::TypePrecedence;

use crate::{FunctionCall, cast::CastRules, resolver::FunctionResolver, template::FunctionTemplate};

/// Picks the candidate requiring the least implicit widening. Ties go to the
/// earliest registered candidate.
#[derive(Debug, Clone)]
pub struct CostFunctionResolver {
	precedence: TypePrecedence,
	casts: Arc<dyn CastRules>,
}

impl CostFunctionResolver {
	pub fn new(precedence: TypePrecedence, casts: Arc<dyn CastRules>) -> Self {
		Self {
			precedence,
			casts,
		}
	}
}

impl FunctionResolver for CostFunctionResolver {
	#[instrument(name = "function::resolver::lowest_cost", level = "trace", skip(self, candidates, call), fields(call = %call))]
	fn best_match<'a>(
		&self,
		candidates: &'a [Arc<dyn FunctionTemplate>],
		call: &FunctionCall,
	) -> Option<&'a Arc<dyn FunctionTemplate>> {
		let mut best: Option<(u32, &'a Arc<dyn FunctionTemplate>)> = None;

		for (index, candidate) in candidates.iter().enumerate() {
			let Some(cost) = candidate.descriptor().cost(call, &self.precedence, self.casts.as_ref()) else {
				trace!(index, "candidate cannot be fitted");
				continue;
			};
			trace!(index, cost, "candidate cost");

			if best.is_none_or(|(lowest, _)| cost < lowest) {
				best = Some((cost, candidate));
			}
		}

		best.map(|(_, candidate)| candidate)
	}
}
