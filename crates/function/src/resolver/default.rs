// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::sync::Arc;

use tracing::instrument;

use crate::{
	FunctionCall,
	resolver::{FunctionResolver, first_match},
	template::FunctionTemplate,
};

/// Returns the first registered candidate that matches the call. A later
/// candidate with a lower cost is never preferred.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultFunctionResolver;

impl FunctionResolver for DefaultFunctionResolver {
	#[instrument(name = "function::resolver::first_match", level = "trace", skip(self, candidates, call), fields(call = %call))]
	fn best_match<'a>(
		&self,
		candidates: &'a [Arc<dyn FunctionTemplate>],
		call: &FunctionCall,
	) -> Option<&'a Arc<dyn FunctionTemplate>> {
		first_match(candidates, call)
	}
}

#[cfg(test)]
pub mod tests {
	use vexec_type::{MajorType, MinorType, TypePrecedence};

	use super::*;
	use crate::{
		CallArgument, DefaultCastRules, FunctionDescriptor, FunctionScope, MethodBlock, SimpleFunction,
		ValueReference,
	};

	fn count(body: &str) -> Arc<dyn FunctionTemplate> {
		Arc::new(
			SimpleFunction::new(
				FunctionDescriptor::builder(
					"count",
					FunctionScope::Simple,
					ValueReference::new(MajorType::required(MinorType::BigInt), "out"),
				)
				.block(MethodBlock::Eval, body)
				.build(),
			)
			.unwrap(),
		)
	}

	fn add(ty: MinorType) -> Arc<dyn FunctionTemplate> {
		Arc::new(
			SimpleFunction::new(
				FunctionDescriptor::builder("add", FunctionScope::Simple, ValueReference::new(MajorType::required(ty), "out"))
					.parameter(ValueReference::new(MajorType::required(ty), "left"))
					.parameter(ValueReference::new(MajorType::required(ty), "right"))
					.block(MethodBlock::Eval, "out.value = left.value + right.value;")
					.build(),
			)
			.unwrap(),
		)
	}

	#[test]
	fn test_first_registered_wins() {
		let candidates = vec![count("out.value = 1;"), count("out.value = 2;")];
		let call = FunctionCall::new("count", MajorType::required(MinorType::BigInt), vec![]);

		let best = DefaultFunctionResolver.best_match(&candidates, &call).unwrap();
		assert!(Arc::ptr_eq(best, &candidates[0]));
	}

	#[test]
	fn test_skips_non_matching_candidates() {
		let candidates = vec![add(MinorType::BigInt), add(MinorType::Int)];
		let call = FunctionCall::new(
			"add",
			MajorType::required(MinorType::Int),
			vec![
				CallArgument::Typed(MajorType::required(MinorType::Int)),
				CallArgument::Typed(MajorType::required(MinorType::Int)),
			],
		);

		// bigint add does not match an int call, int add does
		let best = DefaultFunctionResolver.best_match(&candidates, &call).unwrap();
		assert!(Arc::ptr_eq(best, &candidates[1]));

		let precedence = TypePrecedence::default();
		assert_eq!(candidates[0].descriptor().cost(&call, &precedence, &DefaultCastRules), Some(2));
		assert_eq!(candidates[1].descriptor().cost(&call, &precedence, &DefaultCastRules), Some(0));
	}

	#[test]
	fn test_none_found() {
		let candidates = vec![add(MinorType::Int)];
		let call = FunctionCall::new(
			"add",
			MajorType::required(MinorType::Int),
			vec![CallArgument::Typed(MajorType::required(MinorType::Int)), CallArgument::Null],
		);
		assert!(DefaultFunctionResolver.best_match(&candidates, &call).is_none());
	}
}
