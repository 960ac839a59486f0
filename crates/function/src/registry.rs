// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::sync::Arc;

use indexmap::{IndexMap, IndexSet};
use tracing::{debug, instrument};
use vexec_type::{Result, TypePrecedence};

use crate::{
	FunctionCall, FunctionError,
	cast::{CastRules, DefaultCastRules},
	resolver::{FunctionResolver, ResolverKind},
	template::FunctionTemplate,
};

#[derive(Debug, Clone)]
pub struct RegistryConfig {
	pub precedence: TypePrecedence,
	pub casts: Arc<dyn CastRules>,
	pub resolver: ResolverKind,
}

impl Default for RegistryConfig {
	fn default() -> Self {
		Self {
			precedence: TypePrecedence::default(),
			casts: Arc::new(DefaultCastRules),
			resolver: ResolverKind::default(),
		}
	}
}

impl RegistryConfig {
	pub fn with_precedence(mut self, precedence: TypePrecedence) -> Self {
		self.precedence = precedence;
		self
	}

	pub fn with_casts(mut self, casts: Arc<dyn CastRules>) -> Self {
		self.casts = casts;
		self
	}

	pub fn with_resolver(mut self, resolver: ResolverKind) -> Self {
		self.resolver = resolver;
		self
	}
}

/// Catalog of function implementations, grouped by lower-cased name in
/// registration order.
#[derive(Debug)]
pub struct FunctionRegistry {
	config: RegistryConfig,
	resolver: Box<dyn FunctionResolver>,
	functions: IndexMap<String, Vec<Arc<dyn FunctionTemplate>>>,
}

impl Default for FunctionRegistry {
	fn default() -> Self {
		Self::new(RegistryConfig::default())
	}
}

impl FunctionRegistry {
	pub fn new(config: RegistryConfig) -> Self {
		let resolver = config.resolver.build(&config.precedence, &config.casts);
		Self {
			config,
			resolver,
			functions: IndexMap::new(),
		}
	}

	pub fn config(&self) -> &RegistryConfig {
		&self.config
	}

	pub fn register(&mut self, function: impl FunctionTemplate + 'static) {
		self.register_arc(Arc::new(function));
	}

	pub fn register_arc(&mut self, function: Arc<dyn FunctionTemplate>) {
		let name = function.name().to_lowercase();
		self.functions.entry(name).or_default().push(function);
	}

	pub fn candidates(&self, name: &str) -> &[Arc<dyn FunctionTemplate>] {
		self.functions.get(&name.to_lowercase()).map(Vec::as_slice).unwrap_or_default()
	}

	#[instrument(name = "function::registry::resolve", level = "trace", skip(self, call), fields(call = %call))]
	pub fn resolve(&self, call: &FunctionCall) -> Result<Arc<dyn FunctionTemplate>> {
		self.resolve_with(call, self.resolver.as_ref())
	}

	/// Resolves with a resolver other than the configured one.
	pub fn resolve_with(&self, call: &FunctionCall, resolver: &dyn FunctionResolver) -> Result<Arc<dyn FunctionTemplate>> {
		let candidates = self.candidates(call.name());
		if candidates.is_empty() {
			debug!(name = call.name(), "unknown function");
			return Err(FunctionError::Unknown {
				name: call.name().to_string(),
			}
			.into());
		}

		match resolver.best_match(candidates, call) {
			Some(function) => Ok(function.clone()),
			None => {
				debug!(%call, candidates = candidates.len(), "unresolved function");
				Err(FunctionError::Unresolved {
					name: call.name().to_string(),
					arguments: call.argument_types(),
				}
				.into())
			}
		}
	}

	/// Union of the imports of every registered function, first occurrence
	/// first.
	pub fn imports(&self) -> Vec<String> {
		let imports: IndexSet<&String> = self.functions.values().flatten().flat_map(|f| f.descriptor().imports()).collect();
		imports.into_iter().cloned().collect()
	}

	pub fn names(&self) -> impl Iterator<Item = &str> {
		self.functions.keys().map(String::as_str)
	}

	/// Number of registered implementations.
	pub fn len(&self) -> usize {
		self.functions.values().map(Vec::len).sum()
	}

	pub fn is_empty(&self) -> bool {
		self.functions.is_empty()
	}
}
