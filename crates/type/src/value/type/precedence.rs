// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Implicit-promotion order used for cast-cost arithmetic.
//!
//! A lower rank is a narrower type. Converting an argument of rank `a` into a
//! parameter of rank `p` costs `p - a` and is only admissible when `p >= a`.
//! The null rank sits below every type rank so that a null argument fits any
//! parameter at the smallest possible cost.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::{
	Error, Result,
	error::diagnostic::precedence::{malformed, null_rank_not_lowest, unknown_type},
	value::r#type::{MajorType, MinorType},
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawTypePrecedence", into = "RawTypePrecedence")]
pub struct TypePrecedence {
	null_rank: u32,
	ranks: IndexMap<MinorType, u32>,
}

#[derive(Serialize, Deserialize)]
struct RawTypePrecedence {
	#[serde(default)]
	null_rank: u32,
	ranks: IndexMap<String, u32>,
}

impl TryFrom<RawTypePrecedence> for TypePrecedence {
	type Error = Error;

	fn try_from(raw: RawTypePrecedence) -> Result<Self> {
		let mut builder = TypePrecedence::builder().with_null_rank(raw.null_rank);
		for (name, rank) in raw.ranks {
			let minor = name.parse::<MinorType>().map_err(|_| Error(unknown_type(&name)))?;
			builder = builder.with_rank(minor, rank);
		}
		builder.build()
	}
}

impl From<TypePrecedence> for RawTypePrecedence {
	fn from(precedence: TypePrecedence) -> Self {
		RawTypePrecedence {
			null_rank: precedence.null_rank,
			ranks: precedence.ranks.into_iter().map(|(minor, rank)| (minor.name().to_string(), rank)).collect(),
		}
	}
}

impl Default for TypePrecedence {
	fn default() -> Self {
		Self {
			null_rank: 0,
			ranks: IndexMap::from([
				(MinorType::TinyInt, 1),
				(MinorType::SmallInt, 2),
				(MinorType::Int, 3),
				(MinorType::BigInt, 4),
				(MinorType::Float4, 5),
				(MinorType::Float8, 6),
				(MinorType::VarChar, 7),
			]),
		}
	}
}

impl TypePrecedence {
	/// An empty table; every rank must be added explicitly.
	pub fn builder() -> TypePrecedenceBuilder {
		TypePrecedenceBuilder {
			null_rank: 0,
			ranks: IndexMap::new(),
		}
	}

	pub fn from_json(document: &str) -> Result<Self> {
		let raw: RawTypePrecedence = serde_json::from_str(document).map_err(|e| Error(malformed(e.to_string())))?;
		Self::try_from(raw)
	}

	/// Rank of the type named `name`, or `None` when the table does not
	/// order it. `None` means the cost cannot be computed.
	pub fn rank(&self, name: &str) -> Option<u32> {
		let minor = name.parse::<MinorType>().ok()?;
		self.rank_of(minor)
	}

	pub fn rank_of(&self, minor: MinorType) -> Option<u32> {
		self.ranks.get(&minor).copied()
	}

	pub fn null_rank(&self) -> u32 {
		self.null_rank
	}

	/// The wider of two types. Ties favour `right`.
	pub fn common_type(&self, left: MajorType, right: MajorType) -> Option<MajorType> {
		let l = self.rank_of(left.minor)?;
		let r = self.rank_of(right.minor)?;
		Some(if l > r {
			left
		} else {
			right
		})
	}

	pub fn iter(&self) -> impl Iterator<Item = (MinorType, u32)> + '_ {
		self.ranks.iter().map(|(minor, rank)| (*minor, *rank))
	}

	pub fn len(&self) -> usize {
		self.ranks.len()
	}

	pub fn is_empty(&self) -> bool {
		self.ranks.is_empty()
	}
}

pub struct TypePrecedenceBuilder {
	null_rank: u32,
	ranks: IndexMap<MinorType, u32>,
}

impl TypePrecedenceBuilder {
	pub fn with_rank(mut self, minor: MinorType, rank: u32) -> Self {
		self.ranks.insert(minor, rank);
		self
	}

	pub fn with_null_rank(mut self, rank: u32) -> Self {
		self.null_rank = rank;
		self
	}

	pub fn build(self) -> Result<TypePrecedence> {
		for (minor, rank) in &self.ranks {
			if *rank <= self.null_rank {
				return Err(Error(null_rank_not_lowest(self.null_rank, minor.name(), *rank)));
			}
		}
		Ok(TypePrecedence {
			null_rank: self.null_rank,
			ranks: self.ranks,
		})
	}
}
