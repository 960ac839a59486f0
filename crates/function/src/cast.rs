// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::fmt::Debug;

use vexec_type::MinorType;

/// Answers whether a value of one type may be implicitly cast to another.
pub trait CastRules: Send + Sync + Debug {
	fn is_castable(&self, from: MinorType, to: MinorType) -> bool;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultCastRules;

impl CastRules for DefaultCastRules {
	fn is_castable(&self, from: MinorType, to: MinorType) -> bool {
		if from == to {
			return true;
		}

		match (from, to) {
			(MinorType::Late | MinorType::Null, _) => true,
			(_, MinorType::VarChar | MinorType::Var16Char | MinorType::VarBinary) => true,
			(from, to) if from.is_numeric() && to.is_numeric() => true,
			(MinorType::Bit, to) => to.is_numeric(),
			(from, MinorType::Bit) => from.is_numeric() || from.is_character() || from.is_binary(),
			(from, to) if from.is_character() || from.is_binary() => to.is_numeric() || to.is_temporal(),
			(MinorType::Date, MinorType::Timestamp)
			| (MinorType::Timestamp, MinorType::Date)
			| (MinorType::Timestamp, MinorType::Time) => true,
			_ => false,
		}
	}
}
