// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{
	fmt::{Display, Formatter},
	str::FromStr,
};

use serde::{Deserialize, Serialize};

pub mod precedence;

/// Primitive type tag of a value vector.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum MinorType {
	/// Type is not known until execution
	Late,
	/// The type of a literal null
	Null,
	Bit,
	TinyInt,
	SmallInt,
	Int,
	BigInt,
	Uint1,
	Uint2,
	Uint4,
	Uint8,
	Float4,
	Float8,
	Decimal9,
	Decimal18,
	Date,
	Time,
	Timestamp,
	Interval,
	VarChar,
	Var16Char,
	VarBinary,
}

impl MinorType {
	pub const ALL: [MinorType; 22] = [
		MinorType::Late,
		MinorType::Null,
		MinorType::Bit,
		MinorType::TinyInt,
		MinorType::SmallInt,
		MinorType::Int,
		MinorType::BigInt,
		MinorType::Uint1,
		MinorType::Uint2,
		MinorType::Uint4,
		MinorType::Uint8,
		MinorType::Float4,
		MinorType::Float8,
		MinorType::Decimal9,
		MinorType::Decimal18,
		MinorType::Date,
		MinorType::Time,
		MinorType::Timestamp,
		MinorType::Interval,
		MinorType::VarChar,
		MinorType::Var16Char,
		MinorType::VarBinary,
	];

	/// Canonical upper-case tag, the key used by precedence tables.
	pub fn name(&self) -> &'static str {
		match self {
			MinorType::Late => "LATE",
			MinorType::Null => "NULL",
			MinorType::Bit => "BIT",
			MinorType::TinyInt => "TINYINT",
			MinorType::SmallInt => "SMALLINT",
			MinorType::Int => "INT",
			MinorType::BigInt => "BIGINT",
			MinorType::Uint1 => "UINT1",
			MinorType::Uint2 => "UINT2",
			MinorType::Uint4 => "UINT4",
			MinorType::Uint8 => "UINT8",
			MinorType::Float4 => "FLOAT4",
			MinorType::Float8 => "FLOAT8",
			MinorType::Decimal9 => "DECIMAL9",
			MinorType::Decimal18 => "DECIMAL18",
			MinorType::Date => "DATE",
			MinorType::Time => "TIME",
			MinorType::Timestamp => "TIMESTAMP",
			MinorType::Interval => "INTERVAL",
			MinorType::VarChar => "VARCHAR",
			MinorType::Var16Char => "VAR16CHAR",
			MinorType::VarBinary => "VARBINARY",
		}
	}

	/// Stem of the value holder type emitted into generated code.
	pub fn holder_stem(&self) -> &'static str {
		match self {
			MinorType::Late => "Late",
			MinorType::Null => "Null",
			MinorType::Bit => "Bit",
			MinorType::TinyInt => "TinyInt",
			MinorType::SmallInt => "SmallInt",
			MinorType::Int => "Int",
			MinorType::BigInt => "BigInt",
			MinorType::Uint1 => "UInt1",
			MinorType::Uint2 => "UInt2",
			MinorType::Uint4 => "UInt4",
			MinorType::Uint8 => "UInt8",
			MinorType::Float4 => "Float4",
			MinorType::Float8 => "Float8",
			MinorType::Decimal9 => "Decimal9",
			MinorType::Decimal18 => "Decimal18",
			MinorType::Date => "Date",
			MinorType::Time => "Time",
			MinorType::Timestamp => "TimeStamp",
			MinorType::Interval => "Interval",
			MinorType::VarChar => "VarChar",
			MinorType::Var16Char => "Var16Char",
			MinorType::VarBinary => "VarBinary",
		}
	}

	pub fn is_integer(&self) -> bool {
		matches!(
			self,
			MinorType::TinyInt
				| MinorType::SmallInt
				| MinorType::Int | MinorType::BigInt
				| MinorType::Uint1 | MinorType::Uint2
				| MinorType::Uint4 | MinorType::Uint8
		)
	}

	pub fn is_float(&self) -> bool {
		matches!(self, MinorType::Float4 | MinorType::Float8)
	}

	pub fn is_decimal(&self) -> bool {
		matches!(self, MinorType::Decimal9 | MinorType::Decimal18)
	}

	pub fn is_numeric(&self) -> bool {
		self.is_integer() || self.is_float() || self.is_decimal()
	}

	pub fn is_character(&self) -> bool {
		matches!(self, MinorType::VarChar | MinorType::Var16Char)
	}

	pub fn is_binary(&self) -> bool {
		matches!(self, MinorType::VarBinary)
	}

	pub fn is_temporal(&self) -> bool {
		matches!(self, MinorType::Date | MinorType::Time | MinorType::Timestamp | MinorType::Interval)
	}
}

impl Display for MinorType {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.name())
	}
}

impl FromStr for MinorType {
	type Err = ();

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let upper = s.trim().to_ascii_uppercase();
		MinorType::ALL.iter().copied().find(|ty| ty.name() == upper).ok_or(())
	}
}

/// Nullability / cardinality of a value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum DataMode {
	Required,
	#[serde(alias = "OPTIONAL")]
	Nullable,
	Repeated,
}

impl Display for DataMode {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			DataMode::Required => f.write_str("REQUIRED"),
			DataMode::Nullable => f.write_str("NULLABLE"),
			DataMode::Repeated => f.write_str("REPEATED"),
		}
	}
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MajorType {
	pub minor: MinorType,
	pub mode: DataMode,
}

impl MajorType {
	pub const fn new(minor: MinorType, mode: DataMode) -> Self {
		Self {
			minor,
			mode,
		}
	}

	pub const fn required(minor: MinorType) -> Self {
		Self::new(minor, DataMode::Required)
	}

	pub const fn nullable(minor: MinorType) -> Self {
		Self::new(minor, DataMode::Nullable)
	}

	pub const fn repeated(minor: MinorType) -> Self {
		Self::new(minor, DataMode::Repeated)
	}

	pub fn is_nullable(&self) -> bool {
		self.mode == DataMode::Nullable
	}

	/// Equality that tolerates VARCHAR/VARBINARY interchange and, when
	/// `allow_null_swap` is set, REQUIRED/NULLABLE interchange.
	pub fn soft_equals(&self, other: &MajorType, allow_null_swap: bool) -> bool {
		if self.minor != other.minor {
			let binary_char = matches!(
				(self.minor, other.minor),
				(MinorType::VarBinary, MinorType::VarChar) | (MinorType::VarChar, MinorType::VarBinary)
			);
			if !binary_char {
				return false;
			}
		}

		if allow_null_swap {
			let swappable = |mode: DataMode| matches!(mode, DataMode::Required | DataMode::Nullable);
			if swappable(self.mode) && swappable(other.mode) {
				return true;
			}
		}

		self.mode == other.mode
	}

	/// Name of the holder type carrying one value of this type in generated code.
	pub fn holder_type(&self) -> String {
		match self.mode {
			DataMode::Required => format!("{}Holder", self.minor.holder_stem()),
			DataMode::Nullable => format!("Nullable{}Holder", self.minor.holder_stem()),
			DataMode::Repeated => format!("Repeated{}Holder", self.minor.holder_stem()),
		}
	}
}

impl Display for MajorType {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}:{}", self.minor, self.mode)
	}
}

#[cfg(test)]
pub mod tests {
	use super::*;

	#[test]
	fn test_name_round_trips_through_from_str() {
		for ty in MinorType::ALL {
			assert_eq!(ty.name().parse::<MinorType>(), Ok(ty));
		}
		assert_eq!("bigint".parse::<MinorType>(), Ok(MinorType::BigInt));
		assert!("NUMBER".parse::<MinorType>().is_err());
	}

	#[test]
	fn test_serde_uses_canonical_names() {
		for ty in MinorType::ALL {
			let json = serde_json::to_string(&ty).unwrap();
			assert_eq!(json, format!("\"{}\"", ty.name()));
		}
		let mode: DataMode = serde_json::from_str("\"OPTIONAL\"").unwrap();
		assert_eq!(mode, DataMode::Nullable);
	}

	#[test]
	fn test_soft_equals_strict_modes() {
		let int = MajorType::required(MinorType::Int);
		assert!(int.soft_equals(&int, false));
		assert!(!int.soft_equals(&MajorType::nullable(MinorType::Int), false));
		assert!(!int.soft_equals(&MajorType::required(MinorType::BigInt), false));
	}

	#[test]
	fn test_soft_equals_null_swap() {
		let required = MajorType::required(MinorType::Int);
		let nullable = MajorType::nullable(MinorType::Int);
		let repeated = MajorType::repeated(MinorType::Int);

		assert!(required.soft_equals(&nullable, true));
		assert!(nullable.soft_equals(&required, true));
		assert!(!required.soft_equals(&repeated, true));
		assert!(!repeated.soft_equals(&nullable, true));
		assert!(repeated.soft_equals(&repeated, true));
	}

	#[test]
	fn test_soft_equals_varchar_varbinary() {
		let varchar = MajorType::required(MinorType::VarChar);
		let varbinary = MajorType::required(MinorType::VarBinary);
		assert!(varchar.soft_equals(&varbinary, false));
		assert!(varbinary.soft_equals(&varchar, false));
		assert!(!varchar.soft_equals(&MajorType::required(MinorType::Var16Char), false));
	}

	#[test]
	fn test_soft_equals_exhaustive_minor_mismatch() {
		for a in MinorType::ALL {
			for b in MinorType::ALL {
				let expected = a == b
					|| matches!(
						(a, b),
						(MinorType::VarChar, MinorType::VarBinary)
							| (MinorType::VarBinary, MinorType::VarChar)
					);
				for swap in [false, true] {
					assert_eq!(
						MajorType::required(a).soft_equals(&MajorType::nullable(b), swap),
						expected && swap,
						"{a} vs {b} swap={swap}"
					);
					assert_eq!(
						MajorType::required(a).soft_equals(&MajorType::required(b), swap),
						expected,
						"{a} vs {b} swap={swap}"
					);
				}
			}
		}
	}

	#[test]
	fn test_holder_type() {
		assert_eq!(MajorType::required(MinorType::Int).holder_type(), "IntHolder");
		assert_eq!(MajorType::nullable(MinorType::Float8).holder_type(), "NullableFloat8Holder");
		assert_eq!(MajorType::repeated(MinorType::VarChar).holder_type(), "RepeatedVarCharHolder");
	}

	#[test]
	fn test_display() {
		assert_eq!(MajorType::nullable(MinorType::BigInt).to_string(), "BIGINT:NULLABLE");
	}
}
