//! Text conversion: literal parsing, base formatting, and serialisation.

#![allow(clippy::arithmetic_side_effects, reason = "Digit arithmetic is bounded by the radix")]

//	Digit tables are only indexed by a nibble or by a remainder below the radix.
#![allow(
	clippy::indexing_slicing,
	clippy::missing_asserts_for_indexing,
	reason = "We always know the size"
)]



//		Modules

#[cfg(test)]
#[path = "tests/codec.rs"]
mod tests;



//		Packages

use crate::{errors::IntError, int::Int, width::BitWidth};
use core::{
	fmt::{self, Debug, Display, Formatter, LowerHex, Octal, UpperHex},
	marker::PhantomData,
	str::FromStr,
};
use serde::{
	de::{Error as SerdeError, Visitor},
	Deserialize,
	Deserializer,
	Serialize,
	Serializer,
};
use serde_json::Error as JsonError;



//		Constants

/// Digit characters for bases up to 16, lower case.
const LOWER_DIGITS: &[u8; 16] = b"0123456789abcdef";

/// Digit characters for bases up to 16, upper case.
const UPPER_DIGITS: &[u8; 16] = b"0123456789ABCDEF";



//		Enums

//		Base
/// The numeric base used for writing and reading digits.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum Base {
	/// Base 8.
	Octal,

	/// Base 10.
	#[default]
	Decimal,

	/// Base 16.
	Hexadecimal,
}

//󰭅		Base
impl Base {
	//		radix
	/// The numeric radix of this base.
	#[must_use]
	pub const fn radix(self) -> u8 {
		match self {
			Self::Octal       => 8,
			Self::Decimal     => 10,
			Self::Hexadecimal => 16,
		}
	}
}



//		Structs

//󰭅		Int
impl<BITS, const SIGNED: bool> Int<BITS, SIGNED>
where
	BITS: BitWidth,
{
	//		Public methods

	//		from_json
	/// Deserialises a JSON string into this integer type.
	///
	/// # Parameters
	///
	/// * `json` - The JSON string to deserialise.
	///
	/// # Errors
	///
	/// If the JSON string is invalid, or the number inside the JSON is invalid,
	/// then an error will be returned.
	///
	pub fn from_json(json: &str) -> Result<Self, JsonError> {
		serde_json::from_str(json)
	}

	//		parse
	/// Parses an integer literal.
	///
	/// The accepted forms are `[-]0x<hex>`, `[-]0b<binary>`, `[-]0<octal>` and
	/// `[-]<decimal>`. The prefix letters may be upper or lower case, and the
	/// octal prefix only applies when at least two characters follow the sign.
	/// Apostrophes and spaces may appear between digits as separators.
	///
	/// Digits accumulate with the full width of the type, so any bit pattern
	/// that fits is accepted: `0xFFFFFFFF` parses to `-1` as a signed 32-bit
	/// integer. A negative literal may have a magnitude of up to 2^(`BITS`-1),
	/// which makes the minimum value expressible.
	///
	/// # Parameters
	///
	/// * `s` - The literal to parse.
	///
	/// # Errors
	///
	///   - [`IntError::EmptyValue`] for an empty literal or a lone `-`.
	///   - [`IntError::SignNotAllowed`] for a `-` when the type is unsigned.
	///   - [`IntError::InvalidDigit`] for a character that is not a digit.
	///   - [`IntError::DigitOutOfRange`] for a digit too large for the base.
	///   - [`IntError::CapacityOverflow`] if the value needs more bits than the
	///     width has.
	///
	pub fn parse(s: &str) -> Result<Self, IntError> {
		if s.is_empty() {
			return Err(IntError::EmptyValue);
		}
		let (negative, body) = match s.strip_prefix('-') {
			Some(rest) => (true, rest),
			None       => (false, s),
		};
		if negative && !SIGNED {
			return Err(IntError::SignNotAllowed);
		}
		if body.is_empty() {
			return Err(IntError::EmptyValue);
		}
		let (digits, radix) = split_prefix(body);
		let magnitude       = Self::parse_digits(digits, radix)?;
		if !negative {
			return Ok(magnitude);
		}
		if magnitude.cast_unsigned() > Self::min_value().cast_unsigned() {
			return Err(IntError::CapacityOverflow);
		}
		Ok(magnitude.wrapping_neg())
	}

	//		to_json
	/// Serialises this integer to a JSON string.
	///
	/// # Errors
	///
	/// If the number cannot be serialised for whatever reason, an error will be
	/// returned. In reality this should be infallible.
	///
	pub fn to_json(&self) -> Result<String, JsonError> {
		serde_json::to_string(self)
	}

	//		to_string_radix
	/// Formats the value as digits in the given base.
	///
	/// Decimal output is signed, with a leading `-` for negative values.
	/// Hexadecimal and octal output show the two's-complement bit pattern, so
	/// `-1` as a signed 16-bit integer is `ffff` in hexadecimal. Hexadecimal
	/// output always has two digits per byte, with leading zero bytes dropped,
	/// so zero is written as `00`.
	///
	/// # Parameters
	///
	/// * `base`      - The base to write the digits in.
	/// * `uppercase` - Whether to use upper-case hexadecimal digits.
	///
	#[must_use]
	pub fn to_string_radix(self, base: Base, uppercase: bool) -> String {
		match base {
			Base::Hexadecimal => self.hex_digits(uppercase),
			Base::Octal       => self.cast_unsigned().division_digits(8),
			Base::Decimal     => {
				let digits = self.unsigned_abs().division_digits(10);
				if self.is_negative() {
					format!("-{digits}")
				} else {
					digits
				}
			},
		}
	}

	//		Crate methods

	//		parse_digits
	/// Parses bare digits in the given radix with Horner's method, skipping
	/// apostrophe and space separators.
	///
	/// # Errors
	///
	/// Returns [`IntError::InvalidDigit`], [`IntError::DigitOutOfRange`] or
	/// [`IntError::CapacityOverflow`], as for [`parse()`](Int::parse()).
	///
	pub(crate) fn parse_digits(digits: &str, radix: u8) -> Result<Self, IntError> {
		let mut value = Self::zero();
		for c in digits.chars() {
			if matches!(c, '\'' | ' ') {
				continue;
			}
			let digit = match c {
				'0'..='9' => c as u8 - b'0',
				'a'..='f' => c as u8 - b'a' + 10,
				'A'..='F' => c as u8 - b'A' + 10,
				_         => return Err(IntError::InvalidDigit(c)),
			};
			if digit >= radix {
				return Err(IntError::DigitOutOfRange(c, radix));
			}
			value.mul_digit(radix)?;
			if value.add_extended(&[digit], 0x00) {
				return Err(IntError::CapacityOverflow);
			}
		}
		Ok(value)
	}

	//		Private methods

	//		hex_digits
	/// Writes two hexadecimal digits per byte, most-significant first, skipping
	/// leading zero bytes but always keeping the lowest byte.
	fn hex_digits(self, uppercase: bool) -> String {
		let table = if uppercase { UPPER_DIGITS } else { LOWER_DIGITS };
		let bytes = self.as_slice();
		let top   = bytes.iter().rposition(|&byte| byte != 0).unwrap_or(0);
		bytes.iter()
			.take(top + 1)
			.rev()
			.flat_map(|&byte| [table[usize::from(byte >> 4)], table[usize::from(byte & 0x0F)]])
			.map(char::from)
			.collect()
	}

	//		mul_digit
	/// Multiplies in place by a single-digit factor, failing on carry out of
	/// the top byte.
	#[expect(clippy::cast_possible_truncation, reason = "Low byte of the product is wanted")]
	fn mul_digit(&mut self, factor: u8) -> Result<(), IntError> {
		let mut carry = 0_u16;
		for byte in self.as_mut_slice() {
			let product = u16::from(*byte) * u16::from(factor) + carry;
			*byte       = product as u8;
			carry       = product >> 8;
		}
		if carry == 0 {
			Ok(())
		} else {
			Err(IntError::CapacityOverflow)
		}
	}
}

//󰭅		Int<BITS, false>
impl<BITS> Int<BITS, false>
where
	BITS: BitWidth,
{
	//		division_digits
	/// Writes the value in the given radix by repeated division, taking each
	/// remainder as the next digit from the right.
	fn division_digits(self, radix: u8) -> String {
		let divisor    = Self::from_extended(&[radix], 0x00);
		let mut digits = Vec::new();
		let mut value  = self;
		loop {
			let (quotient, remainder) = value.long_division(divisor);
			digits.push(LOWER_DIGITS[usize::from(remainder.as_slice()[0])]);
			value = quotient;
			if value.is_zero() {
				break;
			}
		}
		digits.iter().rev().map(|&digit| char::from(digit)).collect()
	}
}

//󰭅		Debug
impl<BITS, const SIGNED: bool> Debug for Int<BITS, SIGNED>
where
	BITS: BitWidth,
{
	//		fmt
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		write!(f, "Int::<{}, {}>({})", Self::BITS, SIGNED, self)
	}
}

//󰭅		Deserialize
impl<'de, BITS, const SIGNED: bool> Deserialize<'de> for Int<BITS, SIGNED>
where
	BITS: BitWidth,
{
	//		deserialize
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: Deserializer<'de>,
	{
		if deserializer.is_human_readable() {
			//	If the format is human-readable, accept both numbers and strings
			deserializer.deserialize_any(IntVisitor::<BITS, SIGNED>(PhantomData))
		} else {
			//	For binary formats, expect raw bytes
			deserializer.deserialize_bytes(IntVisitor::<BITS, SIGNED>(PhantomData))
		}
	}
}

//󰭅		Display
impl<BITS, const SIGNED: bool> Display for Int<BITS, SIGNED>
where
	BITS: BitWidth,
{
	//		fmt
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.pad_integral(!self.is_negative(), "", &self.unsigned_abs().division_digits(10))
	}
}

//󰭅		FromStr
impl<BITS, const SIGNED: bool> FromStr for Int<BITS, SIGNED>
where
	BITS: BitWidth,
{
	type Err = IntError;

	//		from_str
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::parse(s)
	}
}

//󰭅		LowerHex
impl<BITS, const SIGNED: bool> LowerHex for Int<BITS, SIGNED>
where
	BITS: BitWidth,
{
	//		fmt
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.pad_integral(true, "0x", &self.hex_digits(false))
	}
}

//󰭅		Octal
impl<BITS, const SIGNED: bool> Octal for Int<BITS, SIGNED>
where
	BITS: BitWidth,
{
	//		fmt
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.pad_integral(true, "0o", &self.cast_unsigned().division_digits(8))
	}
}

//󰭅		Serialize
impl<BITS, const SIGNED: bool> Serialize for Int<BITS, SIGNED>
where
	BITS: BitWidth,
{
	//		serialize
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: Serializer,
	{
		if serializer.is_human_readable() {
			//	For JSON and similar formats, serialise as number if it fits in i64/u64
			if Self::BITS <= 64 {
				if SIGNED {
					if let Ok(v) = i64::try_from(*self) {
						return serializer.serialize_i64(v);
					}
				} else if let Ok(v) = u64::try_from(*self) {
					return serializer.serialize_u64(v);
				}
			}
			//	Fall back to string for larger numbers
			serializer.serialize_str(&self.to_string())
		} else {
			//	For binary formats, serialise raw bytes
			serializer.serialize_bytes(self.as_slice())
		}
	}
}

//󰭅		UpperHex
impl<BITS, const SIGNED: bool> UpperHex for Int<BITS, SIGNED>
where
	BITS: BitWidth,
{
	//		fmt
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.pad_integral(true, "0x", &self.hex_digits(true))
	}
}

//		IntVisitor
/// A visitor for parsing integers from numbers, strings, or raw bytes.
struct IntVisitor<BITS, const SIGNED: bool>(PhantomData<BITS>);

//󰭅		Visitor
impl<BITS, const SIGNED: bool> Visitor<'_> for IntVisitor<BITS, SIGNED>
where
	BITS: BitWidth,
{
	type Value = Int<BITS, SIGNED>;

	//		expecting
	fn expecting(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
		write!(formatter, "a {} {}-bit integer", if SIGNED { "signed" } else { "unsigned" }, BITS::U32)
	}

	//		visit_bytes
	fn visit_bytes<E>(self, v: &[u8]) -> Result<Self::Value, E>
	where
		E: SerdeError,
	{
		Int::from_le_bytes(v).map_err(|_err| E::invalid_length(v.len(), &self))
	}

	//		visit_i64
	fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
	where
		E: SerdeError,
	{
		Int::try_from_native(&v.to_le_bytes(), v < 0).map_err(E::custom)
	}

	//		visit_i128
	fn visit_i128<E>(self, v: i128) -> Result<Self::Value, E>
	where
		E: SerdeError,
	{
		Int::try_from_native(&v.to_le_bytes(), v < 0).map_err(E::custom)
	}

	//		visit_str
	fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
	where
		E: SerdeError,
	{
		v.parse().map_err(E::custom)
	}

	//		visit_u64
	fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
	where
		E: SerdeError,
	{
		Int::try_from_native(&v.to_le_bytes(), false).map_err(E::custom)
	}

	//		visit_u128
	fn visit_u128<E>(self, v: u128) -> Result<Self::Value, E>
	where
		E: SerdeError,
	{
		Int::try_from_native(&v.to_le_bytes(), false).map_err(E::custom)
	}
}



//		Functions

//		split_prefix
/// Splits a literal into its digits and radix according to its prefix.
fn split_prefix(body: &str) -> (&str, u8) {
	if body.len() > 2 {
		if let Some(digits) = body.strip_prefix("0x").or_else(|| body.strip_prefix("0X")) {
			return (digits, 16);
		}
		if let Some(digits) = body.strip_prefix("0b").or_else(|| body.strip_prefix("0B")) {
			return (digits, 2);
		}
		if let Some(digits) = body.strip_prefix('0') {
			return (digits, 8);
		}
	}
	(body, 10)
}


