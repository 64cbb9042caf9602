//! Contains error types used throughout the library.



//		Packages

use thiserror::Error as ThisError;



//		Enums

//		IntError
/// Represents all possible errors that can occur when building, parsing, or
/// operating on an [`Int`](crate::Int).
#[derive(Clone, Copy, Debug, Eq, PartialEq, ThisError)]
#[non_exhaustive]
pub enum IntError {
	/// The incoming value is empty, e.g. an empty string or a lone sign.
	#[error("Empty value")]
	EmptyValue,

	/// The incoming text contains a character that is not a digit in any
	/// supported base.
	#[error("Invalid digit: {0}")]
	InvalidDigit(char),

	/// The incoming text contains a digit that is not valid for the base in
	/// use, e.g. `9` in an octal literal.
	#[error("Invalid digit for base {1}: {0}")]
	DigitOutOfRange(char, u8),

	/// The value needs more bits than the destination width provides.
	#[error("Value exceeds the capacity of the destination width")]
	CapacityOverflow,

	/// A division or remainder was attempted with a divisor of zero.
	#[error("Division by zero")]
	DivisionByZero,

	/// A negative value was given where only unsigned values are allowed.
	#[error("Negative sign not allowed for an unsigned destination")]
	SignNotAllowed,

	/// The minimum value of a signed width has no positive counterpart.
	#[error("Negation of the minimum value overflows")]
	NegationOverflow,

	/// A bit position outside the width was addressed.
	#[error("Bit index out of range: {0}")]
	IndexOutOfRange(u32),

	/// A byte sequence did not match the storage length of the destination.
	#[error("Invalid byte length: {0}")]
	InvalidLength(usize),
}


