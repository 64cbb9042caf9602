//! The fixed-width integer type and its representation.

//	These lint checks are unnecessary in this module because all indexing is
//	based on the BYTES constant, which is tied to the storage length of the
//	width, and the type system guarantees the arrays are that size.
#![allow(
	clippy::indexing_slicing,
	clippy::missing_asserts_for_indexing,
	reason = "We always know the size"
)]



//		Modules

#[cfg(test)]
#[path = "tests/int.rs"]
mod tests;



//		Packages

use crate::{errors::IntError, width::BitWidth};
use core::mem::size_of;
use typenum::{B1, IsGreaterOrEqual, IsLessOrEqual, consts};



//		Type aliases

/// Type alias for signed integers, for convenience.
pub type SInt<BITS> = Int<BITS, true>;

/// Type alias for unsigned integers, for convenience.
pub type UInt<BITS> = Int<BITS, false>;

/// The width of [`usize`] and [`isize`] on the target.
#[cfg(target_pointer_width = "16")]
pub(crate) type PointerWidth = consts::U16;

/// The width of [`usize`] and [`isize`] on the target.
#[cfg(target_pointer_width = "32")]
pub(crate) type PointerWidth = consts::U32;

/// The width of [`usize`] and [`isize`] on the target.
#[cfg(target_pointer_width = "64")]
pub(crate) type PointerWidth = consts::U64;



//		Structs

//		Int
/// A fixed-width integer.
///
/// This type provides an integer of any whole-byte width, which can be signed
/// or unsigned, and behaves like the native integer types of matching width.
///
/// # Type parameters
///
/// * `BITS`   - The number of bits used to represent the integer, as a
///              [`typenum`] type such as `U256`. It must be a non-zero
///              multiple of eight.
/// * `SIGNED` - Whether the integer is signed (`true`) or unsigned (`false`).
///
/// # Arithmetic
///
/// All arithmetic wraps modulo 2^`BITS`, as two's-complement hardware does.
/// The only operations that can fail are those without a representable
/// result: division by zero, and negation of the minimum signed value. The
/// operators panic in those cases, and [`try_div()`](Int::try_div()),
/// [`try_rem()`](Int::try_rem()) and [`try_neg()`](Int::try_neg()) report
/// them as errors instead.
///
/// Operands of different widths and signedness can be mixed freely in
/// arithmetic and comparison. The right-hand side is sign- or zero-extended to
/// the width of the left-hand side, and the result always has the type of the
/// left-hand side. Bitwise operators only accept the exact same type.
///
/// # Conversion
///
/// Native integers convert in via [`From`] when they are no wider than
/// `BITS`, which is checked at compile time. Narrower [`Int`]s widen via
/// [`from_int()`](Int::from_int()). Conversion back out to native integers is
/// via [`TryFrom`], which fails if the value does not fit.
///
/// # Internal representation
///
/// The value is stored as a sequence of bytes in little-endian order (least
/// significant byte first) on every platform, so all byte-level algorithms
/// behave identically regardless of host byte order.
///
/// For example, the 16-bit value `0x1234`:
///
///   - Written in hex: `0x1234`
///   - Stored in memory: `[0x34, 0x12]`
///
/// Bit `0` is the least-significant bit of the first byte, bit `8` the
/// least-significant bit of the second byte, and so on.
///
pub struct Int<BITS, const SIGNED: bool>(pub(crate) BITS::Array)
where
	BITS: BitWidth,
;

//󰭅		Int
impl<BITS, const SIGNED: bool> Int<BITS, SIGNED>
where
	BITS: BitWidth,
{
	//		Public constants
	/// Number of bits in the width.
	pub const BITS:  u32   = BITS::U32;

	/// Number of bytes used for storage.
	#[expect(clippy::integer_division, reason = "Widths are always whole bytes")]
	pub const BYTES: usize = BITS::USIZE / 8;

	//		Public methods

	//		as_slice
	/// Returns the stored bytes, least-significant first.
	#[must_use]
	pub fn as_slice(&self) -> &[u8] {
		&self.0
	}

	//		bit
	/// Gets the value of a specific bit.
	///
	/// # Parameters
	///
	/// * `pos` - The position of the bit to get, where `0` is the
	///           least-significant bit.
	///
	/// # Errors
	///
	/// Returns [`IntError::IndexOutOfRange`] if the position is not inside the
	/// width.
	///
	pub fn bit(self, pos: u32) -> Result<bool, IntError> {
		if pos >= Self::BITS {
			return Err(IntError::IndexOutOfRange(pos));
		}
		Ok(self.bit_unchecked(pos))
	}

	//		cast_signed
	/// Reinterprets the same bits as a signed integer.
	#[must_use]
	pub fn cast_signed(self) -> Int<BITS, true> {
		self.reinterpret()
	}

	//		cast_unsigned
	/// Reinterprets the same bits as an unsigned integer.
	#[must_use]
	pub fn cast_unsigned(self) -> Int<BITS, false> {
		self.reinterpret()
	}

	//		from_be_bytes
	/// Creates an [`Int`] from a big-endian byte sequence.
	///
	/// # Parameters
	///
	/// * `bytes` - The big-endian bytes, exactly [`BYTES`](Self::BYTES) long.
	///
	/// # Errors
	///
	/// Returns [`IntError::InvalidLength`] if the byte sequence is not the
	/// correct length.
	///
	pub fn from_be_bytes(bytes: &[u8]) -> Result<Self, IntError> {
		Self::from_le_bytes(bytes).map(Self::swap_bytes)
	}

	//		from_int
	/// Widens an [`Int`] of equal or smaller width into this type.
	///
	/// The source is sign-extended when it is signed and negative, and
	/// zero-extended otherwise. Passing a wider source fails to compile.
	///
	/// # Parameters
	///
	/// * `other` - The value to widen.
	///
	#[must_use]
	pub fn from_int<B2, const S2: bool>(other: Int<B2, S2>) -> Self
	where
		B2: BitWidth + IsLessOrEqual<BITS, Output = B1>,
	{
		Self::from_extended(other.as_slice(), other.fill_byte())
	}

	//		from_le_bytes
	/// Creates an [`Int`] from a little-endian byte sequence.
	///
	/// # Parameters
	///
	/// * `bytes` - The little-endian bytes, exactly [`BYTES`](Self::BYTES)
	///             long.
	///
	/// # Errors
	///
	/// Returns [`IntError::InvalidLength`] if the byte sequence is not the
	/// correct length.
	///
	pub fn from_le_bytes(bytes: &[u8]) -> Result<Self, IntError> {
		if bytes.len() != Self::BYTES {
			return Err(IntError::InvalidLength(bytes.len()));
		}
		let mut value = Self::zero();
		value.0.copy_from_slice(bytes);
		Ok(value)
	}

	//		is_negative
	/// Determines if the value is negative. Always `false` when unsigned.
	#[must_use]
	pub fn is_negative(self) -> bool {
		SIGNED && self.0.last().is_some_and(|&byte| byte & 0x80 != 0)
	}

	//		is_zero
	/// Determines if the value is zero.
	#[must_use]
	pub fn is_zero(self) -> bool {
		self.0.iter().all(|&byte| byte == 0)
	}

	//		max_value
	/// Returns the largest value of this type.
	#[must_use]
	pub fn max_value() -> Self {
		let mut value = Self::from_extended(&[], 0xFF);
		if let (true, Some(top)) = (SIGNED, value.0.last_mut()) {
			*top = 0x7F;
		}
		value
	}

	//		min_value
	/// Returns the smallest value of this type.
	#[must_use]
	pub fn min_value() -> Self {
		let mut value = Self::zero();
		if let (true, Some(top)) = (SIGNED, value.0.last_mut()) {
			*top = 0x80;
		}
		value
	}

	//		one
	/// Returns the value one.
	#[must_use]
	pub fn one() -> Self {
		Self::from_extended(&[1], 0x00)
	}

	//		set_bit
	/// Sets the value of a specific bit.
	///
	/// # Parameters
	///
	/// * `pos`   - The position of the bit to set, where `0` is the
	///             least-significant bit.
	/// * `value` - The value to set the bit to.
	///
	/// # Errors
	///
	/// Returns [`IntError::IndexOutOfRange`] if the position is not inside the
	/// width, in which case the value is unchanged.
	///
	pub fn set_bit(&mut self, pos: u32, value: bool) -> Result<(), IntError> {
		if pos >= Self::BITS {
			return Err(IntError::IndexOutOfRange(pos));
		}
		self.set_bit_unchecked(pos, value);
		Ok(())
	}

	//		swap_bytes
	/// Reverses the byte order of the value.
	///
	/// The result is the value that would be read if the stored bytes were
	/// interpreted with the opposite endianness. Applying it twice gives back
	/// the original value.
	///
	#[must_use]
	pub fn swap_bytes(self) -> Self {
		let mut value = self;
		value.0.reverse();
		value
	}

	//		to_be_bytes
	/// Returns the bytes in big-endian order.
	#[must_use]
	pub fn to_be_bytes(self) -> BITS::Array {
		self.swap_bytes().0
	}

	//		to_le_bytes
	/// Returns the bytes in little-endian order, which is a direct copy of the
	/// internal representation.
	#[must_use]
	pub fn to_le_bytes(self) -> BITS::Array {
		self.0
	}

	//		zero
	/// Returns the value zero.
	#[must_use]
	pub fn zero() -> Self {
		Self(Default::default())
	}

	//		Crate methods

	//		as_mut_slice
	/// Returns the stored bytes mutably, least-significant first.
	pub(crate) fn as_mut_slice(&mut self) -> &mut [u8] {
		&mut self.0
	}

	//		bit_unchecked
	/// Gets a bit whose position the caller has already checked.
	#[expect(clippy::integer_division, reason = "Whole bytes are wanted")]
	pub(crate) fn bit_unchecked(self, pos: u32) -> bool {
		self.0[(pos / 8) as usize] & (1 << (pos % 8)) != 0
	}

	//		extended_byte
	/// Gets the byte at `index` as if the value had been extended to an
	/// unlimited width.
	pub(crate) fn extended_byte(self, index: usize) -> u8 {
		if index < Self::BYTES {
			self.0[index]
		} else {
			self.fill_byte()
		}
	}

	//		fill_byte
	/// The byte that extends this value to a wider width: all ones for a
	/// negative value, otherwise zero.
	pub(crate) fn fill_byte(self) -> u8 {
		if self.is_negative() { 0xFF } else { 0x00 }
	}

	//		from_extended
	/// Builds a value from little-endian bytes of any length.
	///
	/// Positions past the end of `src` are set to `fill`, and bytes of `src`
	/// past this width are discarded.
	///
	pub(crate) fn from_extended(src: &[u8], fill: u8) -> Self {
		let mut value = Self::zero();
		for (i, byte) in value.0.iter_mut().enumerate() {
			*byte = src.get(i).copied().unwrap_or(fill);
		}
		value
	}

	//		reinterpret
	/// Reinterprets the same bits with the given signedness.
	pub(crate) fn reinterpret<const S2: bool>(self) -> Int<BITS, S2> {
		Int(self.0)
	}

	//		set_bit_unchecked
	/// Sets a bit whose position the caller has already checked.
	#[expect(clippy::integer_division, reason = "Whole bytes are wanted")]
	pub(crate) fn set_bit_unchecked(&mut self, pos: u32, value: bool) {
		if value {
			self.0[(pos / 8) as usize] |=   1 << (pos % 8);
		} else {
			self.0[(pos / 8) as usize] &= !(1 << (pos % 8));
		}
	}

	//		try_from_native
	/// Builds a value from the little-endian bytes of a native integer,
	/// checking that the value is representable.
	///
	/// # Errors
	///
	/// Returns [`IntError::SignNotAllowed`] for a negative source and an
	/// unsigned destination, and [`IntError::CapacityOverflow`] if the value
	/// needs more bits than this width has.
	///
	pub(crate) fn try_from_native(src: &[u8], negative: bool) -> Result<Self, IntError> {
		if negative && !SIGNED {
			return Err(IntError::SignNotAllowed);
		}
		let fill = if negative { 0xFF } else { 0x00 };
		if src.iter().skip(Self::BYTES).any(|&byte| byte != fill) {
			return Err(IntError::CapacityOverflow);
		}
		let value = Self::from_extended(src, fill);
		if value.is_negative() != negative {
			return Err(IntError::CapacityOverflow);
		}
		Ok(value)
	}

	//		write_native
	/// Writes the value into the little-endian bytes of a native integer,
	/// checking that it fits.
	///
	/// # Errors
	///
	/// Returns [`IntError::SignNotAllowed`] for a negative value and an
	/// unsigned target, and [`IntError::CapacityOverflow`] if the value does
	/// not fit in `out`.
	///
	pub(crate) fn write_native(self, out: &mut [u8], signed: bool) -> Result<(), IntError> {
		let negative = self.is_negative();
		if negative && !signed {
			return Err(IntError::SignNotAllowed);
		}
		let fill = self.fill_byte();
		if self.0.iter().skip(out.len()).any(|&byte| byte != fill) {
			return Err(IntError::CapacityOverflow);
		}
		for (i, byte) in out.iter_mut().enumerate() {
			*byte = self.extended_byte(i);
		}
		let top_set = out.last().is_some_and(|&byte| byte & 0x80 != 0);
		if signed && top_set != negative {
			return Err(IntError::CapacityOverflow);
		}
		Ok(())
	}
}

//󰭅		Clone
#[expect(clippy::expl_impl_clone_on_copy, reason = "Deriving would require BITS itself to be Clone")]
impl<BITS, const SIGNED: bool> Clone for Int<BITS, SIGNED>
where
	BITS: BitWidth,
{
	//		clone
	fn clone(&self) -> Self {
		*self
	}
}

//󰭅		Copy
impl<BITS, const SIGNED: bool> Copy for Int<BITS, SIGNED>
where
	BITS: BitWidth,
{}

//󰭅		Default
impl<BITS, const SIGNED: bool> Default for Int<BITS, SIGNED>
where
	BITS: BitWidth,
{
	//		default
	fn default() -> Self {
		Self::zero()
	}
}



//		Macros

//		from_native!
/// Implements [`From`] for each native integer that is no wider than the
/// target width.
macro_rules! from_native {
	(@fill unsigned $v:ident) => { 0x00 };
	(@fill signed $v:ident)   => { if $v < 0 { 0xFF } else { 0x00 } };
	($kind:ident: $($t:ty => $width:ty),* $(,)?) => {$(
		//󰭅		From<native>
		impl<BITS, const SIGNED: bool> From<$t> for Int<BITS, SIGNED>
		where
			BITS: BitWidth + IsGreaterOrEqual<$width, Output = B1>,
		{
			//		from
			fn from(v: $t) -> Self {
				Self::from_extended(&v.to_le_bytes(), from_native!(@fill $kind v))
			}
		}
	)*};
}

from_native!(unsigned:
	u8    => consts::U8,
	u16   => consts::U16,
	u32   => consts::U32,
	u64   => consts::U64,
	u128  => consts::U128,
	usize => PointerWidth,
);

from_native!(signed:
	i8    => consts::U8,
	i16   => consts::U16,
	i32   => consts::U32,
	i64   => consts::U64,
	i128  => consts::U128,
	isize => PointerWidth,
);

//		try_into_native!
/// Implements [`TryFrom`] from an [`Int`] of any width to each native integer.
macro_rules! try_into_native {
	($signed:literal: $($t:ty),* $(,)?) => {$(
		//󰭅		TryFrom<Int>
		impl<BITS, const SIGNED: bool> TryFrom<Int<BITS, SIGNED>> for $t
		where
			BITS: BitWidth,
		{
			type Error = IntError;

			//		try_from
			fn try_from(v: Int<BITS, SIGNED>) -> Result<Self, Self::Error> {
				let mut bytes = [0_u8; size_of::<$t>()];
				v.write_native(&mut bytes, $signed)?;
				Ok(<$t>::from_le_bytes(bytes))
			}
		}
	)*};
}

try_into_native!(false: u8, u16, u32, u64, u128, usize);
try_into_native!(true:  i8, i16, i32, i64, i128, isize);


