//! Arithmetic, bitwise, and shift operations.
//!
//! Everything here works directly on the little-endian byte storage with
//! schoolbook algorithms, so no native integer wider than 32 bits is needed
//! as an intermediate at any width.

#![allow(
	clippy::indexing_slicing,
	clippy::missing_asserts_for_indexing,
	reason = "We always know the size"
)]

//	Carry and borrow propagation is bounded by construction: every intermediate
//	fits its native type, and we deliberately wrap at the width boundary.
#![allow(clippy::arithmetic_side_effects, reason = "Needs to emulate two's-complement hardware")]



//		Modules

#[cfg(test)]
#[path = "tests/arith.rs"]
mod tests;



//		Packages

use crate::{
	errors::IntError,
	int::{Int, PointerWidth},
	width::BitWidth,
};
use core::{
	cmp::Ordering,
	iter::{Product, Sum},
	ops::{
		Add, AddAssign, BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign,
		Div, DivAssign, Mul, MulAssign, Neg, Not, Rem, RemAssign,
		Shl, ShlAssign, Shr, ShrAssign, Sub, SubAssign,
	},
};
use typenum::{B1, IsGreaterOrEqual, consts};



//		Structs

//󰭅		Int
impl<BITS, const SIGNED: bool> Int<BITS, SIGNED>
where
	BITS: BitWidth,
{
	//		Public methods

	//		decrement
	/// Subtracts one in place, wrapping from the minimum to the maximum value.
	pub fn decrement(&mut self) {
		_ = self.sub_extended(&[1], 0x00);
	}

	//		div_rem
	/// Divides by an [`Int`] of any width, returning the quotient and the
	/// remainder.
	///
	/// The quotient is truncated towards zero, and the remainder takes the sign
	/// of the dividend, as with the native integer types. Dividing the minimum
	/// signed value by `-1` wraps back to the minimum value.
	///
	/// # Parameters
	///
	/// * `rhs` - The divisor.
	///
	/// # Errors
	///
	/// Returns [`IntError::DivisionByZero`] if the divisor is zero.
	///
	pub fn div_rem<B2, const S2: bool>(self, rhs: Int<B2, S2>) -> Result<(Self, Self), IntError>
	where
		B2: BitWidth,
	{
		if rhs.is_zero() {
			return Err(IntError::DivisionByZero);
		}
		let (quotient, remainder) = self.unsigned_abs().long_division(rhs.unsigned_abs());
		let quotient  = if self.is_negative() == rhs.is_negative() { quotient } else { quotient.wrapping_neg() };
		let remainder = if self.is_negative() { remainder.wrapping_neg() } else { remainder };
		Ok((quotient.reinterpret(), remainder.reinterpret()))
	}

	//		increment
	/// Adds one in place, wrapping from the maximum to the minimum value.
	pub fn increment(&mut self) {
		_ = self.add_extended(&[1], 0x00);
	}

	//		try_abs
	/// Computes the absolute value.
	///
	/// # Errors
	///
	/// Returns [`IntError::NegationOverflow`] for the minimum signed value,
	/// which has no positive counterpart.
	///
	pub fn try_abs(self) -> Result<Self, IntError> {
		if self.is_negative() {
			self.try_neg()
		} else {
			Ok(self)
		}
	}

	//		try_div
	/// Divides by an [`Int`] of any width, truncating towards zero.
	///
	/// # Errors
	///
	/// Returns [`IntError::DivisionByZero`] if the divisor is zero.
	///
	pub fn try_div<B2, const S2: bool>(self, rhs: Int<B2, S2>) -> Result<Self, IntError>
	where
		B2: BitWidth,
	{
		self.div_rem(rhs).map(|(quotient, _)| quotient)
	}

	//		try_neg
	/// Negates the value.
	///
	/// Unsigned values negate modulo 2^`BITS`, so `-1` becomes the maximum
	/// value.
	///
	/// # Errors
	///
	/// Returns [`IntError::NegationOverflow`] for the minimum signed value.
	///
	pub fn try_neg(self) -> Result<Self, IntError> {
		if SIGNED && self == Self::min_value() {
			return Err(IntError::NegationOverflow);
		}
		Ok(self.wrapping_neg())
	}

	//		try_rem
	/// Computes the remainder of division by an [`Int`] of any width. The
	/// result takes the sign of the dividend.
	///
	/// # Errors
	///
	/// Returns [`IntError::DivisionByZero`] if the divisor is zero.
	///
	pub fn try_rem<B2, const S2: bool>(self, rhs: Int<B2, S2>) -> Result<Self, IntError>
	where
		B2: BitWidth,
	{
		self.div_rem(rhs).map(|(_, remainder)| remainder)
	}

	//		unsigned_abs
	/// Computes the magnitude as an unsigned value of the same width. This
	/// never overflows, as the magnitude of the minimum signed value is
	/// representable unsigned.
	#[must_use]
	pub fn unsigned_abs(self) -> Int<BITS, false> {
		let unsigned = self.cast_unsigned();
		if self.is_negative() {
			unsigned.wrapping_neg()
		} else {
			unsigned
		}
	}

	//		Crate methods

	//		add_extended
	/// Adds little-endian bytes extended with `fill`, discarding anything
	/// beyond this width. Returns the carry out of the top byte.
	#[expect(clippy::cast_possible_truncation, reason = "Low byte of the sum is wanted")]
	pub(crate) fn add_extended(&mut self, rhs: &[u8], fill: u8) -> bool {
		let mut carry = 0_u16;
		for (i, byte) in self.0.iter_mut().enumerate() {
			let sum = u16::from(*byte) + u16::from(rhs.get(i).copied().unwrap_or(fill)) + carry;
			*byte   = sum as u8;
			carry   = sum >> 8;
		}
		carry != 0
	}

	//		sub_extended
	/// Subtracts little-endian bytes extended with `fill`, discarding anything
	/// beyond this width. Returns the borrow out of the top byte.
	#[expect(clippy::cast_possible_truncation, reason = "Low byte of the difference is wanted")]
	pub(crate) fn sub_extended(&mut self, rhs: &[u8], fill: u8) -> bool {
		let mut borrow = 0_u16;
		for (i, byte) in self.0.iter_mut().enumerate() {
			let diff = u16::from(*byte)
				.wrapping_sub(u16::from(rhs.get(i).copied().unwrap_or(fill)))
				.wrapping_sub(borrow)
			;
			*byte    = diff as u8;
			borrow   = u16::from(diff > 0xFF);
		}
		borrow != 0
	}

	//		wrapping_neg
	/// Two's-complement negation: complement every bit, then add one.
	pub(crate) fn wrapping_neg(self) -> Self {
		let mut value = !self;
		value.increment();
		value
	}
}

//󰭅		Int<BITS, false>
impl<BITS> Int<BITS, false>
where
	BITS: BitWidth,
{
	//		long_division
	/// Restoring binary long division of two magnitudes, returning the quotient
	/// and remainder.
	///
	/// A zero divisor gives an all-ones quotient, so callers must reject it
	/// first.
	///
	pub(crate) fn long_division<B2>(self, divisor: Int<B2, false>) -> (Self, Self)
	where
		B2: BitWidth,
	{
		let mut quotient  = Self::zero();
		let mut remainder = Self::zero();
		//	The remainder never exceeds the dividend bits consumed so far, so
		//	shifting it left cannot lose a set bit.
		for i in (0..Self::BITS).rev() {
			remainder <<= 1;
			if self.bit_unchecked(i) {
				remainder.0[0] |= 1;
			}
			if remainder.compare(divisor) != Ordering::Less {
				_ = remainder.sub_extended(divisor.as_slice(), 0x00);
				quotient.set_bit_unchecked(i, true);
			}
		}
		(quotient, remainder)
	}
}

//󰭅		Add
impl<BITS, const SIGNED: bool, B2, const S2: bool> Add<Int<B2, S2>> for Int<BITS, SIGNED>
where
	BITS: BitWidth,
	B2:   BitWidth,
{
	type Output = Self;

	//		add
	fn add(mut self, rhs: Int<B2, S2>) -> Self::Output {
		self += rhs;
		self
	}
}

//󰭅		AddAssign
impl<BITS, const SIGNED: bool, B2, const S2: bool> AddAssign<Int<B2, S2>> for Int<BITS, SIGNED>
where
	BITS: BitWidth,
	B2:   BitWidth,
{
	//		add_assign
	fn add_assign(&mut self, rhs: Int<B2, S2>) {
		_ = self.add_extended(rhs.as_slice(), rhs.fill_byte());
	}
}

//󰭅		Div
impl<BITS, const SIGNED: bool, B2, const S2: bool> Div<Int<B2, S2>> for Int<BITS, SIGNED>
where
	BITS: BitWidth,
	B2:   BitWidth,
{
	type Output = Self;

	//		div
	#[expect(clippy::expect_used, reason = "Needs to emulate Rust standard library behaviour")]
	fn div(self, rhs: Int<B2, S2>) -> Self::Output {
		self.try_div(rhs).expect("Attempt to divide by zero")
	}
}

//󰭅		DivAssign
impl<BITS, const SIGNED: bool, B2, const S2: bool> DivAssign<Int<B2, S2>> for Int<BITS, SIGNED>
where
	BITS: BitWidth,
	B2:   BitWidth,
{
	//		div_assign
	fn div_assign(&mut self, rhs: Int<B2, S2>) {
		*self = *self / rhs;
	}
}

//󰭅		Mul
impl<BITS, const SIGNED: bool, B2, const S2: bool> Mul<Int<B2, S2>> for Int<BITS, SIGNED>
where
	BITS: BitWidth,
	B2:   BitWidth,
{
	type Output = Self;

	//		mul
	fn mul(mut self, rhs: Int<B2, S2>) -> Self::Output {
		self *= rhs;
		self
	}
}

//󰭅		MulAssign
impl<BITS, const SIGNED: bool, B2, const S2: bool> MulAssign<Int<B2, S2>> for Int<BITS, SIGNED>
where
	BITS: BitWidth,
	B2:   BitWidth,
{
	//		mul_assign
	#[expect(clippy::cast_possible_truncation, reason = "Low byte of the product is wanted")]
	fn mul_assign(&mut self, rhs: Int<B2, S2>) {
		let negative = self.is_negative() != rhs.is_negative();
		let lhs      = self.unsigned_abs();
		let rhs      = rhs.unsigned_abs();
		let mut product = Int::<BITS, false>::zero();
		//	Row i only writes positions up to i + rhs.len(), so that position is
		//	still zero when the final carry of the row lands there.
		for (i, &a) in lhs.as_slice().iter().enumerate() {
			if a == 0 {
				continue;
			}
			let mut carry = 0_u32;
			for (j, &b) in rhs.as_slice().iter().enumerate() {
				let Some(slot) = product.0.get_mut(i + j) else { break };
				let sum = u32::from(a) * u32::from(b) + u32::from(*slot) + carry;
				*slot   = sum as u8;
				carry   = sum >> 8;
			}
			if let Some(slot) = product.0.get_mut(i + rhs.as_slice().len()) {
				*slot = carry as u8;
			}
		}
		*self = if negative { product.wrapping_neg() } else { product }.reinterpret();
	}
}

//󰭅		Neg
impl<BITS, const SIGNED: bool> Neg for Int<BITS, SIGNED>
where
	BITS: BitWidth,
{
	type Output = Self;

	//		neg
	#[expect(clippy::expect_used, reason = "Needs to emulate Rust standard library behaviour")]
	fn neg(self) -> Self::Output {
		self.try_neg().expect("Attempt to negate with overflow")
	}
}

//󰭅		Not
impl<BITS, const SIGNED: bool> Not for Int<BITS, SIGNED>
where
	BITS: BitWidth,
{
	type Output = Self;

	//		not
	fn not(mut self) -> Self::Output {
		for byte in self.0.iter_mut() {
			*byte = !*byte;
		}
		self
	}
}

//󰭅		Product
impl<BITS, const SIGNED: bool> Product for Int<BITS, SIGNED>
where
	BITS: BitWidth,
{
	//		product
	fn product<I>(iter: I) -> Self
	where
		I: Iterator<Item = Self>,
	{
		iter.fold(Self::one(), |acc, x| acc * x)
	}
}

//󰭅		Product<&>
impl<'a, BITS, const SIGNED: bool> Product<&'a Self> for Int<BITS, SIGNED>
where
	BITS: BitWidth,
{
	//		product
	fn product<I>(iter: I) -> Self
	where
		I: Iterator<Item = &'a Self>,
	{
		iter.fold(Self::one(), |acc, &x| acc * x)
	}
}

//󰭅		Rem
impl<BITS, const SIGNED: bool, B2, const S2: bool> Rem<Int<B2, S2>> for Int<BITS, SIGNED>
where
	BITS: BitWidth,
	B2:   BitWidth,
{
	type Output = Self;

	//		rem
	#[expect(clippy::expect_used, reason = "Needs to emulate Rust standard library behaviour")]
	fn rem(self, rhs: Int<B2, S2>) -> Self::Output {
		self.try_rem(rhs).expect("Attempt to calculate the remainder with a divisor of zero")
	}
}

//󰭅		RemAssign
impl<BITS, const SIGNED: bool, B2, const S2: bool> RemAssign<Int<B2, S2>> for Int<BITS, SIGNED>
where
	BITS: BitWidth,
	B2:   BitWidth,
{
	//		rem_assign
	fn rem_assign(&mut self, rhs: Int<B2, S2>) {
		*self = *self % rhs;
	}
}

//󰭅		Shl
impl<BITS, const SIGNED: bool> Shl<u32> for Int<BITS, SIGNED>
where
	BITS: BitWidth,
{
	type Output = Self;

	//		shl
	#[expect(clippy::integer_division, reason = "Whole bytes are wanted")]
	fn shl(self, rhs: u32) -> Self::Output {
		if rhs >= Self::BITS {
			return Self::zero();
		}
		let byte_shift = (rhs / 8) as usize;
		let bit_shift  = rhs % 8;
		let mut result = Self::zero();
		result.0[byte_shift..].copy_from_slice(&self.0[..Self::BYTES - byte_shift]);
		if bit_shift > 0 {
			let mut carry = 0_u8;
			for byte in result.0.iter_mut() {
				let shifted = (*byte << bit_shift) | carry;
				carry       = *byte >> (8 - bit_shift);
				*byte       = shifted;
			}
		}
		result
	}
}

//󰭅		ShlAssign
impl<BITS, const SIGNED: bool> ShlAssign<u32> for Int<BITS, SIGNED>
where
	BITS: BitWidth,
{
	//		shl_assign
	fn shl_assign(&mut self, rhs: u32) {
		*self = *self << rhs;
	}
}

//󰭅		Shr
impl<BITS, const SIGNED: bool> Shr<u32> for Int<BITS, SIGNED>
where
	BITS: BitWidth,
{
	type Output = Self;

	//		shr
	/// Shifts right, filling with the sign bit when signed and with zeroes when
	/// unsigned.
	#[expect(clippy::integer_division, reason = "Whole bytes are wanted")]
	fn shr(self, rhs: u32) -> Self::Output {
		let fill = self.fill_byte();
		if rhs >= Self::BITS {
			return Self::from_extended(&[], fill);
		}
		let byte_shift = (rhs / 8) as usize;
		let bit_shift  = rhs % 8;
		let mut result = Self::from_extended(&self.0[byte_shift..], fill);
		if bit_shift > 0 {
			let mut carry = fill << (8 - bit_shift);
			for byte in result.0.iter_mut().rev() {
				let shifted = (*byte >> bit_shift) | carry;
				carry       = *byte << (8 - bit_shift);
				*byte       = shifted;
			}
		}
		result
	}
}

//󰭅		ShrAssign
impl<BITS, const SIGNED: bool> ShrAssign<u32> for Int<BITS, SIGNED>
where
	BITS: BitWidth,
{
	//		shr_assign
	fn shr_assign(&mut self, rhs: u32) {
		*self = *self >> rhs;
	}
}

//󰭅		Sub
impl<BITS, const SIGNED: bool, B2, const S2: bool> Sub<Int<B2, S2>> for Int<BITS, SIGNED>
where
	BITS: BitWidth,
	B2:   BitWidth,
{
	type Output = Self;

	//		sub
	fn sub(mut self, rhs: Int<B2, S2>) -> Self::Output {
		self -= rhs;
		self
	}
}

//󰭅		SubAssign
impl<BITS, const SIGNED: bool, B2, const S2: bool> SubAssign<Int<B2, S2>> for Int<BITS, SIGNED>
where
	BITS: BitWidth,
	B2:   BitWidth,
{
	//		sub_assign
	fn sub_assign(&mut self, rhs: Int<B2, S2>) {
		_ = self.sub_extended(rhs.as_slice(), rhs.fill_byte());
	}
}

//󰭅		Sum
impl<BITS, const SIGNED: bool> Sum for Int<BITS, SIGNED>
where
	BITS: BitWidth,
{
	//		sum
	fn sum<I>(iter: I) -> Self
	where
		I: Iterator<Item = Self>,
	{
		iter.fold(Self::zero(), |acc, x| acc + x)
	}
}

//󰭅		Sum<&>
impl<'a, BITS, const SIGNED: bool> Sum<&'a Self> for Int<BITS, SIGNED>
where
	BITS: BitWidth,
{
	//		sum
	fn sum<I>(iter: I) -> Self
	where
		I: Iterator<Item = &'a Self>,
	{
		iter.fold(Self::zero(), |acc, &x| acc + x)
	}
}



//		Macros

//		bitwise!
/// Implements a bitwise operator and its assigning form between values of the
/// exact same type.
macro_rules! bitwise {
	($($op:ident, $method:ident, $op_assign:ident, $method_assign:ident, $apply:tt);* $(;)?) => {$(
		//󰭅		Bitwise
		impl<BITS, const SIGNED: bool> $op for Int<BITS, SIGNED>
		where
			BITS: BitWidth,
		{
			type Output = Self;

			fn $method(mut self, rhs: Self) -> Self::Output {
				$op_assign::$method_assign(&mut self, rhs);
				self
			}
		}

		//󰭅		BitwiseAssign
		impl<BITS, const SIGNED: bool> $op_assign for Int<BITS, SIGNED>
		where
			BITS: BitWidth,
		{
			fn $method_assign(&mut self, rhs: Self) {
				for (lhs, &rhs) in self.0.iter_mut().zip(rhs.0.iter()) {
					*lhs $apply rhs;
				}
			}
		}
	)*};
}

bitwise! {
	BitAnd, bitand, BitAndAssign, bitand_assign, &=;
	BitOr,  bitor,  BitOrAssign,  bitor_assign,  |=;
	BitXor, bitxor, BitXorAssign, bitxor_assign, ^=;
}

//		native_ops!
/// Implements the arithmetic and bitwise operators with a native integer on
/// the right-hand side, for every native no wider than the width. The native
/// is converted first, then the [`Int`] operator applies.
macro_rules! native_ops {
	($($t:ty => $width:ty),* $(,)?) => {$(
		native_ops!(@op $t, $width, Add,    add,    AddAssign,    add_assign);
		native_ops!(@op $t, $width, Sub,    sub,    SubAssign,    sub_assign);
		native_ops!(@op $t, $width, Mul,    mul,    MulAssign,    mul_assign);
		native_ops!(@op $t, $width, Div,    div,    DivAssign,    div_assign);
		native_ops!(@op $t, $width, Rem,    rem,    RemAssign,    rem_assign);
		native_ops!(@op $t, $width, BitAnd, bitand, BitAndAssign, bitand_assign);
		native_ops!(@op $t, $width, BitOr,  bitor,  BitOrAssign,  bitor_assign);
		native_ops!(@op $t, $width, BitXor, bitxor, BitXorAssign, bitxor_assign);
	)*};
	(@op $t:ty, $width:ty, $op:ident, $method:ident, $op_assign:ident, $method_assign:ident) => {
		//󰭅		Operator<native>
		impl<BITS, const SIGNED: bool> $op<$t> for Int<BITS, SIGNED>
		where
			BITS: BitWidth + IsGreaterOrEqual<$width, Output = B1>,
		{
			type Output = Self;

			fn $method(self, rhs: $t) -> Self::Output {
				$op::$method(self, Self::from(rhs))
			}
		}

		//󰭅		OperatorAssign<native>
		impl<BITS, const SIGNED: bool> $op_assign<$t> for Int<BITS, SIGNED>
		where
			BITS: BitWidth + IsGreaterOrEqual<$width, Output = B1>,
		{
			fn $method_assign(&mut self, rhs: $t) {
				$op_assign::$method_assign(self, Self::from(rhs));
			}
		}
	};
}

native_ops!(
	u8    => consts::U8,
	u16   => consts::U16,
	u32   => consts::U32,
	u64   => consts::U64,
	u128  => consts::U128,
	usize => PointerWidth,
	i8    => consts::U8,
	i16   => consts::U16,
	i32   => consts::U32,
	i64   => consts::U64,
	i128  => consts::U128,
	isize => PointerWidth,
);


