//! Ordering and equality across widths and signedness.

//		Modules

#[cfg(test)]
#[path = "tests/cmp.rs"]
mod tests;



//		Packages

use crate::{
	int::{Int, PointerWidth},
	width::BitWidth,
};
use core::{
	cmp::Ordering,
	hash::{Hash, Hasher},
};
use typenum::{B1, IsGreaterOrEqual, consts};



//		Structs

//󰭅		Int
impl<BITS, const SIGNED: bool> Int<BITS, SIGNED>
where
	BITS: BitWidth,
{
	//		compare
	/// Orders two values of any widths and signedness by numeric value.
	///
	/// Both values are viewed as extended to the wider of the two widths, then
	/// compared from the most-significant byte down. Only the top byte carries
	/// the sign, so it is read signed or unsigned according to each operand's
	/// own signedness, and every lower byte is read unsigned.
	///
	pub(crate) fn compare<B2, const S2: bool>(self, other: Int<B2, S2>) -> Ordering
	where
		B2: BitWidth,
	{
		let top = Self::BYTES.max(Int::<B2, S2>::BYTES).saturating_sub(1);
		Self::top_byte(self.extended_byte(top))
			.cmp(&Int::<B2, S2>::top_byte(other.extended_byte(top)))
			.then_with(|| {
				(0..top).rev()
					.map(|i| self.extended_byte(i).cmp(&other.extended_byte(i)))
					.find(|ordering| ordering.is_ne())
					.unwrap_or(Ordering::Equal)
			})
	}

	//		equals
	/// Tests two values of any widths and signedness for numeric equality.
	///
	/// A negative value never equals a non-negative one, whatever their bits.
	/// Otherwise the values are equal when their extended bytes match.
	///
	pub(crate) fn equals<B2, const S2: bool>(self, other: Int<B2, S2>) -> bool
	where
		B2: BitWidth,
	{
		if self.is_negative() != other.is_negative() {
			return false;
		}
		(0..Self::BYTES.max(Int::<B2, S2>::BYTES))
			.all(|i| self.extended_byte(i) == other.extended_byte(i))
	}

	//		top_byte
	/// Reads the most-significant byte with this type's signedness.
	fn top_byte(byte: u8) -> i16 {
		if SIGNED {
			i16::from(i8::from_le_bytes([byte]))
		} else {
			i16::from(byte)
		}
	}
}

//󰭅		Eq
impl<BITS, const SIGNED: bool> Eq for Int<BITS, SIGNED>
where
	BITS: BitWidth,
{}

//󰭅		Hash
impl<BITS, const SIGNED: bool> Hash for Int<BITS, SIGNED>
where
	BITS: BitWidth,
{
	//		hash
	fn hash<H: Hasher>(&self, state: &mut H) {
		self.as_slice().hash(state);
	}
}

//󰭅		Ord
impl<BITS, const SIGNED: bool> Ord for Int<BITS, SIGNED>
where
	BITS: BitWidth,
{
	//		cmp
	fn cmp(&self, other: &Self) -> Ordering {
		self.compare(*other)
	}
}

//󰭅		PartialEq
impl<BITS, const SIGNED: bool, B2, const S2: bool> PartialEq<Int<B2, S2>> for Int<BITS, SIGNED>
where
	BITS: BitWidth,
	B2:   BitWidth,
{
	//		eq
	fn eq(&self, other: &Int<B2, S2>) -> bool {
		self.equals(*other)
	}
}

//󰭅		PartialOrd
impl<BITS, const SIGNED: bool, B2, const S2: bool> PartialOrd<Int<B2, S2>> for Int<BITS, SIGNED>
where
	BITS: BitWidth,
	B2:   BitWidth,
{
	//		partial_cmp
	fn partial_cmp(&self, other: &Int<B2, S2>) -> Option<Ordering> {
		Some(self.compare(*other))
	}
}



//		Macros

//		native_cmp!
/// Implements equality and ordering against each native integer no wider than
/// the width, with the native on either side.
macro_rules! native_cmp {
	($signed:literal: $($t:ty => $width:ty),* $(,)?) => {$(
		//󰭅		PartialEq<native>
		impl<BITS, const SIGNED: bool> PartialEq<$t> for Int<BITS, SIGNED>
		where
			BITS: BitWidth + IsGreaterOrEqual<$width, Output = B1>,
		{
			fn eq(&self, other: &$t) -> bool {
				self.equals(Int::<BITS, $signed>::from(*other))
			}
		}

		//󰭅		PartialEq<Int>
		impl<BITS, const SIGNED: bool> PartialEq<Int<BITS, SIGNED>> for $t
		where
			BITS: BitWidth + IsGreaterOrEqual<$width, Output = B1>,
		{
			fn eq(&self, other: &Int<BITS, SIGNED>) -> bool {
				Int::<BITS, $signed>::from(*self).equals(*other)
			}
		}

		//󰭅		PartialOrd<native>
		impl<BITS, const SIGNED: bool> PartialOrd<$t> for Int<BITS, SIGNED>
		where
			BITS: BitWidth + IsGreaterOrEqual<$width, Output = B1>,
		{
			fn partial_cmp(&self, other: &$t) -> Option<Ordering> {
				Some(self.compare(Int::<BITS, $signed>::from(*other)))
			}
		}

		//󰭅		PartialOrd<Int>
		impl<BITS, const SIGNED: bool> PartialOrd<Int<BITS, SIGNED>> for $t
		where
			BITS: BitWidth + IsGreaterOrEqual<$width, Output = B1>,
		{
			fn partial_cmp(&self, other: &Int<BITS, SIGNED>) -> Option<Ordering> {
				Some(Int::<BITS, $signed>::from(*self).compare(*other))
			}
		}
	)*};
}

native_cmp!(false:
	u8    => consts::U8,
	u16   => consts::U16,
	u32   => consts::U32,
	u64   => consts::U64,
	u128  => consts::U128,
	usize => PointerWidth,
);

native_cmp!(true:
	i8    => consts::U8,
	i16   => consts::U16,
	i32   => consts::U32,
	i64   => consts::U64,
	i128  => consts::U128,
	isize => PointerWidth,
);


