//! Compile-time bit widths.



//		Packages

use core::ops::{Deref, DerefMut, Div, Rem};
use generic_array::{ArrayLength, GenericArray};
use typenum::{NonZero, Quot, U0, U8, Unsigned};



//		Traits

//		BitWidth
/// A [`typenum`] unsigned integer that can be used as the width of an
/// [`Int`](crate::Int).
///
/// This is implemented for every non-zero multiple of eight, so `U8`, `U24`,
/// `U128`, `U256` and so on are all valid widths, while `U0` and `U12` fail to
/// satisfy the bound at compile time.
///
/// The storage is a [`GenericArray`] of `BITS / 8` bytes, which is the closest
/// stable Rust gets to `[u8; BITS / 8]` for a generic width. It is always
/// [`Copy`], so every [`Int`](crate::Int) is too.
///
pub trait BitWidth: Unsigned + NonZero {
	/// The inline byte storage for this width.
	type Array: Copy + Default + Deref<Target = [u8]> + DerefMut;
}

//󰭅		BitWidth
impl<N> BitWidth for N
where
	N:                                Unsigned + NonZero + Div<U8> + Rem<U8, Output = U0>,
	Quot<N, U8>:                      ArrayLength,
	GenericArray<u8, Quot<N, U8>>:    Copy,
{
	type Array = GenericArray<u8, Quot<N, U8>>;
}


