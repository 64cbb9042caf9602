//		Packages

use super::*;
use claims::{assert_err_eq, assert_ok, assert_ok_eq};



//		Type aliases

type I8   = SInt<consts::U8>;
type I16  = SInt<consts::U16>;
type I32  = SInt<consts::U32>;
type I128 = SInt<consts::U128>;
type U8   = UInt<consts::U8>;
type U16  = UInt<consts::U16>;
type U24  = UInt<consts::U24>;
type U32  = UInt<consts::U32>;
type U64  = UInt<consts::U64>;
type U128 = UInt<consts::U128>;
type U256 = UInt<consts::U256>;



//		Tests

mod constructors {
	use super::*;

	//		default
	#[test]
	fn default__zero() {
		assert!(I32::default().is_zero());
		assert_eq!(U256::default().as_slice(), &[0_u8; 32]);
	}

	//		from
	#[test]
	fn from__unsigned_zero_extends() {
		let value = U128::from(0xD6_u8);
		assert_eq!(value.as_slice()[0], 0xD6);
		assert!(value.as_slice()[1..].iter().all(|&byte| byte == 0x00));
		assert_eq!(U128::from(u64::MAX), u64::MAX);
		assert_eq!(U64::from(7_usize), 7_u64);
	}
	#[test]
	fn from__signed_sign_extends() {
		let value = I128::from(-42_i8);
		assert_eq!(value.as_slice()[0], 0xD6);
		assert!(value.as_slice()[1..].iter().all(|&byte| byte == 0xFF));
		assert_eq!(value, -42_i128);
		assert_eq!(I32::from(42_i8), 42_i32);
	}
	#[test]
	fn from__negative_into_unsigned() {
		assert_eq!(U32::from(-1_i32), u32::MAX);
		assert_eq!(U16::from(-2_i8), 0xFFFE_u16);
	}

	//		from_be_bytes
	#[test]
	fn from_be_bytes__valid() {
		assert_ok_eq!(U32::from_be_bytes(&[0x12, 0x34, 0x56, 0x78]), 0x1234_5678_u32);
	}
	#[test]
	fn from_be_bytes__wrong_length() {
		assert_err_eq!(U32::from_be_bytes(&[0x12, 0x34]), IntError::InvalidLength(2));
	}

	//		from_int
	#[test]
	fn from_int__sign_extends() {
		assert_eq!(I128::from_int(I8::from(-5_i8)), -5_i32);
		assert_eq!(U16::from_int(I8::from(-1_i8)), 0xFFFF_u16);
	}
	#[test]
	fn from_int__zero_extends() {
		assert_eq!(U128::from_int(U8::from(200_u8)), 200_u8);
		assert_eq!(I32::from_int(U16::from(0xFFFF_u16)), 65_535_i32);
	}
	#[test]
	fn from_int__same_width() {
		assert_eq!(I8::from_int(U8::from(0xFF_u8)), -1_i8);
	}

	//		from_le_bytes
	#[test]
	fn from_le_bytes__valid() {
		assert_ok_eq!(U32::from_le_bytes(&[0x78, 0x56, 0x34, 0x12]), 0x1234_5678_u32);
		assert_ok_eq!(U24::from_le_bytes(&[0xFF, 0xFF, 0xFF]), U24::max_value());
	}
	#[test]
	fn from_le_bytes__wrong_length() {
		assert_err_eq!(U32::from_le_bytes(&[1, 2, 3]), IntError::InvalidLength(3));
		assert_err_eq!(U32::from_le_bytes(&[1, 2, 3, 4, 5]), IntError::InvalidLength(5));
	}

	//		max_value
	#[test]
	fn max_value__unsigned() {
		assert_eq!(U32::max_value(), u32::MAX);
		assert_eq!(U128::max_value(), u128::MAX);
		assert_ok_eq!(u32::try_from(U24::max_value()), 0x00FF_FFFF_u32);
	}
	#[test]
	fn max_value__signed() {
		assert_eq!(I32::max_value(), i32::MAX);
		assert_eq!(I128::max_value(), i128::MAX);
	}

	//		min_value
	#[test]
	fn min_value__unsigned() {
		assert!(U32::min_value().is_zero());
	}
	#[test]
	fn min_value__signed() {
		assert_eq!(I8::min_value(), i8::MIN);
		assert_eq!(I128::min_value(), i128::MIN);
	}

	//		one
	#[test]
	fn one__value() {
		assert_eq!(U24::one().as_slice(), &[1_u8, 0, 0]);
		assert_eq!(I16::one(), 1_i16);
	}

	//		zero
	#[test]
	fn zero__value() {
		assert!(U128::zero().is_zero());
		assert_eq!(U128::zero().as_slice(), &[0_u8; 16]);
	}
}

mod public_methods {
	use super::*;

	//		bit
	#[test]
	fn bit__normal() {
		let value = U16::from(0x8001_u16);
		assert_ok_eq!(value.bit(0),  true);
		assert_ok_eq!(value.bit(1),  false);
		assert_ok_eq!(value.bit(15), true);
	}
	#[test]
	fn bit__out_of_range() {
		assert_err_eq!(U16::zero().bit(16), IntError::IndexOutOfRange(16));
	}

	//		cast_signed
	#[test]
	fn cast_signed__top_bit() {
		assert_eq!(U16::from(0x8000_u16).cast_signed(), i16::MIN);
	}

	//		cast_unsigned
	#[test]
	fn cast_unsigned__negative() {
		assert_eq!(I16::from(-1_i16).cast_unsigned(), u16::MAX);
	}

	//		is_negative
	#[test]
	fn is_negative__signed() {
		assert!(I32::from(-1_i32).is_negative());
		assert!(!I32::from(0_i32).is_negative());
		assert!(!I32::max_value().is_negative());
	}
	#[test]
	fn is_negative__unsigned() {
		assert!(!U32::max_value().is_negative());
	}

	//		set_bit
	#[test]
	fn set_bit__normal() {
		let mut value = U128::zero();
		assert_ok!(value.set_bit(127, true));
		assert_eq!(value, 1_u128 << 127);
		assert_ok!(value.set_bit(127, false));
		assert!(value.is_zero());
	}
	#[test]
	fn set_bit__sign() {
		let mut value = I8::zero();
		assert_ok!(value.set_bit(7, true));
		assert!(value.is_negative());
		assert_eq!(value, i8::MIN);
	}
	#[test]
	fn set_bit__out_of_range() {
		let mut value = U8::from(5_u8);
		assert_err_eq!(value.set_bit(8, true), IntError::IndexOutOfRange(8));
		assert_eq!(value, 5_u8);
	}

	//		swap_bytes
	#[test]
	fn swap_bytes__u128() {
		assert_eq!(
			U128::from(0x1234_5678_u128).swap_bytes(),
			0x7856_3412_0000_0000_0000_0000_0000_0000_u128,
		);
	}
	#[test]
	fn swap_bytes__involution() {
		let value = U256::from(0x0123_4567_89AB_CDEF_u64);
		assert_ne!(value.swap_bytes(), value);
		assert_eq!(value.swap_bytes().swap_bytes(), value);
	}

	//		to_be_bytes
	#[test]
	fn to_be_bytes__order() {
		assert_eq!(U32::from(0x1234_5678_u32).to_be_bytes().to_vec(), vec![0x12_u8, 0x34, 0x56, 0x78]);
	}

	//		to_le_bytes
	#[test]
	fn to_le_bytes__order() {
		assert_eq!(U32::from(0x1234_5678_u32).to_le_bytes().to_vec(), vec![0x78_u8, 0x56, 0x34, 0x12]);
	}
}

mod traits {
	use super::*;

	//		Clone
	#[test]
	fn clone__equal() {
		let value = I128::from(-7_i8);
		#[allow(clippy::clone_on_copy, reason = "Testing the Clone implementation")]
		let clone = value.clone();
		assert_eq!(clone, value);
	}

	//		Copy
	#[test]
	fn copy__independent() {
		let value    = U32::from(1_u32);
		let mut copy = value;
		copy.increment();
		assert_eq!(value, 1_u32);
		assert_eq!(copy,  2_u32);
	}
}

mod conversions {
	use super::*;

	//		TryFrom: Int -> native
	#[test]
	fn try_from__fits() {
		assert_ok_eq!(u8::try_from(U256::from(255_u8)), 255_u8);
		assert_ok_eq!(i8::try_from(I128::from(-128_i8)), -128_i8);
		assert_ok_eq!(i128::try_from(I16::from(-300_i16)), -300_i128);
		assert_ok_eq!(u128::try_from(U32::max_value()), u128::from(u32::MAX));
	}
	#[test]
	fn try_from__too_large() {
		assert_err_eq!(u8::try_from(U256::from(256_u16)), IntError::CapacityOverflow);
		assert_err_eq!(i8::try_from(I32::from(128_i32)), IntError::CapacityOverflow);
		assert_err_eq!(i8::try_from(I32::from(-129_i32)), IntError::CapacityOverflow);
		assert_err_eq!(i32::try_from(U32::max_value()), IntError::CapacityOverflow);
	}
	#[test]
	fn try_from__negative_into_unsigned() {
		assert_err_eq!(u64::try_from(I32::from(-1_i32)), IntError::SignNotAllowed);
	}
}


