//		Packages

use super::*;
use crate::{SInt, UInt};
use claims::{assert_err, assert_err_eq, assert_ok_eq};
use rubedo::sugar::s;
use typenum::consts;



//		Type aliases

type I8   = SInt<consts::U8>;
type I16  = SInt<consts::U16>;
type I32  = SInt<consts::U32>;
type I64  = SInt<consts::U64>;
type I128 = SInt<consts::U128>;
type U8   = UInt<consts::U8>;
type U16  = UInt<consts::U16>;
type U32  = UInt<consts::U32>;
type U64  = UInt<consts::U64>;
type U128 = UInt<consts::U128>;
type U256 = UInt<consts::U256>;



//		Tests

mod constructors {
	use super::*;

	//		from_json
	#[test]
	fn from_json__number() {
		assert_ok_eq!(U32::from_json("42"), 42_u32);
		assert_ok_eq!(I128::from_json("-5"), -5_i8);
	}
	#[test]
	fn from_json__string() {
		assert_ok_eq!(U128::from_json(r#""0xff""#), 255_u8);
		assert_ok_eq!(I128::from_json(r#""-170141183460469231731687303715884105728""#), i128::MIN);
	}
	#[test]
	fn from_json__out_of_range() {
		assert_err!(I8::from_json("200"));
		assert_err!(U8::from_json("-1"));
		assert_err!(U16::from_json("65536"));
	}

	//		parse
	#[test]
	fn parse__decimal() {
		assert_ok_eq!(I128::parse("123456789"),  123_456_789_i32);
		assert_ok_eq!(I128::parse("-123456789"), -123_456_789_i32);
		assert_ok_eq!(U8::parse("255"), u8::MAX);
		assert_ok_eq!(U16::parse("0"), 0_u16);
	}
	#[test]
	fn parse__hexadecimal() {
		assert_ok_eq!(U32::parse("0x1a2b3c4d"), 0x1A2B_3C4D_u32);
		assert_ok_eq!(U32::parse("0X1A2B3C4D"), 0x1A2B_3C4D_u32);
		assert_ok_eq!(I32::parse("-0x10"), -16_i32);
	}
	#[test]
	fn parse__binary() {
		assert_ok_eq!(U8::parse("0b10101010"), 0xAA_u8);
		assert_ok_eq!(U8::parse("0B11"), 3_u8);
	}
	#[test]
	fn parse__octal() {
		assert_ok_eq!(U32::parse("0361100"), 123_456_u32);
		assert_ok_eq!(U32::parse("010"), 8_u32);
	}
	#[test]
	fn parse__short_leading_zero_is_decimal() {
		assert_ok_eq!(U32::parse("07"), 7_u32);
		assert_ok_eq!(U32::parse("00"), 0_u32);
	}
	#[test]
	fn parse__separators() {
		assert_ok_eq!(U64::parse("1'000'000"), 1_000_000_u64);
		assert_ok_eq!(U64::parse("1 000"), 1_000_u64);
		assert_ok_eq!(U32::parse("0xdead'beef"), 0xDEAD_BEEF_u32);
	}
	#[test]
	fn parse__bit_pattern() {
		assert_ok_eq!(I32::parse("0xFFFFFFFF"), -1_i32);
	}
	#[test]
	fn parse__signed_limits() {
		assert_ok_eq!(I8::parse("-128"), i8::MIN);
		assert_ok_eq!(I8::parse("127"), i8::MAX);
		assert_ok_eq!(I128::parse("-170141183460469231731687303715884105728"), i128::MIN);
		assert_err_eq!(I8::parse("-129"), IntError::CapacityOverflow);
	}
	#[test]
	fn parse__wide() {
		assert_ok_eq!(
			U256::parse("115792089237316195423570985008687907853269984665640564039457584007913129639935"),
			U256::max_value(),
		);
	}
	#[test]
	fn parse__capacity_overflow() {
		assert_err_eq!(U8::parse("256"),   IntError::CapacityOverflow);
		assert_err_eq!(U8::parse("0x100"), IntError::CapacityOverflow);
		assert_err_eq!(U8::parse("1000"),  IntError::CapacityOverflow);
	}
	#[test]
	fn parse__empty() {
		assert_err_eq!(U32::parse(""),  IntError::EmptyValue);
		assert_err_eq!(I32::parse("-"), IntError::EmptyValue);
	}
	#[test]
	fn parse__sign_not_allowed() {
		assert_err_eq!(U32::parse("-5"), IntError::SignNotAllowed);
		assert_err_eq!(U32::parse("-"),  IntError::SignNotAllowed);
	}
	#[test]
	fn parse__invalid_digit() {
		assert_err_eq!(U32::parse("12z"),    IntError::InvalidDigit('z'));
		assert_err_eq!(U32::parse("0x12g"),  IntError::InvalidDigit('g'));
		assert_err_eq!(I32::parse("+5"),     IntError::InvalidDigit('+'));
	}
	#[test]
	fn parse__digit_out_of_range() {
		assert_err_eq!(U32::parse("019"),   IntError::DigitOutOfRange('9', 8));
		assert_err_eq!(U32::parse("12a"),   IntError::DigitOutOfRange('a', 10));
		assert_err_eq!(U8::parse("0b102"),  IntError::DigitOutOfRange('2', 2));
	}
	#[test]
	fn parse__error_messages() {
		assert_eq!(U32::parse("").unwrap_err().to_string(),    s!("Empty value"));
		assert_eq!(U32::parse("12z").unwrap_err().to_string(), s!("Invalid digit: z"));
		assert_eq!(U32::parse("019").unwrap_err().to_string(), s!("Invalid digit for base 8: 9"));
	}
}

mod public_methods {
	use super::*;

	//		to_json
	#[test]
	fn to_json__number() {
		assert_ok_eq!(U32::from(42_u32).to_json(), s!("42"));
		assert_ok_eq!(I64::from(-5_i64).to_json(), s!("-5"));
	}
	#[test]
	fn to_json__string() {
		assert_ok_eq!(U128::from(123_u8).to_json(), s!(r#""123""#));
		assert_ok_eq!(I128::from(-1_i8).to_json(), s!(r#""-1""#));
	}
	#[test]
	fn to_json__round_trip_wide() {
		let value = U256::max_value();
		assert_ok_eq!(U256::from_json(&value.to_json().unwrap()), value);
	}

	//		to_string_radix
	#[test]
	fn to_string_radix__decimal() {
		assert_eq!(I128::from(123_456_789_i32).to_string_radix(Base::Decimal, false),  s!("123456789"));
		assert_eq!(I128::from(-123_456_789_i32).to_string_radix(Base::Decimal, false), s!("-123456789"));
		assert_eq!(U32::zero().to_string_radix(Base::Decimal, false), s!("0"));
	}
	#[test]
	fn to_string_radix__hexadecimal() {
		assert_eq!(U32::from(0x1A2B_3C4D_u32).to_string_radix(Base::Hexadecimal, false), s!("1a2b3c4d"));
		assert_eq!(U32::from(0x1A2B_3C4D_u32).to_string_radix(Base::Hexadecimal, true),  s!("1A2B3C4D"));
		assert_eq!(U32::from(0x0F_u32).to_string_radix(Base::Hexadecimal, false),        s!("0f"));
		assert_eq!(U32::from(0x0100_u32).to_string_radix(Base::Hexadecimal, false),      s!("0100"));
	}
	#[test]
	fn to_string_radix__hexadecimal_zero() {
		assert_eq!(U128::zero().to_string_radix(Base::Hexadecimal, false), s!("00"));
	}
	#[test]
	fn to_string_radix__hexadecimal_negative() {
		assert_eq!(I16::from(-1_i16).to_string_radix(Base::Hexadecimal, false), s!("ffff"));
		assert_eq!(
			I128::from(-123_456_789_i32).to_string_radix(Base::Hexadecimal, false),
			s!("fffffffffffffffffffffffff8a432eb"),
		);
	}
	#[test]
	fn to_string_radix__octal() {
		assert_eq!(U32::from(123_456_u32).to_string_radix(Base::Octal, false), s!("361100"));
		assert_eq!(U32::zero().to_string_radix(Base::Octal, false),            s!("0"));
		assert_eq!(I8::from(-1_i8).to_string_radix(Base::Octal, false),        s!("377"));
	}
	#[test]
	fn to_string_radix__round_trip() {
		let value = I64::from(-987_654_321_i64);
		assert_ok_eq!(I64::parse(&value.to_string_radix(Base::Decimal, false)), value);
		let value = U64::from(0xDEAD_BEEF_u64);
		let hex   = value.to_string_radix(Base::Hexadecimal, false);
		assert_ok_eq!(U64::parse(&format!("0x{hex}")), value);
		let octal = value.to_string_radix(Base::Octal, false);
		assert_ok_eq!(U64::parse(&format!("0{octal}")), value);
	}
}

mod traits {
	use super::*;

	//		Debug
	#[test]
	fn debug__format() {
		assert_eq!(format!("{:?}", I32::from(-5_i32)), s!("Int::<32, true>(-5)"));
		assert_eq!(format!("{:?}", U128::from(7_u8)),  s!("Int::<128, false>(7)"));
	}

	//		Display
	#[test]
	fn display__values() {
		assert_eq!(I32::from(-42_i32).to_string(),   s!("-42"));
		assert_eq!(I8::min_value().to_string(),      s!("-128"));
		assert_eq!(U128::max_value().to_string(),    u128::MAX.to_string());
		assert_eq!(I128::min_value().to_string(),    i128::MIN.to_string());
		assert_eq!(U16::zero().to_string(),          s!("0"));
	}
	#[test]
	fn display__padding() {
		assert_eq!(format!("{:>6}", U8::from(42_u8)),  s!("    42"));
		assert_eq!(format!("{:06}", I16::from(-42_i16)), s!("-00042"));
		assert_eq!(format!("{:+}", I8::from(5_i8)),    s!("+5"));
	}

	//		FromStr
	#[test]
	fn from_str__normal() {
		assert_ok_eq!("42".parse::<U16>(), 42_u16);
		assert_err_eq!("".parse::<U16>(), IntError::EmptyValue);
	}

	//		LowerHex
	#[test]
	fn lower_hex__format() {
		assert_eq!(format!("{:x}", U32::from(255_u32)),    s!("ff"));
		assert_eq!(format!("{:#x}", U32::from(255_u32)),   s!("0xff"));
		assert_eq!(format!("{:08x}", U16::from(0xAB_u16)), s!("000000ab"));
	}

	//		Octal
	#[test]
	fn octal__format() {
		assert_eq!(format!("{:o}", U16::from(8_u16)),  s!("10"));
		assert_eq!(format!("{:#o}", U16::from(8_u16)), s!("0o10"));
	}

	//		UpperHex
	#[test]
	fn upper_hex__format() {
		assert_eq!(format!("{:X}", U32::from(0xBEEF_u32)),  s!("BEEF"));
		assert_eq!(format!("{:#X}", I16::from(-2_i16)),     s!("0xFFFE"));
	}
}


