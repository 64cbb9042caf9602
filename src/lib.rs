//! The Fixint crate provides fixed-width integers of any whole-byte bit width,
//! signed or unsigned, that behave like the native integer types.
//!
//! The widths are [`typenum`] types, so `Int<U256, false>` (or
//! `UInt<U256>`) is a 256-bit unsigned integer, and `SInt<U24>` a 24-bit
//! signed one. Values use exact two's-complement arithmetic, mix freely with
//! each other and with native integers in arithmetic and comparisons, and
//! convert to and from decimal, hexadecimal, octal and binary text.
//!
//! ```
//! use fixint::{SInt, UInt, typenum::{U128, U256}};
//!
//! let a: UInt<U256> = "0xffffffffffffffffffffffffffffffff".parse().unwrap();
//! let b             = SInt::<U128>::from(-1_i8);
//!
//! assert_eq!((a + 1_u8).to_string(), "340282366920938463463374607431768211456");
//! assert!(b < a);
//! ```



//		Global configuration

//	Customisations of the standard linting configuration
#![allow(clippy::items_after_test_module, reason = "Not needed with separated tests")]

//	Lints specifically disabled for unit tests
#![cfg_attr(test, allow(
	non_snake_case,
	clippy::arithmetic_side_effects,
	clippy::cast_lossless,
	clippy::cognitive_complexity,
	clippy::default_numeric_fallback,
	clippy::expect_used,
	clippy::indexing_slicing,
	clippy::let_underscore_must_use,
	clippy::let_underscore_untyped,
	clippy::missing_assert_message,
	clippy::missing_panics_doc,
	clippy::must_use_candidate,
	clippy::panic,
	clippy::unreadable_literal,
	clippy::unwrap_in_result,
	clippy::unwrap_used,
	reason = "Not useful in unit tests"
))]



//		Modules

mod arith;
mod cmp;
mod codec;
mod errors;
mod int;
mod stream;
mod width;



//		Packages

pub use codec::Base;
pub use errors::IntError;
pub use int::{Int, SInt, UInt};
pub use stream::{FormatOptions, TokenReader};
pub use width::BitWidth;

pub use typenum;


