//! Stream-style reading and writing of integers.
//!
//! Writing follows a set of [`FormatOptions`], and reading goes through a
//! [`TokenReader`], which records failures in a sticky status flag instead of
//! returning them.



//		Modules

#[cfg(test)]
#[path = "tests/stream.rs"]
mod tests;



//		Packages

use crate::{codec::Base, errors::IntError, int::Int, width::BitWidth};
use core::{fmt, str::SplitWhitespace};
use log::debug;



//		Structs

//		FormatOptions
/// The formatting flags applied when writing integers as text.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct FormatOptions {
	/// The base to write digits in.
	pub base:      Base,

	/// Whether hexadecimal digits are written in upper case.
	pub uppercase: bool,
}

//󰭅		FormatOptions
impl FormatOptions {
	//		new
	/// Creates options for the given base, with lower-case digits.
	#[must_use]
	pub const fn new(base: Base) -> Self {
		Self { base, uppercase: false }
	}

	//		with_uppercase
	/// Sets whether hexadecimal digits are written in upper case.
	#[must_use]
	pub const fn with_uppercase(mut self, uppercase: bool) -> Self {
		self.uppercase = uppercase;
		self
	}
}

//		TokenReader
/// Reads whitespace-separated integers from text.
///
/// Each read takes the next token and parses it in the reader's current base.
/// If the token is rejected, the destination is set to zero and the reader is
/// marked as failed. A failed reader, or one with no tokens left, leaves its
/// destinations untouched until [`clear()`](TokenReader::clear()) is called.
///
/// # Examples
///
/// ```
/// use fixint::{Base, SInt, TokenReader, typenum::U64};
///
/// let mut reader = TokenReader::new("-42 2a");
/// let mut a      = SInt::<U64>::zero();
/// let mut b      = SInt::<U64>::zero();
/// reader.read(&mut a).set_base(Base::Hexadecimal).read(&mut b);
///
/// assert!(!reader.is_failed());
/// assert_eq!(a, -42_i64);
/// assert_eq!(b, 42_i64);
/// ```
///
#[derive(Clone, Debug)]
pub struct TokenReader<'a> {
	/// The remaining tokens.
	tokens: SplitWhitespace<'a>,

	/// The base that tokens are parsed in.
	base:   Base,

	/// Whether a read has failed since the last clear.
	failed: bool,
}

//󰭅		TokenReader
impl<'a> TokenReader<'a> {
	//		new
	/// Creates a reader over the given text, parsing decimal by default.
	///
	/// # Parameters
	///
	/// * `input` - The text to read tokens from.
	///
	#[must_use]
	pub fn new(input: &'a str) -> Self {
		Self {
			tokens: input.split_whitespace(),
			base:   Base::default(),
			failed: false,
		}
	}

	//		base
	/// The base that tokens are currently parsed in.
	#[must_use]
	pub const fn base(&self) -> Base {
		self.base
	}

	//		clear
	/// Resets the failed status so that reading can continue.
	pub fn clear(&mut self) {
		self.failed = false;
	}

	//		is_failed
	/// Whether a read has failed since the reader was created or last cleared.
	#[must_use]
	pub const fn is_failed(&self) -> bool {
		self.failed
	}

	//		read
	/// Reads the next token into `dest`.
	///
	/// Decimal tokens follow the full literal grammar of
	/// [`Int::parse()`](Int::parse()), prefixes included. Octal and hexadecimal
	/// tokens must be bare digits, and cannot be negative.
	///
	/// # Parameters
	///
	/// * `dest` - Where to store the value read.
	///
	pub fn read<BITS, const SIGNED: bool>(&mut self, dest: &mut Int<BITS, SIGNED>) -> &mut Self
	where
		BITS: BitWidth,
	{
		if self.failed {
			return self;
		}
		let Some(token) = self.tokens.next() else {
			debug!("No token left to read");
			self.failed = true;
			return self;
		};
		match Int::from_token(token, self.base) {
			Ok(value) => *dest = value,
			Err(err)  => {
				debug!("Rejected integer token {token:?}: {err}");
				*dest       = Int::zero();
				self.failed = true;
			},
		}
		self
	}

	//		set_base
	/// Changes the base that subsequent tokens are parsed in.
	pub fn set_base(&mut self, base: Base) -> &mut Self {
		self.base = base;
		self
	}
}

//󰭅		Int
impl<BITS, const SIGNED: bool> Int<BITS, SIGNED>
where
	BITS: BitWidth,
{
	//		from_token
	/// Parses a single token in the given base.
	///
	/// # Parameters
	///
	/// * `token` - The text to parse.
	/// * `base`  - The base to parse in.
	///
	/// # Errors
	///
	/// Decimal tokens fail as for [`parse()`](Int::parse()). Octal and
	/// hexadecimal tokens fail with [`IntError::SignNotAllowed`] for a leading
	/// `-`, and otherwise as for the digits of a literal.
	///
	pub fn from_token(token: &str, base: Base) -> Result<Self, IntError> {
		match base {
			Base::Decimal                   => Self::parse(token),
			Base::Octal | Base::Hexadecimal => {
				if token.is_empty() {
					return Err(IntError::EmptyValue);
				}
				if token.starts_with('-') {
					return Err(IntError::SignNotAllowed);
				}
				Self::parse_digits(token, base.radix())
			},
		}
	}

	//		write_to
	/// Writes the value to a text sink using the given options.
	///
	/// # Parameters
	///
	/// * `out`     - The sink to write to.
	/// * `options` - The base and case to write in.
	///
	/// # Errors
	///
	/// Returns any error raised by the sink.
	///
	pub fn write_to<W>(self, out: &mut W, options: FormatOptions) -> fmt::Result
	where
		W: fmt::Write,
	{
		out.write_str(&self.to_string_radix(options.base, options.uppercase))
	}
}


