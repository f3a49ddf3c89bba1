//! Arbitrary-precision unsigned integer type.

//	This lint check is unnecessary in this module because the arithmetic here
//	is either on word counts and bit counts, which cannot realistically
//	overflow, or is delegated to the word kernels.
#![allow(clippy::arithmetic_side_effects, reason = "Counts of words and bits cannot overflow")]
#![allow(clippy::as_conversions,          reason = "Primitive conversions are checked or widening")]



//		Modules

#[cfg(test)]
#[path = "tests/biguint.rs"]
mod tests;



//		Packages

use crate::{
	bigint::BigInt,
	errors::ConversionError,
	radix,
	words::{self, WORD_BITS, Word, WordBuffer},
};
use bytes::BytesMut;
use core::{
	cmp::Ordering,
	error::Error,
	fmt::{Binary, Debug, Display, Formatter, LowerHex, Octal, UpperHex, self},
	ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Rem, RemAssign, Sub, SubAssign},
	ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Not, Shl, ShlAssign, Shr, ShrAssign},
	str::FromStr,
};
use serde::{
	Deserialize,
	Deserializer,
	Serialize,
	Serializer,
	de::{Error as SerdeError, Visitor},
};
use serde_json::Error as JsonError;
use std::io::{Error as IoError, ErrorKind as IoErrorKind};
use tokio_postgres::types::{FromSql, IsNull, ToSql, Type, to_sql_checked};



//		Constants

/// Magnitude below which every integral [`f64`] is exact. Deserialisers hand
/// over integer literals beyond the native range as floats that have already
/// been rounded, so anything at or above this is refused.
pub(crate) const MAX_EXACT_FLOAT: f64 = 9_007_199_254_740_992.0;



//		Traits

//		ShiftDistance															
/// A primitive integer that can be used as a shift distance.
/// 
/// Shifting by a negative distance shifts by its absolute value in the
/// opposite direction. Distances too large for a [`usize`] saturate, which
/// for a right shift yields zero, and for a left shift of a non-zero value
/// exhausts memory.
/// 
pub trait ShiftDistance: Copy {
	//		split																
	/// Splits the distance into its direction (`true` when negative) and its
	/// absolute value.
	fn split(self) -> (bool, usize);
}

macro_rules! impl_shift_distance_unsigned {
	($($t:ty),*) => {$(
		impl ShiftDistance for $t {
			fn split(self) -> (bool, usize) {
				(false, usize::try_from(self).unwrap_or(usize::MAX))
			}
		}
	)*};
}

macro_rules! impl_shift_distance_signed {
	($($t:ty),*) => {$(
		impl ShiftDistance for $t {
			fn split(self) -> (bool, usize) {
				(self < 0, usize::try_from(self.unsigned_abs()).unwrap_or(usize::MAX))
			}
		}
	)*};
}

impl_shift_distance_unsigned!(u8, u16, u32, u64, u128, usize);
impl_shift_distance_signed!(i8, i16, i32, i64, i128, isize);



//		Structs

//		BigUInt																	
/// An unsigned integer of unbounded magnitude.
/// 
/// # Representation
/// 
/// The value is stored as a little-endian sequence of 64-bit [`Word`]s,
/// least-significant word first, in canonical form: there is always at least
/// one word, and the most-significant word is never zero unless the value
/// itself is zero, in which case the sequence is exactly `[0]`. Because every
/// operation produces a canonical result, equality, ordering, and hashing are
/// all structural over the words.
/// 
/// For example, the value `2^64 + 5`:
/// 
/// ```text
/// Words:  [0x0000_0000_0000_0005, 0x0000_0000_0000_0001]
///          word 0 (LSW)           word 1 (MSW)
/// ```
/// 
/// # Arithmetic
/// 
/// Values are immutable; every operation returns a new value. The operators
/// are implemented for both owned and borrowed operands, so `&a + &b` avoids
/// consuming either side.
/// 
/// Following the behaviour of the standard integer types, the operations
/// that have no unsigned result panic:
/// 
///   1. Subtraction panics if the result would be negative. Use
///      [`checked_sub()`](BigUInt::checked_sub()) to avoid this.
///   2. Division and remainder panic if the divisor is zero. Use
///      [`checked_div()`](BigUInt::checked_div()) and
///      [`checked_rem()`](BigUInt::checked_rem()) to avoid this.
/// 
/// # Bitwise operations
/// 
/// AND, OR, and XOR act word by word, with the shorter operand implicitly
/// zero-extended. NOT is a finite-width complement over the words the value
/// currently occupies, e.g. `!BigUInt::from(1_u8)` is `2^64 - 2`, so it is not
/// an involution for values whose complement has leading zero words.
/// 
/// # Conversion
/// 
/// [`From`] is implemented for all unsigned primitives, and [`TryFrom`] for
/// all signed primitives. Conversion back to any primitive uses [`TryFrom`],
/// failing with [`ConversionError::ValueTooLarge`] if the value does not fit.
/// Text conversion supports every radix from 2 to 36.
/// 
#[derive(Clone, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct BigUInt(WordBuffer);

//󰭅		BigUInt																	
impl BigUInt {
	//		Constructors														
	
	//		from_be_bytes														
	/// Creates a [`BigUInt`] from big-endian bytes.
	/// 
	/// An empty slice gives zero.
	/// 
	/// # Parameters
	/// 
	/// * `bytes` - The bytes to read, most-significant first.
	/// 
	#[must_use]
	pub fn from_be_bytes(bytes: &[u8]) -> Self {
		let reversed: Vec<u8> = bytes.iter().rev().copied().collect();
		Self::from_le_bytes(&reversed)
	}
	
	//		from_f64															
	/// Creates a [`BigUInt`] from a floating-point value, truncating any
	/// fractional part.
	/// 
	/// # Parameters
	/// 
	/// * `value` - The value to convert.
	/// 
	/// # Panics
	/// 
	/// Panics if the value is infinite, NaN, or negative.
	/// 
	#[must_use]
	pub fn from_f64(value: f64) -> Self {
		assert!(value.is_finite(), "Value cannot be converted to BigUInt because it is either infinite or NaN");
		assert!(value >= 0.0,      "Value cannot be converted to BigUInt because it is negative");
		Self::from_f64_exact(value.trunc()).unwrap_or_default()
	}
	
	//		from_f64_exact														
	/// Creates a [`BigUInt`] from a floating-point value that holds an
	/// integer exactly.
	/// 
	/// # Parameters
	/// 
	/// * `value` - The value to convert.
	/// 
	/// # Errors
	/// 
	/// Returns [`ConversionError::NotAnInteger`] if the value is not finite or
	/// has a fractional part, and [`ConversionError::ValueIsNegative`] if it is
	/// less than zero.
	/// 
	#[allow(clippy::float_cmp, reason = "An exact fractional part of zero is required")]
	pub fn from_f64_exact(value: f64) -> Result<Self, ConversionError> {
		if !value.is_finite() {
			return Err(ConversionError::NotAnInteger);
		}
		if value < 0.0 {
			return Err(ConversionError::ValueIsNegative);
		}
		if value.fract() != 0.0 {
			return Err(ConversionError::NotAnInteger);
		}
		if value == 0.0 {
			return Ok(Self::zero());
		}
		
		//	Any non-zero integral value is normal, so the implicit leading bit is set
		let bits     = value.to_bits();
		let biased   = (bits >> 52) & 0x7FF;
		let mantissa = Self::from((bits & ((1 << 52) - 1)) | (1 << 52));
		if biased >= 1075 {
			Ok(mantissa << (biased - 1075))
		} else {
			Ok(mantissa >> (1075 - biased))
		}
	}
	
	//		from_le_bytes														
	/// Creates a [`BigUInt`] from little-endian bytes.
	/// 
	/// An empty slice gives zero.
	/// 
	/// # Parameters
	/// 
	/// * `bytes` - The bytes to read, least-significant first.
	/// 
	#[must_use]
	pub fn from_le_bytes(bytes: &[u8]) -> Self {
		Self::from_words(
			bytes.chunks(8)
				.map(|chunk| {
					let mut word = [0_u8; 8];
					word.iter_mut().zip(chunk).for_each(|(dest, src)| *dest = *src);
					Word::from_le_bytes(word)
				})
				.collect()
		)
	}
	
	//		from_json															
	/// Creates a [`BigUInt`] from a JSON number or string.
	/// 
	/// # Parameters
	/// 
	/// * `json` - The JSON text to parse.
	/// 
	/// # Errors
	/// 
	/// Returns an error if the JSON is malformed or does not hold a
	/// non-negative integer.
	/// 
	pub fn from_json(json: &str) -> Result<Self, JsonError> {
		serde_json::from_str(json)
	}
	
	//		from_str_radix														
	/// Parses a [`BigUInt`] from text in the given radix.
	/// 
	/// Digits beyond `9` are the letters `a` to `z`, in either case. No sign,
	/// prefix, or separator is accepted.
	/// 
	/// # Parameters
	/// 
	/// * `text`  - The digits to parse, most-significant first.
	/// * `radix` - The radix, from 2 to 36.
	/// 
	/// # Errors
	/// 
	/// Returns [`ConversionError::EmptyValue`] if there are no digits, and
	/// [`ConversionError::InvalidDigit`] or [`ConversionError::InvalidRadix`] if
	/// any character is not a digit in the radix.
	/// 
	/// # Panics
	/// 
	/// Panics if the radix is outside the range 2 to 36.
	/// 
	pub fn from_str_radix(text: &str, radix: u32) -> Result<Self, ConversionError> {
		radix::parse(text, radix)
	}
	
	//		from_words															
	/// Creates a [`BigUInt`] from little-endian words.
	/// 
	/// Any high-order zero words are trimmed, and an empty vector gives zero.
	/// 
	/// # Parameters
	/// 
	/// * `words` - The words, least-significant first.
	/// 
	#[must_use]
	pub fn from_words(words: Vec<Word>) -> Self {
		Self(WordBuffer::from_vec(words))
	}
	
	//		clamping															
	/// Creates a [`BigUInt`] from a signed primitive, clamping negative values
	/// to zero.
	/// 
	/// # Parameters
	/// 
	/// * `value` - The value to convert.
	/// 
	#[must_use]
	pub fn clamping<T: Into<i128>>(value: T) -> Self {
		let value = value.into();
		if value < 0 {
			Self::zero()
		} else {
			Self::from(value.unsigned_abs())
		}
	}
	
	//		one																	
	/// The value one.
	#[must_use]
	pub fn one() -> Self {
		Self::from_words(vec![1])
	}
	
	//		zero																
	/// The value zero.
	#[must_use]
	pub fn zero() -> Self {
		Self(WordBuffer::zero())
	}
	
	//		Public methods														
	
	//		advanced_by															
	/// Returns the value offset by a signed step.
	/// 
	/// # Parameters
	/// 
	/// * `n` - The step to add, which may be negative.
	/// 
	/// # Panics
	/// 
	/// Panics if the result would be negative.
	/// 
	#[must_use]
	pub fn advanced_by(&self, n: &BigInt) -> Self {
		if n.is_negative() {
			self - n.magnitude()
		} else {
			self + n.magnitude()
		}
	}
	
	//		bit																	
	/// Gets the value of a specific bit.
	/// 
	/// Returns `false` for any position beyond the stored words.
	/// 
	/// # Parameters
	/// 
	/// * `pos` - The position of the bit to get, where `0` is the
	///           least-significant bit.
	/// 
	#[must_use]
	pub fn bit(&self, pos: u64) -> bool {
		words::get_bit(self.words(), pos)
	}
	
	//		bit_width															
	/// The number of bits in the stored words, i.e. the word count times 64.
	/// 
	/// This is a property of the representation, not of the value: zero has a
	/// bit width of 64, since it occupies one word.
	/// 
	#[must_use]
	pub fn bit_width(&self) -> u64 {
		self.0.len() as u64 * u64::from(WORD_BITS)
	}
	
	//		checked_div															
	/// Checked division.
	/// 
	/// Computes `self / rhs`, returning [`None`] if `rhs` is zero.
	/// 
	/// # Parameters
	/// 
	/// * `rhs` - The value to divide `self` by.
	/// 
	#[must_use]
	pub fn checked_div(&self, rhs: &Self) -> Option<Self> {
		(!rhs.is_zero()).then(|| self.div_rem(rhs).0)
	}
	
	//		checked_rem															
	/// Checked remainder.
	/// 
	/// Computes `self % rhs`, returning [`None`] if `rhs` is zero.
	/// 
	/// # Parameters
	/// 
	/// * `rhs` - The value to divide `self` by.
	/// 
	#[must_use]
	pub fn checked_rem(&self, rhs: &Self) -> Option<Self> {
		(!rhs.is_zero()).then(|| self.div_rem(rhs).1)
	}
	
	//		checked_sub															
	/// Checked subtraction.
	/// 
	/// Computes `self - rhs`, returning [`None`] if the result would be
	/// negative.
	/// 
	/// # Parameters
	/// 
	/// * `rhs` - The value to subtract from `self`.
	/// 
	#[must_use]
	pub fn checked_sub(&self, rhs: &Self) -> Option<Self> {
		match self.cmp(rhs) {
			Ordering::Less    => None,
			Ordering::Equal   => Some(Self::zero()),
			Ordering::Greater => Some(Self::from_words(words::sub(self.words(), rhs.words()))),
		}
	}
	
	//		distance_to															
	/// Returns the signed distance from `self` to `other`, i.e.
	/// `other - self`.
	/// 
	/// # Parameters
	/// 
	/// * `other` - The value to measure to.
	/// 
	#[must_use]
	pub fn distance_to(&self, other: &Self) -> BigInt {
		if self > other {
			BigInt::from_parts(true, self - other)
		} else {
			BigInt::from_parts(false, other - self)
		}
	}
	
	//		div_rem																
	/// Computes the quotient and remainder of `self / rhs` together.
	/// 
	/// # Parameters
	/// 
	/// * `rhs` - The value to divide `self` by.
	/// 
	/// # Panics
	/// 
	/// Panics if `rhs` is zero.
	/// 
	#[must_use]
	pub fn div_rem(&self, rhs: &Self) -> (Self, Self) {
		assert!(!rhs.is_zero(), "Attempt to divide by zero");
		
		match self.cmp(rhs) {
			Ordering::Less    => return (Self::zero(), self.clone()),
			Ordering::Equal   => return (Self::one(),  Self::zero()),
			Ordering::Greater => {},
		}
		
		//	A one-word divisor can use native double-word division
		if let [divisor] = rhs.words() {
			let (quotient, remainder) = words::div_rem_word(self.words(), *divisor);
			return (Self::from_words(quotient), Self::from(remainder));
		}
		
		let (quotient, remainder) = words::div_rem(self.words(), rhs.words());
		(Self::from_words(quotient), Self::from_words(remainder))
	}
	
	//		into_words															
	/// Consumes the value, returning its canonical little-endian words.
	#[must_use]
	pub fn into_words(self) -> Vec<Word> {
		self.0.into_vec()
	}
	
	//		is_multiple_of														
	/// Whether `self` is an exact multiple of `other`.
	/// 
	/// Zero is only a multiple of zero, and everything is a multiple of one.
	/// 
	/// # Parameters
	/// 
	/// * `other` - The potential divisor.
	/// 
	#[must_use]
	pub fn is_multiple_of(&self, other: &Self) -> bool {
		if other.is_zero() {
			return self.is_zero();
		}
		if other.is_one() {
			return true;
		}
		if other.words() == [2] {
			return !self.bit(0);
		}
		(self % other).is_zero()
	}
	
	//		is_one																
	/// Whether the value is one.
	#[must_use]
	pub fn is_one(&self) -> bool {
		self.words() == [1]
	}
	
	//		is_zero																
	/// Whether the value is zero.
	#[must_use]
	pub fn is_zero(&self) -> bool {
		self.0.is_zero()
	}
	
	//		signum																
	/// Returns zero for zero, and one for anything else.
	#[must_use]
	pub fn signum(&self) -> Self {
		if self.is_zero() { Self::zero() } else { Self::one() }
	}
	
	//		to_be_bytes															
	/// Returns the value as big-endian bytes, without leading zero bytes.
	/// 
	/// Zero is returned as a single zero byte.
	/// 
	#[must_use]
	pub fn to_be_bytes(&self) -> Vec<u8> {
		let mut bytes = self.to_le_bytes();
		bytes.reverse();
		bytes
	}
	
	//		to_json																
	/// Serialises the value to JSON.
	/// 
	/// Values that fit in a [`u64`] are written as numbers, and larger values
	/// as decimal strings.
	/// 
	/// # Errors
	/// 
	/// Returns an error if serialisation fails.
	/// 
	pub fn to_json(&self) -> Result<String, JsonError> {
		serde_json::to_string(self)
	}
	
	//		to_le_bytes															
	/// Returns the value as little-endian bytes, without trailing zero bytes.
	/// 
	/// Zero is returned as a single zero byte.
	/// 
	#[must_use]
	pub fn to_le_bytes(&self) -> Vec<u8> {
		let mut bytes: Vec<u8> = self.words().iter().flat_map(|word| word.to_le_bytes()).collect();
		while bytes.len() > 1 && bytes.last() == Some(&0) {
			_ = bytes.pop();
		}
		bytes
	}
	
	//		to_str_radix														
	/// Formats the value as text in the given radix.
	/// 
	/// Digits beyond `9` are written as lowercase letters.
	/// 
	/// # Parameters
	/// 
	/// * `radix` - The radix, from 2 to 36.
	/// 
	/// # Panics
	/// 
	/// Panics if the radix is outside the range 2 to 36.
	/// 
	#[must_use]
	pub fn to_str_radix(&self, radix: u32) -> String {
		radix::format(self, radix, false)
	}
	
	//		trailing_zeros														
	/// Counts the zero bits below the least-significant set bit.
	/// 
	/// Zero counts every bit of its single word, so
	/// `BigUInt::zero().trailing_zeros()` is 64, the same as its
	/// [`bit_width()`](BigUInt::bit_width()).
	/// 
	#[must_use]
	pub fn trailing_zeros(&self) -> u64 {
		words::trailing_zeros(self.words())
	}
	
	//		words																
	/// The canonical little-endian words of the value.
	#[must_use]
	pub fn words(&self) -> &[Word] {
		self.0.as_slice()
	}
	
	//		Private methods														
	
	//		shl_bits															
	fn shl_bits(&self, shift: usize) -> Self {
		if self.is_zero() {
			return Self::zero();
		}
		Self::from_words(words::shl(self.words(), shift))
	}
	
	//		shr_bits															
	fn shr_bits(&self, shift: usize) -> Self {
		if self.is_zero() || shift as u64 >= self.bit_width() {
			return Self::zero();
		}
		Self::from_words(words::shr(self.words(), shift))
	}
	
	//		to_u128																
	/// Returns the value as a [`u128`] if it fits.
	pub(crate) fn to_u128(&self) -> Option<u128> {
		match *self.words() {
			[low]       => Some(u128::from(low)),
			[low, high] => Some(u128::from(low) | (u128::from(high) << WORD_BITS)),
			_           => None,
		}
	}
}

//󰭅		Add																		
impl Add<&BigUInt> for &BigUInt {
	type Output = BigUInt;
	
	//		add																	
	fn add(self, rhs: &BigUInt) -> Self::Output {
		BigUInt::from_words(words::add(self.words(), rhs.words()))
	}
}

forward_all!(Add, add, AddAssign, add_assign for BigUInt);

//󰭅		Binary																	
impl Binary for BigUInt {
	//		fmt																	
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.pad_integral(true, "0b", &radix::format(self, 2, false))
	}
}

//󰭅		BitAnd																	
impl BitAnd<&BigUInt> for &BigUInt {
	type Output = BigUInt;
	
	//		bitand																
	fn bitand(self, rhs: &BigUInt) -> Self::Output {
		BigUInt::from_words(words::bitand(self.words(), rhs.words()))
	}
}

forward_all!(BitAnd, bitand, BitAndAssign, bitand_assign for BigUInt);

//󰭅		BitOr																	
impl BitOr<&BigUInt> for &BigUInt {
	type Output = BigUInt;
	
	//		bitor																
	fn bitor(self, rhs: &BigUInt) -> Self::Output {
		BigUInt::from_words(words::bitor(self.words(), rhs.words()))
	}
}

forward_all!(BitOr, bitor, BitOrAssign, bitor_assign for BigUInt);

//󰭅		BitXor																	
impl BitXor<&BigUInt> for &BigUInt {
	type Output = BigUInt;
	
	//		bitxor																
	fn bitxor(self, rhs: &BigUInt) -> Self::Output {
		BigUInt::from_words(words::bitxor(self.words(), rhs.words()))
	}
}

forward_all!(BitXor, bitxor, BitXorAssign, bitxor_assign for BigUInt);

//󰭅		Debug																	
impl Debug for BigUInt {
	//		fmt																	
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		write!(f, "BigUInt({self})")?;
		
		//	For alternate formatting (#), show the words
		if f.alternate() {
			write!(f, " [")?;
			for (i, word) in self.words().iter().enumerate() {
				if i > 0 {
					write!(f, ", ")?;
				}
				write!(f, "0x{word:016x}")?;
			}
			write!(f, "]")?;
		}
		
		Ok(())
	}
}

//󰭅		Deserialize																
impl<'de> Deserialize<'de> for BigUInt {
	//		deserialize															
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: Deserializer<'de>,
	{
		if deserializer.is_human_readable() {
			//	If the format is human-readable, accept both numbers and strings
			deserializer.deserialize_any(BigUIntVisitor)
		} else {
			//	For binary formats, expect little-endian bytes
			deserializer.deserialize_bytes(BigUIntVisitor)
		}
	}
}

//󰭅		Display																	
impl Display for BigUInt {
	//		fmt																	
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.pad_integral(true, "", &radix::format(self, 10, false))
	}
}

//󰭅		Div																		
impl Div<&BigUInt> for &BigUInt {
	type Output = BigUInt;
	
	//		div																	
	fn div(self, rhs: &BigUInt) -> Self::Output {
		assert!(!rhs.is_zero(), "Attempt to divide by zero");
		self.div_rem(rhs).0
	}
}

forward_all!(Div, div, DivAssign, div_assign for BigUInt);

//󰭅		From: unsigned primitives -> BigUInt									
macro_rules! impl_from_unsigned {
	($($t:ty),*) => {$(
		impl From<$t> for BigUInt {
			//		from														
			fn from(v: $t) -> Self {
				Self::from(u128::from(v))
			}
		}
	)*};
}

impl_from_unsigned!(u8, u16, u32, u64);

//󰭅		From: usize -> BigUInt													
impl From<usize> for BigUInt {
	//		from																
	fn from(v: usize) -> Self {
		Self::from(v as u128)
	}
}

//󰭅		From: u128 -> BigUInt													
impl From<u128> for BigUInt {
	//		from																
	#[expect(clippy::cast_possible_truncation, reason = "Each half is masked by the shift")]
	fn from(v: u128) -> Self {
		Self::from_words(vec![v as Word, (v >> WORD_BITS) as Word])
	}
}

//󰭅		FromSql																	
impl<'a> FromSql<'a> for BigUInt {
	//		from_sql															
	fn from_sql(ty: &Type, raw: &'a [u8]) -> Result<Self, Box<dyn Error + Sync + Send>> {
		match ty {
			&Type::INT2 => Ok(Self::try_from(i16::from_sql(ty, raw)?).map_err(Box::new)?),
			&Type::INT4 => Ok(Self::try_from(i32::from_sql(ty, raw)?).map_err(Box::new)?),
			&Type::INT8 => Ok(Self::try_from(i64::from_sql(ty, raw)?).map_err(Box::new)?),
			&Type::TEXT => Ok(String::from_sql(ty, raw)?.parse::<Self>()?),
			unknown     => Err(Box::new(IoError::new(
				IoErrorKind::InvalidData,
				format!("Invalid type for BigUInt: {unknown}"),
			))),
		}
	}
	
	//		accepts																
	fn accepts(ty: &Type) -> bool {
		matches!(*ty, Type::INT2 | Type::INT4 | Type::INT8 | Type::TEXT)
	}
}

//󰭅		FromStr																	
impl FromStr for BigUInt {
	type Err = ConversionError;
	
	//		from_str															
	/// Parses a decimal value, or a hexadecimal, octal, or binary value with a
	/// `0x`, `0o`, or `0b` prefix. A single leading `+` is allowed.
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let unsigned = s.strip_prefix('+').unwrap_or(s);
		if unsigned.starts_with('-') {
			return Err(ConversionError::ValueIsNegative);
		}
		let (digits, radix) = radix::split_prefix(unsigned);
		Self::from_str_radix(digits, radix)
	}
}

//󰭅		LowerHex																
impl LowerHex for BigUInt {
	//		fmt																	
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.pad_integral(true, "0x", &radix::format(self, 16, false))
	}
}

//󰭅		Mul																		
impl Mul<&BigUInt> for &BigUInt {
	type Output = BigUInt;
	
	//		mul																	
	fn mul(self, rhs: &BigUInt) -> Self::Output {
		BigUInt::from_words(words::mul(self.words(), rhs.words()))
	}
}

forward_all!(Mul, mul, MulAssign, mul_assign for BigUInt);

//󰭅		Not																		
impl Not for &BigUInt {
	type Output = BigUInt;
	
	//		not																	
	fn not(self) -> Self::Output {
		BigUInt::from_words(words::not(self.words()))
	}
}

//󰭅		Not																		
impl Not for BigUInt {
	type Output = Self;
	
	//		not																	
	fn not(self) -> Self::Output {
		!&self
	}
}

//󰭅		Octal																	
impl Octal for BigUInt {
	//		fmt																	
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.pad_integral(true, "0o", &radix::format(self, 8, false))
	}
}

//󰭅		Rem																		
impl Rem<&BigUInt> for &BigUInt {
	type Output = BigUInt;
	
	//		rem																	
	fn rem(self, rhs: &BigUInt) -> Self::Output {
		assert!(!rhs.is_zero(), "Attempt to calculate remainder with a divisor of zero");
		self.div_rem(rhs).1
	}
}

forward_all!(Rem, rem, RemAssign, rem_assign for BigUInt);

//󰭅		Serialize																
impl Serialize for BigUInt {
	//		serialize															
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: Serializer,
	{
		if serializer.is_human_readable() {
			//	For JSON and similar formats, serialise as number if it fits in u64
			if let [word] = *self.words() {
				return serializer.serialize_u64(word);
			}
			//	Fall back to string for larger numbers
			serializer.serialize_str(&self.to_string())
		} else {
			//	For binary formats, serialise little-endian bytes
			serializer.serialize_bytes(&self.to_le_bytes())
		}
	}
}

//󰭅		Shl																		
impl<T: ShiftDistance> Shl<T> for &BigUInt {
	type Output = BigUInt;
	
	//		shl																	
	fn shl(self, rhs: T) -> Self::Output {
		match rhs.split() {
			(false, shift) => self.shl_bits(shift),
			(true,  shift) => self.shr_bits(shift),
		}
	}
}

//󰭅		Shl																		
impl<T: ShiftDistance> Shl<T> for BigUInt {
	type Output = Self;
	
	//		shl																	
	fn shl(self, rhs: T) -> Self::Output {
		&self << rhs
	}
}

//󰭅		ShlAssign																
impl<T: ShiftDistance> ShlAssign<T> for BigUInt {
	//		shl_assign															
	fn shl_assign(&mut self, rhs: T) {
		*self = &*self << rhs;
	}
}

//󰭅		Shr																		
impl<T: ShiftDistance> Shr<T> for &BigUInt {
	type Output = BigUInt;
	
	//		shr																	
	fn shr(self, rhs: T) -> Self::Output {
		match rhs.split() {
			(false, shift) => self.shr_bits(shift),
			(true,  shift) => self.shl_bits(shift),
		}
	}
}

//󰭅		Shr																		
impl<T: ShiftDistance> Shr<T> for BigUInt {
	type Output = Self;
	
	//		shr																	
	fn shr(self, rhs: T) -> Self::Output {
		&self >> rhs
	}
}

//󰭅		ShrAssign																
impl<T: ShiftDistance> ShrAssign<T> for BigUInt {
	//		shr_assign															
	fn shr_assign(&mut self, rhs: T) {
		*self = &*self >> rhs;
	}
}

//󰭅		Sub																		
impl Sub<&BigUInt> for &BigUInt {
	type Output = BigUInt;
	
	//		sub																	
	#[expect(clippy::expect_used, reason = "Needs to emulate Rust standard library behaviour")]
	fn sub(self, rhs: &BigUInt) -> Self::Output {
		self.checked_sub(rhs).expect("Attempt to subtract with overflow")
	}
}

forward_all!(Sub, sub, SubAssign, sub_assign for BigUInt);

impl_sum_product!(BigUInt);

//󰭅		ToSql																	
impl ToSql for BigUInt {
	//		to_sql																
	fn to_sql(&self, ty: &Type, out: &mut BytesMut) -> Result<IsNull, Box<dyn Error + Sync + Send>> {
		match ty {
			&Type::INT2 => i16::try_from(self)?.to_sql(ty, out),
			&Type::INT4 => i32::try_from(self)?.to_sql(ty, out),
			&Type::INT8 => i64::try_from(self)?.to_sql(ty, out),
			&Type::TEXT => self.to_string().to_sql(ty, out),
			unknown     => Err(Box::new(IoError::new(
				IoErrorKind::InvalidData,
				format!("Invalid type for BigUInt: {unknown}"),
			))),
		}
	}
	
	//		accepts																
	fn accepts(ty: &Type) -> bool {
		matches!(*ty, Type::INT2 | Type::INT4 | Type::INT8 | Type::TEXT)
	}
	
	to_sql_checked!();
}

//󰭅		TryFrom: signed primitives -> BigUInt									
macro_rules! impl_try_from_signed {
	($($t:ty),*) => {$(
		impl TryFrom<$t> for BigUInt {
			type Error = ConversionError;
			
			//		try_from													
			fn try_from(v: $t) -> Result<Self, Self::Error> {
				if v < 0 {
					return Err(ConversionError::ValueIsNegative);
				}
				Ok(Self::from(v.unsigned_abs()))
			}
		}
	)*};
}

impl_try_from_signed!(i8, i16, i32, i64, i128, isize);

//󰭅		TryFrom: BigUInt -> primitives											
macro_rules! impl_try_into_primitive {
	($($t:ty),*) => {$(
		impl TryFrom<&BigUInt> for $t {
			type Error = ConversionError;
			
			//		try_from													
			fn try_from(v: &BigUInt) -> Result<Self, Self::Error> {
				v.to_u128()
					.and_then(|value| <$t>::try_from(value).ok())
					.ok_or(ConversionError::ValueTooLarge)
			}
		}
		
		impl TryFrom<BigUInt> for $t {
			type Error = ConversionError;
			
			//		try_from													
			fn try_from(v: BigUInt) -> Result<Self, Self::Error> {
				<$t>::try_from(&v)
			}
		}
	)*};
}

impl_try_into_primitive!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

//󰭅		UpperHex																
impl UpperHex for BigUInt {
	//		fmt																	
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.pad_integral(true, "0x", &radix::format(self, 16, true))
	}
}

//		BigUIntVisitor															
/// A visitor for deserialising unsigned integers from numbers, strings, or
/// little-endian bytes.
struct BigUIntVisitor;

//󰭅		Visitor																	
impl Visitor<'_> for BigUIntVisitor {
	type Value = BigUInt;
	
	//		expecting															
	fn expecting(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
		write!(formatter, "an unsigned integer")
	}
	
	//		visit_f64															
	fn visit_f64<E>(self, v: f64) -> Result<Self::Value, E>
	where
		E: SerdeError,
	{
		if v.abs() >= MAX_EXACT_FLOAT {
			return Err(E::custom(ConversionError::ValueTooLarge));
		}
		BigUInt::from_f64_exact(v).map_err(E::custom)
	}
	
	//		visit_i64															
	fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
	where
		E: SerdeError,
	{
		BigUInt::try_from(v).map_err(E::custom)
	}
	
	//		visit_u64															
	fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
	where
		E: SerdeError,
	{
		Ok(BigUInt::from(v))
	}
	
	//		visit_str															
	fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
	where
		E: SerdeError,
	{
		v.parse().map_err(E::custom)
	}
	
	//		visit_bytes															
	fn visit_bytes<E>(self, v: &[u8]) -> Result<Self::Value, E>
	where
		E: SerdeError,
	{
		Ok(BigUInt::from_le_bytes(v))
	}
}
