//! Arbitrary-precision signed integer type.

#![allow(clippy::arithmetic_side_effects, reason = "Word counts cannot overflow")]
#![allow(clippy::as_conversions,          reason = "Primitive conversions are checked or widening")]



//		Modules

#[cfg(test)]
#[path = "tests/bigint.rs"]
mod tests;



//		Packages

use crate::{
	biguint::{BigUInt, MAX_EXACT_FLOAT, ShiftDistance},
	errors::ConversionError,
	radix,
	words::{self, WORD_BITS, Word},
};
use bytes::BytesMut;
use core::{
	cmp::Ordering,
	error::Error,
	fmt::{Binary, Debug, Display, Formatter, LowerHex, Octal, UpperHex, self},
	ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Rem, RemAssign, Sub, SubAssign},
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



//		Structs

//		BigInt																	
/// A signed integer of unbounded magnitude.
/// 
/// # Representation
/// 
/// The value is held as a sign and a [`BigUInt`] magnitude. There is no
/// negative zero: the sign is always cleared when the magnitude is zero, so
/// that equality and hashing can compare both fields directly.
/// 
/// # Arithmetic
/// 
/// Division truncates toward zero, and the remainder takes the sign of the
/// dividend, matching the primitive signed integers:
/// 
/// ```text
///  7 /  3 ==  2     7 %  3 ==  1
/// -7 /  3 == -2    -7 %  3 == -1
///  7 / -3 == -2     7 % -3 ==  1
/// ```
/// 
/// # Bitwise operations
/// 
/// AND, OR, XOR, and NOT behave as though the value were stored in infinite
/// two's complement, so `-1 & x == x` and `!x == -(x + 1)`. Internally each
/// operand is converted to a two's complement sequence one word wider than
/// the widest magnitude, which leaves room for the sign.
/// 
/// Shifts, however, act on the magnitude and keep the sign, so `-1 >> 1` is
/// `0` rather than the `-1` an arithmetic shift would give.
/// 
#[derive(Clone, Default, Eq, Hash, PartialEq)]
pub struct BigInt {
	/// Whether the value is less than zero. Never set when the magnitude is
	/// zero.
	negative:  bool,
	
	/// The absolute value.
	magnitude: BigUInt,
}

//󰭅		BigInt																	
impl BigInt {
	//		Constructors														
	
	//		from_f64															
	/// Creates a [`BigInt`] from a floating-point value, truncating toward
	/// zero.
	/// 
	/// # Parameters
	/// 
	/// * `value` - The value to convert.
	/// 
	/// # Panics
	/// 
	/// Panics if the value is infinite or NaN.
	/// 
	#[must_use]
	pub fn from_f64(value: f64) -> Self {
		assert!(value.is_finite(), "Value cannot be converted to BigInt because it is either infinite or NaN");
		Self::from_parts(value < 0.0, BigUInt::from_f64(value.abs()))
	}
	
	//		from_f64_exact														
	/// Creates a [`BigInt`] from a floating-point value that holds an integer
	/// exactly.
	/// 
	/// # Parameters
	/// 
	/// * `value` - The value to convert.
	/// 
	/// # Errors
	/// 
	/// Returns [`ConversionError::NotAnInteger`] if the value is not finite or
	/// has a fractional part.
	/// 
	pub fn from_f64_exact(value: f64) -> Result<Self, ConversionError> {
		Ok(Self::from_parts(value < 0.0, BigUInt::from_f64_exact(value.abs())?))
	}
	
	//		from_json															
	/// Creates a [`BigInt`] from a JSON number or string.
	/// 
	/// # Parameters
	/// 
	/// * `json` - The JSON text to parse.
	/// 
	/// # Errors
	/// 
	/// Returns an error if the JSON is malformed or does not hold an integer.
	/// 
	pub fn from_json(json: &str) -> Result<Self, JsonError> {
		serde_json::from_str(json)
	}
	
	//		from_parts															
	/// Creates a [`BigInt`] from a sign and a magnitude.
	/// 
	/// A zero magnitude always gives zero, whatever the sign.
	/// 
	/// # Parameters
	/// 
	/// * `negative`  - Whether the value is negative.
	/// * `magnitude` - The absolute value.
	/// 
	#[must_use]
	pub fn from_parts(negative: bool, magnitude: BigUInt) -> Self {
		Self { negative: negative && !magnitude.is_zero(), magnitude }
	}
	
	//		from_str_radix														
	/// Parses a [`BigInt`] from text in the given radix.
	/// 
	/// The digits may be preceded by a single `-` or `+`. Digits beyond `9`
	/// are the letters `a` to `z`, in either case.
	/// 
	/// # Parameters
	/// 
	/// * `text`  - The text to parse.
	/// * `radix` - The radix, from 2 to 36.
	/// 
	/// # Errors
	/// 
	/// Returns [`ConversionError::EmptyValue`] if there are no digits, and
	/// [`ConversionError::InvalidDigit`] or [`ConversionError::InvalidRadix`] if
	/// any character after the sign is not a digit in the radix.
	/// 
	/// # Panics
	/// 
	/// Panics if the radix is outside the range 2 to 36.
	/// 
	pub fn from_str_radix(text: &str, radix: u32) -> Result<Self, ConversionError> {
		let (negative, digits) = split_sign(text);
		Ok(Self::from_parts(negative, radix::parse(digits, radix)?))
	}
	
	//		one																	
	/// The value one.
	#[must_use]
	pub fn one() -> Self {
		Self::from(BigUInt::one())
	}
	
	//		zero																
	/// The value zero.
	#[must_use]
	pub fn zero() -> Self {
		Self::default()
	}
	
	//		Public methods														
	
	//		abs																	
	/// The absolute value, as a [`BigInt`].
	#[must_use]
	pub fn abs(&self) -> Self {
		Self::from(self.magnitude.clone())
	}
	
	//		advanced_by															
	/// Returns `self + n`.
	#[must_use]
	pub fn advanced_by(&self, n: &Self) -> Self {
		self + n
	}
	
	//		bit_width															
	/// The number of bits in the two's complement [`words()`](BigInt::words()),
	/// i.e. the word count times 64.
	#[must_use]
	pub fn bit_width(&self) -> u64 {
		self.words().len() as u64 * u64::from(WORD_BITS)
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
	
	//		distance_to															
	/// Returns `other - self`.
	#[must_use]
	pub fn distance_to(&self, other: &Self) -> Self {
		other - self
	}
	
	//		div_rem																
	/// Computes the truncated quotient and remainder of `self / rhs` together.
	/// 
	/// The quotient is rounded toward zero, and the remainder has the sign of
	/// `self`, so that `q * rhs + r == self`.
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
		let (quotient, remainder) = self.magnitude.div_rem(&rhs.magnitude);
		(
			Self::from_parts(self.negative ^ rhs.negative, quotient),
			Self::from_parts(self.negative,                remainder),
		)
	}
	
	//		into_parts															
	/// Consumes the value, returning its sign and magnitude.
	#[must_use]
	pub fn into_parts(self) -> (bool, BigUInt) {
		(self.negative, self.magnitude)
	}
	
	//		is_multiple_of														
	/// Whether `self` is an exact multiple of `other`, ignoring signs.
	#[must_use]
	pub fn is_multiple_of(&self, other: &Self) -> bool {
		self.magnitude.is_multiple_of(&other.magnitude)
	}
	
	//		is_negative															
	/// Whether the value is less than zero.
	#[must_use]
	pub const fn is_negative(&self) -> bool {
		self.negative
	}
	
	//		is_positive															
	/// Whether the value is greater than zero.
	#[must_use]
	pub fn is_positive(&self) -> bool {
		!self.negative && !self.magnitude.is_zero()
	}
	
	//		is_zero																
	/// Whether the value is zero.
	#[must_use]
	pub fn is_zero(&self) -> bool {
		self.magnitude.is_zero()
	}
	
	//		magnitude															
	/// The absolute value.
	#[must_use]
	pub const fn magnitude(&self) -> &BigUInt {
		&self.magnitude
	}
	
	//		rem_euclid															
	/// The least non-negative remainder of `self / m`.
	/// 
	/// Unlike `%`, the result is never negative, whatever the signs of `self`
	/// and `m`.
	/// 
	/// # Parameters
	/// 
	/// * `m` - The divisor.
	/// 
	/// # Panics
	/// 
	/// Panics if `m` is zero.
	/// 
	#[must_use]
	pub fn rem_euclid(&self, m: &Self) -> Self {
		let remainder = self % m;
		if remainder.negative {
			Self::from(&m.magnitude - &remainder.magnitude)
		} else {
			remainder
		}
	}
	
	//		signum																
	/// Returns `-1`, `0`, or `1` according to the sign of the value.
	#[must_use]
	pub fn signum(&self) -> Self {
		Self::from_parts(self.negative, self.magnitude.signum())
	}
	
	//		to_json																
	/// Serialises the value to JSON.
	/// 
	/// Values that fit in an [`i64`] are written as numbers, and others as
	/// decimal strings.
	/// 
	/// # Errors
	/// 
	/// Returns an error if serialisation fails.
	/// 
	pub fn to_json(&self) -> Result<String, JsonError> {
		serde_json::to_string(self)
	}
	
	//		to_str_radix														
	/// Formats the value as text in the given radix, with a leading `-` when
	/// negative.
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
		let digits = radix::format(&self.magnitude, radix, false);
		if self.negative { format!("-{digits}") } else { digits }
	}
	
	//		trailing_zeros														
	/// Counts the zero bits below the least-significant set bit of the two's
	/// complement representation.
	/// 
	/// Negation preserves trailing zeros, so this is the count for the
	/// magnitude. Zero gives 64, as for [`BigUInt`].
	/// 
	#[must_use]
	pub fn trailing_zeros(&self) -> u64 {
		self.magnitude.trailing_zeros()
	}
	
	//		words																
	/// The little-endian two's complement words of the value, in the
	/// shortest form that preserves the sign.
	/// 
	/// For example, `-1` is `[u64::MAX]`, and `2^63` is `[2^63, 0]` since its
	/// top bit would otherwise read as a sign.
	/// 
	#[must_use]
	pub fn words(&self) -> Vec<Word> {
		let mut view = self.view(self.magnitude.words().len() + 1);
		words::trim_twos_complement(&mut view);
		view
	}
	
	//		Private methods														
	
	//		bitwise																
	/// Applies a word-wise operation to the two's complement forms of both
	/// operands, and decodes the result from its sign bit.
	fn bitwise<F>(&self, rhs: &Self, op: F) -> Self
	where
		F: Fn(Word, Word) -> Word,
	{
		let len        = self.magnitude.words().len().max(rhs.magnitude.words().len()) + 1;
		let mut result = self.view(len).into_iter()
			.zip(rhs.view(len))
			.map(|(l, r)| op(l, r))
			.collect::<Vec<_>>();
		let negative   = words::is_sign_set(&result);
		if negative {
			words::negate_assign(&mut result);
		}
		Self::from_parts(negative, BigUInt::from_words(result))
	}
	
	//		to_i128																
	/// Returns the value as an [`i128`] if it fits.
	fn to_i128(&self) -> Option<i128> {
		let magnitude = self.magnitude.to_u128()?;
		if self.negative {
			0_i128.checked_sub_unsigned(magnitude)
		} else {
			i128::try_from(magnitude).ok()
		}
	}
	
	//		view																
	/// The two's complement form of the value, sign-extended to `len` words.
	fn view(&self, len: usize) -> Vec<Word> {
		words::twos_complement(self.magnitude.words(), self.negative, len)
	}
}

//󰭅		Add																		
impl Add<&BigInt> for &BigInt {
	type Output = BigInt;
	
	//		add																	
	fn add(self, rhs: &BigInt) -> Self::Output {
		if self.negative == rhs.negative {
			return BigInt::from_parts(self.negative, &self.magnitude + &rhs.magnitude);
		}
		
		//	Differing signs reduce to subtracting the smaller magnitude
		match self.magnitude.cmp(&rhs.magnitude) {
			Ordering::Less => BigInt::from_parts(rhs.negative,  &rhs.magnitude  - &self.magnitude),
			_              => BigInt::from_parts(self.negative, &self.magnitude - &rhs.magnitude),
		}
	}
}

forward_all!(Add, add, AddAssign, add_assign for BigInt);

//󰭅		Binary																	
impl Binary for BigInt {
	//		fmt																	
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.pad_integral(!self.negative, "0b", &radix::format(&self.magnitude, 2, false))
	}
}

//󰭅		BitAnd																	
impl BitAnd<&BigInt> for &BigInt {
	type Output = BigInt;
	
	//		bitand																
	fn bitand(self, rhs: &BigInt) -> Self::Output {
		self.bitwise(rhs, |l, r| l & r)
	}
}

forward_all!(BitAnd, bitand, BitAndAssign, bitand_assign for BigInt);

//󰭅		BitOr																	
impl BitOr<&BigInt> for &BigInt {
	type Output = BigInt;
	
	//		bitor																
	fn bitor(self, rhs: &BigInt) -> Self::Output {
		self.bitwise(rhs, |l, r| l | r)
	}
}

forward_all!(BitOr, bitor, BitOrAssign, bitor_assign for BigInt);

//󰭅		BitXor																	
impl BitXor<&BigInt> for &BigInt {
	type Output = BigInt;
	
	//		bitxor																
	fn bitxor(self, rhs: &BigInt) -> Self::Output {
		self.bitwise(rhs, |l, r| l ^ r)
	}
}

forward_all!(BitXor, bitxor, BitXorAssign, bitxor_assign for BigInt);

//󰭅		Debug																	
impl Debug for BigInt {
	//		fmt																	
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		write!(f, "BigInt({self})")
	}
}

//󰭅		Deserialize																
impl<'de> Deserialize<'de> for BigInt {
	//		deserialize															
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: Deserializer<'de>,
	{
		if deserializer.is_human_readable() {
			deserializer.deserialize_any(BigIntVisitor)
		} else {
			deserializer.deserialize_bytes(BigIntVisitor)
		}
	}
}

//󰭅		Display																	
impl Display for BigInt {
	//		fmt																	
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.pad_integral(!self.negative, "", &radix::format(&self.magnitude, 10, false))
	}
}

//󰭅		Div																		
impl Div<&BigInt> for &BigInt {
	type Output = BigInt;
	
	//		div																	
	fn div(self, rhs: &BigInt) -> Self::Output {
		assert!(!rhs.is_zero(), "Attempt to divide by zero");
		self.div_rem(rhs).0
	}
}

forward_all!(Div, div, DivAssign, div_assign for BigInt);

//󰭅		From: BigUInt -> BigInt													
impl From<BigUInt> for BigInt {
	//		from																
	fn from(magnitude: BigUInt) -> Self {
		Self { negative: false, magnitude }
	}
}

//󰭅		From: unsigned primitives -> BigInt										
macro_rules! impl_from_unsigned {
	($($t:ty),*) => {$(
		impl From<$t> for BigInt {
			//		from														
			fn from(v: $t) -> Self {
				Self::from(BigUInt::from(v))
			}
		}
	)*};
}

impl_from_unsigned!(u8, u16, u32, u64, u128, usize);

//󰭅		From: signed primitives -> BigInt										
macro_rules! impl_from_signed {
	($($t:ty),*) => {$(
		impl From<$t> for BigInt {
			//		from														
			fn from(v: $t) -> Self {
				Self::from_parts(v < 0, BigUInt::from(v.unsigned_abs()))
			}
		}
	)*};
}

impl_from_signed!(i8, i16, i32, i64, i128, isize);

//󰭅		FromSql																	
impl<'a> FromSql<'a> for BigInt {
	//		from_sql															
	fn from_sql(ty: &Type, raw: &'a [u8]) -> Result<Self, Box<dyn Error + Sync + Send>> {
		match ty {
			&Type::INT2 => Ok(Self::from(i16::from_sql(ty, raw)?)),
			&Type::INT4 => Ok(Self::from(i32::from_sql(ty, raw)?)),
			&Type::INT8 => Ok(Self::from(i64::from_sql(ty, raw)?)),
			&Type::TEXT => Ok(String::from_sql(ty, raw)?.parse::<Self>()?),
			unknown     => Err(Box::new(IoError::new(
				IoErrorKind::InvalidData,
				format!("Invalid type for BigInt: {unknown}"),
			))),
		}
	}
	
	//		accepts																
	fn accepts(ty: &Type) -> bool {
		matches!(*ty, Type::INT2 | Type::INT4 | Type::INT8 | Type::TEXT)
	}
}

//󰭅		FromStr																	
impl FromStr for BigInt {
	type Err = ConversionError;
	
	//		from_str															
	/// Parses a decimal value, or a hexadecimal, octal, or binary value with a
	/// `0x`, `0o`, or `0b` prefix after the optional `-` or `+` sign.
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let (negative, unsigned) = split_sign(s);
		let (digits, radix)      = radix::split_prefix(unsigned);
		Ok(Self::from_parts(negative, BigUInt::from_str_radix(digits, radix)?))
	}
}

//󰭅		LowerHex																
impl LowerHex for BigInt {
	//		fmt																	
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.pad_integral(!self.negative, "0x", &radix::format(&self.magnitude, 16, false))
	}
}

//󰭅		Mul																		
impl Mul<&BigInt> for &BigInt {
	type Output = BigInt;
	
	//		mul																	
	fn mul(self, rhs: &BigInt) -> Self::Output {
		BigInt::from_parts(self.negative ^ rhs.negative, &self.magnitude * &rhs.magnitude)
	}
}

forward_all!(Mul, mul, MulAssign, mul_assign for BigInt);

//󰭅		Neg																		
impl Neg for &BigInt {
	type Output = BigInt;
	
	//		neg																	
	fn neg(self) -> Self::Output {
		BigInt::from_parts(!self.negative, self.magnitude.clone())
	}
}

//󰭅		Neg																		
impl Neg for BigInt {
	type Output = Self;
	
	//		neg																	
	fn neg(self) -> Self::Output {
		Self::from_parts(!self.negative, self.magnitude)
	}
}

//󰭅		Not																		
impl Not for &BigInt {
	type Output = BigInt;
	
	//		not																	
	fn not(self) -> Self::Output {
		-(self + BigInt::one())
	}
}

//󰭅		Not																		
impl Not for BigInt {
	type Output = Self;
	
	//		not																	
	fn not(self) -> Self::Output {
		!&self
	}
}

//󰭅		Octal																	
impl Octal for BigInt {
	//		fmt																	
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.pad_integral(!self.negative, "0o", &radix::format(&self.magnitude, 8, false))
	}
}

//󰭅		Ord																		
impl Ord for BigInt {
	//		cmp																	
	fn cmp(&self, other: &Self) -> Ordering {
		match (self.negative, other.negative) {
			(false, true)  => Ordering::Greater,
			(true,  false) => Ordering::Less,
			(false, false) => self.magnitude.cmp(&other.magnitude),
			(true,  true)  => other.magnitude.cmp(&self.magnitude),
		}
	}
}

//󰭅		PartialOrd																
impl PartialOrd for BigInt {
	//		partial_cmp															
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		Some(self.cmp(other))
	}
}

//󰭅		Rem																		
impl Rem<&BigInt> for &BigInt {
	type Output = BigInt;
	
	//		rem																	
	fn rem(self, rhs: &BigInt) -> Self::Output {
		assert!(!rhs.is_zero(), "Attempt to calculate remainder with a divisor of zero");
		self.div_rem(rhs).1
	}
}

forward_all!(Rem, rem, RemAssign, rem_assign for BigInt);

//󰭅		Serialize																
impl Serialize for BigInt {
	//		serialize															
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: Serializer,
	{
		if serializer.is_human_readable() {
			//	For JSON and similar formats, serialise as number if it fits in i64
			if let Some(value) = self.to_i128().and_then(|v| i64::try_from(v).ok()) {
				return serializer.serialize_i64(value);
			}
			serializer.serialize_str(&self.to_string())
		} else {
			//	For binary formats, a sign byte followed by little-endian magnitude bytes
			let mut bytes = vec![u8::from(self.negative)];
			bytes.extend(self.magnitude.to_le_bytes());
			serializer.serialize_bytes(&bytes)
		}
	}
}

//󰭅		Shl																		
impl<T: ShiftDistance> Shl<T> for &BigInt {
	type Output = BigInt;
	
	//		shl																	
	fn shl(self, rhs: T) -> Self::Output {
		BigInt::from_parts(self.negative, &self.magnitude << rhs)
	}
}

//󰭅		Shl																		
impl<T: ShiftDistance> Shl<T> for BigInt {
	type Output = Self;
	
	//		shl																	
	fn shl(self, rhs: T) -> Self::Output {
		&self << rhs
	}
}

//󰭅		ShlAssign																
impl<T: ShiftDistance> ShlAssign<T> for BigInt {
	//		shl_assign															
	fn shl_assign(&mut self, rhs: T) {
		*self = &*self << rhs;
	}
}

//󰭅		Shr																		
impl<T: ShiftDistance> Shr<T> for &BigInt {
	type Output = BigInt;
	
	//		shr																	
	fn shr(self, rhs: T) -> Self::Output {
		BigInt::from_parts(self.negative, &self.magnitude >> rhs)
	}
}

//󰭅		Shr																		
impl<T: ShiftDistance> Shr<T> for BigInt {
	type Output = Self;
	
	//		shr																	
	fn shr(self, rhs: T) -> Self::Output {
		&self >> rhs
	}
}

//󰭅		ShrAssign																
impl<T: ShiftDistance> ShrAssign<T> for BigInt {
	//		shr_assign															
	fn shr_assign(&mut self, rhs: T) {
		*self = &*self >> rhs;
	}
}

//󰭅		Sub																		
impl Sub<&BigInt> for &BigInt {
	type Output = BigInt;
	
	//		sub																	
	fn sub(self, rhs: &BigInt) -> Self::Output {
		self + &-rhs
	}
}

forward_all!(Sub, sub, SubAssign, sub_assign for BigInt);

impl_sum_product!(BigInt);

//󰭅		ToSql																	
impl ToSql for BigInt {
	//		to_sql																
	fn to_sql(&self, ty: &Type, out: &mut BytesMut) -> Result<IsNull, Box<dyn Error + Sync + Send>> {
		match ty {
			&Type::INT2 => i16::try_from(self)?.to_sql(ty, out),
			&Type::INT4 => i32::try_from(self)?.to_sql(ty, out),
			&Type::INT8 => i64::try_from(self)?.to_sql(ty, out),
			&Type::TEXT => self.to_string().to_sql(ty, out),
			unknown     => Err(Box::new(IoError::new(
				IoErrorKind::InvalidData,
				format!("Invalid type for BigInt: {unknown}"),
			))),
		}
	}
	
	//		accepts																
	fn accepts(ty: &Type) -> bool {
		matches!(*ty, Type::INT2 | Type::INT4 | Type::INT8 | Type::TEXT)
	}
	
	to_sql_checked!();
}

//󰭅		TryFrom: BigInt -> BigUInt												
impl TryFrom<&BigInt> for BigUInt {
	type Error = ConversionError;
	
	//		try_from															
	fn try_from(v: &BigInt) -> Result<Self, Self::Error> {
		if v.negative {
			return Err(ConversionError::ValueIsNegative);
		}
		Ok(v.magnitude.clone())
	}
}

//󰭅		TryFrom: BigInt -> BigUInt												
impl TryFrom<BigInt> for BigUInt {
	type Error = ConversionError;
	
	//		try_from															
	fn try_from(v: BigInt) -> Result<Self, Self::Error> {
		if v.negative {
			return Err(ConversionError::ValueIsNegative);
		}
		Ok(v.magnitude)
	}
}

//󰭅		TryFrom: BigInt -> unsigned primitives									
macro_rules! impl_try_into_unsigned {
	($($t:ty),*) => {$(
		impl TryFrom<&BigInt> for $t {
			type Error = ConversionError;
			
			//		try_from													
			fn try_from(v: &BigInt) -> Result<Self, Self::Error> {
				if v.negative {
					return Err(ConversionError::ValueIsNegative);
				}
				<$t>::try_from(&v.magnitude)
			}
		}
		
		impl TryFrom<BigInt> for $t {
			type Error = ConversionError;
			
			//		try_from													
			fn try_from(v: BigInt) -> Result<Self, Self::Error> {
				<$t>::try_from(&v)
			}
		}
	)*};
}

impl_try_into_unsigned!(u8, u16, u32, u64, u128, usize);

//󰭅		TryFrom: BigInt -> signed primitives									
macro_rules! impl_try_into_signed {
	($($t:ty),*) => {$(
		impl TryFrom<&BigInt> for $t {
			type Error = ConversionError;
			
			//		try_from													
			fn try_from(v: &BigInt) -> Result<Self, Self::Error> {
				v.to_i128()
					.and_then(|value| <$t>::try_from(value).ok())
					.ok_or(ConversionError::ValueTooLarge)
			}
		}
		
		impl TryFrom<BigInt> for $t {
			type Error = ConversionError;
			
			//		try_from													
			fn try_from(v: BigInt) -> Result<Self, Self::Error> {
				<$t>::try_from(&v)
			}
		}
	)*};
}

impl_try_into_signed!(i8, i16, i32, i64, i128, isize);

//󰭅		UpperHex																
impl UpperHex for BigInt {
	//		fmt																	
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.pad_integral(!self.negative, "0x", &radix::format(&self.magnitude, 16, true))
	}
}



//		Functions

//		split_sign																
/// Splits a single leading `-` or `+` from the text, returning whether the
/// value is negative and the remaining text.
fn split_sign(text: &str) -> (bool, &str) {
	text.strip_prefix('-').map_or_else(
		|| (false, text.strip_prefix('+').unwrap_or(text)),
		|rest| (true, rest),
	)
}



//		BigIntVisitor															
/// A visitor for deserialising signed integers from numbers, strings, or a
/// sign byte followed by little-endian magnitude bytes.
struct BigIntVisitor;

//󰭅		Visitor																	
impl Visitor<'_> for BigIntVisitor {
	type Value = BigInt;
	
	//		expecting															
	fn expecting(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
		write!(formatter, "an integer")
	}
	
	//		visit_f64															
	fn visit_f64<E>(self, v: f64) -> Result<Self::Value, E>
	where
		E: SerdeError,
	{
		if v.abs() >= MAX_EXACT_FLOAT {
			return Err(E::custom(ConversionError::ValueTooLarge));
		}
		BigInt::from_f64_exact(v).map_err(E::custom)
	}
	
	//		visit_i64															
	fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
	where
		E: SerdeError,
	{
		Ok(BigInt::from(v))
	}
	
	//		visit_u64															
	fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
	where
		E: SerdeError,
	{
		Ok(BigInt::from(v))
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
		match v.split_first() {
			Some((&0, magnitude)) => Ok(BigInt::from_parts(false, BigUInt::from_le_bytes(magnitude))),
			Some((&1, magnitude)) => Ok(BigInt::from_parts(true,  BigUInt::from_le_bytes(magnitude))),
			Some(_)               => Err(E::custom("invalid sign byte")),
			None                  => Err(E::invalid_length(0, &self)),
		}
	}
}
