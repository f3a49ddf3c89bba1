//! Conversion between integers and text in radices 2 to 36.
//! 
//! Text is processed a "super-digit" at a time: for each radix `r`, `k` is
//! the largest number of base-`r` digits whose value always fits in a single
//! [`Word`], and `p = r^k`. Parsing consumes `k` characters per step, and
//! formatting emits `k` characters per division by `p`, so the bulk of the
//! work is native word arithmetic rather than one bignum operation per digit.

#![allow(clippy::arithmetic_side_effects, reason = "Digit and chunk counts cannot overflow")]
#![allow(clippy::as_conversions,          reason = "Radix values are at most 36")]
#![allow(clippy::indexing_slicing,        reason = "Indices are bounded by the radix check and ASCII validation")]
#![allow(clippy::integer_division,        reason = "Digit extraction is integer division by the radix")]



//		Modules

#[cfg(test)]
#[path = "tests/radix.rs"]
mod tests;



//		Packages

use crate::{
	biguint::BigUInt,
	errors::ConversionError,
	words::{self, Word},
};



//		Constants

/// The lowest supported radix.
pub(crate) const MIN_RADIX: u32 = 2;

/// The highest supported radix.
pub(crate) const MAX_RADIX: u32 = 36;

/// Super-digit constants for every radix, indexed by radix. Entries below
/// [`MIN_RADIX`] are unused.
static RADIX_TABLE: [RadixInfo; MAX_RADIX as usize + 1] = build_table();



//		Structs

//		RadixInfo																
/// Super-digit constants for a single radix.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct RadixInfo {
	/// The number of digits per super-digit, `k`.
	pub(crate) digits: usize,
	
	/// The value of one super-digit place, `p = r^k`.
	pub(crate) power:  Word,
}



//		Functions

//		build_table																
const fn build_table() -> [RadixInfo; MAX_RADIX as usize + 1] {
	let mut table = [RadixInfo { digits: 0, power: 1 }; MAX_RADIX as usize + 1];
	let mut radix = MIN_RADIX;
	while radix <= MAX_RADIX {
		table[radix as usize] = radix_info(radix);
		radix += 1;
	}
	table
}

//		radix_info																
/// Computes `k` and `p` for a radix by multiplying up until the next power
/// would overflow a word.
const fn radix_info(radix: u32) -> RadixInfo {
	let mut digits = 0;
	let mut power: Word = 1;
	while let Some(next) = power.checked_mul(radix as Word) {
		power   = next;
		digits += 1;
	}
	RadixInfo { digits, power }
}

//		info																	
/// Looks up the constants for a radix.
/// 
/// # Panics
/// 
/// Panics if the radix is outside the range 2 to 36.
/// 
pub(crate) fn info(radix: u32) -> RadixInfo {
	assert!((MIN_RADIX..=MAX_RADIX).contains(&radix), "Radix not in range 2...36");
	RADIX_TABLE[radix as usize]
}

//		parse																	
/// Parses unsigned digits in the given radix.
/// 
/// Every character is validated before any chunk is parsed, as
/// [`u64::from_str_radix()`] would otherwise accept a leading `+` inside a
/// chunk.
/// 
/// # Errors
/// 
/// Returns [`ConversionError::EmptyValue`] for empty text,
/// [`ConversionError::InvalidRadix`] for a digit that is too large for the
/// radix, and [`ConversionError::InvalidDigit`] for any other character.
/// 
/// # Panics
/// 
/// Panics if the radix is outside the range 2 to 36.
/// 
pub(crate) fn parse(text: &str, radix: u32) -> Result<BigUInt, ConversionError> {
	let info = info(radix);
	if text.is_empty() {
		return Err(ConversionError::EmptyValue);
	}
	if let Some(c) = text.chars().find(|c| !c.is_digit(radix)) {
		return Err(if c.is_digit(MAX_RADIX) {
			ConversionError::InvalidRadix(c, radix as u8)
		} else {
			ConversionError::InvalidDigit(c)
		});
	}
	
	//	The text is now known to be ASCII, so every byte offset is a char boundary
	let place     = BigUInt::from(info.power);
	let mut value = BigUInt::zero();
	let mut base  = BigUInt::one();
	let mut end   = text.len();
	while end > 0 {
		let start = end.saturating_sub(info.digits);
		let chunk = Word::from_str_radix(&text[start..end], radix)?;
		value    += &base * BigUInt::from(chunk);
		end       = start;
		if end > 0 {
			base *= &place;
		}
	}
	Ok(value)
}

//		format																	
/// Formats an unsigned value in the given radix, most-significant digit
/// first, with no prefix or leading zeros.
/// 
/// # Panics
/// 
/// Panics if the radix is outside the range 2 to 36.
/// 
pub(crate) fn format(value: &BigUInt, radix: u32, uppercase: bool) -> String {
	let info = info(radix);
	if value.is_zero() {
		return "0".to_owned();
	}
	
	//	Split into super-digits, least-significant first
	let mut super_digits = Vec::new();
	let mut rest         = value.words().to_vec();
	while rest != [0] {
		let (quotient, remainder) = words::div_rem_word(&rest, info.power);
		super_digits.push(remainder);
		rest = quotient;
		words::trim(&mut rest);
	}
	
	let mut text = String::with_capacity(super_digits.len() * info.digits);
	for (i, &super_digit) in super_digits.iter().rev().enumerate() {
		let width = if i == 0 { 0 } else { info.digits };
		push_super_digit(&mut text, super_digit, radix, width, uppercase);
	}
	text
}

//		push_super_digit														
/// Appends one super-digit, left-padded with zeros to `width` characters.
fn push_super_digit(text: &mut String, mut super_digit: Word, radix: u32, width: usize, uppercase: bool) {
	let mut digits = Vec::with_capacity(Word::BITS as usize);
	while super_digit > 0 || digits.len() < width.max(1) {
		#[expect(clippy::cast_possible_truncation, reason = "Remainder is less than the radix")]
		let digit = (super_digit % Word::from(radix)) as u32;
		let c     = char::from_digit(digit, radix).unwrap_or('0');
		digits.push(if uppercase { c.to_ascii_uppercase() } else { c });
		super_digit /= Word::from(radix);
	}
	text.extend(digits.iter().rev());
}

//		split_prefix															
/// Splits a `0x`, `0o`, or `0b` prefix (in either case) from the text,
/// returning the remaining digits and the radix the prefix denotes. Text
/// without a prefix is decimal.
pub(crate) fn split_prefix(text: &str) -> (&str, u32) {
	for (prefix, radix) in [("0x", 16), ("0X", 16), ("0o", 8), ("0O", 8), ("0b", 2), ("0B", 2)] {
		if let Some(digits) = text.strip_prefix(prefix) {
			return (digits, radix);
		}
	}
	(text, 10)
}
