//! Contains error types used throughout the library.



//		Packages

use core::num::ParseIntError;
use thiserror::Error as ThisError;



//		Enums

//		ConversionError															
/// Represents all possible conversion errors that can occur.
/// 
/// These are the recoverable failures of the library, i.e. those caused by
/// bad input rather than by a broken contract. Contract violations, such as
/// dividing by zero, panic instead.
/// 
#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
#[non_exhaustive]
pub enum ConversionError {
	/// The incoming value is empty, e.g. an empty string.
	#[error("Empty value")]
	EmptyValue,
	
	/// The incoming value contains a character that is not a digit in any
	/// supported radix.
	#[error("Invalid digit: {0}")]
	InvalidDigit(char),
	
	/// The incoming value contains a digit that is not valid for the radix
	/// being parsed.
	#[error("Invalid digit for base {1}: {0}")]
	InvalidRadix(char, u8),
	
	/// The incoming value is a floating-point number that has a fractional
	/// part, or is not finite.
	#[error("Value is not an integer")]
	NotAnInteger,
	
	/// A chunk of digits could not be parsed as a single word.
	#[error("Invalid integer: {0}")]
	ParseIntError(#[from] ParseIntError),
	
	/// The incoming value is negative, which is not allowed by the destination
	/// type.
	#[error("Value is negative")]
	ValueIsNegative,
	
	/// The incoming value is too large to be converted to the destination type.
	#[error("Value too large")]
	ValueTooLarge,
}
