//! The Bignum crate is a library of arbitrary-precision integers: an unsigned
//! [`BigUInt`] and a signed [`BigInt`], with the full set of arithmetic,
//! bitwise, comparison, and text-conversion operators, plus modular
//! arithmetic through [`ModularOperations`].



//		Global configuration

//	Customisations of the standard linting configuration
#![allow(clippy::items_after_test_module, reason = "Not needed with separated tests")]

//	Lints specifically disabled for unit tests
#![cfg_attr(test, allow(
	non_snake_case,
	clippy::arithmetic_side_effects,
	clippy::as_conversions,
	clippy::cast_lossless,
	clippy::cast_possible_truncation,
	clippy::cast_precision_loss,
	clippy::cognitive_complexity,
	clippy::default_numeric_fallback,
	clippy::exhaustive_enums,
	clippy::exhaustive_structs,
	clippy::expect_used,
	clippy::indexing_slicing,
	clippy::integer_division,
	clippy::let_underscore_must_use,
	clippy::let_underscore_untyped,
	clippy::missing_assert_message,
	clippy::missing_panics_doc,
	clippy::must_use_candidate,
	clippy::panic,
	clippy::print_stdout,
	clippy::unwrap_in_result,
	clippy::unwrap_used,
	reason = "Not useful in unit tests"
))]



//		Modules

#[macro_use]
mod macros;

mod bigint;
mod biguint;
mod errors;
mod modular;
mod radix;
mod words;

#[cfg(test)]
#[path = "tests/properties.rs"]
mod properties;



//		Packages

pub use bigint::BigInt;
pub use biguint::{BigUInt, ShiftDistance};
pub use errors::ConversionError;
pub use modular::ModularOperations;
pub use words::{WORD_BITS, Word};
