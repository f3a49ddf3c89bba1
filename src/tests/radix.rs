//		Packages

use super::*;
use claims::{assert_err_eq, assert_ok_eq};



//		Tests

mod table {
	use super::*;
	
	//		info																
	#[test]
	fn info__powers_of_two() {
		assert_eq!(info(2),  RadixInfo { digits: 63, power: 1 << 63 });
		assert_eq!(info(8),  RadixInfo { digits: 21, power: 1 << 63 });
		assert_eq!(info(16), RadixInfo { digits: 15, power: 1 << 60 });
	}
	#[test]
	fn info__others() {
		assert_eq!(info(10), RadixInfo { digits: 19, power: 10_000_000_000_000_000_000 });
		assert_eq!(info(36), RadixInfo { digits: 12, power: 4_738_381_338_321_616_896 });
	}
	#[test]
	fn info__next_power_overflows() {
		for radix in MIN_RADIX..=MAX_RADIX {
			let RadixInfo { digits, power } = info(radix);
			assert!(digits > 0);
			assert_eq!(Word::from(radix).checked_pow(digits as u32), Some(power));
			assert_eq!(power.checked_mul(Word::from(radix)), None, "radix {radix}");
		}
	}
	#[test]
	#[should_panic(expected = "Radix not in range 2...36")]
	fn info__radix_too_small() {
		let _ = info(1);
	}
	#[test]
	#[should_panic(expected = "Radix not in range 2...36")]
	fn info__radix_too_large() {
		let _ = info(37);
	}
}

mod parsing {
	use super::*;
	
	//		parse																
	#[test]
	fn parse__single_chunk() {
		assert_ok_eq!(parse("ff",  16), BigUInt::from(255_u8));
		assert_ok_eq!(parse("FF",  16), BigUInt::from(255_u8));
		assert_ok_eq!(parse("000", 10), BigUInt::zero());
	}
	#[test]
	fn parse__many_chunks() {
		assert_ok_eq!(parse("18446744073709551616", 10), BigUInt::from_words(vec![0, 1]));
		assert_ok_eq!(parse(&format!("1{}", "0".repeat(64)), 2), BigUInt::from_words(vec![0, 1]));
		assert_ok_eq!(parse("340282366920938463463374607431768211455", 10), BigUInt::from(u128::MAX));
	}
	#[test]
	fn parse__leading_zeros_across_chunks() {
		let text = format!("{}{}", "0".repeat(40), "123456789012345678901234567890");
		assert_ok_eq!(parse(&text, 10), BigUInt::from(123_456_789_012_345_678_901_234_567_890_u128));
	}
	#[test]
	fn parse__empty() {
		assert_err_eq!(parse("", 10), ConversionError::EmptyValue);
	}
	#[test]
	fn parse__digit_too_large_for_radix() {
		assert_err_eq!(parse("12a", 10), ConversionError::InvalidRadix('a', 10));
		assert_err_eq!(parse("102", 2),  ConversionError::InvalidRadix('2', 2));
	}
	#[test]
	fn parse__invalid_character() {
		assert_err_eq!(parse("+1",  10), ConversionError::InvalidDigit('+'));
		assert_err_eq!(parse("1 2", 10), ConversionError::InvalidDigit(' '));
		assert_err_eq!(parse("1é",  16), ConversionError::InvalidDigit('é'));
	}
	#[test]
	fn parse__validates_before_parsing() {
		//	The first chunk parsed is the last 19 characters, which are valid
		let text = format!("!{}", "1".repeat(40));
		assert_err_eq!(parse(&text, 10), ConversionError::InvalidDigit('!'));
		let text = format!("x{}", "1".repeat(40));
		assert_err_eq!(parse(&text, 10), ConversionError::InvalidRadix('x', 10));
	}
	
	//		split_prefix														
	#[test]
	fn split_prefix() {
		assert_eq!(super::split_prefix("0xff"),  ("ff",  16));
		assert_eq!(super::split_prefix("0XFF"),  ("FF",  16));
		assert_eq!(super::split_prefix("0o17"),  ("17",  8));
		assert_eq!(super::split_prefix("0B101"), ("101", 2));
		assert_eq!(super::split_prefix("0123"),  ("0123", 10));
		assert_eq!(super::split_prefix("0x"),    ("",    16));
	}
}

mod formatting {
	use super::*;
	
	//		format																
	#[test]
	fn format__zero() {
		for radix in MIN_RADIX..=MAX_RADIX {
			assert_eq!(format(&BigUInt::zero(), radix, false), "0");
		}
	}
	#[test]
	fn format__pads_lower_chunks() {
		//	2^64 in decimal is two chunks, the lower of which starts with zeros
		assert_eq!(format(&BigUInt::from_words(vec![0, 1]), 10, false), "18446744073709551616");
		assert_eq!(format(&BigUInt::from(10_u128.pow(19)), 10, false), "10000000000000000000");
		assert_eq!(format(&BigUInt::from_words(vec![0, 1]), 16, false), "10000000000000000");
	}
	#[test]
	fn format__uppercase() {
		assert_eq!(format(&BigUInt::from(0xABCD_u16), 16, true),  "ABCD");
		assert_eq!(format(&BigUInt::from(0xABCD_u16), 16, false), "abcd");
		assert_eq!(format(&BigUInt::from(1295_u16),   36, true),  "ZZ");
	}
	#[test]
	fn format__round_trips_every_radix() {
		let value = BigUInt::from_words(vec![0x0123_4567_89AB_CDEF, 0xFEDC_BA98_7654_3210, 42]);
		for radix in MIN_RADIX..=MAX_RADIX {
			let text = format(&value, radix, false);
			assert!(!text.starts_with('0'), "radix {radix}: {text}");
			assert_ok_eq!(parse(&text, radix), value.clone());
		}
	}
	#[test]
	fn format__matches_primitives() {
		let value = u128::MAX - 12_345;
		assert_eq!(format(&BigUInt::from(value), 10, false), value.to_string());
		assert_eq!(format(&BigUInt::from(value), 16, false), format!("{value:x}"));
		assert_eq!(format(&BigUInt::from(value), 8,  false), format!("{value:o}"));
		assert_eq!(format(&BigUInt::from(value), 2,  false), format!("{value:b}"));
	}
}
