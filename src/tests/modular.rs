//		Packages

use super::*;



//		Tests

mod exponentiation {
	use super::*;
	
	//		pow																	
	#[test]
	fn pow__biguint() {
		assert_eq!(BigUInt::from(2_u8).pow(10),  BigUInt::from(1024_u16));
		assert_eq!(BigUInt::from(2_u8).pow(100), BigUInt::one() << 100_u32);
		assert_eq!(BigUInt::from(7_u8).pow(1),   BigUInt::from(7_u8));
	}
	#[test]
	fn pow__zero_exponent() {
		assert_eq!(BigUInt::from(9_u8).pow(0), BigUInt::one());
		assert_eq!(BigUInt::zero().pow(0),     BigUInt::one());
		assert_eq!(BigInt::from(-9).pow(0),    BigInt::one());
	}
	#[test]
	fn pow__negative_exponent() {
		assert_eq!(BigUInt::from(2_u8).pow(-1), BigUInt::zero());
		assert_eq!(BigInt::from(-2).pow(-3),    BigInt::zero());
	}
	#[test]
	fn pow__bigint_sign() {
		assert_eq!(BigInt::from(-2).pow(3),  BigInt::from(-8));
		assert_eq!(BigInt::from(-2).pow(4),  BigInt::from(16));
		assert_eq!(BigInt::from(-1).pow(BigInt::from(u128::MAX)), BigInt::from(-1));
	}
	#[test]
	fn pow__matches_primitives() {
		assert_eq!(BigUInt::from(3_u8).pow(80), BigUInt::from(3_u128.pow(80)));
		assert_eq!(BigInt::from(-3).pow(79),    BigInt::from(-(3_i128.pow(79))));
	}
}

mod biguint {
	use super::*;
	
	//		modulo																
	#[test]
	fn modulo() {
		assert_eq!(BigUInt::from(17_u8).modulo(&BigUInt::from(5_u8)), BigUInt::from(2_u8));
		assert_eq!(BigUInt::from(3_u8).modulo(&BigUInt::from(5_u8)),  BigUInt::from(3_u8));
	}
	#[test]
	#[should_panic(expected = "Modulus is not greater than zero")]
	fn modulo__zero_modulus() {
		let _ = BigUInt::from(3_u8).modulo(&BigUInt::zero());
	}
	
	//		add_mod																
	#[test]
	fn add_mod() {
		let m = BigUInt::from(7_u8);
		assert_eq!(BigUInt::from(5_u8).add_mod(&BigUInt::from(9_u8), &m),  BigUInt::zero());
		assert_eq!(BigUInt::from(5_u8).add_mod(&BigUInt::from(4_u8), &m),  BigUInt::from(2_u8));
		assert_eq!(BigUInt::from(50_u8).add_mod(&BigUInt::from(1_u8), &m), BigUInt::from(2_u8));
	}
	
	//		sub_mod																
	#[test]
	fn sub_mod__wraps() {
		let m = BigUInt::from(7_u8);
		assert_eq!(BigUInt::from(3_u8).sub_mod(&BigUInt::from(5_u8), &m),  BigUInt::from(5_u8));
		assert_eq!(BigUInt::from(5_u8).sub_mod(&BigUInt::from(3_u8), &m),  BigUInt::from(2_u8));
		assert_eq!(BigUInt::from(5_u8).sub_mod(&BigUInt::from(12_u8), &m), BigUInt::zero());
	}
	
	//		mul_mod																
	#[test]
	fn mul_mod__small() {
		assert_eq!(BigUInt::from(6_u8).mul_mod(&BigUInt::from(9_u8), &BigUInt::from(7_u8)), BigUInt::from(5_u8));
	}
	#[test]
	fn mul_mod__matches_full_product() {
		let a = BigUInt::from_words(vec![u64::MAX, 0x1234, 99]);
		let b = BigUInt::from_words(vec![7, u64::MAX]);
		let m = BigUInt::from_words(vec![0xDEAD_BEEF, 0xFFFF_FFFF_0000_0001]);
		assert_eq!(a.mul_mod(&b, &m), (&a * &b) % &m);
		assert_eq!(b.mul_mod(&a, &m), (&a * &b) % &m);
	}
	#[test]
	fn mul_mod__modulus_of_one() {
		assert_eq!(BigUInt::from(6_u8).mul_mod(&BigUInt::from(9_u8), &BigUInt::one()), BigUInt::zero());
	}
	
	//		pow_mod																
	#[test]
	fn pow_mod() {
		assert_eq!(BigUInt::from(7_u8).pow_mod(100, &BigUInt::from(13_u8)), BigUInt::from(9_u8));
		assert_eq!(BigUInt::from(4_u8).pow_mod(13,  &BigUInt::from(497_u16)), BigUInt::from(445_u16));
	}
	#[test]
	fn pow_mod__multi_word_exponent() {
		//	7 has order 12 modulo 13, and 2^64 is 4 modulo 12
		let m = BigUInt::from(13_u8);
		assert_eq!(BigUInt::from(7_u8).pow_mod(BigInt::from(1_u128 << 64),       &m), BigUInt::from(9_u8));
		assert_eq!(BigUInt::from(7_u8).pow_mod(BigInt::from((1_u128 << 64) + 1), &m), BigUInt::from(11_u8));
	}
	#[test]
	fn pow_mod__matches_pow() {
		let base = BigUInt::from(7_u8);
		let m    = BigUInt::from(13_u8);
		assert_eq!(base.pow_mod(100, &m), base.pow(100) % &m);
		
		let base = BigUInt::from_words(vec![0x0123_4567_89AB_CDEF, 5]);
		let m    = BigUInt::from_words(vec![u64::MAX, u64::MAX, 1]);
		assert_eq!(base.pow_mod(37, &m), base.pow(37) % &m);
	}
	#[test]
	fn pow_mod__edge_exponents() {
		let m = BigUInt::from(13_u8);
		assert_eq!(BigUInt::from(20_u8).pow_mod(0,  &m),               BigUInt::one());
		assert_eq!(BigUInt::from(20_u8).pow_mod(0,  &BigUInt::one()),  BigUInt::zero());
		assert_eq!(BigUInt::from(20_u8).pow_mod(1,  &m),               BigUInt::from(7_u8));
		assert_eq!(BigUInt::from(20_u8).pow_mod(-1, &m),               BigUInt::zero());
	}
	#[test]
	#[should_panic(expected = "Modulus is not greater than zero")]
	fn pow_mod__zero_modulus() {
		let _ = BigUInt::from(2_u8).pow_mod(3, &BigUInt::zero());
	}
}

mod bigint {
	use super::*;
	
	//		modulo																
	#[test]
	fn modulo__negative_operand() {
		assert_eq!(BigInt::from(-7).modulo(&BigInt::from(3)), BigInt::from(2));
		assert_eq!(BigInt::from(-6).modulo(&BigInt::from(3)), BigInt::zero());
		assert_eq!(BigInt::from(7).modulo(&BigInt::from(3)),  BigInt::one());
	}
	#[test]
	#[should_panic(expected = "Modulus is not greater than zero")]
	fn modulo__negative_modulus() {
		let _ = BigInt::from(7).modulo(&BigInt::from(-3));
	}
	#[test]
	#[should_panic(expected = "Modulus is not greater than zero")]
	fn modulo__zero_modulus() {
		let _ = BigInt::from(7).modulo(&BigInt::zero());
	}
	
	//		add_mod																
	#[test]
	fn add_mod() {
		assert_eq!(BigInt::from(-7).add_mod(&BigInt::from(-1), &BigInt::from(5)), BigInt::from(2));
	}
	
	//		sub_mod																
	#[test]
	fn sub_mod() {
		assert_eq!(BigInt::from(-1).sub_mod(&BigInt::from(3),  &BigInt::from(5)), BigInt::one());
		assert_eq!(BigInt::from(1).sub_mod(&BigInt::from(-3),  &BigInt::from(5)), BigInt::from(4));
	}
	
	//		mul_mod																
	#[test]
	fn mul_mod() {
		assert_eq!(BigInt::from(-3).mul_mod(&BigInt::from(4),  &BigInt::from(7)), BigInt::from(2));
		assert_eq!(BigInt::from(-3).mul_mod(&BigInt::from(-4), &BigInt::from(7)), BigInt::from(5));
	}
	
	//		pow_mod																
	#[test]
	fn pow_mod() {
		assert_eq!(BigInt::from(-2).pow_mod(3, &BigInt::from(5)),  BigInt::from(2));
		assert_eq!(BigInt::from(-2).pow_mod(2, &BigInt::from(5)),  BigInt::from(4));
		assert_eq!(BigInt::from(-2).pow_mod(-2, &BigInt::from(5)), BigInt::zero());
	}
	#[test]
	fn results_are_never_negative() {
		let m = BigInt::from(11);
		for a in -20_i32..20 {
			let a = BigInt::from(a);
			assert!(!a.modulo(&m).is_negative());
			assert!(a.modulo(&m) < m);
			assert!(!a.mul_mod(&BigInt::from(-3), &m).is_negative());
			assert!(!a.sub_mod(&BigInt::from(13), &m).is_negative());
		}
	}
}
