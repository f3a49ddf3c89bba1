//		Packages

use super::*;
use crate::words;
use num_bigint::{BigInt as NumBigInt, BigUint as NumBigUint, Sign};
use proptest::prelude::*;



//		Helpers

//		biguint																	
/// Unsigned values of up to five words, with every word width equally likely.
fn biguint() -> impl Strategy<Value = BigUInt> {
	prop::collection::vec(any::<Word>(), 1..=5).prop_map(BigUInt::from_words)
}

//		bigint																	
/// Signed values of up to five words of magnitude.
fn bigint() -> impl Strategy<Value = BigInt> {
	(any::<bool>(), biguint()).prop_map(|(negative, magnitude)| BigInt::from_parts(negative, magnitude))
}

//		to_num																	
fn to_num(value: &BigUInt) -> NumBigUint {
	NumBigUint::from_bytes_le(&value.to_le_bytes())
}

//		to_num_signed															
fn to_num_signed(value: &BigInt) -> NumBigInt {
	let sign = if value.is_negative() { Sign::Minus } else { Sign::Plus };
	NumBigInt::from_biguint(sign, to_num(value.magnitude()))
}

//		is_canonical															
fn is_canonical(value: &BigUInt) -> bool {
	let words = value.words();
	!words.is_empty() && (words.len() == 1 || words.last() != Some(&0))
}



//		Tests

mod unsigned {
	use super::*;
	
	proptest! {
		//		Radix conversion												
		#[test]
		fn radix__round_trips(a in biguint(), radix in 2_u32..=36) {
			let text = a.to_str_radix(radix);
			prop_assert_eq!(&text, &to_num(&a).to_str_radix(radix));
			prop_assert_eq!(BigUInt::from_str_radix(&text, radix).unwrap(), a);
		}
		
		//		Arithmetic														
		#[test]
		fn arithmetic__matches_reference(a in biguint(), b in biguint()) {
			prop_assert_eq!((&a + &b).to_string(), (to_num(&a) + to_num(&b)).to_string());
			prop_assert_eq!((&a * &b).to_string(), (to_num(&a) * to_num(&b)).to_string());
			if a >= b {
				let difference = &a - &b;
				prop_assert!(is_canonical(&difference));
				prop_assert_eq!(difference.to_string(), (to_num(&a) - to_num(&b)).to_string());
			} else {
				prop_assert!(a.checked_sub(&b).is_none());
			}
		}
		#[test]
		fn arithmetic__commutes_and_associates(a in biguint(), b in biguint(), c in biguint()) {
			prop_assert_eq!(&a + &b, &b + &a);
			prop_assert_eq!(&a * &b, &b * &a);
			prop_assert_eq!((&a + &b) + &c, &a + (&b + &c));
			prop_assert_eq!((&a * &b) * &c, &a * (&b * &c));
			prop_assert_eq!(&a * (&b + &c), &a * &b + &a * &c);
		}
		
		//		Division														
		#[test]
		fn div_rem__identity(a in biguint(), b in biguint()) {
			prop_assume!(!b.is_zero());
			let (quotient, remainder) = a.div_rem(&b);
			prop_assert!(remainder < b);
			prop_assert!(is_canonical(&quotient));
			prop_assert!(is_canonical(&remainder));
			prop_assert_eq!(&quotient * &b + &remainder, a.clone());
			prop_assert_eq!(quotient.to_string(),  (to_num(&a) / to_num(&b)).to_string());
			prop_assert_eq!(remainder.to_string(), (to_num(&a) % to_num(&b)).to_string());
		}
		#[test]
		fn div_rem__single_word_divisor(a in biguint(), b in 1..=Word::MAX) {
			let divisor               = BigUInt::from(b);
			let (quotient, remainder) = a.div_rem(&divisor);
			prop_assert_eq!(quotient * &divisor + remainder, a);
		}
		
		//		Comparison														
		#[test]
		fn ord__matches_reference(a in biguint(), b in biguint()) {
			prop_assert_eq!(a.cmp(&b), to_num(&a).cmp(&to_num(&b)));
		}
		
		//		Shifts															
		#[test]
		fn shifts__round_trip(a in biguint(), n in 0_usize..300) {
			prop_assert_eq!((&a << n) >> n, a.clone());
			prop_assert_eq!((&a << n).to_string(), (to_num(&a) << n).to_string());
			prop_assert_eq!((&a >> n).to_string(), (to_num(&a) >> n).to_string());
		}
		
		//		Bitwise															
		#[test]
		fn bitwise__matches_reference(a in biguint(), b in biguint()) {
			let and = &a & &b;
			let xor = &a ^ &b;
			prop_assert!(is_canonical(&and));
			prop_assert!(is_canonical(&xor));
			prop_assert_eq!(and.to_string(),       (to_num(&a) & to_num(&b)).to_string());
			prop_assert_eq!((&a | &b).to_string(), (to_num(&a) | to_num(&b)).to_string());
			prop_assert_eq!(xor.to_string(),       (to_num(&a) ^ to_num(&b)).to_string());
		}
		
		//		Bytes															
		#[test]
		fn bytes__match_reference(a in biguint()) {
			prop_assert_eq!(a.to_be_bytes(), to_num(&a).to_bytes_be());
			prop_assert_eq!(a.to_le_bytes(), to_num(&a).to_bytes_le());
		}
		
		//		Modular arithmetic												
		#[test]
		fn mul_mod__matches_full_product(a in biguint(), b in biguint(), m in biguint()) {
			prop_assume!(!m.is_zero());
			prop_assert_eq!(a.mul_mod(&b, &m), (&a * &b) % &m);
		}
		#[test]
		fn pow_mod__matches_reference(a in biguint(), e in 0_u32..200, m in biguint()) {
			prop_assume!(!m.is_zero());
			let expected = to_num(&a).modpow(&NumBigUint::from(e), &to_num(&m));
			prop_assert_eq!(a.pow_mod(e, &m).to_string(), expected.to_string());
		}
	}
}

mod signed {
	use super::*;
	
	proptest! {
		//		Radix conversion												
		#[test]
		fn radix__round_trips(a in bigint(), radix in 2_u32..=36) {
			let text = a.to_str_radix(radix);
			prop_assert_eq!(&text, &to_num_signed(&a).to_str_radix(radix));
			prop_assert_eq!(BigInt::from_str_radix(&text, radix).unwrap(), a);
		}
		
		//		Arithmetic														
		#[test]
		fn arithmetic__matches_reference(a in bigint(), b in bigint()) {
			prop_assert_eq!((&a + &b).to_string(), (to_num_signed(&a) + to_num_signed(&b)).to_string());
			prop_assert_eq!((&a - &b).to_string(), (to_num_signed(&a) - to_num_signed(&b)).to_string());
			prop_assert_eq!((&a * &b).to_string(), (to_num_signed(&a) * to_num_signed(&b)).to_string());
		}
		#[test]
		fn additive_inverse(a in bigint(), b in bigint()) {
			prop_assert!((&a + &-&a).is_zero());
			prop_assert!(!(&a + &-&a).is_negative());
			prop_assert_eq!(&a - &b, -(&b - &a));
		}
		
		//		Division														
		#[test]
		fn div_rem__truncates(a in bigint(), b in bigint()) {
			prop_assume!(!b.is_zero());
			let (quotient, remainder) = a.div_rem(&b);
			prop_assert!(remainder.magnitude() < b.magnitude());
			prop_assert!(remainder.is_zero() || remainder.is_negative() == a.is_negative());
			prop_assert_eq!(&quotient * &b + &remainder, a.clone());
			prop_assert_eq!(quotient.to_string(),  (to_num_signed(&a) / to_num_signed(&b)).to_string());
			prop_assert_eq!(remainder.to_string(), (to_num_signed(&a) % to_num_signed(&b)).to_string());
		}
		
		//		Comparison														
		#[test]
		fn ord__matches_reference(a in bigint(), b in bigint()) {
			prop_assert_eq!(a.cmp(&b), to_num_signed(&a).cmp(&to_num_signed(&b)));
		}
		
		//		Two's complement												
		#[test]
		fn bitwise__matches_reference(a in bigint(), b in bigint()) {
			let (na, nb) = (to_num_signed(&a), to_num_signed(&b));
			prop_assert_eq!((&a & &b).to_string(), (&na & &nb).to_string());
			prop_assert_eq!((&a | &b).to_string(), (&na | &nb).to_string());
			prop_assert_eq!((&a ^ &b).to_string(), (&na ^ &nb).to_string());
		}
		#[test]
		fn bitwise__laws(a in bigint(), b in bigint()) {
			prop_assert_eq!(!&a, -(&a + BigInt::one()));
			prop_assert_eq!(!!a.clone(), a.clone());
			prop_assert!((&a ^ &a).is_zero());
			prop_assert_eq!(&a & &a, a.clone());
			prop_assert_eq!(&a | &BigInt::zero(), a.clone());
			prop_assert_eq!(&a & &BigInt::from(-1), a.clone());
			prop_assert_eq!(!(&a & &b), !&a | !&b);
		}
		#[test]
		fn words__sign_extends(a in bigint()) {
			let view = a.words();
			prop_assert!(!view.is_empty());
			let top = view.last().copied().unwrap_or_default();
			prop_assert_eq!(words::is_sign_set(&view), a.is_negative());
			if view.len() > 1 {
				//	The top word is only kept when the word below it disagrees on the sign
				let below = view.get(view.len() - 2).copied().unwrap_or_default();
				let fill  = if a.is_negative() { Word::MAX } else { 0 };
				prop_assert!(top != fill || (below >> (WORD_BITS - 1) == 1) != a.is_negative());
			}
		}
		
		//		Shifts															
		#[test]
		fn shifts__round_trip(a in bigint(), n in 0_usize..300) {
			prop_assert_eq!((&a << n) >> n, a.clone());
			let shifted   = &a << n;
			let magnitude = a.magnitude() << n;
			prop_assert_eq!(shifted.magnitude(), &magnitude);
		}
		
		//		Modular arithmetic												
		#[test]
		fn modular__residues(a in bigint(), b in bigint(), m in biguint()) {
			prop_assume!(!m.is_zero());
			let modulus = BigInt::from(m);
			let product = a.mul_mod(&b, &modulus);
			prop_assert!(!product.is_negative());
			prop_assert!(product < modulus);
			prop_assert_eq!(product, (&a * &b).rem_euclid(&modulus));
			prop_assert_eq!(a.add_mod(&b, &modulus), (&a + &b).rem_euclid(&modulus));
			prop_assert_eq!(a.sub_mod(&b, &modulus), (&a - &b).rem_euclid(&modulus));
		}
	}
}
