//! Exponentiation and modular arithmetic.
//! 
//! Every modular operation reduces its operands first, and every result is a
//! residue in the range `0..m`, including for negative [`BigInt`] operands.

#![allow(clippy::arithmetic_side_effects, reason = "Operands are arbitrary-precision and cannot overflow")]



//		Modules

#[cfg(test)]
#[path = "tests/modular.rs"]
mod tests;



//		Packages

use crate::{
	bigint::BigInt,
	biguint::BigUInt,
};



//		Traits

//		ModularOperations														
/// Arithmetic modulo a positive modulus.
/// 
/// # Panics
/// 
/// Every operation panics if the modulus is not greater than zero.
/// 
pub trait ModularOperations: Sized {
	//		modulo																
	/// The least non-negative residue of `self` modulo `m`.
	/// 
	/// # Parameters
	/// 
	/// * `m` - The modulus.
	/// 
	#[must_use]
	fn modulo(&self, m: &Self) -> Self;
	
	//		add_mod																
	/// Computes `(self + rhs) mod m`.
	/// 
	/// # Parameters
	/// 
	/// * `rhs` - The value to add.
	/// * `m`   - The modulus.
	/// 
	#[must_use]
	fn add_mod(&self, rhs: &Self, m: &Self) -> Self;
	
	//		sub_mod																
	/// Computes `(self - rhs) mod m`, wrapping around the modulus rather than
	/// going negative.
	/// 
	/// # Parameters
	/// 
	/// * `rhs` - The value to subtract.
	/// * `m`   - The modulus.
	/// 
	#[must_use]
	fn sub_mod(&self, rhs: &Self, m: &Self) -> Self;
	
	//		mul_mod																
	/// Computes `(self * rhs) mod m` by modular double-and-add, so that no
	/// intermediate value exceeds twice the modulus.
	/// 
	/// # Parameters
	/// 
	/// * `rhs` - The value to multiply by.
	/// * `m`   - The modulus.
	/// 
	#[must_use]
	fn mul_mod(&self, rhs: &Self, m: &Self) -> Self;
	
	//		pow_mod																
	/// Computes `self^exponent mod m` by square-and-multiply.
	/// 
	/// A negative exponent gives zero, and an exponent of zero gives
	/// `1 mod m`.
	/// 
	/// # Parameters
	/// 
	/// * `exponent` - The power to raise `self` to.
	/// * `m`        - The modulus.
	/// 
	#[must_use]
	fn pow_mod<E: Into<BigInt>>(&self, exponent: E, m: &Self) -> Self;
}



//		Implementations

//󰭅		BigUInt																	
impl BigUInt {
	//		pow																	
	/// Raises the value to a power by square-and-multiply, consuming the
	/// exponent from its least significant bit.
	/// 
	/// A negative exponent gives zero, and an exponent of zero gives one,
	/// including for a base of zero.
	/// 
	/// # Parameters
	/// 
	/// * `exponent` - The power to raise `self` to.
	/// 
	#[must_use]
	pub fn pow<E: Into<BigInt>>(&self, exponent: E) -> Self {
		let exponent = exponent.into();
		if exponent.is_negative() {
			return Self::zero();
		}
		let mut exponent = exponent.magnitude().clone();
		if exponent.is_one() {
			return self.clone();
		}
		
		let mut base   = self.clone();
		let mut result = Self::one();
		while !exponent.is_zero() {
			if exponent.bit(0) {
				result = &result * &base;
			}
			exponent >>= 1_u32;
			if !exponent.is_zero() {
				base = &base * &base;
			}
		}
		result
	}
}

//󰭅		BigInt																	
impl BigInt {
	//		pow																	
	/// Raises the value to a power by square-and-multiply.
	/// 
	/// The result is negative only when the base is negative and the exponent
	/// is odd. A negative exponent gives zero.
	/// 
	/// # Parameters
	/// 
	/// * `exponent` - The power to raise `self` to.
	/// 
	#[must_use]
	pub fn pow<E: Into<Self>>(&self, exponent: E) -> Self {
		let exponent = exponent.into();
		let odd      = exponent.magnitude().bit(0);
		Self::from_parts(self.is_negative() && odd, self.magnitude().pow(exponent))
	}
	
	//		residue																
	/// The residue of `self` modulo a positive `m`, as a [`BigUInt`].
	fn residue(&self, m: &Self) -> BigUInt {
		assert_positive(m.is_positive());
		let (_, magnitude) = self.rem_euclid(m).into_parts();
		magnitude
	}
}

//󰭅		ModularOperations														
impl ModularOperations for BigUInt {
	//		modulo																
	fn modulo(&self, m: &Self) -> Self {
		assert_positive(!m.is_zero());
		self % m
	}
	
	//		add_mod																
	fn add_mod(&self, rhs: &Self, m: &Self) -> Self {
		let sum = self.modulo(m) + rhs.modulo(m);
		if &sum >= m { sum - m } else { sum }
	}
	
	//		sub_mod																
	fn sub_mod(&self, rhs: &Self, m: &Self) -> Self {
		let lhs = self.modulo(m);
		let rhs = rhs.modulo(m);
		if lhs >= rhs {
			lhs - rhs
		} else {
			(m - rhs) + lhs
		}
	}
	
	//		mul_mod																
	fn mul_mod(&self, rhs: &Self, m: &Self) -> Self {
		let lhs       = self.modulo(m);
		let rhs       = rhs.modulo(m);
		let half      = m >> 1_u32;
		let mut total = Self::zero();
		
		for pos in (0..lhs.bit_width()).rev() {
			//	Reduce while doubling, so the total stays below twice the modulus
			total = if total > half { (&total << 1_u32) - m } else { &total << 1_u32 };
			if lhs.bit(pos) {
				total = total.add_mod(&rhs, m);
			}
		}
		total % m
	}
	
	//		pow_mod																
	fn pow_mod<E: Into<BigInt>>(&self, exponent: E, m: &Self) -> Self {
		assert_positive(!m.is_zero());
		let exponent = exponent.into();
		if exponent.is_negative() {
			return Self::zero();
		}
		let mut exponent = exponent.magnitude().clone();
		let mut base     = self.modulo(m);
		if exponent.is_one() {
			return base;
		}
		
		let mut result = Self::one() % m;
		while !exponent.is_zero() {
			if exponent.bit(0) {
				result = result.mul_mod(&base, m);
			}
			exponent >>= 1_u32;
			if !exponent.is_zero() {
				base = base.mul_mod(&base, m);
			}
		}
		result
	}
}

//󰭅		ModularOperations														
impl ModularOperations for BigInt {
	//		modulo																
	fn modulo(&self, m: &Self) -> Self {
		Self::from(self.residue(m))
	}
	
	//		add_mod																
	fn add_mod(&self, rhs: &Self, m: &Self) -> Self {
		Self::from(self.residue(m).add_mod(&rhs.residue(m), m.magnitude()))
	}
	
	//		sub_mod																
	fn sub_mod(&self, rhs: &Self, m: &Self) -> Self {
		Self::from(self.residue(m).sub_mod(&rhs.residue(m), m.magnitude()))
	}
	
	//		mul_mod																
	fn mul_mod(&self, rhs: &Self, m: &Self) -> Self {
		Self::from(self.residue(m).mul_mod(&rhs.residue(m), m.magnitude()))
	}
	
	//		pow_mod																
	fn pow_mod<E: Into<BigInt>>(&self, exponent: E, m: &Self) -> Self {
		Self::from(self.residue(m).pow_mod(exponent, m.magnitude()))
	}
}



//		Functions

//		assert_positive															
fn assert_positive(is_positive: bool) {
	assert!(is_positive, "Modulus is not greater than zero");
}
