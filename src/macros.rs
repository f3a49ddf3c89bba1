//! Macros for implementing operators across owned and borrowed operands.
//! 
//! Each operator is implemented once, for `&T op &T`, and these macros
//! forward the owned combinations and the compound-assignment forms to it.



//		Macros

//		forward_binop															
/// Forwards `T op T`, `T op &T`, and `&T op T` to the `&T op &T`
/// implementation.
macro_rules! forward_binop {
	(impl $imp:ident, $method:ident for $t:ty) => {
		impl $imp<$t> for $t {
			type Output = $t;
			
			#[inline]
			fn $method(self, rhs: $t) -> $t {
				$imp::$method(&self, &rhs)
			}
		}
		
		impl $imp<&$t> for $t {
			type Output = $t;
			
			#[inline]
			fn $method(self, rhs: &$t) -> $t {
				$imp::$method(&self, rhs)
			}
		}
		
		impl $imp<$t> for &$t {
			type Output = $t;
			
			#[inline]
			fn $method(self, rhs: $t) -> $t {
				$imp::$method(self, &rhs)
			}
		}
	};
}

//		forward_assign															
/// Implements `T op= T` and `T op= &T` in terms of `&T op &T`.
macro_rules! forward_assign {
	(impl $imp:ident, $method:ident => $op:ident, $op_method:ident for $t:ty) => {
		impl $imp<$t> for $t {
			#[inline]
			fn $method(&mut self, rhs: $t) {
				*self = $op::$op_method(&*self, &rhs);
			}
		}
		
		impl $imp<&$t> for $t {
			#[inline]
			fn $method(&mut self, rhs: &$t) {
				*self = $op::$op_method(&*self, rhs);
			}
		}
	};
}

//		forward_all																
/// Forwards every combination of a binary operator and its assignment form.
macro_rules! forward_all {
	($op:ident, $op_method:ident, $assign:ident, $assign_method:ident for $t:ty) => {
		forward_binop!(impl $op, $op_method for $t);
		forward_assign!(impl $assign, $assign_method => $op, $op_method for $t);
	};
}

//		impl_sum_product														
/// Implements [`Sum`](core::iter::Sum) and [`Product`](core::iter::Product)
/// over owned and borrowed items.
macro_rules! impl_sum_product {
	($t:ty) => {
		impl core::iter::Product for $t {
			fn product<I>(iter: I) -> Self
			where
				I: Iterator<Item = Self>,
			{
				iter.fold(<$t>::one(), |acc, x| &acc * &x)
			}
		}
		
		impl<'a> core::iter::Product<&'a $t> for $t {
			fn product<I>(iter: I) -> Self
			where
				I: Iterator<Item = &'a $t>,
			{
				iter.fold(<$t>::one(), |acc, x| &acc * x)
			}
		}
		
		impl core::iter::Sum for $t {
			fn sum<I>(iter: I) -> Self
			where
				I: Iterator<Item = Self>,
			{
				iter.fold(<$t>::zero(), |acc, x| &acc + &x)
			}
		}
		
		impl<'a> core::iter::Sum<&'a $t> for $t {
			fn sum<I>(iter: I) -> Self
			where
				I: Iterator<Item = &'a $t>,
			{
				iter.fold(<$t>::zero(), |acc, x| &acc + x)
			}
		}
	};
}
