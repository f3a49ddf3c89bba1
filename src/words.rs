//! Word buffers and the word-slice kernels that every value type is built on.
//! 
//! A magnitude is a little-endian sequence of [`Word`]s. The kernels in this
//! module work on plain slices and return freshly-allocated vectors, which
//! may carry excess high-order zero words. Callers turn them into a
//! [`WordBuffer`], whose only constructor trims them to canonical form.

//	These lint checks are unnecessary in this module because all indexing is
//	bounded by lengths computed from the operands in the same function, and the
//	arithmetic is the carry/borrow logic itself.
#![allow(
	clippy::indexing_slicing,
	clippy::missing_asserts_for_indexing,
	reason = "Indices are derived from operand lengths"
)]
#![allow(clippy::arithmetic_side_effects, reason = "Carry and borrow arithmetic is intentional")]
#![allow(clippy::as_conversions, reason = "Word counts and bit counts are widened losslessly")]



//		Modules

#[cfg(test)]
#[path = "tests/words.rs"]
mod tests;



//		Packages

use core::cmp::Ordering;



//		Type aliases

/// A single limb of a magnitude.
/// 
/// The width is fixed at 64 bits on every platform, so that the word
/// representation and everything derived from it is reproducible.
pub type Word = u64;

/// An unsigned integer twice as wide as a [`Word`], used to hold partial
/// products and two-word dividends without overflow.
pub(crate) type DoubleWord = u128;



//		Constants

/// Number of bits in a [`Word`].
pub const WORD_BITS: u32 = Word::BITS;



//		Structs

//		WordBuffer																
/// A canonical little-endian sequence of [`Word`]s.
/// 
/// The buffer always holds at least one word, and its most-significant word
/// is non-zero unless the buffer is exactly `[0]`. Since [`from_vec()`](WordBuffer::from_vec())
/// is the only way to build one, a non-canonical buffer can never be
/// observed.
/// 
#[derive(Clone, Eq, Hash, PartialEq)]
pub(crate) struct WordBuffer(Vec<Word>);

//󰭅		WordBuffer																
impl WordBuffer {
	//		from_vec															
	/// Creates a buffer from raw words, trimming it to canonical form.
	pub(crate) fn from_vec(mut words: Vec<Word>) -> Self {
		trim(&mut words);
		Self(words)
	}
	
	//		zero																
	/// The canonical representation of zero.
	pub(crate) fn zero() -> Self {
		Self(vec![0])
	}
	
	//		as_slice															
	pub(crate) fn as_slice(&self) -> &[Word] {
		&self.0
	}
	
	//		into_vec															
	pub(crate) fn into_vec(self) -> Vec<Word> {
		self.0
	}
	
	//		len																	
	pub(crate) fn len(&self) -> usize {
		self.0.len()
	}
	
	//		is_zero																
	pub(crate) fn is_zero(&self) -> bool {
		self.0.len() == 1 && self.0[0] == 0
	}
}

//󰭅		Default																	
impl Default for WordBuffer {
	//		default																
	fn default() -> Self {
		Self::zero()
	}
}

//󰭅		Ord																		
impl Ord for WordBuffer {
	//		cmp																	
	fn cmp(&self, other: &Self) -> Ordering {
		cmp(&self.0, &other.0)
	}
}

//󰭅		PartialOrd																
impl PartialOrd for WordBuffer {
	//		partial_cmp															
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		Some(self.cmp(other))
	}
}



//		Functions

//		trim																	
/// Removes superfluous most-significant zero words, leaving at least one.
pub(crate) fn trim(words: &mut Vec<Word>) {
	while words.len() > 1 && words.last() == Some(&0) {
		_ = words.pop();
	}
	if words.is_empty() {
		words.push(0);
	}
}

//		cmp																		
/// Compares two canonical magnitudes.
/// 
/// A longer canonical buffer is always the larger value, so the words only
/// need comparing, most-significant first, when the lengths match.
/// 
pub(crate) fn cmp(lhs: &[Word], rhs: &[Word]) -> Ordering {
	lhs.len().cmp(&rhs.len()).then_with(|| lhs.iter().rev().cmp(rhs.iter().rev()))
}

//		cmp_padded																
/// Compares two magnitudes that may carry high-order zero words.
pub(crate) fn cmp_padded(lhs: &[Word], rhs: &[Word]) -> Ordering {
	cmp(significant(lhs), significant(rhs))
}

//		significant																
/// Returns the slice without its high-order zero words (keeping at least one).
fn significant(words: &[Word]) -> &[Word] {
	let len = words.iter().rposition(|&w| w != 0).map_or(1, |pos| pos + 1);
	&words[..len.min(words.len())]
}

//		bit_len																	
/// Number of bits up to and including the most-significant set bit.
pub(crate) fn bit_len(words: &[Word]) -> u64 {
	let words = significant(words);
	let last  = words[words.len() - 1];
	words.len() as u64 * u64::from(WORD_BITS) - u64::from(last.leading_zeros())
}

//		get_bit																	
pub(crate) fn get_bit(words: &[Word], pos: u64) -> bool {
	let index = usize::try_from(pos / u64::from(WORD_BITS)).unwrap_or(usize::MAX);
	words.get(index).is_some_and(|&w| (w >> (pos % u64::from(WORD_BITS))) & 1 == 1)
}

//		set_bit																	
fn set_bit(words: &mut [Word], pos: u64) {
	#[expect(clippy::cast_possible_truncation, reason = "Bit positions index in-memory buffers")]
	let index = (pos / u64::from(WORD_BITS)) as usize;
	let mask: Word = 1 << (pos % u64::from(WORD_BITS));
	words[index] |= mask;
}

//		add																		
/// Ripple-carry addition.
/// 
/// The result has `max(len) + 1` words, so the final carry always has
/// somewhere to go.
/// 
pub(crate) fn add(lhs: &[Word], rhs: &[Word]) -> Vec<Word> {
	let (long, short) = if lhs.len() >= rhs.len() { (lhs, rhs) } else { (rhs, lhs) };
	let mut sum       = Vec::with_capacity(long.len() + 1);
	let mut carry     = false;
	
	for (i, &word) in long.iter().enumerate() {
		let (sum1, c1) = word.overflowing_add(short.get(i).copied().unwrap_or(0));
		let (sum2, c2) = sum1.overflowing_add(Word::from(carry));
		sum.push(sum2);
		carry          = c1 || c2;
	}
	sum.push(Word::from(carry));
	sum
}

//		sub_assign																
/// Ripple-borrow subtraction in place, returning whether a borrow escaped
/// the top word (i.e. whether `acc < rhs`).
/// 
/// Words of `rhs` beyond the length of `acc` must be zero.
/// 
pub(crate) fn sub_assign(acc: &mut [Word], rhs: &[Word]) -> bool {
	debug_assert!(rhs.iter().skip(acc.len()).all(|&w| w == 0), "Subtrahend is wider than minuend");
	let mut borrow = false;
	
	for (i, word) in acc.iter_mut().enumerate() {
		let sub        = rhs.get(i).copied().unwrap_or(0);
		if sub == 0 && !borrow && i >= rhs.len() {
			break;
		}
		let (diff1, b1) = word.overflowing_sub(sub);
		let (diff2, b2) = diff1.overflowing_sub(Word::from(borrow));
		*word          = diff2;
		borrow         = b1 || b2;
	}
	borrow
}

//		sub																		
/// Ripple-borrow subtraction. Requires `lhs >= rhs`.
pub(crate) fn sub(lhs: &[Word], rhs: &[Word]) -> Vec<Word> {
	let mut diff   = lhs.to_vec();
	let borrow     = sub_assign(&mut diff, rhs);
	debug_assert!(!borrow, "Minuend is less than subtrahend");
	diff
}

//		mul																		
/// Schoolbook multiplication with a double-width accumulator.
/// 
/// The result has `len(lhs) + len(rhs)` words. Each row adds one word of
/// `lhs` times all of `rhs` into the accumulator; the largest intermediate
/// value, `(2^64 - 1)^2 + 2 * (2^64 - 1)`, is exactly `u128::MAX`.
/// 
pub(crate) fn mul(lhs: &[Word], rhs: &[Word]) -> Vec<Word> {
	let mut prod = vec![0; lhs.len() + rhs.len()];
	
	for (i, &l) in lhs.iter().enumerate() {
		if l == 0 {
			continue;
		}
		let mut carry: DoubleWord = 0;
		for (j, &r) in rhs.iter().enumerate() {
			let t = DoubleWord::from(l) * DoubleWord::from(r) + DoubleWord::from(prod[i + j]) + carry;
			#[expect(clippy::cast_possible_truncation, reason = "Low word kept, high word carried")]
			let low     = t as Word;
			prod[i + j] = low;
			carry       = t >> WORD_BITS;
		}
		#[expect(clippy::cast_possible_truncation, reason = "Final carry always fits in one word")]
		let high            = carry as Word;
		prod[i + rhs.len()] = high;
	}
	prod
}

//		div_rem_word															
/// Divides by a single non-zero word, returning the quotient words and the
/// remainder.
pub(crate) fn div_rem_word(lhs: &[Word], divisor: Word) -> (Vec<Word>, Word) {
	debug_assert_ne!(divisor, 0, "Division by zero");
	let divisor      = DoubleWord::from(divisor);
	let mut quotient = vec![0; lhs.len()];
	let mut rem      = 0;
	
	for i in (0..lhs.len()).rev() {
		let current = (rem << WORD_BITS) | DoubleWord::from(lhs[i]);
		#[expect(clippy::cast_possible_truncation, clippy::integer_division, reason = "Quotient digit is less than the base since rem < divisor")]
		let digit   = (current / divisor) as Word;
		quotient[i] = digit;
		rem         = current % divisor;
	}
	#[expect(clippy::cast_possible_truncation, reason = "Remainder is less than a one-word divisor")]
	let rem = rem as Word;
	(quotient, rem)
}

//		div_rem																	
/// Bit-serial long division. Requires a non-zero divisor and
/// `len(lhs) >= len(rhs)`.
/// 
/// The remainder is accumulated in a scratch of `len(rhs) + 1` words: it is
/// always less than `rhs` after each step, so shifting it left by one bit
/// cannot overflow that width. The quotient takes `len(lhs) - len(rhs) + 1`
/// words.
/// 
pub(crate) fn div_rem(lhs: &[Word], rhs: &[Word]) -> (Vec<Word>, Vec<Word>) {
	debug_assert!(lhs.len() >= rhs.len(), "Dividend is shorter than divisor");
	let mut quotient  = vec![0; lhs.len() - rhs.len() + 1];
	let mut remainder = vec![0; rhs.len() + 1];
	
	for pos in (0..bit_len(lhs)).rev() {
		shl_one_assign(&mut remainder);
		remainder[0] |= Word::from(get_bit(lhs, pos));
		if cmp_padded(&remainder, rhs) != Ordering::Less {
			_ = sub_assign(&mut remainder, rhs);
			set_bit(&mut quotient, pos);
		}
	}
	(quotient, remainder)
}

//		shl_one_assign															
/// Shifts left by one bit in place, dropping whatever leaves the top word.
fn shl_one_assign(words: &mut [Word]) {
	let mut carry = 0;
	for word in words {
		let next = *word >> (WORD_BITS - 1);
		*word    = (*word << 1) | carry;
		carry    = next;
	}
}

//		shl																		
/// Shifts left by `shift` bits: whole words first, then the bit remainder
/// with carries between words.
pub(crate) fn shl(words: &[Word], shift: usize) -> Vec<Word> {
	#[expect(clippy::integer_division, reason = "Whole-word part of the shift")]
	let whole       = shift / WORD_BITS as usize;
	#[expect(clippy::cast_possible_truncation, reason = "Remainder is less than WORD_BITS")]
	let bits        = (shift % WORD_BITS as usize) as u32;
	let mut shifted = vec![0; whole];
	shifted.reserve(words.len() + 1);
	
	if bits == 0 {
		shifted.extend_from_slice(words);
	} else {
		let mut carry = 0;
		for &word in words {
			shifted.push((word << bits) | carry);
			carry = word >> (WORD_BITS - bits);
		}
		shifted.push(carry);
	}
	shifted
}

//		shr																		
/// Shifts right by `shift` bits, discarding everything shifted below bit 0.
pub(crate) fn shr(words: &[Word], shift: usize) -> Vec<Word> {
	#[expect(clippy::integer_division, reason = "Whole-word part of the shift")]
	let whole  = shift / WORD_BITS as usize;
	if whole >= words.len() {
		return vec![0];
	}
	#[expect(clippy::cast_possible_truncation, reason = "Remainder is less than WORD_BITS")]
	let bits   = (shift % WORD_BITS as usize) as u32;
	let source = &words[whole..];
	
	if bits == 0 {
		return source.to_vec();
	}
	source.iter().enumerate()
		.map(|(i, &word)| {
			let high = source.get(i + 1).map_or(0, |&next| next << (WORD_BITS - bits));
			(word >> bits) | high
		})
		.collect()
}

//		bitand																	
/// Word-wise AND over the shorter operand; the rest is implicitly zero.
pub(crate) fn bitand(lhs: &[Word], rhs: &[Word]) -> Vec<Word> {
	lhs.iter().zip(rhs).map(|(&l, &r)| l & r).collect()
}

//		bitor																	
pub(crate) fn bitor(lhs: &[Word], rhs: &[Word]) -> Vec<Word> {
	zip_longest(lhs, rhs, |l, r| l | r)
}

//		bitxor																	
pub(crate) fn bitxor(lhs: &[Word], rhs: &[Word]) -> Vec<Word> {
	zip_longest(lhs, rhs, |l, r| l ^ r)
}

//		not																		
/// Finite-width complement over exactly `len(words)` words.
pub(crate) fn not(words: &[Word]) -> Vec<Word> {
	words.iter().map(|&w| !w).collect()
}

//		zip_longest																
/// Applies `op` word-wise over the longer operand, zero-extending the
/// shorter one.
fn zip_longest<F>(lhs: &[Word], rhs: &[Word], op: F) -> Vec<Word>
where
	F: Fn(Word, Word) -> Word,
{
	let len = lhs.len().max(rhs.len());
	(0..len)
		.map(|i| op(lhs.get(i).copied().unwrap_or(0), rhs.get(i).copied().unwrap_or(0)))
		.collect()
}

//		trailing_zeros															
/// Counts zero bits from the least-significant end.
/// 
/// A buffer of only zero words counts all of its bits, so the canonical zero
/// `[0]` has [`WORD_BITS`] trailing zeros.
/// 
pub(crate) fn trailing_zeros(words: &[Word]) -> u64 {
	words.iter().position(|&w| w != 0).map_or_else(
		|| words.len() as u64 * u64::from(WORD_BITS),
		|pos| pos as u64 * u64::from(WORD_BITS) + u64::from(words[pos].trailing_zeros()),
	)
}

//		negate_assign															
/// Replaces the words with their two's complement (invert, then add one),
/// within the same width.
pub(crate) fn negate_assign(words: &mut [Word]) {
	let mut carry = true;
	for word in words {
		let (value, overflow) = (!*word).overflowing_add(Word::from(carry));
		*word                 = value;
		carry                 = overflow;
	}
}

//		is_sign_set																
/// Whether the top bit of the top word is set, i.e. whether a two's
/// complement sequence is negative.
pub(crate) fn is_sign_set(words: &[Word]) -> bool {
	words.last().is_some_and(|&w| w >> (WORD_BITS - 1) == 1)
}

//		twos_complement															
/// Encodes a sign and magnitude as a two's complement sequence of `len`
/// words. `len` must exceed the length of the magnitude, so that the top word
/// is pure sign extension.
pub(crate) fn twos_complement(magnitude: &[Word], negative: bool, len: usize) -> Vec<Word> {
	debug_assert!(len > magnitude.len(), "No room for sign extension");
	let mut view = vec![0; len];
	view[..magnitude.len()].copy_from_slice(magnitude);
	if negative {
		negate_assign(&mut view);
	}
	view
}

//		trim_twos_complement													
/// Drops redundant sign-extension words from a two's complement sequence,
/// keeping the shortest sequence that still has the same sign.
pub(crate) fn trim_twos_complement(words: &mut Vec<Word>) {
	let negative  = is_sign_set(words);
	let extension = if negative { Word::MAX } else { 0 };
	while words.len() > 1
		&& words.last() == Some(&extension)
		&& is_sign_set(&words[..words.len() - 1]) == negative
	{
		_ = words.pop();
	}
}
