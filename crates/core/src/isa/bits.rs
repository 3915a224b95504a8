//! Bit-field extraction primitives.
//!
//! Every instruction format view is built on the two functions in this
//! module. They are pure, total for any range inside a 32-bit word, and
//! carry no state, so each decode step is independently testable.

/// Width of an instruction word in bits.
const WORD_BITS: u32 = 32;

/// Extracts the inclusive bit range `[a, b]` of `word`, shifted down to bit 0.
///
/// The bounds may be passed in either order: `bit_range(w, 7, 11)` and
/// `bit_range(w, 11, 7)` return the same value. Both bounds must be below 32.
///
/// # Arguments
///
/// * `word` - The raw 32-bit value to slice.
/// * `a` - One end of the inclusive bit range.
/// * `b` - The other end of the inclusive bit range.
#[inline(always)]
#[must_use]
pub const fn bit_range(word: u32, a: u32, b: u32) -> u32 {
    let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
    let width = hi - lo + 1;
    let mask = if width >= WORD_BITS {
        u32::MAX
    } else {
        (1 << width) - 1
    };
    (word >> lo) & mask
}

/// Sign-extends the low `bits` bits of `value` to a full 32-bit signed integer.
///
/// `bits` must be in `1..=32`. Bits of `value` above `bits` are ignored.
#[inline(always)]
#[must_use]
pub const fn sign_extend(value: u32, bits: u32) -> i32 {
    let shift = WORD_BITS - bits;
    ((value << shift) as i32) >> shift
}
