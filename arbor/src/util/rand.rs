//! Pseudo-random number generator compatible with `java.util.Random`.

use std::sync::atomic::{AtomicI64, Ordering};
use std::time::{UNIX_EPOCH, SystemTime};
use std::num::Wrapping;


const MULTIPLIER: Wrapping<i64> = Wrapping(0x5DEECE66D);
const ADDEND: Wrapping<i64> = Wrapping(0xB);
const MASK: Wrapping<i64> = Wrapping((1 << 48) - 1);

const FLOAT_DIV: f32 = (1u32 << 24) as f32;


#[inline]
fn initial_scramble(seed: i64) -> Wrapping<i64> {
    (Wrapping(seed) ^ MULTIPLIER) & MASK
}


/// Generate a new seed from a global seed uniquifier mixed with the current time, used
/// when the caller doesn't have a seed of its own.
pub fn gen_seed() -> i64 {
    static SEED: AtomicI64 = AtomicI64::new(8682522807148012);
    let mut current = SEED.load(Ordering::Relaxed);
    loop {
        let next = current.wrapping_mul(181783497276652981);
        match SEED.compare_exchange_weak(current, next, Ordering::Relaxed, Ordering::Relaxed) {
            Ok(_) => {
                return match SystemTime::now().duration_since(UNIX_EPOCH) {
                    Ok(d) => next ^ (d.as_nanos() as i64),
                    Err(_) => next
                };
            }
            Err(old) => current = old
        }
    }
}


/// A 48-bit linear congruential generator producing the exact same sequences as
/// `java.util.Random` for the same seed. Tree shapes depend on this sequence, so any
/// change here changes every generated tree.
#[derive(Debug, Clone)]
pub struct JavaRandom {
    seed: Wrapping<i64>
}

impl JavaRandom {

    #[inline]
    pub fn new(seed: i64) -> JavaRandom {
        JavaRandom { seed: initial_scramble(seed) }
    }

    #[inline]
    pub fn set_seed(&mut self, seed: i64) {
        self.seed = initial_scramble(seed);
    }

    #[inline]
    fn next(&mut self, bits: u8) -> i32 {
        self.seed = (self.seed * MULTIPLIER + ADDEND) & MASK;
        (self.seed.0 as u64 >> (48 - bits)) as i32
    }

    #[inline]
    pub fn next_int(&mut self) -> i32 {
        self.next(32)
    }

    /// Get the next integer in `0..bound`. The bound must be strictly positive.
    pub fn next_int_bounded(&mut self, bound: i32) -> i32 {

        debug_assert!(bound > 0, "bound must be positive");

        if (bound & -bound) == bound {
            (((bound as i64).wrapping_mul(self.next(31) as i64)) >> 31) as i32
        } else {

            let mut bits;
            let mut val;

            loop {
                bits = self.next(31);
                val = bits.rem_euclid(bound);
                if bits.wrapping_sub(val).wrapping_add(bound - 1) >= 0 {
                    break;
                }
            }

            val

        }

    }

    pub fn next_long(&mut self) -> i64 {
        ((self.next(32) as i64) << 32).wrapping_add(self.next(32) as i64)
    }

    /// Get the next pseudo-random single-precision float in `0.0..1.0`.
    pub fn next_float(&mut self) -> f32 {
        self.next(24) as f32 / FLOAT_DIV
    }

}


#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn java_parity() {

        let mut rand = JavaRandom::new(0);
        assert_eq!(rand.next_int(), -1155484576);

        let mut rand = JavaRandom::new(0);
        assert_eq!(rand.next_long(), -4962768465676381896);

        let mut rand = JavaRandom::new(0);
        assert!((rand.next_float() - 0.730_967_8).abs() < 1e-6);

    }

    #[test]
    fn reseed() {

        let mut a = JavaRandom::new(1234);
        let first = a.next_long();
        a.next_long();
        a.set_seed(1234);
        assert_eq!(a.next_long(), first);

    }

    #[test]
    fn bounded() {

        let mut rand = JavaRandom::new(42);
        for bound in [1, 2, 7, 12, 16, 1000] {
            for _ in 0..200 {
                let val = rand.next_int_bounded(bound);
                assert!((0..bound).contains(&val), "{val} out of 0..{bound}");
            }
        }

        for _ in 0..200 {
            let val = rand.next_float();
            assert!((0.0..1.0).contains(&val));
        }

    }

}
