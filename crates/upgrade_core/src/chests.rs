//! Whole-chest rounding shared by both calculators.

use std::num::NonZeroU32;

/// Chests needed to cover `amount` when one chest holds `per_chest`.
/// Rounds up with integer math.
pub fn chests_for(amount: u32, per_chest: NonZeroU32) -> u32 {
    amount.div_ceil(per_chest.get())
}

/// Chest size for a `const`; zero fails at compile time.
pub const fn chest_size(stones: u32) -> NonZeroU32 {
    match NonZeroU32::new(stones) {
        Some(n) => n,
        None => panic!("chest size must be non-zero"),
    }
}
