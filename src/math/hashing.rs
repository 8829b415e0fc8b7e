//! Deterministic rolling hash over raw input bytes

/// Multiplier-31 rolling hash wrapped to 32 bits, returned as its magnitude
///
/// Each step computes `hash * 31 + byte` in wrapping `i32` arithmetic; the final
/// value is the unsigned absolute value so `i32::MIN` maps to `2^31` instead of
/// overflowing.
pub fn rolling_hash(input: &[u8]) -> u32 {
    let hash = input.iter().fold(0i32, |hash, &byte| {
        hash.wrapping_shl(5)
            .wrapping_sub(hash)
            .wrapping_add(i32::from(byte))
    });
    hash.unsigned_abs()
}
