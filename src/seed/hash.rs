//! Deterministic 32-bit string hash

/// Rolling polynomial hash shared by every client
///
/// `h = h * 31 + unit` over the UTF-16 code units of `input`, with wrapping
/// 32-bit signed arithmetic, then the absolute value. `i32::MIN` maps to
/// `2^31`, so the result always fits in a `u32`.
///
/// # Examples
/// ```
/// use hourly_wordle::seed::string_hash;
///
/// assert_eq!(string_hash(""), 0);
/// assert_eq!(string_hash("a"), 97);
/// assert_eq!(string_hash("CRANE"), 64_383_721);
/// ```
#[must_use]
pub fn string_hash(input: &str) -> u32 {
    input
        .encode_utf16()
        .fold(0i32, |hash, unit| {
            hash.wrapping_shl(5)
                .wrapping_sub(hash)
                .wrapping_add(i32::from(unit))
        })
        .unsigned_abs()
}
