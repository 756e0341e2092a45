// Bucket placement: the sum of the Unicode scalar values of the key, modulo the bucket count.
//
// Being a plain sum it is order-insensitive, so anagrams always share a bucket. The running
// total is reduced after each char, which gives the same index as reducing the full sum once
// but cannot overflow however long the key is.

/// Index of the bucket `key` belongs in, always in `0..capacity`.
///
/// # Panics
/// On a `capacity` of zero. `HashTable` rules that out at construction.
pub(crate) fn char_sum(key: &str, capacity: usize) -> usize {
    debug_assert!(capacity > 0, "hashing into zero buckets");
    let modulus = capacity as u128;
    key.chars()
        .fold(0u128, |acc, c| (acc + c as u32 as u128) % modulus) as usize
}
