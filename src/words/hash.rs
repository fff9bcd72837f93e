use std::num::NonZeroUsize;

/// Bucket index of `word`: the sum of its byte values modulo `size`.
///
/// Anagrams always land in the same bucket.
pub fn hash_code(word: &str, size: NonZeroUsize) -> usize {
    let sum: u64 = word.bytes().map(u64::from).sum();
    (sum % size.get() as u64) as usize
}
