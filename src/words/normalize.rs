/// Remove every byte that is not an ASCII letter, keeping the rest in order.
pub fn strip_word(word: &mut String) {
    word.retain(|c| c.is_ascii_alphabetic());
}

/// Copy a raw token into `word`, replacing its previous contents.
///
/// Tokens only ever hold ASCII alphanumerics, so each byte maps to one char.
pub fn load_token(word: &mut String, token: &[u8]) {
    word.clear();
    word.extend(token.iter().map(|&b| char::from(b)));
}
