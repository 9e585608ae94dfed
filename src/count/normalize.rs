/// Normalize a raw token for comparison
///
/// Drops every ASCII punctuation character (``!"#$%&'()*+,-./:;<=>?@[\]^_`{|}~``)
/// and lowercases what is left, keeping the survivors in order. Punctuation
/// outside ASCII is not stripped. Lowercasing is Unicode-aware, so `"ÉTÉ"`
/// becomes `"été"`.
///
/// ```rust
/// use wordhunt::count::normalize;
///
/// assert_eq!(normalize("Cat,"), "cat");
/// assert_eq!(normalize("don't"), "dont");
/// assert_eq!(normalize("..."), "");
/// ```
pub fn normalize(token: &str) -> String {
    let mut normalized = String::with_capacity(token.len());
    for c in token.chars().filter(|c| !c.is_ascii_punctuation()) {
        normalized.extend(c.to_lowercase());
    }
    normalized
}
