//! Default chunk-name derivation

/// Derive a default chunk name from a match string.
///
/// A leading `@` scope marker is stripped, then the remainder is
/// camel-cased: `-`, `_`, `.`, `/` and whitespace separate words, the
/// first word is lower-cased and every following word is capitalized.
///
/// `@scope/pkg-name` becomes `scopePkgName`.
pub fn derive_chunk_name(pattern: &str) -> String {
    let unscoped = pattern.strip_prefix('@').unwrap_or(pattern);

    let mut name = String::with_capacity(unscoped.len());

    for (i, word) in unscoped
        .split(|c: char| matches!(c, '-' | '_' | '.' | '/') || c.is_whitespace())
        .filter(|word| !word.is_empty())
        .enumerate()
    {
        let lower = word.to_lowercase();

        if i == 0 {
            name.push_str(&lower);
        } else {
            let mut chars = lower.chars();
            if let Some(first) = chars.next() {
                name.extend(first.to_uppercase());
                name.push_str(chars.as_str());
            }
        }
    }

    name
}
