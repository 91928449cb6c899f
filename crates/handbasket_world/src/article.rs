//! Indefinite article selection.

/// Prefixes `word` with "a" or "an".
///
/// Uses "an" when the word starts with a vowel letter (a, e, i, o, u),
/// ignoring case. Pronunciation is not considered: "an hour" comes out as
/// "a hour" and "a unicorn" as "an unicorn".
#[must_use]
pub fn a_or_an(word: &str) -> String {
    let starts_with_vowel = word
        .chars()
        .next()
        .is_some_and(|c| matches!(c.to_ascii_lowercase(), 'a' | 'e' | 'i' | 'o' | 'u'));

    if starts_with_vowel {
        format!("an {word}")
    } else {
        format!("a {word}")
    }
}
