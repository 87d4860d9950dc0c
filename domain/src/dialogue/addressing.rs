//! Addressing resolution
//!
//! Pure functions that scan a message body for whole-word mentions of
//! known participant names. Matching is case-sensitive and exact: a name
//! matches only where it is not embedded in a longer identifier (word
//! characters are alphanumerics plus `_`, so `EHR_Analyst` is one word
//! and does not light up a participant named `EHR`).
//!
//! When a body mentions several participants, the last occurring mention
//! is the one being addressed: the moderator's habit is to end a sentence
//! with the name of the party being called on. That tie-break is a
//! deliberate, tested contract.

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Check that the match at `start..start + len` is not part of a longer word.
fn is_whole_word(body: &str, start: usize, len: usize) -> bool {
    let before_ok = body[..start]
        .chars()
        .next_back()
        .is_none_or(|c| !is_word_char(c));
    let after_ok = body[start + len..]
        .chars()
        .next()
        .is_none_or(|c| !is_word_char(c));
    before_ok && after_ok
}

/// All whole-word mentions of `names` in `body`, in textual order.
///
/// A name mentioned twice appears twice. Returns an empty list when no
/// name matches.
pub fn mentions<'a>(body: &str, names: &'a [String]) -> Vec<&'a str> {
    let mut found: Vec<(usize, &str)> = Vec::new();
    for name in names {
        if name.is_empty() {
            continue;
        }
        for (start, _) in body.match_indices(name.as_str()) {
            if is_whole_word(body, start, name.len()) {
                found.push((start, name.as_str()));
            }
        }
    }
    found.sort_by_key(|&(start, _)| start);
    found.into_iter().map(|(_, name)| name).collect()
}

/// The participant a body addresses: the last whole-word mention.
///
/// `None` when no known name is mentioned — the caller falls back to the
/// moderator.
pub fn addressed<'a>(body: &str, names: &'a [String]) -> Option<&'a str> {
    mentions(body, names).pop()
}

/// Whole-word match of a fixed phrase against a body.
///
/// Same boundary discipline as [`mentions`], applied to the phrase as a
/// whole. Empty phrases never match.
pub fn contains_phrase(body: &str, phrase: &str) -> bool {
    if phrase.is_empty() {
        return false;
    }
    body.match_indices(phrase)
        .any(|(start, _)| is_whole_word(body, start, phrase.len()))
}
