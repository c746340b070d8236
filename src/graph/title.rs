// src/graph/title.rs
//! Label normalization.

/// Title-cases a label: the first cased letter of every word is title-cased
/// and the rest of the word lower-cased.
///
/// A word starts after any character that is not a cased letter, so
/// `"jean-paul o'neil"` becomes `"Jean-Paul O'Neil"`. Applying it twice
/// gives the same result as applying it once.
#[must_use]
pub fn title_case(label: &str) -> String {
    let mut out = String::with_capacity(label.len());
    let mut in_word = false;

    for c in label.chars() {
        if in_word {
            out.extend(c.to_lowercase());
        } else {
            push_titlecase(&mut out, c);
        }
        in_word = is_cased(c);
    }

    out
}

/// Titlecase form of a word-initial character. Multi-character upper
/// expansions keep only their first character upper (`ß` -> `Ss`).
fn push_titlecase(out: &mut String, c: char) {
    if is_titlecase(c) {
        out.push(c);
        return;
    }
    if let Some(digraph) = titlecase_digraph(c) {
        out.push(digraph);
        return;
    }
    let mut upper = c.to_uppercase();
    if let Some(first) = upper.next() {
        out.push(first);
    }
    for rest in upper {
        out.extend(rest.to_lowercase());
    }
}

/// Latin digraphs whose titlecase differs from their uppercase.
fn titlecase_digraph(c: char) -> Option<char> {
    match c {
        '\u{01C4}'..='\u{01C6}' => Some('\u{01C5}'),
        '\u{01C7}'..='\u{01C9}' => Some('\u{01C8}'),
        '\u{01CA}'..='\u{01CC}' => Some('\u{01CB}'),
        '\u{01F1}'..='\u{01F3}' => Some('\u{01F2}'),
        _ => None,
    }
}

/// Unicode category Lt.
fn is_titlecase(c: char) -> bool {
    matches!(
        c,
        '\u{01C5}'
            | '\u{01C8}'
            | '\u{01CB}'
            | '\u{01F2}'
            | '\u{1F88}'..='\u{1F8F}'
            | '\u{1F98}'..='\u{1F9F}'
            | '\u{1FA8}'..='\u{1FAF}'
            | '\u{1FBC}'
            | '\u{1FCC}'
            | '\u{1FFC}'
    )
}

fn is_cased(c: char) -> bool {
    c.is_lowercase() || c.is_uppercase() || is_titlecase(c)
}
