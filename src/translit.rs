//! Script detection for city names.
//!
//! Classification only asks whether a name carries any ASCII letter. The
//! Unicode script lookup and romanization are diagnostics shown next to names
//! that could not be translated, to make extending the tables quicker.

use deunicode::deunicode;
use unicode_script::{Script, UnicodeScript};

/// True if at least one character is an ASCII letter (`A-Z`, `a-z`).
///
/// This is a cheap heuristic, not language detection: `"Xi'an"` and
/// `"JR新宿"` both count as Latin, Thai or Cyrillic names do not.
pub fn contains_latin_letters(text: &str) -> bool {
    text.chars().any(|c| c.is_ascii_alphabetic())
}

/// Check if a string contains only Latin characters (plus common punctuation/digits).
pub fn is_all_latin(s: &str) -> bool {
    s.chars().all(|c| {
        c.is_ascii()
            || c.script() == Script::Latin
            || c.script() == Script::Common
            || c.script() == Script::Inherited
    })
}

/// Detect the first non-Latin script in a string.
pub fn detect_non_latin_script(s: &str) -> Option<Script> {
    s.chars()
        .map(|c| c.script())
        .find(|script| !matches!(script, Script::Latin | Script::Common | Script::Inherited))
}

/// Transliterate a string to ASCII, collapsing whitespace.
pub fn transliterate(s: &str) -> String {
    let result = deunicode(s);
    result.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// ASCII spelling suggestion for a non-Latin name, if one differs from the input.
pub fn romanization_hint(s: &str) -> Option<String> {
    if is_all_latin(s) {
        return None;
    }
    let romanized = transliterate(s);
    (!romanized.is_empty() && romanized != s).then_some(romanized)
}

/// Short note for console diagnostics, e.g. `Han, hint: Mou Di`.
pub fn describe(name: &str) -> Option<String> {
    let script = detect_non_latin_script(name)?;
    match romanization_hint(name) {
        Some(hint) => Some(format!("{}, hint: {}", script.full_name(), hint)),
        None => Some(script.full_name().to_string()),
    }
}
