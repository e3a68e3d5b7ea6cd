//! Name cleaning shared by every parser.

/// Clean a raw name fragment into a display name.
///
/// Runs of separators (`.`, `_`, `-`, whitespace, brackets) collapse to a
/// single space and the edges are trimmed. Casing is left alone. Single
/// letters joined by single dots are kept together as an acronym.
///
/// ```
/// use reelmatch_parser::clean_name;
///
/// assert_eq!(clean_name("The.Office_US"), "The Office US");
/// assert_eq!(clean_name("Agents.of.S.H.I.E.L.D."), "Agents of S.H.I.E.L.D");
/// assert_eq!(clean_name("..."), "");
/// ```
pub fn clean_name(raw: &str) -> String {
    let mut words: Vec<String> = Vec::new();

    for chunk in raw.split(is_hard_separator).filter(|c| !c.is_empty()) {
        let mut acronym: Vec<&str> = Vec::new();
        for part in chunk.split('.') {
            if is_letter(part) {
                acronym.push(part);
                continue;
            }
            flush_acronym(&mut acronym, &mut words);
            if !part.is_empty() {
                words.push(part.to_string());
            }
        }
        flush_acronym(&mut acronym, &mut words);
    }

    words.join(" ")
}

/// Reduce a name to the key used in identity strings: lower-case
/// alphanumerics only.
///
/// ```
/// use reelmatch_parser::identity_key;
///
/// assert_eq!(identity_key("Marvel's Agents of S.H.I.E.L.D."), "marvelsagentsofshield");
/// ```
pub fn identity_key(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect()
}

fn is_hard_separator(c: char) -> bool {
    c.is_whitespace() || matches!(c, '_' | '-' | '[' | ']' | '(' | ')' | '{' | '}')
}

fn is_letter(part: &str) -> bool {
    let mut chars = part.chars();
    matches!((chars.next(), chars.next()), (Some(c), None) if c.is_alphabetic())
}

fn flush_acronym(acronym: &mut Vec<&str>, words: &mut Vec<String>) {
    if !acronym.is_empty() {
        words.push(acronym.join("."));
        acronym.clear();
    }
}
