use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref TRAILING_PARENTHETICAL: Regex = Regex::new(r"^(.+?)\s*\((.+?)\)\s*$").unwrap();
    // Parentheticals carrying one of these belong to the title itself.
    static ref KEEP_KEYWORDS: Regex = Regex::new(
        r"(?i)\b(feat\.?|ft\.?|featuring|with|vs\.?|versus|remix|edit|mix|version|live|demo|instrumental|acoustic|reprise|part|pt\.?)\b"
    )
    .unwrap();
}

/// Splits `"曲名 (Kyokumei)"` into the title and its romanization. Only a
/// non-ASCII title followed by an all-ASCII parenthetical is split; every
/// other shape is returned whole so nothing gets lost.
pub fn split_title(raw: &str) -> (String, Option<String>) {
    let title = raw.split('\n').next().unwrap_or_default().trim();
    let captures = match TRAILING_PARENTHETICAL.captures(title) {
        Some(c) => c,
        None => return (title.to_string(), None),
    };
    let main_title = captures[1].trim();
    let paren_content = captures[2].trim();

    if KEEP_KEYWORDS.is_match(paren_content) {
        return (title.to_string(), None);
    }

    let has_non_latin = !main_title.is_ascii();
    let paren_is_latin = !paren_content.is_empty()
        && paren_content
            .chars()
            .all(|c| c.is_ascii() || c.is_whitespace());
    if has_non_latin && paren_is_latin {
        return (main_title.to_string(), Some(paren_content.to_string()));
    }

    (title.to_string(), None)
}
