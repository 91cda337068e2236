//! Text helpers for embedding record values in TV markup.
//!
//! Everything a metadata source supplies ends up inside an element or an
//! attribute, so values go through [`cleaned`] before interpolation. Action
//! identifiers additionally use [`slugged`] titles.

/// Characters escaped by [`cleaned`] and their entities.
const ENTITIES: &[(char, &str)] = &[
    ('&', "&amp;"),
    ('<', "&lt;"),
    ('>', "&gt;"),
    ('"', "&quot;"),
    ('\'', "&apos;"),
];

/// Make a string safe to embed in markup text or attribute values.
///
/// A pre-escaped `&amp;` is collapsed first, so cleaning is idempotent.
///
/// # Examples
///
/// ```
/// use popcorntv_common::text::cleaned;
///
/// assert_eq!(cleaned("Fast & Furious"), "Fast &amp; Furious");
/// assert_eq!(cleaned("Fast &amp; Furious"), "Fast &amp; Furious");
/// assert_eq!(cleaned("<b>\"hi\"</b>"), "&lt;b&gt;&quot;hi&quot;&lt;/b&gt;");
/// ```
pub fn cleaned(s: &str) -> String {
    let s = s.trim().replace("&amp;", "&");
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ENTITIES.iter().find(|(c, _)| *c == ch) {
            Some((_, entity)) => out.push_str(entity),
            None => out.push(ch),
        }
    }
    out
}

/// Turn a title into an identifier-safe slug.
///
/// ASCII letters and digits are lowercased and kept, whitespace and common
/// separators collapse into a single `-`, everything else is dropped.
///
/// # Examples
///
/// ```
/// use popcorntv_common::text::slugged;
///
/// assert_eq!(slugged("Game of Thrones"), "game-of-thrones");
/// assert_eq!(slugged("  Marvel's Agents of S.H.I.E.L.D.  "), "marvels-agents-of-s-h-i-e-l-d");
/// ```
pub fn slugged(s: &str) -> String {
    let mut slug = String::with_capacity(s.len());
    for ch in s.trim().chars() {
        if ch.is_ascii_alphanumeric() {
            slug.push(ch.to_ascii_lowercase());
        } else if (ch.is_whitespace() || matches!(ch, '.' | '_' | '-' | '/' | '\\'))
            && !slug.ends_with('-')
        {
            slug.push('-');
        }
    }
    slug.trim_matches('-').to_string()
}
