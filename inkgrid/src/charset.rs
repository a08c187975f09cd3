//! The set of characters sampled from each font.
//!
//! A [`Charset`] is also the label alphabet of the produced rows: the same
//! table is used to decode a predicted label back into a character, so it
//! should be persisted alongside the training data (see
//! [`Charset::label_lines`]).

use std::{collections::BTreeSet, sync::LazyLock};

use regex::Regex;

use crate::error::CharsetError;

/// Printable ASCII, excluding space.
pub const PRINTABLE_ASCII: std::ops::RangeInclusive<char> = '!'..='~';

static CODEPOINT_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?i:u\+|0x|\\u)").expect("prefix pattern is valid"));

/// An ordered, immutable set of characters.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Charset {
    chars: BTreeSet<char>,
}

impl Charset {
    /// Creates a character set from the given characters.
    pub fn new(chars: impl IntoIterator<Item = char>) -> Self {
        Self {
            chars: chars.into_iter().collect(),
        }
    }

    /// The 94 printable ASCII characters from `!` (33) to `~` (126).
    pub fn printable_ascii() -> Self {
        Self::new(PRINTABLE_ASCII)
    }

    /// Parses a comma or whitespace separated list of hexadecimal code
    /// points and inclusive ranges, each optionally prefixed with `U+`,
    /// `0x` or `\u`.
    ///
    /// For example, `U+0041-005A,61-7A` selects the ASCII letters.
    pub fn parse(input: &str) -> Result<Self, CharsetError> {
        let mut chars = BTreeSet::new();
        for raw in input
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|raw| !raw.is_empty())
        {
            if let Some((start, end)) = raw.split_once('-') {
                let (start, end) = (parse_hex(start)?, parse_hex(end)?);
                if start > end {
                    return Err(CharsetError::InvalidRange { start, end });
                }
                for cp in start..=end {
                    // Surrogates inside a range are skipped rather than
                    // rejected so that ranges may span them.
                    if let Some(ch) = char::from_u32(cp) {
                        chars.insert(ch);
                    } else if cp > char::MAX as u32 {
                        return Err(CharsetError::NotAScalar(cp));
                    }
                }
            } else {
                let cp = parse_hex(raw)?;
                chars.insert(char::from_u32(cp).ok_or(CharsetError::NotAScalar(cp))?);
            }
        }
        if chars.is_empty() {
            return Err(CharsetError::Empty);
        }
        Ok(Self { chars })
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn contains(&self, ch: char) -> bool {
        self.chars.contains(&ch)
    }

    /// Returns the characters in code point order.
    pub fn iter(&self) -> impl Iterator<Item = char> + '_ {
        self.chars.iter().copied()
    }

    /// Maps a row label back to its character.
    ///
    /// Returns `None` if the label is not part of this set.
    pub fn decode(&self, label: u32) -> Option<char> {
        char::from_u32(label).filter(|ch| self.contains(*ch))
    }

    /// Returns one `code_point,char` line per character, in code point
    /// order.
    pub fn label_lines(&self) -> impl Iterator<Item = String> + '_ {
        self.iter().map(|ch| format!("{},{ch}", ch as u32))
    }
}

impl Default for Charset {
    fn default() -> Self {
        Self::printable_ascii()
    }
}

/// Parses a single code point, which may carry one leading prefix.
fn parse_hex(raw: &str) -> Result<u32, CharsetError> {
    let digits = CODEPOINT_PREFIX.replace(raw, "");
    u32::from_str_radix(&digits, 16).map_err(|_| CharsetError::InvalidCodepoint(raw.to_owned()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn printable_ascii_table() {
        let charset = Charset::printable_ascii();
        assert_eq!(charset.len(), 94);
        assert_eq!(charset.iter().next(), Some('!'));
        assert_eq!(charset.iter().last(), Some('~'));
        assert!(!charset.contains(' '));
    }

    #[test]
    fn parse_ranges_and_prefixes() {
        let charset = Charset::parse("U+0041-005A, 0x61-7a \\u0030").unwrap();
        assert_eq!(charset.len(), 26 + 26 + 1);
        assert!(charset.contains('A'));
        assert!(charset.contains('z'));
        assert!(charset.contains('0'));
        assert!(!charset.contains('1'));
    }

    #[test]
    fn parse_errors() {
        assert_eq!(
            Charset::parse("41,zz"),
            Err(CharsetError::InvalidCodepoint("zz".into()))
        );
        assert_eq!(
            Charset::parse("5a-41"),
            Err(CharsetError::InvalidRange {
                start: 0x5a,
                end: 0x41
            })
        );
        assert_eq!(Charset::parse("D800"), Err(CharsetError::NotAScalar(0xD800)));
        assert_eq!(Charset::parse(" , "), Err(CharsetError::Empty));
        assert!(matches!(
            Charset::parse("*"),
            Err(CharsetError::InvalidCodepoint(_))
        ));
    }

    #[test]
    fn prefixes_only_lead_a_code_point() {
        assert_eq!(
            Charset::parse("U+0041-U+0043").unwrap(),
            Charset::new(['A', 'B', 'C'])
        );
        assert_eq!(
            Charset::parse("410x42"),
            Err(CharsetError::InvalidCodepoint("410x42".into()))
        );
        assert_eq!(
            Charset::parse("U+41U+42"),
            Err(CharsetError::InvalidCodepoint("U+41U+42".into()))
        );
        assert_eq!(
            Charset::parse("0x"),
            Err(CharsetError::InvalidCodepoint("0x".into()))
        );
    }

    #[test]
    fn decode_uses_the_same_table() {
        let charset = Charset::parse("41-43").unwrap();
        assert_eq!(charset.decode(0x42), Some('B'));
        assert_eq!(charset.decode(0x44), None);
        assert_eq!(charset.decode(0xD800), None);
    }

    #[test]
    fn label_lines_in_order() {
        let charset = Charset::new(['b', 'a', '!']);
        let lines = charset.label_lines().collect::<Vec<_>>();
        assert_eq!(lines, ["33,!", "97,a", "98,b"]);
    }
}
