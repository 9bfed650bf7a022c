//! Font-family list parsing and safe re-serialization.
//!
//! The configured `fontfamily` ends up inside a `font-family: …` declaration
//! of an injected stylesheet, so it is parsed into a list of family names and
//! written back out canonically instead of being pasted in verbatim. Anything
//! that is not a plain family list (semicolons, braces, `!important`,
//! comment or markup delimiters outside quotes) is rejected.
//!
//! ## Accepted syntax
//!
//! - Quoted names: `"Segoe UI"`, `'Fira Code'`, with CSS escapes (`\"`, `\22 `)
//! - Unquoted names: one or more words of letters, digits, `-` and `_`
//!   separated by spaces (`Segoe UI`, `sans-serif`)
//! - Entries separated by commas
//!
//! ```rust
//! use filter_css::font::FontFamily;
//!
//! let family = FontFamily::parse("'Fira Code' ,  Segoe   UI,monospace").unwrap();
//! assert_eq!(family.to_string(), r#""Fira Code", Segoe UI, monospace"#);
//! ```

use crate::error::FilterCssError;
use nom::{
    IResult,
    branch::alt,
    bytes::complete::{take_while_m_n, take_while1},
    character::complete::{char, satisfy, space0, space1},
    combinator::{all_consuming, map, map_res, opt, verify},
    multi::{fold_many0, separated_list1},
    sequence::{delimited, preceded, tuple},
};
use std::fmt;

/// One entry of a font-family list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FamilyName {
    /// A quoted family name, stored unescaped.
    Quoted(String),
    /// An unquoted name made of identifier words.
    Words(Vec<String>),
}

impl fmt::Display for FamilyName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FamilyName::Words(words) => write!(f, "{}", words.join(" ")),
            FamilyName::Quoted(name) => {
                f.write_str("\"")?;
                for c in name.chars() {
                    if needs_escape(c) {
                        write!(f, "\\{:X} ", c as u32)?;
                    } else {
                        write!(f, "{}", c)?;
                    }
                }
                f.write_str("\"")
            }
        }
    }
}

/// Characters written as hex escapes inside a quoted name.
///
/// Quotes, backslashes and markup delimiters, plus control characters and
/// line separators: a raw newline would end the string early.
fn needs_escape(c: char) -> bool {
    matches!(c, '"' | '\\' | '<' | '>' | '\u{2028}' | '\u{2029}') || c.is_control()
}

/// A validated CSS `font-family` list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontFamily {
    names: Vec<FamilyName>,
}

impl FontFamily {
    /// Parses a comma-separated font-family list.
    pub fn parse(source: &str) -> Result<Self, FilterCssError> {
        if source.trim().is_empty() {
            return Err(FilterCssError::InvalidFontFamily(
                "empty font family".to_string(),
            ));
        }

        let (_, names) = all_consuming(delimited(space0, parse_family_list, space0))(source)
            .map_err(|e| FilterCssError::InvalidFontFamily(format!("{:?}: {}", source, e)))?;

        Ok(Self { names })
    }

    pub fn names(&self) -> &[FamilyName] {
        &self.names
    }
}

impl fmt::Display for FontFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, name) in self.names.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", name)?;
        }
        Ok(())
    }
}

fn parse_family_list(input: &str) -> IResult<&str, Vec<FamilyName>> {
    separated_list1(tuple((space0, char(','), space0)), parse_family_name)(input)
}

fn parse_family_name(input: &str) -> IResult<&str, FamilyName> {
    alt((
        map(parse_quoted('"'), FamilyName::Quoted),
        map(parse_quoted('\''), FamilyName::Quoted),
        map(parse_words, FamilyName::Words),
    ))(input)
}

/// Parses identifier words separated by spaces (e.g., "Segoe UI").
fn parse_words(input: &str) -> IResult<&str, Vec<String>> {
    map(separated_list1(space1, parse_word), |words| {
        words.into_iter().map(str::to_string).collect()
    })(input)
}

fn parse_word(input: &str) -> IResult<&str, &str> {
    take_while1(|c: char| c.is_alphanumeric() || c == '-' || c == '_')(input)
}

/// Parses a non-empty quoted string, resolving escapes.
fn parse_quoted(quote: char) -> impl FnMut(&str) -> IResult<&str, String> {
    move |input: &str| {
        verify(
            delimited(
                char(quote),
                fold_many0(
                    alt((
                        parse_escape,
                        satisfy(move |c| c != quote && c != '\\' && c != '\n' && c != '\r'),
                    )),
                    String::new,
                    |mut acc, c| {
                        acc.push(c);
                        acc
                    },
                ),
                char(quote),
            ),
            |name: &String| !name.trim().is_empty(),
        )(input)
    }
}

/// Parses a backslash escape: `\22 ` (hex) or `\"` (literal).
fn parse_escape(input: &str) -> IResult<&str, char> {
    preceded(
        char('\\'),
        alt((
            parse_hex_escape,
            satisfy(|c| c != '\n' && c != '\r' && !c.is_ascii_hexdigit()),
        )),
    )(input)
}

fn parse_hex_escape(input: &str) -> IResult<&str, char> {
    let (input, code) = map_res(
        take_while_m_n(1, 6, |c: char| c.is_ascii_hexdigit()),
        |digits| u32::from_str_radix(digits, 16),
    )(input)?;
    // A single space terminates the escape
    let (input, _) = opt(char(' '))(input)?;

    let c = char::from_u32(code)
        .filter(|c| *c != '\0')
        .unwrap_or(char::REPLACEMENT_CHARACTER);
    Ok((input, c))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_words() {
        let (remaining, words) = parse_words("Segoe UI, Arial").unwrap();
        assert_eq!(remaining, ", Arial");
        assert_eq!(words, vec!["Segoe".to_string(), "UI".to_string()]);
    }

    #[test]
    fn test_parse_quoted_with_escapes() {
        let (_, name) = parse_quoted('"')(r#""A \"B\" \5C C""#).unwrap();
        assert_eq!(name, r#"A "B" \C"#);
    }

    #[test]
    fn test_parse_quoted_rejects_blank() {
        assert!(parse_quoted('\'')("'  '").is_err());
    }

    #[test]
    fn test_hex_escape_consumes_one_space() {
        let (remaining, c) = parse_hex_escape("3C  x").unwrap();
        assert_eq!(c, '<');
        assert_eq!(remaining, " x");
    }

    #[test]
    fn test_hex_escape_null_is_replaced() {
        let (_, c) = parse_hex_escape("0").unwrap();
        assert_eq!(c, char::REPLACEMENT_CHARACTER);
    }

    #[test]
    fn test_quoted_display_escapes_control_characters() {
        let name = FamilyName::Quoted("a\nb\rc\u{c}d\te\u{2028}f\u{7f}".to_string());
        assert_eq!(name.to_string(), r#""a\A b\D c\C d\9 e\2028 f\7F ""#);
    }

    #[test]
    fn test_quoted_display_escapes_delimiters() {
        let name = FamilyName::Quoted("</style>\"".to_string());
        assert_eq!(name.to_string(), r#""\3C /style\3E \22 ""#);
    }
}
