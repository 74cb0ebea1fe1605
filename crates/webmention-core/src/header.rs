//! HTTP structured-header tokenization.
//!
//! Implements the RFC 2616 token / quoted-string grammar needed to split a
//! comma-separated multi-value header into items and to parse one
//! `Link`-style item into a reference plus named parameters. Parsing is
//! deliberately forgiving: malformed input degrades to an empty or partial
//! [`Link`] instead of an error, so one bad header item never aborts
//! discovery.

use std::sync::LazyLock;

const TOKEN: u8 = 1 << 0;
const SPACE: u8 = 1 << 1;

/// Octet classes for the full 0-255 byte range, per RFC 2616:
///
/// ```text
/// CTL        = <any US-ASCII control character (octets 0 - 31) and DEL (127)>
/// separators = "(" | ")" | "<" | ">" | "@" | "," | ";" | ":" | "\" | <">
///              | "/" | "[" | "]" | "?" | "=" | "{" | "}" | SP | HT
/// token      = 1*<any CHAR except CTLs or separators>
/// ```
///
/// "space" here is the linear whitespace set: SP, HT, CR, LF.
static OCTET_TYPES: LazyLock<[u8; 256]> = LazyLock::new(|| {
    let separators = b" \t\"(),/:;<=>?@[]\\{}";
    let mut table = [0u8; 256];
    for b in 0..=255u8 {
        let mut class = 0;
        if matches!(b, b' ' | b'\t' | b'\r' | b'\n') {
            class |= SPACE;
        }
        let is_ctl = b <= 31 || b == 127;
        if b.is_ascii() && !is_ctl && !separators.contains(&b) {
            class |= TOKEN;
        }
        table[usize::from(b)] = class;
    }
    table
});

fn is_space(b: u8) -> bool {
    OCTET_TYPES[usize::from(b)] & SPACE != 0
}

fn is_token(b: u8) -> bool {
    OCTET_TYPES[usize::from(b)] & TOKEN != 0
}

/// Splits the occurrences of a comma-separated header into its items.
///
/// Commas inside double-quoted substrings do not split, backslash escapes
/// inside quotes are honored, and surrounding whitespace is trimmed from each
/// item. Empty items (consecutive or trailing commas) are dropped. Quoted
/// substrings are preserved verbatim, not unquoted or unescaped.
pub fn parse_list<'a, I>(values: I) -> Vec<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut items = Vec::new();
    for value in values {
        let mut begin = 0;
        let mut end = 0;
        let mut escape = false;
        let mut quote = false;
        for (i, b) in value.bytes().enumerate() {
            if escape {
                escape = false;
                end = i + 1;
            } else if quote {
                match b {
                    b'\\' => escape = true,
                    b'"' => quote = false,
                    _ => {},
                }
                end = i + 1;
            } else if b == b'"' {
                quote = true;
                end = i + 1;
            } else if is_space(b) {
                if begin == end {
                    begin = i + 1;
                    end = begin;
                }
            } else if b == b',' {
                if begin < end {
                    items.push(&value[begin..end]);
                }
                begin = i + 1;
                end = begin;
            } else {
                end = i + 1;
            }
        }
        if begin < end {
            items.push(&value[begin..end]);
        }
    }
    items
}

/// A parsed HTTP `Link` header item.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Link {
    /// The reference between `<` and `>`. May be empty: `<>` is a valid
    /// relative reference to the document itself.
    pub href: String,
    /// Values of the first `rel` parameter, split on single spaces. Later
    /// `rel` parameters on the same item are ignored.
    pub rel: Vec<String>,
}

/// Parses an individual `Link` header item.
///
/// Grammar: `"<" reference ">" *( ";" OWS name "=" value OWS )` where value
/// is a bare token or a double-quoted string with backslash escaping.
/// Callers should first apply [`parse_list`] to split the raw header into
/// items.
///
/// Malformed input never errors: an item that does not start with `<` yields
/// an empty [`Link`], and a malformed parameter tail (missing `=`, empty
/// name or value) terminates parameter scanning, returning what was parsed
/// so far.
#[must_use]
pub fn parse_link(item: &str) -> Link {
    let (href, rest) = expect_reference(item);
    let mut link = Link {
        href: href.to_owned(),
        rel: Vec::new(),
    };
    if href.is_empty() && rest.len() == item.len() {
        // No angle-bracketed reference at all: nothing else to parse.
        return link;
    }

    let mut s = skip_space(rest);
    while let Some(after_semi) = s.strip_prefix(';') {
        let (name, after_name) = expect_token(skip_space(after_semi));
        if name.is_empty() {
            return link;
        }
        let Some(after_eq) = after_name.strip_prefix('=') else {
            return link;
        };
        let (value, after_value) = expect_token_or_quoted(after_eq);
        if value.is_empty() {
            return link;
        }
        if name == "rel" && link.rel.is_empty() {
            link.rel = value.split(' ').map(str::to_owned).collect();
        }
        s = skip_space(after_value);
    }
    link
}

fn skip_space(s: &str) -> &str {
    let start = s.bytes().position(|b| !is_space(b)).unwrap_or(s.len());
    &s[start..]
}

fn expect_token(s: &str) -> (&str, &str) {
    let end = s.bytes().position(|b| !is_token(b)).unwrap_or(s.len());
    s.split_at(end)
}

/// Reads the angle-bracketed reference at the start of an item.
///
/// Returns the reference and the remainder after `>`. An item that does not
/// start with `<` yields an empty reference and the untouched input; a
/// missing closing `>` swallows the remainder as the reference.
fn expect_reference(s: &str) -> (&str, &str) {
    let Some(inner) = s.strip_prefix('<') else {
        return ("", s);
    };
    match inner.find('>') {
        Some(i) => (&inner[..i], &inner[i + 1..]),
        None => (inner, ""),
    }
}

/// Reads a parameter value: a bare token, or a double-quoted string with
/// `\"` and `\\` escapes unescaped. An unterminated quoted value is treated
/// as missing.
fn expect_token_or_quoted(s: &str) -> (String, &str) {
    let Some(quoted) = s.strip_prefix('"') else {
        let (token, rest) = expect_token(s);
        return (token.to_owned(), rest);
    };

    let mut value = String::new();
    let mut escape = false;
    for (i, c) in quoted.char_indices() {
        if escape {
            escape = false;
            value.push(c);
        } else {
            match c {
                '\\' => escape = true,
                '"' => return (value, &quoted[i + 1..]),
                _ => value.push(c),
            }
        }
    }
    (String::new(), "")
}
