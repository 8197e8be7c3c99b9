//! HTML escaping for text content and attribute values.
//!
//! One routine serves both contexts. It replaces the five characters that can
//! break out of text or a double- or single-quoted attribute:
//!
//! | char | entity   |
//! |------|----------|
//! | `&`  | `&amp;`  |
//! | `<`  | `&lt;`   |
//! | `>`  | `&gt;`   |
//! | `"`  | `&quot;` |
//! | `'`  | `&#x27;` |

use std::borrow::Cow;

fn needs_escape(b: u8) -> bool {
    matches!(b, b'&' | b'<' | b'>' | b'"' | b'\'')
}

/// Escapes `text` for use as HTML text content or as an attribute value.
///
/// Borrows the input unchanged when nothing needs replacing.
///
/// ```
/// assert_eq!(htmlgen::escape("<a href='x'>"), "&lt;a href=&#x27;x&#x27;&gt;");
/// assert_eq!(htmlgen::escape("plain"), "plain");
/// ```
pub fn escape(text: &str) -> Cow<'_, str> {
    match text.bytes().position(needs_escape) {
        None => Cow::Borrowed(text),
        Some(first) => {
            let mut out = String::with_capacity(text.len() + 16);
            out.push_str(&text[..first]);
            escape_into(&mut out, &text[first..]);
            Cow::Owned(out)
        }
    }
}

/// Appends the escaped form of `text` to `out`.
pub fn escape_into(out: &mut String, text: &str) {
    let mut start = 0;
    for (i, b) in text.bytes().enumerate() {
        let entity = match b {
            b'&' => "&amp;",
            b'<' => "&lt;",
            b'>' => "&gt;",
            b'"' => "&quot;",
            b'\'' => "&#x27;",
            _ => continue,
        };
        // all replaced bytes are ASCII, so `i` is always a char boundary
        out.push_str(&text[start..i]);
        out.push_str(entity);
        start = i + 1;
    }
    out.push_str(&text[start..]);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_all_special_characters() {
        assert_eq!(escape(r#"<&>"'"#), "&lt;&amp;&gt;&quot;&#x27;");
    }

    #[test]
    fn test_escape_borrows_clean_input() {
        assert!(matches!(escape("Hello World!"), Cow::Borrowed(_)));
        assert!(matches!(escape(""), Cow::Borrowed(_)));
    }

    #[test]
    fn test_escape_keeps_multibyte_text() {
        assert_eq!(escape("héllo <wörld> ✓"), "héllo &lt;wörld&gt; ✓");
    }

    #[test]
    fn test_escape_is_not_idempotent() {
        // escaping an already escaped entity escapes its ampersand again
        assert_eq!(escape("&amp;"), "&amp;amp;");
    }

    #[test]
    fn test_escape_into_appends() {
        let mut out = String::from("x=");
        escape_into(&mut out, "a&b");
        assert_eq!(out, "x=a&amp;b");
    }
}
