//! LaTeX escaping for user-supplied text.
//!
//! One policy for every free-text field:
//! - `# $ % & _ { }` are prefixed with a backslash
//! - `\`, `~` and `^` become `\textbackslash{}`, `\textasciitilde{}` and
//!   `\textasciicircum{}` (a bare prefix would turn them into a line break or
//!   an accent command)
//!
//! `unescape` is the exact inverse of `escape`.

const PREFIXED: &[char] = &['#', '$', '%', '&', '_', '{', '}'];

const NAMED: &[(char, &str)] = &[
    ('\\', "\\textbackslash{}"),
    ('~', "\\textasciitilde{}"),
    ('^', "\\textasciicircum{}"),
];

/// Escapes reserved LaTeX characters so the text renders literally.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + text.len() / 8);
    for c in text.chars() {
        if PREFIXED.contains(&c) {
            out.push('\\');
            out.push(c);
        } else if let Some((_, named)) = NAMED.iter().find(|(n, _)| *n == c) {
            out.push_str(named);
        } else {
            out.push(c);
        }
    }
    out
}

/// Reverses `escape`. Backslash sequences `escape` never produces are kept
/// as they are.
pub fn unescape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(pos) = rest.find('\\') {
        out.push_str(&rest[..pos]);
        rest = &rest[pos..];

        if let Some((c, named)) = NAMED.iter().find(|(_, named)| rest.starts_with(named)) {
            out.push(*c);
            rest = &rest[named.len()..];
            continue;
        }

        match rest[1..].chars().next() {
            Some(c) if PREFIXED.contains(&c) => {
                out.push(c);
                rest = &rest[1 + c.len_utf8()..];
            }
            _ => {
                out.push('\\');
                rest = &rest[1..];
            }
        }
    }
    out.push_str(rest);
    out
}

/// Escapes a URL for the first argument of `\href`.
///
/// hyperref reads that argument almost verbatim: only `%` and `#` need a
/// prefix. Braces and backslashes are percent-encoded so the argument stays
/// balanced.
pub fn escape_url(url: &str) -> String {
    let mut out = String::with_capacity(url.len());
    for c in url.chars() {
        match c {
            '%' | '#' => {
                out.push('\\');
                out.push(c);
            }
            '\\' => out.push_str("\\%5C"),
            '{' => out.push_str("\\%7B"),
            '}' => out.push_str("\\%7D"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_untouched() {
        assert_eq!(escape("Ada Lovelace, London"), "Ada Lovelace, London");
        assert_eq!(escape(""), "");
    }

    #[test]
    fn test_prefixed_characters() {
        assert_eq!(escape("45% & $10_000 #1 {x}"), r"45\% \& \$10\_000 \#1 \{x\}");
    }

    #[test]
    fn test_named_characters() {
        assert_eq!(escape(r"a\b"), r"a\textbackslash{}b");
        assert_eq!(escape("~/src"), r"\textasciitilde{}/src");
        assert_eq!(escape("x^2"), r"x\textasciicircum{}2");
    }

    #[test]
    fn test_unescape_recovers_original() {
        let samples = [
            "C# & F# devs, 100% remote",
            r"C:\Users\ada\{braces}",
            "~^~^",
            "\\textbackslash{} literally",
            "trailing backslash \\",
            "unicode: café ✓ 日本",
            "",
        ];
        for s in samples {
            assert_eq!(unescape(&escape(s)), s, "round trip of {s:?}");
        }
    }

    #[test]
    fn test_unescape_keeps_unknown_commands() {
        assert_eq!(unescape(r"\textbf{x} \% done"), r"\textbf{x} % done");
    }

    #[test]
    fn test_escape_url() {
        assert_eq!(escape_url("https://x.com/a#b?q=1%20"), r"https://x.com/a\#b?q=1\%20");
        assert_eq!(escape_url("https://x.com/{id}"), r"https://x.com/\%7Bid\%7D");
        assert_eq!(escape_url("https://x.com/~ada"), "https://x.com/~ada");
    }
}
