//! Line-based re-indentation of raw LaTeX.
//!
//! Not a parser: each line is classified by its leading token only.
//! `\begin{..}` and `\item` lines are indented four spaces; `\end{..}`,
//! `\section` and `\textbf` lines are flush left. Every other line, including
//! its whitespace, is kept as typed.

const INDENT: &str = "    ";

pub fn format_code(code: &str) -> String {
    code.split('\n')
        .map(format_line)
        .collect::<Vec<_>>()
        .join("\n")
}

fn format_line(line: &str) -> String {
    let trimmed = line.trim();
    if trimmed.starts_with("\\begin{") || trimmed.starts_with("\\item") {
        format!("{INDENT}{trimmed}")
    } else if ["\\end{", "\\section", "\\textbf"]
        .iter()
        .any(|prefix| trimmed.starts_with(prefix))
    {
        trimmed.to_string()
    } else {
        line.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_items_and_environments() {
        let input = "\\begin{itemize}\n\\item One\n        \\item Two\n   \\end{itemize}";
        assert_eq!(
            format_code(input),
            "    \\begin{itemize}\n    \\item One\n    \\item Two\n\\end{itemize}"
        );
    }

    #[test]
    fn test_headings_are_flush_left() {
        assert_eq!(
            format_code("  \\section{Skills}\n\t\\textbf{Rust}"),
            "\\section{Skills}\n\\textbf{Rust}"
        );
    }

    #[test]
    fn test_other_lines_untouched() {
        let input = "  plain text  \n\n% comment\n\\hfill";
        assert_eq!(format_code(input), input);
    }

    #[test]
    fn test_trailing_newline_kept() {
        assert_eq!(format_code("\\item a\n"), "    \\item a\n");
    }

    #[test]
    fn test_is_idempotent() {
        let once = format_code(crate::editor::SAMPLE_DOCUMENT);
        assert_eq!(format_code(&once), once);
    }
}
