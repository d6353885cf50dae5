//! Per-template formatting strategies.
//!
//! Each template maps to one `TemplateStyle` variant, chosen once when a
//! document is generated. Section builders ask the style for the pieces that
//! differ between templates instead of branching on the template id.
//!
//! All text handed to these methods must already be escaped.

/// Visual weight of an entry title line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TitleWeight {
    /// Experience entries.
    Prominent,
    /// Education and project entries.
    Regular,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateStyle {
    Modern,
    Classic,
    Creative,
    Minimal,
}

impl TemplateStyle {
    /// Name block opening the document header, ending with the vertical gap
    /// before the contact line.
    pub fn name_line(self, name: &str) -> String {
        match self {
            TemplateStyle::Modern => {
                format!("{{\\Huge\\sffamily\\bfseries\\color{{primary}} {name}}}\\\\[8pt]\n")
            }
            TemplateStyle::Creative => format!(
                "\\begin{{tikzpicture}}\n\
                 \\node[rectangle, fill=primary!10, rounded corners=5pt, minimum width=\\textwidth-2cm, minimum height=1.5cm] at (0,0) {{}};\n\
                 \\node[text=primary] at (0,0) {{\\Huge\\sffamily\\bfseries {name}}};\n\
                 \\end{{tikzpicture}}\\\\[10pt]\n"
            ),
            TemplateStyle::Classic => format!("{{\\LARGE\\bfseries {name}}}\\\\[6pt]\n"),
            TemplateStyle::Minimal => format!("{{\\Large\\bfseries {name}}}\\\\[4pt]\n"),
        }
    }

    /// Professional headline under the name.
    pub fn title_line(self, title: &str) -> String {
        match self {
            TemplateStyle::Modern => {
                format!("{{\\large\\sffamily\\color{{secondary}} {title}}}\\\\[6pt]\n")
            }
            TemplateStyle::Creative => {
                format!("{{\\large\\sffamily\\color{{accent}} {title}}}\\\\[6pt]\n")
            }
            TemplateStyle::Classic | TemplateStyle::Minimal => {
                format!("{{\\large\\itshape {title}}}\\\\[4pt]\n")
            }
        }
    }

    /// `title \hfill trailing\\{}` with the template's colours and weights.
    ///
    /// The empty group after the break keeps a following line that opens
    /// with `[` or `*` from being read as a `\\` argument.
    pub fn entry_title(self, title: &str, trailing: &str, weight: TitleWeight) -> String {
        match (self, weight) {
            (TemplateStyle::Modern, _) => format!(
                "\\textbf{{\\color{{primary}}{title}}} \\hfill \\textit{{\\color{{secondary}}{trailing}}}\\\\{{}}\n"
            ),
            (TemplateStyle::Creative, TitleWeight::Prominent) => format!(
                "{{\\large\\sffamily\\bfseries\\color{{primary}}{title}}} \\hfill {{\\color{{secondary}}\\textit{{{trailing}}}}}\\\\{{}}\n"
            ),
            (TemplateStyle::Creative, TitleWeight::Regular) => format!(
                "{{\\sffamily\\bfseries\\color{{primary}}{title}}} \\hfill {{\\color{{secondary}}\\textit{{{trailing}}}}}\\\\{{}}\n"
            ),
            (TemplateStyle::Classic | TemplateStyle::Minimal, _) => {
                format!("\\textbf{{{title}}} \\hfill \\textit{{{trailing}}}\\\\{{}}\n")
            }
        }
    }

    /// Italic line under an entry title (company, school).
    pub fn entry_subtitle(self, text: &str) -> String {
        match self {
            TemplateStyle::Creative => format!("{{\\color{{accent}}\\textit{{{text}}}}}\n"),
            _ => format!("\\textit{{{text}}}\n"),
        }
    }

    pub fn contact_separator(self) -> &'static str {
        match self {
            TemplateStyle::Creative => " \\textcolor{secondary}{|} ",
            _ => " $|$ ",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_lines_differ_per_style() {
        let modern = TemplateStyle::Modern.name_line("Ada");
        assert_eq!(modern, "{\\Huge\\sffamily\\bfseries\\color{primary} Ada}\\\\[8pt]\n");

        let classic = TemplateStyle::Classic.name_line("Ada");
        assert_eq!(classic, "{\\LARGE\\bfseries Ada}\\\\[6pt]\n");

        let minimal = TemplateStyle::Minimal.name_line("Ada");
        assert_eq!(minimal, "{\\Large\\bfseries Ada}\\\\[4pt]\n");
    }

    #[test]
    fn test_creative_name_is_drawn_in_tikz_box() {
        let creative = TemplateStyle::Creative.name_line("Ada");
        assert!(creative.starts_with("\\begin{tikzpicture}\n"));
        assert!(creative.contains("rounded corners=5pt"));
        assert!(creative.contains("{\\Huge\\sffamily\\bfseries Ada}"));
        assert!(creative.ends_with("\\end{tikzpicture}\\\\[10pt]\n"));
    }

    #[test]
    fn test_entry_title_weights() {
        let prominent =
            TemplateStyle::Creative.entry_title("Engineer", "2020 - 2022", TitleWeight::Prominent);
        assert!(prominent.starts_with("{\\large\\sffamily"));

        let regular = TemplateStyle::Creative.entry_title("BSc", "2019", TitleWeight::Regular);
        assert!(regular.starts_with("{\\sffamily\\bfseries\\color{primary}BSc}"));

        let classic = TemplateStyle::Classic.entry_title("BSc", "2019", TitleWeight::Regular);
        assert_eq!(classic, "\\textbf{BSc} \\hfill \\textit{2019}\\\\{}\n");
    }

    #[test]
    fn test_title_line() {
        assert_eq!(
            TemplateStyle::Classic.title_line("Engineer"),
            "{\\large\\itshape Engineer}\\\\[4pt]\n"
        );
        assert!(TemplateStyle::Creative
            .title_line("Engineer")
            .contains("\\color{accent} Engineer"));
    }

    #[test]
    fn test_contact_separator() {
        assert_eq!(TemplateStyle::Modern.contact_separator(), " $|$ ");
        assert_eq!(
            TemplateStyle::Creative.contact_separator(),
            " \\textcolor{secondary}{|} "
        );
    }
}
