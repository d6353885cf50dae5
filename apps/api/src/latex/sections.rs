//! Section builders: one pure function per resume section kind.
//!
//! Every builder escapes the text it interpolates and substitutes a
//! placeholder for empty fields. Callers decide whether a section is present
//! at all; builders always emit a complete, closed fragment.

use crate::latex::escape::{escape, escape_url};
use crate::models::resume::{Education, Experience, PersonalInfo, Project};
use crate::templates::{TemplateConfig, TitleWeight};

pub const NAME_PLACEHOLDER: &str = "Your Name";

const ITEMIZE_BEGIN: &str = "\\begin{itemize}[leftmargin=*]\n";
const ITEMIZE_END: &str = "\\end{itemize}\n\n";

/// Escaped, trimmed `value`, or `placeholder` when it is blank.
fn or_placeholder(value: &str, placeholder: &str) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        placeholder.to_string()
    } else {
        escape(trimmed)
    }
}

fn present(value: &str) -> Option<&str> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

// ────────────────────────────────────────────────────────────────────────────
// Header
// ────────────────────────────────────────────────────────────────────────────

/// Name block, optional headline and the contact line, centred.
pub fn header(info: &PersonalInfo, template: &TemplateConfig) -> String {
    let style = template.style;
    let mut out = String::from("\n\\begin{center}\n");
    out.push_str(&style.name_line(&or_placeholder(&info.name, NAME_PLACEHOLDER)));

    if let Some(title) = present(&info.title) {
        out.push_str(&style.title_line(&escape(title)));
    }

    if info.has_contact() {
        out.push_str(&format!(
            "{{\\color{{secondary}} {}}}\n",
            contact_items(info, template).join(style.contact_separator())
        ));
    }

    out.push_str("\\end{center}\n\\vspace{10pt}\n\n");
    out
}

/// Present contact fields in order email, phone, location, website.
fn contact_items(info: &PersonalInfo, template: &TemplateConfig) -> Vec<String> {
    let links = template.supports_hyperlinks();
    let mut items = Vec::with_capacity(4);

    if let Some(email) = present(&info.email) {
        items.push(if links {
            format!("\\href{{mailto:{}}}{{{}}}", escape_url(email), escape(email))
        } else {
            escape(email)
        });
    }
    if let Some(phone) = present(&info.phone) {
        items.push(escape(phone));
    }
    if let Some(location) = present(&info.location) {
        items.push(escape(location));
    }
    if let Some(website) = present(&info.website) {
        items.push(if links {
            format!("\\href{{{}}}{{{}}}", escape_url(website), escape(website))
        } else {
            escape(website)
        });
    }
    items
}

// ────────────────────────────────────────────────────────────────────────────
// Sections
// ────────────────────────────────────────────────────────────────────────────

/// Heading followed by a paragraph of text. Used for summary and skills.
pub fn simple_section(title: &str, content: &str) -> String {
    format!("\\section{{{}}}\n{}\n\n", escape(title), escape(content.trim()))
}

pub fn experience(entries: &[Experience], template: &TemplateConfig) -> String {
    let style = template.style;
    let mut out = String::from("\\section{Experience}\n");

    for exp in entries {
        let range = format!(
            "{} - {}",
            or_placeholder(&exp.start_date, "Start"),
            or_placeholder(&exp.end_date, "End")
        );
        out.push_str(&style.entry_title(
            &or_placeholder(&exp.position, "Position"),
            &range,
            TitleWeight::Prominent,
        ));
        out.push_str(&style.entry_subtitle(&or_placeholder(&exp.company, "Company")));

        let bullets = bullet_lines(&exp.description);
        if bullets.is_empty() {
            out.push('\n');
            continue;
        }
        out.push_str(ITEMIZE_BEGIN);
        for bullet in bullets {
            out.push_str(&format!("    \\item {}\n", escape(bullet)));
        }
        out.push_str(ITEMIZE_END);
    }

    out
}

pub fn education(entries: &[Education], template: &TemplateConfig) -> String {
    let style = template.style;
    let mut out = String::from("\\section{Education}\n");

    for edu in entries {
        out.push_str(&style.entry_title(
            &or_placeholder(&edu.degree, "Degree"),
            &or_placeholder(&edu.year, "Year"),
            TitleWeight::Regular,
        ));
        out.push_str(&style.entry_subtitle(&or_placeholder(&edu.school, "School")));
        out.push('\n');
    }

    out
}

pub fn projects(entries: &[Project], template: &TemplateConfig) -> String {
    let style = template.style;
    let mut out = String::from("\\section{Projects}\n");

    for project in entries {
        out.push_str(&style.entry_title(
            &or_placeholder(&project.name, "Project"),
            &or_placeholder(&project.year, "Year"),
            TitleWeight::Regular,
        ));
        out.push_str(&or_placeholder(&project.description, "Project description"));
        out.push_str("\n\n");
    }

    out
}

/// Splits a description into trimmed, non-blank lines.
pub fn bullet_lines(description: &str) -> Vec<&str> {
    description
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::templates::TemplateRegistry;

    fn template(id: &str) -> TemplateConfig {
        TemplateRegistry::builtin().lookup(id).cloned().unwrap()
    }

    #[test]
    fn test_header_placeholder_and_no_contact_line() {
        let out = header(&PersonalInfo::default(), &template("classic"));
        assert!(out.contains("{\\LARGE\\bfseries Your Name}"));
        assert!(!out.contains("\\color{secondary}"));
        assert!(out.contains("\\end{center}\n\\vspace{10pt}"));
    }

    #[test]
    fn test_header_contact_order_and_separator() {
        let info = PersonalInfo {
            name: "Ada".to_string(),
            email: "ada@x.com".to_string(),
            phone: "555-0100".to_string(),
            location: "London".to_string(),
            ..Default::default()
        };
        let out = header(&info, &template("minimal"));
        assert!(out.contains("{\\color{secondary} ada@x.com $|$ 555-0100 $|$ London}\n"));
    }

    #[test]
    fn test_header_links_only_with_hyperref() {
        let info = PersonalInfo {
            email: "ada@x.com".to_string(),
            website: "https://ada.dev/#about".to_string(),
            ..Default::default()
        };

        let linked = header(&info, &template("creative"));
        assert!(linked.contains("\\href{mailto:ada@x.com}{ada@x.com}"));
        assert!(linked.contains("\\href{https://ada.dev/\\#about}{https://ada.dev/\\#about}"));
        assert!(linked.contains(" \\textcolor{secondary}{|} "));

        let plain = header(&info, &template("classic"));
        assert!(!plain.contains("\\href"));
        assert!(plain.contains("ada@x.com $|$ https://ada.dev/\\#about"));
    }

    #[test]
    fn test_simple_section_escapes_content() {
        assert_eq!(
            simple_section("Skills", "C#, R&D"),
            "\\section{Skills}\nC\\#, R\\&D\n\n"
        );
    }

    #[test]
    fn test_experience_bullets() {
        let entries = vec![Experience {
            position: "Engineer".to_string(),
            company: "Analytical Co".to_string(),
            start_date: "2020".to_string(),
            end_date: "2022".to_string(),
            description: "Built things\n\n   \n  Cut costs 40%  \n".to_string(),
            ..Default::default()
        }];
        let out = experience(&entries, &template("classic"));
        assert!(out.starts_with("\\section{Experience}\n"));
        assert!(out.contains("\\textbf{Engineer} \\hfill \\textit{2020 - 2022}\\\\{}\n\\textit{Analytical Co}\n"));
        assert!(out.contains("    \\item Built things\n    \\item Cut costs 40\\%\n"));
        assert_eq!(out.matches("\\item").count(), 2);
        assert_eq!(out.matches("\\begin{itemize}").count(), 1);
    }

    #[test]
    fn test_experience_without_description_has_no_list() {
        let entries = vec![Experience {
            company: "Acme".to_string(),
            description: "  \n ".to_string(),
            ..Default::default()
        }];
        let out = experience(&entries, &template("modern"));
        assert!(!out.contains("itemize"));
        assert!(out.contains("\\textbf{\\color{primary}Position}"));
        assert!(out.contains("\\textit{\\color{secondary}Start - End}"));
    }

    #[test]
    fn test_education_and_projects_placeholders() {
        let edu = education(&[Education::default()], &template("minimal"));
        assert!(edu.contains("\\textbf{Degree} \\hfill \\textit{Year}\\\\{}\n\\textit{School}\n"));
        assert!(!edu.contains("itemize"));

        let proj = projects(&[Project::default()], &template("creative"));
        assert!(proj.contains("{\\sffamily\\bfseries\\color{primary}Project}"));
        assert!(proj.contains("Project description\n\n"));
    }

    #[test]
    fn test_project_description_is_not_split() {
        let entries = vec![Project {
            name: "Engine".to_string(),
            description: "Line one\nLine two".to_string(),
            year: "1843".to_string(),
            ..Default::default()
        }];
        let out = projects(&entries, &template("classic"));
        assert!(out.contains("Line one\nLine two\n\n"));
        assert!(!out.contains("\\item"));
    }

    #[test]
    fn test_header_title_line() {
        let info = PersonalInfo {
            name: "Ada".to_string(),
            title: "Analyst & Programmer".to_string(),
            email: "ada@x.com".to_string(),
            ..Default::default()
        };
        let out = header(&info, &template("classic"));
        let name = out.find("Ada}").unwrap();
        let title = out.find("{\\large\\itshape Analyst \\& Programmer}\\\\[4pt]\n").unwrap();
        let contact = out.find("{\\color{secondary} ada@x.com}").unwrap();
        assert!(name < title && title < contact);

        let untitled = header(
            &PersonalInfo {
                title: "   ".to_string(),
                ..info
            },
            &template("classic"),
        );
        assert!(!untitled.contains("\\itshape"));
    }

    #[test]
    fn test_break_before_bracket_or_star_description() {
        for description in ["[WIP] difference engine", "*starred* engine"] {
            let entries = vec![Project {
                name: "Engine".to_string(),
                description: description.to_string(),
                year: "1843".to_string(),
                ..Default::default()
            }];
            for id in ["modern", "classic", "creative", "minimal"] {
                let out = projects(&entries, &template(id));
                assert!(
                    out.contains(&format!("\\\\{{}}\n{description}\n")),
                    "{id}: {out}"
                );
                assert!(!out.contains("\\\\\n"), "{id}: bare line break in {out}");
            }
        }
    }
}
