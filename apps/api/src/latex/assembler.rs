//! Document Assembler — turns `ResumeData` plus a template id into a complete
//! LaTeX document.
//!
//! Flow: registry lookup → preamble → header → summary → experience →
//!       education → skills → projects → `\end{document}`.
//!
//! Pure and synchronous. Sections without data are left out entirely.

use tracing::debug;

use crate::latex::sections;
use crate::latex::GenerateError;
use crate::models::resume::{Education, Experience, Project, ResumeData};
use crate::templates::{TemplateConfig, TemplateRegistry};

/// Generates the LaTeX source for `data` using the template `template_id`.
///
/// Fails with `TemplateNotFound` for unknown ids; there is no fallback.
pub fn generate(
    data: &ResumeData,
    template_id: &str,
    registry: &TemplateRegistry,
) -> Result<String, GenerateError> {
    let template = registry
        .lookup(template_id)
        .ok_or_else(|| GenerateError::TemplateNotFound(template_id.to_string()))?;

    let mut latex = preamble(template);
    latex.push_str("\n\\begin{document}\n");
    latex.push_str(&sections::header(&data.personal_info, template));

    if !data.summary.trim().is_empty() {
        latex.push_str(&sections::simple_section("Professional Summary", &data.summary));
    }

    let experience: Vec<Experience> = data
        .experience
        .iter()
        .filter(|e| !e.is_blank())
        .cloned()
        .collect();
    if !experience.is_empty() {
        latex.push_str(&sections::experience(&experience, template));
    }

    let education: Vec<Education> = data
        .education
        .iter()
        .filter(|e| !e.is_blank())
        .cloned()
        .collect();
    if !education.is_empty() {
        latex.push_str(&sections::education(&education, template));
    }

    let skills = data.skills_line();
    if !skills.is_empty() {
        latex.push_str(&sections::simple_section("Skills", &skills));
    }

    let projects: Vec<Project> = data
        .projects
        .iter()
        .filter(|p| !p.is_blank())
        .cloned()
        .collect();
    if !projects.is_empty() {
        latex.push_str(&sections::projects(&projects, template));
    }

    latex.push_str("\n\\end{document}");

    debug!(
        "Generated {} bytes of LaTeX with template '{}'",
        latex.len(),
        template.id
    );
    Ok(latex)
}

/// Document class, packages, palette, fonts and heading style.
fn preamble(template: &TemplateConfig) -> String {
    let mut out = format!(
        "\\documentclass[11pt,a4paper]{{{}}}\n\\usepackage[utf8]{{inputenc}}\n\\usepackage[{}]{{geometry}}\n",
        template.document_class, template.layout.margins
    );

    for package in template.packages {
        out.push_str(&format!("\\usepackage{{{package}}}\n"));
    }

    out.push_str(&format!(
        "\n\\definecolor{{primary}}{{HTML}}{{{}}}\n\\definecolor{{secondary}}{{HTML}}{{{}}}\n\\definecolor{{accent}}{{HTML}}{{{}}}\n",
        template.colors.primary, template.colors.secondary, template.colors.accent
    ));

    for directive in [template.fonts.main, template.fonts.heading] {
        if !directive.is_empty() {
            out.push_str(directive);
            out.push('\n');
        }
    }

    out.push_str(&format!(
        "\n{}\n{}\n",
        template.layout.section_format, template.layout.spacing
    ));

    if template.supports_hyperlinks() {
        out.push_str(
            "\n\\hypersetup{\n    colorlinks=true,\n    linkcolor=primary,\n    urlcolor=primary,\n    pdfborder={0 0 0}\n}\n",
        );
    }

    out
}
