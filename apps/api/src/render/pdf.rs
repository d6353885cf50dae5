//! Hand-drawn PDF export.
//!
//! This is an approximation, not typesetting: text is laid out line by line
//! with the PDF built-in Helvetica faces and wrapped with the static width
//! tables in `metrics`. Content flows onto new pages past the bottom margin.
//!
//! CPU-bound; callers run it inside `tokio::task::spawn_blocking`.

use printpdf::{
    BuiltinFont, Color, IndirectFontRef, Mm, PdfDocument, PdfDocumentReference,
    PdfLayerReference, Rgb,
};
use serde::Deserialize;
use thiserror::Error;

use crate::latex::escape::unescape;
use crate::models::resume::ResumeData;
use crate::render::metrics::{get_metrics, FontFace, MM_PER_PT};
use crate::templates::registry::Palette;

const NAME_SIZE_PT: f32 = 20.0;
const TITLE_SIZE_PT: f32 = 12.0;
const CONTACT_SIZE_PT: f32 = 10.0;
const HEADING_SIZE_PT: f32 = 14.0;
const LINE_SPACING: f32 = 1.25;
const MIN_CONTENT_WIDTH_MM: f32 = 40.0;

#[derive(Debug, Error)]
pub enum PdfError {
    #[error("invalid PDF options: {0}")]
    InvalidOptions(String),

    #[error("PDF writer error: {0}")]
    Writer(#[from] printpdf::Error),
}

// ────────────────────────────────────────────────────────────────────────────
// Options
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct Margins {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl Default for Margins {
    fn default() -> Self {
        Self {
            top: 20.0,
            right: 20.0,
            bottom: 20.0,
            left: 20.0,
        }
    }
}

/// Export options sent by the export dialog. Margins are millimetres.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PdfOptions {
    pub format: String,
    pub orientation: String,
    pub font_size: f32,
    pub margins: Margins,
    pub filename: Option<String>,
}

impl Default for PdfOptions {
    fn default() -> Self {
        Self {
            format: "a4".to_string(),
            orientation: "portrait".to_string(),
            font_size: 11.0,
            margins: Margins::default(),
            filename: None,
        }
    }
}

/// Resolved page size and margins, in millimetres.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageGeometry {
    pub width: f32,
    pub height: f32,
    pub margins: Margins,
}

impl PageGeometry {
    pub fn content_width(&self) -> f32 {
        self.width - self.margins.left - self.margins.right
    }
}

impl PdfOptions {
    /// Validates the options and resolves the page geometry.
    pub fn geometry(&self) -> Result<PageGeometry, PdfError> {
        let (w, h) = match self.format.to_ascii_lowercase().as_str() {
            "a3" => (297.0, 420.0),
            "a4" => (210.0, 297.0),
            "a5" => (148.0, 210.0),
            "letter" => (215.9, 279.4),
            "legal" => (215.9, 355.6),
            other => {
                return Err(PdfError::InvalidOptions(format!(
                    "unsupported paper format '{other}'"
                )))
            }
        };
        let (width, height) = match self.orientation.to_ascii_lowercase().as_str() {
            "portrait" => (w, h),
            "landscape" => (h, w),
            other => {
                return Err(PdfError::InvalidOptions(format!(
                    "unsupported orientation '{other}'"
                )))
            }
        };

        if !(6.0..=36.0).contains(&self.font_size) {
            return Err(PdfError::InvalidOptions(format!(
                "font size {} outside 6..=36",
                self.font_size
            )));
        }
        let m = self.margins;
        if [m.top, m.right, m.bottom, m.left].iter().any(|v| !v.is_finite() || *v < 0.0) {
            return Err(PdfError::InvalidOptions("margins must be non-negative".to_string()));
        }

        let geometry = PageGeometry {
            width,
            height,
            margins: m,
        };
        if geometry.content_width() < MIN_CONTENT_WIDTH_MM
            || height - m.top - m.bottom < MIN_CONTENT_WIDTH_MM
        {
            return Err(PdfError::InvalidOptions(
                "margins leave no room for content".to_string(),
            ));
        }
        Ok(geometry)
    }
}

/// A finished PDF.
#[derive(Debug, Clone)]
pub struct RenderedPdf {
    pub bytes: Vec<u8>,
    pub pages: usize,
}

// ────────────────────────────────────────────────────────────────────────────
// Canvas
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Ink {
    Text,
    Primary,
    Secondary,
}

/// Top-down line cursor over a printpdf document.
struct Canvas {
    doc: PdfDocumentReference,
    layer: PdfLayerReference,
    regular: IndirectFontRef,
    bold: IndirectFontRef,
    italic: IndirectFontRef,
    geometry: PageGeometry,
    palette: Option<Palette>,
    /// Top of the next line, in millimetres from the top edge.
    y: f32,
    pages: usize,
}

impl Canvas {
    fn new(title: &str, geometry: PageGeometry, palette: Option<Palette>) -> Result<Self, PdfError> {
        let (doc, page, layer) =
            PdfDocument::new(title, Mm(geometry.width), Mm(geometry.height), "Layer 1");
        let regular = doc.add_builtin_font(BuiltinFont::Helvetica)?;
        let bold = doc.add_builtin_font(BuiltinFont::HelveticaBold)?;
        let italic = doc.add_builtin_font(BuiltinFont::HelveticaOblique)?;
        let layer = doc.get_page(page).get_layer(layer);

        Ok(Self {
            doc,
            layer,
            regular,
            bold,
            italic,
            geometry,
            palette,
            y: geometry.margins.top,
            pages: 1,
        })
    }

    fn font(&self, face: FontFace) -> &IndirectFontRef {
        match face {
            FontFace::Regular => &self.regular,
            FontFace::Bold => &self.bold,
            FontFace::Italic => &self.italic,
        }
    }

    fn line_height(size_pt: f32) -> f32 {
        size_pt * MM_PER_PT * LINE_SPACING
    }

    /// Starts a new page when the next line would cross the bottom margin.
    fn ensure_room(&mut self, height: f32) {
        let limit = self.geometry.height - self.geometry.margins.bottom;
        if self.y + height > limit && self.y > self.geometry.margins.top {
            let (page, layer) = self.doc.add_page(
                Mm(self.geometry.width),
                Mm(self.geometry.height),
                format!("Layer {}", self.pages + 1),
            );
            self.layer = self.doc.get_page(page).get_layer(layer);
            self.y = self.geometry.margins.top;
            self.pages += 1;
        }
    }

    fn set_ink(&self, ink: Ink) {
        let hex = match (ink, self.palette) {
            (Ink::Primary, Some(p)) => p.primary,
            (Ink::Secondary, Some(p)) => p.secondary,
            _ => "000000",
        };
        self.layer.set_fill_color(Color::Rgb(hex_to_rgb(hex)));
    }

    /// Baseline for text of `size_pt` on the current line, one em below its
    /// top so ascenders stay inside the content area.
    fn baseline(&self, size_pt: f32) -> f32 {
        self.y + size_pt * MM_PER_PT
    }

    fn draw(&self, text: &str, face: FontFace, size_pt: f32, x: f32, ink: Ink) {
        self.set_ink(ink);
        self.layer.use_text(
            text,
            size_pt,
            Mm(x),
            Mm(self.geometry.height - self.baseline(size_pt)),
            self.font(face),
        );
    }

    fn gap(&mut self, mm: f32) {
        self.y += mm;
    }

    /// One line at the left margin plus `indent`.
    fn line(&mut self, text: &str, face: FontFace, size_pt: f32, indent: f32, ink: Ink) {
        let height = Self::line_height(size_pt);
        self.ensure_room(height);
        self.draw(text, face, size_pt, self.geometry.margins.left + indent, ink);
        self.y += height;
    }

    /// Left text with `right` flush against the right margin on the same line.
    fn split_line(&mut self, left: &str, right: &str, face: FontFace, size_pt: f32, ink: Ink) {
        let height = Self::line_height(size_pt);
        self.ensure_room(height);
        self.draw(left, face, size_pt, self.geometry.margins.left, ink);
        if !right.is_empty() {
            let right_w = get_metrics(FontFace::Regular).width_mm(right, size_pt);
            let x = self.geometry.width - self.geometry.margins.right - right_w;
            self.draw(right, FontFace::Regular, size_pt, x, Ink::Secondary);
        }
        self.y += height;
    }

    /// Wrapped paragraph within the content width.
    fn paragraph(&mut self, text: &str, face: FontFace, size_pt: f32, indent: f32) {
        let width = self.geometry.content_width() - indent;
        for line in get_metrics(face).wrap(text, width, size_pt) {
            self.line(&line, face, size_pt, indent, Ink::Text);
        }
    }

    fn heading(&mut self, title: &str) {
        self.gap(2.0);
        self.line(title, FontFace::Bold, HEADING_SIZE_PT, 0.0, Ink::Primary);
        self.gap(1.0);
    }

    fn finish(self) -> Result<RenderedPdf, PdfError> {
        let pages = self.pages;
        let bytes = self.doc.save_to_bytes()?;
        Ok(RenderedPdf { bytes, pages })
    }
}

fn hex_to_rgb(hex: &str) -> Rgb {
    let channel = |i: usize| {
        hex.get(i..i + 2)
            .and_then(|c| u8::from_str_radix(c, 16).ok())
            .map_or(0.0, |v| f32::from(v) / 255.0)
    };
    Rgb::new(channel(0), channel(2), channel(4), None)
}

// ────────────────────────────────────────────────────────────────────────────
// Renderers
// ────────────────────────────────────────────────────────────────────────────

/// Draws structured resume data. `palette` colours the name and headings.
pub fn render_resume(
    data: &ResumeData,
    palette: Option<Palette>,
    options: &PdfOptions,
) -> Result<RenderedPdf, PdfError> {
    let geometry = options.geometry()?;
    let size = options.font_size;
    let mut canvas = Canvas::new("Resume", geometry, palette)?;

    let info = &data.personal_info;
    if !info.name.trim().is_empty() {
        canvas.line(info.name.trim(), FontFace::Bold, NAME_SIZE_PT, 0.0, Ink::Primary);
    }
    if !info.title.trim().is_empty() {
        canvas.line(info.title.trim(), FontFace::Italic, TITLE_SIZE_PT, 0.0, Ink::Secondary);
    }

    let contacts: Vec<&str> = [&info.email, &info.phone, &info.location, &info.website]
        .into_iter()
        .map(|f| f.trim())
        .filter(|f| !f.is_empty())
        .collect();
    if !contacts.is_empty() {
        canvas.paragraph(&contacts.join(" | "), FontFace::Regular, CONTACT_SIZE_PT, 0.0);
        canvas.gap(4.0);
    }

    if !data.summary.trim().is_empty() {
        canvas.heading("Professional Summary");
        canvas.paragraph(data.summary.trim(), FontFace::Regular, size, 0.0);
    }

    let experience: Vec<_> = data
        .experience
        .iter()
        .filter(|e| !e.is_blank())
        .collect();
    if !experience.is_empty() {
        canvas.heading("Experience");
        for exp in experience {
            let dates = if exp.start_date.trim().is_empty() && exp.end_date.trim().is_empty() {
                String::new()
            } else {
                format!(
                    "{} - {}",
                    non_empty_or(&exp.start_date, "Start"),
                    non_empty_or(&exp.end_date, "End")
                )
            };
            canvas.split_line(
                non_empty_or(&exp.position, "Position"),
                &dates,
                FontFace::Bold,
                size,
                Ink::Text,
            );
            if !exp.company.trim().is_empty() {
                canvas.line(exp.company.trim(), FontFace::Italic, size, 0.0, Ink::Text);
            }
            for bullet in crate::latex::sections::bullet_lines(&exp.description) {
                canvas.paragraph(&format!("- {bullet}"), FontFace::Regular, size, 5.0);
            }
            canvas.gap(2.0);
        }
    }

    let education: Vec<_> = data
        .education
        .iter()
        .filter(|e| !e.is_blank())
        .collect();
    if !education.is_empty() {
        canvas.heading("Education");
        for edu in education {
            canvas.split_line(
                non_empty_or(&edu.degree, "Degree"),
                edu.year.trim(),
                FontFace::Bold,
                size,
                Ink::Text,
            );
            if !edu.school.trim().is_empty() {
                canvas.line(edu.school.trim(), FontFace::Italic, size, 0.0, Ink::Text);
            }
            canvas.gap(2.0);
        }
    }

    let skills = data.skills_line();
    if !skills.is_empty() {
        canvas.heading("Skills");
        canvas.paragraph(&skills, FontFace::Regular, size, 0.0);
    }

    let projects: Vec<_> = data
        .projects
        .iter()
        .filter(|p| !p.is_blank())
        .collect();
    if !projects.is_empty() {
        canvas.heading("Projects");
        for project in projects {
            canvas.split_line(
                non_empty_or(&project.name, "Project"),
                project.year.trim(),
                FontFace::Bold,
                size,
                Ink::Text,
            );
            canvas.paragraph(project.description.trim(), FontFace::Regular, size, 0.0);
            canvas.gap(2.0);
        }
    }

    canvas.finish()
}

/// Draws raw LaTeX by walking its lines: `\section{..}` becomes a heading, a
/// line opening with `\textbf{..}` a bold line, and any line that does not
/// start with a command a wrapped paragraph. Everything else is skipped.
pub fn render_latex(latex: &str, options: &PdfOptions) -> Result<RenderedPdf, PdfError> {
    let geometry = options.geometry()?;
    let size = options.font_size;
    let mut canvas = Canvas::new("Resume", geometry, None)?;

    for line in latex.lines().map(str::trim) {
        if let Some(title) = command_argument(line, "\\section") {
            canvas.heading(&unescape(title));
        } else if let Some(text) = command_argument(line, "\\textbf") {
            canvas.line(&unescape(text), FontFace::Bold, size, 0.0, Ink::Text);
        } else if !line.is_empty() && !line.starts_with('\\') && !line.starts_with('%') {
            canvas.paragraph(&unescape(line), FontFace::Regular, size, 0.0);
        }
    }

    canvas.finish()
}

/// Single-page "Resume Preview" document shown before anything is compiled.
pub fn placeholder() -> Result<RenderedPdf, PdfError> {
    let options = PdfOptions {
        format: "letter".to_string(),
        font_size: 12.0,
        margins: Margins {
            top: 35.0,
            right: 35.0,
            bottom: 35.0,
            left: 35.0,
        },
        ..Default::default()
    };
    let mut canvas = Canvas::new("Resume Preview", options.geometry()?, None)?;
    canvas.line("Resume Preview", FontFace::Regular, 12.0, 0.0, Ink::Text);
    canvas.finish()
}

/// First brace argument of `command` when `line` starts with it.
fn command_argument<'a>(line: &'a str, command: &str) -> Option<&'a str> {
    let rest = line.strip_prefix(command)?.strip_prefix('{')?;
    let mut depth = 0usize;
    let mut escaped = false;
    for (i, c) in rest.char_indices() {
        match c {
            _ if escaped => escaped = false,
            '\\' => escaped = true,
            '{' => depth += 1,
            '}' if depth == 0 => return Some(&rest[..i]),
            '}' => depth -= 1,
            _ => {}
        }
    }
    None
}

fn non_empty_or<'a>(value: &'a str, placeholder: &'a str) -> &'a str {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        placeholder
    } else {
        trimmed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resume::{Experience, PersonalInfo};

    fn ada() -> ResumeData {
        ResumeData {
            personal_info: PersonalInfo {
                name: "Ada Lovelace".to_string(),
                title: "Analyst".to_string(),
                email: "ada@x.com".to_string(),
                ..Default::default()
            },
            summary: "First programmer.".to_string(),
            experience: vec![Experience {
                position: "Engineer".to_string(),
                company: "Analytical Co".to_string(),
                start_date: "2020".to_string(),
                end_date: "2022".to_string(),
                description: "Built things\nShipped things".to_string(),
                ..Default::default()
            }],
            ..Default::default()
        }
    }

    #[test]
    fn test_geometry_defaults_and_landscape() {
        let geometry = PdfOptions::default().geometry().unwrap();
        assert_eq!((geometry.width, geometry.height), (210.0, 297.0));
        assert!((geometry.content_width() - 170.0).abs() < 1e-4);

        let landscape = PdfOptions {
            format: "Letter".to_string(),
            orientation: "landscape".to_string(),
            ..Default::default()
        };
        let geometry = landscape.geometry().unwrap();
        assert_eq!((geometry.width, geometry.height), (279.4, 215.9));
    }

    #[test]
    fn test_geometry_rejects_bad_options() {
        let bad = [
            PdfOptions {
                format: "b5".to_string(),
                ..Default::default()
            },
            PdfOptions {
                orientation: "diagonal".to_string(),
                ..Default::default()
            },
            PdfOptions {
                font_size: 2.0,
                ..Default::default()
            },
            PdfOptions {
                margins: Margins {
                    left: 100.0,
                    right: 100.0,
                    ..Default::default()
                },
                ..Default::default()
            },
            PdfOptions {
                margins: Margins {
                    top: -1.0,
                    ..Default::default()
                },
                ..Default::default()
            },
        ];
        for options in bad {
            assert!(
                matches!(options.geometry(), Err(PdfError::InvalidOptions(_))),
                "{options:?}"
            );
        }
    }

    #[test]
    fn test_options_deserialize_with_defaults() {
        let options: PdfOptions =
            serde_json::from_value(serde_json::json!({ "fontSize": 12, "margins": { "top": 10 } }))
                .unwrap();
        assert_eq!(options.font_size, 12.0);
        assert_eq!(options.margins.top, 10.0);
        assert_eq!(options.margins.left, 20.0);
        assert_eq!(options.format, "a4");
    }

    #[test]
    fn test_command_argument() {
        assert_eq!(command_argument("\\section{Experience}", "\\section"), Some("Experience"));
        assert_eq!(
            command_argument("\\textbf{A {b} \\} c} \\hfill x", "\\textbf"),
            Some("A {b} \\} c")
        );
        assert_eq!(command_argument("\\section*{X}", "\\section"), None);
        assert_eq!(command_argument("\\textbf{open", "\\textbf"), None);
    }

    #[test]
    fn test_hex_to_rgb() {
        let rgb = hex_to_rgb("ff0080");
        assert_eq!((rgb.r, rgb.g), (1.0, 0.0));
        assert!((rgb.b - 128.0 / 255.0).abs() < 1e-6);
    }

    #[test]
    fn test_first_baseline_clears_top_margin() {
        let geometry = PdfOptions::default().geometry().unwrap();
        let mut canvas = Canvas::new("Resume", geometry, None).unwrap();
        // Helvetica ascender is 0.718 em.
        let ascent = NAME_SIZE_PT * MM_PER_PT * 0.718;
        assert!(canvas.baseline(NAME_SIZE_PT) - ascent >= geometry.margins.top);

        canvas.line("Ada", FontFace::Bold, NAME_SIZE_PT, 0.0, Ink::Text);
        assert!(canvas.baseline(11.0) > geometry.margins.top + NAME_SIZE_PT * MM_PER_PT);
    }

    #[test]
    fn test_render_resume_contains_text() {
        let pdf = render_resume(&ada(), None, &PdfOptions::default()).unwrap();
        assert!(pdf.bytes.starts_with(b"%PDF"));
        assert_eq!(pdf.pages, 1);

        let text = pdf_extract::extract_text_from_mem(&pdf.bytes).unwrap();
        assert!(text.contains("Ada Lovelace"), "{text}");
        assert!(text.contains("Analyst"), "{text}");
        assert!(text.contains("Experience"), "{text}");
    }

    #[test]
    fn test_long_resume_flows_onto_more_pages() {
        let mut data = ada();
        data.experience = (0..40)
            .map(|i| Experience {
                position: format!("Role {i}"),
                company: "Analytical Co".to_string(),
                description: "Did a thing\nDid another thing\nAnd one more".to_string(),
                ..Default::default()
            })
            .collect();
        let pdf = render_resume(&data, None, &PdfOptions::default()).unwrap();
        assert!(pdf.pages > 1, "expected overflow, got {} page(s)", pdf.pages);
    }

    #[test]
    fn test_render_latex_walks_lines() {
        let latex = "\\documentclass{article}\n\\begin{document}\n\\section{Experience}\n\\textbf{Engineer} \\hfill 2020\\\\\nCut costs by 40\\% \\& more\n\\end{document}";
        let pdf = render_latex(latex, &PdfOptions::default()).unwrap();
        let text = pdf_extract::extract_text_from_mem(&pdf.bytes).unwrap();
        assert!(text.contains("Experience"), "{text}");
        assert!(text.contains("Engineer"), "{text}");
        assert!(!text.contains("documentclass"), "{text}");
    }

    #[test]
    fn test_placeholder_is_a_pdf() {
        let pdf = placeholder().unwrap();
        assert!(pdf.bytes.starts_with(b"%PDF"));
        assert_eq!(pdf.pages, 1);
    }
}
