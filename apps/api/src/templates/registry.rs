//! Built-in resume templates.
//!
//! Templates are static, immutable descriptors. The registry is built once at
//! startup and handed to the generator explicitly; nothing reads it from
//! ambient scope.

use serde::Serialize;

use crate::templates::style::TemplateStyle;

// ────────────────────────────────────────────────────────────────────────────
// Template descriptor
// ────────────────────────────────────────────────────────────────────────────

/// Three-colour palette as 6-digit HTML hex (no leading `#`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Palette {
    pub primary: &'static str,
    pub secondary: &'static str,
    pub accent: &'static str,
}

/// Font directives emitted verbatim into the preamble. Empty means none.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FontDirectives {
    pub main: &'static str,
    pub heading: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutDirectives {
    /// Option string passed to `geometry`, e.g. `margin=1in`.
    pub margins: &'static str,
    pub spacing: &'static str,
    pub section_format: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateConfig {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    /// Gallery preview image path served by the frontend.
    pub preview: &'static str,
    pub document_class: &'static str,
    /// Packages loaded after `geometry`, in order.
    pub packages: &'static [&'static str],
    pub colors: Palette,
    pub fonts: FontDirectives,
    pub layout: LayoutDirectives,
    #[serde(skip)]
    pub style: TemplateStyle,
}

impl TemplateConfig {
    pub fn uses_package(&self, package: &str) -> bool {
        self.packages.iter().any(|&p| p == package)
    }

    /// Email and website render as `\href` links.
    pub fn supports_hyperlinks(&self) -> bool {
        self.uses_package("hyperref")
    }

    /// TikZ drawing is available for decorative headers.
    pub fn supports_graphics(&self) -> bool {
        self.uses_package("tikz")
    }
}

/// Short gallery entry returned by `GET /api/templates`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateSummary {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub preview: &'static str,
    pub supports_hyperlinks: bool,
    pub supports_graphics: bool,
}

impl From<&TemplateConfig> for TemplateSummary {
    fn from(t: &TemplateConfig) -> Self {
        Self {
            id: t.id,
            name: t.name,
            description: t.description,
            preview: t.preview,
            supports_hyperlinks: t.supports_hyperlinks(),
            supports_graphics: t.supports_graphics(),
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Registry
// ────────────────────────────────────────────────────────────────────────────

/// Immutable lookup table of templates, in gallery order.
#[derive(Debug, Clone)]
pub struct TemplateRegistry {
    templates: Vec<TemplateConfig>,
}

impl TemplateRegistry {
    pub fn new(templates: Vec<TemplateConfig>) -> Self {
        Self { templates }
    }

    /// The four templates shipped with the service.
    pub fn builtin() -> Self {
        Self::new(vec![modern(), classic(), creative(), minimal()])
    }

    /// Looks up a template by id. Unknown ids are never defaulted.
    pub fn lookup(&self, id: &str) -> Option<&TemplateConfig> {
        self.templates.iter().find(|t| t.id == id)
    }

    pub fn list(&self) -> &[TemplateConfig] {
        &self.templates
    }

    pub fn ids(&self) -> Vec<&'static str> {
        self.templates.iter().map(|t| t.id).collect()
    }
}

fn modern() -> TemplateConfig {
    TemplateConfig {
        id: "modern",
        name: "Modern",
        description: "Clean and contemporary design with subtle colors",
        preview: "/modern-resume-template.png",
        document_class: "article",
        packages: &["titlesec", "enumitem", "xcolor", "hyperref", "fontspec"],
        colors: Palette {
            primary: "0891b2",
            secondary: "6366f1",
            accent: "0f172a",
        },
        fonts: FontDirectives {
            main: r"\setmainfont{Calibri}",
            heading: r"\setsansfont{Calibri}",
        },
        layout: LayoutDirectives {
            margins: "margin=0.75in",
            spacing: r"\titlespacing*{\section}{0pt}{16pt}{8pt}",
            section_format: r"\titleformat{\section}{\large\sffamily\bfseries\color{primary}}{}{0em}{}[\color{primary}\titlerule]",
        },
        style: TemplateStyle::Modern,
    }
}

fn classic() -> TemplateConfig {
    TemplateConfig {
        id: "classic",
        name: "Classic",
        description: "Traditional format perfect for conservative industries",
        preview: "/classic-resume-template-preview.jpg",
        document_class: "article",
        // xcolor backs the \definecolor palette and the contact line colour.
        packages: &["titlesec", "enumitem", "xcolor"],
        colors: Palette {
            primary: "000000",
            secondary: "333333",
            accent: "666666",
        },
        fonts: FontDirectives {
            main: r"\usepackage{times}",
            heading: "",
        },
        layout: LayoutDirectives {
            margins: "margin=1in",
            spacing: r"\titlespacing*{\section}{0pt}{12pt}{6pt}",
            section_format: r"\titleformat{\section}{\large\bfseries}{}{0em}{}[\titlerule]",
        },
        style: TemplateStyle::Classic,
    }
}

fn creative() -> TemplateConfig {
    TemplateConfig {
        id: "creative",
        name: "Creative",
        description: "Bold design with visual elements for creative roles",
        preview: "/creative-resume-template.png",
        document_class: "article",
        packages: &["titlesec", "enumitem", "xcolor", "hyperref", "tikz", "fontspec"],
        colors: Palette {
            primary: "ec4899",
            secondary: "8b5cf6",
            accent: "06b6d4",
        },
        fonts: FontDirectives {
            main: r"\setmainfont{Montserrat}",
            heading: r"\setsansfont{Montserrat}",
        },
        layout: LayoutDirectives {
            margins: "margin=0.6in",
            spacing: r"\titlespacing*{\section}{0pt}{18pt}{10pt}",
            section_format: r"\titleformat{\section}{\Large\sffamily\bfseries\color{primary}}{}{0em}{}[\color{secondary}\titlerule[2pt]]",
        },
        style: TemplateStyle::Creative,
    }
}

fn minimal() -> TemplateConfig {
    TemplateConfig {
        id: "minimal",
        name: "Minimal",
        description: "Simple and elegant with focus on content",
        preview: "/minimal-resume-template-preview.jpg",
        document_class: "article",
        packages: &["titlesec", "enumitem", "xcolor"],
        colors: Palette {
            primary: "374151",
            secondary: "6b7280",
            accent: "9ca3af",
        },
        fonts: FontDirectives {
            main: r"\usepackage{lmodern}",
            heading: "",
        },
        layout: LayoutDirectives {
            margins: "margin=1.2in",
            spacing: r"\titlespacing*{\section}{0pt}{14pt}{7pt}",
            section_format: r"\titleformat{\section}{\large\bfseries}{}{0em}{}",
        },
        style: TemplateStyle::Minimal,
    }
}
