//! Insertable LaTeX snippets and the starter document for raw mode.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Snippet {
    pub name: &'static str,
    pub description: &'static str,
    pub code: &'static str,
}

pub static SNIPPETS: &[Snippet] = &[
    Snippet {
        name: "Section",
        description: "Add a new section",
        code: r"\section{Section Title}",
    },
    Snippet {
        name: "Bold Text",
        description: "Make text bold",
        code: r"\textbf{bold text}",
    },
    Snippet {
        name: "Italic Text",
        description: "Make text italic",
        code: r"\textit{italic text}",
    },
    Snippet {
        name: "Bullet List",
        description: "Create a bullet point list",
        code: "\\begin{itemize}[leftmargin=*]\n    \\item First item\n    \\item Second item\n\\end{itemize}",
    },
    Snippet {
        name: "Job Entry",
        description: "Add a job experience entry",
        code: "\\textbf{Job Title} \\hfill \\textit{Start Date - End Date}\\\\\n\\textit{Company Name, Location}\n\\begin{itemize}[leftmargin=*]\n    \\item Achievement or responsibility\n\\end{itemize}",
    },
    Snippet {
        name: "Education Entry",
        description: "Add an education entry",
        code: "\\textbf{Degree Name} \\hfill \\textit{Graduation Year}\\\\\n\\textit{University Name, Location}",
    },
    Snippet {
        name: "Hyperlink",
        description: "Create a clickable link",
        code: r"\href{https://example.com}{Link Text}",
    },
];

/// Starter document loaded into an empty raw editor.
pub const SAMPLE_DOCUMENT: &str = r"\documentclass[11pt,a4paper]{article}
\usepackage[utf8]{inputenc}
\usepackage{enumitem}
\usepackage{titlesec}
\usepackage{xcolor}
\usepackage{hyperref}

\titleformat{\section}{\large\bfseries}{}{0em}{}{\titlerule}
\titlespacing*{\section}{0pt}{12pt}{6pt}

\hypersetup{
    colorlinks=true,
    linkcolor=blue,
    urlcolor=blue,
    pdfborder={0 0 0}
}

\begin{document}

\section{Experience}
\textbf{Software Engineer} \hfill \textit{2022 - Present}\\
\textit{Tech Company, City}
\begin{itemize}[leftmargin=*]
    \item Developed scalable web applications using React and Node.js
    \item Reduced system latency by 45\% through optimization
\end{itemize}

\end{document}";
