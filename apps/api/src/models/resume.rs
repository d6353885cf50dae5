use serde::{Deserialize, Deserializer, Serialize};

/// Structured resume data as submitted by the form editor.
///
/// Every field is optional on the wire and defaults to empty. Empty values are
/// replaced with placeholders at render time, never rejected.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResumeData {
    pub personal_info: PersonalInfo,
    pub summary: String,
    pub experience: Vec<Experience>,
    pub education: Vec<Education>,
    #[serde(deserialize_with = "skills_from_list_or_text")]
    pub skills: Vec<String>,
    pub projects: Vec<Project>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PersonalInfo {
    pub name: String,
    /// Professional headline shown under the name, e.g. "Software Engineer".
    pub title: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub website: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Experience {
    /// Client-assigned list id, only used by the UI for deletion.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    pub company: String,
    pub position: String,
    pub start_date: String,
    pub end_date: String,
    /// Newline-delimited bullet points.
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Education {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    pub degree: String,
    pub school: String,
    pub year: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Project {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    pub name: String,
    pub description: String,
    pub year: String,
}

impl PersonalInfo {
    pub fn has_contact(&self) -> bool {
        [&self.email, &self.phone, &self.location, &self.website]
            .iter()
            .any(|f| !f.trim().is_empty())
    }
}

fn all_blank(fields: &[&String]) -> bool {
    fields.iter().all(|f| f.trim().is_empty())
}

impl Experience {
    /// Every field is empty or whitespace; such entries are not rendered.
    pub fn is_blank(&self) -> bool {
        all_blank(&[
            &self.company,
            &self.position,
            &self.start_date,
            &self.end_date,
            &self.description,
        ])
    }
}

impl Education {
    pub fn is_blank(&self) -> bool {
        all_blank(&[&self.degree, &self.school, &self.year])
    }
}

impl Project {
    pub fn is_blank(&self) -> bool {
        all_blank(&[&self.name, &self.description, &self.year])
    }
}

impl ResumeData {
    /// Skills joined into the single line rendered under the Skills heading.
    /// Blank entries are skipped.
    pub fn skills_line(&self) -> String {
        self.skills
            .iter()
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Accepts `["Rust", "Go"]`, `"Rust, Go"` or `null`.
fn skills_from_list_or_text<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Skills {
        List(Vec<String>),
        Text(String),
    }

    Ok(match Option::<Skills>::deserialize(deserializer)? {
        Some(Skills::List(list)) => list,
        Some(Skills::Text(text)) if text.trim().is_empty() => Vec::new(),
        Some(Skills::Text(text)) => vec![text],
        None => Vec::new(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object_deserializes_to_defaults() {
        let data: ResumeData = serde_json::from_str("{}").unwrap();
        assert_eq!(data, ResumeData::default());
    }

    #[test]
    fn test_camel_case_fields() {
        let json = serde_json::json!({
            "personalInfo": { "name": "Ada Lovelace", "email": "ada@x.com" },
            "experience": [{
                "id": 1712345678901u64,
                "position": "Engineer",
                "company": "Analytical Co",
                "startDate": "2020",
                "endDate": "2022",
                "description": "Built things\nShipped things"
            }]
        });
        let data: ResumeData = serde_json::from_value(json).unwrap();
        assert_eq!(data.personal_info.name, "Ada Lovelace");
        assert_eq!(data.experience[0].start_date, "2020");
        assert_eq!(data.experience[0].id, Some(1712345678901));
        assert!(data.education.is_empty());
    }

    #[test]
    fn test_skills_accepts_text_or_list() {
        let listed: ResumeData =
            serde_json::from_value(serde_json::json!({ "skills": ["Rust", " ", "SQL"] })).unwrap();
        assert_eq!(listed.skills_line(), "Rust, SQL");

        let text: ResumeData =
            serde_json::from_value(serde_json::json!({ "skills": "Rust, SQL" })).unwrap();
        assert_eq!(text.skills, vec!["Rust, SQL".to_string()]);

        let null: ResumeData =
            serde_json::from_value(serde_json::json!({ "skills": null })).unwrap();
        assert!(null.skills.is_empty());
    }

    #[test]
    fn test_blank_entries() {
        assert!(Experience::default().is_blank());
        assert!(Education {
            school: " \t".to_string(),
            ..Default::default()
        }
        .is_blank());
        assert!(!Project {
            year: "2021".to_string(),
            ..Default::default()
        }
        .is_blank());
    }

    #[test]
    fn test_has_contact_ignores_whitespace() {
        let info = PersonalInfo {
            phone: "   ".to_string(),
            ..Default::default()
        };
        assert!(!info.has_contact());
    }

    #[test]
    fn test_title_is_optional() {
        let data: ResumeData = serde_json::from_value(serde_json::json!({
            "personalInfo": { "name": "Ada", "title": "Analyst" }
        }))
        .unwrap();
        assert_eq!(data.personal_info.title, "Analyst");

        let data: ResumeData =
            serde_json::from_value(serde_json::json!({ "personalInfo": { "name": "Ada" } })).unwrap();
        assert!(data.personal_info.title.is_empty());
    }
}
