//! Typed resume document model and the content/info key split.
//!
//! The persisted form of a profile is two JSON files: `resume_data.json`
//! holds the content keys (`work`, `skills`, `professional_summary`) and
//! `info.json` holds the info keys (`basics`, `education`). The two key sets
//! are disjoint and together cover every field the renderer consumes.
//! `split`/`merge` below are the only code that knows the split — save,
//! restore, and both read paths all go through them.

use serde::{Deserialize, Serialize};

/// The canonical document shape consumed by the renderer.
/// Every section is optional; an absent section suppresses its rendered
/// output entirely. Unknown keys from clients are dropped.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResumeDocument {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub basics: Option<Basics>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub professional_summary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skills: Option<Vec<Skill>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub work: Option<Vec<WorkEntry>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub education: Option<Vec<EducationEntry>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Basics {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Location {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keywords: Option<Keywords>,
}

/// Skill keywords are either a list of strings or a single scalar string.
/// Any other JSON type fails deserialization, which fails the whole request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Keywords {
    List(Vec<String>),
    Scalar(String),
}

impl Keywords {
    /// The rendered form: list entries joined with `", "`, scalars as-is.
    pub fn joined(&self) -> String {
        match self {
            Keywords::List(items) => items.join(", "),
            Keywords::Scalar(s) => s.clone(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WorkEntry {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(rename = "startDate", skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(rename = "endDate", skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub highlights: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EducationEntry {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub institution: Option<String>,
    #[serde(rename = "studyType", skip_serializing_if = "Option::is_none")]
    pub study_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub area: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(rename = "startDate", skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(rename = "endDate", skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gpa: Option<String>,
}

/// The content half of a document: what tailoring rewrites.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContentSection {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub professional_summary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skills: Option<Vec<Skill>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub work: Option<Vec<WorkEntry>>,
}

/// The personal-info half: identity and education.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InfoSection {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub basics: Option<Basics>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub education: Option<Vec<EducationEntry>>,
}

impl InfoSection {
    pub fn is_empty(&self) -> bool {
        self.basics.is_none() && self.education.is_none()
    }
}

impl ResumeDocument {
    /// Splits a document into its persisted halves. Together with [`merge`],
    /// this is the single definition of the content/info key split.
    ///
    /// [`merge`]: ResumeDocument::merge
    pub fn split(self) -> (ContentSection, InfoSection) {
        (
            ContentSection {
                professional_summary: self.professional_summary,
                skills: self.skills,
                work: self.work,
            },
            InfoSection {
                basics: self.basics,
                education: self.education,
            },
        )
    }

    /// Reconstructs a document from its persisted halves (shallow merge).
    pub fn merge(content: ContentSection, info: InfoSection) -> Self {
        ResumeDocument {
            basics: info.basics,
            professional_summary: content.professional_summary,
            skills: content.skills,
            work: content.work,
            education: info.education,
        }
    }

    /// Overlays the profile's stored personal info onto this document.
    /// Info keys override the document's own values only when present in the
    /// info file, matching the legacy shallow-merge of the two JSON objects.
    pub fn overlay_info(&mut self, info: InfoSection) {
        if info.basics.is_some() {
            self.basics = info.basics;
        }
        if info.education.is_some() {
            self.education = info.education;
        }
    }
}
