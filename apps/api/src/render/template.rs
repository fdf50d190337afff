//! Typst source composition for resume documents.
//!
//! Pure and deterministic: the same document always yields the same source.
//! Sections render in fixed order (header, Professional Summary, Skills,
//! Experience, Education); a section that is absent or empty emits nothing at
//! all — no heading, no rule, no spacer. Missing leaf fields render as empty
//! strings, except `basics.name`, without which the header cannot render.

use std::fmt::Write;

use crate::models::resume::{EducationEntry, ResumeDocument, Skill, WorkEntry};
use crate::render::theme;
use crate::render::RenderError;

/// Escape special characters for Typst string literals.
pub fn escape_typst(value: &str) -> String {
    value
        .replace('\\', r"\\")
        .replace('"', r#"\""#)
        .replace('\n', r"\n")
}

/// Composes the full Typst source for a resume document.
pub fn resume_to_typst(document: &ResumeDocument) -> Result<String, RenderError> {
    let basics = document.basics.as_ref();
    let name = basics
        .and_then(|b| b.name.as_deref())
        .filter(|n| !n.is_empty())
        .ok_or(RenderError::MissingName)?;

    let mut out = String::new();
    push_preamble(&mut out);
    push_header(&mut out, name, document);

    if let Some(summary) = document
        .professional_summary
        .as_deref()
        .filter(|s| !s.is_empty())
    {
        push_section_heading(&mut out, "Professional Summary");
        let _ = writeln!(out, "#text(\"{}\")", escape_typst(summary));
    }

    if let Some(skills) = document.skills.as_deref().filter(|s| !s.is_empty()) {
        push_section_heading(&mut out, "Skills");
        push_skills(&mut out, skills);
    }

    if let Some(work) = document.work.as_deref().filter(|w| !w.is_empty()) {
        push_section_heading(&mut out, "Experience");
        for entry in work {
            push_work_entry(&mut out, entry);
        }
    }

    if let Some(education) = document.education.as_deref().filter(|e| !e.is_empty()) {
        push_section_heading(&mut out, "Education");
        for entry in education {
            push_education_entry(&mut out, entry);
        }
    }

    Ok(out)
}

fn push_preamble(out: &mut String) {
    let _ = writeln!(
        out,
        "#set page(paper: \"{}\", margin: (left: {}in, right: {}in, top: {}in, bottom: {}in))",
        theme::PAGE_PAPER,
        theme::MARGIN_SIDE_IN,
        theme::MARGIN_SIDE_IN,
        theme::MARGIN_TOP_IN,
        theme::MARGIN_BOTTOM_IN,
    );
    let fonts = theme::BODY_FONTS
        .iter()
        .map(|f| format!("\"{f}\""))
        .collect::<Vec<_>>()
        .join(", ");
    let _ = writeln!(
        out,
        "#set text(font: ({fonts}), size: {}pt)",
        theme::BODY_SIZE_PT
    );
}

fn push_header(out: &mut String, name: &str, document: &ResumeDocument) {
    let _ = writeln!(
        out,
        "#align(center, text(size: {}pt, fill: rgb(\"{}\"), weight: \"bold\", \"{}\"))",
        theme::TITLE_SIZE_PT,
        theme::HEADING_COLOR,
        escape_typst(name),
    );

    // Contact line: address | email | phone | url, absent parts omitted.
    // When every part is absent this is an empty centered line, not nothing.
    let basics = document.basics.as_ref();
    let contact_parts: Vec<&str> = [
        basics
            .and_then(|b| b.location.as_ref())
            .and_then(|l| l.address.as_deref()),
        basics.and_then(|b| b.email.as_deref()),
        basics.and_then(|b| b.phone.as_deref()),
        basics.and_then(|b| b.url.as_deref()),
    ]
    .into_iter()
    .flatten()
    .filter(|p| !p.is_empty())
    .collect();
    let contact_line = contact_parts.join(" | ");

    let _ = writeln!(
        out,
        "#align(center, text(size: {}pt, fill: rgb(\"{}\"), \"{}\"))",
        theme::CONTACT_SIZE_PT,
        theme::CONTACT_COLOR,
        escape_typst(&contact_line),
    );
    let _ = writeln!(
        out,
        "#line(length: 100%, stroke: 0.5pt + rgb(\"{}\"))",
        theme::HAIRLINE_COLOR
    );
    let _ = writeln!(out, "#v({}pt)", theme::HEADER_GAP_PT);
}

fn push_section_heading(out: &mut String, title: &str) {
    let _ = writeln!(out, "#v({}pt)", theme::SECTION_SPACE_BEFORE_PT);
    let _ = writeln!(
        out,
        "#text(size: {}pt, fill: rgb(\"{}\"), upper(\"{title}\"))",
        theme::SECTION_SIZE_PT,
        theme::HEADING_COLOR,
    );
    let _ = writeln!(out, "#v({}pt)", theme::SECTION_SPACE_AFTER_PT);
    let _ = writeln!(
        out,
        "#line(length: 100%, stroke: 1pt + rgb(\"{}\"))",
        theme::HEADING_COLOR
    );
    let _ = writeln!(out, "#v({}pt)", theme::SECTION_RULE_GAP_PT);
}

fn push_skills(out: &mut String, skills: &[Skill]) {
    let _ = writeln!(
        out,
        "#grid(\n  columns: ({}in, {}in),\n  row-gutter: 4pt,",
        theme::SKILL_NAME_COL_IN,
        theme::SKILL_KEYWORDS_COL_IN,
    );
    for skill in skills {
        let name = skill.name.as_deref().unwrap_or("");
        let keywords = skill
            .keywords
            .as_ref()
            .map(|k| k.joined())
            .unwrap_or_default();
        let _ = writeln!(
            out,
            "  text(weight: \"bold\", \"{}:\"), text(\"{}\"),",
            escape_typst(name),
            escape_typst(&keywords),
        );
    }
    let _ = writeln!(out, ")");
}

fn push_work_entry(out: &mut String, entry: &WorkEntry) {
    let company = entry.company.as_deref().unwrap_or("");
    let location = entry.location.as_deref().unwrap_or("");
    let position = entry.position.as_deref().unwrap_or("");
    let dates = format!(
        "{} - {}",
        entry.start_date.as_deref().unwrap_or(""),
        entry.end_date.as_deref().unwrap_or(""),
    );

    let _ = writeln!(
        out,
        "#grid(\n  columns: ({}in, {}in),\n  text(weight: \"bold\", size: {}pt, \"{}\"), align(right, text(\"{}\")),\n  text(style: \"italic\", \"{}\"), align(right, text(\"{}\")),\n)",
        theme::WORK_LEFT_COL_IN,
        theme::WORK_RIGHT_COL_IN,
        theme::COMPANY_SIZE_PT,
        escape_typst(company),
        escape_typst(location),
        escape_typst(position),
        escape_typst(&dates),
    );
    let _ = writeln!(out, "#v({}pt)", theme::ENTRY_HEADER_GAP_PT);

    if let Some(highlights) = entry.highlights.as_deref() {
        for highlight in highlights.iter().filter(|h| !h.is_empty()) {
            let _ = writeln!(
                out,
                "#block(inset: (left: {}pt), text(\"• {}\"))",
                theme::BULLET_INDENT_PT,
                escape_typst(highlight),
            );
        }
    }

    let _ = writeln!(out, "#v({}pt)", theme::WORK_ENTRY_GAP_PT);
}

fn push_education_entry(out: &mut String, entry: &EducationEntry) {
    let institution = entry.institution.as_deref().unwrap_or("");
    let location = entry.location.as_deref().unwrap_or("");
    let dates = format!(
        "{} - {}",
        entry.start_date.as_deref().unwrap_or(""),
        entry.end_date.as_deref().unwrap_or(""),
    );

    let mut degree_info = format!(
        "{} {}",
        entry.study_type.as_deref().unwrap_or(""),
        entry.area.as_deref().unwrap_or(""),
    );
    if let Some(gpa) = entry.gpa.as_deref() {
        degree_info.push_str(&format!(" | GPA: {gpa}"));
    }

    let _ = writeln!(
        out,
        "#grid(\n  columns: ({}in, {}in),\n  text(weight: \"bold\", size: {}pt, \"{}\"), align(right, text(\"{}\")),\n  text(style: \"italic\", \"{}\"), align(right, text(\"{}\")),\n)",
        theme::EDU_LEFT_COL_IN,
        theme::EDU_RIGHT_COL_IN,
        theme::COMPANY_SIZE_PT,
        escape_typst(institution),
        escape_typst(&dates),
        escape_typst(&degree_info),
        escape_typst(location),
    );
    let _ = writeln!(out, "#v({}pt)", theme::EDU_ENTRY_GAP_PT);
}
