//! Fixed visual theme for rendered resumes.
//!
//! One theme, no configuration: page geometry, type scale, colors, and
//! column widths. Values mirror the legacy layout so regenerated documents
//! match existing ones.

pub const PAGE_PAPER: &str = "us-letter";
pub const MARGIN_SIDE_IN: f64 = 0.75;
pub const MARGIN_TOP_IN: f64 = 0.5;
pub const MARGIN_BOTTOM_IN: f64 = 0.5;

/// Body font stack; later entries are fallbacks for hosts without Work Sans.
pub const BODY_FONTS: [&str; 3] = ["Work Sans", "Liberation Sans", "DejaVu Sans"];

pub const TITLE_SIZE_PT: f64 = 24.0;
pub const CONTACT_SIZE_PT: f64 = 10.0;
pub const SECTION_SIZE_PT: f64 = 14.0;
pub const BODY_SIZE_PT: f64 = 11.0;
pub const COMPANY_SIZE_PT: f64 = 12.0;

pub const HEADING_COLOR: &str = "#2C3E50";
pub const CONTACT_COLOR: &str = "#555555";
pub const HAIRLINE_COLOR: &str = "#D3D3D3";

// Two-column widths (inches). Left + right = 7.0, the printable width.
pub const SKILL_NAME_COL_IN: f64 = 1.8;
pub const SKILL_KEYWORDS_COL_IN: f64 = 5.2;
pub const WORK_LEFT_COL_IN: f64 = 5.0;
pub const WORK_RIGHT_COL_IN: f64 = 2.0;
pub const EDU_LEFT_COL_IN: f64 = 5.5;
pub const EDU_RIGHT_COL_IN: f64 = 1.5;

// Vertical rhythm (points).
pub const HEADER_GAP_PT: f64 = 10.0;
pub const SECTION_SPACE_BEFORE_PT: f64 = 20.0;
pub const SECTION_SPACE_AFTER_PT: f64 = 5.0;
pub const SECTION_RULE_GAP_PT: f64 = 8.0;
pub const ENTRY_HEADER_GAP_PT: f64 = 4.0;
pub const WORK_ENTRY_GAP_PT: f64 = 12.0;
pub const EDU_ENTRY_GAP_PT: f64 = 6.0;
pub const BULLET_INDENT_PT: f64 = 15.0;
