//! Content record types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Semantic page type derived from the URL shape
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PageType {
    /// Study plan of a specific course
    StudyPlan,
    /// Course page
    Course,
    /// News item or news listing
    News,
    /// Admissions, tuition fees, academic calendar
    Admissions,
    /// Services and community pages
    Service,
    /// About the institution
    Institutional,
    /// Anything else
    Other,
}

impl PageType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::StudyPlan => "study_plan",
            Self::Course => "course",
            Self::News => "news",
            Self::Admissions => "admissions",
            Self::Service => "service",
            Self::Institutional => "institutional",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for PageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Structured content extracted from one HTML page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageContent {
    /// Final (post-redirect) URL of the page
    pub url: String,

    /// Host and explicit port of the page
    pub domain: String,

    #[serde(rename = "type")]
    pub page_type: PageType,

    /// Short alphabetic path segment identifying a course, upper-cased
    pub course_code: String,

    pub crawled_at: DateTime<Utc>,

    pub title: String,
    pub meta_description: String,
    pub h1: String,

    /// At most the first ten H2 headings of the main content
    pub h2: Vec<String>,

    /// Lower-cased `lang` attribute of the root element
    pub lang: String,

    /// Cleaned main-content text, capped in length
    pub text: String,
}

/// Content extraction outcome for one page
///
/// Serialized with a `status` tag so consumers can tell the two apart:
/// `{"status": "ok", "url": ..., "text": ...}` or
/// `{"status": "error", "url": ..., "error_msg": ...}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum PageRecord {
    Ok(PageContent),
    Error { url: String, error_msg: String },
}

impl PageRecord {
    /// Builds an error-flagged record
    pub fn failed(url: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Error {
            url: url.into(),
            error_msg: message.into(),
        }
    }

    pub fn url(&self) -> &str {
        match self {
            Self::Ok(content) => &content.url,
            Self::Error { url, .. } => url,
        }
    }

    pub fn is_ok(&self) -> bool {
        matches!(self, Self::Ok(_))
    }

    pub fn content(&self) -> Option<&PageContent> {
        match self {
            Self::Ok(content) => Some(content),
            Self::Error { .. } => None,
        }
    }
}
