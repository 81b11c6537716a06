//! URL-based page classification

use super::types::PageType;
use url::Url;

/// One classification rule: every `all` term and at least one `any` term
/// (when `any` is non-empty) must occur in the lower-cased URL.
struct Rule {
    page_type: PageType,
    all: &'static [&'static str],
    any: &'static [&'static str],
}

/// Ordered rules; the first match wins, so more specific rules come first.
const RULES: &[Rule] = &[
    Rule {
        page_type: PageType::StudyPlan,
        all: &["/curso/", "/plano-de-estudos"],
        any: &[],
    },
    Rule {
        page_type: PageType::Course,
        all: &["/curso/"],
        any: &[],
    },
    Rule {
        page_type: PageType::News,
        all: &[],
        any: &["/noticias/", "/news/"],
    },
    Rule {
        page_type: PageType::Admissions,
        all: &[],
        any: &["/candidatos/", "propinas", "calendario"],
    },
    Rule {
        page_type: PageType::Service,
        all: &[],
        any: &["/servicos/", "/comunidade/"],
    },
    Rule {
        page_type: PageType::Institutional,
        all: &[],
        any: &["/o-isel", "/about"],
    },
];

impl Rule {
    fn matches(&self, url: &str) -> bool {
        self.all.iter().all(|term| url.contains(term))
            && (self.any.is_empty() || self.any.iter().any(|term| url.contains(term)))
    }
}

/// Assigns a semantic page type from the URL alone
///
/// # Examples
///
/// ```
/// use sitegraph::{classify_page, PageType};
///
/// assert_eq!(classify_page("https://example.org/curso/leic/plano-de-estudos"), PageType::StudyPlan);
/// assert_eq!(classify_page("https://example.org/curso/leic"), PageType::Course);
/// assert_eq!(classify_page("https://example.org/contactos"), PageType::Other);
/// ```
pub fn classify_page(url: &str) -> PageType {
    let lowered = url.to_lowercase();

    RULES
        .iter()
        .find(|rule| rule.matches(&lowered))
        .map(|rule| rule.page_type)
        .unwrap_or(PageType::Other)
}

/// Detects a course code in the URL path
///
/// Returns the first path segment that is purely alphabetic and at most six
/// characters long, upper-cased; empty if there is none.
pub fn course_code(url: &str) -> String {
    let Ok(parsed) = Url::parse(url) else {
        return String::new();
    };

    parsed
        .path()
        .trim_matches('/')
        .split('/')
        .find(|segment| {
            !segment.is_empty()
                && segment.chars().count() <= 6
                && segment.chars().all(char::is_alphabetic)
        })
        .map(|segment| segment.to_uppercase())
        .unwrap_or_default()
}
