//! Class-anchored lookups for the LinkedIn guest job-search page.
//!
//! Every field is located through a short list of candidate CSS selectors
//! (current guest markup first, older variants after it) and the first match
//! wins. Lookups return `Option<String>` so a missing node is an absent
//! value, never a run-ending error.

use scraper::{ElementRef, Selector};

/// Results list on the search page; presence means the page has rendered.
pub const RESULTS_LIST: &str = "ul.jobs-search__results-list";
/// One rendered job card. Valid for both `scraper` and `querySelectorAll`.
pub const RESULT_CARDS: &str = ".jobs-search__results-list > li";
/// "Show more" control under the list.
pub const SHOW_MORE_BUTTON: &str = "button.infinite-scroller__show-more-button";
/// Total-result counter in the page header.
pub const JOB_COUNT: &[&str] = &[
    "h1 > span.results-context-header__job-count",
    ".results-context-header__job-count",
];

/// Card element carrying the posting URN.
pub const CARD_URN: &[&str] = &["div[data-entity-urn]"];
pub const CARD_TITLE: &[&str] = &["h3.base-search-card__title", "h3.result-card__title"];
pub const CARD_COMPANY: &[&str] = &["h4.base-search-card__subtitle", "h4.result-card__subtitle"];
pub const CARD_LOCATION: &[&str] = &[".job-search-card__location", ".job-result-card__location"];
pub const CARD_POSTED: &[&str] = &["time[datetime]"];
/// Bare `a` last: any card's first anchor points at the posting.
pub const CARD_LINK: &[&str] = &["a.base-card__full-link", "a"];

/// Detail-pane title, used to notice the pane switching postings.
/// A selector list, usable as-is in `querySelector`.
pub const PANE_TITLE: &str = ".topcard__title, h1.top-card-layout__title";
pub const PANE_DESCRIPTION: &[&str] = &[".show-more-less-html__markup", ".description__text"];
pub const PANE_CRITERIA_ITEMS: &[&str] = &[
    ".description__job-criteria-list > li",
    "ul.job-criteria__list > li",
];
pub const PANE_CRITERIA_VALUE: &[&str] = &[".description__job-criteria-text", ".job-criteria__text"];

/// Positions of the secondary fields inside the job-criteria list. The third
/// entry (job function) is skipped on purpose.
pub const CRITERIA_SENIORITY: usize = 0;
pub const CRITERIA_EMPLOYMENT_TYPE: usize = 1;
pub const CRITERIA_INDUSTRIES: usize = 3;

/// Trimmed text of the first element any candidate selector matches.
pub fn first_text(scope: ElementRef<'_>, candidates: &[&str]) -> Option<String> {
    for css in candidates {
        if let Ok(selector) = Selector::parse(css) {
            if let Some(element) = scope.select(&selector).next() {
                return Some(element.text().collect::<String>().trim().to_string());
            }
        }
    }
    None
}

/// Attribute of the first matched element that actually carries it.
pub fn first_attr(scope: ElementRef<'_>, candidates: &[&str], attr: &str) -> Option<String> {
    for css in candidates {
        if let Ok(selector) = Selector::parse(css) {
            for element in scope.select(&selector) {
                if let Some(value) = element.value().attr(attr) {
                    return Some(value.to_string());
                }
            }
        }
    }
    None
}

/// Value text of the criteria-list entry at `position`, if the pane has one.
pub fn criteria_value(scope: ElementRef<'_>, position: usize) -> Option<String> {
    for css in PANE_CRITERIA_ITEMS {
        if let Ok(selector) = Selector::parse(css) {
            if let Some(item) = scope.select(&selector).nth(position) {
                return first_text(item, PANE_CRITERIA_VALUE);
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::Html;

    const PANE: &str = r#"
        <div class="details-pane">
          <h2 class="topcard__title">Data Engineer</h2>
          <div class="show-more-less-html__markup">Build pipelines.</div>
          <ul class="description__job-criteria-list">
            <li><h3>Seniority level</h3>
              <span class="description__job-criteria-text">Mid-Senior level</span></li>
            <li><h3>Employment type</h3>
              <span class="description__job-criteria-text">Full-time</span></li>
            <li><h3>Job function</h3>
              <span class="description__job-criteria-text">Engineering</span></li>
            <li><h3>Industries</h3>
              <span class="description__job-criteria-text">IT Services</span></li>
          </ul>
        </div>
    "#;

    #[test]
    fn first_text_takes_the_first_matching_candidate() {
        let doc = Html::parse_fragment(PANE);
        let text = first_text(doc.root_element(), PANE_DESCRIPTION);
        assert_eq!(text.as_deref(), Some("Build pipelines."));
    }

    #[test]
    fn first_text_is_none_when_nothing_matches() {
        let doc = Html::parse_fragment("<div><p>unrelated</p></div>");
        assert_eq!(first_text(doc.root_element(), PANE_DESCRIPTION), None);
    }

    #[test]
    fn first_attr_skips_elements_without_the_attribute() {
        let doc = Html::parse_fragment(
            r#"<li><a class="base-card__full-link">no href</a><a href="https://x">x</a></li>"#,
        );
        // The full-link anchor matches first but has no href; the bare
        // anchor candidate still resolves one.
        let href = first_attr(doc.root_element(), CARD_LINK, "href");
        assert_eq!(href.as_deref(), Some("https://x"));
    }

    #[test]
    fn criteria_entries_resolve_by_position_within_the_list() {
        let doc = Html::parse_fragment(PANE);
        let root = doc.root_element();
        assert_eq!(
            criteria_value(root, CRITERIA_SENIORITY).as_deref(),
            Some("Mid-Senior level")
        );
        assert_eq!(
            criteria_value(root, CRITERIA_EMPLOYMENT_TYPE).as_deref(),
            Some("Full-time")
        );
        assert_eq!(
            criteria_value(root, CRITERIA_INDUSTRIES).as_deref(),
            Some("IT Services")
        );
    }

    #[test]
    fn criteria_positions_past_the_list_end_are_absent() {
        let short = r#"
            <ul class="description__job-criteria-list">
              <li><span class="description__job-criteria-text">Entry level</span></li>
              <li><span class="description__job-criteria-text">Contract</span></li>
            </ul>
        "#;
        let doc = Html::parse_fragment(short);
        let root = doc.root_element();
        assert_eq!(
            criteria_value(root, CRITERIA_EMPLOYMENT_TYPE).as_deref(),
            Some("Contract")
        );
        assert_eq!(criteria_value(root, CRITERIA_INDUSTRIES), None);
    }

    #[test]
    fn older_guest_markup_still_resolves() {
        let legacy = r#"
            <li>
              <h3 class="result-card__title">Backend Developer</h3>
              <h4 class="result-card__subtitle">Acme</h4>
            </li>
        "#;
        let doc = Html::parse_fragment(legacy);
        let root = doc.root_element();
        assert_eq!(
            first_text(root, CARD_TITLE).as_deref(),
            Some("Backend Developer")
        );
        assert_eq!(first_text(root, CARD_COMPANY).as_deref(), Some("Acme"));
    }
}
