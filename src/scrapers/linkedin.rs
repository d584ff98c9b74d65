use crate::models::{collapse_line_breaks, JobPosting};
use crate::scrapers::selectors;
use crate::scrapers::types::SearchParams;
use crate::scrapers::wait::{poll_until, POLL_INTERVAL};
use anyhow::{Context, Result};
use headless_chrome::{Browser, LaunchOptions, Tab};
use scraper::{ElementRef, Html, Selector};
use std::time::Duration;
use tracing::{debug, info, warn};

const SEARCH_ENDPOINT: &str = "https://www.linkedin.com/jobs/search";
const SEARCH_LOCATION: &str = "Chile";
const SEARCH_GEO_ID: &str = "104621616";
const SEARCH_TRACKING: &str = "public_jobs_jobs-search-bar_search-submit";

/// Results the site renders per "page" of the infinite scroller.
const PAGE_SIZE: u32 = 25;

const PAGE_LOAD_TIMEOUT: Duration = Duration::from_secs(10);
/// Bound for one scroll cycle, the original per-cycle pause.
const SCROLL_CYCLE_TIMEOUT: Duration = Duration::from_secs(5);
/// Bound for the detail pane to switch postings after a card click.
const DETAIL_PANE_TIMEOUT: Duration = Duration::from_secs(3);

/// Browser-based scraper for the LinkedIn guest job search
pub struct LinkedInBrowserScraper {
    browser: Browser,
    params: SearchParams,
}

impl LinkedInBrowserScraper {
    /// Launch Chrome for one scrape pass. The process is owned by this value
    /// and goes away with it, on failure paths included.
    pub fn new(params: SearchParams) -> Result<Self> {
        info!("Launching Chrome (headless: {})...", params.headless);

        let options = LaunchOptions::default_builder()
            .headless(params.headless)
            .window_size(Some((1920, 1080)))
            .build()
            .context("Failed to build launch options")?;

        let browser = Browser::new(options).context("Failed to launch Chrome browser")?;

        Ok(Self { browser, params })
    }

    /// Run the search, scroll the list out, and return one record per
    /// rendered list item.
    pub fn scrape(&self) -> Result<Vec<JobPosting>> {
        let url = build_search_url(&self.params.keywords);

        info!("Starting a web session for {}", url);
        let tab = self.browser.new_tab()?;
        tab.navigate_to(&url)?;
        tab.wait_until_navigated()?;

        if tab
            .wait_for_element_with_custom_timeout(selectors::RESULTS_LIST, PAGE_LOAD_TIMEOUT)
            .is_err()
        {
            warn!("Results list did not appear; continuing with whatever rendered");
        }

        let total = match read_total_count(&tab) {
            Some(count) => count,
            None => {
                warn!("Could not read the total-result counter; treating it as 0");
                0
            }
        };
        info!("Total jobs found: {}", total);

        let cycles = pages_to_load(total);
        info!(
            "Considering {} items per page, we will load {} pages",
            PAGE_SIZE, cycles
        );

        for cycle in 0..cycles {
            let before = rendered_card_count(&tab);
            scroll_to_bottom(&tab);
            click_show_more(&tab);
            let grew = poll_until(SCROLL_CYCLE_TIMEOUT, POLL_INTERVAL, || {
                rendered_card_count(&tab) > before
            });
            debug!(
                "Cycle {}/{}: {} cards rendered (grew: {})",
                cycle + 1,
                cycles,
                rendered_card_count(&tab),
                grew
            );
        }

        let html = tab.get_content()?;
        let document = Html::parse_document(&html);
        let card_selector = Selector::parse(selectors::RESULT_CARDS).unwrap();
        let cards: Vec<_> = document.select(&card_selector).collect();
        info!("Amount of jobs listed: {}", cards.len());

        let mut jobs = Vec::with_capacity(cards.len());
        for (index, card) in cards.iter().enumerate() {
            let mut job = summarize_card(*card);
            debug!(
                "({}/{}) {} at {}",
                index + 1,
                cards.len(),
                job.title,
                job.company
            );

            let shown = pane_title(&tab);
            click_card(&tab, index);
            poll_until(DETAIL_PANE_TIMEOUT, POLL_INTERVAL, || {
                pane_title(&tab) != shown
            });

            match tab.get_content() {
                Ok(pane_html) => fill_details(&mut job, &Html::parse_document(&pane_html)),
                Err(e) => warn!("Could not read the page after clicking item {}: {}", index, e),
            }

            jobs.push(job);
        }

        info!("Collected {} postings", jobs.len());
        Ok(jobs)
    }
}

/// Builds the guest search URL with the query percent-encoded and the fixed
/// region filter appended.
pub fn build_search_url(keywords: &str) -> String {
    format!(
        "{}?keywords={}&location={}&geoId={}&trk={}&position=1&pageNum=0",
        SEARCH_ENDPOINT,
        urlencoding::encode(keywords),
        SEARCH_LOCATION,
        SEARCH_GEO_ID,
        SEARCH_TRACKING,
    )
}

/// Scroll cycles to attempt: one per 25 announced results, rounded up, and
/// at least one even when the counter reads zero.
pub fn pages_to_load(total_count: u32) -> u32 {
    total_count.div_ceil(PAGE_SIZE).max(1)
}

/// Keeps the ASCII digits of the counter text, so "1,024" and "10,000+"
/// both parse. Digit-free text is a miss.
pub fn parse_total_count(text: &str) -> Option<u32> {
    let digits: String = text.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        None
    } else {
        digits.parse().ok()
    }
}

/// Summary fields read straight off a rendered card. A missing node leaves
/// its field empty; the record still counts toward the collection.
fn summarize_card(card: ElementRef<'_>) -> JobPosting {
    JobPosting {
        id: selectors::first_attr(card, selectors::CARD_URN, "data-entity-urn").unwrap_or_default(),
        posted: selectors::first_attr(card, selectors::CARD_POSTED, "datetime").unwrap_or_default(),
        company: selectors::first_text(card, selectors::CARD_COMPANY).unwrap_or_default(),
        title: selectors::first_text(card, selectors::CARD_TITLE).unwrap_or_default(),
        location: selectors::first_text(card, selectors::CARD_LOCATION).unwrap_or_default(),
        link: selectors::first_attr(card, selectors::CARD_LINK, "href").unwrap_or_default(),
        ..JobPosting::default()
    }
}

/// Secondary fields read from the detail pane, each independently allowed
/// to be absent.
fn fill_details(job: &mut JobPosting, pane: &Html) {
    let root = pane.root_element();
    job.description = selectors::first_text(root, selectors::PANE_DESCRIPTION)
        .map(|text| collapse_line_breaks(&text))
        .unwrap_or_default();
    job.seniority =
        selectors::criteria_value(root, selectors::CRITERIA_SENIORITY).unwrap_or_default();
    job.employment_type =
        selectors::criteria_value(root, selectors::CRITERIA_EMPLOYMENT_TYPE).unwrap_or_default();
    job.industries =
        selectors::criteria_value(root, selectors::CRITERIA_INDUSTRIES).unwrap_or_default();
}

fn read_total_count(tab: &Tab) -> Option<u32> {
    let html = tab.get_content().ok()?;
    let document = Html::parse_document(&html);
    let text = selectors::first_text(document.root_element(), selectors::JOB_COUNT)?;
    parse_total_count(&text)
}

fn rendered_card_count(tab: &Tab) -> usize {
    let js = format!(
        "document.querySelectorAll('{}').length",
        selectors::RESULT_CARDS
    );
    tab.evaluate(&js, false)
        .ok()
        .and_then(|result| result.value)
        .and_then(|value| value.as_u64())
        .unwrap_or(0) as usize
}

fn scroll_to_bottom(tab: &Tab) {
    let _ = tab.evaluate("window.scrollTo(0, document.body.scrollHeight);", false);
}

/// Null-guarded so a missing button is a no-op, not a script error.
fn click_show_more(tab: &Tab) {
    let js = format!(
        "var showMore = document.querySelector('{}'); if (showMore) showMore.click();",
        selectors::SHOW_MORE_BUTTON
    );
    let _ = tab.evaluate(&js, false);
}

fn click_card(tab: &Tab, index: usize) {
    let js = format!(
        "var cards = document.querySelectorAll('{list}'); \
         var link = cards[{index}] && cards[{index}].querySelector('a'); \
         if (link) link.click();",
        list = selectors::RESULT_CARDS,
        index = index
    );
    if let Err(e) = tab.evaluate(&js, false) {
        warn!("Got an error while clicking on item {}: {}", index, e);
    }
}

/// Current pane title, used to notice the pane switching to the clicked
/// posting. Empty when the pane is not rendered at all.
fn pane_title(tab: &Tab) -> String {
    let js = format!(
        "(document.querySelector('{}') || {{}}).innerText || ''",
        selectors::PANE_TITLE
    );
    tab.evaluate(&js, false)
        .ok()
        .and_then(|result| result.value)
        .and_then(|value| value.as_str().map(str::to_string))
        .unwrap_or_default()
}
