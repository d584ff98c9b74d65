pub mod linkedin;
pub mod selectors;
pub mod types;
pub mod wait;

pub use linkedin::LinkedInBrowserScraper;
pub use types::SearchParams;
