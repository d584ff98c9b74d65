use serde::{Deserialize, Serialize};

/// Search parameters for one scrape run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchParams {
    /// Free-text query passed to the job search
    pub keywords: String,
    /// Run Chrome without a visible window
    pub headless: bool,
}

impl Default for SearchParams {
    fn default() -> Self {
        Self {
            keywords: "Ingeniero de datos".to_string(),
            headless: true,
        }
    }
}
