use serde::{Deserialize, Serialize};

/// One job posting scraped from the search results.
///
/// Every field is a plain string and absence is the empty string; the
/// serialized names are the column labels the output file has always used.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct JobPosting {
    /// LinkedIn entity URN, e.g. `urn:li:jobPosting:3712345678`.
    #[serde(rename = "ID")]
    pub id: String,
    /// Raw `datetime` attribute of the card's `<time>` element.
    #[serde(rename = "Date")]
    pub posted: String,
    #[serde(rename = "Company")]
    pub company: String,
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Location")]
    pub location: String,
    /// Detail-pane description with line breaks collapsed to spaces.
    #[serde(rename = "Description")]
    pub description: String,
    #[serde(rename = "Level")]
    pub seniority: String,
    #[serde(rename = "Type")]
    pub employment_type: String,
    #[serde(rename = "Industry")]
    pub industries: String,
    /// Link to the posting's own page.
    #[serde(rename = "Link")]
    pub link: String,
}

/// Replaces each embedded line break with a space so the description fits on
/// one row of the output file. Idempotent.
pub fn collapse_line_breaks(text: &str) -> String {
    text.replace(['\n', '\r'], " ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapse_replaces_each_break_character_with_a_space() {
        assert_eq!(collapse_line_breaks("line1\nline2"), "line1 line2");
        assert_eq!(collapse_line_breaks("a\r\nb"), "a  b");
        assert_eq!(collapse_line_breaks("no breaks"), "no breaks");
    }

    #[test]
    fn collapse_is_idempotent() {
        let once = collapse_line_breaks("rust\nengineer\r\nwanted");
        assert_eq!(collapse_line_breaks(&once), once);
    }

    #[test]
    fn records_serialize_under_the_original_column_labels() {
        let job = JobPosting {
            id: "urn:li:jobPosting:1".to_string(),
            title: "Data Engineer".to_string(),
            ..JobPosting::default()
        };

        let value = serde_json::to_value(&job).unwrap();
        let object = value.as_object().unwrap();
        let labels: Vec<&str> = object.keys().map(String::as_str).collect();

        for label in [
            "ID",
            "Date",
            "Company",
            "Title",
            "Location",
            "Description",
            "Level",
            "Type",
            "Industry",
            "Link",
        ] {
            assert!(labels.contains(&label), "missing column label {label}");
        }
        assert_eq!(object["ID"], "urn:li:jobPosting:1");
        assert_eq!(object["Company"], "");
    }
}
