use chrono::NaiveDate;
use log::error;
use serde::Deserialize;

const ANNOUNCEMENTS_JSON: &str = include_str!("../../assets/announcements.json");

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Announcement {
    pub title: String,
    pub date: NaiveDate,
    pub body: String,
}

impl Announcement {
    pub fn date_label(&self) -> String {
        self.date.format("%B %-d, %Y").to_string()
    }
}

pub fn parse(json: &str) -> Result<Vec<Announcement>, serde_json::Error> {
    serde_json::from_str(json)
}

/// Bundled announcements. Broken data leaves the slideshow empty rather than
/// taking the page down.
pub fn load() -> Vec<Announcement> {
    match parse(ANNOUNCEMENTS_JSON) {
        Ok(announcements) => announcements,
        Err(e) => {
            error!("Failed to parse announcements: {}", e);
            Vec::new()
        }
    }
}
