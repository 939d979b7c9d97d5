//! Display models for the history list and the preview card.
//!
//! Both are pure functions of their input so the views can rebuild the whole
//! list on every change.

use crate::apod::ImageRecord;
use crate::session::SessionAction;

/// One `<li>` of the history list.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryRow {
    pub id: u64,
    pub title: String,
    pub date: String,
    pub thumbnail_src: String,
    pub thumbnail_alt: String,
    pub link_href: String,
    pub is_video: bool,
    pub delete: SessionAction,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PreviewCard {
    pub id: u64,
    pub title: String,
    pub date: String,
    pub image_src: String,
    pub link_href: String,
    pub explanation: String,
    pub credit: Option<String>,
    pub is_video: bool,
}

pub fn history_row(record: &ImageRecord) -> HistoryRow {
    HistoryRow {
        id: record.id,
        title: record.title.clone(),
        date: record.date.clone(),
        thumbnail_src: record.url.clone(),
        thumbnail_alt: record.title.clone(),
        link_href: record.hd_url.clone(),
        is_video: record.is_video(),
        delete: SessionAction::Remove { id: record.id },
    }
}

pub fn history_rows(list: &[ImageRecord]) -> Vec<HistoryRow> {
    list.iter().map(history_row).collect()
}

pub fn preview_card(record: &ImageRecord) -> PreviewCard {
    PreviewCard {
        id: record.id,
        title: record.title.clone(),
        date: record.date.clone(),
        image_src: record.url.clone(),
        link_href: record.hd_url.clone(),
        explanation: record.explanation.clone(),
        credit: record
            .copyright
            .as_ref()
            .filter(|c| !c.is_empty())
            .map(|c| format!("\u{00a9} {}", c)),
        is_video: record.is_video(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: u64, title: &str) -> ImageRecord {
        ImageRecord {
            id,
            title: title.to_string(),
            date: "2024-01-01".to_string(),
            url: "a.jpg".to_string(),
            hd_url: "a_hd.jpg".to_string(),
            explanation: "Gas and dust.".to_string(),
            media_type: None,
            copyright: Some("Jane Doe".to_string()),
        }
    }

    #[test]
    fn test_history_rows_follow_list_order() {
        let list = vec![record(2, "b"), record(1, "a")];
        let rows = history_rows(&list);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].id, 2);
        assert_eq!(rows[1].title, "a");
    }

    #[test]
    fn test_history_row_links_hd_and_shows_standard() {
        let row = history_row(&record(1, "Nebula"));
        assert_eq!(row.thumbnail_src, "a.jpg");
        assert_eq!(row.link_href, "a_hd.jpg");
        assert_eq!(row.delete, SessionAction::Remove { id: 1 });
    }

    #[test]
    fn test_history_rows_idempotent() {
        let list = vec![record(3, "c"), record(2, "b"), record(1, "a")];
        assert_eq!(history_rows(&list), history_rows(&list));
        assert!(history_rows(&[]).is_empty());
    }

    #[test]
    fn test_preview_card() {
        let card = preview_card(&record(1, "Nebula"));
        assert_eq!(card.title, "Nebula");
        assert_eq!(card.explanation, "Gas and dust.");
        assert_eq!(card.credit.as_deref(), Some("\u{00a9} Jane Doe"));
        assert!(!card.is_video);
        assert_eq!(card, preview_card(&record(1, "Nebula")));
    }
}
