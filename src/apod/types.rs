use serde::{Deserialize, Serialize};

use crate::error::ApodError;

/// One entry as returned by the APOD API.
///
/// Has no `id`: a payload only becomes saveable once it is turned into an
/// [`ImageRecord`].
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ApodPayload {
    pub title: String,
    pub date: String,
    pub url: String,
    #[serde(default)]
    pub hdurl: Option<String>,
    pub explanation: String,
    #[serde(default)]
    pub media_type: Option<String>,
    #[serde(default)]
    pub copyright: Option<String>,
}

/// A picture in the history list or the preview pane.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageRecord {
    pub id: u64,
    pub title: String,
    pub date: String,
    pub url: String,
    #[serde(rename = "hdurl", default)]
    pub hd_url: String,
    pub explanation: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub media_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub copyright: Option<String>,
}

impl ImageRecord {
    /// Assign `id` to a fetched payload.
    ///
    /// Blank required fields are rejected. Entries without `hdurl` (videos)
    /// link to `url` instead.
    pub fn from_payload(payload: ApodPayload, id: u64) -> Result<Self, ApodError> {
        if payload.title.trim().is_empty() {
            return Err(ApodError::Incomplete("title"));
        }
        if payload.date.trim().is_empty() {
            return Err(ApodError::Incomplete("date"));
        }
        if payload.url.trim().is_empty() {
            return Err(ApodError::Incomplete("url"));
        }

        let hd_url = payload
            .hdurl
            .filter(|u| !u.trim().is_empty())
            .unwrap_or_else(|| payload.url.clone());

        Ok(Self {
            id,
            title: payload.title,
            date: payload.date,
            url: payload.url,
            hd_url,
            explanation: payload.explanation,
            media_type: payload.media_type,
            copyright: payload.copyright.map(|c| c.trim().to_string()),
        })
    }

    /// Stored video entries may lack `hdurl`; link them to `url`.
    pub fn fill_missing_hd_url(&mut self) {
        if self.hd_url.trim().is_empty() {
            self.hd_url = self.url.clone();
        }
    }

    pub fn is_video(&self) -> bool {
        self.media_type.as_deref() == Some("video")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload() -> ApodPayload {
        ApodPayload {
            title: "Nebula".to_string(),
            date: "2024-01-01".to_string(),
            url: "a.jpg".to_string(),
            hdurl: Some("a_hd.jpg".to_string()),
            explanation: "...".to_string(),
            media_type: Some("image".to_string()),
            copyright: None,
        }
    }

    #[test]
    fn test_from_payload_assigns_id() {
        let record = ImageRecord::from_payload(payload(), 1).unwrap();
        assert_eq!(record.id, 1);
        assert_eq!(record.title, "Nebula");
        assert_eq!(record.hd_url, "a_hd.jpg");
        assert!(!record.is_video());
    }

    #[test]
    fn test_missing_hdurl_falls_back_to_url() {
        let mut p = payload();
        p.hdurl = None;
        p.media_type = Some("video".to_string());
        let record = ImageRecord::from_payload(p, 7).unwrap();
        assert_eq!(record.hd_url, "a.jpg");
        assert!(record.is_video());
    }

    #[test]
    fn test_stored_video_without_hdurl_decodes() {
        let json = r#"{"id":5,"title":"Launch","date":"2024-02-01","url":"https://youtube.test/embed/x",
            "explanation":"...","media_type":"video"}"#;
        let mut record: ImageRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.hd_url, "");
        record.fill_missing_hd_url();
        assert_eq!(record.hd_url, "https://youtube.test/embed/x");
    }

    #[test]
    fn test_blank_title_rejected() {
        let mut p = payload();
        p.title = "  ".to_string();
        assert_eq!(
            ImageRecord::from_payload(p, 1),
            Err(ApodError::Incomplete("title"))
        );
    }

    #[test]
    fn test_payload_decodes_api_json() {
        let json = r#"[{
            "copyright": "\nJane Doe\n",
            "date": "2024-01-01",
            "explanation": "A nebula.",
            "hdurl": "https://apod.nasa.gov/apod/image/2401/a_hd.jpg",
            "media_type": "image",
            "service_version": "v1",
            "title": "Nebula",
            "url": "https://apod.nasa.gov/apod/image/2401/a.jpg"
        }]"#;
        let mut entries: Vec<ApodPayload> = serde_json::from_str(json).unwrap();
        let record = ImageRecord::from_payload(entries.remove(0), 42).unwrap();
        assert_eq!(record.copyright.as_deref(), Some("Jane Doe"));
        assert_eq!(record.date, "2024-01-01");
    }

    #[test]
    fn test_record_serializes_with_api_field_names() {
        let record = ImageRecord::from_payload(payload(), 3).unwrap();
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["hdurl"], "a_hd.jpg");
        assert_eq!(value["id"], 3);
        assert!(value.get("copyright").is_none());
    }
}
