//! Backend records and request payloads
//!
//! Mirrors the JSON exchanged with the station backend. Record ids are UUID
//! strings, sometimes keyed `_id`. Timestamps come without an offset and are
//! taken as UTC.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Station call sign used when the backend omits it
pub const DEFAULT_CALLSIGN: &str = "4K6AG";

fn default_callsign() -> String {
    DEFAULT_CALLSIGN.to_string()
}

fn default_true() -> bool {
    true
}

/// Lenient timestamp (de)serialization
///
/// Accepts RFC 3339, naive `YYYY-MM-DDTHH:MM:SS[.f]` (UTC) and plain dates.
pub mod timestamp {
    use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn parse(value: &str) -> Option<DateTime<Utc>> {
        if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
            return Some(dt.with_timezone(&Utc));
        }
        if let Ok(naive) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f") {
            return Some(naive.and_utc());
        }
        NaiveDate::parse_from_str(value, "%Y-%m-%d")
            .ok()
            .and_then(|date| date.and_hms_opt(0, 0, 0))
            .map(|naive| naive.and_utc())
    }

    pub fn serialize<S: Serializer>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&value.to_rfc3339())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DateTime<Utc>, D::Error> {
        let raw = String::deserialize(deserializer)?;
        parse(&raw).ok_or_else(|| serde::de::Error::custom(format!("invalid timestamp: {}", raw)))
    }

    /// Same format for optional fields; `null` and absent both map to `None`
    pub mod option {
        use chrono::{DateTime, Utc};
        use serde::{Deserialize, Deserializer, Serializer};

        pub fn serialize<S: Serializer>(
            value: &Option<DateTime<Utc>>,
            serializer: S,
        ) -> Result<S::Ok, S::Error> {
            match value {
                Some(value) => super::serialize(value, serializer),
                None => serializer.serialize_none(),
            }
        }

        pub fn deserialize<'de, D: Deserializer<'de>>(
            deserializer: D,
        ) -> Result<Option<DateTime<Utc>>, D::Error> {
            match Option::<String>::deserialize(deserializer)? {
                Some(raw) => super::parse(&raw).map(Some).ok_or_else(|| {
                    serde::de::Error::custom(format!("invalid timestamp: {}", raw))
                }),
                None => Ok(None),
            }
        }
    }
}

// =============================================================================
// Station
// =============================================================================

/// On-air status of the station
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StationStatus {
    #[default]
    Online,
    Offline,
}

/// Station information
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StationInfo {
    #[serde(alias = "_id")]
    pub id: Uuid,

    #[serde(default = "default_callsign")]
    pub callsign: String,

    pub operator: String,

    pub location: String,

    /// Maidenhead grid locator
    pub grid: String,

    /// License class
    pub license: String,

    #[serde(default)]
    pub status: StationStatus,

    #[serde(default, with = "timestamp::option", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(default, with = "timestamp::option", skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Partial update of the station information
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct StationInfoUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operator: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grid: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<StationStatus>,
}

/// Live status of the station
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StationStatusInfo {
    pub status: StationStatus,

    #[serde(with = "timestamp")]
    pub last_updated: DateTime<Utc>,

    /// Operating frequency, e.g. "14.074 MHz"
    #[serde(default)]
    pub frequency: Option<String>,

    /// Operating mode, e.g. "FT8"
    #[serde(default)]
    pub mode: Option<String>,
}

/// New live status
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StationStatusUpdate {
    pub status: StationStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frequency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,
}

// =============================================================================
// Equipment
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EquipmentType {
    Transceiver,
    Antenna,
    Amplifier,
    Other,
}

/// One piece of station equipment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Equipment {
    #[serde(alias = "_id")]
    pub id: Uuid,

    #[serde(rename = "type")]
    pub kind: EquipmentType,

    pub name: String,

    pub specs: String,

    #[serde(default)]
    pub power: Option<String>,

    /// Antenna gain
    #[serde(default)]
    pub gain: Option<String>,

    #[serde(default)]
    pub bands: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EquipmentCreate {
    #[serde(rename = "type")]
    pub kind: EquipmentType,
    pub name: String,
    pub specs: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub power: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gain: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bands: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct EquipmentUpdate {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<EquipmentType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub specs: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub power: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gain: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bands: Option<String>,
}

// =============================================================================
// QSL cards, achievements, gallery
// =============================================================================

/// A QSL card design
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QslCard {
    #[serde(alias = "_id")]
    pub id: Uuid,
    /// Image URL
    pub image: String,
    pub year: String,
    pub design: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QslCardCreate {
    pub image: String,
    pub year: String,
    pub design: String,
}

/// An award or operating achievement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Achievement {
    #[serde(alias = "_id")]
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub year: String,
    #[serde(default)]
    pub category: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AchievementCreate {
    pub title: String,
    pub description: String,
    pub year: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

/// A photo in the station gallery
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GalleryItem {
    #[serde(alias = "_id")]
    pub id: Uuid,
    pub image: String,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub category: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GalleryCreate {
    pub image: String,
    pub title: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

// =============================================================================
// News
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NewsCategory {
    Equipment,
    Contests,
    #[default]
    General,
}

/// A news post
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewsItem {
    #[serde(alias = "_id")]
    pub id: Uuid,
    pub title: String,
    pub content: String,
    #[serde(with = "timestamp")]
    pub date: DateTime<Utc>,
    #[serde(default)]
    pub category: NewsCategory,
}

/// One page of news, newest first
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewsPage {
    pub news: Vec<NewsItem>,
    /// Total number of posts on the server
    pub total: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewsCreate {
    pub title: String,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<DateTime<Utc>>,
    pub category: NewsCategory,
}

// =============================================================================
// Guestbook
// =============================================================================

/// A visitor's guestbook entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GuestbookEntry {
    #[serde(alias = "_id")]
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    pub callsign: Option<String>,
    pub message: String,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(with = "timestamp")]
    pub date: DateTime<Utc>,
    #[serde(default = "default_true")]
    pub approved: bool,
}

/// One page of guestbook entries
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GuestbookPage {
    pub entries: Vec<GuestbookEntry>,
    pub total: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GuestbookCreate {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub callsign: Option<String>,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
}

// =============================================================================
// Contact / QSL requests
// =============================================================================

/// Body of a contact or QSL request submission
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub callsign: Option<String>,
    pub message: String,
    pub qsl_request: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frequency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rst_sent: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rst_received: Option<String>,
}

/// Backend answer to a submission
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ContactResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub id: Option<String>,
}

/// A stored contact request, as listed for the operator
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ContactRequest {
    #[serde(alias = "_id")]
    pub id: Uuid,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub callsign: Option<String>,
    pub message: String,
    #[serde(default)]
    pub qsl_request: bool,
    #[serde(default)]
    pub frequency: Option<String>,
    #[serde(default)]
    pub mode: Option<String>,
    #[serde(default)]
    pub rst_sent: Option<String>,
    #[serde(default)]
    pub rst_received: Option<String>,
}

// =============================================================================
// Misc
// =============================================================================

/// Generic `{success, message}` acknowledgement
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Acknowledgement {
    #[serde(default = "default_true")]
    pub success: bool,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn test_timestamp_parse_variants() {
        let naive = timestamp::parse("2024-01-15T10:30:00.123456").unwrap();
        assert_eq!((naive.year(), naive.month(), naive.day()), (2024, 1, 15));
        assert_eq!(naive.hour(), 10);

        let offset = timestamp::parse("2024-01-15T12:30:00+02:00").unwrap();
        assert_eq!(offset.hour(), 10);

        let date_only = timestamp::parse("2024-01-10").unwrap();
        assert_eq!(date_only.day(), 10);

        assert!(timestamp::parse("yesterday").is_none());
    }

    #[test]
    fn test_station_info_accepts_underscore_id() {
        let json = r#"{
            "_id": "6f1c1a34-8a5c-4a77-9d6f-0b7cf7d3c2a1",
            "operator": "John Doe",
            "location": "Baku, Azerbaijan",
            "grid": "LN40AA",
            "license": "Extra Class",
            "status": "offline",
            "created_at": "2024-01-01T00:00:00"
        }"#;
        let info: StationInfo = serde_json::from_str(json).unwrap();
        assert_eq!(info.callsign, DEFAULT_CALLSIGN);
        assert_eq!(info.status, StationStatus::Offline);
        assert_eq!(
            info.created_at.map(|t| t.to_rfc3339()),
            Some("2024-01-01T00:00:00+00:00".to_string())
        );
        assert_eq!(info.updated_at, None);
    }

    #[test]
    fn test_equipment_type_field() {
        let json = r#"{
            "id": "0b9f3c5e-7d61-4e5b-a7a2-33d9a2f0e101",
            "type": "antenna",
            "name": "Hexbeam Antenna",
            "specs": "6-Band HF Beam Antenna",
            "gain": "6-8 dBi",
            "bands": "20-10m"
        }"#;
        let item: Equipment = serde_json::from_str(json).unwrap();
        assert_eq!(item.kind, EquipmentType::Antenna);
        assert_eq!(item.power, None);
    }

    #[test]
    fn test_news_page() {
        let json = r#"{
            "news": [{
                "id": "2d7f9a40-51e1-4c1f-9f55-2f4f2f3b8c10",
                "title": "Contest Results",
                "content": "Top 10 in CQ WW DX.",
                "date": "2024-01-10T08:00:00",
                "category": "contests"
            }],
            "total": 12
        }"#;
        let page: NewsPage = serde_json::from_str(json).unwrap();
        assert_eq!(page.total, 12);
        assert_eq!(page.news[0].category, NewsCategory::Contests);
    }

    #[test]
    fn test_contact_submission_skips_blank_optionals() {
        let submission = ContactSubmission {
            name: "Ali".into(),
            email: "ali@example.com".into(),
            message: "73".into(),
            ..Default::default()
        };
        let value = serde_json::to_value(&submission).unwrap();
        assert_eq!(value["qsl_request"], false);
        assert!(value.get("callsign").is_none());
        assert!(value.get("rst_sent").is_none());
    }

    #[test]
    fn test_station_update_only_sends_set_fields() {
        let update = StationInfoUpdate {
            status: Some(StationStatus::Offline),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_string(&update).unwrap(),
            r#"{"status":"offline"}"#
        );
    }
}
