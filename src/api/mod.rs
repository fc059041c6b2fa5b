//! HTTP client for the station backend
//!
//! The transport layer behind every [`RemoteResource`](crate::resource::RemoteResource)
//! and the contact form. All endpoints live under `<backend_url>/api` and
//! exchange JSON. Failures come back as [`FetchError`] values carrying the
//! HTTP status and whatever error body the server sent.

pub mod models;

pub use models::*;

use crate::config::Config;
use crate::error::{AppError, AppResult, ErrorPayload, FetchError, FetchResult};
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;
use uuid::Uuid;

/// Default page of news posts
pub const DEFAULT_NEWS_PAGE: Page = Page::new(10, 0);

/// Default page of guestbook entries
pub const DEFAULT_GUESTBOOK_PAGE: Page = Page::new(20, 0);

/// Default number of contact requests listed
pub const DEFAULT_CONTACT_LIMIT: u32 = 50;

/// Successful response envelope; resources extract `data`
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse<T> {
    pub data: T,
    pub status: u16,
}

impl<T> ApiResponse<T> {
    /// A 200 response carrying `data`
    pub fn new(data: T) -> Self {
        Self { data, status: 200 }
    }
}

/// Pagination window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Page {
    pub limit: u32,
    pub offset: u32,
}

impl Page {
    pub const fn new(limit: u32, offset: u32) -> Self {
        Self { limit, offset }
    }

    /// The window right after this one
    #[must_use]
    pub fn next(self) -> Self {
        Self::new(self.limit, self.offset.saturating_add(self.limit))
    }

    /// The window right before this one, clamped at the start
    #[must_use]
    pub fn previous(self) -> Self {
        Self::new(self.limit, self.offset.saturating_sub(self.limit))
    }

    /// Whether another page exists given the server's total
    pub fn has_more(self, total: u64) -> bool {
        u64::from(self.offset) + u64::from(self.limit) < total
    }
}

/// `<backend_url>/api`, tolerating a trailing slash
pub fn api_base(backend_url: &str) -> String {
    format!("{}/api", backend_url.trim_end_matches('/'))
}

/// Endpoint with `limit`/`offset` query parameters
pub fn paged_endpoint(path: &str, page: Page) -> String {
    format!("{}?limit={}&offset={}", path, page.limit, page.offset)
}

/// Build the error for a non-success response body
pub fn error_from_body(status: u16, body: &[u8]) -> FetchError {
    let payload = serde_json::from_slice::<ErrorPayload>(body).ok();
    FetchError::http(status, payload)
}

/// Client for the station backend API
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Create a client for the backend at `backend_url`
    pub fn new(backend_url: &str, timeout: Duration) -> AppResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("station-frontend/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| AppError::HttpClient(e.to_string()))?;

        Ok(Self {
            http,
            base_url: api_base(backend_url),
        })
    }

    /// Create a client from the loaded configuration
    pub fn from_config(config: &Config) -> AppResult<Self> {
        Self::new(&config.backend_url, config.request_timeout())
    }

    /// Base URL all endpoints are joined to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL of an endpoint
    pub fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }

    async fn send<B, T>(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<&B>,
    ) -> FetchResult<ApiResponse<T>>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        log::debug!("API Request: {} {}", method, endpoint);

        let mut request = self.http.request(method.clone(), self.url(endpoint));
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await.map_err(|e| {
            log::error!("API Error: {} {}: {}", method, endpoint, e);
            FetchError::from(e)
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.bytes().await.unwrap_or_default();
            let err = error_from_body(status.as_u16(), &body);
            log::error!("API Error: {} {}: {}", method, endpoint, err.user_message());
            return Err(err);
        }

        let data = response.json::<T>().await?;
        Ok(ApiResponse {
            data,
            status: status.as_u16(),
        })
    }

    async fn get<T: DeserializeOwned>(&self, endpoint: &str) -> FetchResult<ApiResponse<T>> {
        self.send::<(), T>(Method::GET, endpoint, None).await
    }

    async fn post<B, T>(&self, endpoint: &str, body: &B) -> FetchResult<ApiResponse<T>>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.send(Method::POST, endpoint, Some(body)).await
    }

    async fn put<B, T>(&self, endpoint: &str, body: &B) -> FetchResult<ApiResponse<T>>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.send(Method::PUT, endpoint, Some(body)).await
    }

    // Station

    pub async fn station_info(&self) -> FetchResult<ApiResponse<StationInfo>> {
        self.get("/station").await
    }

    pub async fn update_station_info(
        &self,
        update: &StationInfoUpdate,
    ) -> FetchResult<ApiResponse<StationInfo>> {
        self.put("/station", update).await
    }

    pub async fn station_status(&self) -> FetchResult<ApiResponse<StationStatusInfo>> {
        self.get("/status").await
    }

    pub async fn update_station_status(
        &self,
        update: &StationStatusUpdate,
    ) -> FetchResult<ApiResponse<StationStatusInfo>> {
        self.put("/status", update).await
    }

    // Equipment

    pub async fn equipment(&self) -> FetchResult<ApiResponse<Vec<Equipment>>> {
        self.get("/equipment").await
    }

    pub async fn create_equipment(
        &self,
        item: &EquipmentCreate,
    ) -> FetchResult<ApiResponse<Equipment>> {
        self.post("/equipment", item).await
    }

    pub async fn update_equipment(
        &self,
        id: Uuid,
        update: &EquipmentUpdate,
    ) -> FetchResult<ApiResponse<Equipment>> {
        self.put(&format!("/equipment/{}", id), update).await
    }

    pub async fn delete_equipment(&self, id: Uuid) -> FetchResult<ApiResponse<Acknowledgement>> {
        self.send::<(), _>(Method::DELETE, &format!("/equipment/{}", id), None)
            .await
    }

    // QSL cards

    pub async fn qsl_cards(&self) -> FetchResult<ApiResponse<Vec<QslCard>>> {
        self.get("/qsl-cards").await
    }

    pub async fn create_qsl_card(&self, card: &QslCardCreate) -> FetchResult<ApiResponse<QslCard>> {
        self.post("/qsl-cards", card).await
    }

    // Achievements

    pub async fn achievements(&self) -> FetchResult<ApiResponse<Vec<Achievement>>> {
        self.get("/achievements").await
    }

    pub async fn create_achievement(
        &self,
        achievement: &AchievementCreate,
    ) -> FetchResult<ApiResponse<Achievement>> {
        self.post("/achievements", achievement).await
    }

    // News

    pub async fn news(&self, page: Page) -> FetchResult<ApiResponse<NewsPage>> {
        self.get(&paged_endpoint("/news", page)).await
    }

    pub async fn create_news(&self, post: &NewsCreate) -> FetchResult<ApiResponse<NewsItem>> {
        self.post("/news", post).await
    }

    // Gallery

    pub async fn gallery(&self) -> FetchResult<ApiResponse<Vec<GalleryItem>>> {
        self.get("/gallery").await
    }

    pub async fn create_gallery_item(
        &self,
        item: &GalleryCreate,
    ) -> FetchResult<ApiResponse<GalleryItem>> {
        self.post("/gallery", item).await
    }

    // Guestbook

    pub async fn guestbook(&self, page: Page) -> FetchResult<ApiResponse<GuestbookPage>> {
        self.get(&paged_endpoint("/guestbook", page)).await
    }

    pub async fn create_guestbook_entry(
        &self,
        entry: &GuestbookCreate,
    ) -> FetchResult<ApiResponse<GuestbookEntry>> {
        self.post("/guestbook", entry).await
    }

    // Contact

    pub async fn submit_contact(
        &self,
        submission: &ContactSubmission,
    ) -> FetchResult<ApiResponse<ContactResponse>> {
        self.post("/contact", submission).await
    }

    pub async fn contact_requests(&self, limit: u32) -> FetchResult<ApiResponse<Vec<ContactRequest>>> {
        self.get(&format!("/contact-requests?limit={}", limit)).await
    }
}


#[cfg(test)]
mod tests {
    use super::test_server::{request_json, serve_once};
    use super::*;

    const STATION_ID: &str = "6f1c1a34-8a5c-4a77-9d6f-0b7cf7d3c2a1";
    const EQUIPMENT_ID: &str = "0b9f3c5e-7d61-4e5b-a7a2-33d9a2f0e101";

    fn client(base: &str) -> ApiClient {
        ApiClient::new(base, Duration::from_secs(5)).unwrap()
    }

    #[test]
    fn test_api_base() {
        assert_eq!(api_base("https://example.org"), "https://example.org/api");
        assert_eq!(api_base("https://example.org/"), "https://example.org/api");
    }

    #[test]
    fn test_paged_endpoint() {
        assert_eq!(
            paged_endpoint("/news", DEFAULT_NEWS_PAGE),
            "/news?limit=10&offset=0"
        );
        assert_eq!(
            paged_endpoint("/guestbook", DEFAULT_GUESTBOOK_PAGE.next()),
            "/guestbook?limit=20&offset=20"
        );
    }

    #[test]
    fn test_page_navigation() {
        let page = Page::new(10, 5);
        assert_eq!(page.previous(), Page::new(10, 0));
        assert!(page.has_more(16));
        assert!(!page.has_more(15));
    }

    #[test]
    fn test_error_from_body() {
        let err = error_from_body(500, br#"{"error": "boom"}"#);
        assert_eq!(err.status, Some(500));
        assert_eq!(err.user_message(), "boom");

        let err = error_from_body(502, b"<html>Bad Gateway</html>");
        assert_eq!(err.payload, None);
        assert_eq!(err.user_message(), "Request failed with status code 502");
    }

    #[test]
    fn test_client_url() {
        let client = client("http://localhost:8001/");
        assert_eq!(client.url("/station"), "http://localhost:8001/api/station");
    }

    #[tokio::test]
    async fn test_equipment_list() {
        let body = r#"[{
            "id": "0b9f3c5e-7d61-4e5b-a7a2-33d9a2f0e101",
            "type": "transceiver",
            "name": "Yaesu FT-991A",
            "specs": "HF/VHF/UHF All Mode Transceiver",
            "power": "100W",
            "bands": "160-10m, 2m, 70cm"
        }]"#;
        let (base, request) = serve_once("200 OK", body).await;

        let response = client(&base).equipment().await.unwrap();
        assert_eq!(response.status, 200);
        assert_eq!(response.data[0].name, "Yaesu FT-991A");

        let request = request.await.unwrap();
        assert!(request.starts_with("GET /api/equipment HTTP/1.1"));
    }

    #[tokio::test]
    async fn test_not_found_detail() {
        let (base, _request) =
            serve_once("404 Not Found", r#"{"detail": "Station information not found"}"#).await;

        let err = client(&base).station_info().await.unwrap_err();
        assert_eq!(err.status, Some(404));
        assert_eq!(err.user_message(), "Station information not found");
    }

    #[tokio::test]
    async fn test_news_uses_page_query() {
        let (base, request) = serve_once("200 OK", r#"{"news": [], "total": 0}"#).await;

        let page = client(&base).news(Page::new(5, 10)).await.unwrap();
        assert_eq!(page.data.total, 0);

        let request = request.await.unwrap();
        assert!(request.starts_with("GET /api/news?limit=5&offset=10 HTTP/1.1"));
    }

    #[tokio::test]
    async fn test_connection_refused_is_fetch_error() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let err = client(&format!("http://{}", addr)).gallery().await.unwrap_err();
        assert_eq!(err.status, None);
        assert!(!err.user_message().is_empty());
    }

    fn station_json() -> String {
        format!(
            r#"{{"id": "{}", "operator": "Agil", "location": "Baku, Azerbaijan", "grid": "LN40", "license": "Class A", "status": "online"}}"#,
            STATION_ID
        )
    }

    #[tokio::test]
    async fn test_update_station_info_sends_only_set_fields() {
        let (base, request) = serve_once("200 OK", &station_json()).await;
        let update = StationInfoUpdate {
            operator: Some("Agil".to_string()),
            ..Default::default()
        };

        let response = client(&base).update_station_info(&update).await.unwrap();
        assert_eq!(response.data.operator, "Agil");

        let request = request.await.unwrap();
        assert!(request.starts_with("PUT /api/station HTTP/1.1"));
        assert_eq!(request_json(&request), serde_json::json!({"operator": "Agil"}));
    }

    #[tokio::test]
    async fn test_station_status_requests() {
        let body = r#"{"status": "online", "last_updated": "2024-06-01T12:00:00", "frequency": "14.074 MHz"}"#;
        let (base, request) = serve_once("200 OK", body).await;
        let status = client(&base).station_status().await.unwrap();
        assert_eq!(status.data.status, StationStatus::Online);
        assert!(request.await.unwrap().starts_with("GET /api/status HTTP/1.1"));

        let (base, request) = serve_once("200 OK", body).await;
        let update = StationStatusUpdate {
            status: StationStatus::Online,
            frequency: Some("14.074 MHz".to_string()),
            mode: None,
        };
        client(&base).update_station_status(&update).await.unwrap();

        let request = request.await.unwrap();
        assert!(request.starts_with("PUT /api/status HTTP/1.1"));
        assert_eq!(
            request_json(&request),
            serde_json::json!({"status": "online", "frequency": "14.074 MHz"})
        );
    }

    fn equipment_json() -> String {
        format!(
            r#"{{"id": "{}", "type": "amplifier", "name": "Acom 1000", "specs": "HF+6m linear", "power": "1000W"}}"#,
            EQUIPMENT_ID
        )
    }

    #[tokio::test]
    async fn test_create_equipment() {
        let (base, request) = serve_once("200 OK", &equipment_json()).await;
        let item = EquipmentCreate {
            kind: EquipmentType::Amplifier,
            name: "Acom 1000".to_string(),
            specs: "HF+6m linear".to_string(),
            power: Some("1000W".to_string()),
            gain: None,
            bands: None,
        };

        let created = client(&base).create_equipment(&item).await.unwrap();
        assert_eq!(created.data.kind, EquipmentType::Amplifier);

        let request = request.await.unwrap();
        assert!(request.starts_with("POST /api/equipment HTTP/1.1"));
        assert_eq!(
            request_json(&request),
            serde_json::json!({
                "type": "amplifier",
                "name": "Acom 1000",
                "specs": "HF+6m linear",
                "power": "1000W"
            })
        );
    }

    #[tokio::test]
    async fn test_update_equipment_by_id() {
        let (base, request) = serve_once("200 OK", &equipment_json()).await;
        let id = Uuid::parse_str(EQUIPMENT_ID).unwrap();
        let update = EquipmentUpdate {
            power: Some("500W".to_string()),
            ..Default::default()
        };

        client(&base).update_equipment(id, &update).await.unwrap();

        let request = request.await.unwrap();
        assert!(request.starts_with(&format!("PUT /api/equipment/{} HTTP/1.1", EQUIPMENT_ID)));
        assert_eq!(request_json(&request), serde_json::json!({"power": "500W"}));
    }

    #[tokio::test]
    async fn test_delete_equipment_by_id() {
        let (base, request) =
            serve_once("200 OK", r#"{"message": "Equipment deleted successfully"}"#).await;
        let id = Uuid::parse_str(EQUIPMENT_ID).unwrap();

        let ack = client(&base).delete_equipment(id).await.unwrap();
        assert!(ack.data.success);

        let request = request.await.unwrap();
        assert!(request.starts_with(&format!("DELETE /api/equipment/{} HTTP/1.1", EQUIPMENT_ID)));
    }

    #[tokio::test]
    async fn test_create_qsl_card() {
        let body = format!(
            r#"{{"id": "{}", "image": "https://example.org/qsl.png", "year": "2025", "design": "Caspian sunset"}}"#,
            STATION_ID
        );
        let (base, request) = serve_once("200 OK", &body).await;
        let card = QslCardCreate {
            image: "https://example.org/qsl.png".to_string(),
            year: "2025".to_string(),
            design: "Caspian sunset".to_string(),
        };

        client(&base).create_qsl_card(&card).await.unwrap();

        let request = request.await.unwrap();
        assert!(request.starts_with("POST /api/qsl-cards HTTP/1.1"));
        assert_eq!(request_json(&request)["design"], "Caspian sunset");
    }

    #[tokio::test]
    async fn test_create_achievement_omits_missing_category() {
        let body = format!(
            r#"{{"id": "{}", "title": "DXCC", "description": "100 entities confirmed", "year": "2023"}}"#,
            STATION_ID
        );
        let (base, request) = serve_once("200 OK", &body).await;
        let achievement = AchievementCreate {
            title: "DXCC".to_string(),
            description: "100 entities confirmed".to_string(),
            year: "2023".to_string(),
            category: None,
        };

        client(&base).create_achievement(&achievement).await.unwrap();

        let request = request.await.unwrap();
        assert!(request.starts_with("POST /api/achievements HTTP/1.1"));
        assert_eq!(
            request_json(&request),
            serde_json::json!({"title": "DXCC", "description": "100 entities confirmed", "year": "2023"})
        );
    }

    #[tokio::test]
    async fn test_create_news() {
        let body = format!(
            r#"{{"id": "{}", "title": "Field day", "content": "Portable from Gobustan", "date": "2024-06-22T08:00:00", "category": "general"}}"#,
            STATION_ID
        );
        let (base, request) = serve_once("200 OK", &body).await;
        let post = NewsCreate {
            title: "Field day".to_string(),
            content: "Portable from Gobustan".to_string(),
            date: None,
            category: NewsCategory::Contests,
        };

        client(&base).create_news(&post).await.unwrap();

        let request = request.await.unwrap();
        assert!(request.starts_with("POST /api/news HTTP/1.1"));
        let json = request_json(&request);
        assert_eq!(json["category"], "contests");
        assert!(json.get("date").is_none());
    }

    #[tokio::test]
    async fn test_create_gallery_item() {
        let body = format!(
            r#"{{"id": "{}", "image": "https://example.org/shack.jpg", "title": "Shack", "description": "Operating position"}}"#,
            STATION_ID
        );
        let (base, request) = serve_once("200 OK", &body).await;
        let item = GalleryCreate {
            image: "https://example.org/shack.jpg".to_string(),
            title: "Shack".to_string(),
            description: "Operating position".to_string(),
            category: Some("station".to_string()),
        };

        client(&base).create_gallery_item(&item).await.unwrap();

        let request = request.await.unwrap();
        assert!(request.starts_with("POST /api/gallery HTTP/1.1"));
        assert_eq!(request_json(&request)["category"], "station");
    }

    #[tokio::test]
    async fn test_create_guestbook_entry() {
        let body = format!(
            r#"{{"id": "{}", "name": "Ivan", "callsign": "UA3ABC", "message": "73!", "date": "2024-05-01T10:00:00"}}"#,
            STATION_ID
        );
        let (base, request) = serve_once("200 OK", &body).await;
        let entry = GuestbookCreate {
            name: "Ivan".to_string(),
            callsign: Some("UA3ABC".to_string()),
            message: "73!".to_string(),
            country: None,
        };

        let created = client(&base).create_guestbook_entry(&entry).await.unwrap();
        assert!(created.data.approved);

        let request = request.await.unwrap();
        assert!(request.starts_with("POST /api/guestbook HTTP/1.1"));
        assert_eq!(
            request_json(&request),
            serde_json::json!({"name": "Ivan", "callsign": "UA3ABC", "message": "73!"})
        );
    }

    #[tokio::test]
    async fn test_contact_requests_default_limit() {
        let body = format!(
            r#"[{{"id": "{}", "name": "Ali", "email": "ali@example.com", "message": "QSL please", "qsl_request": true}}]"#,
            STATION_ID
        );
        let (base, request) = serve_once("200 OK", &body).await;

        let requests = client(&base)
            .contact_requests(DEFAULT_CONTACT_LIMIT)
            .await
            .unwrap();
        assert!(requests.data[0].qsl_request);

        let request = request.await.unwrap();
        assert!(request.starts_with("GET /api/contact-requests?limit=50 HTTP/1.1"));
    }
}
