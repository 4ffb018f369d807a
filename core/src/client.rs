//! Stateless HTTP request builder and response parser for the item API.
//!
//! # Design
//! `ItemClient` holds only a `base_url` and carries no mutable state between
//! calls. Each CRUD operation is split into a `build_*` method that produces
//! an `HttpRequest` and a `parse_*` method that consumes an `HttpResponse`.
//! Any 2xx status counts as success; mutation responses carry no payload the
//! client needs, so their bodies are ignored.

use tracing::debug;

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{Item, NewItem};

/// Base URL used when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000/api";

/// Synchronous, stateless client for the item API.
#[derive(Debug, Clone)]
pub struct ItemClient {
    base_url: String,
}

impl Default for ItemClient {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl ItemClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn collection(&self) -> String {
        format!("{}/items", self.base_url)
    }

    fn member(&self, id: i64) -> String {
        format!("{}/items/{id}", self.base_url)
    }

    pub fn build_list_items(&self) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: self.collection(),
            headers: accept_json(),
            body: None,
        }
    }

    pub fn build_create_item(&self, input: &NewItem) -> Result<HttpRequest, ApiError> {
        Ok(HttpRequest {
            method: HttpMethod::Post,
            path: self.collection(),
            headers: json_body_headers(),
            body: Some(to_json(input)?),
        })
    }

    pub fn build_update_item(&self, id: i64, item: &Item) -> Result<HttpRequest, ApiError> {
        Ok(HttpRequest {
            method: HttpMethod::Put,
            path: self.member(id),
            headers: json_body_headers(),
            body: Some(to_json(item)?),
        })
    }

    pub fn build_delete_item(&self, id: i64) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Delete,
            path: self.member(id),
            headers: accept_json(),
            body: None,
        }
    }

    /// Parse the item array, preserving server order.
    pub fn parse_list_items(&self, response: HttpResponse) -> Result<Vec<Item>, ApiError> {
        check_status(&response)?;
        let items: Vec<Item> = serde_json::from_str(&response.body)
            .map_err(|e| ApiError::Deserialization(e.to_string()))?;
        debug!(count = items.len(), "parsed item list");
        Ok(items)
    }

    pub fn parse_create_item(&self, response: HttpResponse) -> Result<(), ApiError> {
        check_status(&response)
    }

    pub fn parse_update_item(&self, response: HttpResponse) -> Result<(), ApiError> {
        check_status(&response)
    }

    pub fn parse_delete_item(&self, response: HttpResponse) -> Result<(), ApiError> {
        check_status(&response)
    }
}

/// Render an item the way the list display shows it.
pub fn format_entry(item: &Item) -> String {
    format!("{}: {} - {}", item.id, item.name, item.description)
}

fn accept_json() -> Vec<(String, String)> {
    vec![("accept".to_string(), "application/json".to_string())]
}

fn json_body_headers() -> Vec<(String, String)> {
    let mut headers = accept_json();
    headers.push(("content-type".to_string(), "application/json".to_string()));
    headers
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<String, ApiError> {
    serde_json::to_string(value).map_err(|e| ApiError::Serialization(e.to_string()))
}

/// Map non-success status codes to the appropriate `ApiError` variant.
fn check_status(response: &HttpResponse) -> Result<(), ApiError> {
    if response.is_success() {
        return Ok(());
    }
    if response.status == 404 {
        return Err(ApiError::NotFound);
    }
    Err(ApiError::Status {
        status: response.status,
        body: response.body.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> ItemClient {
        ItemClient::new("http://localhost:5000/api/")
    }

    fn response(status: u16, body: &str) -> HttpResponse {
        HttpResponse {
            status,
            headers: Vec::new(),
            body: body.to_string(),
        }
    }

    #[test]
    fn build_list_items_produces_correct_request() {
        let req = client().build_list_items();
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.path, "http://localhost:5000/api/items");
        assert_eq!(req.header("accept"), Some("application/json"));
        assert!(req.body.is_none());
    }

    #[test]
    fn build_create_item_omits_id() {
        let input = NewItem {
            name: "Pen".to_string(),
            description: "Blue pen".to_string(),
        };
        let req = client().build_create_item(&input).unwrap();
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(req.path, "http://localhost:5000/api/items");
        assert_eq!(req.header("content-type"), Some("application/json"));
        let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body, serde_json::json!({"name": "Pen", "description": "Blue pen"}));
    }

    #[test]
    fn build_update_item_targets_sub_resource_with_full_body() {
        let item = Item {
            id: 5,
            name: "X".to_string(),
            description: "Y".to_string(),
        };
        let req = client().build_update_item(5, &item).unwrap();
        assert_eq!(req.method, HttpMethod::Put);
        assert_eq!(req.path, "http://localhost:5000/api/items/5");
        let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body, serde_json::json!({"id": 5, "name": "X", "description": "Y"}));
    }

    #[test]
    fn build_delete_item_has_no_body() {
        let req = client().build_delete_item(42);
        assert_eq!(req.method, HttpMethod::Delete);
        assert_eq!(req.path, "http://localhost:5000/api/items/42");
        assert!(req.body.is_none());
    }

    #[test]
    fn default_client_points_at_localhost_api() {
        assert_eq!(ItemClient::default().base_url(), "http://localhost:5000/api");
    }

    #[test]
    fn parse_list_items_preserves_order() {
        let body = r#"[
            {"id":2,"name":"B","description":"second"},
            {"id":1,"name":"A","description":"first"}
        ]"#;
        let items = client().parse_list_items(response(200, body)).unwrap();
        let ids: Vec<i64> = items.iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![2, 1]);
    }

    #[test]
    fn parse_list_items_accepts_any_2xx() {
        let items = client().parse_list_items(response(203, "[]")).unwrap();
        assert!(items.is_empty());
    }

    #[test]
    fn parse_list_items_bad_json() {
        let err = client()
            .parse_list_items(response(200, "not json"))
            .unwrap_err();
        assert!(matches!(err, ApiError::Deserialization(_)));
    }

    #[test]
    fn parse_list_items_server_error() {
        let err = client()
            .parse_list_items(response(500, "boom"))
            .unwrap_err();
        assert!(matches!(err, ApiError::Status { status: 500, .. }));
    }

    #[test]
    fn parse_mutations_ignore_body_on_success() {
        let c = client();
        assert!(c.parse_create_item(response(201, "{\"id\":9}")).is_ok());
        assert!(c.parse_update_item(response(204, "")).is_ok());
        assert!(c.parse_delete_item(response(200, "garbage")).is_ok());
    }

    #[test]
    fn parse_update_item_not_found() {
        let err = client().parse_update_item(response(404, "")).unwrap_err();
        assert!(matches!(err, ApiError::NotFound));
    }

    #[test]
    fn format_entry_matches_display_layout() {
        let item = Item {
            id: 1,
            name: "Pen".to_string(),
            description: "Blue pen".to_string(),
        };
        assert_eq!(format_entry(&item), "1: Pen - Blue pen");
    }
}
