//! Wishlists service endpoints and wire types

use percent_encoding::utf8_percent_encode;
use serde::Deserialize;

use crate::models::{SearchQuery, WishlistStatus, COMPONENT};

/// Error body returned by the service for failed requests
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    /// Human readable error message
    #[serde(default)]
    pub message: Option<String>,
}

/// Wishlists service endpoints and constants
pub struct WishlistEndpoints;

impl WishlistEndpoints {
    /// Wishlist collection
    pub const WISHLISTS: &'static str = "/wishlists";
    /// Item sub-collection segment
    pub const ITEMS: &'static str = "items";

    pub fn wishlist(wishlist_id: &str) -> String {
        format!("{}/{}", Self::WISHLISTS, segment(wishlist_id))
    }

    pub fn wishlist_status(wishlist_id: &str, status: WishlistStatus) -> String {
        format!("{}/{}", Self::wishlist(wishlist_id), status.as_segment())
    }

    pub fn search(query: &SearchQuery) -> String {
        format!("{}{}", Self::WISHLISTS, query.to_query_string())
    }

    pub fn items(wishlist_id: &str) -> String {
        format!("{}/{}", Self::wishlist(wishlist_id), Self::ITEMS)
    }

    pub fn item(wishlist_id: &str, item_id: &str) -> String {
        format!("{}/{}", Self::items(wishlist_id), segment(item_id))
    }
}

fn segment(value: &str) -> String {
    utf8_percent_encode(value.trim(), COMPONENT).to_string()
}

/// Extract the flash text from a failed response body.
///
/// Falls back to a generic message when the body is empty, not JSON or has
/// no `message` field.
pub fn error_message_from_body(status_code: u16, reason: Option<&str>, body: &str) -> String {
    serde_json::from_str::<ErrorResponse>(body)
        .ok()
        .and_then(|response| response.message)
        .filter(|message| !message.trim().is_empty())
        .unwrap_or_else(|| match reason {
            Some(reason) => format!("Request failed with status {} {}", status_code, reason),
            None => format!("Request failed with status {}", status_code),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_paths() {
        assert_eq!(WishlistEndpoints::wishlist("12"), "/wishlists/12");
        assert_eq!(
            WishlistEndpoints::wishlist_status("12", WishlistStatus::Enabled),
            "/wishlists/12/enabled"
        );
        assert_eq!(WishlistEndpoints::items(" 3 "), "/wishlists/3/items");
        assert_eq!(WishlistEndpoints::item("3", "8"), "/wishlists/3/items/8");
        assert_eq!(WishlistEndpoints::wishlist("1/items"), "/wishlists/1%2Fitems");
    }

    #[test]
    fn test_search_path() {
        let query = SearchQuery::from_fields("gift", "7");
        assert_eq!(WishlistEndpoints::search(&query), "/wishlists?name=gift&user_id=7");
        assert_eq!(WishlistEndpoints::search(&SearchQuery::default()), "/wishlists");
    }

    #[test]
    fn test_error_message_extraction() {
        assert_eq!(
            error_message_from_body(404, Some("Not Found"), r#"{"message": "not found"}"#),
            "not found"
        );
        assert_eq!(
            error_message_from_body(500, Some("Internal Server Error"), ""),
            "Request failed with status 500 Internal Server Error"
        );
        assert_eq!(
            error_message_from_body(400, None, r#"{"error": "Bad Request"}"#),
            "Request failed with status 400"
        );
        assert_eq!(
            error_message_from_body(502, Some("Bad Gateway"), "<html>upstream</html>"),
            "Request failed with status 502 Bad Gateway"
        );
    }
}
