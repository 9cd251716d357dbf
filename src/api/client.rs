//! HTTP client for the wishlists service

use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

use crate::api::{error_message_from_body, ApiError, WishlistEndpoints};
use crate::config::Config;
use crate::models::{
    Item, NewItem, NewWishlist, OneOrMany, SearchQuery, Wishlist, WishlistStatus, WishlistUpdate,
};

/// Operations offered by the wishlists service.
///
/// Identifiers are passed as the raw text of the form field they were read
/// from; the service is responsible for rejecting non-numeric ids.
#[async_trait]
pub trait WishlistApi: Send + Sync {
    async fn create_wishlist(&self, wishlist: &NewWishlist) -> Result<Wishlist, ApiError>;

    async fn get_wishlist(&self, wishlist_id: &str) -> Result<Wishlist, ApiError>;

    async fn update_wishlist(
        &self,
        wishlist_id: &str,
        update: &WishlistUpdate,
    ) -> Result<Wishlist, ApiError>;

    /// PUT to the `enabled` or `disabled` sub-resource
    async fn set_wishlist_status(
        &self,
        wishlist_id: &str,
        status: WishlistStatus,
    ) -> Result<(), ApiError>;

    async fn delete_wishlist(&self, wishlist_id: &str) -> Result<(), ApiError>;

    async fn search_wishlists(&self, query: &SearchQuery) -> Result<OneOrMany<Wishlist>, ApiError>;

    async fn add_item(&self, wishlist_id: &str, item: &NewItem) -> Result<Item, ApiError>;

    async fn list_items(&self, wishlist_id: &str) -> Result<OneOrMany<Item>, ApiError>;

    async fn get_item(&self, wishlist_id: &str, item_id: &str) -> Result<Item, ApiError>;
}

/// reqwest-backed implementation of [`WishlistApi`]
#[derive(Debug, Clone)]
pub struct HttpWishlistApi {
    client: Client,
    base_url: String,
}

impl HttpWishlistApi {
    pub fn new(config: &Config) -> Result<Self, ApiError> {
        let mut builder = Client::builder().user_agent(&config.http.user_agent);
        if let Some(timeout) = config.http_timeout() {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            base_url: config.api_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn request(&self, method: Method, path: &str) -> (RequestBuilder, String) {
        let url = format!("{}{}", self.base_url, path);
        debug!("{} {}", method, url);
        (self.client.request(method, &url), url)
    }

    fn json_request<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: &B,
    ) -> (RequestBuilder, String) {
        let (builder, url) = self.request(method, path);
        (builder.json(body), url)
    }

    /// Send a request and decode the JSON body of a successful response
    async fn fetch<T: DeserializeOwned>(
        &self,
        (builder, url): (RequestBuilder, String),
    ) -> Result<T, ApiError> {
        let text = self.send(builder, &url).await?;
        serde_json::from_str(&text).map_err(|source| ApiError::Decode { url, source })
    }

    /// Send a request whose successful response body is ignored
    async fn execute(&self, (builder, url): (RequestBuilder, String)) -> Result<(), ApiError> {
        self.send(builder, &url).await.map(|_| ())
    }

    async fn send(&self, builder: RequestBuilder, url: &str) -> Result<String, ApiError> {
        let response = builder.send().await?;
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            let message = error_message_from_body(status.as_u16(), status.canonical_reason(), &text);
            warn!("Request to {} failed with status {}: {}", url, status.as_u16(), message);
            return Err(ApiError::Status {
                status_code: status.as_u16(),
                message,
            });
        }

        Ok(text)
    }
}

#[async_trait]
impl WishlistApi for HttpWishlistApi {
    async fn create_wishlist(&self, wishlist: &NewWishlist) -> Result<Wishlist, ApiError> {
        self.fetch(self.json_request(Method::POST, WishlistEndpoints::WISHLISTS, wishlist))
            .await
    }

    async fn get_wishlist(&self, wishlist_id: &str) -> Result<Wishlist, ApiError> {
        self.fetch(self.request(Method::GET, &WishlistEndpoints::wishlist(wishlist_id)))
            .await
    }

    async fn update_wishlist(
        &self,
        wishlist_id: &str,
        update: &WishlistUpdate,
    ) -> Result<Wishlist, ApiError> {
        let path = WishlistEndpoints::wishlist(wishlist_id);
        self.fetch(self.json_request(Method::PUT, &path, update)).await
    }

    async fn set_wishlist_status(
        &self,
        wishlist_id: &str,
        status: WishlistStatus,
    ) -> Result<(), ApiError> {
        let path = WishlistEndpoints::wishlist_status(wishlist_id, status);
        self.execute(self.json_request(Method::PUT, &path, &serde_json::json!({})))
            .await
    }

    async fn delete_wishlist(&self, wishlist_id: &str) -> Result<(), ApiError> {
        self.execute(self.request(Method::DELETE, &WishlistEndpoints::wishlist(wishlist_id)))
            .await
    }

    async fn search_wishlists(&self, query: &SearchQuery) -> Result<OneOrMany<Wishlist>, ApiError> {
        self.fetch(self.request(Method::GET, &WishlistEndpoints::search(query)))
            .await
    }

    async fn add_item(&self, wishlist_id: &str, item: &NewItem) -> Result<Item, ApiError> {
        let path = WishlistEndpoints::items(wishlist_id);
        self.fetch(self.json_request(Method::POST, &path, item)).await
    }

    async fn list_items(&self, wishlist_id: &str) -> Result<OneOrMany<Item>, ApiError> {
        self.fetch(self.request(Method::GET, &WishlistEndpoints::items(wishlist_id)))
            .await
    }

    async fn get_item(&self, wishlist_id: &str, item_id: &str) -> Result<Item, ApiError> {
        self.fetch(self.request(Method::GET, &WishlistEndpoints::item(wishlist_id, item_id)))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::binder::{FieldId, FormBinder};
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::task::JoinHandle;

    /// Answer a single request with `status` and `body`, returning the request line
    async fn serve_once(status: &'static str, body: &'static str) -> (HttpWishlistApi, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let server = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = socket.read(&mut buf).await.unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
            }

            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status,
                body.len(),
                body
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.unwrap();

            String::from_utf8_lossy(&request)
                .lines()
                .next()
                .unwrap_or_default()
                .to_string()
        });

        let api = HttpWishlistApi {
            client: Client::builder().no_proxy().build().unwrap(),
            base_url: format!("http://{}", addr),
        };
        (api, server)
    }

    #[tokio::test]
    async fn test_not_found_carries_server_message() {
        let (api, server) = serve_once("404 Not Found", r#"{"message":"not found"}"#).await;

        let err = api.get_wishlist("7").await.unwrap_err();
        assert_eq!(err.status_code(), Some(404));
        assert_eq!(err.flash_message(), "not found");
        assert_eq!(server.await.unwrap(), "GET /wishlists/7 HTTP/1.1");
    }

    #[tokio::test]
    async fn test_empty_error_body_falls_back_to_status_text() {
        let (api, server) = serve_once("500 Internal Server Error", "").await;

        let err = api.list_items("3").await.unwrap_err();
        assert!(matches!(err, ApiError::Status { status_code: 500, .. }));
        assert_eq!(
            err.flash_message(),
            "Request failed with status 500 Internal Server Error"
        );
        assert_eq!(server.await.unwrap(), "GET /wishlists/3/items HTTP/1.1");
    }

    #[tokio::test]
    async fn test_delete_accepts_no_content() {
        let (api, server) = serve_once("204 No Content", "").await;

        api.delete_wishlist("9").await.unwrap();
        assert_eq!(server.await.unwrap(), "DELETE /wishlists/9 HTTP/1.1");
    }

    #[tokio::test]
    async fn test_retrieve_not_found_reaches_flash_area() {
        let (api, server) = serve_once("404 Not Found", r#"{"message":"not found"}"#).await;
        let mut binder = FormBinder::new(api);
        binder.view_mut().set_field(FieldId::WishlistId, "7");
        binder.view_mut().set_field(FieldId::WishlistName, "Stale");

        let outcome = binder.retrieve_wishlist().await.unwrap();
        assert!(!outcome.is_success());
        assert_eq!(binder.view().flash.text(), "not found");
        assert_eq!(binder.view().field(FieldId::WishlistName), "");
        assert_eq!(binder.view().field(FieldId::WishlistId), "7");
        server.await.unwrap();
    }

    #[test]
    fn test_client_uses_configured_base_url() {
        let config = Config::default().with_api_url("http://127.0.0.1:9000/");
        let api = HttpWishlistApi::new(&config).unwrap();
        assert_eq!(api.base_url(), "http://127.0.0.1:9000");
    }
}
