//! Scripted in-memory service used by the binder tests

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::api::{ApiError, WishlistApi, WishlistEndpoints};
use crate::models::{
    Item, NewItem, NewWishlist, OneOrMany, SearchQuery, Wishlist, WishlistStatus, WishlistUpdate,
};

/// A request received by [`ScriptedApi`]
#[derive(Debug, Clone, PartialEq)]
pub struct ApiCall {
    pub method: &'static str,
    pub path: String,
    pub body: Option<Value>,
}

enum Reply {
    Json(Value),
    Empty,
    Fail { status_code: u16, message: String },
}

/// Answers requests from a queue of canned replies and records every call
#[derive(Default)]
pub struct ScriptedApi {
    replies: Mutex<VecDeque<Reply>>,
    calls: Mutex<Vec<ApiCall>>,
}

impl ScriptedApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reply_json(self, value: Value) -> Self {
        self.push(Reply::Json(value))
    }

    pub fn reply_empty(self) -> Self {
        self.push(Reply::Empty)
    }

    pub fn reply_error(self, status_code: u16, message: &str) -> Self {
        self.push(Reply::Fail {
            status_code,
            message: message.to_string(),
        })
    }

    fn push(self, reply: Reply) -> Self {
        self.replies.lock().unwrap().push_back(reply);
        self
    }

    pub fn calls(&self) -> Vec<ApiCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn paths(&self) -> Vec<String> {
        self.calls().into_iter().map(|call| call.path).collect()
    }

    fn respond<T: DeserializeOwned>(
        &self,
        method: &'static str,
        path: String,
        body: Option<Value>,
    ) -> Result<T, ApiError> {
        self.calls.lock().unwrap().push(ApiCall {
            method,
            path: path.clone(),
            body,
        });

        let reply = self
            .replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| panic!("no scripted reply for {} {}", method, path));

        match reply {
            Reply::Json(value) => {
                serde_json::from_value(value).map_err(|source| ApiError::Decode { url: path, source })
            }
            Reply::Empty => serde_json::from_value(Value::Null)
                .map_err(|source| ApiError::Decode { url: path, source }),
            Reply::Fail {
                status_code,
                message,
            } => Err(ApiError::Status {
                status_code,
                message,
            }),
        }
    }
}

fn body<B: Serialize>(value: &B) -> Option<Value> {
    Some(serde_json::to_value(value).unwrap())
}

#[async_trait]
impl WishlistApi for ScriptedApi {
    async fn create_wishlist(&self, wishlist: &NewWishlist) -> Result<Wishlist, ApiError> {
        self.respond("POST", WishlistEndpoints::WISHLISTS.to_string(), body(wishlist))
    }

    async fn get_wishlist(&self, wishlist_id: &str) -> Result<Wishlist, ApiError> {
        self.respond("GET", WishlistEndpoints::wishlist(wishlist_id), None)
    }

    async fn update_wishlist(
        &self,
        wishlist_id: &str,
        update: &WishlistUpdate,
    ) -> Result<Wishlist, ApiError> {
        self.respond("PUT", WishlistEndpoints::wishlist(wishlist_id), body(update))
    }

    async fn set_wishlist_status(
        &self,
        wishlist_id: &str,
        status: WishlistStatus,
    ) -> Result<(), ApiError> {
        let path = WishlistEndpoints::wishlist_status(wishlist_id, status);
        self.respond("PUT", path, Some(serde_json::json!({})))
    }

    async fn delete_wishlist(&self, wishlist_id: &str) -> Result<(), ApiError> {
        self.respond("DELETE", WishlistEndpoints::wishlist(wishlist_id), None)
    }

    async fn search_wishlists(&self, query: &SearchQuery) -> Result<OneOrMany<Wishlist>, ApiError> {
        self.respond("GET", WishlistEndpoints::search(query), None)
    }

    async fn add_item(&self, wishlist_id: &str, item: &NewItem) -> Result<Item, ApiError> {
        self.respond("POST", WishlistEndpoints::items(wishlist_id), body(item))
    }

    async fn list_items(&self, wishlist_id: &str) -> Result<OneOrMany<Item>, ApiError> {
        self.respond("GET", WishlistEndpoints::items(wishlist_id), None)
    }

    async fn get_item(&self, wishlist_id: &str, item_id: &str) -> Result<Item, ApiError> {
        self.respond("GET", WishlistEndpoints::item(wishlist_id, item_id), None)
    }
}
