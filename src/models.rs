use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use serde::{Deserialize, Deserializer, Serialize};

/// Characters escaped inside query values and path segments.
pub const COMPONENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'&')
    .add(b'+')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'=')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Wishlist {
    pub id: i64,
    pub name: String,
    #[serde(deserialize_with = "string_or_number")]
    pub user_id: String,
    #[serde(default)]
    pub items: WishlistItems,
    #[serde(default)]
    pub status: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: i64,
    pub wishlist_id: i64,
    #[serde(deserialize_with = "string_or_number")]
    pub product_id: String,
    pub product_name: String,
}

/// Items attached to a wishlist. Some deployments only report a count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum WishlistItems {
    List(Vec<Item>),
    Count(u64),
}

impl Default for WishlistItems {
    fn default() -> Self {
        WishlistItems::List(Vec::new())
    }
}

impl WishlistItems {
    pub fn len(&self) -> u64 {
        match self {
            WishlistItems::List(items) => items.len() as u64,
            WishlistItems::Count(count) => *count,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Nested items, empty for the count variant
    pub fn as_slice(&self) -> &[Item] {
        match self {
            WishlistItems::List(items) => items,
            WishlistItems::Count(_) => &[],
        }
    }
}

/// A response body that is either one record or a list of them
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany<T> {
    Many(Vec<T>),
    Single(T),
}

impl<T> OneOrMany<T> {
    pub fn into_vec(self) -> Vec<T> {
        match self {
            OneOrMany::Many(records) => records,
            OneOrMany::Single(record) => vec![record],
        }
    }

    pub fn len(&self) -> usize {
        match self {
            OneOrMany::Many(records) => records.len(),
            OneOrMany::Single(_) => 1,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Enabled/disabled state of a wishlist
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WishlistStatus {
    Enabled,
    Disabled,
}

impl WishlistStatus {
    /// Parse the text of a status form field. Blank or unknown text is `None`.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "true" | "enabled" => Some(WishlistStatus::Enabled),
            "false" | "disabled" => Some(WishlistStatus::Disabled),
            _ => None,
        }
    }

    pub fn from_flag(enabled: bool) -> Self {
        if enabled {
            WishlistStatus::Enabled
        } else {
            WishlistStatus::Disabled
        }
    }

    pub fn is_enabled(&self) -> bool {
        matches!(self, WishlistStatus::Enabled)
    }

    /// Path segment of the status sub-resource
    pub fn as_segment(&self) -> &'static str {
        match self {
            WishlistStatus::Enabled => "enabled",
            WishlistStatus::Disabled => "disabled",
        }
    }

    /// Text used in the status form field
    pub fn as_field_value(&self) -> &'static str {
        match self {
            WishlistStatus::Enabled => "true",
            WishlistStatus::Disabled => "false",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewWishlist {
    pub name: String,
    pub user_id: String,
    pub items: Vec<Item>,
    pub status: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WishlistUpdate {
    pub name: String,
    pub user_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewItem {
    pub wishlist_id: i64,
    pub product_id: String,
    pub product_name: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchQuery {
    pub name: Option<String>,
    pub user_id: Option<String>,
}

impl SearchQuery {
    /// Build filters from raw form text; blank fields are dropped
    pub fn from_fields(name: &str, user_id: &str) -> Self {
        Self {
            name: non_blank(name),
            user_id: non_blank(user_id),
        }
    }

    /// `?name=..&user_id=..` with only the present filters, or an empty string
    pub fn to_query_string(&self) -> String {
        let params: Vec<String> = [("name", &self.name), ("user_id", &self.user_id)]
            .into_iter()
            .filter_map(|(key, value)| {
                value
                    .as_deref()
                    .map(|v| format!("{}={}", key, utf8_percent_encode(v, COMPONENT)))
            })
            .collect();

        if params.is_empty() {
            String::new()
        } else {
            format!("?{}", params.join("&"))
        }
    }
}

/// Trimmed value of a form field, `None` when blank
pub fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum StringOrNumber {
        String(String),
        Integer(i64),
        Float(f64),
    }

    Ok(match StringOrNumber::deserialize(deserializer)? {
        StringOrNumber::String(s) => s,
        StringOrNumber::Integer(n) => n.to_string(),
        StringOrNumber::Float(n) => n.to_string(),
    })
}
