//! View state: form fields, result panels and the flash area

use crate::binder::flash::FlashArea;
use crate::binder::table::ResultPanel;
use crate::models::{Item, Wishlist, WishlistStatus};

/// Every editable form field, named after its element id on the page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldId {
    WishlistId,
    WishlistName,
    WishlistUserId,
    WishlistItems,
    WishlistStatus,
    ItemId,
    ItemWishlistId,
    ItemProductId,
    ItemProductName,
}

impl FieldId {
    pub const WISHLIST_FORM: [FieldId; 5] = [
        FieldId::WishlistId,
        FieldId::WishlistName,
        FieldId::WishlistUserId,
        FieldId::WishlistItems,
        FieldId::WishlistStatus,
    ];

    pub const ITEM_FORM: [FieldId; 4] = [
        FieldId::ItemId,
        FieldId::ItemWishlistId,
        FieldId::ItemProductId,
        FieldId::ItemProductName,
    ];

    pub fn element_id(&self) -> &'static str {
        match self {
            FieldId::WishlistId => "wishlist_id",
            FieldId::WishlistName => "wishlist_name",
            FieldId::WishlistUserId => "wishlist_user_id",
            FieldId::WishlistItems => "wishlist_items",
            FieldId::WishlistStatus => "wishlist_status",
            FieldId::ItemId => "item_id",
            FieldId::ItemWishlistId => "item_wishlist_id",
            FieldId::ItemProductId => "item_product_id",
            FieldId::ItemProductName => "item_product_name",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FieldId::WishlistId => "ID",
            FieldId::WishlistName => "Name",
            FieldId::WishlistUserId => "User ID",
            FieldId::WishlistItems => "Items",
            FieldId::WishlistStatus => "Status",
            FieldId::ItemId => "Item ID",
            FieldId::ItemWishlistId => "Wishlist ID",
            FieldId::ItemProductId => "Product ID",
            FieldId::ItemProductName => "Product Name",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct WishlistForm {
    pub id: String,
    pub name: String,
    pub user_id: String,
    pub items: String,
    pub status: String,
}

impl WishlistForm {
    pub fn fill(&mut self, wishlist: &Wishlist) {
        self.id = wishlist.id.to_string();
        self.name = wishlist.name.clone();
        self.user_id = wishlist.user_id.clone();
        self.items = wishlist.items.len().to_string();
        self.status = WishlistStatus::from_flag(wishlist.status)
            .as_field_value()
            .to_string();
    }

    /// Clear every field except the id
    pub fn clear_fields(&mut self) {
        self.name.clear();
        self.user_id.clear();
        self.items.clear();
        self.status.clear();
    }

    pub fn clear(&mut self) {
        self.id.clear();
        self.clear_fields();
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemForm {
    pub id: String,
    pub wishlist_id: String,
    pub product_id: String,
    pub product_name: String,
}

impl ItemForm {
    pub fn fill(&mut self, item: &Item) {
        self.id = item.id.to_string();
        self.wishlist_id = item.wishlist_id.to_string();
        self.product_id = item.product_id.clone();
        self.product_name = item.product_name.clone();
    }

    /// Clear every field except the id
    pub fn clear_fields(&mut self) {
        self.wishlist_id.clear();
        self.product_id.clear();
        self.product_name.clear();
    }

    pub fn clear(&mut self) {
        self.id.clear();
        self.clear_fields();
    }
}

/// Everything the page shows, owned by the binder
#[derive(Debug, Clone, Default)]
pub struct ViewState {
    pub wishlist: WishlistForm,
    pub item: ItemForm,
    pub search_results: ResultPanel,
    pub search_results_items: ResultPanel,
    pub flash: FlashArea,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field(&self, field: FieldId) -> &str {
        match field {
            FieldId::WishlistId => &self.wishlist.id,
            FieldId::WishlistName => &self.wishlist.name,
            FieldId::WishlistUserId => &self.wishlist.user_id,
            FieldId::WishlistItems => &self.wishlist.items,
            FieldId::WishlistStatus => &self.wishlist.status,
            FieldId::ItemId => &self.item.id,
            FieldId::ItemWishlistId => &self.item.wishlist_id,
            FieldId::ItemProductId => &self.item.product_id,
            FieldId::ItemProductName => &self.item.product_name,
        }
    }

    pub fn field_mut(&mut self, field: FieldId) -> &mut String {
        match field {
            FieldId::WishlistId => &mut self.wishlist.id,
            FieldId::WishlistName => &mut self.wishlist.name,
            FieldId::WishlistUserId => &mut self.wishlist.user_id,
            FieldId::WishlistItems => &mut self.wishlist.items,
            FieldId::WishlistStatus => &mut self.wishlist.status,
            FieldId::ItemId => &mut self.item.id,
            FieldId::ItemWishlistId => &mut self.item.wishlist_id,
            FieldId::ItemProductId => &mut self.item.product_id,
            FieldId::ItemProductName => &mut self.item.product_name,
        }
    }

    pub fn set_field(&mut self, field: FieldId, value: &str) {
        *self.field_mut(field) = value.to_string();
    }

    /// Empty both result panels
    pub fn clear_results(&mut self) {
        self.search_results.clear();
        self.search_results_items.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::WishlistItems;

    #[test]
    fn test_fill_wishlist_form() {
        let mut view = ViewState::new();
        view.wishlist.fill(&Wishlist {
            id: 1,
            name: "X".to_string(),
            user_id: "u1".to_string(),
            items: WishlistItems::Count(3),
            status: true,
        });

        assert_eq!(view.field(FieldId::WishlistId), "1");
        assert_eq!(view.field(FieldId::WishlistName), "X");
        assert_eq!(view.field(FieldId::WishlistUserId), "u1");
        assert_eq!(view.field(FieldId::WishlistItems), "3");
        assert_eq!(view.field(FieldId::WishlistStatus), "true");
    }

    #[test]
    fn test_clear_fields_keeps_id() {
        let mut view = ViewState::new();
        view.set_field(FieldId::ItemId, "5");
        view.set_field(FieldId::ItemProductName, "Lamp");

        view.item.clear_fields();
        assert_eq!(view.field(FieldId::ItemId), "5");
        assert_eq!(view.field(FieldId::ItemProductName), "");

        view.item.clear();
        assert_eq!(view.field(FieldId::ItemId), "");
    }

    #[test]
    fn test_element_ids() {
        let ids: Vec<_> = FieldId::WISHLIST_FORM.iter().map(|f| f.element_id()).collect();
        assert_eq!(
            ids,
            vec!["wishlist_id", "wishlist_name", "wishlist_user_id", "wishlist_items", "wishlist_status"]
        );
    }
}
