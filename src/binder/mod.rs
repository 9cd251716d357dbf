//! Form–table binder
//!
//! Every user action reads the relevant form fields from the [`ViewState`],
//! performs one request against the wishlists service (two for an update
//! that changes the status) and writes the response back into the forms,
//! the result panels and the flash area. Missing identifiers are rejected
//! with a [`ValidationError`] before anything is sent.

pub mod flash;
pub mod table;
pub mod view;

pub use flash::{FlashArea, FlashKind, FlashMessage};
pub use table::{ResultPanel, Table};
pub use view::{FieldId, ItemForm, ViewState, WishlistForm};

use thiserror::Error;
use tracing::{info, warn};

use crate::api::{ApiError, WishlistApi};
use crate::models::{
    non_blank, Item, NewItem, NewWishlist, OneOrMany, SearchQuery, Wishlist, WishlistStatus,
    WishlistUpdate,
};

const SUCCESS: &str = "Success";
const DELETED: &str = "Wishlist has been deleted";

/// Blocking alerts raised before a request is sent
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please Enter Wishlist id")]
    MissingWishlistId,

    #[error("Wishlist Name and User ID are required fields")]
    MissingWishlistFields,

    #[error("Wishlist ID, Product Name and Product ID are required fields")]
    MissingItemFields,

    #[error("Wishlist ID must be a number, got '{0}'")]
    InvalidWishlistId(String),
}

/// How a request-backed action ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionOutcome {
    Success,
    /// The request failed; carries the text shown in the flash area
    Failed(String),
}

impl ActionOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, ActionOutcome::Success)
    }
}

/// Secondary status request issued after a successful update
#[derive(Debug)]
pub struct StatusToggle {
    pub target: WishlistStatus,
    pub result: Result<(), ApiError>,
}

/// Result of the two-step update
#[derive(Debug)]
pub struct UpdateOutcome {
    /// Wishlist returned by the primary update
    pub wishlist: Wishlist,
    /// Present when the status differed from the requested one
    pub toggle: Option<StatusToggle>,
}

impl UpdateOutcome {
    /// The wishlist as it should be displayed: the toggled status is only
    /// shown once the service accepted it.
    pub fn displayed(&self) -> Wishlist {
        let mut wishlist = self.wishlist.clone();
        if let Some(StatusToggle {
            target,
            result: Ok(()),
        }) = &self.toggle
        {
            wishlist.status = target.is_enabled();
        }
        wishlist
    }

    pub fn toggle_error(&self) -> Option<&ApiError> {
        self.toggle.as_ref().and_then(|t| t.result.as_ref().err())
    }
}

/// Update a wishlist, then switch its status through the `enabled` or
/// `disabled` sub-resource when the response disagrees with `desired`.
///
/// The toggle is awaited before returning. A failed toggle is reported in
/// the outcome rather than as an error, since the primary update succeeded.
pub async fn update_with_status<A>(
    api: &A,
    wishlist_id: &str,
    update: &WishlistUpdate,
    desired: Option<WishlistStatus>,
) -> Result<UpdateOutcome, ApiError>
where
    A: WishlistApi + ?Sized,
{
    let wishlist = api.update_wishlist(wishlist_id, update).await?;

    let toggle = match desired {
        Some(target) if target.is_enabled() != wishlist.status => {
            info!("Switching wishlist {} to {}", wishlist_id, target.as_segment());
            let result = api.set_wishlist_status(wishlist_id, target).await;
            Some(StatusToggle { target, result })
        }
        _ => None,
    };

    Ok(UpdateOutcome { wishlist, toggle })
}

/// A user action, one per button on the page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Create,
    Retrieve,
    Update,
    Delete,
    AddItem,
    Search,
    SearchItems,
    ClearWishlist,
    ClearItem,
}

impl Action {
    pub const ALL: [Action; 9] = [
        Action::Create,
        Action::Retrieve,
        Action::Update,
        Action::Delete,
        Action::Search,
        Action::AddItem,
        Action::SearchItems,
        Action::ClearWishlist,
        Action::ClearItem,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Action::Create => "Create",
            Action::Retrieve => "Retrieve",
            Action::Update => "Update",
            Action::Delete => "Delete",
            Action::AddItem => "Add Item",
            Action::Search => "Search",
            Action::SearchItems => "Search Items",
            Action::ClearWishlist => "Clear Wishlist",
            Action::ClearItem => "Clear Item",
        }
    }
}

/// Which result panel an items table goes to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Panel {
    Results,
    ResultItems,
}

/// Binds the view state to a wishlists service
pub struct FormBinder<A> {
    api: A,
    view: ViewState,
}

impl<A: WishlistApi> FormBinder<A> {
    pub fn new(api: A) -> Self {
        Self::with_view(api, ViewState::new())
    }

    pub fn with_view(api: A, view: ViewState) -> Self {
        Self { api, view }
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut ViewState {
        &mut self.view
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    /// Run the handler bound to `action`
    pub async fn perform(&mut self, action: Action) -> Result<ActionOutcome, ValidationError> {
        match action {
            Action::Create => self.create_wishlist().await,
            Action::Retrieve => self.retrieve_wishlist().await,
            Action::Update => self.update_wishlist().await,
            Action::Delete => self.delete_wishlist().await,
            Action::AddItem => self.add_item().await,
            Action::Search => self.search_wishlists().await,
            Action::SearchItems => self.search_items().await,
            Action::ClearWishlist => {
                self.clear_wishlist_form();
                Ok(ActionOutcome::Success)
            }
            Action::ClearItem => {
                self.clear_item_form();
                Ok(ActionOutcome::Success)
            }
        }
    }

    /// Create a wishlist from the wishlist form
    pub async fn create_wishlist(&mut self) -> Result<ActionOutcome, ValidationError> {
        let form = &self.view.wishlist;
        let (name, user_id) = match (non_blank(&form.name), non_blank(&form.user_id)) {
            (Some(name), Some(user_id)) => (name, user_id),
            _ => return Err(ValidationError::MissingWishlistFields),
        };
        // Blank or unrecognised status text creates an enabled wishlist
        let status = WishlistStatus::parse(&form.status).unwrap_or(WishlistStatus::Enabled);

        let request = NewWishlist {
            name,
            user_id,
            items: Vec::new(),
            status: status.is_enabled(),
        };

        info!("Creating wishlist '{}' for user {}", request.name, request.user_id);
        match self.api.create_wishlist(&request).await {
            Ok(wishlist) => {
                self.view.wishlist.fill(&wishlist);
                self.view.clear_results();
                Ok(self.succeed(SUCCESS))
            }
            Err(e) => Ok(self.fail(&e)),
        }
    }

    /// Load the wishlist named by the id field
    pub async fn retrieve_wishlist(&mut self) -> Result<ActionOutcome, ValidationError> {
        let wishlist_id = self.required_wishlist_id()?;

        info!("Retrieving wishlist {}", wishlist_id);
        match self.api.get_wishlist(&wishlist_id).await {
            Ok(wishlist) => {
                self.view.wishlist.fill(&wishlist);
                Ok(self.succeed(SUCCESS))
            }
            Err(e) => {
                self.view.wishlist.clear_fields();
                Ok(self.fail(&e))
            }
        }
    }

    /// Save name and user id, then reconcile the status field
    pub async fn update_wishlist(&mut self) -> Result<ActionOutcome, ValidationError> {
        let wishlist_id = self.required_wishlist_id()?;
        let form = &self.view.wishlist;
        let update = WishlistUpdate {
            name: form.name.trim().to_string(),
            user_id: form.user_id.trim().to_string(),
        };
        let desired = WishlistStatus::parse(&form.status);

        info!("Updating wishlist {}", wishlist_id);
        match update_with_status(&self.api, &wishlist_id, &update, desired).await {
            Ok(outcome) => {
                self.view.wishlist.fill(&outcome.displayed());
                self.view.clear_results();
                match outcome.toggle_error() {
                    Some(e) => Ok(self.fail(e)),
                    None => Ok(self.succeed(SUCCESS)),
                }
            }
            Err(e) => Ok(self.fail(&e)),
        }
    }

    pub async fn delete_wishlist(&mut self) -> Result<ActionOutcome, ValidationError> {
        let wishlist_id = self.required_wishlist_id()?;

        info!("Deleting wishlist {}", wishlist_id);
        match self.api.delete_wishlist(&wishlist_id).await {
            Ok(()) => {
                self.view.wishlist.clear_fields();
                self.view.clear_results();
                Ok(self.succeed(DELETED))
            }
            Err(e) => Ok(self.fail(&e)),
        }
    }

    /// Add the item described by the item form to its wishlist
    pub async fn add_item(&mut self) -> Result<ActionOutcome, ValidationError> {
        let form = &self.view.item;
        let (wishlist_id, product_id, product_name) = match (
            non_blank(&form.wishlist_id),
            non_blank(&form.product_id),
            non_blank(&form.product_name),
        ) {
            (Some(w), Some(p), Some(n)) => (w, p, n),
            _ => return Err(ValidationError::MissingItemFields),
        };
        let parent: i64 = wishlist_id
            .parse()
            .map_err(|_| ValidationError::InvalidWishlistId(wishlist_id.clone()))?;

        let request = NewItem {
            wishlist_id: parent,
            product_id,
            product_name,
        };

        info!("Adding product {} to wishlist {}", request.product_id, parent);
        match self.api.add_item(&wishlist_id, &request).await {
            Ok(item) => {
                self.view.item.fill(&item);
                self.view.search_results.clear();
                Ok(self.succeed(SUCCESS))
            }
            Err(e) => Ok(self.fail(&e)),
        }
    }

    /// Search wishlists by the name and user id fields
    pub async fn search_wishlists(&mut self) -> Result<ActionOutcome, ValidationError> {
        let query = SearchQuery::from_fields(&self.view.wishlist.name, &self.view.wishlist.user_id);

        info!("Searching wishlists{}", query.to_query_string());
        match self.api.search_wishlists(&query).await {
            Ok(response) => {
                let wishlists = response.into_vec();
                let items: Vec<Item> = wishlists
                    .iter()
                    .flat_map(|w| w.items.as_slice().iter().cloned())
                    .collect();

                self.view.search_results.show(Table::wishlists(&wishlists));
                if let Some(first) = wishlists.first() {
                    self.view.wishlist.fill(first);
                }
                self.show_items(Panel::ResultItems, &items);

                info!("Found {} wishlists with {} items", wishlists.len(), items.len());
                Ok(self.succeed(SUCCESS))
            }
            Err(e) => Ok(self.fail(&e)),
        }
    }

    /// List the items of a wishlist, or fetch one when the item id is set
    pub async fn search_items(&mut self) -> Result<ActionOutcome, ValidationError> {
        let wishlist_id =
            non_blank(&self.view.item.wishlist_id).ok_or(ValidationError::MissingWishlistId)?;

        let response = match non_blank(&self.view.item.id) {
            Some(item_id) => {
                info!("Retrieving item {} of wishlist {}", item_id, wishlist_id);
                self.api
                    .get_item(&wishlist_id, &item_id)
                    .await
                    .map(OneOrMany::Single)
            }
            None => {
                info!("Listing items of wishlist {}", wishlist_id);
                self.api.list_items(&wishlist_id).await
            }
        };

        match response {
            Ok(items) => {
                self.show_items(Panel::Results, &items.into_vec());
                Ok(self.succeed(SUCCESS))
            }
            Err(e) => Ok(self.fail(&e)),
        }
    }

    pub fn clear_wishlist_form(&mut self) {
        self.view.wishlist.clear();
    }

    pub fn clear_item_form(&mut self) {
        self.view.item.clear();
    }

    fn required_wishlist_id(&self) -> Result<String, ValidationError> {
        non_blank(&self.view.wishlist.id).ok_or(ValidationError::MissingWishlistId)
    }

    /// Render an items table and copy the first item into the item form
    fn show_items(&mut self, panel: Panel, items: &[Item]) {
        let table = Table::items(items);
        match panel {
            Panel::Results => self.view.search_results.show(table),
            Panel::ResultItems => self.view.search_results_items.show(table),
        }
        if let Some(first) = items.first() {
            self.view.item.fill(first);
        }
    }

    fn succeed(&mut self, message: &str) -> ActionOutcome {
        self.view.flash.success(message);
        ActionOutcome::Success
    }

    fn fail(&mut self, error: &ApiError) -> ActionOutcome {
        let message = error.flash_message();
        match error.status_code() {
            Some(code) => warn!("Request failed with status {}: {}", code, message),
            None => warn!("Request failed: {}", message),
        }
        self.view.flash.error(message.clone());
        ActionOutcome::Failed(message)
    }
}
