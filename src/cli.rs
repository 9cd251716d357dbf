use clap::{Parser, Subcommand};

use wishlist_admin::binder::{Action, FieldId, ViewState};

#[derive(Parser)]
#[command(name = "wishlist")]
#[command(about = "Admin client for the wishlists REST service")]
#[command(version)]
pub struct Cli {
    /// Base URL of the wishlists service (overrides WISHLIST_API_URL)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Commands {
    /// Interactive terminal UI (default)
    Tui,

    /// Create a wishlist
    Create {
        #[arg(long)]
        name: String,

        #[arg(long)]
        user_id: String,

        /// true/enabled or false/disabled
        #[arg(long)]
        status: Option<String>,
    },

    /// Retrieve a wishlist by id
    Get { id: String },

    /// Update a wishlist; fields left out keep their current value
    Update {
        id: String,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        user_id: Option<String>,

        /// true/enabled or false/disabled
        #[arg(long)]
        status: Option<String>,
    },

    /// Delete a wishlist by id
    Delete { id: String },

    /// Search wishlists by name and user id
    Search {
        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        user_id: Option<String>,

        /// Print result tables as HTML
        #[arg(long)]
        html: bool,
    },

    /// Add an item to a wishlist
    AddItem {
        wishlist_id: String,

        #[arg(long)]
        product_id: String,

        #[arg(long)]
        product_name: String,
    },

    /// List the items of a wishlist, or fetch one with --item-id
    Items {
        wishlist_id: String,

        #[arg(long)]
        item_id: Option<String>,

        /// Print result tables as HTML
        #[arg(long)]
        html: bool,
    },
}

impl Commands {
    /// Binder action this command runs, `None` for the TUI
    pub fn action(&self) -> Option<Action> {
        match self {
            Commands::Tui => None,
            Commands::Create { .. } => Some(Action::Create),
            Commands::Get { .. } => Some(Action::Retrieve),
            Commands::Update { .. } => Some(Action::Update),
            Commands::Delete { .. } => Some(Action::Delete),
            Commands::Search { .. } => Some(Action::Search),
            Commands::AddItem { .. } => Some(Action::AddItem),
            Commands::Items { .. } => Some(Action::SearchItems),
        }
    }

    /// An update that leaves a field out first loads the stored wishlist
    pub fn needs_preload(&self) -> bool {
        matches!(
            self,
            Commands::Update { name, user_id, .. } if name.is_none() || user_id.is_none()
        )
    }

    pub fn wants_html(&self) -> bool {
        matches!(
            self,
            Commands::Search { html: true, .. } | Commands::Items { html: true, .. }
        )
    }

    /// Write the command's arguments into the form fields it reads.
    /// Options that were not given leave their field untouched.
    pub fn fill_view(&self, view: &mut ViewState) {
        let mut set = |field: FieldId, value: &Option<String>| {
            if let Some(value) = value {
                view.set_field(field, value);
            }
        };

        match self {
            Commands::Tui => {}
            Commands::Create {
                name,
                user_id,
                status,
            } => {
                set(FieldId::WishlistName, &Some(name.clone()));
                set(FieldId::WishlistUserId, &Some(user_id.clone()));
                set(FieldId::WishlistStatus, status);
            }
            Commands::Get { id } | Commands::Delete { id } => {
                set(FieldId::WishlistId, &Some(id.clone()));
            }
            Commands::Update {
                id,
                name,
                user_id,
                status,
            } => {
                set(FieldId::WishlistId, &Some(id.clone()));
                set(FieldId::WishlistName, name);
                set(FieldId::WishlistUserId, user_id);
                set(FieldId::WishlistStatus, status);
            }
            Commands::Search { name, user_id, .. } => {
                set(FieldId::WishlistName, name);
                set(FieldId::WishlistUserId, user_id);
            }
            Commands::AddItem {
                wishlist_id,
                product_id,
                product_name,
            } => {
                set(FieldId::ItemWishlistId, &Some(wishlist_id.clone()));
                set(FieldId::ItemProductId, &Some(product_id.clone()));
                set(FieldId::ItemProductName, &Some(product_name.clone()));
            }
            Commands::Items {
                wishlist_id,
                item_id,
                ..
            } => {
                set(FieldId::ItemWishlistId, &Some(wishlist_id.clone()));
                set(FieldId::ItemId, item_id);
            }
        }
    }
}

/// Print the flash message, both forms and any non-empty result panel
pub fn render_view(view: &ViewState, html: bool) -> String {
    let mut out = vec![format!("flash_message: {}", view.flash.text()), String::new()];

    for fields in [&FieldId::WISHLIST_FORM[..], &FieldId::ITEM_FORM[..]] {
        for field in fields {
            out.push(format!("{:<18} {}", field.element_id(), view.field(*field)));
        }
        out.push(String::new());
    }

    for (name, panel) in [
        ("search_results", &view.search_results),
        ("search_results_items", &view.search_results_items),
    ] {
        if let Some(table) = panel.table() {
            out.push(format!("[{}]", name));
            out.push(if html { table.to_html() } else { table.to_text() });
            out.push(String::new());
        }
    }

    out.join("\n").trim_end().to_string()
}
