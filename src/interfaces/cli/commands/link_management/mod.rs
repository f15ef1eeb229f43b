//! Link management commands
//!
//! This module provides CLI commands for building, listing and copying UTM links.

mod add;
mod copy;
pub(crate) mod helpers;
mod list;
mod preview;

pub use add::{add_link, quick_link};
pub use copy::copy_link;
pub use list::list_links;
pub use preview::preview_link;
