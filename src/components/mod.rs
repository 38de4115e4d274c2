//! UI Components
//!
//! Reusable Leptos components shared by the screens.

mod icons;
mod bottom_nav;
mod page_header;
mod search_bar;
mod category_grid;
mod quick_action_card;
mod filter_chips;
mod resource_card;
mod empty_state;
mod map_surface;
mod location_list;
mod location_card;

pub use icons::{Icon, IconKind};
pub use bottom_nav::BottomNav;
pub use page_header::PageHeader;
pub use search_bar::SearchBar;
pub use category_grid::CategoryGrid;
pub use quick_action_card::QuickActionCard;
pub use filter_chips::FilterChips;
pub use resource_card::ResourceCard;
pub use empty_state::EmptyState;
pub use map_surface::MapSurface;
pub use location_list::LocationList;
pub use location_card::LocationCard;
