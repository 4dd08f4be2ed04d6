//! Portfolio Site
//!
//! Server-rendered personal portfolio: a banner, a fixed list of project
//! cards with per-card hover state, and a footer with social links.
//!
//! - `catalog`: compile-time project/social data, validated at load
//! - `card`: one card instance, its hover flag and activation
//! - `page`: composition of the whole page from a catalog and a clock
//! - `render`: Askama templates for the page and card fragments
//! - `api_server` / `web`: Axum router and handlers (feature `server`)

pub mod catalog;
pub mod icons;
pub mod card;
pub mod clock;
pub mod page;
pub mod render;
pub mod config;

#[cfg(feature = "server")]
pub mod api_server;
#[cfg(feature = "server")]
pub mod web;

// Re-export commonly used types
pub use catalog::{Catalog, CatalogError, ProjectRecord, SiteProfile, SocialLink};
pub use card::{CardHoverState, CardView, NavigationRequest, ProjectCard};
pub use clock::{Clock, FixedClock, SystemClock};
pub use config::ServerConfig;
pub use page::{Page, PageComposer, PageView};

#[cfg(feature = "server")]
pub use api_server::{create_router, AppState};
