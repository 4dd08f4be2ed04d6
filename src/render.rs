//! HTML Rendering with Askama
//!
//! Templates live under `templates/`. The full page includes the card partial
//! once per card, and the card fragment endpoint renders the same partial on
//! its own, so a swapped-in card is byte-for-byte what the page would show.

use askama::Template;

use crate::card::CardView;
use crate::page::PageView;

#[derive(Template)]
#[template(path = "pages/home.html")]
pub struct HomeTemplate<'a> {
    pub page: &'a PageView,
}

#[derive(Template)]
#[template(path = "partials/project_card.html")]
pub struct ProjectCardTemplate<'a> {
    pub card: &'a CardView,
}

pub fn render_page(page: &PageView) -> askama::Result<String> {
    HomeTemplate { page }.render()
}

pub fn render_card(card: &CardView) -> askama::Result<String> {
    ProjectCardTemplate { card }.render()
}
