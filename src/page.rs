//! Page Composition
//!
//! Lays out the page top to bottom:
//! 1. Navbar - brand and social icons
//! 2. Banner - headline, tagline, call-to-action jumping to the projects anchor
//! 3. Projects - one card per catalog record, in catalog order
//! 4. Footer - social links, copyright line with the current year
//!
//! Public API (consumed by the web handlers and tests):
//! - PageComposer::new(catalog, clock) -> Self
//! - PageComposer::compose() -> Page
//! - Page::view() -> PageView

use serde::Serialize;

use crate::card::{CardView, ProjectCard};
use crate::catalog::{Catalog, SiteProfile, SocialLink};
use crate::clock::Clock;
use crate::icons::IconRef;

pub struct PageComposer<'a> {
    catalog: Catalog,
    clock: &'a dyn Clock,
}

impl<'a> PageComposer<'a> {
    pub fn new(catalog: Catalog, clock: &'a dyn Clock) -> Self {
        Self { catalog, clock }
    }

    /// One render pass: fresh cards (none hovered) and the year as of now
    pub fn compose(&self) -> Page {
        let cards = self
            .catalog
            .projects()
            .iter()
            .enumerate()
            .map(|(position, record)| ProjectCard::new(position, record))
            .collect();

        Page {
            profile: self.catalog.profile(),
            socials: self.catalog.socials(),
            cards,
            year: self.clock.current_year(),
        }
    }
}

// ============================================================================
// Page
// ============================================================================

/// A composed page. Each card keeps its own hover flag.
#[derive(Debug, Clone)]
pub struct Page {
    profile: &'static SiteProfile,
    socials: &'static [SocialLink],
    cards: Vec<ProjectCard>,
    year: i32,
}

impl Page {
    pub fn cards(&self) -> &[ProjectCard] {
        &self.cards
    }

    pub fn card(&self, title: &str) -> Option<&ProjectCard> {
        self.cards.iter().find(|card| card.title() == title)
    }

    pub fn card_mut(&mut self, title: &str) -> Option<&mut ProjectCard> {
        self.cards.iter_mut().find(|card| card.title() == title)
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn view(&self) -> PageView {
        let socials: Vec<SocialLinkView> = self.socials.iter().map(SocialLinkView::from).collect();

        PageView {
            brand: self.profile.brand,
            brand_icon_svg: IconRef::Sparkles.svg("w-6 h-6 text-indigo-500 animate-pulse"),
            headline: self.profile.headline,
            tagline: self.profile.tagline,
            cta_label: self.profile.cta_label,
            cta_href: format!("#{}", self.profile.cta_anchor),
            cta_icon_svg: IconRef::ArrowRight.svg("ml-2 w-5 h-5 inline"),
            projects_anchor: self.profile.cta_anchor,
            projects_icon_svg: IconRef::LayoutDashboard.svg("w-7 h-7 text-indigo-500"),
            cards: self.cards.iter().map(ProjectCard::render).collect(),
            socials,
            year: self.year,
            copyright: format!("© {} {}. All rights reserved.", self.year, self.profile.brand),
            built_with: self.profile.built_with,
        }
    }
}

// ============================================================================
// View Models
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SocialLinkView {
    pub label: &'static str,
    pub href: &'static str,
    pub icon: IconRef,
    /// `mailto:` links stay in the current context
    pub opens_new_context: bool,
    pub icon_svg: String,
}

impl From<&SocialLink> for SocialLinkView {
    fn from(link: &SocialLink) -> Self {
        Self {
            label: link.label,
            href: link.href,
            icon: link.icon,
            opens_new_context: !link.href.starts_with("mailto:"),
            icon_svg: link.icon.svg("w-5 h-5 text-gray-700 dark:text-gray-200"),
        }
    }
}

/// Complete page data for template rendering
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageView {
    pub brand: &'static str,
    pub brand_icon_svg: String,
    pub headline: &'static str,
    pub tagline: &'static str,
    pub cta_label: &'static str,
    pub cta_href: String,
    pub cta_icon_svg: String,
    pub projects_anchor: &'static str,
    pub projects_icon_svg: String,
    pub cards: Vec<CardView>,
    pub socials: Vec<SocialLinkView>,
    pub year: i32,
    pub copyright: String,
    pub built_with: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{ProjectRecord, PROFILE};
    use crate::clock::FixedClock;

    const fn record(title: &'static str) -> ProjectRecord {
        ProjectRecord {
            title,
            description: "desc",
            tags: &["x", "y"],
            emoji: "⭐",
            link: "#",
        }
    }

    const ABC: &[ProjectRecord] = &[record("A"), record("B"), record("C")];

    fn abc_page() -> Page {
        let catalog = Catalog::new(&PROFILE, ABC, &[]).unwrap();
        PageComposer::new(catalog, &FixedClock(2024)).compose()
    }

    #[test]
    fn test_one_card_per_record_in_order() {
        let page = abc_page();
        let titles: Vec<_> = page.view().cards.iter().map(|c| c.title).collect();
        assert_eq!(titles, vec!["A", "B", "C"]);
    }

    #[test]
    fn test_hover_is_isolated_per_card() {
        let mut page = abc_page();
        page.card_mut("B").unwrap().on_pointer_enter();

        let hovered: Vec<_> = page.view().cards.iter().map(|c| (c.title, c.hovered)).collect();
        assert_eq!(hovered, vec![("A", false), ("B", true), ("C", false)]);
    }

    #[test]
    fn test_compose_starts_unhovered() {
        let clock = FixedClock(2024);
        let composer = PageComposer::new(Catalog::new(&PROFILE, ABC, &[]).unwrap(), &clock);
        let mut first = composer.compose();
        first.card_mut("A").unwrap().on_pointer_enter();

        let second = composer.compose();
        assert!(second.cards().iter().all(|c| !c.hover().is_hovered()));
    }

    #[test]
    fn test_footer_uses_clock_year() {
        let page = abc_page();
        assert_eq!(page.year(), 2024);
        let view = page.view();
        assert_eq!(view.year, 2024);
        assert_eq!(view.copyright, "© 2024 My Portfolio. All rights reserved.");
    }

    #[test]
    fn test_cta_targets_projects_anchor() {
        let view = abc_page().view();
        assert_eq!(view.cta_href, "#projects");
        assert_eq!(view.projects_anchor, "projects");
    }

    #[test]
    fn test_unknown_title_lookup() {
        let mut page = abc_page();
        assert!(page.card("Z").is_none());
        assert!(page.card_mut("Z").is_none());
    }

    #[test]
    fn test_mailto_social_stays_in_context() {
        let catalog = Catalog::builtin().unwrap();
        let view = PageComposer::new(catalog, &FixedClock(2024)).compose().view();
        let email = view.socials.iter().find(|s| s.label == "Email").unwrap();
        assert!(!email.opens_new_context);
        let github = view.socials.iter().find(|s| s.label == "GitHub").unwrap();
        assert!(github.opens_new_context);
    }
}
