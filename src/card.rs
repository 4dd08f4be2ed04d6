//! Project Cards
//!
//! A `ProjectCard` is one rendered instance of a `ProjectRecord`. It owns a
//! single hover flag that only it can change. `render` is a pure function of
//! the record and that flag.

use serde::Serialize;

use crate::catalog::ProjectRecord;

/// Ring classes applied while the pointer is over the card
pub const HOVER_RING_CLASS: &str = "ring-2 ring-indigo-400";

/// Per-card hover flag, `false` until the pointer enters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CardHoverState(bool);

impl CardHoverState {
    pub fn is_hovered(&self) -> bool {
        self.0
    }
}

/// Where an activated link opens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BrowsingContext {
    New,
}

impl BrowsingContext {
    /// Value for the anchor's `target` attribute
    pub fn target_attr(&self) -> &'static str {
        match self {
            BrowsingContext::New => "_blank",
        }
    }
}

/// Navigation the host should perform when a card is activated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavigationRequest {
    pub url: &'static str,
    pub target: BrowsingContext,
}

/// Pointer event a card listens for next
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PointerEvent {
    Enter,
    Leave,
}

impl PointerEvent {
    /// DOM event name
    pub fn dom_name(&self) -> &'static str {
        match self {
            PointerEvent::Enter => "mouseenter",
            PointerEvent::Leave => "mouseleave",
        }
    }

    /// htmx trigger spec. The `load` clause re-checks the pointer once a
    /// swapped-in card settles, since the DOM event may have fired on the
    /// card it replaced.
    pub fn hx_trigger(&self) -> &'static str {
        match self {
            PointerEvent::Enter => "mouseenter, load[this.matches(':hover')]",
            PointerEvent::Leave => "mouseleave, load[!this.matches(':hover')]",
        }
    }
}

// ============================================================================
// Card
// ============================================================================

#[derive(Debug, Clone)]
pub struct ProjectCard {
    position: usize,
    record: &'static ProjectRecord,
    hover: CardHoverState,
}

impl ProjectCard {
    pub fn new(position: usize, record: &'static ProjectRecord) -> Self {
        Self {
            position,
            record,
            hover: CardHoverState::default(),
        }
    }

    /// Render key
    pub fn title(&self) -> &'static str {
        self.record.title
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn record(&self) -> &'static ProjectRecord {
        self.record
    }

    pub fn hover(&self) -> CardHoverState {
        self.hover
    }

    pub fn on_pointer_enter(&mut self) {
        self.hover = CardHoverState(true);
    }

    pub fn on_pointer_leave(&mut self) {
        self.hover = CardHoverState(false);
    }

    /// Click or keyboard activation. The "#" placeholder navigates nowhere.
    pub fn activate(&self) -> Option<NavigationRequest> {
        self.record.has_destination().then(|| NavigationRequest {
            url: self.record.link,
            target: BrowsingContext::New,
        })
    }

    pub fn render(&self) -> CardView {
        let hovered = self.hover.is_hovered();
        CardView {
            position: self.position,
            title: self.record.title,
            description: self.record.description,
            emoji: self.record.emoji,
            tags: self.record.tags.to_vec(),
            navigation: self.activate(),
            hovered,
            ring_class: if hovered { HOVER_RING_CLASS } else { "" },
            listens_for: if hovered { PointerEvent::Leave } else { PointerEvent::Enter },
        }
    }
}

// ============================================================================
// View Model
// ============================================================================

/// Everything the card template needs, nothing more
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardView {
    pub position: usize,
    pub title: &'static str,
    pub description: &'static str,
    pub emoji: &'static str,
    pub tags: Vec<&'static str>,
    pub navigation: Option<NavigationRequest>,
    pub hovered: bool,
    pub ring_class: &'static str,
    pub listens_for: PointerEvent,
}

impl CardView {
    /// Fragment URL for the state this card switches to on its next event
    pub fn toggle_url(&self) -> String {
        format!("/projects/{}/card?hovered={}", self.position, !self.hovered)
    }

    pub fn pointer_trigger(&self) -> &'static str {
        self.listens_for.hx_trigger()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::PLACEHOLDER_LINK;

    static LINKED: ProjectRecord = ProjectRecord {
        title: "Linked",
        description: "Has a destination",
        tags: &["Rust", "Axum"],
        emoji: "🦀",
        link: "https://example.com/linked",
    };

    static INERT: ProjectRecord = ProjectRecord {
        title: "Inert",
        description: "Placeholder link",
        tags: &[],
        emoji: "🕳",
        link: PLACEHOLDER_LINK,
    };

    #[test]
    fn test_new_card_is_not_hovered() {
        let card = ProjectCard::new(0, &LINKED);
        assert!(!card.hover().is_hovered());
        let view = card.render();
        assert!(!view.hovered);
        assert_eq!(view.ring_class, "");
        assert_eq!(view.listens_for.dom_name(), "mouseenter");
    }

    #[test]
    fn test_enter_then_leave_restores_view() {
        let mut card = ProjectCard::new(0, &LINKED);
        let before = card.render();

        card.on_pointer_enter();
        assert!(card.hover().is_hovered());
        let during = card.render();
        assert_eq!(during.ring_class, HOVER_RING_CLASS);
        assert_eq!(during.listens_for.dom_name(), "mouseleave");

        card.on_pointer_leave();
        assert_eq!(card.render(), before);
    }

    #[test]
    fn test_repeated_enter_is_idempotent() {
        let mut card = ProjectCard::new(0, &LINKED);
        card.on_pointer_enter();
        card.on_pointer_enter();
        assert!(card.hover().is_hovered());
        card.on_pointer_leave();
        assert!(!card.hover().is_hovered());
    }

    #[test]
    fn test_view_mirrors_record() {
        let view = ProjectCard::new(3, &LINKED).render();
        assert_eq!(view.position, 3);
        assert_eq!(view.title, "Linked");
        assert_eq!(view.description, "Has a destination");
        assert_eq!(view.emoji, "🦀");
        assert_eq!(view.tags, vec!["Rust", "Axum"]);
    }

    #[test]
    fn test_activate_with_destination() {
        let card = ProjectCard::new(0, &LINKED);
        assert_eq!(
            card.activate(),
            Some(NavigationRequest {
                url: "https://example.com/linked",
                target: BrowsingContext::New,
            })
        );
        assert_eq!(card.render().navigation, card.activate());
    }

    #[test]
    fn test_activate_placeholder_is_inert() {
        let card = ProjectCard::new(0, &INERT);
        assert_eq!(card.activate(), None);
        assert_eq!(card.render().navigation, None);
    }

    #[test]
    fn test_trigger_rechecks_pointer_after_swap() {
        let mut card = ProjectCard::new(0, &LINKED);
        assert_eq!(
            card.render().pointer_trigger(),
            "mouseenter, load[this.matches(':hover')]"
        );

        card.on_pointer_enter();
        assert_eq!(
            card.render().pointer_trigger(),
            "mouseleave, load[!this.matches(':hover')]"
        );
    }

    #[test]
    fn test_toggle_url_flips_state() {
        let mut card = ProjectCard::new(2, &INERT);
        assert_eq!(card.render().toggle_url(), "/projects/2/card?hovered=true");
        card.on_pointer_enter();
        assert_eq!(card.render().toggle_url(), "/projects/2/card?hovered=false");
    }
}
