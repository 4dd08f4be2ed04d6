//! Glyph References
//!
//! Symbolic names for the line icons used in the navbar, banner, section
//! headers and social links. Templates only ever see the resolved SVG markup.

use serde::Serialize;

/// Symbolic reference to a visual glyph (lucide outline set)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum IconRef {
    #[serde(rename = "github")]
    GitHub,
    #[serde(rename = "linkedin")]
    LinkedIn,
    #[serde(rename = "mail")]
    Mail,
    #[serde(rename = "sparkles")]
    Sparkles,
    #[serde(rename = "arrow-right")]
    ArrowRight,
    #[serde(rename = "layout-dashboard")]
    LayoutDashboard,
}

impl IconRef {
    /// Icon name as used by the lucide set
    pub fn name(&self) -> &'static str {
        match self {
            IconRef::GitHub => "github",
            IconRef::LinkedIn => "linkedin",
            IconRef::Mail => "mail",
            IconRef::Sparkles => "sparkles",
            IconRef::ArrowRight => "arrow-right",
            IconRef::LayoutDashboard => "layout-dashboard",
        }
    }

    pub fn svg_path(&self) -> &'static str {
        match self {
            IconRef::GitHub => r#"<path d="M15 22v-4a4.8 4.8 0 0 0-1-3.5c3 0 6-2 6-5.5.08-1.25-.27-2.48-1-3.5.28-1.15.28-2.35 0-3.5 0 0-1 0-3 1.5-2.64-.5-5.36-.5-8 0C6 2 5 2 5 2c-.3 1.15-.3 2.35 0 3.5A5.403 5.403 0 0 0 4 9c0 3.5 3 5.5 6 5.5-.39.49-.68 1.05-.85 1.65-.17.6-.22 1.23-.15 1.85v4"/><path d="M9 18c-4.51 2-5-2-7-2"/>"#,
            IconRef::LinkedIn => r#"<path d="M16 8a6 6 0 0 1 6 6v7h-4v-7a2 2 0 0 0-2-2 2 2 0 0 0-2 2v7h-4v-7a6 6 0 0 1 6-6z"/><rect width="4" height="12" x="2" y="9"/><circle cx="4" cy="4" r="2"/>"#,
            IconRef::Mail => r#"<rect width="20" height="16" x="2" y="4" rx="2"/><path d="m22 7-8.97 5.7a1.94 1.94 0 0 1-2.06 0L2 7"/>"#,
            IconRef::Sparkles => r#"<path d="m12 3-1.912 5.813a2 2 0 0 1-1.275 1.275L3 12l5.813 1.912a2 2 0 0 1 1.275 1.275L12 21l1.912-5.813a2 2 0 0 1 1.275-1.275L21 12l-5.813-1.912a2 2 0 0 1-1.275-1.275L12 3Z"/><path d="M5 3v4"/><path d="M19 17v4"/><path d="M3 5h4"/><path d="M17 19h4"/>"#,
            IconRef::ArrowRight => r#"<path d="M5 12h14"/><path d="m12 5 7 7-7 7"/>"#,
            IconRef::LayoutDashboard => r#"<rect width="7" height="9" x="3" y="3" rx="1"/><rect width="7" height="5" x="14" y="3" rx="1"/><rect width="7" height="9" x="14" y="12" rx="1"/><rect width="7" height="5" x="3" y="16" rx="1"/>"#,
        }
    }

    /// Complete inline `<svg>` element with the given utility classes
    pub fn svg(&self, class: &str) -> String {
        format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" class="{}" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" aria-hidden="true">{}</svg>"#,
            class,
            self.svg_path()
        )
    }
}
