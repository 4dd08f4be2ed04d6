//! Project Catalog
//!
//! The fixed data set behind the portfolio: the ordered project records, the
//! ordered social links, and the banner/footer copy. Everything is embedded as
//! compile-time constants and checked once at load time.
//!
//! Titles and tags double as render keys, so `Catalog::new` rejects duplicate
//! titles, duplicate tags inside one record, and duplicate social labels. The
//! call-to-action anchor must be a usable element id.

use std::collections::HashSet;

use serde::Serialize;
use thiserror::Error;

use crate::icons::IconRef;

/// Link value meaning "no destination"
pub const PLACEHOLDER_LINK: &str = "#";

// ============================================================================
// Records
// ============================================================================

/// One project shown as a card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProjectRecord {
    /// Unique within the catalog; used as the card's render key
    pub title: &'static str,
    pub description: &'static str,
    /// Rendered in order
    pub tags: &'static [&'static str],
    /// Single-glyph visual marker
    pub emoji: &'static str,
    /// Absolute URL, or "#" for no destination
    pub link: &'static str,
}

impl ProjectRecord {
    pub fn has_destination(&self) -> bool {
        self.link != PLACEHOLDER_LINK
    }
}

/// Social/contact link shown in the navbar and footer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SocialLink {
    pub label: &'static str,
    /// Conventional URL or `mailto:` URI
    pub href: &'static str,
    pub icon: IconRef,
}

/// Banner and footer copy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SiteProfile {
    pub brand: &'static str,
    pub headline: &'static str,
    pub tagline: &'static str,
    pub cta_label: &'static str,
    /// Element id of the projects section the call-to-action jumps to
    pub cta_anchor: &'static str,
    pub built_with: &'static str,
}

// ============================================================================
// Built-in Data
// ============================================================================

pub const PROFILE: SiteProfile = SiteProfile {
    brand: "My Portfolio",
    headline: "Hi, I'm a MERN & AI Developer",
    tagline: "I build modern web apps and smart AI solutions. Explore my projects below!",
    cta_label: "View Projects",
    cta_anchor: "projects",
    built_with: "Built with Rust, Axum & Askama",
};

pub const PROJECTS: &[ProjectRecord] = &[
    ProjectRecord {
        title: "AI Agent Platform",
        description: "A platform for building, deploying, and managing autonomous AI agents with natural language interfaces.",
        tags: &["AI", "Agents", "Next.js", "LangChain", "OpenAI"],
        emoji: "🤖",
        link: PLACEHOLDER_LINK,
    },
    ProjectRecord {
        title: "MERN Task Manager",
        description: "A full-featured task manager app built with MongoDB, Express, React, and Node.js.",
        tags: &["MERN", "React", "Node.js", "MongoDB"],
        emoji: "📋",
        link: PLACEHOLDER_LINK,
    },
    ProjectRecord {
        title: "Realtime Chat App",
        description: "A real-time chat application with group and private messaging, built on the MERN stack.",
        tags: &["MERN", "Socket.io", "Chat", "React"],
        emoji: "💬",
        link: PLACEHOLDER_LINK,
    },
    ProjectRecord {
        title: "AI Image Generator",
        description: "Generate stunning images from text prompts using advanced AI models.",
        tags: &["AI", "Stable Diffusion", "Next.js"],
        emoji: "🎨",
        link: PLACEHOLDER_LINK,
    },
];

pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink {
        label: "GitHub",
        href: "https://github.com/",
        icon: IconRef::GitHub,
    },
    SocialLink {
        label: "LinkedIn",
        href: "https://linkedin.com/",
        icon: IconRef::LinkedIn,
    },
    SocialLink {
        label: "Email",
        href: "mailto:your@email.com",
        icon: IconRef::Mail,
    },
];

// ============================================================================
// Validation
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("call-to-action anchor {anchor:?} is not a usable element id")]
    InvalidAnchor { anchor: String },

    #[error("project at position {position} has an empty title")]
    EmptyTitle { position: usize },

    #[error("duplicate project title {title:?}")]
    DuplicateTitle { title: String },

    #[error("project {title:?} repeats tag {tag:?}")]
    DuplicateTag { title: String, tag: String },

    #[error("project {title:?} has invalid link {link:?} (expected \"#\" or an absolute http(s) URL)")]
    InvalidLink { title: String, link: String },

    #[error("duplicate social link label {label:?}")]
    DuplicateSocialLabel { label: String },

    #[error("social link {label:?} has invalid href {href:?}")]
    InvalidSocialHref { label: String, href: String },
}

fn is_absolute_http_url(value: &str) -> bool {
    ["http://", "https://"]
        .iter()
        .any(|scheme| value.len() > scheme.len() && value.starts_with(scheme))
}

/// Non-empty, no whitespace, no leading '#'
fn is_element_id(value: &str) -> bool {
    !value.is_empty() && !value.starts_with('#') && !value.chars().any(char::is_whitespace)
}

fn is_mailto(value: &str) -> bool {
    value.len() > "mailto:".len() && value.starts_with("mailto:")
}

// ============================================================================
// Catalog
// ============================================================================

/// Validated, read-only view over the portfolio data
#[derive(Debug, Clone, Copy)]
pub struct Catalog {
    profile: &'static SiteProfile,
    projects: &'static [ProjectRecord],
    socials: &'static [SocialLink],
}

impl Catalog {
    /// Validate and wrap a data set
    pub fn new(
        profile: &'static SiteProfile,
        projects: &'static [ProjectRecord],
        socials: &'static [SocialLink],
    ) -> Result<Self, CatalogError> {
        if !is_element_id(profile.cta_anchor) {
            return Err(CatalogError::InvalidAnchor {
                anchor: profile.cta_anchor.to_string(),
            });
        }

        let mut titles = HashSet::with_capacity(projects.len());
        for (position, project) in projects.iter().enumerate() {
            if project.title.trim().is_empty() {
                return Err(CatalogError::EmptyTitle { position });
            }
            if !titles.insert(project.title) {
                return Err(CatalogError::DuplicateTitle {
                    title: project.title.to_string(),
                });
            }

            let mut tags = HashSet::with_capacity(project.tags.len());
            for tag in project.tags {
                if !tags.insert(*tag) {
                    return Err(CatalogError::DuplicateTag {
                        title: project.title.to_string(),
                        tag: tag.to_string(),
                    });
                }
            }

            if project.has_destination() && !is_absolute_http_url(project.link) {
                return Err(CatalogError::InvalidLink {
                    title: project.title.to_string(),
                    link: project.link.to_string(),
                });
            }
        }

        let mut labels = HashSet::with_capacity(socials.len());
        for social in socials {
            if !labels.insert(social.label) {
                return Err(CatalogError::DuplicateSocialLabel {
                    label: social.label.to_string(),
                });
            }
            if !is_absolute_http_url(social.href) && !is_mailto(social.href) {
                return Err(CatalogError::InvalidSocialHref {
                    label: social.label.to_string(),
                    href: social.href.to_string(),
                });
            }
        }

        Ok(Self { profile, projects, socials })
    }

    /// The data set compiled into the binary
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::new(&PROFILE, PROJECTS, SOCIAL_LINKS)
    }

    pub fn profile(&self) -> &'static SiteProfile {
        self.profile
    }

    /// Project records in display order
    pub fn projects(&self) -> &'static [ProjectRecord] {
        self.projects
    }

    /// Social links in display order
    pub fn socials(&self) -> &'static [SocialLink] {
        self.socials
    }

    pub fn project(&self, position: usize) -> Option<&'static ProjectRecord> {
        self.projects.get(position)
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }
}
