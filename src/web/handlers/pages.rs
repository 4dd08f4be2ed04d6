// Page handlers for HTML rendering with Askama

use axum::{
    extract::{Path, Query, State},
    response::{Html, IntoResponse, Redirect, Response},
};
use axum_htmx::HxRequest;
use serde::Deserialize;

use crate::api_server::{AppError, AppState};
use crate::card::ProjectCard;
use crate::page::PageComposer;
use crate::render::{render_card, render_page};

// ============================================================================
// Home Page
// ============================================================================

pub async fn home_page(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let page = PageComposer::new(state.catalog, &*state.clock).compose();
    let html = render_page(&page.view())?;
    Ok(Html(html))
}

// ============================================================================
// Card Fragment
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct CardQuery {
    pub hovered: Option<String>,
}

impl CardQuery {
    /// Missing means `false`; anything but "true"/"false" is rejected
    pub fn hovered(&self) -> Result<bool, AppError> {
        match self.hovered.as_deref() {
            None | Some("false") => Ok(false),
            Some("true") => Ok(true),
            Some(other) => Err(AppError::BadRequest(format!(
                "hovered must be \"true\" or \"false\", got {:?}",
                other
            ))),
        }
    }
}

/// Re-render one card after a pointer event.
///
/// The client sends the state it is switching to; the card is rebuilt from
/// its record and the matching event is applied, so no hover state is kept
/// on the server.
pub async fn project_card(
    State(state): State<AppState>,
    HxRequest(is_htmx): HxRequest,
    Path(position): Path<usize>,
    Query(query): Query<CardQuery>,
) -> Result<Response, AppError> {
    if !is_htmx {
        let anchor = format!("/#{}", state.catalog.profile().cta_anchor);
        return Ok(Redirect::to(&anchor).into_response());
    }

    let record = state
        .catalog
        .project(position)
        .ok_or_else(|| AppError::NotFound(format!("no project at position {}", position)))?;

    let hovered = query.hovered()?;

    let mut card = ProjectCard::new(position, record);
    if hovered {
        card.on_pointer_enter();
    } else {
        card.on_pointer_leave();
    }
    tracing::debug!(title = card.title(), hovered, "card pointer event");

    Ok(Html(render_card(&card.render())?).into_response())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(hovered: Option<&str>) -> CardQuery {
        CardQuery { hovered: hovered.map(str::to_string) }
    }

    #[test]
    fn test_hovered_parsing() {
        assert!(!query(None).hovered().unwrap());
        assert!(!query(Some("false")).hovered().unwrap());
        assert!(query(Some("true")).hovered().unwrap());
        assert!(matches!(query(Some("yes")).hovered(), Err(AppError::BadRequest(_))));
    }
}
