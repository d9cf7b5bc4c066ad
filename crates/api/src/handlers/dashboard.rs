//! Dashboard HTML handlers.
//!
//! Mutations follow post/redirect/get: success answers `303 See Other` back
//! to `/dashboard`, failure re-renders the dashboard with the error inline.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::Form;
use galleria_core::artwork::Artwork;
use galleria_core::validation::FormErrors;

use crate::actions::{self, ActionError, CreateError, MSG_CREATE_FAILED};
use crate::forms::ArtworkForm;
use crate::query::DashboardParams;
use crate::state::AppState;
use crate::views::dashboard::{render_dashboard, DashboardNotice, DashboardView};

const DASHBOARD_PATH: &str = "/dashboard";

/// GET /dashboard
///
/// `?add=true` opens the add-artwork dialog.
pub async fn dashboard(
    State(state): State<AppState>,
    Query(params): Query<DashboardParams>,
) -> Html<String> {
    if params.add {
        let form = ArtworkForm::default();
        let errors = FormErrors::default();
        return render(&state, Some((&form, &errors)), None).await;
    }

    if let Some(html) = state.pages.get(DASHBOARD_PATH).await {
        return Html(html);
    }
    let generation = state.pages.generation().await;
    let listing = state.gallery.listing(true).await;
    let html = render_listing(&listing.artworks, None, None);
    if !listing.degraded {
        state.pages.insert(DASHBOARD_PATH, html.0.clone(), generation).await;
    }
    html
}

/// POST /dashboard/artworks
pub async fn create_artwork(
    State(state): State<AppState>,
    Form(form): Form<ArtworkForm>,
) -> Response {
    match actions::create_artwork(&state, form.to_draft()).await {
        Ok(_) => Redirect::to(DASHBOARD_PATH).into_response(),
        Err(CreateError::Invalid(errors)) => {
            let html = render(&state, Some((&form, &errors)), None).await;
            (StatusCode::UNPROCESSABLE_ENTITY, html).into_response()
        }
        Err(CreateError::Store(_)) => {
            let errors = FormErrors::general(MSG_CREATE_FAILED);
            let html = render(&state, Some((&form, &errors)), None).await;
            (StatusCode::INTERNAL_SERVER_ERROR, html).into_response()
        }
    }
}

/// POST /dashboard/artworks/{id}/toggle
pub async fn toggle_artwork(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    match actions::toggle_artwork_visibility(&state, &id).await {
        Ok(_) => Redirect::to(DASHBOARD_PATH).into_response(),
        Err(err) => action_failed(&state, &id, err, actions::MSG_TOGGLE_FAILED).await,
    }
}

/// POST /dashboard/artworks/{id}/delete
pub async fn delete_artwork(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    match actions::delete_artwork(&state, &id).await {
        Ok(()) => Redirect::to(DASHBOARD_PATH).into_response(),
        Err(err) => action_failed(&state, &id, err, actions::MSG_DELETE_FAILED).await,
    }
}

/// Re-render the dashboard with the failure pinned to the affected row.
async fn action_failed(
    state: &AppState,
    raw_id: &str,
    err: ActionError,
    store_message: &str,
) -> Response {
    let (status, notice) = match &err {
        ActionError::MissingId | ActionError::InvalidId(_) => (
            StatusCode::BAD_REQUEST,
            DashboardNotice {
                artwork_id: None,
                message: err.to_string(),
            },
        ),
        ActionError::NotFound(id) => (
            StatusCode::NOT_FOUND,
            DashboardNotice {
                artwork_id: None,
                message: format!("Artwork {id} no longer exists"),
            },
        ),
        ActionError::Store(_) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            DashboardNotice {
                artwork_id: actions::parse_artwork_id(raw_id).ok(),
                message: store_message.to_string(),
            },
        ),
    };
    let html = render(state, None, Some(&notice)).await;
    (status, html).into_response()
}

async fn render(
    state: &AppState,
    form: Option<(&ArtworkForm, &FormErrors)>,
    notice: Option<&DashboardNotice>,
) -> Html<String> {
    let artworks = state.gallery.all_paintings(true).await;
    render_listing(&artworks, form, notice)
}

fn render_listing(
    artworks: &[Artwork],
    form: Option<(&ArtworkForm, &FormErrors)>,
    notice: Option<&DashboardNotice>,
) -> Html<String> {
    let view = DashboardView {
        artworks,
        form,
        notice,
    };
    Html(render_dashboard(&view).into_string())
}
