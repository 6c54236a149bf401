//! JSON API over the site's content and theme

use anyhow::Result;
use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post, put},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::sync::Mutex;
use tower_http::trace::TraceLayer;

use crate::commands::list::{select_posts, select_projects, ListOptions};
use crate::content::{BlogPost, Project, ProjectCategory};
use crate::theme::{FileStore, StyleSheet, Theme, ThemeError, ThemeResolver};
use crate::Folio;

/// Server state
pub struct AppState {
    folio: Folio,
    resolver: Mutex<ThemeResolver<FileStore, StyleSheet>>,
}

impl AppState {
    pub fn new(folio: Folio) -> Self {
        let resolver = Mutex::new(folio.theme_resolver());
        Self { folio, resolver }
    }
}

/// Error returned to API clients as `{"error": "..."}`
#[derive(Debug)]
pub enum ApiError {
    NotFound(String),
    BadRequest(String),
    Internal(String),
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Internal(msg) => {
                tracing::error!("Request failed: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, msg)
            }
        };
        (status, Json(ErrorBody { error })).into_response()
    }
}

impl From<ThemeError> for ApiError {
    fn from(e: ThemeError) -> Self {
        match e {
            ThemeError::UnknownTheme(_) => ApiError::BadRequest(e.to_string()),
            other => ApiError::Internal(other.to_string()),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct PostQuery {
    pub tag: Option<String>,
    pub limit: Option<usize>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ProjectQuery {
    pub category: Option<String>,
    pub featured: Option<bool>,
    pub limit: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct CategoryInfo {
    pub id: &'static str,
    pub name: &'static str,
    pub glyph: &'static str,
    pub description: &'static str,
}

/// Build the application router
pub fn router(folio: Folio) -> Router {
    let state = Arc::new(AppState::new(folio));

    Router::new()
        .route("/api/blog", get(list_posts))
        .route("/api/blog/:slug", get(get_post))
        .route("/api/tags", get(list_tags))
        .route("/api/projects", get(list_projects))
        .route("/api/projects/:slug", get(get_project))
        .route("/api/categories", get(list_categories))
        .route("/api/theme", get(current_theme))
        .route("/api/themes", get(list_themes))
        .route("/api/theme/cycle", post(cycle_theme))
        .route("/api/theme/:name", put(set_theme))
        .route("/theme.css", get(theme_css))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Start the API server
pub async fn start(folio: &Folio, ip: &str, port: u16) -> Result<()> {
    let app = router(folio.clone());

    // Parse address - handle "localhost" specially
    let bind_ip = if ip == "localhost" { "127.0.0.1" } else { ip };
    let addr: SocketAddr = format!("{}:{}", bind_ip, port).parse()?;

    println!("Server running at http://{}:{}", ip, port);
    println!("Press Ctrl+C to stop.");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn list_posts(
    State(state): State<Arc<AppState>>,
    Query(query): Query<PostQuery>,
) -> Json<Vec<BlogPost>> {
    let options = ListOptions {
        limit: query.limit,
        tag: query.tag,
        ..Default::default()
    };
    Json(select_posts(&state.folio.content(), &options))
}

async fn get_post(
    State(state): State<Arc<AppState>>,
    Path(slug): Path<String>,
) -> Result<Json<BlogPost>, ApiError> {
    state
        .folio
        .content()
        .blog_post(&slug)
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("Post not found: {}", slug)))
}

async fn list_tags(State(state): State<Arc<AppState>>) -> Json<Vec<String>> {
    Json(state.folio.content().tags())
}

async fn list_projects(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ProjectQuery>,
) -> Result<Json<Vec<Project>>, ApiError> {
    let options = ListOptions {
        limit: query.limit,
        category: query.category,
        featured: query.featured.unwrap_or(false),
        ..Default::default()
    };
    select_projects(&state.folio.content(), &options)
        .map(Json)
        .map_err(|e| ApiError::BadRequest(e.to_string()))
}

async fn get_project(
    State(state): State<Arc<AppState>>,
    Path(slug): Path<String>,
) -> Result<Json<Project>, ApiError> {
    state
        .folio
        .content()
        .project(&slug)
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("Project not found: {}", slug)))
}

async fn list_categories() -> Json<Vec<CategoryInfo>> {
    Json(
        ProjectCategory::ALL
            .iter()
            .map(|c| CategoryInfo {
                id: c.id(),
                name: c.name(),
                glyph: c.glyph(),
                description: c.description(),
            })
            .collect(),
    )
}

async fn current_theme(State(state): State<Arc<AppState>>) -> Json<&'static Theme> {
    Json(state.resolver.lock().await.current())
}

async fn list_themes() -> Json<Vec<&'static Theme>> {
    Json(Theme::all().to_vec())
}

async fn set_theme(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
) -> Result<Json<&'static Theme>, ApiError> {
    let mut resolver = state.resolver.lock().await;
    Ok(Json(resolver.set_theme_by_name(&name)?))
}

async fn cycle_theme(State(state): State<Arc<AppState>>) -> Result<Json<&'static Theme>, ApiError> {
    let mut resolver = state.resolver.lock().await;
    Ok(Json(resolver.cycle()?))
}

async fn theme_css(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let css = state.resolver.lock().await.scope().to_css();
    ([(header::CONTENT_TYPE, "text/css; charset=utf-8")], css)
}
