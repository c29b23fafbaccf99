//! Preview server for the blog pages
//!
//! Every request re-reads the content directory, so edits to post files are
//! visible on the next page load without a restart.

use anyhow::Result;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::listing::{DetailError, TagFilter};
use crate::templates::TemplateRenderer;
use crate::Blog;

/// Server state
pub struct ServerState {
    blog: Blog,
    templates: TemplateRenderer,
}

impl ServerState {
    pub fn new(blog: Blog) -> Result<Self> {
        Ok(Self {
            blog,
            templates: TemplateRenderer::new()?,
        })
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct ListingQuery {
    tag: Option<String>,
    #[serde(default)]
    featured: bool,
}

impl ListingQuery {
    /// Selected tag; an empty `?tag=` counts as no selection
    fn tag(&self) -> Option<&str> {
        self.tag.as_deref().filter(|tag| !tag.is_empty())
    }

    fn filter(&self) -> TagFilter {
        self.tag().map(TagFilter::from_selection).unwrap_or_default()
    }
}

/// Build the application router
pub fn router(state: Arc<ServerState>) -> Router {
    Router::new()
        .route("/", get(|| async { Redirect::permanent("/blog") }))
        .route("/blog", get(listing_page))
        .route("/blog/:slug", get(detail_page))
        .route("/api/posts", get(api_posts))
        .route("/api/posts/:slug", get(api_post))
        .route("/api/tags", get(api_tags))
        .fallback(not_found_page)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Start the preview server
pub async fn start(blog: Blog, ip: &str, port: u16) -> Result<()> {
    let state = Arc::new(ServerState::new(blog)?);
    let app = router(state);

    // Parse address - handle "localhost" specially
    let bind_ip = if ip == "localhost" { "127.0.0.1" } else { ip };
    let addr: SocketAddr = format!("{}:{}", bind_ip, port).parse()?;

    println!("Server running at http://{}:{}/blog", ip, port);
    println!("Press Ctrl+C to stop.");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn listing_page(
    State(state): State<Arc<ServerState>>,
    Query(query): Query<ListingQuery>,
) -> Response {
    let view = {
        let state = Arc::clone(&state);
        tokio::task::spawn_blocking(move || state.blog.listing(query.filter())).await
    };

    match view {
        Ok(view) => match state.templates.render_listing(&view) {
            Ok(html) => Html(html).into_response(),
            Err(e) => internal_error(e),
        },
        Err(e) => internal_error(e.into()),
    }
}

async fn detail_page(
    State(state): State<Arc<ServerState>>,
    Path(slug): Path<String>,
) -> Response {
    let detail = {
        let state = Arc::clone(&state);
        let slug = slug.clone();
        tokio::task::spawn_blocking(move || state.blog.detail(&slug)).await
    };

    match detail {
        Ok(Ok(view)) => match state.templates.render_detail(&view) {
            Ok(html) => Html(html).into_response(),
            Err(e) => internal_error(e),
        },
        Ok(Err(DetailError::NotFound(_))) => {
            render_not_found(&state, &format!("Post \"{}\" was not found.", slug))
        }
        Ok(Err(e)) => {
            tracing::error!("{}", e);
            internal_error(e.into())
        }
        Err(e) => internal_error(e.into()),
    }
}

async fn not_found_page(State(state): State<Arc<ServerState>>) -> Response {
    render_not_found(&state, "The page you are looking for does not exist.")
}

fn render_not_found(state: &ServerState, message: &str) -> Response {
    match state.templates.render_not_found(message) {
        Ok(html) => (StatusCode::NOT_FOUND, Html(html)).into_response(),
        Err(e) => internal_error(e),
    }
}

async fn api_posts(
    State(state): State<Arc<ServerState>>,
    Query(query): Query<ListingQuery>,
) -> Response {
    let posts = tokio::task::spawn_blocking(move || {
        let repo = state.blog.repository();
        match (query.tag(), query.featured) {
            (_, true) => {
                let filter = query.filter();
                repo.get_featured()
                    .into_iter()
                    .filter(|p| filter.matches(p))
                    .collect()
            }
            (Some(tag), false) if tag != crate::listing::ALL => repo.get_by_tag(tag),
            _ => repo.get_all(),
        }
    })
    .await;

    match posts {
        Ok(posts) => Json(posts).into_response(),
        Err(e) => internal_error(e.into()),
    }
}

async fn api_post(State(state): State<Arc<ServerState>>, Path(slug): Path<String>) -> Response {
    let detail = {
        let state = Arc::clone(&state);
        tokio::task::spawn_blocking(move || state.blog.detail(&slug)).await
    };

    match detail {
        Ok(Ok(view)) => Json(view).into_response(),
        Ok(Err(e @ DetailError::NotFound(_))) => (
            StatusCode::NOT_FOUND,
            Json(serde_json::json!({ "error": e.to_string() })),
        )
            .into_response(),
        Ok(Err(e)) => internal_error(e.into()),
        Err(e) => internal_error(e.into()),
    }
}

async fn api_tags(State(state): State<Arc<ServerState>>) -> Response {
    match tokio::task::spawn_blocking(move || state.blog.repository().get_all_tags()).await {
        Ok(tags) => Json(tags).into_response(),
        Err(e) => internal_error(e.into()),
    }
}

fn internal_error(e: anyhow::Error) -> Response {
    tracing::error!("Request failed: {:#}", e);
    (StatusCode::INTERNAL_SERVER_ERROR, "Server error").into_response()
}
