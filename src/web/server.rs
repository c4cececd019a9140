//! HTTP server implementation for the task pages.
//!
//! Every handler performs at most one store call and either renders a page
//! or redirects.

use axum::{
    Router,
    extract::{Form, Path, State},
    response::{Html, Redirect},
    routing::{get, post},
};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tower_http::trace::TraceLayer;
use tracing::{debug, info};

use super::templates;
use crate::db::Database;
use crate::error::{AppError, AppResult};
use crate::types::TaskInput;

/// State shared across handlers.
#[derive(Clone)]
pub struct TaskServer {
    /// Connection factory for the task store.
    db: Arc<Database>,
}

impl TaskServer {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    /// Run a store call on the blocking pool.
    async fn run<F, T>(&self, f: F) -> AppResult<T>
    where
        F: FnOnce(&Database) -> anyhow::Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let db = Arc::clone(&self.db);
        Ok(tokio::task::spawn_blocking(move || f(db.as_ref())).await??)
    }
}

/// Ids that do not parse as integers are treated as missing tasks.
fn parse_id(raw: &str) -> AppResult<i64> {
    raw.parse().map_err(|_| AppError::NotFound)
}

/// Task list, newest first.
async fn index(State(state): State<TaskServer>) -> AppResult<Html<String>> {
    let tasks = state.run(|db| db.list_tasks()).await?;
    Ok(Html(templates::render_index(&tasks)))
}

/// New task form.
async fn add_form() -> Html<String> {
    Html(templates::render_add())
}

/// Create a task. Blank titles are dropped without an error.
async fn create_task(
    State(state): State<TaskServer>,
    Form(input): Form<TaskInput>,
) -> AppResult<Redirect> {
    if input.is_blank() {
        debug!("Ignoring task with blank title");
    } else {
        let id = state
            .run(move |db| db.create_task(input.title(), input.desc()))
            .await?;
        debug!(task_id = ?id, "Task created");
    }
    Ok(Redirect::to("/"))
}

/// Task detail page.
async fn task_detail(
    State(state): State<TaskServer>,
    Path(raw_id): Path<String>,
) -> AppResult<Html<String>> {
    let id = parse_id(&raw_id)?;
    let task = state
        .run(move |db| db.get_task(id))
        .await?
        .ok_or(AppError::NotFound)?;
    Ok(Html(templates::render_task(&task)))
}

/// Edit form, pre-filled with the current values.
async fn edit_form(
    State(state): State<TaskServer>,
    Path(raw_id): Path<String>,
) -> AppResult<Html<String>> {
    let id = parse_id(&raw_id)?;
    let task = state
        .run(move |db| db.get_task(id))
        .await?
        .ok_or(AppError::NotFound)?;
    Ok(Html(templates::render_edit(&task)))
}

/// Apply an edit, then show the task. Unknown ids are a silent no-op.
async fn update_task(
    State(state): State<TaskServer>,
    Path(raw_id): Path<String>,
    Form(input): Form<TaskInput>,
) -> AppResult<Redirect> {
    let id = parse_id(&raw_id)?;
    let changed = state
        .run(move |db| db.update_task(id, input.title(), input.desc()))
        .await?;
    debug!(task_id = id, changed, "Task update handled");
    Ok(Redirect::to(&format!("/task/{}", id)))
}

/// Delete a task. Unknown ids are a silent no-op.
async fn delete_task(
    State(state): State<TaskServer>,
    Path(raw_id): Path<String>,
) -> AppResult<Redirect> {
    let id = parse_id(&raw_id)?;
    let removed = state.run(move |db| db.delete_task(id)).await?;
    debug!(task_id = id, removed, "Task delete handled");
    Ok(Redirect::to("/"))
}

/// Liveness check.
async fn health() -> &'static str {
    "ok"
}

/// Build the router with all routes.
pub fn build_router(state: TaskServer) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/add", get(add_form))
        .route("/create", post(create_task))
        .route("/task/{id}", get(task_detail))
        .route("/edit/{id}", get(edit_form))
        .route("/update/{id}", post(update_task))
        .route("/delete/{id}", post(delete_task))
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Handle for a running server.
pub struct ServerHandle {
    addr: SocketAddr,
    shutdown_tx: Option<oneshot::Sender<()>>,
    task: JoinHandle<()>,
}

impl ServerHandle {
    /// Address the server is bound to.
    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// Stop accepting connections and wait for in-flight requests to finish.
    pub async fn shutdown(mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
        let _ = self.task.await;
    }
}

/// Start the HTTP server on the given address.
///
/// Port 0 binds an ephemeral port; the handle reports the actual address.
pub async fn start_server(db: Arc<Database>, addr: SocketAddr) -> anyhow::Result<ServerHandle> {
    let app = build_router(TaskServer::new(db));

    let listener = tokio::net::TcpListener::bind(addr).await?;
    let bound_addr = listener.local_addr()?;

    info!("Task list listening on http://{}", bound_addr);

    let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

    let task = tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app)
            .with_graceful_shutdown(async {
                let _ = shutdown_rx.await;
                info!("Task list server shutting down");
            })
            .await
        {
            tracing::error!("Server error: {}", e);
        }
    });

    Ok(ServerHandle {
        addr: bound_addr,
        shutdown_tx: Some(shutdown_tx),
        task,
    })
}
