//! One parametric CRUD component serving Worker, Client and JobAssignment.
//!
//! A resource is a [`Table`] plus its route base, display names and views.
//! [`resource_config`] registers the same six handlers for each of them:
//!
//! | Method | Path              | Handler     |
//! |--------|-------------------|-------------|
//! | GET    | `{base}`          | `list`      |
//! | GET    | `{base}/add`      | `add_form`  |
//! | POST   | `{base}/add`      | `create`    |
//! | GET    | `{base}/edit/{id}`| `edit_form` |
//! | POST   | `{base}/edit/{id}`| `update`    |
//! | GET    | `{base}/delete/{id}` | `delete` |

use actix_web::http::header;
use actix_web::web::{get, post, scope, Data, Form, Path, ServiceConfig};
use actix_web::HttpResponse;
use askama::Template;
use sqlx::SqlitePool;
use tracing::{info, warn};

use super::error::AppError;
use crate::db::repository::{self, Table};
use crate::views::render;

pub trait Resource: Table {
    /// Route base, e.g. `/workers`
    const ROUTE: &'static str;

    /// Singular display name, e.g. `Job Assignment`
    const LABEL: &'static str;

    /// Plural lowercase name used in messages, e.g. `job assignments`
    const PLURAL: &'static str;

    type ListView: Template;
    type AddView: Template;
    type EditView: Template;

    fn list_view(rows: Vec<Self::Row>) -> Self::ListView;

    /// Build the add form; resources may load auxiliary data here
    async fn add_view(pool: &SqlitePool) -> Result<Self::AddView, AppError>;

    /// Build the edit form for an existing row
    async fn edit_view(pool: &SqlitePool, row: Self::Row) -> Result<Self::EditView, AppError>;
}

fn noun<R: Resource>() -> String {
    R::LABEL.to_lowercase()
}

fn redirect_to_list<R: Resource>() -> HttpResponse {
    HttpResponse::Found()
        .insert_header((header::LOCATION, R::ROUTE))
        .finish()
}

async fn list<R: Resource>(pool: Data<SqlitePool>) -> Result<HttpResponse, AppError> {
    let rows = repository::list::<R>(&pool)
        .await
        .map_err(|e| AppError::store(format!("Error retrieving {}", R::PLURAL), e))?;

    render(R::list_view(rows))
}

async fn add_form<R: Resource>(pool: Data<SqlitePool>) -> Result<HttpResponse, AppError> {
    render(R::add_view(&pool).await?)
}

async fn create<R: Resource>(
    pool: Data<SqlitePool>,
    form: Form<R::Form>,
) -> Result<HttpResponse, AppError> {
    let id = repository::create::<R>(&pool, &form)
        .await
        .map_err(|e| AppError::store(format!("Error adding {}", noun::<R>()), e))?;

    info!("{} added successfully with ID {}", R::LABEL, id);
    Ok(redirect_to_list::<R>())
}

async fn edit_form<R: Resource>(
    pool: Data<SqlitePool>,
    path: Path<i64>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();

    let row = repository::find::<R>(&pool, id)
        .await
        .map_err(|e| AppError::store(format!("Error retrieving {}", noun::<R>()), e))?
        .ok_or(AppError::NotFound { label: R::LABEL })?;

    render(R::edit_view(&pool, row).await?)
}

async fn update<R: Resource>(
    pool: Data<SqlitePool>,
    path: Path<i64>,
    form: Form<R::Form>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();

    let updated = repository::update::<R>(&pool, id, &form)
        .await
        .map_err(|e| AppError::store(format!("Error updating {}", noun::<R>()), e))?;

    if updated == 0 {
        warn!("No {} with ID {} to update", noun::<R>(), id);
    } else {
        info!("{} with ID {} updated successfully", R::LABEL, id);
    }
    Ok(redirect_to_list::<R>())
}

async fn delete<R: Resource>(
    pool: Data<SqlitePool>,
    path: Path<i64>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();

    let deleted = repository::delete::<R>(&pool, id)
        .await
        .map_err(|e| AppError::store(format!("Error deleting {}", noun::<R>()), e))?;

    if deleted == 0 {
        warn!("No {} with ID {} to delete", noun::<R>(), id);
    } else {
        info!("{} with ID {} deleted successfully", R::LABEL, id);
    }
    Ok(redirect_to_list::<R>())
}

/// Register the list/add/edit/delete routes of one resource
pub fn resource_config<R: Resource>(config: &mut ServiceConfig) {
    config.service(
        scope(R::ROUTE)
            .route("", get().to(list::<R>))
            .route("/add", get().to(add_form::<R>))
            .route("/add", post().to(create::<R>))
            .route("/edit/{id}", get().to(edit_form::<R>))
            .route("/edit/{id}", post().to(update::<R>))
            .route("/delete/{id}", get().to(delete::<R>)),
    );
}
