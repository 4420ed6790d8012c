//! Askama view models, one per rendered page.
//!
//! Views hold rows straight from the store; templates under `templates/`
//! do the presentation.

pub mod clients;
pub mod job_assignments;
pub mod workers;

use actix_web::http::header::ContentType;
use actix_web::HttpResponse;
use askama::Template;

use crate::api::error::AppError;

pub use clients::{AddClientView, ClientListView, EditClientView};
pub use job_assignments::{AddJobAssignmentView, EditJobAssignmentView, JobAssignmentListView};
pub use workers::{AddWorkerView, EditWorkerView, WorkerListView};

/// Landing page
#[derive(Template)]
#[template(path = "home.html")]
pub struct HomeView;

/// Render a view into an HTML response
pub fn render<T: Template>(template: T) -> Result<HttpResponse, AppError> {
    let html = template.render().map_err(AppError::Render)?;

    Ok(HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(html))
}
