use serde::Deserialize;
use sqlx::SqlitePool;

use super::error::AppError;
use super::forms::empty_as_none;
use super::resource::Resource;
use crate::db::models::WorkerRow;
use crate::db::repository::{SqliteQuery, Table};
use crate::views::{AddWorkerView, EditWorkerView, WorkerListView};

/// Submitted worker fields
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkerForm {
    pub name: String,
    pub address: String,
    pub contact_info: String,
    pub skills: String,
    /// Blank means the worker is unassigned
    #[serde(default, deserialize_with = "empty_as_none")]
    pub assignment_id: Option<i64>,
}

pub struct Workers;

impl Table for Workers {
    const TABLE: &'static str = "Worker";
    const KEY: &'static str = "WorkerID";
    const COLUMNS: &'static [&'static str] =
        &["Name", "Address", "ContactInfo", "Skills", "AssignmentID"];

    type Row = WorkerRow;
    type Form = WorkerForm;

    fn bind<'q>(form: &'q WorkerForm, query: SqliteQuery<'q>) -> SqliteQuery<'q> {
        query
            .bind(&form.name)
            .bind(&form.address)
            .bind(&form.contact_info)
            .bind(&form.skills)
            .bind(form.assignment_id)
    }
}

impl Resource for Workers {
    const ROUTE: &'static str = "/workers";
    const LABEL: &'static str = "Worker";
    const PLURAL: &'static str = "workers";

    type ListView = WorkerListView;
    type AddView = AddWorkerView;
    type EditView = EditWorkerView;

    fn list_view(workers: Vec<WorkerRow>) -> WorkerListView {
        WorkerListView { workers }
    }

    async fn add_view(_pool: &SqlitePool) -> Result<AddWorkerView, AppError> {
        Ok(AddWorkerView)
    }

    async fn edit_view(_pool: &SqlitePool, worker: WorkerRow) -> Result<EditWorkerView, AppError> {
        Ok(EditWorkerView { worker })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::testing::{body_text, location, post_form};
    use crate::db::{connection, repository};
    use actix_web::test;

    fn worker_fields<'a>(name: &'a str, assignment_id: &'a str) -> [(&'a str, &'a str); 5] {
        [
            ("name", name),
            ("address", "9 Elm Rd"),
            ("contactInfo", "555-0100"),
            ("skills", "forklift, first aid"),
            ("assignmentId", assignment_id),
        ]
    }

    #[actix_web::test]
    async fn add_without_assignment_stores_null() {
        let pool = connection::in_memory().await;
        let app = test::init_service(crate::api::testing::app(pool.clone())).await;

        let req = post_form("/workers/add", &worker_fields("Dana", "")).to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status().as_u16(), 302);
        assert_eq!(location(&resp), "/workers");

        let rows = repository::list::<Workers>(&pool).await.unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].name, "Dana");
        assert_eq!(rows[0].skills, "forklift, first aid");
        assert_eq!(rows[0].assignment_id, None);

        let req = test::TestRequest::get().uri("/workers").to_request();
        let html = body_text(test::call_service(&app, req).await).await;
        assert!(html.contains("Dana"));
    }

    #[actix_web::test]
    async fn edit_overwrites_and_can_set_assignment() {
        let pool = connection::in_memory().await;
        let app = test::init_service(crate::api::testing::app(pool.clone())).await;
        let assignment_id = crate::api::testing::seed_assignment(&pool).await;

        let req = post_form("/workers/add", &worker_fields("Dana", "")).to_request();

        test::call_service(&app, req).await;
        let id = repository::list::<Workers>(&pool).await.unwrap()[0].worker_id;

        let assignment = assignment_id.to_string();
        let req = post_form(&format!("/workers/edit/{}", id), &worker_fields("Dana Smith", &assignment))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(location(&resp), "/workers");

        let row = repository::find::<Workers>(&pool, id).await.unwrap().unwrap();
        assert_eq!(row.name, "Dana Smith");
        assert_eq!(row.assignment_id, Some(assignment_id));
    }

    #[actix_web::test]
    async fn edit_of_missing_worker_redirects_without_creating() {
        let pool = connection::in_memory().await;
        let app = test::init_service(crate::api::testing::app(pool.clone())).await;

        let req = post_form("/workers/edit/5", &worker_fields("Ghost", "")).to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status().as_u16(), 302);
        assert_eq!(location(&resp), "/workers");

        assert!(repository::list::<Workers>(&pool).await.unwrap().is_empty());
    }

    #[actix_web::test]
    async fn unknown_assignment_is_rejected_by_the_store() {
        let pool = connection::in_memory().await;
        let app = test::init_service(crate::api::testing::app(pool.clone())).await;

        let req = post_form("/workers/add", &worker_fields("Dana", "42")).to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status().as_u16(), 500);
        let body = body_text(resp).await;
        assert!(body.starts_with("Error adding worker: "), "{}", body);
        assert!(repository::list::<Workers>(&pool).await.unwrap().is_empty());
    }

    #[actix_web::test]
    async fn missing_field_is_a_bad_request() {
        let pool = connection::in_memory().await;
        let app = test::init_service(crate::api::testing::app(pool.clone())).await;

        let req = post_form("/workers/add", &[("name", "Dana")]).to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status().as_u16(), 400);
        let body = body_text(resp).await;
        assert!(body.starts_with("Invalid form submission:"), "{}", body);
    }
}
