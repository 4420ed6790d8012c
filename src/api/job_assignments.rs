use chrono::NaiveDate;
use serde::Deserialize;
use sqlx::SqlitePool;

use super::clients::Clients;
use super::error::AppError;
use super::resource::Resource;
use crate::db::models::{ClientRow, JobAssignmentRow};
use crate::db::repository::{self, SqliteQuery, Table};
use crate::views::{AddJobAssignmentView, EditJobAssignmentView, JobAssignmentListView};

/// Submitted job assignment fields
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobAssignmentForm {
    pub job_description: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub hours: f64,
    pub pay_rate: f64,
    pub client_id: i64,
}

pub struct JobAssignments;

impl Table for JobAssignments {
    const TABLE: &'static str = "JobAssignment";
    const KEY: &'static str = "AssignmentID";
    const COLUMNS: &'static [&'static str] = &[
        "JobDescription",
        "StartDate",
        "EndDate",
        "Hours",
        "PayRate",
        "ClientID",
    ];

    type Row = JobAssignmentRow;
    type Form = JobAssignmentForm;

    fn bind<'q>(form: &'q JobAssignmentForm, query: SqliteQuery<'q>) -> SqliteQuery<'q> {
        query
            .bind(&form.job_description)
            .bind(form.start_date)
            .bind(form.end_date)
            .bind(form.hours)
            .bind(form.pay_rate)
            .bind(form.client_id)
    }
}

/// Clients for the selector on the add and edit forms
async fn client_choices(pool: &SqlitePool) -> Result<Vec<ClientRow>, AppError> {
    repository::list::<Clients>(pool)
        .await
        .map_err(|e| AppError::store("Error retrieving clients", e))
}

impl Resource for JobAssignments {
    const ROUTE: &'static str = "/jobAssignments";
    const LABEL: &'static str = "Job Assignment";
    const PLURAL: &'static str = "job assignments";

    type ListView = JobAssignmentListView;
    type AddView = AddJobAssignmentView;
    type EditView = EditJobAssignmentView;

    fn list_view(job_assignments: Vec<JobAssignmentRow>) -> JobAssignmentListView {
        JobAssignmentListView { job_assignments }
    }

    async fn add_view(pool: &SqlitePool) -> Result<AddJobAssignmentView, AppError> {
        Ok(AddJobAssignmentView {
            clients: client_choices(pool).await?,
        })
    }

    async fn edit_view(
        pool: &SqlitePool,
        job_assignment: JobAssignmentRow,
    ) -> Result<EditJobAssignmentView, AppError> {
        Ok(EditJobAssignmentView {
            job_assignment,
            clients: client_choices(pool).await?,
        })
    }
}
