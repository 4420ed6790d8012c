use chrono::NaiveDate;
use sqlx::FromRow;

/// Database representation of a worker
#[derive(Debug, Clone, PartialEq, FromRow)]
#[sqlx(rename_all = "PascalCase")]
pub struct WorkerRow {
    #[sqlx(rename = "WorkerID")]
    pub worker_id: i64,
    pub name: String,
    pub address: String,
    pub contact_info: String,
    pub skills: String,
    #[sqlx(rename = "AssignmentID")]
    pub assignment_id: Option<i64>,
}

/// Database representation of a client
#[derive(Debug, Clone, PartialEq, FromRow)]
#[sqlx(rename_all = "PascalCase")]
pub struct ClientRow {
    #[sqlx(rename = "ClientID")]
    pub client_id: i64,
    pub name: String,
    pub industry: String,
    pub contact_info: String,
    pub address: String,
    pub contract_details: String,
}

/// Database representation of a job assignment
#[derive(Debug, Clone, PartialEq, FromRow)]
#[sqlx(rename_all = "PascalCase")]
pub struct JobAssignmentRow {
    #[sqlx(rename = "AssignmentID")]
    pub assignment_id: i64,
    pub job_description: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub hours: f64,
    pub pay_rate: f64,
    #[sqlx(rename = "ClientID")]
    pub client_id: i64,
}
