use askama::Template;

use crate::db::models::{ClientRow, JobAssignmentRow};

#[derive(Template)]
#[template(path = "job_assignments.html")]
pub struct JobAssignmentListView {
    pub job_assignments: Vec<JobAssignmentRow>,
}

/// Add form with the client list for the client selector
#[derive(Template)]
#[template(path = "add_job_assignment.html")]
pub struct AddJobAssignmentView {
    pub clients: Vec<ClientRow>,
}

#[derive(Template)]
#[template(path = "edit_job_assignment.html")]
pub struct EditJobAssignmentView {
    pub job_assignment: JobAssignmentRow,
    pub clients: Vec<ClientRow>,
}
