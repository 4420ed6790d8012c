use askama::Template;

use crate::db::models::WorkerRow;

#[derive(Template)]
#[template(path = "workers.html")]
pub struct WorkerListView {
    pub workers: Vec<WorkerRow>,
}

#[derive(Template)]
#[template(path = "add_worker.html")]
pub struct AddWorkerView;

#[derive(Template)]
#[template(path = "edit_worker.html")]
pub struct EditWorkerView {
    pub worker: WorkerRow,
}
