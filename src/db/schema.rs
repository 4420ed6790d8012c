use sqlx::SqlitePool;
use tracing::info;

const CREATE_CLIENT: &str = r#"
    CREATE TABLE IF NOT EXISTS Client (
        ClientID INTEGER PRIMARY KEY AUTOINCREMENT,
        Name TEXT NOT NULL,
        Industry TEXT NOT NULL,
        ContactInfo TEXT NOT NULL,
        Address TEXT NOT NULL,
        ContractDetails TEXT NOT NULL
    )
"#;

const CREATE_JOB_ASSIGNMENT: &str = r#"
    CREATE TABLE IF NOT EXISTS JobAssignment (
        AssignmentID INTEGER PRIMARY KEY AUTOINCREMENT,
        JobDescription TEXT NOT NULL,
        StartDate TEXT NOT NULL,
        EndDate TEXT NOT NULL,
        Hours REAL NOT NULL,
        PayRate REAL NOT NULL,
        ClientID INTEGER NOT NULL REFERENCES Client (ClientID)
    )
"#;

const CREATE_WORKER: &str = r#"
    CREATE TABLE IF NOT EXISTS Worker (
        WorkerID INTEGER PRIMARY KEY AUTOINCREMENT,
        Name TEXT NOT NULL,
        Address TEXT NOT NULL,
        ContactInfo TEXT NOT NULL,
        Skills TEXT NOT NULL,
        AssignmentID INTEGER REFERENCES JobAssignment (AssignmentID)
    )
"#;

/// Create the Client, JobAssignment and Worker tables if they are missing
///
/// Idempotent: safe to run on every startup against an existing database.
/// Tables are created parent-first so the foreign keys resolve.
pub async fn create_tables(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    for statement in [CREATE_CLIENT, CREATE_JOB_ASSIGNMENT, CREATE_WORKER] {
        sqlx::query(statement).execute(pool).await?;
    }

    info!("Database schema is up to date");
    Ok(())
}
