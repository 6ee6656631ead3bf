//! Roster import service.

use std::sync::Arc;

use serde::Deserialize;
use tracing::info;

use campushub_core::error::AppError;
use campushub_database::repositories::student::StudentRepository;
use campushub_entity::student::model::ProvisionedStudent;

/// Imports admin-uploaded rosters as provisioned student stubs.
#[derive(Debug, Clone)]
pub struct RosterService {
    /// Student repository.
    students: Arc<StudentRepository>,
}

/// One row of the uploaded roster file.
#[derive(Debug, Clone, Deserialize)]
struct RosterRow {
    name: String,
    national_id: String,
    student_number: String,
}

impl RosterService {
    /// Creates a new roster service.
    pub fn new(students: Arc<StudentRepository>) -> Self {
        Self { students }
    }

    /// Import a CSV roster, returning the number of rows processed.
    ///
    /// The whole file is parsed before any write: a malformed row fails the
    /// batch with a validation error and nothing is persisted. Each valid
    /// row upserts keyed on `(national_id, student_number)`, so re-importing
    /// an identical file leaves the student set unchanged.
    pub async fn import_csv(&self, data: &[u8]) -> Result<usize, AppError> {
        let rows = parse_roster(data)?;

        for row in &rows {
            self.students
                .upsert_provisioned(&ProvisionedStudent {
                    name: row.name.clone(),
                    national_id: row.national_id.clone(),
                    student_number: row.student_number.clone(),
                })
                .await?;
        }

        info!(imported = rows.len(), "Roster import complete");
        Ok(rows.len())
    }
}

/// Parse roster CSV bytes into typed rows.
///
/// Expects a header line of `name,national_id,student_number`. Fields are
/// trimmed; empty key fields are rejected.
fn parse_roster(data: &[u8]) -> Result<Vec<RosterRow>, AppError> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(data);

    let mut rows = Vec::new();
    for (idx, record) in reader.deserialize::<RosterRow>().enumerate() {
        let row = record
            .map_err(|e| AppError::validation(format!("Malformed roster row {}: {e}", idx + 1)))?;

        if row.name.is_empty() || row.national_id.is_empty() || row.student_number.is_empty() {
            return Err(AppError::validation(format!(
                "Roster row {} has empty fields",
                idx + 1
            )));
        }

        rows.push(row);
    }

    Ok(rows)
}
