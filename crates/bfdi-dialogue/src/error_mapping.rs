use bfdi_core::{AppError, DialogueError};

use crate::table::TableError;

impl From<TableError> for AppError {
    fn from(e: TableError) -> Self {
        AppError::Dialogue(DialogueError::InvalidTable(e.to_string()))
    }
}
