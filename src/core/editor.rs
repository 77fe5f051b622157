//! Inline editor: at most one record is edited at a time, through a private
//! copy that only reaches the store on save.

use crate::errors::{AppError, AppResult};
use crate::models::{EmailStatus, Record, RecordField, RecordId};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum EditorState {
    #[default]
    Idle,
    Editing {
        id: RecordId,
        buffer: Record,
    },
}

impl EditorState {
    /// Open `row` for editing. Re-opening the row already being edited keeps
    /// its pending changes; opening another row drops the old buffer.
    pub fn start(&mut self, row: &Record) {
        if self.editing_id() == Some(row.id) {
            return;
        }
        *self = EditorState::Editing {
            id: row.id,
            buffer: row.clone(),
        };
    }

    /// Change one editable column of the buffer.
    pub fn update_field(&mut self, field: RecordField, value: &str) -> AppResult<()> {
        let EditorState::Editing { buffer, .. } = self else {
            return Err(AppError::NotEditing);
        };

        if !field.is_user_editable() {
            return Err(AppError::FieldNotEditable(field.key().to_string()));
        }

        match field {
            RecordField::ImportedData => buffer.imported_data = value.to_string(),
            RecordField::CompanyName => buffer.company_name = value.to_string(),
            RecordField::CompanyWebsite => buffer.company_website = value.to_string(),
            RecordField::LinkedinUrl => buffer.linkedin_url = value.to_string(),
            RecordField::EmailWaterfall => {
                buffer.email_waterfall = EmailStatus::from_label(value)
                    .ok_or_else(|| AppError::InvalidStatus(value.to_string()))?;
            }
            RecordField::LastUpdated | RecordField::CompanyLogo => {
                return Err(AppError::FieldNotEditable(field.key().to_string()));
            }
        }
        Ok(())
    }

    /// Leave editing mode and hand back the buffer for committing.
    pub fn take(&mut self) -> AppResult<Record> {
        match std::mem::take(self) {
            EditorState::Editing { buffer, .. } => Ok(buffer),
            EditorState::Idle => Err(AppError::NotEditing),
        }
    }

    /// Discard the buffer unconditionally.
    pub fn cancel(&mut self) {
        *self = EditorState::Idle;
    }

    pub fn editing_id(&self) -> Option<RecordId> {
        match self {
            EditorState::Editing { id, .. } => Some(*id),
            EditorState::Idle => None,
        }
    }

    pub fn buffer(&self) -> Option<&Record> {
        match self {
            EditorState::Editing { buffer, .. } => Some(buffer),
            EditorState::Idle => None,
        }
    }

    pub fn is_editing(&self) -> bool {
        matches!(self, EditorState::Editing { .. })
    }
}
