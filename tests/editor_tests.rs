mod common;
use common::{record, workbook_with};
use leadgrid::core::editor::EditorState;
use leadgrid::errors::AppError;
use leadgrid::models::{EmailStatus, Record, RecordField};

#[test]
fn add_record_prepends_new_prospect_and_opens_editor() {
    let mut wb = workbook_with(vec![record(0, "Acme", "Acme", "")]);
    let id = wb.add_record();

    assert_eq!(wb.records()[0].id, id);
    assert_eq!(wb.records()[0].imported_data, Record::NEW_PROSPECT);
    assert_eq!(wb.records()[0].last_updated, "Mar 5, 2024, 3:07 PM");
    assert_eq!(wb.editor().editing_id(), Some(id));
}

#[test]
fn switching_rows_without_saving_keeps_stored_data() {
    let mut wb = workbook_with(vec![
        record(0, "A", "Alpha", ""),
        record(0, "B", "Beta", ""),
    ]);

    wb.start_editing(1).unwrap();
    wb.update_field(RecordField::CompanyName, "Changed").unwrap();
    wb.start_editing(2).unwrap();

    assert_eq!(wb.record(1).unwrap().company_name, "Alpha");
    assert_eq!(wb.editor().editing_id(), Some(2));
}

#[test]
fn reopening_the_same_row_keeps_pending_changes() {
    let mut wb = workbook_with(vec![record(0, "A", "Alpha", "")]);
    wb.start_editing(1).unwrap();
    wb.update_field(RecordField::CompanyName, "Pending name").unwrap();
    wb.start_editing(1).unwrap();

    assert_eq!(
        wb.editor().buffer().map(|b| b.company_name.as_str()),
        Some("Pending name")
    );
}

#[test]
fn save_derives_logo_restamps_and_notifies() {
    let mut wb = workbook_with(vec![record(0, "A", "Alpha", "")]);
    wb.start_editing(1).unwrap();
    wb.update_field(RecordField::CompanyWebsite, "https://alpha.dev/about")
        .unwrap();
    wb.update_field(RecordField::EmailWaterfall, "not met").unwrap();

    let id = wb.save_editing().unwrap();
    let row = wb.record(id).unwrap();

    assert_eq!(
        row.company_logo.as_deref(),
        Some("https://logo.clearbit.com/alpha.dev")
    );
    assert_eq!(row.email_waterfall, EmailStatus::NotMet);
    assert_eq!(row.last_updated, "Mar 5, 2024, 3:07 PM");
    assert_eq!(*wb.editor(), EditorState::Idle);
    assert_eq!(
        wb.notifications().last().map(|t| t.message.as_str()),
        Some("Changes saved successfully")
    );
}

#[test]
fn save_without_domain_keeps_previous_logo() {
    let mut r = record(0, "A", "Alpha", "");
    r.company_logo = Some("https://cdn.example/alpha.png".into());
    let mut wb = workbook_with(vec![r]);

    wb.start_editing(1).unwrap();
    wb.update_field(RecordField::CompanyName, "Alpha Inc").unwrap();
    wb.save_editing().unwrap();

    assert_eq!(
        wb.record(1).unwrap().company_logo.as_deref(),
        Some("https://cdn.example/alpha.png")
    );
}

#[test]
fn cancel_discards_the_buffer() {
    let mut wb = workbook_with(vec![record(0, "A", "Alpha", "")]);
    wb.start_editing(1).unwrap();
    wb.update_field(RecordField::CompanyName, "Nope").unwrap();
    wb.cancel_editing();

    assert!(!wb.editor().is_editing());
    assert_eq!(wb.record(1).unwrap().company_name, "Alpha");
}

#[test]
fn editing_rules_are_enforced() {
    let mut wb = workbook_with(vec![record(0, "A", "Alpha", "")]);

    assert!(matches!(
        wb.update_field(RecordField::CompanyName, "x"),
        Err(AppError::NotEditing)
    ));
    assert!(matches!(wb.save_editing(), Err(AppError::NotEditing)));

    wb.start_editing(1).unwrap();
    assert!(matches!(
        wb.update_field(RecordField::LastUpdated, "yesterday"),
        Err(AppError::FieldNotEditable(_))
    ));
    assert!(matches!(
        wb.update_field(RecordField::EmailWaterfall, "maybe"),
        Err(AppError::InvalidStatus(_))
    ));
}

#[test]
fn deleting_the_edited_row_closes_the_editor() {
    let mut wb = workbook_with(vec![record(0, "A", "Alpha", "")]);
    wb.start_editing(1).unwrap();
    wb.delete_record(1).unwrap();

    assert!(!wb.editor().is_editing());
    assert!(matches!(wb.save_editing(), Err(AppError::NotEditing)));
}
