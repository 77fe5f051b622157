mod common;
use common::{record, workbook_with};
use leadgrid::core::log::LogLogic;
use leadgrid::core::notify::{DEFAULT_TOAST_DURATION_MS, Notifications, ToastKind};
use leadgrid::ui::grid::{ADD_RECORD_HINT, EMPTY_STATE, render_grid};
use leadgrid::utils::formatting::strip_ansi;

#[test]
fn toasts_get_increasing_ids_and_default_duration() {
    let mut n = Notifications::default();
    let a = n.success("saved");
    let b = n.error("boom");

    assert!(b > a);
    assert_eq!(n.pending().len(), 2);
    assert_eq!(n.pending()[0].duration_ms, DEFAULT_TOAST_DURATION_MS);
    assert_eq!(n.pending()[1].kind, ToastKind::Error);
}

#[test]
fn dismiss_and_drain_keep_history() {
    let mut n = Notifications::with_duration(1500);
    let first = n.info("one");
    n.warning("two");

    assert!(n.dismiss(first));
    assert!(!n.dismiss(first));

    let drained = n.drain();
    assert_eq!(drained.len(), 1);
    assert_eq!(drained[0].message, "two");
    assert_eq!(drained[0].duration_ms, 1500);
    assert!(n.pending().is_empty());
    assert_eq!(n.history().len(), 2);
}

#[test]
fn log_lines_carry_kind_and_message() {
    let mut n = Notifications::default();
    n.success("Changes saved successfully");
    n.warning("Please select rows to enrich");

    let lines: Vec<String> = LogLogic::format_history(n.history())
        .iter()
        .map(|l| strip_ansi(l))
        .collect();
    assert_eq!(lines[0], "1: success | Changes saved successfully");
    assert_eq!(lines[1], "2: warning | Please select rows to enrich");
}

#[test]
fn grid_marks_selection_and_edited_row() {
    let mut wb = workbook_with(vec![
        record(0, "Acme", "Acme", "https://acme.com"),
        record(0, "Globex", "", ""),
    ]);
    wb.toggle_selection(2).unwrap();
    wb.start_editing(1).unwrap();
    wb.update_field(leadgrid::models::RecordField::CompanyName, "Acme Draft")
        .unwrap();

    let text = strip_ansi(&render_grid(&wb));
    assert!(text.contains("Acme Draft"));
    assert!(text.contains("1*"));
    assert!(text.contains("[x]"));
    assert!(text.contains("2 Rows · 1 selected"));
}

#[test]
fn grid_empty_state_offers_to_add_a_record() {
    let mut wb = workbook_with(vec![record(0, "Acme", "Acme", "https://acme.com")]);
    wb.set_search("xyz");

    let text = strip_ansi(&render_grid(&wb));
    assert!(text.contains(EMPTY_STATE));
    assert!(text.contains(ADD_RECORD_HINT));
    assert!(text.contains("0 Rows · 1 total"));
}
