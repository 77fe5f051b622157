mod common;
use common::{MapEnricher, record, result, workbook_with};
use leadgrid::core::enrich::progress_percent;
use leadgrid::core::notify::ToastKind;
use leadgrid::core::{CancelToken, EnrichmentWorkflow};
use leadgrid::models::{EmailStatus, EnrichmentResult};

#[test]
fn enriching_acme_sets_status_and_logo() {
    let mut wb = workbook_with(vec![record(0, "Acme", "Acme", "")]);
    wb.select_all(true);
    let enricher = MapEnricher::with(vec![("Acme", result("acme.com", EmailStatus::Found))]);

    let report = EnrichmentWorkflow::new(&enricher, CancelToken::new()).run(&mut wb, |_| {});

    let row = wb.record(1).unwrap();
    assert_eq!(row.email_waterfall, EmailStatus::Found);
    assert!(row.company_logo.as_deref().unwrap().ends_with("acme.com"));
    assert_eq!(row.company_website, "https://acme.com");
    assert_eq!(row.last_updated, "Mar 5, 2024, 3:07 PM");
    assert_eq!(report.merged, 1);
    assert!(!wb.is_busy());

    let last = wb.notifications().last().unwrap();
    assert_eq!(last.kind, ToastKind::Success);
    assert_eq!(last.message, "Successfully enriched 1 record");
}

#[test]
fn empty_selection_warns_and_does_nothing() {
    let mut wb = workbook_with(vec![record(0, "Acme", "Acme", "")]);
    let enricher = MapEnricher::default();

    let report = EnrichmentWorkflow::new(&enricher, CancelToken::new()).run(&mut wb, |_| {
        panic!("no progress expected");
    });

    assert_eq!(report.total, 0);
    assert!(enricher.calls.borrow().is_empty());
    let last = wb.notifications().last().unwrap();
    assert_eq!(last.kind, ToastKind::Warning);
    assert_eq!(last.message, "Please select rows to enrich");
}

#[test]
fn query_prefers_company_name_and_skips_blank_rows() {
    let mut wb = workbook_with(vec![
        record(0, "imported label", "Real Name", ""),
        record(0, "Only Imported", "", ""),
        record(0, "", "", ""),
    ]);
    wb.select_all(true);
    let enricher = MapEnricher::default();

    let report = EnrichmentWorkflow::new(&enricher, CancelToken::new()).run(&mut wb, |_| {});

    assert_eq!(
        *enricher.calls.borrow(),
        vec!["Real Name".to_string(), "Only Imported".to_string()]
    );
    assert_eq!(report.skipped, 1);
    assert_eq!(report.failed, 2);
    assert_eq!(report.processed, 3);
}

#[test]
fn failed_lookups_leave_rows_untouched() {
    let mut wb = workbook_with(vec![record(0, "Ghost", "Ghost", "")]);
    wb.select_all(true);
    let before = wb.record(1).cloned();

    let report = EnrichmentWorkflow::new(&MapEnricher::default(), CancelToken::new())
        .run(&mut wb, |_| {});

    assert_eq!(wb.record(1).cloned(), before);
    assert_eq!(report.failed, 1);
    assert_eq!(
        wb.notifications().last().map(|t| t.message.as_str()),
        Some("Successfully enriched 1 record")
    );
}

#[test]
fn progress_is_reported_per_record() {
    let mut wb = workbook_with(vec![
        record(0, "a", "a", ""),
        record(0, "b", "b", ""),
        record(0, "c", "c", ""),
    ]);
    wb.select_all(true);
    let mut seen = Vec::new();

    EnrichmentWorkflow::new(&MapEnricher::default(), CancelToken::new())
        .run(&mut wb, |pct| seen.push(pct));

    assert_eq!(seen, vec![33, 67, 100]);
    assert_eq!(wb.progress(), 0);
}

#[test]
fn progress_percent_rounds() {
    assert_eq!(progress_percent(0, 0), 0);
    assert_eq!(progress_percent(0, 2), 50);
    assert_eq!(progress_percent(0, 3), 33);
    assert_eq!(progress_percent(1, 3), 67);
    assert_eq!(progress_percent(6, 7), 100);
}

#[test]
fn cancellation_after_first_record_leaves_the_rest_untouched() {
    let mut wb = workbook_with(vec![
        record(0, "One", "One", ""),
        record(0, "Two", "Two", ""),
        record(0, "Three", "Three", ""),
    ]);
    wb.select_all(true);
    let enricher = MapEnricher::with(vec![
        ("One", result("one.com", EmailStatus::Found)),
        ("Two", result("two.com", EmailStatus::Found)),
        ("Three", result("three.com", EmailStatus::Found)),
    ]);
    let token = CancelToken::new();
    let kill = token.clone();

    let report = EnrichmentWorkflow::new(&enricher, token).run(&mut wb, |_| kill.cancel());

    assert!(report.cancelled);
    assert_eq!(report.processed, 1);
    assert_eq!(enricher.calls.borrow().len(), 1);
    assert_eq!(wb.record(1).unwrap().email_waterfall, EmailStatus::Found);
    assert_eq!(wb.record(2).unwrap().email_waterfall, EmailStatus::None);
    assert_eq!(wb.record(3).unwrap().email_waterfall, EmailStatus::None);
    assert!(!wb.is_busy());

    let last = wb.notifications().last().unwrap();
    assert_eq!(last.kind, ToastKind::Warning);
    assert_eq!(last.message, "Enrichment operation cancelled");
}

#[test]
fn a_new_run_clears_a_previous_kill() {
    let mut wb = workbook_with(vec![record(0, "One", "One", "")]);
    wb.select_all(true);
    let token = CancelToken::new();
    token.cancel();

    let report = EnrichmentWorkflow::new(&MapEnricher::default(), token).run(&mut wb, |_| {});
    assert!(!report.cancelled);
    assert_eq!(report.processed, 1);
}

#[test]
fn merge_name_precedence() {
    let mut wb = workbook_with(vec![
        record(0, "label one", "", ""),
        record(0, "label two", "Kept Name", ""),
        record(0, "label three", "", ""),
    ]);

    let plain = result("x.com", EmailStatus::Found);
    let named = EnrichmentResult {
        company_name: Some("Provider Name".into()),
        ..result("y.com", EmailStatus::NotMet)
    };

    wb.apply_enrichment(1, "label one", &plain);
    wb.apply_enrichment(2, "Kept Name", &plain);
    wb.apply_enrichment(3, "label three", &named);

    assert_eq!(wb.record(1).unwrap().company_name, "label one");
    assert_eq!(wb.record(2).unwrap().company_name, "Kept Name");
    assert_eq!(wb.record(3).unwrap().company_name, "Provider Name");
    assert_eq!(wb.record(3).unwrap().email_waterfall, EmailStatus::NotMet);
}

#[test]
fn merge_keeps_logo_when_result_has_no_domain() {
    let mut r = record(0, "a", "A", "");
    r.company_logo = Some("https://cdn.example/a.png".into());
    let mut wb = workbook_with(vec![r]);

    let empty = EnrichmentResult {
        company_name: None,
        website: String::new(),
        domain: String::new(),
        linkedin: String::new(),
        email_status: EmailStatus::Pending,
    };
    assert!(wb.apply_enrichment(1, "A", &empty));
    assert_eq!(
        wb.record(1).unwrap().company_logo.as_deref(),
        Some("https://cdn.example/a.png")
    );
    assert!(!wb.apply_enrichment(99, "A", &empty));
}

#[test]
fn kill_while_idle_is_informational() {
    let mut wb = workbook_with(vec![]);
    wb.kill_idle();
    let last = wb.notifications().last().unwrap();
    assert_eq!(last.kind, ToastKind::Info);
    assert_eq!(last.message, "No active operations to stop");
}
