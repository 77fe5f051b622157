mod common;
use common::{record, workbook_with};
use leadgrid::core::projection::{SortDirection, SortSpec, ViewQuery, project};
use leadgrid::models::{EmailStatus, Record, RecordField};
use proptest::prelude::*;

fn statused(id: u64, name: &str, status: EmailStatus) -> Record {
    let mut r = record(id, name, name, "");
    r.email_waterfall = status;
    r
}

#[test]
fn search_matches_single_acme_row() {
    let mut wb = workbook_with(vec![record(1, "Acme", "Acme", "https://acme.com")]);

    wb.set_search("acme");
    assert_eq!(wb.display_rows().len(), 1);

    wb.set_search("xyz");
    assert!(wb.display_rows().is_empty());
}

#[test]
fn search_covers_website_and_linkedin_but_not_status() {
    let mut r = record(1, "Row", "", "https://initech.io");
    r.linkedin_url = "https://linkedin.com/company/tps".into();
    r.email_waterfall = EmailStatus::Found;
    let rows = vec![r];

    let q = |s: &str| ViewQuery {
        search: s.into(),
        ..Default::default()
    };
    assert_eq!(project(&rows, &q("INITECH")).len(), 1);
    assert_eq!(project(&rows, &q("tps")).len(), 1);
    assert!(project(&rows, &q("found")).is_empty());
}

#[test]
fn empty_filter_set_keeps_everything() {
    let rows = vec![
        statused(1, "a", EmailStatus::Found),
        statused(2, "b", EmailStatus::None),
    ];
    assert_eq!(project(&rows, &ViewQuery::default()).len(), 2);
}

#[test]
fn filters_are_a_union_of_statuses() {
    let rows = vec![
        statused(1, "a", EmailStatus::Found),
        statused(2, "b", EmailStatus::NotMet),
        statused(3, "c", EmailStatus::Pending),
    ];
    let mut q = ViewQuery::default();
    q.toggle_filter(EmailStatus::Found);
    q.toggle_filter(EmailStatus::Pending);

    let ids: Vec<u64> = project(&rows, &q).iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![1, 3]);

    q.toggle_filter(EmailStatus::Found);
    let ids: Vec<u64> = project(&rows, &q).iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![3]);
}

#[test]
fn sort_toggle_cycles_asc_desc_none() {
    let mut q = ViewQuery::default();
    q.toggle_sort(RecordField::CompanyName);
    assert_eq!(q.sort, Some(SortSpec::asc(RecordField::CompanyName)));
    q.toggle_sort(RecordField::CompanyName);
    assert_eq!(q.sort, Some(SortSpec::desc(RecordField::CompanyName)));
    q.toggle_sort(RecordField::CompanyName);
    assert_eq!(q.sort, None);
}

#[test]
fn sorting_another_column_restarts_ascending() {
    let mut q = ViewQuery::default();
    q.toggle_sort(RecordField::CompanyName);
    q.toggle_sort(RecordField::CompanyName);
    q.toggle_sort(RecordField::CompanyWebsite);
    let spec = q.sort.expect("sorted");
    assert_eq!(spec.field, RecordField::CompanyWebsite);
    assert_eq!(spec.direction, SortDirection::Asc);
}

#[test]
fn sort_is_stable_for_equal_keys_in_both_directions() {
    let rows = vec![
        record(1, "x", "Beta", ""),
        record(2, "y", "Alpha", ""),
        record(3, "z", "Beta", ""),
        record(4, "w", "Alpha", ""),
    ];
    let mut q = ViewQuery::default();

    q.toggle_sort(RecordField::CompanyName);
    let asc: Vec<u64> = project(&rows, &q).iter().map(|r| r.id).collect();
    assert_eq!(asc, vec![2, 4, 1, 3]);

    q.toggle_sort(RecordField::CompanyName);
    let desc: Vec<u64> = project(&rows, &q).iter().map(|r| r.id).collect();
    assert_eq!(desc, vec![1, 3, 2, 4]);
}

#[test]
fn missing_logo_sorts_as_empty_string() {
    let mut with_logo = record(1, "a", "A", "");
    with_logo.company_logo = Some("https://logo.clearbit.com/a.com".into());
    let rows = vec![with_logo, record(2, "b", "B", "")];

    let q = ViewQuery {
        sort: Some(SortSpec::asc(RecordField::CompanyLogo)),
        ..Default::default()
    };
    let ids: Vec<u64> = project(&rows, &q).iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![2, 1]);
}

fn arb_status() -> impl Strategy<Value = EmailStatus> {
    prop::sample::select(EmailStatus::ALL.to_vec())
}

fn arb_rows() -> impl Strategy<Value = Vec<Record>> {
    prop::collection::vec(("[a-dA-D]{0,4}", "[a-c]{0,3}", arb_status()), 0..12).prop_map(|v| {
        v.into_iter()
            .enumerate()
            .map(|(i, (imported, name, status))| {
                let mut r = record(i as u64 + 1, &imported, &name, "");
                r.email_waterfall = status;
                r
            })
            .collect()
    })
}

proptest! {
    #[test]
    fn search_is_sound_and_complete(rows in arb_rows(), term in "[a-d]{0,2}") {
        let q = ViewQuery { search: term.clone(), ..Default::default() };
        let out = project(&rows, &q);
        let lower = term.to_lowercase();

        for r in &out {
            prop_assert!(r.searchable_values().iter().any(|v| v.to_lowercase().contains(&lower)));
        }
        let hits = rows
            .iter()
            .filter(|r| r.searchable_values().iter().any(|v| v.to_lowercase().contains(&lower)))
            .count();
        prop_assert_eq!(out.len(), hits);
    }

    #[test]
    fn filtered_rows_have_a_selected_status(rows in arb_rows(), picks in prop::collection::btree_set(arb_status(), 1..3)) {
        let q = ViewQuery { filters: picks.clone(), ..Default::default() };
        for r in project(&rows, &q) {
            prop_assert!(picks.contains(&r.email_waterfall));
        }
    }

    #[test]
    fn descending_is_reverse_of_ascending_up_to_ties(rows in arb_rows()) {
        let asc = ViewQuery { sort: Some(SortSpec::asc(RecordField::CompanyName)), ..Default::default() };
        let desc = ViewQuery { sort: Some(SortSpec::desc(RecordField::CompanyName)), ..Default::default() };

        let a: Vec<&str> = project(&rows, &asc).iter().map(|r| r.company_name.as_str()).collect();
        let mut d: Vec<&str> = project(&rows, &desc).iter().map(|r| r.company_name.as_str()).collect();
        d.reverse();
        prop_assert_eq!(a, d);
    }

    #[test]
    fn equal_keys_keep_store_order(rows in arb_rows()) {
        let q = ViewQuery { sort: Some(SortSpec::asc(RecordField::CompanyName)), ..Default::default() };
        let out = project(&rows, &q);
        for pair in out.windows(2) {
            if pair[0].company_name == pair[1].company_name {
                prop_assert!(pair[0].id < pair[1].id);
            }
        }
    }
}
