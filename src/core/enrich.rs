//! Sequential enrichment of the selected rows.
//!
//! One provider call is outstanding at a time. The cancellation flag is read
//! before each record, so a call already in flight always completes.

use crate::core::workbook::{Workbook, plural};
use crate::provider::Enricher;
use serde::Serialize;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Shared "kill" switch for a running enrichment.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }

    pub fn reset(&self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

/// Aggregate outcome of one run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct EnrichmentReport {
    /// Ids selected when the run started.
    pub total: usize,
    /// Ids visited before completion or cancellation.
    pub processed: usize,
    pub merged: usize,
    /// Rows gone from the store, or with nothing to query.
    pub skipped: usize,
    /// Rows for which the provider returned nothing.
    pub failed: usize,
    pub cancelled: bool,
}

/// Per-record progress, rounded to a whole percentage.
pub fn progress_percent(index: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    (((index + 1) as f64 / total as f64) * 100.0).round() as u8
}

pub struct EnrichmentWorkflow<'a> {
    enricher: &'a dyn Enricher,
    cancel: CancelToken,
}

impl<'a> EnrichmentWorkflow<'a> {
    pub fn new(enricher: &'a dyn Enricher, cancel: CancelToken) -> Self {
        Self { enricher, cancel }
    }

    /// Enrich every selected row, in selection order.
    ///
    /// `on_progress` is called after each record with the new percentage; it
    /// is the place where a caller can observe a kill request and flip the
    /// cancel token.
    pub fn run<F>(&self, workbook: &mut Workbook, mut on_progress: F) -> EnrichmentReport
    where
        F: FnMut(u8),
    {
        let ids = workbook.selection().ids().to_vec();
        let mut report = EnrichmentReport {
            total: ids.len(),
            ..Default::default()
        };

        if ids.is_empty() {
            workbook
                .notifications_mut()
                .warning("Please select rows to enrich");
            return report;
        }

        self.cancel.reset();
        workbook.begin_enrichment();
        tracing::info!(total = ids.len(), "enrichment started");

        for (index, id) in ids.iter().copied().enumerate() {
            if self.cancel.is_cancelled() {
                report.cancelled = true;
                break;
            }

            let query = workbook
                .record(id)
                .and_then(|r| r.enrichment_query())
                .map(str::to_string);

            match query {
                None => {
                    tracing::debug!(id, "nothing to enrich, skipped");
                    report.skipped += 1;
                }
                Some(query) => match self.enricher.enrich(&query) {
                    Some(result) => {
                        if workbook.apply_enrichment(id, &query, &result) {
                            tracing::debug!(id, query = %query, "record enriched");
                            report.merged += 1;
                        } else {
                            report.skipped += 1;
                        }
                    }
                    None => {
                        tracing::warn!(id, query = %query, "enrichment returned no data");
                        report.failed += 1;
                    }
                },
            }

            report.processed += 1;
            let pct = progress_percent(index, ids.len());
            workbook.set_progress(pct);
            on_progress(pct);
        }

        workbook.finish_enrichment();

        if report.cancelled {
            workbook
                .notifications_mut()
                .warning("Enrichment operation cancelled");
        } else {
            workbook.notifications_mut().success(format!(
                "Successfully enriched {} record{}",
                report.processed,
                plural(report.processed)
            ));
        }

        tracing::info!(
            processed = report.processed,
            merged = report.merged,
            skipped = report.skipped,
            failed = report.failed,
            cancelled = report.cancelled,
            "enrichment finished"
        );
        report
    }
}
