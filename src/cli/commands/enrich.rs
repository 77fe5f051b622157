use crate::cli::commands::open_workbook;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::{CancelToken, EnrichmentReport, EnrichmentWorkflow};
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::provider::build_enricher;
use crate::ui::grid::print_grid;
use crate::ui::messages::flush_toasts;
use crate::ui::progress::{finish_progress, print_progress};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Enrich {
        input,
        view,
        ids,
        fixtures,
        output,
        format,
        force,
    } = cmd
    {
        let mut wb = open_workbook(cfg, input)?;
        wb.set_query(view.to_query());

        if ids.is_empty() {
            wb.select_all(true);
        } else {
            for id in ids {
                if !wb.selection().contains(*id) {
                    wb.toggle_selection(*id)?;
                }
            }
        }

        let enricher = build_enricher(cfg, fixtures.as_deref())?;
        let workflow = EnrichmentWorkflow::new(enricher.as_ref(), CancelToken::new());

        let mut drew_progress = false;
        let report = workflow.run(&mut wb, |pct| {
            drew_progress = true;
            print_progress("Enriching", pct);
        });
        if drew_progress {
            finish_progress();
        }

        flush_toasts(wb.notifications_mut().drain());
        if report.total > 0 {
            println!("{}", summarize(&report));
        }

        match output {
            Some(file) => {
                ExportLogic::export(&wb.display_rows(), *format, file, *force)?;
            }
            None => print_grid(&wb),
        }
    }
    Ok(())
}

/// One-line run summary.
pub fn summarize(report: &EnrichmentReport) -> String {
    let mut line = format!(
        "Processed {}/{} · merged {} · skipped {} · no data {}",
        report.processed, report.total, report.merged, report.skipped, report.failed
    );
    if report.cancelled {
        line.push_str(" · cancelled");
    }
    line
}
