//! Interactive session over one workbook.
//!
//! Lines come from a channel fed by a stdin reader thread, so a running
//! enrichment can look for `kill` between records. Any other line received
//! during a run is queued and executed once the run ends.

use crate::cli::commands::enrich::summarize;
use crate::core::log::LogLogic;
use crate::core::ui_state::ActiveView;
use crate::core::workbook::plural;
use crate::core::{CancelToken, EnrichmentWorkflow, Workbook};
use crate::errors::{AppError, AppResult};
use crate::export::{ExportFormat, ExportLogic};
use crate::import::read_records;
use crate::models::{EmailStatus, RecordField, RecordId};
use crate::provider::Enricher;
use crate::ui::grid::{footer, print_grid};
use crate::ui::messages::{error, flush_toasts, header, info};
use crate::ui::progress::{finish_progress, print_progress};
use crate::utils::path::expand_tilde;
use clap::ValueEnum;
use std::collections::VecDeque;
use std::io::{self, BufRead, Write};
use std::sync::mpsc::{self, Receiver};
use std::thread;

const PROMPT: &str = "leadgrid> ";

const HELP: &str = "\
Commands:
  list                          show the grid
  search [term]                 set (or clear) the search term
  filter <status>|clear         toggle a status filter (found, not met, pending, none)
  sort <column>|clear           cycle sort on a column (asc, desc, off)
  select <id>|all|none          toggle one row, or select/clear the visible rows
  add                           add a new prospect and start editing it
  edit <id>                     start editing a row
  set <field> <value>           change a field of the row being edited
  save | cancel                 commit or discard the edit
  del <id>|selected             delete one row or every selected row
  enrich                        enrich the selected rows (type `kill` to stop)
  kill                          stop a running enrichment
  dedupe                        count potential duplicates
  autorun                       toggle auto run
  view grid|engagement|insights switch view
  logo <id>                     show the logo candidates of a row
  import <file>                 append rows from a CSV/JSON file
  export <format> <file> [-f]   export the visible rows (csv, json, xlsx)
  log                           show this session's notifications
  help                          this text
  quit | exit                   leave";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct Shell {
    wb: Workbook,
    enricher: Box<dyn Enricher>,
    cancel: CancelToken,
    deferred: VecDeque<String>,
}

/// Forward stdin lines to a channel; the channel closes at end of input.
pub fn spawn_stdin_reader() -> Receiver<String> {
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        for line in io::stdin().lock().lines() {
            let Ok(line) = line else { break };
            if tx.send(line).is_err() {
                break;
            }
        }
    });
    rx
}

fn parse_id(arg: Option<&String>) -> AppResult<RecordId> {
    let raw = arg.ok_or_else(|| AppError::InvalidCommand("missing row id".into()))?;
    raw.parse()
        .map_err(|_| AppError::InvalidCommand(format!("invalid row id: {raw}")))
}

impl Shell {
    pub fn new(wb: Workbook, enricher: Box<dyn Enricher>) -> Self {
        Self {
            wb,
            enricher,
            cancel: CancelToken::new(),
            deferred: VecDeque::new(),
        }
    }

    pub fn workbook(&self) -> &Workbook {
        &self.wb
    }

    /// Read and execute lines until `quit` or the end of input.
    /// Command errors are printed and the session goes on.
    pub fn run(&mut self, input: &Receiver<String>) {
        header(format!(
            "leadgrid {} · {} rows · type `help` for commands",
            env!("CARGO_PKG_VERSION"),
            self.wb.len()
        ));

        loop {
            let line = match self.deferred.pop_front() {
                Some(line) => line,
                None => {
                    print!("{PROMPT}");
                    io::stdout().flush().ok();
                    match input.recv() {
                        Ok(line) => line,
                        Err(_) => {
                            println!();
                            break;
                        }
                    }
                }
            };

            let flow = self.execute(&line, input);
            flush_toasts(self.wb.notifications_mut().drain());

            match flow {
                Ok(Flow::Quit) => break,
                Ok(Flow::Continue) => {}
                Err(e) => error(e),
            }
        }
    }

    /// Execute one command line.
    pub fn execute(&mut self, line: &str, input: &Receiver<String>) -> AppResult<Flow> {
        let words = shell_words::split(line)
            .map_err(|e| AppError::InvalidCommand(format!("{line}: {e}")))?;
        let Some((cmd, args)) = words.split_first() else {
            return Ok(Flow::Continue);
        };
        tracing::debug!(command = %cmd, "shell command");

        match cmd.to_lowercase().as_str() {
            "list" | "ls" => print_grid(&self.wb),
            "search" => {
                self.wb.set_search(args.join(" "));
                print!("{}", footer(&self.wb));
            }
            "filter" => self.filter(args)?,
            "sort" => self.sort(args)?,
            "select" => self.select(args)?,
            "add" => {
                let id = self.wb.add_record();
                info(format!("Row {id} added, now editing (`set`, `save`, `cancel`)"));
            }
            "edit" => {
                let id = parse_id(args.first())?;
                self.wb.start_editing(id)?;
                info(format!("Editing row {id}"));
            }
            "set" => {
                let (field, value) = args
                    .split_first()
                    .ok_or_else(|| AppError::InvalidCommand("usage: set <field> <value>".into()))?;
                let field =
                    RecordField::from_key(field).ok_or_else(|| AppError::UnknownField(field.clone()))?;
                self.wb.update_field(field, &value.join(" "))?;
            }
            "save" => {
                self.wb.save_editing()?;
            }
            "cancel" => {
                if self.wb.editor().is_editing() {
                    self.wb.cancel_editing();
                    info("Edit discarded");
                }
            }
            "del" | "delete" => match args.first().map(String::as_str) {
                Some("selected") => {
                    self.wb.delete_selected();
                }
                _ => {
                    let id = parse_id(args.first())?;
                    self.wb.delete_record(id)?;
                }
            },
            "enrich" => self.enrich(input),
            "kill" => self.wb.kill_idle(),
            "dedupe" => {
                self.wb.dedupe();
            }
            "autorun" => {
                self.wb.toggle_auto_run();
            }
            "view" => {
                let name = args.first().map(String::as_str).unwrap_or("grid");
                let view = <ActiveView as ValueEnum>::from_str(name.trim(), true)
                    .map_err(|_| AppError::InvalidCommand(format!("unknown view: {name}")))?;
                self.wb.set_view(view);
            }
            "logo" => self.logo(args)?,
            "import" => {
                let path = args
                    .first()
                    .ok_or_else(|| AppError::InvalidCommand("usage: import <file>".into()))?;
                let records = read_records(&expand_tilde(path))?;
                let added = self.wb.import_records(records).len();
                self.wb
                    .notifications_mut()
                    .success(format!("Imported {} record{}", added, plural(added)));
            }
            "export" => self.export(args)?,
            "log" => LogLogic::print_log(self.wb.notifications().history()),
            "help" | "?" => println!("{HELP}"),
            "quit" | "exit" => return Ok(Flow::Quit),
            other => {
                return Err(AppError::InvalidCommand(format!(
                    "unknown command '{other}' (type `help`)"
                )));
            }
        }

        Ok(Flow::Continue)
    }

    fn filter(&mut self, args: &[String]) -> AppResult<()> {
        let arg = args.join(" ");
        if arg.is_empty() || arg.eq_ignore_ascii_case("clear") {
            self.wb.clear_filters();
        } else {
            let status =
                EmailStatus::from_label(&arg).ok_or_else(|| AppError::InvalidStatus(arg.clone()))?;
            self.wb.toggle_filter(status);
        }
        print!("{}", footer(&self.wb));
        Ok(())
    }

    fn sort(&mut self, args: &[String]) -> AppResult<()> {
        let arg = args.first().map(String::as_str).unwrap_or("clear");
        if arg.eq_ignore_ascii_case("clear") {
            self.wb.clear_sort();
            info("Sort cleared");
            return Ok(());
        }

        let field = RecordField::from_key(arg).ok_or_else(|| AppError::UnknownField(arg.to_string()))?;
        self.wb.sort_by(field);
        match self.wb.query().sort {
            Some(spec) => info(format!("Sorted by {} ({})", spec.field.title(), spec.direction.as_str())),
            None => info("Sort cleared"),
        }
        Ok(())
    }

    fn select(&mut self, args: &[String]) -> AppResult<()> {
        match args.first().map(String::as_str) {
            Some("all") => self.wb.select_all(true),
            Some("none") => self.wb.select_all(false),
            _ => {
                let id = parse_id(args.first())?;
                let now = self.wb.toggle_selection(id)?;
                info(format!("Row {id} {}", if now { "selected" } else { "deselected" }));
            }
        }
        info(format!("{} selected", self.wb.selection().len()));
        Ok(())
    }

    fn enrich(&mut self, input: &Receiver<String>) {
        let workflow = EnrichmentWorkflow::new(self.enricher.as_ref(), self.cancel.clone());
        let cancel = self.cancel.clone();
        let deferred = &mut self.deferred;
        let mut drew_progress = false;

        let report = workflow.run(&mut self.wb, |pct| {
            drew_progress = true;
            print_progress("Enriching", pct);

            while let Ok(line) = input.try_recv() {
                if line.trim().eq_ignore_ascii_case("kill") {
                    if !cancel.is_cancelled() {
                        cancel.cancel();
                        tracing::info!("kill requested");
                    }
                } else {
                    deferred.push_back(line);
                }
            }
        });

        if drew_progress {
            finish_progress();
        }
        if report.total > 0 {
            println!("{}", summarize(&report));
        }
    }

    fn logo(&self, args: &[String]) -> AppResult<()> {
        let id = parse_id(args.first())?;
        let row = self.wb.record(id).ok_or(AppError::RecordNotFound(id))?;
        let name = if row.company_name.is_empty() {
            &row.imported_data
        } else {
            &row.company_name
        };

        let chain = self.wb.logos().fallback_chain(
            name,
            row.company_logo.as_deref(),
            &row.company_website,
        );
        for (i, (tier, url)) in chain.iter().enumerate() {
            println!("{}. {:<12} {}", i + 1, tier.as_str(), url);
        }
        Ok(())
    }

    fn export(&self, args: &[String]) -> AppResult<()> {
        let force = args.iter().any(|a| a == "--force" || a == "-f");
        let positional: Vec<&String> = args
            .iter()
            .filter(|a| *a != "--force" && *a != "-f")
            .collect();

        let [format, file] = positional.as_slice() else {
            return Err(AppError::InvalidCommand(
                "usage: export <csv|json|xlsx> <file> [--force]".into(),
            ));
        };
        let format =
            ExportFormat::from_name(format).ok_or_else(|| AppError::InvalidExportFormat(format.to_string()))?;

        ExportLogic::export(&self.wb.display_rows(), format, file, force)?;
        Ok(())
    }
}

/// Run a shell on stdin.
pub fn run_interactive(wb: Workbook, enricher: Box<dyn Enricher>) {
    let input = spawn_stdin_reader();
    Shell::new(wb, enricher).run(&input);
}
