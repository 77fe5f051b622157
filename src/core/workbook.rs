//! The workbook: every piece of session state (rows, query, selection, editor,
//! notifications, view flags) and the user-level operations over it.

use crate::core::editor::EditorState;
use crate::core::logo::LogoServices;
use crate::core::notify::Notifications;
use crate::core::projection::{ViewQuery, project};
use crate::core::selection::Selection;
use crate::core::store::RowStore;
use crate::core::ui_state::{ActiveView, UiState};
use crate::errors::{AppError, AppResult};
use crate::models::{EmailStatus, EnrichmentResult, Record, RecordField, RecordId};
use crate::utils::time::{Clock, format_timestamp, local_now};
use std::collections::HashSet;

pub struct Workbook {
    store: RowStore,
    query: ViewQuery,
    selection: Selection,
    editor: EditorState,
    notifications: Notifications,
    ui: UiState,
    logos: LogoServices,
    clock: Clock,
    busy: bool,
    progress: u8,
}

impl Default for Workbook {
    fn default() -> Self {
        Self::new()
    }
}

impl Workbook {
    pub fn new() -> Self {
        Self::with_settings(LogoServices::default(), Notifications::default())
    }

    pub fn with_settings(logos: LogoServices, notifications: Notifications) -> Self {
        Self {
            store: RowStore::new(),
            query: ViewQuery::default(),
            selection: Selection::new(),
            editor: EditorState::Idle,
            notifications,
            ui: UiState::default(),
            logos,
            clock: local_now,
            busy: false,
            progress: 0,
        }
    }

    /// Replace the time source used for `lastUpdated`.
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    /// Current time in the `lastUpdated` display format.
    pub fn stamp(&self) -> String {
        format_timestamp((self.clock)())
    }

    // ---------------------------
    // Rows
    // ---------------------------

    /// Prepend a blank "New Prospect" row and open it in the editor.
    pub fn add_record(&mut self) -> RecordId {
        let id = self.store.allocate_id();
        let record = Record::new(id, Record::NEW_PROSPECT, self.stamp());
        self.editor.start(&record);
        self.store.prepend(record);
        tracing::debug!(id, "record added");
        id
    }

    /// Append rows loaded from a file. Ids are reassigned; missing timestamps
    /// are stamped and missing logos derived from the website.
    pub fn import_records(&mut self, rows: Vec<Record>) -> Vec<RecordId> {
        let mut ids = Vec::with_capacity(rows.len());
        for mut row in rows {
            row.id = self.store.allocate_id();
            if row.last_updated.trim().is_empty() {
                row.last_updated = self.stamp();
            }
            if row.company_logo.as_deref().is_none_or(|l| l.trim().is_empty()) {
                row.company_logo = self.logos.logo_url(&row.company_website);
            }
            ids.push(row.id);
            self.store.append(row);
        }
        tracing::info!(count = ids.len(), "records imported");
        ids
    }

    pub fn delete_record(&mut self, id: RecordId) -> AppResult<Record> {
        let removed = self.store.delete(id).ok_or(AppError::RecordNotFound(id))?;
        self.selection.remove(id);
        if self.editor.editing_id() == Some(id) {
            self.editor.cancel();
        }
        self.notifications.success("Record deleted successfully");
        Ok(removed)
    }

    /// Delete every selected row. Returns how many rows were removed.
    pub fn delete_selected(&mut self) -> usize {
        if self.selection.is_empty() {
            self.notifications.warning("Please select rows to delete");
            return 0;
        }

        let ids: Vec<RecordId> = self.selection.ids().to_vec();
        let mut removed = 0;
        for id in ids {
            if self.store.delete(id).is_some() {
                removed += 1;
            }
            if self.editor.editing_id() == Some(id) {
                self.editor.cancel();
            }
        }
        self.selection.clear();
        self.notifications
            .success(format!("Deleted {} record{}", removed, plural(removed)));
        removed
    }

    pub fn record(&self, id: RecordId) -> Option<&Record> {
        self.store.get(id)
    }

    pub fn records(&self) -> &[Record] {
        self.store.rows()
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    // ---------------------------
    // Search / filter / sort
    // ---------------------------

    pub fn set_search(&mut self, term: impl Into<String>) {
        self.query.search = term.into();
    }

    pub fn toggle_filter(&mut self, status: EmailStatus) {
        self.query.toggle_filter(status);
    }

    pub fn clear_filters(&mut self) {
        self.query.clear_filters();
    }

    pub fn sort_by(&mut self, field: RecordField) {
        self.query.toggle_sort(field);
    }

    pub fn clear_sort(&mut self) {
        self.query.clear_sort();
    }

    pub fn query(&self) -> &ViewQuery {
        &self.query
    }

    pub fn set_query(&mut self, query: ViewQuery) {
        self.query = query;
    }

    /// Rows currently visible in the grid.
    pub fn display_rows(&self) -> Vec<&Record> {
        project(self.store.rows(), &self.query)
    }

    pub fn visible_ids(&self) -> Vec<RecordId> {
        self.display_rows().iter().map(|r| r.id).collect()
    }

    // ---------------------------
    // Selection
    // ---------------------------

    /// Select exactly the visible rows, or clear the selection.
    pub fn select_all(&mut self, checked: bool) {
        let visible = self.visible_ids();
        self.selection.select_all(checked, visible);
    }

    pub fn toggle_selection(&mut self, id: RecordId) -> AppResult<bool> {
        if !self.store.contains(id) {
            return Err(AppError::RecordNotFound(id));
        }
        Ok(self.selection.toggle(id))
    }

    pub fn all_selected(&self) -> bool {
        self.selection.all_selected(self.display_rows().len())
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    // ---------------------------
    // Inline editor
    // ---------------------------

    pub fn start_editing(&mut self, id: RecordId) -> AppResult<()> {
        let row = self.store.get(id).ok_or(AppError::RecordNotFound(id))?;
        self.editor.start(row);
        Ok(())
    }

    pub fn update_field(&mut self, field: RecordField, value: &str) -> AppResult<()> {
        self.editor.update_field(field, value)
    }

    /// Commit the edit buffer: derive the logo from the website, restamp and
    /// write it back. The editor is idle afterwards, even on error.
    pub fn save_editing(&mut self) -> AppResult<RecordId> {
        let mut buffer = self.editor.take()?;

        if let Some(logo) = self.logos.logo_url(&buffer.company_website) {
            buffer.company_logo = Some(logo);
        }
        buffer.last_updated = self.stamp();

        let id = buffer.id;
        if !self.store.update(buffer) {
            return Err(AppError::RecordNotFound(id));
        }
        self.notifications.success("Changes saved successfully");
        Ok(id)
    }

    pub fn cancel_editing(&mut self) {
        self.editor.cancel();
    }

    pub fn editor(&self) -> &EditorState {
        &self.editor
    }

    // ---------------------------
    // Enrichment support
    // ---------------------------

    pub(crate) fn begin_enrichment(&mut self) {
        self.busy = true;
        self.progress = 0;
    }

    pub(crate) fn set_progress(&mut self, progress: u8) {
        self.progress = progress;
    }

    pub(crate) fn finish_enrichment(&mut self) {
        self.busy = false;
        self.progress = 0;
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    pub fn progress(&self) -> u8 {
        self.progress
    }

    /// Merge a provider result into a stored row. Returns false when the row
    /// no longer exists.
    pub fn apply_enrichment(
        &mut self,
        id: RecordId,
        query: &str,
        result: &EnrichmentResult,
    ) -> bool {
        let stamp = self.stamp();
        let logo = self
            .logos
            .logo_url(&result.domain)
            .or_else(|| self.logos.logo_url(&result.website));

        let Some(row) = self.store.get_mut(id) else {
            return false;
        };

        row.company_name = match result.company_name.as_deref() {
            Some(name) if !name.is_empty() => name.to_string(),
            _ if !row.company_name.is_empty() => row.company_name.clone(),
            _ => query.to_string(),
        };
        row.company_website = result.website.clone();
        row.linkedin_url = result.linkedin.clone();
        row.email_waterfall = result.email_status;
        row.last_updated = stamp;
        if logo.is_some() {
            row.company_logo = logo;
        }
        true
    }

    /// Answer to a kill request while no enrichment is running.
    pub fn kill_idle(&mut self) {
        self.notifications.info("No active operations to stop");
    }

    // ---------------------------
    // Footer actions
    // ---------------------------

    /// Count rows sharing a company name (or imported label when unnamed).
    pub fn dedupe(&mut self) -> usize {
        let distinct: HashSet<&str> = self.store.iter().map(|r| r.dedupe_key()).collect();
        let duplicates = self.store.len() - distinct.len();

        if duplicates > 0 {
            self.notifications.info(format!(
                "Found {} potential duplicate{}",
                duplicates,
                plural(duplicates)
            ));
        } else {
            self.notifications.success("No duplicates found");
        }
        duplicates
    }

    pub fn set_view(&mut self, view: ActiveView) {
        self.ui.set_view(view);
        if view != ActiveView::Grid {
            self.notifications
                .info(format!("{} view coming soon", view.title()));
        }
    }

    pub fn toggle_auto_run(&mut self) -> bool {
        let enabled = self.ui.toggle_auto_run();
        if enabled {
            self.notifications.success("Auto run enabled");
        } else {
            self.notifications.info("Auto run disabled");
        }
        enabled
    }

    pub fn ui(&self) -> &UiState {
        &self.ui
    }

    pub fn logos(&self) -> &LogoServices {
        &self.logos
    }

    // ---------------------------
    // Notifications
    // ---------------------------

    pub fn notifications(&self) -> &Notifications {
        &self.notifications
    }

    pub fn notifications_mut(&mut self) -> &mut Notifications {
        &mut self.notifications
    }
}

pub(crate) fn plural(n: usize) -> &'static str {
    if n == 1 { "" } else { "s" }
}
