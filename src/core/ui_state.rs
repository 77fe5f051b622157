//! View-level flags of a session, kept in one record.

use clap::ValueEnum;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ActiveView {
    #[default]
    Grid,
    Engagement,
    Insights,
}

impl ActiveView {
    pub fn title(&self) -> &'static str {
        match self {
            ActiveView::Grid => "Grid",
            ActiveView::Engagement => "User Engagement",
            ActiveView::Insights => "Customer Insights",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UiState {
    pub active_view: ActiveView,
    pub auto_run: bool,
}

impl UiState {
    /// Switch view; returns true when the view actually changed.
    pub fn set_view(&mut self, view: ActiveView) -> bool {
        let changed = self.active_view != view;
        self.active_view = view;
        changed
    }

    /// Flip auto-run and return the new value.
    pub fn toggle_auto_run(&mut self) -> bool {
        self.auto_run = !self.auto_run;
        self.auto_run
    }
}
