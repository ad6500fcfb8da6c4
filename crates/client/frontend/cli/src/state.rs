//! Frontend-only state layered over the game session.

use game_core::SelfCheck;

/// Top-level application mode determining input handling and UI layout.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum AppMode {
    /// Menus and battle, driven by the session.
    #[default]
    Normal,
    /// Read-only panel opened from the main menu; any key closes it.
    SideView(SideView),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SideView {
    Help(Vec<String>),
    SelfChecks(Vec<SelfCheck>),
}

impl SideView {
    pub fn title(&self) -> &'static str {
        match self {
            SideView::Help(_) => "Help",
            SideView::SelfChecks(_) => "Self-check",
        }
    }
}

/// Mutable UI state: mode, typed text and the last rejected input.
#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub mode: AppMode,
    /// Text typed at the seed prompt, submitted on Enter.
    pub input_buffer: String,
    /// Why the last input was rejected, cleared on the next accepted one.
    pub status: Option<String>,
}

impl AppState {
    pub fn is_side_view(&self) -> bool {
        matches!(self.mode, AppMode::SideView(_))
    }

    pub fn open(&mut self, view: SideView) {
        self.mode = AppMode::SideView(view);
    }

    pub fn close_side_view(&mut self) {
        self.mode = AppMode::Normal;
    }
}
