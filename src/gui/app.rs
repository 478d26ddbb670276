use std::path::PathBuf;

use eframe::egui;

use super::{
    confirm_modal::ConfirmModal,
    error_modal::ErrorModal,
    home::home_panel,
    notice::Notice,
    session_view::session_panel,
    settings_view::{
        settings_panel,
        SettingsAction,
    },
    theme::{
        apply_dark_mode,
        set_theme,
        Theme,
    },
    top_bar::{
        TopBar,
        TopBarAction,
    },
    word_table::WordTableAction,
};
use crate::{
    core::{
        status,
        streak,
        DeckCommand,
        DeckError,
        DeckEvent,
        DeckSession,
        FilterMode,
        GestureConfig,
        GestureInterpreter,
        SettingsStore,
        StreakTracker,
        WordStore,
    },
    persistence::FileBlobStore,
    speech::{
        self,
        LogPronouncer,
        Pronouncer,
    },
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Home,
    Session,
    Settings,
}

impl View {
    /// Where the back button leads. Settings returns to a running session.
    pub fn back(self, has_session: bool) -> View {
        match self {
            View::Settings if has_session => View::Session,
            _ => View::Home,
        }
    }
}

pub struct VocabApp {
    // Stores
    pub words: WordStore<FileBlobStore>,
    pub settings: SettingsStore<FileBlobStore>,
    pub streak: StreakTracker<FileBlobStore>,

    // Session
    pub view: View,
    pub session: Option<DeckSession>,
    pub gesture: GestureInterpreter,

    // UI State
    pub theme: Theme,
    pub notice: Notice,
    pub error_modal: ErrorModal,
    pub reset_modal: ConfirmModal,

    // External Services
    pronouncer: Box<dyn Pronouncer>,
}

impl VocabApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let blobs = FileBlobStore::in_app_data_dir();
        tracing::info!("Using data directory {}", blobs.dir().display());

        let app = Self {
            words: WordStore::load(blobs.clone()),
            settings: SettingsStore::load(blobs.clone()),
            streak: StreakTracker::load(blobs),

            view: View::Home,
            session: None,
            gesture: GestureInterpreter::new(GestureConfig::default()),

            theme: Theme::default(),
            notice: Notice::new(),
            error_modal: ErrorModal::new(),
            reset_modal: ConfirmModal::new("reset_modal"),

            pronouncer: Box::new(LogPronouncer),
        };

        set_theme(&cc.egui_ctx, &app.theme);
        apply_dark_mode(&cc.egui_ctx, app.settings.get().dark_mode);
        cc.egui_ctx.set_zoom_factor(1.1);

        app
    }

    pub fn modal_open(&self) -> bool {
        self.reset_modal.is_open() || self.error_modal.is_open()
    }

    pub fn go_home(&mut self) {
        self.view = View::Home;
        self.session = None;
        self.gesture.cancel();
    }

    pub fn go_back(&mut self) {
        match self.view.back(self.session.is_some()) {
            View::Home => self.go_home(),
            view => {
                self.view = view;
                self.gesture.cancel();
            }
        }
    }

    pub fn open_settings(&mut self) {
        self.view = View::Settings;
        self.gesture.cancel();
    }

    pub fn start_session(&mut self, mode: FilterMode) {
        let settings = self.settings.get();
        let session = DeckSession::enter(
            self.words.get_all(),
            mode,
            settings.random_order,
            self.gesture.config().mapping,
        );
        tracing::info!("Starting {} session with {} words", mode, session.working_set().len());

        self.session = Some(session);
        self.view = View::Session;
        self.gesture.cancel();
        self.streak.record_study(streak::today());
    }

    pub fn run_command(&mut self, command: DeckCommand) {
        let Some(session) = &mut self.session else {
            return;
        };
        if let Some(DeckEvent::EndOfDeck) = session.apply(command, &mut self.words) {
            self.notice.set_message("You've reached the end of this list!");
        }
    }

    /// Speaks the card that just came into view when auto-pronounce is on.
    pub fn announce_card(&mut self) {
        if let Some(session) = &mut self.session {
            speech::announce_card_change(
                session,
                self.words.get_all(),
                self.settings.get().auto_pronounce,
                self.pronouncer.as_mut(),
            );
        }
    }

    pub fn pronounce_current(&mut self) {
        let current = self.session.as_ref().and_then(|s| s.current(self.words.get_all()));
        if let Some(word) = current {
            self.pronouncer.speak(&word.en);
        }
    }

    pub fn apply_table_action(&mut self, action: WordTableAction) {
        let changed = match action {
            WordTableAction::ToggleLearned(id) => status::toggle_learned(&mut self.words, id),
            WordTableAction::ToggleFavorite(id) => status::toggle_favorite(&mut self.words, id),
        };
        if changed {
            self.refresh_session();
        }
    }

    pub fn apply_settings_action(&mut self, ctx: &egui::Context, action: SettingsAction) {
        match action {
            SettingsAction::ToggleAutoPronounce => self.settings.toggle_auto_pronounce(),
            SettingsAction::ToggleRandomOrder => {
                self.settings.toggle_random_order();
                let random_order = self.settings.get().random_order;
                if let Some(session) = &mut self.session {
                    session.set_random_order(self.words.get_all(), random_order);
                }
            }
            SettingsAction::ToggleDarkMode => self.toggle_dark_mode(ctx),
            SettingsAction::SetFontSize(size) => self.settings.set_font_size(size),
            SettingsAction::ExportWords => match self.export_words() {
                Ok(path) => {
                    self.notice.set_message(format!("Exported to {}", path.display()));
                }
                Err(DeckError::Cancelled) => {}
                Err(e) => {
                    tracing::error!("Export failed: {}", e);
                    self.error_modal.show_error(
                        "Export Error",
                        "Unable to export the word list",
                        Some(e.to_string()),
                    );
                }
            },
            SettingsAction::ImportWords => match self.import_words() {
                Ok(count) => {
                    self.notice.set_message(format!("Imported {} words", count));
                }
                Err(DeckError::Cancelled) => {}
                Err(e) => {
                    tracing::error!("Import failed: {}", e);
                    self.error_modal.show_error(
                        "Import Error",
                        "Unable to import the word list",
                        Some(e.to_string()),
                    );
                }
            },
            SettingsAction::ResetProgress => {
                self.reset_modal.ask(
                    "Are you sure you want to reset all progress and words?",
                    "Reset",
                );
            }
        }
    }

    fn toggle_dark_mode(&mut self, ctx: &egui::Context) {
        self.settings.toggle_dark_mode();
        apply_dark_mode(ctx, self.settings.get().dark_mode);
    }

    fn refresh_session(&mut self) {
        if let Some(session) = &mut self.session {
            session.refresh(self.words.get_all());
        }
    }

    fn export_words(&self) -> Result<PathBuf, DeckError> {
        let date = chrono::Local::now().format("%Y-%m-%d");
        let default_filename = format!("wordswipe_words_{}.json", date);

        let path = rfd::FileDialog::new()
            .add_filter("JSON", &["json"])
            .set_file_name(&default_filename)
            .save_file()
            .ok_or(DeckError::Cancelled)?;

        std::fs::write(&path, self.words.export_json()?)?;
        tracing::info!("Exported {} words to {}", self.words.len(), path.display());
        Ok(path)
    }

    fn import_words(&mut self) -> Result<usize, DeckError> {
        let path = rfd::FileDialog::new()
            .add_filter("JSON", &["json"])
            .pick_file()
            .ok_or(DeckError::Cancelled)?;

        let json = std::fs::read_to_string(&path)?;
        let count = self.words.import_json(&json)?;
        tracing::info!("Imported {} words from {}", count, path.display());
        self.refresh_session();
        Ok(count)
    }
}

impl eframe::App for VocabApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if let Some(action) = TopBar::show(ctx, self.view, self.settings.get().dark_mode) {
            match action {
                TopBarAction::Back => self.go_back(),
                TopBarAction::OpenSettings => self.open_settings(),
                TopBarAction::ToggleDarkMode => self.toggle_dark_mode(ctx),
            }
        }

        match self.view {
            View::Home => home_panel(ctx, self),
            View::Session => session_panel(ctx, self),
            View::Settings => settings_panel(ctx, self),
        }

        if let Some(true) = self.reset_modal.show(ctx) {
            self.words.reset();
            self.refresh_session();
            self.notice.set_message("Reset complete.");
        }

        self.error_modal.show(ctx);
        self.notice.show(ctx, &self.theme);
    }
}
