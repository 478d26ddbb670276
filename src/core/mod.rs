pub mod cursor;
pub mod errors;
pub mod gesture;
pub mod models;
pub mod session;
pub mod session_filter;
pub mod settings_store;
pub mod status;
pub mod streak;
pub mod word_store;

pub use cursor::{
    CursorState,
    DeckCursor,
    Direction,
};
pub use errors::DeckError;
pub use gesture::{
    GestureConfig,
    GestureInterpreter,
    Swipe,
    SwipeMapping,
};
pub use models::{
    FilterMode,
    FontSize,
    Settings,
    Stats,
    Word,
    WordId,
};
pub use session::{
    DeckCommand,
    DeckEvent,
    DeckSession,
};
pub use settings_store::SettingsStore;
pub use streak::StreakTracker;
pub use word_store::WordStore;
