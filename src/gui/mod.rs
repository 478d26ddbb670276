pub mod app;
pub mod card;
pub mod confirm_modal;
pub mod error_modal;
pub mod home;
pub mod notice;
pub mod session_view;
pub mod settings_view;
pub mod theme;
pub mod top_bar;
pub mod word_table;

pub use app::{
    VocabApp,
    View,
};
