use std::fmt;

use serde::{
    Deserialize,
    Serialize,
};

pub type WordId = u32;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Word {
    pub id: WordId,
    pub en: String,
    pub cn: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub example: Option<String>,
    /// 1-5 stars
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<u8>,
    #[serde(default)]
    pub learned: bool,
    #[serde(default)]
    pub is_favorite: bool,
}

impl Word {
    pub fn new(id: WordId, en: impl Into<String>, cn: impl Into<String>) -> Self {
        Self {
            id,
            en: en.into(),
            cn: cn.into(),
            example: None,
            difficulty: None,
            learned: false,
            is_favorite: false,
        }
    }

    pub fn difficulty_stars(&self) -> Option<String> {
        self.difficulty.map(|d| {
            let filled = d.clamp(1, 5) as usize;
            format!("{}{}", "★".repeat(filled), "☆".repeat(5 - filled))
        })
    }
}

/// Partial update merged into a [`Word`]. Fields left as `None` are untouched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WordUpdate {
    pub learned: Option<bool>,
    pub is_favorite: Option<bool>,
}

impl WordUpdate {
    pub fn learned(value: bool) -> Self {
        Self { learned: Some(value), ..Default::default() }
    }

    pub fn favorite(value: bool) -> Self {
        Self { is_favorite: Some(value), ..Default::default() }
    }

    pub fn apply_to(&self, word: &mut Word) {
        if let Some(learned) = self.learned {
            word.learned = learned;
        }
        if let Some(is_favorite) = self.is_favorite {
            word.is_favorite = is_favorite;
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum FontSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl FontSize {
    pub const ALL: [FontSize; 3] = [FontSize::Small, FontSize::Medium, FontSize::Large];

    pub fn label(&self) -> &'static str {
        match self {
            FontSize::Small => "Small",
            FontSize::Medium => "Medium",
            FontSize::Large => "Large",
        }
    }

    /// Point size of the headword on the card.
    pub fn card_points(&self) -> f32 {
        match self {
            FontSize::Small => 24.0,
            FontSize::Medium => 36.0,
            FontSize::Large => 48.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    pub dark_mode: bool,
    pub auto_pronounce: bool,
    pub random_order: bool,
    pub font_size: FontSize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            dark_mode: false,
            auto_pronounce: true,
            random_order: false,
            font_size: FontSize::Medium,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SettingsUpdate {
    pub dark_mode: Option<bool>,
    pub auto_pronounce: Option<bool>,
    pub random_order: Option<bool>,
    pub font_size: Option<FontSize>,
}

impl SettingsUpdate {
    pub fn apply_to(&self, settings: &mut Settings) {
        if let Some(dark_mode) = self.dark_mode {
            settings.dark_mode = dark_mode;
        }
        if let Some(auto_pronounce) = self.auto_pronounce {
            settings.auto_pronounce = auto_pronounce;
        }
        if let Some(random_order) = self.random_order {
            settings.random_order = random_order;
        }
        if let Some(font_size) = self.font_size {
            settings.font_size = font_size;
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FilterMode {
    #[default]
    All,
    Unlearned,
    Favorites,
}

impl FilterMode {
    pub const ALL: [FilterMode; 3] = [FilterMode::All, FilterMode::Unlearned, FilterMode::Favorites];

    /// Unknown values fall back to [`FilterMode::All`].
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "unlearned" => FilterMode::Unlearned,
            "favorites" => FilterMode::Favorites,
            _ => FilterMode::All,
        }
    }

    pub fn as_key(&self) -> &'static str {
        match self {
            FilterMode::All => "all",
            FilterMode::Unlearned => "unlearned",
            FilterMode::Favorites => "favorites",
        }
    }

    pub fn matches(&self, word: &Word) -> bool {
        match self {
            FilterMode::All => true,
            FilterMode::Unlearned => !word.learned,
            FilterMode::Favorites => word.is_favorite,
        }
    }

    pub fn empty_message(&self) -> &'static str {
        match self {
            FilterMode::Favorites => "You haven't saved any favorites yet.",
            _ => "You've learned everything in this category!",
        }
    }
}

impl fmt::Display for FilterMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_key())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Stats {
    pub total: usize,
    pub learned: usize,
    pub favorites: usize,
}

impl Stats {
    pub fn from_words(words: &[Word]) -> Self {
        Self {
            total: words.len(),
            learned: words.iter().filter(|w| w.learned).count(),
            favorites: words.iter().filter(|w| w.is_favorite).count(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.total - self.learned
    }

    pub fn percentage(&self) -> u32 {
        if self.total == 0 {
            return 0;
        }
        ((self.learned as f64 / self.total as f64) * 100.0).round() as u32
    }

    pub fn count_for(&self, mode: FilterMode) -> usize {
        match mode {
            FilterMode::All => self.total,
            FilterMode::Unlearned => self.remaining(),
            FilterMode::Favorites => self.favorites,
        }
    }
}

fn seed_word(
    id: WordId,
    en: &str,
    cn: &str,
    learned: bool,
    is_favorite: bool,
    difficulty: u8,
    example: &str,
) -> Word {
    Word {
        id,
        en: en.to_string(),
        cn: cn.to_string(),
        example: Some(example.to_string()),
        difficulty: Some(difficulty),
        learned,
        is_favorite,
    }
}

/// Built-in word list used on first run, on reset and when stored data is unreadable.
pub fn seed_words() -> Vec<Word> {
    vec![
        seed_word(1, "apple", "苹果", false, false, 1, "I ate an apple for breakfast."),
        seed_word(
            2,
            "serendipity",
            "意外发现珍奇事物的本领",
            false,
            true,
            5,
            "Meeting you here was pure serendipity.",
        ),
        seed_word(3, "book", "书", true, false, 1, "This is a good book."),
        seed_word(4, "ethereal", "飘渺的；超凡的", false, false, 4, "The music had an ethereal quality."),
        seed_word(
            5,
            "resilience",
            "恢复力；弹力",
            false,
            false,
            3,
            "She showed great resilience after the setback.",
        ),
        seed_word(6, "ephemeral", "短暂的", false, false, 4, "Fashion trends are often ephemeral."),
        seed_word(7, "galaxy", "星系", false, false, 2, "The Milky Way is our galaxy."),
        seed_word(8, "algorithm", "算法", true, false, 3, "The search algorithm is very efficient."),
        seed_word(9, "coffee", "咖啡", true, true, 1, "I need coffee to wake up."),
        seed_word(10, "zebra", "斑马", false, false, 1, "Zebras have black and white stripes."),
    ]
}
