use super::{
    cursor::Direction,
    models::WordId,
};

/// Drag distance, in points, that must be exceeded before a release counts as a swipe.
pub const DEFAULT_SWIPE_THRESHOLD: f32 = 100.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Swipe {
    Left,
    Right,
}

/// Which way a swipe moves through the deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SwipeMapping {
    #[default]
    RightAdvances,
    RightRetreats,
}

impl SwipeMapping {
    pub fn direction(&self, swipe: Swipe) -> Direction {
        match (self, swipe) {
            (SwipeMapping::RightAdvances, Swipe::Right)
            | (SwipeMapping::RightRetreats, Swipe::Left) => Direction::Forward,
            (SwipeMapping::RightAdvances, Swipe::Left)
            | (SwipeMapping::RightRetreats, Swipe::Right) => Direction::Backward,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureConfig {
    pub threshold: f32,
    pub mapping: SwipeMapping,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self { threshold: DEFAULT_SWIPE_THRESHOLD, mapping: SwipeMapping::default() }
    }
}

#[derive(Debug, Clone, Default)]
pub struct GestureInterpreter {
    config: GestureConfig,
    offset: Option<f32>,
    card: Option<WordId>,
}

impl GestureInterpreter {
    pub fn new(config: GestureConfig) -> Self {
        Self { config, offset: None, card: None }
    }

    pub fn config(&self) -> &GestureConfig {
        &self.config
    }

    /// Binds the gesture to the card being drawn. Showing a different card drops any drag
    /// in progress so the new card starts at rest.
    pub fn attach(&mut self, card: WordId) {
        if self.card != Some(card) {
            self.card = Some(card);
            self.cancel();
        }
    }

    pub fn begin(&mut self) {
        self.offset = Some(0.0);
    }

    pub fn is_active(&self) -> bool {
        self.offset.is_some()
    }

    /// Adds a pointer delta. Ignored while no gesture is in progress.
    pub fn drag_by(&mut self, delta: f32) {
        if let Some(offset) = &mut self.offset {
            *offset += delta;
        }
    }

    /// Current net offset, `0.0` when idle.
    pub fn offset(&self) -> f32 {
        self.offset.unwrap_or(0.0)
    }

    pub fn cancel(&mut self) {
        self.offset = None;
    }

    /// Ends the gesture and classifies the net offset. Inside the dead zone the card snaps back.
    pub fn release(&mut self) -> Option<Swipe> {
        let offset = self.offset.take()?;
        classify(offset, self.config.threshold)
    }
}

pub fn classify(offset: f32, threshold: f32) -> Option<Swipe> {
    if offset > threshold {
        Some(Swipe::Right)
    } else if offset < -threshold {
        Some(Swipe::Left)
    } else {
        None
    }
}
