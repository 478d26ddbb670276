#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    Forward,
    Backward,
    #[default]
    None,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorState {
    Active { position: usize, last_direction: Direction },
    Empty,
}

/// Boundary notification returned by [`DeckCursor::advance`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EndOfDeck;

/// Position within a working set of known length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeckCursor {
    state: CursorState,
    len: usize,
}

impl DeckCursor {
    pub fn new(len: usize) -> Self {
        let state = if len == 0 {
            CursorState::Empty
        } else {
            CursorState::Active { position: 0, last_direction: Direction::None }
        };
        Self { state, len }
    }

    pub fn state(&self) -> CursorState {
        self.state
    }

    pub fn position(&self) -> Option<usize> {
        match self.state {
            CursorState::Active { position, .. } => Some(position),
            CursorState::Empty => None,
        }
    }

    pub fn last_direction(&self) -> Direction {
        match self.state {
            CursorState::Active { last_direction, .. } => last_direction,
            CursorState::Empty => Direction::None,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        matches!(self.state, CursorState::Empty)
    }

    pub fn is_at_start(&self) -> bool {
        self.position().map_or(true, |p| p == 0)
    }

    pub fn is_at_end(&self) -> bool {
        self.position().map_or(true, |p| p + 1 >= self.len)
    }

    pub fn advance(&mut self) -> Result<(), EndOfDeck> {
        match self.state {
            CursorState::Active { position, .. } if position + 1 < self.len => {
                self.state =
                    CursorState::Active { position: position + 1, last_direction: Direction::Forward };
                Ok(())
            }
            CursorState::Active { .. } => Err(EndOfDeck),
            CursorState::Empty => Ok(()),
        }
    }

    pub fn retreat(&mut self) {
        if let CursorState::Active { position, .. } = self.state {
            if position > 0 {
                self.state = CursorState::Active {
                    position: position - 1,
                    last_direction: Direction::Backward,
                };
            }
        }
    }

    /// Re-clamps to the nearest valid index; does not follow the previously shown word.
    pub fn on_working_set_changed(&mut self, new_len: usize) {
        self.len = new_len;
        if new_len == 0 {
            self.state = CursorState::Empty;
            return;
        }
        self.state = match self.state {
            CursorState::Active { position, last_direction } => {
                CursorState::Active { position: position.min(new_len - 1), last_direction }
            }
            CursorState::Empty => {
                CursorState::Active { position: 0, last_direction: Direction::None }
            }
        };
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_initial_state() {
        assert_eq!(DeckCursor::new(0).state(), CursorState::Empty);
        assert_eq!(DeckCursor::new(3).position(), Some(0));
        assert_eq!(DeckCursor::new(3).last_direction(), Direction::None);
    }

    #[test]
    fn test_advance_and_retreat() {
        let mut cursor = DeckCursor::new(3);
        assert_eq!(cursor.advance(), Ok(()));
        assert_eq!(cursor.position(), Some(1));
        assert_eq!(cursor.last_direction(), Direction::Forward);

        cursor.retreat();
        assert_eq!(cursor.position(), Some(0));
        assert_eq!(cursor.last_direction(), Direction::Backward);
    }

    #[test]
    fn test_advance_at_end_signals_and_keeps_state() {
        let mut cursor = DeckCursor::new(2);
        cursor.advance().unwrap();
        let before = cursor;
        assert_eq!(cursor.advance(), Err(EndOfDeck));
        assert_eq!(cursor, before);
        assert_eq!(cursor.advance(), Err(EndOfDeck));
        assert_eq!(cursor, before);
    }

    #[test]
    fn test_retreat_at_start_is_silent_noop() {
        let mut cursor = DeckCursor::new(2);
        let before = cursor;
        cursor.retreat();
        assert_eq!(cursor, before);
    }

    #[test]
    fn test_single_card_deck() {
        let mut cursor = DeckCursor::new(1);
        assert!(cursor.is_at_start());
        assert!(cursor.is_at_end());
        assert_eq!(cursor.advance(), Err(EndOfDeck));
    }

    #[test]
    fn test_empty_navigation_is_noop() {
        let mut cursor = DeckCursor::new(0);
        assert_eq!(cursor.advance(), Ok(()));
        cursor.retreat();
        assert!(cursor.is_empty());
    }

    #[test]
    fn test_working_set_change_clamps() {
        let mut cursor = DeckCursor::new(7);
        for _ in 0..6 {
            cursor.advance().unwrap();
        }
        assert_eq!(cursor.position(), Some(6));

        cursor.on_working_set_changed(6);
        assert_eq!(cursor.position(), Some(5));

        cursor.on_working_set_changed(10);
        assert_eq!(cursor.position(), Some(5));
    }

    #[test]
    fn test_empty_and_back() {
        let mut cursor = DeckCursor::new(3);
        cursor.advance().unwrap();
        cursor.on_working_set_changed(0);
        assert!(cursor.is_empty());
        assert_eq!(cursor.position(), None);

        cursor.on_working_set_changed(2);
        assert_eq!(cursor.position(), Some(0));
    }

    #[derive(Debug, Clone)]
    enum Op {
        Advance,
        Retreat,
        Resize(usize),
    }

    fn op_strategy() -> impl Strategy<Value = Op> {
        prop_oneof![Just(Op::Advance), Just(Op::Retreat), (0usize..12).prop_map(Op::Resize)]
    }

    proptest! {
        #[test]
        fn prop_position_stays_in_bounds(initial in 0usize..12, ops in prop::collection::vec(op_strategy(), 0..64)) {
            let mut cursor = DeckCursor::new(initial);
            for op in ops {
                match op {
                    Op::Advance => { let _ = cursor.advance(); }
                    Op::Retreat => cursor.retreat(),
                    Op::Resize(len) => cursor.on_working_set_changed(len),
                }
                match cursor.position() {
                    Some(p) => prop_assert!(p < cursor.len()),
                    None => prop_assert_eq!(cursor.len(), 0),
                }
                prop_assert_eq!(cursor.is_empty(), cursor.len() == 0);
            }
        }
    }
}
