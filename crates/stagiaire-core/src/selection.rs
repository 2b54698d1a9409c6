//! Single-item selection over a list whose length can change between frames.

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SelectionState {
    selected: Option<usize>,
}

impl SelectionState {
    pub fn new() -> Self {
        Self { selected: None }
    }

    /// Starts with the first row selected when the list is not empty.
    pub fn first_of(len: usize) -> Self {
        Self {
            selected: (len > 0).then_some(0),
        }
    }

    pub fn get(&self) -> Option<usize> {
        self.selected
    }

    pub fn set(&mut self, index: Option<usize>) {
        self.selected = index;
    }

    pub fn clear(&mut self) {
        self.selected = None;
    }

    pub fn is_selected(&self, index: usize) -> bool {
        self.selected == Some(index)
    }

    /// Moves down, stopping at the last row.
    pub fn next(&mut self, len: usize) {
        if len == 0 {
            self.selected = None;
            return;
        }
        self.selected = Some(match self.selected {
            Some(idx) => (idx + 1).min(len - 1),
            None => 0,
        });
    }

    /// Moves up, stopping at the first row.
    pub fn prev(&mut self, len: usize) {
        if len == 0 {
            self.selected = None;
            return;
        }
        self.selected = Some(match self.selected {
            Some(idx) => idx.saturating_sub(1).min(len - 1),
            None => 0,
        });
    }

    /// Moves down and wraps to the top; used by the sidebar.
    pub fn next_wrapping(&mut self, len: usize) {
        if len == 0 {
            self.selected = None;
            return;
        }
        self.selected = Some(match self.selected {
            Some(idx) if idx + 1 < len => idx + 1,
            _ => 0,
        });
    }

    pub fn prev_wrapping(&mut self, len: usize) {
        if len == 0 {
            self.selected = None;
            return;
        }
        self.selected = Some(match self.selected {
            Some(0) | None => len - 1,
            Some(idx) => (idx - 1).min(len - 1),
        });
    }

    /// Keeps the selection inside `0..len` after the list shrank or grew.
    pub fn clamp(&mut self, len: usize) {
        self.selected = match (self.selected, len) {
            (_, 0) => None,
            (Some(idx), _) if idx >= len => Some(len - 1),
            (None, _) => Some(0),
            (current, _) => current,
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_of() {
        assert_eq!(SelectionState::first_of(3).get(), Some(0));
        assert_eq!(SelectionState::first_of(0).get(), None);
    }

    #[test]
    fn test_next_prev_stop_at_edges() {
        let mut selection = SelectionState::new();
        selection.next(3);
        assert_eq!(selection.get(), Some(0));
        selection.next(3);
        selection.next(3);
        selection.next(3);
        assert_eq!(selection.get(), Some(2));
        selection.prev(3);
        assert_eq!(selection.get(), Some(1));
        selection.prev(3);
        selection.prev(3);
        assert_eq!(selection.get(), Some(0));
    }

    #[test]
    fn test_wrapping() {
        let mut selection = SelectionState::first_of(3);
        selection.prev_wrapping(3);
        assert_eq!(selection.get(), Some(2));
        selection.next_wrapping(3);
        assert_eq!(selection.get(), Some(0));
    }

    #[test]
    fn test_empty_list_clears() {
        let mut selection = SelectionState::first_of(2);
        selection.next(0);
        assert_eq!(selection.get(), None);
    }

    #[test]
    fn test_clamp() {
        let mut selection = SelectionState::new();
        selection.set(Some(7));
        selection.clamp(4);
        assert_eq!(selection.get(), Some(3));
        selection.clamp(0);
        assert_eq!(selection.get(), None);
        selection.clamp(2);
        assert_eq!(selection.get(), Some(0));
    }
}
