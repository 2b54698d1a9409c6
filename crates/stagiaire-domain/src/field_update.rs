/// Three-state update for optional fields in partial updates.
///
/// `NoChange` keeps the stored value, `Set` replaces it and `Clear` removes it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldUpdate<T> {
    NoChange,
    Set(T),
    Clear,
}

impl<T> Default for FieldUpdate<T> {
    fn default() -> Self {
        FieldUpdate::NoChange
    }
}

impl<T> FieldUpdate<T> {
    pub fn apply_to(self, field: &mut Option<T>) {
        match self {
            FieldUpdate::NoChange => {}
            FieldUpdate::Set(value) => *field = Some(value),
            FieldUpdate::Clear => *field = None,
        }
    }

    pub fn is_change(&self) -> bool {
        !matches!(self, FieldUpdate::NoChange)
    }

    /// `Some(v)` becomes `Set(v)`, `None` leaves the field alone.
    pub fn from_flag(value: Option<T>) -> Self {
        value.map_or(FieldUpdate::NoChange, FieldUpdate::Set)
    }
}
