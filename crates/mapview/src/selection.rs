use foundation::ParkId;

/// The park whose info popup is open, if any.
///
/// Transitions:
/// - `None` / `Selected(x)` --select(y)--> `Selected(y)`
/// - `Selected(x)` --close--> `None`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Selection {
    #[default]
    None,
    Selected(ParkId),
}

impl Selection {
    /// Selects `id`, replacing any previous selection without passing through `None`.
    ///
    /// Returns `true` if the selection changed.
    pub fn select(&mut self, id: ParkId) -> bool {
        if self.is_selected(&id) {
            return false;
        }
        *self = Selection::Selected(id);
        true
    }

    /// Returns `true` if something was selected.
    pub fn close(&mut self) -> bool {
        !matches!(std::mem::take(self), Selection::None)
    }

    pub fn id(&self) -> Option<&ParkId> {
        match self {
            Selection::None => None,
            Selection::Selected(id) => Some(id),
        }
    }

    pub fn is_selected(&self, id: &ParkId) -> bool {
        self.id() == Some(id)
    }
}
