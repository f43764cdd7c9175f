use crate::state::EntityId;

/// Global "currently selected placed object" register.
///
/// At most one object is selected at a time; selecting replaces the previous
/// selection and deselecting clears it regardless of who holds it.
pub trait SelectionRegister {
    fn selected(&self) -> Option<EntityId>;

    fn select(&mut self, entity: EntityId);

    fn deselect(&mut self);

    fn is_selected(&self, entity: EntityId) -> bool {
        self.selected() == Some(entity)
    }

    fn has_selection(&self) -> bool {
        self.selected().is_some()
    }
}

impl SelectionRegister for Option<EntityId> {
    fn selected(&self) -> Option<EntityId> {
        *self
    }

    fn select(&mut self, entity: EntityId) {
        *self = Some(entity);
    }

    fn deselect(&mut self) {
        *self = None;
    }
}
