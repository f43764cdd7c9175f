use game_core::{EntityId, SelectionRegister};

/// Global selection register of the battle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Selection {
    current: Option<EntityId>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SelectionRegister for Selection {
    fn selected(&self) -> Option<EntityId> {
        self.current
    }

    fn select(&mut self, entity: EntityId) {
        if self.current != Some(entity) {
            tracing::debug!("select {} (was {:?})", entity, self.current);
        }
        self.current = Some(entity);
    }

    fn deselect(&mut self) {
        if let Some(entity) = self.current.take() {
            tracing::debug!("deselect {}", entity);
        }
    }
}
