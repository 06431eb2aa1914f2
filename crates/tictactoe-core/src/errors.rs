//! Failure slots, one per collaborator feeding the details page.

/// The collaborator a failure came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collaborator {
    Metadata,
    Factory,
    Game,
    Token,
    Action,
}

/// Latest error message of each collaborator. A success clears only its
/// own slot, so one failing source never hides or overwrites another.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CollaboratorErrors {
    pub metadata: Option<String>,
    pub factory: Option<String>,
    pub game: Option<String>,
    pub token: Option<String>,
    pub action: Option<String>,
}

impl CollaboratorErrors {
    fn slot_mut(&mut self, source: Collaborator) -> &mut Option<String> {
        match source {
            Collaborator::Metadata => &mut self.metadata,
            Collaborator::Factory => &mut self.factory,
            Collaborator::Game => &mut self.game,
            Collaborator::Token => &mut self.token,
            Collaborator::Action => &mut self.action,
        }
    }

    pub fn get(&self, source: Collaborator) -> Option<&str> {
        match source {
            Collaborator::Metadata => self.metadata.as_deref(),
            Collaborator::Factory => self.factory.as_deref(),
            Collaborator::Game => self.game.as_deref(),
            Collaborator::Token => self.token.as_deref(),
            Collaborator::Action => self.action.as_deref(),
        }
    }

    pub fn set(&mut self, source: Collaborator, message: impl Into<String>) {
        *self.slot_mut(source) = Some(message.into());
    }

    pub fn clear(&mut self, source: Collaborator) {
        *self.slot_mut(source) = None;
    }

    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }

    /// Non-empty slots in display order.
    pub fn iter(&self) -> impl Iterator<Item = (Collaborator, &str)> {
        [
            Collaborator::Metadata,
            Collaborator::Factory,
            Collaborator::Game,
            Collaborator::Token,
            Collaborator::Action,
        ]
        .into_iter()
        .filter_map(|c| self.get(c).map(|msg| (c, msg)))
    }
}
