use crate::deck::Deck;
use crate::errors::{PresenterError, Result};
use crate::session::PresentationSession;

/// Catalog of available presentations. Entry ids are indices into the load
/// order and stay stable until the catalog is replaced.
///
/// The registry never owns a session; the app holds the zero-or-one live
/// session and replaces it when a new presentation is started.
#[derive(Debug, Default)]
pub struct PresentationRegistry {
    decks: Vec<Deck>,
}

impl PresentationRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Populates the catalog once. A second call while a catalog is present
    /// is a no-op; use [`reload`](Self::reload) to replace it.
    pub fn initialize(&mut self, decks: Vec<Deck>) {
        if !self.decks.is_empty() {
            return;
        }
        self.decks = decks;
    }

    /// Unconditionally replaces the catalog (user opened a new folder).
    pub fn reload(&mut self, decks: Vec<Deck>) {
        self.decks = decks;
    }

    pub fn is_empty(&self) -> bool {
        self.decks.is_empty()
    }

    pub fn len(&self) -> usize {
        self.decks.len()
    }

    /// Menu entries in load order: `(id, display title)`.
    pub fn entries(&self) -> impl Iterator<Item = (usize, &str)> {
        self.decks
            .iter()
            .enumerate()
            .map(|(id, deck)| (id, deck.display_title()))
    }

    /// Instantiates a session for the given entry and advances it straight
    /// to its first slide. The session gets its own pristine deck clone, so
    /// every start begins with zero active steps.
    pub fn start(&self, id: usize) -> Result<PresentationSession> {
        let deck = self
            .decks
            .get(id)
            .cloned()
            .ok_or(PresenterError::UnknownPresentation { id })?;
        let mut session = PresentationSession::new(deck)?;
        session.advance();
        Ok(session)
    }
}
