use crate::deck::{Deck, Slide, StepDirection};
use crate::errors::{PresenterError, Result};

/// Navigation commands routed into the active session. Keyboard and pointer
/// input both reduce to these.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavAction {
    Advance,
    Retreat,
    First,
    Last,
    Exit,
}

/// Visual state of the prev/close/next affordance. Recomputed after every
/// index-changing transition, never after a pure step reveal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ControlsState {
    pub at_first: bool,
    pub at_last: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    Handled,
    ExitRequested,
}

/// The live state machine for one presentation being navigated.
///
/// `current == None` means the session exists but has not advanced to its
/// first slide yet. The session owns its deck clone exclusively; the
/// registry keeps the pristine copy.
#[derive(Debug)]
pub struct PresentationSession {
    deck: Deck,
    current: Option<usize>,
    controls: ControlsState,
}

impl PresentationSession {
    pub fn new(deck: Deck) -> Result<Self> {
        if deck.slides.is_empty() {
            return Err(PresenterError::MissingSource {
                context: format!("presentation '{}' has no slides", deck.display_title()),
            });
        }
        Ok(Self {
            deck,
            current: None,
            controls: ControlsState::default(),
        })
    }

    /// Routes a navigation command. `Exit` is surfaced to the owner instead
    /// of tearing the session down from the inside.
    pub fn apply(&mut self, action: NavAction) -> SessionEvent {
        match action {
            NavAction::Advance => self.advance(),
            NavAction::Retreat => self.retreat(),
            NavAction::First => self.jump_to_first(),
            NavAction::Last => self.jump_to_last(),
            NavAction::Exit => return SessionEvent::ExitRequested,
        }
        SessionEvent::Handled
    }

    /// Reveals the next step of the current slide, or moves to the next
    /// slide once the current one is exhausted. No-op on the last slide.
    pub fn advance(&mut self) {
        let next = self.current.map_or(0, |i| i + 1);
        if next >= self.deck.slides.len() {
            return;
        }
        if let Some(i) = self.current {
            if self.deck.slides[i].step(StepDirection::Forward) {
                return;
            }
            self.deck.slides[i].hide();
        }
        self.show_slide(next);
    }

    /// Reverts the last revealed step of the current slide, or moves to the
    /// previous slide. No-op on the first slide and before the start.
    ///
    /// The previous slide is entered with its markers exactly as they were
    /// left; retreat neither pre-reveals nor resets them.
    pub fn retreat(&mut self) {
        let Some(i) = self.current else {
            return;
        };
        if i == 0 {
            return;
        }
        if self.deck.slides[i].step(StepDirection::Backward) {
            return;
        }
        self.deck.slides[i].hide();
        self.show_slide(i - 1);
    }

    /// Forced jump to slide 0, clearing every step marker in the whole deck.
    pub fn jump_to_first(&mut self) {
        self.deck.reset_steps();
        if let Some(i) = self.current {
            self.deck.slides[i].hide();
        }
        self.show_slide(0);
    }

    /// Forced jump to the last slide. Step markers elsewhere are untouched.
    pub fn jump_to_last(&mut self) {
        if let Some(i) = self.current {
            self.deck.slides[i].hide();
        }
        self.show_slide(self.deck.slides.len() - 1);
    }

    /// Exit: hides all slides, clears all step markers, and returns the
    /// session to its not-started state. The owner drops it afterwards.
    pub fn teardown(&mut self) {
        self.deck.hide_all();
        self.deck.reset_steps();
        self.current = None;
        self.controls = ControlsState::default();
    }

    fn show_slide(&mut self, index: usize) {
        self.deck.slides[index].show();
        self.current = Some(index);
        self.controls = ControlsState {
            at_first: index == 0,
            at_last: index + 1 == self.deck.slides.len(),
        };
    }

    pub fn current_index(&self) -> Option<usize> {
        self.current
    }

    pub fn current_slide(&self) -> Option<&Slide> {
        self.current.map(|i| &self.deck.slides[i])
    }

    pub fn slide_count(&self) -> usize {
        self.deck.slide_count()
    }

    pub fn controls(&self) -> ControlsState {
        self.controls
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }
}
