#[cfg(test)]
mod tests {
    use crate::app::{Mode, PresenterApp};
    use crate::deck::{Block, Deck, Slide, StepStyle};
    use crate::errors::PresenterError;
    use crate::registry::PresentationRegistry;
    use crate::session::PresentationSession;
    use crate::settings::Settings;
    use std::path::PathBuf;

    fn make_slide(steps: usize) -> Slide {
        let mut blocks = vec![Block::fixed("intro")];
        for n in 0..steps {
            blocks.push(Block::step(format!("step {n}"), StepStyle::default()));
        }
        Slide::new(None, blocks)
    }

    fn make_deck(step_counts: &[usize]) -> Deck {
        Deck::new(
            PathBuf::from("/test/demo.deck"),
            Some("Demo".to_string()),
            step_counts.iter().map(|&s| make_slide(s)).collect(),
        )
    }

    /// A session as the registry hands it out: already on its first slide.
    fn started_session(step_counts: &[usize]) -> PresentationSession {
        let mut session = PresentationSession::new(make_deck(step_counts)).unwrap();
        session.advance();
        session
    }

    #[test]
    fn advance_stops_at_last_slide() {
        let mut session = started_session(&[0, 0, 0]);
        session.advance();
        session.advance();
        assert_eq!(session.current_index(), Some(2));

        session.advance();
        assert_eq!(session.current_index(), Some(2));
    }

    #[test]
    fn retreat_at_first_slide_is_noop() {
        let mut session = started_session(&[2, 0]);
        session.advance();
        assert_eq!(session.current_index(), Some(0));
        assert_eq!(session.deck().slides[0].active_step_count(), 1);

        // Retreat never runs on slide 0, so the revealed step stays put
        session.retreat();
        assert_eq!(session.current_index(), Some(0));
        assert_eq!(session.deck().slides[0].active_step_count(), 1);
    }

    #[test]
    fn retreat_before_start_is_noop() {
        let mut session = PresentationSession::new(make_deck(&[0, 0])).unwrap();
        session.retreat();
        assert_eq!(session.current_index(), None);
    }

    #[test]
    fn step_reveal_and_revert_exhaustion() {
        let mut slide = make_slide(3);

        for _ in 0..3 {
            assert!(slide.reveal_next_step());
        }
        assert!(!slide.reveal_next_step());
        assert_eq!(slide.active_step_count(), 3);

        for _ in 0..3 {
            assert!(slide.revert_last_step());
        }
        assert!(!slide.revert_last_step());
        assert_eq!(slide.active_step_count(), 0);
    }

    #[test]
    fn advance_reveals_steps_before_moving() {
        // 3 slides, the middle one with 2 step markers
        let mut session = started_session(&[0, 2, 0]);
        assert_eq!(session.current_index(), Some(0));

        session.advance();
        assert_eq!(session.current_index(), Some(1));

        session.advance();
        assert_eq!(session.current_index(), Some(1));
        assert_eq!(session.deck().slides[1].active_step_count(), 1);

        session.advance();
        assert_eq!(session.current_index(), Some(1));
        assert_eq!(session.deck().slides[1].active_step_count(), 2);

        session.advance();
        assert_eq!(session.current_index(), Some(2));
    }

    #[test]
    fn retreat_reverts_steps_before_moving() {
        let mut session = started_session(&[0, 2, 0]);
        for _ in 0..4 {
            session.advance();
        }
        assert_eq!(session.current_index(), Some(2));

        // Re-entering slide 1 finds its markers exactly as they were left
        session.retreat();
        assert_eq!(session.current_index(), Some(1));
        assert_eq!(session.deck().slides[1].active_step_count(), 2);

        session.retreat();
        assert_eq!(session.current_index(), Some(1));
        assert_eq!(session.deck().slides[1].active_step_count(), 1);

        session.retreat();
        assert_eq!(session.current_index(), Some(1));
        assert_eq!(session.deck().slides[1].active_step_count(), 0);

        session.retreat();
        assert_eq!(session.current_index(), Some(0));
    }

    #[test]
    fn jump_to_first_resets_every_marker() {
        let mut session = started_session(&[1, 2, 1]);
        for _ in 0..6 {
            session.advance();
        }
        assert_eq!(session.current_index(), Some(2));
        assert!(session.deck().active_step_total() > 0);

        session.jump_to_first();
        assert_eq!(session.current_index(), Some(0));
        assert_eq!(session.deck().active_step_total(), 0);
        assert!(session.controls().at_first);
        assert!(!session.controls().at_last);
    }

    #[test]
    fn jump_to_last_keeps_markers() {
        let mut session = started_session(&[1, 0, 0]);
        session.advance();
        assert_eq!(session.deck().slides[0].active_step_count(), 1);

        session.jump_to_last();
        assert_eq!(session.current_index(), Some(2));
        assert!(session.controls().at_last);
        assert_eq!(session.deck().slides[0].active_step_count(), 1);
    }

    #[test]
    fn empty_deck_is_missing_source() {
        let deck = Deck::new(PathBuf::from("/test/empty.deck"), None, Vec::new());
        let err = PresentationSession::new(deck).unwrap_err();
        assert!(matches!(err, PresenterError::MissingSource { .. }));
    }

    #[test]
    fn teardown_clears_state() {
        let mut session = started_session(&[2, 1]);
        session.advance();
        session.advance();

        session.teardown();
        assert_eq!(session.current_index(), None);
        assert_eq!(session.deck().active_step_total(), 0);
        assert!(session.deck().slides.iter().all(|s| !s.visible));
    }

    #[test]
    fn controls_track_first_and_last() {
        let mut session = started_session(&[0, 0]);
        assert!(session.controls().at_first);
        assert!(!session.controls().at_last);

        session.advance();
        assert!(!session.controls().at_first);
        assert!(session.controls().at_last);
    }

    #[test]
    fn single_slide_is_both_first_and_last() {
        let session = started_session(&[0]);
        assert!(session.controls().at_first);
        assert!(session.controls().at_last);
    }

    #[test]
    fn only_current_slide_is_visible() {
        let mut session = started_session(&[0, 0, 0]);
        session.advance();

        let visible: Vec<bool> = session.deck().slides.iter().map(|s| s.visible).collect();
        assert_eq!(visible, vec![false, true, false]);
    }

    #[test]
    fn registry_start_opens_on_first_slide() {
        let mut registry = PresentationRegistry::new();
        registry.initialize(vec![make_deck(&[0, 0])]);

        let session = registry.start(0).unwrap();
        assert_eq!(session.current_index(), Some(0));
        assert!(session.controls().at_first);
    }

    #[test]
    fn registry_start_is_fresh_each_time() {
        let mut registry = PresentationRegistry::new();
        registry.initialize(vec![make_deck(&[1])]);

        let mut first = registry.start(0).unwrap();
        first.advance();
        assert_eq!(first.deck().active_step_total(), 1);

        let second = registry.start(0).unwrap();
        assert_eq!(second.deck().active_step_total(), 0);
    }

    #[test]
    fn registry_rejects_unknown_id() {
        let registry = PresentationRegistry::new();
        let err = registry.start(7).unwrap_err();
        assert!(matches!(err, PresenterError::UnknownPresentation { id: 7 }));
    }

    #[test]
    fn registry_initialize_is_idempotent() {
        let mut registry = PresentationRegistry::new();
        registry.initialize(vec![make_deck(&[0]), make_deck(&[0])]);
        registry.initialize(vec![make_deck(&[0])]);
        assert_eq!(registry.len(), 2);

        registry.reload(vec![make_deck(&[0])]);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn untitled_deck_falls_back_to_generic_label() {
        let deck = Deck::new(PathBuf::from("/test/x.deck"), None, vec![make_slide(0)]);
        assert_eq!(deck.display_title(), "Presentation");
    }

    #[test]
    fn exit_detaches_input() {
        let ctx = egui::Context::default();
        let mut app = PresenterApp::bootstrap(Settings::default());
        app.registry.initialize(vec![make_deck(&[0, 0])]);

        app.pending_start = Some(0);
        app.apply_pending(&ctx);
        assert_eq!(app.mode, Mode::Active);
        assert!(app.session.is_some());

        app.pending_exit = true;
        app.apply_pending(&ctx);
        assert_eq!(app.mode, Mode::List);
        assert!(app.session.is_none());

        // Input after exit routes nowhere and changes nothing
        app.pending_advance = true;
        app.pending_retreat = true;
        app.apply_pending(&ctx);
        assert_eq!(app.mode, Mode::List);
        assert!(app.session.is_none());
        assert!(!app.pending_advance);
        assert!(!app.pending_retreat);
    }

    #[test]
    fn starting_replaces_active_session() {
        let ctx = egui::Context::default();
        let mut app = PresenterApp::bootstrap(Settings::default());
        app.registry
            .initialize(vec![make_deck(&[1, 0]), make_deck(&[0, 0, 0])]);

        app.pending_start = Some(0);
        app.apply_pending(&ctx);
        app.pending_advance = true;
        app.apply_pending(&ctx);
        assert_eq!(
            app.session.as_ref().unwrap().deck().active_step_total(),
            1
        );

        app.pending_start = Some(1);
        app.apply_pending(&ctx);
        let session = app.session.as_ref().unwrap();
        assert_eq!(session.slide_count(), 3);
        assert_eq!(session.current_index(), Some(0));
        assert_eq!(session.deck().active_step_total(), 0);
    }
}
