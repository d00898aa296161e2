//! Game session
//!
//! Wraps the simulation behind the narrow lifecycle API a host embeds:
//! update, tap, reset, and read-only accessors. Round-clear notifications
//! go out through an injected sink so the host decides how to surface them.

use glam::Vec2;
use rand::Rng;

use crate::sim::{self, GameEvent, GameState, Gradient};

/// Callback the host registers to receive player-facing messages
type NotifySink = Box<dyn FnMut(&str)>;

/// A running game: state plus the host's notification sink
pub struct GameSession {
    state: GameState,
    notify: Option<NotifySink>,
}

impl GameSession {
    /// Start a session with an entropy seed
    pub fn new(width: f32, height: f32) -> Self {
        Self::with_seed(width, height, rand::rng().random())
    }

    /// Start a session with a fixed seed (replays, tests)
    pub fn with_seed(width: f32, height: f32, seed: u64) -> Self {
        log::info!("Session started: {width}x{height} seed {seed}");
        let mut state = GameState::new(width, height, seed);
        sim::generate_round(&mut state);
        Self {
            state,
            notify: None,
        }
    }

    /// Register the message sink; replaces any previous one
    pub fn set_notify(&mut self, sink: impl FnMut(&str) + 'static) {
        self.notify = Some(Box::new(sink));
    }

    pub fn clear_notify(&mut self) {
        self.notify = None;
    }

    /// Advance the game by `dt` seconds
    pub fn update(&mut self, dt: f32) {
        sim::update(&mut self.state, dt);
    }

    /// Resolve a tap at pixel coordinates. Returns whether a target was hit.
    pub fn handle_input(&mut self, x: f32, y: f32) -> bool {
        let hit = sim::handle_tap(&mut self.state, Vec2::new(x, y));
        self.dispatch_events();
        hit
    }

    /// Back to round 1 with a zero score. Spent bursts are left to expire.
    pub fn reset(&mut self) {
        self.state.score = 0;
        self.state.round = 1;
        self.state.game_over = false;
        sim::generate_round(&mut self.state);
        log::info!("Session reset");
    }

    pub fn score(&self) -> u32 {
        self.state.score
    }

    pub fn round(&self) -> u32 {
        self.state.round
    }

    pub fn is_game_over(&self) -> bool {
        self.state.game_over
    }

    pub fn background(&self) -> Gradient {
        self.state.background
    }

    /// Full state, for presenters and snapshot tests
    pub fn state(&self) -> &GameState {
        &self.state
    }

    fn dispatch_events(&mut self) {
        for event in self.state.drain_events() {
            match event {
                GameEvent::TargetHit { points } => {
                    log::debug!("Hit for {points} points, score {}", self.state.score);
                }
                GameEvent::RoundCleared { round } => {
                    log::info!("Round cleared, advancing to {round}");
                    if let Some(notify) = &mut self.notify {
                        notify(&format!("Level complete! Advancing to round {round}"));
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_fresh_session_is_round_one() {
        let session = GameSession::with_seed(1080.0, 1920.0, 11);
        assert_eq!(session.round(), 1);
        assert_eq!(session.score(), 0);
        assert_eq!(session.state().targets.len(), 1);
        assert!(!session.is_game_over());
    }

    #[test]
    fn test_entropy_seeded_session_matches_shape() {
        let session = GameSession::new(1080.0, 1920.0);
        assert_eq!(session.round(), 1);
        assert_eq!(session.state().targets.len(), 1);
    }

    #[test]
    fn test_clearing_a_round_notifies_once() {
        let messages: Rc<RefCell<Vec<String>>> = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&messages);

        let mut session = GameSession::with_seed(1000.0, 2000.0, 5);
        session.set_notify(move |msg| sink.borrow_mut().push(msg.to_string()));

        let pos = session.state().targets[0].pos;
        assert!(session.handle_input(pos.x, pos.y));

        assert_eq!(session.round(), 2);
        assert_eq!(session.score(), 10);
        assert_eq!(
            messages.borrow().as_slice(),
            ["Level complete! Advancing to round 2"]
        );
    }

    #[test]
    fn test_miss_notifies_nothing() {
        let messages: Rc<RefCell<Vec<String>>> = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&messages);

        let mut session = GameSession::with_seed(1000.0, 2000.0, 5);
        session.set_notify(move |msg| sink.borrow_mut().push(msg.to_string()));

        let pos = session.state().targets[0].pos;
        let far = if pos.x > 500.0 { pos.x - 400.0 } else { pos.x + 400.0 };
        assert!(!session.handle_input(far, pos.y));
        assert!(messages.borrow().is_empty());
    }

    #[test]
    fn test_reset_restores_round_one() {
        let mut session = GameSession::with_seed(1000.0, 2000.0, 5);
        let pos = session.state().targets[0].pos;
        session.handle_input(pos.x, pos.y);
        assert_eq!(session.round(), 2);

        session.reset();
        assert_eq!(session.round(), 1);
        assert_eq!(session.score(), 0);
        assert_eq!(session.state().targets.len(), 1);
    }

    #[test]
    fn test_cleared_sink_stays_silent() {
        let messages: Rc<RefCell<Vec<String>>> = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&messages);

        let mut session = GameSession::with_seed(1000.0, 2000.0, 5);
        session.set_notify(move |msg| sink.borrow_mut().push(msg.to_string()));
        session.clear_notify();

        let pos = session.state().targets[0].pos;
        session.handle_input(pos.x, pos.y);
        assert!(messages.borrow().is_empty());
    }
}
