//! The session orchestrator: serialized dispatch around one [`GameEngine`].

use std::collections::VecDeque;
use std::str::FromStr;

use room_core::{Effects, GameEngine, ObjectFlag, ObjectId, StateChange, Verb};
use tracing::{debug, info, warn};

use crate::error::Result;
use crate::event::{EventConsumer, SessionEvent};
use crate::tracker::PointerTracker;

/// About-box line.
pub const ABOUT: &str = "Classic Escape Room v1";

enum Command {
    Start,
    Restart,
    Verb(Verb),
    SelectItem(usize),
    Tick,
}

/// One running session: the engine, its pointer tracker, and the queues that
/// keep dispatch serialized.
///
/// Entry points enqueue a command and pump the queue; a call arriving while
/// a command is already mid-dispatch queues behind it and runs afterwards,
/// so two interactions can never interleave their state mutation.
pub struct Session<P> {
    engine: GameEngine,
    tracker: P,
    commands: VecDeque<Command>,
    events: VecDeque<SessionEvent>,
    pumping: bool,
}

impl<P: PointerTracker> Session<P> {
    pub fn new(tracker: P) -> Self {
        Self {
            engine: GameEngine::new(),
            tracker,
            commands: VecDeque::new(),
            events: VecDeque::new(),
            pumping: false,
        }
    }

    /// Read access to the engine (and through it the state) for hosts.
    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    pub fn about(&self) -> &'static str {
        ABOUT
    }

    /// Begins a fresh run. Accepted in any phase; a running game ignores it.
    pub fn start(&mut self) -> Result<()> {
        self.submit(Command::Start)
    }

    /// Restores the initial configuration from any phase.
    pub fn restart(&mut self) -> Result<()> {
        self.submit(Command::Restart)
    }

    /// Applies `verb` to whatever the tracker reports under the cursor.
    /// Ignored while the game is not active.
    pub fn verb(&mut self, verb: Verb) -> Result<()> {
        self.submit(Command::Verb(verb))
    }

    /// Selects an inventory slot; out-of-bounds clears the selection.
    pub fn select_item(&mut self, index: usize) -> Result<()> {
        self.submit(Command::SelectItem(index))
    }

    /// One simulated second from the host's tick source.
    pub fn tick(&mut self) -> Result<()> {
        self.submit(Command::Tick)
    }

    /// Hands out everything emitted since the last drain, in order.
    pub fn drain_events(&mut self) -> Vec<SessionEvent> {
        self.events.drain(..).collect()
    }

    /// Push-style alternative to [`Session::drain_events`].
    pub fn forward_events(&mut self, consumer: &mut dyn EventConsumer) {
        while let Some(event) = self.events.pop_front() {
            consumer.on_event(&event);
        }
    }

    fn submit(&mut self, command: Command) -> Result<()> {
        self.commands.push_back(command);
        if self.pumping {
            warn!("reentrant dispatch; command queued behind the in-flight one");
            return Ok(());
        }
        self.pumping = true;
        let result = self.run_queue();
        self.pumping = false;
        result
    }

    fn run_queue(&mut self) -> Result<()> {
        while let Some(command) = self.commands.pop_front() {
            self.dispatch(command)?;
        }
        Ok(())
    }

    fn dispatch(&mut self, command: Command) -> Result<()> {
        match command {
            Command::Start => self.handle_start(),
            Command::Restart => self.handle_restart(),
            Command::Verb(verb) => return self.handle_verb(verb),
            Command::SelectItem(index) => self.handle_select(index),
            Command::Tick => self.handle_tick(),
        }
        Ok(())
    }

    fn handle_start(&mut self) {
        if !self.engine.start() {
            return;
        }
        info!("game started");
        self.events.push_back(SessionEvent::Started);
        self.push_clock();
        self.push_inventory();
    }

    fn handle_restart(&mut self) {
        self.engine.restart();
        info!("game restarted");
        self.events.push_back(SessionEvent::Reset);
        // Tell the presenter about every flag that snapped back to false.
        for object in ObjectId::all() {
            for flag in [ObjectFlag::Visible, ObjectFlag::Broken, ObjectFlag::Open] {
                if object.supports(flag) {
                    self.events.push_back(SessionEvent::ObjectChanged {
                        object,
                        flag,
                        value: false,
                    });
                }
            }
        }
        self.push_clock();
        self.push_inventory();
    }

    fn handle_verb(&mut self, verb: Verb) -> Result<()> {
        if !self.engine.state().phase.is_active() {
            return Ok(());
        }
        let target = self.resolve_target();
        debug!(verb = %verb, object = ?target, "verb dispatched");
        let effects = self.engine.interact(verb, target)?;
        self.publish(&effects);
        Ok(())
    }

    fn handle_select(&mut self, index: usize) {
        if self.engine.select_item(index) {
            self.push_inventory();
        }
    }

    fn handle_tick(&mut self) {
        if self.engine.tick() {
            self.push_clock();
        }
    }

    /// Asks the tracker what sits under the cursor and parses it against the
    /// closed catalogue. Foreign identifiers resolve to "no target".
    fn resolve_target(&self) -> Option<ObjectId> {
        let raw = self.tracker.current_target()?;
        match ObjectId::from_str(&raw) {
            Ok(object) => Some(object),
            Err(_) => {
                warn!(id = %raw, "tracker reported an identifier outside the catalogue");
                None
            }
        }
    }

    fn publish(&mut self, effects: &Effects) {
        let mut inventory_changed = false;
        for change in &effects.changes {
            match change {
                StateChange::SetFlag {
                    object,
                    flag,
                    value,
                } => self.events.push_back(SessionEvent::ObjectChanged {
                    object: *object,
                    flag: *flag,
                    value: *value,
                }),
                StateChange::AddItem(_)
                | StateChange::RemoveItem(_)
                | StateChange::ClearSelection => inventory_changed = true,
            }
        }
        if inventory_changed {
            self.push_inventory();
        }
        if effects.time_delta > 0 {
            self.push_clock();
        }
        match (&effects.message, effects.ends_game) {
            (Some(message), true) => {
                info!(%message, "room escaped");
                self.events.push_back(SessionEvent::Won {
                    message: message.clone(),
                });
            }
            (Some(message), false) => {
                self.events
                    .push_back(SessionEvent::MessageShown(message.clone()));
            }
            (None, _) => {}
        }
    }

    fn push_clock(&mut self) {
        self.events.push_back(SessionEvent::ClockUpdated(
            self.engine.state().clock.to_string(),
        ));
    }

    fn push_inventory(&mut self) {
        let inventory = &self.engine.state().inventory;
        self.events.push_back(SessionEvent::InventoryChanged {
            items: inventory.items().to_vec(),
            selected: inventory.selected(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use room_core::GamePhase;

    struct FixedTarget(Option<&'static str>);

    impl PointerTracker for FixedTarget {
        fn current_target(&self) -> Option<String> {
            self.0.map(str::to_owned)
        }
    }

    #[test]
    fn verbs_before_start_are_ignored() {
        let mut session = Session::new(FixedTarget(Some("tv")));
        session.verb(Verb::Look).unwrap();
        assert!(session.drain_events().is_empty());
        assert_eq!(session.engine().state().clock.elapsed_seconds(), 0);
    }

    #[test]
    fn start_emits_initial_snapshots() {
        let mut session = Session::new(FixedTarget(None));
        session.start().unwrap();
        let events = session.drain_events();
        assert_eq!(events[0], SessionEvent::Started);
        assert_eq!(events[1], SessionEvent::ClockUpdated("00:00:00".into()));
        assert_eq!(
            events[2],
            SessionEvent::InventoryChanged {
                items: vec![],
                selected: None,
            }
        );
    }

    #[test]
    fn second_start_is_silent() {
        let mut session = Session::new(FixedTarget(None));
        session.start().unwrap();
        session.drain_events();
        session.start().unwrap();
        assert!(session.drain_events().is_empty());
    }

    #[test]
    fn foreign_identifier_is_a_silent_no_op() {
        let mut session = Session::new(FixedTarget(Some("lamp")));
        session.start().unwrap();
        session.drain_events();
        session.verb(Verb::Look).unwrap();
        assert!(session.drain_events().is_empty());
    }

    #[test]
    fn ticks_update_the_clock_only_while_active() {
        let mut session = Session::new(FixedTarget(None));
        session.tick().unwrap();
        assert!(session.drain_events().is_empty());

        session.start().unwrap();
        session.drain_events();
        session.tick().unwrap();
        assert_eq!(
            session.drain_events(),
            vec![SessionEvent::ClockUpdated("00:00:01".into())]
        );
    }

    #[test]
    fn forward_events_delivers_in_order_and_drains() {
        #[derive(Default)]
        struct Recording(Vec<SessionEvent>);

        impl EventConsumer for Recording {
            fn on_event(&mut self, event: &SessionEvent) {
                self.0.push(event.clone());
            }
        }

        let mut session = Session::new(FixedTarget(None));
        session.start().unwrap();
        session.tick().unwrap();

        let mut presenter = Recording::default();
        session.forward_events(&mut presenter);
        assert_eq!(presenter.0.first(), Some(&SessionEvent::Started));
        assert_eq!(
            presenter.0.last(),
            Some(&SessionEvent::ClockUpdated("00:00:01".into()))
        );
        assert!(session.drain_events().is_empty());
    }

    #[test]
    fn restart_resets_every_tracked_flag() {
        let mut session = Session::new(FixedTarget(None));
        session.start().unwrap();
        session.drain_events();
        session.restart().unwrap();

        let events = session.drain_events();
        assert_eq!(events[0], SessionEvent::Reset);
        let flag_resets = events
            .iter()
            .filter(|event| matches!(event, SessionEvent::ObjectChanged { value: false, .. }))
            .count();
        assert_eq!(flag_resets, 4);
        assert_eq!(session.engine().state().phase, GamePhase::NotStarted);
    }
}
