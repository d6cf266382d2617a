//! The interaction resolver: the single source of puzzle truth.
//!
//! Every puzzle behavior is one [`Rule`] in [`RULES`]: a verb set, a target,
//! an optional precondition on the current state, and an effect producer.
//! [`resolve`] walks the table in priority order and returns the first
//! match's effects; verb/target pairs with no row are no-ops. The table never
//! mutates anything itself, which keeps the whole rule set enumerable and
//! testable without an engine.

mod effects;

pub use effects::{Effects, StateChange};

use crate::action::{Interaction, Verb};
use crate::state::{GameState, ItemId, ObjectFlag, ObjectId};

/// Seconds the TV steals from the player.
pub const TV_TIME_PENALTY_SECS: u64 = 300;
/// Seconds a nap on the couch costs.
pub const COUCH_TIME_PENALTY_SECS: u64 = 10_800;

/// Player-facing strings produced by the rule table.
pub mod messages {
    use crate::state::GameClock;

    pub const SINK_LOOK: &str = "disgusting, needs a cleanup";
    pub const WINDOW_LOOK: &str = "nice view, cars and dirt on the streets";
    pub const TV_NEWS: &str = "The news get worse every day";
    pub const COUCH_NAP: &str = "Goodnight";
    pub const DESK_BEER: &str = "Too cold";
    pub const DESK_NO_BEER: &str = "Where is the beer";
    pub const SINK_BREAK: &str = "nice job";
    pub const DOOR_LOCKED: &str = "You need the key to open the door";

    pub fn escape(clock: &GameClock) -> String {
        format!("You escaped the room in {clock}")
    }
}

type Precondition = fn(&GameState) -> bool;
type EffectFn = fn(&GameState) -> Effects;

/// One row of the puzzle: verbs × target, guarded by a precondition.
pub struct Rule {
    pub verbs: &'static [Verb],
    pub target: ObjectId,
    pub precondition: Option<Precondition>,
    pub effect: EffectFn,
}

impl Rule {
    fn matches(&self, state: &GameState, interaction: Interaction) -> bool {
        self.target == interaction.target
            && self.verbs.contains(&interaction.verb)
            && self.precondition.is_none_or(|check| check(state))
    }
}

const LOOK: &[Verb] = &[Verb::Look];
const LOOK_OR_USE: &[Verb] = &[Verb::Look, Verb::Use];
const BREAK: &[Verb] = &[Verb::Break];
const PICKUP: &[Verb] = &[Verb::Pickup];
const OPEN: &[Verb] = &[Verb::Open];

/// The complete puzzle, in priority order. First match per target wins.
pub const RULES: &[Rule] = &[
    Rule {
        verbs: LOOK,
        target: ObjectId::Sink,
        precondition: None,
        effect: look_at_sink,
    },
    Rule {
        verbs: LOOK,
        target: ObjectId::Window,
        precondition: None,
        effect: look_out_window,
    },
    Rule {
        verbs: LOOK,
        target: ObjectId::Plant,
        precondition: None,
        effect: search_plant,
    },
    Rule {
        verbs: LOOK_OR_USE,
        target: ObjectId::Tv,
        precondition: None,
        effect: watch_tv,
    },
    Rule {
        verbs: LOOK_OR_USE,
        target: ObjectId::Couch,
        precondition: None,
        effect: nap_on_couch,
    },
    Rule {
        verbs: LOOK_OR_USE,
        target: ObjectId::Desk,
        precondition: Some(beer_selected),
        effect: leave_beer_on_desk,
    },
    Rule {
        verbs: LOOK_OR_USE,
        target: ObjectId::Desk,
        precondition: None,
        effect: miss_beer_at_desk,
    },
    Rule {
        verbs: BREAK,
        target: ObjectId::Sink,
        precondition: None,
        effect: break_sink,
    },
    Rule {
        verbs: PICKUP,
        target: ObjectId::Key,
        precondition: Some(key_visible),
        effect: pickup_key,
    },
    Rule {
        verbs: PICKUP,
        target: ObjectId::Beer,
        precondition: Some(beer_visible),
        effect: pickup_beer,
    },
    Rule {
        verbs: OPEN,
        target: ObjectId::Door,
        precondition: Some(key_selected),
        effect: open_door_with_key,
    },
    Rule {
        verbs: OPEN,
        target: ObjectId::Door,
        precondition: None,
        effect: rattle_locked_door,
    },
    Rule {
        verbs: OPEN,
        target: ObjectId::Fridge,
        precondition: None,
        effect: open_fridge,
    },
];

/// Resolves one interaction against the current state.
///
/// Pure: never mutates, never fails. An inactive game resolves everything to
/// empty effects regardless of what the caller gates on.
pub fn resolve(state: &GameState, interaction: Interaction) -> Effects {
    if !state.phase.is_active() {
        return Effects::none();
    }
    RULES
        .iter()
        .find(|rule| rule.matches(state, interaction))
        .map(|rule| (rule.effect)(state))
        .unwrap_or_else(Effects::none)
}

fn selected_is(state: &GameState, id: ItemId) -> bool {
    state
        .inventory
        .selected_item()
        .is_some_and(|item| item.id == id)
}

fn beer_selected(state: &GameState) -> bool {
    selected_is(state, ItemId::Beer)
}

fn key_selected(state: &GameState) -> bool {
    selected_is(state, ItemId::Key)
}

fn is_visible(state: &GameState, object: ObjectId) -> bool {
    state
        .room
        .flag(object, ObjectFlag::Visible)
        .unwrap_or(false)
}

fn key_visible(state: &GameState) -> bool {
    is_visible(state, ObjectId::Key)
}

fn beer_visible(state: &GameState) -> bool {
    is_visible(state, ObjectId::Beer)
}

fn say(text: &str) -> Effects {
    Effects {
        message: Some(text.to_owned()),
        ..Effects::none()
    }
}

fn look_at_sink(_: &GameState) -> Effects {
    say(messages::SINK_LOOK)
}

fn look_out_window(_: &GameState) -> Effects {
    say(messages::WINDOW_LOOK)
}

fn search_plant(_: &GameState) -> Effects {
    Effects {
        changes: vec![StateChange::SetFlag {
            object: ObjectId::Key,
            flag: ObjectFlag::Visible,
            value: true,
        }],
        ..Effects::none()
    }
}

fn watch_tv(_: &GameState) -> Effects {
    Effects {
        time_delta: TV_TIME_PENALTY_SECS,
        ..say(messages::TV_NEWS)
    }
}

fn nap_on_couch(_: &GameState) -> Effects {
    Effects {
        time_delta: COUCH_TIME_PENALTY_SECS,
        ..say(messages::COUCH_NAP)
    }
}

fn leave_beer_on_desk(state: &GameState) -> Effects {
    let mut changes = Vec::new();
    if let Some(index) = state.inventory.selected() {
        changes.push(StateChange::RemoveItem(index));
        changes.push(StateChange::ClearSelection);
    }
    Effects {
        changes,
        ..say(messages::DESK_BEER)
    }
}

fn miss_beer_at_desk(_: &GameState) -> Effects {
    say(messages::DESK_NO_BEER)
}

fn break_sink(_: &GameState) -> Effects {
    Effects {
        changes: vec![StateChange::SetFlag {
            object: ObjectId::Sink,
            flag: ObjectFlag::Broken,
            value: true,
        }],
        ..say(messages::SINK_BREAK)
    }
}

fn pickup_key(_: &GameState) -> Effects {
    Effects {
        changes: vec![
            StateChange::SetFlag {
                object: ObjectId::Key,
                flag: ObjectFlag::Visible,
                value: false,
            },
            StateChange::AddItem(ItemId::Key),
        ],
        ..Effects::none()
    }
}

fn pickup_beer(_: &GameState) -> Effects {
    Effects {
        changes: vec![
            StateChange::SetFlag {
                object: ObjectId::Beer,
                flag: ObjectFlag::Visible,
                value: false,
            },
            StateChange::SetFlag {
                object: ObjectId::Fridge,
                flag: ObjectFlag::Open,
                value: false,
            },
            StateChange::AddItem(ItemId::Beer),
        ],
        ..Effects::none()
    }
}

fn open_door_with_key(state: &GameState) -> Effects {
    Effects {
        message: Some(messages::escape(&state.clock)),
        ends_game: true,
        ..Effects::none()
    }
}

fn rattle_locked_door(_: &GameState) -> Effects {
    say(messages::DOOR_LOCKED)
}

fn open_fridge(state: &GameState) -> Effects {
    let mut changes = vec![StateChange::SetFlag {
        object: ObjectId::Fridge,
        flag: ObjectFlag::Open,
        value: true,
    }];
    // The single beer exists until claimed; a held beer never respawns.
    if !state.inventory.contains(ItemId::Beer) {
        changes.push(StateChange::SetFlag {
            object: ObjectId::Beer,
            flag: ObjectFlag::Visible,
            value: true,
        });
    }
    Effects {
        changes,
        ..Effects::none()
    }
}
