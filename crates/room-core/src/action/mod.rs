//! The verb vocabulary and the interaction record the resolver consumes.

use crate::state::ObjectId;

/// The five player actions.
///
/// Verb parsing and rejection happen at the input-routing boundary; the core
/// only ever sees one of these variants.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Verb {
    Look,
    Use,
    Break,
    Pickup,
    Open,
}

impl Verb {
    pub const COUNT: usize = 5;

    pub const fn all() -> [Verb; Self::COUNT] {
        [Verb::Look, Verb::Use, Verb::Break, Verb::Pickup, Verb::Open]
    }

    /// One-letter binding used by keyboard front ends.
    pub const fn hotkey(self) -> char {
        match self {
            Verb::Look => 'l',
            Verb::Use => 'u',
            Verb::Break => 'b',
            Verb::Pickup => 'p',
            Verb::Open => 'o',
        }
    }

    pub fn from_hotkey(key: char) -> Option<Verb> {
        let key = key.to_ascii_lowercase();
        Verb::all().into_iter().find(|verb| verb.hotkey() == key)
    }
}

/// A verb applied to a catalogued target.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Interaction {
    pub verb: Verb,
    pub target: ObjectId,
}

impl Interaction {
    pub fn new(verb: Verb, target: ObjectId) -> Self {
        Self { verb, target }
    }
}

#[cfg(test)]
mod tests {
    use core::str::FromStr;

    use super::*;

    #[test]
    fn hotkeys_round_trip() {
        for verb in Verb::all() {
            assert_eq!(Verb::from_hotkey(verb.hotkey()), Some(verb));
        }
        assert_eq!(Verb::from_hotkey('P'), Some(Verb::Pickup));
        assert_eq!(Verb::from_hotkey('x'), None);
    }

    #[test]
    fn names_parse_case_insensitively() {
        assert_eq!(Verb::from_str("look").unwrap(), Verb::Look);
        assert_eq!(Verb::from_str("Pickup").unwrap(), Verb::Pickup);
        assert!(Verb::from_str("dance").is_err());
    }
}
