//! The fixed object catalogue and its per-object flags.
//!
//! Interaction targets form a closed vocabulary: hit-testing layers hand the
//! core raw identifier strings, and anything that fails to parse into
//! [`ObjectId`] is by definition not a puzzle object. Flags are equally
//! closed; each object tracks only the flags listed in its support matrix and
//! touching any other combination is a well-typed [`FlagError`], never a
//! silent default.

/// Identifier for every interactable object in the room.
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
pub enum ObjectId {
    Sink,
    Window,
    Plant,
    Tv,
    Couch,
    Desk,
    Door,
    Fridge,
    Key,
    Beer,
}

impl ObjectId {
    /// Total number of catalogued objects.
    pub const COUNT: usize = 10;

    /// Returns the whole catalogue in declaration order.
    pub const fn all() -> [ObjectId; Self::COUNT] {
        [
            ObjectId::Sink,
            ObjectId::Window,
            ObjectId::Plant,
            ObjectId::Tv,
            ObjectId::Couch,
            ObjectId::Desk,
            ObjectId::Door,
            ObjectId::Fridge,
            ObjectId::Key,
            ObjectId::Beer,
        ]
    }

    #[inline]
    pub const fn as_index(self) -> usize {
        self as usize
    }

    /// Flag support matrix. The key and beer can be hidden or revealed, the
    /// sink can be broken, the fridge can be opened; the remaining furniture
    /// is always present and carries no mutable flags.
    pub const fn supports(self, flag: ObjectFlag) -> bool {
        matches!(
            (self, flag),
            (ObjectId::Key | ObjectId::Beer, ObjectFlag::Visible)
                | (ObjectId::Sink, ObjectFlag::Broken)
                | (ObjectId::Fridge, ObjectFlag::Open)
        )
    }
}

/// Mutable per-object attributes.
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
pub enum ObjectFlag {
    Visible,
    Broken,
    Open,
}

/// Rejected flag access.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FlagError {
    #[error("object `{object}` does not track the `{flag}` flag")]
    Unsupported { object: ObjectId, flag: ObjectFlag },
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
struct FlagSet {
    visible: bool,
    broken: bool,
    open: bool,
}

/// Flag storage for the whole catalogue.
///
/// The initial configuration is all-false: key and beer hidden, sink intact,
/// fridge closed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RoomState {
    flags: [FlagSet; ObjectId::COUNT],
}

impl RoomState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads a flag; `Err` when the object does not track it.
    pub fn flag(&self, object: ObjectId, flag: ObjectFlag) -> Result<bool, FlagError> {
        if !object.supports(flag) {
            return Err(FlagError::Unsupported { object, flag });
        }
        let set = &self.flags[object.as_index()];
        Ok(match flag {
            ObjectFlag::Visible => set.visible,
            ObjectFlag::Broken => set.broken,
            ObjectFlag::Open => set.open,
        })
    }

    /// Writes a flag; `Err` when the object does not track it.
    pub fn set_flag(
        &mut self,
        object: ObjectId,
        flag: ObjectFlag,
        value: bool,
    ) -> Result<(), FlagError> {
        if !object.supports(flag) {
            return Err(FlagError::Unsupported { object, flag });
        }
        let set = &mut self.flags[object.as_index()];
        match flag {
            ObjectFlag::Visible => set.visible = value,
            ObjectFlag::Broken => set.broken = value,
            ObjectFlag::Open => set.open = value,
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use core::str::FromStr;

    use super::*;

    #[test]
    fn identifiers_round_trip_through_strings() {
        for object in ObjectId::all() {
            let rendered = object.to_string();
            assert_eq!(ObjectId::from_str(&rendered).unwrap(), object);
        }
        assert_eq!(ObjectId::from_str("fridge").unwrap(), ObjectId::Fridge);
        assert!(ObjectId::from_str("lamp").is_err());
    }

    #[test]
    fn support_matrix_covers_exactly_four_pairs() {
        let supported: Vec<_> = ObjectId::all()
            .into_iter()
            .flat_map(|object| {
                [ObjectFlag::Visible, ObjectFlag::Broken, ObjectFlag::Open]
                    .into_iter()
                    .filter(move |flag| object.supports(*flag))
                    .map(move |flag| (object, flag))
            })
            .collect();

        assert_eq!(
            supported,
            vec![
                (ObjectId::Sink, ObjectFlag::Broken),
                (ObjectId::Fridge, ObjectFlag::Open),
                (ObjectId::Key, ObjectFlag::Visible),
                (ObjectId::Beer, ObjectFlag::Visible),
            ]
        );
    }

    #[test]
    fn flags_start_false_and_persist_writes() {
        let mut room = RoomState::new();
        assert_eq!(room.flag(ObjectId::Key, ObjectFlag::Visible), Ok(false));

        room.set_flag(ObjectId::Key, ObjectFlag::Visible, true).unwrap();
        assert_eq!(room.flag(ObjectId::Key, ObjectFlag::Visible), Ok(true));

        room.set_flag(ObjectId::Key, ObjectFlag::Visible, false).unwrap();
        assert_eq!(room.flag(ObjectId::Key, ObjectFlag::Visible), Ok(false));
    }

    #[test]
    fn unsupported_flags_are_rejected() {
        let mut room = RoomState::new();
        let err = room
            .set_flag(ObjectId::Couch, ObjectFlag::Open, true)
            .unwrap_err();
        assert_eq!(
            err,
            FlagError::Unsupported {
                object: ObjectId::Couch,
                flag: ObjectFlag::Open,
            }
        );
        assert!(room.flag(ObjectId::Door, ObjectFlag::Visible).is_err());
    }
}
