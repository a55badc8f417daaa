use serde::{Serialize, Deserialize};

use crate::error::Error;

/// Destiny character class
///
/// `classType` values in profile responses map onto this enumeration:
/// Titan = 0, Hunter = 1, Warlock = 2, Unknown = 3
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DestinyClass {
    Titan,
    Hunter,
    Warlock,
    Unknown
}

impl DestinyClass {
    #[inline]
    pub fn list() -> &'static [DestinyClass] {
        &[Self::Titan, Self::Hunter, Self::Warlock, Self::Unknown]
    }
}

impl TryFrom<u8> for DestinyClass {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Titan),
            1 => Ok(Self::Hunter),
            2 => Ok(Self::Warlock),
            3 => Ok(Self::Unknown),
            value => Err(Error::UnknownClassType(value))
        }
    }
}

/// Number of playable classes, and so of slots in a [`CharacterArray`]
pub const CHARACTER_SLOTS: usize = 3;

/// Character ids of a profile, indexed by class
///
/// Slot 0 holds the Titan, slot 1 the Hunter, slot 2 the Warlock;
/// a `None` slot means the profile has no character of that class
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CharacterArray {
    slots: [Option<String>; CHARACTER_SLOTS]
}

impl CharacterArray {
    /// Record a character id under its class slot
    ///
    /// When a profile carries two characters of the same class the
    /// last inserted one wins. A `class_type` of 3 (Unknown) or above
    /// has no slot and is rejected instead of written out of range
    pub fn insert(&mut self, class_type: u8, character_id: impl ToString) -> Result<(), Error> {
        match class_type {
            0..=2 => {
                self.slots[class_type as usize] = Some(character_id.to_string());

                Ok(())
            }

            class_type => Err(Error::UnknownClassType(class_type))
        }
    }

    #[inline]
    pub fn get(&self, class: DestinyClass) -> Option<&str> {
        match class {
            DestinyClass::Titan   => self.slots[0].as_deref(),
            DestinyClass::Hunter  => self.slots[1].as_deref(),
            DestinyClass::Warlock => self.slots[2].as_deref(),
            DestinyClass::Unknown => None
        }
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = Option<&str>> {
        self.slots.iter().map(Option::as_deref)
    }

    #[inline]
    pub fn into_inner(self) -> [Option<String>; CHARACTER_SLOTS] {
        self.slots
    }
}
