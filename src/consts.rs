use std::fmt;

use serde::{Serialize, Deserialize};

/// Base URI of an API family
///
/// The Destiny 2 and user endpoints live directly under `/Platform`,
/// while the legacy Destiny 1 endpoints live under `/Platform/Destiny`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ApiBase {
    Platform,
    Destiny
}

impl ApiBase {
    #[inline]
    pub fn uri(&self) -> &'static str {
        match self {
            ApiBase::Platform => "https://www.bungie.net/Platform",
            ApiBase::Destiny  => "https://www.bungie.net/Platform/Destiny"
        }
    }
}

/// Platform a player's account is registered under
///
/// Serialized into request paths as its integer value, as documented at
/// <https://bungie-net.github.io/multi/schema_BungieMembershipType.html>
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MembershipType {
    Xbox,
    Psn,
    Steam,
    Blizzard,
    Stadia,
    Egs,
    BungieNext,
    All
}

impl MembershipType {
    #[inline]
    pub fn list() -> &'static [MembershipType] {
        &[
            Self::Xbox,
            Self::Psn,
            Self::Steam,
            Self::Blizzard,
            Self::Stadia,
            Self::Egs,
            Self::BungieNext,
            Self::All
        ]
    }

    #[inline]
    pub fn code(&self) -> i32 {
        match self {
            MembershipType::Xbox       => 1,
            MembershipType::Psn        => 2,
            MembershipType::Steam      => 3,
            MembershipType::Blizzard   => 4,
            MembershipType::Stadia     => 5,
            MembershipType::Egs        => 6,
            MembershipType::BungieNext => 254,
            MembershipType::All        => -1
        }
    }
}

impl fmt::Display for MembershipType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
