pub mod schema;

use serde_json::Value;
use url::Url;

use crate::characters::CharacterArray;
use crate::client::{Client, MethodUrl, required};
use crate::consts::{ApiBase, MembershipType};
use crate::error::Error;

pub(crate) fn profile_url(
    membership_type: MembershipType,
    destiny_membership_id: &str,
    components: &str
) -> Result<Url, Error> {
    Ok(MethodUrl::new(ApiBase::Platform)
        .segment("Destiny2")
        .segment(membership_type)
        .segment("Profile")
        .segment(required("destiny_membership_id", destiny_membership_id)?)
        .trailing_slash()
        .query("components", required("components", components)?)
        .finish())
}

/// Get a Destiny 2 profile with the requested components
///
/// An OAuth token is only needed for components describing
/// private parts of the profile
///
/// <https://www.bungie.net/platform/destiny2/help/>
#[tracing::instrument(level = "trace", skip(client, token))]
pub fn get_profile(
    client: &Client,
    membership_type: MembershipType,
    destiny_membership_id: &str,
    components: &str,
    token: Option<&str>
) -> Result<Value, Error> {
    tracing::trace!("Fetching profile");

    client.execute(profile_url(membership_type, destiny_membership_id, components)?, token)
}

pub(crate) fn clan_leaderboards_url(
    clan_id: &str,
    modes: &str,
    max_top: Option<u32>,
    stat_id: Option<&str>
) -> Result<Url, Error> {
    Ok(MethodUrl::new(ApiBase::Platform)
        .segment("Destiny2")
        .segment("Stats")
        .segment("Leaderboards")
        .segment("Clans")
        .segment(required("clan_id", clan_id)?)
        .query("modes", required("modes", modes)?)
        // the API caps entries at 5 when no limit is given
        .query("maxtop", max_top.unwrap_or(5).to_string())
        .query_opt("statId", stat_id)
        .finish())
}

/// Get leaderboards for a clan, aggregated across its members
#[tracing::instrument(level = "trace", skip(client))]
pub fn get_clan_leaderboards(
    client: &Client,
    clan_id: &str,
    modes: &str,
    max_top: Option<u32>,
    stat_id: Option<&str>
) -> Result<Value, Error> {
    tracing::trace!("Fetching clan leaderboards");

    client.execute(clan_leaderboards_url(clan_id, modes, max_top, stat_id)?, None)
}

pub(crate) fn membership_data_url(
    membership_id: &str,
    membership_type: MembershipType
) -> Result<Url, Error> {
    Ok(MethodUrl::new(ApiBase::Platform)
        .segment("User")
        .segment("GetMembershipsById")
        .segment(required("membership_id", membership_id)?)
        .segment(membership_type)
        .trailing_slash()
        .finish())
}

/// Get the linked memberships of a bungie.net account
#[tracing::instrument(level = "trace", skip(client))]
pub fn get_membership_data_by_id(
    client: &Client,
    membership_id: &str,
    membership_type: MembershipType
) -> Result<Value, Error> {
    tracing::trace!("Fetching memberships");

    client.execute(membership_data_url(membership_id, membership_type)?, None)
}

pub(crate) fn activity_history_url(
    membership_type: MembershipType,
    destiny_membership_id: &str,
    character_id: &str,
    mode: Option<&str>,
    count: Option<u32>,
    page: Option<u32>
) -> Result<Url, Error> {
    Ok(MethodUrl::new(ApiBase::Platform)
        .segment("Destiny2")
        .segment(membership_type)
        .segment("Account")
        .segment(required("destiny_membership_id", destiny_membership_id)?)
        .segment("Character")
        .segment(required("character_id", character_id)?)
        .segment("Stats")
        .segment("Activities")
        .trailing_slash()
        // "None" is the API's literal token for "all modes"
        .query("mode", mode.unwrap_or("None"))
        .query_opt("count", count.map(|count| count.to_string()))
        .query_opt("page", page.map(|page| page.to_string()))
        .finish())
}

/// Get the activity history of a character, most recent first
#[tracing::instrument(level = "trace", skip(client))]
pub fn get_activity_history(
    client: &Client,
    membership_type: MembershipType,
    destiny_membership_id: &str,
    character_id: &str,
    mode: Option<&str>,
    count: Option<u32>,
    page: Option<u32>
) -> Result<Value, Error> {
    tracing::trace!("Fetching activity history");

    client.execute(
        activity_history_url(membership_type, destiny_membership_id, character_id, mode, count, page)?,
        None
    )
}

pub(crate) fn search_player_url(
    display_name: &str,
    membership_type: MembershipType
) -> Result<Url, Error> {
    Ok(MethodUrl::new(ApiBase::Platform)
        .segment("Destiny2")
        .segment("SearchDestinyPlayer")
        .segment(membership_type)
        .segment(required("display_name", display_name)?)
        .trailing_slash()
        .finish())
}

/// Find the Destiny memberships matching a display name
#[tracing::instrument(level = "trace", skip(client))]
pub fn search_destiny_player(
    client: &Client,
    display_name: &str,
    membership_type: MembershipType
) -> Result<Value, Error> {
    tracing::trace!("Searching player");

    client.execute(search_player_url(display_name, membership_type)?, None)
}

pub(crate) fn characters_url(
    membership_type: MembershipType,
    destiny_membership_id: &str
) -> Result<Url, Error> {
    Ok(MethodUrl::new(ApiBase::Platform)
        .segment("Destiny2")
        .segment(membership_type)
        .segment("Profile")
        .segment(required("destiny_membership_id", destiny_membership_id)?)
        .query("components", "Characters")
        .finish())
}

/// Get the profile's character ids as a fixed array indexed by class
#[tracing::instrument(level = "trace", skip(client))]
pub fn get_characters(
    client: &Client,
    membership_type: MembershipType,
    destiny_membership_id: &str
) -> Result<CharacterArray, Error> {
    tracing::trace!("Fetching profile characters");

    let profile = client.execute(characters_url(membership_type, destiny_membership_id)?, None)?;

    build_characters(profile)
}

/// Reshape a `Characters` profile component into a [`CharacterArray`]
pub(crate) fn build_characters(profile: Value) -> Result<CharacterArray, Error> {
    let profile: schema::Profile = serde_json::from_value(profile)?;

    let mut characters = CharacterArray::default();

    for character in profile.response.characters.data.into_values() {
        characters.insert(character.class_type, character.character_id)?;
    }

    Ok(characters)
}
