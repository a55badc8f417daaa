//! Legacy Destiny 1 endpoints, living under the `/Platform/Destiny` base
//!
//! Documented at <https://www.bungie.net/platform/destiny/help/>

pub mod schema;

use serde_json::Value;
use url::Url;

use crate::characters::CharacterArray;
use crate::client::{Client, MethodUrl, required};
use crate::consts::{ApiBase, MembershipType};
use crate::error::Error;

fn account_url(
    membership_type: MembershipType,
    destiny_membership_id: &str
) -> Result<MethodUrl, Error> {
    Ok(MethodUrl::new(ApiBase::Destiny)
        .segment(membership_type)
        .segment("Account")
        .segment(required("destiny_membership_id", destiny_membership_id)?))
}

fn character_url(
    membership_type: MembershipType,
    destiny_membership_id: &str,
    character_id: &str
) -> Result<MethodUrl, Error> {
    Ok(account_url(membership_type, destiny_membership_id)?
        .segment("Character")
        .segment(required("character_id", character_id)?))
}

fn with_definitions(url: MethodUrl, definitions: bool) -> MethodUrl {
    if definitions {
        url.query("definitions", "true")
    }

    else {
        url
    }
}

pub(crate) fn account_summary_url(
    membership_type: MembershipType,
    destiny_membership_id: &str,
    definitions: bool
) -> Result<Url, Error> {
    Ok(with_definitions(
        account_url(membership_type, destiny_membership_id)?
            .segment("Summary")
            .trailing_slash(),
        definitions
    ).finish())
}

/// Get the account summary, including its characters
#[tracing::instrument(level = "trace", skip(client))]
pub fn get_account_summary(
    client: &Client,
    membership_type: MembershipType,
    destiny_membership_id: &str,
    definitions: bool
) -> Result<Value, Error> {
    tracing::trace!("Fetching account summary");

    client.execute(account_summary_url(membership_type, destiny_membership_id, definitions)?, None)
}

pub(crate) fn activity_history_stats_url(
    membership_type: MembershipType,
    destiny_membership_id: &str,
    character_id: &str,
    definitions: bool,
    mode: Option<&str>,
    count: Option<u32>,
    page: Option<u32>
) -> Result<Url, Error> {
    Ok(with_definitions(
        MethodUrl::new(ApiBase::Destiny)
            .segment("Stats")
            .segment("ActivityHistory")
            .segment(membership_type)
            .segment(required("destiny_membership_id", destiny_membership_id)?)
            .segment(required("character_id", character_id)?)
            .trailing_slash(),
        definitions
    )
    .query("mode", mode.unwrap_or("None"))
    .query_opt("count", count.map(|count| count.to_string()))
    .query_opt("page", page.map(|page| page.to_string()))
    .finish())
}

/// Get the activity history stats of a character
#[tracing::instrument(level = "trace", skip(client))]
pub fn get_activity_history_stats(
    client: &Client,
    membership_type: MembershipType,
    destiny_membership_id: &str,
    character_id: &str,
    definitions: bool,
    mode: Option<&str>,
    count: Option<u32>,
    page: Option<u32>
) -> Result<Value, Error> {
    tracing::trace!("Fetching activity history stats");

    client.execute(
        activity_history_stats_url(
            membership_type,
            destiny_membership_id,
            character_id,
            definitions,
            mode,
            count,
            page
        )?,
        None
    )
}

pub(crate) fn account_advisors_url(
    membership_type: MembershipType,
    destiny_membership_id: &str,
    definitions: bool
) -> Result<Url, Error> {
    Ok(with_definitions(
        account_url(membership_type, destiny_membership_id)?
            .segment("Advisors")
            .trailing_slash(),
        definitions
    ).finish())
}

/// Get the account-wide advisors
#[tracing::instrument(level = "trace", skip(client))]
pub fn get_account_advisors(
    client: &Client,
    membership_type: MembershipType,
    destiny_membership_id: &str,
    definitions: bool
) -> Result<Value, Error> {
    tracing::trace!("Fetching account advisors");

    client.execute(account_advisors_url(membership_type, destiny_membership_id, definitions)?, None)
}

pub(crate) fn account_advisors_v2_url(
    membership_type: MembershipType,
    destiny_membership_id: &str,
    character_id: &str,
    definitions: bool
) -> Result<Url, Error> {
    Ok(with_definitions(
        character_url(membership_type, destiny_membership_id, character_id)?
            .segment("Advisors")
            .segment("V2")
            .trailing_slash(),
        definitions
    ).finish())
}

/// Get the per-character advisors (V2)
#[tracing::instrument(level = "trace", skip(client))]
pub fn get_account_advisors_v2(
    client: &Client,
    membership_type: MembershipType,
    destiny_membership_id: &str,
    character_id: &str,
    definitions: bool
) -> Result<Value, Error> {
    tracing::trace!("Fetching account advisors v2");

    client.execute(
        account_advisors_v2_url(membership_type, destiny_membership_id, character_id, definitions)?,
        None
    )
}

pub(crate) fn account_items_url(
    membership_type: MembershipType,
    destiny_membership_id: &str,
    definitions: bool
) -> Result<Url, Error> {
    // lowercase "items" is what the API actually serves this under
    Ok(with_definitions(
        account_url(membership_type, destiny_membership_id)?
            .segment("items")
            .trailing_slash(),
        definitions
    ).finish())
}

/// Get all items across the account's characters and vault
#[tracing::instrument(level = "trace", skip(client))]
pub fn get_account_items(
    client: &Client,
    membership_type: MembershipType,
    destiny_membership_id: &str,
    definitions: bool
) -> Result<Value, Error> {
    tracing::trace!("Fetching account items");

    client.execute(account_items_url(membership_type, destiny_membership_id, definitions)?, None)
}

pub(crate) fn character_activities_url(
    membership_type: MembershipType,
    destiny_membership_id: &str,
    character_id: &str,
    definitions: bool
) -> Result<Url, Error> {
    Ok(with_definitions(
        character_url(membership_type, destiny_membership_id, character_id)?
            .segment("Activities")
            .trailing_slash(),
        definitions
    ).finish())
}

#[tracing::instrument(level = "trace", skip(client))]
pub fn get_character_activities(
    client: &Client,
    membership_type: MembershipType,
    destiny_membership_id: &str,
    character_id: &str,
    definitions: bool
) -> Result<Value, Error> {
    tracing::trace!("Fetching character activities");

    client.execute(
        character_activities_url(membership_type, destiny_membership_id, character_id, definitions)?,
        None
    )
}

pub(crate) fn character_inventory_url(
    membership_type: MembershipType,
    destiny_membership_id: &str,
    character_id: &str,
    definitions: bool
) -> Result<Url, Error> {
    Ok(with_definitions(
        character_url(membership_type, destiny_membership_id, character_id)?
            .segment("Inventory")
            .trailing_slash(),
        definitions
    ).finish())
}

/// Get the full character inventory
///
/// Deprecated by the API in favor of [`get_character_inventory_summary`]
#[tracing::instrument(level = "trace", skip(client))]
pub fn get_character_inventory(
    client: &Client,
    membership_type: MembershipType,
    destiny_membership_id: &str,
    character_id: &str,
    definitions: bool
) -> Result<Value, Error> {
    tracing::trace!("Fetching character inventory");

    client.execute(
        character_inventory_url(membership_type, destiny_membership_id, character_id, definitions)?,
        None
    )
}

pub(crate) fn character_inventory_summary_url(
    membership_type: MembershipType,
    destiny_membership_id: &str,
    character_id: &str,
    definitions: bool
) -> Result<Url, Error> {
    Ok(with_definitions(
        character_url(membership_type, destiny_membership_id, character_id)?
            .segment("Inventory")
            .segment("Summary")
            .trailing_slash(),
        definitions
    ).finish())
}

#[tracing::instrument(level = "trace", skip(client))]
pub fn get_character_inventory_summary(
    client: &Client,
    membership_type: MembershipType,
    destiny_membership_id: &str,
    character_id: &str,
    definitions: bool
) -> Result<Value, Error> {
    tracing::trace!("Fetching character inventory summary");

    client.execute(
        character_inventory_summary_url(membership_type, destiny_membership_id, character_id, definitions)?,
        None
    )
}

pub(crate) fn character_progression_url(
    membership_type: MembershipType,
    destiny_membership_id: &str,
    character_id: &str,
    definitions: bool
) -> Result<Url, Error> {
    Ok(with_definitions(
        character_url(membership_type, destiny_membership_id, character_id)?
            .segment("Progression")
            .trailing_slash(),
        definitions
    ).finish())
}

#[tracing::instrument(level = "trace", skip(client))]
pub fn get_character_progression(
    client: &Client,
    membership_type: MembershipType,
    destiny_membership_id: &str,
    character_id: &str,
    definitions: bool
) -> Result<Value, Error> {
    tracing::trace!("Fetching character progression");

    client.execute(
        character_progression_url(membership_type, destiny_membership_id, character_id, definitions)?,
        None
    )
}

pub(crate) fn character_summary_url(
    membership_type: MembershipType,
    destiny_membership_id: &str,
    character_id: &str,
    definitions: bool
) -> Result<Url, Error> {
    Ok(with_definitions(
        character_url(membership_type, destiny_membership_id, character_id)?
            .trailing_slash(),
        definitions
    ).finish())
}

#[tracing::instrument(level = "trace", skip(client))]
pub fn get_character_summary(
    client: &Client,
    membership_type: MembershipType,
    destiny_membership_id: &str,
    character_id: &str,
    definitions: bool
) -> Result<Value, Error> {
    tracing::trace!("Fetching character summary");

    client.execute(
        character_summary_url(membership_type, destiny_membership_id, character_id, definitions)?,
        None
    )
}

pub(crate) fn character_aggregate_stats_url(
    membership_type: MembershipType,
    destiny_membership_id: &str,
    character_id: &str,
    definitions: bool
) -> Result<Url, Error> {
    Ok(with_definitions(
        MethodUrl::new(ApiBase::Destiny)
            .segment("Stats")
            .segment("AggregateActivityStats")
            .segment(membership_type)
            .segment(required("destiny_membership_id", destiny_membership_id)?)
            .segment(required("character_id", character_id)?)
            .trailing_slash(),
        definitions
    ).finish())
}

/// Get aggregate activity stats of a character across all activities
#[tracing::instrument(level = "trace", skip(client))]
pub fn get_character_aggregate_stats(
    client: &Client,
    membership_type: MembershipType,
    destiny_membership_id: &str,
    character_id: &str,
    definitions: bool
) -> Result<Value, Error> {
    tracing::trace!("Fetching character aggregate stats");

    client.execute(
        character_aggregate_stats_url(membership_type, destiny_membership_id, character_id, definitions)?,
        None
    )
}

#[allow(clippy::too_many_arguments)]
pub(crate) fn character_stats_url(
    membership_type: MembershipType,
    destiny_membership_id: &str,
    character_id: &str,
    modes: Option<&str>,
    period_type: Option<&str>,
    groups: Option<&str>,
    monthstart: Option<&str>,
    monthend: Option<&str>,
    daystart: Option<&str>,
    dayend: Option<&str>
) -> Result<Url, Error> {
    Ok(MethodUrl::new(ApiBase::Destiny)
        .segment("Stats")
        .segment(membership_type)
        .segment(required("destiny_membership_id", destiny_membership_id)?)
        .segment(required("character_id", character_id)?)
        .trailing_slash()
        .query("modes", modes.unwrap_or("None"))
        .query_opt("periodType", period_type)
        .query_opt("groups", groups)
        .query_opt("monthstart", monthstart)
        .query_opt("monthend", monthend)
        .query_opt("daystart", daystart)
        .query_opt("dayend", dayend)
        .finish())
}

/// Get historical stats of a character, filtered by mode and period
#[tracing::instrument(level = "trace", skip(client))]
#[allow(clippy::too_many_arguments)]
pub fn get_character_stats(
    client: &Client,
    membership_type: MembershipType,
    destiny_membership_id: &str,
    character_id: &str,
    modes: Option<&str>,
    period_type: Option<&str>,
    groups: Option<&str>,
    monthstart: Option<&str>,
    monthend: Option<&str>,
    daystart: Option<&str>,
    dayend: Option<&str>
) -> Result<Value, Error> {
    tracing::trace!("Fetching character stats");

    client.execute(
        character_stats_url(
            membership_type,
            destiny_membership_id,
            character_id,
            modes,
            period_type,
            groups,
            monthstart,
            monthend,
            daystart,
            dayend
        )?,
        None
    )
}

pub(crate) fn account_stats_url(
    membership_type: MembershipType,
    destiny_membership_id: &str,
    groups: Option<&str>
) -> Result<Url, Error> {
    Ok(MethodUrl::new(ApiBase::Destiny)
        .segment("Stats")
        .segment("Account")
        .segment(membership_type)
        .segment(required("destiny_membership_id", destiny_membership_id)?)
        .trailing_slash()
        .query_opt("groups", groups)
        .finish())
}

/// Get historical stats aggregated over the whole account
#[tracing::instrument(level = "trace", skip(client))]
pub fn get_account_stats(
    client: &Client,
    membership_type: MembershipType,
    destiny_membership_id: &str,
    groups: Option<&str>
) -> Result<Value, Error> {
    tracing::trace!("Fetching account stats");

    client.execute(account_stats_url(membership_type, destiny_membership_id, groups)?, None)
}

pub(crate) fn activity_stats_url(
    activity_id: &str,
    definitions: bool
) -> Result<Url, Error> {
    Ok(with_definitions(
        MethodUrl::new(ApiBase::Destiny)
            .segment("Stats")
            .segment("PostGameCarnageReport")
            .segment(required("activity_id", activity_id)?)
            .trailing_slash(),
        definitions
    ).finish())
}

/// Get the post game carnage report of a single activity
#[tracing::instrument(level = "trace", skip(client))]
pub fn get_activity_stats(
    client: &Client,
    activity_id: &str,
    definitions: bool
) -> Result<Value, Error> {
    tracing::trace!("Fetching post game carnage report");

    client.execute(activity_stats_url(activity_id, definitions)?, None)
}

pub(crate) fn char_uniq_weapon_stats_url(
    membership_type: MembershipType,
    destiny_membership_id: &str,
    character_id: &str,
    definitions: bool
) -> Result<Url, Error> {
    Ok(with_definitions(
        MethodUrl::new(ApiBase::Destiny)
            .segment("Stats")
            .segment("UniqueWeapons")
            .segment(membership_type)
            .segment(required("destiny_membership_id", destiny_membership_id)?)
            .segment(required("character_id", character_id)?)
            .trailing_slash(),
        definitions
    ).finish())
}

/// Get unique weapon usage stats of a character
#[tracing::instrument(level = "trace", skip(client))]
pub fn get_char_uniq_weapon_stats(
    client: &Client,
    membership_type: MembershipType,
    destiny_membership_id: &str,
    character_id: &str,
    definitions: bool
) -> Result<Value, Error> {
    tracing::trace!("Fetching unique weapon stats");

    client.execute(
        char_uniq_weapon_stats_url(membership_type, destiny_membership_id, character_id, definitions)?,
        None
    )
}

pub(crate) fn explorer_items_url() -> Url {
    MethodUrl::new(ApiBase::Destiny)
        .segment("Explorer")
        .segment("Items")
        .trailing_slash()
        .finish()
}

#[tracing::instrument(level = "trace", skip(client))]
pub fn get_explorer_items(client: &Client) -> Result<Value, Error> {
    tracing::trace!("Fetching explorer items");

    client.execute(explorer_items_url(), None)
}

pub(crate) fn explorer_talent_node_steps_url() -> Url {
    MethodUrl::new(ApiBase::Destiny)
        .segment("Explorer")
        .segment("TalentNodeSteps")
        .trailing_slash()
        .finish()
}

#[tracing::instrument(level = "trace", skip(client))]
pub fn get_explorer_talent_node_steps(client: &Client) -> Result<Value, Error> {
    tracing::trace!("Fetching explorer talent node steps");

    client.execute(explorer_talent_node_steps_url(), None)
}

pub(crate) fn manifest_url() -> Url {
    MethodUrl::new(ApiBase::Destiny)
        .segment("Manifest")
        .trailing_slash()
        .finish()
}

/// Get the manifest of content definition databases
#[tracing::instrument(level = "trace", skip(client))]
pub fn get_manifest(client: &Client) -> Result<Value, Error> {
    tracing::trace!("Fetching manifest");

    client.execute(manifest_url(), None)
}

pub(crate) fn manifest_item_url(
    definition_type: &str,
    definition_id: &str
) -> Result<Url, Error> {
    Ok(MethodUrl::new(ApiBase::Destiny)
        .segment("Manifest")
        .segment(required("definition_type", definition_type)?)
        .segment(required("definition_id", definition_id)?)
        .trailing_slash()
        .finish())
}

/// Get a single definition out of the manifest
#[tracing::instrument(level = "trace", skip(client))]
pub fn get_manifest_item(
    client: &Client,
    definition_type: &str,
    definition_id: &str
) -> Result<Value, Error> {
    tracing::trace!("Fetching manifest item");

    client.execute(manifest_item_url(definition_type, definition_id)?, None)
}

pub(crate) fn account_grimoire_url(
    membership_type: MembershipType,
    destiny_membership_id: &str
) -> Result<Url, Error> {
    Ok(MethodUrl::new(ApiBase::Destiny)
        .segment("Vanguard")
        .segment("Grimoire")
        .segment(membership_type)
        .segment(required("destiny_membership_id", destiny_membership_id)?)
        .trailing_slash()
        .query("definitions", "true")
        .query("flavour", "true")
        .finish())
}

/// Get the account's grimoire, always with definitions and flavour text
#[tracing::instrument(level = "trace", skip(client))]
pub fn get_account_grimoire(
    client: &Client,
    membership_type: MembershipType,
    destiny_membership_id: &str
) -> Result<Value, Error> {
    tracing::trace!("Fetching account grimoire");

    client.execute(account_grimoire_url(membership_type, destiny_membership_id)?, None)
}

/// Get the account's character ids as a fixed array indexed by class
#[tracing::instrument(level = "trace", skip(client))]
pub fn get_characters(
    client: &Client,
    membership_type: MembershipType,
    destiny_membership_id: &str
) -> Result<CharacterArray, Error> {
    tracing::trace!("Fetching account characters");

    let summary = client.execute(account_summary_url(membership_type, destiny_membership_id, false)?, None)?;

    build_characters(summary)
}

/// Reshape a legacy account summary into a [`CharacterArray`]
///
/// Characters are visited in response order, so with two characters
/// of one class the later one wins
pub(crate) fn build_characters(summary: Value) -> Result<CharacterArray, Error> {
    let summary: schema::Summary = serde_json::from_value(summary)?;

    let mut characters = CharacterArray::default();

    for character in summary.response.data.characters {
        characters.insert(character.character_base.class_type, character.character_base.character_id)?;
    }

    Ok(characters)
}
