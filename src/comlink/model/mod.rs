//! Typed decoding contracts for Comlink responses.
//!
//! Only the player profile, the largest and most nested response this bot
//! consumes, gets a typed model; every other endpoint returns raw
//! `serde_json::Value` to its caller. Wire names are camelCase throughout.
//!
//! Substructures the game never documented are carried as opaque
//! `serde_json::Value` pass-through rather than guessed-at structs, and every
//! collection defaults to empty so a sparse profile still decodes.

pub mod datacron;
pub mod pvp_profile;
pub mod roster_unit;
pub mod season_status;

use serde::Deserialize;

pub use datacron::{Affix, Datacron};
pub use pvp_profile::{Cell, PvpProfile, Squad};
pub use roster_unit::{Currency, Mod, Relic, RosterUnit, SecondaryStat, Skill, Stat};
pub use season_status::SeasonStatus;

/// Player title/portrait unlock entry. Shape left open upstream; carried
/// through untouched.
pub type UnlockedPlayerProperty = serde_json::Value;

/// Aggregate profile statistic entry. Shape left open upstream.
pub type ProfileStat = serde_json::Value;

/// A player's GAC skill rating.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerSkillRating {
    #[serde(default)]
    pub skill_rating: i64,
}

/// Current league/division placement.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerRankStatus {
    #[serde(default)]
    pub league_id: String,
    #[serde(default)]
    pub division_id: i64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerRating {
    #[serde(default)]
    pub player_skill_rating: Option<PlayerSkillRating>,
    #[serde(default)]
    pub player_rank_status: Option<PlayerRankStatus>,
}

/// Full player profile as returned by the `player` endpoint.
///
/// The scalar identity fields are required; a response without them fails to
/// decode and surfaces as a decode error naming the endpoint. Nested
/// sequences reference unit definitions by string id (`definitionId`,
/// `unitDefId`); display names are resolved separately through the
/// localization map.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub name: String,
    pub level: i64,
    pub ally_code: String,
    pub player_id: String,

    #[serde(default)]
    pub guild_id: String,
    #[serde(default)]
    pub guild_name: String,
    #[serde(default)]
    pub guild_logo_background: String,
    #[serde(default)]
    pub guild_banner_color: String,
    #[serde(default)]
    pub guild_banner_logo: String,
    #[serde(default)]
    pub guild_type_id: String,

    /// Player's unit collection, one entry per owned unit.
    #[serde(default)]
    pub roster_unit: Vec<RosterUnit>,
    #[serde(default)]
    pub profile_stat: Vec<ProfileStat>,
    /// Saved arena/GAC squads.
    #[serde(default)]
    pub pvp_profile: Vec<PvpProfile>,
    #[serde(default)]
    pub unlocked_player_title: Vec<UnlockedPlayerProperty>,
    #[serde(default)]
    pub unlocked_player_portrait: Vec<UnlockedPlayerProperty>,
    /// GAC season history, most recent last.
    #[serde(default)]
    pub season_status: Vec<SeasonStatus>,
    #[serde(default)]
    pub datacron: Vec<Datacron>,

    #[serde(default)]
    pub selected_player_title: Option<UnlockedPlayerProperty>,
    #[serde(default)]
    pub selected_player_portrait: Option<UnlockedPlayerProperty>,
    #[serde(default)]
    pub local_time_zone_offset_minutes: i64,
    #[serde(default)]
    pub last_activity_time: String,
    #[serde(default)]
    pub lifetime_season_score: String,
    #[serde(default)]
    pub player_rating: Option<PlayerRating>,
}
