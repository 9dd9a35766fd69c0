//! Canonical request payload construction.
//!
//! One pure builder per logical Comlink operation. Every builder produces the
//! full request envelope, `{"payload": {...}, "enums": bool}` with the
//! `payload` key always present, so the client can serialize a single buffer
//! and sign exactly the bytes it sends. Caller input that cannot be expressed
//! as a valid payload (unknown league names, incomplete leaderboard queries)
//! is rejected here, before any network traffic.

use serde_json::{json, Map, Value};

use crate::error::ComlinkError;

/// GAC league name to numeric wire code.
const LEAGUES: [(&str, u32); 5] = [
    ("kyber", 100),
    ("aurodium", 80),
    ("chromium", 60),
    ("bronzium", 40),
    ("carbonite", 20),
];

/// Division ordinal (1 = highest) to numeric wire code.
const DIVISIONS: [(u8, u32); 5] = [(1, 25), (2, 20), (3, 15), (4, 10), (5, 5)];

/// Resolves a deprecated parameter spelling against its canonical slot.
///
/// When the deprecated spelling is supplied it overrides and replaces the
/// canonical value; otherwise the canonical value stands. This is the explicit
/// replacement for the historical rename-on-presence decorator behavior.
pub fn resolve_alias<T>(canonical: T, deprecated: Option<T>) -> T {
    deprecated.unwrap_or(canonical)
}

/// Translates a league name into its numeric code, case-insensitively.
pub fn league_code(name: &str) -> Result<u32, ComlinkError> {
    let lowered = name.to_ascii_lowercase();
    LEAGUES
        .iter()
        .find(|(league, _)| *league == lowered)
        .map(|(_, code)| *code)
        .ok_or_else(|| ComlinkError::validation(format!("Unrecognized league name: {name}")))
}

/// Translates a division into its numeric wire code.
///
/// Accepts either the ordinal form (1 through 5, 1 being the highest
/// division) or a value that is already a wire code (5, 10, 15, 20, 25),
/// which passes through unchanged.
pub fn division_code(division: u8) -> Result<u32, ComlinkError> {
    if let Some((_, code)) = DIVISIONS.iter().find(|(ordinal, _)| *ordinal == division) {
        return Ok(*code);
    }
    let scaled = u32::from(division);
    if DIVISIONS.iter().any(|(_, code)| *code == scaled) {
        return Ok(scaled);
    }
    Err(ComlinkError::validation(format!(
        "Unrecognized division: {division} (expected 1-5 or a division code)"
    )))
}

/// Arguments for a GAC leaderboard request.
///
/// Type 4 scans event brackets and requires `event_instance_id` and
/// `group_id`; type 6 reads the global league/division boards and requires
/// `league` and `division`. Field combinations are validated when the payload
/// is built, never on the wire.
#[derive(Debug, Clone, Default)]
pub struct LeaderboardQuery {
    pub leaderboard_type: u8,
    /// League name (`"kyber"`, ...), required for type 6.
    pub league: Option<String>,
    /// Division ordinal 1-5, required for type 6.
    pub division: Option<u8>,
    /// Event and instance id joined by `:`, required for type 4.
    pub event_instance_id: Option<String>,
    /// Bracket group id, required for type 4.
    pub group_id: Option<String>,
}

/// Wraps an operation payload in the standard request envelope.
fn envelope(payload: Value, enums: bool) -> Value {
    json!({ "payload": payload, "enums": enums })
}

/// Builds the identity portion shared by player lookups.
///
/// `playerId` wins whenever it is present; `allyCode` is only used when no
/// player id was given. Exactly one of the two keys ever appears.
fn player_identity(ally_code: Option<&str>, player_id: Option<&str>) -> Result<Map<String, Value>, ComlinkError> {
    let mut payload = Map::new();
    match (player_id, ally_code) {
        (Some(player_id), _) => {
            payload.insert("playerId".to_string(), json!(player_id));
        }
        (None, Some(ally_code)) => {
            payload.insert("allyCode".to_string(), json!(ally_code));
        }
        (None, None) => {
            return Err(ComlinkError::validation(
                "Player lookup requires an ally code or a player id",
            ));
        }
    }
    Ok(payload)
}

pub fn player(
    ally_code: Option<&str>,
    player_id: Option<&str>,
    enums: bool,
) -> Result<Value, ComlinkError> {
    let payload = player_identity(ally_code, player_id)?;
    Ok(envelope(Value::Object(payload), enums))
}

pub fn player_arena(
    ally_code: Option<&str>,
    player_id: Option<&str>,
    player_details_only: bool,
    enums: bool,
) -> Result<Value, ComlinkError> {
    let mut payload = player_identity(ally_code, player_id)?;
    payload.insert("playerDetailsOnly".to_string(), json!(player_details_only));
    Ok(envelope(Value::Object(payload), enums))
}

pub fn guild(guild_id: &str, include_recent_guild_activity_info: bool, enums: bool) -> Value {
    envelope(
        json!({
            "guildId": guild_id,
            "includeRecentGuildActivityInfo": include_recent_guild_activity_info,
        }),
        enums,
    )
}

pub fn guilds_by_name(name: &str, start_index: u32, count: u32, enums: bool) -> Value {
    envelope(
        json!({
            "name": name,
            "filterType": 4,
            "startIndex": start_index,
            "count": count,
        }),
        enums,
    )
}

pub fn guilds_by_criteria(search_criteria: Value, start_index: u32, count: u32, enums: bool) -> Value {
    envelope(
        json!({
            "searchCriteria": search_criteria,
            "filterType": 5,
            "startIndex": start_index,
            "count": count,
        }),
        enums,
    )
}

/// Builds a GAC leaderboard payload, normalizing league/division names to
/// their numeric codes and rejecting incomplete queries.
pub fn leaderboard(query: &LeaderboardQuery, enums: bool) -> Result<Value, ComlinkError> {
    let mut payload = Map::new();
    payload.insert(
        "leaderboardType".to_string(),
        json!(query.leaderboard_type),
    );

    match query.leaderboard_type {
        4 => {
            let (Some(event_instance_id), Some(group_id)) =
                (&query.event_instance_id, &query.group_id)
            else {
                return Err(ComlinkError::validation(
                    "Leaderboard type 4 requires event_instance_id and group_id",
                ));
            };
            payload.insert("eventInstanceId".to_string(), json!(event_instance_id));
            payload.insert("groupId".to_string(), json!(group_id));
        }
        6 => {
            let (Some(league), Some(division)) = (&query.league, query.division) else {
                return Err(ComlinkError::validation(
                    "Leaderboard type 6 requires league and division",
                ));
            };
            payload.insert("league".to_string(), json!(league_code(league)?));
            payload.insert("division".to_string(), json!(division_code(division)?));
        }
        other => {
            return Err(ComlinkError::validation(format!(
                "Unsupported leaderboard type: {other} (expected 4 or 6)"
            )));
        }
    }

    Ok(envelope(Value::Object(payload), enums))
}

pub fn guild_leaderboard(leaderboard_ids: &[Value], count: u32, enums: bool) -> Value {
    envelope(
        json!({ "leaderboardId": leaderboard_ids, "count": count }),
        enums,
    )
}

pub fn game_data(version: &str, include_pve_units: bool, request_segment: u32, enums: bool) -> Value {
    envelope(
        json!({
            "version": version,
            "includePveUnits": include_pve_units,
            "requestSegment": request_segment,
        }),
        enums,
    )
}

/// Localization bundle request. The `unzip` flag asks the service itself to
/// decompress the bundle; the pipeline keeps it off and unzips locally.
pub fn localization(id: &str, unzip: bool, enums: bool) -> Value {
    json!({ "unzip": unzip, "enums": enums, "payload": { "id": id } })
}

/// Metadata request; an entirely empty body when no client specs are given.
pub fn metadata(client_specs: Option<Value>, enums: bool) -> Value {
    match client_specs {
        Some(specs) => envelope(json!({ "client_specs": specs }), enums),
        None => json!({}),
    }
}

pub fn events(enums: bool) -> Value {
    envelope(json!({}), enums)
}

/// Builds the stats-service endpoint string, appending the optional `flags`
/// and `language` query parameters.
pub fn stats_endpoint(flags: &[&str], language: Option<&str>) -> String {
    let mut params = Vec::new();
    if !flags.is_empty() {
        params.push(format!("flags={}", flags.join(",")));
    }
    if let Some(language) = language {
        params.push(format!("language={language}"));
    }
    if params.is_empty() {
        "api".to_string()
    } else {
        format!("api?{}", params.join("&"))
    }
}
