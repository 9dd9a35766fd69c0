//! Typed async client for the swgoh-comlink proxy.
//!
//! The client exposes one method per remote endpoint and funnels every call
//! through a single private dispatch point. Centralizing dispatch is what
//! guarantees the HMAC signature always covers the exact transmitted body
//! bytes and that headers are attached consistently; endpoint methods never
//! build their own requests.
//!
//! The client is stateless across calls apart from read-only configuration
//! (base URLs, optional credential pair) and the process-wide shared
//! `reqwest::Client`, so concurrent use needs no locking. Calls are never
//! retried and carry no timeout of their own.

pub mod localization;
pub mod model;
pub mod payload;
pub mod signing;

use serde::Deserialize;
use serde_json::Value;

use crate::config::{ComlinkCredentials, Config};
use crate::error::ComlinkError;

pub use localization::LocalizationStore;
pub use model::Player;
pub use payload::LeaderboardQuery;

/// Which backing service a request is dispatched to.
///
/// Only game-data calls are ever signed; the stats service takes the payload
/// as-is with no authentication.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Target {
    GameData,
    Stats,
}

/// Latest data/localization version identifiers from the metadata endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct GameVersions {
    /// Value of `latestGamedataVersion`.
    #[serde(rename = "latestGamedataVersion")]
    pub game: String,
    /// Value of `latestLocalizationBundleVersion`, used as the localization
    /// bundle id.
    #[serde(rename = "latestLocalizationBundleVersion")]
    pub language: String,
}

/// Options for the player arena lookup.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlayerArenaOptions {
    /// Restrict the response to player details, omitting squads.
    pub player_details_only: bool,
    /// Historical `playerDetailsOnly` spelling. When set it overrides
    /// `player_details_only`; callers migrated to the canonical name leave it
    /// `None`.
    pub player_details_only_legacy: Option<bool>,
}

/// Options for the guild lookup.
#[derive(Debug, Clone, Copy, Default)]
pub struct GuildOptions {
    /// Include the recent-activity block in the response.
    pub include_recent_guild_activity_info: bool,
    /// Historical `includeRecent` spelling; overrides the canonical field
    /// when set.
    pub include_recent_legacy: Option<bool>,
}

/// Client for the swgoh-comlink proxy and the companion stats service.
#[derive(Debug, Clone)]
pub struct ComlinkClient {
    http: reqwest::Client,
    comlink_url: String,
    stats_url: String,
    credentials: Option<ComlinkCredentials>,
}

impl ComlinkClient {
    /// Creates a client from explicit parts.
    ///
    /// `credentials` must already satisfy the pair invariant (both keys
    /// non-empty); [`Config::from_env`] enforces that at startup.
    pub fn new(
        http: reqwest::Client,
        comlink_url: impl Into<String>,
        stats_url: impl Into<String>,
        credentials: Option<ComlinkCredentials>,
    ) -> Self {
        let comlink_url = comlink_url.into().trim_end_matches('/').to_string();
        let stats_url = stats_url.into().trim_end_matches('/').to_string();
        Self {
            http,
            comlink_url,
            stats_url,
            credentials,
        }
    }

    /// Creates a client from the resolved process configuration.
    pub fn from_config(http: reqwest::Client, config: &Config) -> Self {
        Self::new(
            http,
            config.comlink_url.clone(),
            config.stats_url.clone(),
            config.credentials.clone(),
        )
    }

    /// Whether outbound game-data requests are HMAC signed.
    pub fn signing_enabled(&self) -> bool {
        self.credentials.is_some()
    }

    /// Central dispatch: serialize once, sign those bytes if enabled, POST,
    /// decode JSON. All endpoint methods go through here.
    async fn post(&self, target: Target, endpoint: &str, body: &Value) -> Result<Value, ComlinkError> {
        let base = match target {
            Target::GameData => &self.comlink_url,
            Target::Stats => &self.stats_url,
        };
        let url = format!("{base}/{endpoint}");
        let bytes = serde_json::to_vec(body).map_err(|source| ComlinkError::Encode {
            endpoint: endpoint.to_string(),
            source,
        })?;

        let mut request = self
            .http
            .post(&url)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body(bytes.clone());

        if target == Target::GameData {
            if let Some(credentials) = &self.credentials {
                let timestamp = current_millis();
                // The signed path is the bare endpoint with a leading slash,
                // never including a query string.
                let path = format!("/{endpoint}");
                let authorization =
                    signing::sign(credentials, timestamp, "POST", &path, &bytes);
                request = request
                    .header("X-Date", timestamp.to_string())
                    .header("Authorization", authorization);
            }
        }

        tracing::debug!(
            endpoint,
            signed = target == Target::GameData && self.signing_enabled(),
            "Dispatching Comlink request"
        );

        let response = request
            .send()
            .await
            .map_err(|source| ComlinkError::Transport {
                endpoint: endpoint.to_string(),
                source,
            })?;
        let payload = response
            .bytes()
            .await
            .map_err(|source| ComlinkError::Transport {
                endpoint: endpoint.to_string(),
                source,
            })?;

        serde_json::from_slice(&payload).map_err(|source| ComlinkError::Decode {
            endpoint: endpoint.to_string(),
            source,
        })
    }

    /// Fetches game metadata, optionally filtered by client specs.
    pub async fn get_game_metadata(
        &self,
        client_specs: Option<Value>,
        enums: bool,
    ) -> Result<Value, ComlinkError> {
        let body = payload::metadata(client_specs, enums);
        self.post(Target::GameData, "metadata", &body).await
    }

    /// Resolves the latest game-data and localization bundle versions.
    pub async fn get_latest_versions(&self) -> Result<GameVersions, ComlinkError> {
        let metadata = self.get_game_metadata(None, false).await?;
        serde_json::from_value(metadata).map_err(|source| ComlinkError::Decode {
            endpoint: "metadata".to_string(),
            source,
        })
    }

    /// Fetches full game data for a version; resolves the latest version when
    /// none is supplied. Large payload, returned raw.
    pub async fn get_game_data(
        &self,
        version: Option<&str>,
        include_pve_units: bool,
        request_segment: u32,
        enums: bool,
    ) -> Result<Value, ComlinkError> {
        let version = match version {
            Some(version) => version.to_string(),
            None => self.get_latest_versions().await?.game,
        };
        let body = payload::game_data(&version, include_pve_units, request_segment, enums);
        self.post(Target::GameData, "data", &body).await
    }

    /// Fetches the localization bundle for a bundle id; resolves the latest id
    /// when none is supplied. The bundle arrives base64-encoded unless `unzip`
    /// asks the service to expand it.
    pub async fn get_localization(
        &self,
        id: Option<&str>,
        unzip: bool,
        enums: bool,
    ) -> Result<Value, ComlinkError> {
        let id = match id {
            Some(id) => id.to_string(),
            None => self.get_latest_versions().await?.language,
        };
        let body = payload::localization(&id, unzip, enums);
        self.post(Target::GameData, "localization", &body).await
    }

    /// Fetches the game-data enum tables. The one plain GET endpoint, never
    /// signed.
    pub async fn get_enums(&self) -> Result<Value, ComlinkError> {
        let url = format!("{}/enums", self.comlink_url);
        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|source| ComlinkError::Transport {
                endpoint: "enums".to_string(),
                source,
            })?;
        let payload = response
            .bytes()
            .await
            .map_err(|source| ComlinkError::Transport {
                endpoint: "enums".to_string(),
                source,
            })?;
        serde_json::from_slice(&payload).map_err(|source| ComlinkError::Decode {
            endpoint: "enums".to_string(),
            source,
        })
    }

    /// Fetches the current in-game event schedule.
    pub async fn get_events(&self, enums: bool) -> Result<Value, ComlinkError> {
        let body = payload::events(enums);
        self.post(Target::GameData, "getEvents", &body).await
    }

    /// Fetches a full player profile by ally code or player id and decodes it
    /// into the typed [`Player`] record.
    pub async fn get_player(
        &self,
        ally_code: Option<&str>,
        player_id: Option<&str>,
        enums: bool,
    ) -> Result<Player, ComlinkError> {
        let body = payload::player(ally_code, player_id, enums)?;
        let value = self.post(Target::GameData, "player", &body).await?;
        serde_json::from_value(value).map_err(|source| ComlinkError::Decode {
            endpoint: "player".to_string(),
            source,
        })
    }

    /// Fetches the arena-focused player view.
    pub async fn get_player_arena(
        &self,
        ally_code: Option<&str>,
        player_id: Option<&str>,
        options: PlayerArenaOptions,
        enums: bool,
    ) -> Result<Value, ComlinkError> {
        let details_only = payload::resolve_alias(
            options.player_details_only,
            options.player_details_only_legacy,
        );
        let body = payload::player_arena(ally_code, player_id, details_only, enums)?;
        self.post(Target::GameData, "playerArena", &body).await
    }

    /// Fetches a guild by its guild id, unwrapping the `guild` envelope key
    /// when the service includes one.
    pub async fn get_guild(
        &self,
        guild_id: &str,
        options: GuildOptions,
        enums: bool,
    ) -> Result<Value, ComlinkError> {
        let include_recent = payload::resolve_alias(
            options.include_recent_guild_activity_info,
            options.include_recent_legacy,
        );
        let body = payload::guild(guild_id, include_recent, enums);
        let mut value = self.post(Target::GameData, "guild", &body).await?;
        if let Some(guild) = value.get_mut("guild") {
            return Ok(guild.take());
        }
        Ok(value)
    }

    /// Searches guilds by name.
    pub async fn get_guilds_by_name(
        &self,
        name: &str,
        start_index: u32,
        count: u32,
        enums: bool,
    ) -> Result<Value, ComlinkError> {
        let body = payload::guilds_by_name(name, start_index, count, enums);
        self.post(Target::GameData, "getGuilds", &body).await
    }

    /// Searches guilds by multi-field criteria.
    pub async fn get_guilds_by_criteria(
        &self,
        search_criteria: Value,
        start_index: u32,
        count: u32,
        enums: bool,
    ) -> Result<Value, ComlinkError> {
        let body = payload::guilds_by_criteria(search_criteria, start_index, count, enums);
        self.post(Target::GameData, "getGuilds", &body).await
    }

    /// Fetches a GAC leaderboard. The query is validated (and league/division
    /// names normalized) before any network call.
    pub async fn get_leaderboard(
        &self,
        query: &LeaderboardQuery,
        enums: bool,
    ) -> Result<Value, ComlinkError> {
        let body = payload::leaderboard(query, enums)?;
        self.post(Target::GameData, "getLeaderboard", &body).await
    }

    /// Fetches guild leaderboards for a list of typed leaderboard descriptors.
    pub async fn get_guild_leaderboard(
        &self,
        leaderboard_ids: &[Value],
        count: u32,
        enums: bool,
    ) -> Result<Value, ComlinkError> {
        let body = payload::guild_leaderboard(leaderboard_ids, count, enums);
        self.post(Target::GameData, "getGuildLeaderboard", &body).await
    }

    /// Submits a batch unit-stat calculation to the stats service. The caller
    /// payload is posted verbatim and the request is never signed.
    pub async fn get_unit_stats(
        &self,
        request_payload: &Value,
        flags: &[&str],
        language: Option<&str>,
    ) -> Result<Value, ComlinkError> {
        let endpoint = payload::stats_endpoint(flags, language);
        self.post(Target::Stats, &endpoint, request_payload).await
    }
}

/// Milliseconds since the Unix epoch, for the `X-Date` header.
fn current_millis() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis() as u64)
        .unwrap_or(0)
}
