//! Integration tests driving the Comlink client against a local HTTP server.
//!
//! The mock server records every request (URL, headers, raw body bytes) so
//! the tests can assert on what actually went over the wire: header presence
//! in signed/unsigned mode, signature validity against the received bytes,
//! payload contents, and that validation failures never reach the transport.

use std::io::{Read, Write};
use std::sync::{Arc, Mutex};
use std::thread;

use serde_json::{json, Value};

use holotable::comlink::signing::sign;
use holotable::comlink::{ComlinkClient, LeaderboardQuery, LocalizationStore};
use holotable::config::ComlinkCredentials;
use holotable::error::ComlinkError;

/// One request as received by the mock server.
struct CapturedRequest {
    url: String,
    headers: Vec<(String, String)>,
    body: Vec<u8>,
}

impl CapturedRequest {
    fn header(&self, name: &str) -> Option<&str> {
        let name = name.to_ascii_lowercase();
        self.headers
            .iter()
            .find(|(field, _)| *field == name)
            .map(|(_, value)| value.as_str())
    }

    fn body_json(&self) -> Value {
        serde_json::from_slice(&self.body).expect("captured body is JSON")
    }
}

type RequestLog = Arc<Mutex<Vec<CapturedRequest>>>;

/// Starts a mock server; `respond` maps a request URL to the JSON response.
fn spawn_mock<F>(respond: F) -> (String, RequestLog)
where
    F: Fn(&str) -> Value + Send + 'static,
{
    let server = tiny_http::Server::http("127.0.0.1:0").expect("bind mock server");
    let addr = server.server_addr().to_ip().expect("ip listen address");
    let base_url = format!("http://{addr}");

    let log: RequestLog = Arc::new(Mutex::new(Vec::new()));
    let thread_log = log.clone();

    thread::spawn(move || {
        for mut request in server.incoming_requests() {
            let mut body = Vec::new();
            request
                .as_reader()
                .read_to_end(&mut body)
                .expect("read request body");
            let url = request.url().to_string();
            let headers = request
                .headers()
                .iter()
                .map(|header| {
                    (
                        header.field.as_str().as_str().to_ascii_lowercase(),
                        header.value.as_str().to_string(),
                    )
                })
                .collect();
            thread_log
                .lock()
                .unwrap()
                .push(CapturedRequest { url: url.clone(), headers, body });

            let payload = respond(&url);
            let data = serde_json::to_vec(&payload).expect("serialize mock response");
            let response = tiny_http::Response::from_data(data).with_header(
                tiny_http::Header::from_bytes(&b"Content-Type"[..], &b"application/json"[..])
                    .expect("content type header"),
            );
            let _ = request.respond(response);
        }
    });

    (base_url, log)
}

fn credentials() -> ComlinkCredentials {
    ComlinkCredentials {
        access_key: "test-access".to_string(),
        secret_key: "test-secret".to_string(),
    }
}

fn client(base_url: &str, credentials: Option<ComlinkCredentials>) -> ComlinkClient {
    ComlinkClient::new(reqwest::Client::new(), base_url, base_url, credentials)
}

/// Minimal but representative player profile response.
fn player_fixture() -> Value {
    json!({
        "name": "Mitth'raw'nuruodo",
        "level": 85,
        "allyCode": "123456789",
        "playerId": "PLAYER-1",
        "guildId": "GUILD-1",
        "guildName": "Lazy Chiss Warriors",
        "lifetimeSeasonScore": "40000",
        "rosterUnit": [
            {
                "id": "unit-1",
                "definitionId": "GRANDADMIRALTHRAWN:SEVEN_STAR",
                "currentRarity": 7,
                "currentLevel": 85,
                "currentTier": 13,
                "relic": { "currentTier": 9 },
                "skill": [ { "id": "specialskill_THRAWN01", "tier": 8 } ],
                "equippedStatMod": [
                    {
                        "id": "mod-1",
                        "definitionId": "551",
                        "level": 15,
                        "tier": 5,
                        "primaryStat": {
                            "unitStatId": 5,
                            "statValueDecimal": "5880000"
                        },
                        "secondaryStat": [
                            {
                                "stat": { "unitStatId": 41, "statValueDecimal": "1450000" },
                                "statRolls": 4,
                                "roll": ["0.6", "0.8", "0.7", "0.9"]
                            }
                        ]
                    }
                ]
            }
        ],
        "pvpProfile": [
            {
                "tab": 1,
                "rank": 23,
                "eventId": "",
                "squad": {
                    "cell": [
                        { "unitDefId": "GRANDADMIRALTHRAWN:SEVEN_STAR", "cellIndex": 0 }
                    ]
                }
            }
        ],
        "seasonStatus": [
            {
                "seasonId": "SEASON_36",
                "league": "KYBER",
                "wins": 9,
                "losses": 3,
                "division": 25,
                "rank": 104
            }
        ],
        "datacron": [
            {
                "id": "dc-1",
                "setId": 11,
                "templateId": "datacron_set_11_base",
                "affix": [ { "abilityId": "datacron_ability", "statType": 0 } ]
            }
        ],
        "playerRating": {
            "playerSkillRating": { "skillRating": 2301 },
            "playerRankStatus": { "leagueId": "KYBER", "divisionId": 25 }
        }
    })
}

#[tokio::test]
async fn unsigned_requests_carry_no_auth_headers() {
    let (base_url, log) = spawn_mock(|_| json!({}));
    let client = client(&base_url, None);

    client.get_events(false).await.unwrap();

    let requests = log.lock().unwrap();
    assert_eq!(requests.len(), 1);
    let request = &requests[0];
    assert_eq!(request.url, "/getEvents");
    assert!(request.header("authorization").is_none());
    assert!(request.header("x-date").is_none());
    assert_eq!(request.body_json(), json!({ "payload": {}, "enums": false }));
}

#[tokio::test]
async fn signed_requests_cover_the_transmitted_body() {
    let (base_url, log) = spawn_mock(|_| player_fixture());
    let client = client(&base_url, Some(credentials()));

    client
        .get_player(Some("123456789"), None, false)
        .await
        .unwrap();

    let requests = log.lock().unwrap();
    let request = &requests[0];

    let timestamp: u64 = request
        .header("x-date")
        .expect("x-date header present")
        .parse()
        .expect("x-date is millisecond timestamp");
    let authorization = request
        .header("authorization")
        .expect("authorization header present");

    // Recompute the signature over the bytes the server actually received.
    let expected = sign(&credentials(), timestamp, "POST", "/player", &request.body);
    assert_eq!(authorization, expected);
    assert!(authorization.starts_with("HMAC-SHA256 Credential=test-access,Signature="));
    assert_eq!(request.header("content-type"), Some("application/json"));
}

#[tokio::test]
async fn player_payload_prefers_player_id_on_the_wire() {
    let (base_url, log) = spawn_mock(|_| player_fixture());
    let client = client(&base_url, None);

    client
        .get_player(Some("123456789"), Some("PLAYER-1"), false)
        .await
        .unwrap();

    let requests = log.lock().unwrap();
    let payload = &requests[0].body_json()["payload"];
    assert_eq!(payload["playerId"], "PLAYER-1");
    assert!(payload.get("allyCode").is_none());
}

#[tokio::test]
async fn player_profile_decodes_into_typed_record() {
    let (base_url, _log) = spawn_mock(|_| player_fixture());
    let client = client(&base_url, None);

    let player = client.get_player(Some("123456789"), None, false).await.unwrap();

    assert_eq!(player.name, "Mitth'raw'nuruodo");
    assert_eq!(player.level, 85);
    assert_eq!(player.ally_code, "123456789");
    assert_eq!(player.guild_name, "Lazy Chiss Warriors");

    let unit = &player.roster_unit[0];
    assert_eq!(unit.definition_id, "GRANDADMIRALTHRAWN:SEVEN_STAR");
    assert_eq!(unit.relic.as_ref().unwrap().current_tier, 9);
    let roster_mod = &unit.equipped_stat_mod[0];
    assert_eq!(roster_mod.primary_stat.unit_stat_id, 5);
    assert_eq!(roster_mod.secondary_stat[0].stat_rolls, 4);
    assert_eq!(roster_mod.secondary_stat[0].roll.len(), 4);

    let squad = player.pvp_profile[0].squad.as_ref().unwrap();
    assert_eq!(squad.cell[0].unit_def_id, "GRANDADMIRALTHRAWN:SEVEN_STAR");
    assert_eq!(player.season_status[0].league, "KYBER");
    assert_eq!(player.datacron[0].set_id, 11);
    assert_eq!(
        player
            .player_rating
            .as_ref()
            .unwrap()
            .player_skill_rating
            .as_ref()
            .unwrap()
            .skill_rating,
        2301
    );
}

#[tokio::test]
async fn malformed_player_response_is_a_decode_error() {
    let (base_url, _log) = spawn_mock(|_| json!({ "name": "No identity fields" }));
    let client = client(&base_url, None);

    let error = client
        .get_player(Some("123456789"), None, false)
        .await
        .unwrap_err();
    assert!(matches!(
        error,
        ComlinkError::Decode { ref endpoint, .. } if endpoint == "player"
    ));
}

#[tokio::test]
async fn metadata_version_threads_into_localization_fetch() {
    let (base_url, log) = spawn_mock(|url| {
        if url == "/metadata" {
            json!({
                "latestGamedataVersion": "1.2.3",
                "latestLocalizationBundleVersion": "en_v9"
            })
        } else {
            json!({ "localizationBundle": "" })
        }
    });
    let client = client(&base_url, None);

    client.get_localization(None, false, false).await.unwrap();

    let requests = log.lock().unwrap();
    assert_eq!(requests.len(), 2);
    assert_eq!(requests[0].url, "/metadata");
    assert_eq!(requests[1].url, "/localization");
    let body = requests[1].body_json();
    assert_eq!(body["payload"]["id"], "en_v9");
    assert_eq!(body["unzip"], json!(false));
}

#[tokio::test]
async fn game_data_resolves_the_latest_version_when_none_is_given() {
    let (base_url, log) = spawn_mock(|url| {
        if url == "/metadata" {
            json!({
                "latestGamedataVersion": "1.2.3",
                "latestLocalizationBundleVersion": "en_v9"
            })
        } else {
            json!({})
        }
    });
    let client = client(&base_url, None);

    client.get_game_data(None, true, 0, false).await.unwrap();

    let requests = log.lock().unwrap();
    assert_eq!(requests.len(), 2);
    assert_eq!(requests[0].url, "/metadata");
    assert_eq!(requests[1].url, "/data");
    let payload = &requests[1].body_json()["payload"];
    assert_eq!(payload["version"], "1.2.3");
    assert_eq!(payload["includePveUnits"], json!(true));
    assert_eq!(payload["requestSegment"], 0);
}

#[tokio::test]
async fn game_data_with_explicit_version_skips_metadata() {
    let (base_url, log) = spawn_mock(|_| json!({}));
    let client = client(&base_url, None);

    client
        .get_game_data(Some("0.9.0"), false, 2, false)
        .await
        .unwrap();

    let requests = log.lock().unwrap();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].url, "/data");
    let payload = &requests[0].body_json()["payload"];
    assert_eq!(payload["version"], "0.9.0");
    assert_eq!(payload["includePveUnits"], json!(false));
    assert_eq!(payload["requestSegment"], 2);
}

#[tokio::test]
async fn leaderboard_validation_never_reaches_the_transport() {
    let (base_url, log) = spawn_mock(|_| json!({}));
    let client = client(&base_url, None);

    let query = LeaderboardQuery {
        leaderboard_type: 4,
        ..LeaderboardQuery::default()
    };
    let error = client.get_leaderboard(&query, false).await.unwrap_err();

    assert!(matches!(error, ComlinkError::Validation(_)));
    assert!(log.lock().unwrap().is_empty());
}

#[tokio::test]
async fn global_leaderboard_sends_normalized_codes() {
    let (base_url, log) = spawn_mock(|_| json!({}));
    let client = client(&base_url, None);

    let query = LeaderboardQuery {
        leaderboard_type: 6,
        league: Some("kyber".to_string()),
        division: Some(1),
        ..LeaderboardQuery::default()
    };
    client.get_leaderboard(&query, false).await.unwrap();

    let requests = log.lock().unwrap();
    let payload = &requests[0].body_json()["payload"];
    assert_eq!(payload["leaderboardType"], 6);
    assert_eq!(payload["league"], 100);
    assert_eq!(payload["division"], 25);
}

#[tokio::test]
async fn player_arena_legacy_spelling_overrides_canonical() {
    let (base_url, log) = spawn_mock(|_| json!({}));
    let client = client(&base_url, None);

    let options = holotable::comlink::PlayerArenaOptions {
        player_details_only: false,
        player_details_only_legacy: Some(true),
    };
    client
        .get_player_arena(Some("123456789"), None, options, false)
        .await
        .unwrap();

    let requests = log.lock().unwrap();
    let payload = &requests[0].body_json()["payload"];
    assert_eq!(payload["playerDetailsOnly"], json!(true));
    assert_eq!(payload["allyCode"], "123456789");
}

#[tokio::test]
async fn guild_envelope_key_is_unwrapped() {
    let (base_url, _log) = spawn_mock(|_| {
        json!({ "guild": { "profile": { "name": "Lazy Chiss Warriors" } } })
    });
    let client = client(&base_url, None);

    let guild = client
        .get_guild("GUILD-1", Default::default(), false)
        .await
        .unwrap();
    assert_eq!(guild["profile"]["name"], "Lazy Chiss Warriors");
}

#[tokio::test]
async fn stats_requests_use_query_string_and_skip_signing() {
    let (base_url, log) = spawn_mock(|_| json!([]));
    // Credentials configured, but stats calls must still go out unsigned.
    let client = client(&base_url, Some(credentials()));

    let units = json!([{ "defId": "GRANDADMIRALTHRAWN" }]);
    client
        .get_unit_stats(&units, &["gameStyle", "calcGP"], Some("eng_us"))
        .await
        .unwrap();

    let requests = log.lock().unwrap();
    let request = &requests[0];
    assert_eq!(request.url, "/api?flags=gameStyle,calcGP&language=eng_us");
    assert!(request.header("authorization").is_none());
    assert!(request.header("x-date").is_none());
    // Caller payload posted verbatim, no envelope.
    assert_eq!(request.body_json(), units);
}

/// Builds a base64 zip bundle the way the localization endpoint returns it.
fn bundle_fixture(locale: &str) -> String {
    let mut writer = zip::ZipWriter::new(std::io::Cursor::new(Vec::new()));
    writer
        .start_file("Loc_ENG_US.txt", zip::write::SimpleFileOptions::default())
        .expect("start zip entry");
    writer.write_all(locale.as_bytes()).expect("write zip entry");
    let cursor = writer.finish().expect("finish zip");
    use base64::Engine as _;
    base64::engine::general_purpose::STANDARD.encode(cursor.into_inner())
}

#[tokio::test]
async fn localization_pipeline_builds_and_persists_the_dictionary() {
    let locale = "#comment\nUNIT_THRAWN_NAME|Grand Admiral Thrawn\nUNIT_FOO_TITLE|Ignored\nSHIP_NAME|Ignored\nUNIT_REYNOLDS_NAME|Rey";
    let bundle = bundle_fixture(locale);
    let (base_url, _log) = spawn_mock(move |url| {
        if url == "/metadata" {
            json!({
                "latestGamedataVersion": "1.2.3",
                "latestLocalizationBundleVersion": "en_v9"
            })
        } else {
            json!({ "localizationBundle": bundle })
        }
    });
    let client = client(&base_url, None);

    let dir = tempfile::tempdir().unwrap();
    let asset_path = dir.path().join("localisation").join("en-US.json");
    let store = LocalizationStore::with_asset_path(&asset_path);

    store.initialize(&client).await;

    assert_eq!(store.len(), 2);
    assert_eq!(store.unit_name("UNIT_THRAWN_NAME"), Some("Grand Admiral Thrawn"));
    assert_eq!(store.unit_name("UNIT_REYNOLDS_NAME"), Some("Rey"));
    assert_eq!(store.unit_name("UNIT_FOO_TITLE"), None);

    // Persisted artifact reloads to the same mapping.
    let reloaded = holotable::comlink::localization::load(&asset_path).unwrap();
    assert_eq!(reloaded.len(), 2);
    assert_eq!(
        reloaded.get("UNIT_THRAWN_NAME").map(String::as_str),
        Some("Grand Admiral Thrawn")
    );
}

#[tokio::test]
async fn failed_pipeline_leaves_the_store_empty_and_usable() {
    // Response with no bundle field aborts the pipeline.
    let (base_url, _log) = spawn_mock(|url| {
        if url == "/metadata" {
            json!({
                "latestGamedataVersion": "1.2.3",
                "latestLocalizationBundleVersion": "en_v9"
            })
        } else {
            json!({})
        }
    });
    let client = client(&base_url, None);

    let dir = tempfile::tempdir().unwrap();
    let store = LocalizationStore::with_asset_path(dir.path().join("en-US.json"));

    store.initialize(&client).await;

    assert!(store.is_empty());
    assert_eq!(store.unit_name("UNIT_THRAWN_NAME"), None);
}
