use serde::Deserialize;

/// One GAC season result line.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeasonStatus {
    #[serde(default)]
    pub season_id: String,
    #[serde(default)]
    pub event_instance_id: String,
    #[serde(default)]
    pub league: String,
    #[serde(default)]
    pub wins: i64,
    #[serde(default)]
    pub losses: i64,
    #[serde(default)]
    pub season_points: i64,
    #[serde(default)]
    pub division: i64,
    #[serde(default)]
    pub join_time: String,
    #[serde(default)]
    pub end_time: String,
    #[serde(default)]
    pub remove: bool,
    #[serde(default)]
    pub rank: i64,
}
