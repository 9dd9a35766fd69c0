use serde::Deserialize;
use serde_json::Value;

use super::datacron::Datacron;

/// One slot in a saved squad. `unit_def_id` references the unit definition;
/// the battle-stat blobs have no published schema and stay opaque.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cell {
    #[serde(default)]
    pub crew_battle_stat: Vec<Value>,
    #[serde(default)]
    pub unit_id: String,
    #[serde(default)]
    pub unit_def_id: String,
    #[serde(default)]
    pub cell_index: i64,
    #[serde(default)]
    pub unit_battle_stat: Option<Value>,
    #[serde(default)]
    pub message_reticle: String,
    #[serde(default)]
    pub progress_item: bool,
    #[serde(default)]
    pub squad_unit_type: i64,
    #[serde(default)]
    pub unit_state: Option<Value>,
    #[serde(default)]
    pub selectable: bool,
    #[serde(default)]
    pub overkill_item: bool,
    #[serde(default)]
    pub inherit_from_definition_id: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Squad {
    #[serde(default)]
    pub cell: Vec<Cell>,
    #[serde(default)]
    pub targeting_tactic: i64,
    #[serde(default)]
    pub squad_type: i64,
    #[serde(default)]
    pub targeting_set_id: String,
    #[serde(default)]
    pub expire_time: String,
    #[serde(default)]
    pub last_save_time: String,
    #[serde(default)]
    pub support_inherit_from_definition_id: String,
    #[serde(default)]
    pub datacron: Option<Datacron>,
}

/// A saved PvP squad slot (arena tab or GAC).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PvpProfile {
    #[serde(default)]
    pub tab: i64,
    #[serde(default)]
    pub rank: i64,
    #[serde(default)]
    pub squad: Option<Squad>,
    #[serde(default)]
    pub event_id: String,
}
