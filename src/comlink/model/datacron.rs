use serde::Deserialize;
use serde_json::Value;

/// A single datacron ability/stat bonus tier.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Affix {
    #[serde(default)]
    pub tag: Vec<Value>,
    #[serde(default)]
    pub target_rule: String,
    #[serde(default)]
    pub ability_id: String,
    #[serde(default)]
    pub stat_type: i64,
    #[serde(default)]
    pub stat_value: String,
    #[serde(default)]
    pub required_unit_tier: i64,
    #[serde(default)]
    pub required_relic_tier: i64,
    #[serde(default)]
    pub scope_icon: String,
}

/// An owned datacron. The same shape is embedded in saved squads, where the
/// reroll bookkeeping fields are simply absent.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Datacron {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub set_id: i64,
    #[serde(default)]
    pub template_id: String,
    #[serde(default)]
    pub tag: Vec<Value>,
    #[serde(default)]
    pub affix: Vec<Affix>,
    #[serde(default)]
    pub reroll_option: Vec<Value>,
    #[serde(default)]
    pub locked: bool,
    #[serde(default)]
    pub reroll_index: i64,
    #[serde(default)]
    pub reroll_count: i64,
}
