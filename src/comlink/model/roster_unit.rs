use serde::Deserialize;
use serde_json::Value;

/// A single stat line as it appears on mods and unit summaries.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stat {
    #[serde(default)]
    pub unit_stat_id: i64,
    #[serde(default)]
    pub stat_value_decimal: String,
    #[serde(default)]
    pub unscaled_decimal_value: String,
    #[serde(default)]
    pub ui_display_override_value: String,
    #[serde(default)]
    pub scalar: String,
}

/// Secondary stat on an equipped mod, including its individual rolls.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SecondaryStat {
    #[serde(default)]
    pub roll: Vec<String>,
    #[serde(default)]
    pub unscaled_roll_value: Vec<String>,
    #[serde(default)]
    pub stat: Stat,
    #[serde(default)]
    pub stat_rolls: i64,
    #[serde(default)]
    pub stat_roller_bounds_min: String,
    #[serde(default)]
    pub stat_roller_bounds_max: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Currency {
    #[serde(default)]
    pub currency: i64,
    #[serde(default)]
    pub quantity: i64,
    #[serde(default)]
    pub bonus_quantity: i64,
}

/// An equipped stat mod with its primary and secondary stat lines.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Mod {
    pub id: String,
    pub definition_id: String,
    #[serde(default)]
    pub secondary_stat: Vec<SecondaryStat>,
    #[serde(default)]
    pub level: i64,
    #[serde(default)]
    pub tier: i64,
    #[serde(default)]
    pub sell_value: Option<Currency>,
    #[serde(default)]
    pub remove_cost: Option<Currency>,
    #[serde(default)]
    pub locked: bool,
    #[serde(default)]
    pub primary_stat: Stat,
    #[serde(default)]
    pub xp: i64,
    #[serde(default)]
    pub level_cost: Option<Currency>,
    #[serde(default)]
    pub bonus_quantity: i64,
    #[serde(default)]
    pub converted_item: Option<Value>,
    #[serde(default)]
    pub rerolled_count: i64,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Skill {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub tier: i64,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Relic {
    #[serde(default)]
    pub current_tier: i64,
}

/// One unit in the player's roster.
///
/// `definition_id` is the referential key into game data and the localization
/// map; no object graph is embedded beyond the mods and skills below.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RosterUnit {
    pub id: String,
    pub definition_id: String,
    #[serde(default)]
    pub skill: Vec<Skill>,
    #[serde(default)]
    pub equipment: Vec<Value>,
    #[serde(default)]
    pub equipped_stat_mod_old: Vec<Value>,
    #[serde(default)]
    pub equipped_stat_mod: Vec<Mod>,
    #[serde(default)]
    pub purchased_ability_id: Vec<String>,
    #[serde(default)]
    pub current_rarity: i64,
    #[serde(default)]
    pub current_level: i64,
    #[serde(default)]
    pub current_xp: i64,
    #[serde(default)]
    pub promotion_recipe_reference: String,
    #[serde(default)]
    pub unit_stat: Option<Value>,
    #[serde(default)]
    pub current_tier: i64,
    #[serde(default)]
    pub relic: Option<Relic>,
}
