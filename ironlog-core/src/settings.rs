//! User settings
//!
//! Settings are stored as a (possibly incomplete) JSON record. Every read
//! goes through [`resolve_settings`], which fills each missing field from
//! its default independently, so a record written by an older version
//! never fails to load. A field holding a value of the wrong type is
//! treated as missing rather than discarding the whole record.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};

pub const DEFAULT_PR_THRESHOLD_WEIGHT: f64 = 2.5;
pub const DEFAULT_PR_THRESHOLD_REPS: u32 = 1;
pub const DEFAULT_PR_THRESHOLD_VOLUME_PERCENT: f64 = 5.0;
pub const DEFAULT_PR_THRESHOLD_1RM_PERCENT: f64 = 2.0;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeightUnit {
    #[default]
    Kg,
    Lbs,
}

impl WeightUnit {
    pub fn as_str(&self) -> &'static str {
        match self {
            WeightUnit::Kg => "kg",
            WeightUnit::Lbs => "lbs",
        }
    }
}

impl std::str::FromStr for WeightUnit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "kg" => Ok(WeightUnit::Kg),
            "lbs" => Ok(WeightUnit::Lbs),
            _ => Err(format!("unknown weight unit: {}", s)),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

/// Fully resolved application settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppSettings {
    pub weight_unit: WeightUnit,
    /// Rest timer after a working set, in seconds
    pub default_rest_timer_work: u32,
    /// Rest timer after a warmup set, in seconds
    pub default_rest_timer_warmup: u32,
    pub rest_timer_sound: bool,
    pub rest_timer_auto_start: bool,
    pub show_previous_values: bool,
    pub theme: ThemeMode,

    /// Minimum absolute weight gain for a weight PR
    pub pr_threshold_weight: f64,
    /// Minimum absolute rep gain for a reps PR
    pub pr_threshold_reps: u32,
    /// Minimum volume gain, in percent
    pub pr_threshold_volume_percent: f64,
    /// Minimum estimated 1RM gain, in percent
    #[serde(rename = "prThreshold1RMPercent")]
    pub pr_threshold_1rm_percent: f64,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            weight_unit: WeightUnit::Kg,
            default_rest_timer_work: 120,
            default_rest_timer_warmup: 90,
            rest_timer_sound: true,
            rest_timer_auto_start: true,
            show_previous_values: true,
            theme: ThemeMode::System,
            pr_threshold_weight: DEFAULT_PR_THRESHOLD_WEIGHT,
            pr_threshold_reps: DEFAULT_PR_THRESHOLD_REPS,
            pr_threshold_volume_percent: DEFAULT_PR_THRESHOLD_VOLUME_PERCENT,
            pr_threshold_1rm_percent: DEFAULT_PR_THRESHOLD_1RM_PERCENT,
        }
    }
}

/// Settings as stored: any field may be missing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartialSettings {
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub weight_unit: Option<WeightUnit>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub default_rest_timer_work: Option<u32>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub default_rest_timer_warmup: Option<u32>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub rest_timer_sound: Option<bool>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub rest_timer_auto_start: Option<bool>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub show_previous_values: Option<bool>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub theme: Option<ThemeMode>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub pr_threshold_weight: Option<f64>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub pr_threshold_reps: Option<u32>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub pr_threshold_volume_percent: Option<f64>,
    #[serde(
        default,
        rename = "prThreshold1RMPercent",
        deserialize_with = "lenient",
        skip_serializing_if = "Option::is_none"
    )]
    pub pr_threshold_1rm_percent: Option<f64>,
}

/// Decode one optional field; null or a value of the wrong shape is `None`.
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    if value.is_null() {
        return Ok(None);
    }
    match serde_json::from_value(value) {
        Ok(parsed) => Ok(Some(parsed)),
        Err(e) => {
            tracing::warn!(error = %e, "Ignoring malformed setting");
            Ok(None)
        }
    }
}

impl PartialSettings {
    /// Overlay `update` on top of `self`; fields set in `update` win.
    pub fn merge(self, update: PartialSettings) -> PartialSettings {
        PartialSettings {
            weight_unit: update.weight_unit.or(self.weight_unit),
            default_rest_timer_work: update
                .default_rest_timer_work
                .or(self.default_rest_timer_work),
            default_rest_timer_warmup: update
                .default_rest_timer_warmup
                .or(self.default_rest_timer_warmup),
            rest_timer_sound: update.rest_timer_sound.or(self.rest_timer_sound),
            rest_timer_auto_start: update.rest_timer_auto_start.or(self.rest_timer_auto_start),
            show_previous_values: update.show_previous_values.or(self.show_previous_values),
            theme: update.theme.or(self.theme),
            pr_threshold_weight: update.pr_threshold_weight.or(self.pr_threshold_weight),
            pr_threshold_reps: update.pr_threshold_reps.or(self.pr_threshold_reps),
            pr_threshold_volume_percent: update
                .pr_threshold_volume_percent
                .or(self.pr_threshold_volume_percent),
            pr_threshold_1rm_percent: update
                .pr_threshold_1rm_percent
                .or(self.pr_threshold_1rm_percent),
        }
    }
}

/// Fill every missing field of `stored` with its default.
pub fn resolve_settings(stored: &PartialSettings) -> AppSettings {
    let d = AppSettings::default();
    AppSettings {
        weight_unit: stored.weight_unit.unwrap_or(d.weight_unit),
        default_rest_timer_work: stored
            .default_rest_timer_work
            .unwrap_or(d.default_rest_timer_work),
        default_rest_timer_warmup: stored
            .default_rest_timer_warmup
            .unwrap_or(d.default_rest_timer_warmup),
        rest_timer_sound: stored.rest_timer_sound.unwrap_or(d.rest_timer_sound),
        rest_timer_auto_start: stored
            .rest_timer_auto_start
            .unwrap_or(d.rest_timer_auto_start),
        show_previous_values: stored
            .show_previous_values
            .unwrap_or(d.show_previous_values),
        theme: stored.theme.unwrap_or(d.theme),
        pr_threshold_weight: stored.pr_threshold_weight.unwrap_or(d.pr_threshold_weight),
        pr_threshold_reps: stored.pr_threshold_reps.unwrap_or(d.pr_threshold_reps),
        pr_threshold_volume_percent: stored
            .pr_threshold_volume_percent
            .unwrap_or(d.pr_threshold_volume_percent),
        pr_threshold_1rm_percent: stored
            .pr_threshold_1rm_percent
            .unwrap_or(d.pr_threshold_1rm_percent),
    }
}
