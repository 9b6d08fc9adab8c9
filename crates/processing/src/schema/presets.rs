use super::{Schema, fill_policy::FillPolicy};
use model::error::ConfigurationError;
use std::{fmt, str::FromStr};

const WEATHER_INTERPOLATED: &[&str] = &[
    "latitude",
    "longitude",
    "temp",
    "app_temp",
    "dew_point",
    "rel_hum",
    "delta_t",
    "wind_spd",
    "wind_gust",
    "press_msl",
    "low_temp",
    "high_temp",
    "rain",
];

/// Built-in table kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preset {
    /// Bureau of Meteorology station observations.
    Weather,
    /// Urban forest tree inventory.
    Tree,
}

impl Preset {
    pub fn default_index(&self) -> &'static str {
        match self {
            Preset::Weather => "melbourne_weather",
            Preset::Tree => "trees_data",
        }
    }

    pub fn schema(&self) -> Result<Schema, ConfigurationError> {
        match self {
            Preset::Weather => weather(),
            Preset::Tree => tree(),
        }
    }
}

impl FromStr for Preset {
    type Err = ConfigurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "weather" | "bom" => Ok(Preset::Weather),
            "tree" | "trees" | "sudo" => Ok(Preset::Tree),
            _ => Err(ConfigurationError::UnknownPreset(s.to_string())),
        }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Preset::Weather => f.write_str("weather"),
            Preset::Tree => f.write_str("tree"),
        }
    }
}

fn weather() -> Result<Schema, ConfigurationError> {
    let builder = WEATHER_INTERPOLATED.iter().fold(
        Schema::builder("weather").timestamp("current_date_time"),
        |b, name| b.numeric(name, FillPolicy::Interpolate),
    );
    builder
        .string("station")
        .string("wind_dir")
        .string("high_wind_gust_dir")
        .timestamp("high_wind_gust_time")
        .drop_missing("station")
        .build()
}

fn tree() -> Result<Schema, ConfigurationError> {
    Schema::builder("tree")
        .numeric("latitude", FillPolicy::None)
        .numeric("longitude", FillPolicy::None)
        .string("tree_age")
        .string("status")
        .numeric("easting", FillPolicy::None)
        .string("ule")
        .numeric("htms_id", FillPolicy::None)
        .numeric("height", FillPolicy::None)
        .string("tree_struc")
        .string("tree_healt")
        .string("genus_spec")
        .numeric("dbh", FillPolicy::BackFill)
        .numeric("northing", FillPolicy::MeanFill)
        .build()
}
