use model::error::ConfigurationError;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// How missing cells of a column are replaced after coercion.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum FillPolicy {
    #[default]
    None,
    /// Take the previous non-missing value in row order.
    ForwardFill,
    /// Take the next non-missing value in row order.
    BackFill,
    /// Take the mean of the column's non-missing values.
    MeanFill,
    /// Linear interpolation between the nearest non-missing neighbours.
    Interpolate,
}

impl FillPolicy {
    pub fn name(&self) -> &'static str {
        match self {
            FillPolicy::None => "none",
            FillPolicy::ForwardFill => "forwardFill",
            FillPolicy::BackFill => "backFill",
            FillPolicy::MeanFill => "meanFill",
            FillPolicy::Interpolate => "interpolate",
        }
    }

    /// Whether the policy computes new values rather than copying existing
    /// ones, which only makes sense for numeric columns.
    pub fn is_arithmetic(&self) -> bool {
        matches!(self, FillPolicy::MeanFill | FillPolicy::Interpolate)
    }
}

impl FromStr for FillPolicy {
    type Err = ConfigurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, '_' | '-'))
            .collect::<String>()
            .to_ascii_lowercase();
        match key.as_str() {
            "none" => Ok(FillPolicy::None),
            "forwardfill" | "ffill" | "pad" => Ok(FillPolicy::ForwardFill),
            "backfill" | "bfill" => Ok(FillPolicy::BackFill),
            "meanfill" | "mean" => Ok(FillPolicy::MeanFill),
            "interpolate" | "linear" => Ok(FillPolicy::Interpolate),
            _ => Err(ConfigurationError::UnknownFillPolicy(s.to_string())),
        }
    }
}

impl fmt::Display for FillPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
