use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use super::conversion::Conversion;
use crate::color::{Oklab, Oklch};

/// Which representation a caller wants out of a [`Conversion`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum View {
    /// Only the Cartesian `L, a, b` coordinates
    Oklab,
    /// Only the polar `L, C, h` coordinates
    Oklch,
    /// Both
    #[default]
    All,
}

impl View {
    pub fn as_str(self) -> &'static str {
        match self {
            View::Oklab => "oklab",
            View::Oklch => "oklch",
            View::All => "all",
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for a view name other than `oklab`, `oklch` or `all`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown view {0:?} (expected \"oklab\", \"oklch\" or \"all\")")]
pub struct UnknownView(pub String);

impl FromStr for View {
    type Err = UnknownView;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "oklab" => Ok(View::Oklab),
            "oklch" => Ok(View::Oklch),
            "all" => Ok(View::All),
            _ => Err(UnknownView(s.to_string())),
        }
    }
}

/// A [`Conversion`] narrowed to the requested [`View`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(untagged)
)]
pub enum Projection {
    Oklab(Oklab),
    Oklch(Oklch),
    All(Conversion),
}

impl Projection {
    pub fn oklab(&self) -> Option<Oklab> {
        match self {
            Projection::Oklab(lab) => Some(*lab),
            Projection::All(conversion) => Some(conversion.oklab),
            Projection::Oklch(_) => None,
        }
    }

    pub fn oklch(&self) -> Option<Oklch> {
        match self {
            Projection::Oklch(lch) => Some(*lch),
            Projection::All(conversion) => Some(conversion.oklch),
            Projection::Oklab(_) => None,
        }
    }
}
