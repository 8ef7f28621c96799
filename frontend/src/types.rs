use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

const DARK: &str = "dark";
const LIGHT: &str = "light";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DisplayMode {
    #[default]
    Light,
    Dark,
}

impl DisplayMode {
    pub fn as_str(self) -> &'static str {
        match self {
            DisplayMode::Light => LIGHT,
            DisplayMode::Dark => DARK,
        }
    }

    pub fn flipped(self) -> Self {
        match self {
            DisplayMode::Light => DisplayMode::Dark,
            DisplayMode::Dark => DisplayMode::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == DisplayMode::Dark
    }
}

impl fmt::Display for DisplayMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct UnknownMode;

impl FromStr for DisplayMode {
    type Err = UnknownMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            DARK => Ok(DisplayMode::Dark),
            LIGHT => Ok(DisplayMode::Light),
            _ => Err(UnknownMode),
        }
    }
}

/// Body of the like endpoint request.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct LikeBody<'a> {
    #[serde(rename = "reviewId")]
    pub review_id: &'a str,
}

/// Server-owned like state, mirrored verbatim.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct LikeResponse {
    pub likes_stats_display: String,
    pub liked: bool,
}
