//! Enumerated form options and their wire names.
//!
//! Wire names are exactly what the collage endpoint accepts as query values.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::form::parse::ParseError;

/// What the collage is built from. Each mode has its own grid ceiling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CollageMode {
    #[default]
    Album,
    Artist,
    Track,
}

impl CollageMode {
    pub const ALL: [CollageMode; 3] = [CollageMode::Album, CollageMode::Artist, CollageMode::Track];

    /// Largest row or column count accepted for this mode.
    pub fn max_grid(self) -> u32 {
        match self {
            CollageMode::Album => 15,
            CollageMode::Artist => 10,
            CollageMode::Track => 5,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            CollageMode::Album => "album",
            CollageMode::Artist => "artist",
            CollageMode::Track => "track",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CollageMode::Album => "Albums",
            CollageMode::Artist => "Artists",
            CollageMode::Track => "Tracks",
        }
    }
}

impl FromStr for CollageMode {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CollageMode::ALL
            .into_iter()
            .find(|mode| mode.as_str() == s)
            .ok_or_else(|| ParseError::InvalidMethod(s.to_string()))
    }
}

impl fmt::Display for CollageMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Listening-history window the collage covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Period {
    #[default]
    #[serde(rename = "7day")]
    SevenDays,
    #[serde(rename = "1month")]
    OneMonth,
    #[serde(rename = "3month")]
    ThreeMonths,
    #[serde(rename = "6month")]
    SixMonths,
    #[serde(rename = "12month")]
    TwelveMonths,
    #[serde(rename = "overall")]
    Overall,
}

impl Period {
    pub const ALL: [Period; 6] = [
        Period::SevenDays,
        Period::OneMonth,
        Period::ThreeMonths,
        Period::SixMonths,
        Period::TwelveMonths,
        Period::Overall,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Period::SevenDays => "7day",
            Period::OneMonth => "1month",
            Period::ThreeMonths => "3month",
            Period::SixMonths => "6month",
            Period::TwelveMonths => "12month",
            Period::Overall => "overall",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Period::SevenDays => "Last 7 days",
            Period::OneMonth => "Last month",
            Period::ThreeMonths => "Last 3 months",
            Period::SixMonths => "Last 6 months",
            Period::TwelveMonths => "Last 12 months",
            Period::Overall => "All time",
        }
    }
}

impl FromStr for Period {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Period::ALL
            .into_iter()
            .find(|period| period.as_str() == s)
            .ok_or_else(|| ParseError::InvalidPeriod(s.to_string()))
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Corner or edge of each tile where captions are drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextLocation {
    #[default]
    TopLeft,
    TopCentre,
    TopRight,
    BottomLeft,
    BottomCentre,
    BottomRight,
}

impl TextLocation {
    pub const ALL: [TextLocation; 6] = [
        TextLocation::TopLeft,
        TextLocation::TopCentre,
        TextLocation::TopRight,
        TextLocation::BottomLeft,
        TextLocation::BottomCentre,
        TextLocation::BottomRight,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            TextLocation::TopLeft => "topleft",
            TextLocation::TopCentre => "topcentre",
            TextLocation::TopRight => "topright",
            TextLocation::BottomLeft => "bottomleft",
            TextLocation::BottomCentre => "bottomcentre",
            TextLocation::BottomRight => "bottomright",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TextLocation::TopLeft => "Top left",
            TextLocation::TopCentre => "Top centre",
            TextLocation::TopRight => "Top right",
            TextLocation::BottomLeft => "Bottom left",
            TextLocation::BottomCentre => "Bottom centre",
            TextLocation::BottomRight => "Bottom right",
        }
    }
}

impl FromStr for TextLocation {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TextLocation::ALL
            .into_iter()
            .find(|location| location.as_str() == s)
            .ok_or_else(|| ParseError::InvalidTextLocation(s.to_string()))
    }
}

impl fmt::Display for TextLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
