// File: ./src/model/request.rs
// Input-side parameters for the generator endpoint
use crate::errors::InvalidParameter;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Grid size bucket accepted by the generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GridSize {
    Small,
    Medium,
    Large,
}

/// Difficulty level accepted by the generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

/// Theme vocabulary accepted by the generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Random,
    Animals,
    Food,
    Sports,
    Science,
    Geography,
}

impl fmt::Display for GridSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
        })
    }
}

impl FromStr for GridSize {
    type Err = InvalidParameter;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "small" => Ok(Self::Small),
            "medium" => Ok(Self::Medium),
            "large" => Ok(Self::Large),
            _ => Err(InvalidParameter::new("size", s)),
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        })
    }
}

impl FromStr for Difficulty {
    type Err = InvalidParameter;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(Self::Easy),
            "medium" => Ok(Self::Medium),
            "hard" => Ok(Self::Hard),
            _ => Err(InvalidParameter::new("difficulty", s)),
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Random => "random",
            Self::Animals => "animals",
            Self::Food => "food",
            Self::Sports => "sports",
            Self::Science => "science",
            Self::Geography => "geography",
        })
    }
}

impl FromStr for Theme {
    type Err = InvalidParameter;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "random" => Ok(Self::Random),
            "animals" => Ok(Self::Animals),
            "food" => Ok(Self::Food),
            "sports" => Ok(Self::Sports),
            "science" => Ok(Self::Science),
            "geography" => Ok(Self::Geography),
            _ => Err(InvalidParameter::new("theme", s)),
        }
    }
}

/// Parameters for one generation request. Unset parameters are left to the
/// server's defaults and never emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerateRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<GridSize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theme: Option<Theme>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<Difficulty>,
}

impl GenerateRequest {
    /// Emit the set parameters as query pairs, in declaration order.
    pub fn to_query_params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if let Some(size) = self.size {
            params.push(("size", size.to_string()));
        }
        if let Some(theme) = self.theme {
            params.push(("theme", theme.to_string()));
        }
        if let Some(difficulty) = self.difficulty {
            params.push(("difficulty", difficulty.to_string()));
        }
        params
    }
}
