use crate::error::{Result, SnowtoothError};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum LiftStatus {
    #[default]
    Open,
    Closed,
    Hold,
}

impl fmt::Display for LiftStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LiftStatus::Open => write!(f, "OPEN"),
            LiftStatus::Closed => write!(f, "CLOSED"),
            LiftStatus::Hold => write!(f, "HOLD"),
        }
    }
}

impl FromStr for LiftStatus {
    type Err = SnowtoothError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_uppercase().as_str() {
            "OPEN" => Ok(LiftStatus::Open),
            "CLOSED" => Ok(LiftStatus::Closed),
            "HOLD" => Ok(LiftStatus::Hold),
            _ => Err(SnowtoothError::Parse(format!("Invalid lift status: {}", s))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum TrailStatus {
    #[default]
    Open,
    Closed,
}

impl fmt::Display for TrailStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrailStatus::Open => write!(f, "OPEN"),
            TrailStatus::Closed => write!(f, "CLOSED"),
        }
    }
}

impl FromStr for TrailStatus {
    type Err = SnowtoothError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_uppercase().as_str() {
            "OPEN" => Ok(TrailStatus::Open),
            "CLOSED" => Ok(TrailStatus::Closed),
            _ => Err(SnowtoothError::Parse(format!(
                "Invalid trail status: {}",
                s
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TrailDifficulty {
    #[default]
    Beginner,
    Intermediate,
    Advanced,
    Expert,
}

impl fmt::Display for TrailDifficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrailDifficulty::Beginner => write!(f, "beginner"),
            TrailDifficulty::Intermediate => write!(f, "intermediate"),
            TrailDifficulty::Advanced => write!(f, "advanced"),
            TrailDifficulty::Expert => write!(f, "expert"),
        }
    }
}

impl FromStr for TrailDifficulty {
    type Err = SnowtoothError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "beginner" | "green" => Ok(TrailDifficulty::Beginner),
            "intermediate" | "blue" => Ok(TrailDifficulty::Intermediate),
            "advanced" | "black" => Ok(TrailDifficulty::Advanced),
            "expert" | "double-black" => Ok(TrailDifficulty::Expert),
            _ => Err(SnowtoothError::Parse(format!(
                "Invalid trail difficulty: {}",
                s
            ))),
        }
    }
}
