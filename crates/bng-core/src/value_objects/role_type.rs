//! Role types and their category classification
//!
//! The set of organizational roles is small and fixed. Category membership is
//! decided in exactly one place (`ChapterRoleType::category`), so a new role
//! type is classified here and nowhere else.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Chapter-level role types.
///
/// String forms match the values stored in the `role_type` columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChapterRoleType {
    #[serde(rename = "chapterHead")]
    ChapterHead,
    #[serde(rename = "secretary")]
    Secretary,
    #[serde(rename = "treasurer")]
    Treasurer,
    #[serde(rename = "guardian")]
    Guardian,
    #[serde(rename = "districtCoordinator")]
    DistrictCoordinator,
    #[serde(rename = "regionalCoordinator")]
    RegionalCoordinator,
    #[serde(rename = "developmentCoordinator")]
    DevelopmentCoordinator,
}

/// Zone-level role types. Authority cascades to every chapter in the zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ZoneRoleType {
    #[serde(rename = "RegionalDirector")]
    RegionalDirector,
    #[serde(rename = "JointSecretary")]
    JointSecretary,
}

/// Access category a chapter role falls into.
///
/// OB: chapter-local leadership. DC: chapter-local coordinator/mentor roles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoleCategory {
    OfficeBearer,
    DevelopmentCoordinator,
}

impl ChapterRoleType {
    pub const ALL: [ChapterRoleType; 7] = [
        Self::ChapterHead,
        Self::Secretary,
        Self::Treasurer,
        Self::Guardian,
        Self::DistrictCoordinator,
        Self::RegionalCoordinator,
        Self::DevelopmentCoordinator,
    ];

    /// Classify this role type into its access category.
    #[must_use]
    pub fn category(self) -> RoleCategory {
        match self {
            Self::ChapterHead | Self::Secretary | Self::Treasurer => RoleCategory::OfficeBearer,
            Self::Guardian
            | Self::DistrictCoordinator
            | Self::RegionalCoordinator
            | Self::DevelopmentCoordinator => RoleCategory::DevelopmentCoordinator,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::ChapterHead => "chapterHead",
            Self::Secretary => "secretary",
            Self::Treasurer => "treasurer",
            Self::Guardian => "guardian",
            Self::DistrictCoordinator => "districtCoordinator",
            Self::RegionalCoordinator => "regionalCoordinator",
            Self::DevelopmentCoordinator => "developmentCoordinator",
        }
    }
}

impl ZoneRoleType {
    pub const ALL: [ZoneRoleType; 2] = [Self::RegionalDirector, Self::JointSecretary];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::RegionalDirector => "RegionalDirector",
            Self::JointSecretary => "JointSecretary",
        }
    }
}

impl fmt::Display for ChapterRoleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for ZoneRoleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error when parsing a role type from its string form
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown role type: {0}")]
pub struct RoleTypeParseError(pub String);

impl std::str::FromStr for ChapterRoleType {
    type Err = RoleTypeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|r| r.as_str() == s)
            .ok_or_else(|| RoleTypeParseError(s.to_string()))
    }
}

impl std::str::FromStr for ZoneRoleType {
    type Err = RoleTypeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|r| r.as_str() == s)
            .ok_or_else(|| RoleTypeParseError(s.to_string()))
    }
}

/// Action recorded on a role history row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoleAction {
    /// Open interval: the role is currently held
    #[serde(rename = "assigned")]
    Assigned,
    /// Interval closed by an explicit removal
    #[serde(rename = "removed")]
    Removed,
    /// Compensating record synthesized when a removal found no open interval
    #[serde(rename = "removed_direct_action")]
    RemovedDirectAction,
}

impl RoleAction {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Assigned => "assigned",
            Self::Removed => "removed",
            Self::RemovedDirectAction => "removed_direct_action",
        }
    }
}

impl fmt::Display for RoleAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for RoleAction {
    type Err = RoleTypeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "assigned" => Ok(Self::Assigned),
            "removed" => Ok(Self::Removed),
            "removed_direct_action" => Ok(Self::RemovedDirectAction),
            other => Err(RoleTypeParseError(other.to_string())),
        }
    }
}
