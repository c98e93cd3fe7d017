use std::{fmt, str::FromStr};

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Equipment category, fixed when the item is created
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum ArsenalKind {
    Camera,
    Laptop,
    Printer,
}

impl ArsenalKind {
    pub const ALL: [ArsenalKind; 3] = [Self::Camera, Self::Laptop, Self::Printer];

    /// Value stored in the `type` column and used in query strings
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Camera => "camera",
            Self::Laptop => "laptop",
            Self::Printer => "printer",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Camera => "Camera",
            Self::Laptop => "Laptop",
            Self::Printer => "Printer",
        }
    }

    /// Position of the category in [`ArsenalKind::ALL`]
    pub fn index(&self) -> usize {
        match self {
            Self::Camera => 0,
            Self::Laptop => 1,
            Self::Printer => 2,
        }
    }
}

impl fmt::Display for ArsenalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ArsenalKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "camera" => Ok(Self::Camera),
            "laptop" => Ok(Self::Laptop),
            "printer" => Ok(Self::Printer),
            other => Err(format!("Unknown arsenal type: {}", other)),
        }
    }
}

/// Equipment record with its event references resolved to display labels
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct ArsenalItemDto {
    pub id: i32,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: ArsenalKind,
    /// Event names, positionally aligned with the stored references
    pub events: Vec<String>,
    pub date_added: NaiveDateTime,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct CreateArsenalDto {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: ArsenalKind,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct RenameArsenalDto {
    pub name: String,
}
