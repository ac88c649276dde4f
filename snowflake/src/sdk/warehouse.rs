use crate::error::{Error, Result};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WarehouseSize {
    XSmall,
    Small,
    Medium,
    Large,
    XLarge,
    XXLarge,
    XXXLarge,
    X4Large,
    X5Large,
    X6Large,
}

impl WarehouseSize {
    pub const ALL: [WarehouseSize; 10] = [
        WarehouseSize::XSmall,
        WarehouseSize::Small,
        WarehouseSize::Medium,
        WarehouseSize::Large,
        WarehouseSize::XLarge,
        WarehouseSize::XXLarge,
        WarehouseSize::XXXLarge,
        WarehouseSize::X4Large,
        WarehouseSize::X5Large,
        WarehouseSize::X6Large,
    ];

    /// The spelling `SHOW WAREHOUSES` returns
    pub fn as_str(&self) -> &'static str {
        match self {
            WarehouseSize::XSmall => "XSMALL",
            WarehouseSize::Small => "SMALL",
            WarehouseSize::Medium => "MEDIUM",
            WarehouseSize::Large => "LARGE",
            WarehouseSize::XLarge => "XLARGE",
            WarehouseSize::XXLarge => "XXLARGE",
            WarehouseSize::XXXLarge => "XXXLARGE",
            WarehouseSize::X4Large => "X4LARGE",
            WarehouseSize::X5Large => "X5LARGE",
            WarehouseSize::X6Large => "X6LARGE",
        }
    }
}

impl fmt::Display for WarehouseSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WarehouseSize {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        // Snowflake accepts several aliases for the larger sizes
        match s.trim().to_ascii_uppercase().as_str() {
            "XSMALL" | "X-SMALL" => Ok(WarehouseSize::XSmall),
            "SMALL" => Ok(WarehouseSize::Small),
            "MEDIUM" => Ok(WarehouseSize::Medium),
            "LARGE" => Ok(WarehouseSize::Large),
            "XLARGE" | "X-LARGE" => Ok(WarehouseSize::XLarge),
            "XXLARGE" | "X2LARGE" | "2X-LARGE" | "2XLARGE" => Ok(WarehouseSize::XXLarge),
            "XXXLARGE" | "X3LARGE" | "3X-LARGE" | "3XLARGE" => Ok(WarehouseSize::XXXLarge),
            "X4LARGE" | "4X-LARGE" | "4XLARGE" => Ok(WarehouseSize::X4Large),
            "X5LARGE" | "5X-LARGE" | "5XLARGE" => Ok(WarehouseSize::X5Large),
            "X6LARGE" | "6X-LARGE" | "6XLARGE" => Ok(WarehouseSize::X6Large),
            _ => Err(Error::InvalidWarehouseSize(s.to_string())),
        }
    }
}

/// Normalizer for the `warehouse_size` attribute
pub fn to_warehouse_size(s: &str) -> Result<WarehouseSize> {
    s.parse()
}
