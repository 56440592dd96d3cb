use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unknown string value for one of the `str_enum!` types.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid {field} value: {value}")]
pub struct InvalidEnum {
    pub field: String,
    pub value: String,
}

/// Macro to generate enum with as_str + std::str::FromStr pattern
macro_rules! str_enum {
    ($name:ident { $($variant:ident => $s:literal),+ $(,)? }) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(#[serde(rename = $s)] $variant),+
        }

        impl $name {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $s),+
                }
            }
        }

        impl std::str::FromStr for $name {
            type Err = InvalidEnum;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($s => Ok(Self::$variant)),+,
                    _ => Err(InvalidEnum {
                        field: stringify!($name).into(),
                        value: s.into(),
                    }),
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

str_enum!(ParameterKey {
    Glucose => "glucose",
    Hba1c => "hba1c",
    Hemoglobin => "hemoglobin",
    Cholesterol => "cholesterol",
    Ldl => "ldl",
    Hdl => "hdl",
    Triglycerides => "triglycerides",
    Creatinine => "creatinine",
    BloodUrea => "blood_urea",
    Sodium => "sodium",
    Potassium => "potassium",
    Alt => "alt",
    Ast => "ast",
    Bilirubin => "bilirubin",
    Albumin => "albumin",
    BloodPressure => "blood_pressure",
    Bmi => "bmi",
    Wbc => "wbc",
    Rbc => "rbc",
});

str_enum!(ParameterStatus {
    Normal => "NORMAL",
    BorderlineLow => "BORDERLINE_LOW",
    BorderlineHigh => "BORDERLINE_HIGH",
    High => "HIGH",
    Low => "LOW",
});

str_enum!(ExtractionSource {
    Table => "table",
    Line => "line",
    Proximity => "proximity",
});

str_enum!(ModelId {
    Heart => "heart",
    Liver => "liver",
    Kidney => "kidney",
    Diabetes => "diabetes",
});

str_enum!(Priority {
    High => "High",
    Medium => "Medium",
});

str_enum!(OverallRisk {
    Low => "Low",
    Moderate => "Moderate",
    High => "High",
});

str_enum!(SummarySource {
    Ai => "ai",
    RuleBased => "rule_based",
});

/// Direction of a non-normal finding, ignoring severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Deviation {
    High,
    Low,
}

impl ParameterStatus {
    /// HIGH or LOW.
    pub fn is_abnormal(&self) -> bool {
        matches!(self, Self::High | Self::Low)
    }

    pub fn is_borderline(&self) -> bool {
        matches!(self, Self::BorderlineLow | Self::BorderlineHigh)
    }

    /// Collapse severity: borderline and full deviations share a direction.
    pub fn deviation(&self) -> Option<Deviation> {
        match self {
            Self::Normal => None,
            Self::High | Self::BorderlineHigh => Some(Deviation::High),
            Self::Low | Self::BorderlineLow => Some(Deviation::Low),
        }
    }
}

impl ModelId {
    /// Routing order used to break score ties.
    pub const ALL: [ModelId; 4] = [Self::Heart, Self::Liver, Self::Kidney, Self::Diabetes];

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Heart => "Heart Disease Prediction",
            Self::Liver => "Liver Disease Prediction",
            Self::Kidney => "Kidney Disease Prediction",
            Self::Diabetes => "Diabetes Prediction",
        }
    }
}
