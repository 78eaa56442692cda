//! Lengths as authored: a number paired with the unit it was written in.
use crate::parsers::{parse_length, run_parser};
use crate::StyleParseError;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Unit {
    #[default]
    Auto,
    Px,
    Percent,
    Em,
    Rem,
    /// A unitless number, e.g. `line-height: 1.5`.
    Number,
    Vw,
    Vh,
    VMax,
    VMin,
}

impl Unit {
    pub fn suffix(&self) -> &'static str {
        match self {
            Unit::Auto | Unit::Number => "",
            Unit::Px => "px",
            Unit::Percent => "%",
            Unit::Em => "em",
            Unit::Rem => "rem",
            Unit::Vw => "vw",
            Unit::Vh => "vh",
            Unit::VMax => "vmax",
            Unit::VMin => "vmin",
        }
    }
}

/// A `(value, unit)` pair. Immutable value type; resolution to pixels happens in layout.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Length {
    pub value: f64,
    pub unit: Unit,
}

impl Length {
    pub const AUTO: Length = Length {
        value: 0.0,
        unit: Unit::Auto,
    };

    pub const ZERO: Length = Length {
        value: 0.0,
        unit: Unit::Px,
    };

    pub const fn new(value: f64, unit: Unit) -> Self {
        Self { value, unit }
    }

    pub const fn px(value: f64) -> Self {
        Self::new(value, Unit::Px)
    }

    pub const fn percent(value: f64) -> Self {
        Self::new(value, Unit::Percent)
    }

    pub const fn em(value: f64) -> Self {
        Self::new(value, Unit::Em)
    }

    pub const fn rem(value: f64) -> Self {
        Self::new(value, Unit::Rem)
    }

    pub const fn number(value: f64) -> Self {
        Self::new(value, Unit::Number)
    }

    pub fn is_auto(&self) -> bool {
        self.unit == Unit::Auto
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.unit {
            Unit::Auto => f.write_str("auto"),
            unit => write!(f, "{}{}", self.value, unit.suffix()),
        }
    }
}

impl FromStr for Length {
    type Err = StyleParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        run_parser(parse_length, s)
    }
}

impl Serialize for Length {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Length {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum LengthDef {
            Str(String),
            Num(f64),
        }

        match LengthDef::deserialize(deserializer)? {
            LengthDef::Str(s) => s.parse().map_err(de::Error::custom),
            LengthDef::Num(v) => Ok(Length::number(v)),
        }
    }
}
