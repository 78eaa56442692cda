use crate::parsers::{parse_font_weight, run_parser};
use crate::StyleParseError;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A numeric font weight on the 1-1000 scale. Measurers receive it as is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FontWeight(u16);

impl FontWeight {
    pub const NORMAL: FontWeight = FontWeight(400);
    pub const BOLD: FontWeight = FontWeight(700);

    pub fn new(weight: u16) -> Result<Self, StyleParseError> {
        if (1..=1000).contains(&weight) {
            Ok(FontWeight(weight))
        } else {
            Err(StyleParseError::InvalidValue {
                property: "font-weight".to_string(),
                value: weight.to_string(),
            })
        }
    }

    pub fn value(&self) -> u16 {
        self.0
    }
}

impl Default for FontWeight {
    fn default() -> Self {
        FontWeight::NORMAL
    }
}

impl fmt::Display for FontWeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for FontWeight {
    type Err = StyleParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let weight = run_parser(parse_font_weight, s).map_err(|_| StyleParseError::InvalidValue {
            property: "font-weight".to_string(),
            value: s.to_string(),
        })?;
        FontWeight::new(weight)
    }
}

impl Serialize for FontWeight {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u16(self.0)
    }
}

impl<'de> Deserialize<'de> for FontWeight {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Keyword(String),
            Number(u16),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Keyword(s) => s.parse().map_err(de::Error::custom),
            Raw::Number(n) => FontWeight::new(n).map_err(de::Error::custom),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum FontStyle {
    #[default]
    Normal,
    Italic,
    Oblique,
}
