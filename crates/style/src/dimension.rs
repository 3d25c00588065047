use crate::parsers::{parse_length, run_parser};
use serde::{Deserialize, Deserializer, Serialize, Serializer, de};

/// A length in layout points. Deserializes from a number (points) or a
/// string with a unit such as `"1.8in"` or `"12pt"`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Length(pub f32);

impl Length {
    pub fn pt(value: f32) -> Self {
        Self(value)
    }

    pub fn inches(value: f32) -> Self {
        Self(value * deckline_types::INCH)
    }

    pub fn points(&self) -> f32 {
        self.0
    }

    /// The length in inches.
    pub fn in_inches(&self) -> f32 {
        self.0 / deckline_types::INCH
    }
}

impl Serialize for Length {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&format!("{}pt", self.0))
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
            Num(f32),
            Str(String),
        }

        match LengthDef::deserialize(deserializer)? {
            LengthDef::Num(n) => Ok(Length(n)),
            LengthDef::Str(s) => run_parser(parse_length, &s)
                .map(Length)
                .map_err(de::Error::custom),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_numbers_and_units() {
        let sizes: Vec<Length> = serde_json::from_str(r#"[12, "1.8in", "0.5in"]"#).unwrap();
        assert_eq!(sizes, vec![Length(12.0), Length::inches(1.8), Length(36.0)]);
        assert!((sizes[1].in_inches() - 1.8).abs() < 1e-5);
    }

    #[test]
    fn serializes_as_points() {
        let json = serde_json::to_string(&Length(36.0)).unwrap();
        assert_eq!(json, "\"36pt\"");
        let back: Length = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Length(36.0));
    }
}
