use nom::branch::alt;
use nom::bytes::complete::{tag_no_case, take_while_m_n};
use nom::character::complete::{char, space0, space1};
use nom::combinator::{all_consuming, map, map_res, opt, value};
use nom::number::complete::float;
use nom::sequence::{delimited, preceded, terminated};
use nom::{IResult, Parser};
use serde::{Deserialize, Deserializer, Serialize, de};
use std::hash::{Hash, Hasher};
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ColorError {
    #[error("Invalid color format: '{0}'")]
    InvalidColorFormat(String),

    #[error("Color component '{component}' out of range: {value}")]
    OutOfRange { component: &'static str, value: f32 },
}

fn default_one() -> f32 {
    1.0
}

fn is_one(num: &f32) -> bool {
    *num == 1.0
}

/// An sRGB color with a straight (non-premultiplied) alpha channel.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    #[serde(skip_serializing_if = "is_one", default = "default_one")]
    pub a: f32,
}

impl Eq for Color {}

impl Hash for Color {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.r.hash(state);
        self.g.hash(state);
        self.b.hash(state);
        self.a.to_bits().hash(state);
    }
}

impl Default for Color {
    fn default() -> Self {
        Self { r: 0, g: 0, b: 0, a: 1.0 }
    }
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub fn rgba(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a: a.clamp(0.0, 1.0) }
    }

    pub fn gray(value: u8) -> Self {
        Self::rgb(value, value, value)
    }

    /// Parses `#RRGGBB`, `#RRGGBBAA`, `#RGB`, `hsl(h, s%, l%)`, `hsla(h, s%, l%, a)`
    /// or a bare `h s% l%` triplet.
    pub fn parse(token: &str) -> Result<Color, ColorError> {
        all_consuming(alt((hex_color, hsl_color)))
            .parse(token.trim())
            .map(|(_, color)| color)
            .map_err(|_| ColorError::InvalidColorFormat(token.to_string()))
    }

    /// Builds a color from hue in degrees, saturation and lightness in percent.
    pub fn from_hsl(h: f32, s: f32, l: f32, alpha: Option<f32>) -> Result<Color, ColorError> {
        if !h.is_finite() {
            return Err(ColorError::OutOfRange { component: "hue", value: h });
        }
        if !(0.0..=100.0).contains(&s) {
            return Err(ColorError::OutOfRange { component: "saturation", value: s });
        }
        if !(0.0..=100.0).contains(&l) {
            return Err(ColorError::OutOfRange { component: "lightness", value: l });
        }
        let a = alpha.unwrap_or(1.0);
        if !(0.0..=1.0).contains(&a) {
            return Err(ColorError::OutOfRange { component: "alpha", value: a });
        }

        let s = s / 100.0;
        let l = l / 100.0;
        let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
        let h_prime = h.rem_euclid(360.0) / 60.0;
        let x = c * (1.0 - (h_prime % 2.0 - 1.0).abs());
        let (r1, g1, b1) = match h_prime as u32 {
            0 => (c, x, 0.0),
            1 => (x, c, 0.0),
            2 => (0.0, c, x),
            3 => (0.0, x, c),
            4 => (x, 0.0, c),
            _ => (c, 0.0, x),
        };
        let m = l - c / 2.0;
        let channel = |v: f32| ((v + m) * 255.0).round().clamp(0.0, 255.0) as u8;
        Ok(Color { r: channel(r1), g: channel(g1), b: channel(b1), a })
    }

    /// Returns a copy with the given alpha, clamped to `[0, 1]`.
    pub fn with_alpha(&self, alpha: f32) -> Color {
        Color { a: alpha.clamp(0.0, 1.0), ..self.clone() }
    }

    /// Linear per-channel blend. `t` is clamped; both endpoints are returned exactly.
    pub fn interpolate(a: &Color, b: &Color, t: f32) -> Color {
        if t <= 0.0 || t.is_nan() {
            return a.clone();
        }
        if t >= 1.0 {
            return b.clone();
        }
        let lerp = |x: u8, y: u8| (x as f32 + (y as f32 - x as f32) * t).round() as u8;
        Color {
            r: lerp(a.r, b.r),
            g: lerp(a.g, b.g),
            b: lerp(a.b, b.b),
            a: a.a + (b.a - a.a) * t,
        }
    }

    /// `steps` evenly spaced colors from `a` to `b`, both endpoints included.
    pub fn gradient(a: &Color, b: &Color, steps: usize) -> Vec<Color> {
        match steps {
            0 => Vec::new(),
            1 => vec![a.clone()],
            n => (0..n)
                .map(|i| Color::interpolate(a, b, i as f32 / (n - 1) as f32))
                .collect(),
        }
    }

    /// RGB channels in `[0, 1]`, as PDF color operators expect.
    pub fn to_normalized(&self) -> [f32; 3] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
        ]
    }

    pub fn to_hex(&self) -> String {
        if is_one(&self.a) {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            let alpha = (self.a * 255.0).round() as u8;
            format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, alpha)
        }
    }

    pub fn is_opaque(&self) -> bool {
        self.a >= 1.0
    }
}

impl FromStr for Color {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Color::parse(s)
    }
}

// --- Parsers ---

fn is_hex_digit(c: char) -> bool {
    c.is_ascii_hexdigit()
}

fn hex_pair(input: &str) -> IResult<&str, u8> {
    map_res(take_while_m_n(2, 2, is_hex_digit), |s: &str| {
        u8::from_str_radix(s, 16)
    })
    .parse(input)
}

fn hex_single(input: &str) -> IResult<&str, u8> {
    map_res(take_while_m_n(1, 1, is_hex_digit), |s: &str| {
        u8::from_str_radix(s, 16).map(|v| v * 17)
    })
    .parse(input)
}

fn hex_color(input: &str) -> IResult<&str, Color> {
    preceded(
        char('#'),
        alt((
            map((hex_pair, hex_pair, hex_pair, hex_pair), |(r, g, b, a)| {
                Color::rgba(r, g, b, a as f32 / 255.0)
            }),
            map((hex_pair, hex_pair, hex_pair), |(r, g, b)| Color::rgb(r, g, b)),
            map((hex_single, hex_single, hex_single), |(r, g, b)| {
                Color::rgb(r, g, b)
            }),
        )),
    )
    .parse(input)
}

fn number(input: &str) -> IResult<&str, f32> {
    float(input)
}

fn percent(input: &str) -> IResult<&str, f32> {
    terminated(number, char('%')).parse(input)
}

fn component_sep(input: &str) -> IResult<&str, ()> {
    alt((value((), delimited(space0, char(','), space0)), value((), space1))).parse(input)
}

fn alpha_sep(input: &str) -> IResult<&str, char> {
    alt((
        delimited(space0, char(','), space0),
        delimited(space0, char('/'), space0),
    ))
    .parse(input)
}

type HslParts = (f32, f32, f32, Option<f32>);

fn hsl_components(input: &str) -> IResult<&str, HslParts> {
    let (input, h) = terminated(number, opt(tag_no_case("deg"))).parse(input)?;
    let (input, _) = component_sep(input)?;
    let (input, s) = percent(input)?;
    let (input, _) = component_sep(input)?;
    let (input, l) = percent(input)?;
    let (input, a) = opt(preceded(alpha_sep, number)).parse(input)?;
    Ok((input, (h, s, l, a)))
}

fn hsl_function(input: &str) -> IResult<&str, HslParts> {
    delimited(
        (
            alt((tag_no_case("hsla"), tag_no_case("hsl"))),
            space0,
            char('('),
            space0,
        ),
        hsl_components,
        (space0, char(')')),
    )
    .parse(input)
}

fn hsl_color(input: &str) -> IResult<&str, Color> {
    map_res(alt((hsl_function, hsl_components)), |(h, s, l, a)| {
        Color::from_hsl(h, s, l, a)
    })
    .parse(input)
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum ColorDef {
            Str(String),
            Map {
                r: u8,
                g: u8,
                b: u8,
                #[serde(default = "default_one")]
                a: f32,
            },
        }

        match ColorDef::deserialize(deserializer)? {
            ColorDef::Str(s) => Color::parse(&s).map_err(de::Error::custom),
            ColorDef::Map { r, g, b, a } => Ok(Color::rgba(r, g, b, a)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_six_digit_hex() {
        assert_eq!(Color::parse("#c084fc").unwrap(), Color::rgb(192, 132, 252));
        assert_eq!(Color::parse("  #06040F ").unwrap(), Color::rgb(6, 4, 15));
    }

    #[test]
    fn parses_eight_digit_hex_with_alpha() {
        let c = Color::parse("#c084fc80").unwrap();
        assert_eq!((c.r, c.g, c.b), (192, 132, 252));
        assert!((c.a - 128.0 / 255.0).abs() < 1e-6);
    }

    #[test]
    fn parses_shorthand_hex() {
        assert_eq!(Color::parse("#fff").unwrap(), Color::rgb(255, 255, 255));
    }

    #[test]
    fn parses_hsl_forms() {
        let functional = Color::parse("hsl(270, 95%, 75%)").unwrap();
        let bare = Color::parse("270 95% 75%").unwrap();
        assert_eq!(functional, bare);
        assert_eq!(functional, Color::rgb(191, 131, 252));

        let red = Color::parse("hsl(0 100% 50%)").unwrap();
        assert_eq!(red, Color::rgb(255, 0, 0));

        let translucent = Color::parse("hsla(120, 100%, 25%, 0.5)").unwrap();
        assert_eq!((translucent.r, translucent.g, translucent.b), (0, 128, 0));
        assert!((translucent.a - 0.5).abs() < 1e-6);
    }

    #[test]
    fn rejects_malformed_tokens() {
        for token in ["", "c084fc", "#c084f", "#c084fcz0", "hsl(270, 95, 75%)", "purple", "hsl(10, 120%, 50%)"] {
            match Color::parse(token) {
                Err(ColorError::InvalidColorFormat(t)) => assert_eq!(t, token),
                other => panic!("expected InvalidColorFormat for {token:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn with_alpha_returns_new_value() {
        let accent = Color::rgb(192, 132, 252);
        let faded = accent.with_alpha(0.3);
        assert_eq!(accent.a, 1.0);
        assert_eq!(faded.a, 0.3);
        assert_eq!(accent.with_alpha(4.0).a, 1.0);
    }

    #[test]
    fn interpolation_endpoints_are_exact() {
        let a = Color::rgba(10, 8, 21, 0.3);
        let b = Color::rgb(6, 4, 15);
        assert_eq!(Color::interpolate(&a, &b, 0.0), a);
        assert_eq!(Color::interpolate(&a, &b, 1.0), b);
        assert_eq!(Color::interpolate(&a, &b, -2.0), a);
        assert_eq!(Color::interpolate(&a, &b, 7.0), b);
    }

    #[test]
    fn gradient_includes_both_endpoints() {
        let a = Color::rgb(0, 0, 0);
        let b = Color::rgb(200, 100, 40);
        let steps = Color::gradient(&a, &b, 40);
        assert_eq!(steps.len(), 40);
        assert_eq!(steps[0], a);
        assert_eq!(steps[39], b);
        assert!(Color::gradient(&a, &b, 0).is_empty());
        assert_eq!(Color::gradient(&a, &b, 1), vec![a]);
    }

    #[test]
    fn deserializes_from_string_or_map() {
        let from_str: Color = serde_json::from_str("\"#120a1f\"").unwrap();
        assert_eq!(from_str, Color::rgb(18, 10, 31));
        let from_map: Color = serde_json::from_str(r#"{"r":1,"g":2,"b":3,"a":0.5}"#).unwrap();
        assert_eq!(from_map, Color::rgba(1, 2, 3, 0.5));
        assert!(serde_json::from_str::<Color>("\"nope\"").is_err());
    }

    #[test]
    fn hex_round_trip_formatting() {
        assert_eq!(Color::rgb(6, 4, 15).to_hex(), "#06040f");
        assert_eq!(Color::rgba(255, 0, 0, 0.5).to_hex(), "#ff000080");
    }
}
