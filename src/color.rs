use std::{fmt, str::FromStr};

/// Resolved RGB color triplet
///
/// Produced once from a `fill`/`stroke` token when a shape is constructed and
/// immutable afterwards. Tokens are either one of the 16 basic CSS color
/// keywords or a `#RGB`/`#RRGGBB` hex value.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// Basic CSS color keywords
const NAMED_COLORS: &[(&str, Rgb)] = &[
    ("aqua", Rgb::new(0, 255, 255)),
    ("black", Rgb::new(0, 0, 0)),
    ("blue", Rgb::new(0, 0, 255)),
    ("fuchsia", Rgb::new(255, 0, 255)),
    ("gray", Rgb::new(128, 128, 128)),
    ("green", Rgb::new(0, 128, 0)),
    ("lime", Rgb::new(0, 255, 0)),
    ("maroon", Rgb::new(128, 0, 0)),
    ("navy", Rgb::new(0, 0, 128)),
    ("olive", Rgb::new(128, 128, 0)),
    ("purple", Rgb::new(128, 0, 128)),
    ("red", Rgb::new(255, 0, 0)),
    ("silver", Rgb::new(192, 192, 192)),
    ("teal", Rgb::new(0, 128, 128)),
    ("white", Rgb::new(255, 255, 255)),
    ("yellow", Rgb::new(255, 255, 0)),
];

impl Rgb {
    pub const BLACK: Self = Self::new(0, 0, 0);
    pub const WHITE: Self = Self::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl fmt::Debug for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl FromStr for Rgb {
    type Err = ColorError;

    fn from_str(color: &str) -> Result<Self, Self::Err> {
        let color = color.trim();
        if let Some(hex) = color.strip_prefix('#') {
            let digit = |byte| match byte {
                b'A'..=b'F' => Ok(byte - b'A' + 10),
                b'a'..=b'f' => Ok(byte - b'a' + 10),
                b'0'..=b'9' => Ok(byte - b'0'),
                _ => Err(ColorError::HexExpected),
            };
            let bytes = hex.as_bytes();
            match bytes.len() {
                // #RGB is shorthand for #RRGGBB
                3 => {
                    let mut hex = bytes.iter().map(|b| Ok(digit(*b)? * 0x11));
                    Ok(Rgb::new(
                        hex.next().unwrap_or(Ok(0))?,
                        hex.next().unwrap_or(Ok(0))?,
                        hex.next().unwrap_or(Ok(0))?,
                    ))
                }
                6 => {
                    let mut hex = bytes
                        .chunks(2)
                        .map(|pair| Ok(digit(pair[0])? << 4 | digit(pair[1])?));
                    Ok(Rgb::new(
                        hex.next().unwrap_or(Ok(0))?,
                        hex.next().unwrap_or(Ok(0))?,
                        hex.next().unwrap_or(Ok(0))?,
                    ))
                }
                _ => Err(ColorError::HexExpected),
            }
        } else {
            NAMED_COLORS
                .binary_search_by_key(&color, |(name, _)| *name)
                .map(|index| NAMED_COLORS[index].1)
                .map_err(|_| ColorError::UnknownName(color.to_string()))
        }
    }
}

/// Error while resolving a color token
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColorError {
    /// Token starts with `#` but is not a valid `#RGB`/`#RRGGBB` value
    HexExpected,
    /// Token does not match any recognized color keyword
    UnknownName(String),
}

impl fmt::Display for ColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorError::HexExpected => {
                write!(f, "color expected to be in #RGB or #RRGGBB hexadecimal format")
            }
            ColorError::UnknownName(name) => write!(f, "unknown color name: {}", name),
        }
    }
}

impl std::error::Error for ColorError {}
