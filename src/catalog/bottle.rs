use serde::{Deserialize, Serialize};

/// One Equilibrium bottle as listed in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BottleRecord {
    /// Stable identifier, e.g. `"0"`, `"25"`.
    pub id: String,
    pub number: u32,
    pub name: String,
    pub colors: ColorPair,
    pub theme: String,
    pub affirmation: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub extended: Option<ExtendedProfile>,
}

impl BottleRecord {
    /// Short label shown under a bottle, e.g. `B5`.
    pub fn label(&self) -> String {
        format!("B{}", self.number)
    }

    /// Alias line for the detail overlay, falling back to `Bottle <n>`.
    pub fn display_alias(&self) -> String {
        self.extended
            .as_ref()
            .and_then(|ext| ext.alias.clone())
            .unwrap_or_else(|| format!("Bottle {}", self.number))
    }

    pub fn extended(&self) -> Option<&ExtendedProfile> {
        self.extended.as_ref()
    }

    pub fn tarot_image(&self) -> Option<&str> {
        self.extended
            .as_ref()
            .and_then(|ext| ext.tarot_image.as_deref())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorPair {
    pub top: Swatch,
    pub bottom: Swatch,
}

/// A colour value (`#rrggbb`) with its human label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Swatch {
    pub hex: String,
    pub label: String,
}

impl Swatch {
    pub fn rgb(&self) -> Option<Rgb> {
        Rgb::parse(&self.hex)
    }
}

/// Extended descriptive fields. Every field is optional; older catalog
/// entries only carry the core record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtendedProfile {
    #[serde(default)]
    pub alias: Option<String>,
    #[serde(default)]
    pub mixed_color: Option<String>,
    #[serde(default)]
    pub tarot: Option<String>,
    /// Path of the tarot illustration, relative to the asset root.
    #[serde(default)]
    pub tarot_image: Option<String>,
    #[serde(default)]
    pub positive_personality: Option<String>,
    #[serde(default)]
    pub challenge_personality: Option<String>,
    #[serde(default)]
    pub spiritual_level: Option<String>,
    #[serde(default)]
    pub mental_level: Option<String>,
    #[serde(default)]
    pub emotional_level: Option<String>,
    #[serde(default)]
    pub physical_level: Option<String>,
    #[serde(default)]
    pub where_to_apply: Option<String>,
}

impl ExtendedProfile {
    pub fn has_personality(&self) -> bool {
        self.positive_personality.is_some() || self.challenge_personality.is_some()
    }

    pub fn has_levels(&self) -> bool {
        self.spiritual_level.is_some()
            || self.mental_level.is_some()
            || self.emotional_level.is_some()
            || self.physical_level.is_some()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Parse `#rrggbb` or `#rgb`.
    pub fn parse(value: &str) -> Option<Self> {
        let hex = value.trim().strip_prefix('#')?;
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        match hex.len() {
            6 => Some(Self {
                r: u8::from_str_radix(&hex[0..2], 16).ok()?,
                g: u8::from_str_radix(&hex[2..4], 16).ok()?,
                b: u8::from_str_radix(&hex[4..6], 16).ok()?,
            }),
            3 => {
                let channel = |i: usize| u8::from_str_radix(&hex[i..=i], 16).ok().map(|v| v * 17);
                Some(Self {
                    r: channel(0)?,
                    g: channel(1)?,
                    b: channel(2)?,
                })
            }
            _ => None,
        }
    }

    /// Nearest entry in the xterm 256-colour palette (6x6x6 cube or grey ramp).
    pub fn to_ansi256(self) -> u8 {
        fn cube_index(v: u8) -> u8 {
            match v {
                0..=47 => 0,
                48..=114 => 1,
                _ => (v - 35) / 40,
            }
        }
        const CUBE_LEVELS: [u8; 6] = [0, 95, 135, 175, 215, 255];

        let (ri, gi, bi) = (cube_index(self.r), cube_index(self.g), cube_index(self.b));
        let cube = (
            CUBE_LEVELS[ri as usize],
            CUBE_LEVELS[gi as usize],
            CUBE_LEVELS[bi as usize],
        );

        let avg = (u16::from(self.r) + u16::from(self.g) + u16::from(self.b)) / 3;
        let grey_index = if avg > 238 { 23 } else { avg.saturating_sub(3) / 10 };
        #[allow(clippy::cast_possible_truncation)]
        let grey_index = grey_index.min(23) as u8;
        let grey = 8 + 10 * grey_index;

        let distance = |(r, g, b): (u8, u8, u8)| {
            let dr = i32::from(self.r) - i32::from(r);
            let dg = i32::from(self.g) - i32::from(g);
            let db = i32::from(self.b) - i32::from(b);
            dr * dr + dg * dg + db * db
        };

        if distance((grey, grey, grey)) < distance(cube) {
            232 + grey_index
        } else {
            16 + 36 * ri + 6 * gi + bi
        }
    }
}
