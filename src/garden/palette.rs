use bevy::prelude::*;
use serde::Deserialize;

const PALETTE_JSON: &str = include_str!("../../assets/palette.json");

#[derive(Debug, Deserialize)]
struct PaletteJson {
    background: String,
    light: LightJson,
    blobs: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct LightJson {
    hex: String,
    alpha: f32,
}

/// The fixed garden colors.
#[derive(Resource, Debug, Clone)]
pub struct Palette {
    /// Opaque near-black green the frame is cleared with.
    pub background: Vec4,
    /// Translucent pale green at the center of the pointer light.
    pub light: Vec4,
    /// Blob fills, darkest to lightest, sampled uniformly at spawn.
    pub blobs: Vec<Vec4>,
}

impl Palette {
    /// Parse the embedded palette JSON.
    pub fn load() -> Self {
        let data: PaletteJson =
            serde_json::from_str(PALETTE_JSON).expect("Failed to parse embedded palette.json");

        let mut light = parse_hex(&data.light.hex);
        light.w = data.light.alpha;

        Palette {
            background: parse_hex(&data.background),
            light,
            blobs: data.blobs.iter().map(|hex| parse_hex(hex)).collect(),
        }
    }

    /// Blob gradients fade to the background RGB at zero alpha, so blob
    /// edges dissolve into the clear color instead of ringing gray.
    pub fn background_faded(&self) -> Vec4 {
        self.background.truncate().extend(0.0)
    }
}

/// Parse "#rrggbb" into an opaque color.
fn parse_hex(hex: &str) -> Vec4 {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    assert_eq!(digits.len(), 6, "palette entry is not #rrggbb: {hex}");
    let value = u32::from_str_radix(digits, 16).expect("palette entry is not #rrggbb");

    Vec4::new(
        ((value >> 16) & 0xff) as f32 / 255.0,
        ((value >> 8) & 0xff) as f32 / 255.0,
        (value & 0xff) as f32 / 255.0,
        1.0,
    )
}
