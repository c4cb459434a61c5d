// File: ./src/color_utils.rs

// Color helpers shared by the views: hex parsing for the fixed palette,
// calendar legend colors, and deterministic per-course accents.
// No terminal or GUI types here, so tests and the CLI can use it too.

use crate::model::display::EntryTone;
use std::hash::{Hash, Hasher};

pub const DONE_HEX: &str = "#d4edda";
pub const OBLIGATORY_HEX: &str = "#ffcccb";
pub const SERIES_HEX: &str = "#cce5ff";
pub const LECTURE_HEX: &str = "#ffffff";

/// Background of a calendar entry.
pub fn tone_hex(tone: EntryTone) -> &'static str {
    match tone {
        EntryTone::Done => DONE_HEX,
        EntryTone::Obligatory => OBLIGATORY_HEX,
        EntryTone::Series => SERIES_HEX,
        EntryTone::Lecture => LECTURE_HEX,
    }
}

pub fn tone_rgb(tone: EntryTone) -> (u8, u8, u8) {
    parse_hex_to_u8(tone_hex(tone)).unwrap_or((255, 255, 255))
}

/// Deterministic accent color (r, g, b) in [0.0, 1.0] for a course id.
pub fn generate_color(key: &str) -> (f32, f32, f32) {
    let mut hasher = std::collections::hash_map::DefaultHasher::new();
    key.hash(&mut hasher);
    let hash = hasher.finish();

    let h = (hash % 360) as f32;
    let hash_s = hash >> 16;
    let hash_l = hash >> 32;

    // Saturation 40-90%, lightness 55-75%: readable on a dark terminal.
    let s = 0.40 + ((hash_s % 51) as f32 / 100.0);
    let l = 0.55 + ((hash_l % 21) as f32 / 100.0);

    hsl_to_rgb(h, s, l)
}

pub fn generate_color_u8(key: &str) -> (u8, u8, u8) {
    let (r, g, b) = generate_color(key);
    (to_u8(r), to_u8(g), to_u8(b))
}

fn to_u8(c: f32) -> u8 {
    (c.clamp(0.0, 1.0) * 255.0).round() as u8
}

fn hsl_to_rgb(h: f32, s: f32, l: f32) -> (f32, f32, f32) {
    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
    let m = l - c / 2.0;

    let (r1, g1, b1) = if (0.0..60.0).contains(&h) {
        (c, x, 0.0)
    } else if (60.0..120.0).contains(&h) {
        (x, c, 0.0)
    } else if (120.0..180.0).contains(&h) {
        (0.0, c, x)
    } else if (180.0..240.0).contains(&h) {
        (0.0, x, c)
    } else if (240.0..300.0).contains(&h) {
        (x, 0.0, c)
    } else {
        (c, 0.0, x)
    };

    (r1 + m, g1 + m, b1 + m)
}

/// Whether text on top of this color should be white.
pub fn is_dark(r: u8, g: u8, b: u8) -> bool {
    let brightness = 0.299 * f32::from(r) + 0.587 * f32::from(g) + 0.114 * f32::from(b);
    brightness < 128.0
}

/// Parse "#RRGGBB" or "RRGGBB".
pub fn parse_hex_to_u8(hex: &str) -> Option<(u8, u8, u8)> {
    let hex = hex.trim_start_matches('#');
    if hex.len() < 6 || !hex.is_ascii() {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some((r, g, b))
}
