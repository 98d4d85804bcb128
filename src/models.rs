//! Frontend Models
//!
//! Entry record as persisted in local storage.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Display colors assigned to new entries
pub const COLORS: &[&str] = &[
    "bg-red-500",
    "bg-blue-500",
    "bg-green-500",
    "bg-yellow-500",
    "bg-purple-500",
    "bg-pink-500",
    "bg-indigo-500",
    "bg-orange-500",
    "bg-teal-500",
    "bg-cyan-500",
    "bg-lime-500",
    "bg-rose-500",
];

/// Display glyphs assigned to new entries
pub const ICONS: &[&str] = &[
    "👤", "🧑", "👩", "🧔", "👱", "🧑‍💻", "👨‍💼", "👩‍💼", "🧑‍🎨", "👨‍🔬", "👩‍🔬", "🧑‍⚕️",
];

/// One named entry in the shuffle list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub id: String,
    pub name: String,
    pub color: String,
    pub icon: String,
}

impl Entry {
    /// Build an entry for an already-trimmed, non-empty name.
    ///
    /// Color and icon are drawn independently from the palettes.
    pub fn new<R: Rng + ?Sized>(id: String, name: String, rng: &mut R) -> Self {
        let color = COLORS.choose(rng).copied().unwrap_or(COLORS[0]);
        let icon = ICONS.choose(rng).copied().unwrap_or(ICONS[0]);
        Self {
            id,
            name,
            color: color.to_string(),
            icon: icon.to_string(),
        }
    }
}

/// Random version-4 UUID in its hyphenated text form
pub fn new_entry_id<R: Rng + ?Sized>(rng: &mut R) -> String {
    let mut bytes: [u8; 16] = rng.gen();
    bytes[6] = (bytes[6] & 0x0f) | 0x40;
    bytes[8] = (bytes[8] & 0x3f) | 0x80;

    let hex: String = bytes.iter().map(|b| format!("{:02x}", b)).collect();
    format!(
        "{}-{}-{}-{}-{}",
        &hex[0..8],
        &hex[8..12],
        &hex[12..16],
        &hex[16..20],
        &hex[20..32]
    )
}
