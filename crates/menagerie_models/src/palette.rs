//! # Model Palette
//!
//! Named colors shared by every species. The engine treats colors as opaque
//! numbers; the names only mean something here.

use menagerie_core::Color;
use serde::{Deserialize, Serialize};

/// Default color values (`0xRRGGBB`).
pub mod colors {
    use menagerie_core::Color;

    /// Dark brown plumage and fur.
    pub const DARK: Color = Color(0x4A_3728);
    /// Light tan chest and muzzle.
    pub const LIGHT: Color = Color(0xD9_B98C);
    /// Off-white.
    pub const WHITE: Color = Color(0xF0_F0F0);
    /// Beak and mane gold.
    pub const GOLD: Color = Color(0xF2_B632);
    /// Claws and noses.
    pub const TALON: Color = Color(0xD9_8E32);
    /// Eyes.
    pub const BLACK: Color = Color(0x1A_1A1A);
    /// Branches, logs and brown fur.
    pub const WOOD: Color = Color(0x8B_5A2B);
    /// Foliage, shells and scales.
    pub const GREEN: Color = Color(0x4C_8C3A);
    /// Fish body.
    pub const BLUE: Color = Color(0x3A_6FD8);
    /// Mouths, tongues and eyes.
    pub const RED: Color = Color(0xC8_302C);
    /// Elephant hide.
    pub const GRAY: Color = Color(0x8C_8C8C);
    /// Elephant ears and belly.
    pub const DARK_GRAY: Color = Color(0x5A_5A5A);
    /// Tusks, toenails and teeth.
    pub const IVORY: Color = Color(0xFF_F4D6);
    /// Manes and spines.
    pub const ORANGE: Color = Color(0xE8_741E);
}

/// Full set of named colors used by the generators.
///
/// Every field can be overridden from TOML; missing fields keep the
/// defaults in [`colors`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Palette {
    /// Dark brown.
    pub dark: Color,
    /// Light tan.
    pub light: Color,
    /// Off-white.
    pub white: Color,
    /// Gold.
    pub gold: Color,
    /// Claws and noses.
    pub talon: Color,
    /// Eyes.
    pub black: Color,
    /// Brown wood.
    pub wood: Color,
    /// Green.
    pub green: Color,
    /// Blue.
    pub blue: Color,
    /// Red.
    pub red: Color,
    /// Gray.
    pub gray: Color,
    /// Dark gray.
    pub dark_gray: Color,
    /// Ivory.
    pub ivory: Color,
    /// Orange.
    pub orange: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            dark: colors::DARK,
            light: colors::LIGHT,
            white: colors::WHITE,
            gold: colors::GOLD,
            talon: colors::TALON,
            black: colors::BLACK,
            wood: colors::WOOD,
            green: colors::GREEN,
            blue: colors::BLUE,
            red: colors::RED,
            gray: colors::GRAY,
            dark_gray: colors::DARK_GRAY,
            ivory: colors::IVORY,
            orange: colors::ORANGE,
        }
    }
}

impl Palette {
    /// Every named color, in declaration order.
    #[must_use]
    pub fn entries(&self) -> [(&'static str, Color); 14] {
        [
            ("dark", self.dark),
            ("light", self.light),
            ("white", self.white),
            ("gold", self.gold),
            ("talon", self.talon),
            ("black", self.black),
            ("wood", self.wood),
            ("green", self.green),
            ("blue", self.blue),
            ("red", self.red),
            ("gray", self.gray),
            ("dark_gray", self.dark_gray),
            ("ivory", self.ivory),
            ("orange", self.orange),
        ]
    }

    /// Looks up the name of a color, if it is one of the palette entries.
    #[must_use]
    pub fn name_of(&self, color: Color) -> Option<&'static str> {
        self.entries()
            .into_iter()
            .find_map(|(name, entry)| (entry == color).then_some(name))
    }
}
