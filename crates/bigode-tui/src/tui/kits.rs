// Team kits: two-colour uniforms used to tell drawn teams apart.

use rand::seq::SliceRandom;
use rand::Rng;
use ratatui::style::Color;

/// Shirt colours for one team.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Kit {
    pub primary: Color,
    pub secondary: Color,
}

impl Kit {
    /// Build a kit from two `0xRRGGBB` values.
    pub const fn from_hex(primary: u32, secondary: u32) -> Self {
        Kit {
            primary: hex(primary),
            secondary: hex(secondary),
        }
    }
}

const fn hex(rgb: u32) -> Color {
    Color::Rgb(
        ((rgb >> 16) & 0xff) as u8,
        ((rgb >> 8) & 0xff) as u8,
        (rgb & 0xff) as u8,
    )
}

/// Kits a team can be painted in.
pub const KITS: [Kit; 13] = [
    Kit::from_hex(0x74aada, 0xe6e6e9),
    Kit::from_hex(0x23351a, 0xfadd00),
    Kit::from_hex(0xd91f12, 0xfbd313),
    Kit::from_hex(0xfadd00, 0x158d37),
    Kit::from_hex(0x158d37, 0x1f4c9d),
    Kit::from_hex(0x262863, 0xececec),
    Kit::from_hex(0x333333, 0xececec),
    Kit::from_hex(0x18a036, 0xdd1b01),
    Kit::from_hex(0xdd1b01, 0xefeeee),
    Kit::from_hex(0x642f38, 0x1d1937),
    Kit::from_hex(0x169047, 0x333333),
    Kit::from_hex(0xe6e6e9, 0xe6332a),
    Kit::from_hex(0xe6332a, 0x158d37),
];

/// Neutral kit used when kits are switched off.
pub const PLAIN_KIT: Kit = Kit {
    primary: Color::White,
    secondary: Color::Gray,
};

/// Pick one kit per group, each uniformly at random. Teams may share a kit.
pub fn pick_kits<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Vec<Kit> {
    (0..count)
        .map(|_| KITS.choose(rng).copied().unwrap_or(PLAIN_KIT))
        .collect()
}
