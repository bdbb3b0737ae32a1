//! Dual color palettes for an account record.
//!
//! Every subscriber carries two parallel 10-slot palettes: one used when the
//! terminal reports ANSI capability and a monochrome fallback. A slot index
//! outside 0..=9 never fails; reads degrade to the fixed default color and
//! writes are dropped.

use serde::{Deserialize, Serialize};

/// Color returned for any out-of-range slot request.
pub const DEFAULT_COLOR: u8 = 7;

/// Number of slots in each palette.
pub const PALETTE_SLOTS: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorProfile {
    ansi: [u8; PALETTE_SLOTS],
    mono: [u8; PALETTE_SLOTS],
}

impl Default for ColorProfile {
    fn default() -> Self {
        ColorProfile {
            ansi: [DEFAULT_COLOR; PALETTE_SLOTS],
            mono: [DEFAULT_COLOR; PALETTE_SLOTS],
        }
    }
}

impl ColorProfile {
    pub fn new(ansi: [u8; PALETTE_SLOTS], mono: [u8; PALETTE_SLOTS]) -> Self {
        ColorProfile { ansi, mono }
    }

    /// Slot from the ANSI palette, or the default color when out of range.
    pub fn ansi_color(&self, slot: usize) -> u8 {
        self.ansi.get(slot).copied().unwrap_or(DEFAULT_COLOR)
    }

    /// Slot from the monochrome palette, or the default color when out of
    /// range.
    pub fn mono_color(&self, slot: usize) -> u8 {
        self.mono.get(slot).copied().unwrap_or(DEFAULT_COLOR)
    }

    /// The color a renderer should use, given the terminal capability.
    pub fn effective_color(&self, slot: usize, ansi_capable: bool) -> u8 {
        if ansi_capable {
            self.ansi_color(slot)
        } else {
            self.mono_color(slot)
        }
    }

    pub fn set_ansi_color(&mut self, slot: usize, color: u8) {
        match self.ansi.get_mut(slot) {
            Some(c) => *c = color,
            None => log::warn!("ignoring ansi color write to slot {slot}"),
        }
    }

    pub fn set_mono_color(&mut self, slot: usize, color: u8) {
        match self.mono.get_mut(slot) {
            Some(c) => *c = color,
            None => log::warn!("ignoring mono color write to slot {slot}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_range_reads_degrade_to_default() {
        let mut profile = ColorProfile::default();
        profile.set_ansi_color(3, 11);
        profile.set_mono_color(3, 2);
        assert_eq!(profile.ansi_color(12), DEFAULT_COLOR);
        assert_eq!(profile.mono_color(12), DEFAULT_COLOR);
        assert_eq!(profile.effective_color(12, true), DEFAULT_COLOR);
        assert_eq!(profile.effective_color(12, false), DEFAULT_COLOR);
    }

    #[test]
    fn effective_color_respects_capability() {
        let mut profile = ColorProfile::default();
        profile.set_ansi_color(0, 9);
        profile.set_mono_color(0, 1);
        assert_eq!(profile.effective_color(0, true), 9);
        assert_eq!(profile.effective_color(0, false), 1);
    }

    #[test]
    fn out_of_range_writes_are_dropped() {
        let mut profile = ColorProfile::default();
        let before = profile;
        profile.set_ansi_color(10, 4);
        profile.set_mono_color(255, 4);
        assert_eq!(profile, before);
    }
}
