//! Runtime options of a single chipset.
//!
//! The architecture leaves a couple of details open where historical
//! interpreters disagree, those are pinned down here.

use crate::definitions::{cpu, display};

/// What happens with sprite pixels that land past the right or bottom edge.
///
/// The starting coordinate of a sprite is always wrapped onto the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpriteEdge {
    /// Pixels outside of the screen are dropped.
    Clip,
    /// Pixels outside of the screen reappear on the opposite side.
    Wrap,
}

impl Default for SpriteEdge {
    fn default() -> Self {
        SpriteEdge::Clip
    }
}

/// The configuration of a [`ChipSet`](crate::chip8::ChipSet).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChipConfig {
    /// Where the built in font is stored in memory.
    pub(crate) font_location: u16,
    /// How sprites behave at the screen edge.
    pub(crate) sprite_edge: SpriteEdge,
    /// If set, an unknown opcode stops execution with an error instead of
    /// being skipped.
    pub(crate) strict_opcodes: bool,
    /// Seed for the random number generator, `None` uses system entropy.
    pub(crate) seed: Option<u64>,
}

impl Default for ChipConfig {
    fn default() -> Self {
        Self {
            font_location: display::fontset::LOCATION,
            sprite_edge: SpriteEdge::default(),
            strict_opcodes: false,
            seed: None,
        }
    }
}

impl ChipConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Moves the font to the given location.
    ///
    /// # Panics
    /// If the font would overlap the program area.
    pub fn with_font_location(mut self, location: u16) -> Self {
        assert!(
            Self::font_fits(location),
            "The font location {:#06X} overlaps the program area.",
            location
        );
        self.font_location = location;
        self
    }

    pub fn with_sprite_edge(mut self, sprite_edge: SpriteEdge) -> Self {
        self.sprite_edge = sprite_edge;
        self
    }

    pub fn with_strict_opcodes(mut self, strict: bool) -> Self {
        self.strict_opcodes = strict;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn font_location(&self) -> u16 {
        self.font_location
    }

    pub fn sprite_edge(&self) -> SpriteEdge {
        self.sprite_edge
    }

    pub fn strict_opcodes(&self) -> bool {
        self.strict_opcodes
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    fn font_fits(location: u16) -> bool {
        let end = location as usize + display::fontset::FONTSET.len();
        end <= cpu::PROGRAM_COUNTER as usize
    }
}
