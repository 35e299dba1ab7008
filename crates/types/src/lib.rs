//! Smocks shared value types
//!
//! This crate defines the value types shared by the piece model:
//! block colors, rotation states and the seven shape kinds. They are plain
//! `Copy` data, usable from the core model, the simulator and snapshots alike.
//!
//! # Grid Dimensions
//!
//! Default playfield dimensions:
//!
//! - **Columns**: 10 (indexed 0-9)
//! - **Rows**: 20 (indexed 0-19, row 0 at the top)
//!
//! # Randomness
//!
//! Nothing in this crate owns a random generator. Every `random` constructor
//! takes a [`RandomSource`], so callers decide between a seeded generator
//! (tests, replays) and process entropy.
//!
//! # Examples
//!
//! ```
//! use smocks_types::{Color, Orientation, ShapeKind, DEFAULT_COLUMNS, DEFAULT_ROWS};
//!
//! // Parse from string (case-insensitive)
//! assert_eq!(ShapeKind::from_str("line"), Some(ShapeKind::Line));
//! assert_eq!(Color::from_str("Teal"), Some(Color::Teal));
//!
//! // Rotate with wraparound
//! assert_eq!(Orientation::TwoSeventy.rotate(true), Orientation::Zero);
//! assert_eq!(Orientation::Zero.rotate(false), Orientation::TwoSeventy);
//!
//! // Grid dimensions
//! assert_eq!(DEFAULT_COLUMNS, 10);
//! assert_eq!(DEFAULT_ROWS, 20);
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// Default grid width in cells (10 columns)
pub const DEFAULT_COLUMNS: usize = 10;

/// Default grid height in cells (20 rows)
pub const DEFAULT_ROWS: usize = 20;

/// Number of entries in the block palette
pub const COLOR_COUNT: u32 = 6;

/// Number of rotation states
pub const ORIENTATION_COUNT: u32 = 4;

/// Number of shape variants
pub const SHAPE_KIND_COUNT: u32 = 7;

/// Number of blocks in every shape
pub const BLOCKS_PER_SHAPE: usize = 4;

/// A uniform, range-bounded integer source.
///
/// Implemented by the seeded generator and the process-wide generator in the
/// core crate.
pub trait RandomSource {
    /// Return a value uniformly distributed in `[0, max)`.
    ///
    /// `max` is always non-zero when called from this workspace.
    fn next_range(&mut self, max: u32) -> u32;
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next_range(&mut self, max: u32) -> u32 {
        (**self).next_range(max)
    }
}

/// Block palette
///
/// Each color names the sprite used to draw a block of that color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Blue,
    Orange,
    Purple,
    Red,
    Teal,
    Yellow,
}

impl Color {
    /// All colors in palette order
    pub const ALL: [Color; COLOR_COUNT as usize] = [
        Color::Blue,
        Color::Orange,
        Color::Purple,
        Color::Red,
        Color::Teal,
        Color::Yellow,
    ];

    /// Draw one of the six colors uniformly.
    ///
    /// # Examples
    ///
    /// ```
    /// use smocks_types::{Color, RandomSource};
    ///
    /// struct Fixed(u32);
    /// impl RandomSource for Fixed {
    ///     fn next_range(&mut self, max: u32) -> u32 {
    ///         self.0 % max
    ///     }
    /// }
    ///
    /// assert_eq!(Color::random(&mut Fixed(3)), Color::Red);
    /// ```
    pub fn random<R: RandomSource + ?Sized>(rng: &mut R) -> Self {
        Self::ALL[rng.next_range(COLOR_COUNT) as usize]
    }

    /// Palette position, 0-based
    pub fn index(self) -> u32 {
        self as u32
    }

    /// Inverse of [`Color::index`]
    pub fn from_index(index: u32) -> Option<Self> {
        Self::ALL.get(index as usize).copied()
    }

    /// Parse color from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "blue" => Some(Color::Blue),
            "orange" => Some(Color::Orange),
            "purple" => Some(Color::Purple),
            "red" => Some(Color::Red),
            "teal" => Some(Color::Teal),
            "yellow" => Some(Color::Yellow),
            _ => None,
        }
    }

    /// Stable identifier of the sprite drawn for this color
    pub fn sprite_name(self) -> &'static str {
        match self {
            Color::Blue => "blue",
            Color::Orange => "orange",
            Color::Purple => "purple",
            Color::Red => "red",
            Color::Teal => "teal",
            Color::Yellow => "yellow",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.sprite_name())
    }
}

/// Rotation states
///
/// - **Zero**: spawn orientation
/// - **Ninety**: rotated 90° clockwise
/// - **OneEighty**: rotated 180°
/// - **TwoSeventy**: rotated 270° clockwise (90° counter-clockwise)
///
/// The rotation cycle goes: Zero → Ninety → OneEighty → TwoSeventy → Zero
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    Zero,
    Ninety,
    OneEighty,
    TwoSeventy,
}

impl Orientation {
    /// All orientations in clockwise order starting from `Zero`
    pub const ALL: [Orientation; ORIENTATION_COUNT as usize] = [
        Orientation::Zero,
        Orientation::Ninety,
        Orientation::OneEighty,
        Orientation::TwoSeventy,
    ];

    /// Draw one of the four orientations uniformly.
    pub fn random<R: RandomSource + ?Sized>(rng: &mut R) -> Self {
        Self::ALL[rng.next_range(ORIENTATION_COUNT) as usize]
    }

    /// Step once around the cycle, wrapping at both ends.
    ///
    /// # Examples
    ///
    /// ```
    /// use smocks_types::Orientation;
    ///
    /// assert_eq!(Orientation::Zero.rotate(true), Orientation::Ninety);
    /// assert_eq!(Orientation::TwoSeventy.rotate(true), Orientation::Zero);
    /// assert_eq!(Orientation::Zero.rotate(false), Orientation::TwoSeventy);
    /// assert_eq!(Orientation::Ninety.rotate(false), Orientation::Zero);
    /// ```
    pub fn rotate(self, clockwise: bool) -> Self {
        let step = if clockwise { 1 } else { ORIENTATION_COUNT - 1 };
        Self::ALL[((self.index() + step) % ORIENTATION_COUNT) as usize]
    }

    /// Rotate clockwise (90°)
    pub fn rotate_cw(self) -> Self {
        self.rotate(true)
    }

    /// Rotate counter-clockwise (-90° or 270°)
    pub fn rotate_ccw(self) -> Self {
        self.rotate(false)
    }

    /// Position in the cycle, 0-based
    pub fn index(self) -> u32 {
        self as u32
    }

    /// Inverse of [`Orientation::index`]
    pub fn from_index(index: u32) -> Option<Self> {
        Self::ALL.get(index as usize).copied()
    }

    /// Clockwise rotation from the spawn orientation, in degrees
    pub fn degrees(self) -> u16 {
        match self {
            Orientation::Zero => 0,
            Orientation::Ninety => 90,
            Orientation::OneEighty => 180,
            Orientation::TwoSeventy => 270,
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.degrees())
    }
}

/// The seven shape variants
///
/// Variants differ only in their geometry tables; all movement mechanics are
/// shared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    Square,
    Line,
    T,
    S,
    Z,
    L,
    J,
}

impl ShapeKind {
    /// All kinds in draw order
    pub const ALL: [ShapeKind; SHAPE_KIND_COUNT as usize] = [
        ShapeKind::Square,
        ShapeKind::Line,
        ShapeKind::T,
        ShapeKind::S,
        ShapeKind::Z,
        ShapeKind::L,
        ShapeKind::J,
    ];

    /// Draw one of the seven kinds uniformly.
    pub fn random<R: RandomSource + ?Sized>(rng: &mut R) -> Self {
        Self::ALL[rng.next_range(SHAPE_KIND_COUNT) as usize]
    }

    /// Position in draw order, 0-based
    pub fn index(self) -> u32 {
        self as u32
    }

    /// Inverse of [`ShapeKind::index`]
    pub fn from_index(index: u32) -> Option<Self> {
        Self::ALL.get(index as usize).copied()
    }

    /// Parse shape kind from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use smocks_types::ShapeKind;
    ///
    /// assert_eq!(ShapeKind::from_str("square"), Some(ShapeKind::Square));
    /// assert_eq!(ShapeKind::from_str("J"), Some(ShapeKind::J));
    /// assert_eq!(ShapeKind::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "square" => Some(ShapeKind::Square),
            "line" => Some(ShapeKind::Line),
            "t" => Some(ShapeKind::T),
            "s" => Some(ShapeKind::S),
            "z" => Some(ShapeKind::Z),
            "l" => Some(ShapeKind::L),
            "j" => Some(ShapeKind::J),
            _ => None,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(self) -> &'static str {
        match self {
            ShapeKind::Square => "square",
            ShapeKind::Line => "line",
            ShapeKind::T => "t",
            ShapeKind::S => "s",
            ShapeKind::Z => "z",
            ShapeKind::L => "l",
            ShapeKind::J => "j",
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
