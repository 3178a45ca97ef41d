//! Core types shared across the workspace.
//! This crate contains pure data types with no external dependencies.

/// Board dimensions.
pub const BOARD_WIDTH: i8 = 8;
pub const BOARD_HEIGHT: i8 = 15;

/// Spawn column. New pieces materialize around this x coordinate.
pub const SPAWN_CENTER: i8 = BOARD_WIDTH / 2;

/// Points awarded for every gravity pass (once per tick).
pub const GRAVITY_SCORE: u32 = 10;

/// Points awarded per cleared line.
pub const LINE_SCORE: u32 = 1000;

/// Default tick interval for interactive sessions (milliseconds).
pub const TICK_INTERVAL_MS: u64 = 1000;

/// Piece geometry variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    T,
    I,
    J,
    L,
    O,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 5] = [
        ShapeKind::T,
        ShapeKind::I,
        ShapeKind::J,
        ShapeKind::L,
        ShapeKind::O,
    ];
}

/// Cosmetic identity of a piece. Chosen uniformly at random at creation;
/// carries no simulation meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorTag {
    Blue,
    Green,
    Purple,
    Red,
}

impl ColorTag {
    pub const ALL: [ColorTag; 4] = [
        ColorTag::Blue,
        ColorTag::Green,
        ColorTag::Purple,
        ColorTag::Red,
    ];

    /// Chat-panel glyph for an occupied cell.
    pub fn glyph(&self) -> char {
        match self {
            ColorTag::Blue => '🟦',
            ColorTag::Green => '🟩',
            ColorTag::Purple => '🟪',
            ColorTag::Red => '🟥',
        }
    }
}

/// Chat-panel glyph for an empty cell.
pub const EMPTY_GLYPH: char = '⬛';

/// Cell occupancy as seen by renderers (None = empty).
pub type Cell = Option<ColorTag>;

/// Rotation direction for the 90° pivot rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RotateDir {
    Ccw,
    Cw,
}

impl RotateDir {
    /// Signed rotation factor: -1 for counterclockwise, +1 for clockwise.
    pub fn factor(&self) -> i16 {
        match self {
            RotateDir::Ccw => -1,
            RotateDir::Cw => 1,
        }
    }
}

/// One of the seven vote signals exposed to players.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoteKind {
    Left2,
    Left1,
    RotateCcw,
    RotateCw,
    Right1,
    Right2,
    HardDrop,
}

impl VoteKind {
    /// All signals in panel order, which is also the resolution precedence
    /// order for the horizontal and rotation groups.
    pub const ALL: [VoteKind; 7] = [
        VoteKind::Left2,
        VoteKind::Left1,
        VoteKind::RotateCcw,
        VoteKind::RotateCw,
        VoteKind::Right1,
        VoteKind::Right2,
        VoteKind::HardDrop,
    ];
}

/// One resolved action per tick, produced by the input aggregator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ResolvedAction {
    /// Net horizontal magnitude in cells, -2..=2. Zero means no movement.
    pub shift: i8,
    /// At most one rotation per tick.
    pub rotation: Option<RotateDir>,
    /// Snap the controlled piece to its maximal depth this tick.
    pub hard_drop: bool,
}

/// Monotonically non-decreasing session counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Stats {
    /// Pieces spawned after the initial one.
    pub blocks: u32,
    pub score: u32,
    pub lines_cleared: u32,
}

/// Final statistics reported once when the simulation ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FinalReport {
    pub score: u32,
    pub lines_cleared: u32,
    pub blocks: u32,
    /// High score on file when the session started.
    pub high_score: u32,
    pub beat_high_score: bool,
}
