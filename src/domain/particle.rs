use thiserror::Error;

/// Errors raised while decoding a stored color back into a particle.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParticleError {
    #[error("color {0:?} does not match any particle kind")]
    InvalidEncoding([u8; 4]),
}

/// ParticleKind is the state held by a single grid cell.
/// The set is closed: every cell is exactly one of these.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub enum ParticleKind {
    #[default]
    Empty,
    Wall,
    Sand,
    Water,
}

const EMPTY_RGBA: [u8; 4] = [0, 0, 0, 255];
const WALL_RGBA: [u8; 4] = [117, 116, 103, 255];
const SAND_RGBA: [u8; 4] = [244, 228, 101, 255];
const WATER_RGBA: [u8; 4] = [17, 65, 166, 255];

impl ParticleKind {
    /// Every kind, in declaration order
    pub const ALL: [ParticleKind; 4] = [
        ParticleKind::Empty,
        ParticleKind::Wall,
        ParticleKind::Sand,
        ParticleKind::Water,
    ];

    /// Display name for UI and logs
    pub const fn name(self) -> &'static str {
        match self {
            ParticleKind::Empty => "Empty",
            ParticleKind::Wall => "Wall",
            ParticleKind::Sand => "Sand",
            ParticleKind::Water => "Water",
        }
    }

    pub const fn is_empty(self) -> bool {
        matches!(self, ParticleKind::Empty)
    }

    /// Sand and water are the only kinds the step ever relocates
    pub const fn is_movable(self) -> bool {
        matches!(self, ParticleKind::Sand | ParticleKind::Water)
    }

    pub const fn is_fluid(self) -> bool {
        matches!(self, ParticleKind::Water)
    }

    /// Canonical display color, alpha always opaque
    pub const fn to_rgba(self) -> [u8; 4] {
        match self {
            ParticleKind::Empty => EMPTY_RGBA,
            ParticleKind::Wall => WALL_RGBA,
            ParticleKind::Sand => SAND_RGBA,
            ParticleKind::Water => WATER_RGBA,
        }
    }

    /// Canonical color normalized to [0, 1] per channel
    pub fn to_rgba_f32(self) -> [f32; 4] {
        self.to_rgba().map(|channel| channel as f32 / 255.0)
    }

    /// Exact-match decode. No tolerance is applied.
    pub fn try_from_rgba(rgba: [u8; 4]) -> Result<Self, ParticleError> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.to_rgba() == rgba)
            .ok_or(ParticleError::InvalidEncoding(rgba))
    }

    /// Lossy decode: unrecognized colors are background.
    pub fn from_rgba(rgba: [u8; 4]) -> Self {
        Self::try_from_rgba(rgba).unwrap_or_else(|err| {
            log::trace!("{err}, decoding as empty");
            ParticleKind::Empty
        })
    }
}
