//! Per-kind transition rules.
//!
//! A rule only looks at the neighborhood of its source cell and picks a
//! transition; the step applies it and arbitrates contested destinations.

use super::{Cell, ParticleKind};

/// Relative position of a neighbor. Positive `dy` is up.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Offset {
    pub dx: isize,
    pub dy: isize,
}

impl Offset {
    pub const DOWN: Offset = Offset { dx: 0, dy: -1 };
    pub const DOWN_RIGHT: Offset = Offset { dx: 1, dy: -1 };
    pub const DOWN_LEFT: Offset = Offset { dx: -1, dy: -1 };
    pub const RIGHT: Offset = Offset { dx: 1, dy: 0 };
    pub const LEFT: Offset = Offset { dx: -1, dy: 0 };
}

/// What a source cell does this step
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transition {
    /// Keep the current position
    Rest,
    /// Move into an empty neighbor
    Move(Offset),
    /// Trade places with the particle at the offset
    Swap(Offset),
}

/// Read access to the cells around a source.
/// `None` means off-grid, which rules treat as blocked.
pub trait Neighborhood {
    fn look(&self, offset: Offset) -> Option<Cell>;

    fn is_empty(&self, offset: Offset) -> bool {
        self.look(offset) == Some(ParticleKind::Empty)
    }

    fn is_water(&self, offset: Offset) -> bool {
        self.look(offset).is_some_and(ParticleKind::is_fluid)
    }
}

/// Pick the transition for a cell of the given kind
pub fn transition(kind: ParticleKind, around: &impl Neighborhood) -> Transition {
    match kind {
        ParticleKind::Empty | ParticleKind::Wall => Transition::Rest,
        ParticleKind::Sand => sand(around),
        ParticleKind::Water => water(around),
    }
}

/// Sand falls, slides off sand piles and sinks through water
fn sand(around: &impl Neighborhood) -> Transition {
    match around.look(Offset::DOWN) {
        Some(ParticleKind::Empty) => Transition::Move(Offset::DOWN),
        Some(ParticleKind::Sand) => {
            if around.is_empty(Offset::DOWN_RIGHT) {
                Transition::Move(Offset::DOWN_RIGHT)
            } else if around.is_empty(Offset::DOWN_LEFT) {
                Transition::Move(Offset::DOWN_LEFT)
            } else if around.is_water(Offset::DOWN_LEFT) {
                Transition::Swap(Offset::DOWN_LEFT)
            } else if around.is_water(Offset::DOWN_RIGHT) {
                Transition::Swap(Offset::DOWN_RIGHT)
            } else {
                Transition::Rest
            }
        }
        Some(ParticleKind::Water) => Transition::Swap(Offset::DOWN),
        Some(ParticleKind::Wall) | None => Transition::Rest,
    }
}

/// Water falls, then spreads diagonally, then sideways
fn water(around: &impl Neighborhood) -> Transition {
    if around.is_empty(Offset::DOWN) {
        return Transition::Move(Offset::DOWN);
    }

    [Offset::DOWN_RIGHT, Offset::DOWN_LEFT, Offset::RIGHT, Offset::LEFT]
        .into_iter()
        .find(|&offset| around.is_empty(offset))
        .map_or(Transition::Rest, Transition::Move)
}
