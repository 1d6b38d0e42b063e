//! Spring-damper simulation for the glyph that dodges the pointer.
//!
//! The glyph lives in a rectangle inset from the container edges, origin at
//! the container center. While the pointer is inside the interactive region
//! it pushes the glyph away through one or more virtual sources; a spring
//! toward the center and multiplicative damping run every frame regardless,
//! so the glyph drifts home once the pointer leaves.

use glam::Vec2;
use smallvec::SmallVec;

use crate::constants::{
    BOUNCE_RETAIN, BOUNDS_INSET_PX, EDGE_KICK, EDGE_KICK_SPREAD_DAMP, EDGE_MARGIN_PX,
    REPEL_DAMPING, REPEL_RADIUS_PX, REPEL_SPREAD, REPEL_SPRING, REPEL_STRENGTH,
    SOURCE_COUNT_MAX, SOURCE_COUNT_MIN, SPREAD_POINT_THRESHOLD,
};
use crate::pointer::PointerState;

/// Live-tunable physics parameters. The page's sliders mutate these in
/// place; changing them never resets the simulation state.
#[derive(Clone, Copy, Debug)]
pub struct RepelParams {
    pub spring: f32,
    pub damping: f32,
    pub strength: f32,
    pub radius: f32,
    pub spread: f32,
}

impl Default for RepelParams {
    fn default() -> Self {
        Self {
            spring: REPEL_SPRING,
            damping: REPEL_DAMPING,
            strength: REPEL_STRENGTH,
            radius: REPEL_RADIUS_PX,
            spread: REPEL_SPREAD,
        }
    }
}

/// A virtual point pushing the glyph away, with its share of the total
/// repulsion strength.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RepelSource {
    pub pos: Vec2,
    pub strength: f32,
}

/// Build the active repulsion sources for one frame.
///
/// Below the spread threshold this is a single point source at the pointer.
/// Otherwise 3..=15 sources are laid out along the axis perpendicular to
/// the pointer→glyph direction, centered on the pointer, spanning
/// `radius × spread`; each is scaled by `1/√count` so the total applied
/// force stays comparable across modes.
pub fn repulsion_sources(
    pointer: Vec2,
    body: Vec2,
    params: &RepelParams,
) -> SmallVec<[RepelSource; SOURCE_COUNT_MAX]> {
    let mut sources = SmallVec::new();

    if params.spread < SPREAD_POINT_THRESHOLD {
        sources.push(RepelSource {
            pos: pointer,
            strength: params.strength,
        });
        return sources;
    }

    let extra = (SOURCE_COUNT_MAX - SOURCE_COUNT_MIN) as f32;
    let count = (SOURCE_COUNT_MIN + (params.spread * extra).round() as usize).min(SOURCE_COUNT_MAX);
    let per_source = params.strength / (count as f32).sqrt();

    let dir = (body - pointer).normalize_or_zero();
    let axis = if dir == Vec2::ZERO {
        Vec2::X
    } else {
        dir.perp()
    };
    let span = params.radius * params.spread;

    for i in 0..count {
        let t = i as f32 / (count - 1) as f32 - 0.5;
        sources.push(RepelSource {
            pos: pointer + axis * (t * span),
            strength: per_source,
        });
    }
    sources
}

/// Position and velocity of the repelled glyph, container-center origin.
#[derive(Clone, Copy, Debug, Default)]
pub struct RepelSim {
    pos: Vec2,
    vel: Vec2,
    half: Vec2,
}

impl RepelSim {
    pub fn new() -> Self {
        Self::default()
    }

    /// Update the play area from the container's CSS size. Safe to call on
    /// every resize; does not reset position or velocity.
    pub fn set_bounds(&mut self, width: f32, height: f32) {
        self.half = Vec2::new(width, height) * 0.5;
    }

    pub fn position(&self) -> Vec2 {
        self.pos
    }

    pub fn velocity(&self) -> Vec2 {
        self.vel
    }

    /// Advance the simulation by one frame.
    pub fn step(&mut self, pointer: &PointerState, params: &RepelParams) {
        let limit = (self.half - Vec2::splat(BOUNDS_INSET_PX)).max(Vec2::ZERO);

        if pointer.inside {
            for src in repulsion_sources(pointer.pos, self.pos, params) {
                let away = self.pos - src.pos;
                let dist = away.length();
                if dist <= f32::EPSILON || dist >= params.radius {
                    continue;
                }
                let magnitude = (1.0 - dist / params.radius) * src.strength;
                self.vel += away / dist * magnitude;
            }

            let near_x = limit.x - self.pos.x.abs() < EDGE_MARGIN_PX;
            let near_y = limit.y - self.pos.y.abs() < EDGE_MARGIN_PX;
            if (near_x || near_y) && pointer.pos.distance(self.pos) < params.radius * 0.5 {
                let kick = EDGE_KICK * (1.0 - EDGE_KICK_SPREAD_DAMP * params.spread);
                self.vel.x += kick * escape_dir(self.pos.x, limit.x);
                self.vel.y += kick * escape_dir(self.pos.y, limit.y);
            }
        }

        self.vel += -self.pos * params.spring;
        self.vel *= params.damping;
        self.pos += self.vel;

        if self.pos.x > limit.x {
            self.pos.x = limit.x;
            self.vel.x = -self.vel.x * BOUNCE_RETAIN;
        } else if self.pos.x < -limit.x {
            self.pos.x = -limit.x;
            self.vel.x = -self.vel.x * BOUNCE_RETAIN;
        }
        if self.pos.y > limit.y {
            self.pos.y = limit.y;
            self.vel.y = -self.vel.y * BOUNCE_RETAIN;
        } else if self.pos.y < -limit.y {
            self.pos.y = -limit.y;
            self.vel.y = -self.vel.y * BOUNCE_RETAIN;
        }
    }
}

// Direction of the escape impulse on one axis. When the glyph is not
// strictly inside that axis's edge band the direction falls back to the
// sign of the offset (toward center); behavior carried over from the
// production site, intent unclear, kept as-is.
fn escape_dir(p: f32, limit: f32) -> f32 {
    if p > limit - EDGE_MARGIN_PX {
        -1.0
    } else if p < -(limit - EDGE_MARGIN_PX) {
        1.0
    } else if p > 0.0 {
        -1.0
    } else {
        1.0
    }
}
