//! Interactive loop authoring state machine.
//!
//! The input layer feeds ground plane points (world units) and discrete actions into an
//! [AuthoringSession]. Vertices are snapped onto the fixed-point grid, validated against the
//! loop built so far and, once the loop is closed, committed to an [Area].
mod guards;

pub use guards::{check_new_segment, corner_angle, LoopCrossing};

use crate::{
    area::{Area, CommitOp},
    clip::ClipEngine,
    core::math::IntPoint,
    error::Result,
};

/// Options for [AuthoringSession].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct AuthoringOptions {
    /// Grid units per world unit.
    pub precision: i64,
    /// Snap distance to the loop's first vertex in world units (per axis, exclusive).
    pub magnet_radius: f64,
    /// Corners sharper than this many degrees are rejected.
    pub narrow_angle_deg: f64,
    /// Width and depth of the ground plane in world units. Points are accepted in
    /// `0 <= x < width`, `0 <= y < depth`.
    pub ground_size: [f64; 2],
}

impl AuthoringOptions {
    pub fn new() -> Self {
        Self {
            precision: 100,
            magnet_radius: 1.0,
            narrow_angle_deg: 30.0,
            ground_size: [1000.0, 1000.0],
        }
    }
}

impl Default for AuthoringOptions {
    fn default() -> Self {
        Self::new()
    }
}

/// State of an [AuthoringSession].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum AuthoringState {
    /// No loop in progress.
    Idle,
    /// Accumulating vertices.
    Drawing,
    /// Loop complete, waiting for a commit or cancel.
    Closed,
}

/// Why a placement was refused.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Rejection {
    /// Point is off the ground plane or not representable on the grid.
    OutOfBounds,
    /// Point equals the last placed vertex.
    DuplicateVertex,
    /// Corner at the last vertex would be sharper than the limit.
    NarrowAngle { degrees: f64 },
    /// New segment would cross, touch or overlap the loop.
    SelfIntersection,
    /// Loop would close with fewer than 3 vertices.
    DegenerateClosure,
}

/// Result of [AuthoringSession::place].
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Placement {
    /// Vertex appended at the given grid point.
    Accepted(IntPoint),
    /// Vertex landed on the first vertex, the loop is now closed.
    Closed,
    /// Vertex refused, the loop is unchanged.
    Rejected(Rejection),
    /// Session is not drawing.
    Ignored,
}

/// Loop authoring state machine: `Idle -> Drawing -> Closed -> Idle`.
#[derive(Debug, Clone)]
pub struct AuthoringSession {
    options: AuthoringOptions,
    state: AuthoringState,
    vertices: Vec<IntPoint>,
}

impl AuthoringSession {
    pub fn new(options: AuthoringOptions) -> Self {
        AuthoringSession {
            options,
            state: AuthoringState::Idle,
            vertices: Vec::new(),
        }
    }

    #[inline]
    pub fn options(&self) -> &AuthoringOptions {
        &self.options
    }

    #[inline]
    pub fn state(&self) -> AuthoringState {
        self.state
    }

    /// Vertices placed so far (grid units). The closing vertex is not repeated.
    #[inline]
    pub fn vertices(&self) -> &[IntPoint] {
        &self.vertices
    }

    /// Start button: begins a fresh loop from `Idle`, from any other state it cancels.
    pub fn start(&mut self) {
        match self.state {
            AuthoringState::Idle => {
                self.vertices.clear();
                self.state = AuthoringState::Drawing;
            }
            _ => self.cancel(),
        }
    }

    /// Discard the loop in progress.
    pub fn cancel(&mut self) {
        self.vertices.clear();
        self.state = AuthoringState::Idle;
    }

    fn on_ground(&self, world: [f64; 2]) -> bool {
        let [w, d] = self.options.ground_size;
        (0.0..w).contains(&world[0]) && (0.0..d).contains(&world[1])
    }

    fn to_grid(&self, world: [f64; 2]) -> Option<IntPoint> {
        let s = self.options.precision as f64;
        IntPoint::from_f64(world[0] * s, world[1] * s).ok()
    }

    /// Snap `p` to the first vertex when it lies inside the magnet radius.
    fn magnet(&self, p: IntPoint) -> IntPoint {
        let Some(&first) = self.vertices.first() else {
            return p;
        };

        let radius = self.options.magnet_radius * self.options.precision as f64;
        if (p.chebyshev_dist(first) as f64) < radius {
            first
        } else {
            p
        }
    }

    /// Where the cursor marker should be drawn for the ground point `world`, snapped onto the first
    /// vertex inside the magnet radius. `None` unless drawing on the ground plane.
    pub fn cursor_feedback(&self, world: [f64; 2]) -> Option<IntPoint> {
        if self.state != AuthoringState::Drawing || !self.on_ground(world) {
            return None;
        }
        self.to_grid(world).map(|p| self.magnet(p))
    }

    fn reject(&self, reason: Rejection) -> Placement {
        log::warn!(
            "vertex placement rejected ({reason:?}) with {} vertices placed",
            self.vertices.len()
        );
        Placement::Rejected(reason)
    }

    /// Try to place a vertex at the ground point `world`.
    pub fn place(&mut self, world: [f64; 2]) -> Placement {
        if self.state != AuthoringState::Drawing {
            return Placement::Ignored;
        }

        if !self.on_ground(world) {
            return self.reject(Rejection::OutOfBounds);
        }
        let Some(p) = self.to_grid(world) else {
            return self.reject(Rejection::OutOfBounds);
        };
        let candidate = self.magnet(p);

        let n = self.vertices.len();
        if n == 0 {
            self.vertices.push(candidate);
            return Placement::Accepted(candidate);
        }

        if self.vertices[n - 1] == candidate {
            return self.reject(Rejection::DuplicateVertex);
        }

        if n >= 2 {
            let angle = corner_angle(self.vertices[n - 2], self.vertices[n - 1], candidate);
            match angle {
                Some(degrees) if degrees >= self.options.narrow_angle_deg => {}
                Some(degrees) => return self.reject(Rejection::NarrowAngle { degrees }),
                None => return self.reject(Rejection::NarrowAngle { degrees: 0.0 }),
            }
        }

        let closing = candidate == self.vertices[0];
        if closing && n < 3 {
            return self.reject(Rejection::DegenerateClosure);
        }

        match check_new_segment(&self.vertices, candidate) {
            LoopCrossing::Crosses => self.reject(Rejection::SelfIntersection),
            LoopCrossing::ClosesLoop => {
                self.state = AuthoringState::Closed;
                log::debug!("loop closed with {n} vertices");
                Placement::Closed
            }
            LoopCrossing::Clear => {
                self.vertices.push(candidate);
                Placement::Accepted(candidate)
            }
        }
    }

    /// Commit the closed loop to `area` and return to `Idle`.
    ///
    /// Returns `Ok(false)` without touching anything if no closed loop is waiting. On error the
    /// area is unchanged and the session stays closed so the loop can still be cancelled.
    pub fn commit<E>(&mut self, area: &mut Area<E>, op: CommitOp) -> Result<bool>
    where
        E: ClipEngine,
    {
        if self.state != AuthoringState::Closed {
            return Ok(false);
        }

        area.commit_loop(&self.vertices, op)?;
        self.cancel();
        Ok(true)
    }
}
