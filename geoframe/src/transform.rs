//! The seven-parameter transform engine.
//!
//! All frame-to-frame conversions are routed through [`CENTRAL_FRAME`] in a
//! star topology: each registered frame knows only its single hop into the
//! central frame, and a conversion between two non-central frames composes a
//! forward hop with a backward hop. The engine is stateless and every call is
//! a pure function of its inputs, so concurrent callers need no
//! synchronization.

use crate::errors::TransformResult;
use crate::matrix::Matrix3;
use crate::params::{ParameterStore, TransformParameters, CENTRAL_FRAME};
use crate::point::Point3d;

/// Direction of a single hop relative to the stored parameters.
///
/// Parameters are stored one-directionally (frame → central). The backward
/// direction negates all seven values, which is the approximate inverse of
/// the linearized transform; the approximation is first-order, consistent
/// with the model itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

impl Direction {
    pub fn sign(&self) -> f64 {
        match self {
            Direction::Forward => 1.0,
            Direction::Backward => -1.0,
        }
    }
}

/// Applies one hop of the linearized similarity transform.
///
/// With rotations converted from arcseconds to radians and all seven
/// parameters multiplied by the direction sign, the output is
///
/// ```text
/// out = (1 + m) * R * p + (dx, dy, dz)
/// ```
///
/// where `R` is the small-angle rotation matrix
/// [`Matrix3::linearized_rotation`]. No orthogonality correction or iterative
/// refinement is applied.
pub fn single_hop(point: Point3d, params: &TransformParameters, direction: Direction) -> Point3d {
    let s = direction.sign();
    let (wx, wy, wz) = params.rotations_radians();

    let rotation = Matrix3::linearized_rotation(s * wx, s * wy, s * wz);
    let translation = Point3d::new(s * params.dx, s * params.dy, s * params.dz);
    let scale = 1.0 + s * params.m;

    scale * rotation.apply(&point) + translation
}

/// Resolved path between two frames, holding the parameters it needs.
enum Route<'a> {
    Identity,
    ToCentral(&'a TransformParameters),
    FromCentral(&'a TransformParameters),
    TwoHop(&'a TransformParameters, &'a TransformParameters),
}

impl Route<'_> {
    fn apply(&self, point: Point3d) -> Point3d {
        match self {
            Route::Identity => point,
            Route::ToCentral(params) => single_hop(point, params, Direction::Forward),
            Route::FromCentral(params) => single_hop(point, params, Direction::Backward),
            Route::TwoHop(from_params, to_params) => {
                let hub = single_hop(point, from_params, Direction::Forward);
                single_hop(hub, to_params, Direction::Backward)
            }
        }
    }
}

/// Converts batches of points between reference frames.
///
/// Holds an immutable [`ParameterStore`] injected at construction and no
/// other state.
#[derive(Debug, Clone)]
pub struct TransformEngine {
    store: ParameterStore,
}

impl TransformEngine {
    pub fn new(store: ParameterStore) -> Self {
        Self { store }
    }

    /// Engine over the compiled-in parameter table.
    pub fn bundled() -> Self {
        Self::new(ParameterStore::bundled())
    }

    pub fn store(&self) -> &ParameterStore {
        &self.store
    }

    /// Resolves the path between two frames.
    ///
    /// Decision table over (`from` is central, `to` is central):
    ///
    /// ```text
    /// from == to       identity (a non-central endpoint must still resolve)
    /// (_, central)     forward hop with lookup(from)
    /// (central, _)     backward hop with lookup(to)
    /// (other, other)   forward hop with lookup(from), then backward hop
    ///                  with lookup(to)
    /// ```
    ///
    /// Resolution happens before any point is touched, so an unknown frame at
    /// either endpoint fails the request regardless of batch content.
    fn route(&self, from: &str, to: &str) -> TransformResult<Route<'_>> {
        if from == to {
            // Identity is short-circuited, but an unregistered non-central
            // frame is still a lookup failure per the store precondition.
            if from != CENTRAL_FRAME {
                self.store.lookup(from)?;
            }
            return Ok(Route::Identity);
        }

        match (from == CENTRAL_FRAME, to == CENTRAL_FRAME) {
            (true, true) => Ok(Route::Identity),
            (false, true) => Ok(Route::ToCentral(self.store.lookup(from)?)),
            (true, false) => Ok(Route::FromCentral(self.store.lookup(to)?)),
            (false, false) => Ok(Route::TwoHop(
                self.store.lookup(from)?,
                self.store.lookup(to)?,
            )),
        }
    }

    /// Converts a single point from `from` to `to`.
    pub fn convert_point(&self, point: Point3d, from: &str, to: &str) -> TransformResult<Point3d> {
        Ok(self.route(from, to)?.apply(point))
    }

    /// Converts an ordered batch of points from `from` to `to`.
    ///
    /// The output has the same length and ordering as the input: result `i`
    /// is the converted input `i`. The path is resolved once, then each point
    /// is transformed independently with no cross-point state, so callers may
    /// partition large batches across threads freely; this method itself
    /// stays a sequential map.
    ///
    /// An unresolvable frame at either endpoint fails the whole batch with no
    /// partial output. Non-finite coordinates are a caller-contract
    /// violation: the engine does not reject them and the arithmetic
    /// propagates NaN/infinity into the result (the table reader in
    /// [`crate::table`] screens them out at the boundary).
    pub fn convert(
        &self,
        points: &[Point3d],
        from: &str,
        to: &str,
    ) -> TransformResult<Vec<Point3d>> {
        let route = self.route(from, to)?;
        Ok(points.iter().map(|p| route.apply(*p)).collect())
    }
}
