//! Conversion of geocentric point coordinates between geodetic reference
//! frames using a seven-parameter (Helmert) similarity transform, linearized
//! for small rotation angles.
//!
//! Frames form a star topology around one central frame
//! ([`CENTRAL_FRAME`], GSK-2011): every registered frame carries the seven
//! parameters of its single hop into the central frame, and any
//! frame-to-frame conversion is at most a two-hop composition through the
//! hub. The [`ParameterStore`] is immutable after construction and the
//! [`TransformEngine`] is a pure function of its inputs, so conversions can
//! run concurrently without coordination.
//!
//! ```
//! use geoframe::{Point3d, TransformEngine, CENTRAL_FRAME};
//!
//! let engine = TransformEngine::bundled();
//! let points = vec![Point3d::new(3_000_000.0, 3_000_000.0, 4_000_000.0)];
//! let converted = engine.convert(&points, "SK-42", CENTRAL_FRAME)?;
//! assert_eq!(converted.len(), points.len());
//! # Ok::<(), geoframe::TransformError>(())
//! ```

pub mod errors;
pub mod matrix;
pub mod params;
pub mod point;
pub mod report;
pub mod table;
pub mod transform;

pub use errors::{TransformError, TransformResult};
pub use matrix::Matrix3;
pub use params::{ParameterStore, TransformParameters, CENTRAL_FRAME};
pub use point::Point3d;
pub use transform::{single_hop, Direction, TransformEngine};
