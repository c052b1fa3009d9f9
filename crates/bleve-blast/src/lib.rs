//! bleve-blast: blast overpressure effect distances.
//!
//! Maps an effective explosion energy to distances through the TNO
//! multi-energy cube-root law `D = C(p) · E^(1/3)`, where the coefficient
//! `C(p)` comes from a small calibration table interpolated log-linearly in
//! overpressure. Also samples a continuous overpressure-vs-distance curve for
//! charting.
//!
//! Depends only on the energy value; no property lookups happen here.

pub mod curve;
pub mod error;
pub mod model;
pub mod thresholds;
pub mod tno;

pub use curve::{CurveSettings, OverpressurePoint};
pub use error::{BlastError, BlastResult};
pub use model::{BlastModel, DistanceResult};
pub use thresholds::parse_thresholds;
pub use tno::{METHOD_LABEL, TnoPoint, TnoTable, tno_coefficient};
