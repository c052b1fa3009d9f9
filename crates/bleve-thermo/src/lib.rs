//! bleve-thermo: saturation property lookup for the BLEVE engine.
//!
//! Provides:
//! - `SaturationProps`: one liquid/vapor saturation state at a given pressure
//! - `SaturationProvider` trait for resolving a pressure into a saturation state
//! - `SteamTableProvider`: interpolation over a fixed water calibration table
//! - `RemoteProvider`: lookup against an HTTP thermo property service
//!
//! # Architecture
//!
//! The energy balance only ever sees `&dyn SaturationProvider`, so a
//! higher-fidelity backend can replace the calibration table without touching
//! the rest of the engine. Which backend is used is decided once, at
//! configuration time, through `ProviderKind`.
//!
//! # Example
//!
//! ```
//! use bleve_core::units::pa;
//! use bleve_thermo::{SaturationProvider, SteamTableProvider};
//!
//! let provider = SteamTableProvider::new();
//! let sat = provider.saturation(pa(2.0e6)).unwrap();
//! assert!(sat.rho_l.value > sat.rho_v.value);
//! ```

pub mod error;
pub mod props;
pub mod provider;
pub mod remote;
pub mod table;

// Re-exports for ergonomics
pub use error::{ThermoError, ThermoResult};
pub use props::{SaturationProps, SaturationRecord, internal_energy};
pub use provider::{ProviderKind, SaturationProvider};
pub use remote::{PropertyPayload, RemoteProvider};
pub use table::SteamTableProvider;
