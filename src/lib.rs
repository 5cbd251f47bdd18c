//! # xmss-params
//!
//! Catalog of the XMSS and XMSS-MT parameter sets from RFC 8391, with the key, signature and
//! security sizes derived from them. No signing happens here; the crate only describes the
//! parameter sets and exports one structured document per set.

mod error;

pub mod params;
pub mod path;
pub mod registry;
pub mod sizes;

#[cfg(any(feature = "yaml", feature = "json"))]
pub mod export;

pub use crate::error::{Error, Result};
pub use crate::params::{HashFamily, Param};
pub use crate::sizes::{Descriptor, SecurityLevel, Sizes};

#[cfg(any(feature = "yaml", feature = "json"))]
pub use crate::export::{ExportConfig, Exporter, Format};
