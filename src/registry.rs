//! # Parameter set registry
//!
//! The registry is the compiled-in, read-only catalog of the 44 XMSS and XMSS-MT parameter sets
//! standardized in RFC 8391. There is no way to add or remove entries at runtime.
//!
//! Iteration always yields the RFC declaration order, so batch exports are reproducible.
//! Lookups by name go through an index that is built on first use.
//!
//! ```rust
//! use xmss_params::registry;
//!
//! let param = registry::lookup("XMSSMT-SHA2_40/8_256").unwrap();
//! assert!(param.mt());
//! assert_eq!(param.tree_height(), 5);
//! ```

use crate::params::Param;
use crate::{Error, Result};
use std::collections::HashMap;
use std::sync::OnceLock;

mod rfc8391;

pub use rfc8391::CATALOG_LEN;
use rfc8391::CATALOG;

fn index() -> &'static HashMap<&'static str, &'static Param> {
    static INDEX: OnceLock<HashMap<&'static str, &'static Param>> = OnceLock::new();
    INDEX.get_or_init(|| CATALOG.iter().map(|param| (param.name, param)).collect())
}

/// Returns the parameter set registered under `name`.
///
/// Names are matched exactly, including case. Fails with [`Error::NotFound`] otherwise.
pub fn lookup(name: &str) -> Result<&'static Param> {
    let param = index()
        .get(name)
        .copied()
        .ok_or_else(|| Error::NotFound(name.to_string()))?;
    log::debug!("Resolved parameter set {}", param.name);
    Ok(param)
}

/// Iterates over all parameter sets in RFC 8391 order.
pub fn iter() -> impl ExactSizeIterator<Item = &'static Param> {
    CATALOG.iter()
}

/// Iterates over all parameter set names in RFC 8391 order.
pub fn names() -> impl ExactSizeIterator<Item = &'static str> {
    iter().map(|param| param.name)
}

/// Number of registered parameter sets.
pub fn len() -> usize {
    CATALOG.len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::HashFamily;
    use rand::distributions::Alphanumeric;
    use rand::{thread_rng, Rng};
    use std::collections::HashSet;

    fn random_str(length: usize) -> String {
        thread_rng()
            .sample_iter(&Alphanumeric)
            .take(length)
            .map(char::from)
            .collect()
    }

    #[test]
    fn test_catalog_size() {
        assert_eq!(len(), 44);
        assert_eq!(iter().len(), CATALOG_LEN);
        assert_eq!(iter().filter(|p| !p.mt()).count(), 12);
        assert_eq!(iter().filter(|p| p.mt()).count(), 32);
    }

    #[test]
    fn test_names_are_unique() {
        let unique: HashSet<&str> = names().collect();
        assert_eq!(unique.len(), len());
    }

    #[test]
    fn test_declaration_order() {
        let names: Vec<&str> = names().collect();
        assert_eq!(names[0], "XMSS-SHA2_10_256");
        assert_eq!(names[11], "XMSS-SHAKE_20_512");
        assert_eq!(names[12], "XMSSMT-SHA2_20/2_256");
        assert_eq!(names[28], "XMSSMT-SHAKE_20/2_256");
        assert_eq!(names[43], "XMSSMT-SHAKE_60/12_512");
    }

    #[test]
    fn test_lookup_round_trip() {
        for name in names() {
            assert_eq!(lookup(name).unwrap().name, name);
        }
    }

    #[test]
    fn test_lookup_values() {
        let param = lookup("XMSSMT-SHAKE_60/12_512").unwrap();
        assert_eq!(param.hash, HashFamily::Shake);
        assert_eq!(param.hashlen, 256);
        assert_eq!((param.n, param.w, param.len), (64, 16, 131));
        assert_eq!((param.h, param.d), (60, 12));
        assert!(param.mt());
    }

    #[test]
    fn test_lookup_unknown_name() {
        for _ in 0..16 {
            let name = random_str(12);
            match lookup(&name) {
                Err(Error::NotFound(missing)) => assert_eq!(missing, name),
                other => panic!("unexpected result for '{}': {:?}", name, other),
            }
        }
        // Names are case sensitive.
        assert!(matches!(
            lookup("xmss-sha2_10_256"),
            Err(Error::NotFound(_))
        ));
    }

    #[test]
    fn test_catalog_is_consistent() {
        for param in iter() {
            param.validate().unwrap();
            assert_eq!(param.w, 16);
            let expected_len = match param.n {
                32 => 67,
                64 => 131,
                n => panic!("unexpected n = {} in {}", n, param),
            };
            assert_eq!(param.len, expected_len, "{}", param);

            let expected_hashlen = match param.hash {
                HashFamily::Sha2 => param.n * 8,
                HashFamily::Shake => param.n * 4,
            };
            assert_eq!(param.hashlen, expected_hashlen, "{}", param);

            assert!(param.name.starts_with(if param.mt() { "XMSSMT-" } else { "XMSS-" }));
            assert!(param.name.contains(param.hash.as_str()));
            assert!(param.name.ends_with(&format!("_{}", param.n * 8)));
        }
    }
}
