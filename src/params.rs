//! # XMSS parameter set model
//!
//! A [`Param`] carries the RFC 8391 values that identify one XMSS or XMSS-MT parameter set.
//! Everything else (key sizes, signature size, security level) is derived from it by
//! [`crate::sizes`], and its output location by [`crate::path`].
//!
//! Whether a set is a multi-tree one is never stored: [`Param::mt`] computes it from `d`.

use crate::{Error, Result};
use std::fmt;

/// Hash function family underlying a parameter set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HashFamily {
    Sha2,
    Shake,
}

impl HashFamily {
    /// Upper-case name as used in RFC 8391 parameter set names.
    pub const fn as_str(&self) -> &'static str {
        match self {
            HashFamily::Sha2 => "SHA2",
            HashFamily::Shake => "SHAKE",
        }
    }

    /// Lower-case name as used in output paths.
    pub const fn as_lower_str(&self) -> &'static str {
        match self {
            HashFamily::Sha2 => "sha2",
            HashFamily::Shake => "shake",
        }
    }
}

impl fmt::Display for HashFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One XMSS / XMSS-MT parameter set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Param {
    /// Unique RFC 8391 name, e.g. `XMSS-SHA2_10_256`.
    pub name: &'static str,
    /// Hash function family.
    pub hash: HashFamily,
    /// Bit length of the hash construction. For SHAKE this is the sponge security, not `8n`.
    pub hashlen: usize,
    /// Hash output length in bytes.
    pub n: usize,
    /// Winternitz parameter.
    pub w: usize,
    /// Number of WOTS+ hash chains.
    pub len: usize,
    /// Total tree height over all layers.
    pub h: usize,
    /// Number of tree layers.
    pub d: usize,
}

impl Param {
    /// `true` for XMSS-MT, i.e. more than one tree layer.
    pub const fn mt(&self) -> bool {
        self.d > 1
    }

    /// Height of a single subtree, `h / d`.
    ///
    /// Truncates silently when `h` is not a multiple of `d`; see [`Param::validate`].
    pub const fn tree_height(&self) -> usize {
        self.h / self.d
    }

    /// Checks the structural invariants of a parameter set.
    ///
    /// All of `n`, `w`, `len`, `h` and `d` must be positive, and `h` must be divisible by `d`.
    /// The size formulas do not call this; it exists for callers that build their own
    /// [`Param`] values instead of taking them from the registry.
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("n", self.n),
            ("w", self.w),
            ("len", self.len),
            ("h", self.h),
            ("d", self.d),
        ];
        if let Some((field, _)) = fields.iter().find(|(_, value)| *value == 0) {
            return Err(self.invalid(format!("{} must be positive", field)));
        }
        if self.h % self.d != 0 {
            return Err(self.invalid(format!(
                "total height {} is not divisible by {} layers",
                self.h, self.d
            )));
        }
        Ok(())
    }

    fn invalid(&self, reason: String) -> Error {
        Error::InvalidParam {
            name: self.name.to_string(),
            reason,
        }
    }
}

impl fmt::Display for Param {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn xmss_sha2_10_256() -> Param {
        Param {
            name: "XMSS-SHA2_10_256",
            hash: HashFamily::Sha2,
            hashlen: 256,
            n: 32,
            w: 16,
            len: 67,
            h: 10,
            d: 1,
        }
    }

    #[test]
    fn test_mt_follows_layers() {
        let single = xmss_sha2_10_256();
        assert!(!single.mt());

        let multi = Param { d: 2, h: 20, ..single };
        assert!(multi.mt());
        assert_eq!(multi.tree_height(), 10);
    }

    #[test]
    fn test_hash_family_names() {
        assert_eq!(HashFamily::Sha2.to_string(), "SHA2");
        assert_eq!(HashFamily::Shake.as_lower_str(), "shake");
    }

    #[test]
    fn test_validate_accepts_consistent_set() {
        xmss_sha2_10_256().validate().unwrap();
    }

    #[test]
    fn test_validate_rejects_uneven_layers() {
        let param = Param { h: 20, d: 3, ..xmss_sha2_10_256() };
        assert_eq!(param.tree_height(), 6);
        match param.validate() {
            Err(Error::InvalidParam { name, reason }) => {
                assert_eq!(name, "XMSS-SHA2_10_256");
                assert!(reason.contains("not divisible"));
            },
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_validate_rejects_zero_field() {
        let param = Param { len: 0, ..xmss_sha2_10_256() };
        assert!(matches!(
            param.validate(),
            Err(Error::InvalidParam { reason, .. }) if reason == "len must be positive"
        ));
    }
}
