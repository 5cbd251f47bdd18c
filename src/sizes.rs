//! # Derived sizes and security levels
//!
//! Every quantity here is a closed-form function of a [`Param`], computed with integer arithmetic
//! only. Public key and signature sizes follow RFC 8391. The secret key size depends on how an
//! implementation caches authentication paths, so two values are given: an estimate for the
//! BDS08 `treehash` traversal and the absolute minimum of seeds plus leaf index.
//!
//! ```rust
//! use xmss_params::{registry, Descriptor};
//!
//! let param = registry::lookup("XMSS-SHA2_10_256").unwrap();
//! let descriptor = Descriptor::new(param);
//! assert_eq!(descriptor.sizes.pk, 68);
//! assert_eq!(descriptor.sizes.sig, 2500);
//! ```
//!
//! None of the functions check [`Param::validate`]. When `h` is not a multiple of `d` the
//! subtree height truncates silently, exactly as the formulas are written.

use crate::params::Param;

#[cfg(feature = "serialization")]
use serde::{Deserialize, Serialize};

/// Four bytes: the leaf index in a signature, the OID in a public key.
const INDEX_BYTES: u64 = 4;

/// XMSS signing never fails probabilistically.
pub const FAILURE_PROBABILITY: u64 = 0;

/// Classical security in bits, `8n`.
pub fn classical_security_bits(param: &Param) -> u64 {
    param.n as u64 * 8
}

/// Quantum security in bits. Grover's search halves the classical bound.
pub fn quantum_security_bits(param: &Param) -> u64 {
    classical_security_bits(param) / 2
}

/// Public key bytes: root and public seed, plus the 4-byte OID.
pub fn public_key_bytes(param: &Param) -> u64 {
    2 * param.n as u64 + INDEX_BYTES
}

/// Signature bytes: leaf index, randomness, `len` WOTS+ chain values and `h` authentication
/// path nodes.
pub fn signature_bytes(param: &Param) -> u64 {
    let n = param.n as u64;
    INDEX_BYTES + n + (param.len as u64 + param.h as u64) * n
}

/// Message digest length in bits.
pub fn message_digest_bits(param: &Param) -> u64 {
    param.n as u64 * 8
}

/// Estimated secret key bytes when authentication paths are computed with BDS08 `treehash`.
///
/// `ceil((n * (4 + (2d + 1) * (floor(3.5 h / d) - 4)) + 9h) / 8)`, see
/// <https://crypto.stackexchange.com/a/77292>.
///
/// The inner term goes negative for subtrees of height one; the result is clamped at zero.
pub fn bds_secret_key_bytes(param: &Param) -> u64 {
    let n = param.n as i64;
    let h = param.h as i64;
    let d = param.d as i64;

    // floor(3.5 h / d) without leaving the integers.
    let retained = (7 * h).div_euclid(2 * d) - 4;
    let bits = n * (4 + (2 * d + 1) * retained) + 9 * h;
    ceil_div(bits, 8).max(0) as u64
}

/// Minimum secret key bytes: seeds plus the leaf index counter, with no cached nodes.
pub fn min_secret_key_bytes(param: &Param) -> u64 {
    4 * param.n as u64 + (param.h as u64).div_ceil(8)
}

/// Number of signatures a key can issue, written as a power of two.
pub fn number_of_operations(param: &Param) -> String {
    format!("2^{}", param.h)
}

fn ceil_div(numerator: i64, denominator: i64) -> i64 {
    let quotient = numerator.div_euclid(denominator);
    if numerator.rem_euclid(denominator) == 0 {
        quotient
    } else {
        quotient + 1
    }
}

fn secret_key_comment(min_sk: u64) -> String {
    format!(
        "Secret key size vastly depends on the implementation, and can be balanced against \
         signing time. The given value is when using `treehash` from BDS08, estimated. \
         Source: https://crypto.stackexchange.com/a/77292 . Absolute minimum is {} bytes.",
        min_sk
    )
}

/// Classical and quantum security in bits.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct SecurityLevel {
    pub classical: u64,
    pub quantum: u64,
}

/// Key, signature and message sizes of a parameter set.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct Sizes {
    /// Secret key bytes, BDS08 estimate.
    pub sk: u64,
    /// Public key bytes.
    pub pk: u64,
    /// Signature bytes.
    #[cfg_attr(feature = "serialization", serde(rename = "ct|sig"))]
    pub sig: u64,
    /// Message digest bits.
    pub msg: u64,
    pub comment: String,
}

/// Everything derived from a parameter set, in output order.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct Descriptor {
    pub name: String,
    #[cfg_attr(feature = "serialization", serde(rename = "security level"))]
    pub security_level: SecurityLevel,
    #[cfg_attr(feature = "serialization", serde(rename = "number of operations"))]
    pub number_of_operations: String,
    #[cfg_attr(feature = "serialization", serde(rename = "failure probability"))]
    pub failure_probability: u64,
    pub sizes: Sizes,
}

impl Descriptor {
    pub fn new(param: &Param) -> Self {
        Self {
            name: param.name.to_string(),
            security_level: SecurityLevel {
                classical: classical_security_bits(param),
                quantum: quantum_security_bits(param),
            },
            number_of_operations: number_of_operations(param),
            failure_probability: FAILURE_PROBABILITY,
            sizes: Sizes {
                sk: bds_secret_key_bytes(param),
                pk: public_key_bytes(param),
                sig: signature_bytes(param),
                msg: message_digest_bits(param),
                comment: secret_key_comment(min_secret_key_bytes(param)),
            },
        }
    }
}

impl From<&Param> for Descriptor {
    fn from(param: &Param) -> Self {
        Self::new(param)
    }
}
