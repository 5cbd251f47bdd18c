//! RFC 8391 parameter sets.
//!
//! Rows follow the order of the RFC: single-tree XMSS first, then XMSS-MT with SHA2 and SHAKE.
//! Columns are `name, hash, hashlen, n, w, len, h, d`.

use crate::params::HashFamily::{Sha2, Shake};
use crate::params::{HashFamily, Param};

/// Number of parameter sets in the catalog.
pub const CATALOG_LEN: usize = 44;

#[allow(clippy::too_many_arguments)]
const fn param(
    name: &'static str,
    hash: HashFamily,
    hashlen: usize,
    n: usize,
    w: usize,
    len: usize,
    h: usize,
    d: usize,
) -> Param {
    Param {
        name,
        hash,
        hashlen,
        n,
        w,
        len,
        h,
        d,
    }
}

#[rustfmt::skip]
pub(crate) static CATALOG: [Param; CATALOG_LEN] = [
    param("XMSS-SHA2_10_256",       Sha2,  256, 32, 16,  67, 10,  1),
    param("XMSS-SHA2_16_256",       Sha2,  256, 32, 16,  67, 16,  1),
    param("XMSS-SHA2_20_256",       Sha2,  256, 32, 16,  67, 20,  1),
    param("XMSS-SHA2_10_512",       Sha2,  512, 64, 16, 131, 10,  1),
    param("XMSS-SHA2_16_512",       Sha2,  512, 64, 16, 131, 16,  1),
    param("XMSS-SHA2_20_512",       Sha2,  512, 64, 16, 131, 20,  1),
    param("XMSS-SHAKE_10_256",      Shake, 128, 32, 16,  67, 10,  1),
    param("XMSS-SHAKE_16_256",      Shake, 128, 32, 16,  67, 16,  1),
    param("XMSS-SHAKE_20_256",      Shake, 128, 32, 16,  67, 20,  1),
    param("XMSS-SHAKE_10_512",      Shake, 256, 64, 16, 131, 10,  1),
    param("XMSS-SHAKE_16_512",      Shake, 256, 64, 16, 131, 16,  1),
    param("XMSS-SHAKE_20_512",      Shake, 256, 64, 16, 131, 20,  1),

    param("XMSSMT-SHA2_20/2_256",   Sha2,  256, 32, 16,  67, 20,  2),
    param("XMSSMT-SHA2_20/4_256",   Sha2,  256, 32, 16,  67, 20,  4),
    param("XMSSMT-SHA2_40/2_256",   Sha2,  256, 32, 16,  67, 40,  2),
    param("XMSSMT-SHA2_40/4_256",   Sha2,  256, 32, 16,  67, 40,  4),
    param("XMSSMT-SHA2_40/8_256",   Sha2,  256, 32, 16,  67, 40,  8),
    param("XMSSMT-SHA2_60/3_256",   Sha2,  256, 32, 16,  67, 60,  3),
    param("XMSSMT-SHA2_60/6_256",   Sha2,  256, 32, 16,  67, 60,  6),
    param("XMSSMT-SHA2_60/12_256",  Sha2,  256, 32, 16,  67, 60, 12),
    param("XMSSMT-SHA2_20/2_512",   Sha2,  512, 64, 16, 131, 20,  2),
    param("XMSSMT-SHA2_20/4_512",   Sha2,  512, 64, 16, 131, 20,  4),
    param("XMSSMT-SHA2_40/2_512",   Sha2,  512, 64, 16, 131, 40,  2),
    param("XMSSMT-SHA2_40/4_512",   Sha2,  512, 64, 16, 131, 40,  4),
    param("XMSSMT-SHA2_40/8_512",   Sha2,  512, 64, 16, 131, 40,  8),
    param("XMSSMT-SHA2_60/3_512",   Sha2,  512, 64, 16, 131, 60,  3),
    param("XMSSMT-SHA2_60/6_512",   Sha2,  512, 64, 16, 131, 60,  6),
    param("XMSSMT-SHA2_60/12_512",  Sha2,  512, 64, 16, 131, 60, 12),
    param("XMSSMT-SHAKE_20/2_256",  Shake, 128, 32, 16,  67, 20,  2),
    param("XMSSMT-SHAKE_20/4_256",  Shake, 128, 32, 16,  67, 20,  4),
    param("XMSSMT-SHAKE_40/2_256",  Shake, 128, 32, 16,  67, 40,  2),
    param("XMSSMT-SHAKE_40/4_256",  Shake, 128, 32, 16,  67, 40,  4),
    param("XMSSMT-SHAKE_40/8_256",  Shake, 128, 32, 16,  67, 40,  8),
    param("XMSSMT-SHAKE_60/3_256",  Shake, 128, 32, 16,  67, 60,  3),
    param("XMSSMT-SHAKE_60/6_256",  Shake, 128, 32, 16,  67, 60,  6),
    param("XMSSMT-SHAKE_60/12_256", Shake, 128, 32, 16,  67, 60, 12),
    param("XMSSMT-SHAKE_20/2_512",  Shake, 256, 64, 16, 131, 20,  2),
    param("XMSSMT-SHAKE_20/4_512",  Shake, 256, 64, 16, 131, 20,  4),
    param("XMSSMT-SHAKE_40/2_512",  Shake, 256, 64, 16, 131, 40,  2),
    param("XMSSMT-SHAKE_40/4_512",  Shake, 256, 64, 16, 131, 40,  4),
    param("XMSSMT-SHAKE_40/8_512",  Shake, 256, 64, 16, 131, 40,  8),
    param("XMSSMT-SHAKE_60/3_512",  Shake, 256, 64, 16, 131, 60,  3),
    param("XMSSMT-SHAKE_60/6_512",  Shake, 256, 64, 16, 131, 60,  6),
    param("XMSSMT-SHAKE_60/12_512", Shake, 256, 64, 16, 131, 60, 12),
];
