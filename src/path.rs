//! Output locations for parameter set documents.
//!
//! Paths are built by plain string concatenation onto a prefix, so the prefix must carry its own
//! trailing separator. Single-tree sets land in
//! `{prefix}xmss-{hash}/param/xmss-{hash}-{h}-{8n}.yaml` and multi-tree sets in
//! `{prefix}xmss-{hash}/param/xmssmt-{hash}-{h}-{d}-{8n}.yaml`.

use crate::params::Param;
use std::path::PathBuf;

/// Root directory used when no prefix is configured.
pub const DEFAULT_PREFIX: &str = "signatures/xmss/";

/// Extension of the default YAML documents.
pub const DEFAULT_EXTENSION: &str = "yaml";

/// Path of the YAML document for `param` below `prefix`.
pub fn make_path(param: &Param, prefix: &str) -> PathBuf {
    make_path_with_extension(param, prefix, DEFAULT_EXTENSION)
}

/// Path of the document for `param` below `prefix`, using `extension` for the file name.
pub fn make_path_with_extension(param: &Param, prefix: &str, extension: &str) -> PathBuf {
    let hash = param.hash.as_lower_str();
    let bits = param.n * 8;
    let file = if param.mt() {
        format!("xmssmt-{}-{}-{}-{}.{}", hash, param.h, param.d, bits, extension)
    } else {
        format!("xmss-{}-{}-{}.{}", hash, param.h, bits, extension)
    };
    PathBuf::from(format!("{}xmss-{}/param/{}", prefix, hash, file))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry;
    use std::collections::HashSet;

    #[test]
    fn test_single_tree_path() {
        let param = registry::lookup("XMSS-SHA2_10_256").unwrap();
        assert_eq!(
            make_path(param, DEFAULT_PREFIX),
            PathBuf::from("signatures/xmss/xmss-sha2/param/xmss-sha2-10-256.yaml")
        );
    }

    #[test]
    fn test_multi_tree_path() {
        let param = registry::lookup("XMSSMT-SHAKE_60/12_512").unwrap();
        let path = make_path(param, DEFAULT_PREFIX);
        assert_eq!(
            path,
            PathBuf::from("signatures/xmss/xmss-shake/param/xmssmt-shake-60-12-512.yaml")
        );
        assert!(path.to_string_lossy().ends_with("-60-12-512.yaml"));
    }

    #[test]
    fn test_prefix_is_concatenated() {
        let param = registry::lookup("XMSS-SHAKE_16_512").unwrap();
        assert_eq!(
            make_path(param, "out/"),
            PathBuf::from("out/xmss-shake/param/xmss-shake-16-512.yaml")
        );
        assert_eq!(
            make_path(param, ""),
            PathBuf::from("xmss-shake/param/xmss-shake-16-512.yaml")
        );
    }

    #[test]
    fn test_extension() {
        let param = registry::lookup("XMSSMT-SHA2_20/4_256").unwrap();
        assert_eq!(
            make_path_with_extension(param, DEFAULT_PREFIX, "json"),
            PathBuf::from("signatures/xmss/xmss-sha2/param/xmssmt-sha2-20-4-256.json")
        );
    }

    #[test]
    fn test_paths_are_unique() {
        let paths: HashSet<PathBuf> = registry::iter()
            .map(|param| make_path(param, DEFAULT_PREFIX))
            .collect();
        assert_eq!(paths.len(), registry::len());
    }
}
