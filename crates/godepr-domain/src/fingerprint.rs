use sha2::{Digest, Sha256};

/// Compute a stable SHA-256 fingerprint for a violation.
///
/// Identity fields:
/// - rule kind
/// - rule directory (as written)
/// - package import path
/// - offending import path
pub fn fingerprint_for_violation(
    rule_kind: &str,
    directory: &str,
    package_path: &str,
    import_path: &str,
) -> String {
    let canonical = [rule_kind, directory, package_path, import_path].join("|");

    let mut hasher = Sha256::new();
    hasher.update(canonical.as_bytes());
    let digest = hasher.finalize();
    hex::encode(digest)
}
