// Bundle lookup from executable paths

use std::path::{Path, PathBuf};

use super::collaborators::BundleClassifier;

/// How many directories above the executable's own directory are searched
pub const DEFAULT_BUNDLE_SEARCH_DEPTH: usize = 8;

/// Walks up from the executable's directory to the nearest enclosing bundle.
///
/// `/Applications/Foo.app/Contents/MacOS/Foo` resolves to
/// `/Applications/Foo.app`. The executable's directory is checked first, then
/// at most `max_depth` ancestors.
pub fn parent_bundle_path(
    executable: &Path,
    classifier: &impl BundleClassifier,
    max_depth: usize,
) -> Option<PathBuf> {
    let mut candidate = executable.parent()?;
    let mut depth = 0;

    while depth < max_depth && !classifier.is_bundle(candidate) {
        candidate = candidate.parent()?;
        depth += 1;
    }

    classifier
        .is_bundle(candidate)
        .then(|| candidate.to_path_buf())
}

/// Last dot-separated component of a reverse-DNS identifier, if non-empty
pub fn last_reverse_dns_component(identifier: &str) -> Option<&str> {
    identifier.rsplit('.').next().filter(|component| !component.is_empty())
}
