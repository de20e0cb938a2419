//! Glob matching over the filesystem, with deterministic ordering.
use std::path::Path;

use globset::GlobBuilder;
use ignore::WalkBuilder;

use crate::error::Result;

/// Return the lexicographically sorted relative paths of files under `root`
/// matching `pattern`.
///
/// `/` is a literal separator, so `*` does not cross directories; the walk
/// depth is capped by the pattern's component count. The sort is a plain
/// byte-wise string sort, not numeric-aware. Zero matches is an empty vector,
/// not an error.
pub fn sorted_matches(pattern: &str, root: &Path) -> Result<Vec<String>> {
    let matcher = GlobBuilder::new(pattern)
        .literal_separator(true)
        .build()?
        .compile_matcher();

    let depth = pattern.split('/').count();
    let mut matches = Vec::new();

    for entry in WalkBuilder::new(root)
        .standard_filters(false)
        .max_depth(Some(depth))
        .build()
    {
        let entry = entry?;
        if !entry.file_type().is_some_and(|ty| ty.is_file()) {
            continue;
        }

        let relative = entry.path().strip_prefix(root).unwrap_or(entry.path());
        if matcher.is_match(relative) {
            matches.push(relative.to_string_lossy().into_owned());
        }
    }

    matches.sort();
    Ok(matches)
}
