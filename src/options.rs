//! Packaging configuration.

/// File and directory base names skipped by default.
///
/// These are incidental artifacts left behind by desktop file managers and
/// archive tools, never part of the publication itself. A directory carrying
/// one of these names is skipped whole, nothing beneath it is visited.
pub const DEFAULT_EXCLUDED_NAMES: &[&str] = &[".DS_Store", "Thumbs.db", "desktop.ini", "_MACOSX"];

/// Default maximum directory nesting depth below the source root.
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Default number of file reads kept in flight during assembly.
pub const DEFAULT_READ_CONCURRENCY: usize = 16;

/// Configuration for a packaging run.
///
/// The defaults suit normal publications; use the consuming setters to
/// override individual knobs:
///
/// ```
/// use epubpack::PackOptions;
///
/// let options = PackOptions::new()
///     .max_depth(16)
///     .excluded_names([".DS_Store", "drafts"]);
/// assert!(options.is_excluded("drafts"));
/// ```
#[derive(Debug, Clone)]
pub struct PackOptions {
    pub(crate) excluded_names: Vec<String>,
    pub(crate) max_depth: usize,
    pub(crate) read_concurrency: usize,
}

impl Default for PackOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl PackOptions {
    pub fn new() -> Self {
        Self {
            excluded_names: DEFAULT_EXCLUDED_NAMES
                .iter()
                .map(|name| name.to_string())
                .collect(),
            max_depth: DEFAULT_MAX_DEPTH,
            read_concurrency: DEFAULT_READ_CONCURRENCY,
        }
    }

    /// Replace the excluded-name set.
    ///
    /// The replacement is total: defaults not repeated here stop applying.
    pub fn excluded_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.excluded_names = names.into_iter().map(Into::into).collect();
        self
    }

    /// Set the maximum directory nesting depth below the source root.
    pub fn max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }

    /// Set the number of file reads kept in flight during assembly.
    pub fn read_concurrency(mut self, reads: usize) -> Self {
        self.read_concurrency = reads.max(1);
        self
    }

    /// Whether a base name is excluded from packaging.
    ///
    /// Matching is exact and case-sensitive, on the base name alone.
    pub fn is_excluded(&self, name: &str) -> bool {
        self.excluded_names.iter().any(|excluded| excluded == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_exclusions() {
        let options = PackOptions::new();
        assert!(options.is_excluded(".DS_Store"));
        assert!(options.is_excluded("Thumbs.db"));
        assert!(options.is_excluded("desktop.ini"));
        assert!(options.is_excluded("_MACOSX"));
        assert!(!options.is_excluded("mimetype"));
    }

    #[test]
    fn test_exclusion_is_exact_and_case_sensitive() {
        let options = PackOptions::new();
        assert!(!options.is_excluded("thumbs.db"));
        assert!(!options.is_excluded(".DS_Store.bak"));
        assert!(!options.is_excluded("x.DS_Store"));
    }

    #[test]
    fn test_override_replaces_defaults() {
        let options = PackOptions::new().excluded_names(["drafts"]);
        assert!(options.is_excluded("drafts"));
        assert!(!options.is_excluded(".DS_Store"));
    }

    #[test]
    fn test_read_concurrency_floor() {
        let options = PackOptions::new().read_concurrency(0);
        assert_eq!(options.read_concurrency, 1);
    }
}
