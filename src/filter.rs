//! Call-site filtering by class and method name.

use std::collections::HashSet;

/// How a [`NameFilter`] interprets its name set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FilterMode {
    /// The filter is off; every candidate passes.
    #[default]
    Disabled,
    /// Only names in the set pass.
    Include,
    /// Every name except those in the set passes.
    Exclude,
}

/// An exact-match name filter with a mode and a set of names.
///
/// Two independent instances gate each log call: one checked against the
/// resolved class name, one against the resolved method name. Matching is
/// exact string equality, no wildcards.
///
/// An empty name set always passes, whatever the mode. An `Include` filter
/// with nothing configured must not silently block everything.
#[derive(Debug, Clone, Default)]
pub struct NameFilter {
    mode: FilterMode,
    names: HashSet<String>,
}

impl NameFilter {
    pub fn new(mode: FilterMode) -> Self {
        Self {
            mode,
            names: HashSet::new(),
        }
    }

    /// An `Include` filter pre-populated with `names`.
    pub fn include<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            mode: FilterMode::Include,
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    /// An `Exclude` filter pre-populated with `names`.
    pub fn exclude<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            mode: FilterMode::Exclude,
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    pub fn mode(&self) -> FilterMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: FilterMode) {
        self.mode = mode;
    }

    /// Adds a name to the set. Duplicates are meaningless.
    pub fn add(&mut self, name: impl Into<String>) {
        self.names.insert(name.into());
    }

    pub fn remove(&mut self, name: &str) {
        self.names.remove(name);
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Whether `candidate` is eligible to log under this filter.
    pub fn passes(&self, candidate: &str) -> bool {
        if self.mode == FilterMode::Disabled || self.names.is_empty() {
            return true;
        }
        match self.mode {
            FilterMode::Include => self.names.contains(candidate),
            FilterMode::Exclude => !self.names.contains(candidate),
            FilterMode::Disabled => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disabled_passes_everything() {
        let mut filter = NameFilter::new(FilterMode::Disabled);
        filter.add("Foo");
        assert!(filter.passes("Foo"));
        assert!(filter.passes("Bar"));
    }

    #[test]
    fn empty_include_passes_everything() {
        let filter = NameFilter::new(FilterMode::Include);
        assert!(filter.passes("Anything"));
    }

    #[test]
    fn empty_exclude_passes_everything() {
        let filter = NameFilter::new(FilterMode::Exclude);
        assert!(filter.passes("Anything"));
    }

    #[test]
    fn include_passes_only_listed_names() {
        let filter = NameFilter::include(["Foo"]);
        assert!(filter.passes("Foo"));
        assert!(!filter.passes("Bar"));
    }

    #[test]
    fn exclude_blocks_only_listed_names() {
        let filter = NameFilter::exclude(["Foo"]);
        assert!(!filter.passes("Foo"));
        assert!(filter.passes("Bar"));
    }

    #[test]
    fn matching_is_exact() {
        let filter = NameFilter::include(["Foo"]);
        assert!(!filter.passes("foo"));
        assert!(!filter.passes("FooBar"));
    }

    #[test]
    fn mode_switch_reinterprets_same_set() {
        let mut filter = NameFilter::include(["Foo"]);
        assert!(filter.passes("Foo"));
        filter.set_mode(FilterMode::Exclude);
        assert!(!filter.passes("Foo"));
        assert!(filter.passes("Bar"));
    }
}
