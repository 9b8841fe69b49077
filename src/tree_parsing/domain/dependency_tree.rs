use super::ComponentIdentity;
use std::collections::{BTreeMap, BTreeSet};

/// Flattened ancestor -> descendant relation keyed by component name
///
/// A (key, value) pair is stored at most once. Iteration is sorted by key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlattenedDependencies {
    entries: BTreeMap<String, BTreeSet<String>>,
}

impl FlattenedDependencies {
    pub fn new() -> Self {
        Self::default()
    }

    /// Unions `children` into the set recorded for `owner`.
    pub(crate) fn merge<I>(&mut self, owner: String, children: I)
    where
        I: IntoIterator<Item = String>,
    {
        self.entries.entry(owner).or_default().extend(children);
    }

    pub fn get(&self, name: &str) -> Option<&BTreeSet<String>> {
        self.entries.get(name)
    }

    pub fn contains(&self, owner: &str, dependency: &str) -> bool {
        self.entries
            .get(owner)
            .is_some_and(|deps| deps.contains(dependency))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &BTreeSet<String>)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of owners with a recorded entry
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total number of (owner, dependency) pairs
    pub fn relation_count(&self) -> usize {
        self.entries.values().map(|v| v.len()).sum()
    }
}

/// Components partitioned by tree depth; index 0 is the shallowest level
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LeveledDependencies {
    levels: Vec<BTreeSet<ComponentIdentity>>,
}

impl LeveledDependencies {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `component` at `level`, creating that level (and any
    /// missing shallower levels, left empty) on first use.
    pub(crate) fn insert(&mut self, level: usize, component: ComponentIdentity) {
        if level >= self.levels.len() {
            self.levels.resize_with(level + 1, BTreeSet::new);
        }
        self.levels[level].insert(component);
    }

    pub fn get(&self, level: usize) -> Option<&BTreeSet<ComponentIdentity>> {
        self.levels.get(level)
    }

    pub fn iter(&self) -> impl Iterator<Item = &BTreeSet<ComponentIdentity>> {
        self.levels.iter()
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }
}

/// DependencyTreeResult aggregate - the output of one tree parse
///
/// Immutable once constructed; safe to share read-only between consumers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DependencyTreeResult {
    flattened_dependencies: FlattenedDependencies,
    leveled_dependencies: LeveledDependencies,
}

impl DependencyTreeResult {
    pub fn new(
        flattened_dependencies: FlattenedDependencies,
        leveled_dependencies: LeveledDependencies,
    ) -> Self {
        Self {
            flattened_dependencies,
            leveled_dependencies,
        }
    }

    pub fn flattened_dependencies(&self) -> &FlattenedDependencies {
        &self.flattened_dependencies
    }

    pub fn leveled_dependencies(&self) -> &LeveledDependencies {
        &self.leveled_dependencies
    }

    /// Whether `dependency` was recorded under `component`, directly or transitively.
    pub fn depends_on(&self, component: &str, dependency: &str) -> bool {
        self.flattened_dependencies.contains(component, dependency)
    }

    /// Names recorded under `component`; empty when it has no children.
    pub fn dependencies_of(&self, component: &str) -> Vec<&str> {
        self.flattened_dependencies
            .get(component)
            .map(|deps| deps.iter().map(String::as_str).collect())
            .unwrap_or_default()
    }

    /// Shallowest level at which `component` was observed
    pub fn level_of(&self, component: &ComponentIdentity) -> Option<usize> {
        self.leveled_dependencies
            .iter()
            .position(|level| level.contains(component))
    }

    pub fn level_count(&self) -> usize {
        self.leveled_dependencies.len()
    }

    /// Distinct identities across all levels
    pub fn component_count(&self) -> usize {
        self.leveled_dependencies
            .iter()
            .flatten()
            .collect::<BTreeSet<_>>()
            .len()
    }

    pub fn relation_count(&self) -> usize {
        self.flattened_dependencies.relation_count()
    }

    /// Levels in ascending depth, each sorted by identity.
    pub fn bootstrap_order(&self) -> Vec<Vec<&ComponentIdentity>> {
        self.leveled_dependencies
            .iter()
            .map(|level| level.iter().collect())
            .collect()
    }
}
