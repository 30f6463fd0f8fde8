//! Relation-tag → rule dispatch table.

use crate::rule::Rule;
use indexmap::IndexMap;
use verdict_core::RelationKind;

/// Maps relation tags to rule instances.
///
/// Registering a new relation type requires no change to the engine or
/// to other rules. The engine silently skips edges whose relation has
/// no registered rule — an unknown relation is not an error.
#[derive(Default)]
pub struct RuleRegistry {
    rules: IndexMap<RelationKind, Box<dyn Rule>>,
}

impl RuleRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a rule under its own relation tag, replacing any rule
    /// previously registered for that tag.
    pub fn register(&mut self, rule: Box<dyn Rule>) {
        self.rules.insert(rule.relation(), rule);
    }

    /// Look up the rule for a relation tag.
    pub fn get(&self, relation: RelationKind) -> Option<&dyn Rule> {
        self.rules.get(&relation).map(|r| r.as_ref())
    }

    /// Whether a rule is registered for a relation tag.
    pub fn has(&self, relation: RelationKind) -> bool {
        self.rules.contains_key(&relation)
    }

    /// All registered rules, in registration order.
    pub fn rules(&self) -> impl Iterator<Item = &dyn Rule> {
        self.rules.values().map(|r| r.as_ref())
    }

    /// Number of registered rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether no rules are registered.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl std::fmt::Debug for RuleRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleRegistry")
            .field("relations", &self.rules.keys().collect::<Vec<_>>())
            .finish()
    }
}
