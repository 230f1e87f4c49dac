//! # Action Registry
//!
//! Thread-safe mapping from action names and aliases to registrations.
//!
//! ## Key Features
//!
//! - **Alias-transparent lookup**: every name of a registration resolves to
//!   the same handler and predicate
//! - **Atomic re-registration**: replacing a registration swaps all of its
//!   names under one exclusive write section
//! - **Concurrent reads** via `tokio::sync::RwLock` over a read-mostly map
//! - **Explicit test isolation** with [`ActionRegistry::clear`]
//!
//! Name syntax: primary names are lowercase snake-case (`enable_feature`);
//! short aliases are prefixed with `^` (`^ef`) for compact serialized action
//! references.

use crate::actions::Action;
use crate::error::{ActionError, Result};
use crate::predicate::Predicate;
use chrono::{DateTime, Utc};
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, OnceLock};
use tokio::sync::RwLock;
use tracing::{debug, info};

static GLOBAL_REGISTRY: OnceLock<ActionRegistry> = OnceLock::new();

/// A registered handler with its names and composed predicate
pub struct ActionRegistration {
    /// Primary name plus aliases, as given at registration time
    pub names: Vec<String>,
    /// Final composed predicate gating dispatch
    pub predicate: Predicate,
    /// The handler to perform
    pub action: Arc<dyn Action>,
    /// When this registration was installed
    pub registered_at: DateTime<Utc>,
}

impl std::fmt::Debug for ActionRegistration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ActionRegistration")
            .field("names", &self.names)
            .field("action", &self.action.name())
            .field("registered_at", &self.registered_at)
            .finish_non_exhaustive()
    }
}

/// Registry statistics
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryStats {
    /// Distinct registrations currently installed
    pub total_registrations: usize,
    /// Total bound names, aliases included
    pub total_names: usize,
}

/// Process-wide mapping from action names to registrations
///
/// The registry exclusively owns its registrations. Dispatch paths only
/// read; mutation happens through explicit (re)registration and removal.
pub struct ActionRegistry {
    /// Every name and alias maps to the shared registration entry
    entries: RwLock<HashMap<String, Arc<ActionRegistration>>>,
}

impl ActionRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
        }
    }

    /// Access the process-wide registry, creating it on first use
    ///
    /// Hosts call [`crate::actions::register_default_actions`] against this
    /// instance during SDK startup.
    pub fn global() -> &'static ActionRegistry {
        GLOBAL_REGISTRY.get_or_init(ActionRegistry::new)
    }

    /// Register an action under a set of names
    ///
    /// Replaces any existing registration reachable through any of the given
    /// names: all names of a displaced registration are removed, so stale
    /// aliases never linger. The whole swap happens under one write lock.
    pub async fn register(
        &self,
        names: &[&str],
        predicate: Predicate,
        action: Arc<dyn Action>,
    ) -> Result<()> {
        self.validate_names(names)?;

        let registration = Arc::new(ActionRegistration {
            names: names.iter().map(|name| name.to_string()).collect(),
            predicate,
            action,
            registered_at: Utc::now(),
        });

        {
            let mut entries = self.entries.write().await;

            // Collect every name owned by a registration we are displacing
            let displaced: HashSet<String> = names
                .iter()
                .filter_map(|name| entries.get(*name))
                .flat_map(|existing| existing.names.iter().cloned())
                .collect();

            for name in &displaced {
                entries.remove(name);
            }

            for name in &registration.names {
                entries.insert(name.clone(), registration.clone());
            }

            if !displaced.is_empty() {
                debug!(displaced = ?displaced, "Displaced existing registration names");
            }
        }

        info!(names = ?names, "Registered action");
        Ok(())
    }

    /// Resolve a registration by primary name or alias
    pub async fn lookup(&self, name: &str) -> Option<Arc<ActionRegistration>> {
        let entries = self.entries.read().await;
        entries.get(name).cloned()
    }

    /// Remove the registration reachable through a name, dropping all of
    /// its names and aliases
    pub async fn remove(&self, name: &str) -> Result<()> {
        let mut entries = self.entries.write().await;

        let registration = entries
            .get(name)
            .cloned()
            .ok_or_else(|| ActionError::unknown_action(name))?;

        for owned_name in &registration.names {
            entries.remove(owned_name);
        }

        info!(names = ?registration.names, "Removed action registration");
        Ok(())
    }

    /// List every bound name and alias
    pub async fn names(&self) -> Vec<String> {
        let entries = self.entries.read().await;
        let mut names: Vec<String> = entries.keys().cloned().collect();
        names.sort();
        names
    }

    /// Get registry statistics
    pub async fn stats(&self) -> RegistryStats {
        let entries = self.entries.read().await;

        let distinct: HashSet<*const ActionRegistration> = entries
            .values()
            .map(|registration| Arc::as_ptr(registration))
            .collect();

        RegistryStats {
            total_registrations: distinct.len(),
            total_names: entries.len(),
        }
    }

    /// Drop every registration
    ///
    /// Intended for test isolation against the global registry.
    pub async fn clear(&self) {
        let mut entries = self.entries.write().await;
        entries.clear();
    }

    /// Validate a registration name set
    ///
    /// Names must be non-empty; primary names are lowercase snake-case and
    /// aliases are `^`-prefixed lowercase snake-case.
    fn validate_names(&self, names: &[&str]) -> Result<()> {
        if names.is_empty() {
            return Err(ActionError::registration(
                "At least one registration name is required",
            ));
        }

        for name in names {
            let body = name.strip_prefix('^').unwrap_or(name);
            if body.is_empty() {
                return Err(ActionError::registration(format!(
                    "Registration name cannot be empty: {name:?}"
                )));
            }
            if !body
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
            {
                return Err(ActionError::registration(format!(
                    "Invalid registration name: {name:?} (expected lowercase snake-case, optionally ^-prefixed)"
                )));
            }
        }

        Ok(())
    }
}

impl Default for ActionRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arguments::{ActionArguments, ActionResult};
    use async_trait::async_trait;

    struct NamedAction {
        id: String,
    }

    impl NamedAction {
        fn new(id: &str) -> Arc<Self> {
            Arc::new(Self { id: id.to_string() })
        }
    }

    #[async_trait]
    impl Action for NamedAction {
        async fn perform(&self, _arguments: &ActionArguments) -> Result<ActionResult> {
            Ok(ActionResult::with_value(self.id.as_str()))
        }

        fn name(&self) -> &str {
            &self.id
        }
    }

    #[tokio::test]
    async fn test_alias_transparent_lookup() {
        let registry = ActionRegistry::new();
        registry
            .register(
                &["enable_feature", "^ef"],
                Predicate::accept_all(),
                NamedAction::new("enable_feature"),
            )
            .await
            .unwrap();

        let by_name = registry.lookup("enable_feature").await.unwrap();
        let by_alias = registry.lookup("^ef").await.unwrap();

        assert!(Arc::ptr_eq(&by_name, &by_alias));
        assert_eq!(by_name.names, vec!["enable_feature", "^ef"]);
    }

    #[tokio::test]
    async fn test_unknown_name_lookup() {
        let registry = ActionRegistry::new();
        assert!(registry.lookup("frobnicate").await.is_none());
    }

    #[tokio::test]
    async fn test_reregistration_displaces_all_old_names() {
        let registry = ActionRegistry::new();
        registry
            .register(
                &["enable_feature", "^ef"],
                Predicate::accept_all(),
                NamedAction::new("old"),
            )
            .await
            .unwrap();

        // Re-register under the primary name only; the stale alias must not
        // keep resolving to the displaced registration
        registry
            .register(
                &["enable_feature"],
                Predicate::accept_all(),
                NamedAction::new("new"),
            )
            .await
            .unwrap();

        let resolved = registry.lookup("enable_feature").await.unwrap();
        assert_eq!(resolved.action.name(), "new");
        assert!(registry.lookup("^ef").await.is_none());

        let stats = registry.stats().await;
        assert_eq!(stats.total_registrations, 1);
        assert_eq!(stats.total_names, 1);
    }

    #[tokio::test]
    async fn test_name_validation() {
        let registry = ActionRegistry::new();
        let action = NamedAction::new("noop");

        let empty: &[&str] = &[];
        assert!(registry
            .register(empty, Predicate::accept_all(), action.clone())
            .await
            .is_err());

        assert!(registry
            .register(&[""], Predicate::accept_all(), action.clone())
            .await
            .is_err());

        assert!(registry
            .register(&["^"], Predicate::accept_all(), action.clone())
            .await
            .is_err());

        assert!(registry
            .register(&["Enable Feature"], Predicate::accept_all(), action.clone())
            .await
            .is_err());

        assert!(registry
            .register(&["enable_feature_2", "^ef2"], Predicate::accept_all(), action)
            .await
            .is_ok());
    }

    #[tokio::test]
    async fn test_remove_drops_every_name() {
        let registry = ActionRegistry::new();
        registry
            .register(
                &["enable_feature", "^ef"],
                Predicate::accept_all(),
                NamedAction::new("enable_feature"),
            )
            .await
            .unwrap();

        registry.remove("^ef").await.unwrap();

        assert!(registry.lookup("enable_feature").await.is_none());
        assert!(registry.lookup("^ef").await.is_none());
        assert!(registry.remove("^ef").await.is_err());
    }

    #[tokio::test]
    async fn test_stats_and_names() {
        let registry = ActionRegistry::new();
        registry
            .register(
                &["enable_feature", "^ef"],
                Predicate::accept_all(),
                NamedAction::new("enable_feature"),
            )
            .await
            .unwrap();
        registry
            .register(&["noop"], Predicate::accept_all(), NamedAction::new("noop"))
            .await
            .unwrap();

        let stats = registry.stats().await;
        assert_eq!(stats.total_registrations, 2);
        assert_eq!(stats.total_names, 3);

        assert_eq!(registry.names().await, vec!["^ef", "enable_feature", "noop"]);

        registry.clear().await;
        assert_eq!(registry.stats().await.total_registrations, 0);
    }
}
