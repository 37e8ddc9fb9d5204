//! Widget registry mapping resolved identities to live adapters.
//!
//! All reads and writes of widget state go through here: the dispatcher
//! looks adapters up to apply inbound updates, and hosts register adapters
//! as widgets are attached to the render tree.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::domain::WidgetIdentity;
use crate::ports::WidgetAdapter;

/// Registry of live widget adapters, keyed by full resolved identity.
///
/// Registration is permissive: a second registration under the same
/// identity replaces the first (live-reload hosts re-attach widgets), but
/// the collision is logged since it can also hide a duplicate-id authoring
/// mistake.
///
/// # Thread Safety
///
/// Uses `RwLock` since lookups (one per inbound update) vastly outnumber
/// registrations (one per widget lifetime).
pub struct WidgetRegistry {
    widgets: RwLock<HashMap<WidgetIdentity, Arc<dyn WidgetAdapter>>>,
}

impl WidgetRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            widgets: RwLock::new(HashMap::new()),
        }
    }

    /// Register an adapter under a resolved identity.
    ///
    /// The last registration for a given identity wins.
    pub async fn register(&self, identity: WidgetIdentity, adapter: Arc<dyn WidgetAdapter>) {
        let mut widgets = self.widgets.write().await;
        if widgets.insert(identity.clone(), adapter).is_some() {
            tracing::warn!(
                id = %identity,
                "duplicate widget registration, keeping the newest adapter"
            );
        }
    }

    /// Look up the adapter for an identity.
    ///
    /// A miss is not an error; the caller decides whether to log it.
    pub async fn lookup(&self, identity: &WidgetIdentity) -> Option<Arc<dyn WidgetAdapter>> {
        self.widgets.read().await.get(identity).cloned()
    }

    /// Number of registered widgets.
    pub async fn len(&self) -> usize {
        self.widgets.read().await.len()
    }

    /// Whether no widgets are registered.
    pub async fn is_empty(&self) -> bool {
        self.widgets.read().await.is_empty()
    }

    /// All registered identities (for monitoring/debugging).
    pub async fn identities(&self) -> Vec<WidgetIdentity> {
        self.widgets.read().await.keys().cloned().collect()
    }
}

impl Default for WidgetRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ElementState, WidgetKind};

    struct NullAdapter {
        kind: WidgetKind,
    }

    impl WidgetAdapter for NullAdapter {
        fn kind(&self) -> WidgetKind {
            self.kind
        }

        fn apply(&self, _state: &ElementState) {}
    }

    fn adapter(kind: WidgetKind) -> Arc<dyn WidgetAdapter> {
        Arc::new(NullAdapter { kind })
    }

    #[tokio::test]
    async fn register_then_lookup_returns_adapter() {
        let registry = WidgetRegistry::new();
        registry
            .register(WidgetIdentity::new("form.submit"), adapter(WidgetKind::Button))
            .await;

        let found = registry.lookup(&WidgetIdentity::new("form.submit")).await;
        assert!(found.is_some());
        assert_eq!(found.unwrap().kind(), WidgetKind::Button);
    }

    #[tokio::test]
    async fn lookup_unknown_identity_is_a_miss() {
        let registry = WidgetRegistry::new();
        assert!(registry.lookup(&WidgetIdentity::new("ghost")).await.is_none());
    }

    #[tokio::test]
    async fn duplicate_registration_keeps_the_newest() {
        let registry = WidgetRegistry::new();
        let id = WidgetIdentity::new("form.field");

        registry.register(id.clone(), adapter(WidgetKind::Input)).await;
        registry.register(id.clone(), adapter(WidgetKind::Slider)).await;

        assert_eq!(registry.len().await, 1);
        assert_eq!(registry.lookup(&id).await.unwrap().kind(), WidgetKind::Slider);
    }

    #[tokio::test]
    async fn identities_lists_all_registered() {
        let registry = WidgetRegistry::new();
        registry
            .register(WidgetIdentity::new("a"), adapter(WidgetKind::Text))
            .await;
        registry
            .register(WidgetIdentity::new("b"), adapter(WidgetKind::Text))
            .await;

        let mut ids = registry.identities().await;
        ids.sort_by(|l, r| l.as_str().cmp(r.as_str()));
        assert_eq!(ids, vec![WidgetIdentity::new("a"), WidgetIdentity::new("b")]);
    }

    #[tokio::test]
    async fn empty_registry_reports_empty() {
        let registry = WidgetRegistry::new();
        assert!(registry.is_empty().await);
        assert_eq!(registry.len().await, 0);
    }
}
