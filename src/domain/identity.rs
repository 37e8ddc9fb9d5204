//! Widget identity resolution.
//!
//! Widgets are addressed by a globally unique, hierarchical identifier
//! derived from their nesting inside named scope containers. A widget with
//! local id `submit` placed inside scopes named `panel` and `controls`
//! resolves to `"panel.controls.submit"`. Scopes without a name are
//! transparent grouping containers and contribute no segment.
//!
//! Resolution runs once, when a widget is attached; the resulting identity
//! is stable for the widget's lifetime.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Fully resolved, globally unique widget identifier.
///
/// A dot-joined sequence of ancestor scope names followed by the widget's
/// local id, e.g. `"panel.controls.submit"`. Used as the registry key and
/// carried verbatim in every protocol message.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WidgetIdentity(String);

impl WidgetIdentity {
    /// Create an identity from an already-resolved string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Resolve a widget's identity from its local id and ancestor scopes.
    ///
    /// `ancestors` yields the name of every ancestor scope walking from the
    /// widget outward to the root (nearest ancestor first), which is the
    /// order a tree walk naturally produces. Empty names are transparent
    /// and contribute no segment.
    ///
    /// # Example
    ///
    /// ```
    /// use uilink::domain::identity::WidgetIdentity;
    ///
    /// // <scope "a"> <scope "b"> widget "x": the walk yields ["b", "a"]
    /// let id = WidgetIdentity::resolve("x", ["b", "a"]);
    /// assert_eq!(id.as_str(), "a.b.x");
    /// ```
    pub fn resolve<'a, I>(local_id: &str, ancestors: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut names: Vec<&str> = ancestors.into_iter().filter(|name| !name.is_empty()).collect();
        names.reverse();

        if names.is_empty() {
            Self(local_id.to_string())
        } else {
            Self(format!("{}.{}", names.join("."), local_id))
        }
    }

    /// Get the identity as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for WidgetIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for WidgetIdentity {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for WidgetIdentity {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// An ordered chain of named scopes, root first.
///
/// The host-side counterpart of identity resolution: where [`WidgetIdentity::resolve`]
/// walks an existing render tree outward, a `ScopePath` is built top-down by
/// nesting [`ScopePath::child`] calls and then qualifies local ids.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScopePath {
    segments: Vec<String>,
}

impl ScopePath {
    /// The empty path; qualifying through it leaves local ids unchanged.
    pub fn root() -> Self {
        Self::default()
    }

    /// Extend the path with a nested scope name.
    ///
    /// An empty name is transparent: the returned path is unchanged.
    pub fn child(&self, name: &str) -> Self {
        let mut segments = self.segments.clone();
        if !name.is_empty() {
            segments.push(name.to_string());
        }
        Self { segments }
    }

    /// Resolve a local id into a full identity under this path.
    pub fn qualify(&self, local_id: &str) -> WidgetIdentity {
        if self.segments.is_empty() {
            WidgetIdentity::new(local_id)
        } else {
            WidgetIdentity::new(format!("{}.{}", self.segments.join("."), local_id))
        }
    }

    /// Whether this is the root (empty) path.
    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }
}

impl fmt::Display for ScopePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.segments.join("."))
    }
}
