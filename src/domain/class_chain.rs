//! Class descriptors and ancestor chains
//!
//! A `ClassChain` is the method-resolution order of a runtime type, most-derived
//! class first. Objects expose their chain through the `Introspect` collaborator
//! trait so the documentation resolver never depends on a concrete toolkit binding.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A class as seen by the documentation resolver: where it is declared and its name
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ClassDescriptor {
    /// Dotted module path the class is declared in (e.g. `PySide2.QtWidgets`)
    pub namespace: String,
    /// Simple class name (e.g. `QWidget`)
    pub name: String,
}

impl ClassDescriptor {
    pub fn new(namespace: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            name: name.into(),
        }
    }

    /// Fully qualified dotted name, `namespace.name`
    pub fn qualified_name(&self) -> String {
        format!("{}.{}", self.namespace, self.name)
    }

    /// True if the class is declared strictly below `root` (`root.Something...`).
    pub fn is_under_namespace(&self, root: &str) -> bool {
        self.namespace
            .strip_prefix(root)
            .is_some_and(|rest| rest.starts_with('.') && rest.len() > 1)
    }

    /// Namespace with the `root.` prefix removed, or `None` when not under `root`.
    pub fn relative_namespace(&self, root: &str) -> Option<&str> {
        if !self.is_under_namespace(root) {
            return None;
        }
        self.namespace.get(root.len() + 1..)
    }
}

impl fmt::Display for ClassDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.namespace, self.name)
    }
}

/// Ordered ancestor chain, most-derived first
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassChain(Vec<ClassDescriptor>);

impl ClassChain {
    pub fn new(classes: Vec<ClassDescriptor>) -> Self {
        Self(classes)
    }

    /// Keep only classes declared under `root`, preserving order.
    pub fn restricted_to(&self, root: &str) -> Self {
        Self(
            self.0
                .iter()
                .filter(|class| class.is_under_namespace(root))
                .cloned()
                .collect(),
        )
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ClassDescriptor> {
        self.0.iter()
    }

    /// The most-derived class, i.e. the object's exact type
    pub fn most_derived(&self) -> Option<&ClassDescriptor> {
        self.0.first()
    }

    pub fn as_slice(&self) -> &[ClassDescriptor] {
        &self.0
    }
}

impl From<Vec<ClassDescriptor>> for ClassChain {
    fn from(classes: Vec<ClassDescriptor>) -> Self {
        Self(classes)
    }
}

impl IntoIterator for ClassChain {
    type Item = ClassDescriptor;
    type IntoIter = std::vec::IntoIter<ClassDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a ClassChain {
    type Item = &'a ClassDescriptor;
    type IntoIter = std::slice::Iter<'a, ClassDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Runtime introspection of an explored object.
///
/// Implemented by whatever wraps a live toolkit object. `class_chain` must return
/// the linearized ancestors, the object's own class first, each exactly once.
pub trait Introspect {
    fn class_chain(&self) -> ClassChain;

    /// Members visible on the object, with the capabilities used to classify them.
    fn members(&self) -> Vec<crate::domain::members::MemberInfo> {
        Vec::new()
    }
}
