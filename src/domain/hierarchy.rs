//! Class hierarchy registry with C3 linearization
//!
//! Classes are registered with their direct bases (which must already be known), and
//! the method-resolution order is computed once at registration. A hierarchy that
//! admits no consistent order is rejected there, so every registered class has a
//! valid chain afterwards.

use crate::domain::class_chain::{ClassChain, ClassDescriptor, Introspect};
use crate::domain::members::MemberInfo;
use crate::error::{DocError, DocResult};
use std::collections::HashMap;
use tracing::debug;

#[derive(Debug, Clone)]
struct ClassDef {
    descriptor: ClassDescriptor,
    members: Vec<MemberInfo>,
    /// Qualified names, own class first
    linearization: Vec<String>,
}

/// Known classes keyed by qualified name (`namespace.Name`)
#[derive(Debug, Clone, Default)]
pub struct TypeRegistry {
    classes: HashMap<String, ClassDef>,
    /// Simple name -> qualified name, for convenience lookups
    simple_names: HashMap<String, String>,
}

impl TypeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a class. `bases` are qualified names in declaration order.
    pub fn register(
        &mut self,
        descriptor: ClassDescriptor,
        bases: &[&str],
        members: Vec<MemberInfo>,
    ) -> DocResult<()> {
        let qualified = descriptor.qualified_name();
        if self.classes.contains_key(&qualified) {
            return Err(DocError::DuplicateClass { name: qualified });
        }

        let mut sequences = Vec::with_capacity(bases.len() + 1);
        for base in bases {
            let def = self
                .classes
                .get(*base)
                .ok_or_else(|| DocError::unknown_class(base))?;
            sequences.push(def.linearization.clone());
        }
        sequences.push(bases.iter().map(|b| (*b).to_string()).collect());

        let mut linearization = vec![qualified.clone()];
        linearization.extend(c3_merge(sequences).ok_or_else(|| {
            DocError::InconsistentHierarchy {
                class: qualified.clone(),
            }
        })?);

        debug!("Registered {} with MRO {:?}", qualified, linearization);

        self.simple_names
            .entry(descriptor.name.clone())
            .or_insert_with(|| qualified.clone());
        self.classes.insert(
            qualified,
            ClassDef {
                descriptor,
                members,
                linearization,
            },
        );
        Ok(())
    }

    /// Resolve a qualified name, or a simple name if it is unambiguous enough to have
    /// been registered first.
    fn resolve(&self, name: &str) -> DocResult<(&str, &ClassDef)> {
        self.classes
            .get_key_value(name)
            .or_else(|| {
                self.simple_names
                    .get(name)
                    .and_then(|qualified| self.classes.get_key_value(qualified))
            })
            .map(|(qualified, def)| (qualified.as_str(), def))
            .ok_or_else(|| DocError::unknown_class(name))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.resolve(name).is_ok()
    }

    /// Method-resolution order of a class, most-derived first
    pub fn mro(&self, name: &str) -> DocResult<ClassChain> {
        let (_, def) = self.resolve(name)?;
        Ok(self.chain_of(def))
    }

    fn chain_of(&self, def: &ClassDef) -> ClassChain {
        def.linearization
            .iter()
            .filter_map(|qualified| self.classes.get(qualified))
            .map(|ancestor| ancestor.descriptor.clone())
            .collect::<Vec<_>>()
            .into()
    }

    /// Create a runtime object of a registered class.
    pub fn instantiate(&self, name: &str) -> DocResult<Instance<'_>> {
        let (qualified, _) = self.resolve(name)?;
        Ok(Instance {
            registry: self,
            qualified,
        })
    }

    /// Simple names of all registered classes, sorted
    pub fn class_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self
            .classes
            .values()
            .map(|def| def.descriptor.name.as_str())
            .collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}

/// C3 merge; `None` when no consistent order exists.
fn c3_merge(mut sequences: Vec<Vec<String>>) -> Option<Vec<String>> {
    let mut result = Vec::new();
    loop {
        sequences.retain(|seq| !seq.is_empty());
        if sequences.is_empty() {
            return Some(result);
        }

        let candidate = sequences.iter().map(|seq| &seq[0]).find(|head| {
            !sequences
                .iter()
                .any(|seq| seq.iter().skip(1).any(|entry| entry == *head))
        })?;
        let candidate = candidate.clone();

        for seq in &mut sequences {
            if seq.first() == Some(&candidate) {
                seq.remove(0);
            }
        }
        result.push(candidate);
    }
}

/// A live object of a registered class
#[derive(Debug, Clone, Copy)]
pub struct Instance<'r> {
    registry: &'r TypeRegistry,
    qualified: &'r str,
}

impl Instance<'_> {
    pub const fn class_name(&self) -> &str {
        self.qualified
    }
}

impl Introspect for Instance<'_> {
    fn class_chain(&self) -> ClassChain {
        self.registry
            .classes
            .get(self.qualified)
            .map(|def| self.registry.chain_of(def))
            .unwrap_or_default()
    }

    fn members(&self) -> Vec<MemberInfo> {
        let Some(def) = self.registry.classes.get(self.qualified) else {
            return Vec::new();
        };
        def.linearization
            .iter()
            .filter_map(|qualified| self.registry.classes.get(qualified))
            .flat_map(|ancestor| ancestor.members.iter().cloned())
            .collect()
    }
}
