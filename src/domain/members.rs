//! Member classification for the explorer's member list
//!
//! Members are classified from the capabilities the introspection layer reports,
//! never from their names.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// What the introspection layer knows about a member value
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MemberCapabilities {
    /// The member's value is itself a type (enumerations, nested classes)
    pub is_type_valued: bool,
    /// The member can be called
    pub is_invocable: bool,
    /// The member is a signal the object can emit
    pub is_event: bool,
}

impl MemberCapabilities {
    pub const CONSTANT: Self = Self {
        is_type_valued: false,
        is_invocable: false,
        is_event: false,
    };
    pub const ENUMERATION: Self = Self {
        is_type_valued: true,
        is_invocable: false,
        is_event: false,
    };
    pub const METHOD: Self = Self {
        is_type_valued: false,
        is_invocable: true,
        is_event: false,
    };
    pub const EVENT: Self = Self {
        is_type_valued: false,
        is_invocable: false,
        is_event: true,
    };
}

/// Display group of a member
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum MemberKind {
    Constant,
    Enumeration,
    Event,
    Method,
}

impl MemberKind {
    /// Classify a member. Events win over everything else since signal objects are
    /// also invocable in most bindings; type-valued members win over invocable ones.
    pub const fn classify(caps: MemberCapabilities) -> Self {
        if caps.is_event {
            Self::Event
        } else if caps.is_type_valued {
            Self::Enumeration
        } else if caps.is_invocable {
            Self::Method
        } else {
            Self::Constant
        }
    }

    /// Section heading used by the member list
    pub const fn heading(self) -> &'static str {
        match self {
            Self::Constant => "Constants",
            Self::Enumeration => "Enumerations",
            Self::Event => "Signals",
            Self::Method => "Methods",
        }
    }

    pub const ALL: [Self; 4] = [Self::Constant, Self::Enumeration, Self::Event, Self::Method];
}

impl fmt::Display for MemberKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.heading())
    }
}

/// A member as reported by the introspection layer
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MemberInfo {
    pub name: String,
    pub capabilities: MemberCapabilities,
}

impl MemberInfo {
    pub fn new(name: impl Into<String>, capabilities: MemberCapabilities) -> Self {
        Self {
            name: name.into(),
            capabilities,
        }
    }

    pub const fn kind(&self) -> MemberKind {
        MemberKind::classify(self.capabilities)
    }
}

/// Members grouped by kind, names sorted and unique within each group
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberTable {
    pub constants: BTreeSet<String>,
    pub enumerations: BTreeSet<String>,
    pub events: BTreeSet<String>,
    pub methods: BTreeSet<String>,
}

impl MemberTable {
    pub fn from_members<I>(members: I) -> Self
    where
        I: IntoIterator<Item = MemberInfo>,
    {
        let mut table = Self::default();
        for member in members {
            table.insert(member);
        }
        table
    }

    pub fn insert(&mut self, member: MemberInfo) {
        let kind = member.kind();
        self.group_mut(kind).insert(member.name);
    }

    pub const fn group(&self, kind: MemberKind) -> &BTreeSet<String> {
        match kind {
            MemberKind::Constant => &self.constants,
            MemberKind::Enumeration => &self.enumerations,
            MemberKind::Event => &self.events,
            MemberKind::Method => &self.methods,
        }
    }

    const fn group_mut(&mut self, kind: MemberKind) -> &mut BTreeSet<String> {
        match kind {
            MemberKind::Constant => &mut self.constants,
            MemberKind::Enumeration => &mut self.enumerations,
            MemberKind::Event => &mut self.events,
            MemberKind::Method => &mut self.methods,
        }
    }

    pub fn len(&self) -> usize {
        MemberKind::ALL.iter().map(|kind| self.group(*kind).len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterate `(kind, name)` in display order: constants, enumerations, signals, methods.
    pub fn iter(&self) -> impl Iterator<Item = (MemberKind, &str)> {
        MemberKind::ALL.into_iter().flat_map(move |kind| {
            self.group(kind).iter().map(move |name| (kind, name.as_str()))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(MemberCapabilities::CONSTANT, MemberKind::Constant)]
    #[case(MemberCapabilities::ENUMERATION, MemberKind::Enumeration)]
    #[case(MemberCapabilities::METHOD, MemberKind::Method)]
    #[case(MemberCapabilities::EVENT, MemberKind::Event)]
    #[case(MemberCapabilities { is_type_valued: false, is_invocable: true, is_event: true }, MemberKind::Event)]
    #[case(MemberCapabilities { is_type_valued: true, is_invocable: true, is_event: false }, MemberKind::Enumeration)]
    fn test_classify(#[case] caps: MemberCapabilities, #[case] expected: MemberKind) {
        assert_eq!(MemberKind::classify(caps), expected);
    }

    #[test]
    fn test_table_groups_and_orders() {
        let table = MemberTable::from_members(vec![
            MemberInfo::new("setEditable", MemberCapabilities::METHOD),
            MemberInfo::new("currentIndexChanged", MemberCapabilities::EVENT),
            MemberInfo::new("InsertPolicy", MemberCapabilities::ENUMERATION),
            MemberInfo::new("addItem", MemberCapabilities::METHOD),
            MemberInfo::new("staticMetaObject", MemberCapabilities::CONSTANT),
            MemberInfo::new("addItem", MemberCapabilities::METHOD),
        ]);

        assert_eq!(table.len(), 5);
        let flat: Vec<(MemberKind, &str)> = table.iter().collect();
        assert_eq!(
            flat,
            vec![
                (MemberKind::Constant, "staticMetaObject"),
                (MemberKind::Enumeration, "InsertPolicy"),
                (MemberKind::Event, "currentIndexChanged"),
                (MemberKind::Method, "addItem"),
                (MemberKind::Method, "setEditable"),
            ]
        );
    }

    #[test]
    fn test_empty_table() {
        let table = MemberTable::default();
        assert!(table.is_empty());
        assert_eq!(table.iter().count(), 0);
    }
}
