//! Built-in PySide2 class catalog
//!
//! Declares the widget classes the explorer is usually pointed at, with the same
//! base lists and module paths the PySide2 bindings report at runtime, so that their
//! linearized chains match what a live object would produce.

use crate::domain::class_chain::ClassDescriptor;
use crate::domain::hierarchy::TypeRegistry;
use crate::domain::members::{MemberCapabilities, MemberInfo};
use crate::error::DocResult;

const C: MemberCapabilities = MemberCapabilities::CONSTANT;
const E: MemberCapabilities = MemberCapabilities::ENUMERATION;
const S: MemberCapabilities = MemberCapabilities::EVENT;
const M: MemberCapabilities = MemberCapabilities::METHOD;

struct CatalogEntry {
    namespace: &'static str,
    name: &'static str,
    bases: &'static [&'static str],
    members: &'static [(&'static str, MemberCapabilities)],
}

// Entries are ordered so that every base precedes its subclasses.
const CATALOG: &[CatalogEntry] = &[
    CatalogEntry {
        namespace: "builtins",
        name: "object",
        bases: &[],
        members: &[],
    },
    CatalogEntry {
        namespace: "Shiboken",
        name: "Object",
        bases: &["builtins.object"],
        members: &[],
    },
    CatalogEntry {
        namespace: "PySide2.QtCore",
        name: "QObject",
        bases: &["Shiboken.Object"],
        members: &[
            ("staticMetaObject", C),
            ("destroyed", S),
            ("objectNameChanged", S),
            ("blockSignals", M),
            ("children", M),
            ("deleteLater", M),
            ("installEventFilter", M),
            ("objectName", M),
            ("parent", M),
            ("setObjectName", M),
            ("setParent", M),
        ],
    },
    CatalogEntry {
        namespace: "PySide2.QtGui",
        name: "QPaintDevice",
        bases: &["Shiboken.Object"],
        members: &[
            ("PaintDeviceMetric", E),
            ("depth", M),
            ("devicePixelRatio", M),
            ("height", M),
            ("width", M),
        ],
    },
    CatalogEntry {
        namespace: "PySide2.QtWidgets",
        name: "QWidget",
        bases: &["PySide2.QtCore.QObject", "PySide2.QtGui.QPaintDevice"],
        members: &[
            ("RenderFlag", E),
            ("customContextMenuRequested", S),
            ("windowIconChanged", S),
            ("windowTitleChanged", S),
            ("acceptDrops", M),
            ("adjustSize", M),
            ("close", M),
            ("hide", M),
            ("isEnabled", M),
            ("setAcceptDrops", M),
            ("setEnabled", M),
            ("setParent", M),
            ("show", M),
            ("update", M),
        ],
    },
    CatalogEntry {
        namespace: "PySide2.QtWidgets",
        name: "QFrame",
        bases: &["PySide2.QtWidgets.QWidget"],
        members: &[
            ("Shadow", E),
            ("Shape", E),
            ("frameShape", M),
            ("lineWidth", M),
            ("setFrameShape", M),
        ],
    },
    CatalogEntry {
        namespace: "PySide2.QtWidgets",
        name: "QAbstractScrollArea",
        bases: &["PySide2.QtWidgets.QFrame"],
        members: &[
            ("SizeAdjustPolicy", E),
            ("horizontalScrollBar", M),
            ("verticalScrollBar", M),
            ("viewport", M),
        ],
    },
    CatalogEntry {
        namespace: "PySide2.QtWidgets",
        name: "QTextEdit",
        bases: &["PySide2.QtWidgets.QAbstractScrollArea"],
        members: &[
            ("LineWrapMode", E),
            ("copyAvailable", S),
            ("textChanged", S),
            ("append", M),
            ("clear", M),
            ("isReadOnly", M),
            ("setReadOnly", M),
            ("toPlainText", M),
        ],
    },
    CatalogEntry {
        namespace: "PySide2.QtWidgets",
        name: "QLabel",
        bases: &["PySide2.QtWidgets.QFrame"],
        members: &[
            ("linkActivated", S),
            ("linkHovered", S),
            ("setText", M),
            ("text", M),
            ("wordWrap", M),
        ],
    },
    CatalogEntry {
        namespace: "PySide2.QtWidgets",
        name: "QAbstractButton",
        bases: &["PySide2.QtWidgets.QWidget"],
        members: &[
            ("clicked", S),
            ("pressed", S),
            ("released", S),
            ("toggled", S),
            ("click", M),
            ("isCheckable", M),
            ("setText", M),
            ("text", M),
        ],
    },
    CatalogEntry {
        namespace: "PySide2.QtWidgets",
        name: "QPushButton",
        bases: &["PySide2.QtWidgets.QAbstractButton"],
        members: &[
            ("autoDefault", M),
            ("isDefault", M),
            ("setAutoDefault", M),
            ("setDefault", M),
        ],
    },
    CatalogEntry {
        namespace: "PySide2.QtWidgets",
        name: "QComboBox",
        bases: &["PySide2.QtWidgets.QWidget"],
        members: &[
            ("InsertPolicy", E),
            ("SizeAdjustPolicy", E),
            ("activated", S),
            ("currentIndexChanged", S),
            ("currentTextChanged", S),
            ("editTextChanged", S),
            ("highlighted", S),
            ("addItem", M),
            ("count", M),
            ("currentIndex", M),
            ("duplicatesEnabled", M),
            ("isEditable", M),
            ("setDuplicatesEnabled", M),
            ("setEditable", M),
        ],
    },
    CatalogEntry {
        namespace: "PySide2.QtWidgets",
        name: "QLineEdit",
        bases: &["PySide2.QtWidgets.QWidget"],
        members: &[
            ("EchoMode", E),
            ("editingFinished", S),
            ("returnPressed", S),
            ("textEdited", S),
            ("setPlaceholderText", M),
            ("setText", M),
            ("text", M),
        ],
    },
    CatalogEntry {
        namespace: "PySide2.QtWidgets",
        name: "QDialog",
        bases: &["PySide2.QtWidgets.QWidget"],
        members: &[
            ("DialogCode", E),
            ("accepted", S),
            ("finished", S),
            ("rejected", S),
            ("accept", M),
            ("exec_", M),
            ("reject", M),
        ],
    },
    CatalogEntry {
        namespace: "PySide2.QtWidgets",
        name: "QLayoutItem",
        bases: &["Shiboken.Object"],
        members: &[("alignment", M), ("geometry", M), ("sizeHint", M)],
    },
    CatalogEntry {
        namespace: "PySide2.QtWidgets",
        name: "QLayout",
        bases: &["PySide2.QtCore.QObject", "PySide2.QtWidgets.QLayoutItem"],
        members: &[
            ("SizeConstraint", E),
            ("addWidget", M),
            ("count", M),
            ("setContentsMargins", M),
            ("setMargin", M),
            ("setSpacing", M),
        ],
    },
    CatalogEntry {
        namespace: "PySide2.QtWidgets",
        name: "QBoxLayout",
        bases: &["PySide2.QtWidgets.QLayout"],
        members: &[
            ("Direction", E),
            ("addLayout", M),
            ("addSpacing", M),
            ("addStretch", M),
        ],
    },
    CatalogEntry {
        namespace: "PySide2.QtWidgets",
        name: "QHBoxLayout",
        bases: &["PySide2.QtWidgets.QBoxLayout"],
        members: &[],
    },
    CatalogEntry {
        namespace: "PySide2.QtWidgets",
        name: "QVBoxLayout",
        bases: &["PySide2.QtWidgets.QBoxLayout"],
        members: &[],
    },
];

/// Registry holding every catalog class
pub fn pyside2_registry() -> DocResult<TypeRegistry> {
    let mut registry = TypeRegistry::new();
    for entry in CATALOG {
        let members = entry
            .members
            .iter()
            .map(|(name, caps)| MemberInfo::new(*name, *caps))
            .collect();
        registry.register(
            ClassDescriptor::new(entry.namespace, entry.name),
            entry.bases,
            members,
        )?;
    }
    Ok(registry)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::class_chain::Introspect;
    use crate::domain::members::{MemberKind, MemberTable};

    fn chain_names(registry: &TypeRegistry, class: &str) -> Vec<String> {
        registry
            .mro(class)
            .unwrap()
            .iter()
            .map(ClassDescriptor::qualified_name)
            .collect()
    }

    #[test]
    fn test_catalog_builds() {
        let registry = pyside2_registry().unwrap();
        assert_eq!(registry.len(), CATALOG.len());
    }

    #[test]
    fn test_widget_chain_matches_bindings() {
        let registry = pyside2_registry().unwrap();
        assert_eq!(
            chain_names(&registry, "QWidget"),
            vec![
                "PySide2.QtWidgets.QWidget",
                "PySide2.QtCore.QObject",
                "PySide2.QtGui.QPaintDevice",
                "Shiboken.Object",
                "builtins.object",
            ]
        );
    }

    #[test]
    fn test_layout_chain_multiple_inheritance() {
        let registry = pyside2_registry().unwrap();
        assert_eq!(
            chain_names(&registry, "QHBoxLayout"),
            vec![
                "PySide2.QtWidgets.QHBoxLayout",
                "PySide2.QtWidgets.QBoxLayout",
                "PySide2.QtWidgets.QLayout",
                "PySide2.QtCore.QObject",
                "PySide2.QtWidgets.QLayoutItem",
                "Shiboken.Object",
                "builtins.object",
            ]
        );
    }

    #[test]
    fn test_combo_box_members_include_inherited() {
        let registry = pyside2_registry().unwrap();
        let combo = registry.instantiate("QComboBox").unwrap();
        let table = MemberTable::from_members(combo.members());

        assert!(table.group(MemberKind::Method).contains("duplicatesEnabled"));
        assert!(table.group(MemberKind::Method).contains("acceptDrops"));
        assert!(table.group(MemberKind::Event).contains("currentIndexChanged"));
        assert!(table.group(MemberKind::Event).contains("destroyed"));
        assert!(table.group(MemberKind::Enumeration).contains("InsertPolicy"));
        assert!(table.group(MemberKind::Constant).contains("staticMetaObject"));
    }
}
