//! End-to-end exploration over an in-memory documentation site
use widget_explorer_lib::domain::{MemberInfo, MemberKind, pyside2_registry};
use widget_explorer_lib::infrastructure::StaticDocumentSource;
use widget_explorer_lib::{ClassChain, ClassDescriptor, DocSite, ExplorerSession, Introspect};

const COMBO_BOX_URL: &str = "https://doc.qt.io/qtforpython/PySide2/QtWidgets/QComboBox.html";
const WIDGET_URL: &str = "https://doc.qt.io/qtforpython/PySide2/QtWidgets/QWidget.html";

fn site() -> StaticDocumentSource {
    StaticDocumentSource::new()
        .with_page(COMBO_BOX_URL, include_str!("fixtures/QComboBox.html"))
        .with_page(WIDGET_URL, include_str!("fixtures/QWidget.html"))
}

#[tokio::test]
async fn combo_box_session_falls_back_to_widget_page() {
    let registry = pyside2_registry().expect("catalog");
    let combo = registry.instantiate("QComboBox").expect("QComboBox registered");

    let session = ExplorerSession::open(&combo, &DocSite::default(), &site()).await;

    assert_eq!(
        session.doc_urls(),
        &[
            COMBO_BOX_URL.to_string(),
            WIDGET_URL.to_string(),
            "https://doc.qt.io/qtforpython/PySide2/QtCore/QObject.html".to_string(),
            "https://doc.qt.io/qtforpython/PySide2/QtGui/QPaintDevice.html".to_string(),
        ]
    );
    assert_eq!(session.loaded_urls(), &[COMBO_BOX_URL.to_string(), WIDGET_URL.to_string()]);

    assert!(session.doc_for("duplicatesEnabled").is_some());
    assert!(session.doc_for("acceptDrops").is_some());
    assert_eq!(session.doc_for("doesNotExist"), None);

    let members = session.members();
    assert!(members.group(MemberKind::Method).contains("duplicatesEnabled"));
    assert!(members.group(MemberKind::Event).contains("currentIndexChanged"));
}

/// An object outside the catalog, described through the introspection trait only
struct ScriptedWidget;

impl Introspect for ScriptedWidget {
    fn class_chain(&self) -> ClassChain {
        ClassChain::new(vec![
            ClassDescriptor::new("__main__", "ColorCombo"),
            ClassDescriptor::new("PySide2.QtWidgets", "QComboBox"),
            ClassDescriptor::new("PySide2.QtWidgets", "QWidget"),
            ClassDescriptor::new("builtins", "object"),
        ])
    }

    fn members(&self) -> Vec<MemberInfo> {
        vec![MemberInfo::new(
            "colorChosen",
            widget_explorer_lib::domain::MemberCapabilities::EVENT,
        )]
    }
}

#[tokio::test]
async fn custom_introspection_object() {
    let mut session = ExplorerSession::open(&ScriptedWidget, &DocSite::default(), &site()).await;

    assert_eq!(session.doc_urls(), &[COMBO_BOX_URL.to_string(), WIDGET_URL.to_string()]);
    assert_eq!(session.documents_loaded(), 2);
    assert!(session.members().group(MemberKind::Event).contains("colorChosen"));

    session.record_signal("colorChosen", &["#ff0000"]);
    assert_eq!(session.signal_log().entries(), &["colorChosen(#ff0000)".to_string()]);
}

#[tokio::test]
async fn unreachable_site_still_opens() {
    let registry = pyside2_registry().expect("catalog");
    let label = registry.instantiate("QLabel").expect("QLabel registered");

    let session =
        ExplorerSession::open(&label, &DocSite::default(), &StaticDocumentSource::new()).await;

    assert_eq!(session.doc_urls().len(), 5);
    assert_eq!(session.documents_loaded(), 0);
    assert_eq!(session.doc_for("setText"), None);
}
