//! Property tests for the anchored-suffix matching rule
use proptest::prelude::*;
use widget_explorer_lib::DocScraper;
use widget_explorer_lib::infrastructure::doc_scraper::anchor_matches;

fn page_with_anchor(id: &str) -> String {
    format!(
        r#"<html><body><dl class="method"><dt id="{id}">sig</dt><dd>body</dd></dl></body></html>"#
    )
}

proptest! {
    #[test]
    fn dot_qualified_member_matches(name in "[a-zA-Z_][a-zA-Z0-9_]{0,15}") {
        let id = format!("PySide2.QtWidgets.PySide2.QtWidgets.QWidget.{name}");
        prop_assert!(anchor_matches(&id, &name));

        let scraper = DocScraper::new([page_with_anchor(&id)]);
        let html = scraper.get_doc(&name);
        prop_assert!(html.is_some());
        prop_assert!(html.unwrap_or_default().starts_with(r#"<dl class="method">"#));
    }

    #[test]
    fn proper_suffix_without_dot_never_matches(
        prefix in "[a-zA-Z0-9_]{1,8}",
        name in "[a-zA-Z_][a-zA-Z0-9_]{0,15}",
    ) {
        let id = format!("PySide2.QtWidgets.PySide2.QtWidgets.QWidget.{prefix}{name}");
        prop_assert!(!anchor_matches(&id, &name));

        let scraper = DocScraper::new([page_with_anchor(&id)]);
        prop_assert_eq!(scraper.get_doc(&name), None);
        let full = format!("{prefix}{name}");
        prop_assert!(scraper.get_doc(&full).is_some());
    }
}
