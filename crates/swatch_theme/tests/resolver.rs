use std::path::PathBuf;
use std::sync::Arc;

use pretty_assertions::assert_eq;
use swatch_theme::{
    Diagnostics, MissReason, TokenCategory, TokenDocument, TokenError, TokenResolver,
};

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

#[test]
fn primary_palette_scenario() {
    let tokens =
        TokenResolver::from_json_str(r##"{ "colors": { "primary": { "500": "#3b82f6" } } }"##)
            .unwrap();

    assert_eq!(tokens.resolve_color("primary", None), "#3b82f6");
    assert!(tokens.diagnostics().is_empty());

    assert_eq!(tokens.resolve_color("primary", Some("700")), "");
    let misses = tokens.diagnostics().take();
    assert_eq!(misses.len(), 1);
    assert_eq!(misses[0].path, "colors.primary.700");
    assert_eq!(
        misses[0].reason,
        MissReason::MissingSegment {
            segment: "700".to_string()
        }
    );
}

#[test]
fn every_embedded_leaf_resolves_to_itself() {
    let tokens = TokenResolver::embedded();
    let entries = tokens.document().entries();
    assert!(!entries.is_empty());

    for (path, value) in entries {
        assert_eq!(tokens.resolve_path(&path), value, "path {path}");
    }
    assert!(tokens.diagnostics().is_empty());
}

#[test]
fn toml_fixture_loads_from_disk() {
    let document = TokenDocument::load(fixture("brand.toml")).unwrap();
    let tokens = TokenResolver::new(Arc::new(document));

    assert_eq!(tokens.primary_color(None), "#8b5cf6");
    assert_eq!(tokens.resolve_color("neutral", Some("white")), "#ffffff");
    assert_eq!(tokens.resolve_font_family("sans"), "Geist, system-ui, sans-serif");
    assert_eq!(tokens.resolve_spacing(2), "8px");
    assert_eq!(tokens.resolve_z_index("modal"), "1300");

    // Categories the override set leaves out degrade instead of failing.
    assert_eq!(tokens.resolve_shadow("sm"), "");
    assert_eq!(tokens.diagnostics().len(), 1);
    assert!(tokens.document().category(TokenCategory::Shadows).is_none());
}

#[test]
fn missing_file_reports_the_path() {
    let path = fixture("does-not-exist.json");
    match TokenDocument::load(&path) {
        Err(TokenError::Io { path: reported, .. }) => assert_eq!(reported, path),
        other => panic!("expected an io error, got {other:?}"),
    }
}

#[test]
fn resolvers_can_share_a_log() {
    let log = Diagnostics::new();
    let document = TokenDocument::embedded();
    let a = TokenResolver::with_diagnostics(document.clone(), log.clone());
    let b = TokenResolver::with_diagnostics(document, log.clone());

    a.resolve_spacing(7);
    b.resolve_border_radius("huge");

    assert_eq!(log.len(), 2);
    assert_eq!(log.count_for("spacing.7"), 1);
    assert_eq!(log.count_for("borderRadius.huge"), 1);
}
