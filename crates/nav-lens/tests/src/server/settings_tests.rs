use serde_json::json;

use super::*;

#[test]
fn defaults_match_documented_values() {
    let settings = ServerSettings::from_lsp_payload(None);
    assert!(settings.enable_overlay_actions);
    assert!(settings.enable_hover_overlay);
    assert_eq!(settings.log_level, LogLevel::Info);
    assert!(settings.refresh_on_edit);
    assert_eq!(settings.refresh_debounce_ms, 120);
    assert_eq!(settings.refresh_debounce(), Duration::from_millis(120));
    assert_eq!(settings.language_id, "go");
}

#[test]
fn parses_namespaced_payload() {
    let payload = json!({
        "navLens": {
            "enableOverlayActions": false,
            "enableHoverOverlay": false,
            "logLevel": "debug",
            "refreshOnEdit": false,
            "refreshDebounceMs": 300,
            "languageId": "rust"
        }
    });

    let settings = ServerSettings::from_lsp_payload(Some(&payload));
    assert!(!settings.enable_overlay_actions);
    assert!(!settings.enable_hover_overlay);
    assert_eq!(settings.log_level, LogLevel::Debug);
    assert!(!settings.refresh_on_edit);
    assert_eq!(settings.refresh_debounce_ms, 300);
    assert_eq!(settings.language_id, "rust");
}

#[test]
fn parses_direct_payload() {
    let payload = json!({
        "enableHoverOverlay": false,
        "logLevel": "warn"
    });

    let settings = ServerSettings::from_lsp_payload(Some(&payload));
    assert!(settings.enable_overlay_actions);
    assert!(!settings.enable_hover_overlay);
    assert_eq!(settings.log_level, LogLevel::Warn);
}

#[test]
fn blank_language_falls_back_to_default() {
    let settings = ServerSettings::from_lsp_payload(Some(&json!({ "languageId": "   " })));
    assert_eq!(settings.language_id, DEFAULT_LANGUAGE_ID);

    let settings = ServerSettings::from_lsp_payload(Some(&json!({ "languageId": "  rust " })));
    assert_eq!(settings.language_id, "rust");
}

#[test]
fn long_debounce_is_kept_as_given() {
    let settings = ServerSettings::from_lsp_payload(Some(&json!({ "refreshDebounceMs": 60_000 })));
    assert_eq!(settings.refresh_debounce_ms, 60_000);
    assert_eq!(settings.refresh_debounce(), Duration::from_secs(60));
}

#[test]
fn zero_debounce_is_allowed() {
    let settings = ServerSettings::from_lsp_payload(Some(&json!({ "refreshDebounceMs": 0 })));
    assert_eq!(settings.refresh_debounce_ms, 0);
}

#[test]
fn preserves_existing_values_when_payload_is_partial() {
    let base = ServerSettings {
        language_id: "python".to_string(),
        refresh_debounce_ms: 40,
        ..ServerSettings::default()
    };

    let merged = base.merged_with_payload(&json!({ "navLens": { "refreshOnEdit": false } }));
    assert_eq!(merged.language_id, "python");
    assert_eq!(merged.refresh_debounce_ms, 40);
    assert!(!merged.refresh_on_edit);
}

#[test]
fn unrelated_payload_leaves_settings_unchanged() {
    let base = ServerSettings::default();
    let merged = base.merged_with_payload(&json!({ "gopls": { "usePlaceholders": true } }));
    assert_eq!(merged, base);
}

#[test]
fn malformed_values_are_ignored() {
    let base = ServerSettings::default();
    let merged = base.merged_with_payload(&json!({ "navLens": { "refreshDebounceMs": -5, "logLevel": "loud" } }));
    assert_eq!(merged, base);
}

#[test]
fn malformed_value_does_not_drop_valid_neighbours() {
    let base = ServerSettings::default();
    let merged = base.merged_with_payload(&json!({
        "navLens": {
            "enableHoverOverlay": false,
            "logLevel": "trace",
            "refreshDebounceMs": "fast",
            "refreshOnEdit": false
        }
    }));

    assert!(!merged.enable_hover_overlay);
    assert!(!merged.refresh_on_edit);
    assert_eq!(merged.log_level, base.log_level);
    assert_eq!(merged.refresh_debounce_ms, base.refresh_debounce_ms);
}

#[test]
fn null_value_keeps_current_setting() {
    let base = ServerSettings {
        enable_overlay_actions: false,
        ..ServerSettings::default()
    };
    let merged = base.merged_with_payload(&json!({ "navLens": { "enableOverlayActions": null } }));
    assert_eq!(merged, base);
}

#[test]
fn log_levels_are_ordered_by_verbosity() {
    assert!(LogLevel::Error < LogLevel::Warn);
    assert!(LogLevel::Info < LogLevel::Debug);
    assert!(!LogLevel::Warn.allows_info());
    assert!(LogLevel::Debug.allows_info());
    assert_eq!(LogLevel::Debug.as_str(), "debug");
}
