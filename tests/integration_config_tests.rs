use bible_verse::core::config::AppConfig;
use bible_verse::telex::build_integration_config;
use bible_verse::verse::SourceCategory;
use chrono::NaiveDate;
use pretty_assertions::assert_eq;

fn config() -> AppConfig {
    AppConfig {
        base_url: "https://verse.example.com".to_string(),
        logo_url: "https://cdn.example.com/logo.png".to_string(),
        ..AppConfig::default()
    }
}

#[test]
fn test_descriptions_use_configured_urls() {
    let date = NaiveDate::from_ymd_opt(2026, 10, 18).unwrap();
    let doc = build_integration_config(&config(), date);

    assert_eq!(doc.data.date.created_at, "Feb 21, 2025");
    assert_eq!(doc.data.date.updated_at, "2026-10-18");
    assert_eq!(doc.data.descriptions.app_logo, "https://cdn.example.com/logo.png");
    assert_eq!(doc.data.descriptions.app_url, "https://verse.example.com");
    assert_eq!(doc.data.tick_url, "https://verse.example.com/bible-verse/tick");
    assert_eq!(doc.data.target_url, "https://verse.example.com");
    assert_eq!(doc.data.integration_type, "interval");
    assert!(doc.data.is_active);
    assert_eq!(doc.data.key_features.len(), 4);
}

#[test]
fn test_settings_cover_interval_source_translation() {
    let date = NaiveDate::from_ymd_opt(2025, 2, 21).unwrap();
    let doc = build_integration_config(&config(), date);

    let labels: Vec<&str> = doc.data.settings.iter().map(|s| s.label.as_str()).collect();
    assert_eq!(labels, vec!["interval", "Source", "Translation"]);

    let source = &doc.data.settings[1];
    assert_eq!(source.default, "Random");
    let expected: Vec<String> = SourceCategory::ALL
        .iter()
        .map(|c| c.as_str().to_string())
        .collect();
    assert_eq!(source.options, expected);

    let translation = &doc.data.settings[2];
    assert_eq!(translation.default, "KJV");
    assert_eq!(translation.options, vec!["NIV", "ESV", "KJV", "NLT", "NASB"]);

    assert_eq!(doc.data.settings[0].default, "0 8 * * *");
    assert_eq!(doc.data.settings[0].options.len(), 9);
}

#[test]
fn test_serialized_setting_uses_type_key() {
    let date = NaiveDate::from_ymd_opt(2025, 2, 21).unwrap();
    let value = serde_json::to_value(build_integration_config(&config(), date)).unwrap();

    let setting = &value["data"]["settings"][0];
    assert_eq!(setting["type"], "dropdown");
    assert_eq!(setting["required"], true);
    assert_eq!(
        value["data"]["permissions"]["monitoring_user"]["display_name"],
        "Bible Verse Bot"
    );
    assert_eq!(value["data"]["output"][0]["label"], "output_channel_1");
}
