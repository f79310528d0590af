// SPDX-License-Identifier: MPL-2.0
use motion_gallery::config::{self, Config, GeneralConfig};
use motion_gallery::i18n::fluent::I18n;
use motion_gallery::ui::theming::ThemeMode;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

fn write_config(config: &Config, path: &Path) {
    let content = toml::to_string(config).expect("Failed to serialize config");
    fs::write(path, content).expect("Failed to write config file");
}

#[test]
fn language_change_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let config_path = dir.path().join("settings.toml");

    let english = Config {
        general: GeneralConfig {
            language: Some("en-US".to_string()),
            theme_mode: ThemeMode::System,
        },
        ..Config::default()
    };
    write_config(&english, &config_path);
    let loaded = config::load_from_path(&config_path).expect("Failed to load initial config");
    let i18n_en = I18n::new(None, &loaded);
    assert_eq!(i18n_en.current_locale().to_string(), "en-US");
    assert_eq!(i18n_en.tr("modal-close"), "Close");

    let french = Config {
        general: GeneralConfig {
            language: Some("fr".to_string()),
            theme_mode: ThemeMode::Dark,
        },
        ..Config::default()
    };
    write_config(&french, &config_path);
    let loaded = config::load_from_path(&config_path).expect("Failed to load french config");
    let i18n_fr = I18n::new(None, &loaded);
    assert_eq!(i18n_fr.current_locale().to_string(), "fr");
    assert_eq!(i18n_fr.tr("modal-close"), "Fermer");
}

#[test]
fn cli_language_beats_config() {
    let config = Config {
        general: GeneralConfig {
            language: Some("fr".to_string()),
            theme_mode: ThemeMode::System,
        },
        ..Config::default()
    };
    let i18n = I18n::new(Some("en-US".to_string()), &config);
    assert_eq!(i18n.current_locale().to_string(), "en-US");
}

#[test]
fn every_locale_translates_every_key() {
    let keys = [
        "app-title",
        "gallery-title-classic",
        "gallery-title-ai",
        "gallery-title-custom",
        "gallery-footer",
        "card-loading",
        "modal-close",
        "modal-section-formula",
        "modal-section-explanation",
        "modal-section-concept",
        "modal-speed-label",
        "modal-click-hint",
    ];
    let mut i18n = I18n::default();
    for locale in i18n.available_locales.clone() {
        i18n.set_locale(locale.clone());
        for key in keys {
            let value = i18n.tr(key);
            assert!(!value.starts_with("MISSING"), "{locale} lacks {key}");
        }
    }
}

#[test]
fn clip_count_is_interpolated() {
    let i18n = I18n::new(Some("en-US".to_string()), &Config::default());
    let text = i18n.tr_with_args("gallery-clip-count", &[("count", "6")]);
    assert!(text.contains('6'), "unexpected text: {text}");
}
