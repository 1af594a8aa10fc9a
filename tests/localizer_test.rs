//! End-to-end behavior of the localization runtime

#![allow(clippy::unwrap_used)]
#![allow(missing_docs)]

use std::fs;
use std::sync::Arc;

use city_i18n::binder::{
    MemoryDocument,
    MemoryElement,
    ReadyState,
};
use city_i18n::config::ConfigManager;
use city_i18n::diagnostics::check_catalog;
use city_i18n::lifecycle::{
    BootState,
    Bootstrap,
};
use city_i18n::locale::FixedLocale;
use city_i18n::storage::{
    FileStore,
    MemoryStore,
    PreferenceStore,
};
use city_i18n::{
    Catalog,
    LanguageCode,
    Localizer,
    ParamSet,
};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

fn builtin_localizer(store: MemoryStore, locale: FixedLocale) -> Localizer<MemoryStore> {
    Localizer::new(Arc::new(Catalog::builtin()), store, locale)
}

#[test]
fn insufficient_funds_message_in_both_languages() {
    let mut localizer = builtin_localizer(MemoryStore::new(), FixedLocale::none());
    let params = ParamSet::new().with("item", "Road").with("cost", 100).with("current", 50);

    assert_eq!(
        localizer.t_with("toast.insufficientFundsDesc", &params),
        "Road costs 100. You have 50."
    );

    localizer.set_lang("ko", &mut MemoryDocument::new());
    assert_eq!(
        localizer.t_with("toast.insufficientFundsDesc", &params),
        "Road에 100원이 필요합니다. 현재 50원 보유 중이에요."
    );
}

#[test]
fn unknown_key_is_returned_verbatim() {
    let localizer = builtin_localizer(MemoryStore::new(), FixedLocale::none());

    assert_eq!(localizer.t("no.such.key"), "no.such.key");
}

#[test]
fn detection_precedence() {
    let mut fresh = builtin_localizer(MemoryStore::new(), FixedLocale::new("ko-KR"));
    assert_eq!(fresh.detect_language(), LanguageCode::Ko);

    let mut returning =
        builtin_localizer(MemoryStore::with("i18n-lang", "en"), FixedLocale::new("ko-KR"));
    assert_eq!(returning.detect_language(), LanguageCode::En);
}

#[test]
fn set_lang_is_idempotent() {
    let mut localizer = builtin_localizer(MemoryStore::new(), FixedLocale::none());
    let mut document = MemoryDocument::new();
    document.push(MemoryElement::new("span").attr("data-i18n", "hud.budget"));

    assert!(localizer.set_lang("en", &mut document));
    let once = document.clone();
    assert!(localizer.set_lang("en", &mut document));

    assert_eq!(document, once);
    assert_eq!(localizer.store().get("i18n-lang").unwrap().as_deref(), Some("en"));
}

#[test]
fn money_and_currency() {
    let mut localizer = builtin_localizer(MemoryStore::new(), FixedLocale::none());

    assert_eq!(localizer.format_money(1_234_567.9), "1,234,567");
    assert_eq!(localizer.currency(), "$");

    localizer.set_lang("ko", &mut MemoryDocument::new());
    assert_eq!(localizer.format_money(1_234_567.9), "1,234,567");
    assert_eq!(localizer.currency(), "₩");
}

#[test]
fn page_bootstrap_after_loading() {
    let mut localizer = builtin_localizer(MemoryStore::new(), FixedLocale::new("ko-KR"));
    let mut page = MemoryDocument::new();
    page.set_ready_state(ReadyState::Loading);
    let budget = page.push(MemoryElement::new("span").attr("data-i18n", "hud.budget"));
    let username = page.push(
        MemoryElement::new("input").attr("data-i18n-placeholder", "login.usernamePlaceholder"),
    );
    let save = page.push(MemoryElement::new("button").attr("data-i18n-title", "toolbar.save"));
    let day = page.push(
        MemoryElement::new("span").attr("data-i18n", "game.day").attr("data-i18n-params", r#"{"day": 3}"#),
    );

    let mut bootstrap = Bootstrap::new();
    assert_eq!(bootstrap.load(&mut localizer, &mut page), BootState::Deferred);
    page.set_ready_state(ReadyState::Interactive);
    assert_eq!(bootstrap.document_ready(&mut localizer, &mut page), BootState::Ready);

    assert_eq!(page.lang.as_deref(), Some("ko"));
    assert_eq!(page.element(budget).unwrap().text, "예산");
    assert_eq!(
        page.element(username).unwrap().get_attr("placeholder"),
        Some("아이디를 입력하세요")
    );
    assert_eq!(page.element(save).unwrap().get_attr("title"), Some("저장"));
    assert_eq!(page.element(day).unwrap().text, "Day 3");

    assert!(localizer.set_lang("en", &mut page));
    assert_eq!(page.lang.as_deref(), Some("en"));
    assert_eq!(page.element(budget).unwrap().text, "Budget");
    assert_eq!(page.element(save).unwrap().get_attr("title"), Some("Save"));
}

#[test]
fn workspace_packs_and_file_preferences() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    fs::write(
        root.join(".city-i18n.json"),
        r#"{ "storageKey": "lang", "translationFiles": { "filePattern": "i18n/*.json" } }"#,
    )
    .unwrap();
    fs::create_dir_all(root.join("i18n")).unwrap();
    fs::write(root.join("i18n").join("en.json"), r#"{ "hud": { "budget": "Funds" } }"#).unwrap();
    fs::write(root.join("i18n").join("fr.json"), r#"{ "hud": { "budget": "Budget" } }"#).unwrap();

    let mut config_manager = ConfigManager::new();
    config_manager.load_settings(Some(root.to_path_buf())).unwrap();
    let settings = config_manager.get_settings().clone();
    let catalog = Arc::new(Catalog::load(&settings, root).unwrap());

    let mut first = Localizer::from_settings(
        &settings,
        Arc::clone(&catalog),
        FileStore::new(config_manager.preference_path()),
        FixedLocale::none(),
    );
    assert_eq!(first.t("hud.budget"), "Funds");
    assert_eq!(first.t("hud.tax"), "Tax");
    assert!(first.set_lang("ko", &mut MemoryDocument::new()));

    let mut second = Localizer::from_settings(
        &settings,
        Arc::clone(&catalog),
        FileStore::new(config_manager.preference_path()),
        FixedLocale::new("en-US"),
    );
    assert_eq!(second.detect_language(), LanguageCode::Ko);
    assert_eq!(second.store().get("lang").unwrap().as_deref(), Some("ko"));

    assert!(check_catalog(&catalog).is_empty());
}
