use chrono::{TimeZone, Utc};
use shadekit::config::Config;
use shadekit::ui::core::{Clock, HostContext, Navigator, ScrollLock};
use shadekit::utils::color::AccentColor;
use shadekit::utils::datetime::TimeStyle;
use shadekit::WidgetError;

#[test]
fn test_fixed_clock() {
    let now = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    assert_eq!(Clock::Fixed(now).now(), now);
}

#[test]
fn test_scroll_lock_is_shared_by_clones() {
    let lock = ScrollLock::default();
    let other = lock.clone();
    other.lock();
    assert!(lock.is_locked());
    assert_eq!(lock.body_style(), "overflow: hidden;");
    lock.unlock();
    assert!(!other.is_locked());
    assert_eq!(other.body_style(), "");
}

#[test]
fn test_navigator_records_last_location() {
    let navigator = Navigator::default();
    assert_eq!(navigator.location(), None);
    navigator.navigate("/a");
    navigator.clone().navigate("/b");
    assert_eq!(navigator.location().as_deref(), Some("/b"));
}

#[test]
fn test_from_config() {
    let mut config = Config::default();
    config.theme.accent = "yellow".to_string();
    config
        .theme
        .variables
        .insert("--color-border".to_string(), "#222222".to_string());
    config.display.time_style = Some(TimeStyle::Compact);

    let ctx = HostContext::from_config(&config).unwrap();
    assert_eq!(ctx.theme.accent(), Some(AccentColor::Yellow));
    assert_eq!(ctx.theme.get("--color-border").as_deref(), Some("#222222"));
    assert_eq!(ctx.time_style, Some(TimeStyle::Compact));
}

#[test]
fn test_from_config_unknown_accent() {
    let mut config = Config::default();
    config.theme.accent = "plaid".to_string();
    assert_eq!(
        HostContext::from_config(&config).unwrap_err(),
        WidgetError::UnknownAccentColor("plaid".to_string())
    );
}
