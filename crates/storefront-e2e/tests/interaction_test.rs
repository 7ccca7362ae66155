// Core interaction-layer properties, driven against self-contained
// data: URLs so no storefront is needed - only a WebDriver endpoint.
//
// Covered:
// - set_state/is_checked agree, and set_state is idempotent
// - type_text with clear-first leaves exactly the typed value
// - a visibility wait on a never-appearing locator returns within
//   timeout + poll interval, it does not hang
// - select-by-visible-text round-trips through selected_option_text
// - resolve() distinguishes NotFound from Timeout

mod common;

use std::time::{Duration, Instant};

use anyhow::Result;
use storefront_e2e::{
    Alerts, Condition, Interactor, Locator, Resolve, Screenshots, Session, Waiter, checkbox,
    dropdown, keyboard,
};
use thirtyfour::By;

const CHECKBOX_PAGE: &str =
    "data:text/html,<input type='checkbox' id='cb'><input type='checkbox' id='checked-cb' checked>";

const FORM_PAGE: &str = "data:text/html,<input type='text' id='field' value='previous content'>";

const SELECT_PAGE: &str = "data:text/html,<select id='fruits'>\
    <option value='apple'>Apple</option>\
    <option value='banana'>Banana</option>\
    <option value='cherry'>Cherry</option>\
    </select>";

const HIDDEN_PAGE: &str =
    "data:text/html,<div id='hidden' style='display:none'>invisible</div>";

const ALERT_PAGE: &str =
    "data:text/html,<button id='go' onclick=\"alert('hello')\">go</button>";

#[tokio::test]
async fn test_set_state_then_is_checked_agree() -> Result<()> {
    let settings = common::settings();
    let driver = common::new_session(&settings).await?;
    driver.goto(CHECKBOX_PAGE).await?;

    let element = driver.find(By::Id("cb")).await?;
    assert!(!checkbox::is_checked(&element).await?);

    assert!(checkbox::set_state(&element, true).await?);
    assert!(checkbox::is_checked(&element).await?);

    assert!(checkbox::set_state(&element, false).await?);
    assert!(!checkbox::is_checked(&element).await?);

    driver.quit().await?;
    Ok(())
}

#[tokio::test]
async fn test_set_state_is_idempotent() -> Result<()> {
    let settings = common::settings();
    let driver = common::new_session(&settings).await?;
    driver.goto(CHECKBOX_PAGE).await?;

    let element = driver.find(By::Id("checked-cb")).await?;
    assert!(checkbox::is_checked(&element).await?);

    // Already in the target state twice over; each call must leave the
    // state unchanged (the no-op path issues zero clicks).
    assert!(checkbox::set_state(&element, true).await?);
    assert!(checkbox::set_state(&element, true).await?);
    assert!(checkbox::is_checked(&element).await?);

    driver.quit().await?;
    Ok(())
}

#[tokio::test]
async fn test_check_and_uncheck_are_conditional_clicks() -> Result<()> {
    let settings = common::settings();
    let driver = common::new_session(&settings).await?;
    driver.goto(CHECKBOX_PAGE).await?;

    let element = driver.find(By::Id("cb")).await?;
    assert!(checkbox::check(&element).await?);
    assert!(checkbox::check(&element).await?);
    assert!(checkbox::is_checked(&element).await?);

    assert!(checkbox::uncheck(&element).await?);
    assert!(checkbox::uncheck(&element).await?);
    assert!(!checkbox::is_checked(&element).await?);

    driver.quit().await?;
    Ok(())
}

#[tokio::test]
async fn test_type_text_clears_prior_content() -> Result<()> {
    let settings = common::settings();
    let driver = common::new_session(&settings).await?;
    driver.goto(FORM_PAGE).await?;

    let field = Locator::id("field");
    let actions = Interactor::new(&driver);
    actions.type_text(field, "fresh text").await?;
    assert_eq!(actions.value(field).await?, "fresh text");

    // A second write still replaces, never appends.
    actions.type_text(field, "second").await?;
    assert_eq!(actions.value(field).await?, "second");

    driver.quit().await?;
    Ok(())
}

#[tokio::test]
async fn test_visibility_wait_returns_within_budget() -> Result<()> {
    let settings = common::settings();
    let driver = common::new_session(&settings).await?;
    driver.goto(FORM_PAGE).await?;

    let timeout = Duration::from_secs(2);
    let poll = Duration::from_millis(500);
    let waiter = Waiter::new(&driver)
        .with_timeout(timeout)
        .with_poll_interval(poll);

    let start = Instant::now();
    let result = waiter.visibility(Locator::id("never-appears")).await;
    let elapsed = start.elapsed();

    assert!(result.is_err());
    // Bounded return: timeout + one poll interval, plus slack for the
    // final driver round-trip.
    assert!(
        elapsed < timeout + poll + Duration::from_secs(1),
        "wait took {:?}",
        elapsed
    );

    driver.quit().await?;
    Ok(())
}

#[tokio::test]
async fn test_select_by_visible_text_round_trips() -> Result<()> {
    let settings = common::settings();
    let driver = common::new_session(&settings).await?;
    driver.goto(SELECT_PAGE).await?;

    let element = driver.find(By::Id("fruits")).await?;
    dropdown::select_by_visible_text(&element, "Banana").await?;
    assert_eq!(
        dropdown::selected_option_text(&element).await?,
        Some("Banana".to_string())
    );
    assert_eq!(
        dropdown::selected_option_value(&element).await?,
        Some("banana".to_string())
    );

    dropdown::select_by_index(&element, 2).await?;
    assert_eq!(
        dropdown::selected_option_text(&element).await?,
        Some("Cherry".to_string())
    );

    let options = dropdown::all_options(&element).await?;
    assert_eq!(options, vec!["Apple", "Banana", "Cherry"]);

    driver.quit().await?;
    Ok(())
}

#[tokio::test]
async fn test_deselect_all_rejected_on_single_select() -> Result<()> {
    let settings = common::settings();
    let driver = common::new_session(&settings).await?;
    driver.goto(SELECT_PAGE).await?;

    let element = driver.find(By::Id("fruits")).await?;
    assert!(!dropdown::is_multiple(&element).await?);
    assert!(dropdown::deselect_all(&element).await.is_err());

    driver.quit().await?;
    Ok(())
}

#[tokio::test]
async fn test_slow_type_and_keyboard_clear() -> Result<()> {
    let settings = common::settings();
    let driver = common::new_session(&settings).await?;
    driver.goto(FORM_PAGE).await?;

    let field = driver.find(By::Id("field")).await?;
    keyboard::slow_type(&field, "slowly", Duration::from_millis(20)).await?;
    assert_eq!(field.attr("value").await?.unwrap_or_default(), "slowly");

    keyboard::clear_with_keys(&field).await?;
    assert_eq!(field.attr("value").await?.unwrap_or_default(), "");

    driver.quit().await?;
    Ok(())
}

#[tokio::test]
async fn test_alert_wait_text_and_accept() -> Result<()> {
    let settings = common::settings();
    let driver = common::new_session(&settings).await?;
    driver.goto(ALERT_PAGE).await?;

    let actions = Interactor::new(&driver);
    actions.click(Locator::id("go")).await?;

    let alerts = Alerts::new(&driver);
    assert!(alerts.wait_for_alert().await);
    assert_eq!(alerts.accept().await?, "hello");
    assert!(!alerts.is_present().await);

    driver.quit().await?;
    Ok(())
}

#[tokio::test]
async fn test_session_navigation_and_screenshot() -> Result<()> {
    let settings = common::settings();
    let driver = common::new_session(&settings).await?;

    let session = Session::new(&driver);
    session.goto(FORM_PAGE).await?;
    assert!(session.current_url().await?.starts_with("data:"));
    assert!(session.page_source().await?.contains("field"));
    session.refresh().await?;

    let dir = std::env::temp_dir().join("storefront-e2e-test-shots");
    let shots = Screenshots::new(&dir);
    let path = shots.capture(&driver, "interaction").await?;
    assert!(path.exists());
    let _ = std::fs::remove_dir_all(&dir);

    driver.quit().await?;
    Ok(())
}

#[tokio::test]
async fn test_resolve_distinguishes_absent_from_hidden() -> Result<()> {
    let settings = common::settings();
    let driver = common::new_session(&settings).await?;
    driver.goto(HIDDEN_PAGE).await?;

    let waiter = Waiter::new(&driver).with_timeout(Duration::from_secs(1));

    // No such node at all: verified absent.
    let absent = waiter
        .resolve(Locator::id("nothing-here"), Condition::Visibility)
        .await;
    assert!(matches!(absent, Resolve::NotFound));

    // Node exists but stays hidden: present, condition never satisfied.
    let hidden = waiter
        .resolve(Locator::id("hidden"), Condition::Visibility)
        .await;
    assert!(matches!(hidden, Resolve::Timeout));

    // Presence alone is satisfied by the hidden node.
    let present = waiter
        .resolve(Locator::id("hidden"), Condition::Presence)
        .await;
    assert!(present.is_found());

    // And invisibility is immediately satisfied for it.
    waiter.invisibility(Locator::id("hidden")).await?;

    driver.quit().await?;
    Ok(())
}
