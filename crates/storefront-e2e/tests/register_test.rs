// Registration scenarios against the live storefront
//
// Each test generates fresh unique credentials; the storefront rejects
// duplicate emails and login names across runs.

mod common;

use anyhow::Result;
use storefront_e2e::{RegisterFlow, Registration, data};

fn fresh_registration() -> Result<Registration> {
    let profile = data::profile(&common::users_file(), "valid_user")?;
    let mut input = Registration::from_profile(&profile);
    input.email = data::unique_email("validuser");
    input.loginname = data::unique_login("johndoe");
    Ok(input)
}

#[tokio::test]
async fn test_registering_with_mandatory_fields() -> Result<()> {
    let settings = common::settings();
    let driver = common::new_session(&settings).await?;

    let mut input = fresh_registration()?;
    // Literal mandatory-field inputs for the baseline scenario.
    input.firstname = "John".to_string();
    input.lastname = "Doe".to_string();
    input.email = format!("john.doe.{}@example.com", data::unique_login("u"));
    input.password = "Secret123!".to_string();

    let flow = RegisterFlow::new(&driver, &settings);
    let registered = flow.register_with_mandatory_fields(&input).await?;
    assert!(
        registered,
        "registration with all mandatory fields should succeed"
    );

    driver.quit().await?;
    Ok(())
}

#[tokio::test]
async fn test_registering_with_newsletter_subscription() -> Result<()> {
    let settings = common::settings();
    let driver = common::new_session(&settings).await?;

    let input = fresh_registration()?;
    let flow = RegisterFlow::new(&driver, &settings);
    let registered = flow.register_with_newsletter(&input).await?;
    assert!(
        registered,
        "registration with newsletter subscription should succeed"
    );

    driver.quit().await?;
    Ok(())
}

#[tokio::test]
async fn test_registering_with_missing_mandatory_fields() -> Result<()> {
    let settings = common::settings();
    let driver = common::new_session(&settings).await?;

    let flow = RegisterFlow::new(&driver, &settings);
    let message = flow
        .register_with_missing_fields("John", &data::unique_email("incomplete"))
        .await?;
    assert!(
        !message.is_empty(),
        "submitting an incomplete form should show a form error"
    );

    driver.quit().await?;
    Ok(())
}

#[tokio::test]
async fn test_registering_after_deleting_session_cookies() -> Result<()> {
    let settings = common::settings();
    let driver = common::new_session(&settings).await?;

    // Registration must not depend on cookie-carried state: clearing
    // the session mid-scenario and starting over still succeeds.
    let input = fresh_registration()?;
    let flow = RegisterFlow::new(&driver, &settings);
    let registered = flow.register_after_clearing_cookies(&input).await?;
    assert!(
        registered,
        "registration with a fresh cookie-free session should succeed"
    );

    driver.quit().await?;
    Ok(())
}

#[tokio::test]
async fn test_registering_using_keyboard_keys() -> Result<()> {
    let settings = common::settings();
    let driver = common::new_session(&settings).await?;

    let mut input = fresh_registration()?;
    input.loginname = data::unique_login("kb_user");

    let flow = RegisterFlow::new(&driver, &settings);
    let registered = flow.register_with_keyboard(&input).await?;
    assert!(registered, "keyboard-driven registration should succeed");

    driver.quit().await?;
    Ok(())
}

#[tokio::test]
async fn test_register_with_options_reports_message() -> Result<()> {
    let settings = common::settings();
    let driver = common::new_session(&settings).await?;

    let input = fresh_registration()?;
    let flow = RegisterFlow::new(&driver, &settings);
    let outcome = flow.register_with_options(&input).await?;
    assert!(outcome.success, "flexible registration should succeed");
    assert!(
        !outcome.message.is_empty(),
        "a successful registration shows a confirmation message"
    );

    driver.quit().await?;
    Ok(())
}
