// Login scenarios against the live storefront

mod common;

use anyhow::Result;
use storefront_e2e::{LoginFlow, RegisterFlow, Registration, data};

#[tokio::test]
async fn test_login_with_empty_fields_shows_error() -> Result<()> {
    let settings = common::settings();
    let driver = common::new_session(&settings).await?;

    let flow = LoginFlow::new(&driver, &settings);
    let message = flow.login_with_empty_fields().await?;
    assert!(
        !message.is_empty(),
        "empty-credential login must produce an error message, not an exception"
    );

    driver.quit().await?;
    Ok(())
}

#[tokio::test]
async fn test_login_with_invalid_credentials_shows_error() -> Result<()> {
    let settings = common::settings();
    let driver = common::new_session(&settings).await?;

    let flow = LoginFlow::new(&driver, &settings);
    let message = flow
        .login_with_invalid_credentials("no_such_user_ever", "WrongPass123!")
        .await?;
    assert!(!message.is_empty(), "bad credentials must show an error");

    driver.quit().await?;
    Ok(())
}

#[tokio::test]
async fn test_login_after_registering_fresh_user() -> Result<()> {
    let settings = common::settings();
    let driver = common::new_session(&settings).await?;

    // Self-contained: register a fresh account, sign out, sign back in
    // with the same credentials.
    let profile = data::profile(&common::users_file(), "valid_user")?;
    let mut input = Registration::from_profile(&profile);
    input.email = data::unique_email("logincheck");
    input.loginname = data::unique_login("logincheck");

    let register = RegisterFlow::new(&driver, &settings);
    assert!(register.register_with_mandatory_fields(&input).await?);

    let login = LoginFlow::new(&driver, &settings);
    login.page().click_logout_link().await?;
    let logged_in = login
        .login_with_valid_credentials(&input.loginname, &input.password)
        .await?;
    assert!(logged_in, "fresh credentials should log straight back in");

    driver.quit().await?;
    Ok(())
}

#[tokio::test]
async fn test_login_with_keyboard_keys() -> Result<()> {
    let settings = common::settings();
    let driver = common::new_session(&settings).await?;

    let profile = data::profile(&common::users_file(), "valid_user")?;
    let mut input = Registration::from_profile(&profile);
    input.email = data::unique_email("kblogin");
    input.loginname = data::unique_login("kblogin");

    let register = RegisterFlow::new(&driver, &settings);
    assert!(register.register_with_mandatory_fields(&input).await?);

    let login = LoginFlow::new(&driver, &settings);
    login.page().click_logout_link().await?;
    let logged_in = login
        .login_with_keyboard(&input.loginname, &input.password)
        .await?;
    assert!(logged_in, "keyboard-driven login should succeed");

    driver.quit().await?;
    Ok(())
}
