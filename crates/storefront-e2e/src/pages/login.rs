// Login page object

use async_trait::async_trait;
use thirtyfour::WebDriver;

use crate::error::Result;
use crate::interact::Interactor;
use crate::locator::Locator;
use crate::pages::Screen;
use crate::wait::Condition;

/// Page object for the account login screen.
pub struct LoginPage {
    actions: Interactor,
}

impl LoginPage {
    pub const LOGIN_REGISTER_LINK: Locator = Locator::link_text("Login or register");
    pub const LOGIN_NAME_INPUT: Locator = Locator::id("loginFrm_loginname");
    pub const PASSWORD_INPUT: Locator = Locator::id("loginFrm_password");
    pub const LOGIN_BUTTON: Locator = Locator::xpath("//button[@title='Login']");
    pub const ERROR_MESSAGE_CONTAINER: Locator =
        Locator::xpath("//*[contains(@class, 'error') or contains(text(), 'Incorrect')]");
    pub const MY_ACCOUNT_INDICATOR: Locator =
        Locator::xpath("//a[contains(text(), 'My Account')]");
    pub const LOGOUT_LINK: Locator = Locator::link_text("Logout");

    pub fn new(driver: &WebDriver) -> Self {
        Self {
            actions: Interactor::new(driver),
        }
    }

    pub fn actions(&self) -> &Interactor {
        &self.actions
    }

    pub async fn click_login_register_link(&self) -> Result<()> {
        self.actions.click(Self::LOGIN_REGISTER_LINK).await
    }

    pub async fn enter_login_name(&self, login_name: &str) -> Result<()> {
        self.actions.type_text(Self::LOGIN_NAME_INPUT, login_name).await
    }

    pub async fn enter_password(&self, password: &str) -> Result<()> {
        self.actions.type_text(Self::PASSWORD_INPUT, password).await
    }

    pub async fn click_login_button(&self) -> Result<()> {
        self.actions.click(Self::LOGIN_BUTTON).await
    }

    /// Error message text, empty when no error container is shown.
    pub async fn error_message(&self) -> String {
        self.actions.text_or_empty(Self::ERROR_MESSAGE_CONTAINER).await
    }

    pub async fn is_error_message_displayed(&self) -> bool {
        self.actions.is_visible(Self::ERROR_MESSAGE_CONTAINER).await
    }

    /// Whether the "My Account" indicator shows up, confirming login.
    pub async fn is_my_account_displayed(&self) -> bool {
        self.actions.is_visible(Self::MY_ACCOUNT_INDICATOR).await
    }

    pub async fn my_account_text(&self) -> String {
        self.actions.text_or_empty(Self::MY_ACCOUNT_INDICATOR).await
    }

    pub async fn click_logout_link(&self) -> Result<()> {
        self.actions.click(Self::LOGOUT_LINK).await
    }

    pub async fn is_logout_link_displayed(&self) -> bool {
        self.actions
            .resolve(Self::LOGOUT_LINK, Condition::Visibility)
            .await
            .is_found()
    }
}

#[async_trait]
impl Screen for LoginPage {
    fn driver(&self) -> &WebDriver {
        self.actions.driver()
    }

    fn screen_name(&self) -> &'static str {
        "login"
    }

    fn landmark(&self) -> Locator {
        Self::LOGIN_NAME_INPUT
    }
}
