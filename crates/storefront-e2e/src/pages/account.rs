// Account page object
//
// Dashboard navigation, account-information editing, and password change.

use async_trait::async_trait;
use thirtyfour::WebDriver;

use crate::error::Result;
use crate::interact::Interactor;
use crate::locator::Locator;
use crate::pages::Screen;
use crate::wait::Condition;

/// Page object for the account management screens.
pub struct AccountPage {
    actions: Interactor,
}

impl AccountPage {
    pub const ACCOUNT_DASHBOARD_LINK: Locator =
        Locator::xpath("//a[contains(text(), 'Account Dashboard')]");
    pub const ACCOUNT_INFORMATION_LINK: Locator =
        Locator::xpath("//a[contains(text(), 'Account Information')]");
    pub const EDIT_ACCOUNT_BUTTON: Locator = Locator::id("edit-account-button");
    pub const EDIT_ACCOUNT_LINK: Locator = Locator::xpath("//a[contains(text(), 'Edit Account')]");

    pub const ACCOUNT_FIRST_NAME: Locator = Locator::id("account_firstname");
    pub const ACCOUNT_LAST_NAME: Locator = Locator::id("account_lastname");
    pub const ACCOUNT_EMAIL: Locator = Locator::id("account_email");
    pub const ACCOUNT_TELEPHONE: Locator = Locator::id("account_telephone");
    pub const ACCOUNT_COMPANY: Locator = Locator::id("account_company");

    pub const CHANGE_PASSWORD_LINK: Locator =
        Locator::xpath("//a[contains(text(), 'Change Password')]");
    pub const CHANGE_PASSWORD_BUTTON: Locator = Locator::id("change-password-button");
    pub const CURRENT_PASSWORD: Locator = Locator::id("current_password");
    pub const NEW_PASSWORD: Locator = Locator::id("new_password");
    pub const CONFIRM_PASSWORD: Locator = Locator::id("confirm_password");

    pub const ACCOUNT_DASHBOARD_HEADER: Locator = Locator::class_name("account-dashboard-header");
    pub const ACCOUNT_INFORMATION_SECTION: Locator =
        Locator::class_name("account-information-section");
    pub const ORDER_HISTORY_LINK: Locator = Locator::xpath("//a[contains(text(), 'Order History')]");
    pub const WISHLIST_LINK: Locator = Locator::xpath("//a[contains(text(), 'Wishlist')]");
    pub const DOWNLOADS_LINK: Locator = Locator::xpath("//a[contains(text(), 'Downloads')]");
    pub const LOGOUT_LINK: Locator = Locator::xpath("//a[contains(text(), 'Logout')]");

    pub const SAVE_CHANGES_BUTTON: Locator = Locator::id("save-account-changes");
    pub const SAVE_BUTTON: Locator = Locator::xpath("//button[contains(text(), 'Save')]");
    pub const CANCEL_BUTTON: Locator = Locator::xpath("//button[contains(text(), 'Cancel')]");

    pub const SUCCESS_MESSAGE_CONTAINER: Locator = Locator::class_name("success-message");
    pub const ERROR_MESSAGE_CONTAINER: Locator = Locator::class_name("error-message");
    pub const NOTIFICATION_CONTAINER: Locator = Locator::class_name("notification");

    pub fn new(driver: &WebDriver) -> Self {
        Self {
            actions: Interactor::new(driver),
        }
    }

    pub fn actions(&self) -> &Interactor {
        &self.actions
    }

    // ---- navigation ----

    pub async fn click_account_dashboard_link(&self) -> Result<()> {
        self.actions.click(Self::ACCOUNT_DASHBOARD_LINK).await
    }

    pub async fn click_account_information_link(&self) -> Result<()> {
        self.actions.click(Self::ACCOUNT_INFORMATION_LINK).await
    }

    pub async fn click_edit_account_button(&self) -> Result<()> {
        self.actions.click(Self::EDIT_ACCOUNT_BUTTON).await
    }

    pub async fn click_edit_account_link(&self) -> Result<()> {
        self.actions.click(Self::EDIT_ACCOUNT_LINK).await
    }

    pub async fn click_order_history_link(&self) -> Result<()> {
        self.actions.click(Self::ORDER_HISTORY_LINK).await
    }

    pub async fn click_wishlist_link(&self) -> Result<()> {
        self.actions.click(Self::WISHLIST_LINK).await
    }

    pub async fn click_downloads_link(&self) -> Result<()> {
        self.actions.click(Self::DOWNLOADS_LINK).await
    }

    pub async fn click_logout_link(&self) -> Result<()> {
        self.actions.click(Self::LOGOUT_LINK).await
    }

    // ---- account information fields ----

    pub async fn enter_first_name(&self, first_name: &str) -> Result<()> {
        self.actions.type_text(Self::ACCOUNT_FIRST_NAME, first_name).await
    }

    pub async fn enter_last_name(&self, last_name: &str) -> Result<()> {
        self.actions.type_text(Self::ACCOUNT_LAST_NAME, last_name).await
    }

    pub async fn enter_email(&self, email: &str) -> Result<()> {
        self.actions.type_text(Self::ACCOUNT_EMAIL, email).await
    }

    pub async fn enter_telephone(&self, telephone: &str) -> Result<()> {
        self.actions.type_text(Self::ACCOUNT_TELEPHONE, telephone).await
    }

    pub async fn enter_company(&self, company: &str) -> Result<()> {
        self.actions.type_text(Self::ACCOUNT_COMPANY, company).await
    }

    pub async fn first_name(&self) -> Result<String> {
        self.actions.value(Self::ACCOUNT_FIRST_NAME).await
    }

    pub async fn last_name(&self) -> Result<String> {
        self.actions.value(Self::ACCOUNT_LAST_NAME).await
    }

    pub async fn email(&self) -> Result<String> {
        self.actions.value(Self::ACCOUNT_EMAIL).await
    }

    pub async fn telephone(&self) -> Result<String> {
        self.actions.value(Self::ACCOUNT_TELEPHONE).await
    }

    pub async fn company(&self) -> Result<String> {
        self.actions.value(Self::ACCOUNT_COMPANY).await
    }

    // ---- password change ----

    pub async fn click_change_password_link(&self) -> Result<()> {
        self.actions.click(Self::CHANGE_PASSWORD_LINK).await
    }

    pub async fn click_change_password_button(&self) -> Result<()> {
        self.actions.click(Self::CHANGE_PASSWORD_BUTTON).await
    }

    pub async fn enter_current_password(&self, password: &str) -> Result<()> {
        self.actions.type_text(Self::CURRENT_PASSWORD, password).await
    }

    pub async fn enter_new_password(&self, password: &str) -> Result<()> {
        self.actions.type_text(Self::NEW_PASSWORD, password).await
    }

    pub async fn enter_confirm_password(&self, password: &str) -> Result<()> {
        self.actions.type_text(Self::CONFIRM_PASSWORD, password).await
    }

    pub async fn click_save_changes_button(&self) -> Result<()> {
        self.actions.click(Self::SAVE_CHANGES_BUTTON).await
    }

    pub async fn click_save_button(&self) -> Result<()> {
        self.actions.click(Self::SAVE_BUTTON).await
    }

    pub async fn click_cancel_button(&self) -> Result<()> {
        self.actions.click(Self::CANCEL_BUTTON).await
    }

    // ---- messages and indicators ----

    pub async fn success_message(&self) -> String {
        self.actions.text_or_empty(Self::SUCCESS_MESSAGE_CONTAINER).await
    }

    pub async fn error_message(&self) -> String {
        self.actions.text_or_empty(Self::ERROR_MESSAGE_CONTAINER).await
    }

    pub async fn notification_message(&self) -> String {
        self.actions.text_or_empty(Self::NOTIFICATION_CONTAINER).await
    }

    pub async fn is_dashboard_displayed(&self) -> bool {
        self.actions
            .resolve(Self::ACCOUNT_DASHBOARD_HEADER, Condition::Presence)
            .await
            .is_found()
    }

    pub async fn is_information_section_displayed(&self) -> bool {
        self.actions
            .resolve(Self::ACCOUNT_INFORMATION_SECTION, Condition::Presence)
            .await
            .is_found()
    }

    pub async fn is_information_form_displayed(&self) -> bool {
        self.actions
            .resolve(Self::ACCOUNT_FIRST_NAME, Condition::Presence)
            .await
            .is_found()
    }

    pub async fn is_edit_account_button_displayed(&self) -> bool {
        self.actions
            .resolve(Self::EDIT_ACCOUNT_BUTTON, Condition::Presence)
            .await
            .is_found()
    }

    pub async fn is_save_changes_button_enabled(&self) -> bool {
        self.actions.is_enabled(Self::SAVE_CHANGES_BUTTON).await
    }

    pub async fn is_logout_link_displayed(&self) -> bool {
        self.actions
            .resolve(Self::LOGOUT_LINK, Condition::Presence)
            .await
            .is_found()
    }
}

#[async_trait]
impl Screen for AccountPage {
    fn driver(&self) -> &WebDriver {
        self.actions.driver()
    }

    fn screen_name(&self) -> &'static str {
        "account"
    }

    fn landmark(&self) -> Locator {
        Self::ACCOUNT_DASHBOARD_LINK
    }
}
