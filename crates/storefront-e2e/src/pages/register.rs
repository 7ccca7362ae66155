// Registration page object
//
// The full AccountFrm field set plus newsletter radios, the terms
// checkbox, and the success/error containers. Zone options repopulate
// when the country changes, so zone selection waits for the options to
// be populated instead of sleeping a fixed delay.

use async_trait::async_trait;
use thirtyfour::WebDriver;
use tracing::debug;

use crate::checkbox;
use crate::config::Settings;
use crate::dropdown;
use crate::error::Result;
use crate::interact::Interactor;
use crate::locator::Locator;
use crate::pages::Screen;
use crate::session::Session;
use crate::wait::{Condition, Waiter};

/// Page object for the account registration screen.
pub struct RegisterPage {
    actions: Interactor,
    session: Session,
    settings: Settings,
}

impl RegisterPage {
    pub const LOGIN_REGISTER_LINK: Locator = Locator::link_text("Login or register");
    pub const FIRSTNAME_INPUT: Locator = Locator::id("AccountFrm_firstname");
    pub const LASTNAME_INPUT: Locator = Locator::id("AccountFrm_lastname");
    pub const EMAIL_INPUT: Locator = Locator::id("AccountFrm_email");
    pub const TELEPHONE_INPUT: Locator = Locator::id("AccountFrm_telephone");
    pub const FAX_INPUT: Locator = Locator::id("AccountFrm_fax");
    pub const COMPANY_INPUT: Locator = Locator::id("AccountFrm_company");
    pub const ADDRESS_INPUT: Locator = Locator::id("AccountFrm_address_1");
    pub const CITY_INPUT: Locator = Locator::id("AccountFrm_city");
    pub const ZONE_DROPDOWN: Locator = Locator::id("AccountFrm_zone_id");
    // Options nested under the zone select; used to detect repopulation
    // after a country change.
    pub const ZONE_OPTIONS: Locator = Locator::css("select#AccountFrm_zone_id option");
    pub const POSTCODE_INPUT: Locator = Locator::id("AccountFrm_postcode");
    pub const COUNTRY_DROPDOWN: Locator = Locator::id("AccountFrm_country_id");
    pub const LOGINNAME_INPUT: Locator = Locator::id("AccountFrm_loginname");
    pub const PASSWORD_INPUT: Locator = Locator::id("AccountFrm_password");
    pub const CONFIRM_PASSWORD_INPUT: Locator = Locator::id("AccountFrm_confirm");
    pub const NEWSLETTER_YES_RADIO: Locator = Locator::id("AccountFrm_newsletter1");
    pub const NEWSLETTER_NO_RADIO: Locator = Locator::id("AccountFrm_newsletter0");
    pub const TERMS_CHECKBOX: Locator = Locator::id("AccountFrm_agree");
    pub const CONTINUE_BUTTON: Locator = Locator::xpath("//button[normalize-space()='Continue']");
    // The success copy varies between storefront themes; match the known variants.
    pub const SUCCESS_MESSAGE_CONTAINER: Locator = Locator::xpath(
        "//*[contains(text(), 'Your Account') or contains(text(), 'Thank you') or contains(text(), 'Success')]",
    );
    pub const ERROR_MESSAGE_CONTAINER: Locator = Locator::xpath("//div[@class='error']");
    pub const SUCCESS_PAGE_CONTINUE_BUTTON: Locator =
        Locator::xpath("//a[normalize-space()='Continue']");

    pub fn new(driver: &WebDriver, settings: &Settings) -> Self {
        Self {
            actions: Interactor::with_settings(driver, settings),
            session: Session::new(driver),
            settings: settings.clone(),
        }
    }

    pub fn actions(&self) -> &Interactor {
        &self.actions
    }

    pub async fn click_login_register_link(&self) -> Result<()> {
        self.actions.click(Self::LOGIN_REGISTER_LINK).await
    }

    /// Navigates straight to the registration form and waits for it to load.
    pub async fn navigate(&self) -> Result<()> {
        self.session.goto(&self.settings.register_url()).await?;
        self.verify_on_screen().await
    }

    pub async fn enter_firstname(&self, firstname: &str) -> Result<()> {
        self.actions.type_text(Self::FIRSTNAME_INPUT, firstname).await
    }

    pub async fn enter_lastname(&self, lastname: &str) -> Result<()> {
        self.actions.type_text(Self::LASTNAME_INPUT, lastname).await
    }

    pub async fn enter_email(&self, email: &str) -> Result<()> {
        self.actions.type_text(Self::EMAIL_INPUT, email).await
    }

    pub async fn enter_telephone(&self, telephone: &str) -> Result<()> {
        self.actions.type_text(Self::TELEPHONE_INPUT, telephone).await
    }

    pub async fn enter_fax(&self, fax: &str) -> Result<()> {
        self.actions.type_text(Self::FAX_INPUT, fax).await
    }

    pub async fn enter_company(&self, company: &str) -> Result<()> {
        self.actions.type_text(Self::COMPANY_INPUT, company).await
    }

    pub async fn enter_address(&self, address: &str) -> Result<()> {
        self.actions.type_text(Self::ADDRESS_INPUT, address).await
    }

    pub async fn enter_city(&self, city: &str) -> Result<()> {
        self.actions.type_text(Self::CITY_INPUT, city).await
    }

    /// Selects the country by visible text. Must happen before the zone:
    /// zone options are populated from the selected country.
    pub async fn select_country(&self, country: &str) -> Result<()> {
        let element = self
            .actions
            .element(Self::COUNTRY_DROPDOWN, Condition::Clickability)
            .await?;
        dropdown::select_by_visible_text(&element, country).await
    }

    /// Selects the state/province by visible text, waiting for the zone
    /// options to repopulate after a country change.
    pub async fn select_zone(&self, zone: &str) -> Result<()> {
        let actions = self.actions.clone();
        self.actions
            .waiter()
            .condition("zone options populated", move || {
                let actions = actions.clone();
                async move { actions.count(Self::ZONE_OPTIONS).await > 1 }
            })
            .await?;
        let element = self
            .actions
            .element(Self::ZONE_DROPDOWN, Condition::Clickability)
            .await?;
        dropdown::select_by_visible_text(&element, zone).await
    }

    pub async fn enter_postcode(&self, postcode: &str) -> Result<()> {
        self.actions.type_text(Self::POSTCODE_INPUT, postcode).await
    }

    pub async fn enter_loginname(&self, loginname: &str) -> Result<()> {
        self.actions.type_text(Self::LOGINNAME_INPUT, loginname).await
    }

    pub async fn enter_password(&self, password: &str) -> Result<()> {
        self.actions.type_text(Self::PASSWORD_INPUT, password).await
    }

    pub async fn enter_confirm_password(&self, password: &str) -> Result<()> {
        self.actions
            .type_text(Self::CONFIRM_PASSWORD_INPUT, password)
            .await
    }

    pub async fn select_newsletter_yes(&self) -> Result<()> {
        self.actions.click(Self::NEWSLETTER_YES_RADIO).await
    }

    pub async fn select_newsletter_no(&self) -> Result<()> {
        self.actions.click(Self::NEWSLETTER_NO_RADIO).await
    }

    /// Accepts the terms, clicking only if the box is not already checked.
    pub async fn accept_terms(&self) -> Result<bool> {
        let element = self
            .actions
            .element(Self::TERMS_CHECKBOX, Condition::Clickability)
            .await?;
        checkbox::check(&element).await
    }

    pub async fn click_continue(&self) -> Result<()> {
        self.actions.click(Self::CONTINUE_BUTTON).await
    }

    pub async fn click_success_page_continue(&self) -> Result<()> {
        self.actions.click(Self::SUCCESS_PAGE_CONTINUE_BUTTON).await
    }

    /// Success message text, or empty string when none is visible.
    ///
    /// Falls back to scanning all matches for a displayed one when the
    /// visibility wait misses (the container is occasionally rendered
    /// off-screen before the theme finishes laying out).
    pub async fn success_message(&self) -> String {
        match Waiter::new(self.actions.driver())
            .visibility(Self::SUCCESS_MESSAGE_CONTAINER)
            .await
        {
            Ok(element) => element.text().await.map(|t| t.trim().to_string()).unwrap_or_default(),
            Err(e) => {
                debug!(error = %e, "success message not visible; scanning matches");
                let matches = self
                    .actions
                    .driver()
                    .find_all(Self::SUCCESS_MESSAGE_CONTAINER.by())
                    .await
                    .unwrap_or_default();
                for element in matches {
                    if element.is_displayed().await.unwrap_or(false) {
                        if let Ok(text) = element.text().await {
                            return text.trim().to_string();
                        }
                    }
                }
                String::new()
            }
        }
    }

    /// Error message text, empty when no error container is shown.
    pub async fn error_message(&self) -> String {
        self.actions.text_or_empty(Self::ERROR_MESSAGE_CONTAINER).await
    }

    pub async fn is_error_message_displayed(&self) -> bool {
        self.actions.is_visible(Self::ERROR_MESSAGE_CONTAINER).await
    }
}

#[async_trait]
impl Screen for RegisterPage {
    fn driver(&self) -> &WebDriver {
        self.actions.driver()
    }

    fn screen_name(&self) -> &'static str {
        "registration"
    }

    fn landmark(&self) -> Locator {
        Self::FIRSTNAME_INPUT
    }
}
