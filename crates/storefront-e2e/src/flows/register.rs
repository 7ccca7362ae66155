// Registration scenarios
//
// Country is always selected before zone: the zone options are populated
// from the selected country, and the page object waits for that
// repopulation instead of sleeping.

use std::time::Duration;

use thirtyfour::WebDriver;
use tracing::{debug, warn};

use crate::alert::Alerts;
use crate::config::Settings;
use crate::data::UserProfile;
use crate::error::Result;
use crate::flows::{SuccessCheck, SuccessSignal};
use crate::keyboard;
use crate::locator::Locator;
use crate::pages::{RegisterPage, Screen};
use crate::session::Session;
use crate::wait::{Condition, Waiter};

/// Input for one registration attempt.
///
/// Optional fields are only filled when present; uniqueness of email and
/// login name is the caller's responsibility.
#[derive(Debug, Clone)]
pub struct Registration {
    pub firstname: String,
    pub lastname: String,
    pub email: String,
    pub telephone: Option<String>,
    pub fax: Option<String>,
    pub company: Option<String>,
    pub address: String,
    pub city: String,
    pub zone: String,
    pub postcode: String,
    pub country: String,
    pub loginname: String,
    pub password: String,
    pub newsletter: bool,
    pub accept_terms: bool,
}

impl Registration {
    /// Builds an attempt from a fixture profile. Callers should replace
    /// email and loginname with fresh unique values before submitting.
    pub fn from_profile(profile: &UserProfile) -> Self {
        Self {
            firstname: profile.firstname.clone(),
            lastname: profile.lastname.clone(),
            email: profile.email.clone(),
            telephone: profile.telephone.clone(),
            fax: profile.fax.clone(),
            company: profile.company.clone(),
            address: profile.address.clone(),
            city: profile.city.clone(),
            zone: profile.zone.clone(),
            postcode: profile.postcode.clone(),
            country: profile.country.clone(),
            loginname: profile.loginname.clone(),
            password: profile.password.clone(),
            newsletter: false,
            accept_terms: true,
        }
    }
}

/// Reduced outcome of a flexible registration attempt.
#[derive(Debug, Clone)]
pub struct RegisterOutcome {
    pub success: bool,
    pub message: String,
}

/// Flow over the registration page.
pub struct RegisterFlow {
    page: RegisterPage,
    session: Session,
    alerts: Alerts,
}

impl RegisterFlow {
    pub fn new(driver: &WebDriver, settings: &Settings) -> Self {
        Self {
            page: RegisterPage::new(driver, settings),
            session: Session::new(driver),
            alerts: Alerts::new(driver).with_timeout(Duration::from_secs(2)),
        }
    }

    pub fn page(&self) -> &RegisterPage {
        &self.page
    }

    fn driver(&self) -> &WebDriver {
        self.page.driver()
    }

    /// The ordered success cascade for registration. First positive
    /// signal wins; later ones are never consulted.
    fn success_check(&self) -> SuccessCheck {
        SuccessCheck::new(vec![
            SuccessSignal::UrlContains("account/success"),
            SuccessSignal::ElementVisible(RegisterPage::SUCCESS_MESSAGE_CONTAINER),
            SuccessSignal::PageSourceContains("Your Account"),
            SuccessSignal::PageSourceContains("Success"),
            SuccessSignal::PageSourceContains("Thank you"),
        ])
    }

    async fn fill_mandatory_fields(&self, input: &Registration) -> Result<()> {
        self.page.enter_firstname(&input.firstname).await?;
        self.page.enter_lastname(&input.lastname).await?;
        self.page.enter_email(&input.email).await?;
        if let Some(telephone) = &input.telephone {
            self.page.enter_telephone(telephone).await?;
        }
        if let Some(fax) = &input.fax {
            self.page.enter_fax(fax).await?;
        }
        if let Some(company) = &input.company {
            self.page.enter_company(company).await?;
        }
        self.page.enter_address(&input.address).await?;
        self.page.enter_city(&input.city).await?;
        self.page.select_country(&input.country).await?;
        self.page.select_zone(&input.zone).await?;
        self.page.enter_postcode(&input.postcode).await?;
        self.page.enter_loginname(&input.loginname).await?;
        self.page.enter_password(&input.password).await?;
        self.page.enter_confirm_password(&input.password).await?;
        Ok(())
    }

    async fn submit(&self, input: &Registration) -> Result<()> {
        if input.newsletter {
            self.page.select_newsletter_yes().await?;
        } else {
            self.page.select_newsletter_no().await?;
        }
        if input.accept_terms {
            self.page.accept_terms().await?;
        }
        self.page.click_continue().await?;
        Ok(())
    }

    /// Best-effort handling of the "Save address?" prompt some browsers
    /// raise after submission: dismiss a native dialog if one opened,
    /// otherwise try the themed modal's Save button.
    async fn handle_save_address_dialog(&self) {
        if self.alerts.wait_for_alert().await {
            match self.alerts.dismiss().await {
                Ok(text) => debug!(text = %text, "dismissed save-address dialog"),
                Err(e) => debug!(error = %e, "save-address dialog vanished before dismissal"),
            }
            return;
        }
        const SAVE_BUTTONS: [Locator; 2] = [
            Locator::xpath("//div[@role='dialog']//button[contains(text(), 'Save')]"),
            Locator::xpath("//button[contains(text(), 'Save')]"),
        ];
        for button in SAVE_BUTTONS {
            let found = Waiter::new(self.driver())
                .with_timeout(Duration::from_secs(1))
                .clickability(button)
                .await;
            if let Ok(element) = found {
                if element.click().await.is_ok() {
                    debug!(button = %button, "closed save-address modal");
                    return;
                }
            }
        }
        debug!("no save-address dialog appeared");
    }

    /// Registers with every mandatory field populated and terms accepted.
    pub async fn register_with_mandatory_fields(&self, input: &Registration) -> Result<bool> {
        self.page.navigate().await?;
        self.fill_mandatory_fields(input).await?;
        self.submit(input).await?;
        self.handle_save_address_dialog().await;
        Ok(self.success_check().is_success(self.driver()).await)
    }

    /// Registers with the newsletter subscription enabled.
    pub async fn register_with_newsletter(&self, input: &Registration) -> Result<bool> {
        let input = Registration {
            newsletter: true,
            ..input.clone()
        };
        self.page.navigate().await?;
        self.fill_mandatory_fields(&input).await?;
        self.submit(&input).await?;
        Ok(self.success_check().is_success(self.driver()).await)
    }

    /// Submits with most mandatory fields missing; returns the form error.
    pub async fn register_with_missing_fields(
        &self,
        firstname: &str,
        email: &str,
    ) -> Result<String> {
        self.page.navigate().await?;
        self.page.enter_firstname(firstname).await?;
        self.page.enter_email(email).await?;
        self.page.click_continue().await?;
        Ok(self.page.error_message().await)
    }

    /// Clears every session cookie mid-scenario, then registers with a
    /// fresh session. Verifies no hidden dependency on cookie-carried
    /// state.
    pub async fn register_after_clearing_cookies(&self, input: &Registration) -> Result<bool> {
        self.page.navigate().await?;
        self.session.delete_all_cookies().await?;
        self.page.navigate().await?;
        self.fill_mandatory_fields(input).await?;
        self.submit(input).await?;
        self.handle_save_address_dialog().await;
        Ok(self.success_check().is_success(self.driver()).await)
    }

    /// Fills the form with Tab-advanced keyboard entry and submits with
    /// the Enter key, falling back to a button click if Enter does not
    /// redirect within a short budget.
    ///
    /// The fallback may be masking a keyboard-accessibility defect in
    /// the form itself; it is logged loudly rather than silently taken.
    pub async fn register_with_keyboard(&self, input: &Registration) -> Result<bool> {
        self.page.navigate().await?;

        let actions = self.page.actions();
        let tabbed = [
            (RegisterPage::FIRSTNAME_INPUT, input.firstname.as_str()),
            (RegisterPage::LASTNAME_INPUT, input.lastname.as_str()),
            (RegisterPage::EMAIL_INPUT, input.email.as_str()),
        ];
        for (locator, text) in tabbed {
            let element = actions.element(locator, Condition::Presence).await?;
            keyboard::type_and_tab(&element, text).await?;
        }
        // Optional fields: type when provided, Tab through otherwise to
        // keep focus order identical to a keyboard user's.
        for (locator, value) in [
            (RegisterPage::TELEPHONE_INPUT, input.telephone.as_deref()),
            (RegisterPage::FAX_INPUT, input.fax.as_deref()),
            (RegisterPage::COMPANY_INPUT, input.company.as_deref()),
        ] {
            let element = actions.element(locator, Condition::Presence).await?;
            match value {
                Some(text) => keyboard::type_and_tab(&element, text).await?,
                None => keyboard::press_tab(&element).await?,
            }
        }
        for (locator, text) in [
            (RegisterPage::ADDRESS_INPUT, input.address.as_str()),
            (RegisterPage::CITY_INPUT, input.city.as_str()),
        ] {
            let element = actions.element(locator, Condition::Presence).await?;
            keyboard::type_and_tab(&element, text).await?;
        }
        self.page.select_country(&input.country).await?;
        self.page.select_zone(&input.zone).await?;
        for (locator, text) in [
            (RegisterPage::POSTCODE_INPUT, input.postcode.as_str()),
            (RegisterPage::LOGINNAME_INPUT, input.loginname.as_str()),
            (RegisterPage::PASSWORD_INPUT, input.password.as_str()),
            (RegisterPage::CONFIRM_PASSWORD_INPUT, input.password.as_str()),
        ] {
            let element = actions.element(locator, Condition::Presence).await?;
            keyboard::type_and_tab(&element, text).await?;
        }

        self.page.select_newsletter_no().await?;
        self.page.accept_terms().await?;

        let button = actions
            .element(RegisterPage::CONTINUE_BUTTON, Condition::Clickability)
            .await?;
        keyboard::press_enter(&button).await?;

        let redirected = Waiter::new(self.driver())
            .with_timeout(Duration::from_secs(3))
            .url_contains("account/success")
            .await
            .is_ok();
        if !redirected {
            warn!(
                "enter-key submission did not redirect; falling back to clicking Continue \
                 (the fallback may hide a keyboard-accessibility defect)"
            );
            self.page.click_continue().await?;
        }

        Ok(self.success_check().is_success(self.driver()).await)
    }

    /// Flexible registration reducing to a success flag plus whichever
    /// message the form showed.
    pub async fn register_with_options(&self, input: &Registration) -> Result<RegisterOutcome> {
        self.page.navigate().await?;
        self.fill_mandatory_fields(input).await?;
        self.submit(input).await?;
        self.handle_save_address_dialog().await;

        let success = self.success_check().is_success(self.driver()).await;
        let message = if success {
            self.page.success_message().await
        } else {
            self.page.error_message().await
        };
        Ok(RegisterOutcome { success, message })
    }
}
