// Account management scenarios

use thirtyfour::WebDriver;

use crate::error::Result;
use crate::pages::{AccountPage, Screen};

/// Account information as currently shown in the edit form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountInfo {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub telephone: String,
    pub company: String,
}

/// Presence map of the dashboard's required sections.
#[derive(Debug, Clone, Copy)]
pub struct DashboardSections {
    pub dashboard: bool,
    pub info_section: bool,
    pub edit_button: bool,
    pub logout_link: bool,
}

impl DashboardSections {
    pub fn all_present(&self) -> bool {
        self.dashboard && self.info_section && self.edit_button && self.logout_link
    }
}

/// Fields to change in an update; `None` leaves a field untouched.
#[derive(Debug, Clone, Default)]
pub struct AccountUpdate {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub telephone: Option<String>,
    pub company: Option<String>,
}

/// Input for a password change.
#[derive(Debug, Clone)]
pub struct PasswordChange {
    pub current: String,
    pub new: String,
    pub confirm: String,
}

/// Reduced outcome of a flexible account update.
#[derive(Debug, Clone)]
pub struct AccountUpdateOutcome {
    pub success: bool,
    pub success_message: String,
    pub error_message: String,
    pub info: AccountInfo,
}

/// Flow over the account page. Assumes an authenticated session.
pub struct AccountFlow {
    page: AccountPage,
}

impl AccountFlow {
    pub fn new(driver: &WebDriver) -> Self {
        Self {
            page: AccountPage::new(driver),
        }
    }

    pub fn page(&self) -> &AccountPage {
        &self.page
    }

    async fn open_dashboard(&self) -> Result<()> {
        self.page.verify_on_screen().await?;
        self.page.click_account_dashboard_link().await
    }

    async fn fill_information(&self, update: &AccountUpdate) -> Result<()> {
        if let Some(first_name) = &update.first_name {
            self.page.enter_first_name(first_name).await?;
        }
        if let Some(last_name) = &update.last_name {
            self.page.enter_last_name(last_name).await?;
        }
        if let Some(email) = &update.email {
            self.page.enter_email(email).await?;
        }
        if let Some(telephone) = &update.telephone {
            self.page.enter_telephone(telephone).await?;
        }
        if let Some(company) = &update.company {
            self.page.enter_company(company).await?;
        }
        Ok(())
    }

    async fn read_information(&self) -> Result<AccountInfo> {
        Ok(AccountInfo {
            first_name: self.page.first_name().await?,
            last_name: self.page.last_name().await?,
            email: self.page.email().await?,
            telephone: self.page.telephone().await?,
            company: self.page.company().await?,
        })
    }

    async fn change_password(&self, change: &PasswordChange) -> Result<()> {
        self.page.click_change_password_link().await?;
        self.page.enter_current_password(&change.current).await?;
        self.page.enter_new_password(&change.new).await?;
        self.page.enter_confirm_password(&change.confirm).await?;
        self.page.click_change_password_button().await
    }

    /// Opens the dashboard and reports whether it rendered.
    pub async fn view_dashboard(&self) -> Result<bool> {
        self.open_dashboard().await?;
        Ok(self.page.is_dashboard_displayed().await)
    }

    /// Presence of each required dashboard section.
    pub async fn dashboard_sections(&self) -> Result<DashboardSections> {
        self.open_dashboard().await?;
        Ok(DashboardSections {
            dashboard: self.page.is_dashboard_displayed().await,
            info_section: self.page.is_information_section_displayed().await,
            edit_button: self.page.is_edit_account_button_displayed().await,
            logout_link: self.page.is_logout_link_displayed().await,
        })
    }

    /// Updates account information; success means a success message appeared.
    pub async fn update_information(&self, update: &AccountUpdate) -> Result<bool> {
        self.open_dashboard().await?;
        self.page.click_edit_account_button().await?;
        self.fill_information(update).await?;
        self.page.click_save_changes_button().await?;
        Ok(!self.page.success_message().await.is_empty())
    }

    /// Updates account information and reads back what the form now shows.
    pub async fn update_and_read_back(&self, update: &AccountUpdate) -> Result<AccountInfo> {
        self.open_dashboard().await?;
        self.page.click_edit_account_button().await?;
        self.fill_information(update).await?;
        self.page.click_save_changes_button().await?;
        self.read_information().await
    }

    /// Attempts an update with an invalid email; returns the error message.
    pub async fn update_with_invalid_email(
        &self,
        first_name: &str,
        invalid_email: &str,
    ) -> Result<String> {
        self.open_dashboard().await?;
        self.page.click_edit_account_button().await?;
        self.fill_information(&AccountUpdate {
            first_name: Some(first_name.to_string()),
            email: Some(invalid_email.to_string()),
            ..AccountUpdate::default()
        })
        .await?;
        self.page.click_save_changes_button().await?;
        Ok(self.page.error_message().await)
    }

    /// Attempts an update with the required first name left empty;
    /// returns the error message.
    pub async fn update_with_missing_required_field(&self, last_name: &str) -> Result<String> {
        self.open_dashboard().await?;
        self.page.click_edit_account_button().await?;
        self.fill_information(&AccountUpdate {
            last_name: Some(last_name.to_string()),
            ..AccountUpdate::default()
        })
        .await?;
        self.page.click_save_changes_button().await?;
        Ok(self.page.error_message().await)
    }

    /// Changes the password; success means a success message appeared.
    pub async fn change_account_password(&self, change: &PasswordChange) -> Result<bool> {
        self.open_dashboard().await?;
        self.change_password(change).await?;
        Ok(!self.page.success_message().await.is_empty())
    }

    /// Password change with a wrong current password; returns the error.
    pub async fn change_password_with_wrong_current(
        &self,
        change: &PasswordChange,
    ) -> Result<String> {
        self.open_dashboard().await?;
        self.change_password(change).await?;
        Ok(self.page.error_message().await)
    }

    /// Password change with mismatched confirmation; returns the error.
    pub async fn change_password_with_mismatch(
        &self,
        change: &PasswordChange,
    ) -> Result<String> {
        self.open_dashboard().await?;
        self.change_password(change).await?;
        Ok(self.page.error_message().await)
    }

    /// Whether the edit form is reachable and editable.
    pub async fn information_form_is_editable(&self) -> Result<bool> {
        self.open_dashboard().await?;
        self.page.click_edit_account_button().await?;
        Ok(self.page.is_information_form_displayed().await)
    }

    /// Whether the save button stays enabled with valid data entered.
    pub async fn save_enabled_with_valid_data(
        &self,
        first_name: &str,
        last_name: &str,
    ) -> Result<bool> {
        self.open_dashboard().await?;
        self.page.click_edit_account_button().await?;
        self.fill_information(&AccountUpdate {
            first_name: Some(first_name.to_string()),
            last_name: Some(last_name.to_string()),
            ..AccountUpdate::default()
        })
        .await?;
        Ok(self.page.is_save_changes_button_enabled().await)
    }

    /// Flexible update reducing to messages plus the resulting form state.
    pub async fn update_with_options(
        &self,
        update: &AccountUpdate,
        password_change: Option<&PasswordChange>,
    ) -> Result<AccountUpdateOutcome> {
        self.open_dashboard().await?;
        self.page.click_edit_account_button().await?;
        self.fill_information(update).await?;
        self.page.click_save_changes_button().await?;

        if let Some(change) = password_change {
            self.change_password(change).await?;
        }

        let success_message = self.page.success_message().await;
        let error_message = self.page.error_message().await;
        Ok(AccountUpdateOutcome {
            success: !success_message.is_empty() && error_message.is_empty(),
            success_message,
            error_message,
            info: self.read_information().await?,
        })
    }
}
