// Native dialog handling
//
// The storefront raises a browser-native "Save address?" dialog on some
// registration paths; absence of a dialog is a normal outcome here, not
// a failure.

use std::time::Duration;

use thirtyfour::WebDriver;

use crate::error::{Error, Result};
use crate::wait::Waiter;

/// Default budget for waiting on a dialog to open.
pub const DEFAULT_ALERT_TIMEOUT: Duration = Duration::from_secs(5);

/// Dialog helpers over a shared session handle.
#[derive(Debug, Clone)]
pub struct Alerts {
    driver: WebDriver,
    timeout: Duration,
}

impl Alerts {
    pub fn new(driver: &WebDriver) -> Self {
        Self {
            driver: driver.clone(),
            timeout: DEFAULT_ALERT_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Whether a dialog is open right now.
    pub async fn is_present(&self) -> bool {
        self.driver.get_alert_text().await.is_ok()
    }

    /// Polls until a dialog opens. Returns false on timeout.
    pub async fn wait_for_alert(&self) -> bool {
        let driver = self.driver.clone();
        Waiter::new(&self.driver)
            .with_timeout(self.timeout)
            .condition("alert present", move || {
                let driver = driver.clone();
                async move { driver.get_alert_text().await.is_ok() }
            })
            .await
            .is_ok()
    }

    /// Text of the open dialog.
    pub async fn text(&self) -> Result<String> {
        self.driver.get_alert_text().await.map_err(|_| Error::NoAlert)
    }

    /// Accepts (OK) the open dialog, returning its text.
    pub async fn accept(&self) -> Result<String> {
        let text = self.text().await?;
        self.driver.accept_alert().await?;
        Ok(text)
    }

    /// Dismisses (Cancel) the open dialog, returning its text.
    pub async fn dismiss(&self) -> Result<String> {
        let text = self.text().await?;
        self.driver.dismiss_alert().await?;
        Ok(text)
    }

    /// Types into an open prompt dialog.
    pub async fn send_text(&self, text: &str) -> Result<()> {
        if !self.is_present().await {
            return Err(Error::NoAlert);
        }
        self.driver.send_alert_text(text).await?;
        Ok(())
    }
}
