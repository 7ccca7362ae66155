// Element interaction - resolve, then exactly one driver call
//
// Each action resolves its locator through the wait layer using the
// minimum condition it needs (click wants clickability, reads want
// presence), performs a single driver call, and maps driver failures to
// the typed error taxonomy. The `*_or_empty` / `is_*` probes are the
// fail-soft convenience layer: they collapse "verified absent" and
// "could not verify" into a neutral default, which is exactly the
// distinction `resolve()` exists to preserve - use it when the
// difference matters.

use std::time::Duration;

use thirtyfour::error::WebDriverError;
use thirtyfour::{Key, WebDriver, WebElement};
use tracing::debug;

use crate::config::{DEFAULT_POLL_INTERVAL, DEFAULT_WAIT_TIMEOUT, Settings};
use crate::error::{Error, Result};
use crate::locator::Locator;
use crate::wait::{Condition, Resolve, Waiter};

fn classify(err: WebDriverError, locator: Locator) -> Error {
    match err {
        WebDriverError::StaleElementReference(_) => Error::Stale(locator.to_string()),
        WebDriverError::ElementNotInteractable(_) | WebDriverError::ElementClickIntercepted(_) => {
            Error::NotInteractable(locator.to_string())
        }
        WebDriverError::NoSuchElement(_) => Error::NotFound(locator.to_string()),
        other => Error::Driver(other),
    }
}

/// One-call-per-action wrapper over a shared session handle.
#[derive(Debug, Clone)]
pub struct Interactor {
    driver: WebDriver,
    timeout: Duration,
    poll_interval: Duration,
}

impl Interactor {
    pub fn new(driver: &WebDriver) -> Self {
        Self {
            driver: driver.clone(),
            timeout: DEFAULT_WAIT_TIMEOUT,
            poll_interval: DEFAULT_POLL_INTERVAL,
        }
    }

    pub fn with_settings(driver: &WebDriver, settings: &Settings) -> Self {
        Self {
            driver: driver.clone(),
            timeout: settings.wait_timeout,
            poll_interval: settings.poll_interval,
        }
    }

    pub fn driver(&self) -> &WebDriver {
        &self.driver
    }

    pub fn waiter(&self) -> Waiter {
        Waiter::new(&self.driver)
            .with_timeout(self.timeout)
            .with_poll_interval(self.poll_interval)
    }

    /// Typed resolution of a locator under the given condition.
    pub async fn resolve(&self, locator: Locator, condition: Condition) -> Resolve {
        self.waiter().resolve(locator, condition).await
    }

    /// Clicks the first match once it is clickable.
    pub async fn click(&self, locator: Locator) -> Result<()> {
        let element = self.waiter().clickability(locator).await?;
        element.click().await.map_err(|e| classify(e, locator))
    }

    /// Clears the field and types `text` into it.
    ///
    /// The post-condition is that the field value equals exactly `text`,
    /// regardless of prior content.
    pub async fn type_text(&self, locator: Locator, text: &str) -> Result<()> {
        let element = self.waiter().presence(locator).await?;
        element.clear().await.map_err(|e| classify(e, locator))?;
        element.send_keys(text).await.map_err(|e| classify(e, locator))
    }

    /// Types `text` without clearing first.
    pub async fn append_text(&self, locator: Locator, text: &str) -> Result<()> {
        let element = self.waiter().presence(locator).await?;
        element.send_keys(text).await.map_err(|e| classify(e, locator))
    }

    /// Clears an input field.
    pub async fn clear(&self, locator: Locator) -> Result<()> {
        let element = self.waiter().presence(locator).await?;
        element.clear().await.map_err(|e| classify(e, locator))
    }

    /// Visible text of the first match.
    pub async fn text(&self, locator: Locator) -> Result<String> {
        let element = self.waiter().presence(locator).await?;
        element.text().await.map_err(|e| classify(e, locator))
    }

    /// Attribute value of the first match; `None` when the attribute is absent.
    pub async fn attr(&self, locator: Locator, name: &str) -> Result<Option<String>> {
        let element = self.waiter().presence(locator).await?;
        element.attr(name).await.map_err(|e| classify(e, locator))
    }

    /// The `value` attribute, empty string when absent.
    pub async fn value(&self, locator: Locator) -> Result<String> {
        Ok(self.attr(locator, "value").await?.unwrap_or_default())
    }

    /// Computed CSS property of the first match.
    pub async fn css_value(&self, locator: Locator, property: &str) -> Result<String> {
        let element = self.waiter().presence(locator).await?;
        element
            .css_value(property)
            .await
            .map_err(|e| classify(e, locator))
    }

    /// Sends a single key to the first match.
    pub async fn press(&self, locator: Locator, key: Key) -> Result<()> {
        let element = self.waiter().presence(locator).await?;
        element.send_keys(key).await.map_err(|e| classify(e, locator))
    }

    /// Moves the pointer over the first match.
    pub async fn hover(&self, locator: Locator) -> Result<()> {
        let element = self.waiter().presence(locator).await?;
        self.driver
            .action_chain()
            .move_to_element_center(&element)
            .perform()
            .await
            .map_err(|e| classify(e, locator))
    }

    /// Scrolls the first match into view.
    pub async fn scroll_to(&self, locator: Locator) -> Result<()> {
        let element = self.waiter().presence(locator).await?;
        element
            .scroll_into_view()
            .await
            .map_err(|e| classify(e, locator))
    }

    /// Number of matches right now, without waiting. Zero on any failure.
    pub async fn count(&self, locator: Locator) -> usize {
        self.driver
            .find_all(locator.by())
            .await
            .map(|elements| elements.len())
            .unwrap_or(0)
    }

    /// Resolved handle for callers that need the raw element (dropdowns,
    /// checkbox helpers, keyboard entry).
    pub async fn element(&self, locator: Locator, condition: Condition) -> Result<WebElement> {
        match condition {
            Condition::Presence => self.waiter().presence(locator).await,
            Condition::Visibility => self.waiter().visibility(locator).await,
            Condition::Clickability => self.waiter().clickability(locator).await,
        }
    }

    // ---- fail-soft probes ----

    /// Whether the locator matches anything right now. Immediate, no wait.
    pub async fn is_present(&self, locator: Locator) -> bool {
        self.count(locator).await > 0
    }

    /// Whether the first match becomes visible within the wait budget.
    pub async fn is_visible(&self, locator: Locator) -> bool {
        self.resolve(locator, Condition::Visibility).await.is_found()
    }

    /// Whether the first match is enabled right now. Immediate, no wait.
    pub async fn is_enabled(&self, locator: Locator) -> bool {
        match self.driver.find(locator.by()).await {
            Ok(element) => element.is_enabled().await.unwrap_or(false),
            Err(_) => false,
        }
    }

    /// Text of the first match, or empty string when it cannot be read.
    pub async fn text_or_empty(&self, locator: Locator) -> String {
        match self.text(locator).await {
            Ok(text) => text,
            Err(e) => {
                debug!(locator = %locator, error = %e, "text read collapsed to empty");
                String::new()
            }
        }
    }
}
