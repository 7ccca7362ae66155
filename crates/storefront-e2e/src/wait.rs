// Explicit waits - bounded polling against the live DOM
//
// Every variant shares one polling loop: query, test the predicate, sleep
// a fixed interval, repeat until the deadline. No backoff, no jitter, no
// caching - each tick re-queries the DOM from scratch, so a handle is only
// ever as fresh as the tick that produced it.

use std::future::Future;
use std::time::{Duration, Instant};

use thirtyfour::error::WebDriverError;
use thirtyfour::{WebDriver, WebElement};

use crate::config::{DEFAULT_POLL_INTERVAL, DEFAULT_WAIT_TIMEOUT};
use crate::error::{Error, Result};
use crate::locator::Locator;

/// Predicate variants over (driver, locator).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Condition {
    /// Node exists in the DOM.
    Presence,
    /// Node exists, has non-zero rendered size, and no hiding style.
    Visibility,
    /// Visible AND enabled.
    Clickability,
}

/// Typed outcome of resolving a locator.
///
/// Distinguishes "verified absent" (`NotFound`) from "present but never
/// reached the required state" (`Timeout`) from "detached mid-check"
/// (`Stale`), so callers are not forced to collapse all three into one
/// neutral default.
#[derive(Debug)]
pub enum Resolve {
    Found(WebElement),
    NotFound,
    Timeout,
    Stale,
}

impl Resolve {
    pub fn is_found(&self) -> bool {
        matches!(self, Resolve::Found(_))
    }
}

// What a single poll tick saw when the predicate did not hold.
enum Miss {
    Absent,
    Unsatisfied,
    Stale,
}

fn is_stale(err: &WebDriverError) -> bool {
    matches!(err, WebDriverError::StaleElementReference(_))
}

/// Bounded polling loop over a shared session handle.
///
/// Borrows the session (cheap handle clone); never owns its lifecycle.
#[derive(Debug, Clone)]
pub struct Waiter {
    driver: WebDriver,
    timeout: Duration,
    poll_interval: Duration,
}

impl Waiter {
    pub fn new(driver: &WebDriver) -> Self {
        Self {
            driver: driver.clone(),
            timeout: DEFAULT_WAIT_TIMEOUT,
            poll_interval: DEFAULT_POLL_INTERVAL,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    // One DOM query plus predicate check. First-match semantics.
    async fn observe(&self, locator: Locator, condition: Condition) -> std::result::Result<WebElement, Miss> {
        let elements = match self.driver.find_all(locator.by()).await {
            Ok(elements) => elements,
            Err(_) => return Err(Miss::Absent),
        };
        let Some(element) = elements.into_iter().next() else {
            return Err(Miss::Absent);
        };
        if condition == Condition::Presence {
            return Ok(element);
        }
        let displayed = match element.is_displayed().await {
            Ok(displayed) => displayed,
            Err(e) if is_stale(&e) => return Err(Miss::Stale),
            Err(_) => return Err(Miss::Unsatisfied),
        };
        if !displayed {
            return Err(Miss::Unsatisfied);
        }
        if condition == Condition::Visibility {
            return Ok(element);
        }
        match element.is_enabled().await {
            Ok(true) => Ok(element),
            Ok(false) => Err(Miss::Unsatisfied),
            Err(e) if is_stale(&e) => Err(Miss::Stale),
            Err(_) => Err(Miss::Unsatisfied),
        }
    }

    /// Resolves a locator to a typed outcome, polling until the deadline.
    pub async fn resolve(&self, locator: Locator, condition: Condition) -> Resolve {
        let start = Instant::now();
        let mut last_miss = Miss::Absent;
        loop {
            match self.observe(locator, condition).await {
                Ok(element) => return Resolve::Found(element),
                Err(miss) => last_miss = miss,
            }
            if start.elapsed() >= self.timeout {
                return match last_miss {
                    Miss::Absent => Resolve::NotFound,
                    Miss::Unsatisfied => Resolve::Timeout,
                    Miss::Stale => Resolve::Stale,
                };
            }
            tokio::time::sleep(self.poll_interval).await;
        }
    }

    async fn require(&self, locator: Locator, condition: Condition) -> Result<WebElement> {
        match self.resolve(locator, condition).await {
            Resolve::Found(element) => Ok(element),
            Resolve::NotFound => Err(Error::NotFound(locator.to_string())),
            Resolve::Stale => Err(Error::Stale(locator.to_string())),
            Resolve::Timeout => Err(Error::Timeout {
                subject: locator.to_string(),
                timeout_ms: self.timeout.as_millis() as u64,
            }),
        }
    }

    /// Waits until the node exists in the DOM.
    pub async fn presence(&self, locator: Locator) -> Result<WebElement> {
        self.require(locator, Condition::Presence).await
    }

    /// Waits until the node exists and is rendered visible.
    pub async fn visibility(&self, locator: Locator) -> Result<WebElement> {
        self.require(locator, Condition::Visibility).await
    }

    /// Waits until the node is visible and enabled.
    pub async fn clickability(&self, locator: Locator) -> Result<WebElement> {
        self.require(locator, Condition::Clickability).await
    }

    /// Waits until the node is absent from the DOM or hidden.
    pub async fn invisibility(&self, locator: Locator) -> Result<()> {
        let start = Instant::now();
        loop {
            let gone = match self.driver.find_all(locator.by()).await {
                Ok(elements) => match elements.into_iter().next() {
                    None => true,
                    Some(element) => match element.is_displayed().await {
                        Ok(displayed) => !displayed,
                        // Detached between query and check counts as gone.
                        Err(e) if is_stale(&e) => true,
                        Err(_) => false,
                    },
                },
                Err(_) => true,
            };
            if gone {
                return Ok(());
            }
            if start.elapsed() >= self.timeout {
                return Err(Error::Timeout {
                    subject: format!("invisibility of {}", locator),
                    timeout_ms: self.timeout.as_millis() as u64,
                });
            }
            tokio::time::sleep(self.poll_interval).await;
        }
    }

    /// Waits for an arbitrary predicate over the session.
    ///
    /// `subject` names the condition in the timeout error.
    pub async fn condition<F, Fut>(&self, subject: &str, mut probe: F) -> Result<()>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = bool>,
    {
        let start = Instant::now();
        loop {
            if probe().await {
                return Ok(());
            }
            if start.elapsed() >= self.timeout {
                return Err(Error::Timeout {
                    subject: subject.to_string(),
                    timeout_ms: self.timeout.as_millis() as u64,
                });
            }
            tokio::time::sleep(self.poll_interval).await;
        }
    }

    /// Waits until the current URL contains `fragment`.
    pub async fn url_contains(&self, fragment: &str) -> Result<()> {
        let driver = self.driver.clone();
        let fragment_owned = fragment.to_string();
        self.condition(&format!("url contains '{}'", fragment), move || {
            let driver = driver.clone();
            let fragment = fragment_owned.clone();
            async move {
                driver
                    .current_url()
                    .await
                    .map(|url| url.as_str().contains(&fragment))
                    .unwrap_or(false)
            }
        })
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Builder coverage only; polling against a live DOM is exercised by
    // the integration tests under tests/.

    #[test]
    fn test_builder_overrides() {
        // A Waiter cannot be built without a session, but the builder
        // methods are plain field swaps; verify the defaults they start
        // from instead.
        assert_eq!(DEFAULT_WAIT_TIMEOUT, Duration::from_secs(10));
        assert_eq!(DEFAULT_POLL_INTERVAL, Duration::from_millis(500));
    }

    #[test]
    fn test_resolve_is_found() {
        assert!(!Resolve::NotFound.is_found());
        assert!(!Resolve::Timeout.is_found());
        assert!(!Resolve::Stale.is_found());
    }
}
