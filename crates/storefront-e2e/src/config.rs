// Suite configuration
//
// All knobs come from environment variables with sensible defaults, so a
// plain `cargo test` against a local chromedriver works with zero setup.

use std::env;
use std::path::PathBuf;
use std::time::Duration;

/// Default explicit-wait budget.
pub const DEFAULT_WAIT_TIMEOUT: Duration = Duration::from_secs(10);

/// Fixed polling interval for explicit waits. No backoff, no jitter.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(500);

/// Browser to drive. Chrome is the default everywhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Browser {
    Chrome,
    Firefox,
}

/// Runtime settings for a suite run.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Storefront root, without a trailing slash.
    pub base_url: String,
    /// WebDriver endpoint (chromedriver/geckodriver/selenium-server).
    pub webdriver_url: String,
    pub browser: Browser,
    pub headless: bool,
    pub wait_timeout: Duration,
    pub poll_interval: Duration,
    /// Root for screenshots and other run artifacts.
    pub reports_dir: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            base_url: "https://automationteststore.com".to_string(),
            webdriver_url: "http://localhost:4444".to_string(),
            browser: Browser::Chrome,
            headless: false,
            wait_timeout: DEFAULT_WAIT_TIMEOUT,
            poll_interval: DEFAULT_POLL_INTERVAL,
            reports_dir: PathBuf::from("reports"),
        }
    }
}

impl Settings {
    /// Reads settings from the environment, falling back to defaults.
    ///
    /// Recognized variables: `STORE_BASE_URL`, `WEBDRIVER_URL`, `BROWSER`
    /// (`chrome`/`firefox`), `HEADLESS` (`true`/`1`), `WAIT_TIMEOUT_SECS`,
    /// `REPORTS_DIR`.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let browser = match env::var("BROWSER").as_deref() {
            Ok("firefox") => Browser::Firefox,
            _ => Browser::Chrome,
        };
        let headless = matches!(env::var("HEADLESS").as_deref(), Ok("true") | Ok("1"));
        let wait_timeout = env::var("WAIT_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .map(Duration::from_secs)
            .unwrap_or(defaults.wait_timeout);

        Self {
            base_url: env::var("STORE_BASE_URL")
                .unwrap_or(defaults.base_url)
                .trim_end_matches('/')
                .to_string(),
            webdriver_url: env::var("WEBDRIVER_URL").unwrap_or(defaults.webdriver_url),
            browser,
            headless,
            wait_timeout,
            poll_interval: defaults.poll_interval,
            reports_dir: env::var("REPORTS_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.reports_dir),
        }
    }

    pub fn login_url(&self) -> String {
        format!("{}/index.php?rt=account/login", self.base_url)
    }

    pub fn register_url(&self) -> String {
        format!("{}/index.php?rt=account/create", self.base_url)
    }

    pub fn account_url(&self) -> String {
        format!("{}/index.php?rt=account/account", self.base_url)
    }

    pub fn screenshots_dir(&self) -> PathBuf {
        self.reports_dir.join("screenshots")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let s = Settings::default();
        assert_eq!(s.base_url, "https://automationteststore.com");
        assert_eq!(s.browser, Browser::Chrome);
        assert!(!s.headless);
        assert_eq!(s.poll_interval, Duration::from_millis(500));
    }

    #[test]
    fn test_page_urls() {
        let s = Settings::default();
        assert_eq!(
            s.register_url(),
            "https://automationteststore.com/index.php?rt=account/create"
        );
        assert!(s.login_url().ends_with("rt=account/login"));
        assert!(s.account_url().ends_with("rt=account/account"));
    }

    #[test]
    fn test_screenshots_dir_nested_under_reports() {
        let s = Settings::default();
        assert_eq!(s.screenshots_dir(), PathBuf::from("reports/screenshots"));
    }
}
