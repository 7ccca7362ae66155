// Shared test fixture: session construction and tracing setup
//
// Requires a WebDriver endpoint (chromedriver or a selenium server) at
// WEBDRIVER_URL (default http://localhost:4444). The fixture owns the
// session lifecycle; the suite under test only ever borrows the handle.

use std::path::PathBuf;
use std::sync::Once;

use anyhow::Result;
use storefront_e2e::{Browser, Settings};
use thirtyfour::{DesiredCapabilities, WebDriver};

static INIT: Once = Once::new();

pub fn init_tracing() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .try_init();
    });
}

pub fn settings() -> Settings {
    init_tracing();
    Settings::from_env()
}

/// Opens a fresh browser session. One session per test, never shared.
pub async fn new_session(settings: &Settings) -> Result<WebDriver> {
    let driver = match settings.browser {
        Browser::Chrome => {
            let mut caps = DesiredCapabilities::chrome();
            if settings.headless {
                caps.set_headless()?;
            }
            caps.add_chrome_arg("--window-size=1920,1080")?;
            WebDriver::new(&settings.webdriver_url, caps).await?
        }
        Browser::Firefox => {
            let mut caps = DesiredCapabilities::firefox();
            if settings.headless {
                caps.set_headless()?;
            }
            WebDriver::new(&settings.webdriver_url, caps).await?
        }
    };
    Ok(driver)
}

/// Path to the read-only user-profile fixture.
pub fn users_file() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data/users.json")
}
