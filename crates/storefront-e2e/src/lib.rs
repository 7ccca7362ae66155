//! storefront-e2e: UI regression suite for the Automation Test Store storefront
//!
//! The suite is layered: test cases call flows, flows sequence page
//! objects, page objects delegate every interaction to the wait-backed
//! interaction wrapper, and the wrapper polls the live DOM through a
//! shared WebDriver session that a test fixture owns.
//!
//! # Example
//!
//! ```ignore
//! use storefront_e2e::{RegisterFlow, Registration, Settings, data};
//! use thirtyfour::{DesiredCapabilities, WebDriver};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let settings = Settings::from_env();
//!     let caps = DesiredCapabilities::chrome();
//!     let driver = WebDriver::new(&settings.webdriver_url, caps).await?;
//!
//!     let mut input = Registration::from_profile(&data::profile(
//!         "data/users.json".as_ref(),
//!         "valid_user",
//!     )?);
//!     input.email = data::unique_email("validuser");
//!     input.loginname = data::unique_login("johndoe");
//!
//!     let flow = RegisterFlow::new(&driver, &settings);
//!     assert!(flow.register_with_mandatory_fields(&input).await?);
//!
//!     driver.quit().await?;
//!     Ok(())
//! }
//! ```

pub mod alert;
pub mod checkbox;
pub mod config;
pub mod data;
pub mod dropdown;
mod error;
pub mod flows;
mod interact;
pub mod keyboard;
mod locator;
pub mod pages;
pub mod screenshot;
pub mod session;
mod wait;

// Re-export error types
pub use error::{Error, Result};

// Re-export the core interaction layer
pub use interact::Interactor;
pub use locator::{Locator, Strategy};
pub use wait::{Condition, Resolve, Waiter};

// Re-export configuration
pub use config::{Browser, DEFAULT_POLL_INTERVAL, DEFAULT_WAIT_TIMEOUT, Settings};

// Re-export page objects and the screen precondition trait
pub use pages::{AccountPage, LoginPage, RegisterPage, Screen};

// Re-export flows and their outcome types
pub use flows::{
    AccountFlow, AccountInfo, AccountUpdate, AccountUpdateOutcome, DashboardSections, LoginFlow,
    LoginOutcome, PasswordChange, RegisterFlow, RegisterOutcome, Registration, SuccessCheck,
    SuccessSignal,
};

// Re-export ambient helpers
pub use alert::Alerts;
pub use screenshot::Screenshots;
pub use session::Session;
