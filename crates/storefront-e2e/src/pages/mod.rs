// Page objects - one module per logical screen
//
// Each page maps a screen to named locators plus one method per atomic
// action or readable field. Nothing here composes multiple fields; that
// happens one level up in the flows.

mod account;
mod login;
mod register;

pub use account::AccountPage;
pub use login::LoginPage;
pub use register::RegisterPage;

use async_trait::async_trait;
use thirtyfour::WebDriver;

use crate::error::{Error, Result};
use crate::locator::Locator;
use crate::wait::Waiter;

/// A logical screen with a verifiable landmark.
///
/// Pages are only meaningful while their screen is the active one, so
/// flows call [`Screen::verify_on_screen`] as an explicit precondition
/// before acting, rather than assuming the right screen is loaded and
/// letting actions time out against the wrong one.
#[async_trait]
pub trait Screen {
    fn driver(&self) -> &WebDriver;

    /// Human-readable screen name for error messages.
    fn screen_name(&self) -> &'static str;

    /// An element that exists only when this screen is active.
    fn landmark(&self) -> Locator;

    /// Asserts the landmark is present before any action is attempted.
    async fn verify_on_screen(&self) -> Result<()> {
        let landmark = self.landmark();
        Waiter::new(self.driver())
            .presence(landmark)
            .await
            .map(|_| ())
            .map_err(|_| Error::WrongScreen {
                screen: self.screen_name(),
                landmark: landmark.to_string(),
            })
    }
}
