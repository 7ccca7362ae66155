// Session-scoped helpers: cookies and navigation
//
// The suite never creates or quits the session; the fixture owns the
// lifecycle and every component here just borrows the handle.

use thirtyfour::{Cookie, WebDriver};

use crate::error::Result;

#[derive(Debug, Clone)]
pub struct Session {
    driver: WebDriver,
}

impl Session {
    pub fn new(driver: &WebDriver) -> Self {
        Self {
            driver: driver.clone(),
        }
    }

    // ---- cookies ----

    pub async fn all_cookies(&self) -> Result<Vec<Cookie>> {
        Ok(self.driver.get_all_cookies().await?)
    }

    /// Looks up one cookie by name.
    pub async fn cookie(&self, name: &str) -> Result<Option<Cookie>> {
        let cookies = self.driver.get_all_cookies().await?;
        Ok(cookies.into_iter().find(|c| c.name == name))
    }

    /// Deletes every cookie in the session, simulating session loss.
    pub async fn delete_all_cookies(&self) -> Result<()> {
        Ok(self.driver.delete_all_cookies().await?)
    }

    pub async fn delete_cookie(&self, name: &str) -> Result<()> {
        Ok(self.driver.delete_cookie(name).await?)
    }

    // ---- navigation ----

    pub async fn goto(&self, url: &str) -> Result<()> {
        Ok(self.driver.goto(url).await?)
    }

    pub async fn refresh(&self) -> Result<()> {
        Ok(self.driver.refresh().await?)
    }

    pub async fn back(&self) -> Result<()> {
        Ok(self.driver.back().await?)
    }

    pub async fn forward(&self) -> Result<()> {
        Ok(self.driver.forward().await?)
    }

    pub async fn current_url(&self) -> Result<String> {
        Ok(self.driver.current_url().await?.to_string())
    }

    pub async fn title(&self) -> Result<String> {
        Ok(self.driver.title().await?)
    }

    pub async fn page_source(&self) -> Result<String> {
        Ok(self.driver.source().await?)
    }

    pub async fn maximize_window(&self) -> Result<()> {
        Ok(self.driver.maximize_window().await?)
    }
}
