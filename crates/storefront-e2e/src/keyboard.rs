// Keyboard-driven entry
//
// Tab/Enter navigation and character-at-a-time typing for scenarios that
// exercise the form the way a keyboard user would.

use std::time::Duration;

use thirtyfour::{Key, WebElement};

use crate::error::Result;

/// Default inter-key delay for slow typing.
pub const SLOW_TYPE_DELAY: Duration = Duration::from_millis(50);

/// Types `text` into the element, then advances focus with Tab.
pub async fn type_and_tab(element: &WebElement, text: &str) -> Result<()> {
    element.send_keys(text).await?;
    element.send_keys(Key::Tab).await?;
    Ok(())
}

/// Types `text` into the element, then submits with Enter.
pub async fn type_and_enter(element: &WebElement, text: &str) -> Result<()> {
    element.send_keys(text).await?;
    element.send_keys(Key::Enter).await?;
    Ok(())
}

pub async fn press_enter(element: &WebElement) -> Result<()> {
    element.send_keys(Key::Enter).await?;
    Ok(())
}

pub async fn press_tab(element: &WebElement) -> Result<()> {
    element.send_keys(Key::Tab).await?;
    Ok(())
}

pub async fn press_escape(element: &WebElement) -> Result<()> {
    element.send_keys(Key::Escape).await?;
    Ok(())
}

/// Clears the field with the keyboard: select-all, then delete.
pub async fn clear_with_keys(element: &WebElement) -> Result<()> {
    element.send_keys(Key::Control + "a").await?;
    element.send_keys(Key::Delete).await?;
    Ok(())
}

/// Types character-at-a-time with a fixed delay between keys.
///
/// The field is cleared first; the end state is exactly `text`.
pub async fn slow_type(element: &WebElement, text: &str, delay: Duration) -> Result<()> {
    element.clear().await?;
    for character in text.chars() {
        element.send_keys(character.to_string()).await?;
        tokio::time::sleep(delay).await;
    }
    Ok(())
}
