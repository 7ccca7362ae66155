// Checkbox and radio state management
//
// Clicks are conditional on current state: `check` clicks only when
// unselected, `uncheck` only when selected, `set_state` issues at most
// one click and verifies the post-condition by re-reading selection
// state. Calling `set_state` twice with the same target state clicks
// zero times on the second call.

use thirtyfour::WebElement;

use crate::error::Result;

/// Reads the current selection state.
pub async fn is_checked(element: &WebElement) -> Result<bool> {
    Ok(element.is_selected().await?)
}

/// Selects the control, clicking only if it is currently unselected.
///
/// Returns the re-read selection state (true on success).
pub async fn check(element: &WebElement) -> Result<bool> {
    if !element.is_selected().await? {
        element.click().await?;
    }
    Ok(element.is_selected().await?)
}

/// Deselects the control, clicking only if it is currently selected.
///
/// Returns true when the control ends up unselected.
pub async fn uncheck(element: &WebElement) -> Result<bool> {
    if element.is_selected().await? {
        element.click().await?;
    }
    Ok(!element.is_selected().await?)
}

/// Unconditional single click, flipping whatever the current state is.
pub async fn toggle(element: &WebElement) -> Result<()> {
    element.click().await?;
    Ok(())
}

/// Drives the control to `desired`, clicking at most once.
///
/// Returns whether the re-read state matches `desired`.
pub async fn set_state(element: &WebElement, desired: bool) -> Result<bool> {
    let current = element.is_selected().await?;
    if current != desired {
        element.click().await?;
    }
    Ok(element.is_selected().await? == desired)
}
