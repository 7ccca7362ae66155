// Dropdown handling over the driver's <select> abstraction
//
// Selection is by visible text, value attribute, or 0-based index.
// Deselection is only legal on controls that declare the `multiple`
// attribute; requesting it on a single-select is a typed error rather
// than a driver round-trip that fails obscurely.

use thirtyfour::WebElement;
use thirtyfour::components::SelectElement;

use crate::error::{Error, Result};

/// How to pick an option in a `<select>` element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// By the option's visible text (exact match).
    VisibleText(String),
    /// By the option's `value` attribute.
    Value(String),
    /// By 0-based option index.
    Index(u32),
}

impl From<&str> for Selection {
    fn from(value: &str) -> Self {
        Selection::Value(value.to_string())
    }
}

impl From<String> for Selection {
    fn from(value: String) -> Self {
        Selection::Value(value)
    }
}

/// Selects one option.
pub async fn select(element: &WebElement, selection: &Selection) -> Result<()> {
    let select = SelectElement::new(element).await?;
    match selection {
        Selection::VisibleText(text) => select.select_by_exact_text(text).await?,
        Selection::Value(value) => select.select_by_value(value).await?,
        Selection::Index(index) => select.select_by_index(*index).await?,
    }
    Ok(())
}

pub async fn select_by_visible_text(element: &WebElement, text: &str) -> Result<()> {
    select(element, &Selection::VisibleText(text.to_string())).await
}

pub async fn select_by_value(element: &WebElement, value: &str) -> Result<()> {
    select(element, &Selection::Value(value.to_string())).await
}

pub async fn select_by_index(element: &WebElement, index: u32) -> Result<()> {
    select(element, &Selection::Index(index)).await
}

/// Visible text of the first selected option, `None` when nothing is selected.
pub async fn selected_option_text(element: &WebElement) -> Result<Option<String>> {
    let select = SelectElement::new(element).await?;
    match select.first_selected_option().await {
        Ok(option) => Ok(Some(option.text().await?)),
        Err(_) => Ok(None),
    }
}

/// `value` attribute of the first selected option, `None` when nothing is selected.
pub async fn selected_option_value(element: &WebElement) -> Result<Option<String>> {
    let select = SelectElement::new(element).await?;
    match select.first_selected_option().await {
        Ok(option) => Ok(option.attr("value").await?),
        Err(_) => Ok(None),
    }
}

/// Visible texts of every option in the control.
pub async fn all_options(element: &WebElement) -> Result<Vec<String>> {
    let select = SelectElement::new(element).await?;
    let mut texts = Vec::new();
    for option in select.options().await? {
        texts.push(option.text().await?);
    }
    Ok(texts)
}

/// Whether the control declares multi-select capability.
pub async fn is_multiple(element: &WebElement) -> Result<bool> {
    Ok(element.attr("multiple").await?.is_some())
}

/// Deselects every option. Only legal on multi-select controls.
pub async fn deselect_all(element: &WebElement) -> Result<()> {
    if !is_multiple(element).await? {
        let name = element.attr("id").await?.unwrap_or_else(|| "select".to_string());
        return Err(Error::NotMultiple(name));
    }
    let select = SelectElement::new(element).await?;
    select.deselect_all().await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selection_from_str_is_value() {
        let selection: Selection = "US".into();
        assert_eq!(selection, Selection::Value("US".to_string()));
    }

    #[test]
    fn test_selection_from_string_is_value() {
        let selection: Selection = String::from("223").into();
        assert_eq!(selection, Selection::Value("223".to_string()));
    }
}
