// Locator - immutable (strategy, selector) pair
//
// Page objects expose their locators as associated constants, so the type
// is const-constructible. Conversion to the driver's `By` happens at the
// point of use; first-match semantics are assumed throughout.

use std::fmt;

use thirtyfour::By;

/// Lookup strategy for a [`Locator`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    Id,
    Css,
    XPath,
    LinkText,
    ClassName,
    Name,
}

/// An immutable (strategy, selector) pair identifying zero or more DOM nodes.
///
/// No uniqueness guarantee: all resolution downstream takes the first match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Locator {
    strategy: Strategy,
    selector: &'static str,
}

impl Locator {
    pub const fn new(strategy: Strategy, selector: &'static str) -> Self {
        Self { strategy, selector }
    }

    pub const fn id(selector: &'static str) -> Self {
        Self::new(Strategy::Id, selector)
    }

    pub const fn css(selector: &'static str) -> Self {
        Self::new(Strategy::Css, selector)
    }

    pub const fn xpath(selector: &'static str) -> Self {
        Self::new(Strategy::XPath, selector)
    }

    pub const fn link_text(selector: &'static str) -> Self {
        Self::new(Strategy::LinkText, selector)
    }

    pub const fn class_name(selector: &'static str) -> Self {
        Self::new(Strategy::ClassName, selector)
    }

    pub const fn name(selector: &'static str) -> Self {
        Self::new(Strategy::Name, selector)
    }

    pub const fn strategy(&self) -> Strategy {
        self.strategy
    }

    pub const fn selector(&self) -> &'static str {
        self.selector
    }

    /// Converts to the driver's locator type.
    pub fn by(&self) -> By {
        match self.strategy {
            Strategy::Id => By::Id(self.selector),
            Strategy::Css => By::Css(self.selector),
            Strategy::XPath => By::XPath(self.selector),
            Strategy::LinkText => By::LinkText(self.selector),
            Strategy::ClassName => By::ClassName(self.selector),
            Strategy::Name => By::Name(self.selector),
        }
    }
}

impl fmt::Display for Locator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let prefix = match self.strategy {
            Strategy::Id => "id",
            Strategy::Css => "css",
            Strategy::XPath => "xpath",
            Strategy::LinkText => "link",
            Strategy::ClassName => "class",
            Strategy::Name => "name",
        };
        write!(f, "{}={}", prefix, self.selector)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_const_construction() {
        const FIRSTNAME: Locator = Locator::id("AccountFrm_firstname");
        assert_eq!(FIRSTNAME.strategy(), Strategy::Id);
        assert_eq!(FIRSTNAME.selector(), "AccountFrm_firstname");
    }

    #[test]
    fn test_display_format() {
        let loc = Locator::xpath("//button[@title='Login']");
        assert_eq!(loc.to_string(), "xpath=//button[@title='Login']");

        let loc = Locator::link_text("Login or register");
        assert_eq!(loc.to_string(), "link=Login or register");
    }

    #[test]
    fn test_copy_semantics() {
        let a = Locator::css(".error");
        let b = a;
        assert_eq!(a, b);
    }
}
