//! Locator abstraction for element selection.
//!
//! Each screen module declares its locators as module-level constants, so a
//! locator is a `const`-constructible `(strategy, selector)` pair that is
//! never mutated after definition.

use thirtyfour::By;

/// Lookup strategy for a [`Locator`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// `id` attribute
    Id,
    /// CSS selector
    Css,
    /// Exact link text
    LinkText,
    /// Class name
    ClassName,
    /// Tag name
    Tag,
}

/// An immutable (strategy, selector) pair identifying DOM elements on one
/// screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Locator {
    strategy: Strategy,
    selector: &'static str,
}

impl Locator {
    /// Create a locator
    #[must_use]
    pub const fn new(strategy: Strategy, selector: &'static str) -> Self {
        Self { strategy, selector }
    }

    /// Locator by `id` attribute
    #[must_use]
    pub const fn id(selector: &'static str) -> Self {
        Self::new(Strategy::Id, selector)
    }

    /// Locator by CSS selector
    #[must_use]
    pub const fn css(selector: &'static str) -> Self {
        Self::new(Strategy::Css, selector)
    }

    /// Locator by exact link text
    #[must_use]
    pub const fn link_text(selector: &'static str) -> Self {
        Self::new(Strategy::LinkText, selector)
    }

    /// Locator by class name
    #[must_use]
    pub const fn class_name(selector: &'static str) -> Self {
        Self::new(Strategy::ClassName, selector)
    }

    /// Locator by tag name
    #[must_use]
    pub const fn tag(selector: &'static str) -> Self {
        Self::new(Strategy::Tag, selector)
    }

    /// Get the strategy
    #[must_use]
    pub const fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Get the raw selector string
    #[must_use]
    pub const fn selector(&self) -> &'static str {
        self.selector
    }

    /// Convert to the driver's query type
    #[must_use]
    pub fn to_by(&self) -> By {
        match self.strategy {
            Strategy::Id => By::Id(self.selector),
            Strategy::Css => By::Css(self.selector),
            Strategy::LinkText => By::LinkText(self.selector),
            Strategy::ClassName => By::ClassName(self.selector),
            Strategy::Tag => By::Tag(self.selector),
        }
    }
}

impl std::fmt::Display for Locator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let strategy = match self.strategy {
            Strategy::Id => "id",
            Strategy::Css => "css",
            Strategy::LinkText => "link text",
            Strategy::ClassName => "class",
            Strategy::Tag => "tag",
        };
        write!(f, "{strategy}={}", self.selector)
    }
}
