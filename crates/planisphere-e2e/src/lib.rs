//! End-to-end test suite for the HOTEL PLANISPHERE demo site.
//!
//! The library layers a page-object model over a WebDriver session:
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │  tests/ (data-driven suites)                                 │
//! │      │ fixture data (YAML)          │ step records (JSON)    │
//! │      ▼                              ▼                        │
//! │  pages::* ── typed screen graph ── report::TestReporter      │
//! │      │                                                       │
//! │  session::Session ── bounded-wait wrapper                    │
//! │      │                                                       │
//! │  thirtyfour WebDriver (injected browser session)             │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! A page object is a typed handle bound to one screen and is only handed
//! out after the browser's title proves that screen is showing; navigation
//! methods consume the current page and return the next one, following the
//! application's screen graph.

#![warn(missing_docs)]

/// CSS color values read back from computed styles
pub mod color;
/// Suite configuration from the environment
pub mod config;
/// Fixture data access
pub mod data;
/// Result and error types
pub mod error;
/// Browser lifecycle fixture
pub mod fixture;
/// Locator constants support
pub mod locator;
/// Page objects, one per screen
pub mod pages;
/// Step-level test reporting
pub mod report;
/// Bounded-wait browser session wrapper
pub mod session;

pub use color::Color;
pub use config::SuiteConfig;
pub use data::{cases, CaseRecord};
pub use error::{E2eError, E2eResult};
pub use fixture::BrowserFixture;
pub use locator::{Locator, Strategy};
pub use report::{clean_old_results, TestReporter, TestStatus};
pub use session::{CleanupFailure, Session};

/// Commonly used imports for test suites
pub mod prelude {
    pub use crate::color::Color;
    pub use crate::config::SuiteConfig;
    pub use crate::data::{cases, CaseRecord};
    pub use crate::error::{E2eError, E2eResult};
    pub use crate::fixture::BrowserFixture;
    pub use crate::pages::{
        ConfirmPage, Contact, Gender, IconPage, LoginPage, MyPage, PlansPage, Rank, ReservePage,
        RoomPage, Screen, SignupPage, TopPage,
    };
    pub use crate::report::{TestReporter, TestStatus};
    pub use crate::session::Session;
}
