//! Browser lifecycle fixture.
//!
//! One [`BrowserFixture`] spans one suite: it connects the WebDriver
//! session at setup, hands the shared [`Session`] to each test in turn, and
//! quits the browser at teardown. Between tests it restores a known-good
//! state (cookies cleared, stray windows closed) on a best-effort basis —
//! failures there are logged and returned, never propagated, because the
//! next test's own setup re-navigates regardless.

use thirtyfour::{WebDriver, WindowHandle};
use tracing::{info, warn};

use crate::config::SuiteConfig;
use crate::error::{E2eError, E2eResult};
use crate::session::{CleanupFailure, Session};

/// Browser session scoped to one test suite
#[derive(Debug)]
pub struct BrowserFixture {
    config: SuiteConfig,
    session: Session,
    home_window: WindowHandle,
}

impl BrowserFixture {
    /// Connect a new browser session using `config`
    pub async fn launch(config: SuiteConfig) -> E2eResult<Self> {
        let capabilities = config.capabilities()?;
        info!(webdriver = %config.webdriver_url, headless = config.headless, "starting browser session");
        let driver = WebDriver::new(&config.webdriver_url, capabilities)
            .await
            .map_err(|e| E2eError::Fixture {
                message: format!("could not start a session at {}: {e}", config.webdriver_url),
            })?;
        let home_window = driver.window().await?;
        Ok(Self {
            config,
            session: Session::new(driver),
            home_window,
        })
    }

    /// The shared session
    #[must_use]
    pub const fn session(&self) -> &Session {
        &self.session
    }

    /// The configuration the session was started with
    #[must_use]
    pub const fn config(&self) -> &SuiteConfig {
        &self.config
    }

    /// The window the session started in
    #[must_use]
    pub const fn home_window(&self) -> &WindowHandle {
        &self.home_window
    }

    /// Navigate to the site's top page
    pub async fn goto_top(&self) -> E2eResult<()> {
        self.session.goto(&self.config.base_url).await
    }

    /// Restore a known-good state between tests.
    ///
    /// Closes stray windows, refocuses the home window and clears cookies.
    /// Returns the failures that were ignored along the way.
    pub async fn reset(&self) -> Vec<CleanupFailure> {
        let mut ignored = self.session.cleanup_windows(&self.home_window).await;
        if let Err(e) = self.session.delete_cookies().await {
            warn!(error = %e, "ignoring cookie cleanup failure");
            ignored.push(CleanupFailure {
                operation: "delete cookies".into(),
                error: e.to_string(),
            });
        }
        ignored
    }

    /// Quit the browser
    pub async fn quit(self) -> E2eResult<()> {
        self.session.driver().clone().quit().await?;
        Ok(())
    }
}
