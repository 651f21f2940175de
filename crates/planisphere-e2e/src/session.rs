//! Browser session wrapper.
//!
//! [`Session`] wraps the injected WebDriver handle with bounded-wait element
//! resolution: every lookup polls with a deadline and fails with a typed
//! error when it elapses. Waiting is always polling against a deadline,
//! never a fixed sleep. Business actions (click, submit, navigate) are
//! attempted exactly once; the only tolerance for flakiness is the bounded
//! wait inside element resolution.

use std::sync::OnceLock;
use std::time::{Duration, Instant};

use regex::Regex;
use thirtyfour::components::SelectElement;
use thirtyfour::{WebDriver, WebElement, WindowHandle};
use tracing::{debug, warn};

use crate::error::{E2eError, E2eResult};
use crate::locator::Locator;

/// Default deadline for bounded waits
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Polling interval for bounded waits
pub const POLL_INTERVAL: Duration = Duration::from_millis(250);

fn nonblank() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\S").unwrap())
}

/// A failure ignored during best-effort cleanup, kept for observability.
#[derive(Debug, Clone)]
pub struct CleanupFailure {
    /// The cleanup step that failed
    pub operation: String,
    /// The swallowed error
    pub error: String,
}

/// Shared browser session with a bounded-wait helper.
///
/// Cloning is cheap (the driver handle is reference counted); exactly one
/// test drives the session at a time.
#[derive(Debug, Clone)]
pub struct Session {
    driver: WebDriver,
    timeout: Duration,
}

impl Session {
    /// Wrap an existing driver handle with the default wait deadline
    #[must_use]
    pub fn new(driver: WebDriver) -> Self {
        Self {
            driver,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Override the default wait deadline
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Access the underlying driver for operations the wrapper does not
    /// cover (script execution, window management in tests)
    #[must_use]
    pub const fn driver(&self) -> &WebDriver {
        &self.driver
    }

    /// The default wait deadline
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }

    // ------------------------------------------------------------------
    // Navigation and page-level state
    // ------------------------------------------------------------------

    /// Navigate to an absolute URL
    pub async fn goto(&self, url: &str) -> E2eResult<()> {
        debug!(url, "navigating");
        self.driver.goto(url).await?;
        Ok(())
    }

    /// Current page title
    pub async fn title(&self) -> E2eResult<String> {
        Ok(self.driver.title().await?)
    }

    /// Current URL as a string
    pub async fn current_url(&self) -> E2eResult<String> {
        Ok(self.driver.current_url().await?.to_string())
    }

    /// Block until the page title contains `marker`
    pub async fn wait_until_title_contains(&self, marker: &str) -> E2eResult<()> {
        self.wait_until(&format!("title contains {marker:?}"), || async move {
            Ok(self.driver.title().await?.contains(marker))
        })
        .await
    }

    /// Fail with `IllegalState` unless the current title starts with
    /// `expected`
    pub async fn assert_title_prefix(&self, expected: &str) -> E2eResult<()> {
        let title = self.driver.title().await?;
        if title.is_empty() || !title.starts_with(expected) {
            return Err(E2eError::illegal_state(format!(
                "wrong page: expected title starting with {expected:?}, got {title:?}"
            )));
        }
        Ok(())
    }

    /// Block until the current URL contains `fragment`
    pub async fn wait_until_url_contains(&self, fragment: &str) -> E2eResult<()> {
        self.wait_until(&format!("url contains {fragment:?}"), || async move {
            Ok(self.driver.current_url().await?.as_str().contains(fragment))
        })
        .await
    }

    // ------------------------------------------------------------------
    // Element resolution
    // ------------------------------------------------------------------

    /// Poll until an element matching `locator` is present
    pub async fn find(&self, locator: Locator) -> E2eResult<WebElement> {
        self.find_with_timeout(locator, self.timeout).await
    }

    /// As [`find`](Self::find) with an explicit deadline
    pub async fn find_with_timeout(
        &self,
        locator: Locator,
        timeout: Duration,
    ) -> E2eResult<WebElement> {
        let deadline = Instant::now() + timeout;
        loop {
            if let Ok(element) = self.driver.find(locator.to_by()).await {
                return Ok(element);
            }
            if Instant::now() >= deadline {
                return Err(E2eError::ElementNotFound {
                    locator,
                    timeout_ms: timeout.as_millis() as u64,
                });
            }
            tokio::time::sleep(POLL_INTERVAL).await;
        }
    }

    /// Poll until at least one element matches; tolerant — an empty vec on
    /// deadline, never an error
    pub async fn find_all(&self, locator: Locator) -> E2eResult<Vec<WebElement>> {
        let deadline = Instant::now() + self.timeout;
        loop {
            let elements = self.driver.find_all(locator.to_by()).await?;
            if !elements.is_empty() {
                return Ok(elements);
            }
            if Instant::now() >= deadline {
                return Ok(Vec::new());
            }
            tokio::time::sleep(POLL_INTERVAL).await;
        }
    }

    /// Poll until an element matching `locator` is present and interactable
    pub async fn find_clickable(&self, locator: Locator) -> E2eResult<WebElement> {
        let deadline = Instant::now() + self.timeout;
        loop {
            if let Ok(element) = self.driver.find(locator.to_by()).await {
                if element.is_clickable().await.unwrap_or(false) {
                    return Ok(element);
                }
            }
            if Instant::now() >= deadline {
                return Err(E2eError::ElementNotFound {
                    locator,
                    timeout_ms: self.timeout.as_millis() as u64,
                });
            }
            tokio::time::sleep(POLL_INTERVAL).await;
        }
    }

    /// Block until no element matches `locator` (loading indicators)
    pub async fn wait_until_gone(&self, locator: Locator) -> E2eResult<()> {
        self.wait_until(&format!("{locator} is gone"), || async move {
            Ok(self.driver.find_all(locator.to_by()).await?.is_empty())
        })
        .await
    }

    /// Block until a matching element is displayed (modals)
    pub async fn wait_until_displayed(&self, locator: Locator) -> E2eResult<()> {
        self.wait_until(&format!("{locator} is displayed"), || async move {
            match self.driver.find(locator.to_by()).await {
                Ok(element) => Ok(element.is_displayed().await.unwrap_or(false)),
                Err(_) => Ok(false),
            }
        })
        .await
    }

    /// Block until the element's text is non-blank, returning the text
    pub async fn wait_until_nonblank_text(&self, locator: Locator) -> E2eResult<String> {
        let deadline = Instant::now() + self.timeout;
        loop {
            if let Ok(element) = self.driver.find(locator.to_by()).await {
                let text = element.text().await?;
                if nonblank().is_match(&text) {
                    return Ok(text);
                }
            }
            if Instant::now() >= deadline {
                return Err(E2eError::Timeout {
                    ms: self.timeout.as_millis() as u64,
                    condition: format!("{locator} has non-blank text"),
                });
            }
            tokio::time::sleep(POLL_INTERVAL).await;
        }
    }

    // ------------------------------------------------------------------
    // Resolve-then-act operations
    // ------------------------------------------------------------------

    /// Click the element once it is interactable
    pub async fn click(&self, locator: Locator) -> E2eResult<()> {
        let element = self.find_clickable(locator).await?;
        element.click().await?;
        Ok(())
    }

    /// Clear the element and type `text` into it
    pub async fn type_text(&self, locator: Locator, text: &str) -> E2eResult<()> {
        let element = self.find(locator).await?;
        element.clear().await?;
        if !text.is_empty() {
            element.send_keys(text).await?;
        }
        Ok(())
    }

    /// Visible text of the element
    pub async fn read_text(&self, locator: Locator) -> E2eResult<String> {
        let element = self.find(locator).await?;
        Ok(element.text().await?)
    }

    /// Attribute value, empty string when absent
    pub async fn read_attribute(&self, locator: Locator, name: &str) -> E2eResult<String> {
        let element = self.find(locator).await?;
        Ok(element.attr(name).await?.unwrap_or_default())
    }

    /// DOM property value, empty string when absent
    pub async fn read_property(&self, locator: Locator, name: &str) -> E2eResult<String> {
        let element = self.find(locator).await?;
        Ok(element.prop(name).await?.unwrap_or_default())
    }

    /// Computed CSS value for `property`
    pub async fn read_css(&self, locator: Locator, property: &str) -> E2eResult<String> {
        let element = self.find(locator).await?;
        Ok(element.css_value(property).await?)
    }

    /// Whether a matching element exists and is displayed; a missing
    /// element counts as not displayed
    pub async fn is_displayed(&self, locator: Locator) -> E2eResult<bool> {
        match self.driver.find(locator.to_by()).await {
            Ok(element) => Ok(element.is_displayed().await?),
            Err(_) => Ok(false),
        }
    }

    /// Bring the checkbox to `desired`. Reads the current checked state and
    /// clicks only on difference, so repeated calls with the same value
    /// never double-toggle.
    pub async fn set_checkbox(&self, locator: Locator, desired: bool) -> E2eResult<()> {
        let element = self.find(locator).await?;
        if element.is_selected().await? != desired {
            element.click().await?;
        }
        Ok(())
    }

    /// Select a dropdown option by its `value` attribute
    pub async fn select_by_value(&self, locator: Locator, value: &str) -> E2eResult<()> {
        let element = self.find(locator).await?;
        let select = SelectElement::new(&element).await?;
        select.select_by_value(value).await?;
        Ok(())
    }

    /// Select a dropdown option by its exact visible text
    pub async fn select_by_text(&self, locator: Locator, text: &str) -> E2eResult<()> {
        let element = self.find(locator).await?;
        let select = SelectElement::new(&element).await?;
        select.select_by_exact_text(text).await?;
        Ok(())
    }

    /// Run a script with the resolved element as `arguments[0]` and `value`
    /// as `arguments[1]`.
    ///
    /// Direct value injection for inputs not reachable through normal
    /// keystrokes (date, range and color widgets).
    pub async fn execute_on_element(
        &self,
        script: &str,
        locator: Locator,
        value: &str,
    ) -> E2eResult<()> {
        let element = self.find(locator).await?;
        self.driver
            .execute(script, vec![element.to_json()?, serde_json::json!(value)])
            .await?;
        Ok(())
    }

    // ------------------------------------------------------------------
    // Windows
    // ------------------------------------------------------------------

    /// All open window handles
    pub async fn window_handles(&self) -> E2eResult<Vec<WindowHandle>> {
        Ok(self.driver.windows().await?)
    }

    /// Focus the given window
    pub async fn switch_to_window(&self, handle: WindowHandle) -> E2eResult<()> {
        self.driver.switch_to_window(handle).await?;
        Ok(())
    }

    /// Block until exactly `count` windows are open
    pub async fn wait_for_window_count(&self, count: usize) -> E2eResult<()> {
        self.wait_until(&format!("{count} windows open"), || async move {
            Ok(self.driver.windows().await?.len() == count)
        })
        .await
    }

    /// The single handle present in `after` but not `before`.
    ///
    /// Zero or several new handles both mean the window bookkeeping went
    /// wrong, and are reported as such.
    pub fn new_window_handle(
        before: &[WindowHandle],
        after: &[WindowHandle],
    ) -> E2eResult<WindowHandle> {
        let mut fresh = after.iter().filter(|h| !before.contains(h));
        match (fresh.next(), fresh.next()) {
            (Some(handle), None) => Ok(handle.clone()),
            (None, _) => Err(E2eError::WindowNotFound {
                message: "no new window opened".into(),
            }),
            (Some(_), Some(_)) => Err(E2eError::WindowNotFound {
                message: "several new windows opened".into(),
            }),
        }
    }

    /// Close every window except `keep`, then restore focus.
    ///
    /// Best-effort teardown helper: failures are logged and collected, not
    /// propagated, because the next test's setup re-navigates anyway. Falls
    /// back to any remaining window when `keep` itself is gone.
    pub async fn cleanup_windows(&self, keep: &WindowHandle) -> Vec<CleanupFailure> {
        fn note(ignored: &mut Vec<CleanupFailure>, operation: &str, error: String) {
            warn!(operation, error, "ignoring cleanup failure");
            ignored.push(CleanupFailure {
                operation: operation.to_string(),
                error,
            });
        }

        let mut ignored = Vec::new();
        let handles = match self.driver.windows().await {
            Ok(handles) => handles,
            Err(e) => {
                note(&mut ignored, "list windows", e.to_string());
                return ignored;
            }
        };
        for handle in handles {
            if handle == *keep {
                continue;
            }
            if let Err(e) = self.driver.switch_to_window(handle).await {
                note(&mut ignored, "switch to stray window", e.to_string());
                continue;
            }
            if let Err(e) = self.driver.close_window().await {
                note(&mut ignored, "close stray window", e.to_string());
            }
        }

        match self.driver.windows().await {
            Ok(remaining) => {
                let target = if remaining.contains(keep) {
                    Some(keep.clone())
                } else {
                    remaining.first().cloned()
                };
                if let Some(target) = target {
                    if let Err(e) = self.driver.switch_to_window(target).await {
                        note(&mut ignored, "restore focus", e.to_string());
                    }
                }
            }
            Err(e) => note(&mut ignored, "list remaining windows", e.to_string()),
        }
        ignored
    }

    // ------------------------------------------------------------------
    // Frames and dialogs
    // ------------------------------------------------------------------

    /// Switch into the frame located by `locator`
    pub async fn enter_frame(&self, locator: Locator) -> E2eResult<()> {
        let element = self.find(locator).await?;
        element.enter_frame().await?;
        Ok(())
    }

    /// Switch back to the top-level document
    pub async fn leave_frame(&self) -> E2eResult<()> {
        self.driver.enter_default_frame().await?;
        Ok(())
    }

    /// Block until a native dialog is present, returning its text
    pub async fn wait_for_alert(&self) -> E2eResult<String> {
        let deadline = Instant::now() + self.timeout;
        loop {
            if let Ok(text) = self.driver.get_alert_text().await {
                return Ok(text);
            }
            if Instant::now() >= deadline {
                return Err(E2eError::Timeout {
                    ms: self.timeout.as_millis() as u64,
                    condition: "native dialog present".into(),
                });
            }
            tokio::time::sleep(POLL_INTERVAL).await;
        }
    }

    /// Accept the currently open native dialog
    pub async fn accept_alert(&self) -> E2eResult<()> {
        self.driver.accept_alert().await?;
        Ok(())
    }

    /// Delete all cookies for the current site
    pub async fn delete_cookies(&self) -> E2eResult<()> {
        self.driver.delete_all_cookies().await?;
        Ok(())
    }

    // ------------------------------------------------------------------

    async fn wait_until<F, Fut>(&self, condition: &str, check: F) -> E2eResult<()>
    where
        F: Fn() -> Fut,
        Fut: std::future::Future<Output = E2eResult<bool>>,
    {
        let deadline = Instant::now() + self.timeout;
        loop {
            if check().await? {
                return Ok(());
            }
            if Instant::now() >= deadline {
                return Err(E2eError::Timeout {
                    ms: self.timeout.as_millis() as u64,
                    condition: condition.to_string(),
                });
            }
            tokio::time::sleep(POLL_INTERVAL).await;
        }
    }
}
