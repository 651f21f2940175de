//! Suite configuration.
//!
//! All environment indicators are read once, up front, and carried as an
//! explicit value into session setup; nothing else in the crate consults
//! the environment.

use serde_json::json;
use thirtyfour::{ChromeCapabilities, ChromiumLikeCapabilities, DesiredCapabilities};

use crate::error::E2eResult;

/// Default target site (the public demo deployment)
pub const DEFAULT_BASE_URL: &str = "https://hotel-example-site.takeyaqa.dev/en-US";

/// Default WebDriver endpoint (a locally running chromedriver)
pub const DEFAULT_WEBDRIVER_URL: &str = "http://localhost:9515";

/// Configuration for one browser session
#[derive(Debug, Clone)]
pub struct SuiteConfig {
    /// Base URL of the site under test
    pub base_url: String,
    /// WebDriver server endpoint
    pub webdriver_url: String,
    /// Run the browser headless
    pub headless: bool,
    /// Disable the browser sandbox (containers)
    pub no_sandbox: bool,
    /// Browser window size
    pub window_size: (u32, u32),
}

impl Default for SuiteConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            webdriver_url: DEFAULT_WEBDRIVER_URL.to_string(),
            headless: false,
            no_sandbox: false,
            window_size: (1920, 1080),
        }
    }
}

fn env_flag(name: &str) -> bool {
    std::env::var(name)
        .map(|v| v.eq_ignore_ascii_case("true") || v == "1")
        .unwrap_or(false)
}

impl SuiteConfig {
    /// Read configuration from the environment.
    ///
    /// `BASE_URL` and `WEBDRIVER_URL` override the defaults. CI runs
    /// (`GITHUB_ACTIONS`) go headless; dev containers and codespaces
    /// (`REMOTE_CONTAINERS`, `CODESPACES`) additionally drop the sandbox.
    #[must_use]
    pub fn from_env() -> Self {
        let containerized = env_flag("REMOTE_CONTAINERS") || env_flag("CODESPACES");
        let headless = env_flag("GITHUB_ACTIONS") || containerized;
        Self {
            base_url: std::env::var("BASE_URL")
                .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()),
            webdriver_url: std::env::var("WEBDRIVER_URL")
                .unwrap_or_else(|_| DEFAULT_WEBDRIVER_URL.to_string()),
            headless,
            no_sandbox: containerized,
            window_size: (1920, 1080),
        }
    }

    /// Set the base URL
    #[must_use]
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the WebDriver endpoint
    #[must_use]
    pub fn with_webdriver_url(mut self, url: impl Into<String>) -> Self {
        self.webdriver_url = url.into();
        self
    }

    /// Set headless mode
    #[must_use]
    pub const fn with_headless(mut self, headless: bool) -> Self {
        self.headless = headless;
        self
    }

    /// Absolute URL for a path under the site, e.g. `url_for("login.html")`
    #[must_use]
    pub fn url_for(&self, path: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), path)
    }

    /// Build browser capabilities for this configuration.
    ///
    /// The password-manager prompts are disabled so they never steal focus
    /// from the login and signup forms.
    pub fn capabilities(&self) -> E2eResult<ChromeCapabilities> {
        let mut caps = DesiredCapabilities::chrome();
        let (width, height) = self.window_size;
        caps.add_arg(&format!("--window-size={width},{height}"))?;
        if self.headless {
            caps.add_arg("--headless=new")?;
        }
        if self.no_sandbox {
            caps.add_arg("--no-sandbox")?;
        }
        caps.add_experimental_option(
            "prefs",
            json!({
                "credentials_enable_service": false,
                "profile.password_manager_enabled": false,
                "profile.password_manager_leak_detection": false,
            }),
        )?;
        Ok(caps)
    }
}
