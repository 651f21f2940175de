//! Login form.

use tracing::info;

use crate::error::E2eResult;
use crate::locator::Locator;
use crate::session::Session;

use super::{expect_screen, MyPage, Screen};

const EMAIL_INPUT: Locator = Locator::id("email");
const PASSWORD_INPUT: Locator = Locator::id("password");
const LOGIN_BUTTON: Locator = Locator::id("login-button");
const EMAIL_MESSAGE: Locator = Locator::id("email-message");
const PASSWORD_MESSAGE: Locator = Locator::id("password-message");

/// The login form
#[derive(Debug, Clone)]
pub struct LoginPage {
    session: Session,
}

impl LoginPage {
    /// Bind to the login form the browser is currently showing
    pub async fn attach(session: &Session) -> E2eResult<Self> {
        expect_screen(session, Screen::Login).await?;
        Ok(Self {
            session: session.clone(),
        })
    }

    async fn fill_and_submit(&self, email: &str, password: &str) -> E2eResult<()> {
        self.session.type_text(EMAIL_INPUT, email).await?;
        self.session.type_text(PASSWORD_INPUT, password).await?;
        self.session.click(LOGIN_BUTTON).await
    }

    /// Log in and land on the profile page
    pub async fn login(self, email: &str, password: &str) -> E2eResult<MyPage> {
        info!(email, "logging in");
        self.fill_and_submit(email, password).await?;
        MyPage::attach(&self.session).await
    }

    /// Submit credentials that are expected to be rejected; the browser
    /// stays on this form
    pub async fn login_expecting_failure(&self, email: &str, password: &str) -> E2eResult<()> {
        info!(email, "logging in (expecting failure)");
        self.fill_and_submit(email, password).await
    }

    /// Validation message under the email field
    pub async fn email_message(&self) -> E2eResult<String> {
        self.session.read_text(EMAIL_MESSAGE).await
    }

    /// Validation message under the password field
    pub async fn password_message(&self) -> E2eResult<String> {
        self.session.read_text(PASSWORD_MESSAGE).await
    }
}
