//! Landing page.

use tracing::info;

use crate::error::E2eResult;
use crate::locator::Locator;
use crate::session::Session;

use super::{expect_screen, LoginPage, PlansPage, Screen, SignupPage};

const LOGIN_LINK: Locator = Locator::link_text("Login");
const SIGNUP_LINK: Locator = Locator::link_text("Sign up");
const RESERVE_LINK: Locator = Locator::link_text("Reserve");

/// The site's landing page
#[derive(Debug, Clone)]
pub struct TopPage {
    session: Session,
}

impl TopPage {
    /// Bind to the landing page the browser is currently showing
    pub async fn attach(session: &Session) -> E2eResult<Self> {
        expect_screen(session, Screen::Top).await?;
        Ok(Self {
            session: session.clone(),
        })
    }

    /// Open the login form
    pub async fn go_to_login_page(self) -> E2eResult<LoginPage> {
        info!("opening login page");
        self.session.click(LOGIN_LINK).await?;
        LoginPage::attach(&self.session).await
    }

    /// Open the signup form
    pub async fn go_to_signup_page(self) -> E2eResult<SignupPage> {
        info!("opening signup page");
        self.session.click(SIGNUP_LINK).await?;
        SignupPage::attach(&self.session).await
    }

    /// Open the plan list
    pub async fn go_to_plans_page(self) -> E2eResult<PlansPage> {
        info!("opening plans page");
        self.session.click(RESERVE_LINK).await?;
        PlansPage::attach(&self.session).await
    }
}
