//! Reservation confirmation page.
//!
//! The summary fields are filled in asynchronously, so every getter waits
//! for non-blank text before returning it.

use tracing::info;

use crate::error::E2eResult;
use crate::locator::Locator;
use crate::session::Session;

use super::{expect_screen, Screen};

const TOTAL_BILL_TEXT: Locator = Locator::id("total-bill");
const PLAN_NAME_TEXT: Locator = Locator::id("plan-name");
const TERM_TEXT: Locator = Locator::id("term");
const HEAD_COUNT_TEXT: Locator = Locator::id("head-count");
const PLANS_TEXT: Locator = Locator::id("plans");
const USERNAME_TEXT: Locator = Locator::id("username");
const CONTACT_TEXT: Locator = Locator::id("contact");
const COMMENT_TEXT: Locator = Locator::id("comment");

const CONFIRM_BUTTON: Locator = Locator::css("button[data-target='#success-modal']");
const SUCCESS_MODAL: Locator = Locator::id("success-modal");
const MODAL_MESSAGE: Locator = Locator::css("#success-modal > div > div > .modal-body");
const CLOSE_BUTTON: Locator =
    Locator::css("#success-modal > div > div > div > button.btn-success");

/// The reservation confirmation page
#[derive(Debug, Clone)]
pub struct ConfirmPage {
    session: Session,
}

impl ConfirmPage {
    /// Bind to the confirmation page the browser is currently showing
    pub async fn attach(session: &Session) -> E2eResult<Self> {
        expect_screen(session, Screen::Confirm).await?;
        Ok(Self {
            session: session.clone(),
        })
    }

    /// Computed total bill line
    pub async fn total_bill(&self) -> E2eResult<String> {
        self.session.wait_until_nonblank_text(TOTAL_BILL_TEXT).await
    }

    /// Reserved plan name
    pub async fn plan_name(&self) -> E2eResult<String> {
        self.session.wait_until_nonblank_text(PLAN_NAME_TEXT).await
    }

    /// Date range and night count line
    pub async fn term(&self) -> E2eResult<String> {
        self.session.wait_until_nonblank_text(TERM_TEXT).await
    }

    /// Head count line
    pub async fn head_count(&self) -> E2eResult<String> {
        self.session.wait_until_nonblank_text(HEAD_COUNT_TEXT).await
    }

    /// Chosen extra services
    pub async fn plans(&self) -> E2eResult<String> {
        self.session.wait_until_nonblank_text(PLANS_TEXT).await
    }

    /// Reserved-under username
    pub async fn username(&self) -> E2eResult<String> {
        self.session.wait_until_nonblank_text(USERNAME_TEXT).await
    }

    /// Chosen contact method
    pub async fn contact(&self) -> E2eResult<String> {
        self.session.wait_until_nonblank_text(CONTACT_TEXT).await
    }

    /// Comment text
    pub async fn comment(&self) -> E2eResult<String> {
        self.session.wait_until_nonblank_text(COMMENT_TEXT).await
    }

    /// Confirm the reservation; blocks until the success modal is shown
    pub async fn confirm(&self) -> E2eResult<()> {
        info!("confirming reservation");
        self.session.click(CONFIRM_BUTTON).await?;
        self.session.wait_until_displayed(SUCCESS_MODAL).await
    }

    /// Message inside the success modal
    pub async fn modal_message(&self) -> E2eResult<String> {
        self.session.read_text(MODAL_MESSAGE).await
    }

    /// Close the success modal (the window closes itself afterwards)
    pub async fn close_modal(&self) -> E2eResult<()> {
        self.session.click(CLOSE_BUTTON).await
    }
}
