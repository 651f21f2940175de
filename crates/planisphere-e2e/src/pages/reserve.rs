//! Reservation form.
//!
//! The highest-arity screen: every field has a setter, a readback getter
//! and a validation-message getter. Inline messages are looked up through
//! two sibling selectors because the site's markup differs between fields
//! (`~` on most, `+` on a few); both lookups are kept and a double miss
//! reads as an empty message.

use std::time::Duration;

use thirtyfour::Key;
use tracing::info;

use crate::error::{E2eError, E2eResult};
use crate::locator::Locator;
use crate::session::Session;

use super::{expect_screen, ConfirmPage, Screen};

const DATE_INPUT: Locator = Locator::id("date");
const DATE_PICKER_CLOSE: Locator = Locator::class_name("ui-datepicker-close");
const TERM_INPUT: Locator = Locator::id("term");
const HEAD_COUNT_INPUT: Locator = Locator::id("head-count");

const BREAKFAST_CHECKBOX: Locator = Locator::id("breakfast");
const EARLY_CHECK_IN_CHECKBOX: Locator = Locator::id("early-check-in");
const SIGHTSEEING_CHECKBOX: Locator = Locator::id("sightseeing");

const USERNAME_INPUT: Locator = Locator::id("username");
const CONTACT_SELECT: Locator = Locator::id("contact");
const EMAIL_INPUT: Locator = Locator::id("email");
const TEL_INPUT: Locator = Locator::id("tel");
const COMMENT_TEXTAREA: Locator = Locator::id("comment");

const PLAN_NAME_TEXT: Locator = Locator::id("plan-name");
const SUBMIT_BUTTON: Locator = Locator::css("button[data-test='submit-button']");

const DATE_MESSAGE: Locator = Locator::css("#date ~ .invalid-feedback");
const DATE_MESSAGE_ALT: Locator = Locator::css("#date + .invalid-feedback");
const TERM_MESSAGE: Locator = Locator::css("#term ~ .invalid-feedback");
const TERM_MESSAGE_ALT: Locator = Locator::css("#term + .invalid-feedback");
const HEAD_COUNT_MESSAGE: Locator = Locator::css("#head-count ~ .invalid-feedback");
const HEAD_COUNT_MESSAGE_ALT: Locator = Locator::css("#head-count + .invalid-feedback");
const USERNAME_MESSAGE: Locator = Locator::css("#username ~ .invalid-feedback");
const USERNAME_MESSAGE_ALT: Locator = Locator::css("#username + .invalid-feedback");
const EMAIL_MESSAGE: Locator = Locator::css("#email ~ .invalid-feedback");
const EMAIL_MESSAGE_ALT: Locator = Locator::css("#email + .invalid-feedback");
const TEL_MESSAGE: Locator = Locator::css("#tel ~ .invalid-feedback");
const TEL_MESSAGE_ALT: Locator = Locator::css("#tel + .invalid-feedback");

/// Deadline for the primary message lookup
const MESSAGE_TIMEOUT: Duration = Duration::from_secs(2);
/// Deadline for the fallback message lookup
const MESSAGE_FALLBACK_TIMEOUT: Duration = Duration::from_secs(1);

/// Contact method chosen on the reservation form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Contact {
    /// No contact
    No,
    /// Contact by email
    Email,
    /// Contact by telephone
    Telephone,
}

impl Contact {
    /// The option value for this contact method
    #[must_use]
    pub const fn as_value(&self) -> &'static str {
        match self {
            Self::No => "no",
            Self::Email => "email",
            Self::Telephone => "tel",
        }
    }

    /// Parse a fixture-file value
    pub fn from_value(value: &str) -> E2eResult<Self> {
        match value {
            "no" => Ok(Self::No),
            "email" => Ok(Self::Email),
            "tel" => Ok(Self::Telephone),
            other => Err(E2eError::illegal_state(format!(
                "invalid contact method: {other:?}"
            ))),
        }
    }
}

/// The reservation form (lives in its own window)
#[derive(Debug, Clone)]
pub struct ReservePage {
    session: Session,
}

impl ReservePage {
    /// Bind to the reservation form the browser is currently showing
    pub async fn attach(session: &Session) -> E2eResult<Self> {
        expect_screen(session, Screen::Reserve).await?;
        Ok(Self {
            session: session.clone(),
        })
    }

    /// Set the check-in date (short `%m/%d/%Y` form).
    ///
    /// The field is backed by a datepicker that restores stale text after a
    /// plain `clear`, so the clearing is done twice: clear, then select-all
    /// plus delete. Typing also pops the picker open; its close button is
    /// clicked when present and ignored when not.
    pub async fn set_date(&self, date: &str) -> E2eResult<()> {
        let element = self.session.find(DATE_INPUT).await?;
        element.clear().await?;
        element.send_keys(Key::Control + "a").await?;
        element.send_keys(Key::Delete + "").await?;
        if !date.is_empty() {
            element.send_keys(date).await?;
        }
        // Close the datepicker when it opened; absence is fine.
        if let Ok(close) = self
            .session
            .find_with_timeout(DATE_PICKER_CLOSE, MESSAGE_TIMEOUT)
            .await
        {
            let _ = close.click().await;
        }
        Ok(())
    }

    /// Set the number of nights
    pub async fn set_term(&self, term: &str) -> E2eResult<()> {
        self.session.type_text(TERM_INPUT, term).await
    }

    /// Set the head count
    pub async fn set_head_count(&self, head_count: &str) -> E2eResult<()> {
        self.session.type_text(HEAD_COUNT_INPUT, head_count).await
    }

    /// Toggle the breakfast extra
    pub async fn set_breakfast_plan(&self, checked: bool) -> E2eResult<()> {
        self.session.set_checkbox(BREAKFAST_CHECKBOX, checked).await
    }

    /// Toggle the early check-in extra
    pub async fn set_early_check_in_plan(&self, checked: bool) -> E2eResult<()> {
        self.session
            .set_checkbox(EARLY_CHECK_IN_CHECKBOX, checked)
            .await
    }

    /// Toggle the sightseeing extra
    pub async fn set_sightseeing_plan(&self, checked: bool) -> E2eResult<()> {
        self.session.set_checkbox(SIGHTSEEING_CHECKBOX, checked).await
    }

    /// Set the username field
    pub async fn set_username(&self, username: &str) -> E2eResult<()> {
        self.session.type_text(USERNAME_INPUT, username).await
    }

    /// Pick a contact method; the form then shows the matching
    /// email/tel field
    pub async fn set_contact(&self, contact: Contact) -> E2eResult<()> {
        self.session
            .select_by_value(CONTACT_SELECT, contact.as_value())
            .await
    }

    /// Set the email field (visible for [`Contact::Email`])
    pub async fn set_email(&self, email: &str) -> E2eResult<()> {
        self.session.type_text(EMAIL_INPUT, email).await
    }

    /// Set the tel field (visible for [`Contact::Telephone`])
    pub async fn set_tel(&self, tel: &str) -> E2eResult<()> {
        self.session.type_text(TEL_INPUT, tel).await
    }

    /// Set the comment textarea
    pub async fn set_comment(&self, comment: &str) -> E2eResult<()> {
        self.session.type_text(COMMENT_TEXTAREA, comment).await
    }

    /// Whether the email field is currently shown
    pub async fn is_email_displayed(&self) -> E2eResult<bool> {
        self.session.is_displayed(EMAIL_INPUT).await
    }

    /// Whether the tel field is currently shown
    pub async fn is_tel_displayed(&self) -> E2eResult<bool> {
        self.session.is_displayed(TEL_INPUT).await
    }

    /// Submit and land on the confirmation page
    pub async fn submit(self) -> E2eResult<ConfirmPage> {
        info!("submitting reservation");
        self.session.click(SUBMIT_BUTTON).await?;
        ConfirmPage::attach(&self.session).await
    }

    /// Submit a form that is expected to be rejected; the browser stays on
    /// this form
    pub async fn submit_expecting_failure(&self) -> E2eResult<()> {
        info!("submitting reservation (expecting failure)");
        self.session.click(SUBMIT_BUTTON).await
    }

    /// Plan name shown on the form, waited until non-blank (it is filled
    /// in asynchronously)
    pub async fn plan_name(&self) -> E2eResult<String> {
        self.session.wait_until_nonblank_text(PLAN_NAME_TEXT).await
    }

    /// Current value of the date field
    pub async fn date(&self) -> E2eResult<String> {
        self.session.read_property(DATE_INPUT, "value").await
    }

    /// Current value of the term field
    pub async fn term(&self) -> E2eResult<String> {
        self.session.read_property(TERM_INPUT, "value").await
    }

    /// Current value of the head-count field
    pub async fn head_count(&self) -> E2eResult<String> {
        self.session.read_property(HEAD_COUNT_INPUT, "value").await
    }

    /// Current value of the username field
    pub async fn username(&self) -> E2eResult<String> {
        self.session.read_property(USERNAME_INPUT, "value").await
    }

    /// Current value of the email field
    pub async fn email(&self) -> E2eResult<String> {
        self.session.read_property(EMAIL_INPUT, "value").await
    }

    /// Current value of the tel field
    pub async fn tel(&self) -> E2eResult<String> {
        self.session.read_property(TEL_INPUT, "value").await
    }

    /// Inline message lookup with the `~` → `+` fallback; a double miss is
    /// an empty message, not an error.
    async fn message_with_fallback(
        &self,
        primary: Locator,
        fallback: Locator,
    ) -> E2eResult<String> {
        match self
            .session
            .find_with_timeout(primary, MESSAGE_TIMEOUT)
            .await
        {
            Ok(element) => Ok(element.text().await?),
            Err(e) if e.is_not_found() => {
                match self
                    .session
                    .find_with_timeout(fallback, MESSAGE_FALLBACK_TIMEOUT)
                    .await
                {
                    Ok(element) => Ok(element.text().await?),
                    Err(e) if e.is_not_found() => Ok(String::new()),
                    Err(e) => Err(e),
                }
            }
            Err(e) => Err(e),
        }
    }

    /// Validation message for the date field
    pub async fn date_message(&self) -> E2eResult<String> {
        self.message_with_fallback(DATE_MESSAGE, DATE_MESSAGE_ALT).await
    }

    /// Validation message for the term field
    pub async fn term_message(&self) -> E2eResult<String> {
        self.message_with_fallback(TERM_MESSAGE, TERM_MESSAGE_ALT).await
    }

    /// Validation message for the head-count field
    pub async fn head_count_message(&self) -> E2eResult<String> {
        self.message_with_fallback(HEAD_COUNT_MESSAGE, HEAD_COUNT_MESSAGE_ALT)
            .await
    }

    /// Validation message for the username field
    pub async fn username_message(&self) -> E2eResult<String> {
        self.message_with_fallback(USERNAME_MESSAGE, USERNAME_MESSAGE_ALT)
            .await
    }

    /// Validation message for the email field
    pub async fn email_message(&self) -> E2eResult<String> {
        self.message_with_fallback(EMAIL_MESSAGE, EMAIL_MESSAGE_ALT).await
    }

    /// Validation message for the tel field
    pub async fn tel_message(&self) -> E2eResult<String> {
        self.message_with_fallback(TEL_MESSAGE, TEL_MESSAGE_ALT).await
    }

    /// Look up a validation message getter by its fixture-file field name
    pub async fn message_for_field(&self, field: &str) -> E2eResult<String> {
        match field {
            "date" => self.date_message().await,
            "term" => self.term_message().await,
            "head_count" => self.head_count_message().await,
            "username" => self.username_message().await,
            "email" => self.email_message().await,
            "tel" => self.tel_message().await,
            other => Err(E2eError::illegal_state(format!(
                "no validation message getter for field {other:?}"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contact_values_match_the_dropdown() {
        assert_eq!(Contact::No.as_value(), "no");
        assert_eq!(Contact::Email.as_value(), "email");
        assert_eq!(Contact::Telephone.as_value(), "tel");
        assert_eq!(Contact::from_value("tel").unwrap(), Contact::Telephone);
        assert!(Contact::from_value("fax").is_err());
    }
}
