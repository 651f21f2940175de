//! Signup form.

use chrono::NaiveDate;
use tracing::info;

use crate::error::{E2eError, E2eResult};
use crate::locator::Locator;
use crate::session::Session;

use super::{expect_screen, MyPage, Screen};

const EMAIL_INPUT: Locator = Locator::id("email");
const PASSWORD_INPUT: Locator = Locator::id("password");
const PASSWORD_CONFIRMATION_INPUT: Locator = Locator::id("password-confirmation");
const USERNAME_INPUT: Locator = Locator::id("username");
const RANK_PREMIUM_RADIO: Locator = Locator::id("rank-premium");
const RANK_NORMAL_RADIO: Locator = Locator::id("rank-normal");
const ADDRESS_INPUT: Locator = Locator::id("address");
const TEL_INPUT: Locator = Locator::id("tel");
const GENDER_SELECT: Locator = Locator::id("gender");
const BIRTHDAY_INPUT: Locator = Locator::id("birthday");
const NOTIFICATION_CHECKBOX: Locator = Locator::id("notification");
const SIGNUP_BUTTON: Locator = Locator::css("#signup-form > button");

const EMAIL_MESSAGE: Locator = Locator::css("#email ~ .invalid-feedback");
const PASSWORD_MESSAGE: Locator = Locator::css("#password ~ .invalid-feedback");
const PASSWORD_CONFIRMATION_MESSAGE: Locator =
    Locator::css("#password-confirmation ~ .invalid-feedback");
const USERNAME_MESSAGE: Locator = Locator::css("#username ~ .invalid-feedback");
const ADDRESS_MESSAGE: Locator = Locator::css("#address ~ .invalid-feedback");
const TEL_MESSAGE: Locator = Locator::css("#tel ~ .invalid-feedback");
const GENDER_MESSAGE: Locator = Locator::css("#gender ~ .invalid-feedback");
const BIRTHDAY_MESSAGE: Locator = Locator::css("#birthday ~ .invalid-feedback");

/// Membership rank chosen at signup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rank {
    /// Premium membership
    Premium,
    /// Normal membership
    Normal,
}

impl Rank {
    /// The form value for this rank
    #[must_use]
    pub const fn as_value(&self) -> &'static str {
        match self {
            Self::Premium => "premium",
            Self::Normal => "normal",
        }
    }

    /// Parse a fixture-file value
    pub fn from_value(value: &str) -> E2eResult<Self> {
        match value {
            "premium" | "PREMIUM" => Ok(Self::Premium),
            "normal" | "NORMAL" => Ok(Self::Normal),
            other => Err(E2eError::illegal_state(format!("invalid rank: {other:?}"))),
        }
    }
}

/// Gender dropdown values
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gender {
    /// "I do not answer."
    NotAnswer,
    /// Male
    Male,
    /// Female
    Female,
    /// Other
    Other,
}

impl Gender {
    /// The option value for this gender
    #[must_use]
    pub const fn as_value(&self) -> &'static str {
        match self {
            Self::NotAnswer => "0",
            Self::Male => "1",
            Self::Female => "2",
            Self::Other => "9",
        }
    }

    /// Parse a fixture-file value
    pub fn from_value(value: &str) -> E2eResult<Self> {
        match value {
            "0" | "NOT_ANSWER" => Ok(Self::NotAnswer),
            "1" | "MALE" => Ok(Self::Male),
            "2" | "FEMALE" => Ok(Self::Female),
            "9" | "OTHER" => Ok(Self::Other),
            other => Err(E2eError::illegal_state(format!("invalid gender: {other:?}"))),
        }
    }
}

/// The signup form
#[derive(Debug, Clone)]
pub struct SignupPage {
    session: Session,
}

impl SignupPage {
    /// Bind to the signup form the browser is currently showing
    pub async fn attach(session: &Session) -> E2eResult<Self> {
        expect_screen(session, Screen::Signup).await?;
        Ok(Self {
            session: session.clone(),
        })
    }

    /// Set the email field
    pub async fn set_email(&self, email: &str) -> E2eResult<()> {
        self.session.type_text(EMAIL_INPUT, email).await
    }

    /// Set the password field
    pub async fn set_password(&self, password: &str) -> E2eResult<()> {
        self.session.type_text(PASSWORD_INPUT, password).await
    }

    /// Set the password confirmation field
    pub async fn set_password_confirmation(&self, password: &str) -> E2eResult<()> {
        self.session
            .type_text(PASSWORD_CONFIRMATION_INPUT, password)
            .await
    }

    /// Set the username field
    pub async fn set_username(&self, username: &str) -> E2eResult<()> {
        self.session.type_text(USERNAME_INPUT, username).await
    }

    /// Pick a membership rank radio button
    pub async fn set_rank(&self, rank: Rank) -> E2eResult<()> {
        match rank {
            Rank::Premium => self.session.click(RANK_PREMIUM_RADIO).await,
            Rank::Normal => self.session.click(RANK_NORMAL_RADIO).await,
        }
    }

    /// Set the address field
    pub async fn set_address(&self, address: &str) -> E2eResult<()> {
        self.session.type_text(ADDRESS_INPUT, address).await
    }

    /// Set the tel field
    pub async fn set_tel(&self, tel: &str) -> E2eResult<()> {
        self.session.type_text(TEL_INPUT, tel).await
    }

    /// Pick a gender from the dropdown
    pub async fn set_gender(&self, gender: Gender) -> E2eResult<()> {
        self.session
            .select_by_value(GENDER_SELECT, gender.as_value())
            .await
    }

    /// Set the birthday via direct value injection; `None` clears it.
    ///
    /// The date widget is not reachable through keystrokes in every
    /// browser, so the value is written onto the element directly.
    pub async fn set_birthday(&self, birthday: Option<NaiveDate>) -> E2eResult<()> {
        let value = birthday
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_default();
        self.session
            .execute_on_element("arguments[0].value = arguments[1]", BIRTHDAY_INPUT, &value)
            .await
    }

    /// Set the notification checkbox
    pub async fn set_notification(&self, checked: bool) -> E2eResult<()> {
        self.session.set_checkbox(NOTIFICATION_CHECKBOX, checked).await
    }

    /// Submit the form and land on the profile page
    pub async fn submit(self) -> E2eResult<MyPage> {
        info!("submitting signup form");
        self.session.click(SIGNUP_BUTTON).await?;
        MyPage::attach(&self.session).await
    }

    /// Submit a form that is expected to be rejected; the browser stays on
    /// this form
    pub async fn submit_expecting_failure(&self) -> E2eResult<()> {
        info!("submitting signup form (expecting failure)");
        self.session.click(SIGNUP_BUTTON).await
    }

    /// Validation message under the email field
    pub async fn email_message(&self) -> E2eResult<String> {
        self.session.read_text(EMAIL_MESSAGE).await
    }

    /// Validation message under the password field
    pub async fn password_message(&self) -> E2eResult<String> {
        self.session.read_text(PASSWORD_MESSAGE).await
    }

    /// Validation message under the password confirmation field
    pub async fn password_confirmation_message(&self) -> E2eResult<String> {
        self.session.read_text(PASSWORD_CONFIRMATION_MESSAGE).await
    }

    /// Validation message under the username field
    pub async fn username_message(&self) -> E2eResult<String> {
        self.session.read_text(USERNAME_MESSAGE).await
    }

    /// Validation message under the address field
    pub async fn address_message(&self) -> E2eResult<String> {
        self.session.read_text(ADDRESS_MESSAGE).await
    }

    /// Validation message under the tel field
    pub async fn tel_message(&self) -> E2eResult<String> {
        self.session.read_text(TEL_MESSAGE).await
    }

    /// Validation message under the gender dropdown
    pub async fn gender_message(&self) -> E2eResult<String> {
        self.session.read_text(GENDER_MESSAGE).await
    }

    /// Validation message under the birthday field
    pub async fn birthday_message(&self) -> E2eResult<String> {
        self.session.read_text(BIRTHDAY_MESSAGE).await
    }

    /// Look up a validation message getter by its fixture-file field name
    pub async fn message_for_field(&self, field: &str) -> E2eResult<String> {
        match field {
            "email" => self.email_message().await,
            "password" => self.password_message().await,
            "password_confirmation" => self.password_confirmation_message().await,
            "username" => self.username_message().await,
            "address" => self.address_message().await,
            "tel" => self.tel_message().await,
            "gender" => self.gender_message().await,
            "birthday" => self.birthday_message().await,
            other => Err(E2eError::illegal_state(format!(
                "no validation message getter for field {other:?}"
            ))),
        }
    }
}
