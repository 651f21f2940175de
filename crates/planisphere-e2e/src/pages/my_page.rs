//! Member profile page.

use tracing::info;

use crate::color::Color;
use crate::error::E2eResult;
use crate::locator::Locator;
use crate::session::Session;

use super::{expect_screen, IconPage, PlansPage, Screen};

const HEADER: Locator = Locator::tag("h2");
const EMAIL_TEXT: Locator = Locator::id("email");
const USERNAME_TEXT: Locator = Locator::id("username");
const RANK_TEXT: Locator = Locator::id("rank");
const ADDRESS_TEXT: Locator = Locator::id("address");
const TEL_TEXT: Locator = Locator::id("tel");
const GENDER_TEXT: Locator = Locator::id("gender");
const BIRTHDAY_TEXT: Locator = Locator::id("birthday");
const NOTIFICATION_TEXT: Locator = Locator::id("notification");

const RESERVE_LINK: Locator = Locator::link_text("Reserve");
const ICON_LINK: Locator = Locator::id("icon-link");
const ICON_IMAGE: Locator = Locator::css("#icon-holder > img");
const DELETE_BUTTON: Locator = Locator::css("#delete-form > button");

/// The logged-in member's profile page
#[derive(Debug, Clone)]
pub struct MyPage {
    session: Session,
}

impl MyPage {
    /// Bind to the profile page the browser is currently showing
    pub async fn attach(session: &Session) -> E2eResult<Self> {
        expect_screen(session, Screen::MyPage).await?;
        Ok(Self {
            session: session.clone(),
        })
    }

    /// Open the plan list
    pub async fn go_to_plans_page(self) -> E2eResult<PlansPage> {
        info!("opening plans page");
        self.session.click(RESERVE_LINK).await?;
        PlansPage::attach(&self.session).await
    }

    /// Open the icon upload form
    pub async fn go_to_icon_page(self) -> E2eResult<IconPage> {
        info!("opening icon page");
        self.session.click(ICON_LINK).await?;
        IconPage::attach(&self.session).await
    }

    /// Page header text
    pub async fn header_text(&self) -> E2eResult<String> {
        self.session.read_text(HEADER).await
    }

    /// Displayed email
    pub async fn email(&self) -> E2eResult<String> {
        self.session.read_text(EMAIL_TEXT).await
    }

    /// Displayed username
    pub async fn username(&self) -> E2eResult<String> {
        self.session.read_text(USERNAME_TEXT).await
    }

    /// Displayed membership rank
    pub async fn rank(&self) -> E2eResult<String> {
        self.session.read_text(RANK_TEXT).await
    }

    /// Displayed address
    pub async fn address(&self) -> E2eResult<String> {
        self.session.read_text(ADDRESS_TEXT).await
    }

    /// Displayed tel
    pub async fn tel(&self) -> E2eResult<String> {
        self.session.read_text(TEL_TEXT).await
    }

    /// Displayed gender
    pub async fn gender(&self) -> E2eResult<String> {
        self.session.read_text(GENDER_TEXT).await
    }

    /// Displayed birthday
    pub async fn birthday(&self) -> E2eResult<String> {
        self.session.read_text(BIRTHDAY_TEXT).await
    }

    /// Displayed notification setting
    pub async fn notification(&self) -> E2eResult<String> {
        self.session.read_text(NOTIFICATION_TEXT).await
    }

    /// Whether an uploaded icon image is present
    pub async fn has_icon_image(&self) -> E2eResult<bool> {
        Ok(!self.session.find_all(ICON_IMAGE).await?.is_empty())
    }

    /// Rendered width of the icon image, -1 when unreadable
    pub async fn icon_image_width(&self) -> E2eResult<i64> {
        let width = self.session.read_property(ICON_IMAGE, "width").await?;
        Ok(width.parse().unwrap_or(-1))
    }

    /// Background color behind the icon image.
    ///
    /// Some driver versions only answer the camelCase property name, so the
    /// kebab-case form is the fallback.
    pub async fn icon_image_border(&self) -> E2eResult<Color> {
        let mut value = self.session.read_css(ICON_IMAGE, "backgroundColor").await?;
        if value.is_empty() {
            value = self.session.read_css(ICON_IMAGE, "background-color").await?;
        }
        Color::parse(&value)
    }

    /// Start account deletion.
    ///
    /// Produces two browser-native dialogs (confirm, then completion) that
    /// the caller handles through the session.
    pub async fn delete_user(&self) -> E2eResult<()> {
        info!("deleting account");
        self.session.click(DELETE_BUTTON).await
    }
}
