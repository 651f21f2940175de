//! Icon upload form.

use std::path::Path;

use tracing::info;

use crate::color::Color;
use crate::error::E2eResult;
use crate::locator::Locator;
use crate::session::Session;

use super::{expect_screen, MyPage, Screen};

const ICON_INPUT: Locator = Locator::id("icon");
const ZOOM_INPUT: Locator = Locator::id("zoom");
const COLOR_INPUT: Locator = Locator::id("color");
const SUBMIT_BUTTON: Locator = Locator::css("#icon-form > button");
const ICON_MESSAGE: Locator = Locator::css("#icon ~ .invalid-feedback");

/// The profile-icon upload form
#[derive(Debug, Clone)]
pub struct IconPage {
    session: Session,
}

impl IconPage {
    /// Bind to the icon form the browser is currently showing
    pub async fn attach(session: &Session) -> E2eResult<Self> {
        expect_screen(session, Screen::Icon).await?;
        Ok(Self {
            session: session.clone(),
        })
    }

    /// Choose the icon file by absolute path
    pub async fn set_icon(&self, file: &Path) -> E2eResult<()> {
        info!(file = %file.display(), "choosing icon file");
        let input = self.session.find(ICON_INPUT).await?;
        input.send_keys(file.display().to_string()).await?;
        Ok(())
    }

    /// Set the zoom slider via direct value injection.
    ///
    /// Range inputs do not accept keystrokes, so the value is written onto
    /// the element directly.
    pub async fn set_zoom(&self, value: u32) -> E2eResult<()> {
        self.session
            .execute_on_element(
                "arguments[0].value = arguments[1]",
                ZOOM_INPUT,
                &value.to_string(),
            )
            .await
    }

    /// Set the border color via direct value injection (color inputs are
    /// not keyboard-reachable either)
    pub async fn set_color(&self, color: Color) -> E2eResult<()> {
        self.session
            .execute_on_element("arguments[0].value = arguments[1]", COLOR_INPUT, &color.hex())
            .await
    }

    /// Submit the form and return to the profile page
    pub async fn submit(self) -> E2eResult<MyPage> {
        info!("submitting icon form");
        self.session.click(SUBMIT_BUTTON).await?;
        MyPage::attach(&self.session).await
    }

    /// Validation message under the file input
    pub async fn icon_message(&self) -> E2eResult<String> {
        self.session.read_text(ICON_MESSAGE).await
    }
}
