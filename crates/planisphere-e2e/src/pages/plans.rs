//! Plan list.

use thirtyfour::By;
use tracing::info;

use crate::error::{E2eError, E2eResult};
use crate::locator::Locator;
use crate::session::Session;

use super::{expect_screen, Screen};

const LOADING_INDICATOR: Locator = Locator::css("#plan-list > div[role=\"status\"]");
const PLAN_CARDS: Locator = Locator::class_name("card");

/// The plan list; opening a plan spawns the reservation form in a second
/// window, which the caller switches to before attaching a `ReservePage`.
#[derive(Debug, Clone)]
pub struct PlansPage {
    session: Session,
}

impl PlansPage {
    /// Bind to the plan list the browser is currently showing
    pub async fn attach(session: &Session) -> E2eResult<Self> {
        expect_screen(session, Screen::Plans).await?;
        Ok(Self {
            session: session.clone(),
        })
    }

    /// Ordered plan titles, read once the async loading indicator is gone
    pub async fn plan_titles(&self) -> E2eResult<Vec<String>> {
        self.session.wait_until_gone(LOADING_INDICATOR).await?;
        let mut titles = Vec::new();
        for card in self.session.find_all(PLAN_CARDS).await? {
            if let Some(title) = card.find_all(By::ClassName("card-title")).await?.first() {
                titles.push(title.text().await?);
            }
        }
        Ok(titles)
    }

    /// Open the plan whose title matches exactly; waits for the new window
    /// to appear but leaves switching to the caller
    pub async fn open_plan_by_title(&self, title: &str) -> E2eResult<()> {
        info!(title, "opening plan");
        self.session.wait_until_gone(LOADING_INDICATOR).await?;
        let mut opened = false;
        for card in self.session.find_all(PLAN_CARDS).await? {
            let titles = card.find_all(By::ClassName("card-title")).await?;
            let matches = match titles.first() {
                Some(element) => element.text().await? == title,
                None => false,
            };
            if !matches {
                continue;
            }
            if let Some(link) = card.find_all(By::Tag("a")).await?.first() {
                link.click().await?;
                opened = true;
                break;
            }
        }
        if !opened {
            return Err(E2eError::illegal_state(format!(
                "no plan titled {title:?} on the plans page"
            )));
        }
        self.session.wait_for_window_count(2).await
    }
}
