//! Shared harness for the browser suites: session bootstrap, fixture-file
//! paths, date-marker resolution and the expected-bill table.
//!
//! The date and price arithmetic lives here rather than in the library
//! because it encodes what the test expects of the site, not what the site
//! is driven with.

#![allow(dead_code)]

use std::path::PathBuf;

use chrono::{Datelike, Days, Local, NaiveDate, Weekday};
use planisphere_e2e::prelude::*;

/// Short date form used by the reservation form
pub const SHORT_FORMAT: &str = "%m/%d/%Y";
/// Long date form used by the confirmation page
pub const LONG_FORMAT: &str = "%B %-d, %Y";

/// Suite configuration from the environment
pub fn config() -> SuiteConfig {
    SuiteConfig::from_env()
}

/// Connect the browser session; the suites are `#[ignore]`d, so reaching
/// this without a WebDriver endpoint is a setup mistake worth failing loud.
pub async fn launch() -> BrowserFixture {
    let config = config();
    BrowserFixture::launch(config)
        .await
        .expect("WebDriver session (is chromedriver running at WEBDRIVER_URL?)")
}

/// Path to a fixture data file under `tests/data/`
pub fn data_file(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/data")
        .join(name)
}

/// Absolute path to a crate-relative asset such as the icon image
pub fn asset_file(relative: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join(relative)
}

/// Where test result records are written
pub fn results_dir() -> PathBuf {
    std::env::var("E2E_RESULTS_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("reports/results"))
}

/// Start recording a test
pub fn reporter(name: &str) -> TestReporter {
    TestReporter::new(results_dir(), name)
}

/// Today's date in the local timezone
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// The check-in date a fixture marker stands for
pub fn date_for_marker(marker: &str) -> NaiveDate {
    match marker {
        "today" => today(),
        "tomorrow" => today() + Days::new(1),
        "after_90_days" => today() + Days::new(90),
        "after_91_days" => today() + Days::new(91),
        other => NaiveDate::parse_from_str(other, SHORT_FORMAT)
            .unwrap_or_else(|_| panic!("unknown date marker {other:?}")),
    }
}

/// Resolve a fixture date marker to the short form typed into the form
pub fn resolve_date_marker(marker: &str) -> String {
    if marker.is_empty() {
        return String::new();
    }
    date_for_marker(marker).format(SHORT_FORMAT).to_string()
}

/// The term line the confirmation page renders for a stay
pub fn expected_term_line(check_in: NaiveDate, nights: u64) -> String {
    let check_out = check_in + Days::new(nights);
    format!(
        "{} - {}. {} night(s)",
        check_in.format(LONG_FORMAT),
        check_out.format(LONG_FORMAT),
        nights
    )
}

/// The total-bill line for the two bookable plans, by check-in weekday.
///
/// Prices mirror the two cases the success suite books: the special-offer
/// plan for one guest and the premium plan for four guests with breakfast
/// and early check-in.
pub fn expected_total_bill(plan_title: &str, check_in: NaiveDate) -> String {
    let weekday = check_in.weekday();
    let amount = if plan_title == "Plan with special offers" {
        match weekday {
            Weekday::Sat | Weekday::Sun => "87.50",
            _ => "70.00",
        }
    } else {
        match weekday {
            Weekday::Sat => "1,120.00",
            Weekday::Fri | Weekday::Sun => "1,020.00",
            _ => "920.00",
        }
    };
    format!("Total ${amount} (included taxes)")
}

/// Walk from the plan list into the reservation window for `case`,
/// returning the reservation page once the new window has focus.
pub async fn open_reserve_page(fixture: &BrowserFixture, case: &CaseRecord) -> ReservePage {
    fixture.goto_top().await.unwrap();
    let session = fixture.session();
    let top = TopPage::attach(session).await.unwrap();

    let plans = if case.bool_or("is_logged_in", false) {
        let login = top.go_to_login_page().await.unwrap();
        let my_page = login
            .login(&case.str("login_email"), &case.str("login_password"))
            .await
            .unwrap();
        my_page.go_to_plans_page().await.unwrap()
    } else {
        top.go_to_plans_page().await.unwrap()
    };

    let before = session.window_handles().await.unwrap();
    plans
        .open_plan_by_title(&case.str("plan_title"))
        .await
        .unwrap();
    let after = session.window_handles().await.unwrap();
    let fresh = Session::new_window_handle(&before, &after).unwrap();
    session.switch_to_window(fresh).await.unwrap();
    ReservePage::attach(session).await.unwrap()
}
