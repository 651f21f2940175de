//! Signup feature suite.

mod common;

use chrono::NaiveDate;
use planisphere_e2e::cases;
use planisphere_e2e::prelude::*;

async fn fill_signup_form(page: &SignupPage, case: &CaseRecord) {
    page.set_email(&case.str("email")).await.unwrap();
    page.set_password(&case.str("password")).await.unwrap();
    page.set_password_confirmation(&case.str("password_confirmation"))
        .await
        .unwrap();
    page.set_username(&case.str("username")).await.unwrap();
    page.set_rank(Rank::from_value(&case.str("rank")).unwrap())
        .await
        .unwrap();
    page.set_address(&case.str("address")).await.unwrap();
    page.set_tel(&case.str("tel")).await.unwrap();
    page.set_gender(Gender::from_value(&case.str("gender")).unwrap())
        .await
        .unwrap();
    if let Some(birthday) = case.opt_str("birthday") {
        let date = NaiveDate::parse_from_str(&birthday, "%Y-%m-%d").unwrap();
        page.set_birthday(Some(date)).await.unwrap();
    }
    page.set_notification(case.bool_or("notification", false))
        .await
        .unwrap();
}

#[tokio::test]
#[ignore = "drives a live browser; run through the planisphere CLI"]
async fn signup_success() {
    let fixture = common::launch().await;
    let records = cases(&common::data_file("signup_cases.yaml"), "signup_success_cases").unwrap();
    assert!(!records.is_empty(), "no signup success cases in the fixture file");

    for case in &records {
        let mut report = common::reporter(&format!("signup::success::{}", case.id()));
        report.step(case.description());

        fixture.goto_top().await.unwrap();
        let top = TopPage::attach(fixture.session()).await.unwrap();
        let signup = top.go_to_signup_page().await.unwrap();

        report.step("fill the signup form");
        fill_signup_form(&signup, case).await;

        report.step("submit and verify the profile header");
        let my_page = signup.submit().await.unwrap();
        assert_eq!(
            my_page.header_text().await.unwrap(),
            case.str("expected_header"),
            "case {}",
            case.id()
        );

        report.finish(TestStatus::Passed, None).unwrap();
        fixture.reset().await;
    }
    fixture.quit().await.unwrap();
}

#[tokio::test]
#[ignore = "drives a live browser; run through the planisphere CLI"]
async fn signup_failure() {
    let fixture = common::launch().await;
    let records = cases(&common::data_file("signup_cases.yaml"), "signup_failure_cases").unwrap();
    assert!(!records.is_empty(), "no signup failure cases in the fixture file");

    for case in &records {
        let mut report = common::reporter(&format!("signup::failure::{}", case.id()));
        report.step(case.description());

        fixture.goto_top().await.unwrap();
        let top = TopPage::attach(fixture.session()).await.unwrap();
        let signup = top.go_to_signup_page().await.unwrap();

        report.step("fill the signup form");
        fill_signup_form(&signup, case).await;
        signup.submit_expecting_failure().await.unwrap();

        report.step("verify validation messages");
        for (field, expected) in case.map("expected_messages").entries() {
            let Some(expected) = expected else { continue };
            let actual = signup.message_for_field(&field).await.unwrap();
            assert_eq!(actual, expected, "{field} message for case {}", case.id());
        }

        report.finish(TestStatus::Passed, None).unwrap();
        fixture.reset().await;
    }
    fixture.quit().await.unwrap();
}
