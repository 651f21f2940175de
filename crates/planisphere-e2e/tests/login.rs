//! Login feature suite.

mod common;

use planisphere_e2e::cases;
use planisphere_e2e::prelude::*;

#[tokio::test]
#[ignore = "drives a live browser; run through the planisphere CLI"]
async fn login_success() {
    let fixture = common::launch().await;
    let records = cases(&common::data_file("login_cases.yaml"), "login_success_cases").unwrap();
    assert!(!records.is_empty(), "no login success cases in the fixture file");

    for case in &records {
        let mut report = common::reporter(&format!("login::success::{}", case.id()));
        report.step(case.description());

        fixture.goto_top().await.unwrap();
        let top = TopPage::attach(fixture.session()).await.unwrap();
        let login = top.go_to_login_page().await.unwrap();
        let my_page = login
            .login(&case.str("email"), &case.str("password"))
            .await
            .unwrap();

        report.step("verify profile header");
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
async fn login_failure() {
    let fixture = common::launch().await;
    let records = cases(&common::data_file("login_cases.yaml"), "login_failure_cases").unwrap();
    assert!(!records.is_empty(), "no login failure cases in the fixture file");

    for case in &records {
        let mut report = common::reporter(&format!("login::failure::{}", case.id()));
        report.step(case.description());

        fixture.goto_top().await.unwrap();
        let top = TopPage::attach(fixture.session()).await.unwrap();
        let login = top.go_to_login_page().await.unwrap();
        login
            .login_expecting_failure(&case.str("email"), &case.str("password"))
            .await
            .unwrap();

        report.step("verify validation messages");
        let expected_email = case.str("expected_email_msg");
        if !expected_email.is_empty() {
            assert_eq!(
                login.email_message().await.unwrap(),
                expected_email,
                "email message for case {}",
                case.id()
            );
        }
        let expected_password = case.str("expected_password_msg");
        if !expected_password.is_empty() {
            assert_eq!(
                login.password_message().await.unwrap(),
                expected_password,
                "password message for case {}",
                case.id()
            );
        }

        report.finish(TestStatus::Passed, None).unwrap();
        fixture.reset().await;
    }
    fixture.quit().await.unwrap();
}
