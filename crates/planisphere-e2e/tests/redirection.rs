//! Redirection suite: guarded pages bounce to the index page.

mod common;

use planisphere_e2e::prelude::*;

async fn assert_redirects_to_index(fixture: &BrowserFixture, path: &str) {
    let session = fixture.session();
    session.goto(&fixture.config().url_for(path)).await.unwrap();
    session.wait_until_url_contains("index.html").await.unwrap();
    let url = session.current_url().await.unwrap();
    assert!(url.ends_with("index.html"), "{path} landed on {url}");
}

async fn log_in(fixture: &BrowserFixture, email: &str, password: &str) {
    fixture.goto_top().await.unwrap();
    let top = TopPage::attach(fixture.session()).await.unwrap();
    let login = top.go_to_login_page().await.unwrap();
    login.login(email, password).await.unwrap();
}

#[tokio::test]
#[ignore = "drives a live browser; run through the planisphere CLI"]
async fn mypage_requires_login() {
    let fixture = common::launch().await;
    assert_redirects_to_index(&fixture, "mypage.html").await;
    fixture.quit().await.unwrap();
}

#[tokio::test]
#[ignore = "drives a live browser; run through the planisphere CLI"]
async fn login_page_redirects_when_logged_in() {
    let fixture = common::launch().await;
    log_in(&fixture, "clark@example.com", "password").await;
    assert_redirects_to_index(&fixture, "login.html").await;
    fixture.quit().await.unwrap();
}

#[tokio::test]
#[ignore = "drives a live browser; run through the planisphere CLI"]
async fn signup_page_redirects_when_logged_in() {
    let fixture = common::launch().await;
    log_in(&fixture, "clark@example.com", "password").await;
    assert_redirects_to_index(&fixture, "signup.html").await;
    fixture.quit().await.unwrap();
}

#[tokio::test]
#[ignore = "drives a live browser; run through the planisphere CLI"]
async fn unknown_plan_id_redirects() {
    let fixture = common::launch().await;
    assert_redirects_to_index(&fixture, "reserve.html?plan-id=100").await;
    fixture.quit().await.unwrap();
}

#[tokio::test]
#[ignore = "drives a live browser; run through the planisphere CLI"]
async fn malformed_plan_id_redirects() {
    let fixture = common::launch().await;
    assert_redirects_to_index(&fixture, "reserve.html?plan-id=abc").await;
    fixture.quit().await.unwrap();
}

#[tokio::test]
#[ignore = "drives a live browser; run through the planisphere CLI"]
async fn missing_plan_id_redirects() {
    let fixture = common::launch().await;
    assert_redirects_to_index(&fixture, "reserve.html").await;
    fixture.quit().await.unwrap();
}

#[tokio::test]
#[ignore = "drives a live browser; run through the planisphere CLI"]
async fn member_only_plan_requires_login() {
    let fixture = common::launch().await;
    assert_redirects_to_index(&fixture, "reserve.html?plan-id=3").await;
    fixture.quit().await.unwrap();
}

#[tokio::test]
#[ignore = "drives a live browser; run through the planisphere CLI"]
async fn premium_only_plan_requires_login() {
    let fixture = common::launch().await;
    assert_redirects_to_index(&fixture, "reserve.html?plan-id=1").await;
    fixture.quit().await.unwrap();
}

#[tokio::test]
#[ignore = "drives a live browser; run through the planisphere CLI"]
async fn premium_only_plan_rejects_normal_members() {
    let fixture = common::launch().await;
    log_in(&fixture, "diana@example.com", "pass1234").await;
    assert_redirects_to_index(&fixture, "reserve.html?plan-id=1").await;
    fixture.quit().await.unwrap();
}

#[tokio::test]
#[ignore = "drives a live browser; run through the planisphere CLI"]
async fn confirm_page_rejects_direct_access() {
    let fixture = common::launch().await;
    assert_redirects_to_index(&fixture, "confirm.html").await;
    fixture.quit().await.unwrap();
}
