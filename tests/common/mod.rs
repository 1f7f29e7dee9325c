// tests/common/mod.rs

//! Shared catalog fixtures for integration tests.

#![allow(dead_code)]

use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const PREFIX: &str = "/coursedescriptions/quarter/undergrad/";

/// Index page linking to each department under the catalog prefix.
pub fn index_page(depts: &[&str]) -> String {
    let anchors: String = depts
        .iter()
        .map(|d| format!(r#"<li><a href="{PREFIX}{d}/">{d}</a></li>"#))
        .collect();
    format!(
        r#"<html><body>
        <a href="/">Catalog Home</a>
        <a href="/coursedescriptions/quarter/grad/">Graduate</a>
        <ul>{anchors}</ul>
        </body></html>"#
    )
}

/// Department page with one fully populated course block.
pub fn department_page(code: &str, title: &str, department: &str) -> String {
    format!(
        r#"<html><body><div class="sc_sccoursedescs">
        <div class="courseblock">
          <p class="courseblocktitle"><strong><span class="text">{code}</span> <span class="text">{title}</span> 3.0 Credits</strong></p>
          <p class="courseblockdesc">An introduction to {title}, with "quotes", commas.</p>
          <p class="courseblockextra"><b>College/Department:</b> {department}</p>
        </div>
        </div></body></html>"#
    )
}

pub async fn mount_page(server: &MockServer, route: &str, status: u16, body: &str) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(status).set_body_string(body))
        .mount(server)
        .await;
}

/// A catalog with two departments holding one course each.
pub async fn two_department_catalog() -> MockServer {
    let server = MockServer::start().await;
    mount_page(&server, PREFIX, 200, &index_page(&["cs", "math"])).await;
    mount_page(
        &server,
        &format!("{PREFIX}cs/"),
        200,
        &department_page("CS 101", "Intro to Programming", "Computer Science"),
    )
    .await;
    mount_page(
        &server,
        &format!("{PREFIX}math/"),
        200,
        &department_page("MATH 121", "Calculus I", "Mathematics"),
    )
    .await;
    server
}
