mod common;

use reqwest::StatusCode;

// ── Health ──────────────────────────────────────────────────────

#[tokio::test]
async fn health_returns_ok() {
    let app = common::spawn_app().await;

    let resp = app.client.get(app.url("/health")).send().await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.text().await.unwrap(), "ok");

    common::cleanup(app).await;
}

// ── Form page ───────────────────────────────────────────────────

#[tokio::test]
async fn index_renders_form() {
    let app = common::spawn_app().await;

    let (body, status) = app.get_index().await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("name=\"city\""));
    assert!(body.contains("name=\"specialty\""));
    assert!(body.contains("name=\"user_email\""));
    assert!(body.contains("No entries yet."));

    common::cleanup(app).await;
}

// ── Submissions ─────────────────────────────────────────────────

#[tokio::test]
async fn valid_submission_stores_row_and_reports_success() {
    let app = common::spawn_app().await;

    let (body, status) = app
        .submit(&[
            ("city", "Lisbon"),
            ("specialty", "Azulejo tiles"),
            ("user_email", "ana@example.com"),
        ])
        .await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Success! Lisbon added."));
    // No SMTP configured in tests, so no email warning either
    assert!(!body.contains("failed to send email"));

    assert_eq!(app.entry_count().await, 1);
    let entries = cityform::db::entries::list_recent(&app.pool, 10)
        .await
        .unwrap();
    assert_eq!(entries[0].city, "Lisbon");
    assert_eq!(entries[0].specialty, "Azulejo tiles");
    assert_eq!(entries[0].user_email, "ana@example.com");

    common::cleanup(app).await;
}

#[tokio::test]
async fn submission_fields_are_trimmed_only() {
    let app = common::spawn_app().await;

    let (_, status) = app
        .submit(&[
            ("city", "  Porto "),
            ("specialty", " Port wine "),
            ("user_email", " joao@example.com "),
        ])
        .await;
    assert_eq!(status, StatusCode::OK);

    let entries = cityform::db::entries::list_recent(&app.pool, 10)
        .await
        .unwrap();
    assert_eq!(entries[0].city, "Porto");
    assert_eq!(entries[0].specialty, "Port wine");
    assert_eq!(entries[0].user_email, "joao@example.com");

    common::cleanup(app).await;
}

#[tokio::test]
async fn missing_field_rejected_without_side_effects() {
    let app = common::spawn_app().await;

    let (body, status) = app
        .submit(&[("city", "Lisbon"), ("specialty", "Azulejo tiles")])
        .await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Please fill in all fields."));
    assert!(!body.contains("Success!"));

    assert_eq!(app.entry_count().await, 0);

    common::cleanup(app).await;
}

#[tokio::test]
async fn blank_field_rejected_without_side_effects() {
    let app = common::spawn_app().await;

    let (body, _) = app
        .submit(&[
            ("city", "   "),
            ("specialty", "Azulejo tiles"),
            ("user_email", "ana@example.com"),
        ])
        .await;
    assert!(body.contains("Please fill in all fields."));

    assert_eq!(app.entry_count().await, 0);

    common::cleanup(app).await;
}

#[tokio::test]
async fn recent_entries_listed_on_page() {
    let app = common::spawn_app().await;

    app.submit(&[
        ("city", "Lisbon"),
        ("specialty", "Azulejo tiles"),
        ("user_email", "ana@example.com"),
    ])
    .await;
    app.submit(&[
        ("city", "Porto"),
        ("specialty", "Port wine"),
        ("user_email", "joao@example.com"),
    ])
    .await;

    let (body, status) = app.get_index().await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Lisbon"));
    assert!(body.contains("Porto"));
    assert!(!body.contains("No entries yet."));

    common::cleanup(app).await;
}

#[tokio::test]
async fn template_escapes_submitted_values() {
    let app = common::spawn_app().await;

    let (body, _) = app
        .submit(&[
            ("city", "<script>alert(1)</script>"),
            ("specialty", "tags"),
            ("user_email", "x@example.com"),
        ])
        .await;
    assert!(!body.contains("<script>alert(1)</script>"));
    assert!(body.contains("&lt;script&gt;"));

    common::cleanup(app).await;
}

// ── Unreachable store ───────────────────────────────────────────

#[tokio::test]
async fn page_still_renders_when_store_unreachable() {
    let app = common::spawn_app_with_unreachable_db().await;

    let (body, status) = app.get_index().await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("name=\"city\""));
    assert!(body.contains("No entries yet."));

    common::cleanup(app).await;
}

#[tokio::test]
async fn submission_warns_but_completes_when_store_unreachable() {
    let app = common::spawn_app_with_unreachable_db().await;

    let (body, status) = app
        .submit(&[
            ("city", "Gotham"),
            ("specialty", "Vigilantes"),
            ("user_email", "bruce@example.com"),
        ])
        .await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Error saving to database. Check logs."));
    assert!(body.contains("Success! Gotham added."));
    assert!(body.contains("No entries yet."));

    common::cleanup(app).await;
}

// ── Security Headers ────────────────────────────────────────────

#[tokio::test]
async fn security_headers_present() {
    let app = common::spawn_app().await;

    let resp = app.client.get(app.url("/health")).send().await.unwrap();
    assert_eq!(
        resp.headers().get("x-content-type-options").unwrap(),
        "nosniff"
    );
    assert_eq!(resp.headers().get("x-frame-options").unwrap(), "DENY");
    assert_eq!(
        resp.headers().get("referrer-policy").unwrap(),
        "strict-origin-when-cross-origin"
    );

    common::cleanup(app).await;
}
