//! HTML pages for the demo server.

use crate::config::api;
use crate::models::UserInfo;

/// Render the landing page.
///
/// Shows the profile when one is given, the hosted login button otherwise.
/// All interpolated values are HTML-escaped.
pub fn render_index(
    app_id: &str,
    redirect_url: &str,
    profile: Option<&UserInfo>,
    error_message: Option<&str>,
) -> String {
    let error_html = error_message
        .map(|msg| format!(r#"<div class="error">{}</div>"#, html_escape(msg)))
        .unwrap_or_default();

    let body = profile.map_or_else(
        || render_login_button(app_id, redirect_url),
        render_profile,
    );

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width,initial-scale=1">
<title>Clef Demo</title>
<link rel="stylesheet" href="/static/style.css">
</head>
<body>
<div class="card">
<h1>Clef Demo</h1>
{error_html}
{body}
</div>
</body>
</html>"#,
        error_html = error_html,
        body = body,
    )
}

fn render_login_button(app_id: &str, redirect_url: &str) -> String {
    format!(
        r#"<p>You are not logged in.</p>
<script type="text/javascript" src="{script}" class="clef-button" data-app-id="{app_id}" data-redirect-url="{redirect_url}"></script>"#,
        script = api::LOGIN_BUTTON_SCRIPT,
        app_id = html_escape(app_id),
        redirect_url = html_escape(redirect_url),
    )
}

fn render_profile(info: &UserInfo) -> String {
    format!(
        r#"<p>Welcome, <strong>{name}</strong>.</p>
<dl>
<dt>Clef ID</dt><dd>{id}</dd>
<dt>Email</dt><dd>{email}</dd>
<dt>Phone</dt><dd>{phone}</dd>
</dl>"#,
        name = html_escape(&info.display_name()),
        id = info.id,
        email = html_escape(&info.email),
        phone = html_escape(&info.phone_number),
    )
}

/// Escape HTML special characters.
fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}
