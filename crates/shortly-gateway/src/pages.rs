//! Static error pages served by the transport layer.

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};

/// Page served when a short code is unknown.
pub const NOT_FOUND_PAGE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <title>404 - Page Not Found</title>
</head>
<body>
  <div class="container">
    <h1>404 - Page Not Found</h1>
    <p>Please check the spelling of the URL or contact the owner for help.</p>
  </div>
</body>
</html>
"#;

/// Page served when a short code was found but its link has expired.
pub const EXPIRED_PAGE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <title>Link Expired</title>
</head>
<body>
  <div class="container">
    <h1>Link Expired</h1>
    <p>This link has expired. If you need access, please contact the link creator.</p>
  </div>
</body>
</html>
"#;

pub fn not_found() -> Response {
    (StatusCode::NOT_FOUND, Html(NOT_FOUND_PAGE)).into_response()
}

pub fn expired() -> Response {
    (StatusCode::NOT_FOUND, Html(EXPIRED_PAGE)).into_response()
}
