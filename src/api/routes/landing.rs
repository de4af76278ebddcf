//! Landing Page Route
//!
//! - GET / - Static HTML page describing the API, with forms for
//!   creating users and logging exercises.

use axum::response::Html;

const LANDING_PAGE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>Fitlog - Exercise Tracker</title>
  <style>
    body { font-family: sans-serif; max-width: 40rem; margin: 2rem auto; padding: 0 1rem; }
    code { background: #eee; padding: 0.1rem 0.3rem; }
    form { margin: 1rem 0; padding: 1rem; border: 1px solid #ccc; }
    label { display: block; margin: 0.5rem 0 0.2rem; }
  </style>
</head>
<body>
  <h1>Fitlog</h1>
  <p>Exercise tracking API. Create users, log exercises, query filtered logs.</p>

  <form action="/api/users" method="post">
    <h2>Create a user</h2>
    <label for="username">Username</label>
    <input id="username" name="username" type="text" required>
    <button type="submit">Create</button>
  </form>

  <h2>Endpoints</h2>
  <ul>
    <li><code>POST /api/users</code> - create a user</li>
    <li><code>GET /api/users</code> - list users</li>
    <li><code>POST /api/users/:id/exercises</code> - log an exercise
        (<code>description</code>, <code>duration</code>, optional <code>date</code>)</li>
    <li><code>GET /api/users/:id/logs?from=&amp;to=&amp;limit=</code> - query a log</li>
  </ul>
</body>
</html>
"#;

/// GET /
pub async fn landing() -> Html<&'static str> {
    Html(LANDING_PAGE)
}
