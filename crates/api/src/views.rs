//! Minimal server-rendered views.
//!
//! Just enough HTML for the login form and the report form; styling and
//! anything richer belongs to a real frontend.

use aliada_core::company::Company;
use aliada_core::reports::ReportType;

/// Escapes text for interpolation into HTML.
fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

fn error_banner(error: Option<&str>) -> String {
    error.map_or_else(String::new, |message| {
        format!(r#"<p class="error">{}</p>"#, escape(message))
    })
}

/// Renders the login page.
#[must_use]
pub fn login_page(error: Option<&str>) -> String {
    format!(
        r#"<!doctype html>
<html lang="en">
<head><meta charset="utf-8"><title>Aliada Reports - Login</title></head>
<body>
<h1>Aliada Reports</h1>
{banner}
<form method="post" action="/login">
  <label>Username <input name="username" autocomplete="username"></label>
  <label>Password <input name="password" type="password" autocomplete="current-password"></label>
  <button type="submit">Log in</button>
</form>
</body>
</html>
"#,
        banner = error_banner(error)
    )
}

/// Renders the report form page with the company list and report types.
#[must_use]
pub fn form_page(username: &str, companies: &[Company], error: Option<&str>) -> String {
    let company_options: String = companies
        .iter()
        .map(|company| {
            format!(
                r#"<option value="{}">{}</option>"#,
                escape(&company.realm_id),
                escape(&company.name)
            )
        })
        .collect();

    let report_options: String = ReportType::ALL
        .into_iter()
        .map(|report_type| {
            format!(
                r#"<option value="{}">{}</option>"#,
                report_type.as_str(),
                report_type.display_name()
            )
        })
        .collect();

    format!(
        r#"<!doctype html>
<html lang="en">
<head><meta charset="utf-8"><title>Aliada Reports</title></head>
<body>
<header>
  <h1>Aliada Reports</h1>
  <p>{user}</p>
  <form method="post" action="/logout"><button type="submit">Log out</button></form>
</header>
{banner}
<form id="reportForm">
  <label>Company <select id="company" name="realmId">{company_options}</select></label>
  <label>Report <select id="reportType" name="reportType">{report_options}</select></label>
  <label>Start <input id="startDate" name="startDate" type="date"></label>
  <label>End <input id="endDate" name="endDate" type="date"></label>
  <label>Exclude accounts <input id="excludeAccounts" name="excludeAccounts" placeholder="5100, 5200"></label>
  <button type="submit">Generate</button>
  <p id="err" class="error"></p>
</form>
<h2>Companies</h2>
<form method="post" action="/admin/companies">
  <label>Id <input name="id"></label>
  <label>Name <input name="name"></label>
  <label>Realm id <input name="realmId"></label>
  <button type="submit">Save</button>
</form>
<script>
const form = document.getElementById("reportForm");
const err = document.getElementById("err");
form.addEventListener("submit", async (e) => {{
  e.preventDefault();
  err.textContent = "";
  const reportType = document.getElementById("reportType").value;
  const startDate = document.getElementById("startDate").value;
  const endDate = document.getElementById("endDate").value;
  const payload = {{
    realmId: document.getElementById("company").value,
    reportType, startDate, endDate,
    excludeAccountIds: document.getElementById("excludeAccounts").value,
  }};
  const resp = await fetch("/api/run-report", {{
    method: "POST",
    headers: {{ "Content-Type": "application/json" }},
    body: JSON.stringify(payload),
  }});
  if (!resp.ok) {{
    const body = await resp.json().catch(() => ({{ error: "Report failed." }}));
    err.textContent = body.error || "Report failed.";
    return;
  }}
  const blob = await resp.blob();
  const a = document.createElement("a");
  a.href = URL.createObjectURL(blob);
  a.download = `QBO_${{reportType}}_${{startDate}}_${{endDate}}.xlsx`;
  document.body.appendChild(a);
  a.click();
  a.remove();
  URL.revokeObjectURL(a.href);
}});
</script>
</body>
</html>
"#,
        user = escape(username),
        banner = error_banner(error),
    )
}
