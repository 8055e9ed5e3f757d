use crate::attendance::{Standing, Threshold};
use crate::models::{Report, SubjectView};

pub fn render_dashboard(
    report: &Report,
    subjects: &[SubjectView],
    threshold: Threshold,
    message: &str,
) -> String {
    DASHBOARD_HTML
        .replace("{{TARGET}}", &threshold.to_string())
        .replace("{{OVERALL}}", &report.overall_percentage.to_string())
        .replace("{{TOTAL_SUBJECTS}}", &report.total_subjects.to_string())
        .replace("{{BELOW_TARGET}}", &report.below_target.to_string())
        .replace("{{MESSAGE}}", &escape_html(message))
        .replace("{{ROWS}}", &render_rows(subjects))
}

fn render_rows(subjects: &[SubjectView]) -> String {
    if subjects.is_empty() {
        return r#"<tr><td colspan="6" class="empty">No subjects added yet. Add your first subject to start tracking attendance.</td></tr>"#
            .to_string();
    }

    let mut rows = String::new();
    for subject in subjects {
        let plan = if subject.need_to_attend > 0 {
            format!("Attend the next {}", subject.need_to_attend)
        } else {
            format!("Can miss {}", subject.can_miss)
        };
        rows.push_str(&format!(
            r#"<tr>
        <td>{name}</td>
        <td>{attended} / {total}</td>
        <td><span class="pct {class}">{pct}%</span><div class="bar"><div class="fill {class}" style="width: {width}%"></div></div></td>
        <td>{standing}</td>
        <td>{plan}</td>
        <td class="actions">
          <form class="edit" method="post" action="/subjects/{id}">
            <input name="name" value="{name}" aria-label="Subject name" required />
            <input name="total_classes" type="number" min="0" value="{total}" aria-label="Total classes" />
            <input name="attended_classes" type="number" min="0" value="{attended}" aria-label="Attended classes" />
            <button class="btn-save" type="submit">Save</button>
          </form>
          <form method="post" action="/subjects/{id}/delete"><button class="btn-delete" type="submit">Delete</button></form>
        </td>
      </tr>
      "#,
            name = escape_html(&subject.name),
            attended = subject.attended_classes,
            total = subject.total_classes,
            class = standing_class(subject.standing),
            pct = subject.percentage,
            width = subject.percentage.min(100),
            standing = subject.standing.name(),
            plan = plan,
            id = subject.id,
        ));
    }
    rows
}

fn standing_class(standing: Standing) -> &'static str {
    match standing {
        Standing::Poor => "poor",
        Standing::Good => "good",
        Standing::Excellent => "excellent",
    }
}

fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

const DASHBOARD_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>MyAttendance</title>
  <style>
    :root {
      --bg: #eff6ff;
      --ink: #1f2937;
      --muted: #6b7280;
      --accent: #2196f3;
      --poor: #ef4444;
      --good: #f59e0b;
      --excellent: #10b981;
      --card: #ffffff;
      --shadow: 0 20px 48px rgba(33, 150, 243, 0.12);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: linear-gradient(180deg, var(--bg), #ffffff 70%);
      color: var(--ink);
      font-family: "Inter", "Segoe UI", sans-serif;
      padding: 40px 18px 56px;
    }

    .app {
      width: min(980px, 100%);
      margin: 0 auto;
      display: grid;
      gap: 28px;
    }

    h1 {
      margin: 0 0 6px;
      font-size: clamp(1.8rem, 4vw, 2.4rem);
    }

    .subtitle {
      margin: 0;
      color: var(--muted);
    }

    .panel {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(200px, 1fr));
      gap: 16px;
    }

    .stat,
    .card {
      background: var(--card);
      border-radius: 16px;
      box-shadow: var(--shadow);
      padding: 20px;
    }

    .stat .label {
      display: block;
      font-size: 0.85rem;
      color: var(--muted);
    }

    .stat .value {
      display: block;
      margin-top: 6px;
      font-size: 1.8rem;
      font-weight: 700;
    }

    .message {
      font-style: italic;
      color: #374151;
    }

    table {
      width: 100%;
      border-collapse: collapse;
    }

    th,
    td {
      text-align: left;
      padding: 10px 8px;
      border-bottom: 1px solid #e5e7eb;
      font-size: 0.95rem;
    }

    th {
      color: var(--muted);
      font-weight: 500;
    }

    td.empty {
      text-align: center;
      color: var(--muted);
      padding: 32px 8px;
    }

    .pct.poor { color: var(--poor); }
    .pct.good { color: var(--good); }
    .pct.excellent { color: var(--excellent); }

    .bar {
      margin-top: 6px;
      height: 6px;
      border-radius: 999px;
      background: #e5e7eb;
      overflow: hidden;
    }

    .fill {
      height: 100%;
      border-radius: 999px;
    }

    .fill.poor { background: var(--poor); }
    .fill.good { background: var(--good); }
    .fill.excellent { background: var(--excellent); }

    form.add {
      display: grid;
      grid-template-columns: 2fr 1fr 1fr auto;
      gap: 12px;
      align-items: end;
    }

    label {
      display: grid;
      gap: 6px;
      font-size: 0.85rem;
      color: var(--muted);
    }

    input {
      border: 1px solid #d1d5db;
      border-radius: 10px;
      padding: 10px 12px;
      font-size: 1rem;
    }

    button {
      appearance: none;
      border: none;
      border-radius: 10px;
      padding: 11px 18px;
      font-size: 0.95rem;
      font-weight: 600;
      cursor: pointer;
      background: var(--accent);
      color: white;
    }

    td.actions {
      display: flex;
      gap: 8px;
      align-items: center;
    }

    form.edit {
      display: flex;
      gap: 6px;
    }

    form.edit input {
      width: 5.5rem;
      padding: 6px 8px;
      font-size: 0.9rem;
    }

    form.edit input[name="name"] {
      width: 9rem;
    }

    .btn-save {
      padding: 6px 12px;
    }

    .btn-delete {
      padding: 6px 12px;
      background: transparent;
      color: var(--poor);
      border: 1px solid rgba(239, 68, 68, 0.4);
    }

    .links {
      display: flex;
      gap: 16px;
      font-size: 0.9rem;
    }

    .links a {
      color: var(--accent);
    }

    @media (max-width: 700px) {
      form.add {
        grid-template-columns: 1fr;
      }
    }
  </style>
</head>
<body>
  <main class="app">
    <header>
      <h1>MyAttendance</h1>
      <p class="subtitle">Track your attendance per subject. Target: {{TARGET}}.</p>
    </header>

    <section class="panel">
      <div class="stat">
        <span class="label">Overall Attendance</span>
        <span id="overall" class="value">{{OVERALL}}%</span>
      </div>
      <div class="stat">
        <span class="label">Total Subjects</span>
        <span id="total-subjects" class="value">{{TOTAL_SUBJECTS}}</span>
      </div>
      <div class="stat">
        <span class="label">Subjects Below Target</span>
        <span id="below-target" class="value">{{BELOW_TARGET}}</span>
      </div>
    </section>

    <p class="card message" id="message">{{MESSAGE}}</p>

    <section class="card">
      <form class="add" method="post" action="/subjects">
        <label>Subject Name
          <input name="name" placeholder="e.g. Mathematics" required />
        </label>
        <label>Total Classes
          <input name="total_classes" type="number" min="0" value="0" />
        </label>
        <label>Attended Classes
          <input name="attended_classes" type="number" min="0" value="0" />
        </label>
        <button type="submit">Add Subject</button>
      </form>
    </section>

    <section class="card">
      <table>
        <thead>
          <tr>
            <th>Subject</th>
            <th>Attended</th>
            <th>Attendance</th>
            <th>Status</th>
            <th>Plan</th>
            <th></th>
          </tr>
        </thead>
        <tbody>
      {{ROWS}}
        </tbody>
      </table>
    </section>

    <nav class="links">
      <a href="/api/reports">Report (JSON)</a>
      <a href="/api/reports/csv">Export CSV</a>
    </nav>
  </main>
</body>
</html>
"#;
