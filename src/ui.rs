use crate::models::{CalendarDayScore, RankingItem, ScoreBand, TaskInstance};
use crate::session::Session;

pub fn render_index(session: &Session) -> String {
    let today = session.today();
    let catalog = session.catalog();

    INDEX_HTML
        .replace("{{DATE}}", &escape_html(&today.date))
        .replace("{{SCORE}}", &today.score.to_string())
        .replace("{{BAND}}", band_class(today.band))
        .replace("{{STREAK}}", &today.streak_days.to_string())
        .replace("{{TASKS}}", &render_tasks(session.current_tasks()))
        .replace("{{POSITIVES}}", &escape_html(&today.positives.join(", ")))
        .replace("{{NEGATIVES}}", &escape_html(&today.negatives.join(", ")))
        .replace("{{POSITIVE_PRESETS}}", &render_presets(catalog.positive_presets()))
        .replace("{{NEGATIVE_PRESETS}}", &render_presets(catalog.negative_presets()))
        .replace("{{HISTORY}}", &render_history(&session.recent_history()))
        .replace("{{POSITIVE_RANKING}}", &render_ranking(&session.rankings().positives))
        .replace("{{NEGATIVE_RANKING}}", &render_ranking(&session.rankings().negatives))
}

fn band_class(band: ScoreBand) -> &'static str {
    match band {
        ScoreBand::High => "high",
        ScoreBand::Mid => "mid",
        ScoreBand::Low => "low",
    }
}

fn render_tasks(tasks: &[TaskInstance]) -> String {
    tasks
        .iter()
        .map(|task| {
            format!(
                r#"<li class="task{done}">
        <form method="post" action="/tasks/{id}/toggle">
          <button type="submit" aria-pressed="{pressed}">{mark}</button>
        </form>
        <div><strong>{title}</strong><p>{description}</p><span class="meta">{category}</span></div>
      </li>"#,
                done = if task.completed { " done" } else { "" },
                id = escape_html(&task.id),
                pressed = task.completed,
                mark = if task.completed { "&#10003;" } else { "&#9675;" },
                title = escape_html(&task.title),
                description = escape_html(&task.description),
                category = task.category.label(),
            )
        })
        .collect::<Vec<_>>()
        .join("\n      ")
}

fn render_presets(presets: &[&str]) -> String {
    presets
        .iter()
        .map(|preset| format!(r#"<option value="{}"></option>"#, escape_html(preset)))
        .collect()
}

fn render_history(days: &[CalendarDayScore]) -> String {
    if days.is_empty() {
        return r#"<p class="empty">No days logged yet.</p>"#.to_string();
    }
    days.iter()
        .map(|day| {
            let label = day.date.get(5..).unwrap_or(&day.date);
            format!(
                r#"<div class="day"><span class="label">{}</span><span class="value">{}</span></div>"#,
                escape_html(label),
                day.score
            )
        })
        .collect()
}

fn render_ranking(items: &[RankingItem]) -> String {
    if items.is_empty() {
        return r#"<li class="empty">Nothing yet</li>"#.to_string();
    }
    items
        .iter()
        .map(|item| format!("<li>{} <span>{}</span></li>", escape_html(&item.label), item.count))
        .collect()
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

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Mame Habits</title>
  <style>
    :root {
      --bg: #0f172a;
      --card: #1e293b;
      --ink: #e2e8f0;
      --muted: #94a3b8;
      --accent: #10b981;
      --warn: #f97316;
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: var(--bg);
      color: var(--ink);
      font-family: "Trebuchet MS", sans-serif;
      display: grid;
      place-items: center;
      padding: 32px 18px 48px;
    }

    .app {
      width: min(720px, 100%);
      display: grid;
      gap: 24px;
    }

    .header {
      border-radius: 24px;
      padding: 28px;
      background: linear-gradient(160deg, #0ea5e9, #1e3a8a);
    }

    .header.high { background: linear-gradient(160deg, #10b981, #0f766e); }
    .header.low { background: linear-gradient(160deg, #64748b, #1e293b); }

    .score {
      font-size: 3rem;
      font-weight: 600;
    }

    .card {
      background: var(--card);
      border-radius: 20px;
      padding: 20px;
    }

    ul {
      list-style: none;
      margin: 0;
      padding: 0;
      display: grid;
      gap: 10px;
    }

    .task {
      display: flex;
      gap: 14px;
      align-items: center;
    }

    .task p {
      margin: 2px 0;
      color: var(--muted);
    }

    .task.done strong {
      color: var(--accent);
    }

    .meta, .label, .empty {
      font-size: 0.85rem;
      color: var(--muted);
    }

    button {
      border: none;
      border-radius: 999px;
      padding: 10px 16px;
      font-weight: 600;
      cursor: pointer;
    }

    .history {
      display: flex;
      gap: 10px;
      overflow-x: auto;
    }

    .day {
      display: grid;
      gap: 4px;
      text-align: center;
      min-width: 56px;
    }

    .rankings {
      display: grid;
      grid-template-columns: 1fr 1fr;
      gap: 16px;
    }

    label {
      display: grid;
      gap: 6px;
      margin-bottom: 12px;
    }

    input {
      border-radius: 12px;
      border: 1px solid #334155;
      background: #0f172a;
      color: var(--ink);
      padding: 10px;
    }
  </style>
</head>
<body>
  <main class="app">
    <section class="header {{BAND}}">
      <span class="label">{{DATE}}</span>
      <div class="score">{{SCORE}} <small>/ 100</small></div>
      <span>{{STREAK}} day streak</span>
    </section>

    <section class="card">
      <h2>Today's habits</h2>
      <ul>
      {{TASKS}}
      </ul>
    </section>

    <section class="card">
      <h2>Daily log</h2>
      <form method="post" action="/log">
        <label>Score (0-100)
          <input name="score" inputmode="numeric" value="{{SCORE}}" />
        </label>
        <label>What helped (comma separated)
          <input name="positives" list="positive-presets" value="{{POSITIVES}}" />
        </label>
        <label>What got in the way (comma separated)
          <input name="negatives" list="negative-presets" value="{{NEGATIVES}}" />
        </label>
        <datalist id="positive-presets">{{POSITIVE_PRESETS}}</datalist>
        <datalist id="negative-presets">{{NEGATIVE_PRESETS}}</datalist>
        <button type="submit">Save</button>
      </form>
    </section>

    <section class="card">
      <h2>Recent days</h2>
      <div class="history">{{HISTORY}}</div>
    </section>

    <section class="card rankings">
      <div>
        <h3>Top positives</h3>
        <ul>{{POSITIVE_RANKING}}</ul>
      </div>
      <div>
        <h3>Top negatives</h3>
        <ul>{{NEGATIVE_RANKING}}</ul>
      </div>
    </section>
  </main>
</body>
</html>
"#;
