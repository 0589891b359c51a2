//! HTML report generator.
//!
//! Produces a self-contained HTML file with all CSS/JS inlined.

use anyhow::Result;
use std::path::Path;

use learnease_core::analysis::{SubjectAnalysis, TopicScore, WEAK_TOPIC_THRESHOLD};
use learnease_core::report::PlanReport;

/// Escape a string for safe HTML insertion.
fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

/// Generate an HTML page from a plan report.
pub fn generate_html(report: &PlanReport) -> String {
    let mut html = String::new();

    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    html.push_str(&format!(
        "<title>learnease study plan — {}</title>\n",
        html_escape(&report.quiz.name)
    ));
    html.push_str("<style>\n");
    html.push_str(CSS);
    html.push_str("</style>\n");
    html.push_str("</head>\n<body>\n");

    // Header
    html.push_str("<header>\n");
    html.push_str("<h1>learnease study plan</h1>\n");
    html.push_str(&format!(
        "<p class=\"meta\">Quiz: <strong>{}</strong> | {}/{} answered, {} correct | {} days at {:.1} h/day | {}</p>\n",
        html_escape(&report.quiz.name),
        report.quiz.answered_count,
        report.quiz.question_count,
        report.quiz.correct_count,
        report.days,
        report.hours_per_day,
        report.created_at.format("%Y-%m-%d %H:%M:%S UTC")
    ));
    html.push_str("</header>\n");

    // Summary dashboard
    html.push_str("<section class=\"dashboard\">\n");
    html.push_str("<h2>Summary</h2>\n");

    // Subject summary table
    html.push_str("<table class=\"summary\">\n");
    html.push_str("<thead><tr><th>Subject</th><th>Overall</th><th>Priority</th><th>Weak topics</th><th>Strong topics</th></tr></thead>\n");
    html.push_str("<tbody>\n");
    for analysis in &report.analyses {
        let row_class = if analysis.overall_score >= WEAK_TOPIC_THRESHOLD {
            "strong"
        } else {
            "weak"
        };
        html.push_str(&format!(
            "<tr class=\"{}\"><td>{}</td><td>{:.2}</td><td>{:.2}</td><td>{}</td><td>{}</td></tr>\n",
            row_class,
            analysis.subject,
            analysis.overall_score,
            analysis.priority,
            topic_cell(&analysis.weak_topics),
            topic_cell(&analysis.strong_topics),
        ));
    }
    html.push_str("</tbody></table>\n");

    // SVG bar chart of overall scores
    if !report.analyses.is_empty() {
        html.push_str(&generate_bar_chart(&report.analyses));
    }

    html.push_str("</section>\n");

    // Day-by-day schedule
    html.push_str("<section class=\"schedule\">\n");
    html.push_str("<h2>Schedule</h2>\n");
    html.push_str("<table class=\"schedule-table\" id=\"schedule\">\n");
    html.push_str("<thead><tr><th onclick=\"sortTable(0)\">Day</th><th onclick=\"sortTable(1)\">Subject</th><th onclick=\"sortTable(2)\">Topic</th><th onclick=\"sortTable(3)\">Focus</th><th onclick=\"sortTable(4)\">Minutes</th><th>Tasks</th></tr></thead>\n");
    html.push_str("<tbody>\n");

    for day in &report.plan {
        for session in &day.sessions {
            html.push_str(&format!(
                "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>\n",
                day.day,
                session.subject,
                session.topic.name(),
                session.subtopic.as_deref().unwrap_or("-"),
                session.duration_minutes,
                session.tasks.join("; "),
            ));
        }
    }

    html.push_str("</tbody></table>\n");
    html.push_str("</section>\n");

    // Raw JSON
    html.push_str("<section class=\"raw-data\">\n");
    html.push_str("<details>\n<summary>Raw JSON Data</summary>\n");
    html.push_str("<pre><code>");
    html.push_str(
        &serde_json::to_string_pretty(report)
            .unwrap_or_default()
            .replace('<', "&lt;")
            .replace('>', "&gt;"),
    );
    html.push_str("</code></pre>\n");
    html.push_str("</details>\n</section>\n");

    // JavaScript for sorting
    html.push_str("<script>\n");
    html.push_str(JS);
    html.push_str("</script>\n");

    html.push_str("</body>\n</html>");
    html
}

/// Write an HTML report to a file.
pub fn write_html_report(report: &PlanReport, path: &Path) -> Result<()> {
    let html = generate_html(report);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, html)?;
    Ok(())
}

fn topic_cell(topics: &[TopicScore]) -> String {
    if topics.is_empty() {
        return "-".to_string();
    }
    topics
        .iter()
        .map(|t| t.topic.name())
        .collect::<Vec<_>>()
        .join(", ")
}

fn generate_bar_chart(analyses: &[SubjectAnalysis]) -> String {
    let bar_height = 30;
    let max_width = 400;
    let padding = 10;
    let label_width = 120;

    let total_height = analyses.len() * (bar_height + padding) + padding;

    let mut svg = format!(
        "<svg width=\"{}\" height=\"{}\" xmlns=\"http://www.w3.org/2000/svg\">\n",
        label_width + max_width + 60,
        total_height
    );

    for (i, analysis) in analyses.iter().enumerate() {
        let y = i * (bar_height + padding) + padding;
        let width = (analysis.overall_score * max_width as f64) as usize;

        let color = if analysis.overall_score >= WEAK_TOPIC_THRESHOLD {
            "#22c55e"
        } else if analysis.overall_score >= 0.4 {
            "#eab308"
        } else {
            "#ef4444"
        };

        svg.push_str(&format!(
            "  <text x=\"{}\" y=\"{}\" font-size=\"14\" fill=\"currentColor\" text-anchor=\"end\" dominant-baseline=\"middle\">{}</text>\n",
            label_width - 10,
            y + bar_height / 2,
            analysis.subject
        ));
        svg.push_str(&format!(
            "  <rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" fill=\"{}\" rx=\"4\"/>\n",
            label_width, y, width, bar_height, color
        ));
        svg.push_str(&format!(
            "  <text x=\"{}\" y=\"{}\" font-size=\"12\" fill=\"currentColor\" dominant-baseline=\"middle\">{:.1}%</text>\n",
            label_width + width + 8,
            y + bar_height / 2,
            analysis.overall_score * 100.0
        ));
    }

    svg.push_str("</svg>\n");
    svg
}

const CSS: &str = r#"
:root { --bg: #fff; --fg: #1a1a1a; --border: #e5e7eb; --strong: #dcfce7; --weak: #fde2e2; }
@media (prefers-color-scheme: dark) {
  :root { --bg: #111827; --fg: #f9fafb; --border: #374151; --strong: #064e3b; --weak: #7f1d1d; }
}
body { font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif; margin: 0; padding: 2rem; background: var(--bg); color: var(--fg); }
h1, h2 { margin-top: 2rem; }
.meta { color: #6b7280; }
table { border-collapse: collapse; width: 100%; margin: 1rem 0; }
th, td { border: 1px solid var(--border); padding: 0.5rem 1rem; text-align: left; }
th { background: var(--border); cursor: pointer; }
.strong { background: var(--strong); }
.weak { background: var(--weak); }
pre { overflow-x: auto; padding: 1rem; background: var(--border); border-radius: 8px; }
code { font-family: 'JetBrains Mono', 'Fira Code', monospace; font-size: 0.85rem; }
details { margin: 1rem 0; }
summary { cursor: pointer; font-weight: bold; }
svg { margin: 1rem 0; }
"#;

const JS: &str = r#"
function sortTable(col) {
  const table = document.getElementById('schedule');
  const tbody = table.querySelector('tbody');
  const rows = Array.from(tbody.querySelectorAll('tr'));
  const asc = table.dataset.sortCol == col && table.dataset.sortDir == 'asc' ? false : true;
  rows.sort((a, b) => {
    const va = a.cells[col].textContent;
    const vb = b.cells[col].textContent;
    return asc ? va.localeCompare(vb) : vb.localeCompare(va);
  });
  table.dataset.sortCol = col;
  table.dataset.sortDir = asc ? 'asc' : 'desc';
  rows.forEach(r => tbody.appendChild(r));
}
"#;
