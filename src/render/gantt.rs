use serde::Serialize;

/// One horizontal bar in the Gantt chart: a package's build span on the
/// shared log clock.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GanttSpan {
    pub package: String,
    pub start: f64,
    pub end: f64,
}

/// Render a self-contained Gantt chart HTML document.
///
/// Same template technique as the treemap: span list embedded as a JSON
/// literal, no `format!()` because of the JS `${}` interpolations.
pub fn render_gantt_html(spans: &[GanttSpan]) -> anyhow::Result<String> {
    let json = serde_json::to_string(spans)?;

    const TEMPLATE: &str = r#"<!doctype html>
<html>
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>Build Gantt Chart</title>
<script src="https://cdn.plot.ly/plotly-2.35.2.min.js" charset="utf-8"></script>
<style>
  html, body { margin: 0; }
</style>
</head>
<body>
<div id="chart"></div>
<script>
// Embedded span list (JSON array literal)
const SPANS = __DATA__;

Plotly.newPlot("chart", [{
  type: "bar",
  orientation: "h",
  x: SPANS.map(s => s.end - s.start),
  y: SPANS.map(s => s.package),
  base: SPANS.map(s => s.start),
  marker: {
    color: "rgba(50, 171, 96, 0.6)",
    line: { color: "rgba(50, 171, 96, 1.0)", width: 1 }
  },
  hovertemplate: "<b>%{y}</b><br>Start: %{base:.2f} s<br>Duration: %{x:.2f} s<extra></extra>"
}], {
  title: { text: "Build Gantt Chart" },
  xaxis: { title: { text: "Time (seconds)" }, rangeslider: { visible: true } },
  yaxis: {
    title: { text: "Packages" },
    autorange: "reversed",
    tickmode: "linear",
    tickfont: { size: 10 }
  },
  height: Math.max(600, 20 * SPANS.length)
}, { responsive: true });
</script>
</body>
</html>
"#;

    Ok(TEMPLATE.replace("__DATA__", &json))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_embeds_every_span() {
        let spans = vec![
            GanttSpan {
                package: "pkg_a".into(),
                start: 1.0,
                end: 4.5,
            },
            GanttSpan {
                package: "pkg_b".into(),
                start: 2.0,
                end: 9.0,
            },
        ];

        let html = render_gantt_html(&spans).unwrap();
        assert!(html.contains("\"pkg_a\""));
        assert!(html.contains("\"pkg_b\""));
        assert!(!html.contains("__DATA__"));
    }
}
