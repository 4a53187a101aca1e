use crate::model::TreemapNode;

/// Render a self-contained treemap HTML document (node list embedded as
/// JSON, plotly.js pulled from its CDN).
///
/// The template is spliced with `str::replace` instead of `format!()`: the
/// document is full of `{}` from plotly hover templates and JS, which would
/// fight Rust's formatting syntax.
pub fn render_treemap_html(nodes: &[TreemapNode]) -> anyhow::Result<String> {
    let json = serde_json::to_string(nodes)?; // embedded as JS array literal

    const TEMPLATE: &str = r#"<!doctype html>
<html>
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>Package Build Times Treemap</title>
<script src="https://cdn.plot.ly/plotly-2.35.2.min.js" charset="utf-8"></script>
<style>
  html, body { margin: 0; height: 100%; }
  #chart { width: 100%; height: 100%; }
</style>
</head>
<body>
<div id="chart"></div>
<script>
// Embedded node list (JSON array literal)
const NODES = __DATA__;

Plotly.newPlot("chart", [{
  type: "treemap",
  labels: NODES.map(n => n.label),
  parents: NODES.map(n => n.parent),
  ids: NODES.map(n => n.id),
  values: NODES.map(n => n.value),
  customdata: NODES.map(n => [n.formatted, n.seconds]),
  hovertemplate: "<b>%{label}</b><br>Build Time: %{customdata[0]}<br>Total Seconds: %{customdata[1]:.2f}<extra></extra>",
  textinfo: "label+value"
}], {
  title: { text: "Package Build Times Treemap" }
}, { responsive: true });
</script>
</body>
</html>
"#;

    Ok(TEMPLATE.replace("__DATA__", &json))
}
