//! Server-rendered dashboard layout.
//!
//! One static page: title, site dropdown, pie chart, payload range control,
//! scatter chart. Chart regions start empty and are filled by inline JS that
//! fetches the figure endpoints and hands the result to `Plotly.react` —
//! once on load with the defaults, then again on every control change.

use crate::data::{DashboardState, PAYLOAD_STEP};
use crate::models::ALL_SITES;

/// Minimal escaping for text interpolated into HTML. Site and category
/// values come from the dataset, not from users, but quoting them is free.
fn escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

pub fn render(state: &DashboardState) -> String {
    let (min, max) = state.payload_bounds();

    let site_options: String = state
        .sites()
        .iter()
        .map(|site| {
            let value = escape(site);
            let selected = if site == ALL_SITES { " selected" } else { "" };
            format!(r#"<option value="{value}"{selected}>{value}</option>"#)
        })
        .collect();

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>SpaceX Launch Records Dashboard</title>
    <script src="https://cdn.plot.ly/plotly-2.35.2.min.js"></script>
    <style>
        body {{
            font-family: -apple-system, BlinkMacSystemFont, 'Helvetica Neue', Helvetica, Arial, sans-serif;
            max-width: 1100px;
            margin: 0 auto;
            padding: 1rem 2rem;
            color: #1d1d1f;
        }}
        h1 {{
            text-align: center;
            color: #503d36;
            font-size: 40px;
        }}
        select {{
            width: 80%;
            padding: 3px;
            font-size: 20px;
        }}
        .range {{
            display: flex;
            align-items: center;
            gap: 1rem;
        }}
        .range input {{ flex: 1; }}
        .chart {{ min-height: 420px; }}
    </style>
</head>
<body>
    <h1>SpaceX Launch Records Dashboard</h1>
    <br>
    <select id="site">{site_options}</select>
    <div id="pie-chart" class="chart"></div>
    <br>
    <p>Payload range (Kg):</p>
    <div class="range">
        <span id="payload-low-label">{min}</span>
        <input type="range" id="payload-low" min="{min}" max="{max}" step="{step}" value="{min}">
        <input type="range" id="payload-high" min="{min}" max="{max}" step="{step}" value="{max}">
        <span id="payload-high-label">{max}</span>
    </div>
    <div id="catplot" class="chart"></div>
    <script>
        const site = document.getElementById('site');
        const low = document.getElementById('payload-low');
        const high = document.getElementById('payload-high');

        async function draw(target, url) {{
            const response = await fetch(url);
            const figure = await response.json();
            Plotly.react(target, figure.data, figure.layout);
        }}

        function drawPie() {{
            const params = new URLSearchParams({{ site: site.value }});
            draw('pie-chart', `/api/v1/charts/pie?${{params}}`);
        }}

        function drawScatter() {{
            document.getElementById('payload-low-label').textContent = low.value;
            document.getElementById('payload-high-label').textContent = high.value;
            const params = new URLSearchParams({{
                site: site.value,
                low: low.value,
                high: high.value,
            }});
            draw('catplot', `/api/v1/charts/scatter?${{params}}`);
        }}

        site.addEventListener('change', () => {{ drawPie(); drawScatter(); }});
        low.addEventListener('change', drawScatter);
        high.addEventListener('change', drawScatter);

        drawPie();
        drawScatter();
    </script>
</body>
</html>
"#,
        step = PAYLOAD_STEP,
    )
}
