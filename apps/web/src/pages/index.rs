//! The collage request form.

use axum::{extract::State, http::HeaderMap, response::Html};

use crate::form::limits::{FormLimits, DEFAULT_FONT_SIZE, FONT_SIZE_BOUNDS};
use crate::form::{CollageMode, FormState, Period, TextLocation};
use crate::pages::escape_html;
use crate::prefs;
use crate::state::AppState;

/// Posts each lock-linked edit to the form API and writes the resolved state
/// back into the inputs. The Embed button fetches the snippet and shows it
/// under the form.
const FORM_SCRIPT: &str = r#"
const form = document.getElementById("form");
const el = (name) => form.elements.namedItem(name);
const num = (name) => Math.round(parseFloat(el(name).value)) || 0;

function snapshot() {
  return {
    mode: el("method").value,
    grid: { rows: num("rows"), columns: num("columns") },
    resolution: { width: num("width"), height: num("height") },
    aspect_lock: el("aspectlock").checked,
  };
}

async function edit(field, value) {
  try {
    const res = await fetch("/api/v1/form/edit", {
      method: "POST",
      headers: { "Content-Type": "application/json" },
      body: JSON.stringify({ state: snapshot(), edit: { field, value } }),
    });
    if (!res.ok) {
      console.error("Form edit rejected", res.status);
      return;
    }
    const body = await res.json();
    el("rows").value = body.state.grid.rows;
    el("columns").value = body.state.grid.columns;
    el("rows").max = body.limits.grid_max;
    el("columns").max = body.limits.grid_max;
    el("width").value = body.state.resolution.width || "";
    el("height").value = body.state.resolution.height || "";
  } catch (err) {
    console.error("Form edit failed", err);
  }
}

for (const name of ["rows", "columns", "width", "height"]) {
  el(name).addEventListener("change", (e) => edit(name, e.target.value));
}
el("method").addEventListener("change", (e) => edit("mode", e.target.value));
el("aspectlock").addEventListener("change", (e) => edit("aspect_lock", e.target.checked));

document.getElementById("embed-button").addEventListener("click", async () => {
  if (!form.reportValidity()) return;
  const params = new URLSearchParams(new FormData(form));
  try {
    const res = await fetch("/embed?" + params.toString());
    if (!res.ok) {
      console.error("Embed rejected", res.status);
      return;
    }
    const body = await res.json();
    const out = document.getElementById("embed-snippet");
    out.textContent = body.snippet;
    out.hidden = false;
  } catch (err) {
    console.error("Embed failed", err);
  }
});
"#;

const FLAG_LABELS: &[(&str, &str, bool)] = &[
    ("album", "Album name", true),
    ("artist", "Artist name", true),
    ("track", "Track name", false),
    ("playcount", "Play count", true),
    ("boldfont", "Bold font", false),
    ("grayscale", "Grayscale", false),
    ("webp", "Compress (WebP)", false),
];

/// GET /
pub async fn handle_index(State(state): State<AppState>, headers: HeaderMap) -> Html<String> {
    let username = prefs::read_username(&headers);
    Html(render_form(&username, &FormState::default(), &state.limits))
}

pub fn render_form(username: &str, form: &FormState, limits: &FormLimits) -> String {
    let grid_max = limits.grid(form.mode).max;
    let resolution_max = limits.resolution().max;
    let methods = options(CollageMode::ALL.map(|m| (m.as_str(), m.label())), form.mode.as_str());
    let periods = options(Period::ALL.map(|p| (p.as_str(), p.label())), Period::default().as_str());
    let locations = options(
        TextLocation::ALL.map(|l| (l.as_str(), l.label())),
        TextLocation::default().as_str(),
    );
    let flags: String = FLAG_LABELS
        .iter()
        .map(|(name, label, checked)| {
            format!(
                r#"<label><input type="checkbox" name="{name}" value="true"{}> {label}</label>"#,
                if *checked { " checked" } else { "" }
            )
        })
        .collect::<Vec<_>>()
        .join("\n      ");
    let dimension = |value: u32| if value == 0 { String::new() } else { value.to_string() };

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>Collage</title>
</head>
<body>
  <form id="form" action="/submit" method="get">
    <label>Username <input type="text" name="username" value="{username}" required></label>
    <label>Type <select name="method">{methods}</select></label>
    <label>Period <select name="period">{periods}</select></label>
    <label>Rows <input type="number" name="rows" min="1" max="{grid_max}" value="{rows}"></label>
    <label>Columns <input type="number" name="columns" min="1" max="{grid_max}" value="{columns}"></label>
    <fieldset id="fieldset">
      <legend>Advanced</legend>
      <label>Width <input type="number" name="width" min="0" max="{resolution_max}" value="{width}"></label>
      <label>Height <input type="number" name="height" min="0" max="{resolution_max}" value="{height}"></label>
      <label><input type="checkbox" name="aspectlock"{lock}> Lock aspect ratio</label>
      <label>Font size <input type="number" name="fontsize" min="{font_min}" max="{font_max}" value="{font_size}"></label>
      <label>Text location <select name="textlocation">{locations}</select></label>
      {flags}
    </fieldset>
    <button type="submit" name="submit">Generate</button>
    <button type="button" id="embed-button">Embed</button>
  </form>
  <pre id="embed-snippet" hidden></pre>
  <script>{script}</script>
</body>
</html>
"#,
        username = escape_html(username),
        rows = form.grid.rows,
        columns = form.grid.columns,
        width = dimension(form.resolution.width),
        height = dimension(form.resolution.height),
        lock = if form.aspect_lock { " checked" } else { "" },
        font_min = FONT_SIZE_BOUNDS.min,
        font_max = FONT_SIZE_BOUNDS.max,
        font_size = DEFAULT_FONT_SIZE,
        script = FORM_SCRIPT,
    )
}

fn options<const N: usize>(choices: [(&str, &str); N], selected: &str) -> String {
    choices
        .iter()
        .map(|(value, label)| {
            format!(
                r#"<option value="{value}"{}>{label}</option>"#,
                if *value == selected { " selected" } else { "" }
            )
        })
        .collect()
}
