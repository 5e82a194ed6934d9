//! HTML host page embedding both mode renders.
//!
//! The page carries a small script that mirrors [`ViewState`](crate::ViewState):
//! a document-level click swaps the visible mode, and pointer events on a
//! cell show, move and hide the tooltip using the text baked into each cell.

use anyhow::Result;
use quick_xml::escape::escape;

use tempgrid_model::{AggregateMode, ChartData};

use crate::options::ChartOptions;
use crate::state::TOOLTIP_OFFSET;
use crate::svg::{chart_title, render_svg};

const PAGE_STYLE: &str = r#"
    body { margin: 24px; font-family: sans-serif; color: #333; background: #fff; }
    #chart { cursor: pointer; user-select: none; }
    #chart .cell rect { stroke: #fff; stroke-width: 1; }
    #chart .cell:hover rect { stroke: #333; stroke-width: 1.5; }
    .tooltip { position: absolute; pointer-events: none; padding: 6px 8px;
               background: rgba(255, 255, 255, 0.95); border: 1px solid #bbb;
               border-radius: 4px; font-size: 12px; line-height: 1.4;
               box-shadow: 0 1px 3px rgba(0, 0, 0, 0.2); }
    .tooltip .heading { font-weight: bold; }
    .load-error { padding: 16px; border: 1px solid #d73027; border-radius: 4px;
                  color: #a50026; background: #fdf0ee; }
"#;

const PAGE_SCRIPT: &str = r#"
(function () {
  var chart = document.getElementById('chart');
  var tooltip = document.getElementById('tooltip');
  var views = chart.querySelectorAll('.mode-view');
  var hovered = null;
  var pointer = { x: 0, y: 0 };

  function fill(cell) {
    tooltip.textContent = '';
    JSON.parse(cell.dataset.tooltip).forEach(function (row, index) {
      var line = document.createElement('div');
      if (index === 0) { line.className = 'heading'; }
      line.textContent = row;
      tooltip.appendChild(line);
    });
  }

  function place() {
    tooltip.style.left = (pointer.x + OFFSET_X) + 'px';
    tooltip.style.top = (pointer.y + OFFSET_Y) + 'px';
  }

  function activeCell(year, month) {
    var selector = '.mode-view[data-mode="' + chart.dataset.mode + '"] .cell' +
      '[data-year="' + year + '"][data-month="' + month + '"]';
    return chart.querySelector(selector);
  }

  document.addEventListener('click', function () {
    var next = chart.dataset.mode === 'max' ? 'min' : 'max';
    chart.dataset.mode = next;
    views.forEach(function (view) { view.hidden = view.dataset.mode !== next; });
    if (hovered) {
      var cell = activeCell(hovered.year, hovered.month);
      if (cell) { fill(cell); }
    }
  });

  chart.querySelectorAll('.cell').forEach(function (cell) {
    cell.addEventListener('mouseenter', function (event) {
      hovered = { year: cell.dataset.year, month: cell.dataset.month };
      pointer = { x: event.pageX, y: event.pageY };
      fill(cell);
      place();
      tooltip.hidden = false;
    });
    cell.addEventListener('mousemove', function (event) {
      pointer = { x: event.pageX, y: event.pageY };
      place();
    });
    cell.addEventListener('mouseleave', function () {
      hovered = null;
      tooltip.hidden = true;
    });
  });
})();
"#;

fn page_shell(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>{title}</title>
  <style>{PAGE_STYLE}</style>
</head>
<body>
{body}
</body>
</html>
"#,
        title = escape(title),
    )
}

/// Full page with both mode renders; `initial` is visible first.
pub fn render_page(
    data: &ChartData,
    initial: AggregateMode,
    options: &ChartOptions,
) -> Result<String> {
    let mut views = String::new();
    for mode in [AggregateMode::Max, AggregateMode::Min] {
        let hidden = if mode == initial { "" } else { " hidden" };
        let svg = render_svg(data, mode, options)?;
        views.push_str(&format!(
            "  <div class=\"mode-view\" data-mode=\"{mode}\"{hidden}>\n{svg}\n  </div>\n"
        ));
    }
    let script = PAGE_SCRIPT
        .replace("OFFSET_X", &TOOLTIP_OFFSET.0.to_string())
        .replace("OFFSET_Y", &format!("({})", TOOLTIP_OFFSET.1));
    let body = format!(
        "<div id=\"chart\" data-mode=\"{initial}\">\n{views}</div>\n\
         <div id=\"tooltip\" class=\"tooltip\" hidden></div>\n\
         <script>{script}</script>"
    );
    Ok(page_shell(&chart_title(data), &body))
}

/// Page shown in place of the chart when loading failed.
pub fn render_error_page(message: &str) -> String {
    let body = format!(
        "<div id=\"chart\" class=\"load-error\" role=\"alert\">\
         <strong>Could not load temperature data.</strong> {}</div>",
        escape(message)
    );
    page_shell("Monthly temperature", &body)
}
