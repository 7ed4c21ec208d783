//! Typed wrappers around JS interop via `js_sys::eval()`.
//!
//! D3.js chart functions live in `assets/js/*.js`, are embedded at compile
//! time and evaluated as globals (no ES modules) exposed via `window.*`.
//! This module serializes a [`ChartSpec`] to JSON and calls the matching
//! renderer.

use asd_report::ChartSpec;
use wasm_bindgen::JsValue;

// Embed all D3 chart JS files at compile time
static CHART_COMMON_JS: &str = include_str!("../assets/js/chart-common.js");
static LINE_CHART_JS: &str = include_str!("../assets/js/line-chart.js");
static BAR_CHART_JS: &str = include_str!("../assets/js/bar-chart.js");
static PIE_CHART_JS: &str = include_str!("../assets/js/pie-chart.js");

/// Globals the chart scripts define, promoted to `window` once D3 is ready.
const CHART_GLOBALS: [&str; 7] = [
    "renderLineChart",
    "renderBarChart",
    "renderPieChart",
    "clearChart",
    "initTooltip",
    "showTooltip",
    "hideTooltip",
];

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('ASD JS call failed:', e); }}",
        code
    );
    if let Err(err) = js_sys::eval(&wrapped) {
        web_sys::console::warn_2(&JsValue::from_str("[ASD] eval failed:"), &err);
    }
}

/// Initialize chart scripts with a wait-for-D3 polling loop.
///
/// The chart scripts are stored on `window` and evaluated at global scope
/// (indirect eval) once `d3` is defined, so their `function` declarations
/// are not block-scoped inside the `setInterval` callback. Each renderer is
/// then promoted to `window.*` explicitly.
pub fn init_charts() {
    if is_initialized() {
        return;
    }
    let all_js = [CHART_COMMON_JS, LINE_CHART_JS, BAR_CHART_JS, PIE_CHART_JS].join("\n");

    let store_js = format!(
        "window.__asdChartScripts = {};",
        serde_json::to_string(&all_js).unwrap_or_default()
    );
    let _ = js_sys::eval(&store_js);

    let promote: String = CHART_GLOBALS
        .iter()
        .map(|name| format!("if (typeof {0} !== 'undefined') window.{0} = {0};", name))
        .collect::<Vec<_>>()
        .join("\n");

    let init_js = format!(
        r#"
        (function() {{
            if (window.__asdChartsPending) return;
            window.__asdChartsPending = true;
            var waitForD3 = setInterval(function() {{
                if (typeof d3 !== 'undefined') {{
                    clearInterval(waitForD3);
                    (0, eval)(window.__asdChartScripts);
                    delete window.__asdChartScripts;
                    {promote}
                    window.__asdChartsReady = true;
                    console.log('ASD charts initialized');
                }}
            }}, 100);
        }})();
        "#,
    );
    let _ = js_sys::eval(&init_js);
}

fn is_initialized() -> bool {
    js_sys::eval("!!window.__asdChartsPending")
        .ok()
        .and_then(|v| v.as_bool())
        .unwrap_or(false)
}

/// JS renderer for a chart kind.
pub fn renderer_for(spec: &ChartSpec) -> &'static str {
    match spec {
        ChartSpec::Line(_) => "renderLineChart",
        ChartSpec::Bar(_) => "renderBarChart",
        ChartSpec::Pie(_) => "renderPieChart",
    }
}

/// Start a new render generation.
///
/// Every pending render loop remembers the generation it was started in and
/// gives up without drawing once a newer one begins, so a selection replaced
/// before D3 finished loading never reaches the screen.
pub fn begin_render_batch() {
    call_js(BEGIN_BATCH_JS);
}

const BEGIN_BATCH_JS: &str = "window.__asdRenderGen = (window.__asdRenderGen || 0) + 1;";

/// Render one chart spec into the container with the given DOM id.
///
/// Uses a polling loop to wait for the chart scripts to initialize and the
/// container element to exist before rendering. Call [`begin_render_batch`]
/// before rendering a new set of charts.
pub fn render_chart(container_id: &str, spec: &ChartSpec) {
    match render_script(container_id, spec) {
        Ok(js) => call_js(&js),
        Err(e) => log::error!("[ASD] failed to serialize chart '{}': {}", spec.title(), e),
    }
}

fn render_script(container_id: &str, spec: &ChartSpec) -> serde_json::Result<String> {
    let spec_json = serde_json::to_string(spec)?;
    // JSON string literal of the chart JSON, safe to embed in JS source
    let spec_literal = serde_json::to_string(&spec_json)?;
    let renderer = renderer_for(spec);
    Ok(format!(
        r#"
        (function() {{
            var gen = window.__asdRenderGen || 0;
            var poll = setInterval(function() {{
                if ((window.__asdRenderGen || 0) !== gen) {{
                    clearInterval(poll);
                    return;
                }}
                if (window.__asdChartsReady &&
                    typeof window.{renderer} !== 'undefined' &&
                    document.getElementById('{container_id}')) {{
                    clearInterval(poll);
                    try {{
                        window.{renderer}('{container_id}', {spec_literal});
                    }} catch(e) {{ console.error('[ASD] {renderer} error:', e); }}
                }}
            }}, 100);
        }})();
        "#,
    ))
}

/// Destroy/clean up a chart in the given container.
///
/// Also starts a new render generation, cancelling renders still waiting.
pub fn destroy_chart(container_id: &str) {
    call_js(&destroy_script(container_id));
}

fn destroy_script(container_id: &str) -> String {
    format!(
        "{} var el = document.getElementById('{}'); if (el) el.innerHTML = '';",
        BEGIN_BATCH_JS, container_id
    )
}
