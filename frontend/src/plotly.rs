//! Bridge to the Plotly.js bundle loaded by `index.html`.

use occupation_types::ChoroplethFigure;
use wasm_bindgen::prelude::*;

#[wasm_bindgen(inline_js = "
export function plotly_react(id, data, layout) {
    if (!window.Plotly) {
        throw new Error('Plotly.js is not loaded');
    }
    window.Plotly.react(id, JSON.parse(data), JSON.parse(layout));
}
")]
extern "C" {
    #[wasm_bindgen(catch)]
    fn plotly_react(element_id: &str, data: &str, layout: &str) -> Result<(), JsValue>;
}

/// Draw or redraw `figure` into the element with id `element_id`.
pub fn draw(element_id: &str, figure: &ChoroplethFigure) -> Result<(), String> {
    let (data, layout) = figure.to_json_parts().map_err(|e| e.to_string())?;
    plotly_react(element_id, &data, &layout).map_err(|e| {
        e.as_string()
            .unwrap_or_else(|| format!("map rendering failed: {e:?}"))
    })
}
