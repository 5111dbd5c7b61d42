use leptos::prelude::*;
use occupation_types::page::{MAP_HEADING, NOTES, SLIDER_LABEL};
use occupation_types::{Dataset, MapView, format_date};

use crate::plotly;

const MAP_ELEMENT_ID: &str = "occupation-map";

#[component]
pub fn MapPage() -> impl IntoView {
    let dataset = match Dataset::shared() {
        Ok(ds) => ds,
        Err(e) => return view! { <p class="error">{e.to_string()}</p> }.into_any(),
    };

    // The range input works in day offsets from the slider minimum.
    let slider = *dataset.slider();
    let offset = RwSignal::new(slider.offset_of(slider.default));
    let map_view = Memo::new(move |_| MapView::for_date(dataset, slider.date_at(offset.get())));
    let draw_error: RwSignal<Option<String>> = RwSignal::new(None);

    Effect::new(move |_| {
        let drawn = map_view.with(|v| plotly::draw(MAP_ELEMENT_ID, &v.figure));
        draw_error.set(drawn.err());
    });

    view! {
        <div>
            <h2>{MAP_HEADING}</h2>
            <div class="card slider">
                <label for="date-slider">{SLIDER_LABEL}</label>
                <input
                    id="date-slider"
                    type="range"
                    min="0"
                    max={slider.span_days().to_string()}
                    step={slider.step_days.to_string()}
                    prop:value=move || offset.get().to_string()
                    on:input=move |ev| {
                        if let Ok(v) = event_target_value(&ev).parse::<i64>() {
                            offset.set(v);
                        }
                    }
                />
                <span class="slider-date">
                    {move || map_view.with(|v| format_date(v.selected_date))}
                </span>
                <div class="slider-bounds">
                    <span>{format_date(slider.min)}</span>
                    <span>{format_date(slider.max)}</span>
                </div>
            </div>

            <div id=MAP_ELEMENT_ID class="map"></div>
            {move || draw_error.get().map(|e| view! { <p class="error">{e}</p> })}

            <div class="card report">
                {move || map_view.with(|v| {
                    let report = &v.rendering.report;
                    view! {
                        <p class="report-header">{report.header()}</p>
                        <ul class="report-list">
                            {report.entries().iter().map(|country| view! {
                                <li>{country.clone()}</li>
                            }).collect_view()}
                        </ul>
                    }
                })}
            </div>

            <div class="notes">
                {NOTES.iter().map(|note| view! { <p>{*note}</p> }).collect_view()}
            </div>
        </div>
    }
    .into_any()
}
