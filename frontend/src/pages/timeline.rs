use leptos::prelude::*;
use occupation_types::{Dataset, OccupationRecord, SliderConfig, format_date};

/// Left offset and width of a record's bar, in percent of the slider span.
fn bar_style(slider: &SliderConfig, record: &OccupationRecord) -> String {
    let days = (slider.span_days() + 1) as f64;
    let left = slider.offset_of(record.occupation_start) as f64 / days * 100.0;
    let width = record.duration_days() as f64 / days * 100.0;
    format!("left:{left:.2}%;width:{width:.2}%;")
}

#[component]
pub fn TimelinePage() -> impl IntoView {
    let dataset = match Dataset::shared() {
        Ok(ds) => ds,
        Err(e) => return view! { <p class="error">{e.to_string()}</p> }.into_any(),
    };
    let slider = *dataset.slider();

    view! {
        <div>
            <h2>"Occupation timeline"</h2>
            <p style="color:#7a6e5f;font-size:0.9rem;margin-bottom:1rem;">
                {format_date(slider.min)} " — " {format_date(slider.max)}
            </p>
            <div class="card">
                {dataset.records().iter().map(|r| {
                    view! {
                        <div class="timeline-row">
                            <span class="country">{r.country_name.clone()}</span>
                            <span class="code">{r.region_code.clone()}</span>
                            <span class="dates">
                                {format_date(r.occupation_start)} " → " {format_date(r.occupation_end)}
                            </span>
                            <span class="days">{r.duration_days()} " days"</span>
                            <div class="track">
                                <div class="bar" style={bar_style(&slider, r)}></div>
                            </div>
                        </div>
                    }
                }).collect_view()}
            </div>
        </div>
    }
    .into_any()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bar_style_spans_to_end_for_ve_day() {
        let ds = Dataset::shared().unwrap();
        let style = bar_style(ds.slider(), ds.find("AUT").unwrap());
        let width: f64 = style
            .split("width:")
            .nth(1)
            .and_then(|w| w.trim_end_matches("%;").parse().ok())
            .unwrap();
        let left: f64 = style
            .trim_start_matches("left:")
            .split('%')
            .next()
            .and_then(|l| l.parse().ok())
            .unwrap();
        assert!((left + width - 100.0).abs() < 0.05);
    }
}
