use occupation_types::{Dataset, OccupationRecord, SliderConfig, format_date};

/// One line per record: name, interval, duration and a bar positioned on
/// the slider range.
pub fn timeline_lines(dataset: &Dataset, width: usize) -> Vec<String> {
    let slider = dataset.slider();
    let name_width = dataset
        .records()
        .iter()
        .map(|r| r.country_name.chars().count())
        .max()
        .unwrap_or(0);

    let mut lines = vec![format!(
        "{:name_width$}  {} → {}  |{}|",
        "",
        format_date(slider.min),
        format_date(slider.max),
        "-".repeat(width),
    )];
    lines.extend(dataset.records().iter().map(|r| {
        format!(
            "{:name_width$}  {} → {}  |{}|  {} days",
            r.country_name,
            format_date(r.occupation_start),
            format_date(r.occupation_end),
            bar(slider, r, width),
            r.duration_days(),
        )
    }));
    lines
}

/// `width` cells spanning the slider; a cell is filled when the occupation
/// touches any day in it.
fn bar(slider: &SliderConfig, record: &OccupationRecord, width: usize) -> String {
    if width == 0 {
        return String::new();
    }
    let days = (slider.span_days() + 1) as usize;
    let column = |offset: i64| (offset as usize * width / days).min(width - 1);
    let first = column(slider.offset_of(record.occupation_start));
    let last = column(slider.offset_of(record.occupation_end));

    (0..width)
        .map(|i| if (first..=last).contains(&i) { '█' } else { '·' })
        .collect()
}
