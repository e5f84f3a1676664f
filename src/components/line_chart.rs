//! Line Chart Component
//!
//! Small SVG line chart of per-day counts with a filled area under the line.

use folio_core::domain::DailyCount;
use leptos::prelude::*;

const WIDTH: f64 = 320.0;
const HEIGHT: f64 = 160.0;
const PAD: f64 = 20.0;

/// Plot coordinates for `counts`, left to right, scaled to the tallest day.
/// A single point sits in the middle; the y axis starts at zero.
pub fn chart_points(counts: &[DailyCount], width: f64, height: f64, pad: f64) -> Vec<(f64, f64)> {
    let max = counts.iter().map(|c| c.count).max().unwrap_or(0).max(1) as f64;
    let inner_w = width - 2.0 * pad;
    let inner_h = height - 2.0 * pad;
    let step = if counts.len() > 1 { inner_w / (counts.len() - 1) as f64 } else { 0.0 };

    counts
        .iter()
        .enumerate()
        .map(|(i, c)| {
            let x = if counts.len() > 1 { pad + step * i as f64 } else { width / 2.0 };
            let y = height - pad - (c.count as f64 / max) * inner_h;
            (x, y)
        })
        .collect()
}

fn polyline(points: &[(f64, f64)]) -> String {
    points
        .iter()
        .map(|(x, y)| format!("{:.1},{:.1}", x, y))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Closed outline of the area between the line and the x axis.
fn area(points: &[(f64, f64)], height: f64, pad: f64) -> String {
    match (points.first(), points.last()) {
        (Some(first), Some(last)) => format!(
            "{:.1},{:.1} {} {:.1},{:.1}",
            first.0,
            height - pad,
            polyline(points),
            last.0,
            height - pad
        ),
        _ => String::new(),
    }
}

#[component]
pub fn LineChart(
    #[prop(into)] title: String,
    #[prop(into)] counts: Signal<Vec<DailyCount>>,
    /// Stroke color; the fill uses the same color, translucent
    #[prop(into)] color: String,
) -> impl IntoView {
    let fill_color = color.clone();

    view! {
        <figure class="chart">
            <figcaption>{title}</figcaption>
            <svg viewBox=format!("0 0 {} {}", WIDTH, HEIGHT) class="chart-svg" role="img">
                <line
                    x1=PAD.to_string()
                    y1=(HEIGHT - PAD).to_string()
                    x2=(WIDTH - PAD).to_string()
                    y2=(HEIGHT - PAD).to_string()
                    class="chart-axis"
                />
                {move || {
                    let data = counts.get();
                    let points = chart_points(&data, WIDTH, HEIGHT, PAD);
                    let fill = fill_color.clone();
                    let stroke = color.clone();
                    view! {
                        <polygon points=area(&points, HEIGHT, PAD) fill=fill fill-opacity="0.2" />
                        <polyline points=polyline(&points) fill="none" stroke=stroke.clone() stroke-width="2" />
                        {points.iter().map(|(x, y)| view! {
                            <circle cx=format!("{:.1}", x) cy=format!("{:.1}", y) r="3" fill=stroke.clone() />
                        }).collect_view()}
                    }
                }}
            </svg>
            <div class="chart-labels">
                {move || counts.get().into_iter().map(|c| view! { <span>{c.label} " (" {c.count} ")"</span> }).collect_view()}
            </div>
        </figure>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(label: &str, count: usize) -> DailyCount {
        DailyCount { label: label.into(), count }
    }

    #[test]
    fn test_points_scale_to_max() {
        let counts = vec![day("a", 0), day("b", 2), day("c", 4)];
        let points = chart_points(&counts, 100.0, 60.0, 10.0);
        assert_eq!(points, vec![(10.0, 50.0), (50.0, 30.0), (90.0, 10.0)]);
    }

    #[test]
    fn test_single_point_centered() {
        let points = chart_points(&[day("a", 3)], 100.0, 60.0, 10.0);
        assert_eq!(points, vec![(50.0, 10.0)]);
    }

    #[test]
    fn test_empty_and_zero_counts() {
        assert!(chart_points(&[], 100.0, 60.0, 10.0).is_empty());
        let flat = chart_points(&[day("a", 0), day("b", 0)], 100.0, 60.0, 10.0);
        assert!(flat.iter().all(|(_, y)| *y == 50.0));
        assert_eq!(area(&[], 60.0, 10.0), "");
    }

    #[test]
    fn test_area_closes_on_axis() {
        let shape = area(&[(10.0, 20.0), (90.0, 10.0)], 60.0, 10.0);
        assert_eq!(shape, "10.0,50.0 10.0,20.0 90.0,10.0 90.0,50.0");
    }
}
