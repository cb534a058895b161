use std::{
    iter,
    ops::RangeInclusive,
};

use eframe::egui::{
    Color32,
    Ui,
};
use egui_plot::{
    Corner,
    GridMark,
    Legend,
    Line,
    PlotPoint,
    Points,
};

use super::{
    chart_heading,
    empty_chart,
    static_plot,
};
use crate::{
    core::{
        CatalogSnapshot,
        TimelineBucket,
    },
    gui::theme::{
        chart_color,
        Theme,
    },
};

const TOTAL_LABEL: &str = "All Amiibos";

struct AreaSeries<'a> {
    name: &'a str,
    color: Color32,
    /// `[bucket index, count]`
    points: Vec<[f64; 2]>,
}

fn series_points<F>(buckets: &[TimelineBucket], value: F) -> Vec<[f64; 2]>
where
    F: Fn(&TimelineBucket) -> usize,
{
    buckets.iter().enumerate().map(|(index, bucket)| [index as f64, value(bucket) as f64]).collect()
}

fn area_series<'a>(buckets: &[TimelineBucket], top_series: &'a [String]) -> Vec<AreaSeries<'a>> {
    let total = AreaSeries {
        name: TOTAL_LABEL,
        color: chart_color(0),
        points: series_points(buckets, |bucket| bucket.total),
    };

    let per_series = top_series.iter().enumerate().map(|(index, name)| AreaSeries {
        name,
        color: chart_color(index + 1),
        points: series_points(buckets, |bucket| bucket.series_count(name)),
    });

    iter::once(total).chain(per_series).collect()
}

/// Month key for an x position, only on whole bucket indices.
fn bucket_label(buckets: &[TimelineBucket], x: f64) -> Option<&str> {
    if x < 0.0 || x.fract() != 0.0 {
        return None;
    }
    buckets.get(x as usize).map(|bucket| bucket.date.as_str())
}

fn count_tick(mark: GridMark, _range: &RangeInclusive<f64>) -> String {
    if mark.value.fract() == 0.0 {
        format!("{:.0}", mark.value)
    } else {
        String::new()
    }
}

pub fn release_timeline_chart(ui: &mut Ui, snapshot: &CatalogSnapshot, theme: &Theme) {
    chart_heading(ui, theme, "Amiibo Release Timeline");

    let buckets = snapshot.timeline();
    if buckets.is_empty() {
        empty_chart(ui, "No release dates to chart");
        return;
    }

    let series = area_series(buckets, snapshot.top_series());

    static_plot("release_timeline")
        .legend(Legend::default().position(Corner::LeftTop))
        .x_axis_label("Release Date")
        .y_axis_label("Number of Amiibos")
        .include_y(0.0)
        .x_axis_formatter(move |mark: GridMark, _range: &RangeInclusive<f64>| {
            bucket_label(buckets, mark.value).unwrap_or_default().to_string()
        })
        .y_axis_formatter(count_tick)
        .label_formatter(move |name: &str, point: &PlotPoint| {
            let Some(date) = bucket_label(buckets, point.x.round()) else {
                return String::new();
            };
            if name.is_empty() {
                date.to_string()
            } else {
                format!("{name}\n{date}: {:.0}", point.y)
            }
        })
        .show(ui, |plot_ui| {
            for area in series {
                // a lone month has no area to fill
                if area.points.len() == 1 {
                    plot_ui.points(
                        Points::new(area.name, area.points.clone()).radius(4.0).color(area.color),
                    );
                }
                plot_ui.line(
                    Line::new(area.name, area.points).color(area.color).width(1.5).fill(0.0),
                );
            }
        });
}
