use std::f64::consts::{
    FRAC_PI_2,
    PI,
    TAU,
};

use eframe::egui::{
    Color32,
    RichText,
    Stroke,
    Ui,
};
use egui_plot::{
    Corner,
    Legend,
    Line,
    PlotPoint,
    Polygon,
    Text,
};

use super::{
    chart_heading,
    empty_chart,
    static_plot,
};
use crate::{
    core::{
        CatalogSnapshot,
        SeriesSlice,
    },
    gui::theme::{
        chart_color,
        Theme,
    },
};

const LABEL_THRESHOLD: f64 = 0.05;
const LABEL_RADIUS: f64 = 0.6;
const ARC_STEP: f64 = PI / 48.0;

/// Start and end angle of each slice, clockwise from 12 o'clock.
fn slice_spans(slices: &[SeriesSlice]) -> Vec<(f64, f64)> {
    let total: usize = slices.iter().map(|slice| slice.value).sum();
    if total == 0 {
        return Vec::new();
    }

    let mut start = 0.0;
    slices
        .iter()
        .map(|slice| {
            let end = start + TAU * slice.value as f64 / total as f64;
            let span = (start, end);
            start = end;
            span
        })
        .collect()
}

/// `name (pct%)`, only for slices above five percent of the whole.
fn slice_label(slice: &SeriesSlice, total: usize) -> Option<String> {
    if total == 0 {
        return None;
    }
    let percent = slice.value as f64 / total as f64;
    (percent > LABEL_THRESHOLD).then(|| format!("{} ({:.0}%)", slice.name, percent * 100.0))
}

/// Point on a circle around the origin; angle 0 is straight up and grows clockwise.
fn on_circle(angle: f64, radius: f64) -> [f64; 2] {
    [radius * angle.sin(), radius * angle.cos()]
}

/// Wedge outlines on the unit circle, split so no piece is wider than a quarter turn.
/// Plot polygons are filled as convex shapes.
fn wedge_pieces(span: (f64, f64)) -> Vec<Vec<[f64; 2]>> {
    let (start, end) = span;
    // slack keeps an exact quarter multiple from rounding up to an extra piece
    let pieces = ((end - start) / FRAC_PI_2 - 1e-9).ceil().max(1.0) as usize;
    let width = (end - start) / pieces as f64;
    let steps = (width / ARC_STEP).ceil().max(1.0) as usize;

    (0..pieces)
        .map(|piece| {
            let from = start + width * piece as f64;
            let mut outline = vec![[0.0, 0.0]];
            outline.extend(
                (0..=steps).map(|step| on_circle(from + width * step as f64 / steps as f64, 1.0)),
            );
            outline
        })
        .collect()
}

pub fn series_distribution_chart(ui: &mut Ui, snapshot: &CatalogSnapshot, theme: &Theme) {
    chart_heading(ui, theme, "Amiibo Series Distribution");

    let slices = snapshot.distribution();
    let total: usize = slices.iter().map(|slice| slice.value).sum();
    if total == 0 {
        empty_chart(ui, "No series to chart");
        return;
    }

    let spans = slice_spans(slices);
    let separator = ui.visuals().panel_fill;

    static_plot("series_distribution")
        .data_aspect(1.0)
        .show_axes(false)
        .show_grid(false)
        .show_x(false)
        .show_y(false)
        .include_x(-1.1)
        .include_x(1.1)
        .include_y(-1.1)
        .include_y(1.1)
        .legend(Legend::default().position(Corner::RightTop))
        .label_formatter(move |name: &str, _point: &PlotPoint| {
            match slices.iter().find(|slice| slice.name == name) {
                Some(slice) => format!("{}\n{} Amiibos", slice.name, slice.value),
                None => String::new(),
            }
        })
        .show(ui, |plot_ui| {
            for (index, (slice, &span)) in slices.iter().zip(&spans).enumerate() {
                let color = chart_color(index);
                for piece in wedge_pieces(span) {
                    plot_ui.polygon(
                        Polygon::new(slice.name.as_str(), piece)
                            .fill_color(color)
                            .stroke(Stroke::new(1.0, color)),
                    );
                }
            }

            if spans.len() > 1 {
                for &(start, _) in &spans {
                    plot_ui.line(
                        Line::new("", vec![[0.0, 0.0], on_circle(start, 1.0)])
                            .color(separator)
                            .width(1.5),
                    );
                }
            }

            for (slice, &(start, end)) in slices.iter().zip(&spans) {
                let Some(label) = slice_label(slice, total) else {
                    continue;
                };
                let [x, y] = on_circle((start + end) / 2.0, LABEL_RADIUS);
                plot_ui.text(Text::new(
                    "",
                    PlotPoint::new(x, y),
                    RichText::new(label).size(12.0).color(Color32::BLACK),
                ));
            }
        });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slice(name: &str, value: usize) -> SeriesSlice {
        SeriesSlice { name: name.to_string(), value }
    }

    fn close(a: [f64; 2], b: [f64; 2]) -> bool {
        (a[0] - b[0]).abs() < 1e-9 && (a[1] - b[1]).abs() < 1e-9
    }

    #[test]
    fn spans_cover_a_full_turn() {
        let slices = vec![slice("Super Mario", 2), slice("Zelda", 1), slice("Kirby", 1)];
        let spans = slice_spans(&slices);

        assert_eq!(spans.len(), 3);
        assert_eq!(spans[0].0, 0.0);
        assert!((spans[0].1 - PI).abs() < 1e-9);
        assert!((spans[2].1 - TAU).abs() < 1e-9);
        assert!(slice_spans(&[]).is_empty());
        assert!(slice_spans(&[slice("Empty", 0)]).is_empty());
    }

    #[test]
    fn small_slices_are_unlabeled() {
        assert_eq!(slice_label(&slice("Super Mario", 2), 3), Some("Super Mario (67%)".to_string()));
        assert_eq!(slice_label(&slice("Others", 5), 100), None);
        assert_eq!(slice_label(&slice("Yarn", 6), 100), Some("Yarn (6%)".to_string()));
        assert_eq!(slice_label(&slice("Empty", 0), 0), None);
    }

    #[test]
    fn angles_run_clockwise_from_the_top() {
        assert!(close(on_circle(0.0, 1.0), [0.0, 1.0]));
        assert!(close(on_circle(FRAC_PI_2, 1.0), [1.0, 0.0]));
        assert!(close(on_circle(PI, 2.0), [0.0, -2.0]));
    }

    #[test]
    fn wide_wedges_are_split_into_quarter_turns() {
        let pieces = wedge_pieces((0.0, PI * 1.5));
        assert_eq!(pieces.len(), 3);

        for piece in &pieces {
            assert_eq!(piece[0], [0.0, 0.0]);
            let on_rim = |p: &[f64; 2]| ((p[0] * p[0] + p[1] * p[1]).sqrt() - 1.0).abs() < 1e-9;
            assert!(piece[1..].iter().all(on_rim));
        }
        assert!(close(pieces[0][1], [0.0, 1.0]));
        assert!(close(*pieces[2].last().unwrap(), [-1.0, 0.0]));

        assert_eq!(wedge_pieces((0.0, 0.1)).len(), 1);
    }
}
