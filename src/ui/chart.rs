use eframe::egui::{FontId, RichText, Ui, Vec2b, epaint::TextShape, pos2};
use egui_plot::{GridMark, Legend, Line, Plot, PlotPoint, PlotPoints, PlotResponse, Points};

use crate::{
    config::{ChartStyle, PLOT_CONFIG},
    domain::{Market, MarketTable},
    ui::{MarketColor, ui_config::UI_CONFIG, ui_text::UI_TEXT},
};

/// One market, one chart: title, single line series with gaps preserved,
/// rotated date ticks. `cell_height` is the full grid-cell height; the plot
/// gets what remains after the title and the tick strip.
pub(crate) fn render_market_chart(
    ui: &mut Ui,
    table: &MarketTable,
    market: Market,
    cell_height: f32,
) {
    let style = &PLOT_CONFIG.chart;
    let color = market.color();

    render_title(ui, market, style);

    let dates: Vec<String> = table.series(market).map(|(d, _)| d.to_string()).collect();
    let values: Vec<Option<f64>> = table.series(market).map(|(_, v)| v).collect();
    let runs = split_runs(&values);

    let plot_height =
        (cell_height - style.title_size - PLOT_CONFIG.tick_label_strip - 12.0).max(80.0);

    let tick_step = tick_step(dates.len(), style.max_x_ticks);
    let hover_dates = dates.clone();

    let mut plot = Plot::new(("market_chart", market.header_label()))
        .height(plot_height)
        // The built-in x axis stays hidden; date ticks are painted rotated below.
        .show_axes(Vec2b::new(false, true))
        .show_grid(Vec2b::new(true, true))
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .allow_boxed_zoom(false)
        .allow_double_click_reset(false)
        .x_grid_spacer(move |input| {
            let (min, max) = input.bounds;
            let step = tick_step as f64;
            let start = (min / step).ceil() as i64;
            let end = (max / step).floor() as i64;
            (start..=end)
                .map(|i| GridMark {
                    value: i as f64 * step,
                    step_size: step,
                })
                .collect()
        })
        .label_formatter(move |_, point| {
            let idx = point.x.round();
            match hover_dates.get(idx as usize) {
                Some(date) if idx >= 0.0 => format!("{}\n{:.2}", date, point.y),
                _ => String::new(),
            }
        });

    if style.show_legend {
        plot = plot.legend(Legend::default());
    }

    let response = plot.show(ui, |plot_ui| {
        for run in &runs {
            if run.len() == 1 {
                // A value with gaps on both sides has no line to belong to;
                // keep it visible as a marker.
                plot_ui.points(
                    Points::new(market.header_label(), PlotPoints::new(run.clone()))
                        .color(color)
                        .radius(style.point_radius),
                );
            } else {
                plot_ui.line(
                    Line::new(market.header_label(), PlotPoints::new(run.clone()))
                        .color(color)
                        .width(style.line_width),
                );
            }
        }
    });

    draw_rotated_date_ticks(ui, &response, &dates, tick_step, style);
    ui.add_space(PLOT_CONFIG.tick_label_strip);
}

fn render_title(ui: &mut Ui, market: Market, style: &ChartStyle) {
    let mut title = RichText::new(format!("{} {}", market, UI_TEXT.chart_title_suffix))
        .size(style.title_size)
        .color(UI_CONFIG.colors.heading);
    if style.title_strong {
        title = title.strong();
    }
    ui.vertical_centered(|ui| {
        ui.label(title);
    });
}

/// Dense daily labels don't fit horizontally, so they are painted at a fixed
/// angle just below the plot frame, one per grid step.
fn draw_rotated_date_ticks(
    ui: &Ui,
    response: &PlotResponse<()>,
    dates: &[String],
    tick_step: usize,
    style: &ChartStyle,
) {
    if dates.is_empty() {
        return;
    }
    let transform = response.transform;
    let frame = *transform.frame();
    let angle = style.tick_rotation_deg.to_radians();
    let painter = ui.painter();

    for idx in (0..dates.len()).step_by(tick_step) {
        let x = transform
            .position_from_point(&PlotPoint::new(idx as f64, 0.0))
            .x;
        if x < frame.left() || x > frame.right() {
            continue;
        }
        let galley = painter.layout_no_wrap(
            dates[idx].clone(),
            FontId::proportional(PLOT_CONFIG.tick_label_size),
            UI_CONFIG.colors.label,
        );
        painter.add(
            TextShape::new(pos2(x, frame.bottom() + 4.0), galley, UI_CONFIG.colors.label)
                .with_angle(angle),
        );
    }
}

/// Split a value sequence into runs of consecutive present values, keyed by
/// record index on the x axis. Gaps stay gaps: no run ever spans a None.
fn split_runs(values: &[Option<f64>]) -> Vec<Vec<[f64; 2]>> {
    let mut runs = Vec::new();
    let mut current: Vec<[f64; 2]> = Vec::new();
    for (idx, value) in values.iter().enumerate() {
        match value {
            Some(y) => current.push([idx as f64, *y]),
            None => {
                if !current.is_empty() {
                    runs.push(std::mem::take(&mut current));
                }
            }
        }
    }
    if !current.is_empty() {
        runs.push(current);
    }
    runs
}

/// Every n-th record gets a tick so at most `max_ticks` labels are painted.
fn tick_step(len: usize, max_ticks: usize) -> usize {
    len.div_ceil(max_ticks.max(1)).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gaps_split_the_series_into_separate_runs() {
        let runs = split_runs(&[Some(1.0), Some(2.0), None, Some(4.0)]);
        assert_eq!(runs.len(), 2);
        assert_eq!(runs[0], vec![[0.0, 1.0], [1.0, 2.0]]);
        assert_eq!(runs[1], vec![[3.0, 4.0]]);
    }

    #[test]
    fn x_coordinates_keep_the_record_index_across_gaps() {
        let runs = split_runs(&[None, None, Some(7.0)]);
        assert_eq!(runs, vec![vec![[2.0, 7.0]]]);
    }

    #[test]
    fn no_values_means_no_runs() {
        assert!(split_runs(&[]).is_empty());
        assert!(split_runs(&[None, None]).is_empty());
    }

    #[test]
    fn adjacent_gaps_never_produce_empty_runs() {
        let runs = split_runs(&[Some(1.0), None, None, Some(2.0), None]);
        assert_eq!(runs.len(), 2);
        assert!(runs.iter().all(|run| !run.is_empty()));
    }

    #[test]
    fn tick_step_caps_the_label_count() {
        assert_eq!(tick_step(5, 8), 1); // few labels: every record
        assert_eq!(tick_step(16, 8), 2);
        assert_eq!(tick_step(17, 8), 3);
        assert!(17usize.div_ceil(tick_step(17, 8)) <= 8);
        assert_eq!(tick_step(0, 8), 1);
        assert_eq!(tick_step(10, 0), 10); // degenerate config still ticks
    }
}
