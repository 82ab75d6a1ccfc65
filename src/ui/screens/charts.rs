use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Block, Borders, List, ListItem, Paragraph},
    Frame,
};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::RoundingStrategy;

use crate::ui::app::App;
use crate::ui::theme;
use crate::ui::util::{progress_bar, truncate};
use crate::util::format_amount;

fn panel(title: &str) -> Block<'_> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::OVERLAY))
        .title(Span::styled(format!(" {title} "), theme::panel_title_style()))
}

fn render_empty(f: &mut Frame, area: Rect, title: &str, msg: &str) {
    let p = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(msg.to_string(), theme::dim_style())),
    ])
    .centered()
    .block(panel(title));
    f.render_widget(p, area);
}

/// Grouped bars: one group per category, one bar per month present in the ledger.
pub(crate) fn render_monthly(f: &mut Frame, area: Rect, app: &App) {
    const TITLE: &str = "Monthly Comparison";
    let report = &app.report;
    if report.is_empty() {
        render_empty(f, area, TITLE, "No saved spending yet. Press Enter to save.");
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(5), Constraint::Length(1)])
        .split(area);

    let months = report.months.len().max(1) as u16;
    let groups = report.categories.len().max(1) as u16;
    let inner_width = chunks[0].width.saturating_sub(2);
    let bar_width = (inner_width / groups)
        .saturating_sub(1)
        .checked_div(months)
        .unwrap_or(1)
        .clamp(1, 8);

    let mut chart = BarChart::default()
        .block(panel(TITLE))
        .bar_width(bar_width)
        .bar_gap(0)
        .group_gap(1);

    for (row, category) in report.categories.iter().enumerate() {
        let bars: Vec<Bar> = report.pivot[row]
            .iter()
            .enumerate()
            .map(|(col, value)| {
                Bar::default()
                    .value(*value)
                    .text_value(String::new())
                    .style(Style::default().fg(theme::series_color(col)))
            })
            .collect();
        let label = truncate(category, (bar_width * months) as usize);
        chart = chart.data(BarGroup::default().label(Line::from(label)).bars(&bars));
    }
    f.render_widget(chart, chunks[0]);

    let mut legend: Vec<Span> = vec![Span::raw(" ")];
    for (col, month) in report.months.iter().enumerate() {
        legend.push(Span::styled("■ ", Style::default().fg(theme::series_color(col))));
        legend.push(Span::styled(format!("{month}  "), theme::dim_style()));
    }
    f.render_widget(Paragraph::new(Line::from(legend)), chunks[1]);
}

/// Mean per category across all saved months.
pub(crate) fn render_averages(f: &mut Frame, area: Rect, app: &App) {
    const TITLE: &str = "Average by Category";
    let report = &app.report;
    if report.is_empty() {
        render_empty(f, area, TITLE, "Averages appear after the first save.");
        return;
    }

    let groups = report.categories.len().max(1) as u16;
    let bar_width = (area.width.saturating_sub(2) / groups)
        .saturating_sub(1)
        .clamp(3, 12);

    let bars: Vec<Bar> = report
        .categories
        .iter()
        .zip(&report.averages)
        .map(|(category, avg)| {
            let value = avg
                .round_dp_with_strategy(0, RoundingStrategy::MidpointNearestEven)
                .to_u64()
                .unwrap_or(0);
            Bar::default()
                .value(value)
                .text_value(compact_amount(value))
                .label(Line::from(truncate(category, bar_width as usize)))
                .style(Style::default().fg(theme::TOMATO))
                .value_style(
                    Style::default()
                        .fg(theme::HEADER_BG)
                        .bg(theme::TOMATO)
                        .add_modifier(Modifier::BOLD),
                )
        })
        .collect();

    let chart = BarChart::default()
        .block(panel(TITLE))
        .data(BarGroup::default().bars(&bars))
        .bar_width(bar_width)
        .bar_gap(1);
    f.render_widget(chart, area);
}

/// Share of each non-zero category in the current input.
pub(crate) fn render_proportions(f: &mut Frame, area: Rect, app: &App) {
    const TITLE: &str = "This Month's Share";
    if app.advice.is_none() {
        render_empty(f, area, TITLE, "Save to see how this month splits.");
        return;
    }
    let slices = &app.report.proportions;
    if slices.is_empty() {
        render_empty(f, area, TITLE, "All amounts are zero.");
        return;
    }

    let currency = app.config.currency.as_str();
    let bar_width = (area.width as usize).saturating_sub(2 + 12 + 8 + 16).clamp(4, 40);
    let mut items: Vec<ListItem> = slices
        .iter()
        .enumerate()
        .map(|(i, s)| {
            let ratio = s.percent.to_f64().unwrap_or(0.0) / 100.0;
            let color = theme::series_color(i);
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!(" {:<11}", truncate(&s.category, 10)),
                    theme::normal_style(),
                ),
                Span::styled(progress_bar(ratio, bar_width), Style::default().fg(color)),
                Span::styled(
                    format!(" {:>6}%", s.percent.to_string()),
                    theme::normal_style(),
                ),
                Span::styled(
                    format!(" {:>14}", format_amount(s.amount, currency)),
                    theme::dim_style(),
                ),
            ]))
        })
        .collect();
    items.push(ListItem::new(Line::from(Span::styled(
        format!(" Total {}", format_amount(app.report.total, currency)),
        Style::default().fg(theme::TEXT).add_modifier(Modifier::BOLD),
    ))));

    f.render_widget(List::new(items).block(panel(TITLE)), area);
}

/// `1234567` → `"1.2M"`, `45000` → `"45k"`; keeps bar labels inside narrow bars.
pub(crate) fn compact_amount(value: u64) -> String {
    match value {
        v if v >= 1_000_000 => format!("{:.1}M", v as f64 / 1_000_000.0),
        v if v >= 1_000 => format!("{}k", v / 1_000),
        v => v.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compact_amount() {
        assert_eq!(compact_amount(0), "0");
        assert_eq!(compact_amount(999), "999");
        assert_eq!(compact_amount(45_000), "45k");
        assert_eq!(compact_amount(1_300_000), "1.3M");
    }
}
