use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

use crate::ui::app::{App, Field, InputMode};
use crate::ui::theme;
use crate::ui::util::truncate;
use crate::util::format_amount;

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    let currency = app.config.currency.as_str();
    let mut rows: Vec<(String, String)> = vec![
        ("Month".into(), app.month.to_string()),
        ("Budget".into(), format_amount(app.budget, currency)),
    ];
    for (cat, amount) in app.config.categories.iter().zip(&app.amounts) {
        rows.push((truncate(&cat.name, 14), format_amount(*amount, currency)));
    }

    let editing = app.input_mode == InputMode::Editing;
    let items: Vec<ListItem> = rows
        .into_iter()
        .enumerate()
        .map(|(i, (label, value))| {
            let selected = i == app.field_index;
            let value = if selected && editing {
                format!("{}▏", app.edit_buffer)
            } else {
                value
            };
            let style = if selected {
                theme::selected_style()
            } else {
                theme::normal_style()
            };
            // Separates the sidebar settings from the amount inputs.
            let label_style = if i < 2 && !selected {
                Style::default().fg(theme::ACCENT)
            } else {
                style
            };
            ListItem::new(Line::from(vec![
                Span::styled(format!(" {label:<14}"), label_style),
                Span::styled(format!("{value:>16} "), style),
            ]))
        })
        .collect();

    let hint = match app.field() {
        Field::Month => " h/l month ",
        Field::Budget => " h/l budget step ",
        Field::Amount(_) => " h/l step · digits type ",
    };

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::OVERLAY))
            .title(Span::styled(" Spending Input ", theme::panel_title_style()))
            .title_bottom(Span::styled(hint, theme::dim_style())),
    );
    f.render_widget(list, area);
}

/// Total of the form as it stands, shown before the first save.
pub(crate) fn pending_total(app: &App) -> u64 {
    app.amounts.iter().fold(0u64, |acc, a| acc.saturating_add(*a))
}
