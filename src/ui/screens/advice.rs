use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::advice::Message;
use crate::ui::app::App;
use crate::ui::theme;

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::OVERLAY))
        .title(Span::styled(" Advice ", theme::panel_title_style()));

    let Some(advice) = &app.advice else {
        let p = Paragraph::new(Line::from(Span::styled(
            "Enter amounts, then press Enter to save and analyse.",
            theme::dim_style(),
        )))
        .wrap(Wrap { trim: true })
        .block(block);
        f.render_widget(p, area);
        return;
    };

    let currency = app.config.currency.as_str();
    let lines: Vec<Line> = advice
        .messages
        .iter()
        .map(|msg| {
            let (marker, style) = message_style(msg);
            Line::from(vec![
                Span::styled(format!(" {marker} "), style.add_modifier(Modifier::BOLD)),
                Span::styled(msg.text(currency), style),
            ])
        })
        .collect();

    let p = Paragraph::new(lines).wrap(Wrap { trim: false }).block(block);
    f.render_widget(p, area);
}

fn message_style(msg: &Message) -> (&'static str, Style) {
    match msg {
        Message::OverBudget { .. } => ("✗", Style::default().fg(theme::RED)),
        Message::NearLimit | Message::CategoryCaution { .. } => ("!", theme::warning_style()),
        Message::UnderSpending => ("?", theme::warning_style()),
        Message::OnTrack => ("✓", theme::ok_style()),
        Message::SavingScore(_) | Message::RecommendedSaving(_) => ("•", theme::normal_style()),
    }
}
