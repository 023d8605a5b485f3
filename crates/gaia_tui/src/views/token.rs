use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Widget};

use gaia_core::panels::TokenPanel;

pub struct TokenWidget<'a> {
    pub panel: &'a TokenPanel,
    /// Amount currently being typed for a burn, when input mode is active.
    pub burn_input: Option<&'a str>,
}

impl<'a> Widget for TokenWidget<'a> {
    fn render(self, area: Rect, buf: &mut ratatui::buffer::Buffer) {
        let l = &self.panel.ledger;
        let mut lines = vec![
            Line::from(vec![
                Span::styled("Price: ", Style::default().fg(Color::Yellow)),
                Span::raw(format!("${:.4}", l.price_usd)),
            ]),
            Line::from(format!("Circulating: {}", l.circulating)),
            Line::from(vec![
                Span::styled("Burned: ", Style::default().fg(Color::Red)),
                Span::raw(format!("{}", l.burned)),
            ]),
            Line::from(format!("Total supply: {}", l.total_supply())),
            Line::from(format!("Holders: {}", l.holders)),
            Line::from(format!("Burn votes: {}", l.burn_votes)),
        ];
        if let Some(input) = self.burn_input {
            lines.push(Line::from(Span::styled(
                format!("Burn amount: {}_", input),
                Style::default().fg(Color::Red),
            )));
        }

        Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Token Mechanics "),
            )
            .render(area, buf);
    }
}
