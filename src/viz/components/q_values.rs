use ratatui::{prelude::*, widgets::*};
use strum::{IntoEnumIterator, VariantArray};

use crate::{
    algo::tabular::q_table::QTableAgent,
    gym::{Action, Board, StateLabel},
};

/// Table of Q values, one row per state label, with the current state highlighted
pub fn render_q_values(
    agent: &QTableAgent<Board>,
    current: StateLabel,
    area: Rect,
    buf: &mut Buffer,
) {
    let header = Row::new(
        std::iter::once(String::from("state"))
            .chain(Action::VARIANTS.iter().map(|a| format!("{a:?}").to_uppercase())),
    )
    .style(Style::default().bold());

    let rows = StateLabel::iter().map(|state| {
        let row = Row::new(
            std::iter::once(String::from(state.name())).chain(
                Action::VARIANTS
                    .iter()
                    .map(|&a| format!("{:>8.2}", agent.q_value(state, a))),
            ),
        );

        if state == current {
            row.style(Style::default().light_yellow())
        } else {
            row
        }
    });

    let widths = [
        Constraint::Length(10),
        Constraint::Length(8),
        Constraint::Length(8),
        Constraint::Length(8),
        Constraint::Length(8),
    ];

    Widget::render(
        Table::new(rows, widths).header(header).block(
            Block::bordered()
                .border_type(BorderType::Rounded)
                .title("Q values"),
        ),
        area,
        buf,
    );
}
