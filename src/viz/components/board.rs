use ratatui::{prelude::*, widgets::*};

use crate::gym::{Cell, GridWorld};

const AGENT: char = 'O';
const FOOD: char = 'X';

/// Text rows for a board: a `-` border above and below, `|` on the sides, and the score on
/// the line below the grid
pub fn board_lines<const H: usize, const W: usize>(
    cells: &[[Cell; W]; H],
    score: i64,
) -> Vec<String> {
    let border = "-".repeat(W + 2);

    let mut lines = Vec::with_capacity(H + 3);
    lines.push(border.clone());
    for row in cells {
        let body = row
            .iter()
            .map(|cell| match cell {
                Cell::Empty => ' ',
                Cell::Agent => AGENT,
                Cell::Food => FOOD,
            })
            .collect::<String>();
        lines.push(format!("|{body}|"));
    }
    lines.push(border);
    lines.push(score.to_string());

    lines
}

pub fn render_board<const H: usize, const W: usize>(
    world: &GridWorld<H, W>,
    area: Rect,
    buf: &mut Buffer,
) {
    let lines = board_lines(world.cells(), world.score())
        .into_iter()
        .map(|line| {
            let spans = line
                .chars()
                .map(|c| match c {
                    AGENT => Span::from("O").light_cyan().bold(),
                    FOOD => Span::from("X").light_green().bold(),
                    _ => Span::raw(c.to_string()),
                })
                .collect::<Vec<_>>();
            Line::from(spans)
        })
        .collect::<Vec<_>>();

    Paragraph::new(lines)
        .block(Block::default().padding(Padding::horizontal(1)))
        .render(area, buf);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_contract() {
        let world = GridWorld::<3, 4>::from_positions((0, 1), (2, 3));
        assert_eq!(
            board_lines(world.cells(), -103),
            ["------", "| O  |", "|    |", "|   X|", "------", "-103"],
        );
    }

    #[test]
    fn standard_board_size() {
        let world = crate::gym::Board::new();
        let lines = board_lines(world.cells(), world.score());
        assert_eq!(lines.len(), 13, "Border, ten rows, border, score");
        assert!(
            lines[1..11]
                .iter()
                .all(|l| l.len() == 12 && l.starts_with('|') && l.ends_with('|')),
            "Every row is walled in"
        );
        assert_eq!(lines[1].chars().nth(1), Some('O'), "Agent starts top left");
        assert_eq!(lines[12], "0");
    }
}
