use strum::{EnumIter, VariantArray};

use super::grid_world::Pos;

/// Coarse direction of the food as seen from the agent
///
/// Only the relative direction is kept, distance and absolute position are discarded.
/// When agent and food share a cell the label is [`StateLabel::Right`].
#[derive(EnumIter, VariantArray, Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum StateLabel {
    Left,
    Right,
    Up,
    Down,
    UpLeft,
    UpRight,
    DownLeft,
    DownRight,
}

impl StateLabel {
    pub fn name(&self) -> &'static str {
        match self {
            StateLabel::Left => "LEFT",
            StateLabel::Right => "RIGHT",
            StateLabel::Up => "UP",
            StateLabel::Down => "DOWN",
            StateLabel::UpLeft => "UPLEFT",
            StateLabel::UpRight => "UPRIGHT",
            StateLabel::DownLeft => "DOWNLEFT",
            StateLabel::DownRight => "DOWNRIGHT",
        }
    }
}

/// Label the position of `food` relative to `agent`
///
/// Rows grow downwards and columns grow to the right.
pub fn encode(agent: Pos, food: Pos) -> StateLabel {
    let (row, col) = agent;
    let (food_row, food_col) = food;

    if row == food_row {
        return if col > food_col {
            StateLabel::Left
        } else {
            StateLabel::Right
        };
    }

    if row > food_row {
        if col == food_col {
            StateLabel::Up
        } else if col > food_col {
            StateLabel::UpLeft
        } else {
            StateLabel::UpRight
        }
    } else if col == food_col {
        StateLabel::Down
    } else if col > food_col {
        StateLabel::DownLeft
    } else {
        StateLabel::DownRight
    }
}
