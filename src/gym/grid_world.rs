use std::fmt;

use log::{debug, info, trace};
use rand::{thread_rng, Rng};
use strum::{EnumIter, VariantArray};

use crate::env::{DiscreteActionSpace, Environment, Report};

use super::direction::{encode, StateLabel};

/// Position coordinates on the board as `(row, col)`
pub type Pos = (usize, usize);

/// Score added when the agent steps onto the food
pub const CAPTURE_REWARD: i64 = 100;
/// Score removed on every move that stays on the board
pub const STEP_PENALTY: i64 = 3;
/// Score removed when a move would leave the board
pub const COLLISION_PENALTY: i64 = 100;

/// Up and down change the row, left and right change the column
#[derive(EnumIter, VariantArray, Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Action {
    Up = 0,
    Down = 1,
    Left = 2,
    Right = 3,
}

/// Contents of a single cell as seen by a renderer
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Cell {
    #[default]
    Empty = 0,
    Agent = 1,
    Food = 2,
}

/// A board with one agent and one piece of food
///
/// The agent moves one cell per step. Moving onto the food captures it and a new piece
/// spawns somewhere else. There are no terminal states, the world runs forever.
///
/// Intended for use with a [QTableAgent](crate::algo::tabular::q_table::QTableAgent)
pub struct GridWorld<const H: usize, const W: usize> {
    agent: Pos,
    food: Pos,
    score: i64,
    cells: [[Cell; W]; H],
    pub report: Report,
}

/// The standard 10x10 board
pub type Board = GridWorld<10, 10>;

impl<const H: usize, const W: usize> GridWorld<H, W> {
    /// Place the agent in the top left corner and spawn food
    ///
    /// **Panics** if the board has fewer than two cells
    pub fn new() -> Self {
        assert!(H * W > 1, "The board needs room for both the agent and the food");
        let agent = (0, 0);
        Self::with_positions(agent, spawn_food::<H, W>(agent))
    }

    /// Stage a board with the agent and food at known positions and a score of zero
    ///
    /// **Panics** if either position is off the board or if they coincide
    pub fn from_positions(agent: Pos, food: Pos) -> Self {
        assert!(in_bounds::<H, W>(agent), "Agent {agent:?} is off the board");
        assert!(in_bounds::<H, W>(food), "Food {food:?} is off the board");
        assert_ne!(agent, food, "Agent and food cannot share a cell");
        Self::with_positions(agent, food)
    }

    fn with_positions(agent: Pos, food: Pos) -> Self {
        let mut world = Self {
            agent,
            food,
            score: 0,
            cells: [[Cell::Empty; W]; H],
            report: Report::new(vec!["steps", "captures", "collisions", "reward"]),
        };
        world.update_cells();
        world
    }

    pub fn agent(&self) -> Pos {
        self.agent
    }

    pub fn food(&self) -> Pos {
        self.food
    }

    /// Cumulative score since construction
    pub fn score(&self) -> i64 {
        self.score
    }

    /// Grid projection of the board for renderers
    pub fn cells(&self) -> &[[Cell; W]; H] {
        &self.cells
    }

    /// Apply an action to the agent
    ///
    /// **Returns** `false` if the move would leave the board, in which case the agent stays
    /// put and the score drops by [`COLLISION_PENALTY`]
    pub fn move_agent(&mut self, action: Action) -> bool {
        let Some(next) = step_action::<H, W>(self.agent, action) else {
            self.score -= COLLISION_PENALTY;
            self.report.entry("collisions").and_modify(|x| *x += 1.0);
            debug!("Rejected {action:?} from {:?}", self.agent);
            return false;
        };

        self.agent = next;
        if self.agent == self.food {
            self.score += CAPTURE_REWARD;
            self.food = spawn_food::<H, W>(self.agent);
            self.report.entry("captures").and_modify(|x| *x += 1.0);
            info!(
                "Captured food at {:?}, respawned at {:?}, score {}",
                self.agent,
                self.food,
                self.score - STEP_PENALTY
            );
        }
        self.score -= STEP_PENALTY;

        self.update_cells();
        true
    }

    fn update_cells(&mut self) {
        self.cells = [[Cell::Empty; W]; H];
        self.cells[self.agent.0][self.agent.1] = Cell::Agent;
        self.cells[self.food.0][self.food.1] = Cell::Food;
    }
}

impl<const H: usize, const W: usize> Default for GridWorld<H, W> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const H: usize, const W: usize> DiscreteActionSpace for GridWorld<H, W> {
    fn actions(&self) -> Vec<Self::Action> {
        Action::VARIANTS.to_vec()
    }
}

impl<const H: usize, const W: usize> Environment for GridWorld<H, W> {
    type State = StateLabel;
    type Action = Action;

    fn observe(&self) -> Self::State {
        encode(self.agent, self.food)
    }

    fn step(&mut self, action: Self::Action) -> (Self::State, f64) {
        let before = self.score;
        self.move_agent(action);
        let reward = (self.score - before) as f64;

        self.report.entry("steps").and_modify(|x| *x += 1.0);
        self.report.entry("reward").and_modify(|x| *x += reward);
        trace!("{action:?} -> reward {reward}\n{self}");

        (self.observe(), reward)
    }
}

/// Numeric dump of the cells, one row per line
impl<const H: usize, const W: usize> fmt::Display for GridWorld<H, W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.cells {
            for cell in row {
                write!(f, "{} ", *cell as u8)?;
            }
            writeln!(f)?;
        }
        write!(f, "================")
    }
}

fn in_bounds<const H: usize, const W: usize>(pos: Pos) -> bool {
    pos.0 < H && pos.1 < W
}

fn step_action<const H: usize, const W: usize>(pos: Pos, action: Action) -> Option<Pos> {
    let (row, col) = pos;
    let next = match action {
        Action::Up => (row.checked_sub(1)?, col),
        Action::Down => (row + 1, col),
        Action::Left => (row, col.checked_sub(1)?),
        Action::Right => (row, col + 1),
    };
    in_bounds::<H, W>(next).then_some(next)
}

/// Uniformly pick a cell other than `agent`
fn spawn_food<const H: usize, const W: usize>(agent: Pos) -> Pos {
    let mut rng = thread_rng();
    loop {
        let candidate = (rng.gen_range(0..H), rng.gen_range(0..W));
        if candidate != agent {
            return candidate;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn move_mechanics() {
        let cases = [
            (Action::Up, (4, 5)),
            (Action::Down, (6, 5)),
            (Action::Left, (5, 4)),
            (Action::Right, (5, 6)),
        ];
        for (action, expected) in cases {
            let mut env = Board::from_positions((5, 5), (0, 0));
            assert!(env.move_agent(action), "{action:?} stays on the board");
            assert_eq!(env.agent(), expected, "{action:?} moves the agent");
        }
    }

    #[test]
    fn boundary_penalty() {
        let cases = [
            ((0, 0), Action::Up),
            ((0, 0), Action::Left),
            ((9, 9), Action::Down),
            ((9, 9), Action::Right),
            ((0, 4), Action::Up),
            ((7, 9), Action::Right),
        ];
        for (start, action) in cases {
            let mut env = Board::from_positions(start, (5, 5));
            assert!(!env.move_agent(action), "{action:?} from {start:?} is rejected");
            assert_eq!(env.agent(), start, "Agent stays in place");
            assert_eq!(env.score(), -100, "Score drops by exactly 100");
            assert_eq!(env.report["collisions"], 1.0, "Collision is reported");
        }
    }

    #[test]
    fn step_penalty() {
        let mut env = Board::from_positions((0, 0), (9, 9));
        for i in 1..=5 {
            env.move_agent(Action::Down);
            assert_eq!(env.score(), -3 * i, "Every successful move costs 3");
        }
    }

    #[test]
    fn capture_scenario() {
        let mut env = Board::from_positions((5, 5), (5, 7));
        assert_eq!(env.observe(), StateLabel::Right, "Food is to the right");

        assert!(env.move_agent(Action::Right));
        assert_eq!(env.agent(), (5, 6));
        assert_eq!(env.score(), -3, "Plain step");

        assert!(env.move_agent(Action::Right));
        assert_eq!(env.agent(), (5, 7));
        assert_eq!(env.score(), 94, "Capture nets +97");
        assert_ne!(env.food(), (5, 7), "Food was moved after being eaten");
        assert_eq!(env.report["captures"], 1.0, "Capture is reported");
    }

    #[test]
    fn boundary_scenario() {
        let mut env = Board::new();
        assert_eq!(env.agent(), (0, 0), "Agent starts in the corner");
        assert_ne!(env.food(), (0, 0), "Food never spawns on the agent");

        let (_, reward) = env.step(Action::Up);
        assert_eq!(env.agent(), (0, 0));
        assert_eq!(env.score(), -100);
        assert_eq!(reward, -100.0, "Reward is the score delta");
    }

    #[test]
    fn step_reward_is_score_delta() {
        let mut env = Board::from_positions((2, 2), (2, 4));
        let (state, reward) = env.step(Action::Right);
        assert_eq!((state, reward), (StateLabel::Right, -3.0));
        let (_, reward) = env.step(Action::Right);
        assert_eq!(reward, 97.0);
        assert_eq!(env.report["steps"], 2.0);
        assert_eq!(env.report["reward"], 94.0);
    }

    #[test]
    fn food_respawn() {
        for _ in 0..1000 {
            let mut env = Board::from_positions((4, 4), (4, 5));
            env.move_agent(Action::Right);
            let (row, col) = env.food();
            assert!(row < 10 && col < 10, "Food is on the board");
            assert_ne!(env.food(), env.agent(), "Food never lands on the agent");
        }
    }

    #[test]
    fn respawn_on_tiny_board() {
        let mut env = GridWorld::<1, 2>::from_positions((0, 0), (0, 1));
        for _ in 0..20 {
            let action = if env.agent() == (0, 0) {
                Action::Right
            } else {
                Action::Left
            };
            env.move_agent(action);
            assert_ne!(env.food(), env.agent(), "Food takes the only free cell");
        }
        assert_eq!(env.score(), 20 * 97);
    }

    #[test]
    fn cells_projection() {
        let mut env = Board::from_positions((1, 1), (8, 3));
        env.move_agent(Action::Down);

        let cells = env.cells();
        assert_eq!(cells[2][1], Cell::Agent, "Agent plotted at new position");
        assert_eq!(cells[1][1], Cell::Empty, "Old position cleared");
        assert_eq!(cells[8][3], Cell::Food, "Food plotted");
        let occupied = cells.iter().flatten().filter(|&&c| c != Cell::Empty).count();
        assert_eq!(occupied, 2, "Only the agent and food are plotted");
    }

    #[test]
    fn display_dump() {
        let env = GridWorld::<2, 3>::from_positions((0, 0), (1, 2));
        assert_eq!(env.to_string(), "1 0 0 \n0 0 2 \n================");
    }
}
