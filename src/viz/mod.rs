use std::{io, time::Duration};

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use log::info;
use ratatui::{prelude::*, widgets::*};

use crate::{
    algo::tabular::q_table::{QTableAgent, QTableAgentConfig},
    env::{Environment, Report},
    gym::Board,
};

use self::{
    components::{render_board, render_q_values, Component, Logs},
    tui::Tui,
};

pub mod components;
mod tui;

/// Configuration for the terminal driver
#[derive(Debug, Clone)]
pub struct VizConfig {
    /// Pause between ticks
    ///
    /// **Default**: 50 ms
    pub tick_rate: Duration,
}

impl Default for VizConfig {
    fn default() -> Self {
        Self {
            tick_rate: Duration::from_millis(50),
        }
    }
}

#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    #[default]
    Learn,
    Paused,
    Quit,
}

/// Owns the board and the learner and drives them one tick at a time while drawing to the terminal
pub struct App {
    state: State,
    tick_rate: Duration,
    ticks: u64,
    world: Board,
    agent: QTableAgent<Board>,
    logs: Logs,
}

impl App {
    pub fn new(config: VizConfig, agent_config: QTableAgentConfig) -> Self {
        Self {
            state: State::default(),
            tick_rate: config.tick_rate,
            ticks: 0,
            world: Board::new(),
            agent: QTableAgent::new(agent_config),
            logs: Logs::new(),
        }
    }

    /// Initialize the terminal and run until the user quits
    ///
    /// Restores the terminal on exit
    pub fn run(&mut self) -> io::Result<()> {
        let mut tui = Tui::enter()?;
        info!(
            "Agent at {:?}, food at {:?}",
            self.world.agent(),
            self.world.food()
        );

        loop {
            match self.state {
                State::Learn => {
                    self.agent.tick(&mut self.world);
                    self.ticks += 1;
                }
                State::Paused => {}
                State::Quit => break,
            }

            tui.draw(|frame| frame.render_widget(&*self, frame.size()))?;

            if event::poll(self.tick_rate)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key(key.code);
                    }
                }
            }
        }

        info!("Stopped after {} ticks", self.ticks);
        Ok(())
    }

    fn handle_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('q') => self.state = State::Quit,
            KeyCode::Char('p') => {
                self.state = match self.state {
                    State::Learn => State::Paused,
                    _ => State::Learn,
                }
            }
            _ => {
                self.logs.handle_key(key);
            }
        }
    }
}

impl Widget for &App {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // Layout
        let [left_area, log_area] =
            Layout::horizontal([Constraint::Length(50), Constraint::Fill(1)]).areas(area);
        let [board_area, status_area, q_area] = Layout::vertical([
            Constraint::Length(13),
            Constraint::Length(4),
            Constraint::Fill(1),
        ])
        .areas(left_area);

        // Board
        render_board(&self.world, board_area, buf);

        // Status
        let status = if self.state == State::Paused {
            "paused"
        } else {
            "learning"
        };
        Paragraph::new(vec![
            Line::from(report_line(&self.world.report)),
            Line::from(vec![
                Span::from(status).light_cyan().bold(),
                Span::raw("  q: quit  p: pause"),
            ]),
        ])
        .block(Block::default().padding(Padding::uniform(1)))
        .render(status_area, buf);

        // Q values
        render_q_values(&self.agent, self.world.observe(), q_area, buf);

        // Logs
        self.logs.render_ref(log_area, buf);
    }
}

/// Every report counter as `name value`, in declaration order
fn report_line(report: &Report) -> String {
    report
        .keys()
        .iter()
        .map(|&key| format!("{key} {}", report[key]))
        .collect::<Vec<_>>()
        .join("  ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gym::Action;

    #[test]
    fn report_line_lists_every_counter() {
        let mut world = Board::from_positions((0, 0), (0, 1));
        world.step(Action::Up);
        world.step(Action::Right);

        assert_eq!(
            report_line(&world.report),
            "steps 2  captures 1  collisions 1  reward -3",
            "Counters follow the report's key order"
        );
    }

    #[test]
    fn pause_and_quit_keys() {
        let mut app = App::new(VizConfig::default(), QTableAgentConfig::default());

        app.handle_key(KeyCode::Char('p'));
        assert_eq!(app.state, State::Paused, "p pauses learning");
        app.handle_key(KeyCode::Char('f'));
        assert_eq!(app.state, State::Paused, "Log pane keys leave the state alone");
        app.handle_key(KeyCode::Char('p'));
        assert_eq!(app.state, State::Learn, "p resumes learning");
        app.handle_key(KeyCode::Char('q'));
        assert_eq!(app.state, State::Quit, "q quits");
    }
}
