pub mod board;
pub mod log;
pub mod q_values;

use crossterm::event::KeyCode;
pub use board::render_board;
pub use log::Logs;
pub use q_values::render_q_values;
use ratatui::widgets::WidgetRef;

pub trait Component: WidgetRef {
    /// React to a pressed key, `false` if the key is not bound
    fn handle_key(&mut self, key: KeyCode) -> bool;
}
