use std::error::Error;

use qgrid::{
    algo::tabular::q_table::QTableAgentConfig,
    viz::{App, VizConfig},
};

fn main() -> Result<(), Box<dyn Error>> {
    tui_logger::init_logger(log::LevelFilter::Debug)?;
    tui_logger::set_default_level(log::LevelFilter::Debug);

    let mut app = App::new(VizConfig::default(), QTableAgentConfig::default());
    app.run()?;

    Ok(())
}
