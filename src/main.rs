use anyhow::Result;
use ksum::problem::Problem;
use ksum::settings::{self};

fn main() -> Result<()> {
    let settings = settings::load_config()?;
    let mut problem = Problem::new(settings)?;

    problem.solve()?;
    problem.writeup();

    Ok(())
}
