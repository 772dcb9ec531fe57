use std::time::Instant;

use anyhow::{anyhow, Result};

use crate::{
    input,
    result::Solution,
    search,
    settings::{PAIR_SIZE, Settings, TARGET_SUM, TRIPLE_SIZE},
};


/// A solvable combination search problem.
#[derive(Debug, Clone)]
pub struct Problem {
    pub entries: Vec<i64>,          // parsed input sequence, never mutated
    pub settings: Settings,         // runtime settings
    pub solution: Option<Solution>, // products of the searches, once solved
}

impl Problem {
    /// Creates a new `Problem` by loading the entries from the input file
    /// named in `settings`.
    pub fn new(settings: Settings) -> Result<Self> {
        let entries = input::read_entries(&settings.input)?;

        Ok(Self {
            entries,
            settings,
            solution: None,
        })
    }

    /// Runs the pair search and then the triple search against the target
    /// sum, storing the two products as the solution.
    ///
    /// Exhausting either enumeration without a match is a fatal error
    /// naming the subset size that failed; the pair search failing aborts
    /// before the triple search runs.
    pub fn solve(&mut self) -> Result<()> {
        let start = Instant::now();

        let pair = search::find_product(&self.entries, PAIR_SIZE, TARGET_SUM)
            .ok_or_else(|| no_combination(PAIR_SIZE))?;
        let triple = search::find_product(&self.entries, TRIPLE_SIZE, TARGET_SUM)
            .ok_or_else(|| no_combination(TRIPLE_SIZE))?;

        self.solution = Some(Solution { pair, triple });

        eprintln!("Time taken: {:.2?}", start.elapsed());

        Ok(())
    }

    /// Prints the solution line to standard output. Nothing else is ever
    /// written there.
    pub fn writeup(&self) {
        match &self.solution {
            Some(solution) => println!("{}", solution),
            None => eprintln!("No solution to write"),
        }
    }
}

fn no_combination(k: usize) -> anyhow::Error {
    anyhow!("No {}-element combination sums to {}", k, TARGET_SUM)
}
