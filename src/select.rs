use rand::{rngs::StdRng, seq::SliceRandom, Rng, SeedableRng};
use stepwise_sched::ExecutionMode;

/// How the driver picks the execution mode for one run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModeChoice {
    Fixed(ExecutionMode),
    /// Uniform pick between both modes; a seed makes the pick reproducible
    Random { seed: Option<u64> },
}

impl ModeChoice {
    pub fn resolve(self) -> ExecutionMode {
        match self {
            ModeChoice::Fixed(mode) => mode,
            ModeChoice::Random { seed: Some(seed) } => pick(&mut StdRng::seed_from_u64(seed)),
            ModeChoice::Random { seed: None } => pick(&mut rand::thread_rng()),
        }
    }
}

fn pick<R: Rng + ?Sized>(rng: &mut R) -> ExecutionMode {
    // ALL is non-empty, the fallback never triggers
    *ExecutionMode::ALL
        .choose(rng)
        .unwrap_or(&ExecutionMode::EventDriven)
}
