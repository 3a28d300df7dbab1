pub mod task;
pub mod workload;
pub mod utils;

pub use task::continuation::{Continuation, Step, TaskError};
pub use task::scheduler::{report::RunReport, scheduler::Scheduler, task::{ChainId, Task}};
pub use workload::{initial_task, mode::ExecutionMode};
