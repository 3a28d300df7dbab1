use std::{fmt::Debug, rc::Rc};

use log::info;
use stepwise_sched::{
    initial_task,
    workload::sink::{SharedSink, Sink},
    ExecutionMode, RunReport, Scheduler, TaskError,
};

/// 构造一个初始任务、提交给新的调度器并运行到结束。
pub fn run_workload<T, S>(
    mode: ExecutionMode,
    items: Vec<T>,
    sink: SharedSink<S>,
) -> Result<RunReport, TaskError>
where
    T: Debug + 'static,
    S: Sink<T> + 'static,
{
    info!("running {} items in {} mode", items.len(), mode);
    let mut scheduler = Scheduler::new();
    scheduler.add_task(initial_task(mode, Rc::from(items), sink));
    scheduler.run()
}
