//! stepwise 调度器模块。
//!
//! - `task`：包装单个延续的任务，以及标识同一条工作链的 `ChainId`。
//! - `scheduler`：单线程协作式 FIFO 调度器，每轮执行一个任务。
//! - `report`：一次 `run` 结束后的运行统计。

pub mod report;
pub mod scheduler;
pub mod task;
