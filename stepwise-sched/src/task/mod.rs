//! stepwise 任务子系统模块。
//!
//! - `continuation`：定义可恢复的延续（Continuation）trait、单步结果与错误类型。
//! - `scheduler`：任务包装、FIFO 调度器与运行统计。

pub mod continuation;
pub mod scheduler;
