//! stepwise 工作负载模块：用两种等价方式打印一个序列的每个元素。
//!
//! - `mode`：执行方式枚举 `ExecutionMode`
//! - `event_driven`：显式延续传递，状态由延续携带
//! - `sequential`：惰性序列，由驱动延续逐步推进
//! - `sink`：元素输出端
//!
//! 两种方式对调度器来说都是一条以 `Done` 结尾的延续链，每个元素一轮，
//! 最后再多一轮返回 `Done`。

pub mod event_driven;
pub mod mode;
pub mod sequential;
pub mod sink;


use std::rc::Rc;

use crate::task::scheduler::task::Task;

use self::{
    event_driven::PrintArray,
    mode::ExecutionMode,
    sequential::{print_array_sequential, DriveSequence},
    sink::{SharedSink, Sink},
};

/// 为选定的执行方式构造工作链的初始任务。
pub fn initial_task<T, S>(mode: ExecutionMode, items: Rc<[T]>, sink: SharedSink<S>) -> Task
where
    T: std::fmt::Debug + 'static,
    S: Sink<T> + 'static,
{
    match mode {
        ExecutionMode::EventDriven => Task::new(PrintArray::new(items, 0, sink)),
        ExecutionMode::SequentialStyle => {
            Task::new(DriveSequence::new(print_array_sequential(items, sink)))
        }
    }
}
