//! 事件驱动（显式延续传递）工作负载。
//!
//! 循环被拆成一串延续：每个 `PrintArray` 只输出一个元素，并返回携带
//! `index + 1` 的新延续。循环状态保存在延续自身，而不是共享的可变变量中。

use std::rc::Rc;

use crate::{
    task::continuation::{Continuation, Step, TaskError},
    utils::format_summary,
};

use super::sink::{emit_into, SharedSink, Sink};

/// 打印 `items[index..]` 的延续。
pub struct PrintArray<T, S> {
    items: Rc<[T]>,
    index: usize,
    sink: SharedSink<S>,
}

impl<T, S> PrintArray<T, S> {
    pub fn new(items: Rc<[T]>, index: usize, sink: SharedSink<S>) -> Self {
        PrintArray { items, index, sink }
    }

    pub fn index(&self) -> usize {
        self.index
    }
}

impl<T, S> Continuation for PrintArray<T, S>
where
    T: std::fmt::Debug + 'static,
    S: Sink<T> + 'static,
{
    fn resume(self: Box<Self>) -> Result<Step, TaskError> {
        let Some(value) = self.items.get(self.index) else {
            return Ok(Step::Done);
        };
        emit_into(&self.sink, value)?;
        Ok(Step::next(PrintArray {
            items: Rc::clone(&self.items),
            index: self.index + 1,
            sink: Rc::clone(&self.sink),
        }))
    }

    fn format_context(&self) -> String {
        format!(
            "event-driven print at {} / {} of {}",
            self.index,
            self.items.len(),
            format_summary(&self.items)
        )
    }
}
