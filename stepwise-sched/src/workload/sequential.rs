//! 顺序风格（惰性序列）工作负载。
//!
//! 工作被写成一个普通的惰性迭代器，每产出一项就完成一次输出；
//! `DriveSequence` 每轮只推进它一步，把控制权交回调度器。
//! 序列耗尽通过 `None` 表示，与正常产出的 `()` 区分开。

use std::rc::Rc;

use crate::task::continuation::{Continuation, Step, TaskError};

use super::sink::{emit_into, SharedSink, Sink};

/// 构造一个惰性、一次性、只能前进的序列，每一步输出 `items` 中的一个元素。
///
/// 在被推进之前不会产生任何输出。
pub fn print_array_sequential<T, S>(
    items: Rc<[T]>,
    sink: SharedSink<S>,
) -> impl Iterator<Item = Result<(), TaskError>>
where
    T: 'static,
    S: Sink<T> + 'static,
{
    (0..items.len()).map(move |index| emit_into(&sink, &items[index]))
}

/// 每次恢复时推进序列一步的驱动延续。
pub struct DriveSequence<I> {
    sequence: I,
    advanced: usize,
}

impl<I> DriveSequence<I>
where
    I: Iterator<Item = Result<(), TaskError>>,
{
    pub fn new(sequence: I) -> Self {
        DriveSequence {
            sequence,
            advanced: 0,
        }
    }

    /// 已经成功推进的步数
    pub fn advanced(&self) -> usize {
        self.advanced
    }
}

impl<I> Continuation for DriveSequence<I>
where
    I: Iterator<Item = Result<(), TaskError>> + 'static,
{
    fn resume(mut self: Box<Self>) -> Result<Step, TaskError> {
        match self.sequence.next() {
            Some(Ok(())) => {
                self.advanced += 1;
                Ok(Step::Continue(self))
            }
            Some(Err(err)) => Err(err),
            None => Ok(Step::Done),
        }
    }

    fn format_context(&self) -> String {
        format!("sequential-style drive after {} steps", self.advanced)
    }
}
