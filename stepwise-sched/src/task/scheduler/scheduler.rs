//! FIFO 协作式调度器实现：管理并逐轮推进一组任务（Task）。
//!
//! 每一轮从队首取出一个任务并执行；若执行产生后续任务，则放回队尾。
//! 多条相互独立的工作链因此一步一步地交替推进。调度器不捕获、不恢复任何错误。
use std::collections::VecDeque;

use log::{error, info, trace};

use crate::task::continuation::TaskError;

use super::{
    report::RunReport,
    task::{ChainId, Task},
};

/// 一轮调度的结果。
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Turn {
    /// 本轮执行的任务所属的工作链
    pub chain: ChainId,
    /// 本轮执行的任务在工作链中的序号
    pub generation: usize,
    /// 工作链是否在本轮结束
    pub finished: bool,
}

/// 单线程 FIFO 调度器。
///
/// - `queue`：待执行任务，队首最先执行；正在执行的任务不在队列中
/// - `next_chain`：下一个分配给新工作链的编号
pub struct Scheduler {
    queue: VecDeque<Task>,
    next_chain: u64,
}

impl Scheduler {
    pub fn new() -> Self {
        Scheduler {
            queue: VecDeque::new(),
            next_chain: 0,
        }
    }

    /// 将任务追加到队尾。
    ///
    /// 尚未属于任何工作链的任务会被分配新的 `ChainId`。
    ///
    /// # 返回值
    /// 任务所属工作链的编号
    pub fn add_task(&mut self, mut task: Task) -> ChainId {
        let chain = match task.chain() {
            Some(chain) => chain,
            None => {
                let chain = ChainId::new(self.next_chain);
                self.next_chain += 1;
                task.assign_chain(chain);
                chain
            }
        };
        trace!(
            "queued chain {} gen {} ({} pending)",
            chain,
            task.generation(),
            self.queue.len() + 1
        );
        self.queue.push_back(task);
        chain
    }

    /// 执行一轮：取出队首任务、执行、按需把后续任务放回队尾。
    ///
    /// # 返回值
    /// * `Ok(Some(turn))` - 执行了一个任务
    /// * `Ok(None)` - 队列为空，没有可执行的任务
    /// * `Err(TaskError)` - 任务执行失败；队列中其余任务保持不变
    pub fn step(&mut self) -> Result<Option<Turn>, TaskError> {
        let Some(task) = self.queue.pop_front() else {
            return Ok(None);
        };
        let chain = task.chain().unwrap_or(ChainId::new(u64::MAX));
        let generation = task.generation();

        let finished = match task.execute()? {
            Some(next) => {
                self.add_task(next);
                false
            }
            None => true,
        };

        Ok(Some(Turn {
            chain,
            generation,
            finished,
        }))
    }

    /// 运行直到队列为空。
    ///
    /// 队列为空时立即返回。任一任务失败时，剩余任务全部丢弃不再执行，
    /// 同一个错误被返回给调用者。
    pub fn run(&mut self) -> Result<RunReport, TaskError> {
        let mut report = RunReport::default();
        loop {
            match self.step() {
                Ok(Some(turn)) => {
                    report.record_turn();
                    if turn.finished {
                        report.record_completion(turn.generation);
                    }
                }
                Ok(None) => break,
                Err(err) => {
                    let abandoned = self.queue.len();
                    self.queue.clear();
                    error!(
                        "run aborted after {} turns, {} queued tasks abandoned",
                        report.turns + 1,
                        abandoned
                    );
                    return Err(err);
                }
            }
        }
        info!("run finished: {}", report);
        Ok(report)
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// 格式化当前队列，队首在前，便于调试。
    pub fn format_context(&self) -> String {
        if self.queue.is_empty() {
            return "Scheduler: No pending tasks.".to_string();
        }

        self.queue
            .iter()
            .enumerate()
            .map(|(index, task)| format!("[{}] {}", index, task.format_context()))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Default for Scheduler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::continuation::{from_fn, Step};

    #[test]
    fn test_run_on_empty_queue_is_noop() {
        let mut scheduler = Scheduler::new();
        assert_eq!(scheduler.run().unwrap(), RunReport::default());
        assert_eq!(scheduler.run().unwrap(), RunReport::default());
        assert!(scheduler.is_empty());
    }

    #[test]
    fn test_step_on_empty_queue() {
        let mut scheduler = Scheduler::new();
        assert_eq!(scheduler.step().unwrap(), None);
    }

    #[test]
    fn test_chain_ids_are_assigned_in_submission_order() {
        let mut scheduler = Scheduler::new();
        let a = scheduler.add_task(Task::from_fn(|| Ok(Step::Done)));
        let b = scheduler.add_task(Task::from_fn(|| Ok(Step::Done)));
        assert_eq!(a, ChainId::new(0));
        assert_eq!(b, ChainId::new(1));
        assert_eq!(scheduler.len(), 2);
    }

    #[test]
    fn test_step_requeues_follow_up() {
        let mut scheduler = Scheduler::new();
        let chain = scheduler.add_task(Task::from_fn(|| {
            Ok(Step::next(from_fn(|| Ok(Step::Done))))
        }));

        let turn = scheduler.step().unwrap().unwrap();
        assert_eq!(
            turn,
            Turn {
                chain,
                generation: 0,
                finished: false
            }
        );
        assert_eq!(scheduler.len(), 1);

        let turn = scheduler.step().unwrap().unwrap();
        assert!(turn.finished);
        assert_eq!(turn.generation, 1);
        assert!(scheduler.is_empty());
    }

    #[test]
    fn test_report_counts() {
        let mut scheduler = Scheduler::new();
        scheduler.add_task(Task::from_fn(|| {
            Ok(Step::next(from_fn(|| Ok(Step::next(from_fn(|| Ok(Step::Done)))))))
        }));
        scheduler.add_task(Task::from_fn(|| Ok(Step::Done)));

        let report = scheduler.run().unwrap();
        assert_eq!(
            report,
            RunReport {
                turns: 4,
                chains_completed: 2,
                longest_chain: 3,
            }
        );
        assert_eq!(report.to_string(), "4 turns, 2 chains completed, longest chain 3");
    }

    #[test]
    fn test_format_context() {
        let mut scheduler = Scheduler::new();
        assert_eq!(scheduler.format_context(), "Scheduler: No pending tasks.");
        scheduler.add_task(Task::from_fn(|| Ok(Step::Done)));
        assert!(scheduler.format_context().starts_with("[0] chain #0 gen 0"));
    }
}
