use std::fmt::Display;

use log::{debug, error};

use crate::task::continuation::{from_fn, Continuation, Step, TaskError};

/// 标识一条工作链（同一个初始任务及其所有后续任务）。
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ChainId(u64);

impl ChainId {
    pub fn new(id: u64) -> Self {
        ChainId(id)
    }

    #[inline(always)]
    pub fn get(self) -> u64 {
        self.0
    }
}

impl Display for ChainId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// 调度器可见的任务，持有且仅持有一个延续。
///
/// - `chain`：所属工作链，首次提交给调度器时分配
/// - `generation`：在工作链中的序号，初始任务为 0
pub struct Task {
    continuation: Box<dyn Continuation>,
    chain: Option<ChainId>,
    generation: usize,
}

impl Task {
    pub fn new<C: Continuation + 'static>(continuation: C) -> Self {
        Self::from_boxed(Box::new(continuation))
    }

    pub fn from_boxed(continuation: Box<dyn Continuation>) -> Self {
        Task {
            continuation,
            chain: None,
            generation: 0,
        }
    }

    pub fn from_fn<F>(func: F) -> Self
    where
        F: FnOnce() -> Result<Step, TaskError> + 'static,
    {
        Self::new(from_fn(func))
    }

    #[inline(always)]
    pub fn chain(&self) -> Option<ChainId> {
        self.chain
    }

    #[inline(always)]
    pub fn generation(&self) -> usize {
        self.generation
    }

    pub(crate) fn assign_chain(&mut self, chain: ChainId) {
        self.chain = Some(chain);
    }

    /// 恢复所包装的延续，恰好一次。
    ///
    /// # 返回值
    /// * `Ok(Some(task))` - 还有剩余工作；新任务属于同一工作链，`generation` 加一
    /// * `Ok(None)` - 工作链已完成
    /// * `Err(TaskError)` - 延续执行失败，错误原样向上传递
    pub fn execute(self) -> Result<Option<Task>, TaskError> {
        let label = self.label();
        let Task {
            continuation,
            chain,
            generation,
        } = self;

        match continuation.resume() {
            Ok(Step::Continue(next)) => {
                debug!("{label}: continue");
                Ok(Some(Task {
                    continuation: next,
                    chain,
                    generation: generation + 1,
                }))
            }
            Ok(Step::Done) => {
                debug!("{label}: done");
                Ok(None)
            }
            Err(err) => {
                error!("{label}: failed: {err}");
                Err(err)
            }
        }
    }

    fn label(&self) -> String {
        match self.chain {
            Some(chain) => format!("chain {} gen {}", chain, self.generation),
            None => format!("unqueued task gen {}", self.generation),
        }
    }

    pub fn format_context(&self) -> String {
        format!("{}: {}", self.label(), self.continuation.format_context())
    }
}
