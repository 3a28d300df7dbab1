use std::fmt::Display;

/// 一次 `Scheduler::run` 的运行统计。
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde_support", derive(serde::Serialize))]
pub struct RunReport {
    /// 执行过的轮次（每轮出队并执行一个任务）
    pub turns: usize,
    /// 以 `Done` 结束的工作链数量
    pub chains_completed: usize,
    /// 最长工作链包含的任务数
    pub longest_chain: usize,
}

impl RunReport {
    pub(crate) fn record_turn(&mut self) {
        self.turns += 1;
    }

    pub(crate) fn record_completion(&mut self, generation: usize) {
        self.chains_completed += 1;
        self.longest_chain = self.longest_chain.max(generation + 1);
    }
}

impl Display for RunReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} turns, {} chains completed, longest chain {}",
            self.turns, self.chains_completed, self.longest_chain
        )
    }
}
