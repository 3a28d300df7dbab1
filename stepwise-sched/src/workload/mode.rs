use std::{fmt::Display, str::FromStr};

/// 驱动同一工作负载的两种方式，在一次运行中保持不变。
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde_support",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "kebab-case")
)]
pub enum ExecutionMode {
    /// 显式延续传递：每一步返回携带下一个下标的延续
    EventDriven,
    /// 惰性序列：驱动延续每轮推进序列一步
    SequentialStyle,
}

impl ExecutionMode {
    pub const ALL: [ExecutionMode; 2] = [ExecutionMode::EventDriven, ExecutionMode::SequentialStyle];

    pub fn as_str(self) -> &'static str {
        match self {
            ExecutionMode::EventDriven => "event-driven",
            ExecutionMode::SequentialStyle => "sequential-style",
        }
    }
}

impl Display for ExecutionMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownModeError(pub String);

impl Display for UnknownModeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "unknown execution mode '{}', expected one of: event-driven, sequential-style",
            self.0
        )
    }
}

impl std::error::Error for UnknownModeError {}

impl FromStr for ExecutionMode {
    type Err = UnknownModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ExecutionMode::ALL
            .into_iter()
            .find(|mode| mode.as_str() == s)
            .ok_or_else(|| UnknownModeError(s.to_string()))
    }
}
