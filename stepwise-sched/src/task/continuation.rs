use std::fmt::{Debug, Display};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TaskError {
    StepError(String),
    EmitError(String),
    DetailedError(String),
}

impl Display for TaskError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TaskError::StepError(msg) => write!(f, "Step Error: {}", msg),
            TaskError::EmitError(msg) => write!(f, "Emit Error: {}", msg),
            TaskError::DetailedError(msg) => write!(f, "Detailed Error: {}", msg),
        }
    }
}

impl std::error::Error for TaskError {}

impl From<std::io::Error> for TaskError {
    fn from(err: std::io::Error) -> Self {
        TaskError::EmitError(err.to_string())
    }
}

/// 延续被恢复一次之后的结果。
///
/// 由每个延续的实现静态决定，不在运行时推断返回值是否"可调用"。
pub enum Step {
    /// 还有剩余工作，调度器应把该延续包装成新任务放回队尾
    Continue(Box<dyn Continuation>),
    /// 这条工作链已经结束
    Done,
}

impl Step {
    /// 以具体类型的延续构造 `Step::Continue`。
    pub fn next<C: Continuation + 'static>(continuation: C) -> Self {
        Step::Continue(Box::new(continuation))
    }

    pub fn is_done(&self) -> bool {
        matches!(self, Step::Done)
    }
}

impl Debug for Step {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Step::Continue(next) => write!(f, "Continue({})", next.format_context()),
            Step::Done => write!(f, "Done"),
        }
    }
}

/// 零参数的延迟工作单元。
///
/// `resume` 按值消费 `self`，因此同一个延续最多只能被恢复一次；
/// 需要继续执行时由实现返回一个新的延续（可以是自身）。
pub trait Continuation {
    fn resume(self: Box<Self>) -> Result<Step, TaskError>;

    fn format_context(&self) -> String {
        "<continuation>".to_string()
    }
}

/// 由普通闭包构成的延续。
pub struct FnContinuation<F> {
    func: F,
}

impl<F> Continuation for FnContinuation<F>
where
    F: FnOnce() -> Result<Step, TaskError>,
{
    fn resume(self: Box<Self>) -> Result<Step, TaskError> {
        (self.func)()
    }

    fn format_context(&self) -> String {
        format!("closure {}", std::any::type_name::<F>())
    }
}

/// 把闭包包装为延续。
pub fn from_fn<F>(func: F) -> FnContinuation<F>
where
    F: FnOnce() -> Result<Step, TaskError>,
{
    FnContinuation { func }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{cell::Cell, rc::Rc};

    #[test]
    fn test_closure_resumes_once() {
        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);
        let continuation: Box<dyn Continuation> = Box::new(from_fn(move || {
            counter.set(counter.get() + 1);
            Ok(Step::Done)
        }));

        let step = continuation.resume().unwrap();
        assert!(step.is_done());
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_closure_can_chain() {
        let first = Box::new(from_fn(|| Ok(Step::next(from_fn(|| Ok(Step::Done))))));
        let Step::Continue(second) = first.resume().unwrap() else {
            panic!("expected a follow-up continuation");
        };
        assert!(second.resume().unwrap().is_done());
    }

    #[test]
    fn test_error_display() {
        let err = TaskError::StepError("boom".to_string());
        assert_eq!(err.to_string(), "Step Error: boom");

        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let err: TaskError = io.into();
        assert!(matches!(err, TaskError::EmitError(ref msg) if msg == "pipe closed"));
    }

    #[test]
    fn test_step_debug() {
        assert_eq!(format!("{:?}", Step::Done), "Done");
        let step = Step::next(from_fn(|| Ok(Step::Done)));
        assert!(format!("{:?}", step).starts_with("Continue(closure"));
    }
}
