use std::{
    cell::RefCell,
    fmt::Display,
    io::Write,
    rc::Rc,
};

use crate::task::continuation::TaskError;

/// 工作负载输出元素的去处。
pub trait Sink<T> {
    fn emit(&mut self, value: &T) -> Result<(), TaskError>;
}

/// 在多个延续之间共享的输出端。调度器是单线程的，所以用 `Rc<RefCell<_>>`。
pub type SharedSink<S> = Rc<RefCell<S>>;

pub fn shared<S>(sink: S) -> SharedSink<S> {
    Rc::new(RefCell::new(sink))
}

/// 向共享输出端写入一个元素。
pub(crate) fn emit_into<T, S: Sink<T>>(sink: &SharedSink<S>, value: &T) -> Result<(), TaskError> {
    sink.try_borrow_mut()
        .map_err(|_| TaskError::DetailedError("Sink is already borrowed".to_string()))?
        .emit(value)
}

/// 把每个元素按 `Display` 写成一行。
pub struct WriterSink<W: Write> {
    writer: W,
    emitted: usize,
}

impl<W: Write> WriterSink<W> {
    pub fn new(writer: W) -> Self {
        WriterSink { writer, emitted: 0 }
    }

    pub fn emitted(&self) -> usize {
        self.emitted
    }

    pub fn flush(&mut self) -> Result<(), TaskError> {
        self.writer.flush().map_err(TaskError::from)
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<T: Display, W: Write> Sink<T> for WriterSink<W> {
    fn emit(&mut self, value: &T) -> Result<(), TaskError> {
        writeln!(self.writer, "{}", value)?;
        self.emitted += 1;
        Ok(())
    }
}

/// 记录所有输出元素的副本。
#[derive(Debug)]
pub struct Recorder<T> {
    values: Vec<T>,
}

impl<T> Recorder<T> {
    pub fn new() -> Self {
        Recorder { values: Vec::new() }
    }

    pub fn values(&self) -> &[T] {
        &self.values
    }

    pub fn into_values(self) -> Vec<T> {
        self.values
    }
}

impl<T> Default for Recorder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Sink<T> for Recorder<T> {
    fn emit(&mut self, value: &T) -> Result<(), TaskError> {
        self.values.push(value.clone());
        Ok(())
    }
}
