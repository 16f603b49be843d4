use crate::invoke::ModelInvoker;

pub mod cli;
pub mod invoke;
pub mod prompt;
pub mod session;

pub type InvokerBox = Box<dyn ModelInvoker>;
