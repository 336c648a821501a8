//! 核心定义
//!
//! - Command: 工具栏格式化命令
//! - Direction / TextAlign: 书写方向与对齐
//! - Service: 宿主服务标记

pub mod command;
pub mod direction;
pub mod service;

pub use command::FormatCommand;
pub use direction::{Direction, TextAlign};
pub use service::Service;
