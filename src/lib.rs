//! bidipad - 双向（RTL/LTR）富文本编辑控制器
//!
//! 模块结构：
//! - core: 基础定义（格式化命令、书写方向、服务标记）
//! - kernel: 无头编辑核心（state/action/effect + 控制器 + 服务宿主）
//! - surface: 内存版可编辑表面（无头宿主、测试替身）

pub mod core;
pub mod kernel;
pub mod surface;
