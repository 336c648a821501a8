//! 命令系统：工具栏格式化命令
//!
//! 命令只描述语义，具体排版由宿主表面原生执行。

use super::direction::TextAlign;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormatCommand {
    // ==================== 行内样式 ====================
    Bold,
    Italic,
    Underline,

    // ==================== 段落对齐 ====================
    AlignLeft,
    AlignCenter,
    AlignRight,
}

impl FormatCommand {
    pub const ALL: [FormatCommand; 6] = [
        FormatCommand::Bold,
        FormatCommand::Italic,
        FormatCommand::Underline,
        FormatCommand::AlignLeft,
        FormatCommand::AlignCenter,
        FormatCommand::AlignRight,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            FormatCommand::Bold => "bold",
            FormatCommand::Italic => "italic",
            FormatCommand::Underline => "underline",
            FormatCommand::AlignLeft => "align-left",
            FormatCommand::AlignCenter => "align-center",
            FormatCommand::AlignRight => "align-right",
        }
    }

    /// Name understood by the host's native formatting primitive.
    pub fn host_name(&self) -> &'static str {
        match self {
            FormatCommand::Bold => "bold",
            FormatCommand::Italic => "italic",
            FormatCommand::Underline => "underline",
            FormatCommand::AlignLeft => "justifyLeft",
            FormatCommand::AlignCenter => "justifyCenter",
            FormatCommand::AlignRight => "justifyRight",
        }
    }

    /// Accepts both the toolbar name and the host name.
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::ALL
            .into_iter()
            .find(|cmd| cmd.name() == name || cmd.host_name() == name)
    }

    /// None of the fixed commands take a parameter.
    pub fn requires_value(&self) -> bool {
        false
    }

    pub fn is_inline(&self) -> bool {
        matches!(
            self,
            FormatCommand::Bold | FormatCommand::Italic | FormatCommand::Underline
        )
    }

    pub fn alignment(&self) -> Option<TextAlign> {
        match self {
            FormatCommand::AlignLeft => Some(TextAlign::Left),
            FormatCommand::AlignCenter => Some(TextAlign::Center),
            FormatCommand::AlignRight => Some(TextAlign::Right),
            _ => None,
        }
    }
}

impl std::fmt::Display for FormatCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/core/command.rs"]
mod tests;
