use super::*;

#[test]
fn test_command_names() {
    assert_eq!(FormatCommand::Bold.name(), "bold");
    assert_eq!(FormatCommand::AlignCenter.name(), "align-center");
    assert_eq!(FormatCommand::AlignRight.host_name(), "justifyRight");
    assert_eq!(FormatCommand::Underline.to_string(), "underline");
}

#[test]
fn test_from_name_accepts_toolbar_and_host_names() {
    for cmd in FormatCommand::ALL {
        assert_eq!(FormatCommand::from_name(cmd.name()), Some(cmd));
        assert_eq!(FormatCommand::from_name(cmd.host_name()), Some(cmd));
    }
    assert_eq!(FormatCommand::from_name(" italic "), Some(FormatCommand::Italic));
}

#[test]
fn test_from_name_rejects_unknown() {
    assert_eq!(FormatCommand::from_name("strikeThrough"), None);
    assert_eq!(FormatCommand::from_name(""), None);
    assert_eq!(FormatCommand::from_name("Bold"), None);
}

#[test]
fn test_inline_and_alignment() {
    assert!(FormatCommand::Bold.is_inline());
    assert!(!FormatCommand::AlignLeft.is_inline());
    assert_eq!(FormatCommand::AlignLeft.alignment(), Some(TextAlign::Left));
    assert_eq!(FormatCommand::Italic.alignment(), None);
    assert!(FormatCommand::ALL.iter().all(|cmd| !cmd.requires_value()));
}
