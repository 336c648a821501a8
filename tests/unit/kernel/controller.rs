use super::*;
use crate::core::TextAlign;
use crate::kernel::locale::{LTR_PLACEHOLDER, RTL_PLACEHOLDER};
use crate::surface::MemorySurface;
use std::time::{Duration, Instant};

fn new_controller() -> EditorController<MemorySurface> {
    EditorController::new(MemorySurface::new(), EditorConfig::default())
}

fn type_text(controller: &mut EditorController<MemorySurface>, text: &str) {
    if !controller.surface().has_focus() {
        controller.surface_mut().focus();
        controller.dispatch(Action::FocusGained);
    }
    controller.surface_mut().type_text(text);
    controller.dispatch(Action::ContentChanged);
    controller.dispatch(Action::SelectionChanged);
}

fn blur(controller: &mut EditorController<MemorySurface>) {
    controller.surface_mut().blur();
    controller.dispatch(Action::FocusLost);
}

fn assert_invariants(controller: &EditorController<MemorySurface>) {
    let state = controller.state();
    if state.is_placeholder_shown {
        assert_eq!(state.word_count, 0);
        assert_eq!(state.char_count, 0);
        assert!(state.selection_snapshot.is_empty());
    } else {
        assert_eq!(
            state.counts(),
            TextCounts::measure(controller.surface().text())
        );
    }
    assert_eq!(*controller.surface().presentation(), state.presentation());
}

#[test]
fn new_session_presents_ltr_placeholder() {
    let controller = new_controller();
    let state = controller.state();
    assert_eq!(state.direction, Direction::Ltr);
    assert!(state.is_placeholder_shown);
    assert_eq!(controller.surface().rendered(), LTR_PLACEHOLDER);
    assert!(controller.surface().presentation().muted);
    assert!(controller.surface().text().is_empty());
    assert_invariants(&controller);
}

#[test]
fn typing_hello_world_counts_words_and_chars() {
    let mut controller = new_controller();
    type_text(&mut controller, "hello world");

    assert!(!controller.state().is_placeholder_shown);
    assert_eq!(controller.state().word_count, 2);
    assert_eq!(controller.state().char_count, 11);
    assert_invariants(&controller);
}

#[test]
fn update_counts_tracks_every_edit() {
    let mut controller = new_controller();
    type_text(&mut controller, "  spaced   out  ");
    assert_eq!(controller.state().word_count, 2);
    assert_eq!(controller.state().char_count, 16);

    controller.surface_mut().select_all();
    controller.surface_mut().erase(1);
    let result = controller.dispatch(Action::ContentChanged);
    assert!(result.state_changed);
    assert_eq!(controller.state().counts(), TextCounts::ZERO);
    assert!(!controller.state().is_placeholder_shown);
    assert_invariants(&controller);
}

#[test]
fn toggle_while_empty_and_unfocused_shows_rtl_placeholder() {
    let mut controller = new_controller();
    controller.dispatch(Action::ToggleDirection);

    let state = controller.state();
    assert_eq!(state.direction, Direction::Rtl);
    assert!(state.is_placeholder_shown);
    assert_eq!(controller.surface().rendered(), RTL_PLACEHOLDER);
    assert_eq!(controller.surface().presentation().align, TextAlign::Right);
    assert_eq!(state.word_count, 0);
    assert_eq!(state.char_count, 0);
    assert!(controller.surface().text().is_empty());
    assert_invariants(&controller);
}

#[test]
fn double_toggle_restores_presentation_and_leaves_counts() {
    let mut controller = new_controller();
    type_text(&mut controller, "hello world");
    controller.surface_mut().select(6, 11);
    controller.dispatch(Action::SelectionChanged);

    let state_before = controller.state().clone();
    let presentation_before = *controller.surface().presentation();

    controller.toggle_direction();
    assert_eq!(controller.state().direction, Direction::Rtl);
    assert_eq!(controller.surface().presentation().align, TextAlign::Right);
    assert_eq!(controller.surface().text(), "hello world");
    assert_eq!(controller.state().counts(), state_before.counts());
    assert_eq!(controller.state().selection_snapshot, "world");

    controller.toggle_direction();
    assert_eq!(*controller.state(), state_before);
    assert_eq!(*controller.surface().presentation(), presentation_before);
}

#[test]
fn toggle_preserves_caret_offset_while_editing() {
    let mut controller = new_controller();
    type_text(&mut controller, "abc def");
    controller.surface_mut().set_caret_offset(3);

    controller.toggle_direction();
    assert_eq!(controller.surface().caret_offset(), Some(3));
    assert_eq!(controller.surface().text(), "abc def");
}

#[test]
fn toggle_snaps_caret_to_grapheme_boundary() {
    let mut controller = new_controller();
    type_text(&mut controller, "ae\u{0301}b");
    controller.surface_mut().set_caret_offset(2);

    controller.toggle_direction();
    assert_eq!(controller.surface().caret_offset(), Some(1));
}

#[test]
fn selecting_world_snapshots_selection() {
    let mut controller = new_controller();
    type_text(&mut controller, "hello world");
    controller.surface_mut().select(6, 11);
    let result = controller.dispatch(Action::SelectionChanged);

    assert!(result.state_changed);
    assert_eq!(controller.state().selection_snapshot, "world");
    assert_eq!(controller.state().selection_snapshot.chars().count(), 5);
    assert_eq!(
        controller.status_bar().selected.as_deref(),
        Some("5 selected")
    );

    controller.surface_mut().clear_selection();
    controller.dispatch(Action::SelectionChanged);
    assert!(controller.state().selection_snapshot.is_empty());
    assert_eq!(controller.status_bar().selected, None);
}

#[test]
fn bold_dispatches_to_surface_and_keeps_counts() {
    let mut controller = new_controller();
    type_text(&mut controller, "hello world");
    controller.surface_mut().select(0, 5);
    controller.dispatch(Action::SelectionChanged);
    let counts_before = controller.state().counts();

    let result = controller.dispatch(Action::ApplyFormat {
        command: "bold".to_string(),
        value: None,
    });

    assert!(result.effects.is_empty());
    assert_eq!(controller.surface().dispatched(), ["bold".to_string()]);
    assert_eq!(controller.surface().spans().len(), 1);
    assert_eq!(controller.surface().spans()[0].range, 0..5);
    assert_eq!(controller.state().counts(), counts_before);
    assert_eq!(controller.state().selection_snapshot, "hello");
    assert!(controller.surface().has_focus());
}

#[test]
fn alignment_commands_use_host_names() {
    let mut controller = new_controller();
    type_text(&mut controller, "centered");

    assert!(controller.apply_format("align-center", None));
    assert!(controller.apply_format("justifyRight", None));
    assert_eq!(
        controller.surface().dispatched(),
        ["justifyCenter".to_string(), "justifyRight".to_string()]
    );
    assert_eq!(controller.surface().block_align(), Some(TextAlign::Right));
}

#[test]
fn unknown_format_command_is_a_no_op() {
    let mut controller = new_controller();
    type_text(&mut controller, "hello");
    let before = controller.state().clone();

    assert!(!controller.apply_format("strikeThrough", Some("x")));
    let result = controller.dispatch(Action::ApplyFormat {
        command: "fontSize".to_string(),
        value: Some("7".to_string()),
    });

    assert!(!result.state_changed);
    assert!(result.effects.is_empty());
    assert!(controller.surface().dispatched().is_empty());
    assert_eq!(*controller.state(), before);
}

#[test]
fn format_from_placeholder_returns_focus_and_hides_placeholder() {
    let mut controller = new_controller();
    assert!(!controller.surface().has_focus());

    controller.apply_format("italic", None);

    assert!(controller.surface().has_focus());
    assert!(!controller.state().is_placeholder_shown);
    assert_eq!(controller.surface().rendered(), "");
    assert_invariants(&controller);
}

#[test]
fn focus_round_trip_restores_placeholder() {
    let mut controller = new_controller();
    controller.toggle_direction();
    let state_before = controller.state().clone();
    let presentation_before = *controller.surface().presentation();

    controller.surface_mut().focus();
    assert!(controller.dispatch(Action::FocusGained).state_changed);
    assert!(!controller.state().is_placeholder_shown);
    assert!(!controller.surface().presentation().muted);
    assert_eq!(controller.surface().rendered(), "");

    blur(&mut controller);
    assert_eq!(*controller.state(), state_before);
    assert_eq!(*controller.surface().presentation(), presentation_before);
    assert_eq!(controller.surface().rendered(), RTL_PLACEHOLDER);
}

#[test]
fn focus_with_real_content_is_a_no_op() {
    let mut controller = new_controller();
    type_text(&mut controller, "draft");
    blur(&mut controller);
    let before = controller.state().clone();

    controller.surface_mut().focus();
    let result = controller.dispatch(Action::FocusGained);

    assert!(!result.state_changed);
    assert_eq!(*controller.state(), before);
    assert_eq!(controller.surface().text(), "draft");
}

#[test]
fn content_equal_to_placeholder_is_kept_and_counted() {
    let mut controller = new_controller();
    type_text(&mut controller, LTR_PLACEHOLDER);
    blur(&mut controller);

    controller.surface_mut().focus();
    controller.dispatch(Action::FocusGained);

    assert_eq!(controller.surface().text(), LTR_PLACEHOLDER);
    assert!(!controller.state().is_placeholder_shown);
    assert_eq!(controller.state().word_count, 3);
    assert_eq!(controller.state().char_count, LTR_PLACEHOLDER.chars().count());
}

#[test]
fn blur_with_whitespace_clears_and_shows_placeholder() {
    let mut controller = new_controller();
    type_text(&mut controller, "   ");
    assert_eq!(controller.state().char_count, 3);

    blur(&mut controller);

    assert!(controller.state().is_placeholder_shown);
    assert!(controller.surface().text().is_empty());
    assert_eq!(controller.surface().rendered(), LTR_PLACEHOLDER);
    assert_invariants(&controller);
}

#[test]
fn blur_with_only_byte_order_mark_shows_placeholder() {
    let mut controller = new_controller();
    type_text(&mut controller, "\u{FEFF}");
    assert_eq!(controller.state().word_count, 0);
    assert_eq!(controller.state().char_count, 1);

    blur(&mut controller);

    assert!(controller.state().is_placeholder_shown);
    assert!(controller.surface().text().is_empty());
    assert_invariants(&controller);
}

#[test]
fn blur_keeps_next_line_content() {
    let mut controller = new_controller();
    type_text(&mut controller, "\u{0085}");
    assert_eq!(controller.state().word_count, 1);

    blur(&mut controller);

    assert!(!controller.state().is_placeholder_shown);
    assert_eq!(controller.surface().text(), "\u{0085}");
    assert_invariants(&controller);
}

#[test]
fn emoji_count_as_two_characters() {
    let mut controller = new_controller();
    type_text(&mut controller, "hi 😀");
    assert_eq!(controller.state().word_count, 2);
    assert_eq!(controller.state().char_count, 5);

    controller.surface_mut().select(3, 4);
    controller.dispatch(Action::SelectionChanged);
    assert_eq!(controller.state().selection_snapshot, "😀");
    assert_eq!(
        controller.status_bar().selected.as_deref(),
        Some("2 selected")
    );
}

#[test]
fn content_change_while_placeholder_shown_hides_placeholder() {
    let mut controller = new_controller();
    controller.surface_mut().type_text("pasted");
    let result = controller.dispatch(Action::ContentChanged);

    assert!(result.state_changed);
    assert!(!controller.state().is_placeholder_shown);
    assert_eq!(controller.state().char_count, 6);
    assert_invariants(&controller);
}

#[test]
fn copy_payload_is_real_content() {
    let mut controller = new_controller();
    type_text(&mut controller, "hi there");

    let result = controller.dispatch(Action::CopyToClipboard);
    match result.effects.as_slice() {
        [Effect::WriteClipboard { text, .. }] => assert_eq!(text, "hi there"),
        other => panic!("unexpected effects: {:?}", other),
    }
    assert!(!result.state_changed);
}

#[test]
fn payloads_never_contain_placeholder() {
    let mut controller = new_controller();
    controller.toggle_direction();
    assert!(controller.state().is_placeholder_shown);

    match controller.copy_to_clipboard() {
        Effect::WriteClipboard { text, .. } => assert!(text.is_empty()),
        other => panic!("unexpected effect: {:?}", other),
    }
    match controller.export_as_file() {
        Effect::OfferDownload { payload, .. } => {
            assert!(payload.content.is_empty());
            assert_eq!(payload.file_name, "document.txt");
        }
        other => panic!("unexpected effect: {:?}", other),
    }
}

#[test]
fn export_hi_requests_plain_text_download() {
    let mut controller = new_controller();
    type_text(&mut controller, "hi");
    let before = controller.state().clone();

    let result = controller.dispatch(Action::ExportAsFile);
    match result.effects.as_slice() {
        [Effect::OfferDownload { payload, .. }] => {
            assert_eq!(payload, &ExportPayload::plain_text("document.txt", "hi"));
            assert_eq!(payload.mime_type, "text/plain");
        }
        other => panic!("unexpected effects: {:?}", other),
    }
    assert_eq!(*controller.state(), before);
}

#[test]
fn export_uses_configured_file_name() {
    let config = EditorConfig {
        export_file_name: "notes.txt".to_string(),
        ..EditorConfig::default()
    };
    let mut controller = EditorController::new(MemorySurface::new(), config);
    match controller.export_as_file() {
        Effect::OfferDownload { payload, .. } => assert_eq!(payload.file_name, "notes.txt"),
        other => panic!("unexpected effect: {:?}", other),
    }
}

#[test]
fn concurrent_requests_get_distinct_ids() {
    let mut controller = new_controller();
    let a = controller.export_as_file().request();
    let b = controller.export_as_file().request();
    let c = controller.copy_to_clipboard().request();
    assert!(a < b && b < c);
}

#[test]
fn host_completion_raises_notification_without_touching_state() {
    let mut controller = new_controller();
    type_text(&mut controller, "hi");
    let before = controller.state().clone();
    let request = controller.export_as_file().request();

    controller.dispatch(Action::HostServiceFinished {
        request,
        op: HostOp::Download {
            file_name: "document.txt".to_string(),
        },
        result: Ok(()),
    });

    let latest = controller.notifications().latest().cloned().unwrap();
    assert_eq!(latest.kind, NotificationKind::Success);
    assert_eq!(latest.title, "File exported");
    assert_eq!(latest.description, "Text has been exported as document.txt");
    assert_eq!(*controller.state(), before);
}

#[test]
fn clipboard_failure_is_reported_not_fatal() {
    let mut controller = new_controller();
    type_text(&mut controller, "hi");
    let before = controller.state().clone();
    let request = controller.copy_to_clipboard().request();

    controller.dispatch(Action::HostServiceFinished {
        request,
        op: HostOp::Clipboard,
        result: Err(HostServiceError::NotAvailable),
    });

    let latest = controller.notifications().latest().cloned().unwrap();
    assert_eq!(latest.kind, NotificationKind::Failure);
    assert_eq!(latest.title, "Copy failed");
    assert_eq!(latest.description, "host service not available");
    assert_eq!(*controller.state(), before);
}

#[test]
fn tick_expires_notifications() {
    let mut controller = new_controller();
    controller.dispatch(Action::HostServiceFinished {
        request: RequestId(1),
        op: HostOp::Clipboard,
        result: Ok(()),
    });
    assert_eq!(controller.notifications().len(), 1);

    let now = Instant::now();
    assert!(!controller.dispatch(Action::Tick { now }).state_changed);
    let later = now + controller.config().notification_ttl() + Duration::from_millis(1);
    assert!(controller.dispatch(Action::Tick { now: later }).state_changed);
    assert!(controller.notifications().is_empty());
}

#[test]
fn invariants_hold_across_event_sequences() {
    let mut controller = new_controller();
    type_text(&mut controller, "سلام world");
    assert_invariants(&controller);
    controller.dispatch(Action::ToggleDirection);
    assert_invariants(&controller);
    controller.surface_mut().select_all();
    controller.dispatch(Action::SelectionChanged);
    controller.apply_format("underline", None);
    assert_invariants(&controller);
    controller.surface_mut().erase(1);
    controller.dispatch(Action::ContentChanged);
    controller.dispatch(Action::SelectionChanged);
    assert_invariants(&controller);
    blur(&mut controller);
    assert_invariants(&controller);
    assert_eq!(controller.surface().rendered(), RTL_PLACEHOLDER);
    controller.dispatch(Action::ToggleDirection);
    assert_invariants(&controller);
    assert_eq!(controller.surface().rendered(), LTR_PLACEHOLDER);
}
