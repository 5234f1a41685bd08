use super::*;
use dom::{Document, DomError, NodeId};
use input_core::{InputId, InputState, Mutation};
use std::collections::HashMap;

type Recording = InputReconciler<RecordingDiagnostics>;

fn reconciler() -> Recording {
    InputReconciler::with_diagnostics(SyncConfig::default(), RecordingDiagnostics::new())
}

fn input(doc: &mut Document, parent: NodeId, state: InputState) -> NodeId {
    let id = doc.create_input(state);
    doc.append_child(parent, id).unwrap();
    id
}

fn elem(doc: &mut Document, parent: NodeId, name: &str) -> NodeId {
    let id = doc.create_element(name);
    doc.append_child(parent, id).unwrap();
    id
}

fn journal(doc: &mut Document, id: NodeId) -> Vec<Mutation> {
    doc.input_mut(id).unwrap().take_journal()
}

fn state(doc: &Document, id: NodeId) -> &InputState {
    doc.input(id).unwrap()
}

fn radio_props(checked: bool) -> InputProps {
    InputProps::new()
        .with_type("radio")
        .with_name("g")
        .with_checked(checked)
        .with_on_change()
}

// =============================================================================
// Validation
// =============================================================================

#[test]
fn conflicting_checked_props_warn_once() {
    let mut rec = reconciler();
    let props = InputProps::new()
        .with_type("checkbox")
        .with_checked(true)
        .with_default_checked(false)
        .with_on_change();

    for _ in 0..3 {
        rec.validate_input_props(&props, Some("Settings"));
    }

    let reported = rec.diagnostics().reported();
    assert_eq!(reported.len(), 1);
    assert_eq!(reported[0].kind, DiagnosticKind::CheckedAndDefaultChecked);
    assert!(reported[0].message.starts_with("Settings contains an input of type checkbox"));
}

#[test]
fn null_counts_as_present_for_conflicts() {
    let mut rec = reconciler();
    let props = InputProps::new()
        .with_value(PropValue::Null)
        .with_default_value("a");
    rec.validate_input_props(&props, None);

    assert_eq!(rec.diagnostics().kinds(), vec![DiagnosticKind::ValueAndDefaultValue]);
    assert!(rec.diagnostics().reported()[0].message.starts_with("A component"));
}

#[test]
fn dedup_is_scoped_to_the_reconciler() {
    let props = InputProps::new().with_value("a").with_default_value("b");

    let mut first = reconciler();
    first.validate_input_props(&props, None);
    let mut second = reconciler();
    second.validate_input_props(&props, None);

    assert_eq!(first.diagnostics().reported().len(), 2);
    assert_eq!(second.diagnostics().reported().len(), 2);
}

#[test]
fn controlled_props_without_handler_warn() {
    let mut rec = reconciler();
    rec.validate_input_props(&InputProps::new().with_value("a"), None);
    rec.validate_input_props(&InputProps::new().with_type("radio").with_checked(true), None);

    assert_eq!(
        rec.diagnostics().kinds(),
        vec![
            DiagnosticKind::ValueWithoutHandler,
            DiagnosticKind::CheckedWithoutHandler
        ]
    );
}

#[test]
fn read_only_and_button_values_need_no_handler() {
    let mut rec = reconciler();
    rec.validate_input_props(&InputProps::new().with_value("a").with_read_only(), None);
    rec.validate_input_props(&InputProps::new().with_type("submit").with_value("Go"), None);
    rec.validate_input_props(
        &InputProps {
            disabled: true,
            ..InputProps::new().with_type("checkbox").with_checked(true)
        },
        None,
    );

    assert!(rec.diagnostics().reported().is_empty());
}

// =============================================================================
// Init
// =============================================================================

#[test]
fn init_writes_value_then_default_value() {
    let mut doc = Document::new();
    let id = input(&mut doc, NodeId::DOCUMENT, InputState::new("text"));
    let mut rec = reconciler();

    rec.init_input(&mut doc, id.into(), &InputProps::new().with_value(7), false)
        .unwrap();

    assert_eq!(
        journal(&mut doc, id),
        vec![
            Mutation::SetValue("7".to_string()),
            Mutation::SetDefaultValue("7".to_string()),
            Mutation::SetChecked(false),
            Mutation::SetDefaultChecked(true),
            Mutation::SetDefaultChecked(false),
        ]
    );
    let wrapper = state(&doc, id).wrapper().unwrap();
    assert_eq!(wrapper.initial_value, "7");
    assert!(wrapper.controlled);
}

#[test]
fn init_detaches_name_around_checked_work() {
    let mut doc = Document::new();
    let id = input(
        &mut doc,
        NodeId::DOCUMENT,
        InputState::new("radio").with_attributes(Some("g"), None, false),
    );
    let mut rec = reconciler();

    rec.init_input(&mut doc, id.into(), &radio_props(false), false)
        .unwrap();

    assert_eq!(
        journal(&mut doc, id),
        vec![
            Mutation::SetName(String::new()),
            Mutation::SetChecked(false),
            Mutation::SetDefaultChecked(true),
            Mutation::SetDefaultChecked(false),
            Mutation::SetName("g".to_string()),
        ]
    );
    assert_eq!(state(&doc, id).name(), "g");
}

#[test]
fn init_checked_radio_does_not_disturb_group_until_named() {
    let mut doc = Document::new();
    let a = input(
        &mut doc,
        NodeId::DOCUMENT,
        InputState::new("radio").with_attributes(Some("g"), None, true),
    );
    let b = input(
        &mut doc,
        NodeId::DOCUMENT,
        InputState::new("radio").with_attributes(Some("g"), None, false),
    );
    let mut rec = reconciler();

    rec.init_input(&mut doc, b.into(), &radio_props(true), false)
        .unwrap();

    assert!(state(&doc, b).checked());
    assert!(state(&doc, b).default_checked());
    assert!(!state(&doc, a).checked());
    assert_eq!(journal(&mut doc, a), vec![Mutation::GroupUnchecked]);
}

#[test]
fn init_button_without_value_keeps_browser_label() {
    let mut doc = Document::new();
    let id = input(&mut doc, NodeId::DOCUMENT, InputState::new("submit"));
    let mut rec = reconciler();
    let props = InputProps::new()
        .with_type("submit")
        .with_default_value("ignored");

    rec.init_input(&mut doc, id.into(), &props, false).unwrap();

    assert!(journal(&mut doc, id).is_empty());
    assert!(!state(&doc, id).has_value_attribute());
}

#[test]
fn hydration_keeps_server_value() {
    let mut doc = Document::new();
    let id = input(
        &mut doc,
        NodeId::DOCUMENT,
        InputState::new("text").with_attributes(None, Some("server"), false),
    );
    let mut rec = reconciler();

    rec.init_input(&mut doc, id.into(), &InputProps::new().with_value("client"), true)
        .unwrap();

    let st = state(&doc, id);
    assert_eq!(st.value(), "server");
    assert_eq!(st.default_value(), "client");
}

#[test]
fn hydration_keeps_markup_value_of_attribute_backed_inputs() {
    let mut doc = Document::new();
    let checkbox = input(
        &mut doc,
        NodeId::DOCUMENT,
        InputState::new("checkbox").with_attributes(None, Some("server"), false),
    );
    let hidden = input(
        &mut doc,
        NodeId::DOCUMENT,
        InputState::new("hidden").with_attributes(None, Some("server"), false),
    );
    let mut rec = reconciler();

    rec.init_input(
        &mut doc,
        checkbox.into(),
        &InputProps::new().with_type("checkbox").with_value("client"),
        true,
    )
    .unwrap();
    rec.init_input(
        &mut doc,
        hidden.into(),
        &InputProps::new().with_type("hidden").with_value("client"),
        true,
    )
    .unwrap();

    for id in [checkbox, hidden] {
        assert_eq!(state(&doc, id).value(), "server");
        assert!(!journal(&mut doc, id).iter().any(Mutation::is_value_write));
    }
}

#[test]
fn init_without_hydration_writes_attribute_backed_value() {
    let mut doc = Document::new();
    let id = input(
        &mut doc,
        NodeId::DOCUMENT,
        InputState::new("hidden").with_attributes(None, Some("server"), false),
    );
    let mut rec = reconciler();

    rec.init_input(
        &mut doc,
        id.into(),
        &InputProps::new().with_type("hidden").with_value("client"),
        false,
    )
    .unwrap();

    assert_eq!(state(&doc, id).value(), "client");
}

#[test]
fn hydration_keeps_user_typed_value() {
    let mut doc = Document::new();
    let id = input(&mut doc, NodeId::DOCUMENT, InputState::new("text"));
    doc.input_mut(id).unwrap().user_edit_value("typed");
    let mut rec = reconciler();

    rec.init_input(&mut doc, id.into(), &InputProps::new().with_default_value("x"), true)
        .unwrap();

    assert_eq!(state(&doc, id).value(), "typed");
    assert_eq!(
        journal(&mut doc, id)
            .into_iter()
            .filter(Mutation::is_value_write)
            .collect::<Vec<_>>(),
        vec![Mutation::SetDefaultValue("x".to_string())]
    );
}

#[test]
fn hydration_keeps_user_checkedness() {
    let mut doc = Document::new();
    let id = input(&mut doc, NodeId::DOCUMENT, InputState::new("checkbox"));
    doc.click(id).unwrap();
    let mut rec = reconciler();
    let props = InputProps::new()
        .with_type("checkbox")
        .with_checked(false)
        .with_on_change();

    rec.init_input(&mut doc, id.into(), &props, true).unwrap();

    assert!(state(&doc, id).checked());
    assert!(!state(&doc, id).default_checked());
}

#[test]
fn init_reports_missing_input() {
    let mut doc = Document::new();
    let div = elem(&mut doc, NodeId::DOCUMENT, "div");
    let mut rec = reconciler();

    assert_eq!(
        rec.init_input(&mut doc, div.into(), &InputProps::new(), false),
        Err(SyncError::MissingInput(div.into()))
    );
}

// =============================================================================
// Update
// =============================================================================

#[test]
fn number_value_fills_empty_node() {
    let mut doc = Document::new();
    let id = input(&mut doc, NodeId::DOCUMENT, InputState::new("number"));
    let mut rec = reconciler();
    let props = InputProps::new().with_type("number").with_value("5");

    rec.update_input(&mut doc, id.into(), &props).unwrap();

    assert_eq!(state(&doc, id).value(), "5");
}

#[test]
fn number_value_keeps_equivalent_user_text() {
    let mut doc = Document::new();
    let id = input(&mut doc, NodeId::DOCUMENT, InputState::new("number"));
    doc.input_mut(id).unwrap().user_edit_value("1.0");
    let mut rec = reconciler();
    let props = InputProps::new().with_type("number").with_value(1);

    rec.update_input(&mut doc, id.into(), &props).unwrap();

    assert_eq!(state(&doc, id).value(), "1.0");
    assert!(
        !journal(&mut doc, id)
            .iter()
            .any(|m| matches!(m, Mutation::SetValue(_)))
    );
}

#[test]
fn number_zero_replaces_empty_value() {
    let mut doc = Document::new();
    let id = input(&mut doc, NodeId::DOCUMENT, InputState::new("number"));
    let mut rec = reconciler();
    let props = InputProps::new().with_type("number").with_value(0);

    rec.update_input(&mut doc, id.into(), &props).unwrap();

    assert_eq!(state(&doc, id).value(), "0");
}

#[test]
fn submit_without_value_removes_attribute_and_syncs_checked() {
    let mut doc = Document::new();
    let id = input(
        &mut doc,
        NodeId::DOCUMENT,
        InputState::new("submit").with_attributes(None, Some("Go"), false),
    );
    let mut rec = reconciler();
    let props = InputProps::new()
        .with_type("submit")
        .with_default_value("Stay")
        .with_checked(true);

    rec.update_input(&mut doc, id.into(), &props).unwrap();
    rec.update_input(&mut doc, id.into(), &props).unwrap();

    // defaultValue is not applied to a button without a value.
    assert_eq!(
        journal(&mut doc, id),
        vec![Mutation::RemoveValueAttribute, Mutation::SetChecked(true)]
    );
    assert!(!state(&doc, id).has_value_attribute());
    assert!(state(&doc, id).checked());
}

#[test]
fn update_without_value_props_removes_value_attribute() {
    let mut doc = Document::new();
    let id = input(
        &mut doc,
        NodeId::DOCUMENT,
        InputState::new("text").with_attributes(None, Some("stale"), false),
    );
    let mut rec = reconciler();

    rec.update_input(&mut doc, id.into(), &InputProps::new()).unwrap();
    rec.update_input(&mut doc, id.into(), &InputProps::new()).unwrap();

    assert_eq!(journal(&mut doc, id), vec![Mutation::RemoveValueAttribute]);
    assert!(!state(&doc, id).has_value_attribute());
    assert_eq!(state(&doc, id).value(), "");
}

#[test]
fn sanitized_value_is_not_rewritten() {
    let mut doc = Document::new();
    let text = input(&mut doc, NodeId::DOCUMENT, InputState::new("text"));
    let number = input(&mut doc, NodeId::DOCUMENT, InputState::new("number"));
    let mut rec = reconciler();
    let text_props = InputProps::new().with_value("a\r\nb");
    let number_props = InputProps::new().with_type("number").with_value("abc");

    for _ in 0..2 {
        rec.update_input(&mut doc, text.into(), &text_props).unwrap();
        rec.update_input(&mut doc, number.into(), &number_props).unwrap();
    }

    assert_eq!(state(&doc, text).value(), "ab");
    assert_eq!(
        journal(&mut doc, text)
            .into_iter()
            .filter(|m| matches!(m, Mutation::SetValue(_)))
            .count(),
        1
    );
    assert_eq!(state(&doc, number).value(), "");
    assert!(!journal(&mut doc, number)
        .iter()
        .any(|m| matches!(m, Mutation::SetValue(_))));
}

#[test]
fn repeated_update_writes_nothing() {
    let mut doc = Document::new();
    let id = input(&mut doc, NodeId::DOCUMENT, InputState::new("text"));
    let mut rec = reconciler();
    let props = InputProps::new().with_value("a").with_on_change();
    rec.init_input(&mut doc, id.into(), &props, false).unwrap();
    journal(&mut doc, id);

    let next = InputProps::new().with_value("b").with_on_change();
    rec.update_input(&mut doc, id.into(), &next).unwrap();
    assert_eq!(
        journal(&mut doc, id),
        vec![
            Mutation::SetValue("b".to_string()),
            Mutation::SetDefaultValue("b".to_string()),
        ]
    );

    rec.update_input(&mut doc, id.into(), &next).unwrap();
    assert!(journal(&mut doc, id).is_empty());
}

#[test]
fn repeated_checkbox_update_writes_nothing() {
    let mut doc = Document::new();
    let id = input(&mut doc, NodeId::DOCUMENT, InputState::new("checkbox"));
    let mut rec = reconciler();
    let props = InputProps::new()
        .with_type("checkbox")
        .with_default_checked(true);

    rec.update_input(&mut doc, id.into(), &props).unwrap();
    assert_eq!(journal(&mut doc, id), vec![Mutation::SetDefaultChecked(true)]);
    assert!(state(&doc, id).checked());

    rec.update_input(&mut doc, id.into(), &props).unwrap();
    assert!(journal(&mut doc, id).is_empty());
}

#[test]
fn controlled_checked_wins_over_user_click() {
    let mut doc = Document::new();
    let id = input(&mut doc, NodeId::DOCUMENT, InputState::new("checkbox"));
    let mut rec = reconciler();
    let props = InputProps::new()
        .with_type("checkbox")
        .with_checked(false)
        .with_on_change();

    doc.click(id).unwrap();
    rec.update_input(&mut doc, id.into(), &props).unwrap();

    assert!(!state(&doc, id).checked());
    assert_eq!(journal(&mut doc, id), vec![Mutation::SetChecked(false)]);
}

#[test]
fn null_value_restores_initial_default_value() {
    let mut doc = Document::new();
    let id = input(&mut doc, NodeId::DOCUMENT, InputState::new("text"));
    let mut rec = reconciler();
    rec.init_input(&mut doc, id.into(), &InputProps::new().with_value("seed"), false)
        .unwrap();
    rec.update_input(&mut doc, id.into(), &InputProps::new().with_value("x"))
        .unwrap();
    journal(&mut doc, id);

    rec.update_input(&mut doc, id.into(), &InputProps::new().with_value(PropValue::Null))
        .unwrap();

    assert_eq!(
        journal(&mut doc, id),
        vec![Mutation::SetDefaultValue("seed".to_string())]
    );
    assert_eq!(state(&doc, id).value(), "x");
}

#[test]
fn focused_number_defers_default_value() {
    let mut doc = Document::new();
    let id = input(&mut doc, NodeId::DOCUMENT, InputState::new("number"));
    doc.focus(id).unwrap();
    let mut rec = reconciler();
    let props = InputProps::new().with_type("number").with_value(3);

    rec.update_input(&mut doc, id.into(), &props).unwrap();

    assert_eq!(journal(&mut doc, id), vec![Mutation::SetValue("3".to_string())]);
    assert!(!state(&doc, id).has_value_attribute());
}

#[test]
fn without_attribute_syncing_value_leaves_attribute_alone() {
    let mut doc = Document::new();
    let id = input(
        &mut doc,
        NodeId::DOCUMENT,
        InputState::new("text").with_attributes(None, Some("x"), true),
    );
    let mut rec = InputReconciler::with_diagnostics(
        SyncConfig::new().without_attribute_syncing(),
        RecordingDiagnostics::new(),
    );

    rec.update_input(&mut doc, id.into(), &InputProps::new().with_value("a"))
        .unwrap();

    assert_eq!(
        journal(&mut doc, id),
        vec![
            Mutation::SetValue("a".to_string()),
            Mutation::RemoveValueAttribute,
            Mutation::SetDefaultChecked(false),
        ]
    );
    assert_eq!(state(&doc, id).value(), "a");
}

#[test]
fn without_attribute_syncing_default_value_drives_attribute() {
    let mut doc = Document::new();
    let id = input(&mut doc, NodeId::DOCUMENT, InputState::new("text"));
    let mut rec = InputReconciler::with_diagnostics(
        SyncConfig::new().without_attribute_syncing(),
        RecordingDiagnostics::new(),
    );
    let props = InputProps::new().with_value("a").with_default_value("d");

    rec.init_input(&mut doc, id.into(), &props, false).unwrap();
    assert_eq!(state(&doc, id).value(), "a");
    assert_eq!(state(&doc, id).default_value(), "d");
    journal(&mut doc, id);

    rec.update_input(&mut doc, id.into(), &props).unwrap();
    assert!(journal(&mut doc, id).is_empty());
}

#[test]
fn switching_control_mode_warns_once_each_way() {
    let mut doc = Document::new();
    let controlled = input(&mut doc, NodeId::DOCUMENT, InputState::new("text"));
    let uncontrolled = input(&mut doc, NodeId::DOCUMENT, InputState::new("text"));
    let mut rec = reconciler();

    rec.init_input(&mut doc, controlled.into(), &InputProps::new().with_value("a"), false)
        .unwrap();
    rec.init_input(
        &mut doc,
        uncontrolled.into(),
        &InputProps::new().with_default_value("a"),
        false,
    )
    .unwrap();

    for _ in 0..2 {
        rec.update_input(&mut doc, controlled.into(), &InputProps::new())
            .unwrap();
        rec.update_input(&mut doc, uncontrolled.into(), &InputProps::new().with_value("b"))
            .unwrap();
    }

    assert_eq!(
        rec.diagnostics().kinds(),
        vec![
            DiagnosticKind::ControlledToUncontrolled,
            DiagnosticKind::UncontrolledToControlled
        ]
    );
}

// =============================================================================
// Restore
// =============================================================================

struct Group {
    doc: Document,
    radios: [NodeId; 3],
    registry: HashMap<InputId, InputProps>,
    tracker: TrackedValues,
}

/// Three controlled radios named `g`; the middle one is checked.
fn radio_group(rec: &mut Recording) -> Group {
    let mut doc = Document::new();
    let form = elem(&mut doc, NodeId::DOCUMENT, "form");
    let radios = [0, 1, 2].map(|_| {
        input(
            &mut doc,
            form,
            InputState::new("radio").with_attributes(Some("g"), None, false),
        )
    });

    let mut registry = HashMap::new();
    let mut tracker = TrackedValues::new();
    for (i, &id) in radios.iter().enumerate() {
        let props = radio_props(i == 1);
        rec.init_input(&mut doc, id.into(), &props, false).unwrap();
        tracker.track(id.into(), state(&doc, id));
        registry.insert(InputId::from(id), props);
    }
    for &id in &radios {
        journal(&mut doc, id);
    }

    Group {
        doc,
        radios,
        registry,
        tracker,
    }
}

#[test]
fn restore_resyncs_each_radio_once() {
    let mut rec = reconciler();
    let mut g = radio_group(&mut rec);
    let [a, b, c] = g.radios;
    assert!(state(&g.doc, b).checked());

    g.doc.click(a).unwrap();
    assert!(!state(&g.doc, b).checked());
    for id in g.radios {
        journal(&mut g.doc, id);
    }

    let props = g.registry[&InputId::from(a)].clone();
    rec.restore_controlled_input_state(&mut g.doc, a, &props, &g.registry, &mut g.tracker)
        .unwrap();

    assert_eq!(journal(&mut g.doc, a), vec![Mutation::SetChecked(false)]);
    assert_eq!(journal(&mut g.doc, b), vec![Mutation::SetChecked(true)]);
    assert!(journal(&mut g.doc, c).is_empty());
    assert!(state(&g.doc, b).checked());
    assert!(!state(&g.doc, a).checked());

    // The tracker saw the browser's uncheck before the re-sync.
    assert_eq!(g.tracker.tracked_value(b.into()), Some("false"));
    assert_eq!(g.tracker.tracked_value(c.into()), Some("false"));
}

#[test]
fn restore_ignores_radios_of_other_forms() {
    let mut rec = reconciler();
    let mut g = radio_group(&mut rec);
    let outside = input(
        &mut g.doc,
        NodeId::DOCUMENT,
        InputState::new("radio").with_attributes(Some("g"), None, true),
    );
    let [a, ..] = g.radios;

    let props = g.registry[&InputId::from(a)].clone();
    rec.restore_controlled_input_state(&mut g.doc, a, &props, &g.registry, &mut g.tracker)
        .unwrap();

    assert!(state(&g.doc, outside).checked());
    assert!(journal(&mut g.doc, outside).is_empty());
}

#[test]
fn restore_fails_on_unmanaged_sibling() {
    let mut rec = reconciler();
    let mut g = radio_group(&mut rec);
    let [a, b, c] = g.radios;
    g.registry.remove(&InputId::from(b));
    g.doc.click(c).unwrap();
    journal(&mut g.doc, c);

    let props = g.registry[&InputId::from(a)].clone();
    let err = rec
        .restore_controlled_input_state(&mut g.doc, a, &props, &g.registry, &mut g.tracker)
        .unwrap_err();

    assert_eq!(
        err,
        SyncError::UnmanagedRadioSibling {
            sibling: b.into(),
            name: "g".to_string()
        }
    );
    // Siblings after the unmanaged one are not touched.
    assert!(journal(&mut g.doc, c).is_empty());
    assert!(state(&g.doc, c).checked());
}

#[test]
fn restore_of_non_radio_only_updates_itself() {
    let mut doc = Document::new();
    let text = input(&mut doc, NodeId::DOCUMENT, InputState::new("text"));
    let mut rec = reconciler();
    let registry: HashMap<InputId, InputProps> = HashMap::new();
    let mut tracker = TrackedValues::new();
    let props = InputProps::new().with_value("v").with_name("g");

    rec.restore_controlled_input_state(&mut doc, text, &props, &registry, &mut tracker)
        .unwrap();

    assert_eq!(state(&doc, text).value(), "v");
}

#[test]
fn restore_rejects_non_input_nodes() {
    let mut doc = Document::new();
    let div = elem(&mut doc, NodeId::DOCUMENT, "div");
    let mut rec = reconciler();
    let registry: HashMap<InputId, InputProps> = HashMap::new();
    let mut tracker = TrackedValues::new();

    let err = rec
        .restore_controlled_input_state(&mut doc, div, &radio_props(true), &registry, &mut tracker)
        .unwrap_err();

    assert_eq!(err, SyncError::Dom(DomError::NotAnInput(div)));
    assert!(std::error::Error::source(&err).is_some());
}
