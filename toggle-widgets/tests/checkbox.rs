use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use toggle::{ControlState, State};
use toggle_widgets::{Checkbox, ControlKind, HandlerRegistry, Platform, Theme};

#[test]
fn test_fixed_status_is_rendered_verbatim() {
    let registry = HandlerRegistry::new();
    let theme = Theme::default();

    for state in [
        ControlState::Checked,
        ControlState::Unchecked,
        ControlState::Indeterminate,
    ] {
        for platform in [Platform::Ios, Platform::Android] {
            let view = Checkbox::new(state)
                .platform(platform)
                .build(&theme, &registry);
            assert_eq!(view.state, state);
            assert_eq!(view.kind, ControlKind::Checkbox);
        }
    }
}

#[test]
fn test_fixed_checkbox_press_only_runs_callback() {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    let registry = HandlerRegistry::new();

    let view = Checkbox::new(ControlState::Unchecked)
        .value("terms")
        .on_press(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        })
        .build(&Theme::default(), &registry);
    assert_eq!(view.id, "checkbox-terms");

    registry.press(&view.id);
    registry.press(&view.id);
    assert_eq!(calls.load(Ordering::SeqCst), 2);
}

#[test]
fn test_bound_checkbox_toggles_before_callback() {
    let agree = State::new(ControlState::Indeterminate);
    let seen = Arc::new(Mutex::new(Vec::new()));
    let registry = HandlerRegistry::new();

    let observed = agree.clone();
    let sink = Arc::clone(&seen);
    let view = Checkbox::bound(&agree)
        .id("agree")
        .on_press(move || sink.lock().unwrap().push(observed.get()))
        .build(&Theme::default(), &registry);
    assert_eq!(view.state, ControlState::Indeterminate);

    registry.press("agree");
    registry.press("agree");

    assert_eq!(
        *seen.lock().unwrap(),
        vec![ControlState::Checked, ControlState::Unchecked]
    );
    assert!(agree.is_dirty());
}

#[test]
fn test_disabled_checkbox_ignores_press() {
    let agree = State::new(ControlState::Unchecked);
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    let registry = HandlerRegistry::new();

    let view = Checkbox::bound(&agree)
        .disabled()
        .on_press(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        })
        .build(&Theme::default(), &registry);

    assert!(!registry.press(&view.id));
    assert_eq!(agree.get(), ControlState::Unchecked);
    assert!(!agree.is_dirty());
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[test]
fn test_ios_mark() {
    let registry = HandlerRegistry::new();
    let theme = Theme::default();
    let build = |state| {
        Checkbox::new(state)
            .platform(Platform::Ios)
            .build(&theme, &registry)
    };

    let checked = build(ControlState::Checked);
    let partial = build(ControlState::Indeterminate);
    let unchecked = build(ControlState::Unchecked);

    assert_eq!(checked.icon.name, "check");
    assert_eq!(partial.icon.name, "minus");
    assert_eq!(checked.mark_opacity, 1.0);
    assert_eq!(partial.mark_opacity, 1.0);
    assert!(!unchecked.is_mark_visible());
}

#[test]
fn test_android_icons() {
    let registry = HandlerRegistry::new();
    let theme = Theme::default();
    let build = |state| {
        Checkbox::new(state)
            .platform(Platform::Android)
            .build(&theme, &registry)
    };

    assert_eq!(build(ControlState::Checked).icon.name, "checkbox-marked");
    assert_eq!(build(ControlState::Indeterminate).icon.name, "minus-box");
    assert_eq!(
        build(ControlState::Unchecked).icon.name,
        "checkbox-blank-outline"
    );

    let unchecked = build(ControlState::Unchecked);
    assert!(unchecked.is_mark_visible());
    assert!((unchecked.icon.color.components[3] - 0.54).abs() < 1e-4);
}

#[test]
fn test_disabled_checkbox_uses_disabled_color() {
    let registry = HandlerRegistry::new();
    let theme = Theme::default();
    let view = Checkbox::new(ControlState::Checked)
        .disabled()
        .platform(Platform::Android)
        .build(&theme, &registry);

    assert_eq!(view.icon.color.to_rgba8(), theme.disabled.to_rgba8());
    assert_eq!(view.accessibility.states, vec!["disabled"]);
}

#[test]
fn test_unnamed_checkboxes_get_their_own_ids() {
    let a = State::new(ControlState::Unchecked);
    let b = State::new(ControlState::Unchecked);
    let registry = HandlerRegistry::new();
    let theme = Theme::default();

    let va = Checkbox::bound(&a).build(&theme, &registry);
    let vb = Checkbox::bound(&b).build(&theme, &registry);
    assert_ne!(va.id, vb.id);
    assert!(va.id.starts_with("checkbox-"));
    assert_eq!(registry.len(), 2);
    assert_eq!(registry.collisions(), 0);

    assert!(registry.press(&va.id));
    assert_eq!(a.get(), ControlState::Checked);
    assert_eq!(b.get(), ControlState::Unchecked);
}

#[test]
fn test_bound_state_is_read_on_every_build() {
    let agree = State::new(ControlState::Unchecked);
    let registry = HandlerRegistry::new();
    let theme = Theme::default();

    let view = Checkbox::bound(&agree).value("agree").build(&theme, &registry);
    assert_eq!(view.state, ControlState::Unchecked);

    registry.press(&view.id);
    registry.clear();
    let view = Checkbox::bound(&agree).value("agree").build(&theme, &registry);
    assert_eq!(view.state, ControlState::Checked);
    assert!(view.is_checked());
}
