use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use toggle::{ControlState, GroupSelection, RadioGroup, RadioStatus, ToggleError, Value};
use toggle_widgets::{
    BoxStyle, ControlKind, HandlerRegistry, Platform, RadioButton, Rgba, TextDirection, Theme,
};

const PLATFORMS: [Platform; 2] = [Platform::Ios, Platform::Android];

fn render_group(
    group: &RadioGroup,
    values: &[&str],
    platform: Platform,
    registry: &HandlerRegistry,
) -> Vec<toggle_widgets::ControlView> {
    registry.clear();
    let selection = group.selection();
    let theme = Theme::default();
    values
        .iter()
        .map(|v| {
            RadioButton::new(*v)
                .platform(platform)
                .build(Some(&selection), &theme, registry)
        })
        .collect()
}

fn checked_ids(views: &[toggle_widgets::ControlView]) -> Vec<String> {
    views
        .iter()
        .filter(|v| v.is_checked())
        .map(|v| v.id.clone())
        .collect()
}

#[test]
fn test_group_press_moves_selection() {
    for platform in PLATFORMS {
        let group = RadioGroup::uncontrolled(Some("a".into()));
        let registry = HandlerRegistry::new();

        let views = render_group(&group, &["a", "b", "c"], platform, &registry);
        assert_eq!(views[0].id, format!("{}-a", group.id()));
        assert_eq!(checked_ids(&views), vec![views[0].id.clone()]);
        assert_eq!(registry.len(), 3);

        assert!(registry.press(&views[2].id));
        assert!(group.is_dirty());
        group.clear_dirty();

        let views = render_group(&group, &["a", "b", "c"], platform, &registry);
        assert_eq!(checked_ids(&views), vec![views[2].id.clone()]);
    }
}

#[test]
fn test_press_calls_local_and_group_once() {
    let local_calls = Arc::new(AtomicUsize::new(0));
    let notified = Arc::new(Mutex::new(Vec::new()));

    let sink = Arc::clone(&notified);
    let selection = GroupSelection::new(Some("a".into()))
        .on_value_change(move |v| sink.lock().unwrap().push(v.clone()));
    let registry = HandlerRegistry::new();

    let calls = Arc::clone(&local_calls);
    let view = RadioButton::new("b")
        .on_press(move || {
            calls.fetch_add(1, Ordering::SeqCst);
        })
        .platform(Platform::Ios)
        .build(Some(&selection), &Theme::default(), &registry);
    assert!(view.pressable);

    registry.press(&view.id);

    assert_eq!(local_calls.load(Ordering::SeqCst), 1);
    assert_eq!(*notified.lock().unwrap(), vec![Value::from("b")]);
}

#[test]
fn test_disabled_press_calls_nothing() {
    for platform in PLATFORMS {
        let local_calls = Arc::new(AtomicUsize::new(0));
        let group_calls = Arc::new(AtomicUsize::new(0));

        let counter = Arc::clone(&group_calls);
        let selection = GroupSelection::new(None).on_value_change(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        let registry = HandlerRegistry::new();

        let calls = Arc::clone(&local_calls);
        let view = RadioButton::new("a")
            .disabled()
            .on_press(move || {
                calls.fetch_add(1, Ordering::SeqCst);
            })
            .platform(platform)
            .build(Some(&selection), &Theme::default(), &registry);

        assert!(!view.pressable);
        assert!(!registry.press(&view.id));
        assert_eq!(local_calls.load(Ordering::SeqCst), 0);
        assert_eq!(group_calls.load(Ordering::SeqCst), 0);
        assert!(registry.is_empty());
    }
}

#[test]
fn test_explicit_status_overrides_group() {
    let selection = GroupSelection::new(Some("a".into()));
    let registry = HandlerRegistry::new();
    let theme = Theme::default();

    let a = RadioButton::new("a")
        .status(RadioStatus::Unchecked)
        .build(Some(&selection), &theme, &registry);
    let b = RadioButton::new("b")
        .status(RadioStatus::Checked)
        .build(Some(&selection), &theme, &registry);

    assert_eq!(a.state, ControlState::Unchecked);
    assert_eq!(b.state, ControlState::Checked);
}

#[test]
fn test_standalone_radio_is_unchecked_and_pressable() {
    let local_calls = Arc::new(AtomicUsize::new(0));
    let calls = Arc::clone(&local_calls);
    let registry = HandlerRegistry::new();

    let view = RadioButton::new("solo")
        .on_press(move || {
            calls.fetch_add(1, Ordering::SeqCst);
        })
        .build(None, &Theme::default(), &registry);

    assert_eq!(view.state, ControlState::Unchecked);
    assert!(registry.press("radio-solo"));
    assert_eq!(local_calls.load(Ordering::SeqCst), 1);
}

#[test]
fn test_try_status_rejects_indeterminate() {
    let err = RadioButton::new("a")
        .try_status(ControlState::Indeterminate)
        .unwrap_err();
    assert_eq!(err, ToggleError::IndeterminateRadio);

    let button = RadioButton::new("a")
        .try_status(ControlState::Checked)
        .unwrap();
    assert_eq!(button.resolve_state(None), ControlState::Checked);
}

#[test]
fn test_controlled_group_waits_for_owner() {
    let requested = Arc::new(Mutex::new(None));
    let sink = Arc::clone(&requested);
    let group = RadioGroup::controlled(Some("a".into()), move |v| {
        *sink.lock().unwrap() = Some(v.clone());
    });
    let registry = HandlerRegistry::new();

    let views = render_group(&group, &["a", "b"], Platform::Android, &registry);
    registry.press(&views[1].id);

    let views = render_group(&group, &["a", "b"], Platform::Android, &registry);
    assert_eq!(checked_ids(&views), vec![views[0].id.clone()]);

    let next = requested.lock().unwrap().take();
    group.set_value(next);
    let views = render_group(&group, &["a", "b"], Platform::Android, &registry);
    assert_eq!(checked_ids(&views), vec![views[1].id.clone()]);
}

#[test]
fn test_ios_mark_opacity_follows_state() {
    let selection = GroupSelection::new(Some("a".into()));
    let registry = HandlerRegistry::new();
    let theme = Theme::default();

    let a = RadioButton::new("a")
        .platform(Platform::Ios)
        .build(Some(&selection), &theme, &registry);
    let b = RadioButton::new("b")
        .platform(Platform::Ios)
        .build(Some(&selection), &theme, &registry);

    assert_eq!(a.kind, ControlKind::Radio);
    assert_eq!(a.mark_opacity, 1.0);
    assert_eq!(b.mark_opacity, 0.0);
    assert_eq!(a.icon.name, "check");
    assert_eq!(a.accessibility.component_type, "radiobutton_checked");
    assert_eq!(b.accessibility.component_type, "radiobutton_unchecked");
}

#[test]
fn test_android_icon_follows_state() {
    let selection = GroupSelection::new(Some("a".into()));
    let registry = HandlerRegistry::new();
    let theme = Theme::default();

    let a = RadioButton::new("a")
        .platform(Platform::Android)
        .build(Some(&selection), &theme, &registry);
    let b = RadioButton::new("b")
        .platform(Platform::Android)
        .build(Some(&selection), &theme, &registry);

    assert_eq!(a.icon.name, "radiobox-marked");
    assert_eq!(b.icon.name, "radiobox-blank");
    assert_eq!(a.icon.color.to_rgba8(), theme.accent.to_rgba8());
    assert_eq!(a.icon.direction, TextDirection::Ltr);

    let rtl = Theme::default().direction(TextDirection::Rtl);
    for platform in PLATFORMS {
        let view = RadioButton::new("a")
            .platform(platform)
            .build(Some(&selection), &rtl, &registry);
        assert_eq!(view.icon.direction, TextDirection::Rtl);
    }
}

#[test]
fn test_ripple_colors() {
    let registry = HandlerRegistry::new();
    let theme = Theme::default();
    let custom = Rgba::from_rgba8(0x62, 0x00, 0xee, 0xff);

    let enabled = RadioButton::new("a")
        .color(custom)
        .platform(Platform::Ios)
        .build(None, &theme, &registry);
    let [r, g, b, a] = enabled.ripple_color.components;
    let [cr, cg, cb, _] = custom.components;
    assert_eq!((r, g, b), (cr, cg, cb));
    assert!((a - 0.68).abs() < 1e-4);

    let disabled = RadioButton::new("b")
        .color(custom)
        .disabled()
        .platform(Platform::Ios)
        .build(None, &theme, &registry);
    let [r, g, b, a] = disabled.ripple_color.components;
    assert_eq!((r, g, b), (0.0, 0.0, 0.0));
    assert!((a - 0.16).abs() < 1e-4);
    assert_eq!(disabled.accessibility.traits, vec!["button", "disabled"]);
    assert_eq!(disabled.accessibility.states, vec!["disabled"]);
}

#[test]
fn test_custom_styles_replace_defaults() {
    let registry = HandlerRegistry::new();
    let view = RadioButton::new("a")
        .platform(Platform::Ios)
        .container_style(BoxStyle::new().size(30.0, 30.0))
        .build(None, &Theme::default(), &registry);

    assert_eq!(view.container.width, Some(30.0));
    assert_eq!(view.container.border_width, 0.0);
    assert_eq!(view.container.margin_top, 0.0);
}

#[test]
fn test_custom_id() {
    let registry = HandlerRegistry::new();
    let view = RadioButton::new("a")
        .id("priority-low")
        .build(None, &Theme::default(), &registry);
    assert_eq!(view.id, "priority-low");
    assert!(registry.get("priority-low", toggle_widgets::ON_PRESS).is_some());
}

#[test]
fn test_groups_sharing_a_value_stay_separate() {
    let first = RadioGroup::uncontrolled(Some("no".into()));
    let second = RadioGroup::uncontrolled(Some("no".into()));
    let registry = HandlerRegistry::new();
    let theme = Theme::default();

    let first_selection = first.selection();
    let second_selection = second.selection();
    let first_yes = RadioButton::new("yes").build(Some(&first_selection), &theme, &registry);
    let second_yes = RadioButton::new("yes").build(Some(&second_selection), &theme, &registry);

    assert_ne!(first_yes.id, second_yes.id);
    assert_eq!(registry.len(), 2);
    assert_eq!(registry.collisions(), 0);

    assert!(registry.press(&first_yes.id));
    assert_eq!(first.value(), Some(Value::from("yes")));
    assert_eq!(second.value(), Some(Value::from("no")));
    assert!(!second.is_dirty());
}
