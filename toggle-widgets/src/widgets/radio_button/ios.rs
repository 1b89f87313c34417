//! iOS look: a thin ring with a filled check when selected.

use crate::platform::Platform;
use crate::view::{Accessibility, BoxStyle, ControlKind, ControlView, Icon};
use crate::widgets::RenderProps;

const ICON_SIZE: f32 = 15.0;

pub(super) fn render(props: RenderProps<'_>) -> ControlView {
    let theme = props.theme;
    let checked = props.state.is_checked();

    let container = props.container_style.clone().unwrap_or_else(|| {
        BoxStyle::new()
            .size(16.0, 16.0)
            .radius(8.0)
            .border(0.5, theme.border)
            .margin_top(10.0)
            .margin_right(3.0)
    });
    let mark = props
        .mark_style
        .clone()
        .unwrap_or_else(|| BoxStyle::new().background(theme.mark));

    let component_type = if checked {
        "radiobutton_checked"
    } else {
        "radiobutton_unchecked"
    };

    ControlView {
        kind: ControlKind::Radio,
        platform: Platform::Ios,
        state: props.state,
        disabled: props.disabled,
        pressable: !props.disabled,
        icon: Icon {
            name: "check",
            size: ICON_SIZE,
            color: theme.icon,
            direction: theme.direction,
        },
        mark_opacity: if checked { 1.0 } else { 0.0 },
        ripple_color: props.ripple_color(),
        borderless: true,
        container,
        mark,
        accessibility: Accessibility::button(component_type, props.disabled),
        id: props.id,
    }
}
