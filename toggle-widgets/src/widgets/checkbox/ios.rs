//! iOS look: a plain box, with a check or dash shown when marked.

use crate::platform::Platform;
use crate::view::{Accessibility, BoxStyle, ControlKind, ControlView, Icon};
use crate::widgets::RenderProps;

const ICON_SIZE: f32 = 17.5;

pub(super) fn render(props: RenderProps<'_>) -> ControlView {
    let theme = props.theme;
    let name = if props.state.is_indeterminate() {
        "minus"
    } else {
        "check"
    };

    let container = props.container_style.clone().unwrap_or_else(|| {
        BoxStyle::new()
            .height(16.0)
            .radius(2.0)
            .border(0.5, theme.border)
            .margin_right(3.0)
    });
    let mark = props
        .mark_style
        .clone()
        .unwrap_or_else(|| BoxStyle::new().margin_top(-2.0).background(theme.mark));

    ControlView {
        kind: ControlKind::Checkbox,
        platform: Platform::Ios,
        state: props.state,
        disabled: props.disabled,
        pressable: !props.disabled,
        icon: Icon {
            name,
            size: ICON_SIZE,
            color: theme.icon,
            direction: theme.direction,
        },
        mark_opacity: if props.state.shows_mark() { 1.0 } else { 0.0 },
        ripple_color: props.ripple_color(),
        borderless: true,
        container,
        mark,
        accessibility: Accessibility::button("button", props.disabled),
        id: props.id,
    }
}
