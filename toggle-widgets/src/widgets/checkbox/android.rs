//! Material look: the icon itself carries the state.

use toggle::ControlState;

use crate::platform::Platform;
use crate::view::{Accessibility, BoxStyle, ControlKind, ControlView, Icon};
use crate::widgets::RenderProps;

const ICON_SIZE: f32 = 24.0;
const TOUCH_RADIUS: f32 = 18.0;

pub(super) fn render(props: RenderProps<'_>) -> ControlView {
    let theme = props.theme;
    let name = match props.state {
        ControlState::Checked => "checkbox-marked",
        ControlState::Indeterminate => "minus-box",
        ControlState::Unchecked => "checkbox-blank-outline",
    };
    let color = if props.state.shows_mark() {
        props.checked_color()
    } else {
        theme.unchecked_color(props.disabled)
    };

    let container = props
        .container_style
        .clone()
        .unwrap_or_else(|| BoxStyle::new().radius(TOUCH_RADIUS));
    let mark = props.mark_style.clone().unwrap_or_default();

    ControlView {
        kind: ControlKind::Checkbox,
        platform: Platform::Android,
        state: props.state,
        disabled: props.disabled,
        pressable: !props.disabled,
        icon: Icon {
            name,
            size: ICON_SIZE,
            color,
            direction: theme.direction,
        },
        // The icon is always drawn; its glyph changes with the state.
        mark_opacity: 1.0,
        ripple_color: props.ripple_color(),
        borderless: true,
        container,
        mark,
        accessibility: Accessibility::button("button", props.disabled),
        id: props.id,
    }
}
