//! Material look: an outlined ring with a filled dot when selected.

use crate::platform::Platform;
use crate::view::{Accessibility, BoxStyle, ControlKind, ControlView, Icon};
use crate::widgets::RenderProps;

const ICON_SIZE: f32 = 24.0;
const RING_SIZE: f32 = 20.0;
const RING_WIDTH: f32 = 2.0;
const DOT_SIZE: f32 = 10.0;

pub(super) fn render(props: RenderProps<'_>) -> ControlView {
    let theme = props.theme;
    let checked = props.state.is_checked();
    let checked_color = props.checked_color();
    let color = if checked {
        checked_color
    } else {
        theme.unchecked_color(props.disabled)
    };

    let container = props.container_style.clone().unwrap_or_else(|| {
        BoxStyle::new()
            .size(RING_SIZE, RING_SIZE)
            .radius(RING_SIZE / 2.0)
            .border(RING_WIDTH, color)
    });
    let mark = props.mark_style.clone().unwrap_or_else(|| {
        BoxStyle::new()
            .size(DOT_SIZE, DOT_SIZE)
            .radius(DOT_SIZE / 2.0)
            .background(checked_color)
    });

    let (name, component_type) = if checked {
        ("radiobox-marked", "radiobutton_checked")
    } else {
        ("radiobox-blank", "radiobutton_unchecked")
    };

    ControlView {
        kind: ControlKind::Radio,
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
        mark_opacity: if checked { 1.0 } else { 0.0 },
        ripple_color: props.ripple_color(),
        borderless: true,
        container,
        mark,
        accessibility: Accessibility::button(component_type, props.disabled),
        id: props.id,
    }
}
