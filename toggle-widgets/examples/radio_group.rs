//! Renders an uncontrolled radio group and a bound checkbox, presses a few
//! controls, and prints what each render looks like.
//!
//! Logs go to `radio_group.log`.

use std::fs::File;

use simplelog::{Config, LevelFilter, WriteLogger};
use toggle::{ControlState, RadioGroup, State};
use toggle_widgets::{Checkbox, ControlView, HandlerRegistry, Platform, RadioButton, Theme};

const OPTIONS: [&str; 3] = ["low", "medium", "high"];

fn render(
    group: &RadioGroup,
    notify: &State<ControlState>,
    theme: &Theme,
    registry: &HandlerRegistry,
) -> Vec<ControlView> {
    registry.clear();
    let selection = group.selection();

    let mut views: Vec<ControlView> = OPTIONS
        .iter()
        .map(|value| {
            RadioButton::new(*value)
                .platform(Platform::Android)
                .build(Some(&selection), theme, registry)
        })
        .collect();
    views.push(
        Checkbox::bound(notify)
            .value("notify")
            .platform(Platform::Ios)
            .build(theme, registry),
    );
    views
}

fn print(views: &[ControlView]) {
    for view in views {
        println!("  {:<13} {:<24} {}", view.state.as_str(), view.icon.name, view.id);
    }
}

fn main() {
    let log_file = File::create("radio_group.log").expect("Failed to create log file");
    WriteLogger::init(LevelFilter::Trace, Config::default(), log_file)
        .expect("Failed to initialize logger");

    let theme = Theme::default();
    let registry = HandlerRegistry::new();
    let group = RadioGroup::uncontrolled(Some("low".into()))
        .on_value_change(|value| println!("-> selected {value}"));
    let notify = State::new(ControlState::Unchecked);

    println!("initial:");
    let mut views = render(&group, &notify, &theme, &registry);
    print(&views);

    // high, notify, medium
    for index in [2, 3, 1] {
        let id = views[index].id.clone();
        registry.press(&id);
        if group.is_dirty() || notify.is_dirty() {
            group.clear_dirty();
            notify.clear_dirty();
            println!("after pressing {id}:");
            views = render(&group, &notify, &theme, &registry);
            print(&views);
        }
    }
}
