//! Headless walkthrough of the drawer.
//!
//! Run with `RUST_LOG=drawer=debug cargo run --example drawer_demo` to see
//! the state machine's own logging next to the listener output.

use std::time::{Duration, Instant};

use drawer::prelude::*;

/// A menu panel standing in for real content
struct Menu {
    enabled: bool,
}

impl Element for Menu {
    fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
        log::info!("menu {}", if enabled { "enabled" } else { "disabled" });
    }
}

const FRAME: Duration = Duration::from_millis(16);

fn main() {
    env_logger::init();

    let resources = StaticResources::new()
        .image("chevron_up", "icons/chevron_up.svg")
        .string("menu_label", "Menu");

    let config = DrawerConfig::default()
        .open_indicator(Indicator::Resource("chevron_up".into()))
        .closed_indicator(Indicator::Resource("menu_label".into()))
        .closed_color(Color::from_hex(0xEEEEEE))
        .handle_height(24.0)
        .peek(24.0)
        .slide_duration_ms(300)
        .timing(TimingFunction::EaseOut);

    let mut drawer = Drawer::with_resources(config, &resources);
    if let Err(err) = drawer.set_content(Menu { enabled: true }) {
        log::error!("{}", err);
        return;
    }

    drawer.on_state_change(|state| println!("state -> {:?}", state));
    drawer.on_open(|| println!("opening"));
    drawer.on_close(|| println!("closing"));

    // Opening before layout is replayed once the height is known
    drawer.open();
    drawer.on_layout(424.0);

    let mut now = Instant::now();
    now = run_frames(&mut drawer, now);

    // Drag the handle up by 60px, then flick it
    println!("-- drag and fling");
    let y = 400.0;
    drawer.event(&Event::PointerDown { x: 20.0, y, time: now });
    for step in 1..=6 {
        now += Duration::from_millis(8);
        drawer.event(&Event::PointerMove {
            x: 20.0,
            y: y - 10.0 * step as f32,
            time: now,
        });
    }
    drawer.event(&Event::PointerUp {
        x: 20.0,
        y: y - 70.0,
        time: now + Duration::from_millis(8),
    });
    println!(
        "fling at {:.0}px/s, slide takes {:.1}ms",
        drawer.velocity(),
        drawer.active_slide_duration_ms().unwrap_or(0.0)
    );
    now = run_frames(&mut drawer, now);

    // Tap to reopen
    println!("-- tap");
    drawer.event(&Event::PointerDown { x: 20.0, y: 10.0, time: now });
    drawer.event(&Event::PointerUp {
        x: 20.0,
        y: 10.0,
        time: now + Duration::from_millis(60),
    });
    run_frames(&mut drawer, now);

    println!("final: {:?}", drawer);
}

fn run_frames(drawer: &mut Drawer, mut now: Instant) -> Instant {
    while drawer.advance_animations(now) {
        let flags = drawer.take_change_flags();
        if flags.contains(ChangeFlags::NEEDS_LAYOUT) {
            println!(
                "  offset {:>7.1}  percent {:.2}",
                drawer.offset(),
                drawer.translation_percent()
            );
        }
        now += FRAME;
    }
    drawer.take_change_flags();
    now
}
