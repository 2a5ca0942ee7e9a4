use std::time::{Duration, Instant};

use drawer::prelude::*;

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

fn down(y: f32, time: Instant) -> Event {
    Event::PointerDown { x: 0.0, y, time }
}

fn moved(y: f32, time: Instant) -> Event {
    Event::PointerMove { x: 0.0, y, time }
}

fn up(y: f32, time: Instant) -> Event {
    Event::PointerUp { x: 0.0, y, time }
}

fn closed_drawer() -> Drawer {
    let mut drawer = Drawer::new(DrawerConfig::default());
    drawer.on_layout(400.0);
    drawer
}

fn settle(drawer: &mut Drawer, mut now: Instant) {
    for _ in 0..100 {
        if !drawer.advance_animations(now) {
            return;
        }
        now += ms(16);
    }
    panic!("drawer did not settle");
}

#[test]
fn test_events_before_layout_are_ignored() {
    let mut drawer = Drawer::new(DrawerConfig::default());
    let t0 = Instant::now();
    assert_eq!(drawer.event(&down(0.0, t0)), EventResponse::Ignored);
    assert_eq!(drawer.event(&up(0.0, t0 + ms(20))), EventResponse::Ignored);
    assert_eq!(drawer.state(), DrawerState::Closed);
}

#[test]
fn test_tap_toggles() {
    let mut drawer = closed_drawer();
    let t0 = Instant::now();

    assert_eq!(drawer.event(&down(5.0, t0)), EventResponse::Handled);
    assert!(drawer.handle().is_pressed());
    assert_eq!(drawer.event(&up(5.0, t0 + ms(80))), EventResponse::Handled);
    assert!(!drawer.handle().is_pressed());
    assert_eq!(drawer.state(), DrawerState::Opening);

    settle(&mut drawer, t0 + ms(100));
    assert_eq!(drawer.state(), DrawerState::Open);

    drawer.event(&down(5.0, t0 + ms(1000)));
    drawer.event(&up(5.0, t0 + ms(1050)));
    assert_eq!(drawer.state(), DrawerState::Closing);
}

#[test]
fn test_jitter_within_slop_is_still_a_tap() {
    let mut drawer = closed_drawer();
    let t0 = Instant::now();
    drawer.event(&down(5.0, t0));
    assert_eq!(drawer.event(&moved(8.0, t0 + ms(16))), EventResponse::Handled);
    assert_eq!(drawer.offset(), -400.0);
    drawer.event(&up(8.0, t0 + ms(40)));
    assert_eq!(drawer.state(), DrawerState::Opening);
}

#[test]
fn test_long_press_does_not_toggle() {
    let mut drawer = closed_drawer();
    let t0 = Instant::now();
    drawer.event(&down(5.0, t0));
    drawer.event(&up(5.0, t0 + ms(900)));
    // Resolved like a release from the closed position
    assert_ne!(drawer.state(), DrawerState::Opening);
    settle(&mut drawer, t0 + ms(900));
    assert_eq!(drawer.state(), DrawerState::Closed);
}

#[test]
fn test_slow_drag_past_half_opens() {
    let mut drawer = closed_drawer();
    let t0 = Instant::now();

    drawer.event(&down(0.0, t0));
    drawer.event(&moved(50.0, t0 + ms(50)));
    assert!(drawer.is_dragging());
    assert_eq!(drawer.offset(), -350.0);
    assert_eq!(drawer.state(), DrawerState::Opening);

    drawer.event(&moved(250.0, t0 + ms(100)));
    assert_eq!(drawer.offset(), -150.0);
    assert_eq!(drawer.handle().open_opacity(), 1.0);

    // Hold still so the release carries no velocity
    drawer.event(&moved(250.0, t0 + ms(500)));
    drawer.event(&up(250.0, t0 + ms(600)));
    assert!(!drawer.is_dragging());
    assert_eq!(drawer.velocity(), 0.0);
    assert_eq!(drawer.state(), DrawerState::Opening);

    settle(&mut drawer, t0 + ms(600));
    assert_eq!(drawer.state(), DrawerState::Open);
    assert_eq!(drawer.offset(), 0.0);
}

#[test]
fn test_slow_drag_short_of_half_closes() {
    let mut drawer = closed_drawer();
    let t0 = Instant::now();

    drawer.event(&down(0.0, t0));
    drawer.event(&moved(100.0, t0 + ms(50)));
    drawer.event(&moved(100.0, t0 + ms(400)));
    drawer.event(&up(100.0, t0 + ms(500)));
    assert_eq!(drawer.state(), DrawerState::Closing);

    settle(&mut drawer, t0 + ms(500));
    assert_eq!(drawer.state(), DrawerState::Closed);
    assert_eq!(drawer.offset(), -400.0);
}

#[test]
fn test_fast_upward_flick_closes() {
    let mut drawer = Drawer::new(DrawerConfig::default().initial_state(DrawerState::Open));
    drawer.on_layout(400.0);
    let t0 = Instant::now();

    drawer.event(&down(300.0, t0));
    drawer.event(&moved(280.0, t0 + ms(10)));
    drawer.event(&moved(240.0, t0 + ms(20)));
    drawer.event(&up(220.0, t0 + ms(30)));

    assert_eq!(drawer.state(), DrawerState::Closing);
    assert!(drawer.velocity() < 0.0);
    let duration = drawer.active_slide_duration_ms().unwrap();
    assert!(duration < 250.0, "fling should shorten the slide: {duration}");

    settle(&mut drawer, t0 + ms(30));
    assert_eq!(drawer.state(), DrawerState::Closed);
    assert!(!drawer.is_content_enabled());
}

#[test]
fn test_cancel_mid_drag_settles() {
    let mut drawer = closed_drawer();
    let t0 = Instant::now();

    drawer.event(&down(0.0, t0));
    drawer.event(&moved(300.0, t0 + ms(50)));
    drawer.event(&moved(300.0, t0 + ms(400)));
    assert_eq!(drawer.event(&Event::PointerCancel), EventResponse::Handled);

    assert!(!drawer.is_dragging());
    assert!(!drawer.handle().is_pressed());
    assert_eq!(drawer.state(), DrawerState::Opening);
    settle(&mut drawer, t0 + ms(400));
    assert_eq!(drawer.state(), DrawerState::Open);
}

#[test]
fn test_cancel_without_drag_only_clears_press() {
    let mut drawer = closed_drawer();
    let t0 = Instant::now();
    drawer.event(&down(0.0, t0));
    drawer.event(&Event::PointerCancel);
    assert!(!drawer.handle().is_pressed());
    assert_eq!(drawer.state(), DrawerState::Closed);
    assert!(!drawer.is_animating());
}

#[test]
fn test_stray_events_are_ignored() {
    let mut drawer = closed_drawer();
    let t0 = Instant::now();
    assert_eq!(drawer.event(&moved(100.0, t0)), EventResponse::Ignored);
    assert_eq!(drawer.event(&up(100.0, t0)), EventResponse::Ignored);
    assert_eq!(drawer.offset(), -400.0);
}

#[test]
fn test_new_press_during_drag_settles_the_drag() {
    let mut drawer = closed_drawer();
    let t0 = Instant::now();

    drawer.event(&down(0.0, t0));
    drawer.event(&moved(100.0, t0 + ms(50)));
    assert_eq!(drawer.state(), DrawerState::Opening);

    // The up for the first pointer never arrives
    assert_eq!(drawer.event(&down(100.0, t0 + ms(100))), EventResponse::Handled);
    assert!(!drawer.is_dragging());
    assert_eq!(drawer.state(), DrawerState::Closing);
    assert!(drawer.is_animating());

    // Short second press is a tap, inert while the slide runs
    drawer.event(&up(100.0, t0 + ms(150)));
    assert_eq!(drawer.state(), DrawerState::Closing);

    settle(&mut drawer, t0 + ms(150));
    assert_eq!(drawer.state(), DrawerState::Closed);
    assert_eq!(drawer.offset(), -400.0);

    drawer.toggle();
    assert_eq!(drawer.state(), DrawerState::Opening);
}
