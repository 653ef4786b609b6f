use super::*;

#[test]
fn new_clock_is_stopped_at_zero() {
    let clock = PlaybackClock::new();
    assert_eq!(clock.state(), ClockState::Stopped);
    assert_eq!(clock.cursor(), FrameIndex(0));
    assert_eq!(clock.progress(), 0.0);
}

#[test]
fn sync_on_non_empty_timeline_starts_running() {
    let mut clock = PlaybackClock::new();
    clock.sync(3);
    assert_eq!(clock.state(), ClockState::Running);
    assert_eq!(clock.cursor(), FrameIndex(0));
}

#[test]
fn tick_is_a_noop_while_stopped() {
    let mut clock = PlaybackClock::new();
    clock.tick();
    assert_eq!(clock.cursor(), FrameIndex(0));
}

#[test]
fn n_ticks_visit_every_index_once_and_wrap_to_zero() {
    let n = 5;
    let mut clock = PlaybackClock::new();
    clock.sync(n);

    let mut visited = Vec::new();
    for _ in 0..n {
        visited.push(clock.cursor().0);
        clock.tick();
    }

    assert_eq!(visited, vec![0, 1, 2, 3, 4]);
    assert_eq!(clock.cursor(), FrameIndex(0));
}

#[test]
fn progress_is_cursor_plus_one_over_n() {
    let mut clock = PlaybackClock::new();
    clock.sync(4);
    assert_eq!(clock.progress(), 0.25);
    clock.tick();
    assert_eq!(clock.progress(), 0.5);
    clock.tick();
    clock.tick();
    assert_eq!(clock.progress(), 1.0);
}

#[test]
fn sync_to_empty_stops_and_resets() {
    let mut clock = PlaybackClock::new();
    clock.sync(3);
    clock.tick();
    clock.sync(0);
    assert_eq!(clock.state(), ClockState::Stopped);
    assert_eq!(clock.cursor(), FrameIndex(0));
    assert_eq!(clock.progress(), 0.0);
}

#[test]
fn shrink_while_running_wraps_cursor_into_range() {
    let mut clock = PlaybackClock::new();
    clock.sync(5);
    for _ in 0..4 {
        clock.tick();
    }
    assert_eq!(clock.cursor(), FrameIndex(4));

    clock.sync(3);
    assert_eq!(clock.state(), ClockState::Running);
    assert_eq!(clock.cursor(), FrameIndex(1));
}
