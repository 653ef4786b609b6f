use super::*;

use crate::foundation::core::Year;
use crate::palette::assign::Color;

fn tick_frame(index: usize) -> TickFrame {
    TickFrame {
        index: FrameIndex(index),
        year: Year(1950 + index as i32),
        rows: vec![BarRow {
            label: "A".to_string(),
            value: 10.0,
            color: Color::parse("#112233").unwrap(),
            icon: crate::assets::icons::FALLBACK_ICON,
        }],
        total_population: 10.0,
        progress: 1.0,
    }
}

#[test]
fn in_memory_sink_captures_run_in_order() {
    let mut sink = InMemorySink::new();
    sink.begin(SinkConfig {
        tick_rate: TickRate::default(),
        frames: 2,
    })
    .unwrap();

    sink.push_frame(FrameIndex(0), &tick_frame(0)).unwrap();
    sink.push_frame(FrameIndex(1), &tick_frame(1)).unwrap();
    sink.end().unwrap();

    assert_eq!(sink.config().unwrap().frames, 2);
    assert_eq!(sink.frames().len(), 2);
    assert_eq!(sink.frames()[0].0, FrameIndex(0));
    assert_eq!(sink.frames()[1].1.year, Year(1951));
    assert!(!sink.saw_no_data());
    assert!(sink.ended());
}

#[test]
fn begin_clears_previous_capture() {
    let mut sink = InMemorySink::new();
    let cfg = SinkConfig {
        tick_rate: TickRate::default(),
        frames: 1,
    };
    sink.begin(cfg).unwrap();
    sink.push_frame(FrameIndex(0), &tick_frame(0)).unwrap();
    sink.no_data().unwrap();
    sink.end().unwrap();

    sink.begin(cfg).unwrap();
    assert!(sink.frames().is_empty());
    assert!(!sink.saw_no_data());
    assert!(!sink.ended());
}
