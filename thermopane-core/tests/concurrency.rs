//! Concurrent writers and readers on the shared display state

use std::thread;

use embassy_futures::block_on;

use thermopane_core::line::{ButtonEvent, LineMap, Page};
use thermopane_core::render::{Geometry, RenderLoop, RenderSpec, TickOutcome};
use thermopane_core::state::{DisplayState, EventHandler};
use thermopane_core::traits::{
    Backlight, HardwareCommandError, RenderError, Renderer, SensorError, TemperatureSensor,
};

const LINES: LineMap = LineMap::new([17, 22, 23, 27]);

struct CountingBacklight {
    commands: usize,
}

impl Backlight for CountingBacklight {
    fn set_brightness(&mut self, level: u16) -> Result<(), HardwareCommandError> {
        assert!(level <= 1000);
        self.commands += 1;
        Ok(())
    }

    fn max_level(&self) -> u16 {
        1000
    }
}

struct FixedSensor(f32);

impl TemperatureSensor for FixedSensor {
    async fn read_temperature(&mut self) -> Result<f32, SensorError> {
        Ok(self.0)
    }
}

#[derive(Default)]
struct CountingRenderer {
    frames: usize,
}

impl Renderer for CountingRenderer {
    fn render_and_display(&mut self, spec: &RenderSpec) -> Result<(), RenderError> {
        assert!(spec.message.starts_with("24C"));
        self.frames += 1;
        Ok(())
    }
}

#[test]
fn concurrent_brightness_presses_are_not_lost() {
    const THREADS: usize = 4;
    const PRESSES: usize = 250;

    let state = DisplayState::new(1000);

    let commands: usize = thread::scope(|s| {
        let workers: Vec<_> = (0..THREADS)
            .map(|_| {
                s.spawn(|| {
                    let backlight = CountingBacklight { commands: 0 };
                    let mut handler = EventHandler::new(&state, LINES, backlight, 100).unwrap();
                    for _ in 0..PRESSES {
                        handler.handle(ButtonEvent { pin: 27 });
                    }
                    handler.backlight().commands
                })
            })
            .collect();
        workers.into_iter().map(|w| w.join().unwrap()).sum()
    });

    // 1000 presses with an 11-press cycle (1000 -> 900 ... 0 -> 1000)
    let total = THREADS * PRESSES;
    assert_eq!(commands, total);
    let expected = (0..total).fold(1000u16, |level, _| {
        if level == 0 {
            1000
        } else {
            level - 100
        }
    });
    assert_eq!(state.backlight_level(), expected);
}

#[test]
fn readers_never_observe_invalid_values() {
    let state = DisplayState::new(1000);

    thread::scope(|s| {
        s.spawn(|| {
            let backlight = CountingBacklight { commands: 0 };
            let mut handler = EventHandler::new(&state, LINES, backlight, 200).unwrap();
            for i in 0..2000u32 {
                let pin = [17, 22, 23, 27][(i % 4) as usize];
                handler.handle(ButtonEvent { pin });
            }
        });

        s.spawn(|| {
            for _ in 0..2000 {
                let snap = state.snapshot();
                assert!(Page::ALL.contains(&snap.active_page));
                assert!(snap.backlight_level <= 1000);
                assert_eq!(snap.backlight_level % 200, 0);
            }
        });

        s.spawn(|| {
            let mut render = RenderLoop::new(
                FixedSensor(24.0),
                CountingRenderer::default(),
                Page::One,
                Geometry::default(),
            );
            for _ in 0..2000 {
                match block_on(render.tick(&state)) {
                    TickOutcome::Rendered { page, .. } => assert_eq!(page, Page::One),
                    TickOutcome::Idle(page) => {
                        assert!(Page::ALL.contains(&page));
                        assert_ne!(page, Page::One);
                    }
                    other => panic!("unexpected tick outcome {:?}", other),
                }
            }
        });
    });
}

#[test]
fn last_page_event_wins_after_concurrent_updates() {
    let state = DisplayState::new(1000);

    thread::scope(|s| {
        for pin in [17, 23] {
            let state = &state;
            s.spawn(move || {
                let backlight = CountingBacklight { commands: 0 };
                let mut handler = EventHandler::new(state, LINES, backlight, 100).unwrap();
                for _ in 0..500 {
                    handler.handle(ButtonEvent { pin });
                }
            });
        }
    });

    // Both writers finished; a single final event decides the page
    let mut handler = EventHandler::new(&state, LINES, CountingBacklight { commands: 0 }, 100).unwrap();
    handler.handle(ButtonEvent { pin: 22 });
    assert_eq!(state.active_page(), Page::Two);
    assert_eq!(state.backlight_level(), 1000);
}
