use cubepixel::{
    platform::{HeadlessWindow, WindowTrait},
    scene::{self, Glyph, Orbit},
    Color, DisplaySet, DriverError, FrameDriver, HostBuilder, Rect, Surface,
};
use tinyrand::{Seeded, StdRand};

const BACKGROUND: Color = Color::new(182, 218, 85);
const SQUARE: Color = Color::new(36, 182, 255);

fn setup(surface: &mut Surface) {
    surface.fill_all(BACKGROUND);
    surface.fill_rect(SQUARE, 24, 24, 80, 80);
}

fn snapshot(displays: &DisplaySet) -> Vec<Vec<Color>> {
    displays.iter().map(|s| s.displayed().to_vec()).collect()
}

#[test]
fn setup_then_one_tick_draws_the_dot() {
    let mut displays = DisplaySet::new(2, 128, 128);
    let mut driver = FrameDriver::new();

    driver.run_setup(&mut displays, setup).unwrap();
    for surface in &displays {
        assert_eq!(surface.displayed_pixel(0, 0), Some(BACKGROUND));
        assert_eq!(surface.displayed_pixel(64, 64), Some(SQUARE));
    }
    let before = snapshot(&displays);

    let dot_color = Color::new(200, 10, 10);
    let tick = driver
        .run_tick(&mut displays, |surface, tick| {
            scene::draw_dot(surface, tick, dot_color)
        })
        .unwrap();
    assert_eq!(tick, 1);

    let (dot_x, dot_y) = scene::dot_origin(tick);
    let dot = Rect::new(dot_x, dot_y, scene::DOT_SIZE, scene::DOT_SIZE);
    let (columns, rows) = dot.clip(128, 128).unwrap();

    for (surface, before) in displays.iter().zip(before) {
        for y in 0..128usize {
            for x in 0..128usize {
                let pixel = surface.displayed()[y * 128 + x];
                if columns.contains(&x) && rows.contains(&y) {
                    assert_eq!(pixel, dot_color);
                    assert_ne!(pixel, before[y * 128 + x]);
                } else {
                    assert_eq!(pixel, before[y * 128 + x], "pixel ({x}, {y})");
                }
            }
        }
    }
}

#[test]
fn tick_before_setup_leaves_everything_untouched() {
    let mut displays = DisplaySet::new(2, 128, 128);
    let mut driver = FrameDriver::new();
    let before = snapshot(&displays);

    let result = driver.run_tick(&mut displays, |surface, _| surface.fill_all(SQUARE));

    assert_eq!(result, Err(DriverError::NotInitialized));
    assert_eq!(snapshot(&displays), before);
    assert_eq!(driver.current_tick(), 0);
}

#[test]
fn thousand_ticks_end_at_thousand() {
    let mut displays = DisplaySet::new(2, 128, 128);
    let mut driver = FrameDriver::new();
    driver.run_setup(&mut displays, setup).unwrap();

    let mut last = 0;
    for _ in 0..1000 {
        let tick = driver.run_tick(&mut displays, |_, _| {}).unwrap();
        assert_eq!(tick, last + 1);
        last = tick;
    }
    assert_eq!(driver.current_tick(), 1000);
}

#[test]
fn sample_app_runs_headless() {
    let mut host = HostBuilder::with_cubes(3)
        .tick_rate(1000)
        .max_ticks(10)
        .build();

    let mut window: HeadlessWindow = host
        .open(|surface| scene::draw_intro(surface, Glyph::HelloWorld))
        .unwrap();
    let (width, height) = window.window_dimensions();
    assert_eq!(height, 128);
    assert!(width > 3 * 128);

    let mut orbit = Orbit::new(StdRand::seed(1));
    host.run_in(&mut window, |surface, tick| orbit.draw(surface, tick));

    assert_eq!(host.current_tick(), 10);
    assert_eq!(window.presented(), 11);
    for surface in host.displays() {
        assert_eq!(surface.displayed_pixel(0, 0), Some(scene::BACKGROUND));
        assert_eq!(surface.displayed_pixel(64, 64), Some(scene::HIGHLIGHT));
    }
}

#[test]
fn dot_color_is_shared_across_cubes() {
    let mut displays = DisplaySet::new(3, 128, 128);
    let mut driver = FrameDriver::new();
    driver.run_setup(&mut displays, setup).unwrap();

    let mut orbit = Orbit::new(StdRand::seed(99));
    let tick = driver
        .run_tick(&mut displays, |surface, tick| orbit.draw(surface, tick))
        .unwrap();

    let (x, y) = scene::dot_origin(tick);
    let colors: Vec<_> = displays
        .iter()
        .map(|s| s.displayed_pixel(x as u32, y as u32).unwrap())
        .collect();
    assert!(colors.windows(2).all(|pair| pair[0] == pair[1]));
}
