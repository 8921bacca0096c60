use macroquad::prelude::*;
use crate::application::Driver;

/// Convert a pixel position to a (row, col) by integer scaling:
/// `row = floor(y / (display_h / height))`, `col = floor(x / (display_w / width))`.
/// The result may lie outside the grid; range checking is the simulation's job.
/// A display with no area maps every pixel to (-1, -1).
pub fn pixel_to_cell(pixel: (f32, f32), display: (f32, f32), dimensions: (usize, usize)) -> (isize, isize) {
    if !(display.0 > 0.0 && display.1 > 0.0) {
        return (-1, -1);
    }
    let (height, width) = dimensions;
    let cell_height = display.1 / height as f32;
    let cell_width = display.0 / width as f32;
    let row = (pixel.1 / cell_height).floor() as isize;
    let col = (pixel.0 / cell_width).floor() as isize;
    (row, col)
}

/// Number keys choosing a preset, in `presets::all_patterns()` order
const PATTERN_KEYS: [KeyCode; 7] = [
    KeyCode::Key1,
    KeyCode::Key2,
    KeyCode::Key3,
    KeyCode::Key4,
    KeyCode::Key5,
    KeyCode::Key6,
    KeyCode::Key7,
];

/// Toggle a cell on left release, stamp the selected preset with G
pub fn handle_mouse(driver: &mut Driver, mouse_pos: (f32, f32), display: (f32, f32)) {
    if is_mouse_button_released(MouseButton::Left) {
        driver.click(mouse_pos, display);
    }
    if is_key_pressed(KeyCode::G) {
        driver.stamp_selected(mouse_pos, display);
    }
}

/// Select a preset with the number keys
pub fn process_pattern_keys(driver: Driver) -> Driver {
    PATTERN_KEYS
        .iter()
        .enumerate()
        .fold(driver, |d, (idx, key)| {
            if is_key_pressed(*key) { d.select_pattern(idx) } else { d }
        })
}

/// Process keyboard input functionally
pub fn process_keyboard_input(driver: Driver) -> Driver {
    type KeyAction = (KeyCode, fn(Driver) -> Driver);

    let actions: [KeyAction; 7] = [
        (KeyCode::Space, Driver::step),
        (KeyCode::R, Driver::toggle_auto),
        (KeyCode::C, Driver::clear),
        (KeyCode::N, Driver::randomize),
        (KeyCode::P, Driver::cycle_algorithm),
        (KeyCode::Up, |d| d.adjust_speed(1.0)),
        (KeyCode::Down, |d| d.adjust_speed(-1.0)),
    ];

    actions.iter().fold(driver, |d, (key, action)| {
        if is_key_pressed(*key) { action(d) } else { d }
    })
}
