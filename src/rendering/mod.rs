use macroquad::prelude::*;
use crate::application::Driver;
use crate::domain::GridSimulation;

/// Draw every alive cell as a black rectangle scaled to fill the display.
/// Dead cells are left as the white background.
pub fn draw_grid(simulation: &GridSimulation, display: (f32, f32)) {
    let (height, width) = simulation.dimensions();
    let cell_width = display.0 / width as f32;
    let cell_height = display.1 / height as f32;

    for (row, col, cell) in simulation.cells() {
        if cell.is_alive() {
            draw_rectangle(
                col as f32 * cell_width,
                row as f32 * cell_height,
                cell_width,
                cell_height,
                BLACK,
            );
        }
    }
}

/// One-line status overlay in the top-left corner
pub fn draw_status(driver: &Driver) {
    let simulation = &driver.simulation;
    let text = format!(
        "Gen {}  Pop {}  {}  {:.0}/s  {}  {:.2}ms  [G] {}",
        driver.generation,
        simulation.population(),
        if driver.auto_advance { "Auto" } else { "Step" },
        driver.updates_per_second,
        simulation.algorithm().name(),
        driver.last_advance_time_ms,
        driver.selected().name,
    );
    let background = Color::from_rgba(255, 255, 255, 200);
    draw_rectangle(0.0, 0.0, 8.0 + text.len() as f32 * 9.0, 26.0, background);
    draw_text(&text, 6.0, 19.0, 20.0, Color::from_rgba(200, 30, 30, 255));
}
