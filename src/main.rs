use macroquad::prelude::*;
use toroidal_life::{Driver, SimulationConfig, input, rendering};

fn window_conf() -> Conf {
    SimulationConfig::default().window_conf()
}

#[macroquad::main(window_conf)]
async fn main() {
    // info+ by default; RUST_LOG overrides
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_secs()
        .try_init();

    let config = SimulationConfig::default();
    let mut driver = match Driver::new(&config) {
        Ok(driver) => driver,
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    };
    log::info!(
        "{}x{} grid, population {}; Space steps, R toggles auto-advance, click toggles a cell, 1-7 + G stamps a preset",
        config.height,
        config.width,
        driver.simulation.population()
    );

    loop {
        let mouse_pos = mouse_position();
        let display = (screen_width(), screen_height());

        // Process input
        input::handle_mouse(&mut driver, mouse_pos, display);
        driver = input::process_keyboard_input(driver);
        driver = input::process_pattern_keys(driver);

        // Update simulation
        driver = driver.tick(get_frame_time());

        // Render
        clear_background(WHITE);
        rendering::draw_grid(&driver.simulation, display);
        rendering::draw_status(&driver);

        next_frame().await;
    }
}
