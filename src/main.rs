use macroquad::prelude::*;
use life_world::{GameState, SimulationConfig, input, rendering};

fn window_conf() -> Conf {
    Conf {
        window_title: "Conway's Game of Life".to_owned(),
        window_width: 1000,
        window_height: 800,
        window_resizable: true,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    life_world::init_tracing();

    let config = SimulationConfig { width: 100, height: 80, ..Default::default() };
    let mut state = match GameState::new(config) {
        Ok(state) => state,
        Err(err) => {
            tracing::error!(%err, "could not create world");
            return;
        }
    };
    tracing::info!(
        width = state.config.width,
        height = state.config.height,
        strategy = state.world.strategy().name(),
        "window started"
    );

    loop {
        state = input::process_keyboard_input(state);
        state = state.tick(get_frame_time());

        let render_start = std::time::Instant::now();
        clear_background(BLACK);
        rendering::draw_world(&state.world);
        rendering::draw_panel(&state);
        state.last_render_time_ms = render_start.elapsed().as_secs_f32() * 1000.0;

        next_frame().await;
    }
}
