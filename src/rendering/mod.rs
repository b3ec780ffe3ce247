use macroquad::prelude::*;
use crate::application::GameState;
use crate::domain::{LifeState, World};

pub const PANEL_WIDTH: f32 = 180.0;

/// Get the X position where the side panel starts
pub fn panel_x() -> f32 {
    screen_width() - PANEL_WIDTH
}

/// Largest square cell size that fits the whole world in the grid area
pub fn cell_size(world: &World) -> f32 {
    let (width, height) = world.dimensions();
    let fit_x = panel_x() / width as f32;
    let fit_y = screen_height() / height as f32;
    fit_x.min(fit_y).max(1.0)
}

fn state_color(state: LifeState) -> Color {
    match state {
        LifeState::Alive => Color::new(0.0, 1.0, 0.59, 1.0),  // Bright green
        LifeState::Dead => Color::new(0.06, 0.06, 0.06, 1.0), // Very dark gray
        LifeState::Unknown => Color::new(0.5, 0.2, 0.6, 1.0), // Purple, never seeded
    }
}

/// Draw every cell of the world, x across and y down
pub fn draw_world(world: &World) {
    let size = cell_size(world);
    let grid_line_color = Color::from_rgba(40, 40, 40, 255);
    let draw_grid_lines = size >= 4.0;

    for cell in world.cells() {
        let c = cell.coordinate();
        let (screen_x, screen_y) = (c.x as f32 * size, c.y as f32 * size);

        draw_rectangle(screen_x, screen_y, size, size, state_color(cell.current_state()));
        if draw_grid_lines {
            draw_rectangle_lines(screen_x, screen_y, size, size, 1.0, grid_line_color);
        }
    }
}

/// Draw the side panel with controls help and simulation info
pub fn draw_panel(state: &GameState) {
    let px = panel_x() + 10.0;
    draw_rectangle(panel_x(), 0.0, PANEL_WIDTH, screen_height(), Color::from_rgba(30, 30, 30, 255));

    let help = [
        "Controls:",
        "Space: Play/Pause",
        "N: Step",
        "C: Clear",
        "R: Random",
        "P: Serial/Parallel",
        "Up/Down: Speed",
    ];
    help.iter().enumerate().for_each(|(i, text)| {
        let (size, color) = if i == 0 { (16.0, WHITE) } else { (13.0, GRAY) };
        draw_text(text, px, 30.0 + i as f32 * 16.0, size, color);
    });

    let (width, height) = state.world.dimensions();
    let info = [
        format!("Grid: {}x{}", width, height),
        format!("Generation: {}", state.generation()),
        format!("Population: {}", state.world.population()),
        format!("Speed: {:.0} gen/s", state.updates_per_second),
        format!("Mode: {}", state.world.strategy().name()),
        format!("Evolve: {:.2}ms", state.last_evolution_time_ms),
        format!("Render: {:.2}ms", state.last_render_time_ms),
        format!("FPS: {}", get_fps()),
    ];
    info.iter().enumerate().for_each(|(i, text)| {
        draw_text(text, px, 170.0 + i as f32 * 18.0, 14.0, LIGHTGRAY);
    });

    let (status, color) = if state.is_running {
        ("Running", Color::from_rgba(0, 255, 0, 255))
    } else {
        ("Paused", Color::from_rgba(255, 165, 0, 255))
    };
    draw_text(status, px, 330.0, 18.0, color);
}
