use macroquad::{ prelude::*, ui::root_ui };
use bounce_engine as be;
use crate::draw_polygon::draw_disk;

pub fn render_simulation(world_state: &be::WorldState, scene_name: &str, paused: bool) {
    clear_background(Color::from_rgba(20, 20, 20, 255));

    for body in world_state.bodies() {
        draw_disk(body.disk(), WHITE);
    }

    let momentum = world_state.total_momentum();
    root_ui().label(None, &format!("fps: {}", get_fps()));
    root_ui().label(None, &format!("scene: {scene_name}"));
    root_ui().label(None, &format!(
        "collisions: {}",
        if world_state.collisions_enabled() { "on" } else { "off" },
    ));
    root_ui().label(None, &format!("momentum: ({:.1}, {:.1})", momentum.x, momentum.y));
    root_ui().label(None, &format!("energy: {:.0}", world_state.total_kinetic_energy()));
    if paused {
        root_ui().label(None, "PAUSED");
    }
}
