use macroquad::prelude::*;
use tilegrid::{load_image, window_conf_from_level, Body, CollisionFilter, Level};

const LEVEL: &str = "demos/assets/level.json";
const GRAVITY: f32 = 0.2;
const JUMP_SPEED: f32 = -5.0;
const WALK_SPEED: f32 = 2.0;
// Frames after leaving the ground in which a jump still counts
const COYOTE_FRAMES: u32 = 6;

fn window_conf() -> Conf {
    window_conf_from_level(LEVEL)
}

#[macroquad::main(window_conf)]
async fn main() {
    let level = Level::load(LEVEL).await.expect("Failed to load level");
    let player_img = load_image("demos/assets/player.png")
        .await
        .expect("Failed to load player");
    let mut player = Body::new(player_img, 10.0, 10.0);
    let filter = CollisionFilter::default();
    let mut air_timer = 0;

    loop {
        let mut dx = 0.0;
        if is_key_down(KeyCode::Left) {
            dx -= WALK_SPEED;
        }
        if is_key_down(KeyCode::Right) {
            dx += WALK_SPEED;
        }
        player.velocity.x = dx;

        if is_key_pressed(KeyCode::Up) && air_timer < COYOTE_FRAMES {
            player.velocity.y = JUMP_SPEED;
        }
        player.velocity.y += GRAVITY;

        let hits = player.move_and_collide(&level.tilemap, &filter);
        if hits.bottom {
            player.velocity.y = 0.0;
            air_timer = 0;
        } else {
            air_timer += 1;
        }
        if hits.top {
            player.velocity.y = 0.0;
        }

        level.draw();
        player.draw();

        next_frame().await;
    }
}
