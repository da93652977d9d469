//! Collision response for the rectangular playfield
//!
//! Detection is plain AABB overlap (`Rect::intersects`); the interesting
//! part is the paddle deflection rule, which trades physical realism for
//! controllable rebounds: the further from the paddle's center the ball
//! lands, the steeper the horizontal kick it takes.

use glam::Vec2;

use super::rect::Rect;
use crate::consts::*;

/// Horizontal velocity for a ball that just hit the paddle.
///
/// The contact point runs 0.0 at the paddle's left edge to 1.0 at its
/// right; dead center rebounds straight up, the edges kick at the full
/// deflection speed.
pub fn paddle_deflection(ball_center_x: f32, paddle: &Rect) -> f32 {
    let hit_pos = (ball_center_x - paddle.left()) / paddle.width();
    (hit_pos - 0.5) * PADDLE_DEFLECT_FACTOR
}

/// Reflect `vel` off the side and top walls for a ball occupying `rect`.
///
/// The bottom edge never reflects; crossing it is how a ball is lost.
pub fn reflect_off_walls(rect: &Rect, vel: &mut Vec2) {
    if rect.left() <= 0.0 || rect.right() >= SCREEN_WIDTH {
        vel.x = -vel.x;
    }
    if rect.top() <= 0.0 {
        vel.y = -vel.y;
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn paddle() -> Rect {
        Rect::new(350.0, 550.0, 100.0, 20.0)
    }

    #[test]
    fn dead_center_rebounds_straight_up() {
        assert_eq!(paddle_deflection(400.0, &paddle()), 0.0);
    }

    #[test]
    fn edges_kick_at_full_speed() {
        assert_eq!(paddle_deflection(350.0, &paddle()), -4.0);
        assert_eq!(paddle_deflection(450.0, &paddle()), 4.0);
    }

    #[test]
    fn side_walls_flip_horizontal_velocity() {
        let mut vel = Vec2::new(-4.0, -4.0);
        reflect_off_walls(&Rect::new(-1.0, 300.0, 20.0, 20.0), &mut vel);
        assert_eq!(vel, Vec2::new(4.0, -4.0));

        let mut vel = Vec2::new(4.0, 2.0);
        reflect_off_walls(&Rect::new(SCREEN_WIDTH - 10.0, 300.0, 20.0, 20.0), &mut vel);
        assert_eq!(vel, Vec2::new(-4.0, 2.0));
    }

    #[test]
    fn top_wall_flips_vertical_velocity() {
        let mut vel = Vec2::new(2.0, -4.0);
        reflect_off_walls(&Rect::new(300.0, -1.0, 20.0, 20.0), &mut vel);
        assert_eq!(vel, Vec2::new(2.0, 4.0));
    }

    #[test]
    fn bottom_edge_does_not_reflect() {
        let mut vel = Vec2::new(2.0, 4.0);
        reflect_off_walls(&Rect::new(300.0, SCREEN_HEIGHT + 50.0, 20.0, 20.0), &mut vel);
        assert_eq!(vel, Vec2::new(2.0, 4.0));
    }

    proptest! {
        #[test]
        fn deflection_is_bounded_on_the_paddle(offset in 0.0f32..=1.0) {
            let paddle = paddle();
            let x = paddle.left() + offset * paddle.width();
            let deflection = paddle_deflection(x, &paddle);
            prop_assert!(deflection.abs() <= PADDLE_DEFLECT_FACTOR / 2.0 + f32::EPSILON);
        }
    }
}
