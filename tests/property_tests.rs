//! Invariants checked over generated game states.

use proptest::prelude::*;

use tui_pong::core::{collides, Ball, Body, Entity, Field, Game, Goal, Paddle, Wall};
use tui_pong::types::{Position, Side, Vector, DEFAULT_BALL_VELOCITY};

fn unit() -> impl Strategy<Value = i32> {
    prop_oneof![Just(-1), Just(1)]
}

fn entity() -> impl Strategy<Value = Entity> {
    let pos = (0u16..40, 0u16..90).prop_map(|(y, x)| Position::new(y, x));
    (pos, 0u8..4, 1u16..30, unit(), unit()).prop_map(|(pos, kind, len, vy, vx)| -> Entity {
        match kind {
            0 => Wall::new(pos, len).into(),
            1 => Goal::new(pos, len).into(),
            2 => Ball::with_velocity(pos, Vector::new(vy, vx)).into(),
            _ => Paddle::new(Side::Left, pos).into(),
        }
    })
}

fn new_game() -> Game {
    Game::new(Field::new(24, 80).unwrap())
}

proptest! {
    #[test]
    fn collides_is_symmetric(a in entity(), b in entity()) {
        prop_assert_eq!(collides(&a, &b), collides(&b, &a));
    }

    #[test]
    fn bounce_x_twice_is_identity(y in 0u16..24, x in 0u16..80, vy in unit(), vx in unit()) {
        let mut ball = Ball::with_velocity(Position::new(y, x), Vector::new(vy, vx));
        let before = ball;
        ball.bounce_x();
        ball.bounce_x();
        prop_assert_eq!(ball, before);
    }

    #[test]
    fn goal_tick_respawns_at_center(
        row in 1u16..23,
        right in any::<bool>(),
        vy in unit(),
        vx in unit(),
    ) {
        let mut game = new_game();
        let col = if right { 78 } else { 1 };
        game.set_ball(Ball::with_velocity(Position::new(row, col), Vector::new(vy, vx)));
        game.tick().unwrap();

        prop_assert_eq!(game.ball().position(), Position::new(12, 40));
        prop_assert_eq!(game.ball().velocity(), DEFAULT_BALL_VELOCITY);
        prop_assert_eq!(game.player().score() + game.opponent().score(), 1);
    }

    #[test]
    fn opponent_steps_up_toward_ball_above(
        top in 2u16..=18,
        row in 2u16..=16,
        col in 10u16..=60,
        vy in unit(),
    ) {
        // The ball stays strictly above the paddle after its own move.
        prop_assume!(row + 2 <= top);

        let mut game = new_game();
        game.set_paddle(Paddle::new(Side::Right, Position::new(top, 76)));
        game.set_ball(Ball::with_velocity(Position::new(row, col), Vector::new(vy, 1)));
        game.tick().unwrap();

        prop_assert_eq!(game.opponent().top_row(), i32::from(top) - 1);
    }

    #[test]
    fn opponent_holds_while_ball_moves_away(
        top in 1u16..=18,
        row in 2u16..=21,
        col in 10u16..=60,
        vy in unit(),
    ) {
        let mut game = new_game();
        game.set_paddle(Paddle::new(Side::Right, Position::new(top, 76)));
        game.set_ball(Ball::with_velocity(Position::new(row, col), Vector::new(vy, -1)));
        game.tick().unwrap();

        prop_assert_eq!(game.opponent().position(), Position::new(top, 76));
    }

    #[test]
    fn paddle_up_against_top_wall_never_moves(repeats in 1usize..50, x in 0u16..80) {
        let top = Wall::new(Position::new(0, 0), 80);
        let bottom = Wall::new(Position::new(23, 0), 80);
        let mut paddle = Paddle::new(Side::Left, Position::new(1, x));
        for _ in 0..repeats {
            prop_assert_eq!(paddle.move_by(-1, &top, &bottom), Ok(false));
        }
        prop_assert_eq!(paddle.position(), Position::new(1, x));
    }
}
