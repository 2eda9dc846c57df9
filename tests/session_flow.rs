use grid_snake::game::{Cell, CollisionType, Direction, GameConfig, GameEngine, Phase};

#[test]
fn stepwise_food_collection_steering_and_wall_reset() {
    let mut engine = GameEngine::with_seed(GameConfig::default(), 42);
    let mut session = engine.new_session();

    assert_eq!(session.snake.body, vec![Cell::new(10, 10)]);
    assert_eq!(session.direction, Direction::Right);
    assert_eq!(session.interval_ms, 200);
    assert_eq!(session.phase, Phase::Idle);

    session.start();
    assert!(session.is_running());

    // Eat one food placed directly in the snake's path
    session.food = Cell::new(11, 10);
    let outcome = engine.step(&mut session);
    assert!(outcome.ate_food);
    assert_eq!(session.snake.len(), 2);
    assert_eq!(session.score(), 1);
    assert_eq!(session.interval_ms, 195);
    assert!(engine.check_collision(&session).is_none());

    // Plain translation: length and score unchanged
    session.food = Cell::new(1, 1);
    let outcome = engine.step(&mut session);
    assert!(!outcome.ate_food);
    assert_eq!(session.snake.len(), 2);
    assert_eq!(session.score(), 1);
    assert_eq!(session.snake.head(), Cell::new(12, 10));

    // Steering takes effect on the following tick
    session.set_direction(Direction::Up);
    engine.step(&mut session);
    assert_eq!(session.snake.head(), Cell::new(12, 9));

    // Drive into the top wall
    for _ in 0..8 {
        engine.step(&mut session);
        assert!(engine.check_collision(&session).is_none());
    }
    assert_eq!(session.snake.head(), Cell::new(12, 1));

    engine.step(&mut session);
    assert_eq!(session.snake.head(), Cell::new(12, 0));
    assert_eq!(engine.check_collision(&session), Some(CollisionType::Wall));

    engine.reset(&mut session);
    assert_eq!(session.phase, Phase::Idle);
    assert_eq!(session.snake.body, vec![Cell::new(10, 10)]);
    assert_eq!(session.direction, Direction::Right);
    assert_eq!(session.interval_ms, 200);
    assert_eq!(session.score(), 0);
    assert_eq!(session.high_score, 1);
    assert_eq!(session.completed_games, 1);
}

#[test]
fn wall_collision_scenario_at_the_right_edge() {
    let mut engine = GameEngine::with_seed(GameConfig::default(), 1);
    let mut session = engine.new_session();
    session.start();
    session.snake.body = vec![Cell::new(20, 10)];
    session.food = Cell::new(1, 1);

    engine.step(&mut session);
    assert_eq!(session.snake.head(), Cell::new(21, 10));
    assert_eq!(engine.check_collision(&session), Some(CollisionType::Wall));

    engine.reset(&mut session);
    assert_eq!(session.snake.body, vec![Cell::new(10, 10)]);
    assert_eq!(session.direction, Direction::Right);
    assert_eq!(session.interval_ms, 200);
}

#[test]
fn speed_ramp_hits_the_150_boundary_after_ten_foods() {
    let mut engine = GameEngine::with_seed(GameConfig::default(), 3);
    let mut session = engine.new_session();
    session.start();

    // Ten foods straight ahead: 200 - 5 * 10 = 150 exactly
    for i in 0..10 {
        session.food = session.snake.head().neighbor(session.direction);
        let outcome = engine.step(&mut session);
        assert!(outcome.ate_food);
        assert_eq!(session.score(), i + 1);
        assert!(engine.check_collision(&session).is_none());
    }
    assert_eq!(session.interval_ms, 150);
    assert_eq!(session.snake.len(), 11);

    // Below the boundary the decrement switches to 3
    session.set_direction(Direction::Up);
    session.food = session.snake.head().neighbor(Direction::Up);
    engine.step(&mut session);
    assert_eq!(session.interval_ms, 147);
}

#[test]
fn high_score_is_the_running_maximum_over_resets() {
    let mut engine = GameEngine::with_seed(GameConfig::default(), 9);
    let mut session = engine.new_session();

    // First game: two foods, then a reversal into the neck
    session.start();
    for _ in 0..2 {
        session.food = session.snake.head().neighbor(session.direction);
        engine.step(&mut session);
    }
    session.food = Cell::new(1, 1);
    session.set_direction(Direction::Left);
    engine.step(&mut session);
    assert_eq!(
        engine.check_collision(&session),
        Some(CollisionType::SelfCollision)
    );
    engine.reset(&mut session);
    assert_eq!(session.high_score, 2);

    // Second game ends immediately with a lower score
    session.start();
    session.snake.body = vec![Cell::new(20, 10)];
    session.food = Cell::new(1, 1);
    engine.step(&mut session);
    assert_eq!(engine.check_collision(&session), Some(CollisionType::Wall));
    engine.reset(&mut session);

    assert_eq!(session.high_score, 2); // never decreases
    assert_eq!(session.completed_games, 2);
}

#[test]
fn stop_while_idle_leaves_the_session_unchanged() {
    let mut engine = GameEngine::with_seed(GameConfig::default(), 5);
    let mut session = engine.new_session();

    let before = session.clone();
    session.stop();
    assert_eq!(session, before);
}
