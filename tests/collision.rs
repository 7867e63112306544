mod tests {
    use rand::SeedableRng;
    use rand_pcg::Pcg32;
    use strip_physics_composer::{
        collision::{CollisionResolver, ColorTransfer},
        color::HuePalette,
        entity::Ball,
        simulation::Boundary,
    };

    const DIAMETER: f32 = 8.0;

    fn resolver(boundary: Boundary, transfer: ColorTransfer) -> CollisionResolver {
        CollisionResolver::new(100.0, boundary, transfer, HuePalette::Fire)
    }

    fn rng() -> Pcg32 {
        Pcg32::seed_from_u64(42)
    }

    #[test]
    fn test_head_on_swaps_velocities_and_separates() {
        let mut balls = [
            Ball::new(50.0, 1.0, DIAMETER),
            Ball::new(44.0, 2.0, DIAMETER),
        ];
        let count = resolver(Boundary::Wall, ColorTransfer::Infect).resolve(&mut balls, &mut rng());

        assert_eq!(count, 1);
        // Sorted by position
        assert_eq!(balls[0].velocity, 1.0);
        assert_eq!(balls[1].velocity, 2.0);
        assert_eq!(balls[1].position - balls[0].position, DIAMETER);
        assert_eq!(balls[0].position, 43.0);
        assert_eq!(balls[1].position, 51.0);
    }

    #[test]
    fn test_separation_never_pushes_through_left_wall() {
        let mut balls = [
            Ball::new(4.0, 0.0, DIAMETER),
            Ball::new(11.0, -1.5, DIAMETER),
        ];
        let count = resolver(Boundary::Wall, ColorTransfer::Infect).resolve(&mut balls, &mut rng());

        assert_eq!(count, 1);
        assert_eq!(balls[0].position, 4.0);
        assert_eq!(balls[1].position, 12.0);
        assert_eq!(balls[0].velocity, -1.5);
        assert_eq!(balls[1].velocity, 0.0);
    }

    #[test]
    fn test_separation_never_pushes_through_right_wall() {
        let mut balls = [
            Ball::new(89.0, 1.5, DIAMETER),
            Ball::new(96.0, 0.0, DIAMETER),
        ];
        let count = resolver(Boundary::Wall, ColorTransfer::Infect).resolve(&mut balls, &mut rng());

        assert_eq!(count, 1);
        assert_eq!(balls[0].position, 88.0);
        assert_eq!(balls[1].position, 96.0);
        assert_eq!(balls[1].right_edge(), 100.0);
    }

    #[test]
    fn test_receding_overlap_is_left_alone() {
        let mut balls = [
            Ball::new(40.0, -1.0, DIAMETER),
            Ball::new(45.0, 1.0, DIAMETER),
        ];
        let count = resolver(Boundary::Wall, ColorTransfer::Infect).resolve(&mut balls, &mut rng());

        assert_eq!(count, 0);
        assert_eq!(balls[0].velocity, -1.0);
        assert_eq!(balls[1].velocity, 1.0);
    }

    #[test]
    fn test_touching_is_not_a_collision() {
        let mut balls = [
            Ball::new(40.0, 1.0, DIAMETER),
            Ball::new(48.0, 0.0, DIAMETER),
        ];
        let count = resolver(Boundary::Wall, ColorTransfer::Infect).resolve(&mut balls, &mut rng());
        assert_eq!(count, 0);
    }

    #[test]
    fn test_single_ball_has_no_pairs() {
        let mut balls = [Ball::new(40.0, 1.0, DIAMETER)];
        let count =
            resolver(Boundary::Wraparound, ColorTransfer::Infect).resolve(&mut balls, &mut rng());
        assert_eq!(count, 0);
        let count = resolver(Boundary::Wall, ColorTransfer::Infect).resolve(&mut [], &mut rng());
        assert_eq!(count, 0);
    }

    #[test]
    fn test_wraparound_pair_across_the_seam() {
        let mut balls = [
            Ball::new(2.0, -1.0, DIAMETER),
            Ball::new(50.0, 0.0, DIAMETER),
            Ball::new(96.0, 1.0, DIAMETER),
        ];
        let count =
            resolver(Boundary::Wraparound, ColorTransfer::Infect).resolve(&mut balls, &mut rng());

        assert_eq!(count, 1);
        assert_eq!(balls[0].velocity, 1.0);
        assert_eq!(balls[2].velocity, -1.0);
        // Gap across the seam was 6, each side moves back by 1
        assert_eq!(balls[0].position, 3.0);
        assert_eq!(balls[2].position, 95.0);
    }

    #[test]
    fn test_wall_mode_ignores_the_seam() {
        let mut balls = [
            Ball::new(2.0, -1.0, DIAMETER),
            Ball::new(96.0, 1.0, DIAMETER),
        ];
        let count = resolver(Boundary::Wall, ColorTransfer::Infect).resolve(&mut balls, &mut rng());
        assert_eq!(count, 0);
    }

    #[test]
    fn test_wraparound_positions_are_rewrapped() {
        let mut balls = [
            Ball::new(0.5, 0.0, DIAMETER),
            Ball::new(6.5, -1.0, DIAMETER),
        ];
        // Separation pushes the first ball below zero
        let count =
            resolver(Boundary::Wraparound, ColorTransfer::Infect).resolve(&mut balls, &mut rng());
        assert_eq!(count, 1);
        for ball in &balls {
            assert!((0.0..100.0).contains(&ball.position));
        }
        assert!(balls.iter().any(|ball| ball.position > 90.0));
    }

    #[test]
    fn test_infect_paints_slower_ball() {
        let mut balls = [
            Ball::new(40.0, 1.5, DIAMETER).with_color(0.1, 1.0),
            Ball::new(47.0, 0.0, DIAMETER),
        ];
        resolver(Boundary::Wall, ColorTransfer::Infect).resolve(&mut balls, &mut rng());

        assert_eq!(balls[1].hue, 0.1);
        assert_eq!(balls[1].saturation, 1.0);
    }

    #[test]
    fn test_infect_white_striker_changes_nothing() {
        let mut balls = [
            Ball::new(40.0, 1.5, DIAMETER),
            Ball::new(47.0, 0.0, DIAMETER).with_color(0.5, 1.0),
        ];
        resolver(Boundary::Wall, ColorTransfer::Infect).resolve(&mut balls, &mut rng());

        assert_eq!(balls[0].saturation, 0.0);
        assert_eq!(balls[1].hue, 0.5);
    }

    #[test]
    fn test_standard_recolors_striker_from_palette() {
        let mut balls = [
            Ball::new(40.0, 1.5, DIAMETER),
            Ball::new(47.0, 0.0, DIAMETER),
        ];
        resolver(Boundary::Wall, ColorTransfer::Standard).resolve(&mut balls, &mut rng());

        assert_eq!(balls[0].saturation, 1.0);
        assert!(HuePalette::Fire.hues().contains(&balls[0].hue));
        assert_eq!(balls[1].saturation, 0.0);
    }

    #[test]
    fn test_standard_white_palette_stays_grey() {
        let resolver = CollisionResolver::new(
            100.0,
            Boundary::Wall,
            ColorTransfer::Standard,
            HuePalette::White,
        );
        let mut balls = [
            Ball::new(40.0, 1.5, DIAMETER).with_color(0.3, 1.0),
            Ball::new(47.0, 0.0, DIAMETER),
        ];
        resolver.resolve(&mut balls, &mut rng());
        assert_eq!(balls[0].saturation, 0.0);
    }

    #[test]
    fn test_equal_speed_tie_goes_to_second_ball() {
        let mut balls = [
            Ball::new(40.0, 1.0, DIAMETER).with_color(0.2, 1.0),
            Ball::new(47.0, -1.0, DIAMETER).with_color(0.6, 1.0),
        ];
        resolver(Boundary::Wall, ColorTransfer::Infect).resolve(&mut balls, &mut rng());

        assert_eq!(balls[0].hue, 0.6);
        assert_eq!(balls[1].hue, 0.6);
    }

    #[test]
    fn test_row_of_touching_balls_passes_momentum_through() {
        let mut balls = [
            Ball::new(21.5, 1.5, DIAMETER),
            Ball::new(28.0, 0.0, DIAMETER),
            Ball::new(36.0, 0.0, DIAMETER),
            Ball::new(44.0, 0.0, DIAMETER),
            Ball::new(52.0, 0.0, DIAMETER),
        ];
        let count = resolver(Boundary::Wall, ColorTransfer::Infect).resolve(&mut balls, &mut rng());

        assert_eq!(count, 4);
        for ball in &balls[..4] {
            assert_eq!(ball.velocity, 0.0);
        }
        assert_eq!(balls[4].velocity, 1.5);
    }
}
