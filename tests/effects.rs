mod tests {
    use strip_physics_composer::{
        Effect, EffectId, EffectSlot,
        collision::ColorTransfer,
        color::{Rgb, Rgbf},
        effect::{
            BouncingBallsEffect, CometsEffect, CradleConfig, CradleEffect, DigitalRainConfig,
            DigitalRainEffect, FireworksEffect, LayoutPreset,
        },
        entity::Ball,
        simulation::Boundary,
    };

    const TRACK: usize = 120;

    fn in_unit_range(color: Rgbf) -> bool {
        [color.r, color.g, color.b]
            .iter()
            .all(|channel| (0.0..=1.0).contains(channel))
    }

    fn capture<E: Effect>(effect: &mut E, frames: u64) -> Vec<Rgb> {
        let mut out = Vec::new();
        for frame in 0..frames {
            effect.update(frame);
            for index in 0..TRACK {
                out.push(effect.query(index, frame).to_rgb());
            }
        }
        out
    }

    #[test]
    fn test_queries_are_idempotent_and_in_range() {
        for id in EffectId::ALL {
            let mut slot: EffectSlot<TRACK> = id.to_slot(TRACK, 17);
            for frame in 0..600 {
                slot.update(frame);
                for index in 0..TRACK {
                    let first = slot.query(index, frame);
                    let second = slot.query(index, frame);
                    assert_eq!(first, second, "{} at {index}", id.as_str());
                    assert!(in_unit_range(first), "{} at {index}", id.as_str());
                }
            }
        }
    }

    #[test]
    fn test_out_of_track_queries_are_black() {
        for id in EffectId::ALL {
            let mut slot: EffectSlot<TRACK> = id.to_slot(TRACK, 1);
            slot.update(0);
            assert_eq!(slot.query(TRACK, 0), Rgbf::BLACK);
            assert_eq!(slot.query(TRACK + 50, 0), Rgbf::BLACK);
        }
    }

    #[test]
    fn test_reset_replays_identically() {
        for id in EffectId::ALL {
            let mut slot: EffectSlot<TRACK> = id.to_slot(TRACK, 99);
            let first = capture(&mut slot, 300);
            slot.reset();
            let second = capture(&mut slot, 300);
            assert_eq!(first, second, "{}", id.as_str());
        }
    }

    #[test]
    fn test_same_seed_same_output() {
        let mut a = FireworksEffect::<TRACK>::new(TRACK, 5);
        let mut b = FireworksEffect::<TRACK>::new(TRACK, 5);
        assert_eq!(capture(&mut a, 400), capture(&mut b, 400));
    }

    #[test]
    fn test_cradle_momentum_passes_through_the_row() {
        let balls = [
            Ball::new(20.0, 1.5, 8.0),
            Ball::new(28.0, 0.0, 8.0),
            Ball::new(36.0, 0.0, 8.0),
            Ball::new(44.0, 0.0, 8.0),
            Ball::new(52.0, 0.0, 8.0),
        ];
        let config = CradleConfig::default().with_reset_interval(0);
        let mut cradle = CradleEffect::with_balls(100, Boundary::Wall, &balls, config);

        cradle.update(0);
        assert_eq!(cradle.collisions(), 4);

        for frame in 1..10 {
            cradle.update(frame);
            assert_eq!(cradle.collisions(), 0);
        }

        let balls = cradle.balls();
        for ball in &balls[..4] {
            assert_eq!(ball.velocity, 0.0);
        }
        assert_eq!(balls[4].velocity, 1.5);
        assert!(balls[4].position > 60.0);
    }

    #[test]
    fn test_cradle_fixed_layout_restored_on_reset() {
        let balls = [Ball::new(20.0, 1.0, 8.0), Ball::new(60.0, -1.0, 8.0)];
        let config = CradleConfig::default().with_reset_interval(0);
        let mut cradle = CradleEffect::with_balls(100, Boundary::Wall, &balls, config);
        for frame in 0..50 {
            cradle.update(frame);
        }
        cradle.reset();
        assert_eq!(cradle.balls(), &balls);
    }

    #[test]
    fn test_cradle_periodic_reset() {
        let config = CradleConfig::default()
            .with_reset_interval(10)
            .with_layout(LayoutPreset::Classic)
            .with_boundary(Boundary::Wall);
        let mut cradle = CradleEffect::with_config(TRACK, 3, config);
        let start: Vec<f32> = cradle.balls().iter().map(|ball| ball.position).collect();

        for frame in 0..10 {
            cradle.update(frame);
        }
        let moved: Vec<f32> = cradle.balls().iter().map(|ball| ball.position).collect();
        assert_ne!(start, moved);

        // Ten full steps, then the eleventh frame restarts instead of stepping
        cradle.update(10);
        for ball in cradle.balls() {
            assert!(ball.left_edge() >= -1e-4);
            assert_eq!(ball.velocity == 0.0, ball.saturation == 0.0);
        }
        assert_eq!(cradle.collisions(), 0);
    }

    #[test]
    fn test_cradle_layouts_start_inside_the_walls() {
        for len in [16, 60, 64, 65, 67, 96, 100, 120] {
            for layout in LayoutPreset::ALL {
                for seed in 0..4 {
                    let config = CradleConfig::default()
                        .with_layout(layout)
                        .with_boundary(Boundary::Wall)
                        .with_ball_counts(&[15]);
                    let cradle = CradleEffect::with_config(len, seed, config);
                    let balls = cradle.balls();

                    assert_eq!(balls.len(), (len / 8).min(15));
                    for ball in balls {
                        assert!(ball.left_edge() >= -1e-4, "{} on {len}", layout.as_str());
                        assert!(
                            ball.right_edge() <= len as f32 + 1e-4,
                            "{} on {len}",
                            layout.as_str()
                        );
                    }
                    for pair in balls.windows(2) {
                        assert!(pair[1].position - pair[0].position >= 8.0 - 1e-4);
                    }
                }
            }
        }
    }

    #[test]
    fn test_cradle_wall_contact_keeps_balls_inside() {
        let balls = [Ball::new(4.0, 0.0, 8.0), Ball::new(12.5, -1.5, 8.0)];
        let config = CradleConfig::default().with_reset_interval(0);
        let mut cradle = CradleEffect::with_balls(100, Boundary::Wall, &balls, config);

        cradle.update(0);
        assert_eq!(cradle.collisions(), 1);
        let positions: Vec<f32> = cradle.balls().iter().map(|ball| ball.position).collect();
        assert_eq!(positions, vec![4.0, 12.0]);

        for frame in 1..500 {
            cradle.update(frame);
            for ball in cradle.balls() {
                assert!(ball.left_edge() >= -1e-4);
                assert!(ball.right_edge() <= 100.0 + 1e-4);
            }
        }
    }

    #[test]
    fn test_cradle_layouts_fit_and_wrap() {
        for layout in LayoutPreset::ALL {
            for seed in 0..5 {
                let config = CradleConfig::default()
                    .with_layout(layout)
                    .with_boundary(Boundary::Wraparound)
                    .with_reset_interval(0);
                let mut cradle = CradleEffect::with_config(60, seed, config);

                let count = cradle.balls().len();
                assert!((1..=7).contains(&count), "{} has {count}", layout.as_str());

                for frame in 0..500 {
                    cradle.update(frame);
                    for ball in cradle.balls() {
                        assert!((0.0..60.0).contains(&ball.position));
                    }
                }
            }
        }
    }

    #[test]
    fn test_cradle_layout_spacing() {
        let config = CradleConfig::default()
            .with_layout(LayoutPreset::Alternating)
            .with_boundary(Boundary::Wall)
            .with_ball_counts(&[5]);
        let cradle = CradleEffect::with_config(100, 0, config);

        let positions: Vec<f32> = cradle.balls().iter().map(|ball| ball.position).collect();
        assert_eq!(positions, vec![8.0, 29.0, 50.0, 71.0, 92.0]);
        for (index, ball) in cradle.balls().iter().enumerate() {
            assert_eq!(ball.speed() > 0.0, index % 2 == 0);
        }
    }

    #[test]
    fn test_cradle_infect_starts_stationary_balls_white() {
        let config = CradleConfig::default()
            .with_layout(LayoutPreset::Classic)
            .with_transfer(ColorTransfer::Infect)
            .with_ball_counts(&[5]);
        let cradle = CradleEffect::with_config(100, 0, config);

        for ball in cradle.balls() {
            if ball.velocity == 0.0 {
                assert_eq!(ball.saturation, 0.0);
            } else {
                assert_eq!(ball.saturation, 1.0);
            }
        }
    }

    #[test]
    fn test_cradle_single_ball_fits_tiny_track() {
        let config = CradleConfig::default().with_ball_counts(&[15]);
        let cradle = CradleEffect::with_config(12, 0, config);
        assert_eq!(cradle.balls().len(), 1);
    }

    #[test]
    fn test_fireworks_population_cap() {
        let mut effect = FireworksEffect::<TRACK>::new(TRACK, 23);
        let mut most = 0;
        for frame in 0..5_000 {
            effect.update(frame);
            most = most.max(effect.fireworks().len());
            assert!(effect.fireworks().len() <= 3);
        }
        assert!(most >= 1);
    }

    #[test]
    fn test_comets_population_cap() {
        let mut effect = CometsEffect::new(TRACK, 31);
        let mut seen = false;
        for frame in 0..5_000 {
            effect.update(frame);
            assert!(effect.comets().len() <= 3);
            seen |= !effect.comets().is_empty();
        }
        assert!(seen);
    }

    #[test]
    fn test_bouncing_balls_start_and_recharge() {
        let mut effect = BouncingBallsEffect::new(TRACK);
        let heights: Vec<f32> = effect.glows().iter().map(|glow| glow.height).collect();
        assert_eq!(heights, vec![30.0, 60.0, 90.0]);

        for frame in 0..5_000 {
            effect.update(frame);
            for glow in effect.glows() {
                assert!(glow.height >= 0.0 && glow.height <= TRACK as f32);
            }
        }
        assert!(effect.recharges() > 0);
    }

    #[test]
    fn test_digital_rain_cap_and_blinking_heads() {
        let mut effect = DigitalRainEffect::<TRACK>::new(TRACK, 8);
        assert_eq!(effect.max_drops(), 15);

        let bright = Rgb::new(230, 255, 230);
        let dim = Rgb::new(128, 204, 128);
        let mut heads = 0;
        for frame in 0..2_000 {
            effect.update(frame);
            assert!(effect.drops().len() <= 15);
            for drop in effect.drops() {
                let Ok(head) = usize::try_from(drop.head) else {
                    continue;
                };
                if head >= TRACK {
                    continue;
                }
                let expected = if frame % 4 < 2 { bright } else { dim };
                assert_eq!(effect.query(head, frame).to_rgb(), expected);
                heads += 1;
            }
        }
        assert!(heads > 0);
    }

    #[test]
    fn test_digital_rain_minimum_drops() {
        let effect = DigitalRainEffect::<16>::new(16, 0);
        assert_eq!(effect.max_drops(), 5);
    }

    #[test]
    fn test_digital_rain_sparkle_rate() {
        let config = DigitalRainConfig::default().with_spawn_chance(0.0);
        let mut effect = DigitalRainEffect::<TRACK>::with_config(TRACK, 0, config);
        let mut sparkles = 0;
        for frame in 0..1_000 {
            effect.update(frame);
            for index in 0..TRACK {
                if !effect.query(index, frame).is_black() {
                    sparkles += 1;
                }
            }
        }
        // 1% of 120_000 pixel-frames
        assert!((700..1_700).contains(&sparkles));

        let quiet = DigitalRainConfig::default()
            .with_spawn_chance(0.0)
            .with_sparkle(false);
        let mut effect = DigitalRainEffect::<TRACK>::with_config(TRACK, 0, quiet);
        effect.update(0);
        for index in 0..TRACK {
            assert!(effect.query(index, 0).is_black());
        }
    }
}
