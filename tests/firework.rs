mod tests {
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg32;
    use strip_physics_composer::{
        color::Rgb,
        compositor::PixelBuffer,
        entity::{Firework, FireworkState, IGNITION_DELAY, Particle},
    };

    const TRACK: usize = 150;
    const GOLD: Rgb = Rgb {
        r: 255,
        g: 200,
        b: 0,
    };

    #[test]
    fn test_particle_brightness_phases() {
        let particle = Particle::new(75.0, 0.0, 50.0, GOLD);

        assert_eq!(particle.brightness(0), Some(1.0));
        assert_eq!(particle.brightness(IGNITION_DELAY - 1), Some(1.0));
        assert_eq!(particle.brightness(IGNITION_DELAY), Some(1.0));

        let halfway = particle.brightness(IGNITION_DELAY + 25).unwrap();
        assert!((halfway - 0.5_f32.powf(1.5)).abs() < 1e-5);

        assert_eq!(particle.brightness(IGNITION_DELAY + 50), None);
        assert_eq!(particle.brightness(IGNITION_DELAY + 500), None);
    }

    #[test]
    fn test_particle_leaves_track() {
        let particle = Particle::new(140.0, 20.0, 100.0, GOLD);
        assert!(particle.is_visible(0, TRACK));
        assert!(!particle.is_visible(5, TRACK));
    }

    #[test]
    fn test_burst_visibility_window() {
        let mut rng = Pcg32::seed_from_u64(3);
        for _ in 0..20 {
            let life = rng.random_range(30.0..130.0_f32);
            let speed = rng.random_range(-2.0..2.0_f32);
            let particle = Particle::new(75.0, speed, life, GOLD);

            // On track and bright from the burst until the delay elapses
            assert!(particle.is_visible(0, TRACK));
            let end = IGNITION_DELAY + life.ceil() as u64;
            for age in end..end + 200 {
                assert!(!particle.is_visible(age, TRACK));
            }
        }
    }

    #[test]
    fn test_firework_launch_state() {
        let mut rng = Pcg32::seed_from_u64(11);
        let firework = Firework::launch(&mut rng, TRACK);

        assert_eq!(firework.state(), FireworkState::Launching);
        assert_eq!(firework.position(), 0.0);
        assert!(firework.speed() > 0.0);
        assert!((15..=38).contains(&firework.particle_count()));
        assert!(firework.particles().is_empty());
    }

    #[test]
    fn test_firework_eventually_spent() {
        let mut rng = Pcg32::seed_from_u64(5);
        let mut firework = Firework::launch(&mut rng, TRACK);

        let mut burst = false;
        for frame in 0..2_000 {
            firework.advance(&mut rng, frame, TRACK);
            if matches!(firework.state(), FireworkState::Bursting { .. }) {
                burst = true;
            }
            if firework.is_spent() {
                break;
            }
        }
        assert!(firework.is_spent());
        if burst {
            assert!(!firework.particles().is_empty());
        }
    }

    #[test]
    fn test_ignite_then_spent_after_particles_fade() {
        let mut rng = Pcg32::seed_from_u64(8);
        let mut firework = Firework::launch(&mut rng, TRACK);
        let particles = (0..20).map(|i| Particle::new(75.0, 0.1 * i as f32 - 1.0, 60.0, GOLD));
        firework.ignite(100, particles);

        assert_eq!(firework.state(), FireworkState::Bursting { start_frame: 100 });
        assert_eq!(firework.particle_count(), 20);
        assert_eq!(firework.burst_age(130), Some(30));

        firework.advance(&mut rng, 150, TRACK);
        assert!(!firework.is_spent());

        firework.advance(&mut rng, 100 + IGNITION_DELAY + 60, TRACK);
        assert!(firework.is_spent());
    }

    #[test]
    fn test_particles_accumulate_up_to_cap() {
        let mut rng = Pcg32::seed_from_u64(8);
        let mut firework = Firework::launch(&mut rng, TRACK);
        firework.ignite(0, (0..5).map(|_| Particle::new(40.0, 0.0, 60.0, GOLD)));

        let mut buffer = PixelBuffer::<TRACK>::new(TRACK);
        firework.draw(10, &mut buffer);

        assert_eq!(buffer.brightness_at(40), 2.0);
        assert_eq!(buffer.sample(40).to_rgb(), GOLD);
        assert_eq!(buffer.brightness_at(41), 0.0);
    }

    #[test]
    fn test_launch_trail_is_drawn() {
        let mut rng = Pcg32::seed_from_u64(21);
        let mut firework = Firework::launch(&mut rng, TRACK);
        // Climb a little without bursting: stays below the explosion threshold
        for frame in 0..10 {
            firework.advance(&mut rng, frame, TRACK);
        }
        assert_eq!(firework.state(), FireworkState::Launching);

        let mut buffer = PixelBuffer::<TRACK>::new(TRACK);
        firework.draw(10, &mut buffer);
        let lit = (0..TRACK).filter(|&i| buffer.brightness_at(i) > 0.0).count();
        assert!(lit > 0);
        for i in 0..TRACK {
            assert!(buffer.brightness_at(i) <= 1.0);
        }
    }
}
