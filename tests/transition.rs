mod tests {
    use strip_physics_composer::{color::Rgb, transition::FrameTransition};

    #[test]
    fn test_frame_transition_u8() {
        let mut transition = FrameTransition::new_u8(0);
        assert_eq!(transition.current(), 0);
        assert!(!transition.is_transitioning());
        transition.set(100, 10, 0);
        assert!(transition.is_transitioning());
        assert_eq!(transition.target(), 100);

        transition.tick(5);
        assert_eq!(transition.current(), 50);

        transition.tick(10);
        assert_eq!(transition.current(), 100);
        assert!(!transition.is_transitioning());
    }

    #[test]
    fn test_frame_transition_starts_mid_stream() {
        let mut transition = FrameTransition::new_u8(0);
        transition.set(100, 10, 1_000);

        transition.tick(1_000);
        assert_eq!(transition.current(), 0);

        transition.tick(1_010);
        assert_eq!(transition.current(), 100);
    }

    #[test]
    fn test_frame_transition_zero_duration_is_immediate() {
        let mut transition = FrameTransition::new_u8(10);
        transition.set(200, 0, 3);
        assert_eq!(transition.current(), 200);
        assert!(!transition.is_transitioning());
    }

    #[test]
    fn test_frame_transition_rgb() {
        let mut transition = FrameTransition::new_rgb(Rgb::new(0, 0, 0));
        assert_eq!(transition.current(), Rgb::new(0, 0, 0));
        assert!(!transition.is_transitioning());
        transition.set(Rgb::new(255, 255, 255), 4, 0);
        assert!(transition.is_transitioning());

        transition.tick(4);
        assert_eq!(transition.current(), Rgb::new(255, 255, 255));
    }
}
