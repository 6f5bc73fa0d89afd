#[cfg(test)]
mod trails {
    use crate::config::Domain;
    use crate::particle::{ChargeSign, Particle};
    use ultraviolet::{Vec2, Vec3};

    fn wide_open() -> Domain {
        Domain {
            width: 1.0e6,
            height: 1.0e6,
            margin: 1.5,
        }
    }

    fn drifting_particle() -> Particle {
        Particle::new(
            Vec3::zero(),
            Vec3::new(10.0, 0.0, 0.0),
            ChargeSign::Neutral,
            1.0,
        )
    }

    #[test]
    fn trail_never_exceeds_cap() {
        let mut p = drifting_particle();
        for _ in 0..50 {
            p.update(0.02, Vec2::zero(), Vec3::zero(), 10, &wide_open());
            assert!(p.trail.len() <= 10);
        }
        assert_eq!(p.trail.len(), 10);
    }

    #[test]
    fn eviction_drops_the_oldest_point_first() {
        let mut p = drifting_particle();
        let mut visited = Vec::new();
        for _ in 0..15 {
            p.update(0.02, Vec2::zero(), Vec3::zero(), 10, &wide_open());
            visited.push(p.pos);
        }
        // front of the trail is the 6th visited position, back the newest
        assert_eq!(p.trail.front().copied(), Some(visited[5]));
        assert_eq!(p.trail.back().copied(), Some(visited[14]));
    }

    #[test]
    fn lowering_the_cap_trims_immediately() {
        let mut p = drifting_particle();
        for _ in 0..20 {
            p.update(0.02, Vec2::zero(), Vec3::zero(), 20, &wide_open());
        }
        let newest = *p.trail.back().unwrap();
        p.set_trail_cap(5);
        assert_eq!(p.trail.len(), 5);
        assert_eq!(p.trail.back().copied(), Some(newest));
    }

    #[test]
    fn raising_the_cap_keeps_existing_points() {
        let mut p = drifting_particle();
        for _ in 0..5 {
            p.update(0.02, Vec2::zero(), Vec3::zero(), 5, &wide_open());
        }
        p.set_trail_cap(50);
        assert_eq!(p.trail.len(), 5);
    }

    #[test]
    fn zero_cap_keeps_trail_empty() {
        let mut p = drifting_particle();
        for _ in 0..5 {
            p.update(0.02, Vec2::zero(), Vec3::zero(), 0, &wide_open());
            assert!(p.trail.is_empty());
        }
    }

    #[test]
    fn clear_trail_collapses_to_latest_point() {
        let mut p = drifting_particle();
        for _ in 0..8 {
            p.update(0.02, Vec2::zero(), Vec3::zero(), 20, &wide_open());
        }
        let newest = *p.trail.back().unwrap();
        p.clear_trail();
        assert_eq!(p.trail.len(), 1);
        assert_eq!(p.trail.front().copied(), Some(newest));
    }

    #[test]
    fn clear_trail_on_fresh_particle_uses_current_position() {
        let mut p = Particle::new(
            Vec3::new(3.0, 4.0, 5.0),
            Vec3::zero(),
            ChargeSign::Neutral,
            1.0,
        );
        p.clear_trail();
        assert_eq!(p.trail.len(), 1);
        assert_eq!(p.trail.front().copied(), Some(Vec3::new(3.0, 4.0, 5.0)));
    }
}
