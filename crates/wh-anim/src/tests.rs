//! Unit tests for wh-anim.

#[cfg(test)]
mod helpers {
    use wh_core::Point;

    pub fn p(x: f64, y: f64) -> Point {
        Point::new(x, y)
    }

    /// depot → (10,0) → depot
    pub fn one_stop() -> Vec<Point> {
        vec![p(0.0, 0.0), p(10.0, 0.0), p(0.0, 0.0)]
    }

    /// depot → (10,0) → (20,0) → depot
    pub fn two_stops() -> Vec<Point> {
        vec![p(0.0, 0.0), p(10.0, 0.0), p(20.0, 0.0), p(0.0, 0.0)]
    }
}

// ── interpolate / raw_len ─────────────────────────────────────────────────────

#[cfg(test)]
mod segment {
    use super::helpers::p;
    use crate::{interpolate, raw_len};

    #[test]
    fn interpolate_includes_both_endpoints() {
        let pts: Vec<_> = interpolate(p(0.0, 0.0), p(10.0, 0.0), 5).collect();
        assert_eq!(pts.len(), 5);
        assert_eq!(pts[0], p(0.0, 0.0));
        assert_eq!(pts[2], p(5.0, 0.0));
        assert_eq!(pts[4], p(10.0, 0.0));
    }

    #[test]
    fn interpolate_single_step_is_the_destination() {
        let pts: Vec<_> = interpolate(p(1.0, 2.0), p(3.0, 4.0), 1).collect();
        assert_eq!(pts, [p(3.0, 4.0)]);
    }

    #[test]
    fn interpolate_zero_steps_is_empty() {
        assert_eq!(interpolate(p(0.0, 0.0), p(1.0, 1.0), 0).count(), 0);
    }

    #[test]
    fn raw_len_formula() {
        assert_eq!(raw_len(3, 5, 3), 13);
        assert_eq!(raw_len(4, 5, 3), 21);
        assert_eq!(raw_len(2, 7, 3), 7);
        assert_eq!(raw_len(1, 5, 3), 0);
    }
}

// ── Raw expansion ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod expand {
    use super::helpers::{one_stop, p, two_stops};
    use crate::segment::expand;
    use crate::FramePhase;

    #[test]
    fn one_stop_layout() {
        let f = expand(&one_stop(), 5, 3);
        assert_eq!(f.len(), 13);

        // Outbound leg.
        let xs: Vec<f64> = f[0..5].iter().map(|f| f.pos.x).collect();
        assert_eq!(xs, [0.0, 2.5, 5.0, 7.5, 10.0]);
        assert!(f[0..5].iter().all(|f| f.phase() == FramePhase::Moving));

        // Dwell at the stop.
        assert!(f[5..8].iter().all(|f| f.is_dwelling && f.pos == p(10.0, 0.0)));

        // Return leg, no trailing dwell.
        assert_eq!(f[8].pos, p(10.0, 0.0));
        assert_eq!(f[12].pos, p(0.0, 0.0));
        assert!(f[8..].iter().all(|f| !f.is_dwelling));
    }

    #[test]
    fn waypoints_are_hit_exactly() {
        let path = vec![p(0.0, 0.0), p(3.3, 7.1), p(9.9, 0.1), p(0.0, 0.0)];
        let f = expand(&path, 7, 2);
        // Leg ends at 6, 6+2+7=15, 15+2+7=24.
        assert_eq!(f[0].pos, path[0]);
        assert_eq!(f[6].pos, path[1]);
        assert_eq!(f[15].pos, path[2]);
        assert_eq!(f[24].pos, path[3]);
        assert_eq!(f.len(), 25);
    }

    #[test]
    fn stop_index_skips_first_and_last_leg() {
        // depot → a → b → c → depot: legs 0..3
        let path = vec![p(0.0, 0.0), p(1.0, 0.0), p(2.0, 0.0), p(3.0, 0.0), p(0.0, 0.0)];
        let f = expand(&path, 2, 1);
        let per_leg = |leg: usize| {
            let start = leg * 3;
            f[start].stop_index
        };
        assert_eq!(per_leg(0), 0);
        assert_eq!(per_leg(1), 0);
        assert_eq!(per_leg(2), 1);
        assert_eq!(per_leg(3), 2);
        assert!(f.windows(2).all(|w| w[0].stop_index <= w[1].stop_index));
    }

    #[test]
    fn dwell_carries_the_advanced_stop_index() {
        // depot → a → b → c → depot, S=2, D=1: dwells at steps 2, 5, 8.
        let path = vec![p(0.0, 0.0), p(1.0, 0.0), p(2.0, 0.0), p(3.0, 0.0), p(0.0, 0.0)];
        let f = expand(&path, 2, 1);
        let dwells: Vec<_> = f.iter().filter(|f| f.is_dwelling).map(|f| f.stop_index).collect();
        assert_eq!(dwells, [0, 1, 2]);
        assert_eq!(f[5].pos, p(2.0, 0.0));
        assert_eq!(f[5].stop_index, 1);
    }

    #[test]
    fn zero_dwell_has_no_dwelling_frames() {
        let f = expand(&two_stops(), 4, 0);
        assert_eq!(f.len(), 12);
        assert!(f.iter().all(|f| !f.is_dwelling));
    }

    #[test]
    fn single_step_collapses_to_waypoints() {
        let f = expand(&two_stops(), 1, 0);
        let pos: Vec<_> = f.iter().map(|f| f.pos).collect();
        assert_eq!(pos, [p(10.0, 0.0), p(20.0, 0.0), p(0.0, 0.0)]);
    }

    #[test]
    fn raw_frames_are_never_finished() {
        let f = expand(&two_stops(), 5, 3);
        assert!(f.iter().all(|f| !f.is_finished));
    }
}

// ── Synchronization ───────────────────────────────────────────────────────────

#[cfg(test)]
mod synth {
    use wh_core::{AgentId, AnimationConfig, Point};

    use super::helpers::{one_stop, p, two_stops};
    use crate::{synthesize, synthesize_with, AnimError, Animation, FramePhase};

    #[test]
    fn empty_input_yields_empty_animation() {
        let paths: Vec<Vec<Point>> = Vec::new();
        let a = synthesize(&paths, 5, 3).unwrap();
        assert_eq!(a, Animation::empty());
        assert_eq!(a.max_frames(), 0);
        assert!(a.is_empty());
    }

    #[test]
    fn sequences_share_the_longest_length() {
        let a = synthesize(&[one_stop(), two_stops()], 5, 3).unwrap();
        assert_eq!(a.max_frames(), 21);
        assert_eq!(a.agent_count(), 2);
        assert!(a.sequences().iter().all(|s| s.len() == 21));

        let short = a.sequence(AgentId(0)).unwrap();
        assert_eq!(short.raw_len(), 13);
        assert_eq!(short.padding(), 8);
    }

    #[test]
    fn padding_holds_the_final_frame_finished() {
        let a = synthesize(&[one_stop(), two_stops()], 5, 3).unwrap();
        let short = a.sequence(AgentId(0)).unwrap();
        let last_raw = short.get(12).unwrap();

        assert!(!last_raw.is_finished);
        for f in &short.frames()[13..] {
            assert_eq!(f.pos, last_raw.pos);
            assert_eq!(f.stop_index, last_raw.stop_index);
            assert_eq!(f.phase(), FramePhase::Finished);
        }
        assert_eq!(a.finish_step(AgentId(0)), Some(13));
    }

    #[test]
    fn longest_agent_is_never_finished() {
        let a = synthesize(&[one_stop(), two_stops()], 5, 3).unwrap();
        assert_eq!(a.finish_step(AgentId(1)), None);
        assert_eq!(a.sequence(AgentId(1)).unwrap().padding(), 0);
    }

    #[test]
    fn open_path_padding_is_not_finished() {
        let open = vec![p(0.0, 0.0), p(5.0, 5.0)];
        let a = synthesize(&[open, two_stops()], 5, 3).unwrap();
        let s = a.sequence(AgentId(0)).unwrap();
        assert!(s.padding() > 0);
        assert_eq!(s.finished_from(), None);
        assert_eq!(s.last().unwrap().pos, p(5.0, 5.0));
    }

    #[test]
    fn step_iterates_agents_in_order() {
        let a = synthesize(&[one_stop(), two_stops()], 5, 3).unwrap();
        let at_4: Vec<_> = a.step(4).map(|f| f.pos).collect();
        assert_eq!(at_4, [p(10.0, 0.0), p(10.0, 0.0)]);
        assert_eq!(a.step(21).count(), 0);
        assert!(a.frame(AgentId(2), 0).is_none());
    }

    #[test]
    fn degenerate_route_stays_at_depot() {
        let depot_only = vec![p(0.0, 0.0), p(0.0, 0.0)];
        let a = synthesize(&[depot_only], 6, 3).unwrap();
        assert_eq!(a.max_frames(), 6);
        let s = a.sequence(AgentId(0)).unwrap();
        assert!(s.positions().all(|q| q == p(0.0, 0.0)));
        assert!(s.frames().iter().all(|f| !f.is_dwelling && f.stop_index == 0));
    }

    #[test]
    fn synthesis_is_deterministic() {
        let paths = [one_stop(), two_stops()];
        assert_eq!(synthesize(&paths, 9, 2).unwrap(), synthesize(&paths, 9, 2).unwrap());
    }

    #[test]
    fn zero_steps_rejected_before_path_checks() {
        let paths = [vec![p(0.0, 0.0)]];
        assert!(matches!(synthesize(&paths, 0, 3), Err(AnimError::InvalidArgument(_))));
    }

    #[test]
    fn short_path_names_the_agent() {
        let paths = [one_stop(), vec![p(1.0, 1.0)]];
        match synthesize(&paths, 5, 3) {
            Err(AnimError::ShortPath { agent, waypoints }) => {
                assert_eq!(agent, AgentId(1));
                assert_eq!(waypoints, 1);
            }
            other => panic!("expected ShortPath, got {other:?}"),
        }
    }

    #[test]
    fn config_driven_synthesis() {
        let cfg = AnimationConfig { steps_between: 5, dwell_time: 3, ..Default::default() };
        let a = synthesize_with(&[one_stop()], &cfg).unwrap();
        assert_eq!(a.max_frames(), 13);
    }

    #[test]
    fn invalid_config_rejected() {
        let cfg = AnimationConfig { dwell_time: -1, ..Default::default() };
        assert!(matches!(synthesize_with(&[one_stop()], &cfg), Err(AnimError::Config(_))));
    }
}

// ── With resolved layouts ─────────────────────────────────────────────────────

#[cfg(test)]
mod resolved {
    use wh_core::{AgentId, LocationId, Point};
    use wh_layout::{resolve_path, LocationTableBuilder};

    use crate::synthesize;

    #[test]
    fn resolved_paths_close_at_the_depot() {
        let mut b = LocationTableBuilder::new();
        b.add(LocationId::DEPOT, "Start", Point::new(0.0, 0.0))
            .add(LocationId(1), "Rack 1", Point::new(10.0, 0.0))
            .add(LocationId(2), "Rack 2", Point::new(20.0, 0.0))
            .add(LocationId(3), "Rack 3", Point::new(20.0, 10.0));
        let table = b.build().unwrap();

        let long = resolve_path(&table, &[LocationId(1), LocationId(2), LocationId(3)]).unwrap();
        let short = resolve_path(&table, &[LocationId(1)]).unwrap();
        let empty = resolve_path(&table, &[]).unwrap();

        let a = synthesize(&[long, short, empty], 10, 3).unwrap();
        assert_eq!(a.max_frames(), 4 * 10 + 3 * 3);

        for agent in [AgentId(1), AgentId(2)] {
            let s = a.sequence(agent).unwrap();
            assert_eq!(s.last().unwrap().pos, Point::new(0.0, 0.0));
            assert_eq!(a.finish_step(agent), Some(s.raw_len()));
        }
        assert_eq!(a.sequence(AgentId(2)).unwrap().raw_len(), 10);
        assert_eq!(a.sequence(AgentId(0)).unwrap().last().unwrap().stop_index, 2);
    }
}
