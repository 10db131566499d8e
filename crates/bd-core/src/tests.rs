//! Unit tests for bd-core primitives.

#[cfg(test)]
mod ids {
    use crate::{PassengerId, SeatId};

    #[test]
    fn seat_index_roundtrip() {
        let id = SeatId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(SeatId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn passenger_ids_start_at_one() {
        assert_eq!(PassengerId::from_slot(0), PassengerId(1));
        assert_eq!(PassengerId(7).slot(), 6);
    }

    #[test]
    fn invalid_sentinels_are_max() {
        assert_eq!(SeatId::INVALID.0, u32::MAX);
        assert_eq!(PassengerId::default(), PassengerId::INVALID);
    }

    #[test]
    fn display() {
        assert_eq!(PassengerId(7).to_string(), "PassengerId(7)");
        assert_eq!(SeatId(0).to_string(), "SeatId(0)");
    }
}

#[cfg(test)]
mod time {
    use crate::{SimClock, Tick};

    #[test]
    fn tick_arithmetic() {
        let t = Tick(10);
        assert_eq!(t + 5, Tick(15));
        assert_eq!(t.offset(3), Tick(13));
        assert_eq!(Tick(15) - Tick(10), 5u64);
        assert_eq!(Tick(15).since(Tick(10)), 5);
    }

    #[test]
    fn clock_advances_before_processing() {
        let mut clock = SimClock::new();
        assert_eq!(clock.elapsed(), 0);
        assert_eq!(clock.advance(), Tick(1));
        assert_eq!(clock.advance(), Tick(2));
        assert_eq!(clock.elapsed(), 2);
        assert_eq!(clock.to_string(), "T2");
    }
}

#[cfg(test)]
mod rng {
    use crate::SimRng;

    #[test]
    fn same_seed_same_stream() {
        let mut a = SimRng::new(7);
        let mut b = SimRng::new(7);
        assert_eq!(a.sample_indices(50, 50), b.sample_indices(50, 50));
    }

    #[test]
    fn sample_is_without_replacement() {
        let mut rng = SimRng::new(3);
        let mut drawn = rng.sample_indices(120, 120);
        drawn.sort_unstable();
        assert_eq!(drawn, (0..120).collect::<Vec<_>>());
    }

    #[test]
    fn partial_sample_stays_in_range() {
        let mut rng = SimRng::new(3);
        let drawn = rng.sample_indices(10, 4);
        assert_eq!(drawn.len(), 4);
        assert!(drawn.iter().all(|&i| i < 10));
    }

    #[test]
    fn gen_bool_extremes_are_certain() {
        let mut rng = SimRng::new(11);
        assert!((0..100).all(|_| rng.gen_bool(1.0)));
        assert!((0..100).all(|_| !rng.gen_bool(0.0)));
        // Out-of-range probabilities are clamped rather than panicking.
        assert!(rng.gen_bool(4.0));
    }

    #[test]
    fn child_streams_are_deterministic() {
        let mut a = SimRng::new(9).child(1);
        let mut b = SimRng::new(9).child(1);
        let xs: Vec<bool> = (0..32).map(|_| a.gen_bool(0.5)).collect();
        let ys: Vec<bool> = (0..32).map(|_| b.gen_bool(0.5)).collect();
        assert_eq!(xs, ys);
    }
}

#[cfg(test)]
mod config {
    use crate::{BdError, BoardingConfig, BoardingOrder};

    #[test]
    fn defaults_describe_full_cabin() {
        let cfg = BoardingConfig::default();
        assert_eq!(cfg.seat_count(), 120);
        assert_eq!(cfg.passenger_count(), 120);
        assert_eq!(cfg.order, BoardingOrder::Random);
        cfg.validate().unwrap();
    }

    #[test]
    fn explicit_passenger_count_wins() {
        let cfg = BoardingConfig { passengers: Some(30), ..Default::default() };
        assert_eq!(cfg.passenger_count(), 30);
        cfg.validate().unwrap();
    }

    #[test]
    fn rejects_zero_rows() {
        let cfg = BoardingConfig { rows: 0, ..Default::default() };
        assert!(matches!(cfg.validate(), Err(BdError::Config(_))));
    }

    #[test]
    fn rejects_zero_seats_per_row() {
        let cfg = BoardingConfig { seats_per_row: 0, ..Default::default() };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn rejects_bad_probabilities() {
        for p in [-0.1, 1.5, f64::NAN] {
            let cfg = BoardingConfig { bag_probability: p, ..Default::default() };
            assert!(cfg.validate().is_err(), "accepted {p}");
        }
    }

    #[test]
    fn rejects_zero_stow_steps() {
        let cfg = BoardingConfig { stow_steps: 0, ..Default::default() };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn rejects_overbooking() {
        let cfg = BoardingConfig { passengers: Some(121), ..Default::default() };
        let err = cfg.validate().unwrap_err();
        assert!(err.to_string().contains("121 passengers"), "{err}");
    }

    #[test]
    fn rejects_overflowing_cabin() {
        let cfg = BoardingConfig {
            rows: u32::MAX,
            seats_per_row: 2,
            ..Default::default()
        };
        assert!(cfg.validate().is_err());
    }
}
