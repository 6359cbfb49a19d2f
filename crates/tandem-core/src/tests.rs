//! Unit tests for tandem-core primitives.

#[cfg(test)]
mod ids {
    use crate::SiteId;

    #[test]
    fn index_roundtrip() {
        let id = SiteId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(SiteId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn ordering() {
        assert!(SiteId(0) < SiteId(1));
        assert!(SiteId(100) > SiteId(99));
    }

    #[test]
    fn invalid_sentinel_is_max() {
        assert_eq!(SiteId::INVALID.0, u32::MAX);
        assert_eq!(SiteId::default(), SiteId::INVALID);
    }

    #[test]
    fn display() {
        assert_eq!(SiteId(7).to_string(), "SiteId(7)");
    }
}

#[cfg(test)]
mod time {
    use crate::Tick;

    #[test]
    fn tick_arithmetic() {
        let t = Tick(10);
        assert_eq!(t + 5, Tick(15));
        assert_eq!(t.offset(3), Tick(13));
        assert_eq!(Tick(15) - Tick(10), 5u32);
        assert_eq!(Tick(15).since(Tick(10)), 5u32);
    }

    #[test]
    fn ordering() {
        assert!(Tick::ZERO < Tick(1));
        assert_eq!(Tick::ZERO, Tick(0));
    }
}

#[cfg(test)]
mod config {
    use crate::PlanConfig;

    fn good() -> PlanConfig {
        PlanConfig { time_budget: 26, beam_width: 20, workers: 4 }
    }

    #[test]
    fn valid_config_passes() {
        assert!(good().validate().is_ok());
        assert_eq!(good().budget().0, 26);
    }

    #[test]
    fn zero_budget_is_legal() {
        let cfg = PlanConfig { time_budget: 0, ..good() };
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn negative_budget_rejected() {
        let cfg = PlanConfig { time_budget: -1, ..good() };
        let err = cfg.validate().unwrap_err();
        assert!(err.to_string().contains("time budget"));
    }

    #[test]
    fn zero_beam_rejected() {
        let cfg = PlanConfig { beam_width: 0, ..good() };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn zero_workers_rejected() {
        let cfg = PlanConfig { workers: 0, ..good() };
        assert!(cfg.validate().is_err());
    }
}
