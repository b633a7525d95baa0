//! Unit tests for er-core primitives.

#[cfg(test)]
mod ids {
    use crate::{IncidentId, ResourceId};

    #[test]
    fn index_roundtrip() {
        let id = IncidentId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(IncidentId(id.index() as u32), id);
    }

    #[test]
    fn ordering() {
        assert!(IncidentId(0) < IncidentId(1));
        assert!(ResourceId(2) > ResourceId(1));
    }

    #[test]
    fn invalid_sentinels_are_max() {
        assert_eq!(IncidentId::INVALID.0, u32::MAX);
        assert_eq!(ResourceId::INVALID.0, u16::MAX);
        assert_eq!(IncidentId::default(), IncidentId::INVALID);
    }

    #[test]
    fn display() {
        assert_eq!(IncidentId(7).to_string(), "IncidentId(7)");
    }
}

#[cfg(test)]
mod config {
    use crate::{CoreError, PoolConfig, ResourceId, ResourceSpec};

    #[test]
    fn default_pool_matches_reference() {
        let catalog = PoolConfig::default().catalog().unwrap();
        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.capacities(), vec![15, 10, 5000]);
        assert!(catalog.iter().all(|ty| ty.request_cap == ty.capacity));
        assert_eq!(catalog.name(ResourceId(0)), "Teams");
        assert_eq!(catalog.name(ResourceId(2)), "Water");
    }

    #[test]
    fn json_round_trip_with_default_cap() {
        let json = r#"{
            "resources": [
                { "name": "Teams", "capacity": 10 },
                { "name": "Boats", "capacity": 4, "request_cap": 2 }
            ]
        }"#;
        let config = PoolConfig::from_json_str(json).unwrap();
        let catalog = config.catalog().unwrap();
        assert_eq!(catalog.capacities(), vec![10, 4]);
        // Missing request_cap falls back to capacity.
        let caps: Vec<_> = catalog.iter().map(|ty| ty.request_cap).collect();
        assert_eq!(caps, vec![10, 2]);
        assert_eq!(catalog.get(ResourceId(1)).unwrap().name, "Boats");
    }

    #[test]
    fn empty_pool_rejected() {
        let config = PoolConfig { resources: vec![] };
        assert!(matches!(config.catalog(), Err(CoreError::Config(_))));
    }

    #[test]
    fn duplicate_names_rejected() {
        let config = PoolConfig {
            resources: vec![
                ResourceSpec::new("Water", 100, 100),
                ResourceSpec::new("water", 50, 50),
            ],
        };
        assert!(matches!(config.catalog(), Err(CoreError::Config(_))));
    }

    #[test]
    fn malformed_json_is_parse_error() {
        assert!(matches!(
            PoolConfig::from_json_str("{ not json"),
            Err(CoreError::Parse(_))
        ));
    }

    #[test]
    fn missing_file_is_io_error() {
        let result = PoolConfig::from_json_path(std::path::Path::new("/nonexistent/pool.json"));
        assert!(matches!(result, Err(CoreError::Io(_))));
    }
}

#[cfg(test)]
mod resource {
    use crate::{PoolConfig, UnitsDisplay};

    #[test]
    fn units_display_uses_catalog_names() {
        let catalog = PoolConfig::default().catalog().unwrap();
        let shown = UnitsDisplay { catalog: &catalog, units: &[5, 3, 1000] }.to_string();
        assert_eq!(shown, "Teams=5 Vehicles=3 Water=1000");
    }
}

#[cfg(test)]
mod rng {
    use crate::ScenarioRng;

    #[test]
    fn same_seed_same_sequence() {
        let mut a = ScenarioRng::new(99);
        let mut b = ScenarioRng::new(99);
        for _ in 0..100 {
            assert_eq!(a.gen_range(0u32..1000), b.gen_range(0u32..1000));
        }
    }

    #[test]
    fn choose_empty_is_none() {
        let mut rng = ScenarioRng::new(1);
        let empty: [u8; 0] = [];
        assert!(rng.choose(&empty).is_none());
    }
}
