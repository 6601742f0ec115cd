use lithoscape_core::config::{LandscapeConfig, SimConfig};
use lithoscape_core::terrain::generation::generate_landscape;
use lithoscape_core::World;

fn build_world(seed: u64) -> World {
    let landscape = LandscapeConfig {
        width: 40,
        height: 30,
        ..Default::default()
    };
    let (raster, quarries) = generate_landscape(&landscape, seed);
    let config = SimConfig {
        num_foragers: 15,
        max_carry: 8,
        time_limit: 100,
        random_walk: false,
        seed: Some(seed),
        ..Default::default()
    };
    World::new(raster, &quarries, config).unwrap()
}

#[test]
fn test_determinism_consistency() {
    let mut world1 = build_world(12345);
    let mut world2 = build_world(12345);

    for _ in 0..100 {
        world1.step().unwrap();
        world2.step().unwrap();
    }

    assert_eq!(world1.foragers.len(), world2.foragers.len());
    for i in 0..world1.foragers.len() {
        let f1 = &world1.foragers[i];
        let f2 = &world2.foragers[i];
        assert_eq!(f1.id, f2.id, "Forager IDs should match at index {}", i);
        assert_eq!(
            f1.position(),
            f2.position(),
            "Forager positions should match at index {}",
            i
        );
        assert_eq!(
            f1.toolkit, f2.toolkit,
            "Forager toolkits should match at index {}",
            i
        );
    }

    assert_eq!(world1.snapshot(), world2.snapshot());
    assert_eq!(world1.metrics.deposits(), world2.metrics.deposits());
    assert_eq!(world1.metrics.exchanges(), world2.metrics.exchanges());
}
