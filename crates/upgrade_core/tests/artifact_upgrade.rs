use data_runtime::ArtifactTier;
use data_runtime::loader::embedded_artifact_table;
use data_runtime::specs::artifact_upgrade::ArtifactUpgradeTable;
use upgrade_core::{CalcError, calculate_artifact_upgrade};

fn table() -> ArtifactUpgradeTable {
    embedded_artifact_table().expect("artifact table")
}

#[test]
fn total_chests_is_sum_of_tiers_for_every_level() {
    let t = table();
    for level in 1..=100 {
        let r = calculate_artifact_upgrade(&t, level).expect("valid level");
        let sum: u32 = r.chests.values().sum();
        assert_eq!(r.total_chests, sum, "level {level}");
    }
}

#[test]
fn level_100_is_maxed() {
    let r = calculate_artifact_upgrade(&table(), 100).unwrap();
    for tier in ArtifactTier::ALL {
        assert_eq!(r.components[tier], 0, "{tier}");
        assert_eq!(r.chests[tier], 0, "{tier}");
    }
    assert_eq!(r.total_chests, 0);
    assert!(r.is_maxed());
}

#[test]
fn tier_boundaries_zero_finished_tiers() {
    let t = table();
    for (level, finished) in [(1, 0), (25, 1), (50, 2), (70, 3), (85, 4)] {
        let r = calculate_artifact_upgrade(&t, level).unwrap();
        for (i, tier) in ArtifactTier::ALL.into_iter().enumerate() {
            if i < finished {
                assert_eq!(r.components[tier], 0, "level {level} {tier}");
                assert_eq!(r.chests[tier], 0, "level {level} {tier}");
            } else {
                assert!(r.components[tier] > 0, "level {level} {tier}");
                assert!(r.chests[tier] > 0, "level {level} {tier}");
            }
        }
    }
}

#[test]
fn level_80_mid_violet() {
    let r = calculate_artifact_upgrade(&table(), 80).unwrap();
    assert_eq!(r.components[ArtifactTier::Violet], 210);
    assert_eq!(r.chests[ArtifactTier::Violet], 70);
    assert_eq!(r.components[ArtifactTier::Orange], 555);
    assert_eq!(r.chests[ArtifactTier::Orange], 278);
    assert_eq!(r.total_chests, 348);
}

#[test]
fn level_1_needs_every_tier() {
    let r = calculate_artifact_upgrade(&table(), 1).unwrap();
    assert_eq!(r.components[ArtifactTier::White], 166);
    assert_eq!(r.chests[ArtifactTier::White], 9);
    assert_eq!(r.components[ArtifactTier::Blue], 360);
    assert_eq!(r.chests[ArtifactTier::Blue], 72);
    assert_eq!(r.total_chests, 549);
}

#[test]
fn first_level_of_a_tier_skips_its_start_cost() {
    // At 26 the artifact already sits at green's start, so green's first entry
    // is not owed.
    let t = table();
    let at_25 = calculate_artifact_upgrade(&t, 25).unwrap();
    let at_26 = calculate_artifact_upgrade(&t, 26).unwrap();
    let first = t.tier(ArtifactTier::Green).costs[0];
    assert_eq!(
        at_25.components[ArtifactTier::Green] - at_26.components[ArtifactTier::Green],
        first
    );
}

#[test]
fn float_levels_accepted_when_whole() {
    let t = table();
    assert_eq!(
        calculate_artifact_upgrade(&t, 80.0_f64).unwrap(),
        calculate_artifact_upgrade(&t, 80_u32).unwrap()
    );
}

#[test]
fn invalid_levels_rejected() {
    let t = table();
    let expected = CalcError::InvalidArgument(
        "Current level must be an integer between 1 and 100 inclusive.".to_string(),
    );
    assert_eq!(calculate_artifact_upgrade(&t, 0), Err(expected.clone()));
    assert_eq!(calculate_artifact_upgrade(&t, 101), Err(expected.clone()));
    assert_eq!(calculate_artifact_upgrade(&t, 50.5), Err(expected.clone()));
    assert_eq!(calculate_artifact_upgrade(&t, f64::NAN), Err(expected.clone()));
    assert_eq!(calculate_artifact_upgrade(&t, -7_i64), Err(expected));
}
