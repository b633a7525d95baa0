//! Unit tests for er-alloc.

use er_core::{IncidentId, InputLimits, PoolConfig, ResourceCatalog, ResourceSpec, Units};
use er_incident::{IncidentRegistry, IncidentSpec, Severity};

use crate::{ClaimLedger, ResourcePool, UnitMatrix};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn default_catalog() -> ResourceCatalog {
    PoolConfig::default().catalog().unwrap()
}

/// Single-type catalog: `Teams` with the given capacity (cap = capacity).
fn teams_catalog(capacity: Units) -> ResourceCatalog {
    PoolConfig { resources: vec![ResourceSpec::new("Teams", capacity, capacity)] }
        .catalog()
        .unwrap()
}

fn spec(severity: u8, required: &[Units], max_claim: &[Units]) -> IncidentSpec {
    IncidentSpec {
        location:  format!("Site{severity}"),
        severity:  Severity(severity),
        required:  required.to_vec(),
        max_claim: max_claim.to_vec(),
    }
}

/// Registry, full pool, and empty ledger for `specs` against `catalog`.
fn setup(
    catalog: &ResourceCatalog,
    specs:   Vec<IncidentSpec>,
) -> (IncidentRegistry, ResourcePool, ClaimLedger) {
    let registry = IncidentRegistry::from_specs(specs, catalog, &InputLimits::default()).unwrap();
    let pool = ResourcePool::new(catalog);
    let ledger = ClaimLedger::from_registry(&registry, catalog.len()).unwrap();
    (registry, pool, ledger)
}

fn matrix(rows: &[&[Units]]) -> UnitMatrix {
    let rows: Vec<Vec<Units>> = rows.iter().map(|r| r.to_vec()).collect();
    let cols = rows.first().map(Vec::len).unwrap_or(0);
    UnitMatrix::from_rows(&rows, cols).unwrap()
}

// ── UnitMatrix ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod unit_matrix {
    use super::*;

    #[test]
    fn ragged_rows_rejected() {
        assert!(UnitMatrix::from_rows(&[vec![1, 2], vec![3]], 2).is_none());
    }

    #[test]
    fn rows_and_column_sums() {
        let m = matrix(&[&[1, 2, 3], &[4, 5, 6]]);
        assert_eq!(m.rows(), 2);
        assert_eq!(m.cols(), 3);
        assert_eq!(m.row(1), &[4, 5, 6]);
        assert_eq!(m.incident(IncidentId(0)), &[1, 2, 3]);
        assert_eq!(m.column_sums(), vec![5, 7, 9]);
    }

    #[test]
    fn zeros_are_zero() {
        let m = UnitMatrix::zeros(3, 2);
        assert_eq!(m.column_sums(), vec![0, 0]);
    }
}

// ── Safety oracle ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod safety {
    use super::*;
    use crate::{is_safe, safe_sequence};

    #[test]
    fn no_incidents_is_safe() {
        let empty = UnitMatrix::zeros(0, 3);
        assert_eq!(safe_sequence(&[1, 1, 1], &empty, &empty), Some(vec![]));
    }

    #[test]
    fn textbook_state_is_safe_with_expected_order() {
        let allocated = matrix(&[&[0, 1, 0], &[2, 0, 0], &[3, 0, 2], &[2, 1, 1], &[0, 0, 2]]);
        let max_claim = matrix(&[&[7, 5, 3], &[3, 2, 2], &[9, 0, 2], &[2, 2, 2], &[4, 3, 3]]);
        let order = safe_sequence(&[3, 3, 2], &allocated, &max_claim).unwrap();
        let ids: Vec<u32> = order.iter().map(|id| id.0).collect();
        assert_eq!(ids, vec![1, 3, 4, 0, 2]);
    }

    #[test]
    fn claim_beyond_any_achievable_work_is_unsafe() {
        // Total units = 2 free + 1 + 1 = 4.  Incident 0 can finish (needs 2),
        // freeing 1 → work 3; incident 1 still needs 19.
        let allocated = matrix(&[&[1], &[1]]);
        let max_claim = matrix(&[&[3], &[20]]);
        assert!(!is_safe(&[2], &allocated, &max_claim));
        assert!(safe_sequence(&[2], &allocated, &max_claim).is_none());
    }

    #[test]
    fn mutual_block_is_unsafe() {
        let allocated = matrix(&[&[2], &[2]]);
        let max_claim = matrix(&[&[10], &[4]]);
        assert!(!is_safe(&[1], &allocated, &max_claim));
    }

    #[test]
    fn needs_exactly_equal_to_work_are_satisfiable() {
        let allocated = matrix(&[&[6], &[0]]);
        let max_claim = matrix(&[&[10], &[10]]);
        assert_eq!(
            safe_sequence(&[4], &allocated, &max_claim),
            Some(vec![IncidentId(0), IncidentId(1)])
        );
    }

    #[test]
    fn later_incident_can_unblock_earlier_one() {
        // Incident 0 only fits after incident 1 releases, which takes a
        // second pass.
        let allocated = matrix(&[&[0], &[3]]);
        let max_claim = matrix(&[&[5], &[4]]);
        assert_eq!(
            safe_sequence(&[2], &allocated, &max_claim),
            Some(vec![IncidentId(1), IncidentId(0)])
        );
    }

    #[test]
    fn inputs_are_not_mutated() {
        let available = vec![3, 3, 2];
        let allocated = matrix(&[&[0, 1, 0], &[2, 0, 0]]);
        let max_claim = matrix(&[&[7, 5, 3], &[3, 2, 2]]);
        let (a, b, c) = (available.clone(), allocated.clone(), max_claim.clone());
        let _ = is_safe(&available, &allocated, &max_claim);
        assert_eq!((a, b, c), (available, allocated, max_claim));
    }
}

// ── Coordinator ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod coordinator {
    use super::*;
    use crate::{AllocError, RejectKind, allocate, release};

    #[test]
    fn grant_then_release_restores_pool() {
        let catalog = default_catalog();
        let (reg, mut pool, mut ledger) = setup(&catalog, vec![spec(7, &[5, 3, 1000], &[5, 3, 1000])]);
        let inc = reg.get(IncidentId(0)).unwrap();

        let grant = allocate(inc, &mut pool, &mut ledger).unwrap();
        assert_eq!(grant.units, vec![5, 3, 1000]);
        assert_eq!(grant.safe_order, vec![IncidentId(0)]);
        assert_eq!(pool.available(), &[10, 7, 4000]);
        assert_eq!(ledger.allocated(IncidentId(0)), &[5, 3, 1000]);
        assert!(pool.is_conserved(&ledger));

        let released = release(IncidentId(0), &mut pool, &mut ledger);
        assert_eq!(released, vec![5, 3, 1000]);
        assert_eq!(pool.available(), &[15, 10, 5000]);
        assert!(ledger.is_clear(IncidentId(0)));
        assert!(pool.is_conserved(&ledger));
    }

    #[test]
    fn insufficient_supply_rejected_without_side_effects() {
        let catalog = PoolConfig {
            resources: vec![
                ResourceSpec::new("Teams", 2, 15),
                ResourceSpec::new("Vehicles", 1, 10),
                ResourceSpec::new("Water", 100, 5000),
            ],
        }
        .catalog()
        .unwrap();
        let (reg, mut pool, mut ledger) = setup(&catalog, vec![spec(7, &[5, 3, 1000], &[5, 3, 1000])]);
        let (pool_before, ledger_before) = (pool.clone(), ledger.clone());

        let err = allocate(reg.get(IncidentId(0)).unwrap(), &mut pool, &mut ledger).unwrap_err();
        assert_eq!(
            err,
            AllocError::InsufficientSupply {
                incident:  IncidentId(0),
                resource:  "Teams".into(),
                required:  5,
                available: 2,
            }
        );
        assert_eq!(err.kind(), RejectKind::InsufficientSupply);
        assert_eq!(pool, pool_before);
        assert_eq!(ledger, ledger_before);
    }

    #[test]
    fn two_full_claims_first_grant_can_still_finish() {
        // Teams pool 10; A and B each require 6 with max claim 10.  After A's
        // tentative grant 4 remain, which covers A's remaining need (10 − 6),
        // so A can finish and free 10 for B: the state is safe.
        let catalog = teams_catalog(10);
        let (reg, mut pool, mut ledger) = setup(&catalog, vec![spec(5, &[6], &[10]), spec(5, &[6], &[10])]);
        let a = reg.get(IncidentId(0)).unwrap();
        let b = reg.get(IncidentId(1)).unwrap();

        let grant = allocate(a, &mut pool, &mut ledger).unwrap();
        assert_eq!(grant.safe_order, vec![IncidentId(0), IncidentId(1)]);
        assert_eq!(pool.available(), &[4]);

        // While A holds its grant, B cannot be supplied at all.
        let err = allocate(b, &mut pool, &mut ledger).unwrap_err();
        assert_eq!(err.kind(), RejectKind::InsufficientSupply);

        release(a.id(), &mut pool, &mut ledger);
        assert!(allocate(b, &mut pool, &mut ledger).is_ok());
        assert_eq!(pool.available(), &[4]);
    }

    #[test]
    fn unsafe_grant_rolled_back_exactly() {
        // B holds 2 (max 10).  Granting A 6 (max 10) leaves 2 free: A still
        // needs 4 and B needs 8, so nobody can finish.
        let catalog = teams_catalog(10);
        let (reg, mut pool, mut ledger) = setup(&catalog, vec![spec(9, &[6], &[10]), spec(3, &[2], &[10])]);
        let a = reg.get(IncidentId(0)).unwrap();
        let b = reg.get(IncidentId(1)).unwrap();

        allocate(b, &mut pool, &mut ledger).unwrap();
        assert_eq!(pool.available(), &[8]);

        let (pool_before, ledger_before) = (pool.clone(), ledger.clone());
        let err = allocate(a, &mut pool, &mut ledger).unwrap_err();
        assert_eq!(err, AllocError::UnsafeGrant { incident: IncidentId(0) });
        assert_eq!(err.kind(), RejectKind::UnsafeGrant);
        assert_eq!(pool, pool_before);
        assert_eq!(ledger, ledger_before);
        assert!(ledger.is_clear(IncidentId(0)));
        assert_eq!(ledger.allocated(IncidentId(1)), &[2]);
    }

    #[test]
    fn claim_above_capacity_is_never_safe() {
        let catalog = teams_catalog(10);
        let (reg, mut pool, mut ledger) = setup(&catalog, vec![spec(5, &[6], &[12])]);
        let err = allocate(reg.get(IncidentId(0)).unwrap(), &mut pool, &mut ledger).unwrap_err();
        assert_eq!(err.kind(), RejectKind::UnsafeGrant);
        assert_eq!(pool.available(), &[10]);
    }

    #[test]
    fn second_allocate_while_holding_is_rejected() {
        let catalog = default_catalog();
        let (reg, mut pool, mut ledger) = setup(&catalog, vec![spec(7, &[1, 1, 1], &[1, 1, 1])]);
        let inc = reg.get(IncidentId(0)).unwrap();
        allocate(inc, &mut pool, &mut ledger).unwrap();
        let before = pool.clone();
        assert_eq!(
            allocate(inc, &mut pool, &mut ledger),
            Err(AllocError::AlreadyAllocated { incident: IncidentId(0) })
        );
        assert_eq!(pool, before);
        assert_eq!(ledger.allocated(IncidentId(0)), &[1, 1, 1]);
    }

    #[test]
    fn ledger_claim_below_required_is_configuration_violation() {
        let catalog = teams_catalog(10);
        let (reg, mut pool, _) = setup(&catalog, vec![spec(5, &[6], &[6])]);
        let mut ledger = ClaimLedger::new(&[vec![1]], 1).unwrap();
        let err = allocate(reg.get(IncidentId(0)).unwrap(), &mut pool, &mut ledger).unwrap_err();
        assert!(matches!(err, AllocError::ConfigurationViolation { .. }));
        assert_eq!(err.kind(), RejectKind::ConfigurationViolation);
        assert_eq!(pool.available(), &[10]);
    }

    #[test]
    fn unknown_incident_rejected() {
        let catalog = teams_catalog(10);
        let (reg, mut pool, _) = setup(&catalog, vec![spec(5, &[6], &[6])]);
        let mut ledger = ClaimLedger::new(&[], 1).unwrap();
        assert_eq!(
            allocate(reg.get(IncidentId(0)).unwrap(), &mut pool, &mut ledger),
            Err(AllocError::UnknownIncident(IncidentId(0)))
        );
    }

    #[test]
    fn ledger_shape_checked() {
        assert_eq!(
            ClaimLedger::new(&[vec![1, 2, 3], vec![1, 2]], 3),
            Err(AllocError::LedgerShape { expected: 3, got: 2 })
        );
    }

    #[test]
    fn release_is_idempotent() {
        let catalog = default_catalog();
        let (reg, mut pool, mut ledger) = setup(&catalog, vec![spec(7, &[2, 2, 2], &[2, 2, 2])]);
        allocate(reg.get(IncidentId(0)).unwrap(), &mut pool, &mut ledger).unwrap();
        release(IncidentId(0), &mut pool, &mut ledger);
        let after_first = pool.clone();
        assert_eq!(release(IncidentId(0), &mut pool, &mut ledger), vec![0, 0, 0]);
        assert_eq!(pool, after_first);
        assert!(release(IncidentId(9), &mut pool, &mut ledger).is_empty());
    }
}

// ── Randomized invariants ─────────────────────────────────────────────────────

#[cfg(test)]
mod invariants {
    use er_core::ScenarioRng;
    use er_incident::IncidentGenerator;

    use super::*;
    use crate::{allocate, is_safe, release};

    /// Hold grants across calls and release at random, checking conservation,
    /// no-partial-grant, and rollback exactness after every step.
    #[test]
    fn random_allocate_release_sequences() {
        let catalog = default_catalog();
        for seed in 0..200u64 {
            let mut generator =
                IncidentGenerator::new(catalog.clone(), InputLimits::default(), seed).headroom(0.6);
            let reg = generator.registry(10).unwrap();
            let mut pool = ResourcePool::new(&catalog);
            let mut ledger = ClaimLedger::from_registry(&reg, catalog.len()).unwrap();
            let mut rng = ScenarioRng::new(seed ^ 0xabcd);

            for _ in 0..40 {
                let inc = reg.at(rng.gen_range(0..reg.len())).unwrap();
                if rng.gen_range(0u32..10) < 3 {
                    release(inc.id(), &mut pool, &mut ledger);
                } else {
                    let (pool_before, ledger_before) = (pool.clone(), ledger.clone());
                    match allocate(inc, &mut pool, &mut ledger) {
                        Ok(grant) => {
                            assert_eq!(grant.units, inc.required());
                            assert!(is_safe(
                                pool.available(),
                                ledger.allocated_matrix(),
                                ledger.max_claim_matrix()
                            ));
                        }
                        Err(_) => {
                            assert_eq!(pool, pool_before, "seed {seed}");
                            assert_eq!(ledger, ledger_before, "seed {seed}");
                        }
                    }
                }

                assert!(pool.is_conserved(&ledger), "seed {seed}");
                for other in reg.iter() {
                    let held = ledger.allocated(other.id());
                    assert!(
                        ledger.is_clear(other.id()) || held == other.required(),
                        "partial grant for {} (seed {seed})",
                        other.id()
                    );
                }
            }
        }
    }
}

// ── Scheduler ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod scheduler {
    use er_incident::IncidentGenerator;

    use super::*;
    use crate::{TieBreak, schedule};

    fn by_severity(severities: &[u8]) -> IncidentRegistry {
        let specs = severities.iter().map(|&s| spec(s, &[1], &[1])).collect();
        IncidentRegistry::from_specs(specs, &teams_catalog(10), &InputLimits::default()).unwrap()
    }

    fn ids(reg: &IncidentRegistry) -> Vec<u32> {
        reg.order().iter().map(|id| id.0).collect()
    }

    #[test]
    fn stable_keeps_id_order_for_ties() {
        let mut reg = by_severity(&[5, 5, 9]);
        schedule(&mut reg, TieBreak::Stable);
        assert_eq!(ids(&reg), vec![2, 0, 1]);
        assert!(reg.is_reordered());
    }

    #[test]
    fn exchange_reproduces_pairwise_swaps() {
        let mut reg = by_severity(&[5, 5, 9]);
        schedule(&mut reg, TieBreak::Exchange);
        assert_eq!(ids(&reg), vec![2, 1, 0]);
    }

    #[test]
    fn distinct_severities_agree_across_tie_breaks() {
        let mut a = by_severity(&[3, 8, 1, 10, 6]);
        let mut b = a.clone();
        schedule(&mut a, TieBreak::Stable);
        schedule(&mut b, TieBreak::Exchange);
        assert_eq!(ids(&a), vec![3, 1, 4, 0, 2]);
        assert_eq!(ids(&a), ids(&b));
    }

    #[test]
    fn output_is_non_increasing_and_a_permutation() {
        let catalog = default_catalog();
        for seed in 0..100u64 {
            for tie_break in [TieBreak::Stable, TieBreak::Exchange] {
                let mut reg = IncidentGenerator::new(catalog.clone(), InputLimits::default(), seed)
                    .registry(10)
                    .unwrap();
                let before = reg.clone();
                schedule(&mut reg, tie_break);

                let sev: Vec<Severity> = reg.iter().map(|i| i.severity()).collect();
                assert!(sev.windows(2).all(|w| w[0] >= w[1]), "{tie_break} seed {seed}: {sev:?}");

                let mut order = ids(&reg);
                order.sort_unstable();
                assert_eq!(order, (0..10).collect::<Vec<u32>>());
                for inc in before.iter() {
                    assert_eq!(reg.get(inc.id()), Some(inc));
                }
            }
        }
    }

    #[test]
    fn tie_break_parses() {
        assert_eq!("Stable".parse::<TieBreak>(), Ok(TieBreak::Stable));
        assert_eq!(" exchange ".parse::<TieBreak>(), Ok(TieBreak::Exchange));
        assert!("random".parse::<TieBreak>().is_err());
        assert_eq!(TieBreak::default(), TieBreak::Stable);
    }
}
