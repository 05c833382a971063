// Property tests for roster partitioning.

use bigode_core::{partition_into_teams, partition_with_rng, PartitionError};
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn sorted(mut names: Vec<String>) -> Vec<String> {
    names.sort();
    names
}

fn sizes(groups: &[Vec<String>]) -> Vec<usize> {
    groups.iter().map(Vec::len).collect()
}

fn roster_strategy() -> impl Strategy<Value = Vec<String>> {
    // Small alphabet so duplicates and empty names show up often.
    prop::collection::vec("[a-c]{0,2}", 0..40)
}

proptest! {
    #[test]
    fn every_name_lands_in_exactly_one_group(
        roster in roster_strategy(),
        team_size in 1usize..12,
        seed in any::<u64>(),
    ) {
        let groups = partition_with_rng(&roster, team_size, &mut StdRng::seed_from_u64(seed)).unwrap();
        let flat: Vec<String> = groups.into_iter().flatten().collect();
        prop_assert_eq!(sorted(flat), sorted(roster));
    }

    #[test]
    fn group_shape_follows_division(
        roster in roster_strategy(),
        team_size in 1usize..12,
        seed in any::<u64>(),
    ) {
        let groups = partition_with_rng(&roster, team_size, &mut StdRng::seed_from_u64(seed)).unwrap();
        let len = roster.len();
        let teams = len / team_size;
        let rest = len % team_size;

        if len == 0 {
            prop_assert!(groups.is_empty());
        } else if teams == 0 {
            prop_assert_eq!(sizes(&groups), vec![len]);
        } else {
            let mut expected = vec![team_size; teams];
            if rest > 0 {
                expected.push(rest);
            }
            prop_assert_eq!(sizes(&groups), expected);
        }
    }

    #[test]
    fn shape_is_stable_across_calls(
        roster in roster_strategy(),
        team_size in 1usize..12,
    ) {
        let first = partition_into_teams(&roster, team_size).unwrap();
        let second = partition_into_teams(&roster, team_size).unwrap();
        prop_assert_eq!(sizes(&first), sizes(&second));
    }
}

#[test]
fn zero_team_size_fails_before_partitioning() {
    let roster = vec!["A".to_string()];
    assert_eq!(
        partition_into_teams(&roster, 0),
        Err(PartitionError::InvalidArgument { team_size: 0 })
    );
}

#[test]
fn documented_examples() {
    let five: Vec<String> = ["A", "B", "C", "D", "E"].iter().map(|s| s.to_string()).collect();
    let groups = partition_into_teams(&five, 2).unwrap();
    assert_eq!(sizes(&groups), vec![2, 2, 1]);
    assert_eq!(sorted(groups.concat()), five);

    let three: Vec<String> = ["A", "B", "C"].iter().map(|s| s.to_string()).collect();
    let groups = partition_into_teams(&three, 5).unwrap();
    assert_eq!(groups.len(), 1);
    assert_eq!(sorted(groups[0].clone()), three);
}
