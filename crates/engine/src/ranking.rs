//! Ordering of tallied actors for the suggestion search.

use crate::types::ActorTally;

/// Sort tallies ascending by count so the result can be consumed from the
/// back as a stack, most-shared actor first.
///
/// Equal counts are ordered by actor id descending within the vector, so
/// among equals the lowest id is popped first. The ordering is deterministic
/// for a given tally set.
pub fn rank(mut tallies: Vec<ActorTally>) -> Vec<ActorTally> {
    tallies.sort_by(|a, b| {
        a.count
            .cmp(&b.count)
            .then_with(|| b.actor.id.cmp(&a.actor.id))
    });
    tallies
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ActorRecord;

    fn tally(id: &str, count: u32) -> ActorTally {
        ActorTally {
            actor: ActorRecord {
                id: id.to_string(),
                name: format!("Actor {id}"),
            },
            count,
        }
    }

    #[test]
    fn test_highest_count_pops_first() {
        let mut ranked = rank(vec![tally("a", 1), tally("b", 3), tally("c", 2)]);

        assert_eq!(ranked.pop().unwrap().actor.id, "b");
        assert_eq!(ranked.pop().unwrap().actor.id, "c");
        assert_eq!(ranked.pop().unwrap().actor.id, "a");
        assert!(ranked.pop().is_none());
    }

    #[test]
    fn test_equal_counts_pop_lowest_id_first() {
        let mut ranked = rank(vec![tally("z", 2), tally("a", 2), tally("m", 2)]);

        assert_eq!(ranked.pop().unwrap().actor.id, "a");
        assert_eq!(ranked.pop().unwrap().actor.id, "m");
        assert_eq!(ranked.pop().unwrap().actor.id, "z");
    }

    #[test]
    fn test_empty_tally_set_stays_empty() {
        assert!(rank(Vec::new()).is_empty());
    }
}
