//! Role classification - partition presence into display groups
//!
//! A pure function of (participants, records). Mode does not change the
//! grouping: in Open mode the spectator group is still computed, the panel
//! just shows it under the editors.

use liveroom_core::{Participant, ParticipantId, Role};
use std::collections::HashSet;

use crate::RoleRecords;

/// Participants partitioned by recorded role
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoleGroups {
    /// Arrival order
    pub owners: Vec<Participant>,
    /// Sorted by display name, then id
    pub editors: Vec<Participant>,
    /// Sorted by display name, then id
    pub spectators: Vec<Participant>,
}

impl RoleGroups {
    /// Total participants across all groups
    pub fn len(&self) -> usize {
        self.owners.len() + self.editors.len() + self.spectators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Recorded role of a participant, if present in any group
    pub fn role_of(&self, id: ParticipantId) -> Option<Role> {
        let contains = |group: &[Participant]| group.iter().any(|p| p.id == id);
        if contains(&self.owners) {
            Some(Role::Owner)
        } else if contains(&self.editors) {
            Some(Role::Editor)
        } else if contains(&self.spectators) {
            Some(Role::Spectator)
        } else {
            None
        }
    }

    /// Iterate all participants with their recorded role, group by group
    pub fn iter(&self) -> impl Iterator<Item = (&Participant, Role)> {
        self.owners
            .iter()
            .map(|p| (p, Role::Owner))
            .chain(self.editors.iter().map(|p| (p, Role::Editor)))
            .chain(self.spectators.iter().map(|p| (p, Role::Spectator)))
    }
}

/// Classify participants against the role records.
///
/// Duplicate ids keep their first occurrence.
pub fn classify(participants: &[Participant], records: &RoleRecords) -> RoleGroups {
    let mut seen = HashSet::with_capacity(participants.len());
    let mut groups = RoleGroups::default();

    for participant in participants {
        if !seen.insert(participant.id) {
            continue;
        }

        let group = if records.is_owner(participant.id) {
            &mut groups.owners
        } else if records.is_editor(participant.id) {
            &mut groups.editors
        } else {
            &mut groups.spectators
        };
        group.push(participant.clone());
    }

    groups.editors.sort_by(Participant::display_order);
    groups.spectators.sort_by(Participant::display_order);

    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn names(group: &[Participant]) -> Vec<&str> {
        group.iter().map(|p| p.name.as_str()).collect()
    }

    fn trio() -> Vec<Participant> {
        vec![
            Participant::new(1, "Bea"),
            Participant::new(2, "Alice"),
            Participant::new(3, "Cid"),
        ]
    }

    #[test]
    fn test_owner_with_spectators() {
        let records = RoleRecords::with_ids([ParticipantId::new(1)], []);
        let groups = classify(&trio(), &records);

        assert_eq!(names(&groups.owners), vec!["Bea"]);
        assert!(groups.editors.is_empty());
        assert_eq!(names(&groups.spectators), vec!["Alice", "Cid"]);
    }

    #[test]
    fn test_promoted_editor() {
        let records =
            RoleRecords::with_ids([ParticipantId::new(1)], [ParticipantId::new(2)]);
        let groups = classify(&trio(), &records);

        assert_eq!(names(&groups.editors), vec!["Alice"]);
        assert_eq!(names(&groups.spectators), vec!["Cid"]);
    }

    #[test]
    fn test_ownership_takes_precedence() {
        let records =
            RoleRecords::with_ids([ParticipantId::new(1)], [ParticipantId::new(1)]);
        let groups = classify(&trio(), &records);

        assert_eq!(names(&groups.owners), vec!["Bea"]);
        assert!(groups.editors.is_empty());
        assert_eq!(groups.role_of(ParticipantId::new(1)), Some(Role::Owner));
    }

    #[test]
    fn test_owners_keep_arrival_order() {
        let participants = vec![
            Participant::new(5, "Zoe"),
            Participant::new(6, "Adam"),
            Participant::new(7, "Mia"),
        ];
        let records = RoleRecords::with_ids(
            [ParticipantId::new(7), ParticipantId::new(5), ParticipantId::new(6)],
            [],
        );
        let groups = classify(&participants, &records);

        assert_eq!(names(&groups.owners), vec!["Zoe", "Adam", "Mia"]);
    }

    #[test]
    fn test_equal_names_break_ties_by_id() {
        let participants = vec![
            Participant::new(9, "Sam"),
            Participant::new(3, "Sam"),
            Participant::new(4, "Ann"),
        ];
        let groups = classify(&participants, &RoleRecords::new());

        let ids: Vec<u64> = groups.spectators.iter().map(|p| p.id.0).collect();
        assert_eq!(ids, vec![4, 3, 9]);
    }

    #[test]
    fn test_empty_input() {
        let groups = classify(&[], &RoleRecords::with_ids([ParticipantId::new(1)], []));
        assert!(groups.is_empty());
        assert_eq!(groups, RoleGroups::default());
    }

    #[test]
    fn test_duplicates_keep_first() {
        let participants = vec![
            Participant::new(1, "Bea"),
            Participant::new(1, "Impostor"),
        ];
        let groups = classify(&participants, &RoleRecords::new());

        assert_eq!(names(&groups.spectators), vec!["Bea"]);
    }

    #[test]
    fn test_records_for_absent_ids_are_ignored() {
        let records =
            RoleRecords::with_ids([ParticipantId::new(40)], [ParticipantId::new(41)]);
        let groups = classify(&trio(), &records);

        assert!(groups.owners.is_empty());
        assert!(groups.editors.is_empty());
        assert_eq!(groups.spectators.len(), 3);
    }

    fn arb_session() -> impl Strategy<Value = (Vec<Participant>, RoleRecords)> {
        prop::collection::vec((0u64..24, "[A-Za-z]{0,4}"), 0..20).prop_flat_map(|raw| {
            let mut seen = HashSet::new();
            let participants: Vec<Participant> = raw
                .into_iter()
                .filter(|(id, _)| seen.insert(*id))
                .map(|(id, name)| Participant::new(id, name))
                .collect();
            let ids = prop::collection::hash_set(0u64..24, 0..8);
            (Just(participants), ids.clone(), ids).prop_map(|(participants, owners, editors)| {
                let records = RoleRecords::with_ids(
                    owners.into_iter().map(ParticipantId::new),
                    editors.into_iter().map(ParticipantId::new),
                );
                (participants, records)
            })
        })
    }

    proptest! {
        #[test]
        fn prop_groups_partition_participants((participants, records) in arb_session()) {
            let groups = classify(&participants, &records);

            prop_assert_eq!(groups.len(), participants.len());
            let mut all: Vec<ParticipantId> = groups.iter().map(|(p, _)| p.id).collect();
            all.sort();
            all.dedup();
            prop_assert_eq!(all.len(), participants.len());
            for p in &participants {
                prop_assert!(groups.role_of(p.id).is_some());
            }
        }

        #[test]
        fn prop_groups_are_sorted((participants, records) in arb_session()) {
            let groups = classify(&participants, &records);

            for pair in groups.editors.windows(2) {
                prop_assert!(pair[0].display_order(&pair[1]).is_lt());
            }
            for pair in groups.spectators.windows(2) {
                prop_assert!(pair[0].display_order(&pair[1]).is_lt());
            }
            let expected_owners: Vec<&Participant> = participants
                .iter()
                .filter(|p| records.is_owner(p.id))
                .collect();
            let owners: Vec<&Participant> = groups.owners.iter().collect();
            prop_assert_eq!(owners, expected_owners);
        }

        #[test]
        fn prop_classification_is_deterministic((participants, records) in arb_session()) {
            let first = classify(&participants, &records);
            let second = classify(&participants, &records);
            prop_assert_eq!(first, second);
        }
    }
}
