//! Groups tutor candidates into rounds and drives the client-local
//! selection state. Only selection flags and per-tutor actions are mutated
//! here; round membership always comes from the server.

use std::collections::BTreeMap;

use shared_types::TutorId;

use super::dto::SentTutorResponseDTO;
use crate::common_validator::throw_if_candidate_accepted;
use crate::model::round::{Round, TutorActionEnum, TutorCandidate};
use crate::service::error::{EntityNotFoundError, ServiceError};

/// Group candidates into rounds: by explicit `round_number` when the
/// backend sends one for every entry, otherwise by creation-timestamp
/// bucket. Round numbers are reassigned 1-based in chronological order, so
/// grouping the same input always yields the same rounds.
pub fn group_into_rounds(entries: &[SentTutorResponseDTO]) -> Vec<Round> {
    if entries.is_empty() {
        return vec![];
    }

    let use_explicit = entries.iter().all(|entry| entry.round_number.is_some());

    // BTreeMap keys give the chronological/explicit ordering for free;
    // entries within a bucket keep their server order.
    let mut buckets: BTreeMap<(u32, i128), Vec<&SentTutorResponseDTO>> = BTreeMap::new();
    for entry in entries {
        let key = if use_explicit {
            (entry.round_number.unwrap_or_default(), 0)
        } else {
            (0, entry.created.unix_timestamp_nanos())
        };
        buckets.entry(key).or_default().push(entry);
    }

    buckets
        .into_values()
        .enumerate()
        .map(|(index, bucket)| Round {
            round_number: index as u32 + 1,
            created_date: bucket
                .iter()
                .map(|entry| entry.created)
                .min()
                .unwrap_or_else(|| bucket[0].created),
            tutors: bucket
                .into_iter()
                .map(|entry| TutorCandidate {
                    tutor_id: entry.tutor_id,
                    tutor_name: entry.tutor_name.clone(),
                    action: entry.action,
                    selected: false,
                    created_date: entry.created,
                })
                .collect(),
        })
        .collect()
}

/// Flip one candidate's selection flag. Accepted entries are final and
/// stay unselected; toggling them is a no-op.
pub fn toggle_selection(round: &mut Round, tutor_id: TutorId) {
    if let Some(candidate) = round.candidate_mut(tutor_id) {
        if candidate.action != TutorActionEnum::Accepted {
            candidate.selected = !candidate.selected;
        }
    }
}

/// One control that selects-all or clears-all: when every candidate is
/// already selected or accepted it clears, otherwise it selects the rest.
pub fn toggle_select_all(round: &mut Round) {
    let all_selected = round.all_selected_or_accepted();
    for candidate in &mut round.tutors {
        if candidate.action != TutorActionEnum::Accepted {
            candidate.selected = !all_selected;
        }
    }
}

/// Set a candidate's action. Accepting clears the selection flag (accepted
/// entries are not selectable); an already-accepted candidate cannot be
/// changed again.
pub fn update_action(
    round: &mut Round,
    tutor_id: TutorId,
    action: TutorActionEnum,
) -> Result<(), ServiceError> {
    let candidate = round
        .candidate_mut(tutor_id)
        .ok_or(EntityNotFoundError::TutorCandidate(tutor_id))?;
    throw_if_candidate_accepted(candidate)?;

    candidate.action = action;
    if action == TutorActionEnum::Accepted {
        candidate.selected = false;
    }
    Ok(())
}
