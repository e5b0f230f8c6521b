//! Presentation mapping for division rows

use std::collections::HashMap;

use crate::models::{
    DivisionNominationRow, DivisionRow, DivisionView, DivisionWithNominationView, NominationView,
};

/// Map storage rows to client-facing divisions, preserving order.
pub fn map_to_division_model(rows: Vec<DivisionRow>) -> Vec<DivisionView> {
    rows.into_iter()
        .map(|row| DivisionView {
            id: row.id,
            name: row.name,
            code: row.code,
            no_of_candidates: row.no_of_candidates,
            module_id: row.module_id,
        })
        .collect()
}

/// Fold joined division/nomination rows into one entry per division.
///
/// Divisions keep the order in which they first appear. Rows without a
/// nomination (the LEFT JOIN miss) contribute the division only.
pub fn map_to_division_model_with_nominations(
    rows: Vec<DivisionNominationRow>,
) -> Vec<DivisionWithNominationView> {
    let mut divisions: Vec<DivisionWithNominationView> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for row in rows {
        let slot = match index.get(&row.id) {
            Some(&slot) => slot,
            None => {
                index.insert(row.id.clone(), divisions.len());
                divisions.push(DivisionWithNominationView {
                    id: row.id,
                    name: row.name,
                    code: row.code,
                    no_of_candidates: row.no_of_candidates,
                    module_id: row.module_id,
                    nominations: Vec::new(),
                });
                divisions.len() - 1
            }
        };

        if let Some(nomination_id) = row.nomination_id {
            divisions[slot].nominations.push(NominationView {
                id: nomination_id,
                team_id: row.team_id,
                status: row.nomination_status,
            });
        }
    }

    divisions
}
