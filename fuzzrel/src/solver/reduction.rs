//! Dominance-based row reduction
//!
//! Row `i` is dominated by row `k` when every column that can cover `k`
//! also covers `i`: `k`'s live columns are a subset of `i`'s, and on each of
//! them the value chosen for `k` already satisfies `i`. Dropping `i` then
//! leaves the boundary unchanged.

use super::help::{HelpMatrix, HelpRow};
use super::Family;
use tracing::trace;

fn dominates(dominator: &HelpRow, row: &HelpRow, family: Family, tolerance: f64) -> bool {
    if dominator.unconditional || row.unconditional {
        return false;
    }
    let mut any_live = false;
    for (d, r) in dominator.cells.iter().zip(&row.cells) {
        match (d, r) {
            (None, _) => {}
            (Some(_), None) => return false,
            (Some(hd), Some(hr)) => {
                if !family.satisfies(*hd, *hr, tolerance) {
                    return false;
                }
                any_live = true;
            }
        }
    }
    any_live
}

/// Flags every dominated row. Of two mutually dominating rows only the one
/// with the higher position is flagged.
pub(crate) fn dominated_rows(help: &HelpMatrix, family: Family, tolerance: f64) -> Vec<bool> {
    let rows = &help.rows;
    (0..rows.len())
        .map(|i| {
            (0..rows.len()).any(|k| {
                k != i
                    && dominates(&rows[k], &rows[i], family, tolerance)
                    && (k < i || !dominates(&rows[i], &rows[k], family, tolerance))
            })
        })
        .collect()
}

/// A fresh help matrix without the dominated rows
pub(crate) fn reduce(help: &HelpMatrix, family: Family, tolerance: f64) -> HelpMatrix {
    let dominated = dominated_rows(help, family, tolerance);
    let rows = help
        .rows
        .iter()
        .zip(&dominated)
        .filter_map(|(row, &drop)| {
            if drop {
                trace!(row = row.index, "dropping dominated row");
                None
            } else {
                Some(row.clone())
            }
        })
        .collect();
    HelpMatrix {
        cols: help.cols,
        rows,
    }
}
