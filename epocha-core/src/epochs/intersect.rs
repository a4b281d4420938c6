use core::fmt::Debug;
use std::collections::BTreeMap;

use epocha_types::{Condition, Epoch, EpochaError};

/// Boundary tally for one distinct timestamp.
#[derive(Debug, Default, Clone, Copy)]
struct Boundary {
    /// Net change in the number of covering conditions (+1 per start, -1 per end).
    delta: i64,
    /// Conditions holding only at this instant through a zero-width epoch.
    instants: i64,
}

/// Net deltas keyed by timestamp for one sweep.
fn tally<T>(conditions: &[Condition<T>]) -> BTreeMap<T, Boundary>
where
    T: Ord + Copy,
{
    let mut map: BTreeMap<T, Boundary> = BTreeMap::new();
    for c in conditions {
        let epochs = c.epochs();
        for (i, e) in epochs.iter().enumerate() {
            if e.is_instant() {
                // Skip an instant absorbed by the next epoch of the same
                // condition, which starts at the same timestamp.
                let absorbed = epochs.get(i + 1).is_some_and(|n| n.start() == e.start());
                if !absorbed {
                    map.entry(e.start()).or_default().instants += 1;
                }
                continue;
            }
            map.entry(e.start()).or_default().delta += 1;
            map.entry(e.end()).or_default().delta -= 1;
        }
    }
    map
}

/// Sweep the boundary tally in timestamp order, emitting the spans where
/// `n` conditions hold at once.
///
/// Every start tallied from a validated condition has a matching end, so the
/// count always falls below `n` by the last timestamp.
fn sweep<T>(boundaries: BTreeMap<T, Boundary>, n: i64) -> Result<Vec<Epoch<T>>, EpochaError>
where
    T: Ord + Copy + Debug,
{
    let mut out: Vec<Epoch<T>> = Vec::new();
    let mut active: i64 = 0;
    let mut open_start: Option<T> = None;

    for (t, b) in boundaries {
        active += b.delta;
        if active == n {
            if open_start.is_none() {
                open_start = Some(t);
            }
            continue;
        }
        if let Some(start) = open_start.take() {
            out.push(Epoch::new(start, t)?);
        }
        if b.instants > 0 && active + b.instants == n {
            out.push(Epoch::instant(t));
        }
    }

    if let Some(start) = open_start {
        return Err(EpochaError::inconsistent_state(format!(
            "intersection sweep ended with an epoch open since {start:?}; input epochs are not bounded"
        )));
    }
    Ok(out)
}

/// Compute the epochs during which every condition holds simultaneously.
///
/// Coordinate sweep over the union of epoch boundaries. All boundaries at one
/// timestamp are summed into a single net delta before the running count is
/// updated, so an epoch ending exactly where another begins never produces a
/// phantom overlap: `[1, 5)` and `[5, 9)` do not intersect. An output epoch
/// opens when the count reaches the number of conditions and closes at the
/// first timestamp where it drops below.
///
/// Zero-width epochs `(t, t)` take part as the single instant `t`: if every
/// other condition covers `t` they yield `(t, t)` in the output. With one
/// condition the result equals its epochs, provided they are maximal
/// (epochs touching end-to-start are coalesced).
///
/// An empty result means no instant satisfies all conditions; it is a valid
/// outcome and is reported at `info` level when tracing is enabled.
///
/// ```
/// use epocha_core::{intersect_epochs, Condition, Epoch};
///
/// let a = Condition::new("a", vec![Epoch::new(1, 5).unwrap(), Epoch::new(10, 15).unwrap()]).unwrap();
/// let b = Condition::new("b", vec![Epoch::new(3, 12).unwrap()]).unwrap();
/// let both = intersect_epochs(&[a, b]).unwrap();
/// assert_eq!(both, vec![Epoch::new(3, 5).unwrap(), Epoch::new(10, 12).unwrap()]);
/// ```
///
/// # Errors
/// - `EpochaError::InvalidInput` if `conditions` is empty.
/// - `EpochaError::InconsistentState` if the sweep ends with an epoch still
///   open, which bounded, validated conditions cannot produce.
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(
        name = "epocha_core::intersect_epochs",
        skip(conditions),
        fields(conditions = conditions.len()),
    )
)]
pub fn intersect_epochs<T>(conditions: &[Condition<T>]) -> Result<Vec<Epoch<T>>, EpochaError>
where
    T: Ord + Copy + Debug,
{
    if conditions.is_empty() {
        return Err(EpochaError::invalid_input(
            "intersection requires at least one condition",
        ));
    }
    let n = i64::try_from(conditions.len())
        .map_err(|_| EpochaError::invalid_input("too many conditions to intersect"))?;

    let out = sweep(tally(conditions), n)?;

    #[cfg(feature = "tracing")]
    {
        if out.is_empty() {
            tracing::info!(
                conditions = conditions.len(),
                "no epochs satisfy all conditions"
            );
        } else {
            tracing::debug!(epochs = out.len(), "intersected epochs");
        }
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cond(label: &str, spans: &[(i64, i64)]) -> Condition<i64> {
        let epochs = spans
            .iter()
            .map(|&(s, e)| Epoch::new(s, e).unwrap())
            .collect();
        Condition::new(label, epochs).unwrap()
    }

    #[test]
    fn tally_groups_shared_boundaries() {
        let map = tally(&[cond("a", &[(1, 5)]), cond("b", &[(5, 9)])]);
        let at5 = map[&5];
        assert_eq!(at5.delta, 0);
        assert_eq!(map.len(), 3);
    }

    #[test]
    fn absorbed_instant_is_not_counted_twice() {
        // `a` holds at 5 through the instant and through [5, 8); `b` ended at 3.
        let a = cond("a", &[(5, 5), (5, 8)]);
        let b = cond("b", &[(0, 3)]);
        assert!(intersect_epochs(&[a, b]).unwrap().is_empty());
    }

    #[test]
    fn instant_inside_other_condition() {
        let a = cond("a", &[(1, 9)]);
        let b = cond("b", &[(4, 4)]);
        assert_eq!(intersect_epochs(&[a, b]).unwrap(), vec![Epoch::instant(4)]);
    }

    #[test]
    fn instant_at_closing_boundary_is_outside() {
        let a = cond("a", &[(1, 4)]);
        let b = cond("b", &[(4, 4)]);
        assert!(intersect_epochs(&[a, b]).unwrap().is_empty());
    }

    #[test]
    fn unbalanced_boundaries_are_inconsistent() {
        let mut map = BTreeMap::new();
        map.insert(3i64, Boundary { delta: 1, instants: 0 });
        map.insert(7i64, Boundary { delta: 1, instants: 0 });
        let err = sweep(map, 2).unwrap_err();
        assert!(matches!(err, EpochaError::InconsistentState(ref m) if m.contains("open since 7")));
        assert!(!err.is_retryable());
    }

    #[test]
    fn zero_conditions_is_invalid() {
        let err = intersect_epochs::<i64>(&[]).unwrap_err();
        assert!(err.is_invalid_input());
    }
}
