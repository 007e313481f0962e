use crate::aa::{AAFramework, Argument, LabelType};

/// Checks whether the argument with the given id is acceptable with respect to a set of arguments.
///
/// The set is given by a membership vector indexed by argument ids.
/// An argument is acceptable (or defended) iff each of its attackers is attacked by a member of the set.
pub fn is_defended_by<T>(af: &AAFramework<T>, id: usize, members: &[bool]) -> bool
where
    T: LabelType,
{
    af.attacker_ids(id)
        .iter()
        .all(|attacker| af.attacker_ids(*attacker).iter().any(|d| members[*d]))
}

/// Applies the characteristic function of an AF to a set of arguments.
///
/// The result is the set of arguments defended by the input set; both are membership vectors indexed by argument ids.
pub fn characteristic_function<T>(af: &AAFramework<T>, members: &[bool]) -> Vec<bool>
where
    T: LabelType,
{
    (0..af.n_arguments())
        .map(|id| is_defended_by(af, id, members))
        .collect()
}

/// Computes the membership vector of the grounded extension of an AF.
///
/// The characteristic function is iterated from the empty set until a fixpoint is reached.
/// Since the function is monotone and the framework is finite, at most one iteration per argument is needed.
pub fn grounded_membership<T>(af: &AAFramework<T>) -> Vec<bool>
where
    T: LabelType,
{
    let mut current = vec![false; af.n_arguments()];
    loop {
        let next = characteristic_function(af, &current);
        if next == current {
            return current;
        }
        current = next;
    }
}

/// Computes the grounded extension of an AF.
pub fn grounded_extension<T>(af: &AAFramework<T>) -> Vec<&Argument<T>>
where
    T: LabelType,
{
    grounded_membership(af)
        .iter()
        .enumerate()
        .filter(|(_, m)| **m)
        .map(|(i, _)| af.argument_set().get_argument_by_id(i))
        .collect()
}
