use super::{characteristic_function, is_defended_by};
use crate::aa::{AAFramework, LabelType};

/// Returns `true` iff no member of the set attacks another member (or itself).
pub fn is_conflict_free<T>(af: &AAFramework<T>, members: &[bool]) -> bool
where
    T: LabelType,
{
    members
        .iter()
        .enumerate()
        .filter(|(_, m)| **m)
        .all(|(id, _)| af.attacked_ids(id).iter().all(|b| !members[*b]))
}

/// Returns `true` iff the set is conflict-free and defends all its members.
pub fn is_admissible<T>(af: &AAFramework<T>, members: &[bool]) -> bool
where
    T: LabelType,
{
    is_conflict_free(af, members)
        && members
            .iter()
            .enumerate()
            .filter(|(_, m)| **m)
            .all(|(id, _)| is_defended_by(af, id, members))
}

/// Returns `true` iff the set is admissible and contains every argument it defends.
pub fn is_complete<T>(af: &AAFramework<T>, members: &[bool]) -> bool
where
    T: LabelType,
{
    is_admissible(af, members) && characteristic_function(af, members) == members
}

/// Returns the membership vector of the arguments attacked by at least one member of the set.
pub fn attacked_by_set<T>(af: &AAFramework<T>, members: &[bool]) -> Vec<bool>
where
    T: LabelType,
{
    let mut attacked = vec![false; af.n_arguments()];
    members
        .iter()
        .enumerate()
        .filter(|(_, m)| **m)
        .for_each(|(id, _)| af.attacked_ids(id).iter().for_each(|b| attacked[*b] = true));
    attacked
}

/// Returns `true` iff the set is conflict-free and attacks every argument outside of it.
pub fn is_stable<T>(af: &AAFramework<T>, members: &[bool]) -> bool
where
    T: LabelType,
{
    is_conflict_free(af, members)
        && attacked_by_set(af, members)
            .iter()
            .zip(members.iter())
            .all(|(attacked, member)| *attacked || *member)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::{AspartixReader, InstanceReader};

    fn read(instance: &str) -> AAFramework<String> {
        AspartixReader::default()
            .read(&mut instance.as_bytes())
            .unwrap()
    }

    #[test]
    fn test_chain() {
        let af = read("arg(a).\narg(b).\narg(c).\natt(a,b).\natt(b,c).\n");
        assert!(is_conflict_free(&af, &[true, false, true]));
        assert!(!is_conflict_free(&af, &[true, true, false]));
        assert!(is_admissible(&af, &[true, false, false]));
        assert!(!is_admissible(&af, &[false, false, true]));
        assert!(is_admissible(&af, &[true, false, true]));
        assert!(!is_complete(&af, &[true, false, false]));
        assert!(is_complete(&af, &[true, false, true]));
        assert!(is_stable(&af, &[true, false, true]));
        assert_eq!(
            vec![false, true, false],
            attacked_by_set(&af, &[true, false, false])
        );
    }

    #[test]
    fn test_self_attack() {
        let af = read("arg(a).\natt(a,a).\n");
        assert!(!is_conflict_free(&af, &[true]));
        assert!(is_admissible(&af, &[false]));
        assert!(is_complete(&af, &[false]));
        assert!(!is_stable(&af, &[false]));
    }
}
