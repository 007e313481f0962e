use super::{attacked_by_set, characteristic_function, grounded_membership, is_defended_by};
use crate::aa::{AAFramework, LabelType};
use log::{debug, warn};

/// Bounds the number of nodes a search over sets of arguments may visit.
///
/// When the bound is reached, the search stops and returns what it found so far, flagged as approximate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchBudget {
    max_steps: usize,
}

impl SearchBudget {
    /// The number of steps allowed by the default budget.
    pub const DEFAULT_MAX_STEPS: usize = 1 << 20;

    /// Builds a budget allowing the given number of search nodes.
    ///
    /// # Example
    ///
    /// ```
    /// # use transarg::utils::SearchBudget;
    /// let budget = SearchBudget::new(1000);
    /// assert_eq!(1000, budget.max_steps());
    /// ```
    pub fn new(max_steps: usize) -> Self {
        Self { max_steps }
    }

    /// Builds a budget that never stops a search.
    pub fn unbounded() -> Self {
        Self::new(usize::MAX)
    }

    /// Returns the maximal number of search nodes.
    pub fn max_steps(&self) -> usize {
        self.max_steps
    }
}

impl Default for SearchBudget {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MAX_STEPS)
    }
}

/// The sets collected by an [`AdmissibleSetSearch`], as membership vectors.
pub(crate) struct SearchOutcome {
    pub(crate) grounded: Vec<bool>,
    pub(crate) complete: Vec<Vec<bool>>,
    pub(crate) best_admissible: Vec<bool>,
    pub(crate) truncated: bool,
    pub(crate) steps: usize,
}

struct SearchNode {
    depth: usize,
    members: Vec<bool>,
}

/// A depth-first search of the admissible sets extending the grounded extension.
///
/// Arguments labelled in or out by the grounded labelling are fixed.
/// The remaining ones (the candidates), except self-attacking arguments, are decided one after the other in increasing id order.
/// The search uses an explicit stack so that the step budget is enforced deterministically.
///
/// A branch is cut as soon as the included arguments are in conflict,
/// or when one of them has an attacker that neither the current set nor the undecided candidates can attack.
pub(crate) struct AdmissibleSetSearch<'a, T>
where
    T: LabelType,
{
    af: &'a AAFramework<T>,
    budget: SearchBudget,
}

impl<'a, T> AdmissibleSetSearch<'a, T>
where
    T: LabelType,
{
    pub(crate) fn new(af: &'a AAFramework<T>, budget: SearchBudget) -> Self {
        Self { af, budget }
    }

    pub(crate) fn run(&self) -> SearchOutcome {
        let grounded = grounded_membership(self.af);
        let defeated = attacked_by_set(self.af, &grounded);
        let candidates = (0..self.af.n_arguments())
            .filter(|id| !grounded[*id] && !defeated[*id] && !self.af.has_attack_by_ids(*id, *id))
            .collect::<Vec<usize>>();
        let mut positions = vec![None; self.af.n_arguments()];
        candidates
            .iter()
            .enumerate()
            .for_each(|(pos, id)| positions[*id] = Some(pos));
        let mut outcome = SearchOutcome {
            grounded: grounded.clone(),
            complete: vec![],
            best_admissible: grounded.clone(),
            truncated: false,
            steps: 0,
        };
        let mut best_size = count_members(&grounded);
        let mut stack = vec![SearchNode {
            depth: 0,
            members: grounded,
        }];
        let mut n_steps = 0;
        while let Some(node) = stack.pop() {
            if n_steps == self.budget.max_steps() {
                outcome.truncated = true;
                break;
            }
            n_steps += 1;
            if node.depth == candidates.len() {
                if self.defends_all_members(&node.members) {
                    let size = count_members(&node.members);
                    if size > best_size {
                        best_size = size;
                        outcome.best_admissible = node.members.clone();
                    }
                    if characteristic_function(self.af, &node.members) == node.members {
                        outcome.complete.push(node.members);
                    }
                }
                continue;
            }
            let arg = candidates[node.depth];
            let next_depth = node.depth + 1;
            let include = if self.is_compatible(arg, &node.members) {
                let mut members = node.members.clone();
                members[arg] = true;
                Some(members)
            } else {
                None
            };
            if self.may_be_defended(&node.members, &positions, next_depth) {
                stack.push(SearchNode {
                    depth: next_depth,
                    members: node.members,
                });
            }
            if let Some(members) = include {
                if self.may_be_defended(&members, &positions, next_depth) {
                    stack.push(SearchNode {
                        depth: next_depth,
                        members,
                    });
                }
            }
        }
        outcome.steps = n_steps;
        debug!(
            "admissible set search visited {} node(s) for {} candidate argument(s) and found {} complete extension(s)",
            n_steps,
            candidates.len(),
            outcome.complete.len()
        );
        if outcome.truncated {
            warn!(
                "the search budget of {} step(s) was exhausted; results are approximate",
                self.budget.max_steps()
            );
        }
        outcome
    }

    fn is_compatible(&self, arg: usize, members: &[bool]) -> bool {
        self.af.attacker_ids(arg).iter().all(|b| !members[*b])
            && self.af.attacked_ids(arg).iter().all(|b| !members[*b])
    }

    fn may_be_defended(&self, members: &[bool], positions: &[Option<usize>], next_depth: usize) -> bool {
        members.iter().enumerate().filter(|(_, m)| **m).all(|(id, _)| {
            self.af.attacker_ids(id).iter().all(|attacker| {
                self.af.attacker_ids(*attacker).iter().any(|defender| {
                    members[*defender] || positions[*defender].map_or(false, |p| p >= next_depth)
                })
            })
        })
    }

    fn defends_all_members(&self, members: &[bool]) -> bool {
        members
            .iter()
            .enumerate()
            .filter(|(_, m)| **m)
            .all(|(id, _)| is_defended_by(self.af, id, members))
    }
}

fn count_members(members: &[bool]) -> usize {
    members.iter().filter(|m| **m).count()
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
    fn test_mutual_attack() {
        let af = read("arg(a).\narg(b).\natt(a,b).\natt(b,a).\n");
        let outcome = AdmissibleSetSearch::new(&af, SearchBudget::default()).run();
        assert_eq!(vec![false, false], outcome.grounded);
        let mut complete = outcome.complete.clone();
        complete.sort_unstable();
        assert_eq!(
            vec![vec![false, false], vec![false, true], vec![true, false]],
            complete
        );
        assert!(!outcome.truncated);
    }

    #[test]
    fn test_self_attack_is_never_a_candidate() {
        let af = read("arg(a).\natt(a,a).\n");
        let outcome = AdmissibleSetSearch::new(&af, SearchBudget::default()).run();
        assert_eq!(vec![vec![false]], outcome.complete);
        assert_eq!(vec![false], outcome.best_admissible);
    }

    #[test]
    fn test_undefendable_branch_is_pruned() {
        // c can only be defended by a, which conflicts with it
        let af = read("arg(a).\narg(b).\narg(c).\natt(a,b).\natt(b,a).\natt(b,c).\natt(a,c).\n");
        let outcome = AdmissibleSetSearch::new(&af, SearchBudget::default()).run();
        assert!(outcome.complete.iter().all(|m| !m[2]));
        assert_eq!(3, outcome.complete.len());
    }

    #[test]
    fn test_budget_exhaustion() {
        let af = read("arg(a).\narg(b).\narg(c).\narg(d).\natt(a,b).\natt(b,a).\natt(c,d).\natt(d,c).\n");
        let outcome = AdmissibleSetSearch::new(&af, SearchBudget::new(3)).run();
        assert!(outcome.truncated);
        assert_eq!(3, outcome.steps);
        assert!(outcome.complete.is_empty());
        assert_eq!(vec![false; 4], outcome.best_admissible);
        let outcome = AdmissibleSetSearch::new(&af, SearchBudget::new(5)).run();
        assert!(outcome.truncated);
        assert_eq!(vec![vec![true, false, true, false]], outcome.complete);
        assert_eq!(vec![true, false, true, false], outcome.best_admissible);
        let full = AdmissibleSetSearch::new(&af, SearchBudget::unbounded()).run();
        assert!(!full.truncated);
        assert_eq!(9, full.complete.len());
    }
}
