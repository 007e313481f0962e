use crate::aa::{Argument, ArgumentSet, LabelType};
use anyhow::{anyhow, Context, Result};

/// A Dung argumentation framework: a set of arguments and a binary attack relation on it.
///
/// Arguments are owned by an [`ArgumentSet`] and addressed by their ids.
/// The attack relation is kept in insertion order, and indexed in both directions
/// so that the attackers of an argument and the arguments it attacks are available without scanning the relation.
///
/// # Example
///
/// ```
/// # use transarg::aa::{AAFramework, ArgumentSet};
/// let mut af = AAFramework::new_with_argument_set(ArgumentSet::new_with_labels(&[]));
/// let rain = af.new_argument("rain-danger");
/// let speed = af.new_argument("fast-city");
/// af.new_attack_by_ids(rain, speed).unwrap();
/// assert_eq!(&[rain], af.attacker_ids(speed));
/// ```
#[derive(Debug, Default)]
pub struct AAFramework<T>
where
    T: LabelType,
{
    arguments: ArgumentSet<T>,
    attacks: Vec<(usize, usize)>,
    attackers: Vec<Vec<usize>>,
    attacked: Vec<Vec<usize>>,
}

/// An attack of a framework, borrowing its two arguments.
pub struct Attack<'a, T>(&'a Argument<T>, &'a Argument<T>)
where
    T: LabelType;

impl<'a, T> Attack<'a, T>
where
    T: LabelType,
{
    /// Returns the source of the attack.
    pub fn attacker(&self) -> &'a Argument<T> {
        self.0
    }

    /// Returns the target of the attack.
    pub fn attacked(&self) -> &'a Argument<T> {
        self.1
    }
}

impl<T> AAFramework<T>
where
    T: LabelType,
{
    /// Builds a framework with no attack over the given arguments.
    pub fn new_with_argument_set(arguments: ArgumentSet<T>) -> Self {
        let n = arguments.len();
        AAFramework {
            arguments,
            attacks: vec![],
            attackers: vec![vec![]; n],
            attacked: vec![vec![]; n],
        }
    }

    /// Returns the id of the argument with the given label, adding it to the framework if needed.
    ///
    /// Requesting the same label twice returns the same id.
    pub fn new_argument(&mut self, label: T) -> usize {
        let id = self.arguments.get_or_create(label);
        if id == self.attackers.len() {
            self.attackers.push(Vec::new());
            self.attacked.push(Vec::new());
        }
        id
    }

    /// Adds an attack between two arguments given by their labels.
    ///
    /// Both arguments must already exist. Adding an attack twice has no effect.
    pub fn new_attack(&mut self, from: &T, to: &T) -> Result<()> {
        let context = || format!("while adding the attack {} -> {}", from, to);
        let from_id = self.arguments.get_argument_index(from).with_context(context)?;
        let to_id = self.arguments.get_argument_index(to).with_context(context)?;
        self.push_attack(from_id, to_id);
        Ok(())
    }

    /// Adds an attack between two arguments given by their ids.
    ///
    /// Both ids must be lower than the number of arguments. Adding an attack twice has no effect.
    pub fn new_attack_by_ids(&mut self, from: usize, to: usize) -> Result<()> {
        let n = self.n_arguments();
        if from >= n || to >= n {
            return Err(anyhow!(
                "no attack can link ids {} and {} in a framework of {} argument(s)",
                from,
                to,
                n
            ));
        }
        self.push_attack(from, to);
        Ok(())
    }

    fn push_attack(&mut self, from: usize, to: usize) {
        if !self.has_attack_by_ids(from, to) {
            self.attacks.push((from, to));
            self.attacked[from].push(to);
            self.attackers[to].push(from);
        }
    }

    /// Returns the arguments of the framework.
    pub fn argument_set(&self) -> &ArgumentSet<T> {
        &self.arguments
    }

    /// Iterates over the attacks in insertion order.
    pub fn iter_attacks(&self) -> impl Iterator<Item = Attack<'_, T>> + '_ {
        self.attacks.iter().map(|(from, to)| {
            Attack(
                self.arguments.get_argument_by_id(*from),
                self.arguments.get_argument_by_id(*to),
            )
        })
    }

    /// Returns the ids of the attackers of an argument, in insertion order of the attacks.
    pub fn attacker_ids(&self, id: usize) -> &[usize] {
        &self.attackers[id]
    }

    /// Returns the ids of the arguments attacked by an argument, in insertion order of the attacks.
    pub fn attacked_ids(&self, id: usize) -> &[usize] {
        &self.attacked[id]
    }

    /// Returns `true` iff the argument `from` attacks the argument `to`.
    pub fn has_attack_by_ids(&self, from: usize, to: usize) -> bool {
        self.attacked[from].contains(&to)
    }

    /// Returns the number of arguments.
    pub fn n_arguments(&self) -> usize {
        self.arguments.len()
    }

    /// Returns the number of attacks.
    pub fn n_attacks(&self) -> usize {
        self.attacks.len()
    }
}
