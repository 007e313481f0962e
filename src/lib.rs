//! Transarg chooses a travel mode by reasoning on an abstract argumentation framework.
//!
//! The pros and cons of each travel mode are arguments; context-dependent attacks tell which ones defeat the others.
//! The grounded, complete, preferred and stable extensions of the framework are computed,
//! and the arguments they accept are turned into a share of each mode.

#![warn(missing_docs)]

pub mod aa;

pub mod io;

pub mod solvers;

pub mod travel;

pub mod utils;
