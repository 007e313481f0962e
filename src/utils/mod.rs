//! Miscellaneous components used in the library.

mod admissible_set_search;
pub(crate) use admissible_set_search::AdmissibleSetSearch;
pub(crate) use admissible_set_search::SearchOutcome;
pub use admissible_set_search::SearchBudget;

mod grounded_extension_computer;
pub use grounded_extension_computer::characteristic_function;
pub use grounded_extension_computer::grounded_extension;
pub use grounded_extension_computer::grounded_membership;
pub use grounded_extension_computer::is_defended_by;

mod set_properties;
pub use set_properties::attacked_by_set;
pub use set_properties::is_admissible;
pub use set_properties::is_complete;
pub use set_properties::is_conflict_free;
pub use set_properties::is_stable;
