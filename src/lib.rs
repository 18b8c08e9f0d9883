pub mod cayley;
pub mod groups;
pub mod utils;

pub use cayley::Ambiguity;
pub use cayley::AxiomFailure;
pub use cayley::CayleyTable;
pub use cayley::Element;
pub use cayley::InputDefect;
pub use cayley::Table;
pub use cayley::TableError;
pub use groups::cyclic;
pub use groups::dihedral;
pub use groups::klein_four_table;
pub use utils::{is_prime, restrict};
