//! Rewriting of prefix-notation expression trees built by `polish-parser`.
//!
//! - [`simplify`] folds constant subexpressions.
//! - [`simplify_fancy`] folds constants and applies the identities of addition, subtraction and
//!   multiplication with `0` and `1`.
//! - [`substitute`] and [`substitute_all`] replace variables with integer values.
//!
//! Every operation validates the tree first and modifies it in place only once it is known to be
//! a valid arithmetic expression.
//!
//! ```
//! use polish_compute::{simplify_fancy, substitute};
//! use polish_parser::{prefix2tree, to_infix};
//!
//! let mut tree = prefix2tree("+ * 1 x - y 0").unwrap();
//! simplify_fancy(&mut tree).unwrap();
//! assert_eq!(to_infix(&tree).unwrap(), "(x+y)");
//!
//! substitute(&mut tree, "y", 4).unwrap();
//! assert_eq!(to_infix(&tree).unwrap(), "(x+4)");
//! ```

pub mod error;
pub mod simplify;
pub mod step_collector;
pub mod substitute;

pub use simplify::{simplify, simplify_fancy, simplify_fancy_with_steps, simplify_with_steps, Step};
pub use step_collector::StepCollector;
pub use substitute::{substitute, substitute_all};
