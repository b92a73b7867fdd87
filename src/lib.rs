//! Matriz: validated dense matrices with basic linear algebra.
//!
//! Matriz provides a single `f32` matrix value type with bounds-checked
//! construction and the three classic binary operations: element-wise
//! addition and subtraction, and row-by-column multiplication.
//!
//! # Quick Start
//!
//! ```
//! use matriz::prelude::*;
//!
//! let a = Matrix::from_vec(2, 2, vec![1.0, 2.0, 3.0, 4.0]).unwrap();
//! let b = Matrix::from_vec(2, 2, vec![5.0, 6.0, 7.0, 8.0]).unwrap();
//!
//! let product = a.matmul(&b).unwrap();
//! assert_eq!(product.get(0, 0), 19.0);
//! assert_eq!(product.get(1, 1), 50.0);
//! ```
//!
//! # Modules
//!
//! - [`primitives`]: the core `Matrix` type
//! - [`error`]: error enum and `Result` alias
//! - [`prelude`]: convenience re-exports

pub mod error;
pub mod prelude;
pub mod primitives;

pub use error::{MatrizError, Result};
pub use primitives::Matrix;
