/*!
# Representations

- [`ForwardStar`]: the compact, editable forward-star (CSR-like) store for simple graphs
  with at most [`MAX_NODES`](crate::MAX_NODES) vertices.
- [`AdjacencyMatrix`]: a dense bitmask matrix of the same capacity, used as the
  intermediate form of the graph6 codec.
*/

use crate::{ops::*, *};

mod forward_star;
mod matrix;

pub use forward_star::*;
pub use matrix::*;
