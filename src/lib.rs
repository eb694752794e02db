/*!
sepax
========

**sepax** is a 2 and 3-dimensional library of oriented bounding volume
intersection and classification tests written with the rust programming language.

Every query is a pure function over small `Copy` value types, generic over the
scalar type (`f32` or `f64`). Queries either reply a boolean (do the two volumes
intersect?) or an [`IntersectionType`](query::IntersectionType) telling how the
first volume is placed with respect to the second one.

*/

#![deny(non_camel_case_types)]
#![deny(unused_parens)]
#![deny(non_upper_case_globals)]
#![deny(unused_results)]
#![deny(missing_docs)]
#![warn(unused_imports)]
#![allow(missing_copy_implementations)]
#![allow(clippy::too_many_arguments)]
#![allow(clippy::module_inception)]
#![allow(clippy::manual_range_contains)] // This usually makes it way more verbose that it could be.
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(all(feature = "dim2", feature = "dim3"))]
core::compile_error!("The `dim2` and `dim3` features are mutually exclusive.");

#[cfg(feature = "serde-serialize")]
#[macro_use]
extern crate serde;
#[macro_use]
extern crate approx;

pub extern crate nalgebra as na;
pub extern crate simba;

pub mod bounding_volume;
pub mod math;
pub mod query;
pub mod shape;
pub mod utils;
