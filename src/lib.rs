//! A multi-result big-step supercompilation engine.
//!
//! Given a "world of supercompilation" (a [`big_step_sc::ScWorld`]
//! implementation describing how to decompose and fold configurations), this
//! crate builds the set of residual graphs a multi-result supercompiler would
//! produce, without committing upfront to generating them eagerly.
//!
//! The core is staged in three layers, from the naive to the fully lazy:
//!
//! - [`big_step_sc::naive_mrsc`] builds every residual graph immediately.
//! - [`big_step_sc::lazy_mrsc`] builds a [`graph::LazyGraph`] -- a program
//!   that *generates* the same set of graphs when unrolled with
//!   [`graph::unroll`], without forming their Cartesian products upfront.
//! - [`big_step_sc8`] goes one step further: [`big_step_sc8::build_cograph`]
//!   builds a (potentially infinite) [`big_step_sc8::LazyGraph8`] that never
//!   consults the whistle, and [`big_step_sc8::prune_cograph`] /
//!   [`big_step_sc8::prune`] apply the whistle afterwards to recover an
//!   ordinary finite [`graph::LazyGraph`].
//!
//! [`graph`] also collects a family of *cleaners* -- functions that remove
//! unwanted graphs from a `LazyGraph` (or, for the cograph, `LazyGraph8`)
//! without ever unrolling it -- and [`statistics`] analyzes a `LazyGraph`
//! directly to count or size the graphs it would unroll to.
//!
//! [`counters`] and [`protocols`] instantiate the engine over a small counter
//! machine: `NWC` vectors of `N(isize) | W` lattice values, driven by a
//! handful of real cache-coherence protocols from the literature.

pub mod big_step_sc;
pub mod big_step_sc8;
pub mod counters;
pub mod graph;
pub mod misc;
mod mock_sc_world;
pub mod protocols;
pub mod statistics;

pub use big_step_sc::{lazy_mrsc, naive_mrsc, ScWorld};
pub use big_step_sc8::{build_cograph, cl8_bad_conf, cl8_empty, prune, prune_cograph, LazyGraph8};
pub use counters::{CountersScWorld, CountersWorld, NwError, NW, NWC};
pub use graph::{
    cl_bad_conf, cl_empty, cl_empty_and_bad, cl_min_size, unroll, Graph, LazyGraph,
};
pub use misc::History;
