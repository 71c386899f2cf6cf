// ### Lazy infinite (co-inductive) graphs of configurations
//
// A `LazyGraph8[C]` represents a (potentially) infinite set of graphs
// of configurations (whose type is `Graph[C]`). It has exactly the same
// shape as `LazyGraph[C]`, except that the `lss` of a `Build8` node is
// produced by a one-shot memoized thunk instead of being built eagerly:
// the whistle (`is_dangerous`) is never consulted while building a
// `LazyGraph8`, so a `Build8` subtree may in principle be infinite, and
// is only descended into on demand, by forcing its thunk.
//
// "Lazy" cographs of configurations are produced by `build_cograph`, and
// are turned back into ordinary, finite `LazyGraph`s by `prune_cograph`
// (or its on-the-fly-optimized sibling `prune`), which is where the
// whistle actually gets consulted.

use crate::big_step_sc::ScWorld;
use crate::graph::*;
use crate::misc::*;

use iter_comprehensions::vec as vec_map;
use lazy_st::{lazy, Lazy};
use std::rc::Rc;

//
// Infinite trees/graphs
// LazyGraph8
//

pub enum LazyGraph8<C: Clone> {
  Empty8(),
  Stop8(C),
  Build8(C, Rc<Lazy<Vec<L8s<C>>>>),
}

pub type L8s<C> = Vec<Rc<LazyGraph8<C>>>;

use LazyGraph8::{Build8, Empty8, Stop8};

pub fn empty8<C: Clone>() -> Rc<LazyGraph8<C>> {
  Rc::new(Empty8())
}

pub fn stop8<C: Clone>(c: &C) -> Rc<LazyGraph8<C>> {
  Rc::new(Stop8(c.clone()))
}

pub fn build8<C: Clone>(
  c: &C,
  l8ss: Rc<Lazy<Vec<L8s<C>>>>,
) -> Rc<LazyGraph8<C>> {
  Rc::new(Build8(c.clone(), l8ss))
}

fn is_empty8<C: Clone>(l: &LazyGraph8<C>) -> bool {
  matches!(l, Empty8())
}

// build_cograph
//
// `build_cograph` walks `develop` just like `lazy_mrsc`, but never asks
// `is_dangerous`. Instead, every `Build8` node's children are wrapped in
// a thunk: the recursive call that would build them is only made when
// something (`prune_cograph`, `prune`, a cleaner) actually forces it.

fn build_cograph_loop<S>(
  s: &Rc<S>,
  h: &History<S::C>,
  c: S::C,
) -> Rc<LazyGraph8<S::C>>
where
  S: ScWorld + 'static,
  S::C: 'static,
{
  if s.is_foldable_to_history(&c, h) {
    stop8(&c)
  } else {
    let s1 = Rc::clone(s);
    let h1 = h.cons(c.clone());
    let c1 = c.clone();
    let l8ss: Rc<Lazy<Vec<L8s<S::C>>>> = Rc::new(lazy!({
      let css = s1.develop(&c1);
      vec_map!(vec_map!(build_cograph_loop(&s1, &h1, c2); c2 in cs); cs in css)
    }));
    build8(&c, l8ss)
  }
}

#[cfg_attr(feature = "tracing", tracing::instrument(skip(s, c0)))]
pub fn build_cograph<S>(s: &Rc<S>, c0: S::C) -> Rc<LazyGraph8<S::C>>
where
  S: ScWorld + 'static,
  S::C: 'static,
{
  build_cograph_loop(s, &History::new(), c0)
}

// prune_cograph
//
// Applies the whistle along the traversal history, turning a (possibly
// infinite) `LazyGraph8` into a finite `LazyGraph`.

fn prune_cograph_loop<S>(
  s: &S,
  h: &History<S::C>,
  l: &LazyGraph8<S::C>,
) -> Rc<LazyGraph<S::C>>
where
  S: ScWorld,
{
  match l {
    Empty8() => empty(),
    Stop8(c) => stop(c),
    Build8(c, l8ss) => {
      if s.is_dangerous(h) {
        #[cfg(feature = "tracing")]
        tracing::event!(tracing::Level::TRACE, depth = h.length(), "whistle");
        empty()
      } else {
        let h1 = h.cons(c.clone());
        let lss = vec_map!(
          vec_map!(prune_cograph_loop(s, &h1, l1); l1 in ls);
          ls in &**l8ss
        );
        build(c, &lss)
      }
    }
  }
}

#[cfg_attr(feature = "tracing", tracing::instrument(skip(s, l0)))]
pub fn prune_cograph<S>(
  s: &S,
  l0: &LazyGraph8<S::C>,
) -> Rc<LazyGraph<S::C>>
where
  S: ScWorld,
{
  prune_cograph_loop(s, &History::new(), l0)
}

// prune
//
// An optimized variant of `prune_cograph`: when forcing a `Build8`
// node's children, alternatives that already contain a (just-forced,
// not further expanded) `Empty8` are dropped before recursing. This
// changes nothing about which graphs survive -- it just avoids
// descending into subtrees that are going to be discarded anyway.

fn prune_loop<S>(
  s: &S,
  h: &History<S::C>,
  l: &LazyGraph8<S::C>,
) -> Rc<LazyGraph<S::C>>
where
  S: ScWorld,
{
  match l {
    Empty8() => empty(),
    Stop8(c) => stop(c),
    Build8(c, l8ss) => {
      if s.is_dangerous(h) {
        #[cfg(feature = "tracing")]
        tracing::event!(tracing::Level::TRACE, depth = h.length(), "whistle");
        empty()
      } else {
        let h1 = h.cons(c.clone());
        let lss1: Vec<&L8s<S::C>> = (**l8ss)
          .iter()
          .filter(|ls| !ls.iter().any(|l1| is_empty8(l1)))
          .collect();
        let lss2 = vec_map!(
          vec_map!(prune_loop(s, &h1, l1); l1 in ls);
          ls in lss1
        );
        build(c, &lss2)
      }
    }
  }
}

#[cfg_attr(feature = "tracing", tracing::instrument(skip(s, l0)))]
pub fn prune<S>(s: &S, l0: &LazyGraph8<S::C>) -> Rc<LazyGraph<S::C>>
where
  S: ScWorld,
{
  prune_loop(s, &History::new(), l0)
}

//
// Now that we have decomposed `lazy_mrsc`
//     lazy_mrsc ≗ prune_cograph ∘ build_cograph
// we can push some cleaners over `prune_cograph`.
//
// Suppose `clean8` is a cograph cleaner such that
//     clean ∘ prune_cograph ≗ prune_cograph ∘ clean8
// then
//     clean ∘ lazy_mrsc ≗
//       clean ∘ (prune_cograph ∘ build_cograph) ≗
//       (prune_cograph ∘ clean8) ∘ build_cograph ≗
//       prune_cograph ∘ (clean8 ∘ build_cograph)
//
// The good thing is that `build_cograph` and `clean8` work in a lazy way,
// generating subtrees by demand. Hence, evaluating
//     unroll( prune_cograph ∘ (clean8 (build_cograph c)) )
// may be less time and space consuming than evaluating
//     unroll( clean (lazy_mrsc c) )
//

// cl8_bad_conf

pub fn cl8_bad_conf<C: Clone + 'static>(
  bad: fn(&C) -> bool,
  l: &Rc<LazyGraph8<C>>,
) -> Rc<LazyGraph8<C>> {
  match &**l {
    Empty8() => empty8(),
    Stop8(c) => {
      if bad(c) {
        empty8()
      } else {
        stop8(c)
      }
    }
    Build8(c, l8ss) => {
      if bad(c) {
        empty8()
      } else {
        let l8ss1 = Rc::clone(l8ss);
        let new_l8ss: Rc<Lazy<Vec<L8s<C>>>> = Rc::new(lazy!({
          vec_map!(vec_map!(cl8_bad_conf(bad, l1); l1 in ls); ls in &**l8ss1)
        }));
        build8(c, new_l8ss)
      }
    }
  }
}

//
// A cograph can be cleaned to remove some empty alternatives.
//
// Note that the cleaning is not perfect, because `cl8_empty` has to pass
// the productivity check: so `Build8(c, [])` is not (recursively)
// replaced with `Empty8()`, as `cl_empty` does for `Build`. Only
// alternatives that turn out to contain an outright `Empty8` child (once
// that child itself has been cleaned) are dropped.
//

pub fn cl8_empty<C: Clone + 'static>(l: &Rc<LazyGraph8<C>>) -> Rc<LazyGraph8<C>> {
  match &**l {
    Empty8() => empty8(),
    Stop8(c) => stop8(c),
    Build8(c, l8ss) => {
      let l8ss1 = Rc::clone(l8ss);
      let new_l8ss: Rc<Lazy<Vec<L8s<C>>>> = Rc::new(lazy!({
        let cleaned: Vec<L8s<C>> =
          vec_map!(vec_map!(cl8_empty(l1); l1 in ls); ls in &**l8ss1);
        vec_map!(ls; ls in cleaned, !ls.iter().any(|l1| is_empty8(l1)))
      }));
      build8(c, new_l8ss)
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn build_cograph_isize(c: isize) -> Rc<LazyGraph8<isize>> {
    build_cograph(&Rc::new(0isize), c)
  }

  #[test]
  fn test_prune_cograph_equals_lazy_mrsc() {
    use crate::big_step_sc::lazy_mrsc;

    let l8 = build_cograph_isize(0);
    let pruned = prune_cograph(&0isize, &l8);
    let lazy = lazy_mrsc(&0isize, 0);
    assert_eq!(unroll(&pruned), unroll(&lazy));
  }

  #[test]
  fn test_prune_equals_prune_cograph() {
    let l8 = build_cograph_isize(0);
    let pruned = prune(&0isize, &l8);
    let pruned_slow = prune_cograph(&0isize, &l8);
    assert_eq!(unroll(&pruned), unroll(&pruned_slow));
  }

  #[test]
  fn test_cl8_bad_conf_pushed_over_prune() {
    fn bad(c: &isize) -> bool {
      *c < 0
    }

    let l8 = build_cograph_isize(0);
    let cleaned_after = cl_bad_conf(bad, &prune_cograph(&0isize, &l8));
    let cleaned_before = prune_cograph(&0isize, &cl8_bad_conf(bad, &l8));
    assert_eq!(unroll(&cleaned_after), unroll(&cleaned_before));
  }
}
