//! Composition engine
//!
//!     Every construction expression flattens into one ordered `Vec<Node>`. The
//!     [`IntoNodes`] trait is the single collapsing rule: a value appends the nodes it
//!     stands for to an output sequence, in order, and nothing else. There is no
//!     deduplication, no sorting and no validation of which kinds end up next to each
//!     other.
//!
//!     | Expression                   | Contributes                                 |
//!     |------------------------------|---------------------------------------------|
//!     | `()` / `nodes![]`            | nothing                                     |
//!     | `Node`, `Element`, `&str`... | one node                                    |
//!     | `for_each(values, f)`        | `f(value)` for each value, in input order   |
//!     | `Fragment`                   | its imported nodes, spliced in place        |
//!     | `(a, b, c)` / `nodes![a, b]` | each part in declared order                 |
//!     | `Option<T>` / `when(..)`     | the branch when present, else nothing       |
//!     | `Branch<A, B>` / `either(..)`| exactly the chosen alternative              |
//!     | `Vec<T>`, `[T; N]`, `concat` | each item in order                          |
//!
//!     Evaluation is eager. Branch helpers take closures so that the rejected
//!     alternative is never run.

use crate::fragment::Fragment;
use crate::node::{Element, Node};
use std::borrow::Cow;

/// A construction expression that collapses into an ordered sequence of nodes.
pub trait IntoNodes {
    /// Append this expression's nodes to `nodes`, preserving order.
    fn append_to(self, nodes: &mut Vec<Node>);

    fn into_nodes(self) -> Vec<Node>
    where
        Self: Sized,
    {
        let mut nodes = Vec::new();
        self.append_to(&mut nodes);
        nodes
    }
}

/// Build a `Vec<Node>` from a comma separated list of [`IntoNodes`] expressions.
///
/// ```ignore
/// let items = nodes![
///     Element::new("h1").child("Title"),
///     when(show_intro, || Element::paragraph("intro")),
///     for_each(["a", "b"], |name| Element::new("li").child(name)),
/// ];
/// ```
#[macro_export]
macro_rules! nodes {
    () => {
        ::std::vec::Vec::<$crate::Node>::new()
    };
    ($($part:expr),+ $(,)?) => {{
        let mut nodes = ::std::vec::Vec::<$crate::Node>::new();
        $( $crate::IntoNodes::append_to($part, &mut nodes); )+
        nodes
    }};
}

macro_rules! single_node {
    ($($ty:ty),* $(,)?) => {
        $(
            impl IntoNodes for $ty {
                fn append_to(self, nodes: &mut Vec<Node>) {
                    nodes.push(Node::from(self));
                }
            }
        )*
    };
}

single_node!(Node, Element, String, &str, &String, Cow<'_, str>);

impl IntoNodes for () {
    fn append_to(self, _nodes: &mut Vec<Node>) {}
}

impl IntoNodes for Fragment {
    fn append_to(self, nodes: &mut Vec<Node>) {
        nodes.extend(self.into_inner());
    }
}

impl IntoNodes for &Fragment {
    fn append_to(self, nodes: &mut Vec<Node>) {
        nodes.extend(self.nodes().iter().cloned());
    }
}

impl<T: IntoNodes> IntoNodes for Option<T> {
    fn append_to(self, nodes: &mut Vec<Node>) {
        if let Some(inner) = self {
            inner.append_to(nodes);
        }
    }
}

impl<T: IntoNodes> IntoNodes for Vec<T> {
    fn append_to(self, nodes: &mut Vec<Node>) {
        for item in self {
            item.append_to(nodes);
        }
    }
}

impl<T: IntoNodes, const N: usize> IntoNodes for [T; N] {
    fn append_to(self, nodes: &mut Vec<Node>) {
        for item in self {
            item.append_to(nodes);
        }
    }
}

macro_rules! tuple_nodes {
    ($($name:ident),+) => {
        impl<$($name: IntoNodes),+> IntoNodes for ($($name,)+) {
            #[allow(non_snake_case)]
            fn append_to(self, nodes: &mut Vec<Node>) {
                let ($($name,)+) = self;
                $( $name.append_to(nodes); )+
            }
        }
    };
}

tuple_nodes!(A);
tuple_nodes!(A, B);
tuple_nodes!(A, B, C);
tuple_nodes!(A, B, C, D);
tuple_nodes!(A, B, C, D, E);
tuple_nodes!(A, B, C, D, E, F);
tuple_nodes!(A, B, C, D, E, F, G);
tuple_nodes!(A, B, C, D, E, F, G, H);
tuple_nodes!(A, B, C, D, E, F, G, H, I);
tuple_nodes!(A, B, C, D, E, F, G, H, I, J);
tuple_nodes!(A, B, C, D, E, F, G, H, I, J, K);
tuple_nodes!(A, B, C, D, E, F, G, H, I, J, K, L);

/// One of two mutually exclusive alternatives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Branch<A, B> {
    First(A),
    Second(B),
}

impl<A: IntoNodes, B: IntoNodes> IntoNodes for Branch<A, B> {
    fn append_to(self, nodes: &mut Vec<Node>) {
        match self {
            Branch::First(first) => first.append_to(nodes),
            Branch::Second(second) => second.append_to(nodes),
        }
    }
}

/// Evaluate `first` when `condition` holds, `second` otherwise. The other closure never runs.
pub fn either<A, B>(
    condition: bool,
    first: impl FnOnce() -> A,
    second: impl FnOnce() -> B,
) -> Branch<A, B> {
    if condition {
        Branch::First(first())
    } else {
        Branch::Second(second())
    }
}

/// Evaluate `branch` only when `condition` holds.
pub fn when<T>(condition: bool, branch: impl FnOnce() -> T) -> Option<T> {
    if condition {
        Some(branch())
    } else {
        None
    }
}

/// Map every value to nodes, concatenating the results in input order.
pub struct ForEach<I, F> {
    values: I,
    content: F,
}

impl<I, F> ForEach<I, F> {
    pub fn new(values: I, content: F) -> Self {
        ForEach { values, content }
    }
}

impl<I, F, N> IntoNodes for ForEach<I, F>
where
    I: IntoIterator,
    F: FnMut(I::Item) -> N,
    N: IntoNodes,
{
    fn append_to(self, nodes: &mut Vec<Node>) {
        let ForEach { values, mut content } = self;
        for value in values {
            content(value).append_to(nodes);
        }
    }
}

pub fn for_each<I, F, N>(values: I, content: F) -> ForEach<I, F>
where
    I: IntoIterator,
    F: FnMut(I::Item) -> N,
    N: IntoNodes,
{
    ForEach::new(values, content)
}

/// Concatenation of an arbitrary iterator of sub-sequences, e.g. the output of a loop.
pub struct Sequence<I>(pub I);

impl<I> IntoNodes for Sequence<I>
where
    I: IntoIterator,
    I::Item: IntoNodes,
{
    fn append_to(self, nodes: &mut Vec<Node>) {
        for part in self.0 {
            part.append_to(nodes);
        }
    }
}

pub fn concat<I>(parts: I) -> Sequence<I>
where
    I: IntoIterator,
    I::Item: IntoNodes,
{
    Sequence(parts)
}

/// Run a fallible composition, propagating the first error unchanged.
pub fn try_nodes<N, E>(build: impl FnOnce() -> Result<N, E>) -> Result<Vec<Node>, E>
where
    N: IntoNodes,
{
    Ok(build()?.into_nodes())
}
