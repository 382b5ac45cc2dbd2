mod algorithms;
mod range;

use tracing::debug;

pub use algorithms::decompose::decompose;
pub use algorithms::explicit_stack::decompose_with_stack;
pub use algorithms::merge::merge;
pub use range::Range;

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub enum Decomposition {
    #[default]
    Recursive,
    ExplicitStack,
}

pub const ALL_DECOMPOSITIONS: [Decomposition; 2] =
    [Decomposition::Recursive, Decomposition::ExplicitStack];

pub fn all_decompositions() -> &'static [Decomposition] {
    &ALL_DECOMPOSITIONS
}

pub fn decomposition_name(strategy: Decomposition) -> &'static str {
    match strategy {
        Decomposition::Recursive => "recursive",
        Decomposition::ExplicitStack => "explicit_stack",
    }
}

/// Sorts `data` ascending in place. `None` is accepted and left alone.
pub fn sort(data: Option<&mut [i64]>) {
    if let Some(data) = data {
        sort_slice(data);
    }
}

pub fn sort_slice(data: &mut [i64]) {
    sort_i64(Decomposition::default(), data);
}

pub fn sort_i64(strategy: Decomposition, data: &mut [i64]) {
    debug!(
        len = data.len(),
        strategy = decomposition_name(strategy),
        "merge sort"
    );

    let Some(range) = Range::full(data.len()) else {
        return;
    };
    match strategy {
        Decomposition::Recursive => decompose(data, range),
        Decomposition::ExplicitStack => decompose_with_stack(data, range),
    }
}
