#[motif_derive::entity]
pub struct Wrapper<T> {
    value: T,
}

fn main() {}
