#[motif_derive::entity]
pub struct Order {
    build: u32,
}

fn main() {}
