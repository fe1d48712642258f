#[motif_derive::entity]
pub struct Pair(u8, u8);

fn main() {}
