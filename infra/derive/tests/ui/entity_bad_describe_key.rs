#[motif_derive::entity]
pub struct Car {
    #[describe(name = "Brand")]
    make: String,
}

fn main() {}
