#[motif_derive::entity(title = "A", title = "B")]
pub struct Car {
    make: String,
}

fn main() {}
