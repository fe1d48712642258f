#[motif_derive::entity(heading = "Car Details:")]
pub struct Car {
    make: String,
}

fn main() {}
