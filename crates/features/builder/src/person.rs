use motif_derive::entity;

/// A contact record, the smallest example of chained configuration.
#[entity]
pub struct Person {
    name: String,
    age: u32,
    address: String,
}
