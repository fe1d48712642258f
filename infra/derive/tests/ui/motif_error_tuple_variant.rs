#[motif_derive::motif_error]
pub enum DemoError {
    Internal(String),
}

fn main() {}
