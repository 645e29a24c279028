use crate::mvi::Intent;

#[derive(Debug)]
pub enum LoadIntent {
    /// First `load` call of the session.
    Begin,

    /// The instantiation entry point resolved.
    Instantiated,

    /// Surface mount, script load or instantiation failed.
    Rejected { reason: String },
}

impl Intent for LoadIntent {}
