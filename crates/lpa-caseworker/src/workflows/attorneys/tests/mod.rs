pub(crate) mod common;
mod wizard;
