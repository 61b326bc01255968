//! Checkout Handlers

pub(crate) mod create;
