pub(crate) mod bridge;
pub(crate) mod chrome;
pub(crate) mod controller;
pub(crate) mod window;
