pub(crate) mod body;
pub(crate) mod controls;
pub(crate) mod initial_parameters;
pub(crate) mod system;
pub(crate) mod units;
