// Frame-stepped input state, action bindings and their config file

pub mod input;
