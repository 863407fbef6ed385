mod common;
mod mental;
