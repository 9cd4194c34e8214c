pub mod physical;
