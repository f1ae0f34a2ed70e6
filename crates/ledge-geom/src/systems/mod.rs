pub mod collision;
