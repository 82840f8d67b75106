pub mod goe;
