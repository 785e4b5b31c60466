pub mod cw;
