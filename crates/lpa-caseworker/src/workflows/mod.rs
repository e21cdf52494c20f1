pub mod attorneys;
