pub mod airports;
pub mod dispatch;
pub mod mst;
pub mod route;
