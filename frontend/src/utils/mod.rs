pub mod navigation;
pub mod speech;
pub mod storage;
pub mod timer;
