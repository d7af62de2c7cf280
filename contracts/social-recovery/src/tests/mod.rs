pub mod guardian_test;
pub mod storage_test;
