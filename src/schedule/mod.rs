pub mod naver;
pub mod provider;

pub use naver::NaverSchedule;
pub use provider::GameProvider;
