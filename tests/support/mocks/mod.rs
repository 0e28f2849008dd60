// tests/support/mocks/mod.rs
//! テストサポートモック再エクスポートモジュール
pub mod handlers;
pub mod validators;

// バリデータ
pub use validators::{
    BarrierValidator, FaultyValidator, FixedValidator, StalledValidator, TokenRecordingValidator,
    detail, name_required,
};

// ハンドラ
pub use handlers::{ArchiveThingHandler, CreateThingHandler, FindThingHandler};
