//! Progress - ナビゲーション用プログレスインジケータ
//!
//! `ProgressIndicator` はアプリ起動時に 1 度だけ作り、参照（clone）で配る
//! コンテキストオブジェクトです。グローバルな static は使いません。
//!
//! # 状態遷移
//! - Idle --start()--> RampUp --stop()--> RampDown --(100 到達)--> Idle
//! - RampDown --start()--> RampUp（仕上げアニメーションは破棄）
//!
//! 書き込みは indicator（とその tick）だけ。読み手は `state()` か `subscribe()` を使います。

mod indicator;
mod timer;

pub use self::indicator::ProgressIndicator;
