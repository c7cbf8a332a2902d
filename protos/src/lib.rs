//! カード変換 gRPC API の型定義
//!
//! `proto/card_transformation.proto` から生成したコードをそのままチェックインしている。
//! 再生成は `tonic_prost_build::configure().build_client(true).build_server(true)
//! .out_dir("src/v1").compile_protos(&["proto/card_transformation.proto"], &["proto"])`
//! （要 `protoc`）。パッケージ宣言がないので出力は `_.rs` になる。`card_transformation.rs` にリネームする。
//! 生成コードはアプリ側の型（`truffle_common::types`）とは分離し、変換は
//! `truffle_common::mapper` で行う。

pub mod external {
    pub use prost;
    pub use tonic;
}

// 生成コードには手を入れない
mod v1 {
    #![allow(clippy::all, clippy::pedantic)]

    #[path = "./card_transformation.rs"]
    pub mod card_transformation;
}

pub use v1::card_transformation::*;
