use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "truffle")]
#[command(about = "Truffle ARカード変換データ取得ツール", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 変換データと画像を取得してサマリーを表示
    Refresh {
        /// プラットフォーム（デフォルト: 設定値）
        #[arg(short, long)]
        platform: Option<String>,

        /// 画像(<id>.png)とtransformations.jsonの出力先
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// 画像IDの変換設定をJSONで表示
    Lookup {
        /// 画像ID
        #[arg(required = true)]
        image_id: i64,

        /// プラットフォーム（デフォルト: 設定値）
        #[arg(short, long)]
        platform: Option<String>,
    },

    /// 設定管理
    Config {
        /// 接続先ホストを設定
        #[arg(long)]
        set_host: Option<String>,

        /// 接続先ポートを設定
        #[arg(long)]
        set_port: Option<u16>,

        /// プラットフォームを設定
        #[arg(long)]
        set_platform: Option<String>,

        /// 平文接続（ローカル開発サーバー用）
        #[arg(long)]
        plaintext: Option<bool>,

        /// 現在の設定を表示
        #[arg(long)]
        show: bool,
    },

    /// 画像キャッシュ管理
    Cache {
        /// キャッシュを削除
        #[arg(long)]
        clear: bool,

        /// キャッシュ情報を表示
        #[arg(long)]
        info: bool,
    },
}
