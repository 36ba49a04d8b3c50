//! エラー型の定義
//!
//! このモジュールは、abclexライブラリで使用されるすべてのエラー型を定義します。

use std::error::Error;
use std::fmt;

/// abclex専用のResult型
///
/// エラー型としてデフォルトで[`AbclexError`]を使用します。
pub type Result<T, E = AbclexError> = std::result::Result<T, E>;

/// abclexのエラー型
///
/// このライブラリで発生する可能性のあるすべてのエラーを表現します。
/// 各バリアントは特定のエラー条件に対応しています。
#[derive(Debug, thiserror::Error)]
pub enum AbclexError {
    /// 無効な引数エラー
    ///
    /// [`InvalidArgumentError`]のエラーバリアント。
    #[error(transparent)]
    InvalidArgument(InvalidArgumentError),

    /// 無効なフォーマットエラー
    ///
    /// [`InvalidFormatError`]のエラーバリアント。
    #[error(transparent)]
    InvalidFormat(InvalidFormatError),

    /// カテゴリ記法の構文エラー
    ///
    /// [`CategorySyntaxError`]のエラーバリアント。
    /// 解析できないカテゴリラベルは部分的な出力を持たず、常にこのエラーで失敗します。
    #[error(transparent)]
    CategorySyntax(CategorySyntaxError),

    /// 整数パースエラー
    ///
    /// [`ParseIntError`](std::num::ParseIntError)のエラーバリアント。
    #[error(transparent)]
    ParseInt(#[from] std::num::ParseIntError),

    /// UTF-8エンコーディングエラー
    ///
    /// [`std::str::Utf8Error`]のエラーバリアント。
    #[error(transparent)]
    Utf8(#[from] std::str::Utf8Error),

    /// I/Oエラー
    ///
    /// [`std::io::Error`]のエラーバリアント。
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl AbclexError {
    /// 無効な引数エラーを生成します
    ///
    /// # 引数
    ///
    /// * `arg` - 引数の名前
    /// * `msg` - エラーメッセージ
    pub(crate) fn invalid_argument<S>(arg: &'static str, msg: S) -> Self
    where
        S: Into<String>,
    {
        Self::InvalidArgument(InvalidArgumentError {
            arg,
            msg: msg.into(),
        })
    }

    /// 無効なフォーマットエラーを生成します
    ///
    /// # 引数
    ///
    /// * `arg` - フォーマット名
    /// * `msg` - エラーメッセージ
    pub(crate) fn invalid_format<S>(arg: &'static str, msg: S) -> Self
    where
        S: Into<String>,
    {
        Self::InvalidFormat(InvalidFormatError {
            arg,
            msg: msg.into(),
        })
    }

    /// カテゴリ構文エラーを生成します
    ///
    /// # 引数
    ///
    /// * `pos` - 入力文字列中のバイト位置
    /// * `msg` - エラーメッセージ
    pub(crate) fn category_syntax<S>(pos: usize, msg: S) -> Self
    where
        S: Into<String>,
    {
        Self::CategorySyntax(CategorySyntaxError {
            pos,
            msg: msg.into(),
        })
    }
}

/// 引数が無効な場合に使用されるエラー
#[derive(Debug)]
pub struct InvalidArgumentError {
    /// 引数の名前
    pub(crate) arg: &'static str,

    /// エラーメッセージ
    pub(crate) msg: String,
}

impl fmt::Display for InvalidArgumentError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "InvalidArgumentError: {}: {}", self.arg, self.msg)
    }
}

impl Error for InvalidArgumentError {}

/// 入力フォーマットが無効な場合に使用されるエラー
#[derive(Debug)]
pub struct InvalidFormatError {
    /// フォーマットの名前
    pub(crate) arg: &'static str,

    /// エラーメッセージ
    pub(crate) msg: String,
}

impl fmt::Display for InvalidFormatError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "InvalidFormatError: {}: {}", self.arg, self.msg)
    }
}

impl Error for InvalidFormatError {}

/// カテゴリラベルが文法に一致しない場合に使用されるエラー
#[derive(Debug)]
pub struct CategorySyntaxError {
    /// 入力文字列中のバイト位置
    pub(crate) pos: usize,

    /// エラーメッセージ
    pub(crate) msg: String,
}

impl fmt::Display for CategorySyntaxError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "CategorySyntaxError: byte {}: {}", self.pos, self.msg)
    }
}

impl Error for CategorySyntaxError {}
