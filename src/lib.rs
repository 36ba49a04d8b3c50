//! # abclex
//!
//! abclexは、ABC Treebank向けの構文解析パイプラインを支える2つの独立した
//! 純粋変換を提供するライブラリです。
//!
//! ## 概要
//!
//! 汎用の形態素解析器は、日本語の多形態素文法構文（否定の連鎖、様相・
//! 認識的マーカー、義務表現、否定の条件形）をベース語彙だけでは正しく
//! 分割できません。このライブラリは、ベース語彙から言語学的制約の下で
//! 複合辞書エントリを合成し、ホストのラティストークナイザに補助辞書として
//! 渡せる形にします。
//!
//! また、外部CCGパーザが出力するスラッシュ記法のカテゴリラベルを、
//! ABC Treebankの完全括弧付き山括弧記法へ変換します。
//!
//! ## 主な機能
//!
//! - **辞書合成**: 分類規則表と構文生成カタログによる複合エントリの導出
//! - **コストバイアス**: 合成エントリを細切れの分割より必ず安くする固定バイアス
//! - **メモ化**: スナップショット指紋による合成結果の再利用
//! - **カテゴリ変換**: 再帰下降パーサによるカテゴリ代数の解析と山括弧記法への描画
//! - **木出力**: 導出木のABC Treebank形式（S式風）での書き出し
//!
//! ## 使用例
//!
//! ```
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use abclex::{synthesize, translate_category, LexEntry};
//!
//! let lexicon_csv = "筈,1313,1313,2685,名詞,非自立,一般,*,*,*,筈,ハズ,ハズ
//! ない,1139,1139,1745,形容詞,自立,*,*,形容詞・アウオ段,基本形,ない,ナイ,ナイ";
//!
//! let lexicon = LexEntry::from_csv(lexicon_csv.as_bytes(), "lex.csv")?;
//! let entries = synthesize(&lexicon);
//! assert_eq!(entries.len(), 8);
//!
//! let hazumonai = entries.iter().find(|e| e.surface == "筈もない").unwrap();
//! assert_eq!(hazumonai.base_form, "筈もない");
//! assert_eq!(hazumonai.reading, "ハズモナイ");
//! assert_eq!(hazumonai.cost, 1745 - 10000);
//! assert_eq!(hazumonai.left_id, 1313);
//!
//! assert_eq!(
//!     translate_category(r"(S[m]/S[m])/(S[p]\PP[s]\PP[o])")?,
//!     r"<<Sm/Sm>/<PPo\<PPs\Sp>>>"
//! );
//! # Ok(())
//! # }
//! ```

/// ABC Treebank形式の木出力
pub mod abct;

/// CGカテゴリの表現と記法変換
pub mod category;

/// 辞書エントリの表現とCSV入出力
pub mod entry;

/// エラー型の定義
pub mod errors;

/// 辞書合成エンジン
pub mod synthesis;

// Re-exports
pub use abct::{tree_to_string, wrap_root, write_tree, DerivationNode};
pub use category::{parse_category, translate_category, Category};
pub use entry::{dump_csv, LexEntry};
pub use errors::{AbclexError, Result};
pub use synthesis::classify::{ClassifiedLexicon, MorphemeClass};
pub use synthesis::{synthesize, SynthesisCache, COMPOUND_COST_BIAS};

/// このライブラリのバージョン番号
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
