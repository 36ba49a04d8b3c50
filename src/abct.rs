//! ABC Treebank形式の木出力
//!
//! このモジュールは、外部CCGパーザが返す導出木をS式風のABC Treebank形式で
//! 書き出します。各ノードのカテゴリラベルは出力前に
//! [`translate_category`]で山括弧記法へ変換されます。
//! 変換できないラベルがあれば出力全体が失敗します（部分出力なし）。

use std::io::Write;

use crate::category::translate_category;
use crate::errors::Result;

/// 外部CCGパーザの導出木に対するインタフェース型
///
/// 葉は表層語を持ち、句は子ノードの列を持ちます。このライブラリは
/// 木の構築を行わず、呼び出し側がパーザの出力から組み立てた木を
/// 受け取るだけです。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DerivationNode {
    /// 表層語を持つ葉ノード
    Leaf {
        /// 生のカテゴリラベル（スラッシュ記法）
        category: String,
        /// 表層語
        word: String,
    },

    /// 子ノードを持つ句ノード
    Phrase {
        /// 生のカテゴリラベル（スラッシュ記法）
        category: String,
        /// 子ノードの列
        children: Vec<DerivationNode>,
    },
}

impl DerivationNode {
    /// 葉ノードを作成します。
    pub fn leaf<S, T>(category: S, word: T) -> Self
    where
        S: Into<String>,
        T: Into<String>,
    {
        Self::Leaf {
            category: category.into(),
            word: word.into(),
        }
    }

    /// 句ノードを作成します。
    pub fn phrase<S>(category: S, children: Vec<DerivationNode>) -> Self
    where
        S: Into<String>,
    {
        Self::Phrase {
            category: category.into(),
            children,
        }
    }
}

/// 導出木をABC Treebank形式で書き出します。
///
/// 句は `(CAT 子 子 …)`、葉は `(CAT 語)` として出力されます。
/// CATは変換済みのカテゴリラベルです。
///
/// # 引数
///
/// * `node` - 出力する導出木
/// * `wtr` - 書き込み先のライター
///
/// # エラー
///
/// カテゴリラベルが解析できない場合、またはI/Oエラーが発生した場合に
/// エラーを返します。
pub fn write_tree<W>(node: &DerivationNode, mut wtr: W) -> Result<()>
where
    W: Write,
{
    write_node(node, &mut wtr)
}

fn write_node<W>(node: &DerivationNode, wtr: &mut W) -> Result<()>
where
    W: Write,
{
    match node {
        DerivationNode::Leaf { category, word } => {
            let cat = translate_category(category)?;
            write!(wtr, "({cat} {word})")?;
        }
        DerivationNode::Phrase { category, children } => {
            let cat = translate_category(category)?;
            write!(wtr, "({cat}")?;
            for child in children {
                write!(wtr, " ")?;
                write_node(child, wtr)?;
            }
            write!(wtr, ")")?;
        }
    }
    Ok(())
}

/// 導出木をABC Treebank形式の文字列として整形します。
///
/// # 引数
///
/// * `node` - 出力する導出木
///
/// # エラー
///
/// カテゴリラベルが解析できない場合にエラーを返します。
pub fn tree_to_string(node: &DerivationNode) -> Result<String> {
    let mut buf = vec![];
    write_tree(node, &mut buf)?;
    // 出力は write! で構築したUTF-8文字列のみ
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// 導出木をABC Treebankのルート包絡で包みます。
///
/// パーザの1解析結果を、確率コメントと文IDを伴う`TOP`句として包みます:
/// `(TOP (COMMENT {probability=…}) 木 (ID …))`
///
/// # 引数
///
/// * `tree` - 包む導出木
/// * `probability` - 解析結果に与えられた確率
/// * `id` - 文の識別子
pub fn wrap_root(tree: DerivationNode, probability: f64, id: &str) -> DerivationNode {
    DerivationNode::phrase(
        "TOP",
        vec![
            DerivationNode::leaf("COMMENT", format!("{{probability={probability}}}")),
            tree,
            DerivationNode::leaf("ID", id),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leaf_rendering() {
        let node = DerivationNode::leaf("NP", "太郎");
        assert_eq!(tree_to_string(&node).unwrap(), "(NP 太郎)");
    }

    #[test]
    fn test_phrase_rendering_translates_categories() {
        let node = DerivationNode::phrase(
            "S[m]",
            vec![
                DerivationNode::leaf("PP[s]", "太郎が"),
                DerivationNode::leaf(r"S[m]\PP[s]", "走る"),
            ],
        );
        assert_eq!(
            tree_to_string(&node).unwrap(),
            r"(Sm (PPs 太郎が) (<PPs\Sm> 走る))"
        );
    }

    #[test]
    fn test_wrap_root_envelope() {
        let tree = DerivationNode::leaf("S[m]", "走る");
        let wrapped = wrap_root(tree, 0.5, "7");
        assert_eq!(
            tree_to_string(&wrapped).unwrap(),
            "(TOP (COMMENT {probability=0.5}) (Sm 走る) (ID 7))"
        );
    }

    #[test]
    fn test_malformed_category_aborts_rendering() {
        let node = DerivationNode::phrase(
            "S[m]",
            vec![DerivationNode::leaf("PP[s]/", "太郎が")],
        );
        assert!(tree_to_string(&node).is_err());
    }
}
