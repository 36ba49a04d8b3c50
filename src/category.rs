//! CGカテゴリの表現と記法変換
//!
//! このモジュールは、外部CCGパーザが出力するスラッシュ記法のカテゴリラベルを
//! 抽象構文木として表現し、ABC Treebankの山括弧記法へ変換します。
//! 木の構造は入力の括弧を完全に解決した形であり、「グループ化」を表す
//! ノードは存在しません。

mod parser;

pub use parser::parse_category;

use crate::errors::Result;

/// CGカテゴリの抽象構文木
///
/// 1回のラベル変換の間だけ生存する値で、呼び出し間で共有される状態は
/// ありません。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Category {
    /// 原子カテゴリ。素性括弧`[` `]`は除去済みです（例: `S[m]` → `Sm`）
    Base(String),

    /// 後向き関手（`\`）。連続する逆スラッシュは左結合で畳み込まれます
    Left {
        /// 引数カテゴリ
        antecedent: Box<Category>,
        /// 結果カテゴリ
        consequence: Box<Category>,
    },

    /// 前向き関手（`/`）。連続するスラッシュは左結合で畳み込まれます
    Right {
        /// 引数カテゴリ
        antecedent: Box<Category>,
        /// 結果カテゴリ
        consequence: Box<Category>,
    },
}

impl Category {
    /// ABC Treebankの山括弧記法に変換します。
    ///
    /// すべての非終端ノードが入力の括弧の有無によらず山括弧で括られるため、
    /// 出力記法に優先順位の曖昧さはありません。全域関数であり、
    /// 同じ木からの出力は常にバイト単位で一致します。
    ///
    /// # 戻り値
    ///
    /// 山括弧記法の文字列
    pub fn to_abct(&self) -> String {
        let mut out = String::new();
        self.write_abct(&mut out);
        out
    }

    fn write_abct(&self, out: &mut String) {
        match self {
            Self::Base(label) => out.push_str(label),
            Self::Left {
                antecedent,
                consequence,
            } => {
                out.push('<');
                antecedent.write_abct(out);
                out.push('\\');
                consequence.write_abct(out);
                out.push('>');
            }
            Self::Right {
                antecedent,
                consequence,
            } => {
                out.push('<');
                consequence.write_abct(out);
                out.push('/');
                antecedent.write_abct(out);
                out.push('>');
            }
        }
    }
}

/// カテゴリラベルを解析し、ABC Treebank記法の文字列に変換します。
///
/// [`parse_category`]と[`Category::to_abct`]の合成です。
///
/// # 引数
///
/// * `text` - スラッシュ記法のカテゴリラベル
///
/// # エラー
///
/// ラベルが文法に一致しない場合に[`CategorySyntax`](crate::errors::AbclexError::CategorySyntax)を
/// 返します。部分的な出力は生成されません。
pub fn translate_category(text: &str) -> Result<String> {
    Ok(parse_category(text)?.to_abct())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base(label: &str) -> Category {
        Category::Base(label.to_string())
    }

    #[test]
    fn test_forward_is_left_associative() {
        let parsed = parse_category("A/B/C").unwrap();
        assert_eq!(
            parsed,
            Category::Right {
                antecedent: Box::new(base("C")),
                consequence: Box::new(Category::Right {
                    antecedent: Box::new(base("B")),
                    consequence: Box::new(base("A")),
                }),
            }
        );
        assert_eq!(parsed.to_abct(), "<<A/B>/C>");
    }

    #[test]
    fn test_backward_is_left_associative() {
        let parsed = parse_category(r"S[p]\PP[s]\PP[o]").unwrap();
        assert_eq!(
            parsed,
            Category::Left {
                antecedent: Box::new(base("PPo")),
                consequence: Box::new(Category::Left {
                    antecedent: Box::new(base("PPs")),
                    consequence: Box::new(base("Sp")),
                }),
            }
        );
        assert_eq!(parsed.to_abct(), r"<PPo\<PPs\Sp>>");
    }

    #[test]
    fn test_feature_brackets_are_stripped() {
        assert_eq!(parse_category("S[m]").unwrap(), base("Sm"));
    }

    #[test]
    fn test_atomic_label_passes_through() {
        assert_eq!(translate_category("TOP").unwrap(), "TOP");
    }

    #[test]
    fn test_backslash_binds_looser_than_slash() {
        // A/B\C は (A/B)\C と解釈される
        let parsed = parse_category(r"A/B\C").unwrap();
        assert_eq!(parsed.to_abct(), r"<C\<A/B>>");
    }

    #[test]
    fn test_parenthesized_subcategory() {
        let parsed = parse_category(r"A/(B\C)").unwrap();
        assert_eq!(parsed.to_abct(), r"<A/<B\C>>");
    }

    #[test]
    fn test_full_translation() {
        assert_eq!(
            translate_category(r"(S[m]/S[m])/(S[p]\PP[s]\PP[o])").unwrap(),
            r"<<Sm/Sm>/<PPo\<PPs\Sp>>>"
        );
    }

    #[test]
    fn test_rendering_is_deterministic() {
        let text = r"(S[m]/S[m])/(S[p]\PP[s]\PP[o])";
        assert_eq!(
            translate_category(text).unwrap(),
            translate_category(text).unwrap()
        );
    }

    #[test]
    fn test_malformed_labels_are_rejected() {
        for text in ["", "A/", "(A", "A)", "/A", "A//B", r"\A", "()"] {
            assert!(parse_category(text).is_err(), "accepted {text:?}");
        }
    }
}
