//! カテゴリ記法の再帰下降パーサ
//!
//! 文法（上位規則から）:
//!
//! ```text
//! Category := Backward
//! Backward := Forward ('\' Forward)*
//! Forward  := Atom ('/' Atom)*
//! Atom     := Base | '(' Category ')'
//! Base     := '(' ')' '\' '/' 以外の1文字以上
//! ```
//!
//! 連続する同方向のスラッシュは左結合で畳み込まれます。すなわち、
//! 構築済みの木が新しいノードのconsequenceとなり、次のオペランドが
//! antecedentになります。この畳み込み方向が変換後の木構造を一意に
//! 決定します。

use std::iter::Peekable;
use std::str::CharIndices;

use crate::category::Category;
use crate::errors::{AbclexError, Result};

/// 原子カテゴリに使用できない区切り文字
const fn is_delimiter(c: char) -> bool {
    matches!(c, '(' | ')' | '\\' | '/')
}

/// カテゴリラベルを解析して抽象構文木を構築します。
///
/// # 引数
///
/// * `text` - スラッシュ記法のカテゴリラベル
///
/// # エラー
///
/// ラベル全体が文法に一致しない場合、違反箇所のバイト位置を含む
/// [`CategorySyntax`](AbclexError::CategorySyntax)を返します。
pub fn parse_category(text: &str) -> Result<Category> {
    let mut parser = Parser::new(text);
    let category = parser.backward()?;
    if let Some(&(pos, c)) = parser.chars.peek() {
        return Err(AbclexError::category_syntax(
            pos,
            format!("unexpected character {c:?}"),
        ));
    }
    Ok(category)
}

struct Parser<'a> {
    len: usize,
    chars: Peekable<CharIndices<'a>>,
}

impl<'a> Parser<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            len: text.len(),
            chars: text.char_indices().peekable(),
        }
    }

    /// Backward := Forward ('\' Forward)*
    fn backward(&mut self) -> Result<Category> {
        let mut category = self.forward()?;
        while self.eat('\\') {
            let antecedent = self.forward()?;
            category = Category::Left {
                antecedent: Box::new(antecedent),
                consequence: Box::new(category),
            };
        }
        Ok(category)
    }

    /// Forward := Atom ('/' Atom)*
    fn forward(&mut self) -> Result<Category> {
        let mut category = self.atom()?;
        while self.eat('/') {
            let antecedent = self.atom()?;
            category = Category::Right {
                antecedent: Box::new(antecedent),
                consequence: Box::new(category),
            };
        }
        Ok(category)
    }

    /// Atom := Base | '(' Category ')'
    fn atom(&mut self) -> Result<Category> {
        if self.eat('(') {
            let category = self.backward()?;
            if !self.eat(')') {
                let pos = self.position();
                return Err(AbclexError::category_syntax(pos, "expected ')'"));
            }
            return Ok(category);
        }
        self.base()
    }

    /// Base := 区切り文字以外の1文字以上
    ///
    /// 素性括弧 `[` `]` はラベルに格納する前に除去されます
    /// （例: `S[m]` → `Sm`）。他の文字は変更されません。
    fn base(&mut self) -> Result<Category> {
        let mut label = String::new();
        let mut consumed = false;
        while let Some(&(_, c)) = self.chars.peek() {
            if is_delimiter(c) {
                break;
            }
            self.chars.next();
            consumed = true;
            if c != '[' && c != ']' {
                label.push(c);
            }
        }
        if !consumed {
            let pos = self.position();
            return Err(AbclexError::category_syntax(
                pos,
                "expected an atomic category",
            ));
        }
        Ok(Category::Base(label))
    }

    fn eat(&mut self, expected: char) -> bool {
        if matches!(self.chars.peek(), Some(&(_, c)) if c == expected) {
            self.chars.next();
            true
        } else {
            false
        }
    }

    fn position(&mut self) -> usize {
        self.chars.peek().map_or(self.len, |&(pos, _)| pos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nested_parentheses() {
        let parsed = parse_category("((A))").unwrap();
        assert_eq!(parsed, Category::Base("A".to_string()));
    }

    #[test]
    fn test_error_reports_byte_position() {
        let err = parse_category("AB)").unwrap_err();
        match err {
            AbclexError::CategorySyntax(e) => {
                assert_eq!(e.pos, 2);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_error_at_end_of_input() {
        let err = parse_category("A/").unwrap_err();
        match err {
            AbclexError::CategorySyntax(e) => {
                assert_eq!(e.pos, 2);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_multibyte_labels() {
        let parsed = parse_category("NP名詞/PP").unwrap();
        assert_eq!(parsed.to_abct(), "<NP名詞/PP>");
    }

    #[test]
    fn test_stripping_can_empty_a_label() {
        // 素性括弧のみのトークンは消費されるが、ラベルは空になる
        assert_eq!(parse_category("[]").unwrap(), Category::Base(String::new()));
    }
}
