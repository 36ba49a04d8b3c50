//! 形態素の分類モジュール
//!
//! このモジュールは、ベース語彙を合成エンジンが参照する名前付きクラスへ
//! 振り分けます。分類は宣言的な規則表に基づく一度きりの走査で行われ、
//! 入力順を保存したスナップショットを生成します。述語に一致する
//! エントリが存在しないクラスは空のスライスとなり、エラーにはなりません。

use std::sync::LazyLock;

use hashbrown::HashMap;
use regex::Regex;

use crate::entry::LexEntry;

/// 合成エンジンが参照する形態素クラス
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MorphemeClass {
    /// 「はず・ハズ・筈」（名詞，非自立）
    DependentNounHazu,

    /// 終助詞「か」
    SentenceFinalKa,

    /// 「ない・無い」（形容詞）
    AdjectiveNai,

    /// 否定の助動詞「ん」「ない」「ぬ」（特殊・ヌ活用）
    AuxiliaryNegation,

    /// 丁寧の助動詞「ます」
    AuxiliaryMasu,

    /// 存在動詞「ある・有る」（自立）
    VerbAru,

    /// 補助動詞「なる・成る」
    VerbNaru,

    /// 補助動詞「いく・行く」
    VerbIku,

    /// 補助動詞「いける・行ける」
    VerbIkeru,

    /// 接続助詞「て・で」
    ParticleTe,

    /// 助動詞「う」
    AuxiliaryU,

    /// 未然形のコピュラ「だろ・でしょ」
    CopulaIrrealis,
}

/// 分類規則。パターンはすべて先頭アンカー付きで解釈されます。
/// 同一クラスに複数の行があれば選言として扱われます。
struct ClassRule {
    class: MorphemeClass,
    base_form: &'static str,
    part_of_speech: Option<&'static str>,
    infl_type: Option<&'static str>,
    infl_form: Option<&'static str>,
}

const CLASS_RULES: &[ClassRule] = &[
    ClassRule {
        class: MorphemeClass::DependentNounHazu,
        base_form: r"^(はず|ハズ|筈)$",
        part_of_speech: Some(r"^名詞,非自立"),
        infl_type: None,
        infl_form: None,
    },
    ClassRule {
        class: MorphemeClass::SentenceFinalKa,
        base_form: r"^か$",
        part_of_speech: None,
        infl_type: None,
        infl_form: None,
    },
    ClassRule {
        class: MorphemeClass::AdjectiveNai,
        base_form: r"^(ない|無い)$",
        part_of_speech: Some(r"^形容詞"),
        infl_type: None,
        infl_form: None,
    },
    ClassRule {
        class: MorphemeClass::AuxiliaryNegation,
        base_form: r"^ん$",
        part_of_speech: None,
        infl_type: None,
        infl_form: None,
    },
    ClassRule {
        class: MorphemeClass::AuxiliaryNegation,
        base_form: r"^ない$",
        part_of_speech: Some(r"^助動詞"),
        infl_type: None,
        infl_form: None,
    },
    ClassRule {
        class: MorphemeClass::AuxiliaryNegation,
        base_form: r"^ぬ$",
        part_of_speech: None,
        infl_type: Some(r"^特殊・ヌ"),
        infl_form: None,
    },
    ClassRule {
        class: MorphemeClass::AuxiliaryMasu,
        base_form: r"^ます",
        part_of_speech: Some(r"^助動詞"),
        infl_type: None,
        infl_form: None,
    },
    ClassRule {
        class: MorphemeClass::VerbAru,
        base_form: r"^(ある|有る)$",
        part_of_speech: Some(r"^動詞,自立"),
        infl_type: None,
        infl_form: None,
    },
    ClassRule {
        class: MorphemeClass::VerbNaru,
        base_form: r"^(なる|成る)$",
        part_of_speech: Some(r"^動詞,非自立"),
        infl_type: None,
        infl_form: None,
    },
    ClassRule {
        class: MorphemeClass::VerbIku,
        base_form: r"^(いく|行く)$",
        part_of_speech: Some(r"^動詞,非自立"),
        infl_type: None,
        infl_form: None,
    },
    ClassRule {
        class: MorphemeClass::VerbIkeru,
        base_form: r"^(いける|行ける)$",
        part_of_speech: Some(r"^動詞,非自立"),
        infl_type: None,
        infl_form: None,
    },
    ClassRule {
        class: MorphemeClass::ParticleTe,
        base_form: r"^(て|で)$",
        part_of_speech: Some(r"^助詞,接続助詞"),
        infl_type: None,
        infl_form: None,
    },
    ClassRule {
        class: MorphemeClass::AuxiliaryU,
        base_form: r"^う$",
        part_of_speech: Some(r"^助動詞"),
        infl_type: None,
        infl_form: None,
    },
    ClassRule {
        class: MorphemeClass::CopulaIrrealis,
        base_form: r"^(だ|です)$",
        part_of_speech: None,
        infl_type: None,
        infl_form: Some(r"^未然形"),
    },
];

struct CompiledRule {
    class: MorphemeClass,
    base_form: Regex,
    part_of_speech: Option<Regex>,
    infl_type: Option<Regex>,
    infl_form: Option<Regex>,
}

impl CompiledRule {
    fn matches(&self, entry: &LexEntry) -> bool {
        self.base_form.is_match(&entry.base_form)
            && self
                .part_of_speech
                .as_ref()
                .is_none_or(|re| re.is_match(&entry.part_of_speech))
            && self
                .infl_type
                .as_ref()
                .is_none_or(|re| re.is_match(&entry.infl_type))
            && self
                .infl_form
                .as_ref()
                .is_none_or(|re| re.is_match(&entry.infl_form))
    }
}

static COMPILED_RULES: LazyLock<Vec<CompiledRule>> = LazyLock::new(|| {
    CLASS_RULES
        .iter()
        .map(|rule| CompiledRule {
            class: rule.class,
            base_form: Regex::new(rule.base_form).unwrap(),
            part_of_speech: rule.part_of_speech.map(|p| Regex::new(p).unwrap()),
            infl_type: rule.infl_type.map(|p| Regex::new(p).unwrap()),
            infl_form: rule.infl_form.map(|p| Regex::new(p).unwrap()),
        })
        .collect()
});

/// 分類済みのベース語彙スナップショット
///
/// 1回の走査で全クラスを同時に計算します。各クラス内のエントリ順は
/// 入力順と一致し、再現可能な合成結果の前提になります。
pub struct ClassifiedLexicon {
    groups: HashMap<MorphemeClass, Vec<LexEntry>>,
}

impl ClassifiedLexicon {
    /// 語彙スナップショットを分類します。
    ///
    /// # 引数
    ///
    /// * `lexicon` - ベース語彙のエントリ列
    pub fn new(lexicon: &[LexEntry]) -> Self {
        let mut groups: HashMap<MorphemeClass, Vec<LexEntry>> = HashMap::new();
        for entry in lexicon {
            for rule in COMPILED_RULES.iter() {
                if rule.matches(entry) {
                    groups.entry(rule.class).or_default().push(entry.clone());
                }
            }
        }
        Self { groups }
    }

    /// 指定クラスのエントリ列を取得します。
    ///
    /// 一致するエントリが存在しなかったクラスには空のスライスを返します。
    #[inline(always)]
    pub fn class(&self, class: MorphemeClass) -> &[LexEntry] {
        self.groups.get(&class).map_or(&[], |entries| entries.as_slice())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(base_form: &str, pos: &str, infl_type: &str, infl_form: &str) -> LexEntry {
        LexEntry {
            surface: base_form.to_string(),
            left_id: 1,
            right_id: 1,
            cost: 100,
            part_of_speech: pos.to_string(),
            infl_type: infl_type.to_string(),
            infl_form: infl_form.to_string(),
            base_form: base_form.to_string(),
            reading: String::new(),
            phonetic: String::new(),
        }
    }

    #[test]
    fn test_classifies_hazu() {
        let lexicon = [
            entry("筈", "名詞,非自立,一般,*", "*", "*"),
            entry("はず", "名詞,非自立,一般,*", "*", "*"),
            entry("筈", "名詞,一般,*,*", "*", "*"),
        ];
        let classes = ClassifiedLexicon::new(&lexicon);
        let hazu = classes.class(MorphemeClass::DependentNounHazu);
        assert_eq!(hazu.len(), 2);
        assert_eq!(hazu[0].surface, "筈");
        assert_eq!(hazu[1].surface, "はず");
    }

    #[test]
    fn test_negation_auxiliary_disjunction() {
        let lexicon = [
            entry("ん", "助動詞,*,*,*", "不変化型", "基本形"),
            entry("ない", "助動詞,*,*,*", "特殊・ナイ", "基本形"),
            entry("ない", "形容詞,自立,*,*", "形容詞・アウオ段", "基本形"),
            entry("ぬ", "助動詞,*,*,*", "特殊・ヌ", "基本形"),
            entry("ぬ", "助動詞,*,*,*", "文語・ナリ", "基本形"),
        ];
        let classes = ClassifiedLexicon::new(&lexicon);
        let negation = classes.class(MorphemeClass::AuxiliaryNegation);
        assert_eq!(negation.len(), 3);
        assert_eq!(negation[0].base_form, "ん");
        assert_eq!(negation[1].part_of_speech, "助動詞,*,*,*");
        assert_eq!(negation[2].infl_type, "特殊・ヌ");
        // 形容詞の「ない」は別クラス
        assert_eq!(classes.class(MorphemeClass::AdjectiveNai).len(), 1);
    }

    #[test]
    fn test_masu_prefix_match() {
        let lexicon = [
            entry("ます", "助動詞,*,*,*", "特殊・マス", "未然形"),
            entry("ます", "動詞,自立,*,*", "五段・サ行", "基本形"),
        ];
        let classes = ClassifiedLexicon::new(&lexicon);
        assert_eq!(classes.class(MorphemeClass::AuxiliaryMasu).len(), 1);
    }

    #[test]
    fn test_copula_requires_irrealis_form() {
        let lexicon = [
            entry("だ", "助動詞,*,*,*", "特殊・ダ", "未然形"),
            entry("だ", "助動詞,*,*,*", "特殊・ダ", "基本形"),
            entry("です", "助動詞,*,*,*", "特殊・デス", "未然形"),
        ];
        let classes = ClassifiedLexicon::new(&lexicon);
        assert_eq!(classes.class(MorphemeClass::CopulaIrrealis).len(), 2);
    }

    #[test]
    fn test_empty_class_is_not_an_error() {
        let classes = ClassifiedLexicon::new(&[]);
        assert!(classes.class(MorphemeClass::VerbAru).is_empty());
    }

    #[test]
    fn test_preserves_input_order() {
        let lexicon = [
            entry("ある", "動詞,自立,*,*", "五段・ラ行", "基本形"),
            entry("有る", "動詞,自立,*,*", "五段・ラ行", "連用形"),
            entry("ある", "動詞,自立,*,*", "五段・ラ行", "未然形"),
        ];
        let classes = ClassifiedLexicon::new(&lexicon);
        let forms: Vec<_> = classes
            .class(MorphemeClass::VerbAru)
            .iter()
            .map(|e| e.infl_form.as_str())
            .collect();
        assert_eq!(forms, ["基本形", "連用形", "未然形"]);
    }
}
