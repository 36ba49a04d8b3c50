//! 複合構文の生成カタログ
//!
//! このモジュールは、分類済みクラスから複合辞書エントリを導出する生成器の
//! 固定カタログを提供します。各生成器はスライスを受け取りエントリ列を返す
//! 純粋関数で、空の入力からは何も生成しません。生成器間の依存は
//! 非循環で、[`crate::synthesis::synthesize`]がトポロジカル順に駆動します。
//!
//! コストバイアスは終端の生成器（だろう・はず系・かもしれない・義務表現）
//! でのみ適用されます。中間生成器の出力はバイアスされません。

use crate::entry::LexEntry;
use crate::synthesis::compose::{Affix, Composition};

/// 「はず＋係助詞」の係助詞バリアント
const HAZU_CASE_AFFIXES: [Affix; 8] = [
    Affix {
        surface: "が",
        reading: "ガ",
        phonetic: "ガ",
    },
    Affix {
        surface: "ガ",
        reading: "ガ",
        phonetic: "ガ",
    },
    Affix {
        surface: "は",
        reading: "ハ",
        phonetic: "ワ",
    },
    Affix {
        surface: "ハ",
        reading: "ハ",
        phonetic: "ワ",
    },
    Affix {
        surface: "も",
        reading: "モ",
        phonetic: "モ",
    },
    Affix {
        surface: "モ",
        reading: "モ",
        phonetic: "モ",
    },
    Affix {
        surface: "の",
        reading: "ノ",
        phonetic: "ノ",
    },
    Affix {
        surface: "ノ",
        reading: "ノ",
        phonetic: "ノ",
    },
];

/// 「かもしれない」の「もしれ」バリアント
const MOSHIRE_AFFIXES: [Affix; 4] = [
    Affix {
        surface: "もしれ",
        reading: "モシレ",
        phonetic: "モシレ",
    },
    Affix {
        surface: "モシレ",
        reading: "モシレ",
        phonetic: "モシレ",
    },
    Affix {
        surface: "も知れ",
        reading: "モシレ",
        phonetic: "モシレ",
    },
    Affix {
        surface: "モ知レ",
        reading: "モシレ",
        phonetic: "モシレ",
    },
];

/// 「ては・でも」系の係助詞バリアント
const TE_TOPIC_AFFIXES: [Affix; 4] = [
    Affix {
        surface: "は",
        reading: "ハ",
        phonetic: "ワ",
    },
    Affix {
        surface: "ハ",
        reading: "ハ",
        phonetic: "ワ",
    },
    Affix {
        surface: "も",
        reading: "モ",
        phonetic: "モ",
    },
    Affix {
        surface: "モ",
        reading: "モ",
        phonetic: "モ",
    },
];

/// 丁寧否定「ません」を生成します。中間エントリ。
pub(crate) fn polite_negative(masu: &[LexEntry], negation: &[LexEntry]) -> Vec<LexEntry> {
    let mut out = vec![];
    // 「ましょう」になる未然ウ接続を除外
    for stem in masu.iter().filter(|e| e.infl_form.starts_with("未然形")) {
        for head in negation.iter().filter(|e| e.surface.starts_with('ん')) {
            out.push(Composition::begin(stem).attach(head));
        }
    }
    out
}

/// 否定述語「ない」「ありません」を生成します。中間エントリ。
pub(crate) fn negative_predicate(
    nai_adj: &[LexEntry],
    aru: &[LexEntry],
    masen: &[LexEntry],
) -> Vec<LexEntry> {
    let mut out: Vec<LexEntry> = nai_adj.to_vec();
    // 「あって」になる連用テ接続を除外
    for verb in aru.iter().filter(|e| e.infl_form.starts_with("連用形")) {
        for head in masen {
            out.push(Composition::begin(verb).attach(head));
        }
    }
    out
}

/// 推量のコピュラ「だろう」「でしょう」を生成します。最終エントリ。
pub(crate) fn volitional_copula(copulas: &[LexEntry], u: &[LexEntry]) -> Vec<LexEntry> {
    let mut out = vec![];
    for copula in copulas {
        for head in u {
            out.push(Composition::begin(copula).attach_final(head));
        }
    }
    out
}

/// 「はずがない」「はずもない」「はずがありません」等を生成します。最終エントリ。
///
/// 否定述語に加えて存在動詞そのもの（「はずがある」等）も主要部になります。
pub(crate) fn obligatory_negative(
    hazu: &[LexEntry],
    predicates: &[LexEntry],
    aru: &[LexEntry],
) -> Vec<LexEntry> {
    let mut out = vec![];
    for noun in hazu {
        for case in &HAZU_CASE_AFFIXES {
            for head in predicates.iter().chain(aru) {
                out.push(Composition::begin(noun).affix(case).attach_final(head));
            }
        }
    }
    out
}

/// 認識的様相「かもしれない」「かもしれん」「かもしれぬ」を生成します。最終エントリ。
pub(crate) fn epistemic(ka: &[LexEntry], negation: &[LexEntry]) -> Vec<LexEntry> {
    let mut out = vec![];
    for particle in ka {
        for affix in &MOSHIRE_AFFIXES {
            for head in negation {
                out.push(Composition::begin(particle).affix(affix).attach_final(head));
            }
        }
    }
    out
}

/// 補助動詞の否定複合「ならない・ならぬ・ならん・なりません」
/// 「いけない・いかぬ・いかん・いけません」を生成します。中間エントリ。
///
/// 「いける」はない系、「いく」はぬ・ん系の主要部とだけ結合します。
pub(crate) fn light_verb_negative(
    naru: &[LexEntry],
    iku: &[LexEntry],
    ikeru: &[LexEntry],
    negation: &[LexEntry],
    masen: &[LexEntry],
) -> Vec<LexEntry> {
    let mut out = vec![];
    // ならない・ならぬ・ならん（「なろう」になる未然ウ接続を除外）
    for verb in naru.iter().filter(|e| e.infl_form.starts_with("未然形")) {
        for head in negation {
            out.push(Composition::begin(verb).attach(head));
        }
    }
    // なりません（「なって」になる連用テ接続を除外）
    for verb in naru.iter().filter(|e| e.infl_form.starts_with("連用形")) {
        for head in masen {
            out.push(Composition::begin(verb).attach(head));
        }
    }
    // いけない
    for verb in ikeru.iter().filter(|e| e.infl_form.starts_with("未然形")) {
        for head in negation
            .iter()
            .filter(|e| matches!(e.base_form.as_str(), "ない" | "無い"))
        {
            out.push(Composition::begin(verb).attach(head));
        }
    }
    // いかぬ・いかん
    for verb in iku.iter().filter(|e| e.infl_form.starts_with("未然形")) {
        for head in negation
            .iter()
            .filter(|e| matches!(e.base_form.as_str(), "ぬ" | "ん"))
        {
            out.push(Composition::begin(verb).attach(head));
        }
    }
    // いけません
    for verb in ikeru.iter().filter(|e| e.infl_form.starts_with("連用形")) {
        for head in masen {
            out.push(Composition::begin(verb).attach(head));
        }
    }
    out
}

/// 否定辞1エントリの条件形バリアントを列挙します。
///
/// 活用形に応じて0〜6個のバリアントを返します:
///
/// - 仮定縮約形（なきゃ・なけりゃ）: そのまま1個
/// - 仮定形（なけれ・ね）: 「ば」「バ」を付加して2個
/// - 基本形（ない・ん）: 「と」「ト」を付加して2個
/// - 連用テ接続（なく・なくっ): 「て」「テ」に任意で「は」「ハ」を続けて6個
/// - それ以外の活用形: 0個（エラーではありません）
pub(crate) fn conditional_negation(entry: &LexEntry) -> Vec<LexEntry> {
    let form = entry.infl_form.as_str();
    if form.starts_with("仮定") {
        if form.contains("縮約") {
            vec![entry.clone()]
        } else {
            vec![
                entry.suffixed("ば", "バ", "バ"),
                entry.suffixed("バ", "バ", "バ"),
            ]
        }
    } else if form.starts_with("基本") {
        vec![
            entry.suffixed("と", "ト", "ト"),
            entry.suffixed("ト", "ト", "ト"),
        ]
    } else if form.starts_with("連用テ接続") {
        let mut out = Vec::with_capacity(6);
        for te in ["て", "テ"] {
            out.push(entry.suffixed(te, "テ", "テ"));
            for (wa, reading, phonetic) in [("は", "ハ", "ワ"), ("ハ", "ハ", "ワ")] {
                let fragment = format!("{te}{wa}");
                let reading = format!("テ{reading}");
                let phonetic = format!("テ{phonetic}");
                out.push(entry.suffixed(&fragment, &reading, &phonetic));
            }
        }
        out
    } else {
        vec![]
    }
}

/// 義務表現「なければならない」系・「てはならない」系を生成します。最終エントリ。
///
/// 前部要素は否定辞の条件形バリアントと「て・で＋係助詞」の複合、
/// 主要部は[`light_verb_negative`]の出力です。
pub(crate) fn obligation(
    negation: &[LexEntry],
    te: &[LexEntry],
    compounds: &[LexEntry],
) -> Vec<LexEntry> {
    let mut prefixes = vec![];
    for entry in negation {
        prefixes.extend(conditional_negation(entry));
    }
    for particle in te {
        for topic in &TE_TOPIC_AFFIXES {
            prefixes.push(particle.suffixed(topic.surface, topic.reading, topic.phonetic));
        }
    }

    let mut out = vec![];
    for prefix in &prefixes {
        for head in compounds {
            out.push(Composition::begin(prefix).attach_final(head));
        }
    }
    out
}
