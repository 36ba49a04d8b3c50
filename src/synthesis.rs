//! 辞書合成エンジン
//!
//! このモジュールは、ベース語彙の分類と構文生成カタログを束ねて、
//! ホストトークナイザに渡す補助辞書エントリの集合を導出します。
//! 合成は決定的な純粋変換であり、必要なクラスが空であっても失敗せず、
//! 単に生成されるエントリが減るだけです（ベストエフォート方針）。
//!
//! 分類はベース語彙全体の走査を要する支配的なコストのため、
//! [`SynthesisCache`]によるスナップショット単位のメモ化を提供します。

pub mod classify;
pub(crate) mod compose;
pub(crate) mod constructions;

use hashbrown::HashSet;
use sha2::{Digest, Sha256};

use crate::entry::LexEntry;
use crate::synthesis::classify::{ClassifiedLexicon, MorphemeClass};

/// 合成エントリの単語コストから引かれるバイアス
///
/// ラティス上で複合全体の経路が、同じ区間を細切れに分割する経路より
/// 必ず安くなるようにするための固定値です。終端の生成器でちょうど1回
/// 適用されます。
pub const COMPOUND_COST_BIAS: i16 = 10_000;

/// ベース語彙から補助辞書エントリの集合を合成します。
///
/// 分類を1回行い、生成カタログを依存順に駆動して、終端生成器の出力を
/// 値等価性で重複排除した集合として返します。
///
/// # 引数
///
/// * `lexicon` - ベース語彙のスナップショット
///
/// # 戻り値
///
/// 合成されたエントリの集合。順序は持ちません。
pub fn synthesize(lexicon: &[LexEntry]) -> HashSet<LexEntry> {
    synthesize_classified(&ClassifiedLexicon::new(lexicon))
}

fn synthesize_classified(classes: &ClassifiedLexicon) -> HashSet<LexEntry> {
    use MorphemeClass::*;

    // 中間エントリ
    let masen =
        constructions::polite_negative(classes.class(AuxiliaryMasu), classes.class(AuxiliaryNegation));
    let predicates =
        constructions::negative_predicate(classes.class(AdjectiveNai), classes.class(VerbAru), &masen);
    let compounds = constructions::light_verb_negative(
        classes.class(VerbNaru),
        classes.class(VerbIku),
        classes.class(VerbIkeru),
        classes.class(AuxiliaryNegation),
        &masen,
    );

    // 最終エントリ
    let mut entries = HashSet::new();
    entries.extend(constructions::volitional_copula(
        classes.class(CopulaIrrealis),
        classes.class(AuxiliaryU),
    ));
    entries.extend(constructions::obligatory_negative(
        classes.class(DependentNounHazu),
        &predicates,
        classes.class(VerbAru),
    ));
    entries.extend(constructions::epistemic(
        classes.class(SentenceFinalKa),
        classes.class(AuxiliaryNegation),
    ));
    entries.extend(constructions::obligation(
        classes.class(AuxiliaryNegation),
        classes.class(ParticleTe),
        &compounds,
    ));
    entries
}

/// 語彙スナップショットの内容指紋を計算します。
pub(crate) fn fingerprint(lexicon: &[LexEntry]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    for entry in lexicon {
        hasher.update(entry.surface.as_bytes());
        hasher.update(b"\x1f");
        hasher.update(entry.left_id.to_le_bytes());
        hasher.update(entry.right_id.to_le_bytes());
        hasher.update(entry.cost.to_le_bytes());
        hasher.update(entry.part_of_speech.as_bytes());
        hasher.update(b"\x1f");
        hasher.update(entry.infl_type.as_bytes());
        hasher.update(b"\x1f");
        hasher.update(entry.infl_form.as_bytes());
        hasher.update(b"\x1f");
        hasher.update(entry.base_form.as_bytes());
        hasher.update(b"\x1f");
        hasher.update(entry.reading.as_bytes());
        hasher.update(b"\x1f");
        hasher.update(entry.phonetic.as_bytes());
        hasher.update(b"\x1e");
    }
    hasher.finalize().into()
}

/// 合成結果のメモ化キャッシュ
///
/// 呼び出し側が構築して保持する明示的なハンドルです。スナップショットの
/// SHA-256指紋をキーとして、同一内容の語彙に対する再計算を避けます。
/// 再計算は冪等なので、キャッシュを破棄しても結果は変わりません。
///
/// 返される集合は読み取り専用の値として自由に共有できます。並行環境では
/// 合成を1回済ませた後、結果を不変値として配布してください。
#[derive(Default)]
pub struct SynthesisCache {
    fingerprint: Option<[u8; 32]>,
    entries: HashSet<LexEntry>,
}

impl SynthesisCache {
    /// 空のキャッシュを作成します。
    pub fn new() -> Self {
        Self::default()
    }

    /// スナップショットに対応する合成結果を返します。
    ///
    /// 前回と同一内容のスナップショットであれば、保持している結果を
    /// そのまま返します。内容が変わっていれば再合成します。
    ///
    /// # 引数
    ///
    /// * `lexicon` - ベース語彙のスナップショット
    pub fn entries(&mut self, lexicon: &[LexEntry]) -> &HashSet<LexEntry> {
        let fp = fingerprint(lexicon);
        if self.fingerprint != Some(fp) {
            self.entries = synthesize(lexicon);
            self.fingerprint = Some(fp);
        }
        &self.entries
    }
}
