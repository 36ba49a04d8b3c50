//! 複合エントリの派生ビルダー
//!
//! このモジュールは、構成素の列から新しい複合辞書エントリを導出するための
//! ビルダーを提供します。表層形・基本形・読み・発音は構成素の対応フィールドの
//! 連結、左文脈IDは最左の構成素のもの、その他の文法情報は主要部（最右の
//! 構成素）から継承されます。

use crate::entry::LexEntry;
use crate::synthesis::COMPOUND_COST_BIAS;

/// 複合エントリを構成するリテラル接辞
///
/// 辞書に由来しない固定の断片（係助詞や「もしれ」など）を表します。
/// 基本形への寄与は常に表層形と同一です。
#[derive(Debug, Clone, Copy)]
pub(crate) struct Affix {
    /// 表層形（基本形への寄与を兼ねる）
    pub surface: &'static str,

    /// 読み（カタカナ）
    pub reading: &'static str,

    /// 発音（カタカナ）
    pub phonetic: &'static str,
}

/// 複合エントリのビルダー
///
/// 最左の構成素から開始し、後続の構成素や接辞を順に連結したうえで、
/// 主要部エントリに接合して新しい[`LexEntry`]を導出します。
/// 元のエントリは一切変更されません。
#[derive(Debug)]
pub(crate) struct Composition {
    surface: String,
    base_form: String,
    reading: String,
    phonetic: String,
    left_id: u16,
}

impl Composition {
    /// 最左の構成素からビルダーを開始します。
    pub fn begin(leading: &LexEntry) -> Self {
        Self {
            surface: leading.surface.clone(),
            base_form: leading.base_form.clone(),
            reading: leading.reading.clone(),
            phonetic: leading.phonetic.clone(),
            left_id: leading.left_id,
        }
    }

    /// 辞書エントリを構成素として連結します。
    #[must_use]
    pub fn entry(mut self, entry: &LexEntry) -> Self {
        self.surface.push_str(&entry.surface);
        self.base_form.push_str(&entry.base_form);
        self.reading.push_str(&entry.reading);
        self.phonetic.push_str(&entry.phonetic);
        self
    }

    /// リテラル接辞を構成素として連結します。
    #[must_use]
    pub fn affix(mut self, affix: &Affix) -> Self {
        self.surface.push_str(affix.surface);
        self.base_form.push_str(affix.surface);
        self.reading.push_str(affix.reading);
        self.phonetic.push_str(affix.phonetic);
        self
    }

    /// 主要部に接合し、中間複合エントリを導出します。
    ///
    /// 右文脈ID・品詞・活用情報・コストは主要部から変更なしに継承されます。
    /// 品詞と活用情報を再計算しないのは既知の制限です。
    pub fn attach(self, head: &LexEntry) -> LexEntry {
        self.build(head, head.cost)
    }

    /// 主要部に接合し、コストバイアスを適用した最終エントリを導出します。
    ///
    /// コストは主要部のコストから[`COMPOUND_COST_BIAS`]を引いた値になり、
    /// ラティス上で複合全体の経路が細切れの分割より必ず安くなります。
    /// バイアスは終端の構成でのみ、ちょうど1回適用されます。
    pub fn attach_final(self, head: &LexEntry) -> LexEntry {
        let cost = head.cost - COMPOUND_COST_BIAS;
        self.build(head, cost)
    }

    fn build(self, head: &LexEntry, cost: i16) -> LexEntry {
        LexEntry {
            surface: self.surface + &head.surface,
            left_id: self.left_id,
            right_id: head.right_id,
            cost,
            part_of_speech: head.part_of_speech.clone(),
            infl_type: head.infl_type.clone(),
            infl_form: head.infl_form.clone(),
            base_form: self.base_form + &head.base_form,
            reading: self.reading + &head.reading,
            phonetic: self.phonetic + &head.phonetic,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(
        surface: &str,
        ids: (u16, u16),
        cost: i16,
        base_form: &str,
        reading: &str,
    ) -> LexEntry {
        LexEntry {
            surface: surface.to_string(),
            left_id: ids.0,
            right_id: ids.1,
            cost,
            part_of_speech: "助動詞,*,*,*".to_string(),
            infl_type: "*".to_string(),
            infl_form: "基本形".to_string(),
            base_form: base_form.to_string(),
            reading: reading.to_string(),
            phonetic: reading.to_string(),
        }
    }

    #[test]
    fn test_attach_inherits_head_fields() {
        let mase = entry("ませ", (10, 11), 500, "ます", "マセ");
        let n = entry("ん", (20, 21), 300, "ん", "ン");
        let masen = Composition::begin(&mase).attach(&n);
        assert_eq!(masen.surface, "ません");
        assert_eq!(masen.base_form, "ますん");
        assert_eq!(masen.reading, "マセン");
        assert_eq!(masen.left_id, 10);
        assert_eq!(masen.right_id, 21);
        assert_eq!(masen.cost, 300);
        assert_eq!(masen.infl_form, "基本形");
    }

    #[test]
    fn test_attach_final_applies_bias_once() {
        let daro = entry("だろ", (30, 31), 800, "だ", "ダロ");
        let u = entry("う", (40, 41), 1200, "う", "ウ");
        let darou = Composition::begin(&daro).attach_final(&u);
        assert_eq!(darou.surface, "だろう");
        assert_eq!(darou.cost, 1200 - COMPOUND_COST_BIAS);
        assert_eq!(darou.left_id, 30);
    }

    #[test]
    fn test_affix_contributes_surface_to_base_form() {
        let hazu = entry("筈", (50, 51), 2685, "筈", "ハズ");
        let nai = entry("ない", (60, 61), 1745, "ない", "ナイ");
        let mo = Affix {
            surface: "も",
            reading: "モ",
            phonetic: "モ",
        };
        let compound = Composition::begin(&hazu).affix(&mo).attach_final(&nai);
        assert_eq!(compound.surface, "筈もない");
        assert_eq!(compound.base_form, "筈もない");
        assert_eq!(compound.reading, "ハズモナイ");
        assert_eq!(compound.phonetic, "ハズモナイ");
    }
}
