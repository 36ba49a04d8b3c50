//! 辞書エントリの表現モジュール
//!
//! このモジュールは、ホスト形態素解析器の語彙エントリを表す10フィールドの
//! レコード型と、ipadic形式CSVの読み書きを提供します。合成エンジンの入力と
//! 出力はどちらもこのレコード型で表現されます。

use std::io::Write;

use csv_core::ReadFieldResult;

use crate::errors::{AbclexError, Result};

/// 論理フィールド数（CSV出力の並び順と一致）
const NUM_RECORD_FIELDS: usize = 10;

/// ipadic形式CSVの物理フィールド数（品詞階層が4フィールドに展開される）
const NUM_CSV_FIELDS: usize = 13;

/// 形態素の辞書エントリ
///
/// ホストのラティストークナイザが扱う語彙レコードをそのまま写した不変の値型です。
/// 同一性はフィールドの値のみで決まり、合成エンジンの重複排除は
/// この値等価性に基づきます。
///
/// `left_id`と`right_id`はホスト側の接続コスト表を指す不透明な識別子であり、
/// このライブラリは値を解釈せず、複製または継承するだけです。
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LexEntry {
    /// 表層形
    pub surface: String,

    /// 左文脈ID（不透明）
    pub left_id: u16,

    /// 右文脈ID（不透明）
    pub right_id: u16,

    /// 単語コスト。小さいほど優先されます
    pub cost: i16,

    /// カンマ区切りの品詞階層（例: `名詞,非自立,一般,*`）
    pub part_of_speech: String,

    /// 活用型
    pub infl_type: String,

    /// 活用形
    pub infl_form: String,

    /// 基本形（見出し語）
    pub base_form: String,

    /// 読み（カタカナ）
    pub reading: String,

    /// 発音（カタカナ）
    pub phonetic: String,
}

impl LexEntry {
    /// 位置順の10フィールドから新しいエントリを構築します。
    ///
    /// 外部の形態素解析器が持つ内部表現を仮定せず、汎用的な文字列タプルを
    /// 受け取るための構築子です。フィールドの並びは宣言順
    /// （表層形、左ID、右ID、コスト、品詞、活用型、活用形、基本形、読み、発音）です。
    ///
    /// # 引数
    ///
    /// * `fields` - 10要素の文字列フィールド列
    ///
    /// # エラー
    ///
    /// フィールド数が10でない場合、または数値フィールドが解析できない場合に
    /// エラーを返します。
    pub fn from_record(fields: &[&str]) -> Result<Self> {
        if fields.len() != NUM_RECORD_FIELDS {
            return Err(AbclexError::invalid_argument(
                "fields",
                format!(
                    "a lexical record must have {} fields, got {}",
                    NUM_RECORD_FIELDS,
                    fields.len()
                ),
            ));
        }
        Ok(Self {
            surface: fields[0].trim().to_string(),
            left_id: fields[1].trim().parse()?,
            right_id: fields[2].trim().parse()?,
            cost: fields[3].trim().parse()?,
            part_of_speech: fields[4].trim().to_string(),
            infl_type: fields[5].trim().to_string(),
            infl_form: fields[6].trim().to_string(),
            base_form: fields[7].trim().to_string(),
            reading: fields[8].trim().to_string(),
            phonetic: fields[9].trim().to_string(),
        })
    }

    /// ipadic形式のCSVデータからエントリ列を構築します。
    ///
    /// 1行が1レコードに対応し、各行は13フィールド
    /// （表層形、左ID、右ID、コスト、品詞4階層、活用型、活用形、基本形、読み、発音）
    /// を持ちます。品詞の4フィールドはカンマで連結されて
    /// [`part_of_speech`](LexEntry::part_of_speech)に格納されます。
    /// 各フィールドは前後の空白を除去するため、[`dump_csv`]の出力を
    /// そのまま読み戻せます。
    ///
    /// 空行は無視されます。表層形が空の行は警告を出力してスキップされます。
    ///
    /// # 引数
    ///
    /// * `bytes` - CSVデータ
    /// * `name` - エラー報告に使用する入力名
    ///
    /// # エラー
    ///
    /// フィールド数が13でない行、または数値フィールドが解析できない行が
    /// ある場合にエラーを返します。
    pub fn from_csv(bytes: &[u8], name: &'static str) -> Result<Vec<Self>> {
        // 改行で終端されていない最終レコードを単純に扱うための正規化
        let owned: Vec<u8>;
        let mut bytes = if !bytes.is_empty() && !bytes.ends_with(b"\n") {
            owned = {
                let mut v = bytes.to_vec();
                v.push(b'\n');
                v
            };
            owned.as_slice()
        } else {
            bytes
        };

        let mut entries = vec![];
        let mut rdr = csv_core::Reader::new();
        let mut output = [0; 4096];
        let mut fields: Vec<String> = Vec::with_capacity(NUM_CSV_FIELDS);

        loop {
            let (result, nin, nout) = rdr.read_field(bytes, &mut output);
            match result {
                ReadFieldResult::InputEmpty => break,
                ReadFieldResult::OutputFull => {
                    return Err(AbclexError::invalid_format(name, "Field too large"));
                }
                ReadFieldResult::Field { record_end } => {
                    fields.push(std::str::from_utf8(&output[..nout])?.trim().to_string());
                    if record_end {
                        // 空行
                        if fields.len() != 1 || !fields[0].is_empty() {
                            if let Some(entry) = Self::from_csv_fields(&fields, name)? {
                                entries.push(entry);
                            }
                        }
                        fields.clear();
                    }
                }
                ReadFieldResult::End => break,
            }
            bytes = &bytes[nin..];
        }
        Ok(entries)
    }

    fn from_csv_fields(fields: &[String], name: &'static str) -> Result<Option<Self>> {
        if fields.len() != NUM_CSV_FIELDS {
            let msg = format!(
                "A csv row of lexicon must have {} fields, got {}: {:?}",
                NUM_CSV_FIELDS,
                fields.len(),
                fields.join(","),
            );
            return Err(AbclexError::invalid_format(name, msg));
        }
        if fields[0].is_empty() {
            eprintln!("Skipped an empty surface, {:?}", fields.join(","));
            return Ok(None);
        }
        Ok(Some(Self {
            surface: fields[0].clone(),
            left_id: fields[1].parse()?,
            right_id: fields[2].parse()?,
            cost: fields[3].parse()?,
            part_of_speech: fields[4..8].join(","),
            infl_type: fields[8].clone(),
            infl_form: fields[9].clone(),
            base_form: fields[10].clone(),
            reading: fields[11].clone(),
            phonetic: fields[12].clone(),
        }))
    }

    /// エントリを1行のCSVとして整形します。
    ///
    /// 10個の論理フィールドを宣言順に`", "`で連結します。
    /// [`part_of_speech`](LexEntry::part_of_speech)に含まれるカンマにより、
    /// 出力はipadic形式の13フィールドのワイヤ形式と一致します。
    pub fn to_csv_row(&self) -> String {
        format!(
            "{}, {}, {}, {}, {}, {}, {}, {}, {}, {}",
            self.surface,
            self.left_id,
            self.right_id,
            self.cost,
            self.part_of_speech,
            self.infl_type,
            self.infl_form,
            self.base_form,
            self.reading,
            self.phonetic,
        )
    }

    /// 表記上の断片を末尾に付加した新しいエントリを派生します。
    ///
    /// `surface`と`base_form`には`fragment`が、`reading`と`phonetic`には
    /// それぞれのカナ断片が付加されます。接続IDとコスト、文法情報は
    /// 変更されません。元の値は変更されず、新しい値が返ります。
    ///
    /// # 引数
    ///
    /// * `fragment` - 表層形・基本形に付加する断片
    /// * `reading` - 読みに付加するカナ断片
    /// * `phonetic` - 発音に付加するカナ断片
    #[must_use]
    pub fn suffixed(&self, fragment: &str, reading: &str, phonetic: &str) -> Self {
        let mut entry = self.clone();
        entry.surface.push_str(fragment);
        entry.base_form.push_str(fragment);
        entry.reading.push_str(reading);
        entry.phonetic.push_str(phonetic);
        entry
    }
}

/// エントリ列をCSVとして書き出します。
///
/// 1レコードを1行として、[`LexEntry::to_csv_row`]の形式で出力します。
/// ホストトークナイザの補助辞書（ユーザー辞書）としての読み込みや、
/// 診断用ダンプに使用できます。
///
/// # 引数
///
/// * `entries` - 出力するエントリ列
/// * `wtr` - 書き込み先のライター
///
/// # エラー
///
/// 書き込み中にI/Oエラーが発生した場合にエラーを返します。
pub fn dump_csv<'a, I, W>(entries: I, mut wtr: W) -> Result<()>
where
    I: IntoIterator<Item = &'a LexEntry>,
    W: Write,
{
    for entry in entries {
        writeln!(wtr, "{}", entry.to_csv_row())?;
    }
    Ok(())
}
